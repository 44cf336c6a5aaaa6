//! Module-level conversion
//!
//! Before any body is converted every declaration is registered under its
//! index. Duplicate names and a missing `Main` are reported together and stop
//! the conversion. Otherwise the output is a definition-lookup function that
//! starts from an empty default and is overridden once per declaration,
//! followed by the invocation of `Main` with its own parameter slots:
//!
//! ```text
//! (lambda id': PiIdentifier . pi_definition(0, zero))[0 -> pi_definition(n, body)]...,
//! identifier(main, [0, 1, ..., n - 1])
//! ```

use crate::converter::options::ConvertOptions;
use crate::converter::state::ConversionState;
use crate::errors::{Error, Errors};
use crate::parser::ast::{Module, ProcDecl, SourceLocation};

/// Name the entry-point declaration must have
pub const ENTRY_POINT: &str = "Main";

/// Convert `module` to an mCRL2 term with default formatting.
pub fn convert_module(module: &Module) -> Result<String, Errors> {
    convert_module_with(module, &ConvertOptions::default())
}

/// Convert `module` to an mCRL2 term.
pub fn convert_module_with(module: &Module, options: &ConvertOptions) -> Result<String, Errors> {
    let mut state = ConversionState::new(options);
    state.convert_module(module);

    let result = state.finish();
    match &result {
        Ok(output) => tracing::debug!(bytes = output.len(), "converted module"),
        Err(errors) => tracing::debug!(errors = errors.len(), "conversion failed"),
    }
    result
}

impl ConversionState {
    pub(crate) fn convert_module(&mut self, module: &Module) {
        let Some(main_index) = self.register_declarations(module) else {
            return;
        };

        self.write("(lambda id': PiIdentifier . pi_definition(0, zero))");
        for (index, decl) in module.declarations.iter().enumerate() {
            self.write("[");
            self.write_id(index);
            self.write(" -> ");
            self.convert_decl(decl);
            self.write("]");
        }

        self.write(",\n");
        self.write_indentation();
        self.write("identifier(");
        self.write_id(main_index);
        self.write(", [");
        let slots: Vec<usize> = (0..module.declarations[main_index].params.len()).collect();
        self.write_id_list(&slots);
        self.write("])");
    }

    /// Fill the declaration table; returns the index of `Main` if the module is well-formed.
    fn register_declarations(&mut self, module: &Module) -> Option<usize> {
        let mut main_index = None;
        let mut failed = false;

        for (index, decl) in module.declarations.iter().enumerate() {
            if self.declare(&decl.name, index).is_some() {
                self.error(Error::identifier(
                    decl.location,
                    "Duplicate process variable name",
                ));
                failed = true;
            }

            if decl.name.as_str() == ENTRY_POINT {
                main_index = Some(index);
            }
        }

        if main_index.is_none() {
            self.error(Error::identifier(
                SourceLocation::new(0, 0),
                "No starting process found; it should be called `Main`",
            ));
            failed = true;
        }

        if failed {
            None
        } else {
            main_index
        }
    }

    /// `pi_definition(<param count>, body)` with the parameters bound in order
    fn convert_decl(&mut self, decl: &ProcDecl) {
        let bindings: Vec<_> = decl.params.iter().map(|p| self.bind_name(p)).collect();

        self.write("pi_definition(");
        self.write_id(decl.params.len());
        self.write(",\n");
        self.convert_nested(&decl.body);
        self.write(")");

        for (param, binding) in decl.params.iter().zip(bindings).rev() {
            self.unbind_name(param, binding);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{parse_module, tokenize};

    fn module(source: &str) -> Module {
        parse_module(tokenize(source).unwrap()).unwrap()
    }

    #[test]
    fn test_minimal_module_layout() {
        let output = convert_module(&module("agent Main = tau . 0;")).unwrap();
        assert_eq!(
            output,
            "(lambda id': PiIdentifier . pi_definition(0, zero))[0 -> pi_definition(0,\n    tau_prefix(zero)\n)],\nidentifier(0, [])"
        );
    }

    #[test]
    fn test_main_invoked_with_own_slots() {
        let output = convert_module(&module("agent P = 0; agent Main(a, b, c) = P;")).unwrap();
        assert!(output.ends_with(",\nidentifier(1, [0, 1, 2])"));
        assert!(output.contains("[0 -> pi_definition(0,"));
        assert!(output.contains("[1 -> pi_definition(3,\n    identifier(0, [])\n)]"));
    }

    #[test]
    fn test_parameters_are_scoped_per_declaration() {
        let output = convert_module(&module(
            "agent Main(a) = P(a); agent P(x, y) = x'y . Main(y);",
        ))
        .unwrap();
        assert!(output.contains("identifier(1, [0])"));
        assert!(output.contains("output_prefix(0, 1,"));
        assert!(output.contains("identifier(0, [1])"));
    }

    #[test]
    fn test_parameter_of_one_declaration_is_unbound_in_another() {
        let errors = convert_module(&module("agent Main(a) = P; agent P = a'a . 0;")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.message == "Unbound name `a`"));
    }

    #[test]
    fn test_duplicates_reported_before_bodies() {
        let errors = convert_module(&module(
            "agent P = 0; agent Main = x'x . 0; agent P = 0; agent P = 0;",
        ))
        .unwrap_err();

        // The unbound `x` in Main's body is never reached.
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| e.message == "Duplicate process variable name"));
        let lines: Vec<_> = errors.iter().map(|e| e.location.column).collect();
        assert_eq!(lines, vec![35, 48]);
    }

    #[test]
    fn test_missing_main_does_not_hide_duplicates() {
        let errors = convert_module(&module("agent P = 0; agent P = 0;")).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_message("Duplicate process variable name"));
        assert!(errors.contains_message("No starting process found; it should be called `Main`"));
    }

    #[test]
    fn test_empty_module_has_no_main() {
        let errors = convert_module(&Module::default()).unwrap_err();
        assert_eq!(errors.len(), 1);
        let error = errors.iter().next().unwrap();
        assert_eq!(error.location, SourceLocation::new(0, 0));
    }

    #[test]
    fn test_custom_indentation() {
        let output = convert_module_with(
            &module("agent Main = 0 | 0;"),
            &ConvertOptions::default().with_indent("\t"),
        )
        .unwrap();
        assert!(output.contains("pi_definition(0,\n\tparallel_composition(\n\t\tzero,\n\t\tzero\n\t)\n)"));
    }
}
