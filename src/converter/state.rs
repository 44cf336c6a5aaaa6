//! Conversion state threaded through the tree walk
//!
//! [`ConversionState`] owns everything a single conversion run mutates: the
//! binding environment for names in lexical scope, the flat table of process
//! declarations, the accumulated errors and the output buffer with its
//! indentation depth.
//!
//! # Scope Discipline
//!
//! Binding a name allocates the next id from a counter and remembers the id
//! the name had before, if any. Unbinding restores that id (or removes the
//! name) and gives the id back to the counter. Scopes are opened and closed by
//! the recursion itself, so ids follow a stack discipline: the counter always
//! returns to its pre-scope value, and an inner binding hides an outer one only
//! until the inner scope closes.

use crate::converter::options::ConvertOptions;
use crate::errors::{Error, Errors};
use crate::parser::ast::{Identifier, SourceLocation};
use rustc_hash::FxHashMap;

/// Integer a bound name is translated to in the generated term
pub type NameId = usize;

/// What a name was bound to before a binding, so the binding can be undone
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Binding {
    pub id: NameId,
    shadowed: Option<NameId>,
}

/// Mutable context for one conversion run
#[derive(Debug)]
pub struct ConversionState {
    indentation: String,
    depth: usize,
    output: String,
    errors: Vec<Error>,
    names: FxHashMap<Identifier, NameId>,
    declarations: FxHashMap<Identifier, usize>,
    next_name: NameId,
}

impl ConversionState {
    pub fn new(options: &ConvertOptions) -> Self {
        Self {
            indentation: options.indent.clone(),
            depth: 0,
            output: String::new(),
            errors: Vec::new(),
            names: FxHashMap::default(),
            declarations: FxHashMap::default(),
            next_name: 0,
        }
    }

    // ===== Bound names =====

    /// Id the next binding will receive
    pub fn next_name_id(&self) -> NameId {
        self.next_name
    }

    /// Current id of `name`, without recording an error
    pub fn resolve(&self, name: &Identifier) -> Option<NameId> {
        self.names.get(name).copied()
    }

    /// Current id of `name`; records an "Unbound name" error if it has none.
    pub fn lookup_name(&mut self, name: &Identifier, location: SourceLocation) -> Option<NameId> {
        let id = self.resolve(name);
        if id.is_none() {
            self.error(Error::identifier(
                location,
                format!("Unbound name `{}`", name),
            ));
        }
        id
    }

    /// Bind `name` to a fresh id, remembering any binding it shadows
    pub fn bind_name(&mut self, name: &Identifier) -> Binding {
        let id = self.next_name;
        self.next_name += 1;
        let shadowed = self.names.insert(name.clone(), id);
        tracing::trace!(%name, id, ?shadowed, "bind");
        Binding { id, shadowed }
    }

    /// Undo `binding`, restoring whatever `name` meant before it
    pub fn unbind_name(&mut self, name: &Identifier, binding: Binding) {
        match binding.shadowed {
            Some(previous) => {
                self.names.insert(name.clone(), previous);
            }
            None => {
                self.names.remove(name);
            }
        }
        self.next_name -= 1;
        tracing::trace!(%name, id = binding.id, "unbind");
    }

    /// Run `f` with `name` bound to a fresh id, unbinding afterwards
    pub fn with_bound_name<R>(
        &mut self,
        name: &Identifier,
        f: impl FnOnce(&mut Self, NameId) -> R,
    ) -> R {
        let binding = self.bind_name(name);
        let result = f(self, binding.id);
        self.unbind_name(name, binding);
        result
    }

    // ===== Declarations =====

    /// Register a declaration name; returns the index it previously had, if any.
    pub(crate) fn declare(&mut self, name: &Identifier, index: usize) -> Option<usize> {
        self.declarations.insert(name.clone(), index)
    }

    /// Index of the declaration called `name`; records an error if there is none.
    pub fn lookup_declaration(
        &mut self,
        name: &Identifier,
        location: SourceLocation,
    ) -> Option<usize> {
        let index = self.declarations.get(name).copied();
        if index.is_none() {
            self.error(Error::identifier(
                location,
                format!("Unknown recursion variable `{}`", name),
            ));
        }
        index
    }

    // ===== Diagnostics =====

    pub fn error(&mut self, error: Error) {
        self.errors.push(error);
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }

    // ===== Output =====

    pub(crate) fn write(&mut self, text: &str) {
        self.output.push_str(text);
    }

    pub(crate) fn write_id(&mut self, id: usize) {
        self.output.push_str(&id.to_string());
    }

    /// Start a fresh line at the current depth
    pub(crate) fn write_indentation(&mut self) {
        for _ in 0..self.depth {
            self.output.push_str(&self.indentation);
        }
    }

    pub(crate) fn indent(&mut self) {
        self.depth += 1;
    }

    pub(crate) fn dedent(&mut self) {
        self.depth -= 1;
    }

    pub fn output(&self) -> &str {
        &self.output
    }

    /// The generated text, or every error recorded during the run
    pub fn finish(self) -> Result<String, Errors> {
        match Errors::from_vec(self.errors) {
            Some(errors) => Err(errors),
            None => Ok(self.output),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn state() -> ConversionState {
        ConversionState::new(&ConvertOptions::default())
    }

    #[test]
    fn test_bind_allocates_sequential_ids() {
        let mut state = state();
        let a = state.bind_name(&"a".into());
        let b = state.bind_name(&"b".into());

        assert_eq!(a.id, 0);
        assert_eq!(b.id, 1);
        assert_eq!(state.next_name_id(), 2);
    }

    #[test]
    fn test_shadowing_restores_outer_binding() {
        let mut state = state();
        let x: Identifier = "x".into();

        let outer = state.bind_name(&x);
        let _other = state.bind_name(&"y".into());
        let inner = state.bind_name(&x);
        assert_ne!(outer.id, inner.id);
        assert_eq!(state.resolve(&x), Some(inner.id));

        state.unbind_name(&x, inner);
        assert_eq!(state.resolve(&x), Some(outer.id));
        assert_eq!(state.next_name_id(), 2);
    }

    #[test]
    fn test_unbind_removes_fresh_name() {
        let mut state = state();
        let x: Identifier = "x".into();

        let binding = state.bind_name(&x);
        state.unbind_name(&x, binding);

        assert_eq!(state.resolve(&x), None);
        assert_eq!(state.next_name_id(), 0);
    }

    #[test]
    fn test_nested_scopes_restore_counter() {
        let mut state = state();
        let names: Vec<Identifier> = ["a", "b", "a", "c"].iter().map(|&n| n.into()).collect();

        fn nest(state: &mut ConversionState, names: &[Identifier], depth: usize) {
            let Some((first, rest)) = names.split_first() else {
                assert_eq!(state.next_name_id(), depth);
                return;
            };
            state.with_bound_name(first, |state, id| {
                assert_eq!(id, depth);
                nest(state, rest, depth + 1);
            });
            assert_eq!(state.next_name_id(), depth);
        }

        nest(&mut state, &names, 0);
        assert_eq!(state.resolve(&"a".into()), None);
    }

    #[test]
    fn test_lookup_records_errors() {
        let mut state = state();
        assert_eq!(state.lookup_name(&"a".into(), SourceLocation::new(1, 2)), None);
        assert_eq!(
            state.lookup_declaration(&"P".into(), SourceLocation::new(3, 4)),
            None
        );

        let errors = state.finish().unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.contains_message("Unbound name `a`"));
        assert!(errors.contains_message("Unknown recursion variable `P`"));
    }

    #[test]
    fn test_indentation_uses_configured_string() {
        let mut state = ConversionState::new(&ConvertOptions::default().with_indent_width(2));
        state.indent();
        state.indent();
        state.write_indentation();
        state.write("zero");
        state.dedent();
        state.dedent();

        assert_eq!(state.finish().unwrap(), "    zero");
    }
}
