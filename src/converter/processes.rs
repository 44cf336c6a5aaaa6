//! Process term emission
//!
//! Each [`Proc`] variant becomes one fixed-arity mCRL2 term:
//!
//! | Process          | Term                                    |
//! |------------------|-----------------------------------------|
//! | `0`              | `zero`                                  |
//! | `tau . P`        | `tau_prefix(P)`                         |
//! | `a(x) . P`       | `input_prefix(a, x, P)`                 |
//! | `a'b . P`        | `output_prefix(a, b, P)`                |
//! | `[a = b] P`      | `match_proc(a, b, P)`                   |
//! | `(^a) P`         | `restriction(a, P)`                     |
//! | `P + Q`          | `summation(P, Q)`                       |
//! | `P \| Q`         | `parallel_composition(P, Q)`            |
//! | `A(a, b)`        | `identifier(A, [a, b])`                 |
//!
//! Names are replaced by their bound ids and process names by declaration
//! indices. An unresolved name aborts emission of the node it appears in, except
//! in call arguments where every argument is still tried.

use crate::converter::state::{ConversionState, NameId};
use crate::parser::ast::{Identifier, Proc, SourceLocation};

impl ConversionState {
    pub(crate) fn convert_proc(&mut self, proc: &Proc) {
        match proc {
            Proc::Zero { .. } => self.write("zero"),

            Proc::TauPrefix { next, .. } => {
                self.write("tau_prefix(");
                self.convert_proc(next);
                self.write(")");
            }

            Proc::PositivePrefix {
                subject,
                object,
                next,
                location,
            } => {
                let Some(subject) = self.lookup_name(subject, *location) else {
                    return;
                };
                self.with_bound_name(object, |state, object| {
                    state.convert_prefix("input_prefix", subject, object, next);
                });
            }

            Proc::NegativePrefix {
                subject,
                object,
                next,
                location,
            } => {
                let subject = self.lookup_name(subject, *location);
                let object = self.lookup_name(object, *location);
                if let (Some(subject), Some(object)) = (subject, object) {
                    self.convert_prefix("output_prefix", subject, object, next);
                }
            }

            Proc::Match {
                name1,
                name2,
                next,
                location,
            } => {
                let name1 = self.lookup_name(name1, *location);
                let name2 = self.lookup_name(name2, *location);
                if let (Some(name1), Some(name2)) = (name1, name2) {
                    self.convert_prefix("match_proc", name1, name2, next);
                }
            }

            Proc::Restriction { name, next, .. } => {
                self.with_bound_name(name, |state, id| {
                    state.write("restriction(");
                    state.write_id(id);
                    state.write(",\n");
                    state.convert_nested(next);
                    state.write(")");
                });
            }

            Proc::Sum { lhs, rhs, .. } => self.convert_binary("summation", lhs, rhs),

            Proc::Parallel { lhs, rhs, .. } => {
                self.convert_binary("parallel_composition", lhs, rhs)
            }

            Proc::IdentifierCall {
                name,
                args,
                location,
            } => self.convert_call(name, args, *location),
        }
    }

    /// `kind(first, second,` followed by the indented continuation
    fn convert_prefix(&mut self, kind: &str, first: NameId, second: NameId, next: &Proc) {
        self.write(kind);
        self.write("(");
        self.write_id(first);
        self.write(", ");
        self.write_id(second);
        self.write(",\n");
        self.convert_nested(next);
        self.write(")");
    }

    fn convert_binary(&mut self, kind: &str, lhs: &Proc, rhs: &Proc) {
        self.write(kind);
        self.write("(\n");
        self.indent();
        self.write_indentation();
        self.convert_proc(lhs);
        self.write(",\n");
        self.write_indentation();
        self.convert_proc(rhs);
        self.write("\n");
        self.dedent();
        self.write_indentation();
        self.write(")");
    }

    /// Emit `proc` on its own line one level deeper, then start the closing line
    pub(crate) fn convert_nested(&mut self, proc: &Proc) {
        self.indent();
        self.write_indentation();
        self.convert_proc(proc);
        self.dedent();
        self.write("\n");
        self.write_indentation();
    }

    fn convert_call(&mut self, name: &Identifier, args: &[Identifier], location: SourceLocation) {
        let Some(index) = self.lookup_declaration(name, location) else {
            return;
        };

        // Every argument is resolved so each unbound one gets its own error.
        let ids: Vec<NameId> = args
            .iter()
            .filter_map(|arg| self.lookup_name(arg, location))
            .collect();

        self.write("identifier(");
        self.write_id(index);
        self.write(", [");
        self.write_id_list(&ids);
        self.write("])");
    }

    pub(crate) fn write_id_list(&mut self, ids: &[NameId]) {
        for (i, id) in ids.iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            self.write_id(*id);
        }
    }
}
