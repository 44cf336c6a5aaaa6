//! Name resolution and mCRL2 term generation
//!
//! This module turns a parsed [`Module`](crate::parser::ast::Module) into a
//! single mCRL2 term in one walk over the tree:
//! - [`state`]: the conversion context (bound names, declaration table, errors, output)
//! - [`module`]: the module-level pass and the `Main` entry point
//! - [`options`]: formatting options
//!
//! Process emission lives in `processes`.
//!
//! Bound names (parameters, received names, restricted names) become small
//! integer ids allocated in stack order; process names become declaration
//! indices. Errors are accumulated, and the generated text is only returned
//! when none were recorded.

pub mod module;
pub mod options;
mod processes;
pub mod state;

pub use module::{convert_module, convert_module_with, ENTRY_POINT};
pub use options::ConvertOptions;
pub use state::{ConversionState, NameId};
