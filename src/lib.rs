//! # Introduction
//!
//! pi2mcrl2 translates pi-calculus process declarations into a process term of
//! the mCRL2 toolset, so that specifications written in pi-calculus notation can
//! be model-checked with mCRL2.
//!
//! ## Pipeline
//!
//! ```text
//! Source → Lexer → Tokens → Parser → Module → Converter → mCRL2 term
//! ```
//!
//! 1. [`parser::lexer`]: turns the source into located tokens.
//! 2. [`parser::parse`]: builds a [`parser::ast::Module`] of process declarations.
//! 3. [`converter`]: resolves names to integer ids and emits the mCRL2 term.
//! 4. [`template`]: optionally embeds the term in a complete mCRL2 specification.
//!
//! Each stage either succeeds completely or returns every [`errors::Error`] it
//! found; a stage only runs when the previous one succeeded.
//!
//! ## Example
//!
//! ```
//! let term = pi2mcrl2::translate("agent Main = tau . 0;").unwrap();
//! assert!(term.contains("tau_prefix(zero)"));
//! ```

pub mod converter;
pub mod errors;
pub mod parser;
pub mod template;

use converter::ConvertOptions;
use errors::Errors;
use parser::ast::Module;

/// Lex and parse `source` into a [`Module`].
pub fn parse_source(source: &str) -> Result<Module, Errors> {
    let tokens = parser::tokenize(source)?;
    parser::parse_module(tokens)
}

/// Run the whole pipeline with default formatting.
pub fn translate(source: &str) -> Result<String, Errors> {
    translate_with(source, &ConvertOptions::default())
}

/// Run the whole pipeline.
pub fn translate_with(source: &str, options: &ConvertOptions) -> Result<String, Errors> {
    let module = parse_source(source)?;
    converter::convert_module_with(&module, options)
}
