//! Pi-calculus source parser
//!
//! This module transforms source text into an Abstract Syntax Tree (AST):
//! - [`lexer`]: Tokenization (source text → tokens)
//! - [`parse`]: Parsing (tokens → AST), with per-declaration error recovery
//! - [`ast`]: AST node definitions and their textual rendering
//!
//! # Source Language
//!
//! A source file is a sequence of `agent Name(params) = Proc;` declarations.
//! Processes are built from `0`, `tau` prefixes, input prefixes `a(x) . P`,
//! output prefixes `a'x . P`, matches `[a = b] P`, restrictions `(^a) P`,
//! choice `+`, parallel composition `|` and process calls `Name(a, b)`.
//! `%` starts a line comment.
//!
//! # Parser Implementation
//!
//! Hand-written recursive descent parser, split across files with `impl Parser`
//! blocks that share the token cursor.

pub mod ast;
mod declarations;
pub mod lexer;
pub mod parse;
mod processes;

pub use lexer::tokenize;
pub use parse::parse_module;
