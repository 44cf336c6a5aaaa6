//! Diagnostic types shared by every stage of the pipeline
//!
//! Each stage returns either its value or a non-empty [`Errors`] list, never
//! both. An [`Error`] carries its [`ErrorKind`], the [`SourceLocation`] it
//! refers to and a human-readable message.
//!
//! Locations are zero-based internally; [`Error`]'s `Display` renders them
//! one-based as `(line, column): message`.

use crate::parser::ast::SourceLocation;
use std::fmt;

/// Broad category of a diagnostic
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Lexical or grammatical malformation
    Syntax,
    /// Unbound name, unknown recursion variable, duplicate declaration or missing `Main`
    Identifier,
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ErrorKind::Syntax => write!(f, "syntax"),
            ErrorKind::Identifier => write!(f, "identifier"),
        }
    }
}

/// A single located diagnostic
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{location}: {message}")]
pub struct Error {
    pub kind: ErrorKind,
    pub location: SourceLocation,
    pub message: String,
}

impl Error {
    pub fn new(kind: ErrorKind, location: SourceLocation, message: impl Into<String>) -> Self {
        Self {
            kind,
            location,
            message: message.into(),
        }
    }

    pub fn syntax(location: SourceLocation, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Syntax, location, message)
    }

    pub fn identifier(location: SourceLocation, message: impl Into<String>) -> Self {
        Self::new(ErrorKind::Identifier, location, message)
    }
}

/// The non-empty error list a failed stage reports
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Errors(Vec<Error>);

impl Errors {
    /// Wraps `errors`, returning `None` when the list is empty.
    pub fn from_vec(errors: Vec<Error>) -> Option<Self> {
        if errors.is_empty() {
            None
        } else {
            Some(Errors(errors))
        }
    }

    pub fn single(error: Error) -> Self {
        Errors(vec![error])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Error> {
        self.0.iter()
    }

    /// True if any error carries `message` exactly
    pub fn contains_message(&self, message: &str) -> bool {
        self.0.iter().any(|e| e.message == message)
    }
}

impl fmt::Display for Errors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, error) in self.0.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            write!(f, "{}", error)?;
        }
        Ok(())
    }
}

impl std::error::Error for Errors {}

impl<'a> IntoIterator for &'a Errors {
    type Item = &'a Error;
    type IntoIter = std::slice::Iter<'a, Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl IntoIterator for Errors {
    type Item = Error;
    type IntoIter = std::vec::IntoIter<Error>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl From<Error> for Errors {
    fn from(error: Error) -> Self {
        Errors::single(error)
    }
}
