//! Main parser coordinator
//!
//! This module provides the [`Parser`] struct and core parsing infrastructure,
//! including helper methods, the module-level error recovery and the main
//! parse entry point.
//!
//! # Parser Architecture
//!
//! The Parser uses a recursive descent approach with the following organization:
//! - This module: Parser struct, helper methods, and coordination
//! - `declarations`: Parsing `agent` declarations and name lists
//! - `processes`: Parsing process terms (sum, parallel, prefixes, binders)
//!
//! # Error Recovery
//!
//! Inside a declaration every production returns `Result<_, Error>` and the
//! first failure aborts the whole declaration. At module level the parser then
//! discards tokens up to and including the next `;` and carries on with the
//! next declaration, so every malformed declaration is reported in one run.

use crate::errors::{Error, Errors};
use crate::parser::ast::*;
use crate::parser::lexer::Token;

/// Parse a token stream into a [`Module`], reporting one error per malformed declaration.
pub fn parse_module(tokens: Vec<Token>) -> Result<Module, Errors> {
    Parser::new(tokens).parse_module()
}

/// Recursive descent parser for pi-calculus modules
pub struct Parser {
    pub(crate) tokens: Vec<Token>,
    pub(crate) position: usize,
}

impl Parser {
    pub fn new(tokens: Vec<Token>) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Parse the entire module (top-level declarations)
    pub fn parse_module(&mut self) -> Result<Module, Errors> {
        let mut declarations = Vec::new();
        let mut errors = Vec::new();

        while !self.is_at_end() {
            match self.parse_proc_decl() {
                Ok(decl) => declarations.push(decl),
                Err(error) => {
                    tracing::debug!(%error, "skipping malformed declaration");
                    errors.push(error);
                    self.skip_past_semicolon();
                }
            }
        }

        tracing::debug!(
            declarations = declarations.len(),
            errors = errors.len(),
            "parsed module"
        );

        match Errors::from_vec(errors) {
            Some(errors) => Err(errors),
            None => Ok(Module::new(declarations)),
        }
    }

    /// Discard tokens up to and including the next `;`
    fn skip_past_semicolon(&mut self) {
        while let Some(token) = self.advance() {
            if matches!(token, Token::Semicolon(_)) {
                break;
            }
        }
    }

    // ===== Helper methods =====

    pub(crate) fn match_token(&mut self, token: &Token) -> bool {
        if self.check(token) {
            self.advance();
            true
        } else {
            false
        }
    }

    pub(crate) fn check(&self, token: &Token) -> bool {
        self.peek()
            .is_some_and(|t| std::mem::discriminant(t) == std::mem::discriminant(token))
    }

    pub(crate) fn advance(&mut self) -> Option<&Token> {
        let token = self.tokens.get(self.position)?;
        self.position += 1;
        Some(token)
    }

    pub(crate) fn is_at_end(&self) -> bool {
        self.position >= self.tokens.len()
    }

    pub(crate) fn peek(&self) -> Option<&Token> {
        self.tokens.get(self.position)
    }

    /// Location of the current token, or of the last one at end of input
    pub(crate) fn current_location(&self) -> SourceLocation {
        self.peek()
            .map(Token::location)
            .unwrap_or_else(|| self.last_location())
    }

    pub(crate) fn last_location(&self) -> SourceLocation {
        self.tokens
            .last()
            .map(Token::location)
            .unwrap_or_default()
    }

    pub(crate) fn unexpected_eof(&self) -> Error {
        Error::syntax(self.last_location(), "Reached unexpected end of file")
    }

    pub(crate) fn syntax_error(&self, message: impl Into<String>) -> Error {
        Error::syntax(self.current_location(), message)
    }

    /// Error for a missing `what` at the current position
    pub(crate) fn expected(&self, what: &str) -> Error {
        match self.peek() {
            Some(token) => Error::syntax(
                token.location(),
                format!("Expected {}, found {}", what, token),
            ),
            None => self.unexpected_eof(),
        }
    }

    pub(crate) fn expect_token(&mut self, token: &Token, what: &str) -> Result<(), Error> {
        if self.match_token(token) {
            Ok(())
        } else {
            Err(self.expected(what))
        }
    }

    pub(crate) fn expect_identifier(&mut self) -> Result<Identifier, Error> {
        if let Some(Token::Ident(name, _)) = self.peek() {
            let name = Identifier::new(name.as_str());
            self.advance();
            Ok(name)
        } else {
            Err(self.expected("an identifier"))
        }
    }
}
