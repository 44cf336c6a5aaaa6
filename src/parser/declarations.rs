//! Declaration parsing implementation
//!
//! # Grammar
//!
//! ```text
//! ProcDecl := 'agent' Identifier ( '(' ArgList? ')' )? '=' Proc ';'
//! ArgList  := Identifier (',' Identifier)*
//! ```
//!
//! All parsing methods are implemented as `pub(crate)` methods on the [`Parser`] struct.

use crate::errors::Error;
use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a process declaration: agent Name(params) = body;
    pub(crate) fn parse_proc_decl(&mut self) -> Result<ProcDecl, Error> {
        let loc = self.current_location();

        self.expect_token(
            &Token::Agent(loc),
            "`agent` keyword to start process declaration",
        )?;
        let name = self.expect_identifier()?;

        let mut params = Vec::new();
        if self.match_token(&Token::LParen(self.current_location())) {
            params = self.parse_arg_list()?;
            self.expect_token(
                &Token::RParen(self.current_location()),
                "a closing parenthesis at the end of parameter list",
            )?;
        }

        self.expect_token(
            &Token::Eq(self.current_location()),
            "an `=` after process name and parameter list",
        )?;

        let body = self.parse_proc()?;

        self.expect_token(
            &Token::Semicolon(self.current_location()),
            "a `;` at the end of process declaration",
        )?;

        Ok(ProcDecl {
            name,
            params,
            body,
            location: loc,
        })
    }

    /// Parse a comma-separated name list.
    ///
    /// The list ends at the first token that is not an identifier, so it may be
    /// empty and a trailing comma is accepted.
    pub(crate) fn parse_arg_list(&mut self) -> Result<Vec<Identifier>, Error> {
        if self.is_at_end() {
            return Err(self.unexpected_eof());
        }

        let mut names = Vec::new();
        while let Some(Token::Ident(name, _)) = self.peek() {
            names.push(Identifier::new(name.as_str()));
            self.advance();

            if !self.match_token(&Token::Comma(self.current_location())) {
                break;
            }
        }

        Ok(names)
    }
}
