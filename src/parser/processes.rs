//! Process term parsing implementation
//!
//! # Grammar
//!
//! ```text
//! Proc     := Parallel ('+' Parallel)*
//! Parallel := Unary ('|' Unary)*
//! Unary    := 'tau' '.' Unary
//!           | Identifier Suffix?
//!           | '[' Identifier '=' Identifier ']' Unary
//!           | '0'
//!           | '(' '^' Identifier ')' Unary
//!           | '(' Proc ')'
//! Suffix   := '(' ')'
//!           | '(' ArgList ')' ('.' Unary)?
//!           | '\'' Identifier '.' Unary
//! ```
//!
//! Both binary operators are left-associative and `|` binds tighter than `+`.
//! `a(x) . P` with exactly one name is an input prefix; any other `Name(...)`
//! is a process call.

use crate::errors::Error;
use crate::parser::ast::*;
use crate::parser::lexer::Token;
use crate::parser::parse::Parser;

impl Parser {
    /// Parse a sum of parallel compositions
    pub(crate) fn parse_proc(&mut self) -> Result<Proc, Error> {
        let mut result = self.parse_parallel()?;

        while self.check(&Token::Plus(self.current_location())) {
            let loc = self.current_location();
            self.advance();

            let rhs = self.parse_parallel()?;
            result = Proc::Sum {
                lhs: Box::new(result),
                rhs: Box::new(rhs),
                location: loc,
            };
        }

        Ok(result)
    }

    /// Parse a parallel composition of unary processes
    fn parse_parallel(&mut self) -> Result<Proc, Error> {
        let mut result = self.parse_unary()?;

        while self.check(&Token::Pipe(self.current_location())) {
            let loc = self.current_location();
            self.advance();

            let rhs = self.parse_unary()?;
            result = Proc::Parallel {
                lhs: Box::new(result),
                rhs: Box::new(rhs),
                location: loc,
            };
        }

        Ok(result)
    }

    /// Parse a prefixed, guarded, restricted, parenthesized or atomic process
    fn parse_unary(&mut self) -> Result<Proc, Error> {
        let Some(token) = self.peek().cloned() else {
            return Err(self.unexpected_eof());
        };
        let loc = token.location();

        match token {
            // tau . Unary
            Token::Tau(_) => {
                self.advance();
                self.expect_token(&Token::Dot(self.current_location()), "`.` in tau prefix")?;
                let next = self.parse_unary()?;

                Ok(Proc::TauPrefix {
                    next: Box::new(next),
                    location: loc,
                })
            }

            Token::Ident(name, _) => {
                self.advance();
                self.parse_name_suffix(Identifier::new(name), loc)
            }

            // [ a = b ] Unary
            Token::LBracket(_) => {
                self.advance();
                let name1 = self.expect_identifier()?;
                self.expect_token(
                    &Token::Eq(self.current_location()),
                    "an = sign in match clause",
                )?;
                let name2 = self.expect_identifier()?;
                self.expect_token(
                    &Token::RBracket(self.current_location()),
                    "a ] at the end of the match clause",
                )?;
                let next = self.parse_unary()?;

                Ok(Proc::Match {
                    name1,
                    name2,
                    next: Box::new(next),
                    location: loc,
                })
            }

            Token::Number(value, _) => {
                if value != "0" {
                    return Err(
                        self.syntax_error("The only number that can be used as a process is 0")
                    );
                }
                self.advance();
                Ok(Proc::Zero { location: loc })
            }

            // ( ^ a ) Unary  or  ( Proc )
            Token::LParen(_) => {
                self.advance();

                if self.match_token(&Token::Caret(self.current_location())) {
                    let name = self.expect_identifier()?;
                    self.expect_token(
                        &Token::RParen(self.current_location()),
                        "`)` symbol in a restriction process",
                    )?;
                    let next = self.parse_unary()?;

                    return Ok(Proc::Restriction {
                        name,
                        next: Box::new(next),
                        location: loc,
                    });
                }

                let proc = self.parse_proc()?;
                self.expect_token(&Token::RParen(self.current_location()), "closing `)`")?;
                Ok(proc)
            }

            _ => Err(self.expected("a process")),
        }
    }

    /// Parse what follows a leading name: a call, an input prefix or an output prefix
    fn parse_name_suffix(&mut self, subject: Identifier, loc: SourceLocation) -> Result<Proc, Error> {
        if self.match_token(&Token::LParen(self.current_location())) {
            // A ( )
            if self.match_token(&Token::RParen(self.current_location())) {
                return Ok(Proc::IdentifierCall {
                    name: subject,
                    args: Vec::new(),
                    location: loc,
                });
            }

            let mut args = self.parse_arg_list()?;
            self.expect_token(
                &Token::RParen(self.current_location()),
                "`)` as closing delimiter for recursive call",
            )?;

            // a ( x ) . Unary
            if self.match_token(&Token::Dot(self.current_location())) {
                if args.len() != 1 {
                    return Err(Error::syntax(loc, "an input prefix must have only one object"));
                }
                let object = args.remove(0);
                let next = self.parse_unary()?;

                return Ok(Proc::PositivePrefix {
                    subject,
                    object,
                    next: Box::new(next),
                    location: loc,
                });
            }

            return Ok(Proc::IdentifierCall {
                name: subject,
                args,
                location: loc,
            });
        }

        // a ' b . Unary
        if self.match_token(&Token::Apostrophe(self.current_location())) {
            let object = self.expect_identifier()?;
            self.expect_token(&Token::Dot(self.current_location()), "`.` in an output prefix")?;
            let next = self.parse_unary()?;

            return Ok(Proc::NegativePrefix {
                subject,
                object,
                next: Box::new(next),
                location: loc,
            });
        }

        Ok(Proc::IdentifierCall {
            name: subject,
            args: Vec::new(),
            location: loc,
        })
    }
}
