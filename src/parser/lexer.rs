//! Lexer (tokenizer) for pi-calculus source text
//!
//! Converts raw source text into a flat [`Token`] stream consumed by the parser.
//! `%` starts a comment running to the end of the line.
//!
//! Lexical errors do not stop the scan: the offending character is dropped, the
//! error is recorded and scanning resumes, so one run reports every problem in
//! the input. Tokens are only returned when no error was recorded.

use super::ast::SourceLocation;
use crate::errors::{Error, Errors};
use std::fmt;

/// All token variants produced by the lexer.
///
/// Every variant carries the [`SourceLocation`] of its first character.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    // Words
    Ident(String, SourceLocation),
    Number(String, SourceLocation),

    // Keywords
    Agent(SourceLocation),
    Tau(SourceLocation),

    // Symbols
    Semicolon(SourceLocation),  // ;
    LParen(SourceLocation),     // (
    RParen(SourceLocation),     // )
    LBracket(SourceLocation),   // [
    RBracket(SourceLocation),   // ]
    Lt(SourceLocation),         // <
    Gt(SourceLocation),         // >
    Comma(SourceLocation),      // ,
    Apostrophe(SourceLocation), // '
    Eq(SourceLocation),         // =
    Dot(SourceLocation),        // .
    Plus(SourceLocation),       // +
    Pipe(SourceLocation),       // |
    Caret(SourceLocation),      // ^
    Tilde(SourceLocation),      // ~
}

impl Token {
    /// Returns the source location where this token appears.
    pub fn location(&self) -> SourceLocation {
        match self {
            Token::Ident(_, loc)
            | Token::Number(_, loc)
            | Token::Agent(loc)
            | Token::Tau(loc)
            | Token::Semicolon(loc)
            | Token::LParen(loc)
            | Token::RParen(loc)
            | Token::LBracket(loc)
            | Token::RBracket(loc)
            | Token::Lt(loc)
            | Token::Gt(loc)
            | Token::Comma(loc)
            | Token::Apostrophe(loc)
            | Token::Eq(loc)
            | Token::Dot(loc)
            | Token::Plus(loc)
            | Token::Pipe(loc)
            | Token::Caret(loc)
            | Token::Tilde(loc) => *loc,
        }
    }

    /// Classifies a finished word: keyword, number or identifier.
    fn from_word(word: String, loc: SourceLocation) -> Token {
        if word == "agent" {
            Token::Agent(loc)
        } else if word == "tau" {
            Token::Tau(loc)
        } else if word.starts_with(|c: char| c.is_ascii_digit()) {
            Token::Number(word, loc)
        } else {
            Token::Ident(word, loc)
        }
    }

    fn symbol(ch: char, loc: SourceLocation) -> Option<Token> {
        let token = match ch {
            ';' => Token::Semicolon(loc),
            '(' => Token::LParen(loc),
            ')' => Token::RParen(loc),
            '[' => Token::LBracket(loc),
            ']' => Token::RBracket(loc),
            '<' => Token::Lt(loc),
            '>' => Token::Gt(loc),
            ',' => Token::Comma(loc),
            '\'' => Token::Apostrophe(loc),
            '=' => Token::Eq(loc),
            '.' => Token::Dot(loc),
            '+' => Token::Plus(loc),
            '|' => Token::Pipe(loc),
            '^' => Token::Caret(loc),
            '~' => Token::Tilde(loc),
            _ => return None,
        };
        Some(token)
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Ident(s, _) => write!(f, "identifier `{}`", s),
            Token::Number(n, _) => write!(f, "number `{}`", n),
            Token::Agent(_) => write!(f, "`agent`"),
            Token::Tau(_) => write!(f, "`tau`"),
            Token::Semicolon(_) => write!(f, "`;`"),
            Token::LParen(_) => write!(f, "`(`"),
            Token::RParen(_) => write!(f, "`)`"),
            Token::LBracket(_) => write!(f, "`[`"),
            Token::RBracket(_) => write!(f, "`]`"),
            Token::Lt(_) => write!(f, "`<`"),
            Token::Gt(_) => write!(f, "`>`"),
            Token::Comma(_) => write!(f, "`,`"),
            Token::Apostrophe(_) => write!(f, "`'`"),
            Token::Eq(_) => write!(f, "`=`"),
            Token::Dot(_) => write!(f, "`.`"),
            Token::Plus(_) => write!(f, "`+`"),
            Token::Pipe(_) => write!(f, "`|`"),
            Token::Caret(_) => write!(f, "`^`"),
            Token::Tilde(_) => write!(f, "`~`"),
        }
    }
}

/// Tokenize `input`, returning every lexical error if any was found.
pub fn tokenize(input: &str) -> Result<Vec<Token>, Errors> {
    Lexer::new(input).tokenize()
}

/// Lexer for pi-calculus source text
pub struct Lexer {
    input: Vec<char>,
    position: usize,
    line: usize,
    column: usize,
    errors: Vec<Error>,
}

impl Lexer {
    /// Create a new lexer for the given source string.
    pub fn new(input: &str) -> Self {
        Self {
            input: input.chars().collect(),
            position: 0,
            line: 0,
            column: 0,
            errors: Vec::new(),
        }
    }

    /// Tokenize the entire input
    pub fn tokenize(&mut self) -> Result<Vec<Token>, Errors> {
        let mut tokens = Vec::new();

        loop {
            self.skip_whitespace_and_comments();

            let Some(ch) = self.peek() else {
                break;
            };
            let loc = self.current_location();

            if let Some(token) = Token::symbol(ch, loc) {
                self.advance();
                tokens.push(token);
            } else if ch.is_ascii_digit() {
                tokens.push(self.number_literal());
            } else if ch.is_ascii_alphabetic() || ch == '_' {
                tokens.push(self.word());
            } else {
                self.advance();
                self.errors.push(Error::syntax(loc, "unknown character"));
            }
        }

        tracing::debug!(
            tokens = tokens.len(),
            errors = self.errors.len(),
            "tokenized input"
        );

        match Errors::from_vec(std::mem::take(&mut self.errors)) {
            Some(errors) => Err(errors),
            None => Ok(tokens),
        }
    }

    /// Read a run of digits. Letters inside the run are reported and dropped.
    fn number_literal(&mut self) -> Token {
        let loc = self.current_location();
        let mut digits = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_digit() {
                digits.push(ch);
            } else if ch.is_ascii_alphabetic() || ch == '_' {
                self.errors.push(Error::syntax(
                    self.current_location(),
                    "unexpected word characters in the middle of a number",
                ));
            } else {
                break;
            }
            self.advance();
        }

        Token::from_word(digits, loc)
    }

    /// Read an identifier or keyword
    fn word(&mut self) -> Token {
        let loc = self.current_location();
        let mut word = String::new();

        while let Some(ch) = self.peek() {
            if ch.is_ascii_alphanumeric() || ch == '_' {
                word.push(ch);
                self.advance();
            } else {
                break;
            }
        }

        Token::from_word(word, loc)
    }

    /// Skip whitespace and `%` line comments
    fn skip_whitespace_and_comments(&mut self) {
        while let Some(ch) = self.peek() {
            match ch {
                ' ' | '\t' | '\r' | '\n' => {
                    self.advance();
                }
                '%' => {
                    // The newline itself is left for the loop to count.
                    while let Some(ch) = self.peek() {
                        if ch == '\n' {
                            break;
                        }
                        self.advance();
                    }
                }
                _ => break,
            }
        }
    }

    /// Peek at current character without consuming
    fn peek(&self) -> Option<char> {
        self.input.get(self.position).copied()
    }

    /// Advance to next character
    fn advance(&mut self) -> Option<char> {
        let ch = self.peek()?;
        self.position += 1;

        if ch == '\n' {
            self.line += 1;
            self.column = 0;
        } else {
            self.column += 1;
        }

        Some(ch)
    }

    /// Get current source location
    fn current_location(&self) -> SourceLocation {
        SourceLocation::new(self.line, self.column)
    }
}
