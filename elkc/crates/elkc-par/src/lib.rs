//! elkc-par - Statement Parser for the elk Programming Language
//!
//! A recursive descent parser over a two-token window (`current` and
//! `lookahead`) pulled from a [`Scanner`]. The grammar has one statement
//! form, the binding declaration:
//!
//! ```text
//! binding := ("let" | "val" | "var") IDENTITY "=" <any tokens> ";"
//! ```
//!
//! Right-hand sides are skipped, not parsed.
//!
//! # Example Usage
//!
//! ```
//! use elkc_lex::Scanner;
//! use elkc_par::Parser;
//!
//! let mut parser = Parser::new(Scanner::new("val x = 5; val y = 10;"));
//! let program = parser.parse_program();
//!
//! assert_eq!(program.statements.len(), 2);
//! assert!(parser.errors().is_empty());
//! ```
//!
//! # Error Recovery
//!
//! A failed statement never stops the program parse. The parser:
//! 1. Records a diagnostic for the failure
//! 2. Skips tokens to the next synchronization point
//! 3. Continues parsing to find additional errors
//!
//! Synchronization points are `;`, a binding keyword, and end of input.
//! Tokens that cannot start a statement are skipped without a diagnostic.

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

#[cfg(test)]
mod edge_cases;

pub mod ast;
pub mod error;
mod stmt;

pub use ast::{BindingStatement, Identifier, Program, Statement};
pub use error::SyntaxError;

use elkc_lex::{Scanner, Token, TokenKind};
use elkc_util::Handler;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which of the immutable binding keywords start a binding.
///
/// `var` is accepted under every style.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BindingStyle {
    /// `let` and `val` are synonyms
    #[default]
    Both,
    /// Only `let`
    Let,
    /// Only `val`
    Val,
}

impl BindingStyle {
    /// Returns true if `kind` may start a binding under this style
    pub fn accepts(self, kind: TokenKind) -> bool {
        match kind {
            TokenKind::Var => true,
            TokenKind::Let => matches!(self, BindingStyle::Both | BindingStyle::Let),
            TokenKind::Val => matches!(self, BindingStyle::Both | BindingStyle::Val),
            _ => false,
        }
    }

    /// Lowercase name as used in configuration
    pub fn as_str(self) -> &'static str {
        match self {
            BindingStyle::Both => "both",
            BindingStyle::Let => "let",
            BindingStyle::Val => "val",
        }
    }
}

impl fmt::Display for BindingStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for BindingStyle {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "both" => Ok(BindingStyle::Both),
            "let" => Ok(BindingStyle::Let),
            "val" => Ok(BindingStyle::Val),
            other => Err(format!(
                "unknown binding style `{}` (expected both, let or val)",
                other
            )),
        }
    }
}

/// Parser configuration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ParserOptions {
    /// Accepted binding keywords
    pub binding: BindingStyle,
}

/// Parser state
///
/// Owns its scanner. `current` and `lookahead` are always one scanner call
/// apart; construction primes both so `current` holds the first token.
pub struct Parser<'src> {
    scanner: Scanner<'src>,
    pub(crate) current: Token<'src>,
    pub(crate) lookahead: Token<'src>,
    pub(crate) options: ParserOptions,
    handler: Handler,
}

impl<'src> Parser<'src> {
    /// Create a parser with default options
    pub fn new(scanner: Scanner<'src>) -> Self {
        Self::with_options(scanner, ParserOptions::default())
    }

    /// Create a parser with the given options
    pub fn with_options(scanner: Scanner<'src>, options: ParserOptions) -> Self {
        let mut parser = Self {
            scanner,
            current: Token::end_of_input(),
            lookahead: Token::end_of_input(),
            options,
            handler: Handler::new(),
        };
        parser.advance();
        parser.advance();
        parser
    }

    /// Parse statements until end of input
    ///
    /// Every iteration consumes at least one token, so this terminates on
    /// any input.
    #[tracing::instrument(
        level = "debug",
        skip_all,
        fields(statements = tracing::field::Empty, errors = tracing::field::Empty)
    )]
    pub fn parse_program(&mut self) -> Program<'src> {
        let mut program = Program::default();

        while !self.current.is_end() {
            match self.parse_statement() {
                Ok(Some(statement)) => program.statements.push(statement),
                Ok(None) => {},
                Err(err) => {
                    self.handler.emit_diagnostic(err.to_diagnostic());
                    if self.synchronize() {
                        continue;
                    }
                },
            }
            self.advance();
        }

        let span = tracing::Span::current();
        span.record("statements", program.statements.len());
        span.record("errors", self.handler.error_count());
        program
    }

    /// Diagnostic strings in the order they were recorded
    pub fn errors(&self) -> Vec<String> {
        self.handler.messages()
    }

    /// The handler holding every recorded diagnostic
    pub fn diagnostics(&self) -> &Handler {
        &self.handler
    }

    /// The current token
    pub fn current(&self) -> Token<'src> {
        self.current
    }

    /// The token after the current one
    pub fn lookahead(&self) -> Token<'src> {
        self.lookahead
    }

    // ========================================================================
    // TOKEN NAVIGATION
    // ========================================================================

    /// Shift the window one token forward
    pub(crate) fn advance(&mut self) {
        self.current = self.lookahead;
        self.lookahead = self.scanner.next_token();
    }

    /// Check the current token kind
    pub(crate) fn is_current(&self, kind: TokenKind) -> bool {
        self.current.kind == kind
    }

    /// Check the lookahead token kind
    pub(crate) fn is_next(&self, kind: TokenKind) -> bool {
        self.lookahead.kind == kind
    }

    /// Advance if the lookahead has the expected kind, fail otherwise
    pub(crate) fn expect_next(&mut self, kind: TokenKind) -> error::Result<()> {
        if self.is_next(kind) {
            self.advance();
            return Ok(());
        }
        Err(if self.lookahead.kind == TokenKind::Illegal {
            SyntaxError::UnexpectedToken {
                expected: kind,
                literal: self.lookahead.literal.to_string(),
            }
        } else {
            SyntaxError::ExpectedToken {
                expected: kind,
                found: self.lookahead.kind,
            }
        })
    }

    /// Skip to the next synchronization point after a failed statement.
    ///
    /// Always moves past the token the failure started on. Returns true when
    /// stopped on a binding keyword, which must not be skipped by the caller.
    fn synchronize(&mut self) -> bool {
        self.advance();
        loop {
            match self.current.kind {
                TokenKind::EndOfInput | TokenKind::Semicolon => {
                    tracing::trace!(at = %self.current.kind, "resynchronized");
                    return false;
                },
                kind if kind.is_binding_keyword() => {
                    tracing::trace!(at = %kind, "resynchronized");
                    return true;
                },
                _ => self.advance(),
            }
        }
    }
}
