//! Syntax errors for the statement parser.
//!
//! Parse failures never abort the program parse. Each one is turned into a
//! diagnostic whose message is the error's `Display` text.

use elkc_lex::TokenKind;
use elkc_util::{Diagnostic, DiagnosticBuilder, DiagnosticCode};
use thiserror::Error;

/// Error type for a failed statement parse
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum SyntaxError {
    /// The lookahead token was not the one the grammar requires
    #[error("expected next token to be of type {expected}, got {found} instead")]
    ExpectedToken {
        /// Kind the grammar requires
        expected: TokenKind,
        /// Kind actually found
        found: TokenKind,
    },

    /// The scanner produced an `Illegal` token where the grammar requires one
    #[error("unexpected token {literal:?}, expected {expected}")]
    UnexpectedToken {
        /// Kind the grammar requires
        expected: TokenKind,
        /// Source text of the illegal token
        literal: String,
    },

    /// A binding reached end of input before its terminating `;`
    #[error("unexpected end of input: binding `{name}` is missing a terminating `;`")]
    UnterminatedBinding {
        /// Name being bound
        name: String,
    },

    /// A binding keyword that the parser was configured to reject
    #[error("binding keyword `{keyword}` is not enabled")]
    DisabledKeyword {
        /// The rejected keyword
        keyword: TokenKind,
    },
}

impl SyntaxError {
    /// Returns the diagnostic code for this error
    pub fn code(&self) -> DiagnosticCode {
        match self {
            SyntaxError::ExpectedToken { found, .. } if *found == TokenKind::EndOfInput => {
                DiagnosticCode::E_PARSER_UNEXPECTED_EOF
            },
            SyntaxError::ExpectedToken { .. } => DiagnosticCode::E_PARSER_EXPECTED_TOKEN,
            SyntaxError::UnexpectedToken { .. } => DiagnosticCode::E_PARSER_UNEXPECTED_TOKEN,
            SyntaxError::UnterminatedBinding { .. } => DiagnosticCode::E_PARSER_UNEXPECTED_EOF,
            SyntaxError::DisabledKeyword { .. } => DiagnosticCode::E_PARSER_DISABLED_KEYWORD,
        }
    }

    /// Converts the error into an error-level diagnostic
    pub fn to_diagnostic(&self) -> Diagnostic {
        let builder = DiagnosticBuilder::error(self.to_string()).code(self.code());
        let builder = match self {
            SyntaxError::UnterminatedBinding { .. } => builder.help("terminate the binding with `;`"),
            SyntaxError::DisabledKeyword { .. } => {
                builder.note("the parser's binding style excludes this keyword")
            },
            _ => builder,
        };
        builder.build()
    }
}

/// Result type alias for statement parsing
pub type Result<T> = std::result::Result<T, SyntaxError>;
