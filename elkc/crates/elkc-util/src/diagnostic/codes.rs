//! Diagnostic codes for categorizing front-end errors.
//!
//! Codes in the `E1xxx` range belong to the scanner, `E2xxx` to the
//! statement parser. `W1xxx` warnings come from reading the source.
//!
//! # Examples
//!
//! ```
//! use elkc_util::diagnostic::DiagnosticCode;
//!
//! let code = DiagnosticCode::E_PARSER_EXPECTED_TOKEN;
//! assert_eq!(code.prefix(), "E");
//! assert_eq!(code.number(), 2002);
//! assert_eq!(code.as_str(), "E2002");
//! ```

use std::fmt;

/// A unique code identifying a diagnostic message
///
/// Codes follow the format `{prefix}{number}` with the number padded to four
/// digits.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct DiagnosticCode {
    /// The prefix (e.g., "E" for error, "W" for warning)
    pub prefix: &'static str,
    /// The numeric identifier
    pub number: u32,
}

impl DiagnosticCode {
    /// Create a new diagnostic code
    #[inline]
    pub const fn new(prefix: &'static str, number: u32) -> Self {
        Self { prefix, number }
    }

    /// Get the prefix
    #[inline]
    pub const fn prefix(&self) -> &'static str {
        self.prefix
    }

    /// Get the numeric identifier
    #[inline]
    pub const fn number(&self) -> u32 {
        self.number
    }

    /// Get the full code string (e.g., "E1001")
    pub fn as_str(&self) -> String {
        format!("{}{:04}", self.prefix, self.number)
    }

    /// E1001: Scanner - character outside the token alphabet
    pub const E_LEXER_UNEXPECTED_CHAR: Self = Self::new("E", 1001);
    /// E1002: Scanner - string literal without a closing quote
    pub const E_LEXER_UNTERMINATED_STRING: Self = Self::new("E", 1002);

    /// E2001: Parser - unexpected token
    pub const E_PARSER_UNEXPECTED_TOKEN: Self = Self::new("E", 2001);
    /// E2002: Parser - expected a specific token next
    pub const E_PARSER_EXPECTED_TOKEN: Self = Self::new("E", 2002);
    /// E2003: Parser - input ended inside a statement
    pub const E_PARSER_UNEXPECTED_EOF: Self = Self::new("E", 2003);
    /// E2004: Parser - binding keyword disabled by the parser options
    pub const E_PARSER_DISABLED_KEYWORD: Self = Self::new("E", 2004);

    /// W1001: Source - input bytes are not valid UTF-8
    pub const W_SOURCE_INVALID_UTF8: Self = Self::new("W", 1001);
}

impl fmt::Debug for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DiagnosticCode({})", self.as_str())
    }
}

impl fmt::Display for DiagnosticCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{:04}", self.prefix, self.number)
    }
}
