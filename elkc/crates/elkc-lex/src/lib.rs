//! elkc-lex - Lexical Analyzer for the elk Programming Language
//!
//! This crate turns source text into a stream of [`Token`]s that the parser
//! consumes. Scanning is a single pass over a byte cursor with no
//! backtracking, and it never fails: every input produces a well-defined
//! token sequence ending in `EndOfInput`.
//!
//! # Example Usage
//!
//! ```
//! use elkc_lex::{Scanner, TokenKind};
//!
//! let source = "val x = 42;";
//!
//! // Iterate through tokens
//! for token in Scanner::new(source) {
//!     println!("{}", token);
//! }
//!
//! // Or pull them one at a time
//! let mut scanner = Scanner::new(source);
//! assert_eq!(scanner.next_token().kind, TokenKind::Val);
//! ```
//!
//! # Module Structure
//!
//! - [`token`] - Token kinds, keyword table and the token value
//! - [`classify`] - Character class predicates
//! - [`cursor`] - Byte cursor over UTF-8 text
//! - [`scanner`] - The scanner state machine
//! - [`report`] - Diagnostics for `Illegal` tokens
//!
//! # Token Categories
//!
//! ## Keywords
//!
//! `func`, `match`, `type`, `interface`, `class`, `let`, `val`, `var`,
//! `true`, `false`, `return`
//!
//! ## Identifiers
//!
//! A letter or `_` followed by letters, `_` or ASCII digits. A lone `_` is
//! the `Underscore` punctuation.
//!
//! ## Literals
//!
//! - **Integer**: `42` (decimal digits only, no sign)
//! - **String**: `"hello"` (quotes kept in the literal, no escapes)
//!
//! ## Punctuation
//!
//! `( ) { } [ ] < > ^ : ; _ , . .. ... ? ! = + - * /`
//!
//! ## Special
//!
//! - **EOF**: End of input, returned forever once reached
//! - **ILLEGAL**: An unrecognized character or an unterminated string

#![warn(missing_docs)]
#![warn(rustdoc::missing_crate_level_docs)]

pub mod classify;
pub mod cursor;
pub mod report;
pub mod scanner;
pub mod token;

mod edge_cases;

// Re-export main types for convenience
pub use cursor::Cursor;
pub use report::{illegal_token_diagnostic, report_illegal_tokens};
pub use scanner::{tokenize, Scanner};
pub use token::{keyword_from_ident, kind_name, lookup_identifier, Token, TokenKind};
