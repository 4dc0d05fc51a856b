//! elkc-util - Core Utilities and Foundation Types
//!
//! Shared infrastructure for the elk front end. The only concern every phase
//! has in common is reporting problems, so this crate is the diagnostics
//! layer:
//!
//! - [`Diagnostic`] - one message with a [`Level`] and optional [`DiagnosticCode`]
//! - [`DiagnosticBuilder`] - fluent construction
//! - [`Handler`] - ordered collection and rendering
//!
//! # Example
//!
//! ```
//! use elkc_util::{DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! handler
//!     .build_error("unterminated string literal")
//!     .code(DiagnosticCode::E_LEXER_UNTERMINATED_STRING)
//!     .emit(&handler);
//!
//! assert_eq!(handler.error_count(), 1);
//! assert!(handler.render().starts_with("error[E1002]"));
//! ```

#![warn(missing_docs)]

pub mod diagnostic;
pub mod error;

pub use diagnostic::{Diagnostic, DiagnosticBuilder, DiagnosticCode, Handler, Level};
pub use error::{DiagnosticError, DiagnosticResult};
