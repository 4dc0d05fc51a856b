//! Diagnostic module - Error and warning reporting infrastructure.
//!
//! This module provides types for creating, collecting and rendering
//! front-end diagnostics (errors, warnings, notes, and help messages).
//! Tokens carry no source positions, so diagnostics carry none either.
//!
//! # Examples
//!
//! ```
//! use elkc_util::diagnostic::{DiagnosticBuilder, DiagnosticCode, Handler};
//!
//! let handler = Handler::new();
//! DiagnosticBuilder::error("expected next token to be of type IDENTITY, got = instead")
//!     .code(DiagnosticCode::E_PARSER_EXPECTED_TOKEN)
//!     .emit(&handler);
//!
//! assert!(handler.has_errors());
//! assert_eq!(handler.messages().len(), 1);
//! ```

mod builder;
mod codes;
mod level;

pub use builder::DiagnosticBuilder;
pub use codes::DiagnosticCode;
pub use level::Level;

use crate::error::DiagnosticResult;
use std::cell::RefCell;
use std::fmt;
use std::io::Write;

/// A diagnostic message with severity and optional code
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Diagnostic {
    /// Diagnostic severity level
    pub level: Level,
    /// Main diagnostic message
    pub message: String,
    /// Optional diagnostic code
    pub code: Option<DiagnosticCode>,
    /// Additional notes for context
    pub notes: Vec<String>,
    /// Help suggestions for fixing the issue
    pub helps: Vec<String>,
}

impl fmt::Display for Diagnostic {
    /// Renders `level[CODE]: message` followed by indented notes and helps.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.code {
            Some(code) => write!(f, "{}[{}]: {}", self.level, code, self.message)?,
            None => write!(f, "{}: {}", self.level, self.message)?,
        }
        for note in &self.notes {
            write!(f, "\n  = {}: {}", Level::Note, note)?;
        }
        for help in &self.helps {
            write!(f, "\n  = {}: {}", Level::Help, help)?;
        }
        Ok(())
    }
}

/// Handler for collecting and reporting diagnostics
///
/// Diagnostics are kept in emission order. Emission takes `&self` so that a
/// handler can be shared by the phases of a single front-end run.
///
/// # Examples
///
/// ```
/// use elkc_util::diagnostic::Handler;
///
/// let handler = Handler::new();
/// handler.build_error("unexpected token").emit(&handler);
///
/// if handler.has_errors() {
///     eprintln!("parse failed with {} errors", handler.error_count());
/// }
/// ```
#[derive(Debug, Default)]
pub struct Handler {
    diagnostics: RefCell<Vec<Diagnostic>>,
}

impl Handler {
    /// Create a new handler
    pub fn new() -> Self {
        Self::default()
    }

    /// Emit a pre-built diagnostic
    pub fn emit_diagnostic(&self, diagnostic: Diagnostic) {
        self.diagnostics.borrow_mut().push(diagnostic);
    }

    /// Create a diagnostic builder for an error
    pub fn build_error(&self, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::error(message)
    }

    /// Create a diagnostic builder for a warning
    pub fn build_warning(&self, message: impl Into<String>) -> DiagnosticBuilder {
        DiagnosticBuilder::warning(message)
    }

    /// Check if any errors have been reported
    pub fn has_errors(&self) -> bool {
        self.diagnostics
            .borrow()
            .iter()
            .any(|d| d.level.is_error())
    }

    /// Get the number of errors
    pub fn error_count(&self) -> usize {
        self.count(Level::Error)
    }

    /// Get the number of warnings
    pub fn warning_count(&self) -> usize {
        self.count(Level::Warning)
    }

    fn count(&self, level: Level) -> usize {
        self.diagnostics
            .borrow()
            .iter()
            .filter(|d| d.level == level)
            .count()
    }

    /// Returns true if nothing has been reported
    pub fn is_empty(&self) -> bool {
        self.diagnostics.borrow().is_empty()
    }

    /// Get all diagnostics in emission order
    pub fn diagnostics(&self) -> Vec<Diagnostic> {
        self.diagnostics.borrow().clone()
    }

    /// Get the bare message of every diagnostic in emission order
    pub fn messages(&self) -> Vec<String> {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| d.message.clone())
            .collect()
    }

    /// Write every diagnostic to `out`, one block per diagnostic
    pub fn render_to<W: Write>(&self, out: &mut W) -> DiagnosticResult<()> {
        for diagnostic in self.diagnostics.borrow().iter() {
            writeln!(out, "{}", diagnostic)?;
        }
        out.flush()?;
        Ok(())
    }

    /// Render every diagnostic into a string
    pub fn render(&self) -> String {
        self.diagnostics
            .borrow()
            .iter()
            .map(|d| format!("{}\n", d))
            .collect()
    }
}
