//! Core error types for elkc-util crate

use thiserror::Error;

/// Error type for diagnostic operations
#[derive(Debug, Error)]
pub enum DiagnosticError {
    /// Writing rendered diagnostics to the output failed
    #[error("Failed to write diagnostics: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type alias for diagnostic operations
pub type DiagnosticResult<T> = std::result::Result<T, DiagnosticError>;
