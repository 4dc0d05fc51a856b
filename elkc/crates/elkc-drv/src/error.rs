//! Error handling for the elk driver.

use std::path::PathBuf;

use elkc_util::DiagnosticError;
use thiserror::Error;

/// Main error type for the driver.
#[derive(Error, Debug)]
pub enum DriverError {
    /// A source file could not be read.
    #[error("Failed to read `{path}`: {source}", path = .path.display())]
    ReadSource {
        /// File that was requested
        path: PathBuf,
        /// Underlying failure
        source: std::io::Error,
    },

    /// Configuration is missing or invalid.
    #[error("Configuration error: {0}")]
    Config(String),

    /// A configuration file is not valid TOML for [`crate::Config`].
    #[error("Failed to parse configuration: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Configuration could not be written as TOML.
    #[error("Failed to serialize configuration: {0}")]
    ConfigSerialize(#[from] toml::ser::Error),

    /// Writing output failed.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Rendering diagnostics failed.
    #[error(transparent)]
    Diagnostic(#[from] DiagnosticError),

    /// The front end reported errors for the input.
    #[error("aborting due to {0} previous error(s)")]
    Reported(usize),
}

/// Result type alias using DriverError.
pub type Result<T> = std::result::Result<T, DriverError>;
