//! elkc-drv - Front-End Driver
//!
//! Wires the scanner and parser to the outside world: configuration loading,
//! the interactive token REPL and the batch `tokens`/`parse` commands used by
//! the `elk` binary.
//!
//! # Example
//!
//! ```
//! use elkc_drv::{Config, Session};
//!
//! let session = Session::new(Config::default());
//! let mut out = Vec::new();
//! let errors = session.emit_program("val x = 5;", &mut out).unwrap();
//!
//! assert_eq!(errors, 0);
//! assert_eq!(String::from_utf8(out).unwrap(), "val x = …;\n");
//! ```

#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod repl;
pub mod session;

pub use config::{Config, ParserConfig, ReplConfig, CONFIG_FILE_NAME, DEFAULT_PROMPT};
pub use error::{DriverError, Result};
pub use session::Session;
