//! Scanner module.
//!
//! The scanner is split by token class:
//! - `core` - Scanner struct, dispatch and iteration
//! - `identifier` - Identifier and keyword scanning
//! - `number` - Integer literal scanning
//! - `string` - String literal scanning
//! - `punctuation` - Dot runs

mod core;
mod identifier;
mod number;
mod punctuation;
mod string;

pub use self::core::{tokenize, Scanner};
