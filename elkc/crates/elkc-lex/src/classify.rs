//! Character classes for the elk scanner.
//!
//! Every predicate is total over `char`. Identifiers accept any alphabetic
//! character; digits are ASCII `0-9` only.

/// Checks if a character may start an identifier.
///
/// # Example
///
/// ```
/// use elkc_lex::classify::is_identifier_start;
///
/// assert!(is_identifier_start('a'));
/// assert!(is_identifier_start('_'));
/// assert!(is_identifier_start('α'));
/// assert!(!is_identifier_start('1'));
/// assert!(!is_identifier_start('+'));
/// ```
#[inline]
pub fn is_identifier_start(c: char) -> bool {
    c == '_' || c.is_alphabetic()
}

/// Checks if a character may continue an identifier.
///
/// # Example
///
/// ```
/// use elkc_lex::classify::is_identifier_continue;
///
/// assert!(is_identifier_continue('a'));
/// assert!(is_identifier_continue('9'));
/// assert!(is_identifier_continue('_'));
/// assert!(!is_identifier_continue('-'));
/// ```
#[inline]
pub fn is_identifier_continue(c: char) -> bool {
    is_identifier_start(c) || is_digit_continue(c)
}

/// Checks if a character may start an integer literal.
#[inline]
pub fn is_digit_start(c: char) -> bool {
    c.is_ascii_digit()
}

/// Checks if a character may continue an integer literal.
#[inline]
pub fn is_digit_continue(c: char) -> bool {
    c.is_ascii_digit()
}

/// Space, tab, newline or carriage return.
#[inline]
pub fn is_whitespace(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\r')
}

/// The double quote only.
#[inline]
pub fn is_quote(c: char) -> bool {
    c == '"'
}
