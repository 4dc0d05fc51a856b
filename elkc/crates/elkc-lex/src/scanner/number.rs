//! Integer literal scanning.

use crate::classify::is_digit_continue;
use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl<'src> Scanner<'src> {
    /// Scans a decimal integer literal.
    ///
    /// Only the digit run is consumed; a sign is a separate `Minus` token and
    /// whatever follows the last digit is left for the next call.
    pub(crate) fn scan_integer(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_digit_continue);
        self.finish(TokenKind::Integer)
    }
}
