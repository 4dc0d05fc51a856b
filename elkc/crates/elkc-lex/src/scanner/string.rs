//! String literal scanning.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

impl<'src> Scanner<'src> {
    /// Scans a double-quoted string literal.
    ///
    /// The literal keeps both quotes and there are no escape sequences. With
    /// no closing quote before end of input, the rest of the input becomes one
    /// `Illegal` token.
    pub(crate) fn scan_string(&mut self) -> Token<'src> {
        let body_start = self.cursor.read_ahead();
        let body = self.cursor.input().get(body_start..).unwrap_or("");

        match body.find('"') {
            Some(len) => {
                self.cursor.jump_to(body_start + len + 1);
                self.finish(TokenKind::String)
            },
            None => {
                self.cursor.jump_to(self.cursor.input().len());
                self.finish(TokenKind::Illegal)
            },
        }
    }
}
