//! Identifier and keyword scanning.

use crate::classify::is_identifier_continue;
use crate::scanner::Scanner;
use crate::token::{lookup_identifier, Token};

impl<'src> Scanner<'src> {
    /// Scans an identifier or keyword.
    ///
    /// Consumes the maximal identifier-continue run, then classifies the text
    /// through the keyword table. The literal is always the exact text.
    pub(crate) fn scan_identifier(&mut self) -> Token<'src> {
        self.cursor.advance();
        self.cursor.eat_while(is_identifier_continue);
        let text = self.cursor.slice_from(self.token_start);
        Token::new(lookup_identifier(text), text)
    }
}
