//! Multi-character punctuation: dot runs.

use crate::scanner::Scanner;
use crate::token::{Token, TokenKind};

/// Longest dot run a single token covers.
const MAX_DOTS: usize = 3;

impl<'src> Scanner<'src> {
    /// Scans `.`, `..` or `...`.
    ///
    /// Counts at most three dots; longer runs are finished by later calls.
    pub(crate) fn scan_dots(&mut self) -> Token<'src> {
        let count = self
            .cursor
            .rest()
            .bytes()
            .take(MAX_DOTS)
            .take_while(|b| *b == b'.')
            .count();

        self.cursor.jump_to(self.token_start + count);
        let kind = match count {
            1 => TokenKind::Dot,
            2 => TokenKind::DotDot,
            _ => TokenKind::Ellipsis,
        };
        self.finish(kind)
    }
}
