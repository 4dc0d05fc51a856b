//! Core scanner implementation.
//!
//! This module contains the Scanner struct and its dispatch loop.

use crate::classify::{is_digit_start, is_identifier_continue, is_identifier_start, is_quote, is_whitespace};
use crate::cursor::Cursor;
use crate::token::{Token, TokenKind};

/// Scanner for the elk language.
///
/// Produces one token per call to [`Scanner::next_token`]. Scanning never
/// fails: characters outside the token alphabet become `Illegal` tokens, and
/// once the input is exhausted every call returns `EndOfInput`.
///
/// # Example
///
/// ```
/// use elkc_lex::{Scanner, TokenKind};
///
/// let mut scanner = Scanner::new("val x = 5;");
/// assert_eq!(scanner.next_token().kind, TokenKind::Val);
/// assert_eq!(scanner.next_token().literal, "x");
/// ```
#[derive(Clone, Debug)]
pub struct Scanner<'src> {
    pub(crate) cursor: Cursor<'src>,
    /// Byte offset where the token being scanned starts.
    pub(crate) token_start: usize,
}

impl<'src> Scanner<'src> {
    /// Creates a scanner primed on the first character of `input`.
    pub fn new(input: &'src str) -> Self {
        Self {
            cursor: Cursor::new(input),
            token_start: 0,
        }
    }

    /// Returns the next token.
    ///
    /// Skips whitespace, then dispatches on the current character:
    /// single-character punctuation, dot runs, end of input, identifiers,
    /// integers, strings, and finally `Illegal`.
    pub fn next_token(&mut self) -> Token<'src> {
        self.cursor.eat_while(is_whitespace);
        self.token_start = self.cursor.head();

        let Some(c) = self.cursor.current() else {
            return Token::end_of_input();
        };

        match c {
            '(' => self.single(TokenKind::LParen),
            ')' => self.single(TokenKind::RParen),
            '{' => self.single(TokenKind::LBrace),
            '}' => self.single(TokenKind::RBrace),
            '[' => self.single(TokenKind::LBracket),
            ']' => self.single(TokenKind::RBracket),
            '<' => self.single(TokenKind::LAngle),
            '>' => self.single(TokenKind::RAngle),
            '^' => self.single(TokenKind::Caret),
            ':' => self.single(TokenKind::Colon),
            ';' => self.single(TokenKind::Semicolon),
            ',' => self.single(TokenKind::Comma),
            '?' => self.single(TokenKind::Question),
            '!' => self.single(TokenKind::Bang),
            '=' => self.single(TokenKind::Equals),
            '+' => self.single(TokenKind::Plus),
            '-' => self.single(TokenKind::Minus),
            '*' => self.single(TokenKind::Star),
            '/' => self.single(TokenKind::Slash),
            '_' => {
                if self.cursor.peek().is_some_and(is_identifier_continue) {
                    self.scan_identifier()
                } else {
                    self.single(TokenKind::Underscore)
                }
            },
            '.' => self.scan_dots(),
            c if is_identifier_start(c) => self.scan_identifier(),
            c if is_digit_start(c) => self.scan_integer(),
            c if is_quote(c) => self.scan_string(),
            _ => self.single(TokenKind::Illegal),
        }
    }

    /// Consumes one character and returns it as a token of `kind`.
    fn single(&mut self, kind: TokenKind) -> Token<'src> {
        self.cursor.advance();
        self.finish(kind)
    }

    /// Builds a token covering everything from `token_start` to the cursor.
    pub(crate) fn finish(&self, kind: TokenKind) -> Token<'src> {
        Token::new(kind, self.cursor.slice_from(self.token_start))
    }

    /// Returns true once every character has been consumed.
    pub fn is_at_end(&self) -> bool {
        self.cursor.is_at_end()
    }

    /// Byte offset of the next character to be scanned.
    pub fn position(&self) -> usize {
        self.cursor.head()
    }
}

impl<'src> Iterator for Scanner<'src> {
    type Item = Token<'src>;

    fn next(&mut self) -> Option<Self::Item> {
        let token = self.next_token();
        if token.is_end() {
            None
        } else {
            Some(token)
        }
    }
}

/// Scans all of `input`, including the final `EndOfInput` token.
///
/// ```
/// use elkc_lex::{tokenize, TokenKind};
///
/// let kinds: Vec<_> = tokenize("x;").iter().map(|t| t.kind).collect();
/// assert_eq!(kinds, [TokenKind::Identity, TokenKind::Semicolon, TokenKind::EndOfInput]);
/// ```
pub fn tokenize(input: &str) -> Vec<Token<'_>> {
    let mut scanner = Scanner::new(input);
    let mut tokens: Vec<Token<'_>> = scanner.by_ref().collect();
    tokens.push(Token::end_of_input());
    tokens
}
