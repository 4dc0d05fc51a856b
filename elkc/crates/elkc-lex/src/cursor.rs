//! Character cursor for traversing source text.
//!
//! The cursor keeps two byte offsets into the input: `head`, where the
//! current character starts, and `read_ahead`, where the next unread
//! character starts. Outside of [`Cursor::jump_to`] the invariant is
//! `read_ahead == head + current.len_utf8()`.

/// A cursor over UTF-8 source text.
///
/// # Example
///
/// ```
/// use elkc_lex::cursor::Cursor;
///
/// let mut cursor = Cursor::new("val x");
/// assert_eq!(cursor.current(), Some('v'));
/// cursor.advance();
/// assert_eq!(cursor.current(), Some('a'));
/// assert_eq!(cursor.head(), 1);
/// ```
#[derive(Clone, Debug)]
pub struct Cursor<'src> {
    input: &'src str,
    head: usize,
    read_ahead: usize,
    current: Option<char>,
}

impl<'src> Cursor<'src> {
    /// Creates a cursor primed on the first character of `input`.
    pub fn new(input: &'src str) -> Self {
        let mut cursor = Self {
            input,
            head: 0,
            read_ahead: 0,
            current: None,
        };
        cursor.advance();
        cursor
    }

    /// Byte offset of the current character.
    #[inline]
    pub fn head(&self) -> usize {
        self.head
    }

    /// Byte offset of the next unread character.
    #[inline]
    pub fn read_ahead(&self) -> usize {
        self.read_ahead
    }

    /// The character at `head`, or `None` once the input is exhausted.
    #[inline]
    pub fn current(&self) -> Option<char> {
        self.current
    }

    /// The character after the current one, without consuming anything.
    #[inline]
    pub fn peek(&self) -> Option<char> {
        self.input.get(self.read_ahead..)?.chars().next()
    }

    /// Returns true once every character has been consumed.
    #[inline]
    pub fn is_at_end(&self) -> bool {
        self.current.is_none()
    }

    /// Returns true if the current character satisfies `pred`.
    #[inline]
    pub fn check(&self, pred: impl Fn(char) -> bool) -> bool {
        self.current.is_some_and(pred)
    }

    /// Moves to the next character.
    ///
    /// At end of input this is a no-op, so the terminal state is stable.
    pub fn advance(&mut self) {
        if self.read_ahead >= self.input.len() {
            self.head = self.input.len();
            self.read_ahead = self.input.len();
            self.current = None;
            return;
        }
        self.head = self.read_ahead;
        self.current = self.input[self.head..].chars().next();
        self.read_ahead = self.head + self.current.map_or(0, char::len_utf8);
    }

    /// Advances while the current character satisfies `pred`.
    pub fn eat_while(&mut self, pred: impl Fn(char) -> bool) {
        while self.check(&pred) {
            self.advance();
        }
    }

    /// Moves the cursor to `offset` in one step, skipping a consumed run.
    ///
    /// `offset` must lie on a character boundary; an offset past the end
    /// parks the cursor at end of input.
    pub fn jump_to(&mut self, offset: usize) {
        if offset >= self.input.len() {
            self.read_ahead = self.input.len();
        } else {
            self.read_ahead = offset;
        }
        self.advance();
    }

    /// Returns the input from byte offset `start` up to `head`.
    #[inline]
    pub fn slice_from(&self, start: usize) -> &'src str {
        self.input.get(start..self.head).unwrap_or("")
    }

    /// Returns the unconsumed input starting at `head`.
    #[inline]
    pub fn rest(&self) -> &'src str {
        self.input.get(self.head..).unwrap_or("")
    }

    /// The full input text.
    #[inline]
    pub fn input(&self) -> &'src str {
        self.input
    }
}
