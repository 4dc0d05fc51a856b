//! Token definitions for the elk language.
//!
//! A [`Token`] pairs a [`TokenKind`] with the exact slice of source text that
//! produced it. Kinds are a closed set laid out in category order: sentinels,
//! identity, literals, punctuation, keywords.

use std::borrow::Cow;
use std::fmt;
use std::sync::LazyLock;

use rustc_hash::FxHashMap;

/// The closed set of token kinds.
///
/// The discriminant order is part of the contract: [`TokenKind::ALL`] lists
/// the kinds in the same order and [`TokenKind::from_raw`] relies on it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum TokenKind {
    // ===== Sentinels =====
    /// A character outside the token alphabet, or an unterminated string
    Illegal,
    /// End of input; returned forever once the text is exhausted
    EndOfInput,
    /// Reserved for whitespace and comments; never produced by the scanner
    Trivia,

    /// A name that is not a reserved keyword
    Identity,

    // ===== Literals =====
    /// Decimal integer literal: `42`
    Integer,
    /// Double-quoted string literal, quotes included: `"hi"`
    String,

    // ===== Punctuation =====
    /// `(`
    LParen,
    /// `)`
    RParen,
    /// `{`
    LBrace,
    /// `}`
    RBrace,
    /// `[`
    LBracket,
    /// `]`
    RBracket,
    /// `<`
    LAngle,
    /// `>`
    RAngle,
    /// `^`
    Caret,
    /// `:`
    Colon,
    /// `;`
    Semicolon,
    /// `_`
    Underscore,
    /// `,`
    Comma,
    /// `.`
    Dot,
    /// `..`
    DotDot,
    /// `...`
    Ellipsis,
    /// `?`
    Question,
    /// `!`
    Bang,
    /// `=`
    Equals,
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Star,
    /// `/`
    Slash,

    // ===== Keywords =====
    /// `func`
    Func,
    /// `match`
    Match,
    /// `type`
    Type,
    /// `interface`
    Interface,
    /// `class`
    Class,
    /// `let`
    Let,
    /// `val`
    Val,
    /// `var`
    Var,
    /// `true`
    True,
    /// `false`
    False,
    /// `return`
    Return,
}

impl TokenKind {
    /// Every kind in discriminant order.
    pub const ALL: [TokenKind; 40] = [
        TokenKind::Illegal,
        TokenKind::EndOfInput,
        TokenKind::Trivia,
        TokenKind::Identity,
        TokenKind::Integer,
        TokenKind::String,
        TokenKind::LParen,
        TokenKind::RParen,
        TokenKind::LBrace,
        TokenKind::RBrace,
        TokenKind::LBracket,
        TokenKind::RBracket,
        TokenKind::LAngle,
        TokenKind::RAngle,
        TokenKind::Caret,
        TokenKind::Colon,
        TokenKind::Semicolon,
        TokenKind::Underscore,
        TokenKind::Comma,
        TokenKind::Dot,
        TokenKind::DotDot,
        TokenKind::Ellipsis,
        TokenKind::Question,
        TokenKind::Bang,
        TokenKind::Equals,
        TokenKind::Plus,
        TokenKind::Minus,
        TokenKind::Star,
        TokenKind::Slash,
        TokenKind::Func,
        TokenKind::Match,
        TokenKind::Type,
        TokenKind::Interface,
        TokenKind::Class,
        TokenKind::Let,
        TokenKind::Val,
        TokenKind::Var,
        TokenKind::True,
        TokenKind::False,
        TokenKind::Return,
    ];

    /// Converts a raw discriminant back into a kind.
    ///
    /// ```
    /// use elkc_lex::TokenKind;
    ///
    /// assert_eq!(TokenKind::from_raw(TokenKind::Colon as u8), Some(TokenKind::Colon));
    /// assert_eq!(TokenKind::from_raw(250), None);
    /// ```
    pub fn from_raw(raw: u8) -> Option<TokenKind> {
        Self::ALL.get(usize::from(raw)).copied()
    }

    /// Returns the canonical spelling of this kind.
    ///
    /// Punctuation and keywords are spelled as they appear in source; the
    /// remaining kinds use an upper-case category name.
    pub const fn name(self) -> &'static str {
        match self {
            TokenKind::Illegal => "ILLEGAL",
            TokenKind::EndOfInput => "EOF",
            TokenKind::Trivia => "TRIVIA",
            TokenKind::Identity => "IDENTITY",
            TokenKind::Integer => "INTEGER",
            TokenKind::String => "STRING",
            TokenKind::LParen => "(",
            TokenKind::RParen => ")",
            TokenKind::LBrace => "{",
            TokenKind::RBrace => "}",
            TokenKind::LBracket => "[",
            TokenKind::RBracket => "]",
            TokenKind::LAngle => "<",
            TokenKind::RAngle => ">",
            TokenKind::Caret => "^",
            TokenKind::Colon => ":",
            TokenKind::Semicolon => ";",
            TokenKind::Underscore => "_",
            TokenKind::Comma => ",",
            TokenKind::Dot => ".",
            TokenKind::DotDot => "..",
            TokenKind::Ellipsis => "...",
            TokenKind::Question => "?",
            TokenKind::Bang => "!",
            TokenKind::Equals => "=",
            TokenKind::Plus => "+",
            TokenKind::Minus => "-",
            TokenKind::Star => "*",
            TokenKind::Slash => "/",
            TokenKind::Func => "func",
            TokenKind::Match => "match",
            TokenKind::Type => "type",
            TokenKind::Interface => "interface",
            TokenKind::Class => "class",
            TokenKind::Let => "let",
            TokenKind::Val => "val",
            TokenKind::Var => "var",
            TokenKind::True => "true",
            TokenKind::False => "false",
            TokenKind::Return => "return",
        }
    }

    /// Returns true for `Integer` and `String`.
    pub const fn is_literal(self) -> bool {
        matches!(self, TokenKind::Integer | TokenKind::String)
    }

    /// Returns true for every punctuation kind, `(` through `/`.
    pub const fn is_punctuation(self) -> bool {
        let raw = self as u8;
        raw >= TokenKind::LParen as u8 && raw <= TokenKind::Slash as u8
    }

    /// Returns true for every reserved word.
    pub const fn is_keyword(self) -> bool {
        self as u8 >= TokenKind::Func as u8
    }

    /// Returns true for the keywords that introduce a binding declaration.
    pub const fn is_binding_keyword(self) -> bool {
        matches!(self, TokenKind::Let | TokenKind::Val | TokenKind::Var)
    }
}

impl fmt::Display for TokenKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Names a raw kind value, synthesizing `token(N)` for values outside the
/// known range. Only meant for diagnostics.
///
/// ```
/// use elkc_lex::token::kind_name;
///
/// assert_eq!(kind_name(0), "ILLEGAL");
/// assert_eq!(kind_name(200), "token(200)");
/// ```
pub fn kind_name(raw: u8) -> Cow<'static, str> {
    match TokenKind::from_raw(raw) {
        Some(kind) => Cow::Borrowed(kind.name()),
        None => Cow::Owned(format!("token({})", raw)),
    }
}

/// Process-wide keyword table, built once from the keyword kinds' spellings.
static KEYWORDS: LazyLock<FxHashMap<&'static str, TokenKind>> = LazyLock::new(|| {
    TokenKind::ALL
        .iter()
        .copied()
        .filter(|kind| kind.is_keyword())
        .map(|kind| (kind.name(), kind))
        .collect()
});

/// Looks up a reserved word.
pub fn keyword_from_ident(ident: &str) -> Option<TokenKind> {
    KEYWORDS.get(ident).copied()
}

/// Classifies scanned identifier text: its keyword kind, or `Identity`.
///
/// ```
/// use elkc_lex::{lookup_identifier, TokenKind};
///
/// assert_eq!(lookup_identifier("val"), TokenKind::Val);
/// assert_eq!(lookup_identifier("value"), TokenKind::Identity);
/// ```
pub fn lookup_identifier(ident: &str) -> TokenKind {
    keyword_from_ident(ident).unwrap_or(TokenKind::Identity)
}

/// Iterates over every registered keyword spelling.
pub fn keywords() -> impl Iterator<Item = (&'static str, TokenKind)> {
    KEYWORDS.iter().map(|(text, kind)| (*text, *kind))
}

/// One lexical unit: its kind and the exact source text it covers.
///
/// String literals keep their quotes and dot runs keep every dot, so
/// concatenating literals reproduces the scanned text minus whitespace.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Token<'src> {
    /// What was scanned
    pub kind: TokenKind,
    /// The exact slice of input that produced it
    pub literal: &'src str,
}

impl<'src> Token<'src> {
    /// Creates a token.
    pub const fn new(kind: TokenKind, literal: &'src str) -> Self {
        Self { kind, literal }
    }

    /// The terminal token: `EndOfInput` with an empty literal.
    pub const fn end_of_input() -> Self {
        Self::new(TokenKind::EndOfInput, "")
    }

    /// Returns true if this token has the given kind.
    #[inline]
    pub fn is(&self, kind: TokenKind) -> bool {
        self.kind == kind
    }

    /// Returns true for the terminal token.
    #[inline]
    pub fn is_end(&self) -> bool {
        self.kind == TokenKind::EndOfInput
    }
}

impl fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {:?}", self.kind, self.literal)
    }
}
