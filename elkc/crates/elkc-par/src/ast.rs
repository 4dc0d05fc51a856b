//! elkc-par - AST Node Definitions
//!
//! The tree is as small as the grammar: a program is a list of statements and
//! the only statement is a binding declaration. Right-hand sides are not
//! parsed, so nodes hold tokens borrowed from the source text.

use std::fmt;

use elkc_lex::{Token, TokenKind};

/// AST root - a list of statements in source order
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Program<'src> {
    /// Parsed statements
    pub statements: Vec<Statement<'src>>,
}

impl<'src> Program<'src> {
    /// Returns true if nothing was parsed
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Number of parsed statements
    pub fn len(&self) -> usize {
        self.statements.len()
    }
}

impl fmt::Display for Program<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for statement in &self.statements {
            writeln!(f, "{}", statement)?;
        }
        Ok(())
    }
}

/// A statement
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Statement<'src> {
    /// `let|val|var NAME = ... ;`
    Binding(BindingStatement<'src>),
}

impl<'src> Statement<'src> {
    /// Literal of the token that starts the statement
    pub fn token_literal(&self) -> &'src str {
        match self {
            Statement::Binding(binding) => binding.keyword.literal,
        }
    }

    /// Returns the binding if this statement is one
    pub fn as_binding(&self) -> Option<&BindingStatement<'src>> {
        match self {
            Statement::Binding(binding) => Some(binding),
        }
    }
}

impl fmt::Display for Statement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Statement::Binding(binding) => fmt::Display::fmt(binding, f),
        }
    }
}

/// Binding declaration
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BindingStatement<'src> {
    /// `let`, `val` or `var`
    pub keyword: Token<'src>,
    /// Bound name
    pub name: Identifier<'src>,
    /// True for `var`
    pub mutable: bool,
}

impl<'src> BindingStatement<'src> {
    pub(crate) fn new(keyword: Token<'src>, name: Identifier<'src>) -> Self {
        Self {
            keyword,
            name,
            mutable: keyword.kind == TokenKind::Var,
        }
    }
}

impl fmt::Display for BindingStatement<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} = …;", self.keyword.literal, self.name)
    }
}

/// A name and the token it came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Identifier<'src> {
    /// The `Identity` token
    pub token: Token<'src>,
    /// The name text
    pub value: &'src str,
}

impl<'src> Identifier<'src> {
    /// Creates an identifier from an `Identity` token
    pub fn new(token: Token<'src>) -> Self {
        Self {
            token,
            value: token.literal,
        }
    }

    /// Literal of the underlying token
    pub fn token_literal(&self) -> &'src str {
        self.token.literal
    }
}

impl fmt::Display for Identifier<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.value)
    }
}
