use std::fmt;

use thiserror::Error;

// ---

/// Error is an error which may occur while turning selector text into an expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
}

impl Error {
    /// Byte offset in the source where the problem was detected.
    pub fn offset(&self) -> usize {
        match self {
            Self::Lex(e) => e.offset(),
            Self::Syntax(e) => e.position,
        }
    }
}

// ---

/// LexError is an error which may occur while splitting selector text into tokens.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LexError {
    #[error("unexpected character {ch:?} at offset {offset}")]
    UnexpectedChar { ch: char, offset: usize },
    #[error("unterminated quoted literal {literal} at offset {offset}")]
    UnterminatedLiteral { literal: String, offset: usize },
}

impl LexError {
    pub fn offset(&self) -> usize {
        match self {
            Self::UnexpectedChar { offset, .. } => *offset,
            Self::UnterminatedLiteral { offset, .. } => *offset,
        }
    }
}

// ---

/// SyntaxError is an error which may occur when tokens do not form a valid expression.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("expected {expected}, found {found} at offset {position}")]
pub struct SyntaxError {
    pub expected: Expected,
    pub found: String,
    pub position: usize,
}

/// What the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A label, `!` or `(`.
    Operand,
    /// A label or quoted string after `=` or `!=`.
    Value,
    /// `)` closing a group.
    ClosingParen,
    /// Nothing more after a complete expression.
    End,
    /// Anything but a token opening another nesting level.
    ShallowerNesting,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Operand => write!(f, "label, '!' or '('"),
            Self::Value => write!(f, "value"),
            Self::ClosingParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
            Self::ShallowerNesting => write!(f, "at most {} nesting levels", crate::parse::MAX_DEPTH),
        }
    }
}

/// Result is an alias for standard result with bound Error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;
