use std::fmt;

use logos::Logos;

use crate::Span;

// ---

/// Raw token classes recognized by the scanner.
///
/// Unquoted literal values share the label character class, so the scanner
/// does not need to know whether it is positioned after `=` or `!=`.
#[derive(Logos, Debug, Clone, Copy, PartialEq, Eq)]
#[logos(skip r"[ \t\r\n\f]+")]
pub(crate) enum InnerToken {
    #[token("&&")]
    And,

    #[token("||")]
    Or,

    #[token("!=")]
    NotEquals,

    #[token("!")]
    Not,

    #[token("=")]
    Equals,

    #[token("(")]
    LParen,

    #[token(")")]
    RParen,

    #[regex(r"[A-Za-z0-9][A-Za-z0-9._-]*")]
    Label,

    #[regex(r#""[^"]*""#)]
    Quoted,

    #[regex(r#""[^"]*"#)]
    Unterminated,
}

// ---

/// Classified lexical unit of a selector.
///
/// Text payloads borrow from the source; quoted literals come without their quotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind<'s> {
    Label(&'s str),
    StringLiteral(&'s str),
    Not,
    And,
    Or,
    Equals,
    NotEquals,
    LParen,
    RParen,
    End,
}

impl fmt::Display for TokenKind<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Label(label) => write!(f, "label {label:?}"),
            Self::StringLiteral(value) => write!(f, "string {value:?}"),
            Self::Not => write!(f, "'!'"),
            Self::And => write!(f, "'&&'"),
            Self::Or => write!(f, "'||'"),
            Self::Equals => write!(f, "'='"),
            Self::NotEquals => write!(f, "'!='"),
            Self::LParen => write!(f, "'('"),
            Self::RParen => write!(f, "')'"),
            Self::End => write!(f, "end of input"),
        }
    }
}

// ---

/// Token together with its location in the source.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Token<'s> {
    pub kind: TokenKind<'s>,
    pub span: Span,
}

impl<'s> Token<'s> {
    #[inline]
    pub fn new(kind: TokenKind<'s>, span: Span) -> Self {
        Self { kind, span }
    }

    #[inline]
    pub fn end(offset: usize) -> Self {
        Self::new(TokenKind::End, Span::empty_at(offset))
    }
}
