//! Selector expression tree and its evaluation.

use std::{
    fmt,
    ops::{BitAnd, BitOr, Not},
    str::FromStr,
};

use crate::{Labels, Result, lexer::tokenize, parse::parse};

// ---

/// Parsed selector expression.
///
/// Each node owns its operands. `label!=value` is represented as
/// `Not(Equals { .. })`, so a missing label satisfies it.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Expr {
    /// Label is present, with any value including an empty one.
    Exists(String),
    /// Label is present and its value is byte-for-byte equal to `value`.
    Equals { label: String, value: String },
    /// Negation.
    Not(Box<Expr>),
    /// Conjunction.
    And(Box<Expr>, Box<Expr>),
    /// Disjunction.
    Or(Box<Expr>, Box<Expr>),
}

impl Expr {
    pub fn exists(label: impl Into<String>) -> Self {
        Self::Exists(label.into())
    }

    pub fn equals(label: impl Into<String>, value: impl Into<String>) -> Self {
        Self::Equals {
            label: label.into(),
            value: value.into(),
        }
    }

    pub fn and(self, rhs: Self) -> Self {
        Self::And(Box::new(self), Box::new(rhs))
    }

    pub fn or(self, rhs: Self) -> Self {
        Self::Or(Box::new(self), Box::new(rhs))
    }

    /// Tokenizes and parses selector text.
    ///
    /// Empty text is not a valid expression, see [`crate::Selector`] for the
    /// form that accepts it.
    pub fn parse(source: &str) -> Result<Self> {
        let tokens = tokenize(source)?;
        Ok(parse(&tokens)?)
    }

    /// Evaluates the expression against a label mapping.
    pub fn evaluate<L>(&self, labels: &L) -> bool
    where
        L: Labels + ?Sized,
    {
        match self {
            Self::Exists(label) => labels.label(label).is_some(),
            Self::Equals { label, value } => labels.label(label) == Some(value.as_str()),
            Self::Not(arg) => !arg.evaluate(labels),
            Self::And(lhs, rhs) => lhs.evaluate(labels) && rhs.evaluate(labels),
            Self::Or(lhs, rhs) => lhs.evaluate(labels) || rhs.evaluate(labels),
        }
    }

    /// Checks that every label fits the label character class and no value
    /// contains `"`, so the expression has a textual form.
    pub fn is_representable(&self) -> bool {
        match self {
            Self::Exists(label) => is_plain(label),
            Self::Equals { label, value } => is_plain(label) && !value.contains('"'),
            Self::Not(arg) => arg.is_representable(),
            Self::And(lhs, rhs) | Self::Or(lhs, rhs) => lhs.is_representable() && rhs.is_representable(),
        }
    }

    fn precedence(&self) -> Precedence {
        match self {
            Self::Or(..) => Precedence::Or,
            Self::And(..) => Precedence::And,
            Self::Exists(_) | Self::Equals { .. } | Self::Not(_) => Precedence::Unary,
        }
    }
}

/// Evaluates `expr` against a label mapping, see [`Expr::evaluate`].
pub fn evaluate<L>(expr: &Expr, labels: &L) -> bool
where
    L: Labels + ?Sized,
{
    expr.evaluate(labels)
}

impl Not for Expr {
    type Output = Self;

    fn not(self) -> Self::Output {
        Self::Not(Box::new(self))
    }
}

impl BitAnd for Expr {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.and(rhs)
    }
}

impl BitOr for Expr {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.or(rhs)
    }
}

impl FromStr for Expr {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

// ---

/// Formats the expression as selector text.
///
/// The text parses back into the same tree whenever [`Expr::is_representable`]
/// holds, which is always the case for parsed expressions.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Exists(label) => f.write_str(label),
            Self::Equals { label, value } => write!(f, "{label}={}", Value(value)),
            Self::Not(arg) => match arg.as_ref() {
                Self::Equals { label, value } => write!(f, "{label}!={}", Value(value)),
                arg => write!(f, "!{}", Operand::left(arg, Precedence::Unary)),
            },
            Self::And(lhs, rhs) => write!(
                f,
                "{} && {}",
                Operand::left(lhs, Precedence::And),
                Operand::right(rhs, Precedence::And)
            ),
            Self::Or(lhs, rhs) => write!(
                f,
                "{} || {}",
                Operand::left(lhs, Precedence::Or),
                Operand::right(rhs, Precedence::Or)
            ),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
enum Precedence {
    Or,
    And,
    Unary,
}

struct Operand<'a> {
    expr: &'a Expr,
    grouped: bool,
}

impl<'a> Operand<'a> {
    fn left(expr: &'a Expr, parent: Precedence) -> Self {
        Self {
            expr,
            grouped: expr.precedence() < parent,
        }
    }

    // binary operators are left-associative
    fn right(expr: &'a Expr, parent: Precedence) -> Self {
        Self {
            expr,
            grouped: expr.precedence() <= parent,
        }
    }
}

impl fmt::Display for Operand<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.grouped {
            write!(f, "({})", self.expr)
        } else {
            write!(f, "{}", self.expr)
        }
    }
}

struct Value<'a>(&'a str);

impl fmt::Display for Value<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if is_plain(self.0) {
            f.write_str(self.0)
        } else {
            write!(f, "\"{}\"", self.0)
        }
    }
}

fn is_plain(value: &str) -> bool {
    let mut bytes = value.bytes();
    match bytes.next() {
        Some(b) if b.is_ascii_alphanumeric() => {}
        _ => return false,
    }
    bytes.all(|b| b.is_ascii_alphanumeric() || matches!(b, b'.' | b'_' | b'-'))
}

// ---

#[cfg(feature = "serde")]
impl serde::Serialize for Expr {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        if !self.is_representable() {
            return Err(serde::ser::Error::custom(format!("expression {self:?} has no selector text form")));
        }
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Expr {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
