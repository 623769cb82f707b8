//! Applying selectors to sequences of entries.

use std::{fmt, str::FromStr};

use crate::{Expr, Labels, Result};

// ---

// Same set the lexer skips between tokens.
const WHITESPACE: [char; 5] = [' ', '\t', '\r', '\n', '\x0C'];

/// Selector as accepted from callers: either empty, matching every entry,
/// or a parsed expression.
///
/// Empty and whitespace-only text produce the empty selector without
/// running the parser.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Selector {
    expr: Option<Expr>,
}

impl Selector {
    /// Selector matching every entry.
    pub fn all() -> Self {
        Self::default()
    }

    pub fn parse(source: &str) -> Result<Self> {
        if source.trim_matches(WHITESPACE).is_empty() {
            return Ok(Self::all());
        }
        Ok(Self {
            expr: Some(Expr::parse(source)?),
        })
    }

    pub fn is_empty(&self) -> bool {
        self.expr.is_none()
    }

    pub fn expr(&self) -> Option<&Expr> {
        self.expr.as_ref()
    }

    pub fn matches<L>(&self, labels: &L) -> bool
    where
        L: Labels + ?Sized,
    {
        self.expr.as_ref().is_none_or(|expr| expr.evaluate(labels))
    }

    /// Keeps the entries this selector matches, preserving their order.
    pub fn filter<I>(&self, entries: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Labels,
    {
        entries.into_iter().filter(|entry| self.matches(entry)).collect()
    }
}

impl From<Expr> for Selector {
    fn from(expr: Expr) -> Self {
        Self { expr: Some(expr) }
    }
}

impl From<Option<Expr>> for Selector {
    fn from(expr: Option<Expr>) -> Self {
        Self { expr }
    }
}

impl FromStr for Selector {
    type Err = crate::Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::parse(s)
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.expr {
            Some(expr) => expr.fmt(f),
            None => Ok(()),
        }
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for Selector {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}

#[cfg(feature = "serde")]
impl<'de> serde::Deserialize<'de> for Selector {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = Option::<String>::deserialize(deserializer)?;
        match s {
            Some(s) => s.parse().map_err(serde::de::Error::custom),
            None => Ok(Self::all()),
        }
    }
}

// ---

/// Parses `selector` once and keeps the matching entries in their original order.
///
/// An empty selector returns all entries. Two selectors combine as a logical
/// AND by filtering the output of one call with the other.
pub fn filter<I>(entries: I, selector: &str) -> Result<Vec<I::Item>>
where
    I: IntoIterator,
    I::Item: Labels,
{
    Ok(Selector::parse(selector)?.filter(entries))
}
