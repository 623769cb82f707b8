//! Selector filtering of catalog entries.
//!
//! Entries pass through two selectors in turn: the page-level selector set up
//! once for the registry, then the selector supplied by the caller. An entry
//! is kept only when both match it.

// third-party imports
use selector::{Labels, Selector};
use serde::{Deserialize, Serialize};
use strum::AsRefStr;

// local imports
use crate::error::{Error, Result};

// ---

/// What to do with a call-site selector that fails to parse.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, AsRefStr)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum InvalidSelectorPolicy {
    /// Report the error to the caller.
    #[default]
    Fail,
    /// Treat the selector as rejecting every entry.
    MatchNone,
    /// Treat the selector as accepting every entry.
    MatchAll,
}

// ---

/// Applies the page-level selector followed by a call-site selector.
#[derive(Debug, Clone, Default)]
pub struct SelectorFilter {
    page: Selector,
    policy: InvalidSelectorPolicy,
}

impl SelectorFilter {
    pub fn new(page: Selector, policy: InvalidSelectorPolicy) -> Self {
        Self { page, policy }
    }

    pub fn page(&self) -> &Selector {
        &self.page
    }

    pub fn policy(&self) -> InvalidSelectorPolicy {
        self.policy
    }

    /// Keeps the entries matching both selectors, preserving their order.
    pub fn apply<I>(&self, entries: I, selector: &str) -> Result<Vec<I::Item>>
    where
        I: IntoIterator,
        I::Item: Labels,
    {
        let call_site = self.resolve(selector)?;
        let entries = self.page.filter(entries);
        Ok(Self::keep(call_site, entries))
    }

    /// Narrows already filtered entries down with one more call-site selector.
    pub fn refine<T>(&self, entries: Vec<T>, selector: &str) -> Result<Vec<T>>
    where
        T: Labels,
    {
        Ok(Self::keep(self.resolve(selector)?, entries))
    }

    fn keep<I>(selector: Option<Selector>, entries: I) -> Vec<I::Item>
    where
        I: IntoIterator,
        I::Item: Labels,
    {
        match selector {
            Some(selector) => selector.filter(entries),
            None => Vec::new(),
        }
    }

    fn resolve(&self, text: &str) -> Result<Option<Selector>> {
        match Selector::parse(text) {
            Ok(selector) => Ok(Some(selector)),
            Err(error) => match self.policy {
                InvalidSelectorPolicy::Fail => Err(Error::selector(text, error)),
                InvalidSelectorPolicy::MatchNone => {
                    log::warn!("{}: ignoring entries due to invalid selector {text:?}: {error}", self.policy.as_ref());
                    Ok(None)
                }
                InvalidSelectorPolicy::MatchAll => {
                    log::warn!("{}: ignoring invalid selector {text:?}: {error}", self.policy.as_ref());
                    Ok(Some(Selector::all()))
                }
            },
        }
    }
}
