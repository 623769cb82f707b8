//! Read-only access to the labels of an entry.

use std::{
    collections::{BTreeMap, HashMap},
    hash::BuildHasher,
};

// ---

/// Anything a selector can be evaluated against.
///
/// An absent mapping (`None`) behaves as an empty one.
pub trait Labels {
    /// Returns the value of the label with the given name, if present.
    fn label(&self, name: &str) -> Option<&str>;
}

impl<S: BuildHasher> Labels for HashMap<String, String, S> {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl Labels for BTreeMap<String, String> {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.get(name).map(String::as_str)
    }
}

impl<'a, S: BuildHasher> Labels for HashMap<&'a str, &'a str, S> {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.get(name).copied()
    }
}

impl<L: Labels> Labels for Option<L> {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        self.as_ref().and_then(|labels| labels.label(name))
    }
}

impl<L: Labels + ?Sized> Labels for &L {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        (**self).label(name)
    }
}

impl<L: Labels + ?Sized> Labels for Box<L> {
    #[inline]
    fn label(&self, name: &str) -> Option<&str> {
        (**self).label(name)
    }
}
