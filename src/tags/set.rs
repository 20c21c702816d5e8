//! Per-test tag collection
//!
//! Gathers the tags declared for a single test, possibly across several
//! declaration scopes (function, class, module), into one ordered list.
//! Tags are kept exactly as written; lowercasing happens at match time
//! so exclusion checks still see the original spelling.

use crate::tags::WILDCARD_TAG;
use std::fmt;

/// The tags attached to one test, in declaration order
///
/// Duplicates are dropped on construction, keeping the first occurrence.
/// A test with no tags anywhere receives the wildcard tag so selection
/// treats it the same way an explicitly all-tagged test is treated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagSet(Vec<String>);

impl TagSet {
    /// Collect tags from multiple declaration scopes
    ///
    /// Scopes are visited in the order given, so tags from earlier
    /// scopes come first in the resulting set. An empty union defaults
    /// to `[all]`.
    pub fn from_scopes<I, S, T>(scopes: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: IntoIterator<Item = T>,
        T: Into<String>,
    {
        let mut tags: Vec<String> = Vec::new();
        for scope in scopes {
            for tag in scope {
                let tag = tag.into();
                if !tags.contains(&tag) {
                    tags.push(tag);
                }
            }
        }
        if tags.is_empty() {
            tags.push(WILDCARD_TAG.to_string());
        }
        Self(tags)
    }

    /// Collect tags declared in a single scope
    pub fn from_declared<I, T>(tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Self::from_scopes(std::iter::once(tags))
    }

    /// Get the tags as a slice, in declaration order
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Number of distinct tags on this test
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when the set holds only the defaulted wildcard tag
    pub fn is_wildcard_only(&self) -> bool {
        self.0.len() == 1 && self.0[0] == WILDCARD_TAG
    }

    /// Iterate over the tags in declaration order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }
}

impl fmt::Display for TagSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.join(", "))
    }
}

impl<'a> IntoIterator for &'a TagSet {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
