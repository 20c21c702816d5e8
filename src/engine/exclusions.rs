//! Exclusion registry for tags that disqualify a test outright
//!
//! An exclusion matches the raw declared tag byte-for-byte, with no
//! normalization. Case tolerance for the environment context comes from
//! registering several spellings, not from folding at lookup time.

use std::collections::HashSet;

/// Tags every run excludes, regardless of configuration.
pub const BUILTIN_EXCLUSIONS: [&str; 2] = ["inactive", "not active"];

/// The set of declared tags that disqualify a test
///
/// Membership is literal: `Inactive` does not match the built-in
/// `inactive` entry. The environment context is covered in its common
/// spellings (`not firefox`, `not Firefox`, `not FIREFOX`), while
/// configured entries are registered exactly as written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExclusionSet(HashSet<String>);

impl ExclusionSet {
    /// Build the exclusion set for one run
    ///
    /// Starts from the built-in entries, then adds three negated case
    /// variants of the environment context (skipped when the context is
    /// absent or blank), then the configured entries verbatim.
    pub fn build<I, S>(environment: Option<&str>, configured: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut entries: HashSet<String> =
            BUILTIN_EXCLUSIONS.iter().map(|t| t.to_string()).collect();

        if let Some(env) = environment {
            if !env.trim().is_empty() {
                entries.insert(format!("not {}", env.to_lowercase()));
                entries.insert(format!("not {}", titlecase(env)));
                entries.insert(format!("not {}", env.to_uppercase()));
            }
        }

        for tag in configured {
            entries.insert(tag.into());
        }

        tracing::debug!(
            entry_count = entries.len(),
            environment = environment.unwrap_or("<none>"),
            "Built exclusion set"
        );

        Self(entries)
    }

    /// Check whether a declared tag is excluded (exact match only)
    pub fn contains(&self, raw_tag: &str) -> bool {
        self.0.contains(raw_tag)
    }

    /// Number of registered exclusion entries
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// True when no entries are registered
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Default for ExclusionSet {
    /// Build the exclusion set with no environment context and no
    /// configured entries, leaving only the built-ins.
    fn default() -> Self {
        Self::build(None, std::iter::empty::<String>())
    }
}

/// Uppercase the first letter of each space-separated word, lowercasing
/// the rest, mirroring how titlecased environment names are written.
fn titlecase(value: &str) -> String {
    value
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first
                    .to_uppercase()
                    .chain(chars.flat_map(char::to_lowercase))
                    .collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}
