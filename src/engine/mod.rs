//! Tag-based selection engine
//!
//! Decides, for every collected test, whether it runs under the
//! requested tags and active exclusions. Exclusion checks run before
//! any positive matching, so a disqualifying tag cannot be rescued by
//! another tag the request asked for. Positive matching tries a direct
//! tag intersection first, then the `all` wildcard, then compound
//! `a+b` filters that require every constituent to be declared.

pub mod exclusions;

pub use exclusions::{BUILTIN_EXCLUSIONS, ExclusionSet};

use crate::tags::{Tag, TagSet, WILDCARD_TAG};
use std::collections::HashSet;

/// The tags requested for one run
///
/// Tokens are kept lowercased in the order given, including tokens that
/// carry negation markers. Negated names are derived from the original
/// spelling before lowercasing, so the case-sensitive `not ` prefix
/// keeps its meaning: `not two` negates `two`, while `NOT two` is just
/// a request for a tag named `not two`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunRequest {
    tokens: Vec<String>,
    negated: HashSet<String>,
}

impl RunRequest {
    /// Build a request from raw command-line tokens
    ///
    /// An empty token list falls back to the `all` wildcard, matching
    /// the default of the `--tags` option.
    pub fn new<I, S>(tokens: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered = Vec::new();
        let mut negated = HashSet::new();

        for token in tokens {
            let token = token.as_ref();
            let tag = Tag::normalize(token);
            if tag.is_negated() {
                negated.insert(tag.name().to_string());
            }
            lowered.push(token.to_lowercase());
        }

        if lowered.is_empty() {
            lowered.push(WILDCARD_TAG.to_string());
        }

        Self {
            tokens: lowered,
            negated,
        }
    }

    /// Get the lowercased request tokens in the order given
    pub fn tokens(&self) -> &[String] {
        &self.tokens
    }

    /// Check whether a lowercased token was requested verbatim
    pub fn contains_token(&self, token: &str) -> bool {
        self.tokens.iter().any(|t| t == token)
    }

    /// Check whether the request negates a tag name
    pub fn negates(&self, name: &str) -> bool {
        self.negated.contains(name)
    }

    /// True when the wildcard token is among the requested tokens
    pub fn requests_all(&self) -> bool {
        self.tokens.iter().any(|t| t == WILDCARD_TAG)
    }
}

impl Default for RunRequest {
    /// The default request selects every test via the wildcard.
    fn default() -> Self {
        Self::new([WILDCARD_TAG])
    }
}

/// Result of splitting a collection into kept and deselected tests
///
/// Order within each side follows collection order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Partition<T> {
    kept: Vec<T>,
    deselected: Vec<T>,
}

impl<T> Partition<T> {
    /// Tests that run, in collection order
    pub fn kept(&self) -> &[T] {
        &self.kept
    }

    /// Tests removed from the run, in collection order
    pub fn deselected(&self) -> &[T] {
        &self.deselected
    }

    /// Total number of tests considered
    pub fn total(&self) -> usize {
        self.kept.len() + self.deselected.len()
    }

    /// Consume the partition, yielding `(kept, deselected)`.
    pub fn into_parts(self) -> (Vec<T>, Vec<T>) {
        (self.kept, self.deselected)
    }
}

/// Selection engine combining one run request with its exclusion set
///
/// The engine itself never defaults anything: the request and the
/// per-test tag sets arrive already defaulted by the host surface.
#[derive(Debug, Clone)]
pub struct SelectionEngine {
    request: RunRequest,
    exclusions: ExclusionSet,
}

impl SelectionEngine {
    /// Create an engine for one run
    pub fn new(request: RunRequest, exclusions: ExclusionSet) -> Self {
        Self {
            request,
            exclusions,
        }
    }

    /// Get the run request this engine evaluates against
    pub fn request(&self) -> &RunRequest {
        &self.request
    }

    /// Get the active exclusion set
    pub fn exclusions(&self) -> &ExclusionSet {
        &self.exclusions
    }

    /// Decide whether a test with the given declared tags runs
    ///
    /// Evaluation order:
    /// 1. Any declared tag whose lowercase name the request negates, or
    ///    that the exclusion set contains verbatim, deselects the test.
    /// 2. A direct intersection between lowercased declared tags and
    ///    request tokens selects it, as does the `all` wildcard in the
    ///    request.
    /// 3. Otherwise the first compound request token whose `+`-joined
    ///    constituents are all declared selects it.
    /// 4. Anything else is deselected.
    pub fn should_run<S: AsRef<str>>(&self, declared: &[S]) -> bool {
        for tag in declared {
            let tag = tag.as_ref();
            if self.request.negates(&tag.to_lowercase()) {
                tracing::debug!(tag = %tag, "Declared tag negated by request");
                return false;
            }
            if self.exclusions.contains(tag) {
                tracing::debug!(tag = %tag, "Declared tag is excluded");
                return false;
            }
        }

        let lowered: Vec<String> = declared
            .iter()
            .map(|tag| tag.as_ref().to_lowercase())
            .collect();

        if lowered.iter().any(|tag| self.request.contains_token(tag)) {
            return true;
        }
        if self.request.requests_all() {
            return true;
        }

        for token in self.request.tokens() {
            if token.contains('+')
                && token
                    .split('+')
                    .all(|part| lowered.iter().any(|tag| tag == part))
            {
                tracing::debug!(filter = %token, "Compound filter satisfied");
                return true;
            }
        }

        tracing::debug!(
            declared = ?lowered,
            requested = ?self.request.tokens(),
            "No requested tag matched"
        );
        false
    }

    /// Split collected tests into kept and deselected halves
    ///
    /// `tags_of` resolves the tag set for each test. Collection order
    /// is preserved on both sides, and the outcome counts are logged
    /// once per partition.
    pub fn partition<T, F>(&self, items: Vec<T>, tags_of: F) -> Partition<T>
    where
        F: Fn(&T) -> TagSet,
    {
        let total = items.len();
        let mut kept = Vec::with_capacity(total);
        let mut deselected = Vec::new();

        for item in items {
            let tags = tags_of(&item);
            if self.should_run(tags.as_slice()) {
                kept.push(item);
            } else {
                deselected.push(item);
            }
        }

        tracing::info!(
            requested = ?self.request.tokens(),
            total,
            kept = kept.len(),
            deselected = deselected.len(),
            "Partitioned collected tests"
        );

        Partition { kept, deselected }
    }
}

impl Default for SelectionEngine {
    /// Engine for a default run: wildcard request, built-in exclusions.
    fn default() -> Self {
        Self::new(RunRequest::default(), ExclusionSet::default())
    }
}
