//! Tag token normalization
//!
//! Turns raw tokens from markers or the command line into a canonical
//! form: a lowercase name plus a polarity. Negation is expressed either
//! as a `not ` prefix (lowercase, with the space) or a leading `~`.

use std::fmt;

/// Whether a token asks for a tag or asks against it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Polarity {
    /// Plain token: the test should carry this tag.
    Positive,
    /// Negated token: the test must not carry this tag.
    Negative,
}

/// A normalized tag token
///
/// Construction strips at most one negation marker and lowercases the
/// remaining name. The `not ` prefix is matched case-sensitively, so
/// `Not active` stays a positive token named `not active` rather than a
/// negation of `active`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Tag {
    name: String,
    polarity: Polarity,
}

impl Tag {
    /// Normalize a raw token into a tag
    ///
    /// Checks the `not ` prefix before `~`, strips whichever matches
    /// first, and lowercases the remainder. Only one marker is removed:
    /// `~~smoke` normalizes to a negative tag named `~smoke`.
    pub fn normalize(token: &str) -> Self {
        if let Some(rest) = token.strip_prefix("not ") {
            Self {
                name: rest.to_lowercase(),
                polarity: Polarity::Negative,
            }
        } else if let Some(rest) = token.strip_prefix('~') {
            Self {
                name: rest.to_lowercase(),
                polarity: Polarity::Negative,
            }
        } else {
            Self {
                name: token.to_lowercase(),
                polarity: Polarity::Positive,
            }
        }
    }

    /// Get the lowercase tag name with negation markers removed
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the token polarity
    pub fn polarity(&self) -> Polarity {
        self.polarity
    }

    /// True when the token was written as a negation
    pub fn is_negated(&self) -> bool {
        self.polarity == Polarity::Negative
    }
}

impl From<&str> for Tag {
    fn from(token: &str) -> Self {
        Self::normalize(token)
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.polarity {
            Polarity::Positive => write!(f, "{}", self.name),
            Polarity::Negative => write!(f, "not {}", self.name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_token_is_positive_and_lowercased() {
        let tag = Tag::normalize("Smoke");
        assert_eq!(tag.name(), "smoke");
        assert_eq!(tag.polarity(), Polarity::Positive);
        assert!(!tag.is_negated());
    }

    #[test]
    fn not_prefix_negates() {
        let tag = Tag::normalize("not nightly");
        assert_eq!(tag.name(), "nightly");
        assert!(tag.is_negated());
    }

    #[test]
    fn tilde_prefix_negates() {
        let tag = Tag::normalize("~nightly");
        assert_eq!(tag.name(), "nightly");
        assert!(tag.is_negated());
    }

    #[test]
    fn not_prefix_is_case_sensitive() {
        let tag = Tag::normalize("Not active");
        assert_eq!(tag.name(), "not active");
        assert_eq!(tag.polarity(), Polarity::Positive);
    }

    #[test]
    fn uppercase_not_is_a_plain_name() {
        let tag = Tag::normalize("NOT two");
        assert_eq!(tag.name(), "not two");
        assert!(!tag.is_negated());
    }

    #[test]
    fn only_one_marker_is_stripped() {
        let tag = Tag::normalize("~~smoke");
        assert_eq!(tag.name(), "~smoke");
        assert!(tag.is_negated());

        let tag = Tag::normalize("not not smoke");
        assert_eq!(tag.name(), "not smoke");
        assert!(tag.is_negated());
    }

    #[test]
    fn not_prefix_wins_over_tilde() {
        let tag = Tag::normalize("not ~smoke");
        assert_eq!(tag.name(), "~smoke");
        assert!(tag.is_negated());
    }

    #[test]
    fn remainder_is_lowercased_after_stripping() {
        let tag = Tag::normalize("not Nightly");
        assert_eq!(tag.name(), "nightly");
        assert!(tag.is_negated());
    }

    #[test]
    fn bare_not_without_space_is_positive() {
        let tag = Tag::normalize("not");
        assert_eq!(tag.name(), "not");
        assert!(!tag.is_negated());
    }

    #[test]
    fn display_restores_readable_form() {
        assert_eq!(Tag::normalize("Smoke").to_string(), "smoke");
        assert_eq!(Tag::normalize("~Smoke").to_string(), "not smoke");
    }
}
