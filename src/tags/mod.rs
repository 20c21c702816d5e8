//! Tag vocabulary for test selection
//!
//! Provides tag normalization and per-test tag collection. A tag is a
//! free-form label attached to a test; a request token on the command
//! line uses the same shape plus optional negation markers.

pub mod set;
pub mod tag;

pub use set::TagSet;
pub use tag::{Polarity, Tag};

/// Token that matches every test regardless of its declared tags.
pub const WILDCARD_TAG: &str = "all";
