//! Test manifest loading
//!
//! A manifest is a TOML listing of collected tests and their declared
//! tags, used by the preview binary to evaluate selection without a
//! live test harness. Harnesses embedding the library build tag sets
//! straight from their own collection instead.

use crate::tags::TagSet;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// A collection of tests to evaluate selection against
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Manifest {
    #[serde(default)]
    tests: Vec<TestEntry>,
}

/// One collected test and its declared tags
///
/// Fields are private to enforce invariants. Manifests are loaded via
/// deserialization and validated via Manifest::validate(). After
/// construction, fields cannot be mutated, ensuring validated data
/// remains valid.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct TestEntry {
    name: String,
    #[serde(default)]
    module: Option<String>,
    #[serde(default)]
    tags: Vec<String>,
}

impl TestEntry {
    /// Get the test name
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the module the test belongs to, when the manifest records one
    pub fn module(&self) -> Option<&str> {
        self.module.as_deref()
    }

    /// Get the declared tags exactly as written
    pub fn tags(&self) -> &[String] {
        &self.tags
    }

    /// Build the tag set for selection, defaulting untagged tests to
    /// the wildcard.
    pub fn tag_set(&self) -> TagSet {
        TagSet::from_declared(self.tags.iter().cloned())
    }
}

impl Manifest {
    /// Load and validate a manifest from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::AppResult<Self> {
        let shown_path = path.as_ref().display().to_string();

        // Phase 1: read the file
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            crate::error::AppError::ManifestFileRead {
                path: shown_path.clone(),
                source,
            }
        })?;

        // Phase 2: parse the TOML document
        let manifest: Self = toml::from_str(&content).map_err(|source| {
            crate::error::AppError::ManifestParseFailed {
                path: shown_path.clone(),
                source,
            }
        })?;

        // Phase 3: validate the parsed entries
        manifest
            .validate()
            .map_err(|e| crate::error::AppError::ManifestValidationFailed {
                path: shown_path,
                reason: e.to_string(),
            })?;

        Ok(manifest)
    }

    /// Get the tests in manifest order
    pub fn tests(&self) -> &[TestEntry] {
        &self.tests
    }

    /// Number of tests in the manifest
    pub fn len(&self) -> usize {
        self.tests.len()
    }

    /// True when the manifest lists no tests
    pub fn is_empty(&self) -> bool {
        self.tests.is_empty()
    }

    /// Validate manifest consistency
    ///
    /// Names must be unique and non-blank, and declared tags must not
    /// be blank. An empty manifest is valid.
    pub fn validate(&self) -> crate::error::AppResult<()> {
        let mut seen = std::collections::HashSet::new();

        for (index, test) in self.tests.iter().enumerate() {
            if test.name.trim().is_empty() {
                return Err(crate::error::AppError::Manifest(format!(
                    "test entry {} has a blank name",
                    index
                )));
            }
            if !seen.insert(test.name.as_str()) {
                return Err(crate::error::AppError::Manifest(format!(
                    "duplicate test name '{}'",
                    test.name
                )));
            }
            for tag in &test.tags {
                if tag.trim().is_empty() {
                    return Err(crate::error::AppError::Manifest(format!(
                        "test '{}' declares a blank tag",
                        test.name
                    )));
                }
            }
        }

        Ok(())
    }
}

impl FromStr for Manifest {
    type Err = crate::error::AppError;

    fn from_str(toml_str: &str) -> Result<Self, Self::Err> {
        let manifest: Manifest = toml::from_str(toml_str).map_err(|source| {
            crate::error::AppError::ManifestParseFailed {
                path: "<string>".to_string(),
                source,
            }
        })?;

        manifest.validate()?;
        Ok(manifest)
    }
}
