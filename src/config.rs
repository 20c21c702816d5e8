//! Configuration management for tagsieve
//!
//! Parses TOML configuration files and provides typed access to
//! selection settings. Every section and key is optional, so a missing
//! config file and an empty one behave identically.

use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

/// Top-level configuration tree
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub selection: SelectionConfig,
    #[serde(default)]
    pub observability: ObservabilityConfig,
}

/// Selection configuration
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct SelectionConfig {
    /// Extra exclusion entries joined with the built-ins
    ///
    /// Entries are matched against declared tags verbatim, so list the
    /// exact spelling used in the test suite.
    #[serde(default)]
    pub exclude_tags: Vec<String>,

    /// Environment context whose negated case variants join the
    /// exclusions (for example a browser name). The command-line flag
    /// takes precedence when both are given.
    #[serde(default)]
    pub browser: Option<String>,
}

/// Observability settings
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Config {
    /// Load and validate configuration from a TOML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> crate::error::AppResult<Self> {
        let shown_path = path.as_ref().display().to_string();

        // Phase 1: read the file
        let content = std::fs::read_to_string(path.as_ref()).map_err(|source| {
            crate::error::AppError::ConfigFileRead {
                path: shown_path.clone(),
                source,
            }
        })?;

        // Phase 2: parse the TOML document
        let config: Self = toml::from_str(&content).map_err(|source| {
            crate::error::AppError::ConfigParseFailed {
                path: shown_path.clone(),
                source,
            }
        })?;

        // Phase 3: validate the parsed settings
        config
            .validate()
            .map_err(|e| crate::error::AppError::ConfigValidationFailed {
                path: shown_path,
                reason: e.to_string(),
            })?;

        Ok(config)
    }

    /// Validate configuration consistency
    ///
    /// Both loaders run this automatically; call it yourself when
    /// building a `Config` by hand.
    pub fn validate(&self) -> crate::error::AppResult<()> {
        for (index, tag) in self.selection.exclude_tags.iter().enumerate() {
            if tag.trim().is_empty() {
                return Err(crate::error::AppError::Config(format!(
                    "exclude_tags entry {} is empty. Exclusion entries must name a tag.",
                    index
                )));
            }
        }

        if let Some(browser) = &self.selection.browser {
            if browser.trim().is_empty() {
                return Err(crate::error::AppError::Config(
                    "browser is blank. Omit the key to run without an environment context."
                        .to_string(),
                ));
            }
        }

        Ok(())
    }
}

impl FromStr for Config {
    type Err = crate::error::AppError;

    fn from_str(toml_str: &str) -> Result<Self, Self::Err> {
        let config: Config = toml::from_str(toml_str).map_err(|source| {
            crate::error::AppError::ConfigParseFailed {
                path: "<string>".to_string(),
                source,
            }
        })?;

        config.validate()?;
        Ok(config)
    }
}
