//! Command-line interface for tagsieve
//!
//! Provides argument parsing and subcommand handling for the tagsieve binary.

use clap::{Parser, Subcommand};

/// Config file consulted when `--config` is not given.
pub const DEFAULT_CONFIG_PATH: &str = "tagsieve.toml";

/// Tag-based test selection preview
#[derive(Parser)]
#[command(name = "tagsieve")]
#[command(version)]
#[command(about = "Tag-based test selection preview")]
#[command(
    long_about = "Tagsieve decides which collected tests run under the requested tags, \
    applying built-in and configured exclusions before any positive match. It reads a \
    test manifest and reports the resulting selection."
)]
pub struct Cli {
    /// Requested tag, repeatable; quote negations like "not smoke"
    #[arg(short, long, default_value = "all")]
    pub tags: Vec<String>,

    /// Environment context whose negated case variants are excluded
    #[arg(short, long)]
    pub browser: Option<String>,

    /// Extra exclusion entry, matched verbatim; repeatable
    #[arg(short = 'x', long)]
    pub exclude_tag: Vec<String>,

    /// Path to configuration file (defaults to tagsieve.toml when present)
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Path to the test manifest to evaluate
    #[arg(short, long, default_value = "tests.toml")]
    pub manifest: String,

    /// Emit one JSON object per test instead of the summary
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand)]
pub enum Command {
    /// Write a starter configuration file
    Config {
        /// Destination path (stdout when omitted)
        #[arg(short, long)]
        output: Option<String>,
    },
}

/// Starter configuration matching the built-in defaults
pub fn generate_config_template() -> &'static str {
    r#"# Tagsieve Configuration
# ======================
#
# This file configures selection defaults for the tagsieve binary and for
# harnesses that load their tag settings from disk.

# ─────────────────────────────────────────────────────────────────────────────
# SELECTION
# ─────────────────────────────────────────────────────────────────────────────

[selection]
# Extra exclusion entries joined with the built-ins ("inactive", "not active").
# Entries match declared tags verbatim, including case.
exclude_tags = []

# Environment context whose negated case variants are excluded.
# With browser = "firefox", tests tagged "not firefox", "not Firefox", or
# "not FIREFOX" are deselected. Omit the key to run without a context.
# browser = "firefox"

# ─────────────────────────────────────────────────────────────────────────────
# OBSERVABILITY
# ─────────────────────────────────────────────────────────────────────────────

[observability]
# Log level for tagsieve's own targets: trace, debug, info, warn, error.
log_level = "info"
"#
}
