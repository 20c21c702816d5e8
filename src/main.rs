//! Tagsieve selection preview
//!
//! Evaluates a test manifest against the requested tags and prints the
//! resulting selection. Selection outcomes are data, not failures: the
//! process exits nonzero only for configuration or manifest errors.

use clap::Parser;
use tagsieve::cli::{self, Cli, Command};
use tagsieve::config::Config;
use tagsieve::engine::{ExclusionSet, RunRequest, SelectionEngine};
use tagsieve::manifest::Manifest;
use tagsieve::{report, telemetry};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Handle subcommands before touching any configuration
    if let Some(Command::Config { output }) = &cli.command {
        let template = cli::generate_config_template();
        match output {
            Some(path) => {
                std::fs::write(path, template)?;
                println!("Configuration template written to {}", path);
            }
            None => print!("{}", template),
        }
        return Ok(());
    }

    // An explicit --config path must load; the default path is consulted
    // only when the file exists
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None if std::path::Path::new(cli::DEFAULT_CONFIG_PATH).exists() => {
            Config::from_file(cli::DEFAULT_CONFIG_PATH)?
        }
        None => Config::default(),
    };

    // Initialize telemetry
    telemetry::init(&config.observability.log_level);

    for (index, tag) in cli.exclude_tag.iter().enumerate() {
        if tag.trim().is_empty() {
            return Err(tagsieve::error::AppError::Config(format!(
                "--exclude-tag entry {} is empty. Exclusion entries must name a tag.",
                index
            ))
            .into());
        }
    }

    // Command line wins over config for the environment context
    let browser = cli
        .browser
        .clone()
        .or_else(|| config.selection.browser.clone());

    let mut exclude_tags = config.selection.exclude_tags.clone();
    exclude_tags.extend(cli.exclude_tag.iter().cloned());

    let manifest = Manifest::from_file(&cli.manifest)?;

    let request = RunRequest::new(&cli.tags);
    let exclusions = ExclusionSet::build(browser.as_deref(), exclude_tags);
    let engine = SelectionEngine::new(request, exclusions);

    tracing::info!(
        manifest = %cli.manifest,
        tests = manifest.len(),
        requested = ?engine.request().tokens(),
        exclusion_count = engine.exclusions().len(),
        "Evaluating selection"
    );

    let outcomes = report::evaluate(&engine, manifest.tests());

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    if cli.json {
        report::write_json(&mut handle, &outcomes)?;
    } else {
        report::write_summary(&mut handle, &outcomes, engine.request().tokens())?;
    }

    tracing::info!(
        selected = report::selected_count(&outcomes),
        total = outcomes.len(),
        "Selection complete"
    );

    Ok(())
}
