//! Selection reporting for the preview binary
//!
//! Renders the outcome of evaluating a manifest: one JSON object per
//! test for tooling, or a human-readable summary that lists what was
//! deselected and why the counts come out the way they do.

use crate::engine::SelectionEngine;
use crate::manifest::TestEntry;
use serde::Serialize;
use std::io::{self, Write};

/// Selection outcome for one manifest entry
#[derive(Debug, Clone, Serialize)]
pub struct TestOutcome<'a> {
    pub name: &'a str,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub module: Option<&'a str>,
    pub tags: &'a [String],
    pub selected: bool,
}

/// Evaluate every manifest entry against the engine, in manifest order
pub fn evaluate<'a>(engine: &SelectionEngine, tests: &'a [TestEntry]) -> Vec<TestOutcome<'a>> {
    tests
        .iter()
        .map(|test| TestOutcome {
            name: test.name(),
            module: test.module(),
            tags: test.tags(),
            selected: engine.should_run(test.tag_set().as_slice()),
        })
        .collect()
}

/// Count the outcomes marked selected
pub fn selected_count(outcomes: &[TestOutcome<'_>]) -> usize {
    outcomes.iter().filter(|outcome| outcome.selected).count()
}

/// Write one JSON object per outcome, one per line, in manifest order
pub fn write_json<W: Write>(writer: &mut W, outcomes: &[TestOutcome<'_>]) -> io::Result<()> {
    for outcome in outcomes {
        serde_json::to_writer(&mut *writer, outcome).map_err(io::Error::other)?;
        writeln!(writer)?;
    }
    Ok(())
}

/// Write the human-readable report
///
/// One counts line first, then a line per deselected test with its
/// declared tags so the reason for the count is visible at a glance.
pub fn write_summary<W: Write>(
    writer: &mut W,
    outcomes: &[TestOutcome<'_>],
    requested: &[String],
) -> io::Result<()> {
    writeln!(
        writer,
        "selected {} of {} tests (requested: {})",
        selected_count(outcomes),
        outcomes.len(),
        requested.join(", ")
    )?;

    for outcome in outcomes.iter().filter(|outcome| !outcome.selected) {
        if outcome.tags.is_empty() {
            writeln!(writer, "deselected {} (untagged)", outcome.name)?;
        } else {
            writeln!(
                writer,
                "deselected {} (tags: {})",
                outcome.name,
                outcome.tags.join(", ")
            )?;
        }
    }

    Ok(())
}
