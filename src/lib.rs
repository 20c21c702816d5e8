//! Tagsieve - Tag-based test selection
//!
//! This library decides which collected tests run under the tags a run
//! requested, applying built-in and configured exclusions before any
//! positive match. Test harnesses embed the selection engine directly;
//! the companion binary previews a selection against a test manifest.

pub mod cli;
pub mod config;
pub mod engine;
pub mod error;
pub mod manifest;
pub mod report;
pub mod tags;
pub mod telemetry;
