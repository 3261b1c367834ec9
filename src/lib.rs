//! Runlog - execution history rendering
//!
//! Renders recorded command template executions as full listings, one-line
//! summaries, per-action statistics, raw JSON or bare identifiers.

// Allow multiple crate versions from dependencies (can't easily control)
#![allow(clippy::multiple_crate_versions)]

pub mod cli;
pub mod config;
pub mod execution;
pub mod humanize;
pub mod logging;

#[cfg(test)]
pub(crate) mod testutil;

// Re-export commonly used types
pub use cli::{LogFormat, LogPrinter, Palette, RenderError};
pub use config::Settings;
pub use execution::{CommandOutcome, ExecutionLog, ExecutionStats, TemplateExecution};
