//! Settings file parser
//!
//! Parses `runlog.toml` into display and log settings. Every key is
//! optional; command-line flags override what the file says.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::cli::{ColorMode, LogFormat};

/// Default settings file name, looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "runlog.toml";

/// How executions are displayed
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DisplayConfig {
    /// Printer used when no `--format` is given
    #[serde(default)]
    pub format: LogFormat,
    /// When to emit ANSI colors
    #[serde(default)]
    pub color: ColorMode,
    /// Show only the most recent N executions (0 = all)
    #[serde(default = "default_limit")]
    pub limit: usize,
}

const fn default_limit() -> usize {
    20
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            format: LogFormat::default(),
            color: ColorMode::default(),
            limit: default_limit(),
        }
    }
}

/// Where the execution log lives
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct LogConfig {
    /// Directory holding `executions.jsonl`
    #[serde(default = "default_log_dir")]
    pub dir: PathBuf,
}

fn default_log_dir() -> PathBuf {
    PathBuf::from(".runlog")
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            dir: default_log_dir(),
        }
    }
}

/// Top-level settings parsed from runlog.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(deny_unknown_fields)]
pub struct Settings {
    /// Display settings
    #[serde(default)]
    pub display: DisplayConfig,
    /// Execution log settings
    #[serde(default)]
    pub log: LogConfig,
}

impl Settings {
    /// Load settings from `path`.
    ///
    /// When `explicit` is false a missing file yields the defaults; when the
    /// user named the file it must exist.
    pub fn load<P: AsRef<Path>>(path: P, explicit: bool) -> Result<Self> {
        let path = path.as_ref();
        if !path.exists() {
            if explicit {
                bail!("Config file not found: {}", path.display());
            }
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::from_path(path)
    }

    /// Parse a runlog.toml file from a path
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;
        Self::parse(&content)
    }

    /// Parse runlog.toml content from a string
    pub fn parse(content: &str) -> Result<Self> {
        toml::from_str(content).context("Failed to parse runlog.toml")
    }
}
