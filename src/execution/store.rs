//! JSONL (JSON Lines) store for template executions
//!
//! Executions are appended, one JSON object per line, to
//! `<dir>/executions.jsonl`. Reading never touches the filesystem beyond the
//! log file itself; the directory is only created on the first append.

use std::fs::{self, File, OpenOptions};
use std::io::{BufRead, BufReader, ErrorKind, Write};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use super::record::TemplateExecution;

/// File name of the execution log inside the log directory
pub const LOG_FILE_NAME: &str = "executions.jsonl";

/// Append-only execution log
pub struct ExecutionLog {
    log_path: PathBuf,
}

impl ExecutionLog {
    /// Point at the execution log stored in `log_dir`.
    #[must_use]
    pub fn open<P: AsRef<Path>>(log_dir: P) -> Self {
        Self {
            log_path: log_dir.as_ref().join(LOG_FILE_NAME),
        }
    }

    /// Append an execution as a single line.
    ///
    /// The line is encoded before the file is opened and written in one
    /// call, so a failed encode leaves the log untouched.
    pub fn append(&self, exec: &TemplateExecution) -> Result<()> {
        let mut line = serde_json::to_vec(exec)
            .with_context(|| format!("Failed to serialize execution '{}'", exec.id))?;
        line.push(b'\n');

        if let Some(dir) = self.log_path.parent() {
            fs::create_dir_all(dir)
                .with_context(|| format!("Failed to create log directory: {}", dir.display()))?;
        }

        OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)
            .and_then(|mut file| file.write_all(&line))
            .with_context(|| format!("Failed to append to {}", self.log_path.display()))?;

        tracing::debug!(record_id = %exec.id, path = %self.log_path.display(), "execution appended");
        Ok(())
    }

    /// Read every execution, oldest first. A missing log reads as empty.
    pub fn read_all(&self) -> Result<Vec<TemplateExecution>> {
        let file = match File::open(&self.log_path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => {
                return Err(e)
                    .with_context(|| format!("Failed to open {}", self.log_path.display()))
            }
        };

        let mut executions = Vec::new();
        for (idx, line) in BufReader::new(file).lines().enumerate() {
            let line =
                line.with_context(|| format!("Failed to read {}", self.log_path.display()))?;
            if let Some(exec) = parse_line(&line, idx + 1)? {
                executions.push(exec);
            }
        }

        tracing::debug!(count = executions.len(), "execution log loaded");
        Ok(executions)
    }

    /// Find an execution by id.
    pub fn find(&self, id: &str) -> Result<Option<TemplateExecution>> {
        Ok(self.read_all()?.into_iter().find(|e| e.id == id))
    }

    /// The last `limit` executions, oldest first. `0` means all of them.
    pub fn recent(&self, limit: usize) -> Result<Vec<TemplateExecution>> {
        let mut all = self.read_all()?;
        if limit > 0 && all.len() > limit {
            all.drain(..all.len() - limit);
        }
        Ok(all)
    }

    /// The executions named by `ids`, in the order given, or the most recent
    /// `limit` when `ids` is empty. An unknown id is an error.
    pub fn select(&self, ids: &[String], limit: usize) -> Result<Vec<TemplateExecution>> {
        if ids.is_empty() {
            return self.recent(limit);
        }
        ids.iter()
            .map(|id| {
                self.find(id)?
                    .with_context(|| format!("Unknown execution id '{id}'"))
            })
            .collect()
    }

    /// Get the path to the log file
    #[must_use]
    pub fn log_path(&self) -> &Path {
        &self.log_path
    }
}

/// Decode one log line; blank lines carry nothing.
fn parse_line(line: &str, line_num: usize) -> Result<Option<TemplateExecution>> {
    if line.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str(line)
        .map(Some)
        .with_context(|| format!("Failed to parse line {line_num} as JSON"))
}
