//! Execution records
//!
//! A `TemplateExecution` is the outcome of running a template once: who ran
//! it, where, when, and what each command returned.

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Outcome of a single command within a template execution
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CommandOutcome {
    /// Display string of the command as recorded (e.g. `create instance name=web`)
    pub line: String,
    /// Action verb (e.g. `create`)
    pub action: String,
    /// Entity noun (e.g. `instance`)
    pub entity: String,
    /// Value returned by the command, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub result: Option<serde_json::Value>,
    /// Error message when the command failed
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl CommandOutcome {
    /// Returns the result as text when it is a non-empty string.
    #[must_use]
    pub fn text_result(&self) -> Option<&str> {
        self.result
            .as_ref()
            .and_then(serde_json::Value::as_str)
            .filter(|s| !s.is_empty())
    }

    /// Returns true when the command completed without error
    #[must_use]
    pub const fn succeeded(&self) -> bool {
        self.error.is_none()
    }

    /// `"<action> <entity>"` label used for aggregate counts
    #[must_use]
    pub fn action_entity(&self) -> String {
        format!("{} {}", self.action, self.entity)
    }
}

/// One recorded run of a template
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TemplateExecution {
    /// Unique execution identifier
    pub id: String,
    /// When the template was run
    pub date: DateTime<Utc>,
    /// Who ran it (empty when unknown)
    #[serde(default)]
    pub author: String,
    /// Region the commands ran in (empty when unknown)
    #[serde(default)]
    pub locale: String,
    /// Credentials profile used (empty when unknown)
    #[serde(default)]
    pub profile: String,
    /// Free-text note recorded with the run
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Command outcomes in execution order
    #[serde(default)]
    pub commands: Vec<CommandOutcome>,
}

/// Aggregate counts derived from a `TemplateExecution`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExecutionStats {
    /// Total number of commands
    pub cmd_count: usize,
    /// Number of commands that failed
    pub ko_count: usize,
    /// Display string of the first command, used when there is only one
    pub oneliner: String,
    /// Occurrences of each `"<action> <entity>"` label
    pub action_entity_count: HashMap<String, usize>,
}

impl TemplateExecution {
    /// Compute aggregate statistics over all commands.
    #[must_use]
    pub fn stats(&self) -> ExecutionStats {
        let mut action_entity_count = HashMap::new();
        for cmd in &self.commands {
            *action_entity_count.entry(cmd.action_entity()).or_insert(0) += 1;
        }

        ExecutionStats {
            cmd_count: self.commands.len(),
            ko_count: self.commands.iter().filter(|c| !c.succeeded()).count(),
            oneliner: self
                .commands
                .first()
                .map(|c| c.line.clone())
                .unwrap_or_default(),
            action_entity_count,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{failed_command, make_test_execution, ok_command};
    use serde_json::json;

    #[test]
    fn test_text_result_only_for_non_empty_strings() {
        let mut cmd = ok_command("create", "instance", Some("i-123"));
        assert_eq!(cmd.text_result(), Some("i-123"));

        cmd.result = Some(json!(""));
        assert_eq!(cmd.text_result(), None);

        cmd.result = Some(json!(42));
        assert_eq!(cmd.text_result(), None);

        cmd.result = None;
        assert_eq!(cmd.text_result(), None);
    }

    #[test]
    fn test_stats_counts_commands_and_failures() {
        let exec = make_test_execution(
            "exec-1",
            vec![
                ok_command("create", "instance", Some("i-1")),
                ok_command("create", "instance", Some("i-2")),
                failed_command("attach", "volume", "volume busy"),
            ],
        );

        let stats = exec.stats();
        assert_eq!(stats.cmd_count, 3);
        assert_eq!(stats.ko_count, 1);
        assert_eq!(stats.action_entity_count["create instance"], 2);
        assert_eq!(stats.action_entity_count["attach volume"], 1);
        assert_eq!(stats.action_entity_count.values().sum::<usize>(), 3);
    }

    #[test]
    fn test_stats_oneliner_is_first_command_line() {
        let exec = make_test_execution(
            "exec-1",
            vec![ok_command("delete", "subnet", None)],
        );
        assert_eq!(exec.stats().oneliner, "delete subnet");
    }

    #[test]
    fn test_stats_empty_execution() {
        let exec = make_test_execution("exec-1", vec![]);
        let stats = exec.stats();
        assert_eq!(stats.cmd_count, 0);
        assert_eq!(stats.ko_count, 0);
        assert!(stats.oneliner.is_empty());
        assert!(stats.action_entity_count.is_empty());
    }

    #[test]
    fn test_optional_fields_skipped_in_json() {
        let exec = make_test_execution("exec-1", vec![ok_command("stop", "instance", None)]);
        let json = serde_json::to_value(&exec).unwrap();

        assert_eq!(json["id"], "exec-1");
        assert!(json.get("message").is_none());
        assert!(json["commands"][0].get("result").is_none());
        assert!(json["commands"][0].get("error").is_none());
    }

    #[test]
    fn test_missing_metadata_defaults_to_empty() {
        let exec: TemplateExecution =
            serde_json::from_str(r#"{"id":"x","date":"2026-01-02T03:04:05Z"}"#).unwrap();
        assert!(exec.author.is_empty());
        assert!(exec.locale.is_empty());
        assert!(exec.profile.is_empty());
        assert!(exec.commands.is_empty());
    }
}
