//! Shared test utilities
//!
//! Common helpers used across test modules. Only compiled in test builds.

use crate::execution::{CommandOutcome, TemplateExecution};
use chrono::Utc;

/// Create a `TemplateExecution` dated now with empty author, region and profile.
#[must_use]
pub fn make_test_execution(id: &str, commands: Vec<CommandOutcome>) -> TemplateExecution {
    TemplateExecution {
        id: id.to_string(),
        date: Utc::now(),
        author: String::new(),
        locale: String::new(),
        profile: String::new(),
        message: None,
        commands,
    }
}

/// A successful command, optionally returning a text result.
#[must_use]
pub fn ok_command(action: &str, entity: &str, result: Option<&str>) -> CommandOutcome {
    CommandOutcome {
        line: format!("{action} {entity}"),
        action: action.to_string(),
        entity: entity.to_string(),
        result: result.map(|r| serde_json::Value::String(r.to_string())),
        error: None,
    }
}

/// A failed command carrying `error`.
#[must_use]
pub fn failed_command(action: &str, entity: &str, error: &str) -> CommandOutcome {
    CommandOutcome {
        error: Some(error.to_string()),
        ..ok_command(action, entity, None)
    }
}

/// Run a writer closure against an in-memory buffer and return the text.
pub fn render_with<F>(f: F) -> String
where
    F: FnOnce(&mut Vec<u8>) -> std::io::Result<()>,
{
    let mut out = Vec::new();
    f(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}
