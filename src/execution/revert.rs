//! Revertibility check
//!
//! A run can be undone when at least one of its successful commands has an
//! inverse. Creation-like actions only count when they returned the id of
//! what they created, since that id is what the inverse targets.

use super::record::{CommandOutcome, TemplateExecution};

/// Actions whose inverse needs the id returned by the command
const CREATING_ACTIONS: &[&str] = &["create", "copy", "import"];

/// Actions that can always be inverted
const TOGGLING_ACTIONS: &[&str] = &["start", "stop", "attach", "detach", "update"];

/// Returns true if the recorded template can be reverted.
#[must_use]
pub fn is_revertible(exec: &TemplateExecution) -> bool {
    exec.commands
        .iter()
        .filter(|cmd| cmd.succeeded())
        .any(command_is_revertible)
}

fn command_is_revertible(cmd: &CommandOutcome) -> bool {
    let action = cmd.action.as_str();
    if CREATING_ACTIONS.contains(&action) {
        return cmd.text_result().is_some();
    }
    TOGGLING_ACTIONS.contains(&action)
}
