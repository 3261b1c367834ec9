//! Recorded template executions
//!
//! The data model rendered by the printers, plus the JSONL store it is
//! loaded from and the revertibility check.

pub mod record;
pub mod revert;
pub mod store;

pub use record::{CommandOutcome, ExecutionStats, TemplateExecution};
pub use revert::is_revertible;
pub use store::ExecutionLog;
