//! CLI output formatting
//!
//! Renders recorded template executions as terminal text or JSON. Every
//! printer takes its sink and styling from the caller.

pub mod align;
pub mod errfmt;
pub mod error;
pub mod header;
pub mod printers;
pub mod style;

pub use align::align_action_entity_count;
pub use errfmt::{format_multiline_error, write_error};
pub use error::RenderError;
pub use header::{write_rich_header, write_simple_header};
pub use printers::{LogFormat, LogPrinter};
pub use style::{ColorMode, Palette};
