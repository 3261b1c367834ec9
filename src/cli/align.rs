//! Aggregate count rows
//!
//! Lays out `"<count> <action> <entity>"` entries in rows of a fixed number
//! of entries, sorted so the output does not depend on map iteration order.

use std::collections::HashMap;

/// Number of entries per row
pub const ENTRIES_PER_ROW: usize = 6;

/// Sort the counted labels and group them into comma-joined rows.
///
/// Every row but the last holds exactly [`ENTRIES_PER_ROW`] entries. An empty
/// map yields no rows.
#[must_use]
#[allow(clippy::implicit_hasher)]
pub fn align_action_entity_count(items: &HashMap<String, usize>) -> Vec<String> {
    let mut all: Vec<String> = items
        .iter()
        .map(|(label, count)| format!("{count} {label}"))
        .collect();
    all.sort();

    all.chunks(ENTRIES_PER_ROW)
        .map(|row| row.join(", "))
        .collect()
}
