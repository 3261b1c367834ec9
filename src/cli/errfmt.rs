//! Command error blocks
//!
//! Errors recorded on a command are printed below it, indented and in the
//! alerting style. Embedded tabs are stripped so they cannot break the
//! indentation.

use std::io::{self, Write};

use super::style::Palette;

/// Strip tabs from `msg` and indent each of its lines by four spaces.
#[must_use]
pub fn format_multiline_error(msg: &str) -> Vec<String> {
    msg.replace('\t', "")
        .split('\n')
        .map(|line| format!("    {line}"))
        .collect()
}

/// Write the error block for a command. Writes nothing when `err` is `None`.
pub fn write_error<W: Write>(w: &mut W, palette: &Palette, err: Option<&str>) -> io::Result<()> {
    let Some(msg) = err else {
        return Ok(());
    };
    for line in format_multiline_error(msg) {
        writeln!(w, "{}", (palette.alert)(&format!("\t{line}")))?;
    }
    Ok(())
}
