//! Execution log printers
//!
//! Each printer renders one `TemplateExecution` to its sink. `LogFormat`
//! picks the printer; the printers themselves hold nothing but the sink and
//! the palette.

use std::io::{self, Write};

use serde::{Deserialize, Serialize};

use super::align::align_action_entity_count;
use super::errfmt::write_error;
use super::error::RenderError;
use super::header::{write_rich_header, write_simple_header};
use super::style::Palette;
use crate::execution::{CommandOutcome, TemplateExecution};

/// Renders a template execution
pub trait LogPrinter {
    /// Render `exec`. The first write failure aborts the render.
    fn print(&mut self, exec: &TemplateExecution) -> Result<(), RenderError>;
}

/// Output formats for the execution log
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// One status line per command
    #[default]
    Default,
    /// Header plus every command with its result
    Full,
    /// Summary line plus per-action counts
    Stat,
    /// Summary line only
    Short,
    /// The raw execution as JSON
    Raw,
    /// The execution id only
    Id,
}

impl LogFormat {
    /// Build the printer for this format.
    pub fn printer<'a, W: Write + 'a>(self, w: W, palette: Palette) -> Box<dyn LogPrinter + 'a> {
        match self {
            Self::Default => Box::new(DefaultPrinter::new(w, palette)),
            Self::Full => Box::new(FullPrinter::new(w, palette)),
            Self::Stat => Box::new(StatPrinter::new(w, palette)),
            Self::Short => Box::new(ShortPrinter::new(w, palette)),
            Self::Raw => Box::new(RawJsonPrinter::new(w)),
            Self::Id => Box::new(IdOnlyPrinter::new(w)),
        }
    }

    /// Whether the rendered output spans several lines
    #[must_use]
    pub const fn is_multiline(self) -> bool {
        matches!(self, Self::Default | Self::Full | Self::Stat)
    }
}

/// `OK`/`KO` tag for a command, decided only by whether it recorded an error
fn status_tag(palette: &Palette, cmd: &CommandOutcome) -> String {
    if cmd.succeeded() {
        (palette.ok)("OK")
    } else {
        (palette.alert)("KO")
    }
}

/// Simple header followed by every command, its result and any error
pub struct FullPrinter<W> {
    w: W,
    palette: Palette,
}

impl<W: Write> FullPrinter<W> {
    /// Create a printer writing to `w`
    pub const fn new(w: W, palette: Palette) -> Self {
        Self { w, palette }
    }

    fn write_to(&mut self, exec: &TemplateExecution) -> io::Result<()> {
        write_simple_header(&mut self.w, &self.palette, exec)?;

        for cmd in &exec.commands {
            let status = status_tag(&self.palette, cmd);
            match cmd.text_result() {
                Some(result) => writeln!(self.w, "    {status}\t{}\t[{result}]", cmd.line)?,
                None => writeln!(self.w, "    {status}\t{}", cmd.line)?,
            }
            write_error(&mut self.w, &self.palette, cmd.error.as_deref())?;
        }
        Ok(())
    }
}

impl<W: Write> LogPrinter for FullPrinter<W> {
    fn print(&mut self, exec: &TemplateExecution) -> Result<(), RenderError> {
        self.write_to(exec).map_err(|e| RenderError::write("full", e))
    }
}

/// Rich header followed by aggregate action counts
pub struct StatPrinter<W> {
    w: W,
    palette: Palette,
}

impl<W: Write> StatPrinter<W> {
    /// Create a printer writing to `w`
    pub const fn new(w: W, palette: Palette) -> Self {
        Self { w, palette }
    }

    fn write_to(&mut self, exec: &TemplateExecution) -> io::Result<()> {
        write_rich_header(&mut self.w, &self.palette, exec)?;
        writeln!(self.w)?;

        let stats = exec.stats();
        if stats.cmd_count > 1 {
            for line in align_action_entity_count(&stats.action_entity_count) {
                writeln!(self.w, "\t{line}")?;
            }
        }
        Ok(())
    }
}

impl<W: Write> LogPrinter for StatPrinter<W> {
    fn print(&mut self, exec: &TemplateExecution) -> Result<(), RenderError> {
        self.write_to(exec).map_err(|e| RenderError::write("stat", e))
    }
}

/// Rich header only
pub struct ShortPrinter<W> {
    w: W,
    palette: Palette,
}

impl<W: Write> ShortPrinter<W> {
    /// Create a printer writing to `w`
    pub const fn new(w: W, palette: Palette) -> Self {
        Self { w, palette }
    }
}

impl<W: Write> LogPrinter for ShortPrinter<W> {
    fn print(&mut self, exec: &TemplateExecution) -> Result<(), RenderError> {
        write_rich_header(&mut self.w, &self.palette, exec)
            .map_err(|e| RenderError::write("short", e))
    }
}

/// One line per command, `entity = result` when a result exists
pub struct DefaultPrinter<W> {
    w: W,
    palette: Palette,
}

impl<W: Write> DefaultPrinter<W> {
    /// Create a printer writing to `w`
    pub const fn new(w: W, palette: Palette) -> Self {
        Self { w, palette }
    }

    fn write_to(&mut self, exec: &TemplateExecution) -> io::Result<()> {
        for cmd in &exec.commands {
            let status = status_tag(&self.palette, cmd);
            match cmd.text_result() {
                Some(result) => writeln!(self.w, "    {status}\t{} = {result}\t", cmd.entity)?,
                None => writeln!(self.w, "    {status}\t{} {}\t", cmd.action, cmd.entity)?,
            }
            write_error(&mut self.w, &self.palette, cmd.error.as_deref())?;
        }
        Ok(())
    }
}

impl<W: Write> LogPrinter for DefaultPrinter<W> {
    fn print(&mut self, exec: &TemplateExecution) -> Result<(), RenderError> {
        self.write_to(exec).map_err(|e| RenderError::write("default", e))
    }
}

/// Dumps the execution as a single JSON document
pub struct RawJsonPrinter<W> {
    w: W,
}

impl<W: Write> RawJsonPrinter<W> {
    /// Create a printer writing to `w`
    pub const fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> LogPrinter for RawJsonPrinter<W> {
    fn print(&mut self, exec: &TemplateExecution) -> Result<(), RenderError> {
        serde_json::to_writer(&mut self.w, exec).map_err(RenderError::Json)?;
        writeln!(self.w).map_err(|e| RenderError::write("json", e))
    }
}

/// Writes the execution id and nothing else
pub struct IdOnlyPrinter<W> {
    w: W,
}

impl<W: Write> IdOnlyPrinter<W> {
    /// Create a printer writing to `w`
    pub const fn new(w: W) -> Self {
        Self { w }
    }
}

impl<W: Write> LogPrinter for IdOnlyPrinter<W> {
    fn print(&mut self, exec: &TemplateExecution) -> Result<(), RenderError> {
        self.w
            .write_all(exec.id.as_bytes())
            .map_err(|e| RenderError::write("id", e))
    }
}
