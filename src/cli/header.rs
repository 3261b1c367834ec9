//! Execution header lines
//!
//! Two flavors: a plain `ID: ... Date: ...` line used above the full command
//! listing, and a compact colored summary used by the short and stat views.

use std::io::{self, Write};

use chrono::Local;

use super::style::Palette;
use crate::execution::{is_revertible, TemplateExecution};
use crate::humanize::humanize_time;

/// `strftime` layout for the simple header date (`Jan  2 15:04:05`)
pub const DATE_LAYOUT: &str = "%b %e %H:%M:%S";

const NOT_REVERTIBLE: &str = " (not revertible)";

/// Write the simple header, terminated by a newline.
pub fn write_simple_header<W: Write>(
    w: &mut W,
    palette: &Palette,
    exec: &TemplateExecution,
) -> io::Result<()> {
    write!(
        w,
        "ID: {}\tDate: {}",
        (palette.ident)(&exec.id),
        exec.date.with_timezone(&Local).format(DATE_LAYOUT)
    )?;
    if !exec.author.is_empty() {
        write!(w, "\tAuthor: {}", exec.author)?;
    }
    if !exec.locale.is_empty() {
        write!(w, "\tRegion: {}", exec.locale)?;
    }
    if !exec.profile.is_empty() {
        write!(w, "\tProfile: {}", exec.profile)?;
    }
    if !is_revertible(exec) {
        write!(w, "{NOT_REVERTIBLE}")?;
    }
    writeln!(w)
}

/// Write the rich one-line summary. No trailing newline.
pub fn write_rich_header<W: Write>(
    w: &mut W,
    palette: &Palette,
    exec: &TemplateExecution,
) -> io::Result<()> {
    let stats = exec.stats();

    write!(w, "{}", (palette.ident)(&exec.id))?;
    if stats.ko_count == 0 {
        write!(w, "{}", (palette.ok)(" OK"))?;
    } else {
        write!(w, "{}", (palette.alert)(" KO"))?;
    }

    write!(w, " - ")?;

    if stats.cmd_count == 1 {
        write!(w, "{}", stats.oneliner)?;
    } else {
        write!(w, "{} commands", stats.cmd_count)?;
    }

    write!(w, " ({} ago)", humanize_time(exec.date))?;

    if !exec.author.is_empty() {
        write!(w, " by {}", (palette.meta)(&exec.author))?;
    }
    if !exec.profile.is_empty() {
        write!(w, " with profile {}", (palette.meta)(&exec.profile))?;
    }
    if !exec.locale.is_empty() {
        write!(w, " in {}", (palette.meta)(&exec.locale))?;
    }
    if !is_revertible(exec) {
        write!(w, "{NOT_REVERTIBLE}")?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testutil::{failed_command, make_test_execution, ok_command, render_with};
    use chrono::{Duration, Utc};

    fn simple(exec: &TemplateExecution) -> String {
        render_with(|w| write_simple_header(w, &Palette::plain(), exec))
    }

    fn rich(exec: &TemplateExecution) -> String {
        render_with(|w| write_rich_header(w, &Palette::plain(), exec))
    }

    fn local_date(exec: &TemplateExecution) -> String {
        exec.date.with_timezone(&Local).format(DATE_LAYOUT).to_string()
    }

    #[test]
    fn test_simple_header_all_fields() {
        let mut exec = make_test_execution("exec-1", vec![ok_command("start", "instance", None)]);
        exec.author = "alice".to_string();
        exec.locale = "eu-west-1".to_string();
        exec.profile = "prod".to_string();

        assert_eq!(
            simple(&exec),
            format!(
                "ID: exec-1\tDate: {}\tAuthor: alice\tRegion: eu-west-1\tProfile: prod\n",
                local_date(&exec)
            )
        );
    }

    #[test]
    fn test_simple_header_omits_empty_fields() {
        let mut exec = make_test_execution("exec-1", vec![ok_command("stop", "instance", None)]);
        exec.profile = "dev".to_string();

        assert_eq!(
            simple(&exec),
            format!("ID: exec-1\tDate: {}\tProfile: dev\n", local_date(&exec))
        );
    }

    #[test]
    fn test_simple_header_not_revertible_suffix() {
        let exec = make_test_execution("exec-1", vec![ok_command("delete", "subnet", None)]);
        assert!(simple(&exec).ends_with(" (not revertible)\n"));
    }

    #[test]
    fn test_rich_header_single_command_uses_oneliner() {
        let mut exec =
            make_test_execution("exec-1", vec![ok_command("create", "vpc", Some("vpc-9"))]);
        exec.date = Utc::now() - Duration::hours(3) - Duration::minutes(5);

        assert_eq!(rich(&exec), "exec-1 OK - create vpc (3 hours ago)");
    }

    #[test]
    fn test_rich_header_counts_commands() {
        let exec = make_test_execution(
            "exec-1",
            vec![
                ok_command("start", "instance", None),
                ok_command("stop", "instance", None),
            ],
        );
        let out = rich(&exec);
        assert!(out.contains(" OK - 2 commands ("));
        assert!(!out.contains("start instance"));
    }

    #[test]
    fn test_rich_header_metadata_order() {
        let mut commands: Vec<_> = (0..6).map(|_| ok_command("delete", "subnet", None)).collect();
        commands.push(failed_command("delete", "vpc", "dependency violation"));
        let mut exec = make_test_execution("exec-42", commands);
        exec.author = "alice".to_string();
        exec.profile = "prod".to_string();
        exec.locale = "us-east-1".to_string();

        let out = rich(&exec);
        let positions: Vec<usize> = [
            "exec-42",
            " KO",
            "7 commands",
            "by alice",
            "with profile prod",
            "in us-east-1",
            "(not revertible)",
        ]
        .iter()
        .map(|needle| out.find(needle).unwrap())
        .collect();

        assert!(positions.windows(2).all(|p| p[0] < p[1]), "{out}");
        assert!(!out.ends_with('\n'));
    }
}
