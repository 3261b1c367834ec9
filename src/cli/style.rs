//! Terminal styling strategy
//!
//! Printers never call the color library directly. They receive a `Palette`
//! so that plain output (pipes, files, tests) is a matter of passing
//! `Palette::plain()`.

use std::io::IsTerminal;

use colored::Colorize;
use serde::{Deserialize, Serialize};

/// String transforms used to style rendered output
#[derive(Clone, Copy)]
pub struct Palette {
    /// Affirmative (success) styling
    pub ok: fn(&str) -> String,
    /// Alerting (failure) styling
    pub alert: fn(&str) -> String,
    /// Identifier highlight
    pub ident: fn(&str) -> String,
    /// Metadata highlight (author, profile, region)
    pub meta: fn(&str) -> String,
}

impl Palette {
    /// ANSI colored palette
    #[must_use]
    pub fn colored() -> Self {
        Self {
            ok: |s: &str| s.green().to_string(),
            alert: |s: &str| s.red().to_string(),
            ident: |s: &str| s.yellow().to_string(),
            meta: |s: &str| s.blue().to_string(),
        }
    }

    /// Identity palette: every transform returns its input unchanged
    #[must_use]
    pub fn plain() -> Self {
        Self {
            ok: str::to_string,
            alert: str::to_string,
            ident: str::to_string,
            meta: str::to_string,
        }
    }
}

/// When to emit colors
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum ColorMode {
    /// Color only when stdout is a terminal
    #[default]
    Auto,
    /// Always color
    Always,
    /// Never color
    Never,
}

impl ColorMode {
    /// Resolve the mode into a palette for stdout.
    ///
    /// `Always` and `Never` also pin the `colored` override, which otherwise
    /// consults the environment on its own.
    #[must_use]
    pub fn palette(self) -> Palette {
        let enabled = match self {
            Self::Auto => std::io::stdout().is_terminal(),
            Self::Always => {
                colored::control::set_override(true);
                true
            }
            Self::Never => {
                colored::control::set_override(false);
                false
            }
        };
        tracing::debug!(mode = ?self, enabled, "color mode resolved");

        if enabled {
            Palette::colored()
        } else {
            Palette::plain()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    fn test_plain_palette_is_identity() {
        let p = Palette::plain();
        for f in [p.ok, p.alert, p.ident, p.meta] {
            assert_eq!(f("exec-42"), "exec-42");
        }
    }

    #[test]
    #[serial]
    fn test_colored_palette_keeps_text() {
        colored::control::set_override(true);
        let p = Palette::colored();
        let styled = (p.alert)("KO");
        assert!(styled.contains("KO"));
        assert_ne!(styled, "KO");
    }

    #[test]
    #[serial]
    fn test_never_mode_is_identity() {
        let p = ColorMode::Never.palette();
        for f in [p.ok, p.alert, p.ident, p.meta] {
            assert_eq!(f("exec-42"), "exec-42");
        }
        assert_eq!("KO".red().to_string(), "KO");
    }

    #[test]
    #[serial]
    fn test_always_mode_colors() {
        let p = ColorMode::Always.palette();
        let styled = (p.ok)("OK");
        assert!(styled.contains("OK"));
        assert_ne!(styled, "OK");
    }

    #[test]
    fn test_color_mode_deserializes_lowercase() {
        #[derive(Deserialize)]
        struct Wrapper {
            color: ColorMode,
        }
        let w: Wrapper = toml::from_str(r#"color = "never""#).unwrap();
        assert_eq!(w.color, ColorMode::Never);
    }
}
