//! Terminal preferences resolved once from the global flags.

use std::io::IsTerminal;
use std::sync::OnceLock;

use crate::cli::{ColorMode, GlobalFlags, OutputFormat};

/// Narrower `COLUMNS` values are ignored; the table falls back to natural width.
const MIN_TERM_WIDTH: usize = 40;

/// What the process learned about its terminal at startup.
#[derive(Clone, Debug, Default)]
pub struct Terminal {
    pub stdout_tty: bool,
    pub no_color: bool,
    pub columns: Option<String>,
}

impl Terminal {
    fn detect() -> Self {
        Self {
            stdout_tty: std::io::stdout().is_terminal(),
            no_color: std::env::var_os("NO_COLOR").is_some(),
            columns: std::env::var("COLUMNS").ok(),
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct UiPrefs {
    /// ANSI styling for the dashboard table and chart.
    pub color: bool,
    /// Spinner while the registry request runs.
    pub spinner: bool,
    pub width: Option<usize>,
}

impl UiPrefs {
    /// Only the table view is decorated; json and raw stay byte-clean.
    #[must_use]
    pub fn resolve(flags: &GlobalFlags, terminal: &Terminal) -> Self {
        let dashboard = flags.format == OutputFormat::Table;
        let color = dashboard
            && match flags.color {
                ColorMode::Always => true,
                ColorMode::Never => false,
                ColorMode::Auto => terminal.stdout_tty && !terminal.no_color && !flags.quiet,
            };

        Self {
            color,
            spinner: dashboard && terminal.stdout_tty && !flags.quiet,
            width: terminal
                .columns
                .as_deref()
                .and_then(|value| value.trim().parse::<usize>().ok())
                .filter(|width| *width >= MIN_TERM_WIDTH),
        }
    }
}

static UI_PREFS: OnceLock<UiPrefs> = OnceLock::new();

pub fn init(flags: &GlobalFlags) {
    let _ = UI_PREFS.set(UiPrefs::resolve(flags, &Terminal::detect()));
}

/// Undecorated output until [`init`] runs.
#[must_use]
pub fn prefs() -> UiPrefs {
    UI_PREFS.get().copied().unwrap_or_default()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flags(format: OutputFormat, color: ColorMode) -> GlobalFlags {
        GlobalFlags {
            format,
            color,
            quiet: false,
            verbose: false,
        }
    }

    fn tty() -> Terminal {
        Terminal {
            stdout_tty: true,
            no_color: false,
            columns: Some("120".to_string()),
        }
    }

    #[test]
    fn dashboard_on_a_tty_is_decorated() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Auto), &tty());
        assert_eq!(
            prefs,
            UiPrefs {
                color: true,
                spinner: true,
                width: Some(120),
            }
        );
    }

    #[test]
    fn json_is_never_decorated() {
        let prefs = UiPrefs::resolve(&flags(OutputFormat::Json, ColorMode::Always), &tty());
        assert!(!prefs.color);
        assert!(!prefs.spinner);
    }

    #[test]
    fn no_color_and_pipes_disable_color() {
        let piped = Terminal {
            stdout_tty: false,
            ..tty()
        };
        let no_color = Terminal {
            no_color: true,
            ..tty()
        };
        let auto = flags(OutputFormat::Table, ColorMode::Auto);
        assert!(!UiPrefs::resolve(&auto, &piped).color);
        assert!(!UiPrefs::resolve(&auto, &no_color).color);
        assert!(UiPrefs::resolve(&flags(OutputFormat::Table, ColorMode::Always), &piped).color);
    }

    #[test]
    fn narrow_or_bogus_columns_are_ignored() {
        let auto = flags(OutputFormat::Table, ColorMode::Auto);
        for columns in ["20", "wide", ""] {
            let terminal = Terminal {
                columns: Some(columns.to_string()),
                ..tty()
            };
            assert_eq!(UiPrefs::resolve(&auto, &terminal).width, None, "{columns}");
        }
    }
}
