//! Output management and formatting.

use std::io::{self, IsTerminal};

use clap::ValueEnum;
use console::Term;
use owo_colors::OwoColorize;
use serde::Serialize;

use pkgwiz_core::domain::{ScaffoldReport, WriteAction, WriteOutcome};

use crate::cli::global::{GlobalArgs, OutputFormat};
use crate::config::AppConfig;

/// Manages CLI output based on configuration.
pub struct OutputManager {
    resolved_format: OutputFormat,
    quiet: bool,
    no_color: bool,
    term: Term,
}

impl OutputManager {
    /// Build an `OutputManager` from parsed CLI flags and loaded config.
    ///
    /// `--output-format` wins over `output.format`; `auto` in both resolves
    /// to Human on a TTY and Plain otherwise.
    pub fn new(args: &GlobalArgs, config: &AppConfig) -> Self {
        let requested = match args.output_format {
            OutputFormat::Auto => {
                OutputFormat::from_str(&config.output.format, true).unwrap_or_default()
            }
            explicit => explicit,
        };
        let resolved_format = match requested {
            OutputFormat::Auto if io::stdout().is_terminal() => OutputFormat::Human,
            OutputFormat::Auto => OutputFormat::Plain,
            other => other,
        };

        Self {
            resolved_format,
            quiet: args.quiet,
            no_color: args.no_color
                || config.output.no_color
                || resolved_format != OutputFormat::Human,
            term: Term::stdout(),
        }
    }

    // ── Public write methods ───────────────────────────────────────────────

    /// Generic message; suppressed in quiet mode.
    pub fn print(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        self.term.write_line(msg)
    }

    /// Success indicator: `✓ <msg>`.
    pub fn success(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2713} {msg}") // ✓
        } else {
            format!("{} {}", "\u{2713}".green().bold(), msg.green())
        };
        self.term.write_line(&line)
    }

    /// Warning indicator: `⚠ <msg>`.
    pub fn warning(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{26a0} {msg}") // ⚠
        } else {
            format!("{} {}", "\u{26a0}".yellow().bold(), msg.yellow())
        };
        self.term.write_line(&line)
    }

    /// Informational indicator: `ℹ <msg>`.
    pub fn info(&self, msg: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            format!("\u{2139} {msg}") // ℹ
        } else {
            format!("{} {}", "\u{2139}".blue().bold(), msg.blue())
        };
        self.term.write_line(&line)
    }

    /// Bold cyan header line.
    pub fn header(&self, text: &str) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let line = if self.no_color {
            text.to_owned()
        } else {
            text.cyan().bold().to_string()
        };
        self.term.write_line(&line)
    }

    /// One line per file: `created  pkg/README.md`.
    pub fn outcome(&self, outcome: &WriteOutcome) -> io::Result<()> {
        if self.quiet {
            return Ok(());
        }
        let label = format!("{:<11}", outcome.action.to_string());
        let path = outcome.path.display();
        let line = if self.no_color {
            format!("{label} {path}")
        } else {
            match outcome.action {
                WriteAction::Created => format!("{} {path}", label.green()),
                WriteAction::Overwritten => format!("{} {path}", label.yellow()),
                WriteAction::Skipped => format!("{} {path}", label.dimmed()),
            }
        };
        self.term.write_line(&line)
    }

    /// Every outcome of `report`, or a single JSON document in JSON mode.
    pub fn report(&self, report: &ScaffoldReport) -> io::Result<()> {
        if self.is_json() {
            return self.json(report);
        }
        for outcome in report.iter() {
            self.outcome(outcome)?;
        }
        Ok(())
    }

    /// Pretty JSON to stdout. Not suppressed in quiet mode: it was asked
    /// for explicitly.
    pub fn json<T: Serialize + ?Sized>(&self, value: &T) -> io::Result<()> {
        let text = serde_json::to_string_pretty(value).map_err(io::Error::other)?;
        self.term.write_line(&text)
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// `true` if ANSI colours are enabled.
    pub fn supports_color(&self) -> bool {
        !self.no_color
    }

    pub fn is_json(&self) -> bool {
        self.resolved_format == OutputFormat::Json
    }

    /// The resolved (non-Auto) output format.
    pub fn format(&self) -> OutputFormat {
        self.resolved_format
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn make_manager(quiet: bool, format: OutputFormat, config: &AppConfig) -> OutputManager {
        let args = GlobalArgs {
            verbose: 0,
            quiet,
            no_color: false,
            config: None,
            output_format: format,
        };
        OutputManager::new(&args, config)
    }

    #[test]
    fn explicit_format_wins_over_config() {
        let mut config = AppConfig::default();
        config.output.format = "json".into();

        let out = make_manager(false, OutputFormat::Plain, &config);
        assert_eq!(out.format(), OutputFormat::Plain);
    }

    #[test]
    fn config_format_used_when_flag_is_auto() {
        let mut config = AppConfig::default();
        config.output.format = "JSON".into();

        let out = make_manager(false, OutputFormat::Auto, &config);
        assert!(out.is_json());
    }

    #[test]
    fn unknown_config_format_falls_back_to_detection() {
        let mut config = AppConfig::default();
        config.output.format = "fancy".into();

        let out = make_manager(false, OutputFormat::Auto, &config);
        assert_ne!(out.format(), OutputFormat::Auto);
    }

    #[test]
    fn color_only_in_human_mode() {
        let config = AppConfig::default();
        assert!(make_manager(false, OutputFormat::Human, &config).supports_color());
        assert!(!make_manager(false, OutputFormat::Plain, &config).supports_color());

        let mut config = AppConfig::default();
        config.output.no_color = true;
        assert!(!make_manager(false, OutputFormat::Human, &config).supports_color());
    }

    #[test]
    fn quiet_suppresses_outcomes() {
        let out = make_manager(true, OutputFormat::Plain, &AppConfig::default());
        let outcome = WriteOutcome::new("readme", "pkg/README.md", WriteAction::Created);
        assert!(out.outcome(&outcome).is_ok());
    }
}
