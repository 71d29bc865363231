//! fitbox - Entry Point

use clap::Parser;
use fitbox::config::CliOverrides;
use fitbox::model::{AppError, EntryList, FontSize};
use fitbox::view::{BoxStyles, ColorConfig};
use std::path::PathBuf;
use tracing::info;

/// Render labels in a box that shrinks its font to fit
#[derive(Parser, Debug)]
#[command(name = "fitbox")]
#[command(version)]
#[command(about = "Render labels in a box whose font size follows the wrapped row count")]
pub struct Args {
    /// Label to render; repeat for several (replaces configured entries)
    #[arg(short, long = "entry", value_name = "TEXT")]
    pub entries: Vec<String>,

    /// Container width as a percentage of the terminal width
    #[arg(short, long, value_parser = clap::value_parser!(u8).range(1..=100))]
    pub width_percent: Option<u8>,

    /// Font size in pixels before the first measurement
    #[arg(long, value_parser = clap::value_parser!(u16).range(1..))]
    pub font_size: Option<u16>,

    /// Path to configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Disable colors
    #[arg(long)]
    pub no_color: bool,

    /// Measure once without a terminal and print the result
    #[arg(long)]
    pub report: bool,
}

impl Args {
    fn cli_overrides(&self) -> CliOverrides {
        CliOverrides {
            entries: (!self.entries.is_empty()).then(|| EntryList::new(self.entries.clone())),
            width_percent: self.width_percent,
            font_size: self.font_size.and_then(FontSize::new),
        }
    }
}

fn main() -> Result<(), AppError> {
    let args = Args::parse();

    // Defaults → Config File → Env Vars → CLI Args
    let config = {
        let config_file = fitbox::config::load_config_with_precedence(args.config.clone())?;
        let merged = fitbox::config::merge_config(config_file);
        let with_env = fitbox::config::apply_env_overrides(merged);
        fitbox::config::apply_cli_overrides(with_env, args.cli_overrides())
    };

    fitbox::logging::init(&config.log_file_path)?;

    info!(config = ?config, "Configuration loaded and resolved");

    if args.report {
        let widget = fitbox::view::report(&config)?;
        println!(
            "entries={} font_size={} ellipsis={}",
            widget.entries().len(),
            widget.font_size(),
            widget.ellipsis()
        );
        return Ok(());
    }

    let styles = BoxStyles::for_colors(ColorConfig::from_env_and_args(args.no_color));
    fitbox::view::run(&config, styles)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_help_does_not_error() {
        let result = Args::try_parse_from(["fitbox", "--help"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayHelp);
    }

    #[test]
    fn test_version_does_not_error() {
        let result = Args::try_parse_from(["fitbox", "--version"]);
        let err = result.unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::DisplayVersion);
    }

    #[test]
    fn test_no_args_defaults() {
        let args = Args::parse_from(["fitbox"]);
        assert!(args.entries.is_empty());
        assert_eq!(args.width_percent, None);
        assert_eq!(args.font_size, None);
        assert_eq!(args.config, None);
        assert!(!args.no_color);
        assert!(!args.report);
        assert_eq!(args.cli_overrides(), CliOverrides::default());
    }

    #[test]
    fn test_repeated_entry_flags_keep_order() {
        let args = Args::parse_from(["fitbox", "-e", "one", "--entry", "two"]);
        assert_eq!(args.entries, ["one", "two"]);
        assert_eq!(
            args.cli_overrides().entries,
            Some(EntryList::new(["one", "two"]))
        );
    }

    #[test]
    fn test_width_percent_rejects_zero() {
        let result = Args::try_parse_from(["fitbox", "--width-percent", "0"]);
        assert_eq!(
            result.unwrap_err().kind(),
            clap::error::ErrorKind::ValueValidation
        );
    }

    #[test]
    fn test_width_percent_rejects_over_hundred() {
        let result = Args::try_parse_from(["fitbox", "-w", "101"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_font_size_rejects_zero() {
        let result = Args::try_parse_from(["fitbox", "--font-size", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_font_size_flag() {
        let args = Args::parse_from(["fitbox", "--font-size", "20"]);
        assert_eq!(args.cli_overrides().font_size, FontSize::new(20));
    }

    #[test]
    fn test_report_flag() {
        let args = Args::parse_from(["fitbox", "--report"]);
        assert!(args.report);
    }
}
