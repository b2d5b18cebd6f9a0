//! CLI command definitions

use clap::{Parser, ValueEnum};
use council_domain::ReportFormat;
use std::path::PathBuf;

/// Report format as accepted on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    /// PDF document via an HTML converter
    Pdf,
    /// PNG image via an SVG rasterizer
    Png,
    /// SVG overview
    Svg,
    /// Standalone HTML page
    Html,
    /// Parsed session as JSON
    Json,
}

impl From<FormatArg> for ReportFormat {
    fn from(format: FormatArg) -> Self {
        match format {
            FormatArg::Pdf => ReportFormat::Pdf,
            FormatArg::Png => ReportFormat::Png,
            FormatArg::Svg => ReportFormat::Svg,
            FormatArg::Html => ReportFormat::Html,
            FormatArg::Json => ReportFormat::Json,
        }
    }
}

/// CLI arguments for council-viz
#[derive(Parser, Debug)]
#[command(name = "council-viz")]
#[command(author, version, about = "Generate visual reports of AI council session files")]
#[command(long_about = r#"
council-viz reads a council session transcript (markdown) and renders it as a
report: a styled HTML page, a compact SVG overview, or PDF/PNG versions of
those produced by an external converter.

PDF needs weasyprint or wkhtmltopdf; PNG needs rsvg-convert or cairosvg.

Configuration files are loaded from (in priority order):
1. --config <path>          Explicit config file
2. ./council-viz.toml       Project-level config
3. ~/.config/council-viz/config.toml   Global config

Example:
  council-viz sessions/2025-01-15-143022.md
  council-viz session.md -f html -o report.html
  council-viz session.md --format png -vv
"#)]
pub struct Cli {
    /// Path to the council session markdown file
    #[arg(value_name = "SESSION_FILE", required_unless_present = "show_config")]
    pub session_file: Option<PathBuf>,

    /// Output format [default: pdf, or output.format from config]
    #[arg(short, long, value_enum)]
    pub format: Option<FormatArg>,

    /// Output file path (default: same as input with new extension)
    #[arg(short, long, value_name = "PATH")]
    pub output: Option<PathBuf>,

    /// Verbosity level (-v = info, -vv = debug, -vvv = trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress the session summary and progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Path to configuration file
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Disable loading of configuration files
    #[arg(long)]
    pub no_config: bool,

    /// Show configuration file locations and exit
    #[arg(long)]
    pub show_config: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minimal() {
        let cli = Cli::try_parse_from(["council-viz", "session.md"]).unwrap();
        assert_eq!(cli.session_file, Some(PathBuf::from("session.md")));
        assert!(cli.format.is_none());
        assert!(cli.output.is_none());
        assert_eq!(cli.verbose, 0);
    }

    #[test]
    fn test_parse_all_options() {
        let cli = Cli::try_parse_from([
            "council-viz",
            "session.md",
            "-f",
            "svg",
            "-o",
            "out.svg",
            "-vv",
            "--quiet",
            "--no-config",
        ])
        .unwrap();
        assert_eq!(cli.format.map(ReportFormat::from), Some(ReportFormat::Svg));
        assert_eq!(cli.output, Some(PathBuf::from("out.svg")));
        assert_eq!(cli.verbose, 2);
        assert!(cli.quiet);
        assert!(cli.no_config);
    }

    #[test]
    fn test_session_file_required() {
        assert!(Cli::try_parse_from(["council-viz"]).is_err());
        let cli = Cli::try_parse_from(["council-viz", "--show-config"]).unwrap();
        assert!(cli.show_config);
        assert!(cli.session_file.is_none());
    }

    #[test]
    fn test_unknown_format_rejected() {
        assert!(Cli::try_parse_from(["council-viz", "s.md", "--format", "docx"]).is_err());
    }
}
