//! CLI entrypoint for council-viz
//!
//! This is the main binary that wires together all layers using
//! dependency injection.

use anyhow::{Context, Result, anyhow};
use clap::Parser;
use council_application::{
    NoProgress, RenderProgressNotifier, RenderReportError, RenderReportInput, RenderReportUseCase,
};
use council_domain::ReportFormat;
use council_infrastructure::{
    ConfigLoader, ConverterCommands, FileConfig, LocalSessionSource, standard_renderers,
};
use council_presentation::{Cli, ConsoleFormatter, ProgressReporter, SimpleProgress};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging based on verbosity level
    let filter = match cli.verbose {
        0 => EnvFilter::new("warn"),
        1 => EnvFilter::new("info"),
        2 => EnvFilter::new("debug"),
        _ => EnvFilter::new("trace"), // -vvv or more
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(error) => {
            // A missing input is reported on its own, without the context chain.
            let message = match error.downcast_ref::<RenderReportError>() {
                Some(render_error) if render_error.is_not_found() => render_error.to_string(),
                _ => format!("{error:#}"),
            };
            eprintln!("{}", ConsoleFormatter::error(&message));
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    if cli.show_config {
        ConfigLoader::print_config_sources(cli.config.as_deref());
        return Ok(());
    }

    let session_file = cli
        .session_file
        .clone()
        .context("SESSION_FILE is required")?;

    let config = load_config(&cli)?;
    if !config.output.color {
        ConsoleFormatter::disable_color();
    }
    for issue in config.validate() {
        warn!("{}", issue);
    }

    let format: ReportFormat = cli
        .format
        .map(Into::into)
        .or(config.output.format)
        .unwrap_or_default();
    info!("Starting council-viz ({} output)", format);

    // === Dependency Injection ===
    let (style, _) = config.to_report_style();
    let ((pdf, png), _) = config.converters.parse_commands();
    let use_case = standard_renderers(ConverterCommands { pdf, png })
        .into_iter()
        .fold(
            RenderReportUseCase::new(Arc::new(LocalSessionSource::new()), style),
            RenderReportUseCase::with_renderer,
        );

    let mut input = RenderReportInput::new(session_file, format);
    if let Some(output) = cli.output.clone() {
        input = input.with_output(output);
    }

    let progress: Box<dyn RenderProgressNotifier> = if cli.quiet {
        Box::new(NoProgress)
    } else if std::io::stdout().is_terminal() {
        Box::new(ProgressReporter::new())
    } else {
        Box::new(SimpleProgress)
    };

    let output = use_case.execute(input, progress.as_ref())?;

    if !cli.quiet {
        print!("{}", ConsoleFormatter::summary(&output.session));
    }
    println!("{}", ConsoleFormatter::saved(&output.output_path));

    Ok(())
}

fn load_config(cli: &Cli) -> Result<FileConfig> {
    if cli.no_config {
        return Ok(ConfigLoader::load_defaults());
    }
    ConfigLoader::load(cli.config.as_deref())
        .map_err(|e| anyhow!("Failed to load configuration: {e}"))
}
