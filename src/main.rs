//! HeatpumpSizing - Main Entry Point
//!
//! Reads one sizing request, writes one JSON document to stdout. Logs go to
//! stderr so the document stays the only thing on stdout.

use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::Parser;
use tracing::level_filters::LevelFilter;
use tracing::{info, warn, Level};
use tracing_subscriber::EnvFilter;

use heatpump_sizing::config::{load_config, AppSettings, LogFormat};
use heatpump_sizing::sizing::{compute, Document, SizingInput, SizingReport};

/// CLI arguments for the application
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Input document path; stdin when absent or "-"
    #[arg(short, long)]
    input: Option<String>,

    /// Path to configuration file
    #[arg(short, long, default_value = "config.toml")]
    config: String,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long)]
    log_level: Option<String>,

    /// Pretty-print the output document
    #[arg(long)]
    pretty: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();

    // Load environment variables from .env file if present
    dotenvy::dotenv().ok();

    let loaded = load_config(Some(args.config.as_str()));
    let settings = match &loaded {
        Ok(config) => config.settings.clone(),
        Err(_) => AppSettings::default(),
    };

    let log_level = args.log_level.as_deref().unwrap_or(&settings.log_level);
    init_logging(log_level, settings.log_format)?;

    let document = match loaded {
        Ok(_) => Document::from_result(run(&args)),
        Err(err) => {
            warn!("Configuration could not be loaded: {}", err);
            Document::from_result(Err(err.into()))
        }
    };

    if !document.is_success() {
        warn!("Sizing failed, writing failure document");
    }

    let json = document.to_json(args.pretty || settings.pretty_output)?;
    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{json}").context("failed to write output document")?;
    stdout.flush()?;

    Ok(())
}

fn run(args: &Args) -> Result<SizingReport> {
    let raw = read_input(args.input.as_deref())?;
    let input = SizingInput::from_json(&raw)?;
    let report = compute(&input)?;

    info!(
        construction_year = ?input.construction_year,
        usage = %report.usage,
        indoor_units = report.indoor_units.len(),
        outdoor_units = report.outdoor_units.len(),
        "Sizing complete"
    );

    Ok(report)
}

fn read_input(path: Option<&str>) -> Result<String> {
    match path {
        None | Some("-") => {
            info!("Reading input document from stdin");
            let mut raw = String::new();
            io::stdin()
                .read_to_string(&mut raw)
                .context("failed to read input from stdin")?;
            Ok(raw)
        }
        Some(path) => {
            info!("Reading input document from {}", path);
            std::fs::read_to_string(path)
                .with_context(|| format!("failed to read input from {path}"))
        }
    }
}

fn init_logging(log_level: &str, format: LogFormat) -> Result<()> {
    let level = match log_level.to_lowercase().as_str() {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    };

    // RUST_LOG wins over the configured level when set
    let filter = EnvFilter::builder()
        .with_default_directive(LevelFilter::from_level(level).into())
        .from_env_lossy();

    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(true)
        .with_file(true)
        .with_line_number(true);

    let installed = match format {
        LogFormat::Json => builder.json().try_init(),
        LogFormat::Text => builder.try_init(),
    };

    installed.map_err(|e| anyhow::anyhow!("failed to install logger: {e}"))
}
