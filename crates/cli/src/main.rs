//! # loadcurve
//!
//! Fits power-law curves of resource metrics against load and answers
//! "what would this metric be at load X" interactively.

mod display;
mod loader;
mod shell;

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{bail, Context};
use clap::Parser;
use curve_facade::{BuildReport, EngineConfig, EngineConfigBuilder, PredictionEngine};
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use display::format_coefficients;
use loader::load_csv_file;
use shell::Shell;

#[derive(Parser, Debug)]
#[command(name = "loadcurve")]
#[command(about = "Fit y = a·x^b to load metrics and predict interactively", long_about = None)]
struct Cli {
    /// Input CSV file with a header row
    #[arg(short, long, env = "LOADCURVE_INPUT", default_value = "data.csv")]
    input: PathBuf,

    /// Column holding the load (independent variable)
    #[arg(short = 'x', long, env = "LOADCURVE_X_COLUMN")]
    x_column: Option<String>,

    /// Metric column to fit; repeat for several (default: RX, TX, Read, Write, CPU load)
    #[arg(short, long = "target")]
    targets: Vec<String>,

    /// JSON file with `independent` and `targets`
    #[arg(short, long, env = "LOADCURVE_CONFIG")]
    config: Option<PathBuf>,

    /// Field delimiter of the CSV file
    #[arg(short, long, default_value_t = ',')]
    delimiter: char,

    /// Write the fitted coefficients to this JSON file
    #[arg(short, long)]
    export: Option<PathBuf>,
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "loadcurve=info,curve_core=info".into()),
        )
        .init();
}

/// Merge defaults, the optional config file and command-line flags.
fn resolve_config(cli: &Cli) -> anyhow::Result<EngineConfig> {
    let mut builder = EngineConfigBuilder::new();
    if let Some(path) = &cli.config {
        builder = builder.base(EngineConfig::from_json_file(path)?);
    }
    if let Some(x) = &cli.x_column {
        builder = builder.independent(x);
    }
    for target in &cli.targets {
        builder = builder.target(target);
    }
    Ok(builder.build()?)
}

fn delimiter_byte(delimiter: char) -> anyhow::Result<u8> {
    if !delimiter.is_ascii() {
        bail!("delimiter must be a single ASCII character, got '{}'", delimiter);
    }
    Ok(delimiter as u8)
}

fn report_build(report: &BuildReport) {
    for name in &report.skipped {
        println!("Column '{}' not found in file, skipping.", name);
    }
    for (name, e) in &report.failed {
        println!("Could not fit '{}': {}", name, e);
    }
    let excluded = report.excluded_samples();
    if excluded > 0 {
        println!(
            "{} samples with zero or negative values were left out of the fits.",
            excluded
        );
    }
}

fn export_table(engine: &PredictionEngine, path: &Path) -> anyhow::Result<()> {
    let file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    serde_json::to_writer_pretty(file, engine.table())
        .with_context(|| format!("writing {}", path.display()))?;
    println!("Coefficients written to {}", path.display());
    Ok(())
}

fn run(cli: Cli) -> anyhow::Result<()> {
    let config = resolve_config(&cli)?;
    let data = load_csv_file(&cli.input, delimiter_byte(cli.delimiter)?)
        .with_context(|| format!("loading {}", cli.input.display()))?;
    info!(
        rows = data.rows,
        columns = data.headers.len(),
        path = %cli.input.display(),
        "loaded input"
    );
    if data.coerced_cells() > 0 {
        println!(
            "{} non-numeric cells were read as 0.0.",
            data.coerced_cells()
        );
    }

    let (engine, report) =
        PredictionEngine::build(&data.columns, &config.independent, &config.targets)?;
    report_build(&report);

    println!("\n{}{}", format_coefficients(engine.table()), "-".repeat(50));

    if let Some(path) = &cli.export {
        export_table(&engine, path)?;
    }

    println!("\n=== Predictions by load ===");
    let stdin = io::stdin();
    let mut shell = Shell::new(&engine, &config.targets, stdin.lock(), io::stdout());
    let served = shell.run()?;
    info!(served, "session finished");
    Ok(())
}

fn main() {
    // Load .env file (optional - won't fail if missing)
    dotenvy::dotenv().ok();
    init_tracing();

    if let Err(err) = run(Cli::parse()) {
        error!("{:#}", err);
        eprintln!("Error: {:#}", err);
        std::process::exit(1);
    }
}
