/*
cargo run --bin split_ads_by_area

cargo run --bin split_ads_by_area -- \
    --input public-chotot/data/ads.json \
    --output-dir public-chotot/data/split
*/

use std::fs::{create_dir_all, File};
use std::path::{Path, PathBuf};
use std::process;

use anyhow::{Context, Result};
use chrono::Local;
use clap::Parser;
use log::info;
use simplelog::{Config as LogConfig, LevelFilter, WriteLogger};

use ads_splitter::config::{DEFAULT_INPUT, DEFAULT_OUTPUT_DIR};
use ads_splitter::{run, SplitConfig};

// Split an ads.json array into one ads-<area_v2>.json per area.
#[derive(Parser, Debug)]
#[command(version, about)]
struct Cli {
    // Input JSON file (array of ad objects)
    #[arg(short, long, default_value = DEFAULT_INPUT)]
    input: PathBuf,

    // Directory for the per-area output files
    #[arg(short, long, default_value = DEFAULT_OUTPUT_DIR)]
    output_dir: PathBuf,

    // Directory for run logs
    #[arg(long, default_value = "logs")]
    log_dir: PathBuf,
}

fn main() {
    let cli = Cli::parse();

    // Pre-flight guard, before any logging or writes
    if !cli.input.exists() {
        eprintln!("Input file not found: {}", cli.input.display());
        process::exit(1);
    }

    if let Err(e) = run_split(&cli) {
        // Single boundary: one line, no stack trace
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run_split(cli: &Cli) -> Result<()> {
    init_logging(&cli.log_dir).context("setting up logging")?;

    let config = SplitConfig {
        input_file: cli.input.clone(),
        output_dir: cli.output_dir.clone(),
    };
    let summary = run(&config)?;

    println!(
        "Done: {} ads split across {} areas ({} files written)",
        summary.total_ads, summary.area_count, summary.files_written
    );
    info!(
        "done: {} ads, {} areas, {} files",
        summary.total_ads, summary.area_count, summary.files_written
    );
    Ok(())
}

fn init_logging(log_dir: &Path) -> Result<()> {
    create_dir_all(log_dir)
        .with_context(|| format!("creating {}", log_dir.display()))?;
    let ts = Local::now().format("%Y%m%d_%H%M%S");
    let log_path = log_dir.join(format!("split_ads_{ts}.log"));
    WriteLogger::init(
        LevelFilter::Info,
        LogConfig::default(),
        File::create(&log_path)?,
    )?;
    Ok(())
}
