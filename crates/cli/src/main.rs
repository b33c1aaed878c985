//! tickbar: aggregate tick-level trade files into fixed-interval OHLCV bars.
//!
//! Reads every matching tick file from the data directory, cleans outlier
//! prices and duplicate timestamps, restricts rows to the requested window,
//! and writes one OHLCV bar per interval bucket.
//!
//! Example: `tickbar 2024-09-18 09:30:00 2024-09-18 16:00:00 1m`

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDateTime;
use clap::Parser;
use tickbar_cli::{files, output};
use tickbar_core::{PipelineConfig, SourceConfig, TimeWindow, BOUNDARY_TS_FORMAT};
use tickbar_pipeline::PipelineStats;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(
    name = "tickbar",
    about = "Aggregate tick-level trade files into fixed-interval OHLCV bars"
)]
struct Cli {
    /// Window start date (YYYY-MM-DD).
    start_date: String,
    /// Window start time (HH:MM:SS).
    start_time: String,
    /// Window end date (YYYY-MM-DD).
    end_date: String,
    /// Window end time (HH:MM:SS).
    end_time: String,
    /// Aggregation interval, e.g. 1m, 30s, 1h30m.
    interval: String,

    /// Directory containing the tick files.
    #[arg(long, default_value = "./data")]
    data_dir: PathBuf,

    /// Output table path.
    #[arg(long, default_value = "ohlcv_data.csv")]
    output: PathBuf,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    let window = TimeWindow::new(
        parse_boundary(&cli.start_date, &cli.start_time)?,
        parse_boundary(&cli.end_date, &cli.end_time)?,
    );
    let config = PipelineConfig {
        source: SourceConfig {
            dir: cli.data_dir,
            ..SourceConfig::default()
        },
        output_path: cli.output,
        window,
        interval: cli.interval,
    };

    run(&config)
}

fn parse_boundary(date: &str, time: &str) -> Result<NaiveDateTime> {
    let joined = format!("{date} {time}");
    NaiveDateTime::parse_from_str(&joined, BOUNDARY_TS_FORMAT).with_context(|| {
        format!("invalid window boundary '{joined}' (expected YYYY-MM-DD HH:MM:SS)")
    })
}

fn run(config: &PipelineConfig) -> Result<()> {
    let (rows, files_read) = files::load_rows(&config.source);

    let (bars, stats) = tickbar_pipeline::process(rows, &config.window, &config.interval)
        .context("aggregation failed")?;

    output::write_bars(&config.output_path, &bars)?;
    print_summary(files_read, &stats, &config.output_path);
    Ok(())
}

fn print_summary(files_read: usize, stats: &PipelineStats, output_path: &Path) {
    println!("Files read:     {files_read}");
    println!("Rows loaded:    {}", stats.input_rows);
    println!(
        "After cleaning: {} (dropped: {} price, {} duplicate)",
        stats.clean.kept, stats.clean.dropped_price, stats.clean.dropped_duplicate
    );
    println!(
        "In window:      {} (outside: {}, unparseable: {})",
        stats.window.kept, stats.window.out_of_window, stats.window.unparseable
    );
    if stats.skipped_rows > 0 {
        println!("Skipped rows:   {}", stats.skipped_rows);
    }
    println!(
        "Bars written:   {} -> {}",
        stats.bars,
        output_path.display()
    );
}
