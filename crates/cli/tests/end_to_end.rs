//! Full-pipeline test: discovery, cleaning, windowing, aggregation, output.

use std::path::Path;

use chrono::NaiveDateTime;
use tickbar_cli::{files, output};
use tickbar_core::{SourceConfig, TimeWindow};

fn window(start: &str, end: &str) -> TimeWindow {
    let fmt = "%Y-%m-%d %H:%M:%S";
    TimeWindow::new(
        NaiveDateTime::parse_from_str(start, fmt).unwrap(),
        NaiveDateTime::parse_from_str(end, fmt).unwrap(),
    )
}

fn source_for(dir: &Path) -> SourceConfig {
    SourceConfig {
        dir: dir.to_path_buf(),
        ..SourceConfig::default()
    }
}

#[test]
fn two_files_with_duplicates_and_outlier() {
    let dir = tempfile::tempdir().unwrap();

    // File a: time-ordered ticks including a far-below-mean outlier.
    std::fs::write(
        dir.path().join("ctg_tick_20240918_a.csv"),
        "2024-09-18 09:30:00.100000,10.0,5\n\
         2024-09-18 09:30:10.000000,10.4,3\n\
         2024-09-18 09:30:20.000000,0.01,7\n",
    )
    .unwrap();
    // File b: repeats one of a's timestamps, then continues later.
    std::fs::write(
        dir.path().join("ctg_tick_20240918_b.csv"),
        "2024-09-18 09:30:10.000000,10.4,3\n\
         2024-09-18 09:31:05.000000,10.2,2\n",
    )
    .unwrap();
    // Non-matching names are never picked up.
    std::fs::write(dir.path().join("notes.txt"), "ignore me").unwrap();

    let (rows, files_read) = files::load_rows(&source_for(dir.path()));
    assert_eq!(files_read, 2);
    assert_eq!(rows.len(), 5);

    let (bars, stats) = tickbar_pipeline::process(
        rows,
        &window("2024-09-18 09:30:00", "2024-09-18 16:00:00"),
        "1m",
    )
    .unwrap();

    // The duplicate tick's volume is counted once, and the outlier never
    // touches the first bar's low.
    assert_eq!(bars.len(), 2);
    assert_eq!(bars[0].volume, 8);
    assert_eq!(bars[0].low, 10.0);
    assert_eq!(bars[0].high, 10.4);
    assert_eq!(bars[1].volume, 2);
    assert_eq!(stats.clean.dropped_duplicate, 1);
    assert_eq!(stats.clean.dropped_price, 1);

    let out_path = dir.path().join("ohlcv_data.csv");
    output::write_bars(&out_path, &bars).unwrap();
    let written = std::fs::read_to_string(&out_path).unwrap();
    assert_eq!(
        written,
        "timestamp,open,high,low,close,volume\n\
         2024-09-18 09:30:00,10,10.4,10,10.4,8\n\
         2024-09-18 09:31:00,10.2,10.2,10.2,10.2,2\n"
    );
}

#[test]
fn empty_source_directory_yields_header_only_output() {
    let dir = tempfile::tempdir().unwrap();

    let (rows, files_read) = files::load_rows(&source_for(dir.path()));
    assert_eq!(files_read, 0);
    assert!(rows.is_empty());

    let (bars, _) = tickbar_pipeline::process(
        rows,
        &window("2024-09-18 09:30:00", "2024-09-18 16:00:00"),
        "1m",
    )
    .unwrap();
    assert!(bars.is_empty());

    let out_path = dir.path().join("ohlcv_data.csv");
    output::write_bars(&out_path, &bars).unwrap();
    assert_eq!(
        std::fs::read_to_string(&out_path).unwrap(),
        "timestamp,open,high,low,close,volume\n"
    );
}

#[test]
fn malformed_interval_is_fatal_before_aggregation() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(
        dir.path().join("ctg_tick_x.csv"),
        "2024-09-18 09:30:00.000000,10.0,5\n",
    )
    .unwrap();

    let (rows, _) = files::load_rows(&source_for(dir.path()));
    let result = tickbar_pipeline::process(
        rows,
        &window("2024-09-18 09:30:00", "2024-09-18 16:00:00"),
        "1q",
    );
    assert!(result.is_err());
}
