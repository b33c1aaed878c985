//! Tick cleaning, filtering, and OHLCV aggregation.
//!
//! This crate implements the processing stages of the tickbar pipeline:
//! - Outlier-price and duplicate-timestamp removal over raw rows
//! - Time-window restriction
//! - Interval parsing, timestamp rounding, and streaming bar aggregation
//!
//! Stages consume their input and hand a new sequence to the next stage.
//! Rows are expected in ascending timestamp order throughout; source files
//! are assumed pre-sorted and concatenated in a stable order upstream.

pub mod aggregator;
pub mod cleaner;
pub mod interval;
pub mod rounding;
pub mod window;

pub use aggregator::{aggregate_rows, BarAggregator};
pub use cleaner::{clean, CleanStats};
pub use interval::parse_interval;
pub use rounding::round_to_interval;
pub use window::{filter_by_window, WindowStats};

use tickbar_core::{OhlcvBar, RawRow, Result, TimeWindow};

/// Counters describing one pipeline run, stage by stage.
#[derive(Debug, Clone, Copy, Default)]
pub struct PipelineStats {
    /// Rows loaded from all source files.
    pub input_rows: usize,
    /// Cleaning pass counters.
    pub clean: CleanStats,
    /// Window filter counters.
    pub window: WindowStats,
    /// Rows the aggregator skipped as unparseable.
    pub skipped_rows: usize,
    /// Bars emitted.
    pub bars: usize,
}

/// Run the full processing pipeline over already-loaded rows: clean,
/// restrict to the window, then aggregate.
///
/// Per-row failures are recovered inside the stages; only a malformed
/// interval aborts the run.
pub fn process(
    rows: Vec<RawRow>,
    window: &TimeWindow,
    interval: &str,
) -> Result<(Vec<OhlcvBar>, PipelineStats)> {
    let input_rows = rows.len();
    let (cleaned, clean_stats) = clean(rows);
    let (windowed, window_stats) = filter_by_window(cleaned, window);
    let (bars, skipped_rows) = aggregate_rows(windowed, interval)?;

    let stats = PipelineStats {
        input_rows,
        clean: clean_stats,
        window: window_stats,
        skipped_rows,
        bars: bars.len(),
    };
    Ok((bars, stats))
}
