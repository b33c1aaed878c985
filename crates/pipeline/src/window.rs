//! Time-window restriction of raw rows.

use tickbar_core::{RawRow, TimeWindow};
use tracing::{debug, warn};

/// Counters for one filtering run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct WindowStats {
    /// Rows inside the window.
    pub kept: usize,
    /// Rows with a valid timestamp outside the window.
    pub out_of_window: usize,
    /// Rows whose timestamp failed to parse.
    pub unparseable: usize,
}

/// Keep rows whose timestamp falls inside `window`, both ends inclusive.
///
/// Rows whose timestamp does not parse are dropped and reported; a parse
/// failure here never aborts the filter.
pub fn filter_by_window(rows: Vec<RawRow>, window: &TimeWindow) -> (Vec<RawRow>, WindowStats) {
    let mut stats = WindowStats::default();
    let mut kept = Vec::with_capacity(rows.len());

    for row in rows {
        match row.parse_ts() {
            Ok(ts) if window.contains(ts) => kept.push(row),
            Ok(_) => stats.out_of_window += 1,
            Err(e) => {
                warn!("skipping row: {e}");
                stats.unparseable += 1;
            }
        }
    }

    stats.kept = kept.len();
    debug!(?stats, "window filter complete");
    (kept, stats)
}
