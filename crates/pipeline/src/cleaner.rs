//! Raw-row cleaning: outlier prices and duplicate timestamps.
//!
//! Two passes in a fixed order. Price filtering runs first, so a row dropped
//! as an outlier can never survive as the kept copy of a duplicate
//! timestamp.

use std::collections::HashSet;

use tickbar_core::RawRow;
use tracing::debug;

/// Fraction of the mean price below which a row is dropped as an outlier.
pub const OUTLIER_THRESHOLD_RATIO: f64 = 0.5;

/// Counters describing what a cleaning run dropped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CleanStats {
    /// Rows handed to the cleaner.
    pub input: usize,
    /// Rows dropped by the price pass (unparseable, non-positive, or below
    /// the outlier threshold).
    pub dropped_price: usize,
    /// Rows dropped as later copies of an already-seen timestamp.
    pub dropped_duplicate: usize,
    /// Rows surviving both passes.
    pub kept: usize,
}

/// Remove rows with unparseable, non-positive, or outlier prices.
///
/// The outlier threshold is [`OUTLIER_THRESHOLD_RATIO`] times the arithmetic
/// mean of all parseable positive prices. A single fixed pass: the mean is
/// computed once over the input, not re-estimated after removals. With no
/// positive price at all the result is empty.
pub fn remove_invalid_prices(rows: Vec<RawRow>) -> Vec<RawRow> {
    let prices: Vec<f64> = rows
        .iter()
        .filter_map(|row| row.price.parse::<f64>().ok())
        .filter(|p| *p > 0.0)
        .collect();

    if prices.is_empty() {
        debug!(rows = rows.len(), "no positive prices in input");
        return Vec::new();
    }

    let mean = prices.iter().sum::<f64>() / prices.len() as f64;
    let threshold = mean * OUTLIER_THRESHOLD_RATIO;

    let before = rows.len();
    let valid: Vec<RawRow> = rows
        .into_iter()
        .filter(|row| match row.price.parse::<f64>() {
            Ok(price) => price > 0.0 && price >= threshold,
            Err(_) => false,
        })
        .collect();

    debug!(
        mean,
        threshold,
        dropped = before - valid.len(),
        "price pass complete"
    );
    valid
}

/// Remove later rows sharing an already-seen timestamp.
///
/// Equality is on the raw timestamp field, not on a parsed time value, and
/// the first occurrence in scan order wins.
pub fn remove_duplicate_timestamps(rows: Vec<RawRow>) -> Vec<RawRow> {
    let mut seen: HashSet<String> = HashSet::with_capacity(rows.len());
    let mut unique = Vec::with_capacity(rows.len());
    for row in rows {
        if seen.insert(row.timestamp.clone()) {
            unique.push(row);
        }
    }
    unique
}

/// Run both cleaning passes and report what was dropped.
pub fn clean(rows: Vec<RawRow>) -> (Vec<RawRow>, CleanStats) {
    let input = rows.len();
    let priced = remove_invalid_prices(rows);
    let dropped_price = input - priced.len();
    let deduped = remove_duplicate_timestamps(priced);
    let stats = CleanStats {
        input,
        dropped_price,
        dropped_duplicate: input - dropped_price - deduped.len(),
        kept: deduped.len(),
    };
    debug!(?stats, "cleaning complete");
    (deduped, stats)
}
