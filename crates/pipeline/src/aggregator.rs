//! Streaming OHLCV aggregation over cleaned, filtered rows.

use chrono::{Duration, NaiveDateTime};
use tickbar_core::{OhlcvBar, RawRow, Result, Tick};
use tracing::{debug, warn};

use crate::interval::parse_interval;
use crate::rounding::round_to_interval;

/// Streaming state machine folding time-ordered ticks into fixed-width bars.
///
/// Each tick's timestamp is rounded to the configured interval; the rounded
/// value seeds a bucket covering `[bucket_start, bucket_start + interval)`.
/// A tick whose rounded timestamp lands exactly on `bucket_start + interval`
/// belongs to the next bucket. Ticks must arrive in ascending timestamp
/// order: a bar is finalized the moment a later-bucketed tick arrives and
/// never reopens.
#[derive(Debug)]
pub struct BarAggregator {
    interval: Duration,
    bar: Option<OhlcvBar>,
}

impl BarAggregator {
    /// Create an aggregator for the given bucket width.
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            bar: None,
        }
    }

    /// Bucket start of the bar currently being built.
    pub fn current_bucket(&self) -> Option<NaiveDateTime> {
        self.bar.as_ref().map(|bar| bar.bucket_start)
    }

    /// Fold one tick into the aggregation. Returns the finalized previous
    /// bar when this tick opens a new bucket.
    pub fn push(&mut self, tick: Tick) -> Option<OhlcvBar> {
        let rounded = round_to_interval(tick.ts, self.interval);

        if let Some(bar) = self.bar.as_mut() {
            if rounded < bar.bucket_start + self.interval {
                bar.absorb(tick.price, tick.volume);
                return None;
            }
        }
        self.bar
            .replace(OhlcvBar::seed(rounded, tick.price, tick.volume))
    }

    /// Emit the trailing in-progress bar, if any.
    pub fn finish(&mut self) -> Option<OhlcvBar> {
        self.bar.take()
    }
}

/// Aggregate time-ordered rows into fixed-interval bars.
///
/// The interval string is parsed first; a malformed interval fails the whole
/// aggregation before any row is consumed. Rows whose timestamp, price, or
/// volume fail to parse are skipped, counted, and reported. Empty input
/// produces an empty bar sequence.
///
/// Returns the bars and the number of skipped rows.
pub fn aggregate_rows(rows: Vec<RawRow>, interval: &str) -> Result<(Vec<OhlcvBar>, usize)> {
    let delta = parse_interval(interval)?;

    let mut aggregator = BarAggregator::new(delta);
    let mut bars = Vec::new();
    let mut skipped = 0usize;

    for row in rows {
        let tick = match row.to_tick() {
            Ok(tick) => tick,
            Err(e) => {
                warn!("skipping row: {e}");
                skipped += 1;
                continue;
            }
        };
        if let Some(done) = aggregator.push(tick) {
            bars.push(done);
        }
    }
    if let Some(tail) = aggregator.finish() {
        bars.push(tail);
    }

    debug!(bars = bars.len(), skipped, "aggregation complete");
    Ok((bars, skipped))
}
