//! Core data types for the tickbar pipeline.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Timestamp format of source rows: `YYYY-MM-DD HH:MM:SS.ffffff`.
/// Sub-second precision is required at ingestion.
pub const ROW_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.6f";

/// Timestamp format of time-window boundaries and output rows:
/// `YYYY-MM-DD HH:MM:SS` (second precision).
pub const BOUNDARY_TS_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One line of a source file, fields untouched.
///
/// The cleaning passes operate on raw fields: duplicate detection compares
/// the timestamp string as-is, and rows whose price field does not parse are
/// dropped without ever becoming a [`Tick`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawRow {
    /// Timestamp field, formatted per [`ROW_TS_FORMAT`].
    pub timestamp: String,
    /// Price field.
    pub price: String,
    /// Volume field.
    pub volume: String,
}

impl RawRow {
    /// Create a raw row from its three fields.
    pub fn new(
        timestamp: impl Into<String>,
        price: impl Into<String>,
        volume: impl Into<String>,
    ) -> Self {
        Self {
            timestamp: timestamp.into(),
            price: price.into(),
            volume: volume.into(),
        }
    }

    /// Parse the timestamp field at full sub-second precision.
    pub fn parse_ts(&self) -> Result<NaiveDateTime> {
        NaiveDateTime::parse_from_str(&self.timestamp, ROW_TS_FORMAT)
            .map_err(|e| Error::row_parse(format!("bad timestamp '{}': {e}", self.timestamp)))
    }

    /// Parse all three fields into a tick.
    pub fn to_tick(&self) -> Result<Tick> {
        let ts = self.parse_ts()?;
        let price: f64 = self
            .price
            .parse()
            .map_err(|_| Error::row_parse(format!("bad price '{}'", self.price)))?;
        let volume: u64 = self
            .volume
            .parse()
            .map_err(|_| Error::row_parse(format!("bad volume '{}'", self.volume)))?;
        Ok(Tick { ts, price, volume })
    }
}

/// A single trade observation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Tick {
    /// Naive local timestamp with sub-second precision.
    pub ts: NaiveDateTime,
    /// Trade price.
    pub price: f64,
    /// Trade volume.
    pub volume: u64,
}

/// Aggregated Open/High/Low/Close/Volume summary for one time bucket.
///
/// A bar covers the half-open interval `[bucket_start, bucket_start + interval)`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OhlcvBar {
    /// Bucket boundary timestamp (sub-seconds zeroed).
    pub bucket_start: NaiveDateTime,
    /// First price in the bucket.
    pub open: f64,
    /// Highest price in the bucket.
    pub high: f64,
    /// Lowest price in the bucket.
    pub low: f64,
    /// Last price in the bucket.
    pub close: f64,
    /// Total volume in the bucket.
    pub volume: u64,
}

impl OhlcvBar {
    /// Seed a bar from the first tick of its bucket.
    pub fn seed(bucket_start: NaiveDateTime, price: f64, volume: u64) -> Self {
        Self {
            bucket_start,
            open: price,
            high: price,
            low: price,
            close: price,
            volume,
        }
    }

    /// Fold a later tick of the same bucket into the bar. The close always
    /// takes the incoming price, so in-bucket input order is significant.
    pub fn absorb(&mut self, price: f64, volume: u64) {
        self.high = self.high.max(price);
        self.low = self.low.min(price);
        self.close = price;
        self.volume += volume;
    }
}

/// Inclusive timestamp range used to restrict rows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeWindow {
    /// First timestamp kept.
    pub start: NaiveDateTime,
    /// Last timestamp kept.
    pub end: NaiveDateTime,
}

impl TimeWindow {
    /// Create a window from its boundaries.
    pub fn new(start: NaiveDateTime, end: NaiveDateTime) -> Self {
        Self { start, end }
    }

    /// Whether a timestamp falls inside the window (both ends inclusive).
    #[inline]
    pub fn contains(&self, ts: NaiveDateTime) -> bool {
        self.start <= ts && ts <= self.end
    }
}
