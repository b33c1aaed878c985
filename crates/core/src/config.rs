//! Configuration structures for a pipeline run.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::types::TimeWindow;

/// Where source files come from.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SourceConfig {
    /// Directory scanned for source files.
    pub dir: PathBuf,
    /// File name prefix selecting tick files.
    pub prefix: String,
    /// File name suffix selecting tick files.
    pub suffix: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./data"),
            prefix: "ctg_tick_".to_string(),
            suffix: ".csv".to_string(),
        }
    }
}

/// Configuration injected into a single pipeline run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Source file discovery settings.
    pub source: SourceConfig,
    /// Output table path.
    pub output_path: PathBuf,
    /// Inclusive time window applied to rows.
    pub window: TimeWindow,
    /// Aggregation interval string, e.g. "1m" or "1h30m".
    pub interval: String,
}

impl PipelineConfig {
    /// Build a config with default source and output locations.
    pub fn new(window: TimeWindow, interval: impl Into<String>) -> Self {
        Self {
            source: SourceConfig::default(),
            output_path: PathBuf::from("ohlcv_data.csv"),
            window,
            interval: interval.into(),
        }
    }
}
