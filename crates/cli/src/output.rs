//! Bar table output.

use std::path::Path;

use anyhow::{Context, Result};
use tickbar_core::{OhlcvBar, BOUNDARY_TS_FORMAT};

/// Render bars as a delimited table: header row, then one line per bar.
/// Timestamps are second precision; prices use their natural decimal form.
pub fn render_bars(bars: &[OhlcvBar]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(vec![]);

    writer.write_record(["timestamp", "open", "high", "low", "close", "volume"])?;
    for bar in bars {
        writer.write_record([
            bar.bucket_start.format(BOUNDARY_TS_FORMAT).to_string(),
            bar.open.to_string(),
            bar.high.to_string(),
            bar.low.to_string(),
            bar.close.to_string(),
            bar.volume.to_string(),
        ])?;
    }

    let data = writer.into_inner().context("failed to flush bar table")?;
    String::from_utf8(data).context("bar table is not valid UTF-8")
}

/// Write the bar table to `path`. A write failure here is structural and
/// aborts the run.
pub fn write_bars(path: &Path, bars: &[OhlcvBar]) -> Result<()> {
    let table = render_bars(bars)?;
    std::fs::write(path, table)
        .with_context(|| format!("failed to write {}", path.display()))?;
    Ok(())
}
