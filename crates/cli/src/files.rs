//! Source file discovery and row loading.

use std::fs::File;
use std::io;
use std::path::{Path, PathBuf};

use tickbar_core::{Error, RawRow, Result, SourceConfig};
use tracing::{debug, warn};

/// Discover tick files in the source directory: names carrying the
/// configured prefix and suffix, sorted so the concatenation order is
/// stable across runs.
pub fn discover_files(source: &SourceConfig) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(&source.dir) {
        Ok(entries) => entries,
        Err(e) => {
            warn!("cannot list {}: {e}", source.dir.display());
            return Vec::new();
        }
    };

    let mut files: Vec<PathBuf> = entries
        .flatten()
        .filter(|entry| {
            let name = entry.file_name().to_string_lossy().to_string();
            name.starts_with(&source.prefix) && name.ends_with(&source.suffix)
        })
        .map(|entry| entry.path())
        .collect();
    files.sort();
    files
}

/// Read one tick file into raw rows.
///
/// Each record's first three fields become timestamp, price, and volume;
/// extra fields are ignored, records with fewer than three fields are
/// dropped with a warning. Any read failure makes the whole file count as
/// unreadable.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>> {
    let file = File::open(path).map_err(|e| Error::file_read(path, e))?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(file);

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(|e| {
            Error::file_read(path, io::Error::new(io::ErrorKind::InvalidData, e))
        })?;
        match (record.get(0), record.get(1), record.get(2)) {
            (Some(ts), Some(price), Some(volume)) => {
                rows.push(RawRow::new(ts, price, volume));
            }
            _ => warn!(
                "{}: dropping short record with {} field(s)",
                path.display(),
                record.len()
            ),
        }
    }
    Ok(rows)
}

/// Load every discovered file, concatenated in discovery order.
///
/// A file that cannot be read is reported and contributes no rows; the run
/// continues with the remaining files. Returns the rows and the number of
/// files successfully read.
pub fn load_rows(source: &SourceConfig) -> (Vec<RawRow>, usize) {
    let mut rows = Vec::new();
    let mut files_read = 0usize;

    for path in discover_files(source) {
        match read_rows(&path) {
            Ok(mut file_rows) => {
                debug!(rows = file_rows.len(), "loaded {}", path.display());
                rows.append(&mut file_rows);
                files_read += 1;
            }
            Err(e) => warn!("{e}"),
        }
    }
    (rows, files_read)
}
