//! Tabular format adapters.
//!
//! Formats form a small closed set selected by an explicit tag, never by
//! sniffing file contents. CSV is the only member today; a new format adds
//! an enum variant and its read/write arms.

use std::path::Path;

use tracing::debug;

use crate::error::{IngestError, Result};

/// Supported tabular formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TableFormat {
    #[default]
    Csv,
}

/// Reads every row of a tabular file into memory, in file order.
///
/// No header handling happens here; callers decide whether the first row
/// is data. Ragged rows are allowed and come back at their natural length.
pub fn read_rows(format: TableFormat, path: &Path) -> Result<Vec<Vec<String>>> {
    match format {
        TableFormat::Csv => read_csv(path),
    }
}

/// Writes rows to a tabular file, replacing any existing content.
pub fn write_rows(format: TableFormat, path: &Path, rows: &[Vec<String>]) -> Result<()> {
    match format {
        TableFormat::Csv => write_csv(path, rows),
    }
}

fn read_csv(path: &Path) -> Result<Vec<Vec<String>>> {
    let read_error = |source| IngestError::Read {
        path: path.to_path_buf(),
        source,
    };
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)
        .map_err(read_error)?;
    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record.map_err(read_error)?;
        rows.push(record.iter().map(str::to_string).collect());
    }
    debug!(path = %path.display(), rows = rows.len(), "read table");
    Ok(rows)
}

fn write_csv(path: &Path, rows: &[Vec<String>]) -> Result<()> {
    let write_error = |source| IngestError::Write {
        path: path.to_path_buf(),
        source,
    };
    let mut writer = csv::WriterBuilder::new()
        .flexible(true)
        .from_path(path)
        .map_err(write_error)?;
    for row in rows {
        writer.write_record(row).map_err(write_error)?;
    }
    writer.flush()?;
    debug!(path = %path.display(), rows = rows.len(), "wrote table");
    Ok(())
}
