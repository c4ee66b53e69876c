//! Mapping-table extraction.

use remap_model::MappingEntry;

/// Extracts `(id, name)` pairs from raw rows using 0-based column indexes.
///
/// Rows shorter than either column yield empty fields; rows with an empty
/// id are dropped later by the index build, so no filtering happens here.
#[must_use]
pub fn mapping_entries(
    rows: &[Vec<String>],
    id_col: usize,
    name_col: usize,
    skip_header: bool,
) -> Vec<MappingEntry> {
    rows.iter()
        .skip(usize::from(skip_header))
        .map(|row| MappingEntry::new(row_cell(row, id_col), row_cell(row, name_col)))
        .collect()
}

/// The cell at `index`, or the empty string when the row is too short.
#[must_use]
pub fn row_cell(row: &[String], index: usize) -> &str {
    row.get(index).map_or("", String::as_str)
}
