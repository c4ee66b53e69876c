use std::collections::BTreeMap;
use std::path::PathBuf;

use remap_model::Resolution;

/// Outcome of a `map` run, for summary printing and JSON output.
#[derive(Debug, serde::Serialize)]
pub struct MapResult {
    pub source: PathBuf,
    pub output: PathBuf,
    /// Total rows in the source table, header included.
    pub rows: usize,
    /// Rows whose read cell was non-empty and got rewritten.
    pub converted: usize,
    pub unmatched_total: usize,
    /// Unmatched token -> occurrence count.
    pub unmatched_counts: BTreeMap<String, usize>,
    pub unmatched_report: Option<PathBuf>,
}

/// One resolved token from a `lookup` run.
#[derive(Debug)]
pub struct LookupRow {
    pub token: String,
    pub resolution: Resolution,
}
