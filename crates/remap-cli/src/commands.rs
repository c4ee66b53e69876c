//! Subcommand implementations.

use std::collections::BTreeMap;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};

use anyhow::Context;
use tracing::{debug, info};

use remap_core::{RewriteOptions, rewrite_text};
use remap_ingest::{TableFormat, column_index, mapping_entries, read_rows, row_cell, write_rows};
use remap_model::MappingIndex;

use crate::cli::{LookupArgs, MapArgs};
use crate::types::{LookupRow, MapResult};

/// Runs the full map pipeline: load mapping, rewrite the read column of
/// every source row into the write column, write the output table and the
/// optional unmatched report.
pub fn run_map(args: &MapArgs) -> anyhow::Result<MapResult> {
    let index = load_index(
        &args.mapping,
        &args.id_col,
        &args.name_col,
        args.skip_header_mapping,
    )?;
    let read_idx = column_index(&args.read_col).context("invalid --read-col")?;
    let write_idx = column_index(&args.write_col).context("invalid --write-col")?;

    let mut rows = read_rows(TableFormat::Csv, &args.source)
        .with_context(|| format!("failed to read source {}", args.source.display()))?;
    let total_rows = rows.len();

    let options = RewriteOptions {
        prefix: args.prefix.clone(),
        keep_prefix: args.keep_prefix,
    };
    let mut converted = 0usize;
    let mut unmatched_counts: BTreeMap<String, usize> = BTreeMap::new();
    let mut unmatched_total = 0usize;
    for row in rows.iter_mut().skip(usize::from(args.skip_header_source)) {
        let value = row_cell(row, read_idx).to_string();
        if value.is_empty() {
            continue;
        }
        let outcome = rewrite_text(&value, &options, &index);
        unmatched_total += outcome.unmatched_count();
        for token in outcome.unmatched {
            *unmatched_counts.entry(token).or_insert(0) += 1;
        }
        set_cell(row, write_idx, outcome.text);
        converted += 1;
    }

    let output = args
        .output
        .clone()
        .unwrap_or_else(|| default_output_path(&args.source));
    write_rows(TableFormat::Csv, &output, &rows)
        .with_context(|| format!("failed to write output {}", output.display()))?;

    let unmatched_report = match &args.unmatched_report {
        Some(path) => {
            write_unmatched_report(path, &unmatched_counts)?;
            Some(path.clone())
        }
        None => None,
    };
    info!(
        rows = total_rows,
        converted,
        unmatched = unmatched_total,
        "map complete"
    );

    Ok(MapResult {
        source: args.source.clone(),
        output,
        rows: total_rows,
        converted,
        unmatched_total,
        unmatched_counts,
        unmatched_report,
    })
}

/// Resolves each requested token against the mapping table.
pub fn run_lookup(args: &LookupArgs) -> anyhow::Result<Vec<LookupRow>> {
    let index = load_index(
        &args.mapping,
        &args.id_col,
        &args.name_col,
        args.skip_header_mapping,
    )?;
    Ok(args
        .tokens
        .iter()
        .map(|token| LookupRow {
            token: token.clone(),
            resolution: index.resolve(token),
        })
        .collect())
}

fn load_index(
    path: &Path,
    id_col: &str,
    name_col: &str,
    skip_header: bool,
) -> anyhow::Result<MappingIndex> {
    let id_idx = column_index(id_col).context("invalid --id-col")?;
    let name_idx = column_index(name_col).context("invalid --name-col")?;
    let rows = read_rows(TableFormat::Csv, path)
        .with_context(|| format!("failed to read mapping {}", path.display()))?;
    let entries = mapping_entries(&rows, id_idx, name_idx, skip_header);
    let index = MappingIndex::build(entries);
    debug!(ids = index.len(), "loaded mapping table");
    Ok(index)
}

fn set_cell(row: &mut Vec<String>, index: usize, value: String) {
    if row.len() <= index {
        row.resize(index + 1, String::new());
    }
    row[index] = value;
}

/// `items.csv` becomes `items_mapped.csv` next to the source.
fn default_output_path(source: &Path) -> PathBuf {
    let stem = source
        .file_stem()
        .and_then(OsStr::to_str)
        .unwrap_or("output");
    let name = match source.extension().and_then(OsStr::to_str) {
        Some(ext) => format!("{stem}_mapped.{ext}"),
        None => format!("{stem}_mapped"),
    };
    source.with_file_name(name)
}

/// Writes an `unmatched_id,count` CSV, highest counts first, ties broken
/// by token for a stable order.
fn write_unmatched_report(path: &Path, counts: &BTreeMap<String, usize>) -> anyhow::Result<()> {
    let mut ordered: Vec<(&String, &usize)> = counts.iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));
    let mut rows = vec![vec!["unmatched_id".to_string(), "count".to_string()]];
    for (token, count) in ordered {
        rows.push(vec![token.clone(), count.to_string()]);
    }
    write_rows(TableFormat::Csv, path, &rows)
        .with_context(|| format!("failed to write unmatched report {}", path.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_output_keeps_extension() {
        assert_eq!(
            default_output_path(Path::new("/data/items.csv")),
            PathBuf::from("/data/items_mapped.csv")
        );
        assert_eq!(
            default_output_path(Path::new("items")),
            PathBuf::from("items_mapped")
        );
    }

    #[test]
    fn set_cell_extends_short_rows() {
        let mut row = vec!["a".to_string()];
        set_cell(&mut row, 3, "x".to_string());
        assert_eq!(row, vec!["a", "", "", "x"]);
    }
}
