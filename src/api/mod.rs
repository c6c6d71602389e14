//! High-level library API: invert a CSV file to another file, invert an
//! in-memory table, or run a directory of CSV files as a batch. Prefer these
//! entrypoints over the low-level `core` and `io` modules when embedding pixinv.
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, info, warn};

use crate::core::params::InvertParams;
use crate::core::processing::invert_with_max;
use crate::core::table::{Table, select_columns_with_prefix};
use crate::error::{Error, Result};
use crate::io::{load, save};

/// Suffix appended to a file stem to name its inverted output.
pub const INVERTED_SUFFIX: &str = "_inverted";

/// Outcome of one file pass
#[derive(Debug, Clone, Serialize)]
pub struct InvertReport {
    pub input: PathBuf,
    pub output: PathBuf,
    pub rows: usize,
    pub columns: usize,
    pub inverted_columns: Vec<String>,
    pub generated_at: String,
}

/// Select and invert in memory (no disk I/O).
///
/// Returns the inverted table together with the names of the columns that
/// were inverted, in table order.
pub fn invert_table(table: &Table, params: &InvertParams) -> Result<(Table, Vec<String>)> {
    let selected = select_columns_with_prefix(table, &params.prefix);
    if selected.is_empty() {
        warn!(
            "No columns start with '{}'; output will equal input",
            params.prefix
        );
    } else {
        debug!("Selected columns: {:?}", selected);
    }
    let inverted = invert_with_max(table, &selected, params.max_value)?;
    Ok((inverted, selected))
}

/// Load `input`, invert the selected columns and save to `output`.
///
/// Steps run strictly in order and the first failure aborts the pass; in
/// particular nothing is written when loading or inverting fails.
pub fn invert_file(input: &Path, output: &Path, params: &InvertParams) -> Result<InvertReport> {
    let table = load(input)?;
    let (inverted, selected) = invert_table(&table, params)?;
    save(&inverted, output)?;

    Ok(InvertReport {
        input: input.to_path_buf(),
        output: output.to_path_buf(),
        rows: inverted.row_count(),
        columns: inverted.column_count(),
        inverted_columns: selected,
        generated_at: chrono::Utc::now().to_rfc3339(),
    })
}

/// Output path for `input` inside `output_dir`: `<stem>_inverted.csv`.
pub fn inverted_output_path(input: &Path, output_dir: &Path) -> PathBuf {
    let stem = input
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    output_dir.join(format!("{}{}.csv", stem, INVERTED_SUFFIX))
}

/// A file that failed during a batch run
#[derive(Debug, Clone, Serialize)]
pub struct BatchFailure {
    pub path: PathBuf,
    pub error: String,
}

/// Batch processing report
#[derive(Debug, Clone, Default, Serialize)]
pub struct BatchReport {
    pub processed: usize,
    pub skipped: usize,
    pub errors: usize,
    pub files: Vec<InvertReport>,
    pub failures: Vec<BatchFailure>,
    pub generated_at: String,
}

fn is_batch_candidate(path: &Path) -> bool {
    let is_csv = path
        .extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("csv"));
    let already_inverted = path
        .file_stem()
        .and_then(|s| s.to_str())
        .is_some_and(|s| s.ends_with(INVERTED_SUFFIX));
    path.is_file() && is_csv && !already_inverted
}

/// Immediate entries of `input_dir`, sorted by path.
fn sorted_entries(input_dir: &Path) -> Result<Vec<PathBuf>> {
    let read_dir = std::fs::read_dir(input_dir).map_err(|e| match e.kind() {
        ErrorKind::NotFound => Error::NotFound {
            path: input_dir.to_path_buf(),
        },
        _ => Error::Io(e),
    })?;
    let mut paths = Vec::new();
    for entry in read_dir {
        paths.push(entry?.path());
    }
    paths.sort();
    Ok(paths)
}

/// Invert every `*.csv` file directly inside `input_dir` into `output_dir`.
///
/// Files run sequentially in name order. Sub-directories, non-CSV files and
/// files already named `*_inverted.csv` are counted as skipped. If
/// `continue_on_error` is true, failures are recorded in the report and
/// processing continues; otherwise the first error is returned.
pub fn process_directory_to_path(
    input_dir: &Path,
    output_dir: &Path,
    params: &InvertParams,
    continue_on_error: bool,
) -> Result<BatchReport> {
    let entries = sorted_entries(input_dir)?;
    std::fs::create_dir_all(output_dir).map_err(|e| Error::write(output_dir, e))?;

    let mut report = BatchReport::default();
    for path in entries {
        if !is_batch_candidate(&path) {
            debug!("Skipping: {:?}", path);
            report.skipped += 1;
            continue;
        }

        let output_path = inverted_output_path(&path, output_dir);
        info!("Processing: {:?} -> {:?}", path, output_path);

        match invert_file(&path, &output_path, params) {
            Ok(file_report) => {
                report.processed += 1;
                report.files.push(file_report);
            }
            Err(e) => {
                warn!("Error processing {:?}: {}", path, e);
                report.errors += 1;
                if !continue_on_error {
                    return Err(e);
                }
                report.failures.push(BatchFailure {
                    path,
                    error: e.to_string(),
                });
            }
        }
    }

    report.generated_at = chrono::Utc::now().to_rfc3339();
    Ok(report)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::table::Column;
    use crate::types::Value;

    #[test]
    fn output_name_appends_suffix() {
        let out = inverted_output_path(Path::new("/data/digits.csv"), Path::new("/out"));
        assert_eq!(out, PathBuf::from("/out/digits_inverted.csv"));
    }

    #[test]
    fn invert_table_reports_selected_columns() {
        let t = Table::from_columns(vec![
            Column::new("pixel0", vec![Value::Integer(10)]),
            Column::new("label", vec![Value::Integer(3)]),
        ])
        .unwrap();
        let (out, selected) = invert_table(&t, &InvertParams::default()).unwrap();
        assert_eq!(selected, vec!["pixel0"]);
        assert_eq!(out.cell(0, "pixel0"), Some(&Value::Integer(245)));
        assert_eq!(out.cell(0, "label"), Some(&Value::Integer(3)));
    }

    #[test]
    fn invert_table_honours_params() {
        let t = Table::from_columns(vec![
            Column::new("px_a", vec![Value::Integer(1)]),
            Column::new("pixel0", vec![Value::Integer(1)]),
        ])
        .unwrap();
        let params = InvertParams {
            prefix: "px_".to_string(),
            max_value: 1,
        };
        let (out, selected) = invert_table(&t, &params).unwrap();
        assert_eq!(selected, vec!["px_a"]);
        assert_eq!(out.cell(0, "px_a"), Some(&Value::Integer(0)));
        assert_eq!(out.cell(0, "pixel0"), Some(&Value::Integer(1)));
    }

    #[test]
    fn batch_candidates() {
        assert!(!is_batch_candidate(Path::new("/nope/a.csv")));
        assert!(!is_batch_candidate(Path::new("notes.txt")));
    }
}
