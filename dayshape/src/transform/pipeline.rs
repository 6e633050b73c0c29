//! High-level pipeline API.
//!
//! Combines loading, the four transformation stages, and per-file
//! error isolation for batches.
//!
//! # Example
//!
//! ```rust,no_run
//! use dayshape::transform::pipeline::process_file;
//! use std::path::Path;
//!
//! let report = process_file(Path::new("data/1.csv")).unwrap();
//! println!("{}: {} records", report.name, report.records.len());
//! ```

use serde::Serialize;
use std::path::{Path, PathBuf};

use super::{expand_ranges, normalize_column_names, reshape, select_fields};
use crate::error::{PipelineError, PipelineResult, TransformResult};
use crate::logs::{log_error, log_info, log_success};
use crate::models::{OutputRecord, Table};
use crate::parser::{parse_bytes_auto, ParseResult};

/// Output of one processed file.
#[derive(Debug, Clone, Serialize)]
pub struct FileReport {
    /// File base name, shown before the records
    pub name: String,
    /// Full path, when the input came from disk
    #[serde(skip_serializing_if = "Option::is_none")]
    pub path: Option<PathBuf>,
    /// One record per record-day pair
    pub records: Vec<OutputRecord>,
}

/// Outcome of a batch: successful reports and per-file failures.
#[derive(Debug, Default)]
pub struct BatchResult {
    pub reports: Vec<FileReport>,
    pub failures: Vec<(PathBuf, PipelineError)>,
}

impl BatchResult {
    pub fn is_ok(&self) -> bool {
        self.failures.is_empty()
    }

    pub fn summary(&self) -> String {
        format!(
            "Processed: {} files, {} failed",
            self.reports.len() + self.failures.len(),
            self.failures.len()
        )
    }
}

/// Run the four stages on an already loaded table.
///
/// Column names are lower-cased, range columns expanded, the table
/// reshaped into per-day rows, and `square` or `double` selected.
pub fn process_table(table: Table) -> TransformResult<Vec<OutputRecord>> {
    let table = normalize_column_names(table);
    let table = expand_ranges(table);
    let rows = reshape(&table)?;
    Ok(select_fields(rows))
}

/// Process CSV bytes. `name` identifies the input in the report.
pub fn process_bytes(bytes: &[u8], name: impl Into<String>) -> PipelineResult<FileReport> {
    let parse_result = parse_bytes_auto(bytes)?;
    log_parse_result(&parse_result);

    let records = process_table(parse_result.table)?;
    log_success(format!("{} day records", records.len()));

    Ok(FileReport {
        name: name.into(),
        path: None,
        records,
    })
}

/// Process one CSV file.
pub fn process_file(path: &Path) -> PipelineResult<FileReport> {
    log_info(format!("📄 Processing: {}", path.display()));

    let bytes = read_file(path)?;
    let mut report = process_bytes(&bytes, base_name(path))?;
    report.path = Some(path.to_path_buf());
    Ok(report)
}

/// Process every file in order. A failing file is logged and recorded;
/// the remaining files are still processed.
pub fn process_files(paths: &[PathBuf]) -> BatchResult {
    let mut result = BatchResult::default();

    for path in paths {
        match process_file(path) {
            Ok(report) => result.reports.push(report),
            Err(e) => {
                log_error(format!("{}: {}", path.display(), e));
                result.failures.push((path.clone(), e));
            }
        }
    }

    result
}

/// Load a file and return its table after normalization and range
/// expansion, without reshaping.
pub fn load_expanded(path: &Path) -> PipelineResult<Table> {
    let bytes = read_file(path)?;
    let parse_result = parse_bytes_auto(&bytes)?;
    log_parse_result(&parse_result);

    Ok(expand_ranges(normalize_column_names(parse_result.table)))
}

/// Final path component, or the whole path when there is none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

fn read_file(path: &Path) -> PipelineResult<Vec<u8>> {
    std::fs::read(path).map_err(|source| PipelineError::Unreadable {
        path: path.to_path_buf(),
        source,
    })
}

fn log_parse_result(parse_result: &ParseResult) {
    log_success(format!("Detected encoding: {}", parse_result.encoding));
    log_success(format!("Detected separator: '{}'", format_delimiter(parse_result.delimiter)));
    log_success(format!(
        "Read {} rows, {} columns",
        parse_result.table.row_count(),
        parse_result.headers.len()
    ));
}

/// Format delimiter for display
fn format_delimiter(d: char) -> String {
    match d {
        '\t' => "TAB".to_string(),
        c => c.to_string(),
    }
}
