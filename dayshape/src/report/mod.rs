//! Report rendering: the file's base name, then its records as
//! pretty-printed JSON, then a blank line.

use std::fs;
use std::path::Path;

use crate::error::PipelineError;
use crate::transform::pipeline::FileReport;

/// Render one report.
pub fn render_report(report: &FileReport) -> Result<String, PipelineError> {
    let records = serde_json::to_string_pretty(&report.records)
        .map_err(|e| PipelineError::Report(e.to_string()))?;
    Ok(format!("{}\n{}\n\n", report.name, records))
}

/// Render several reports back to back.
pub fn render_reports(reports: &[FileReport]) -> Result<String, PipelineError> {
    let mut out = String::new();
    for report in reports {
        out.push_str(&render_report(report)?);
    }
    Ok(out)
}

/// Write rendered reports to `path`, or to stdout when `None`.
pub fn write_output(content: &str, path: Option<&Path>) -> Result<(), PipelineError> {
    match path {
        Some(p) => fs::write(p, content)
            .map_err(|e| PipelineError::Report(format!("Cannot write '{}': {}", p.display(), e))),
        None => {
            print!("{}", content);
            Ok(())
        }
    }
}
