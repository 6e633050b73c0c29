//! # dayshape - weekday column reshaping
//!
//! Reads CSV files whose columns are weekdays (`mon`) or weekday ranges
//! (`mon-wed`), and turns every record into one row per day carrying the
//! value and either its square (mon, tue, wed) or its double (thu, fri).
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────┐   ┌───────────┐   ┌──────────┐   ┌──────────┐   ┌──────────┐
//! │ CSV File │──▶│ Normalize │──▶│  Expand  │──▶│ Reshape  │──▶│  Select  │──▶ records
//! │ (auto)   │   │ lowercase │   │ mon-wed  │   │ wide→long│   │ sq | dbl │
//! └──────────┘   └───────────┘   └──────────┘   └──────────┘   └──────────┘
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use dayshape::process_bytes;
//!
//! let csv = "Mon-Tue,thu,description\n3,6,first_desc\n";
//! let report = process_bytes(csv.as_bytes(), "inline.csv").unwrap();
//!
//! assert_eq!(report.records.len(), 3);
//! assert_eq!(report.records[0].description, "first_desc 9");
//! assert_eq!(report.records[2].description, "first_desc 12");
//! ```
//!
//! ## Modules
//!
//! - [`error`] - Error types
//! - [`models`] - Weekday, cells, table, per-day records
//! - [`parser`] - CSV loading with encoding/delimiter detection
//! - [`transform`] - The four stages and the pipeline
//! - [`config`] - YAML config and file discovery
//! - [`report`] - Report rendering
//! - [`logs`] - Log broadcasting

// Core modules
pub mod error;
pub mod models;

// Loading
pub mod parser;

// Transformation
pub mod transform;

// Driver support
pub mod config;
pub mod logs;
pub mod report;

// =============================================================================
// Re-exports - Error types
// =============================================================================

pub use error::{
    ConfigError,
    CsvError,
    PipelineError,
    TableError,
    TransformError,
};

// =============================================================================
// Re-exports - Models
// =============================================================================

pub use models::{
    Cell,
    Column,
    Metric,
    Number,
    OutputRecord,
    ReshapedRow,
    Table,
    Weekday,
};

// =============================================================================
// Re-exports - CSV Parsing
// =============================================================================

pub use parser::{
    csv_to_table,
    decode_content,
    detect_delimiter,
    detect_encoding,
    parse_bytes_auto,
    ParseResult,
};

// =============================================================================
// Re-exports - Stages
// =============================================================================

pub use transform::{
    expand_ranges,
    normalize_column_names,
    reshape,
    select_fields,
};

// =============================================================================
// Re-exports - Pipeline
// =============================================================================

pub use transform::pipeline::{
    process_bytes,
    process_file,
    process_files,
    process_table,
    BatchResult,
    FileReport,
};

// =============================================================================
// Re-exports - Config & Report
// =============================================================================

pub use config::{discover_csv_files, Config};
pub use report::{render_report, render_reports, write_output};
