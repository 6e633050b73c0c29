//! Error types for the dayshape pipeline.
//!
//! - [`CsvError`] - CSV loading errors, with line context
//! - [`TableError`] - Structural table errors (ragged columns)
//! - [`TransformError`] - Malformed table content found while reshaping
//! - [`ConfigError`] - Configuration and file discovery errors
//! - [`PipelineError`] - Top-level per-file errors
//!
//! Conversion into [`PipelineError`] is automatic via `From`,
//! so `?` works across stage boundaries.

use std::path::PathBuf;
use thiserror::Error;

use crate::models::{Number, Weekday};

// =============================================================================
// CSV Loading Errors
// =============================================================================

/// CSV loading error with the line it was raised on (0 when the error
/// is not tied to a line, e.g. undecodable bytes).
#[derive(Debug, Clone, PartialEq)]
pub struct CsvError {
    pub line: usize,
    pub message: String,
}

impl std::fmt::Display for CsvError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.line == 0 {
            write!(f, "{}", self.message)
        } else {
            write!(f, "Line {}: {}", self.line, self.message)
        }
    }
}

impl std::error::Error for CsvError {}

impl CsvError {
    pub fn new(line: usize, message: impl Into<String>) -> Self {
        Self {
            line,
            message: message.into(),
        }
    }
}

// =============================================================================
// Table Errors
// =============================================================================

/// Structural errors when assembling a [`crate::models::Table`].
#[derive(Debug, Error, PartialEq)]
pub enum TableError {
    /// A column does not have one cell per record.
    #[error("Column '{column}' has {actual} cells, expected {expected}")]
    RaggedColumn {
        column: String,
        expected: usize,
        actual: usize,
    },
}

// =============================================================================
// Transformation Errors
// =============================================================================

/// Malformed table content detected by the reshaper.
#[derive(Debug, Error, PartialEq)]
pub enum TransformError {
    /// A required column is absent.
    #[error("Missing column: {0}")]
    MissingColumn(String),

    /// A required cell is empty.
    #[error("Row {row}: column '{column}' is empty")]
    MissingValue { row: usize, column: String },

    /// The description column holds numbers instead of text.
    #[error("Row {row}: description '{value}' is numeric, expected text")]
    NumericDescription { row: usize, value: String },

    /// A weekday cell could not be used as a number.
    #[error("Row {row}, day '{day}': value '{value}' is not numeric")]
    NonNumeric {
        row: usize,
        day: Weekday,
        value: String,
    },

    /// Squaring or doubling an integer left the 64-bit range.
    #[error("Row {row}, day '{day}': {operation} of {value} overflows")]
    Overflow {
        row: usize,
        day: Weekday,
        operation: &'static str,
        value: Number,
    },
}

// =============================================================================
// Configuration Errors
// =============================================================================

/// Errors while loading configuration or discovering input files.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("Cannot read config '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid YAML for [`crate::config::Config`].
    #[error("Invalid config '{path}': {source}")]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    /// File pattern could not be compiled.
    #[error("Invalid file pattern: {0}")]
    Pattern(#[from] glob::PatternError),

    /// A discovered path could not be inspected.
    #[error("Cannot list input files: {0}")]
    Glob(#[from] glob::GlobError),
}

// =============================================================================
// Pipeline Errors (top-level)
// =============================================================================

/// Per-file errors returned by [`crate::transform::pipeline::process_file`].
///
/// Any of these aborts the file it was raised for. Other files in a
/// batch are unaffected.
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Input file missing or unreadable.
    #[error("Cannot read '{path}': {source}")]
    Unreadable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// CSV loading error.
    #[error("CSV error: {0}")]
    Csv(#[from] CsvError),

    /// Malformed table content.
    #[error("Transform error: {0}")]
    Transform(#[from] TransformError),

    /// Configuration error.
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Report could not be rendered or written.
    #[error("Report error: {0}")]
    Report(String),
}

// =============================================================================
// Result Type Aliases
// =============================================================================

/// Result type for CSV operations.
pub type CsvResult<T> = Result<T, CsvError>;

/// Result type for transformation operations.
pub type TransformResult<T> = Result<T, TransformError>;

/// Result type for configuration operations.
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Result type for pipeline operations.
pub type PipelineResult<T> = Result<T, PipelineError>;
