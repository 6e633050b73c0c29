//! Transformation module.
//!
//! The four stages, applied in this order:
//! - Normalize: lower-case column names
//! - Expand: weekday range columns to single-day columns
//! - Reshape: wide to long, with `square`, `double` and the description number
//! - Select: keep `square` or `double` per day
//!
//! `pipeline` wires them to CSV loading and batches.

pub mod expand;
pub mod normalize;
pub mod pipeline;
pub mod reshape;
pub mod select;

pub use expand::{days_in_name, expand_ranges, range_span};
pub use normalize::normalize_column_names;
pub use pipeline::*;
pub use reshape::{reshape, DESCRIPTION_COLUMN};
pub use select::select_fields;
