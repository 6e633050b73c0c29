//! Per-day rows produced by the reshaper and the field selector.

use serde::Serialize;

use super::{Number, Weekday};

/// One record-day row as produced by the reshaper, before field
/// selection. Field order matches the serialized key order.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ReshapedRow {
    pub day: Weekday,
    /// Original description, a space, then the description number.
    pub description: String,
    pub square: Number,
    pub double: Number,
    pub is_square: bool,
    pub value: Number,
}

impl ReshapedRow {
    /// The number appended to the description: `square` on square days,
    /// `double` otherwise.
    pub fn description_number(&self) -> Number {
        if self.is_square {
            self.square
        } else {
            self.double
        }
    }
}

/// The derived field kept on an output record.
///
/// Flattened into [`OutputRecord`], so it serializes as a single
/// `"square": n` or `"double": n` key.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Metric {
    Square(Number),
    Double(Number),
}

/// Final per-day record: day, description, square XOR double, value.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct OutputRecord {
    pub day: Weekday,
    pub description: String,
    #[serde(flatten)]
    pub metric: Metric,
    pub value: Number,
}

impl OutputRecord {
    pub fn square(&self) -> Option<Number> {
        match self.metric {
            Metric::Square(n) => Some(n),
            Metric::Double(_) => None,
        }
    }

    pub fn double(&self) -> Option<Number> {
        match self.metric {
            Metric::Double(n) => Some(n),
            Metric::Square(_) => None,
        }
    }
}
