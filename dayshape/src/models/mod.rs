//! Domain models for the dayshape pipeline.
//!
//! - [`Weekday`] - The five canonical weekday tokens, in order
//! - [`Number`] - Integer or float value of a weekday cell
//! - [`Cell`] - One scalar cell of a [`Table`]
//! - [`Table`] - Named, equal-length columns of cells
//! - [`ReshapedRow`] / [`OutputRecord`] - Per-day rows before and after field selection

pub mod record;
pub mod table;

pub use record::{Metric, OutputRecord, ReshapedRow};
pub use table::{Column, Table};

use serde::{Deserialize, Serialize};
use std::fmt;

// =============================================================================
// Weekday
// =============================================================================

/// A weekday token. Declaration order is the canonical order used for
/// range detection and slicing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Weekday {
    Mon,
    Tue,
    Wed,
    Thu,
    Fri,
}

impl Weekday {
    /// All weekdays in canonical order.
    pub const ALL: [Weekday; 5] = [
        Weekday::Mon,
        Weekday::Tue,
        Weekday::Wed,
        Weekday::Thu,
        Weekday::Fri,
    ];

    /// Lower-case token, also used as the column name.
    pub fn as_str(self) -> &'static str {
        match self {
            Weekday::Mon => "mon",
            Weekday::Tue => "tue",
            Weekday::Wed => "wed",
            Weekday::Thu => "thu",
            Weekday::Fri => "fri",
        }
    }

    /// Exact token lookup (no substring matching).
    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|day| day.as_str() == token)
    }

    /// Position in [`Weekday::ALL`].
    pub fn index(self) -> usize {
        self as usize
    }

    /// Days whose description number is the squared value (mon, tue, wed).
    /// The remaining days use the doubled value.
    pub fn is_square(self) -> bool {
        matches!(self, Weekday::Mon | Weekday::Tue | Weekday::Wed)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// =============================================================================
// Number
// =============================================================================

/// Numeric value of a weekday cell.
///
/// Serializes as a plain JSON number.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Number {
    Int(i64),
    Float(f64),
}

impl Number {
    /// `self * self`, `None` on integer overflow.
    pub fn squared(self) -> Option<Number> {
        match self {
            Number::Int(i) => i.checked_mul(i).map(Number::Int),
            Number::Float(f) => Some(Number::Float(f * f)),
        }
    }

    /// The same value as a float.
    pub fn to_float(self) -> Number {
        match self {
            Number::Int(i) => Number::Float(i as f64),
            float => float,
        }
    }

    /// `self * 2`, `None` on integer overflow.
    pub fn doubled(self) -> Option<Number> {
        match self {
            Number::Int(i) => i.checked_mul(2).map(Number::Int),
            Number::Float(f) => Some(Number::Float(f * 2.0)),
        }
    }
}

/// Integers print as digits. Floats always carry a fractional part
/// (`9.0`, `2.25`), so `3` and `3.0` stay distinguishable in descriptions.
impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) if x.is_nan() => f.write_str("nan"),
            Number::Float(x) if x.is_infinite() => {
                f.write_str(if x.is_sign_positive() { "inf" } else { "-inf" })
            }
            Number::Float(x) if x.fract() == 0.0 && x.abs() < 1e16 => write!(f, "{:.1}", x),
            Number::Float(x) => write!(f, "{}", x),
        }
    }
}

// =============================================================================
// Cell
// =============================================================================

/// One scalar table cell.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
    Empty,
}

impl Cell {
    /// Shorthand for a text cell.
    pub fn text(s: impl Into<String>) -> Self {
        Cell::Text(s.into())
    }

    /// Missing value: an empty cell or a float NaN.
    pub fn is_missing(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Float(f) => f.is_nan(),
            _ => false,
        }
    }

    /// Numeric view of the cell. Text is never parsed here; typing
    /// happens once, when the table is loaded.
    pub fn as_number(&self) -> Option<Number> {
        match self {
            Cell::Int(i) => Some(Number::Int(*i)),
            Cell::Float(f) => Some(Number::Float(*f)),
            _ => None,
        }
    }
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(i) => Number::Int(*i).fmt(f),
            Cell::Float(x) => Number::Float(*x).fmt(f),
            Cell::Text(s) => f.write_str(s),
            Cell::Empty => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weekday_canonical_order() {
        let tokens: Vec<&str> = Weekday::ALL.iter().map(|d| d.as_str()).collect();
        assert_eq!(tokens, vec!["mon", "tue", "wed", "thu", "fri"]);
        assert!(Weekday::Mon < Weekday::Fri);
        assert_eq!(Weekday::Thu.index(), 3);
    }

    #[test]
    fn test_weekday_square_subset() {
        assert!(Weekday::Mon.is_square());
        assert!(Weekday::Tue.is_square());
        assert!(Weekday::Wed.is_square());
        assert!(!Weekday::Thu.is_square());
        assert!(!Weekday::Fri.is_square());
    }

    #[test]
    fn test_weekday_parse() {
        assert_eq!(Weekday::from_token("thu"), Some(Weekday::Thu));
        assert_eq!(Weekday::from_token("thursday"), None);
        assert_eq!(Weekday::from_token("sat"), None);
    }

    #[test]
    fn test_number_ops() {
        assert_eq!(Number::Int(3).squared(), Some(Number::Int(9)));
        assert_eq!(Number::Int(6).doubled(), Some(Number::Int(12)));
        assert_eq!(Number::Float(1.5).squared(), Some(Number::Float(2.25)));
        assert_eq!(Number::Int(i64::MAX).squared(), None);
        assert_eq!(Number::Int(i64::MIN).doubled(), None);
        assert_eq!(Number::Int(3).to_float(), Number::Float(3.0));
    }

    #[test]
    fn test_number_display() {
        assert_eq!(Number::Int(9).to_string(), "9");
        assert_eq!(Number::Float(9.0).to_string(), "9.0");
        assert_eq!(Number::Float(2.25).to_string(), "2.25");
        assert_eq!(Number::Float(-4.0).to_string(), "-4.0");
    }

    #[test]
    fn test_cell_missing() {
        assert!(Cell::Empty.is_missing());
        assert!(Cell::Float(f64::NAN).is_missing());
        assert!(!Cell::Int(0).is_missing());
        assert!(!Cell::text("").is_missing());
    }

    #[test]
    fn test_cell_serialization() {
        let cells = vec![Cell::Int(1), Cell::Float(0.5), Cell::text("data"), Cell::Empty];
        let json = serde_json::to_string(&cells).unwrap();
        assert_eq!(json, r#"[1,0.5,"data",null]"#);
    }
}
