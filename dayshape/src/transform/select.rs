//! Keep `square` or `double`, depending on the day.

use crate::models::{Metric, OutputRecord, ReshapedRow};

/// Keep `square` on square days and `double` otherwise; `is_square`
/// itself is not carried over. Row order is preserved.
pub fn select_fields(rows: Vec<ReshapedRow>) -> Vec<OutputRecord> {
    rows.into_iter().map(select_row).collect()
}

fn select_row(row: ReshapedRow) -> OutputRecord {
    let metric = if row.is_square {
        Metric::Square(row.square)
    } else {
        Metric::Double(row.double)
    };

    OutputRecord {
        day: row.day,
        description: row.description,
        metric,
        value: row.value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Number, Weekday};
    use serde_json::json;

    fn rows() -> Vec<ReshapedRow> {
        vec![
            ReshapedRow {
                day: Weekday::Wed,
                description: "second_desc 36".into(),
                square: Number::Int(36),
                double: Number::Int(12),
                is_square: true,
                value: Number::Int(6),
            },
            ReshapedRow {
                day: Weekday::Thu,
                description: "second_desc 14".into(),
                square: Number::Int(49),
                double: Number::Int(14),
                is_square: false,
                value: Number::Int(7),
            },
        ]
    }

    #[test]
    fn test_keep_square_or_double() {
        let output = serde_json::to_value(select_fields(rows())).unwrap();

        assert_eq!(
            output,
            json!([
                {"day": "wed", "description": "second_desc 36", "square": 36, "value": 6},
                {"day": "thu", "description": "second_desc 14", "double": 14, "value": 7}
            ])
        );
    }

    #[test]
    fn test_exactly_one_metric_and_no_flag() {
        for record in serde_json::to_value(select_fields(rows())).unwrap().as_array().unwrap() {
            let obj = record.as_object().unwrap();
            assert!(obj.contains_key("square") ^ obj.contains_key("double"));
            assert!(!obj.contains_key("is_square"));
            assert_eq!(obj.len(), 4);
        }
    }

    #[test]
    fn test_selection_follows_flag() {
        let selected = select_fields(rows());
        assert_eq!(selected[0].metric, Metric::Square(Number::Int(36)));
        assert_eq!(selected[1].metric, Metric::Double(Number::Int(14)));
    }

    #[test]
    fn test_empty_input() {
        assert!(select_fields(Vec::new()).is_empty());
    }
}
