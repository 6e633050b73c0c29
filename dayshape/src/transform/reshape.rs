//! Wide-to-long reshape with derived fields.
//!
//! ```text
//! mon │ thu │ description        day │ description   │ square │ double │ is_square │ value
//! ────┼─────┼────────────   →    ────┼───────────────┼────────┼────────┼───────────┼──────
//!  3  │  6  │ first_desc         mon │ first_desc 9  │   9    │   6    │ true      │  3
//!                                thu │ first_desc 12 │  36    │  12    │ false     │  6
//! ```
//!
//! The reshape is an explicit unpivot: weekday cells become
//! (record, day, value) entries, and each entry is joined back to its
//! record's non-weekday columns by row index.

use crate::error::{TransformError, TransformResult};
use crate::models::{Cell, Number, ReshapedRow, Table, Weekday};

/// Column holding the free-text description.
pub const DESCRIPTION_COLUMN: &str = "description";

/// One weekday cell of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDayEntry<'a> {
    /// Row index in the source table
    pub record: usize,
    pub day: Weekday,
    pub value: &'a Cell,
}

/// Non-weekday columns of one record.
#[derive(Debug, Clone, PartialEq)]
pub struct MetadataRow<'a> {
    pub fields: Vec<(&'a str, &'a Cell)>,
}

impl<'a> MetadataRow<'a> {
    pub fn get(&self, name: &str) -> Option<&'a Cell> {
        self.fields.iter().find(|(n, _)| *n == name).map(|(_, c)| *c)
    }
}

/// Weekday columns present in `table`, in canonical order.
pub fn present_days(table: &Table) -> Vec<Weekday> {
    Weekday::ALL
        .into_iter()
        .filter(|day| table.contains(day.as_str()))
        .collect()
}

/// Flatten the weekday columns into entries ordered by record, then day.
///
/// Missing cells produce no entry.
pub fn unpivot<'a>(table: &'a Table, days: &[Weekday]) -> Vec<RecordDayEntry<'a>> {
    let columns: Vec<(Weekday, &[Cell])> = days
        .iter()
        .filter_map(|day| table.column(day.as_str()).map(|cells| (*day, cells)))
        .collect();

    let mut entries = Vec::with_capacity(table.row_count() * columns.len());
    for record in 0..table.row_count() {
        for (day, cells) in &columns {
            let value = &cells[record];
            if value.is_missing() {
                continue;
            }
            entries.push(RecordDayEntry { record, day: *day, value });
        }
    }
    entries
}

/// Non-weekday columns of every record, indexed by row.
pub fn metadata_rows(table: &Table) -> Vec<MetadataRow<'_>> {
    let columns: Vec<_> = table
        .columns()
        .iter()
        .filter(|c| Weekday::from_token(&c.name).is_none())
        .collect();

    (0..table.row_count())
        .map(|record| MetadataRow {
            fields: columns
                .iter()
                .map(|c| (c.name.as_str(), &c.cells[record]))
                .collect(),
        })
        .collect()
}

/// Reshape an expanded table into one row per record and present weekday.
///
/// Fails when the `description` column is absent, when a record that has
/// weekday values has no description or a numeric one, or when a weekday
/// cell is not numeric. A table without weekday columns yields no rows.
pub fn reshape(table: &Table) -> TransformResult<Vec<ReshapedRow>> {
    if !table.contains(DESCRIPTION_COLUMN) {
        return Err(TransformError::MissingColumn(DESCRIPTION_COLUMN.to_string()));
    }

    let days = present_days(table);
    let metadata = metadata_rows(table);
    let as_float = has_float_day(table, &days);

    unpivot(table, &days)
        .into_iter()
        .map(|entry| derive_row(&entry, &metadata[entry.record], as_float))
        .collect()
}

/// Weekday values share one numeric type: once any weekday column holds
/// a float, integers from the other weekday columns are read as floats.
fn has_float_day(table: &Table, days: &[Weekday]) -> bool {
    days.iter()
        .filter_map(|day| table.column(day.as_str()))
        .any(|cells| cells.iter().any(|c| matches!(c, Cell::Float(_))))
}

fn derive_row(
    entry: &RecordDayEntry<'_>,
    metadata: &MetadataRow<'_>,
    as_float: bool,
) -> TransformResult<ReshapedRow> {
    let value = entry.value.as_number().ok_or_else(|| TransformError::NonNumeric {
        row: entry.record,
        day: entry.day,
        value: entry.value.to_string(),
    })?;
    let value = if as_float { value.to_float() } else { value };

    let description = match metadata.get(DESCRIPTION_COLUMN) {
        Some(Cell::Text(text)) => text.clone(),
        Some(cell) if !cell.is_missing() => {
            return Err(TransformError::NumericDescription {
                row: entry.record,
                value: cell.to_string(),
            })
        }
        _ => {
            return Err(TransformError::MissingValue {
                row: entry.record,
                column: DESCRIPTION_COLUMN.to_string(),
            })
        }
    };

    let square = value.squared().ok_or_else(|| overflow(entry, "square", value))?;
    let double = value.doubled().ok_or_else(|| overflow(entry, "double", value))?;
    let is_square = entry.day.is_square();
    let description_number = if is_square { square } else { double };

    Ok(ReshapedRow {
        day: entry.day,
        description: format!("{} {}", description, description_number),
        square,
        double,
        is_square,
        value,
    })
}

fn overflow(entry: &RecordDayEntry<'_>, operation: &'static str, value: Number) -> TransformError {
    TransformError::Overflow {
        row: entry.record,
        day: entry.day,
        operation,
        value,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Column;

    fn two_record_table() -> Table {
        Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(3), Cell::Int(4)]),
            Column::new("tue", vec![Cell::Int(4), Cell::Int(5)]),
            Column::new("wed", vec![Cell::Int(5), Cell::Int(6)]),
            Column::new("thu", vec![Cell::Int(6), Cell::Int(7)]),
            Column::new("fri", vec![Cell::Int(6), Cell::Int(7)]),
            Column::new("some_column1", vec![Cell::text("data"), Cell::text("more data")]),
            Column::new("description", vec![Cell::text("first_desc"), Cell::text("second_desc")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_parse_df_values() {
        let rows = reshape(&two_record_table()).unwrap();

        assert_eq!(rows.len(), 10);
        assert_eq!(
            rows[0],
            ReshapedRow {
                day: Weekday::Mon,
                description: "first_desc 9".into(),
                square: Number::Int(9),
                double: Number::Int(6),
                is_square: true,
                value: Number::Int(3),
            }
        );
        assert_eq!(
            rows[3],
            ReshapedRow {
                day: Weekday::Thu,
                description: "first_desc 12".into(),
                square: Number::Int(36),
                double: Number::Int(12),
                is_square: false,
                value: Number::Int(6),
            }
        );
    }

    #[test]
    fn test_rows_ordered_by_record_then_day() {
        let rows = reshape(&two_record_table()).unwrap();
        let order: Vec<(String, Weekday)> = rows
            .iter()
            .map(|r| (r.description.split(' ').next().unwrap().to_string(), r.day))
            .collect();

        assert_eq!(order[0], ("first_desc".to_string(), Weekday::Mon));
        assert_eq!(order[4], ("first_desc".to_string(), Weekday::Fri));
        assert_eq!(order[5], ("second_desc".to_string(), Weekday::Mon));
        assert_eq!(order[9], ("second_desc".to_string(), Weekday::Fri));
    }

    #[test]
    fn test_numeric_invariants() {
        for row in reshape(&two_record_table()).unwrap() {
            let Number::Int(v) = row.value else { panic!("expected int") };
            assert_eq!(row.square, Number::Int(v * v));
            assert_eq!(row.double, Number::Int(v * 2));
            assert_eq!(row.is_square, row.day.is_square());
            assert!(row.description.ends_with(&row.description_number().to_string()));
        }
    }

    #[test]
    fn test_row_count_is_records_times_days() {
        let table = Table::from_columns(vec![
            Column::new("wed", vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)]),
            Column::new("fri", vec![Cell::Int(1), Cell::Int(2), Cell::Int(3)]),
            Column::new("description", vec![Cell::text("a"), Cell::text("b"), Cell::text("c")]),
        ])
        .unwrap();

        assert_eq!(reshape(&table).unwrap().len(), 3 * 2);
    }

    #[test]
    fn test_no_weekday_columns_is_empty() {
        let table = Table::from_columns(vec![
            Column::new("description", vec![Cell::text("a")]),
            Column::new("monday", vec![Cell::Int(1)]),
        ])
        .unwrap();

        assert!(reshape(&table).unwrap().is_empty());
    }

    #[test]
    fn test_missing_description_column() {
        let table = Table::from_columns(vec![Column::new("mon", vec![Cell::Int(1)])]).unwrap();
        assert_eq!(
            reshape(&table).unwrap_err(),
            TransformError::MissingColumn("description".into())
        );
    }

    #[test]
    fn test_non_numeric_value_fails() {
        let table = Table::from_columns(vec![
            Column::new("thu", vec![Cell::text("three")]),
            Column::new("description", vec![Cell::text("a")]),
        ])
        .unwrap();

        assert_eq!(
            reshape(&table).unwrap_err(),
            TransformError::NonNumeric { row: 0, day: Weekday::Thu, value: "three".into() }
        );
    }

    #[test]
    fn test_missing_cells_skipped() {
        let table = Table::from_columns(vec![
            Column::new("mon", vec![Cell::Float(1.5), Cell::Empty]),
            Column::new("description", vec![Cell::text("a"), Cell::text("b")]),
        ])
        .unwrap();

        let rows = reshape(&table).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].square, Number::Float(2.25));
        assert_eq!(rows[0].description, "a 2.25");
    }

    #[test]
    fn test_float_description_number_keeps_fraction() {
        let table = Table::from_columns(vec![
            Column::new("fri", vec![Cell::Float(3.0)]),
            Column::new("description", vec![Cell::text("x")]),
        ])
        .unwrap();

        assert_eq!(reshape(&table).unwrap()[0].description, "x 6.0");
    }

    #[test]
    fn test_missing_description_cell_fails() {
        let table = Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(1)]),
            Column::new("description", vec![Cell::Empty]),
        ])
        .unwrap();

        assert_eq!(
            reshape(&table).unwrap_err(),
            TransformError::MissingValue { row: 0, column: "description".into() }
        );
    }

    #[test]
    fn test_overflow_fails() {
        let table = Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(i64::MAX)]),
            Column::new("description", vec![Cell::text("big")]),
        ])
        .unwrap();

        assert!(matches!(
            reshape(&table).unwrap_err(),
            TransformError::Overflow { operation: "square", .. }
        ));
    }

    #[test]
    fn test_metadata_excludes_weekdays() {
        let table = two_record_table();
        let metadata = metadata_rows(&table);

        assert_eq!(metadata.len(), 2);
        assert_eq!(metadata[1].get("some_column1"), Some(&Cell::text("more data")));
        assert_eq!(metadata[1].get("mon"), None);
    }

    #[test]
    fn test_float_day_promotes_int_days() {
        let table = Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(1)]),
            Column::new("tue", vec![Cell::Float(2.5)]),
            Column::new("description", vec![Cell::text("a")]),
        ])
        .unwrap();

        let rows = reshape(&table).unwrap();
        assert_eq!(rows[0].value, Number::Float(1.0));
        assert_eq!(rows[0].square, Number::Float(1.0));
        assert_eq!(rows[0].description, "a 1.0");
        assert_eq!(rows[1].description, "a 6.25");
    }

    #[test]
    fn test_float_day_with_gap_promotes_int_days() {
        let table = Table::from_columns(vec![
            Column::new("wed", vec![Cell::Int(2), Cell::Int(3)]),
            Column::new("thu", vec![Cell::Float(4.0), Cell::Empty]),
            Column::new("description", vec![Cell::text("a"), Cell::text("b")]),
        ])
        .unwrap();

        let rows = reshape(&table).unwrap();
        let summary: Vec<(Weekday, &str, Number)> =
            rows.iter().map(|r| (r.day, r.description.as_str(), r.value)).collect();
        assert_eq!(
            summary,
            vec![
                (Weekday::Wed, "a 4.0", Number::Float(2.0)),
                (Weekday::Thu, "a 8.0", Number::Float(4.0)),
                (Weekday::Wed, "b 9.0", Number::Float(3.0)),
            ]
        );
    }

    #[test]
    fn test_int_days_stay_int() {
        let rows = reshape(&two_record_table()).unwrap();
        assert!(rows.iter().all(|r| matches!(r.value, Number::Int(_))));
    }

    #[test]
    fn test_numeric_description_fails() {
        let table = Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(1)]),
            Column::new("description", vec![Cell::Int(7)]),
        ])
        .unwrap();

        assert_eq!(
            reshape(&table).unwrap_err(),
            TransformError::NumericDescription { row: 0, value: "7".into() }
        );
    }

    #[test]
    fn test_description_padding_kept() {
        let table = Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(1)]),
            Column::new("description", vec![Cell::text("  padded desc  ")]),
        ])
        .unwrap();

        assert_eq!(reshape(&table).unwrap()[0].description, "  padded desc   1");
    }
}
