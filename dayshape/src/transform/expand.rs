//! Weekday range column expansion.
//!
//! A column whose name contains more than one weekday token (`mon-wed`,
//! `montue`, `thu_fri`) stands for every day from the first token found
//! to the last one, in canonical order. Expanded columns are appended
//! after the remaining ones:
//!
//! ```text
//! mon-thu │ fri          fri │ mon │ tue │ wed │ thu
//! ────────┼─────   →     ────┼─────┼─────┼─────┼────
//!    1    │  3            3  │  1  │  1  │  1  │  1
//! ```
//!
//! Overlapping ranges are resolved by column order: the later column
//! overwrites the days it shares with earlier ones, and a range always
//! overwrites a plain day column of the same name. Each overwrite is
//! logged as a warning.

use crate::logs::{log_info_indent, log_warning};
use crate::models::{Table, Weekday};

/// Weekday tokens appearing anywhere in `name`, in canonical order.
pub fn days_in_name(name: &str) -> Vec<Weekday> {
    Weekday::ALL
        .into_iter()
        .filter(|day| name.contains(day.as_str()))
        .collect()
}

/// Days a range column expands to, or `None` when `name` holds fewer
/// than two weekday tokens.
///
/// The span is contiguous even when intermediate tokens are absent:
/// `mon-thu` yields mon, tue, wed, thu.
pub fn range_span(name: &str) -> Option<&'static [Weekday]> {
    let days = days_in_name(name);
    if days.len() < 2 {
        return None;
    }
    let first = days[0].index();
    let last = days[days.len() - 1].index();
    Some(&Weekday::ALL[first..=last])
}

/// Replace every range column with one column per day in its span.
pub fn expand_ranges(mut table: Table) -> Table {
    let names: Vec<String> = table.column_names().into_iter().map(String::from).collect();

    for name in names {
        let Some(span) = range_span(&name) else {
            continue;
        };
        let Some(column) = table.remove_column(&name) else {
            continue;
        };

        let days: Vec<&str> = span.iter().map(|d| d.as_str()).collect();
        log_info_indent(format!("{} → {}", name, days.join(", ")), 1);

        for day in span {
            if table.put_column(day.as_str(), column.cells.clone()).is_some() {
                log_warning(format!("Column '{}' overwrites existing '{}' values", name, day));
            }
        }
    }

    table
}
