//! Column name normalization.

use crate::logs::log_warning;
use crate::models::Table;
use crate::parser::dedupe_headers;

/// Lower-case every column name. Cells are untouched.
///
/// Names that only differed by case would collide; later ones get a
/// `.N` suffix (`Mon, mon` becomes `mon, mon.1`), so only the first
/// stays a weekday column.
pub fn normalize_column_names(mut table: Table) -> Table {
    let lowered: Vec<String> = table.column_names().iter().map(|n| n.to_lowercase()).collect();
    let names = dedupe_headers(&lowered);

    for (column, name) in table.columns_mut().zip(names) {
        if column.name.to_lowercase() != name {
            log_warning(format!("Column '{}' renamed to '{}' after lower-casing", column.name, name));
        }
        column.name = name;
    }
    table
}
