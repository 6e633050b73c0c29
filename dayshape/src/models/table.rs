//! Column-oriented table.
//!
//! Columns keep their insertion order. Names are not required to be
//! unique; lookups resolve to the first column with a matching name.

use serde::Serialize;

use super::Cell;
use crate::error::TableError;

/// A named column of cells.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Column {
    pub name: String,
    pub cells: Vec<Cell>,
}

impl Column {
    pub fn new(name: impl Into<String>, cells: Vec<Cell>) -> Self {
        Self {
            name: name.into(),
            cells,
        }
    }
}

/// Equal-length named columns; one cell per record in every column.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Table {
    columns: Vec<Column>,
    row_count: usize,
}

impl Table {
    /// Build a table, checking every column has the same length.
    ///
    /// # Example
    /// ```
    /// use dayshape::models::{Cell, Column, Table};
    ///
    /// let table = Table::from_columns(vec![
    ///     Column::new("mon", vec![Cell::Int(1)]),
    ///     Column::new("description", vec![Cell::text("first_desc")]),
    /// ]).unwrap();
    /// assert_eq!(table.row_count(), 1);
    /// ```
    pub fn from_columns(columns: Vec<Column>) -> Result<Self, TableError> {
        let row_count = columns.first().map(|c| c.cells.len()).unwrap_or(0);
        for column in &columns {
            if column.cells.len() != row_count {
                return Err(TableError::RaggedColumn {
                    column: column.name.clone(),
                    expected: row_count,
                    actual: column.cells.len(),
                });
            }
        }
        Ok(Self { columns, row_count })
    }

    /// Number of records.
    pub fn row_count(&self) -> usize {
        self.row_count
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn columns_mut(&mut self) -> impl Iterator<Item = &mut Column> {
        self.columns.iter_mut()
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|c| c.name.as_str()).collect()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.columns.iter().any(|c| c.name == name)
    }

    /// Cells of the first column named `name`.
    pub fn column(&self, name: &str) -> Option<&[Cell]> {
        self.columns
            .iter()
            .find(|c| c.name == name)
            .map(|c| c.cells.as_slice())
    }

    /// Replace the cells of the first column named `name` in place, or
    /// append a new column. Returns the replaced cells, if any.
    ///
    /// Lengths are not checked; callers pass cells copied from a column
    /// of this same table.
    pub(crate) fn put_column(&mut self, name: &str, cells: Vec<Cell>) -> Option<Vec<Cell>> {
        if self.columns.is_empty() {
            self.row_count = cells.len();
        }

        match self.columns.iter_mut().find(|c| c.name == name) {
            Some(existing) => Some(std::mem::replace(&mut existing.cells, cells)),
            None => {
                self.columns.push(Column::new(name, cells));
                None
            }
        }
    }

    /// Remove the first column named `name`.
    pub fn remove_column(&mut self, name: &str) -> Option<Column> {
        let pos = self.columns.iter().position(|c| c.name == name)?;
        Some(self.columns.remove(pos))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Table {
        Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(1), Cell::Int(2)]),
            Column::new("description", vec![Cell::text("a"), Cell::text("b")]),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_columns_rejects_ragged() {
        let result = Table::from_columns(vec![
            Column::new("mon", vec![Cell::Int(1), Cell::Int(2)]),
            Column::new("tue", vec![Cell::Int(1)]),
        ]);
        assert_eq!(
            result.unwrap_err(),
            TableError::RaggedColumn { column: "tue".into(), expected: 2, actual: 1 }
        );
    }

    #[test]
    fn test_put_column_overwrites_in_place() {
        let mut table = sample();
        let old = table.put_column("mon", vec![Cell::Int(7), Cell::Int(8)]);

        assert_eq!(old, Some(vec![Cell::Int(1), Cell::Int(2)]));
        assert_eq!(table.column_names(), vec!["mon", "description"]);
        assert_eq!(table.column("mon").unwrap(), &[Cell::Int(7), Cell::Int(8)]);
    }

    #[test]
    fn test_put_column_appends_new() {
        let mut table = sample();
        assert_eq!(table.put_column("tue", vec![Cell::Int(3), Cell::Int(4)]), None);
        assert_eq!(table.column_names(), vec!["mon", "description", "tue"]);
    }

    #[test]
    fn test_remove_column() {
        let mut table = sample();
        let removed = table.remove_column("mon").unwrap();
        assert_eq!(removed.name, "mon");
        assert!(!table.contains("mon"));
        assert!(table.remove_column("mon").is_none());
        assert_eq!(table.row_count(), 2);
    }
}
