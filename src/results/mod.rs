//! Materialized result rows and the cursor surface handlers consume.

mod row;

pub use row::Row;

use std::collections::HashMap;
use std::sync::Arc;

use crate::error::DriverError;
use crate::types::RowValue;

/// A cursor over result rows.
///
/// This is the "raw cursor" an executor hands to a result handler: valid at
/// the moment of invocation, consumed row by row, not retained afterwards.
pub trait ResultCursor {
    /// Column names, fixed for the lifetime of the cursor.
    fn columns(&self) -> &[String];

    /// Advance to the next row, or `None` when exhausted.
    ///
    /// # Errors
    /// Returns [`DriverError`] if the driver fails mid-iteration.
    fn next_row(&mut self) -> Result<Option<Row>, DriverError>;
}

/// A fully materialized result set.
///
/// Driver adapters that cannot stream (or choose not to) collect rows into
/// one of these and hand out a [`ResultSetCursor`] over it.
#[derive(Debug, Clone)]
pub struct ResultSet {
    columns: Arc<Vec<String>>,
    index: Arc<HashMap<String, usize>>,
    rows: Vec<Vec<RowValue>>,
}

impl ResultSet {
    #[must_use]
    pub fn new(columns: Vec<String>) -> Self {
        let index = columns
            .iter()
            .enumerate()
            .map(|(i, name)| (name.clone(), i))
            .collect::<HashMap<_, _>>();
        Self {
            columns: Arc::new(columns),
            index: Arc::new(index),
            rows: Vec::new(),
        }
    }

    /// Append a row of values, one per column.
    pub fn push_row(&mut self, values: Vec<RowValue>) {
        self.rows.push(values);
    }

    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Consume the set into a cursor over its rows.
    #[must_use]
    pub fn into_cursor(self) -> ResultSetCursor {
        ResultSetCursor {
            columns: self.columns,
            index: self.index,
            rows: self.rows.into_iter(),
        }
    }
}

/// Cursor over a materialized [`ResultSet`]. Never fails mid-iteration.
#[derive(Debug)]
pub struct ResultSetCursor {
    columns: Arc<Vec<String>>,
    index: Arc<HashMap<String, usize>>,
    rows: std::vec::IntoIter<Vec<RowValue>>,
}

impl ResultCursor for ResultSetCursor {
    fn columns(&self) -> &[String] {
        &self.columns
    }

    fn next_row(&mut self) -> Result<Option<Row>, DriverError> {
        Ok(self.rows.next().map(|values| {
            Row::new(Arc::clone(&self.columns), Arc::clone(&self.index), values)
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_yields_rows_in_insertion_order() {
        let mut set = ResultSet::new(vec!["id".to_string(), "name".to_string()]);
        set.push_row(vec![RowValue::Int(1), RowValue::Text("a".into())]);
        set.push_row(vec![RowValue::Int(2), RowValue::Text("b".into())]);

        let mut cursor = set.into_cursor();
        assert_eq!(cursor.columns(), ["id", "name"]);

        let first = cursor.next_row().unwrap().unwrap();
        assert_eq!(first.get("id"), Some(&RowValue::Int(1)));
        assert_eq!(first.get_by_index(1), Some(&RowValue::Text("a".into())));

        let second = cursor.next_row().unwrap().unwrap();
        assert_eq!(second.get("name"), Some(&RowValue::Text("b".into())));

        assert!(cursor.next_row().unwrap().is_none());
    }

    #[test]
    fn row_lookup_by_unknown_column_is_none() {
        let mut set = ResultSet::new(vec!["id".to_string()]);
        set.push_row(vec![RowValue::Int(7)]);
        let mut cursor = set.into_cursor();
        let row = cursor.next_row().unwrap().unwrap();
        assert!(row.get("missing").is_none());
    }
}
