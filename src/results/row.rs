use std::collections::HashMap;
use std::sync::Arc;

use crate::types::RowValue;

/// A single row handed out by a result cursor.
///
/// Column names and the name-to-index lookup are shared across all rows of
/// one result set.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Arc<Vec<String>>,
    index: Arc<HashMap<String, usize>>,
    values: Vec<RowValue>,
}

impl Row {
    #[must_use]
    pub fn new(
        columns: Arc<Vec<String>>,
        index: Arc<HashMap<String, usize>>,
        values: Vec<RowValue>,
    ) -> Self {
        Self {
            columns,
            index,
            values,
        }
    }

    /// Column names for this row.
    #[must_use]
    pub fn columns(&self) -> &[String] {
        &self.columns
    }

    /// Get a value by column name.
    #[must_use]
    pub fn get(&self, column_name: &str) -> Option<&RowValue> {
        if let Some(&idx) = self.index.get(column_name) {
            return self.values.get(idx);
        }
        // Fall back to linear search
        self.columns
            .iter()
            .position(|col| col == column_name)
            .and_then(|idx| self.values.get(idx))
    }

    /// Get a value by column index.
    #[must_use]
    pub fn get_by_index(&self, index: usize) -> Option<&RowValue> {
        self.values.get(index)
    }

    /// Consume the row into its values, in column order.
    #[must_use]
    pub fn into_values(self) -> Vec<RowValue> {
        self.values
    }

    /// Copy the row into a name-to-value map. With duplicate column names
    /// the rightmost column wins.
    #[must_use]
    pub fn to_map(&self) -> HashMap<String, RowValue> {
        self.columns
            .iter()
            .cloned()
            .zip(self.values.iter().cloned())
            .collect()
    }
}
