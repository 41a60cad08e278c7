//! Name-to-value bindings for a single statement, in single-row or batch form.

use std::collections::HashMap;

use crate::types::RowValue;

/// Mutable set of placeholder bindings.
///
/// `bind` writes into the current row; `add_batch` captures the current row
/// as a snapshot and starts a fresh one. Snapshots are captured as-is, even
/// when incomplete: completeness is checked at execute time, not here, so a
/// fluent chain never aborts mid-way (the original deferred-validation
/// contract is preserved deliberately).
#[derive(Debug, Clone, Default)]
pub struct BindingSet {
    current: HashMap<String, RowValue>,
    rows: Vec<HashMap<String, RowValue>>,
}

impl BindingSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `value` under `name` in the current row, overwriting any
    /// previous value for that name.
    pub fn bind(&mut self, name: impl Into<String>, value: RowValue) {
        self.current.insert(name.into(), value);
    }

    /// Capture the current row as a batch snapshot and clear it.
    pub fn add_batch(&mut self) {
        self.rows.push(std::mem::take(&mut self.current));
    }

    /// The row being built by `bind` calls.
    #[must_use]
    pub fn current(&self) -> &HashMap<String, RowValue> {
        &self.current
    }

    /// Captured row snapshots, in submission order.
    #[must_use]
    pub fn rows(&self) -> &[HashMap<String, RowValue>] {
        &self.rows
    }
}

/// First name in `slots` without a value in `row`, if any.
pub(crate) fn first_unbound<'a>(
    slots: &'a [String],
    row: &HashMap<String, RowValue>,
) -> Option<&'a str> {
    slots
        .iter()
        .find(|name| !row.contains_key(name.as_str()))
        .map(String::as_str)
}
