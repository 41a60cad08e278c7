use rusqlite::Statement;
use rusqlite::types::Value;

use crate::error::DriverError;
use crate::results::ResultSet;
use crate::types::RowValue;

use super::params;

/// Extract a [`RowValue`] from a `SQLite` row.
///
/// # Errors
/// Returns [`DriverError`] if the value cannot be read.
pub fn extract_value(row: &rusqlite::Row, idx: usize) -> Result<RowValue, DriverError> {
    let value: Value = row.get(idx).map_err(DriverError::Sqlite)?;
    Ok(params::from_sqlite_value(value))
}

/// Run a query on a prepared statement and materialize every row.
///
/// # Errors
/// Returns [`DriverError`] if query execution or value extraction fails.
pub fn build_result_set(
    stmt: &mut Statement,
    bound: &[Value],
) -> Result<ResultSet, DriverError> {
    let param_refs = params::as_refs(bound);
    let column_names: Vec<String> = stmt
        .column_names()
        .iter()
        .map(std::string::ToString::to_string)
        .collect();
    let col_count = column_names.len();

    let mut set = ResultSet::new(column_names);
    let mut rows_iter = stmt.query(&param_refs[..])?;
    while let Some(row) = rows_iter.next()? {
        let mut values = Vec::with_capacity(col_count);
        for i in 0..col_count {
            values.push(extract_value(row, i)?);
        }
        set.push_row(values);
    }
    Ok(set)
}
