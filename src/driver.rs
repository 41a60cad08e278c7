//! Driver collaborator traits.
//!
//! The executor layer calls a small synchronous surface: prepare positional
//! SQL, bind values by slot index, execute (single or batch), fetch a result
//! or generated-keys cursor, close. It implements none of it; the `sqlite`
//! module provides a real adapter and tests supply counting stubs.

use crate::error::DriverError;
use crate::results::ResultCursor;
use crate::types::RowValue;

/// Cursor type produced by a connection's statements.
pub type CursorOf<C> = <<C as DriverConnection>::Statement as DriverStatement>::Cursor;

/// A connection capable of preparing statements.
pub trait DriverConnection {
    type Statement: DriverStatement;

    /// Prepare a statement from positional SQL. `return_generated_keys`
    /// asks the driver to make a generated-keys cursor available after
    /// execution, where it supports one.
    ///
    /// # Errors
    /// Returns [`DriverError`] if the driver rejects the SQL.
    fn prepare(
        &mut self,
        sql: &str,
        return_generated_keys: bool,
    ) -> Result<Self::Statement, DriverError>;

    /// Release the connection.
    ///
    /// # Errors
    /// Returns [`DriverError`] if the driver fails to close cleanly.
    fn close(&mut self) -> Result<(), DriverError>;
}

/// A prepared statement with positional parameter slots.
pub trait DriverStatement {
    type Cursor: ResultCursor;

    /// Bind `value` to the zero-based positional `slot`.
    ///
    /// # Errors
    /// Returns [`DriverError`] if the driver rejects the value.
    fn bind_value(&mut self, slot: usize, value: &RowValue) -> Result<(), DriverError>;

    /// Register the currently bound values as one batch entry.
    ///
    /// # Errors
    /// Returns [`DriverError`] if the driver cannot stage the row.
    fn add_batch(&mut self) -> Result<(), DriverError>;

    /// Execute as a query, yielding a result cursor.
    ///
    /// # Errors
    /// Returns [`DriverError`] on execution failure.
    fn execute_query(&mut self) -> Result<Self::Cursor, DriverError>;

    /// Execute as a DML statement, yielding the affected-row count.
    ///
    /// # Errors
    /// Returns [`DriverError`] on execution failure.
    fn execute_update(&mut self) -> Result<u64, DriverError>;

    /// Execute all staged batch entries, yielding per-row affected counts in
    /// submission order.
    ///
    /// # Errors
    /// Returns [`DriverError`] on execution failure.
    fn execute_batch(&mut self) -> Result<Vec<u64>, DriverError>;

    /// Cursor over keys generated by the preceding execution.
    ///
    /// # Errors
    /// Returns [`DriverError`] if the driver cannot produce the cursor.
    fn generated_keys(&mut self) -> Result<Self::Cursor, DriverError>;

    /// Release the statement.
    ///
    /// # Errors
    /// Returns [`DriverError`] if the driver fails to close cleanly.
    fn close(&mut self) -> Result<(), DriverError>;
}
