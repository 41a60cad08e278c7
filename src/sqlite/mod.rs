//! `SQLite` driver adapter backed by rusqlite.
//!
//! - `params`: value conversion between [`RowValue`] and rusqlite types
//! - `query`: result extraction and materialization
//!
//! Batch execution is emulated by running the statement once per staged row,
//! and the generated-keys cursor is materialized from `last_insert_rowid()`
//! (one row per executed insert when key retrieval was requested).

pub mod params;
pub mod query;

pub use rusqlite;

pub use query::build_result_set;

use rusqlite::types::Value;

use crate::driver::{DriverConnection, DriverStatement};
use crate::error::DriverError;
use crate::results::{ResultSet, ResultSetCursor};
use crate::types::RowValue;

/// Driver session borrowing a rusqlite connection.
///
/// `close` is a no-op: rusqlite connections close on drop, and the borrow
/// leaves the caller in charge of the connection's lifetime. Use the
/// executors' `close_connection = false` mode with this adapter, or accept
/// that the release is deferred to drop.
#[derive(Clone, Copy)]
pub struct SqliteSession<'c> {
    conn: &'c rusqlite::Connection,
}

impl<'c> SqliteSession<'c> {
    #[must_use]
    pub fn new(conn: &'c rusqlite::Connection) -> Self {
        Self { conn }
    }
}

impl<'c> DriverConnection for SqliteSession<'c> {
    type Statement = SqliteStatement<'c>;

    fn prepare(
        &mut self,
        sql: &str,
        return_generated_keys: bool,
    ) -> Result<Self::Statement, DriverError> {
        let conn: &'c rusqlite::Connection = self.conn;
        let stmt = conn.prepare(sql)?;
        Ok(SqliteStatement {
            conn,
            stmt: Some(stmt),
            current: Vec::new(),
            batch: Vec::new(),
            return_generated_keys,
            generated: Vec::new(),
        })
    }

    fn close(&mut self) -> Result<(), DriverError> {
        // Borrowed connection; released when the owner drops it.
        Ok(())
    }
}

/// A prepared `SQLite` statement with slot-indexed bind buffers.
pub struct SqliteStatement<'c> {
    conn: &'c rusqlite::Connection,
    stmt: Option<rusqlite::Statement<'c>>,
    current: Vec<Value>,
    batch: Vec<Vec<Value>>,
    return_generated_keys: bool,
    generated: Vec<i64>,
}

impl SqliteStatement<'_> {
    fn finalized() -> DriverError {
        DriverError::Other("statement already finalized".to_string())
    }
}

impl DriverStatement for SqliteStatement<'_> {
    type Cursor = ResultSetCursor;

    fn bind_value(&mut self, slot: usize, value: &RowValue) -> Result<(), DriverError> {
        let converted = params::to_sqlite_value(value);
        if slot < self.current.len() {
            self.current[slot] = converted;
        } else {
            self.current.resize(slot, Value::Null);
            self.current.push(converted);
        }
        Ok(())
    }

    fn add_batch(&mut self) -> Result<(), DriverError> {
        self.batch.push(std::mem::take(&mut self.current));
        Ok(())
    }

    fn execute_query(&mut self) -> Result<Self::Cursor, DriverError> {
        let bound = std::mem::take(&mut self.current);
        let stmt = self.stmt.as_mut().ok_or_else(Self::finalized)?;
        let set = query::build_result_set(stmt, &bound)?;
        Ok(set.into_cursor())
    }

    fn execute_update(&mut self) -> Result<u64, DriverError> {
        let refs = params::as_refs(&self.current);
        let stmt = self.stmt.as_mut().ok_or_else(Self::finalized)?;
        let affected = stmt.execute(&refs[..])?;
        if self.return_generated_keys {
            self.generated.push(self.conn.last_insert_rowid());
        }
        Ok(affected as u64)
    }

    fn execute_batch(&mut self) -> Result<Vec<u64>, DriverError> {
        let rows = std::mem::take(&mut self.batch);
        let mut counts = Vec::with_capacity(rows.len());
        for row in rows {
            let refs = params::as_refs(&row);
            let stmt = self.stmt.as_mut().ok_or_else(Self::finalized)?;
            let affected = stmt.execute(&refs[..])?;
            if self.return_generated_keys {
                self.generated.push(self.conn.last_insert_rowid());
            }
            counts.push(affected as u64);
        }
        Ok(counts)
    }

    fn generated_keys(&mut self) -> Result<Self::Cursor, DriverError> {
        let mut set = ResultSet::new(vec!["last_insert_rowid".to_string()]);
        for id in self.generated.drain(..) {
            set.push_row(vec![RowValue::Int(id)]);
        }
        Ok(set.into_cursor())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        if let Some(stmt) = self.stmt.take() {
            stmt.finalize()?;
        }
        Ok(())
    }
}
