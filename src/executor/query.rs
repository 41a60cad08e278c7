use crate::driver::{CursorOf, DriverConnection};
use crate::error::ExecutorError;
use crate::handlers::ResultHandler;
use crate::types::RowValue;

use super::{ExecutorCore, ExecutorState};

/// Fluent executor for SELECT-style statements.
///
/// ```rust
/// # #[cfg(feature = "sqlite")]
/// # fn demo() -> Result<(), Box<dyn std::error::Error>> {
/// use sql_named_exec::prelude::*;
/// use sql_named_exec::sqlite::{SqliteSession, rusqlite};
///
/// let conn = rusqlite::Connection::open_in_memory()?;
/// conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)")?;
///
/// let mut query = QueryExecutor::new(
///     SqliteSession::new(&conn),
///     "SELECT id, name FROM t WHERE name = :name",
///     false,
/// )?;
/// let rows = query.bind("name", "alice")?.execute(Some(MapListHandler))?;
/// assert!(rows.is_empty());
/// # Ok(())
/// # }
/// # #[cfg(feature = "sqlite")]
/// # demo().unwrap();
/// ```
pub struct QueryExecutor<C: DriverConnection> {
    core: ExecutorCore<C>,
}

impl<C: DriverConnection> std::fmt::Debug for QueryExecutor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryExecutor")
            .field("state", &self.core.state())
            .finish_non_exhaustive()
    }
}

impl<C: DriverConnection> QueryExecutor<C> {
    /// Translate `sql` and prepare it on `conn`. With `close_connection` the
    /// executor releases the connection during cleanup; otherwise the caller
    /// keeps that responsibility.
    ///
    /// # Errors
    /// [`ExecutorError::Preparation`] if the driver rejects the SQL.
    pub fn new(conn: C, sql: &str, close_connection: bool) -> Result<Self, ExecutorError> {
        Ok(Self {
            core: ExecutorCore::new(conn, sql, false, close_connection)?,
        })
    }

    /// Bind a value to a named placeholder. Chainable.
    ///
    /// # Errors
    /// [`ExecutorError::UnknownParameter`] if the name is not in the SQL;
    /// [`ExecutorError::IllegalState`] after execution.
    pub fn bind(
        &mut self,
        name: &str,
        value: impl Into<RowValue>,
    ) -> Result<&mut Self, ExecutorError> {
        self.core.bind(name, value.into())?;
        Ok(self)
    }

    /// Validate bindings, run the query, and hand the result cursor to
    /// `handler`. Resources are released exactly once whatever the outcome.
    ///
    /// # Errors
    /// [`ExecutorError::UnboundParameter`] if a placeholder has no value,
    /// [`ExecutorError::MissingHandler`] if `handler` is `None`, or any
    /// driver failure, rethrown after cleanup.
    pub fn execute<H>(&mut self, handler: Option<H>) -> Result<H::Output, ExecutorError>
    where
        H: ResultHandler<CursorOf<C>>,
    {
        self.core.execute_query(handler)
    }

    #[must_use]
    pub fn state(&self) -> ExecutorState {
        self.core.state()
    }

    /// The positional SQL handed to the driver.
    #[must_use]
    pub fn positional_sql(&self) -> &str {
        self.core.positional_sql()
    }
}
