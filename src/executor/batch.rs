use crate::driver::{CursorOf, DriverConnection};
use crate::error::ExecutorError;
use crate::handlers::ResultHandler;
use crate::types::RowValue;

use super::{ExecutorCore, ExecutorState};

/// Fluent executor for multi-row (batch) INSERT/UPDATE statements.
///
/// Rows are staged with `bind(..)` calls followed by `add_batch()`; an
/// incomplete row is still captured and only reported at execute time, so a
/// chain never aborts between `add_batch` calls.
pub struct BatchExecutor<C: DriverConnection> {
    core: ExecutorCore<C>,
}

impl<C: DriverConnection> std::fmt::Debug for BatchExecutor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("BatchExecutor")
            .field("state", &self.core.state())
            .finish_non_exhaustive()
    }
}

impl<C: DriverConnection> BatchExecutor<C> {
    /// Translate `sql` and prepare it on `conn`.
    ///
    /// # Errors
    /// [`ExecutorError::Preparation`] if the driver rejects the SQL.
    pub fn new(conn: C, sql: &str, close_connection: bool) -> Result<Self, ExecutorError> {
        Ok(Self {
            core: ExecutorCore::new(conn, sql, false, close_connection)?,
        })
    }

    /// Like [`new`](Self::new), but requests generated-key retrieval so
    /// [`execute_returning`](Self::execute_returning) can observe the keys
    /// produced by the whole batch.
    ///
    /// # Errors
    /// [`ExecutorError::Preparation`] if the driver rejects the SQL.
    pub fn with_generated_keys(
        conn: C,
        sql: &str,
        close_connection: bool,
    ) -> Result<Self, ExecutorError> {
        Ok(Self {
            core: ExecutorCore::new(conn, sql, true, close_connection)?,
        })
    }

    /// Bind a value to a named placeholder in the row under construction.
    /// Chainable.
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

    /// Capture the current row as a batch entry and start a fresh one.
    /// Completeness is checked at execute time, not here.
    ///
    /// # Errors
    /// [`ExecutorError::IllegalState`] after execution.
    pub fn add_batch(&mut self) -> Result<&mut Self, ExecutorError> {
        self.core.add_batch()?;
        Ok(self)
    }

    /// Execute every captured row and return per-row affected counts in
    /// submission order.
    ///
    /// # Errors
    /// [`ExecutorError::EmptyBatch`] when no row was captured,
    /// [`ExecutorError::UnboundParameter`] if any captured row misses a
    /// value, or any driver failure, rethrown after cleanup.
    pub fn execute(&mut self) -> Result<Vec<u64>, ExecutorError> {
        self.core.execute_batch()
    }

    /// Execute every captured row, then hand the generated-keys cursor to
    /// `handler`.
    ///
    /// # Errors
    /// As [`execute`](Self::execute), plus
    /// [`ExecutorError::MissingHandler`] if `handler` is `None`.
    pub fn execute_returning<H>(&mut self, handler: Option<H>) -> Result<H::Output, ExecutorError>
    where
        H: ResultHandler<CursorOf<C>>,
    {
        self.core.execute_batch_returning(handler)
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
