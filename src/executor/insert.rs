use crate::driver::{CursorOf, DriverConnection};
use crate::error::ExecutorError;
use crate::handlers::ResultHandler;
use crate::types::RowValue;

use super::{ExecutorCore, ExecutorState};

/// Fluent executor for single-row INSERT/UPDATE statements.
///
/// Prepared with generated-key retrieval requested, so
/// [`execute_returning`](Self::execute_returning) can hand the generated-keys
/// cursor to a handler.
pub struct InsertExecutor<C: DriverConnection> {
    core: ExecutorCore<C>,
}

impl<C: DriverConnection> std::fmt::Debug for InsertExecutor<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InsertExecutor")
            .field("state", &self.core.state())
            .finish_non_exhaustive()
    }
}

impl<C: DriverConnection> InsertExecutor<C> {
    /// Translate `sql` and prepare it on `conn`, requesting generated keys.
    ///
    /// # Errors
    /// [`ExecutorError::Preparation`] if the driver rejects the SQL.
    pub fn new(conn: C, sql: &str, close_connection: bool) -> Result<Self, ExecutorError> {
        Ok(Self {
            core: ExecutorCore::new(conn, sql, true, close_connection)?,
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

    /// Execute and return the affected-row count.
    ///
    /// # Errors
    /// [`ExecutorError::UnboundParameter`] if a placeholder has no value, or
    /// any driver failure, rethrown after cleanup.
    pub fn execute(&mut self) -> Result<u64, ExecutorError> {
        self.core.execute_update()
    }

    /// Execute and hand the generated-keys cursor to `handler`.
    ///
    /// # Errors
    /// As [`execute`](Self::execute), plus
    /// [`ExecutorError::MissingHandler`] if `handler` is `None`.
    pub fn execute_returning<H>(&mut self, handler: Option<H>) -> Result<H::Output, ExecutorError>
    where
        H: ResultHandler<CursorOf<C>>,
    {
        self.core.execute_update_returning(handler)
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
