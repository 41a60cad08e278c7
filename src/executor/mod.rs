//! Executor lifecycle: translate, bind, validate, execute, release.
//!
//! [`ExecutorCore`] owns the prepared statement and (conditionally) the
//! connection, tracks the `Building -> Executed -> Closed` lifecycle, and
//! guarantees that every execute path releases resources exactly once. The
//! variant types in this module are thin specializations selecting batch
//! mode, generated-key retrieval, and the result shape.

mod batch;
mod insert;
mod query;

pub use batch::BatchExecutor;
pub use insert::InsertExecutor;
pub use query::QueryExecutor;

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::bindings::{BindingSet, first_unbound};
use crate::driver::{CursorOf, DriverConnection, DriverStatement};
use crate::error::ExecutorError;
use crate::handlers::ResultHandler;
use crate::translation::{TranslatedStatement, translate};
use crate::types::RowValue;

/// Lifecycle state of an executor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecutorState {
    /// Accepting `bind`/`add_batch` calls.
    Building,
    /// An execute call ran (successfully or not); cleanup is underway.
    Executed,
    /// Resources released; no further operations permitted.
    Closed,
}

/// Shared plumbing behind the executor variants.
///
/// Owns the connection handle for its lifetime; whether the connection is
/// *released* at cleanup is fixed at construction by `close_connection` and
/// never changes afterwards. Not designed for sharing across threads.
pub struct ExecutorCore<C: DriverConnection> {
    conn: C,
    stmt: Option<C::Statement>,
    translated: TranslatedStatement,
    bindings: BindingSet,
    state: ExecutorState,
    close_connection: bool,
    conn_released: bool,
}

impl<C: DriverConnection> ExecutorCore<C> {
    /// Translate the SQL, prepare the statement, and enter `Building`.
    pub(crate) fn new(
        mut conn: C,
        sql: &str,
        return_generated_keys: bool,
        close_connection: bool,
    ) -> Result<Self, ExecutorError> {
        let translated = translate(sql);
        debug!(
            sql = %translated.positional_sql,
            slots = translated.slots.len(),
            "preparing statement"
        );
        let stmt = conn
            .prepare(&translated.positional_sql, return_generated_keys)
            .map_err(ExecutorError::Preparation)?;
        Ok(Self {
            conn,
            stmt: Some(stmt),
            translated,
            bindings: BindingSet::new(),
            state: ExecutorState::Building,
            close_connection,
            conn_released: false,
        })
    }

    #[must_use]
    pub fn state(&self) -> ExecutorState {
        self.state
    }

    /// The positional SQL handed to the driver.
    #[must_use]
    pub fn positional_sql(&self) -> &str {
        &self.translated.positional_sql
    }

    /// Placeholder names, one per positional slot.
    #[must_use]
    pub fn slots(&self) -> &[String] {
        &self.translated.slots
    }

    fn ensure_building(&self, op: &'static str) -> Result<(), ExecutorError> {
        match self.state {
            ExecutorState::Building => Ok(()),
            _ => Err(ExecutorError::IllegalState(op)),
        }
    }

    pub(crate) fn bind(&mut self, name: &str, value: RowValue) -> Result<(), ExecutorError> {
        self.ensure_building("bind after execute")?;
        if !self.translated.slots.iter().any(|slot| slot == name) {
            return Err(ExecutorError::UnknownParameter {
                name: name.to_string(),
            });
        }
        self.bindings.bind(name, value);
        Ok(())
    }

    pub(crate) fn add_batch(&mut self) -> Result<(), ExecutorError> {
        self.ensure_building("add_batch after execute")?;
        self.bindings.add_batch();
        Ok(())
    }

    fn validate_single(&self) -> Result<(), ExecutorError> {
        if let Some(name) = first_unbound(&self.translated.slots, self.bindings.current()) {
            return Err(ExecutorError::UnboundParameter {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn validate_batch(&self) -> Result<(), ExecutorError> {
        if self.bindings.rows().is_empty() {
            return Err(ExecutorError::EmptyBatch);
        }
        for row in self.bindings.rows() {
            if let Some(name) = first_unbound(&self.translated.slots, row) {
                return Err(ExecutorError::UnboundParameter {
                    name: name.to_string(),
                });
            }
        }
        Ok(())
    }

    /// Release the statement, then the connection if owned. Failures are
    /// logged and suppressed so they never mask the execution outcome.
    fn release_resources(&mut self) {
        if let Some(mut stmt) = self.stmt.take() {
            if let Err(e) = stmt.close() {
                warn!(error = %e, "failed to close statement during cleanup");
            }
        }
        self.release_connection();
    }

    fn release_connection(&mut self) {
        if self.close_connection && !self.conn_released {
            self.conn_released = true;
            if let Err(e) = self.conn.close() {
                warn!(error = %e, "failed to close connection during cleanup");
            }
        }
    }

    /// Complete an execute call: mark `Executed`, run the exactly-once
    /// cleanup, mark `Closed`, and hand back the (possibly failed) outcome.
    fn finish<R>(&mut self, result: Result<R, ExecutorError>) -> Result<R, ExecutorError> {
        self.state = ExecutorState::Executed;
        self.release_resources();
        self.state = ExecutorState::Closed;
        result
    }

    /// Failure path for a required-but-absent handler: the connection is
    /// released when owned, the statement is not (it was never reached).
    fn fail_missing_handler<R>(&mut self) -> Result<R, ExecutorError> {
        self.release_connection();
        self.state = ExecutorState::Closed;
        Err(ExecutorError::MissingHandler)
    }

    fn statement(&mut self) -> Result<&mut C::Statement, ExecutorError> {
        self.stmt
            .as_mut()
            .ok_or(ExecutorError::IllegalState("statement already released"))
    }

    fn apply_current_row(&mut self) -> Result<(), ExecutorError> {
        let slots = &self.translated.slots;
        let row = self.bindings.current();
        let stmt = self
            .stmt
            .as_mut()
            .ok_or(ExecutorError::IllegalState("statement already released"))?;
        apply_row(stmt, slots, row)
    }

    fn apply_batch_rows(&mut self) -> Result<(), ExecutorError> {
        let slots = &self.translated.slots;
        let stmt = self
            .stmt
            .as_mut()
            .ok_or(ExecutorError::IllegalState("statement already released"))?;
        for row in self.bindings.rows() {
            apply_row(stmt, slots, row)?;
            stmt.add_batch()?;
        }
        Ok(())
    }

    pub(crate) fn execute_query<H>(&mut self, handler: Option<H>) -> Result<H::Output, ExecutorError>
    where
        H: ResultHandler<CursorOf<C>>,
    {
        self.ensure_building("execute on a finished executor")?;
        if let Err(e) = self.validate_single() {
            return self.finish(Err(e));
        }
        let Some(handler) = handler else {
            return self.fail_missing_handler();
        };
        let result = self
            .apply_current_row()
            .and_then(|()| Ok(self.statement()?.execute_query()?))
            .and_then(|cursor| handler.handle(cursor));
        self.finish(result)
    }

    pub(crate) fn execute_update(&mut self) -> Result<u64, ExecutorError> {
        self.ensure_building("execute on a finished executor")?;
        if let Err(e) = self.validate_single() {
            return self.finish(Err(e));
        }
        let result = self
            .apply_current_row()
            .and_then(|()| Ok(self.statement()?.execute_update()?));
        self.finish(result)
    }

    pub(crate) fn execute_update_returning<H>(
        &mut self,
        handler: Option<H>,
    ) -> Result<H::Output, ExecutorError>
    where
        H: ResultHandler<CursorOf<C>>,
    {
        self.ensure_building("execute on a finished executor")?;
        if let Err(e) = self.validate_single() {
            return self.finish(Err(e));
        }
        let Some(handler) = handler else {
            return self.fail_missing_handler();
        };
        let result = self
            .apply_current_row()
            .and_then(|()| {
                let stmt = self.statement()?;
                stmt.execute_update()?;
                Ok(stmt.generated_keys()?)
            })
            .and_then(|cursor| handler.handle(cursor));
        self.finish(result)
    }

    pub(crate) fn execute_batch(&mut self) -> Result<Vec<u64>, ExecutorError> {
        self.ensure_building("execute on a finished executor")?;
        if let Err(e) = self.validate_batch() {
            return self.finish(Err(e));
        }
        let result = self
            .apply_batch_rows()
            .and_then(|()| Ok(self.statement()?.execute_batch()?));
        self.finish(result)
    }

    pub(crate) fn execute_batch_returning<H>(
        &mut self,
        handler: Option<H>,
    ) -> Result<H::Output, ExecutorError>
    where
        H: ResultHandler<CursorOf<C>>,
    {
        self.ensure_building("execute on a finished executor")?;
        if let Err(e) = self.validate_batch() {
            return self.finish(Err(e));
        }
        let Some(handler) = handler else {
            return self.fail_missing_handler();
        };
        let result = self
            .apply_batch_rows()
            .and_then(|()| {
                let stmt = self.statement()?;
                stmt.execute_batch()?;
                Ok(stmt.generated_keys()?)
            })
            .and_then(|cursor| handler.handle(cursor));
        self.finish(result)
    }
}

/// Apply one row of bindings to the statement, one slot at a time. Duplicate
/// names receive the same value at every slot they occupy.
fn apply_row<S: DriverStatement>(
    stmt: &mut S,
    slots: &[String],
    row: &HashMap<String, RowValue>,
) -> Result<(), ExecutorError> {
    for (idx, name) in slots.iter().enumerate() {
        let value = row
            .get(name)
            .ok_or_else(|| ExecutorError::UnboundParameter { name: name.clone() })?;
        stmt.bind_value(idx, value)?;
    }
    Ok(())
}
