use thiserror::Error;

#[cfg(feature = "sqlite")]
use rusqlite;

/// Failure reported by a driver implementation.
///
/// Executors never interpret these beyond propagating them; constraint
/// violations, connectivity loss and the like all surface here.
#[derive(Debug, Error)]
pub enum DriverError {
    #[cfg(feature = "sqlite")]
    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    #[error("driver error: {0}")]
    Other(String),
}

/// Errors produced by the executor layer.
#[derive(Debug, Error)]
pub enum ExecutorError {
    /// The driver rejected the translated positional SQL at construction.
    #[error("statement preparation failed")]
    Preparation(#[source] DriverError),

    /// A placeholder named in the SQL never received a value. Carries the
    /// first unmet name in slot order.
    #[error("no value bound for placeholder `{name}`")]
    UnboundParameter { name: String },

    /// `bind` was called with a name that does not appear in the SQL.
    #[error("parameter `{name}` does not appear in the SQL statement")]
    UnknownParameter { name: String },

    /// A batch executor ran with no captured rows.
    #[error("batch executor has no rows to execute")]
    EmptyBatch,

    /// The variant requires a result handler and none was supplied.
    #[error("a result handler is required but none was supplied")]
    MissingHandler,

    /// Operation invoked outside its permitted lifecycle state.
    #[error("illegal executor state: {0}")]
    IllegalState(&'static str),

    /// Driver-level failure during bind application or execution. Rethrown
    /// after cleanup, never swallowed.
    #[error(transparent)]
    Driver(#[from] DriverError),
}
