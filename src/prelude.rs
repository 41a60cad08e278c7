//! Convenient imports for common functionality.
//!
//! Re-exports the types most callers need to build and run an executor.

pub use crate::bindings::BindingSet;
pub use crate::driver::{CursorOf, DriverConnection, DriverStatement};
pub use crate::error::{DriverError, ExecutorError};
pub use crate::executor::{BatchExecutor, ExecutorState, InsertExecutor, QueryExecutor};
pub use crate::handlers::{MapHandler, MapListHandler, ResultHandler, ScalarHandler};
pub use crate::results::{ResultCursor, ResultSet, ResultSetCursor, Row};
pub use crate::translation::{TranslatedStatement, translate};
pub use crate::types::RowValue;

#[cfg(feature = "sqlite")]
pub use crate::sqlite::{SqliteSession, SqliteStatement};
