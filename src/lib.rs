//! Fluent named-parameter SQL executors over pluggable synchronous drivers.
//!
//! SQL is written with `:name` placeholders, translated once into the
//! positional form the driver accepts, and executed through a small
//! lifecycle: bind values, validate that every placeholder is satisfied,
//! execute, hand the raw result cursor to a caller-supplied handler, and
//! release the statement (and, when owned, the connection) exactly once on
//! every path.
//!
//! Three executor variants cover the usage modes: [`QueryExecutor`] for
//! SELECTs, [`InsertExecutor`] for single-row DML with optional
//! generated-key retrieval, and [`BatchExecutor`] for multi-row submission
//! with per-row affected counts.
//!
//! ```rust
//! # #[cfg(feature = "sqlite")]
//! # fn demo() -> Result<(), Box<dyn std::error::Error>> {
//! use sql_named_exec::prelude::*;
//! use sql_named_exec::sqlite::{SqliteSession, rusqlite};
//!
//! let conn = rusqlite::Connection::open_in_memory()?;
//! conn.execute_batch("CREATE TABLE t (id INTEGER PRIMARY KEY, name TEXT)")?;
//!
//! let mut insert = InsertExecutor::new(
//!     SqliteSession::new(&conn),
//!     "INSERT INTO t (name) VALUES (:name)",
//!     false,
//! )?;
//! assert_eq!(insert.bind("name", "alice")?.execute()?, 1);
//!
//! let mut query = QueryExecutor::new(
//!     SqliteSession::new(&conn),
//!     "SELECT name FROM t WHERE name = :name",
//!     false,
//! )?;
//! let row = query.bind("name", "alice")?.execute(Some(MapHandler))?;
//! assert_eq!(
//!     row.and_then(|m| m.get("name").cloned()),
//!     Some(RowValue::Text("alice".into())),
//! );
//! # Ok(())
//! # }
//! # #[cfg(feature = "sqlite")]
//! # demo().unwrap();
//! ```
//!
//! Executors are single-threaded and blocking; sharing one instance across
//! threads is a caller error, not something this crate guards against.

pub mod bindings;
pub mod driver;
pub mod error;
pub mod executor;
pub mod handlers;
pub mod prelude;
pub mod results;
#[cfg(feature = "sqlite")]
pub mod sqlite;
pub mod translation;
pub mod types;

pub use error::{DriverError, ExecutorError};
pub use executor::{BatchExecutor, ExecutorState, InsertExecutor, QueryExecutor};
pub use handlers::{MapHandler, MapListHandler, ResultHandler, ScalarHandler};
pub use translation::{TranslatedStatement, translate};
pub use types::RowValue;
