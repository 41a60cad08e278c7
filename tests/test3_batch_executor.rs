use sql_named_exec::prelude::*;

mod common {
    pub mod mock_driver;
}

use common::mock_driver::{MockConnection, Script};

fn batch_script() -> Script {
    Script {
        batch_counts: vec![2, 3, 4],
        key_columns: vec!["id".to_string()],
        key_rows: vec![
            vec![RowValue::Int(10)],
            vec![RowValue::Int(11)],
            vec![RowValue::Int(12)],
        ],
        ..Script::default()
    }
}

#[test]
fn batch_counts_preserve_submission_order() {
    let (conn, log) = MockConnection::new(batch_script());
    let mut executor =
        BatchExecutor::new(conn, "insert into t where a = :a and b = :b", true).unwrap();
    executor
        .bind("a", "x")
        .unwrap()
        .bind("b", "y")
        .unwrap()
        .add_batch()
        .unwrap();
    let counts = executor.execute().unwrap();

    assert_eq!(counts, vec![2, 3, 4]);
    assert_eq!(executor.state(), ExecutorState::Closed);
    let log = log.borrow();
    assert_eq!(log.stmt_closes, 1);
    assert_eq!(log.conn_closes, 1);
    assert_eq!(log.batch_adds, 1);
}

#[test]
fn incomplete_row_fails_at_execute_not_add_batch() {
    let (conn, log) = MockConnection::new(batch_script());
    let mut executor =
        BatchExecutor::new(conn, "insert into t where a = :a and b = :b", true).unwrap();
    // add_batch accepts the incomplete row; the failure is deferred
    executor.bind("a", "x").unwrap().add_batch().unwrap();
    let err = executor.execute().unwrap_err();

    assert!(matches!(err, ExecutorError::UnboundParameter { ref name } if name == "b"));
    let log = log.borrow();
    assert_eq!(log.stmt_closes, 1);
    assert_eq!(log.conn_closes, 1);
}

#[test]
fn empty_batch_fails_and_still_releases() {
    let (conn, log) = MockConnection::new(batch_script());
    let mut executor =
        BatchExecutor::new(conn, "insert into t where a = :a and b = :b", true).unwrap();
    let err = executor.execute().unwrap_err();

    assert!(matches!(err, ExecutorError::EmptyBatch));
    let log = log.borrow();
    assert_eq!(log.stmt_closes, 1);
    assert_eq!(log.conn_closes, 1);
}

#[test]
fn placeholder_free_sql_needs_only_add_batch() {
    let (conn, log) = MockConnection::new(batch_script());
    let mut executor = BatchExecutor::new(conn, "insert into blah", true).unwrap();
    executor.add_batch().unwrap();
    let counts = executor.execute().unwrap();

    assert_eq!(counts, vec![2, 3, 4]);
    let log = log.borrow();
    assert_eq!(log.stmt_closes, 1);
    assert_eq!(log.conn_closes, 1);
}

#[test]
fn rows_are_applied_in_submission_order() {
    let (conn, log) = MockConnection::new(batch_script());
    let mut executor = BatchExecutor::new(conn, "insert into t values (:a)", true).unwrap();
    executor.bind("a", 1i64).unwrap().add_batch().unwrap();
    executor.bind("a", 2i64).unwrap().add_batch().unwrap();
    executor.bind("a", 3i64).unwrap().add_batch().unwrap();
    executor.execute().unwrap();

    let log = log.borrow();
    assert_eq!(log.batch_adds, 3);
    assert_eq!(
        log.bound,
        vec![
            (0, RowValue::Int(1)),
            (0, RowValue::Int(2)),
            (0, RowValue::Int(3)),
        ]
    );
}

#[test]
fn batch_returning_hands_keys_to_the_handler() {
    let (conn, log) = MockConnection::new(batch_script());
    let mut executor =
        BatchExecutor::with_generated_keys(conn, "insert into t values (:a)", true).unwrap();
    executor.bind("a", 1i64).unwrap().add_batch().unwrap();
    executor.bind("a", 2i64).unwrap().add_batch().unwrap();
    let keys = executor.execute_returning(Some(MapListHandler)).unwrap();

    assert_eq!(keys.len(), 3);
    assert_eq!(keys[0].get("id"), Some(&RowValue::Int(10)));
    assert_eq!(keys[2].get("id"), Some(&RowValue::Int(12)));
    let log = log.borrow();
    assert_eq!(log.stmt_closes, 1);
    assert_eq!(log.conn_closes, 1);
}

#[test]
fn batch_returning_without_handler_releases_connection_only() {
    let (conn, log) = MockConnection::new(batch_script());
    let mut executor =
        BatchExecutor::with_generated_keys(conn, "insert into t values (:a)", true).unwrap();
    executor.bind("a", 1i64).unwrap().add_batch().unwrap();
    let err = executor
        .execute_returning(None::<MapListHandler>)
        .unwrap_err();

    assert!(matches!(err, ExecutorError::MissingHandler));
    let log = log.borrow();
    assert_eq!(log.conn_closes, 1);
    assert_eq!(log.stmt_closes, 0);
}

#[test]
fn add_batch_after_execute_is_an_illegal_state() {
    let (conn, _log) = MockConnection::new(batch_script());
    let mut executor = BatchExecutor::new(conn, "insert into blah", true).unwrap();
    executor.add_batch().unwrap();
    executor.execute().unwrap();
    let err = executor.add_batch().unwrap_err();
    assert!(matches!(err, ExecutorError::IllegalState(_)));
}
