//! Scriptable counting driver stub for executor lifecycle tests.

#![allow(dead_code)]

use std::cell::RefCell;
use std::rc::Rc;

use sql_named_exec::prelude::*;

/// Everything observable the executor did to the driver.
#[derive(Debug, Default)]
pub struct DriverLog {
    pub prepare_calls: usize,
    pub prepared_sql: Vec<String>,
    pub stmt_closes: usize,
    pub conn_closes: usize,
    pub batch_adds: usize,
    /// Every `bind_value` call as `(slot, value)`, in call order.
    pub bound: Vec<(usize, RowValue)>,
}

/// What the stub should answer with (or fail with).
#[derive(Debug, Clone, Default)]
pub struct Script {
    pub update_count: u64,
    pub batch_counts: Vec<u64>,
    pub query_columns: Vec<String>,
    pub query_rows: Vec<Vec<RowValue>>,
    pub key_columns: Vec<String>,
    pub key_rows: Vec<Vec<RowValue>>,
    pub fail_prepare: Option<String>,
    pub fail_execute: Option<String>,
    pub fail_stmt_close: bool,
}

pub struct MockConnection {
    log: Rc<RefCell<DriverLog>>,
    script: Script,
}

impl MockConnection {
    pub fn new(script: Script) -> (Self, Rc<RefCell<DriverLog>>) {
        let log = Rc::new(RefCell::new(DriverLog::default()));
        (
            Self {
                log: Rc::clone(&log),
                script,
            },
            log,
        )
    }
}

impl DriverConnection for MockConnection {
    type Statement = MockStatement;

    fn prepare(
        &mut self,
        sql: &str,
        _return_generated_keys: bool,
    ) -> Result<MockStatement, DriverError> {
        {
            let mut log = self.log.borrow_mut();
            log.prepare_calls += 1;
            log.prepared_sql.push(sql.to_string());
        }
        if let Some(msg) = &self.script.fail_prepare {
            return Err(DriverError::Other(msg.clone()));
        }
        Ok(MockStatement {
            log: Rc::clone(&self.log),
            script: self.script.clone(),
        })
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.log.borrow_mut().conn_closes += 1;
        Ok(())
    }
}

pub struct MockStatement {
    log: Rc<RefCell<DriverLog>>,
    script: Script,
}

impl MockStatement {
    fn fail_if_scripted(&self) -> Result<(), DriverError> {
        match &self.script.fail_execute {
            Some(msg) => Err(DriverError::Other(msg.clone())),
            None => Ok(()),
        }
    }
}

fn build_set(columns: &[String], rows: &[Vec<RowValue>]) -> ResultSet {
    let mut set = ResultSet::new(columns.to_vec());
    for row in rows {
        set.push_row(row.clone());
    }
    set
}

impl DriverStatement for MockStatement {
    type Cursor = ResultSetCursor;

    fn bind_value(&mut self, slot: usize, value: &RowValue) -> Result<(), DriverError> {
        self.log.borrow_mut().bound.push((slot, value.clone()));
        Ok(())
    }

    fn add_batch(&mut self) -> Result<(), DriverError> {
        self.log.borrow_mut().batch_adds += 1;
        Ok(())
    }

    fn execute_query(&mut self) -> Result<ResultSetCursor, DriverError> {
        self.fail_if_scripted()?;
        Ok(build_set(&self.script.query_columns, &self.script.query_rows).into_cursor())
    }

    fn execute_update(&mut self) -> Result<u64, DriverError> {
        self.fail_if_scripted()?;
        Ok(self.script.update_count)
    }

    fn execute_batch(&mut self) -> Result<Vec<u64>, DriverError> {
        self.fail_if_scripted()?;
        Ok(self.script.batch_counts.clone())
    }

    fn generated_keys(&mut self) -> Result<ResultSetCursor, DriverError> {
        Ok(build_set(&self.script.key_columns, &self.script.key_rows).into_cursor())
    }

    fn close(&mut self) -> Result<(), DriverError> {
        self.log.borrow_mut().stmt_closes += 1;
        if self.script.fail_stmt_close {
            return Err(DriverError::Other("close failed".to_string()));
        }
        Ok(())
    }
}
