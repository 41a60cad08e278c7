//! Result handlers: convert a raw result cursor into an application value.

use std::collections::HashMap;

use crate::error::ExecutorError;
use crate::results::ResultCursor;
use crate::types::RowValue;

/// Caller-supplied transformation from a result cursor to a value.
///
/// Invoked at most once per execute call; the cursor is valid at the moment
/// of invocation and must not be retained.
pub trait ResultHandler<Cur: ResultCursor> {
    type Output;

    /// Consume the cursor and produce the output value.
    ///
    /// # Errors
    /// Returns [`ExecutorError`] if cursor iteration fails or the rows cannot
    /// be converted.
    fn handle(self, cursor: Cur) -> Result<Self::Output, ExecutorError>;
}

/// First row as a name-to-value map, or `None` when the cursor is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapHandler;

impl<Cur: ResultCursor> ResultHandler<Cur> for MapHandler {
    type Output = Option<HashMap<String, RowValue>>;

    fn handle(self, mut cursor: Cur) -> Result<Self::Output, ExecutorError> {
        Ok(cursor.next_row()?.map(|row| row.to_map()))
    }
}

/// Every row as a name-to-value map, in cursor order.
#[derive(Debug, Clone, Copy, Default)]
pub struct MapListHandler;

impl<Cur: ResultCursor> ResultHandler<Cur> for MapListHandler {
    type Output = Vec<HashMap<String, RowValue>>;

    fn handle(self, mut cursor: Cur) -> Result<Self::Output, ExecutorError> {
        let mut maps = Vec::new();
        while let Some(row) = cursor.next_row()? {
            maps.push(row.to_map());
        }
        Ok(maps)
    }
}

/// First column of the first row, or `None` when the cursor is empty.
#[derive(Debug, Clone, Copy, Default)]
pub struct ScalarHandler;

impl<Cur: ResultCursor> ResultHandler<Cur> for ScalarHandler {
    type Output = Option<RowValue>;

    fn handle(self, mut cursor: Cur) -> Result<Self::Output, ExecutorError> {
        Ok(cursor
            .next_row()?
            .and_then(|row| row.into_values().into_iter().next()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::results::ResultSet;

    fn sample_set() -> ResultSet {
        let mut set = ResultSet::new(vec!["id".to_string(), "name".to_string()]);
        set.push_row(vec![RowValue::Int(1), RowValue::Text("a".into())]);
        set.push_row(vec![RowValue::Int(2), RowValue::Text("b".into())]);
        set
    }

    #[test]
    fn map_handler_takes_first_row() {
        let map = MapHandler.handle(sample_set().into_cursor()).unwrap();
        let map = map.unwrap();
        assert_eq!(map.get("id"), Some(&RowValue::Int(1)));
        assert_eq!(map.get("name"), Some(&RowValue::Text("a".into())));
    }

    #[test]
    fn map_handler_on_empty_cursor_is_none() {
        let set = ResultSet::new(vec!["id".to_string()]);
        assert!(MapHandler.handle(set.into_cursor()).unwrap().is_none());
    }

    #[test]
    fn map_list_handler_preserves_order() {
        let maps = MapListHandler.handle(sample_set().into_cursor()).unwrap();
        assert_eq!(maps.len(), 2);
        assert_eq!(maps[0].get("id"), Some(&RowValue::Int(1)));
        assert_eq!(maps[1].get("id"), Some(&RowValue::Int(2)));
    }

    #[test]
    fn scalar_handler_takes_first_value() {
        let value = ScalarHandler.handle(sample_set().into_cursor()).unwrap();
        assert_eq!(value, Some(RowValue::Int(1)));
    }
}
