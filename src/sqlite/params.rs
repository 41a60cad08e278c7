use rusqlite::types::Value;

use crate::types::RowValue;

/// Convert a single [`RowValue`] to a rusqlite [`Value`].
#[must_use]
pub fn to_sqlite_value(value: &RowValue) -> Value {
    match value {
        RowValue::Int(i) => Value::Integer(*i),
        RowValue::Float(f) => Value::Real(*f),
        RowValue::Text(s) => Value::Text(s.clone()),
        RowValue::Bool(b) => Value::Integer(i64::from(*b)),
        RowValue::Timestamp(dt) => Value::Text(dt.format("%F %T%.f").to_string()),
        RowValue::Null => Value::Null,
        // Serialize once; SQLite stores JSON as text
        RowValue::JSON(jval) => Value::Text(jval.to_string()),
        RowValue::Blob(bytes) => Value::Blob(bytes.clone()),
    }
}

/// Convert a rusqlite [`Value`] back to a [`RowValue`].
#[must_use]
pub fn from_sqlite_value(value: Value) -> RowValue {
    match value {
        Value::Null => RowValue::Null,
        Value::Integer(i) => RowValue::Int(i),
        Value::Real(f) => RowValue::Float(f),
        Value::Text(s) => RowValue::Text(s),
        Value::Blob(b) => RowValue::Blob(b),
    }
}

/// Build a borrowed params slice suitable for rusqlite execution.
#[must_use]
pub fn as_refs(values: &[Value]) -> Vec<&dyn rusqlite::ToSql> {
    values.iter().map(|v| v as &dyn rusqlite::ToSql).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bool_maps_to_integer() {
        assert_eq!(to_sqlite_value(&RowValue::Bool(true)), Value::Integer(1));
        assert_eq!(to_sqlite_value(&RowValue::Bool(false)), Value::Integer(0));
    }

    #[test]
    fn round_trips_text_and_null() {
        assert_eq!(
            from_sqlite_value(to_sqlite_value(&RowValue::Text("x".into()))),
            RowValue::Text("x".into())
        );
        assert_eq!(
            from_sqlite_value(to_sqlite_value(&RowValue::Null)),
            RowValue::Null
        );
    }
}
