//! Named-placeholder translation.
//!
//! Rewrites SQL containing `:name` placeholders into the positional `?` form
//! drivers accept, recording which name feeds each positional slot.

mod scanner;

use scanner::{State, is_block_comment_end, is_block_comment_start, is_line_comment_start, scan_identifier};

/// A SQL statement after named-placeholder translation.
///
/// `slots` holds one entry per `?` in `positional_sql`, in left-to-right
/// order. A name appearing several times in the source SQL appears once per
/// occurrence; every occurrence receives the same bound value at execute
/// time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatedStatement {
    pub positional_sql: String,
    pub slots: Vec<String>,
}

impl TranslatedStatement {
    /// Names that must be bound before execution, with duplicates removed
    /// but slot order preserved.
    #[must_use]
    pub fn distinct_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for slot in &self.slots {
            if !names.contains(&slot.as_str()) {
                names.push(slot);
            }
        }
        names
    }
}

/// Translate `:name` placeholders into positional `?` markers.
///
/// A single left-to-right scan with a lightweight state machine skips quoted
/// strings and comments, so literal text such as `'10:30'` passes through
/// untouched. A `:` not followed by an identifier character (letters, digits,
/// underscore) is copied verbatim and produces no slot. No SQL-grammar
/// validation happens here; malformed SQL is left for the driver to reject.
///
/// ```rust
/// use sql_named_exec::translation::translate;
///
/// let t = translate("select * from t where a = :a and b = :b");
/// assert_eq!(t.positional_sql, "select * from t where a = ? and b = ?");
/// assert_eq!(t.slots, vec!["a".to_string(), "b".to_string()]);
/// ```
#[must_use]
pub fn translate(sql: &str) -> TranslatedStatement {
    let bytes = sql.as_bytes();
    let mut positional = String::with_capacity(sql.len());
    let mut slots: Vec<String> = Vec::new();
    let mut state = State::Normal;
    let mut copy_from = 0;
    let mut idx = 0;

    while idx < bytes.len() {
        let b = bytes[idx];
        match state {
            State::Normal => match b {
                b'\'' => state = State::SingleQuoted,
                b'"' => state = State::DoubleQuoted,
                _ if is_line_comment_start(bytes, idx) => {
                    state = State::LineComment;
                    idx += 1;
                }
                _ if is_block_comment_start(bytes, idx) => {
                    state = State::BlockComment(1);
                    idx += 1;
                }
                b':' => {
                    if let Some((end, name)) = scan_identifier(bytes, idx + 1) {
                        positional.push_str(&sql[copy_from..idx]);
                        positional.push('?');
                        slots.push(name.to_string());
                        copy_from = end;
                        idx = end;
                        continue;
                    }
                }
                _ => {}
            },
            State::SingleQuoted => {
                if b == b'\'' {
                    if bytes.get(idx + 1) == Some(&b'\'') {
                        idx += 1; // skip escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::DoubleQuoted => {
                if b == b'"' {
                    if bytes.get(idx + 1) == Some(&b'"') {
                        idx += 1; // skip escaped quote
                    } else {
                        state = State::Normal;
                    }
                }
            }
            State::LineComment => {
                if b == b'\n' {
                    state = State::Normal;
                }
            }
            State::BlockComment(depth) => {
                if is_block_comment_start(bytes, idx) {
                    state = State::BlockComment(depth + 1);
                    idx += 1;
                } else if is_block_comment_end(bytes, idx) {
                    if depth == 1 {
                        state = State::Normal;
                    } else {
                        state = State::BlockComment(depth - 1);
                    }
                    idx += 1;
                }
            }
        }
        idx += 1;
    }

    positional.push_str(&sql[copy_from..]);
    TranslatedStatement {
        positional_sql: positional,
        slots,
    }
}
