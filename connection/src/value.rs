//! Conversion boundary between host values and SQLite values.

use std::os::raw::{c_char, c_int, c_void};
use std::ptr;
use std::slice::from_raw_parts;

use libsqlite3_sys::{
    sqlite3_bind_blob64, sqlite3_bind_double, sqlite3_bind_int64, sqlite3_bind_null,
    sqlite3_bind_text64, sqlite3_db_handle, sqlite3_stmt, sqlite3_value, sqlite3_value_blob,
    sqlite3_value_bytes, sqlite3_value_double, sqlite3_value_int64, sqlite3_value_nochange,
    sqlite3_value_pointer, sqlite3_value_text, sqlite3_value_type, sqlite3_vtab_in_first,
    sqlite3_vtab_in_next, SQLITE_BLOB, SQLITE_DONE, SQLITE_FLOAT, SQLITE_INTEGER, SQLITE_NULL,
    SQLITE_OK, SQLITE_TEXT, SQLITE_TRANSIENT, SQLITE_UTF8,
};
use tracing::debug;

use common::err::engine_error::SqliteError;
use common::err::CResult;
use common::value::Value;

use crate::error::db_error;

/// Registered tag for SQLite's pointer-passing interface. Pointer values are
/// opaque to the converter; they surface as null.
static POINTER_TAG: &[u8] = b"engine-hostptr\0";

const MAX_BIND_BYTES: usize = i32::MAX as usize;

/// Materialize a host value from a SQLite value handle.
///
/// For NULL the tests run in order: the no-change sentinel (when the caller
/// permits it), the IN-constraint set interface (ditto), the pointer-passing
/// interface, then a plain null.
pub(crate) unsafe fn value_from_sqlite(
    value: *mut sqlite3_value,
    allow_in_set: bool,
    allow_no_change: bool,
) -> CResult<Value> {
    match sqlite3_value_type(value) {
        SQLITE_INTEGER => Ok(Value::Integer(sqlite3_value_int64(value))),
        SQLITE_FLOAT => Ok(Value::Float(sqlite3_value_double(value))),
        SQLITE_TEXT => {
            let len = sqlite3_value_bytes(value) as usize;
            let text = sqlite3_value_text(value);
            if text.is_null() {
                return Err(SqliteError::NoMem { op: "value_text" });
            }
            let bytes = from_raw_parts(text, len);
            let text = std::str::from_utf8(bytes)
                .map_err(|_| SqliteError::Value("invalid UTF-8 in text value".to_string()))?;
            Ok(Value::Text(text.to_string()))
        }
        SQLITE_BLOB => {
            let len = sqlite3_value_bytes(value) as usize;
            if len == 0 {
                return Ok(Value::Blob(Vec::new()));
            }
            let blob = sqlite3_value_blob(value);
            if blob.is_null() {
                return Err(SqliteError::NoMem { op: "value_blob" });
            }
            Ok(Value::Blob(from_raw_parts(blob as *const u8, len).to_vec()))
        }
        SQLITE_NULL => {
            if allow_no_change && sqlite3_value_nochange(value) != 0 {
                return Ok(Value::NoChange);
            }
            if allow_in_set {
                if let Some(set) = try_in_set(value)? {
                    return Ok(set);
                }
            }
            let pointer = sqlite3_value_pointer(value, POINTER_TAG.as_ptr() as *const c_char);
            if !pointer.is_null() {
                debug!("pointer-passing value is opaque to the converter");
            }
            Ok(Value::Null)
        }
        other => Err(SqliteError::Value(format!(
            "unknown SQLite value type {other}"
        ))),
    }
}

/// Expand an IN-constraint value into a set. Returns `None` when the value
/// is not an IN-constraint carrier.
unsafe fn try_in_set(value: *mut sqlite3_value) -> CResult<Option<Value>> {
    let mut member: *mut sqlite3_value = ptr::null_mut();
    let rc = sqlite3_vtab_in_first(value, &mut member);
    if rc != SQLITE_OK && rc != SQLITE_DONE {
        return Ok(None);
    }
    let mut items = Vec::new();
    let mut rc = rc;
    while rc == SQLITE_OK && !member.is_null() {
        items.push(value_from_sqlite(member, false, false)?);
        rc = sqlite3_vtab_in_next(value, &mut member);
    }
    if rc != SQLITE_OK && rc != SQLITE_DONE {
        return Err(SqliteError::from_code("vtab_in_next", rc, None));
    }
    Ok(Some(Value::Set(items)))
}

/// Bind a host value to a statement parameter (1-based index). Text and
/// blobs are bound TRANSIENT so SQLite takes its own copy.
pub(crate) unsafe fn bind_value(
    stmt: *mut sqlite3_stmt,
    index: c_int,
    value: &Value,
) -> CResult<()> {
    let rc = match value {
        Value::Null => sqlite3_bind_null(stmt, index),
        Value::Integer(i) => sqlite3_bind_int64(stmt, index, *i),
        Value::Float(f) => sqlite3_bind_double(stmt, index, *f),
        Value::Text(text) => {
            if text.len() > MAX_BIND_BYTES {
                return Err(SqliteError::TooBig("bind_text"));
            }
            sqlite3_bind_text64(
                stmt,
                index,
                text.as_ptr() as *const c_char,
                text.len() as u64,
                SQLITE_TRANSIENT(),
                SQLITE_UTF8 as u8,
            )
        }
        Value::Blob(bytes) => {
            if bytes.len() > MAX_BIND_BYTES {
                return Err(SqliteError::TooBig("bind_blob"));
            }
            sqlite3_bind_blob64(
                stmt,
                index,
                bytes.as_ptr() as *const c_void,
                bytes.len() as u64,
                SQLITE_TRANSIENT(),
            )
        }
        Value::Set(_) | Value::NoChange => {
            return Err(SqliteError::Type(format!(
                "cannot bind a {} value",
                value.type_name()
            )))
        }
    };
    if rc != SQLITE_OK {
        return Err(db_error("bind", sqlite3_db_handle(stmt), rc));
    }
    Ok(())
}

/// True when a blob column carries well-formed JSONB.
pub fn blob_is_jsonb(value: &Value) -> bool {
    matches!(value, Value::Blob(bytes) if jsonb::detect(bytes))
}

/// Decode a JSONB blob column into a host value graph.
pub fn blob_to_json(value: &Value) -> CResult<jsonb::JsonValue> {
    match value {
        Value::Blob(bytes) => jsonb::decode(bytes),
        other => Err(SqliteError::Type(format!(
            "expected a blob column, got {}",
            other.type_name()
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::connection::Connection;

    #[test]
    fn test_round_trip_through_table() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t(a, b, c, d, e)").unwrap();

        let mut stmt = conn
            .prepare("INSERT INTO t VALUES(?1, ?2, ?3, ?4, ?5)")
            .unwrap();
        stmt.bind(1, &Value::Integer(-42)).unwrap();
        stmt.bind(2, &Value::Float(2.5)).unwrap();
        stmt.bind(3, &Value::Text("héllo".to_string())).unwrap();
        stmt.bind(4, &Value::Blob(vec![0, 1, 2, 255])).unwrap();
        stmt.bind(5, &Value::Null).unwrap();
        assert!(!stmt.step().unwrap());
        stmt.finalize().unwrap();

        let row = conn
            .query_row("SELECT a, b, c, d, e FROM t", &[])
            .unwrap()
            .unwrap();
        assert_eq!(row[0], Value::Integer(-42));
        assert_eq!(row[1], Value::Float(2.5));
        assert_eq!(row[2], Value::Text("héllo".to_string()));
        assert_eq!(row[3], Value::Blob(vec![0, 1, 2, 255]));
        assert_eq!(row[4], Value::Null);
    }

    #[test]
    fn test_blob_bytes_identical() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE b(x)").unwrap();
        let payload: Vec<u8> = (0..=255).collect();

        let mut stmt = conn.prepare("INSERT INTO b VALUES(?1)").unwrap();
        stmt.bind(1, &Value::Blob(payload.clone())).unwrap();
        assert!(!stmt.step().unwrap());
        stmt.finalize().unwrap();

        let row = conn.query_row("SELECT x FROM b", &[]).unwrap().unwrap();
        assert_eq!(row[0], Value::Blob(payload));
    }

    #[test]
    fn test_jsonb_column_detection() {
        let conn = Connection::open_in_memory().unwrap();
        let row = conn
            .query_row("SELECT jsonb('{\"a\": 1}'), x'0102'", &[])
            .unwrap()
            .unwrap();
        assert!(blob_is_jsonb(&row[0]));
        assert!(!blob_is_jsonb(&row[1]));

        let decoded = blob_to_json(&row[0]).unwrap();
        assert_eq!(
            decoded,
            jsonb::JsonValue::object(vec![(
                jsonb::JsonValue::text("a"),
                jsonb::JsonValue::Int(1)
            )])
        );
    }

    #[test]
    fn test_unbindable_kinds() {
        let conn = Connection::open_in_memory().unwrap();
        let mut stmt = conn.prepare("SELECT ?1").unwrap();
        assert!(matches!(
            stmt.bind(1, &Value::NoChange),
            Err(SqliteError::Type(_))
        ));
        assert!(matches!(
            stmt.bind(1, &Value::Set(vec![])),
            Err(SqliteError::Type(_))
        ));
        stmt.finalize().unwrap();
    }
}
