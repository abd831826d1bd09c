use std::cell::RefCell;
use std::ffi::CStr;

use libsqlite3_sys::{sqlite3, sqlite3_errmsg, SQLITE_OK};

use common::err::engine_error::SqliteError;
use common::err::CResult;

/// Error message currently recorded on the handle, if any.
pub(crate) unsafe fn errmsg(db: *mut sqlite3) -> Option<String> {
    if db.is_null() {
        return None;
    }
    let msg = sqlite3_errmsg(db);
    if msg.is_null() {
        return None;
    }
    CStr::from_ptr(msg).to_str().ok().map(str::to_owned)
}

/// Translate a non-OK result code, attaching the handle's error message.
pub(crate) fn db_error(op: &'static str, db: *mut sqlite3, code: i32) -> SqliteError {
    SqliteError::from_code(op, code, unsafe { errmsg(db) })
}

pub(crate) fn check(op: &'static str, db: *mut sqlite3, code: i32) -> CResult<()> {
    if code == SQLITE_OK {
        Ok(())
    } else {
        Err(db_error(op, db, code))
    }
}

/// Holds the first host-level error raised inside a callback while SQLite is
/// on the stack. Later errors are chained onto the root as notes; the root
/// is surfaced once control returns to the host.
#[derive(Default)]
pub(crate) struct ErrorSlot {
    inner: RefCell<Option<SqliteError>>,
}

impl ErrorSlot {
    pub fn new() -> Self {
        ErrorSlot::default()
    }

    pub fn is_set(&self) -> bool {
        self.inner.borrow().is_some()
    }

    pub fn set(&self, err: SqliteError) {
        let mut slot = self.inner.borrow_mut();
        match slot.take() {
            None => *slot = Some(err),
            Some(root) => *slot = Some(root.with_note(&err.to_string())),
        }
    }

    pub fn take(&self) -> Option<SqliteError> {
        self.inner.borrow_mut().take()
    }
}
