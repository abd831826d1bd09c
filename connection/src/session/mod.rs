//! Session extension wrapper: record row changes on one schema of one
//! connection, produce changesets and patchsets, and feed them through the
//! changeset machinery.

pub mod builder;
pub mod changeset;
pub mod iterator;
pub mod rebaser;
pub(crate) mod stream;

use std::cell::{Cell, RefCell};
use std::ffi::{CStr, CString};
use std::io::Write;
use std::os::raw::{c_char, c_int, c_void};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::rc::Rc;

use libsqlite3_sys::{
    sqlite3_free, sqlite3_session, sqlite3session_attach, sqlite3session_changeset,
    sqlite3session_changeset_size, sqlite3session_changeset_strm, sqlite3session_create,
    sqlite3session_delete, sqlite3session_diff, sqlite3session_enable, sqlite3session_indirect,
    sqlite3session_isempty, sqlite3session_memory_used, sqlite3session_object_config,
    sqlite3session_patchset, sqlite3session_patchset_strm, sqlite3session_table_filter,
    SQLITE_OK,
};

use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::connection::{Connection, Dependent};
use crate::error::db_error;
use crate::session::stream::{x_output, OutputCtx};

/// SQLITE_SESSION_OBJCONFIG_* codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum SessionConfig {
    Size = 1,
    Rowid = 2,
}

type SessionFilter = Box<dyn FnMut(&str) -> bool>;

pub(crate) struct SessionInner {
    s: Cell<*mut sqlite3_session>,
    filter: RefCell<Option<SessionFilter>>,
}

impl Dependent for SessionInner {
    fn kind(&self) -> &'static str {
        "session"
    }

    fn close_from_owner(&self) {
        self.close();
    }
}

impl SessionInner {
    fn close(&self) {
        let s = self.s.replace(ptr::null_mut());
        if !s.is_null() {
            unsafe { sqlite3session_delete(s) };
        }
        self.filter.borrow_mut().take();
    }

    fn live(&self) -> CResult<*mut sqlite3_session> {
        let s = self.s.get();
        if s.is_null() {
            return Err(SqliteError::Misuse {
                op: "session",
                message: Some("session is closed".to_string()),
            });
        }
        Ok(s)
    }
}

unsafe extern "C" fn call_table_filter(ctx: *mut c_void, table: *const c_char) -> c_int {
    let inner = &*(ctx as *const SessionInner);
    let mut filter = match inner.filter.try_borrow_mut() {
        Ok(filter) => filter,
        // reentrancy means something is off; do not record
        Err(_) => return 0,
    };
    let Some(filter) = filter.as_mut() else {
        return 1;
    };
    let name = CStr::from_ptr(table).to_str().unwrap_or("");
    // a panicking filter means "do not record"
    catch_unwind(AssertUnwindSafe(|| filter(name)))
        .map(c_int::from)
        .unwrap_or(0)
}

/// Records changes made to one schema of one connection.
pub struct Session<'conn> {
    conn: &'conn Connection,
    inner: Rc<SessionInner>,
}

impl<'conn> Session<'conn> {
    /// Create a session on the given schema ("main" for the usual case) and
    /// register it as a dependent of the connection.
    pub fn new(conn: &'conn Connection, schema: &str) -> CResult<Session<'conn>> {
        let db = conn.ensure_open()?;
        let _guard = conn.guard().try_acquire()?;
        let schema = CString::new(schema)
            .map_err(|_| SqliteError::Value("null character in schema name".to_string()))?;
        let mut s: *mut sqlite3_session = ptr::null_mut();
        let rc = unsafe { sqlite3session_create(db, schema.as_ptr(), &mut s) };
        if rc != SQLITE_OK {
            return Err(db_error("session_create", db, rc));
        }
        // changeset_size accounting is opt-in
        let mut enabled: c_int = 1;
        unsafe {
            sqlite3session_object_config(
                s,
                SessionConfig::Size as c_int,
                &mut enabled as *mut c_int as *mut c_void,
            );
        }

        let inner = Rc::new(SessionInner {
            s: Cell::new(s),
            filter: RefCell::new(None),
        });
        let inner_dyn: Rc<dyn Dependent> = inner.clone();
        let weak: std::rc::Weak<dyn Dependent> = Rc::downgrade(&inner_dyn);
        conn.register_dependent("session", weak);
        Ok(Session { conn, inner })
    }

    /// Attach one table, or all tables with `None`.
    pub fn attach(&self, table: Option<&str>) -> CResult<()> {
        let s = self.inner.live()?;
        let _guard = self.conn.guard().try_acquire()?;
        let table = match table {
            Some(name) => Some(CString::new(name).map_err(|_| {
                SqliteError::Value("null character in table name".to_string())
            })?),
            None => None,
        };
        let table_ptr = table.as_ref().map_or(ptr::null(), |name| name.as_ptr());
        let rc = unsafe { sqlite3session_attach(s, table_ptr) };
        if rc != SQLITE_OK {
            return Err(db_error("session_attach", self.conn.raw_db(), rc));
        }
        Ok(())
    }

    /// Record the difference between `table` in the attached schema and the
    /// same table in `from_schema`.
    pub fn diff(&self, from_schema: &str, table: &str) -> CResult<()> {
        let s = self.inner.live()?;
        let _guard = self.conn.guard().try_acquire()?;
        let from = CString::new(from_schema)
            .map_err(|_| SqliteError::Value("null character in schema name".to_string()))?;
        let table = CString::new(table)
            .map_err(|_| SqliteError::Value("null character in table name".to_string()))?;
        let mut errmsg: *mut c_char = ptr::null_mut();
        let rc = unsafe { sqlite3session_diff(s, from.as_ptr(), table.as_ptr(), &mut errmsg) };
        if rc != SQLITE_OK {
            let message = if errmsg.is_null() {
                None
            } else {
                let text = unsafe { CStr::from_ptr(errmsg) }
                    .to_str()
                    .ok()
                    .map(str::to_owned);
                unsafe { sqlite3_free(errmsg as *mut c_void) };
                text
            };
            return Err(SqliteError::from_code("session_diff", rc, message));
        }
        Ok(())
    }

    pub fn set_enabled(&self, enabled: bool) -> CResult<()> {
        let s = self.inner.live()?;
        unsafe { sqlite3session_enable(s, c_int::from(enabled)) };
        Ok(())
    }

    pub fn is_enabled(&self) -> CResult<bool> {
        let s = self.inner.live()?;
        Ok(unsafe { sqlite3session_enable(s, -1) } != 0)
    }

    pub fn set_indirect(&self, indirect: bool) -> CResult<()> {
        let s = self.inner.live()?;
        unsafe { sqlite3session_indirect(s, c_int::from(indirect)) };
        Ok(())
    }

    pub fn is_indirect(&self) -> CResult<bool> {
        let s = self.inner.live()?;
        Ok(unsafe { sqlite3session_indirect(s, -1) } != 0)
    }

    /// Install a table filter; tables it rejects are not recorded.
    pub fn table_filter<F>(&self, filter: Option<F>) -> CResult<()>
    where
        F: FnMut(&str) -> bool + 'static,
    {
        let s = self.inner.live()?;
        match filter {
            Some(f) => {
                *self.inner.filter.borrow_mut() = Some(Box::new(f));
                unsafe {
                    sqlite3session_table_filter(
                        s,
                        Some(call_table_filter),
                        Rc::as_ptr(&self.inner) as *mut c_void,
                    );
                }
            }
            None => {
                unsafe { sqlite3session_table_filter(s, None, ptr::null_mut()) };
                self.inner.filter.borrow_mut().take();
            }
        }
        Ok(())
    }

    pub fn is_empty(&self) -> CResult<bool> {
        let s = self.inner.live()?;
        Ok(unsafe { sqlite3session_isempty(s) } != 0)
    }

    pub fn memory_used(&self) -> CResult<i64> {
        let s = self.inner.live()?;
        Ok(unsafe { sqlite3session_memory_used(s) })
    }

    /// Upper bound on the next changeset's size; requires the size
    /// accounting enabled at creation.
    pub fn changeset_size(&self) -> CResult<i64> {
        let s = self.inner.live()?;
        Ok(unsafe { sqlite3session_changeset_size(s) })
    }

    /// Toggle a session object configuration option, returning the previous
    /// value.
    pub fn config(&self, option: SessionConfig, value: Option<bool>) -> CResult<bool> {
        let s = self.inner.live()?;
        let mut arg: c_int = match value {
            Some(v) => c_int::from(v),
            None => -1,
        };
        let rc = unsafe {
            sqlite3session_object_config(s, option as c_int, &mut arg as *mut c_int as *mut c_void)
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("session_object_config", rc, None));
        }
        Ok(arg != 0)
    }

    pub fn changeset(&self) -> CResult<Vec<u8>> {
        let s = self.inner.live()?;
        let _guard = self.conn.guard().try_acquire()?;
        let mut len: c_int = 0;
        let mut data: *mut c_void = ptr::null_mut();
        let rc = unsafe { sqlite3session_changeset(s, &mut len, &mut data) };
        if rc != SQLITE_OK {
            return Err(db_error("session_changeset", self.conn.raw_db(), rc));
        }
        Ok(unsafe { copy_and_free(data, len) })
    }

    pub fn patchset(&self) -> CResult<Vec<u8>> {
        let s = self.inner.live()?;
        let _guard = self.conn.guard().try_acquire()?;
        let mut len: c_int = 0;
        let mut data: *mut c_void = ptr::null_mut();
        let rc = unsafe { sqlite3session_patchset(s, &mut len, &mut data) };
        if rc != SQLITE_OK {
            return Err(db_error("session_patchset", self.conn.raw_db(), rc));
        }
        Ok(unsafe { copy_and_free(data, len) })
    }

    pub fn changeset_stream(&self, output: &mut dyn Write) -> CResult<()> {
        let s = self.inner.live()?;
        let _guard = self.conn.guard().try_acquire()?;
        let mut ctx = OutputCtx { writer: output };
        let rc = unsafe {
            sqlite3session_changeset_strm(s, Some(x_output), &mut ctx as *mut _ as *mut c_void)
        };
        if rc != SQLITE_OK {
            return Err(db_error("session_changeset_strm", self.conn.raw_db(), rc));
        }
        Ok(())
    }

    pub fn patchset_stream(&self, output: &mut dyn Write) -> CResult<()> {
        let s = self.inner.live()?;
        let _guard = self.conn.guard().try_acquire()?;
        let mut ctx = OutputCtx { writer: output };
        let rc = unsafe {
            sqlite3session_patchset_strm(s, Some(x_output), &mut ctx as *mut _ as *mut c_void)
        };
        if rc != SQLITE_OK {
            return Err(db_error("session_patchset_strm", self.conn.raw_db(), rc));
        }
        Ok(())
    }

    /// Close the session now instead of waiting for the connection.
    pub fn close(&self) {
        self.inner.close();
    }
}

impl Drop for Session<'_> {
    fn drop(&mut self) {
        self.inner.close();
    }
}

unsafe fn copy_and_free(data: *mut c_void, len: c_int) -> Vec<u8> {
    let out = if data.is_null() || len <= 0 {
        Vec::new()
    } else {
        std::slice::from_raw_parts(data as *const u8, len as usize).to_vec()
    };
    sqlite3_free(data);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::changeset::{apply, iter, ConflictAction, IterFlags};
    use crate::session::iterator::ChangeOp;
    use common::value::Value;

    fn schema(conn: &Connection) {
        conn.execute("CREATE TABLE t(k INTEGER PRIMARY KEY, v TEXT)")
            .unwrap();
    }

    fn one_changeset() -> Vec<u8> {
        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        let session = Session::new(&conn, "main").unwrap();
        session.attach(None).unwrap();
        conn.execute("INSERT INTO t VALUES(1, 'a')").unwrap();
        session.changeset().unwrap()
    }

    #[test]
    fn test_session_state_flags() {
        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        let session = Session::new(&conn, "main").unwrap();
        assert!(session.is_enabled().unwrap());
        assert!(!session.is_indirect().unwrap());
        assert!(session.is_empty().unwrap());

        session.set_enabled(false).unwrap();
        assert!(!session.is_enabled().unwrap());
        session.set_enabled(true).unwrap();
        session.set_indirect(true).unwrap();
        assert!(session.is_indirect().unwrap());
    }

    #[test]
    fn test_changeset_records_insert() {
        let changeset = one_changeset();
        assert!(!changeset.is_empty());

        let mut iter = iter(&changeset, IterFlags::empty()).unwrap();
        let change = iter.next().unwrap().unwrap();
        assert_eq!(change.op().unwrap(), ChangeOp::Insert);
        assert_eq!(change.table_name().unwrap(), "t");
        assert_eq!(change.column_count().unwrap(), 2);
        assert!(!change.indirect().unwrap());
        assert_eq!(change.pk_columns().unwrap(), &[true, false]);
        assert_eq!(change.old().unwrap(), None);
        assert_eq!(
            change.new().unwrap(),
            Some(vec![Value::Integer(1), Value::Text("a".to_string())])
        );
        assert!(iter.next().unwrap().is_none());
    }

    #[test]
    fn test_record_goes_out_of_scope() {
        let changeset = one_changeset();
        let mut it = iter(&changeset, IterFlags::empty()).unwrap();
        let change = it.next().unwrap().unwrap();
        assert!(change.op().is_ok());
        assert!(it.next().unwrap().is_none());
        assert!(matches!(
            change.op(),
            Err(SqliteError::InvalidContext)
        ));
        assert!(matches!(
            change.new(),
            Err(SqliteError::InvalidContext)
        ));
    }

    #[test]
    fn test_streamed_changeset_matches_buffered() {
        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        let session = Session::new(&conn, "main").unwrap();
        session.attach(None).unwrap();
        conn.execute("INSERT INTO t VALUES(1, 'a'); INSERT INTO t VALUES(2, 'b');")
            .unwrap();

        let buffered = session.changeset().unwrap();
        let mut streamed = Vec::new();
        session.changeset_stream(&mut streamed).unwrap();
        assert_eq!(buffered, streamed);
    }

    #[test]
    fn test_changeset_round_trip_apply() {
        let changeset = one_changeset();

        let sibling = Connection::open_in_memory().unwrap();
        schema(&sibling);
        apply(&changeset, &sibling, None, None, Default::default(), false).unwrap();

        let row = sibling
            .query_row("SELECT k, v FROM t", &[])
            .unwrap()
            .unwrap();
        assert_eq!(row, vec![Value::Integer(1), Value::Text("a".to_string())]);
    }

    #[test]
    fn test_conflict_abort_leaves_database_unchanged() {
        let changeset = one_changeset();

        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        conn.execute("INSERT INTO t VALUES(1, 'x')").unwrap();

        let result = apply(
            &changeset,
            &conn,
            None,
            Some(Box::new(|_, _| Ok(ConflictAction::Abort))),
            Default::default(),
            false,
        );
        assert!(result.is_err());

        let row = conn.query_row("SELECT v FROM t WHERE k = 1", &[]).unwrap();
        assert_eq!(row, Some(vec![Value::Text("x".to_string())]));
    }

    #[test]
    fn test_conflict_replace_overwrites() {
        let changeset = one_changeset();

        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        conn.execute("INSERT INTO t VALUES(1, 'x')").unwrap();

        apply(
            &changeset,
            &conn,
            None,
            Some(Box::new(|reason, change| {
                assert_eq!(reason, crate::session::changeset::ConflictReason::Conflict);
                assert!(!change.conflict().unwrap().is_empty());
                Ok(ConflictAction::Replace)
            })),
            Default::default(),
            false,
        )
        .unwrap();

        let row = conn.query_row("SELECT v FROM t WHERE k = 1", &[]).unwrap();
        assert_eq!(row, Some(vec![Value::Text("a".to_string())]));
    }

    #[test]
    fn test_conflict_handler_error_wins() {
        let changeset = one_changeset();

        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        conn.execute("INSERT INTO t VALUES(1, 'x')").unwrap();

        let err = apply(
            &changeset,
            &conn,
            None,
            Some(Box::new(|_, _| {
                Err(SqliteError::Value("handler says no".to_string()))
            })),
            Default::default(),
            false,
        )
        .unwrap_err();
        assert_eq!(err, SqliteError::Value("handler says no".to_string()));
    }

    #[test]
    fn test_table_filter_skips_tables() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE a(k INTEGER PRIMARY KEY); CREATE TABLE b(k INTEGER PRIMARY KEY);")
            .unwrap();
        let session = Session::new(&conn, "main").unwrap();
        session
            .table_filter(Some(|name: &str| name == "a"))
            .unwrap();
        session.attach(None).unwrap();
        conn.execute("INSERT INTO a VALUES(1); INSERT INTO b VALUES(2);")
            .unwrap();

        let changeset = session.changeset().unwrap();
        let mut it = iter(&changeset, IterFlags::empty()).unwrap();
        let change = it.next().unwrap().unwrap();
        assert_eq!(change.table_name().unwrap(), "a");
        assert!(it.next().unwrap().is_none());
    }

    #[test]
    fn test_session_closed_with_connection() {
        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        let session = Session::new(&conn, "main").unwrap();
        assert_eq!(conn.live_dependent_count(), 1);
        conn.close().unwrap();
        assert!(session.is_empty().is_err());
    }

    #[test]
    fn test_object_config_query() {
        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        let session = Session::new(&conn, "main").unwrap();
        // size accounting was switched on at creation
        assert!(session.config(SessionConfig::Size, None).unwrap());
    }

    #[test]
    fn test_memory_and_size_accounting() {
        let conn = Connection::open_in_memory().unwrap();
        schema(&conn);
        let session = Session::new(&conn, "main").unwrap();
        session.attach(None).unwrap();
        conn.execute("INSERT INTO t VALUES(1, 'abc')").unwrap();

        assert!(session.memory_used().unwrap() > 0);
        let estimate = session.changeset_size().unwrap();
        let actual = session.changeset().unwrap().len() as i64;
        assert!(estimate >= actual);
    }
}
