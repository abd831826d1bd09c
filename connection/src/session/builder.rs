//! Changegroup wrapper: combine changesets (or single changes) into one,
//! optionally bound to a connection's schema.

use std::cell::Cell;
use std::ffi::CString;
use std::io::{Read, Write};
use std::os::raw::{c_int, c_void};
use std::ptr;
use std::rc::Rc;

use libsqlite3_sys::{
    sqlite3_changegroup, sqlite3_free, sqlite3changegroup_add, sqlite3changegroup_add_change,
    sqlite3changegroup_add_strm, sqlite3changegroup_delete, sqlite3changegroup_new,
    sqlite3changegroup_output, sqlite3changegroup_output_strm, sqlite3changegroup_schema,
    SQLITE_OK,
};

use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::connection::{Connection, Dependent};
use crate::session::iterator::TableChange;
use crate::session::stream::{x_input, x_output, InputCtx, OutputCtx};

pub(crate) struct BuilderInner {
    cg: Cell<*mut sqlite3_changegroup>,
}

impl BuilderInner {
    fn close(&self) {
        let cg = self.cg.replace(ptr::null_mut());
        if !cg.is_null() {
            unsafe { sqlite3changegroup_delete(cg) };
        }
    }

    fn live(&self) -> CResult<*mut sqlite3_changegroup> {
        let cg = self.cg.get();
        if cg.is_null() {
            return Err(SqliteError::Misuse {
                op: "changegroup",
                message: Some("changeset builder is closed".to_string()),
            });
        }
        Ok(cg)
    }
}

impl Dependent for BuilderInner {
    fn kind(&self) -> &'static str {
        "changeset builder"
    }

    fn close_from_owner(&self) {
        self.close();
    }
}

/// Accumulates changesets and produces their combination.
pub struct ChangesetBuilder {
    inner: Rc<BuilderInner>,
    bound: Cell<bool>,
}

impl ChangesetBuilder {
    pub fn new() -> CResult<ChangesetBuilder> {
        let mut cg: *mut sqlite3_changegroup = ptr::null_mut();
        let rc = unsafe { sqlite3changegroup_new(&mut cg) };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changegroup_new", rc, None));
        }
        Ok(ChangesetBuilder {
            inner: Rc::new(BuilderInner { cg: Cell::new(cg) }),
            bound: Cell::new(false),
        })
    }

    /// Bind the builder to a schema of `conn`. Tables are then checked
    /// against the schema, and the builder closes with that connection.
    pub fn schema(&self, conn: &Connection, schema: &str) -> CResult<()> {
        let cg = self.inner.live()?;
        let db = conn.ensure_open()?;
        let _guard = conn.guard().try_acquire()?;
        if self.bound.get() {
            return Err(SqliteError::Misuse {
                op: "changegroup_schema",
                message: Some("builder is already bound to a connection".to_string()),
            });
        }
        let schema = CString::new(schema)
            .map_err(|_| SqliteError::Value("null character in schema name".to_string()))?;
        let rc = unsafe { sqlite3changegroup_schema(cg, db, schema.as_ptr()) };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changegroup_schema", rc, None));
        }
        let inner_dyn: Rc<dyn Dependent> = self.inner.clone();
        let weak: std::rc::Weak<dyn Dependent> = Rc::downgrade(&inner_dyn);
        conn.register_dependent("changeset builder", weak);
        self.bound.set(true);
        Ok(())
    }

    pub fn add(&self, changeset: &[u8]) -> CResult<()> {
        let cg = self.inner.live()?;
        if changeset.len() > i32::MAX as usize {
            return Err(SqliteError::TooBig("changegroup_add"));
        }
        let rc = unsafe {
            sqlite3changegroup_add(cg, changeset.len() as c_int, changeset.as_ptr() as *mut c_void)
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changegroup_add", rc, None));
        }
        Ok(())
    }

    pub fn add_stream(&self, input: &mut dyn Read) -> CResult<()> {
        let cg = self.inner.live()?;
        let mut ctx = InputCtx { reader: input };
        let rc = unsafe {
            sqlite3changegroup_add_strm(cg, Some(x_input), &mut ctx as *mut _ as *mut c_void)
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changegroup_add_strm", rc, None));
        }
        Ok(())
    }

    /// Add the single change an iterator currently points at. The record
    /// must still be in scope.
    pub fn add_change(&self, change: &TableChange) -> CResult<()> {
        let cg = self.inner.live()?;
        let state = change.iter_state()?;
        let it = state.borrow().it;
        let rc = unsafe { sqlite3changegroup_add_change(cg, it) };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changegroup_add_change", rc, None));
        }
        Ok(())
    }

    pub fn output(&self) -> CResult<Vec<u8>> {
        let cg = self.inner.live()?;
        let mut len: c_int = 0;
        let mut data: *mut c_void = ptr::null_mut();
        let rc = unsafe { sqlite3changegroup_output(cg, &mut len, &mut data) };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changegroup_output", rc, None));
        }
        let out = if data.is_null() || len <= 0 {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(data as *const u8, len as usize) }.to_vec()
        };
        unsafe { sqlite3_free(data) };
        Ok(out)
    }

    pub fn output_stream(&self, output: &mut dyn Write) -> CResult<()> {
        let cg = self.inner.live()?;
        let mut ctx = OutputCtx { writer: output };
        let rc = unsafe {
            sqlite3changegroup_output_strm(cg, Some(x_output), &mut ctx as *mut _ as *mut c_void)
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changegroup_output_strm", rc, None));
        }
        Ok(())
    }

    pub fn close(&self) {
        self.inner.close();
    }
}

impl Drop for ChangesetBuilder {
    fn drop(&mut self) {
        self.inner.close();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::session::changeset::{apply, iter, IterFlags};
    use crate::session::Session;
    use common::value::Value;

    fn capture(conn: &Connection, sql: &str) -> Vec<u8> {
        let session = Session::new(conn, "main").unwrap();
        session.attach(None).unwrap();
        conn.execute(sql).unwrap();
        session.changeset().unwrap()
    }

    #[test]
    fn test_group_two_changesets() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t(k INTEGER PRIMARY KEY, v)")
            .unwrap();
        let first = capture(&conn, "INSERT INTO t VALUES(1, 'a')");
        let second = capture(&conn, "INSERT INTO t VALUES(2, 'b')");

        let builder = ChangesetBuilder::new().unwrap();
        builder.add(&first).unwrap();
        builder.add(&second).unwrap();
        let combined = builder.output().unwrap();

        let target = Connection::open_in_memory().unwrap();
        target
            .execute("CREATE TABLE t(k INTEGER PRIMARY KEY, v)")
            .unwrap();
        apply(&combined, &target, None, None, Default::default(), false).unwrap();
        assert_eq!(
            target.query_row("SELECT count(*) FROM t", &[]).unwrap(),
            Some(vec![Value::Integer(2)])
        );
    }

    #[test]
    fn test_add_stream_and_output_stream() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t(k INTEGER PRIMARY KEY, v)")
            .unwrap();
        let changeset = capture(&conn, "INSERT INTO t VALUES(1, 'a')");

        let builder = ChangesetBuilder::new().unwrap();
        builder.add_stream(&mut changeset.as_slice()).unwrap();
        let mut streamed = Vec::new();
        builder.output_stream(&mut streamed).unwrap();
        assert_eq!(streamed, builder.output().unwrap());
    }

    #[test]
    fn test_add_change_requires_live_record() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t(k INTEGER PRIMARY KEY, v)")
            .unwrap();
        let changeset = capture(&conn, "INSERT INTO t VALUES(1, 'a')");

        let builder = ChangesetBuilder::new().unwrap();
        {
            let mut it = iter(&changeset, IterFlags::empty()).unwrap();
            let change = it.next().unwrap().unwrap();
            builder.add_change(&change).unwrap();
            // drained iterator invalidates the record
            assert!(it.next().unwrap().is_none());
            assert!(matches!(
                builder.add_change(&change),
                Err(SqliteError::InvalidContext)
            ));
        }
        assert!(!builder.output().unwrap().is_empty());
    }

    #[test]
    fn test_schema_binding_closes_with_connection() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t(k INTEGER PRIMARY KEY, v)")
            .unwrap();
        let builder = ChangesetBuilder::new().unwrap();
        builder.schema(&conn, "main").unwrap();
        assert_eq!(conn.live_dependent_count(), 1);

        conn.close().unwrap();
        assert!(builder.output().is_err());
    }

    #[test]
    fn test_closed_builder_errors() {
        let builder = ChangesetBuilder::new().unwrap();
        builder.close();
        assert!(builder.add(&[]).is_err());
        assert!(builder.output().is_err());
    }
}
