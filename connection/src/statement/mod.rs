pub mod cache;

use std::os::raw::c_int;

use libsqlite3_sys::{sqlite3_column_count, sqlite3_column_value, sqlite3_step, SQLITE_DONE, SQLITE_ROW};

use common::err::engine_error::SqliteError;
use common::err::CResult;
use common::value::Value;

use crate::connection::Connection;
use crate::error::db_error;
use crate::statement::cache::CachedStatement;
use crate::value::{bind_value, value_from_sqlite};

/// A checked-out statement. Finalizing (or dropping) it hands the compiled
/// handle back to the connection's cache.
pub struct Statement<'conn> {
    conn: &'conn Connection,
    inner: Option<Box<CachedStatement>>,
}

impl<'conn> std::fmt::Debug for Statement<'conn> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Statement").finish()
    }
}

impl<'conn> Statement<'conn> {
    pub(crate) fn new(conn: &'conn Connection, inner: Box<CachedStatement>) -> Self {
        Statement {
            conn,
            inner: Some(inner),
        }
    }

    fn inner(&self) -> CResult<&CachedStatement> {
        self.inner.as_deref().ok_or(SqliteError::CursorClosed)
    }

    /// True when the SQL text holds further statements after this one.
    pub fn has_more(&self) -> bool {
        self.inner.as_deref().is_some_and(CachedStatement::has_more)
    }

    pub fn bind(&mut self, index: i32, value: &Value) -> CResult<()> {
        let entry = self.inner()?;
        let Some(stmt) = entry.handle() else {
            return Err(SqliteError::Misuse {
                op: "bind",
                message: Some("statement compiled to nothing".to_string()),
            });
        };
        let _guard = self.conn.guard().try_acquire()?;
        unsafe { bind_value(stmt.as_ptr(), index as c_int, value) }
    }

    /// One step of the statement: `true` for a row, `false` on completion.
    /// Statements that compiled to nothing (comment-only SQL) are complete
    /// immediately.
    pub fn step(&mut self) -> CResult<bool> {
        let entry = self.inner()?;
        let Some(stmt) = entry.handle() else {
            return Ok(false);
        };
        let _guard = self.conn.guard().try_acquire()?;
        match unsafe { sqlite3_step(stmt.as_ptr()) } {
            SQLITE_ROW => Ok(true),
            SQLITE_DONE => Ok(false),
            rc => Err(db_error("step", self.conn.raw_db(), rc)),
        }
    }

    /// Materialize the current row.
    pub fn row(&self) -> CResult<Vec<Value>> {
        let entry = self.inner()?;
        let Some(stmt) = entry.handle() else {
            return Ok(Vec::new());
        };
        let _guard = self.conn.guard().try_acquire()?;
        let count = unsafe { sqlite3_column_count(stmt.as_ptr()) };
        let mut values = Vec::with_capacity(count as usize);
        for i in 0..count {
            let value = unsafe { sqlite3_column_value(stmt.as_ptr(), i) };
            values.push(unsafe { value_from_sqlite(value, false, false) }?);
        }
        Ok(values)
    }

    /// Finalize this statement and prepare the next one from the same SQL
    /// text.
    pub fn next_statement(&mut self) -> CResult<()> {
        let entry = self.inner.take().ok_or(SqliteError::CursorClosed)?;
        if !entry.has_more() {
            self.inner = Some(entry);
            return Err(SqliteError::Misuse {
                op: "next_statement",
                message: Some("no remaining SQL".to_string()),
            });
        }
        let _guard = self.conn.guard().try_acquire()?;
        let next = self
            .conn
            .cache()
            .borrow_mut()
            .next(self.conn.raw_db(), entry)?;
        self.inner = Some(next);
        Ok(())
    }

    /// Return the statement to the cache (or destroy it when uncacheable).
    pub fn finalize(mut self) -> CResult<()> {
        self.finalize_inner()
    }

    fn finalize_inner(&mut self) -> CResult<()> {
        let Some(entry) = self.inner.take() else {
            return Ok(());
        };
        let _guard = self.conn.guard().acquire_yielding();
        self.conn
            .cache()
            .borrow_mut()
            .finalize(self.conn.raw_db(), entry)
    }

    /// Identity of the underlying compiled handle, for reuse checks.
    pub fn handle_address(&self) -> usize {
        self.inner
            .as_deref()
            .and_then(CachedStatement::handle)
            .map_or(0, |p| p.as_ptr() as usize)
    }

    pub fn query_size(&self) -> usize {
        self.inner.as_deref().map_or(0, CachedStatement::query_size)
    }

    pub fn utf8_size(&self) -> usize {
        self.inner.as_deref().map_or(0, CachedStatement::utf8_size)
    }
}

impl Drop for Statement<'_> {
    fn drop(&mut self) {
        if self.inner.is_some() {
            let _ = self.finalize_inner();
        }
    }
}
