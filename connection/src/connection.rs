//! Connection skeleton: owns the database handle, the per-handle mutex, the
//! statement cache and weak references to every dependent object, which are
//! closed in reverse order when the connection goes away.

use std::cell::{Cell, RefCell};
use std::ffi::CString;
use std::os::raw::{c_int, c_void};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::rc::Weak;
use std::sync::{Arc, Mutex};

use libsqlite3_sys::{
    sqlite3, sqlite3_busy_handler, sqlite3_busy_timeout, sqlite3_close,
    sqlite3_extended_result_codes, sqlite3_interrupt, sqlite3_open_v2, SQLITE_OK,
    SQLITE_OPEN_CREATE, SQLITE_OPEN_READWRITE, SQLITE_OPEN_URI,
};
use tracing::{debug, warn};

use common::config::EngineConfig;
use common::err::engine_error::SqliteError;
use common::err::CResult;
use common::value::Value;

use crate::error::{check, db_error};
use crate::guard::HandleGuard;
use crate::statement::cache::StatementCache;
use crate::statement::Statement;

/// An object whose lifetime is subordinate to the connection: sessions and
/// changeset builders register themselves and are closed when it closes.
pub(crate) trait Dependent {
    fn kind(&self) -> &'static str;
    fn close_from_owner(&self);
}

struct RawDb(*mut sqlite3);

// the pointer is only ever used under the shared mutex
unsafe impl Send for RawDb {}

struct BusyHandlerState {
    cb: Box<dyn FnMut(i32) -> bool>,
}

unsafe extern "C" fn call_busy_handler(ctx: *mut c_void, count: c_int) -> c_int {
    let state = &mut *(ctx as *mut BusyHandlerState);
    // a panicking handler gives up the retry
    match catch_unwind(AssertUnwindSafe(|| (state.cb)(count))) {
        Ok(true) => 1,
        _ => 0,
    }
}

pub struct Connection {
    db: Cell<*mut sqlite3>,
    guard: HandleGuard,
    /// Shared with interrupt handles so they stay safe after close.
    shared_db: Arc<Mutex<RawDb>>,
    cache: RefCell<StatementCache>,
    dependents: RefCell<Vec<(&'static str, Weak<dyn Dependent>)>>,
    busy: RefCell<Option<Box<BusyHandlerState>>>,
}

/// Requests interruption of the in-flight operation on a connection. Usable
/// from any thread without holding the per-handle mutex.
pub struct InterruptHandle {
    shared_db: Arc<Mutex<RawDb>>,
}

impl InterruptHandle {
    pub fn interrupt(&self) {
        let raw = self.shared_db.lock().unwrap_or_else(|p| p.into_inner());
        if !raw.0.is_null() {
            unsafe { sqlite3_interrupt(raw.0) };
        }
    }
}

impl Connection {
    pub fn open(path: &str) -> CResult<Connection> {
        Connection::open_with_config(path, &EngineConfig::default())
    }

    pub fn open_in_memory() -> CResult<Connection> {
        Connection::open(":memory:")
    }

    /// In-memory database with an explicit statement-cache size.
    pub fn open_with_capacity(cache_slots: usize) -> CResult<Connection> {
        let config = EngineConfig {
            statement_cache_size: cache_slots,
            ..EngineConfig::default()
        };
        Connection::open_with_config(":memory:", &config)
    }

    pub fn open_with_config(path: &str, config: &EngineConfig) -> CResult<Connection> {
        common::log::init(&config.log);
        let c_path = CString::new(path)
            .map_err(|_| SqliteError::Value("null character in database path".to_string()))?;
        let mut db: *mut sqlite3 = ptr::null_mut();
        let flags = SQLITE_OPEN_READWRITE | SQLITE_OPEN_CREATE | SQLITE_OPEN_URI;
        let rc = unsafe { sqlite3_open_v2(c_path.as_ptr(), &mut db, flags, ptr::null()) };
        if rc != SQLITE_OK {
            let err = db_error("open", db, rc);
            if !db.is_null() {
                unsafe { sqlite3_close(db) };
            }
            return Err(err);
        }
        unsafe { sqlite3_extended_result_codes(db, 1) };

        let conn = Connection {
            db: Cell::new(db),
            guard: HandleGuard::new(),
            shared_db: Arc::new(Mutex::new(RawDb(db))),
            cache: RefCell::new(StatementCache::new(config.statement_cache_size)),
            dependents: RefCell::new(Vec::new()),
            busy: RefCell::new(None),
        };
        if config.busy_timeout_ms > 0 {
            conn.busy_timeout(config.busy_timeout_ms)?;
        }
        debug!(
            "opened database {path} with {} statement cache slots",
            config.statement_cache_size
        );
        Ok(conn)
    }

    pub(crate) fn raw_db(&self) -> *mut sqlite3 {
        self.db.get()
    }

    pub(crate) fn guard(&self) -> &HandleGuard {
        &self.guard
    }

    pub(crate) fn cache(&self) -> &RefCell<StatementCache> {
        &self.cache
    }

    /// Number of statements currently resident in the cache.
    pub fn cache_resident_count(&self) -> usize {
        self.cache.borrow().resident_count()
    }

    /// Upper bound on occupied cache indices, monotone over the lifetime.
    pub fn cache_highest_used(&self) -> usize {
        self.cache.borrow().highest_used()
    }

    pub(crate) fn ensure_open(&self) -> CResult<*mut sqlite3> {
        let db = self.db.get();
        if db.is_null() {
            return Err(SqliteError::ConnectionClosed);
        }
        Ok(db)
    }

    pub fn is_closed(&self) -> bool {
        self.db.get().is_null()
    }

    /// Register a busy timeout; 0 removes the handler. Replaces any busy
    /// handler installed earlier.
    pub fn busy_timeout(&self, ms: u32) -> CResult<()> {
        let db = self.ensure_open()?;
        let _guard = self.guard.try_acquire()?;
        let rc = unsafe { sqlite3_busy_timeout(db, ms as c_int) };
        check("busy_timeout", db, rc)?;
        self.busy.borrow_mut().take();
        Ok(())
    }

    /// Register a busy handler called with the retry count; returning false
    /// gives up with a busy error. `None` removes it.
    pub fn busy_handler<F>(&self, handler: Option<F>) -> CResult<()>
    where
        F: FnMut(i32) -> bool + 'static,
    {
        let db = self.ensure_open()?;
        let _guard = self.guard.try_acquire()?;
        match handler {
            Some(f) => {
                let mut state = Box::new(BusyHandlerState { cb: Box::new(f) });
                let ptr = &mut *state as *mut BusyHandlerState as *mut c_void;
                let rc = unsafe { sqlite3_busy_handler(db, Some(call_busy_handler), ptr) };
                check("busy_handler", db, rc)?;
                *self.busy.borrow_mut() = Some(state);
            }
            None => {
                let rc = unsafe { sqlite3_busy_handler(db, None, ptr::null_mut()) };
                check("busy_handler", db, rc)?;
                self.busy.borrow_mut().take();
            }
        }
        Ok(())
    }

    pub fn interrupt_handle(&self) -> InterruptHandle {
        InterruptHandle {
            shared_db: self.shared_db.clone(),
        }
    }

    pub(crate) fn register_dependent(&self, kind: &'static str, dependent: Weak<dyn Dependent>) {
        let mut dependents = self.dependents.borrow_mut();
        // reap dead entries opportunistically
        dependents.retain(|(_, weak)| weak.strong_count() > 0);
        dependents.push((kind, dependent));
    }

    pub fn live_dependent_count(&self) -> usize {
        let mut dependents = self.dependents.borrow_mut();
        dependents.retain(|(_, weak)| weak.strong_count() > 0);
        dependents.len()
    }

    /// A backup into this database must not start while dependents are live.
    pub fn backup_precheck(&self) -> CResult<()> {
        let live = self.live_dependent_count();
        if live > 0 {
            return Err(SqliteError::Misuse {
                op: "backup",
                message: Some(format!("{live} dependent objects are still open")),
            });
        }
        Ok(())
    }

    /// Obtain a statement ready to execute, reusing a cached one when the
    /// text was seen before.
    pub fn prepare(&self, query: &str) -> CResult<Statement<'_>> {
        let db = self.ensure_open()?;
        let _guard = self.guard.try_acquire()?;
        let entry = self.cache.borrow_mut().prepare(db, query)?;
        Ok(Statement::new(self, entry))
    }

    /// Run every statement in `sql`, discarding rows.
    pub fn execute(&self, sql: &str) -> CResult<()> {
        let mut stmt = self.prepare(sql)?;
        loop {
            while stmt.step()? {}
            if !stmt.has_more() {
                break;
            }
            stmt.next_statement()?;
        }
        stmt.finalize()
    }

    /// First row of a query, with positional bindings.
    pub fn query_row(&self, sql: &str, params: &[Value]) -> CResult<Option<Vec<Value>>> {
        let mut stmt = self.prepare(sql)?;
        for (i, value) in params.iter().enumerate() {
            stmt.bind(i as i32 + 1, value)?;
        }
        let row = if stmt.step()? { Some(stmt.row()?) } else { None };
        stmt.finalize()?;
        Ok(row)
    }

    /// Close every dependent (most recent first), drop cached statements and
    /// close the handle.
    pub fn close(&self) -> CResult<()> {
        let db = self.db.get();
        if db.is_null() {
            return Ok(());
        }
        let _guard = self.guard.acquire_yielding();

        let dependents: Vec<_> = self.dependents.borrow_mut().drain(..).collect();
        for (kind, weak) in dependents.into_iter().rev() {
            if let Some(dependent) = weak.upgrade() {
                warn!("closing outstanding {kind} with the connection");
                dependent.close_from_owner();
            }
        }
        self.cache.borrow_mut().clear(db);

        let rc = unsafe { sqlite3_close(db) };
        if rc != SQLITE_OK {
            return Err(db_error("close", db, rc));
        }
        self.db.set(ptr::null_mut());
        let mut raw = self.shared_db.lock().unwrap_or_else(|p| p.into_inner());
        raw.0 = ptr::null_mut();
        Ok(())
    }
}

impl Drop for Connection {
    fn drop(&mut self) {
        if let Err(err) = self.close() {
            warn!("connection close failed in drop: {err}");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_open_execute_query() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE t(x); INSERT INTO t VALUES(7);")
            .unwrap();
        let row = conn.query_row("SELECT x FROM t", &[]).unwrap().unwrap();
        assert_eq!(row, vec![Value::Integer(7)]);
    }

    #[test]
    fn test_query_row_with_params() {
        let conn = Connection::open_in_memory().unwrap();
        let row = conn
            .query_row("SELECT ?1 + 1", &[Value::Integer(41)])
            .unwrap()
            .unwrap();
        assert_eq!(row, vec![Value::Integer(42)]);
    }

    #[test]
    fn test_closed_connection_errors() {
        let conn = Connection::open_in_memory().unwrap();
        conn.close().unwrap();
        assert!(conn.is_closed());
        assert!(matches!(
            conn.prepare("SELECT 1"),
            Err(SqliteError::ConnectionClosed)
        ));
        // closing twice is fine
        conn.close().unwrap();
    }

    #[test]
    fn test_interrupt_handle_outlives_connection() {
        let conn = Connection::open_in_memory().unwrap();
        let handle = conn.interrupt_handle();
        handle.interrupt();
        conn.close().unwrap();
        // no-op after close rather than touching a dead pointer
        handle.interrupt();
    }

    #[test]
    fn test_constraint_error_kind() {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE u(k PRIMARY KEY, v); INSERT INTO u VALUES(1, 'a');")
            .unwrap();
        let err = conn
            .execute("INSERT INTO u VALUES(1, 'b')")
            .unwrap_err();
        assert!(matches!(err, SqliteError::Constraint { .. }));
    }

    #[test]
    fn test_busy_timeout_setting() {
        let conn = Connection::open_in_memory().unwrap();
        conn.busy_timeout(50).unwrap();
        conn.busy_timeout(0).unwrap();
    }

    #[test]
    fn test_busy_handler_gives_up() {
        use std::rc::Rc;

        let path = std::env::temp_dir().join(format!("engine-busy-{}.db", std::process::id()));
        let path = path.to_str().unwrap().to_string();
        let writer = Connection::open(&path).unwrap();
        writer.execute("CREATE TABLE t(x)").unwrap();
        writer.execute("BEGIN EXCLUSIVE").unwrap();

        let reader = Connection::open(&path).unwrap();
        let calls = Rc::new(Cell::new(0));
        let seen = calls.clone();
        reader
            .busy_handler(Some(move |_count| {
                seen.set(seen.get() + 1);
                false
            }))
            .unwrap();

        let err = reader.execute("INSERT INTO t VALUES(1)").unwrap_err();
        assert!(matches!(err, SqliteError::Busy { .. }));
        assert!(calls.get() >= 1);

        writer.execute("COMMIT").unwrap();
        drop(reader);
        drop(writer);
        let _ = std::fs::remove_file(&path);
    }
}
