//! Changeset iteration. One iterator type serves both contiguous buffers and
//! streamed input; the record it yields is valid only until the iterator
//! advances again.

use std::cell::RefCell;
use std::ffi::CStr;

use std::marker::PhantomData;
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;
use std::rc::{Rc, Weak};
use std::slice::from_raw_parts;

use libsqlite3_sys::{
    sqlite3_changeset_iter, sqlite3changeset_conflict, sqlite3changeset_finalize,
    sqlite3changeset_fk_conflicts, sqlite3changeset_new, sqlite3changeset_next,
    sqlite3changeset_old, sqlite3changeset_op, sqlite3changeset_pk, SQLITE_DELETE, SQLITE_DONE,
    SQLITE_INSERT, SQLITE_OK, SQLITE_ROW, SQLITE_UPDATE,
};

use common::err::engine_error::SqliteError;
use common::err::CResult;
use common::value::Value;

use crate::session::stream::InputCtx;
use crate::value::value_from_sqlite;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChangeOp {
    Insert,
    Update,
    Delete,
}

impl ChangeOp {
    fn from_code(code: c_int) -> CResult<ChangeOp> {
        match code {
            SQLITE_INSERT => Ok(ChangeOp::Insert),
            SQLITE_UPDATE => Ok(ChangeOp::Update),
            SQLITE_DELETE => Ok(ChangeOp::Delete),
            other => Err(SqliteError::Value(format!(
                "unknown change operation code {other}"
            ))),
        }
    }
}

pub(crate) struct IterState {
    pub it: *mut sqlite3_changeset_iter,
    /// Bumped on every advance; records carrying an older generation are out
    /// of scope.
    pub generation: u64,
}

impl IterState {
    pub(crate) fn new(it: *mut sqlite3_changeset_iter) -> Rc<RefCell<IterState>> {
        Rc::new(RefCell::new(IterState { it, generation: 0 }))
    }
}

/// One row change. All accessors fail with an out-of-scope error once the
/// producing iterator has moved on or been dropped.
pub struct TableChange {
    state: Weak<RefCell<IterState>>,
    generation: u64,
    op: ChangeOp,
    table: String,
    column_count: usize,
    indirect: bool,
    pk_columns: Vec<bool>,
}

impl TableChange {
    pub(crate) fn read(state: &Rc<RefCell<IterState>>) -> CResult<TableChange> {
        let (it, generation) = {
            let st = state.borrow();
            (st.it, st.generation)
        };
        let mut table: *const c_char = ptr::null();
        let mut column_count: c_int = 0;
        let mut op_code: c_int = 0;
        let mut indirect: c_int = 0;
        let rc = unsafe {
            sqlite3changeset_op(it, &mut table, &mut column_count, &mut op_code, &mut indirect)
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changeset_op", rc, None));
        }
        let table = unsafe { CStr::from_ptr(table) }
            .to_str()
            .map_err(|_| SqliteError::Value("invalid UTF-8 in table name".to_string()))?
            .to_string();

        let mut pk_ptr: *mut u8 = ptr::null_mut();
        let mut pk_count: c_int = 0;
        let rc = unsafe { sqlite3changeset_pk(it, &mut pk_ptr, &mut pk_count) };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changeset_pk", rc, None));
        }
        let pk_columns = unsafe { from_raw_parts(pk_ptr, pk_count as usize) }
            .iter()
            .map(|&b| b != 0)
            .collect();

        Ok(TableChange {
            state: Rc::downgrade(state),
            generation,
            op: ChangeOp::from_code(op_code)?,
            table,
            column_count: column_count as usize,
            indirect: indirect != 0,
            pk_columns,
        })
    }

    /// Scoped access to the producing iterator for operations consuming the
    /// change at the SQLite level.
    pub(crate) fn iter_state(&self) -> CResult<Rc<RefCell<IterState>>> {
        self.live()
    }

    fn live(&self) -> CResult<Rc<RefCell<IterState>>> {
        let state = self.state.upgrade().ok_or(SqliteError::InvalidContext)?;
        if state.borrow().generation != self.generation {
            return Err(SqliteError::InvalidContext);
        }
        Ok(state)
    }

    pub fn op(&self) -> CResult<ChangeOp> {
        self.live()?;
        Ok(self.op)
    }

    pub fn table_name(&self) -> CResult<&str> {
        self.live()?;
        Ok(&self.table)
    }

    pub fn column_count(&self) -> CResult<usize> {
        self.live()?;
        Ok(self.column_count)
    }

    pub fn indirect(&self) -> CResult<bool> {
        self.live()?;
        Ok(self.indirect)
    }

    /// Primary-key bitmap of the changed table.
    pub fn pk_columns(&self) -> CResult<&[bool]> {
        self.live()?;
        Ok(&self.pk_columns)
    }

    /// Old row values: absent for INSERT, one value or no-change sentinel
    /// per column otherwise.
    pub fn old(&self) -> CResult<Option<Vec<Value>>> {
        let state = self.live()?;
        if self.op == ChangeOp::Insert {
            return Ok(None);
        }
        let it = state.borrow().it;
        self.tuple(it, "changeset_old", |it, col, out| unsafe {
            sqlite3changeset_old(it, col, out)
        })
        .map(Some)
    }

    /// New row values: absent for DELETE.
    pub fn new(&self) -> CResult<Option<Vec<Value>>> {
        let state = self.live()?;
        if self.op == ChangeOp::Delete {
            return Ok(None);
        }
        let it = state.borrow().it;
        self.tuple(it, "changeset_new", |it, col, out| unsafe {
            sqlite3changeset_new(it, col, out)
        })
        .map(Some)
    }

    /// Conflicting row values; only meaningful inside a DATA or CONFLICT
    /// callback.
    pub fn conflict(&self) -> CResult<Vec<Value>> {
        let state = self.live()?;
        let it = state.borrow().it;
        self.tuple(it, "changeset_conflict", |it, col, out| unsafe {
            sqlite3changeset_conflict(it, col, out)
        })
    }

    /// Foreign-key violation count; only meaningful inside a FOREIGN_KEY
    /// callback.
    pub fn fk_conflicts(&self) -> CResult<i64> {
        let state = self.live()?;
        let it = state.borrow().it;
        let mut out: c_int = 0;
        let rc = unsafe { sqlite3changeset_fk_conflicts(it, &mut out) };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("changeset_fk_conflicts", rc, None));
        }
        Ok(out as i64)
    }

    fn tuple(
        &self,
        it: *mut sqlite3_changeset_iter,
        op: &'static str,
        fetch: impl Fn(
            *mut sqlite3_changeset_iter,
            c_int,
            *mut *mut libsqlite3_sys::sqlite3_value,
        ) -> c_int,
    ) -> CResult<Vec<Value>> {
        let mut values = Vec::with_capacity(self.column_count);
        for col in 0..self.column_count {
            let mut value: *mut libsqlite3_sys::sqlite3_value = ptr::null_mut();
            let rc = fetch(it, col as c_int, &mut value);
            if rc != SQLITE_OK {
                return Err(SqliteError::from_code(op, rc, None));
            }
            if value.is_null() {
                // column not recorded: the no-change sentinel
                values.push(Value::NoChange);
            } else {
                values.push(unsafe { value_from_sqlite(value, false, true) }?);
            }
        }
        Ok(values)
    }
}

/// Iterator over the records of a changeset or patchset.
pub struct ChangesetIter<'a> {
    state: Rc<RefCell<IterState>>,
    /// Keeps the streaming context alive for the iterator's lifetime.
    _input: Option<Box<InputCtx<'a>>>,
    phantom: PhantomData<&'a [u8]>,
}

impl<'a> ChangesetIter<'a> {
    pub(crate) fn from_parts(
        it: *mut sqlite3_changeset_iter,
        input: Option<Box<InputCtx<'a>>>,
    ) -> Self {
        ChangesetIter {
            state: IterState::new(it),
            _input: input,
            phantom: PhantomData,
        }
    }

    /// Advance to the next record. The previous record goes out of scope.
    #[allow(clippy::should_implement_trait)]
    pub fn next(&mut self) -> CResult<Option<TableChange>> {
        {
            let mut state = self.state.borrow_mut();
            state.generation += 1;
        }
        let it = self.state.borrow().it;
        match unsafe { sqlite3changeset_next(it) } {
            SQLITE_ROW => TableChange::read(&self.state).map(Some),
            SQLITE_DONE => Ok(None),
            rc => Err(SqliteError::from_code("changeset_next", rc, None)),
        }
    }
}

impl Drop for ChangesetIter<'_> {
    fn drop(&mut self) {
        let mut state = self.state.borrow_mut();
        state.generation += 1;
        if !state.it.is_null() {
            unsafe { sqlite3changeset_finalize(state.it) };
            state.it = ptr::null_mut();
        }
    }
}

