//! Static changeset operations: invert, concat, iterate and apply with
//! conflict resolution, in buffered and streamed form.

use std::io::{Read, Write};
use std::os::raw::{c_char, c_int, c_void};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::ptr;
use std::slice::from_raw_parts;

use bitflags::bitflags;
use num_enum::FromPrimitive;
use tracing::error;

use libsqlite3_sys::{
    sqlite3_changeset_iter, sqlite3_free, sqlite3changeset_apply_v2, sqlite3changeset_apply_v2_strm,
    sqlite3changeset_concat, sqlite3changeset_concat_strm, sqlite3changeset_invert,
    sqlite3changeset_invert_strm, sqlite3changeset_start, sqlite3changeset_start_strm,
    sqlite3changeset_start_v2, sqlite3changeset_start_v2_strm, SQLITE_OK,
};

use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::connection::Connection;
use crate::error::{db_error, ErrorSlot};
use crate::session::iterator::{ChangesetIter, IterState, TableChange};
use crate::session::stream::{x_input, x_output, InputCtx, OutputCtx};

/// Buffered changesets are bounded by 2 GiB.
const MAX_CHANGESET_BYTES: usize = i32::MAX as usize;

/// Conflict reasons handed to the resolution callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq, FromPrimitive)]
#[repr(i32)]
pub enum ConflictReason {
    Data = 1,
    NotFound = 2,
    Conflict = 3,
    Constraint = 4,
    ForeignKey = 5,
    #[num_enum(default)]
    Unknown = -1,
}

/// Resolution returned by the conflict callback.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ConflictAction {
    Omit = 0,
    Replace = 1,
    Abort = 2,
}

bitflags! {
    /// Flags for [`apply`]; mirrors SQLITE_CHANGESETAPPLY_*.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct ApplyFlags: i32 {
        const NOSAVEPOINT = 0x0001;
        const INVERT      = 0x0002;
        const IGNORENOOP  = 0x0004;
        const FKNOACTION  = 0x0008;
    }
}

bitflags! {
    /// Flags for [`iter`]; mirrors SQLITE_CHANGESETSTART_*.
    #[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
    pub struct IterFlags: i32 {
        const INVERT = 0x0002;
    }
}

fn bounded(op: &'static str, changeset: &[u8]) -> CResult<c_int> {
    if changeset.len() > MAX_CHANGESET_BYTES {
        return Err(SqliteError::TooBig(op));
    }
    Ok(changeset.len() as c_int)
}

/// Copy a SQLite-allocated buffer into host memory and free the original.
unsafe fn take_sqlite_buffer(data: *mut c_void, len: c_int) -> Vec<u8> {
    let out = if data.is_null() || len <= 0 {
        Vec::new()
    } else {
        from_raw_parts(data as *const u8, len as usize).to_vec()
    };
    sqlite3_free(data);
    out
}

/// Invert a changeset: inserts become deletes, updates swap old and new.
pub fn invert(changeset: &[u8]) -> CResult<Vec<u8>> {
    let len = bounded("changeset_invert", changeset)?;
    let mut out_len: c_int = 0;
    let mut out: *mut c_void = ptr::null_mut();
    let rc = unsafe {
        sqlite3changeset_invert(
            len,
            changeset.as_ptr() as *const c_void,
            &mut out_len,
            &mut out,
        )
    };
    if rc != SQLITE_OK {
        return Err(SqliteError::from_code("changeset_invert", rc, None));
    }
    Ok(unsafe { take_sqlite_buffer(out, out_len) })
}

pub fn invert_stream(input: &mut dyn Read, output: &mut dyn Write) -> CResult<()> {
    let mut in_ctx = InputCtx { reader: input };
    let mut out_ctx = OutputCtx { writer: output };
    let rc = unsafe {
        sqlite3changeset_invert_strm(
            Some(x_input),
            &mut in_ctx as *mut _ as *mut c_void,
            Some(x_output),
            &mut out_ctx as *mut _ as *mut c_void,
        )
    };
    if rc != SQLITE_OK {
        return Err(SqliteError::from_code("changeset_invert_strm", rc, None));
    }
    Ok(())
}

/// Concatenate two changesets so that applying the result equals applying
/// `a` then `b`.
pub fn concat(a: &[u8], b: &[u8]) -> CResult<Vec<u8>> {
    let a_len = bounded("changeset_concat", a)?;
    let b_len = bounded("changeset_concat", b)?;
    let mut out_len: c_int = 0;
    let mut out: *mut c_void = ptr::null_mut();
    let rc = unsafe {
        sqlite3changeset_concat(
            a_len,
            a.as_ptr() as *mut c_void,
            b_len,
            b.as_ptr() as *mut c_void,
            &mut out_len,
            &mut out,
        )
    };
    if rc != SQLITE_OK {
        return Err(SqliteError::from_code("changeset_concat", rc, None));
    }
    Ok(unsafe { take_sqlite_buffer(out, out_len) })
}

pub fn concat_stream(
    a: &mut dyn Read,
    b: &mut dyn Read,
    output: &mut dyn Write,
) -> CResult<()> {
    let mut a_ctx = InputCtx { reader: a };
    let mut b_ctx = InputCtx { reader: b };
    let mut out_ctx = OutputCtx { writer: output };
    let rc = unsafe {
        sqlite3changeset_concat_strm(
            Some(x_input),
            &mut a_ctx as *mut _ as *mut c_void,
            Some(x_input),
            &mut b_ctx as *mut _ as *mut c_void,
            Some(x_output),
            &mut out_ctx as *mut _ as *mut c_void,
        )
    };
    if rc != SQLITE_OK {
        return Err(SqliteError::from_code("changeset_concat_strm", rc, None));
    }
    Ok(())
}

/// Iterate a buffered changeset. A non-empty `flags` selects the v2 API.
pub fn iter(changeset: &[u8], flags: IterFlags) -> CResult<ChangesetIter<'_>> {
    let len = bounded("changeset_start", changeset)?;
    let mut it: *mut sqlite3_changeset_iter = ptr::null_mut();
    let rc = unsafe {
        if flags.is_empty() {
            sqlite3changeset_start(&mut it, len, changeset.as_ptr() as *mut c_void)
        } else {
            sqlite3changeset_start_v2(
                &mut it,
                len,
                changeset.as_ptr() as *mut c_void,
                flags.bits(),
            )
        }
    };
    if rc != SQLITE_OK {
        return Err(SqliteError::from_code("changeset_start", rc, None));
    }
    Ok(ChangesetIter::from_parts(it, None))
}

/// Iterate a streamed changeset without buffering it.
pub fn iter_stream(input: &mut dyn Read, flags: IterFlags) -> CResult<ChangesetIter<'_>> {
    let mut ctx = Box::new(InputCtx { reader: input });
    let mut it: *mut sqlite3_changeset_iter = ptr::null_mut();
    let rc = unsafe {
        if flags.is_empty() {
            sqlite3changeset_start_strm(
                &mut it,
                Some(x_input),
                ctx.as_mut() as *mut InputCtx as *mut c_void,
            )
        } else {
            sqlite3changeset_start_v2_strm(
                &mut it,
                Some(x_input),
                ctx.as_mut() as *mut InputCtx as *mut c_void,
                flags.bits(),
            )
        }
    };
    if rc != SQLITE_OK {
        return Err(SqliteError::from_code("changeset_start_strm", rc, None));
    }
    Ok(ChangesetIter::from_parts(it, Some(ctx)))
}

pub type FilterFn<'f> = Box<dyn FnMut(&str) -> bool + 'f>;
pub type ConflictFn<'f> =
    Box<dyn FnMut(ConflictReason, &TableChange) -> CResult<ConflictAction> + 'f>;

struct ApplyCtx<'f> {
    filter: Option<FilterFn<'f>>,
    conflict: Option<ConflictFn<'f>>,
    slot: ErrorSlot,
    state: std::rc::Rc<std::cell::RefCell<IterState>>,
}

unsafe extern "C" fn call_filter(ctx: *mut c_void, table: *const c_char) -> c_int {
    let ctx = &mut *(ctx as *mut ApplyCtx);
    // a pending host error means no further host code runs
    if ctx.slot.is_set() {
        return 0;
    }
    let Some(filter) = ctx.filter.as_mut() else {
        return 1;
    };
    let name = std::ffi::CStr::from_ptr(table).to_str().unwrap_or("");
    match catch_unwind(AssertUnwindSafe(|| filter(name))) {
        Ok(keep) => c_int::from(keep),
        Err(_) => {
            ctx.slot
                .set(SqliteError::Value("table filter panicked".to_string()));
            0
        }
    }
}

unsafe extern "C" fn call_conflict(
    ctx: *mut c_void,
    reason: c_int,
    it: *mut sqlite3_changeset_iter,
) -> c_int {
    let ctx = &mut *(ctx as *mut ApplyCtx);
    if ctx.slot.is_set() {
        return ConflictAction::Abort as c_int;
    }
    let Some(conflict) = ctx.conflict.as_mut() else {
        return ConflictAction::Abort as c_int;
    };

    // expose the conflicting change through a record scoped to this call
    {
        let mut state = ctx.state.borrow_mut();
        state.it = it;
        state.generation += 1;
    }
    let outcome = TableChange::read(&ctx.state).and_then(|change| {
        catch_unwind(AssertUnwindSafe(|| conflict(ConflictReason::from(reason), &change)))
            .unwrap_or_else(|_| {
                Err(SqliteError::Value(
                    "conflict handler panicked".to_string(),
                ))
            })
    });
    {
        let mut state = ctx.state.borrow_mut();
        state.generation += 1;
        state.it = ptr::null_mut();
    }

    match outcome {
        Ok(action) => action as c_int,
        Err(err) => {
            ctx.slot.set(err);
            ConflictAction::Abort as c_int
        }
    }
}

fn finish_apply(
    conn: &Connection,
    rc: c_int,
    ctx: ApplyCtx<'_>,
    rebase_out: *mut c_void,
    rebase_len: c_int,
    want_rebase: bool,
) -> CResult<Option<Vec<u8>>> {
    let rebase = unsafe { take_sqlite_buffer(rebase_out, rebase_len) };
    if let Some(err) = ctx.slot.take() {
        // the host error wins even when SQLite reports success
        error!("changeset apply failed in a host callback: {err}");
        return Err(err);
    }
    if rc != SQLITE_OK {
        return Err(db_error("changeset_apply", conn.raw_db(), rc));
    }
    Ok(if want_rebase { Some(rebase) } else { None })
}

/// Apply a buffered changeset with conflict resolution. With `rebase` the
/// accumulated rebase data is returned.
pub fn apply(
    changeset: &[u8],
    conn: &Connection,
    filter: Option<FilterFn<'_>>,
    conflict: Option<ConflictFn<'_>>,
    flags: ApplyFlags,
    rebase: bool,
) -> CResult<Option<Vec<u8>>> {
    let len = bounded("changeset_apply", changeset)?;
    let db = conn.ensure_open()?;
    let _guard = conn.guard().try_acquire()?;

    let filtered = filter.is_some();
    let mut ctx = ApplyCtx {
        filter,
        conflict,
        slot: ErrorSlot::new(),
        state: IterState::new(ptr::null_mut()),
    };
    let mut rebase_out: *mut c_void = ptr::null_mut();
    let mut rebase_len: c_int = 0;
    let rc = unsafe {
        sqlite3changeset_apply_v2(
            db,
            len,
            changeset.as_ptr() as *mut c_void,
            if filtered { Some(call_filter) } else { None },
            Some(call_conflict),
            &mut ctx as *mut ApplyCtx as *mut c_void,
            if rebase { &mut rebase_out as *mut *mut c_void } else { ptr::null_mut() },
            if rebase { &mut rebase_len as *mut c_int } else { ptr::null_mut() },
            flags.bits(),
        )
    };
    finish_apply(conn, rc, ctx, rebase_out, rebase_len, rebase)
}

/// Streamed variant of [`apply`].
pub fn apply_stream(
    input: &mut dyn Read,
    conn: &Connection,
    filter: Option<FilterFn<'_>>,
    conflict: Option<ConflictFn<'_>>,
    flags: ApplyFlags,
    rebase: bool,
) -> CResult<Option<Vec<u8>>> {
    let db = conn.ensure_open()?;
    let _guard = conn.guard().try_acquire()?;

    let mut in_ctx = InputCtx { reader: input };
    let filtered = filter.is_some();
    let mut ctx = ApplyCtx {
        filter,
        conflict,
        slot: ErrorSlot::new(),
        state: IterState::new(ptr::null_mut()),
    };
    let mut rebase_out: *mut c_void = ptr::null_mut();
    let mut rebase_len: c_int = 0;
    let rc = unsafe {
        sqlite3changeset_apply_v2_strm(
            db,
            Some(x_input),
            &mut in_ctx as *mut _ as *mut c_void,
            if filtered { Some(call_filter) } else { None },
            Some(call_conflict),
            &mut ctx as *mut ApplyCtx as *mut c_void,
            if rebase { &mut rebase_out as *mut *mut c_void } else { ptr::null_mut() },
            if rebase { &mut rebase_len as *mut c_int } else { ptr::null_mut() },
            flags.bits(),
        )
    };
    finish_apply(conn, rc, ctx, rebase_out, rebase_len, rebase)
}
