//! Rebase a changeset over the conflict resolutions of an earlier apply.

use std::io::{Read, Write};
use std::os::raw::{c_int, c_void};
use std::ptr;

use libsqlite3_sys::{
    sqlite3_free, sqlite3_rebaser, sqlite3rebaser_configure, sqlite3rebaser_create,
    sqlite3rebaser_delete, sqlite3rebaser_rebase, sqlite3rebaser_rebase_strm, SQLITE_OK,
};

use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::session::stream::{x_input, x_output, InputCtx, OutputCtx};

pub struct Rebaser {
    r: *mut sqlite3_rebaser,
}

impl Rebaser {
    pub fn new() -> CResult<Rebaser> {
        let mut r: *mut sqlite3_rebaser = ptr::null_mut();
        let rc = unsafe { sqlite3rebaser_create(&mut r) };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("rebaser_create", rc, None));
        }
        Ok(Rebaser { r })
    }

    /// Feed the opaque rebase data returned by an apply with rebasing
    /// enabled. May be called once per earlier apply.
    pub fn configure(&mut self, rebase_info: &[u8]) -> CResult<()> {
        if rebase_info.len() > i32::MAX as usize {
            return Err(SqliteError::TooBig("rebaser_configure"));
        }
        let rc = unsafe {
            sqlite3rebaser_configure(
                self.r,
                rebase_info.len() as c_int,
                rebase_info.as_ptr() as *const c_void,
            )
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("rebaser_configure", rc, None));
        }
        Ok(())
    }

    pub fn rebase(&self, changeset: &[u8]) -> CResult<Vec<u8>> {
        if changeset.len() > i32::MAX as usize {
            return Err(SqliteError::TooBig("rebaser_rebase"));
        }
        let mut out_len: c_int = 0;
        let mut out: *mut c_void = ptr::null_mut();
        let rc = unsafe {
            sqlite3rebaser_rebase(
                self.r,
                changeset.len() as c_int,
                changeset.as_ptr() as *const c_void,
                &mut out_len,
                &mut out,
            )
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("rebaser_rebase", rc, None));
        }
        let rebased = if out.is_null() || out_len <= 0 {
            Vec::new()
        } else {
            unsafe { std::slice::from_raw_parts(out as *const u8, out_len as usize) }.to_vec()
        };
        unsafe { sqlite3_free(out) };
        Ok(rebased)
    }

    pub fn rebase_stream(&self, input: &mut dyn Read, output: &mut dyn Write) -> CResult<()> {
        let mut in_ctx = InputCtx { reader: input };
        let mut out_ctx = OutputCtx { writer: output };
        let rc = unsafe {
            sqlite3rebaser_rebase_strm(
                self.r,
                Some(x_input),
                &mut in_ctx as *mut _ as *mut c_void,
                Some(x_output),
                &mut out_ctx as *mut _ as *mut c_void,
            )
        };
        if rc != SQLITE_OK {
            return Err(SqliteError::from_code("rebaser_rebase_strm", rc, None));
        }
        Ok(())
    }
}

impl Drop for Rebaser {
    fn drop(&mut self) {
        unsafe { sqlite3rebaser_delete(self.r) };
    }
}
