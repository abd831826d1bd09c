//! C trampolines bridging SQLite's streaming session I/O onto host readers
//! and writers. An input callback fills at most the requested byte count,
//! with zero signalling end of stream; an output callback must consume its
//! chunk before returning.

use std::io::{ErrorKind, Read, Write};
use std::os::raw::{c_int, c_void};
use std::panic::{catch_unwind, AssertUnwindSafe};
use std::slice::{from_raw_parts, from_raw_parts_mut};

use libsqlite3_sys::{SQLITE_IOERR_READ, SQLITE_IOERR_WRITE, SQLITE_MISUSE, SQLITE_OK};

pub(crate) struct InputCtx<'a> {
    pub reader: &'a mut dyn Read,
}

pub(crate) struct OutputCtx<'a> {
    pub writer: &'a mut dyn Write,
}

pub(crate) unsafe extern "C" fn x_input(
    p_in: *mut c_void,
    p_data: *mut c_void,
    pn_data: *mut c_int,
) -> c_int {
    if p_in.is_null() || p_data.is_null() || pn_data.is_null() {
        return SQLITE_MISUSE;
    }
    let ctx = &mut *(p_in as *mut InputCtx);
    let buf = from_raw_parts_mut(p_data as *mut u8, *pn_data as usize);
    let outcome = catch_unwind(AssertUnwindSafe(|| loop {
        match ctx.reader.read(buf) {
            Ok(n) => return Ok(n),
            Err(err) if err.kind() == ErrorKind::Interrupted => continue,
            Err(err) => return Err(err),
        }
    }));
    match outcome {
        Ok(Ok(n)) => {
            *pn_data = n as c_int;
            SQLITE_OK
        }
        _ => SQLITE_IOERR_READ,
    }
}

pub(crate) unsafe extern "C" fn x_output(
    p_out: *mut c_void,
    p_data: *const c_void,
    n_data: c_int,
) -> c_int {
    if p_out.is_null() || p_data.is_null() || n_data <= 0 {
        return SQLITE_MISUSE;
    }
    let ctx = &mut *(p_out as *mut OutputCtx);
    let chunk = from_raw_parts(p_data as *const u8, n_data as usize);
    match catch_unwind(AssertUnwindSafe(|| ctx.writer.write_all(chunk))) {
        Ok(Ok(())) => SQLITE_OK,
        _ => SQLITE_IOERR_WRITE,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_input_respects_requested_count() {
        let data = vec![7u8; 100];
        let mut reader: &[u8] = &data;
        let mut ctx = InputCtx {
            reader: &mut reader,
        };
        let mut buf = [0u8; 16];
        let mut n: c_int = 16;
        let rc = unsafe {
            x_input(
                &mut ctx as *mut _ as *mut c_void,
                buf.as_mut_ptr() as *mut c_void,
                &mut n,
            )
        };
        assert_eq!(rc, SQLITE_OK);
        assert_eq!(n, 16);
        assert_eq!(buf, [7u8; 16]);
    }

    #[test]
    fn test_input_signals_eof_with_zero() {
        let mut reader: &[u8] = &[];
        let mut ctx = InputCtx {
            reader: &mut reader,
        };
        let mut buf = [0u8; 8];
        let mut n: c_int = 8;
        let rc = unsafe {
            x_input(
                &mut ctx as *mut _ as *mut c_void,
                buf.as_mut_ptr() as *mut c_void,
                &mut n,
            )
        };
        assert_eq!(rc, SQLITE_OK);
        assert_eq!(n, 0);
    }

    #[test]
    fn test_output_writes_chunk() {
        let mut sink = Vec::new();
        {
            let mut writer: &mut dyn Write = &mut sink;
            let mut ctx = OutputCtx {
                writer: &mut *writer,
            };
            let chunk = [1u8, 2, 3];
            let rc = unsafe {
                x_output(
                    &mut ctx as *mut _ as *mut c_void,
                    chunk.as_ptr() as *const c_void,
                    3,
                )
            };
            assert_eq!(rc, SQLITE_OK);
        }
        assert_eq!(sink, vec![1, 2, 3]);
    }

    #[test]
    fn test_null_contexts_are_misuse() {
        let mut n: c_int = 4;
        let rc = unsafe { x_input(std::ptr::null_mut(), std::ptr::null_mut(), &mut n) };
        assert_eq!(rc, SQLITE_MISUSE);
    }
}
