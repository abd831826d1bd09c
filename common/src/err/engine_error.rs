use thiserror::Error;

// Primary result codes, https://sqlite.org/rescode.html
const SQLITE_BUSY: i32 = 5;
const SQLITE_NOMEM: i32 = 7;
const SQLITE_READONLY: i32 = 8;
const SQLITE_INTERRUPT: i32 = 9;
const SQLITE_IOERR: i32 = 10;
const SQLITE_CORRUPT: i32 = 11;
const SQLITE_TOOBIG: i32 = 18;
const SQLITE_CONSTRAINT: i32 = 19;
const SQLITE_MISUSE: i32 = 21;

/// Engine error taxonomy. Variants that originate at an FFI call site carry
/// the failing operation name and the SQLite message when one is available.
#[derive(Debug, Clone, Error, PartialEq)]
pub enum SqliteError {
    #[error("{op}: database is busy{}", fmt_msg(.message))]
    Busy {
        op: &'static str,
        message: Option<String>,
    },

    #[error("{op}: interrupted{}", fmt_msg(.message))]
    Interrupt {
        op: &'static str,
        message: Option<String>,
    },

    #[error("{op}: constraint violation{}", fmt_msg(.message))]
    Constraint {
        op: &'static str,
        message: Option<String>,
    },

    #[error("{op}: database corrupt{}", fmt_msg(.message))]
    Corrupt {
        op: &'static str,
        message: Option<String>,
    },

    #[error("{op}: library misuse{}", fmt_msg(.message))]
    Misuse {
        op: &'static str,
        message: Option<String>,
    },

    #[error("{op}: I/O error{}", fmt_msg(.message))]
    Io {
        op: &'static str,
        message: Option<String>,
    },

    #[error("{op}: out of memory")]
    NoMem { op: &'static str },

    #[error("{op}: attempt to write a readonly database{}", fmt_msg(.message))]
    ReadOnly {
        op: &'static str,
        message: Option<String>,
    },

    /// Access to a change record outside the iterator step or conflict
    /// callback that produced it.
    #[error("change record is out of scope")]
    InvalidContext,

    /// The per-handle mutex is held by another thread.
    #[error("database handle is in use by another thread")]
    ThreadingViolation,

    #[error("connection is closed")]
    ConnectionClosed,

    #[error("cursor is closed")]
    CursorClosed,

    #[error("{0}: data exceeds the 2 GiB bound")]
    TooBig(&'static str),

    #[error("{0}")]
    Value(String),

    #[error("{0}")]
    Type(String),

    /// Any SQLite result code without a dedicated kind.
    #[error("{op}: SQLite error code {code}{}", fmt_msg(.message))]
    Sql {
        op: &'static str,
        code: i32,
        message: Option<String>,
    },
}

fn fmt_msg(message: &Option<String>) -> String {
    match message {
        Some(m) => format!(" ({m})"),
        None => String::new(),
    }
}

impl SqliteError {
    /// Translate an SQLite result code into the engine taxonomy. Extended
    /// result codes are folded onto their primary code.
    pub fn from_code(op: &'static str, code: i32, message: Option<String>) -> SqliteError {
        match code & 0xff {
            SQLITE_BUSY => SqliteError::Busy { op, message },
            SQLITE_INTERRUPT => SqliteError::Interrupt { op, message },
            SQLITE_CONSTRAINT => SqliteError::Constraint { op, message },
            SQLITE_CORRUPT => SqliteError::Corrupt { op, message },
            SQLITE_MISUSE => SqliteError::Misuse { op, message },
            SQLITE_IOERR => SqliteError::Io { op, message },
            SQLITE_NOMEM => SqliteError::NoMem { op },
            SQLITE_READONLY => SqliteError::ReadOnly { op, message },
            SQLITE_TOOBIG => SqliteError::TooBig(op),
            _ => SqliteError::Sql { op, code, message },
        }
    }

    /// Attach a follow-up diagnostic to an already-raised error. The earliest
    /// error stays the root; later ones become notes on its message.
    pub fn with_note(self, note: &str) -> SqliteError {
        match self {
            SqliteError::Value(s) => SqliteError::Value(format!("{s}; {note}")),
            SqliteError::Sql { op, code, message } => SqliteError::Sql {
                op,
                code,
                message: Some(match message {
                    Some(m) => format!("{m}; {note}"),
                    None => note.to_string(),
                }),
            },
            other => other,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_code_primary() {
        let err = SqliteError::from_code("step", 5, None);
        assert_eq!(
            err,
            SqliteError::Busy {
                op: "step",
                message: None
            }
        );
    }

    #[test]
    fn test_from_code_extended_folds_to_primary() {
        // SQLITE_IOERR_READ = 10 | (1 << 8)
        let err = SqliteError::from_code("read", 266, Some("disk I/O error".into()));
        assert!(matches!(err, SqliteError::Io { op: "read", .. }));
    }

    #[test]
    fn test_from_code_unknown_wraps_as_sql() {
        let err = SqliteError::from_code("exec", 1, None);
        assert_eq!(
            err,
            SqliteError::Sql {
                op: "exec",
                code: 1,
                message: None
            }
        );
    }

    #[test]
    fn test_display_carries_op_and_message() {
        let err = SqliteError::from_code("prepare", 19, Some("UNIQUE constraint failed".into()));
        let text = err.to_string();
        assert!(text.contains("prepare"));
        assert!(text.contains("UNIQUE constraint failed"));
    }
}
