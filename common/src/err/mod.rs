use crate::err::engine_error::SqliteError;

pub mod engine_error;

pub type CResult<T> = Result<T, SqliteError>;
