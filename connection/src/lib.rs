//! Embedded SQLite engine core: connection skeleton with per-handle
//! serialization and dependent tracking, host/SQLite value conversion, the
//! prepared-statement cache and the session/changeset engine.

pub mod connection;
pub mod error;
pub(crate) mod guard;
pub mod session;
pub mod statement;
pub mod value;

pub use crate::connection::{Connection, InterruptHandle};
pub use crate::session::builder::ChangesetBuilder;
pub use crate::session::changeset::{
    apply, apply_stream, concat, concat_stream, invert, invert_stream, iter, iter_stream,
    ApplyFlags, ConflictAction, ConflictFn, ConflictReason, FilterFn, IterFlags,
};
pub use crate::session::iterator::{ChangeOp, ChangesetIter, TableChange};
pub use crate::session::rebaser::Rebaser;
pub use crate::session::{Session, SessionConfig};
pub use crate::statement::Statement;
pub use crate::value::{blob_is_jsonb, blob_to_json};

pub use common::err::engine_error::SqliteError;
pub use common::err::CResult;
pub use common::value::Value;
