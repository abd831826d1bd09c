//! Encoder, decoder and detector for SQLite's binary JSON format.
//!
//! The wire format is a tag byte per value (`HHHH_TTTT`: high nibble length
//! class, low nibble element type), with containers holding the concatenation
//! of their tagged children. Validation here is stricter than SQLite's own,
//! in particular for the numeric payload grammars.

pub mod buffer;
pub mod decode;
pub mod encode;
pub mod tag;
pub mod value;

pub use buffer::JsonbBuffer;
pub use decode::{decode, decode_with, detect, DecodeOptions};
pub use encode::{encode, encode_with, EncodeOptions, Fallback};
pub use tag::ElementType;
pub use value::{JsonArray, JsonObject, JsonValue};

/// Encoded size bound, INT32_MAX.
pub const JSONB_MAX: usize = i32::MAX as usize;
