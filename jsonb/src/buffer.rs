use byteorder::{BigEndian, ByteOrder};

use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::tag::ElementType;
use crate::JSONB_MAX;

/// Length written into a container header before its children are encoded.
const LENGTH_PLACEHOLDER: [u8; 4] = [0xff, 0xff, 0xff, 0xff];

/// Growable output buffer bounded at 2 GiB.
///
/// Release builds round every allocation up to the next 256-byte multiple;
/// debug builds grow by exactly the bytes requested so off-by-one writes hit
/// the capacity edge immediately.
#[derive(Debug, Default)]
pub struct JsonbBuffer {
    buf: Vec<u8>,
}

impl JsonbBuffer {
    pub fn new() -> Self {
        JsonbBuffer { buf: Vec::new() }
    }

    pub fn len(&self) -> usize {
        self.buf.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buf.is_empty()
    }

    pub fn as_slice(&self) -> &[u8] {
        self.buf.as_slice()
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buf
    }

    fn ensure(&mut self, extra: usize) -> CResult<()> {
        let needed = self
            .buf
            .len()
            .checked_add(extra)
            .ok_or(SqliteError::TooBig("jsonb encode"))?;
        if needed > JSONB_MAX {
            return Err(SqliteError::TooBig("jsonb encode"));
        }
        if needed > self.buf.capacity() {
            if cfg!(debug_assertions) {
                self.buf.reserve_exact(extra);
            } else {
                let rounded = (needed + 255) & !255;
                self.buf.reserve(rounded - self.buf.len());
            }
        }
        Ok(())
    }

    /// Append a tag byte using the smallest length class that fits
    /// `payload_len`. Returns the offset of the tag byte.
    pub fn push_tag(&mut self, element: ElementType, payload_len: usize) -> CResult<usize> {
        let offset = self.buf.len();
        let t = element as u8;
        if payload_len <= 11 {
            self.ensure(1)?;
            self.buf.push(((payload_len as u8) << 4) | t);
        } else if payload_len <= 0xff {
            self.ensure(2)?;
            self.buf.push((12 << 4) | t);
            self.buf.push(payload_len as u8);
        } else if payload_len <= 0xffff {
            self.ensure(3)?;
            self.buf.push((13 << 4) | t);
            self.buf.extend_from_slice(&(payload_len as u16).to_be_bytes());
        } else if payload_len <= JSONB_MAX {
            self.ensure(5)?;
            self.buf.push((14 << 4) | t);
            self.buf.extend_from_slice(&(payload_len as u32).to_be_bytes());
        } else {
            return Err(SqliteError::TooBig("jsonb encode"));
        }
        Ok(offset)
    }

    pub fn push_bytes(&mut self, bytes: &[u8]) -> CResult<()> {
        self.ensure(bytes.len())?;
        self.buf.extend_from_slice(bytes);
        Ok(())
    }

    /// Open a container. The 4-byte length class is always reserved because
    /// the payload length is unknown until the children are encoded; the
    /// placeholder is rewritten in place by [`JsonbBuffer::end_container`].
    pub fn begin_container(&mut self, element: ElementType) -> CResult<usize> {
        let offset = self.buf.len();
        self.ensure(5)?;
        self.buf.push((14 << 4) | element as u8);
        self.buf.extend_from_slice(&LENGTH_PLACEHOLDER);
        Ok(offset)
    }

    /// Close the container opened at `tag_offset`, rewriting the reserved
    /// length in place. An empty container collapses to an inline length of
    /// zero (the unused length bytes are at the end of the buffer, so this
    /// is a truncation, never a shift).
    pub fn end_container(&mut self, tag_offset: usize) -> CResult<()> {
        let payload_len = self.buf.len() - (tag_offset + 5);
        if payload_len > JSONB_MAX {
            return Err(SqliteError::TooBig("jsonb encode"));
        }
        if payload_len == 0 {
            self.buf[tag_offset] &= 0x0f;
            self.buf.truncate(tag_offset + 1);
        } else {
            BigEndian::write_u32(
                &mut self.buf[tag_offset + 1..tag_offset + 5],
                payload_len as u32,
            );
        }
        Ok(())
    }

    /// Rewrite the type nibble of the tag at `offset`, keeping its length
    /// class. Used to stringize numeric object keys after encoding them.
    pub fn rewrite_type(&mut self, offset: usize, element: ElementType) {
        self.buf[offset] = (self.buf[offset] & 0xf0) | element as u8;
    }
}
