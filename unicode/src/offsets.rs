//! Position mappers between code-point indexes, UTF-8 byte offsets and
//! concatenated-text offsets. All three cache the previous answer because
//! queries are overwhelmingly monotone forward scans.

use common::err::engine_error::SqliteError;
use common::err::CResult;

/// Code-point index to UTF-8 byte offset.
pub struct ToUtf8PositionMapper<'a> {
    text: &'a str,
    last_index: usize,
    last_byte: usize,
}

impl<'a> ToUtf8PositionMapper<'a> {
    pub fn new(text: &'a str) -> Self {
        ToUtf8PositionMapper {
            text,
            last_index: 0,
            last_byte: 0,
        }
    }

    pub fn map(&mut self, index: usize) -> CResult<usize> {
        if index < self.last_index {
            self.last_index = 0;
            self.last_byte = 0;
        }
        let mut byte = self.last_byte;
        let mut i = self.last_index;
        let mut chars = self.text[byte..].chars();
        while i < index {
            match chars.next() {
                Some(c) => {
                    byte += c.len_utf8();
                    i += 1;
                }
                None => {
                    return Err(SqliteError::Value(format!(
                        "code point index {index} out of range"
                    )))
                }
            }
        }
        self.last_index = i;
        self.last_byte = byte;
        Ok(byte)
    }
}

/// UTF-8 byte offset to code-point index.
pub struct FromUtf8PositionMapper<'a> {
    text: &'a str,
    last_byte: usize,
    last_index: usize,
}

impl<'a> FromUtf8PositionMapper<'a> {
    pub fn new(text: &'a str) -> Self {
        FromUtf8PositionMapper {
            text,
            last_byte: 0,
            last_index: 0,
        }
    }

    pub fn map(&mut self, byte: usize) -> CResult<usize> {
        if byte > self.text.len() {
            return Err(SqliteError::Value(format!("byte offset {byte} out of range")));
        }
        if !self.text.is_char_boundary(byte) {
            return Err(SqliteError::Value(format!(
                "byte offset {byte} is not a character boundary"
            )));
        }
        if byte < self.last_byte {
            self.last_byte = 0;
            self.last_index = 0;
        }
        let mut index = self.last_index;
        let mut pos = self.last_byte;
        for c in self.text[self.last_byte..byte].chars() {
            pos += c.len_utf8();
            index += 1;
        }
        debug_assert_eq!(pos, byte);
        self.last_byte = byte;
        self.last_index = index;
        Ok(index)
    }
}

struct Segment {
    out_start: usize,
    len: usize,
    text: String,
    /// None for separators, which map onto the edge of the neighboring
    /// mapped segment.
    src_start: Option<usize>,
    src_end: usize,
}

/// Accumulates text segments with their source offsets, materializes the
/// concatenation lazily, and answers "which source offset does this output
/// offset correspond to".
#[derive(Default)]
pub struct OffsetMapper {
    segments: Vec<Segment>,
    out_len: usize,
    materialized: Option<String>,
    last_segment: usize,
}

impl OffsetMapper {
    pub fn new() -> Self {
        OffsetMapper::default()
    }

    pub fn add(&mut self, text: &str, src_start: usize, src_end: usize) {
        self.materialized = None;
        self.segments.push(Segment {
            out_start: self.out_len,
            len: text.len(),
            text: text.to_string(),
            src_start: Some(src_start),
            src_end,
        });
        self.out_len += text.len();
    }

    pub fn add_separator(&mut self, text: &str) {
        self.materialized = None;
        let src_end = self.segments.iter().rev().find_map(|s| {
            s.src_start.map(|_| s.src_end)
        });
        self.segments.push(Segment {
            out_start: self.out_len,
            len: text.len(),
            text: text.to_string(),
            src_start: None,
            src_end: src_end.unwrap_or(0),
        });
        self.out_len += text.len();
    }

    /// The concatenated text, built on first use.
    pub fn text(&mut self) -> &str {
        if self.materialized.is_none() {
            let mut out = String::with_capacity(self.out_len);
            for segment in &self.segments {
                out.push_str(&segment.text);
            }
            self.materialized = Some(out);
        }
        self.materialized.as_deref().unwrap_or("")
    }

    /// Source offset for an offset into the materialized text. Offsets in a
    /// separator answer the end of the last real segment before it.
    pub fn map(&mut self, offset: usize) -> CResult<usize> {
        if offset > self.out_len {
            return Err(SqliteError::Value(format!("offset {offset} out of range")));
        }
        if self.segments.is_empty() {
            return Ok(0);
        }
        if offset == self.out_len {
            return Ok(self.segments[self.segments.len() - 1].src_end);
        }

        if self.last_segment >= self.segments.len()
            || offset < self.segments[self.last_segment].out_start
        {
            self.last_segment = 0;
        }
        while self.last_segment + 1 < self.segments.len()
            && offset >= self.segments[self.last_segment + 1].out_start
        {
            self.last_segment += 1;
        }
        let segment = &self.segments[self.last_segment];
        debug_assert!(offset >= segment.out_start && offset < segment.out_start + segment.len);
        match segment.src_start {
            Some(start) => Ok(start + (offset - segment.out_start)),
            None => Ok(segment.src_end),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_utf8_positions() {
        let text = "aé中b";
        let mut mapper = ToUtf8PositionMapper::new(text);
        assert_eq!(mapper.map(0).unwrap(), 0);
        assert_eq!(mapper.map(1).unwrap(), 1);
        assert_eq!(mapper.map(2).unwrap(), 3);
        assert_eq!(mapper.map(3).unwrap(), 6);
        assert_eq!(mapper.map(4).unwrap(), 7);
        assert!(mapper.map(5).is_err());
        // backward query resets the cache
        assert_eq!(mapper.map(1).unwrap(), 1);
    }

    #[test]
    fn test_from_utf8_positions() {
        let text = "aé中b";
        let mut mapper = FromUtf8PositionMapper::new(text);
        assert_eq!(mapper.map(0).unwrap(), 0);
        assert_eq!(mapper.map(3).unwrap(), 2);
        assert_eq!(mapper.map(6).unwrap(), 3);
        assert_eq!(mapper.map(7).unwrap(), 4);
        assert!(mapper.map(2).is_err());
        assert!(mapper.map(99).is_err());
        assert_eq!(mapper.map(1).unwrap(), 1);
    }

    #[test]
    fn test_offset_mapper_concatenation() {
        let mut mapper = OffsetMapper::new();
        mapper.add("hello", 10, 15);
        mapper.add_separator(" ");
        mapper.add("world", 20, 25);

        assert_eq!(mapper.text(), "hello world");
        assert_eq!(mapper.map(0).unwrap(), 10);
        assert_eq!(mapper.map(4).unwrap(), 14);
        // inside the separator: end of the previous segment
        assert_eq!(mapper.map(5).unwrap(), 15);
        assert_eq!(mapper.map(6).unwrap(), 20);
        assert_eq!(mapper.map(10).unwrap(), 24);
        assert_eq!(mapper.map(11).unwrap(), 25);
        assert!(mapper.map(12).is_err());
    }

    #[test]
    fn test_offset_mapper_backward_queries_replay() {
        let mut mapper = OffsetMapper::new();
        mapper.add("ab", 0, 2);
        mapper.add("cd", 5, 7);
        assert_eq!(mapper.map(3).unwrap(), 6);
        assert_eq!(mapper.map(0).unwrap(), 0);
        assert_eq!(mapper.map(2).unwrap(), 5);
    }

    #[test]
    fn test_offset_mapper_lazy_materialization() {
        let mut mapper = OffsetMapper::new();
        assert_eq!(mapper.text(), "");
        mapper.add("x", 3, 4);
        assert_eq!(mapper.text(), "x");
    }
}
