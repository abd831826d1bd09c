//! Unicode segmentation and text operations: grapheme/word/sentence breaks
//! (UAX #29), line break opportunities (UAX #14), case folding, stripping,
//! column widths and offset mapping.

pub mod casefold;
pub mod grapheme;
pub mod iterator;
pub mod line;
pub mod offsets;
pub mod sentence;
pub mod strip;
pub mod tables;
pub mod width;
pub mod word;
pub mod wrap;

pub use casefold::casefold;
pub use grapheme::{
    grapheme_endswith, grapheme_find, grapheme_length, grapheme_next_break, grapheme_offsets,
    grapheme_startswith, grapheme_substr, is_grapheme_boundary,
};
pub use line::{line_next_break, line_next_hard_break};
pub use offsets::{FromUtf8PositionMapper, OffsetMapper, ToUtf8PositionMapper};
pub use sentence::{sentence_next_break, sentence_offsets};
pub use strip::strip;
pub use width::{char_width, text_width};
pub use word::{word_next_break, word_offsets};
pub use wrap::{expand_tabs, split_lines, text_wrap};

/// Unicode version the category tables target.
pub fn version() -> &'static str {
    tables::UNICODE_VERSION
}
