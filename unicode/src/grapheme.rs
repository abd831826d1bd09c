//! Grapheme cluster boundaries (UAX #29) and the cluster-aware text
//! operations built on top of them.

use crate::iterator::TextIterator;
use crate::tables::{grapheme_category, GraphemeCat};

const CR: u64 = GraphemeCat::CR.bits();
const LF: u64 = GraphemeCat::LF.bits();
const CONTROL: u64 = GraphemeCat::CONTROL.bits();
const EXTEND: u64 = GraphemeCat::EXTEND.bits();
const ZWJ: u64 = GraphemeCat::ZWJ.bits();
const RI: u64 = GraphemeCat::RI.bits();
const PREPEND: u64 = GraphemeCat::PREPEND.bits();
const SPACING_MARK: u64 = GraphemeCat::SPACING_MARK.bits();
const L: u64 = GraphemeCat::HANGUL_L.bits();
const V: u64 = GraphemeCat::HANGUL_V.bits();
const T: u64 = GraphemeCat::HANGUL_T.bits();
const LV: u64 = GraphemeCat::HANGUL_LV.bits();
const LVT: u64 = GraphemeCat::HANGUL_LVT.bits();
const PICT: u64 = GraphemeCat::EXT_PICT.bits();

/// Smallest byte index greater than `offset` at which a grapheme-cluster
/// break occurs; `text.len()` past the last character.
pub fn grapheme_next_break(text: &str, offset: usize) -> usize {
    let len = text.len();
    if offset >= len {
        return len;
    }
    let mut it = TextIterator::new(text, offset, grapheme_category);
    it.advance();

    let mut ri_run = usize::from(it.curchar & RI != 0);
    let mut pict_base = it.curchar & PICT != 0;

    loop {
        if it.lookahead == 0 {
            return len; // GB2
        }
        let cur = it.curchar;
        let la = it.lookahead;

        let brk = if cur & CR != 0 && la & LF != 0 {
            false // GB3
        } else if cur & (CONTROL | CR | LF) != 0 {
            true // GB4
        } else if la & (CONTROL | CR | LF) != 0 {
            true // GB5
        } else if cur & L != 0 && la & (L | V | LV | LVT) != 0 {
            false // GB6
        } else if cur & (LV | V) != 0 && la & (V | T) != 0 {
            false // GB7
        } else if cur & (LVT | T) != 0 && la & T != 0 {
            false // GB8
        } else if la & (EXTEND | ZWJ) != 0 {
            false // GB9
        } else if la & SPACING_MARK != 0 {
            false // GB9a
        } else if cur & PREPEND != 0 {
            false // GB9b
        } else if cur & ZWJ != 0 && la & PICT != 0 && pict_base {
            false // GB11
        } else if cur & RI != 0 && la & RI != 0 && ri_run % 2 == 1 {
            false // GB12, GB13
        } else {
            true // GB999
        };

        if brk {
            return it.pos;
        }
        it.advance();

        let c = it.curchar;
        ri_run = if c & RI != 0 { ri_run + 1 } else { 0 };
        if c & PICT != 0 {
            pict_base = true;
        } else if c & (EXTEND | ZWJ) == 0 {
            pict_base = false;
        }
    }
}

/// Iterator over the cluster boundaries of `text[offset..]`, ending with
/// `text.len()`.
pub fn grapheme_offsets(text: &str, offset: usize) -> impl Iterator<Item = usize> + '_ {
    let mut pos = offset;
    std::iter::from_fn(move || {
        if pos >= text.len() {
            return None;
        }
        pos = grapheme_next_break(text, pos);
        Some(pos)
    })
}

/// Number of grapheme clusters from `offset` to the end of the text.
pub fn grapheme_length(text: &str, offset: usize) -> usize {
    grapheme_offsets(text, offset).count()
}

/// True when `offset` starts a cluster (or is the end of the text). Cluster
/// rules carry left context (regional-indicator parity, emoji bases), so the
/// walk starts from the beginning of the text.
pub fn is_grapheme_boundary(text: &str, offset: usize) -> bool {
    if offset == 0 || offset == text.len() {
        return true;
    }
    if !text.is_char_boundary(offset) {
        return false;
    }
    let mut pos = 0;
    while pos < offset {
        pos = grapheme_next_break(text, pos);
    }
    pos == offset
}

/// True when `text` begins with `prefix` and the match ends on a cluster
/// boundary.
pub fn grapheme_startswith(text: &str, prefix: &str) -> bool {
    text.starts_with(prefix) && is_grapheme_boundary(text, prefix.len())
}

/// True when `text` ends with `suffix` and the match starts on a cluster
/// boundary.
pub fn grapheme_endswith(text: &str, suffix: &str) -> bool {
    text.ends_with(suffix) && is_grapheme_boundary(text, text.len() - suffix.len())
}

/// Byte-literal search accepted only when the match starts and ends on
/// cluster boundaries. Empty needle with `start == 0` matches at 0.
pub fn grapheme_find(text: &str, needle: &str, start: usize, end: usize) -> Option<usize> {
    let end = end.min(text.len());
    if needle.is_empty() {
        return if start == 0 { Some(0) } else { None };
    }
    if start > end || !text.is_char_boundary(start) || !text.is_char_boundary(end) {
        return None;
    }
    let mut from = start;
    while let Some(found) = text[from..end].find(needle) {
        let at = from + found;
        if at + needle.len() <= end
            && is_grapheme_boundary(text, at)
            && is_grapheme_boundary(text, at + needle.len())
        {
            return Some(at);
        }
        from = match text[at..].chars().next() {
            Some(c) => at + c.len_utf8(),
            None => return None,
        };
    }
    None
}

/// Cluster-indexed substring. Negative indices count from the end; range
/// semantics follow host slice conventions (out-of-range indices clamp,
/// an empty or inverted range yields "").
pub fn grapheme_substr(text: &str, start: isize, stop: isize) -> &str {
    let mut boundaries = vec![0];
    boundaries.extend(grapheme_offsets(text, 0));
    let count = boundaries.len() - 1;

    let resolve = |index: isize| -> usize {
        if index < 0 {
            count.saturating_sub(index.unsigned_abs())
        } else {
            (index as usize).min(count)
        }
    };

    let from = resolve(start);
    let to = resolve(stop);
    if from >= to {
        return "";
    }
    &text[boundaries[from]..boundaries[to]]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_breaks() {
        assert_eq!(grapheme_next_break("abc", 0), 1);
        assert_eq!(grapheme_next_break("abc", 1), 2);
        assert_eq!(grapheme_next_break("abc", 2), 3);
        assert_eq!(grapheme_next_break("abc", 3), 3);
    }

    #[test]
    fn test_combining_marks_attach() {
        // e + two combining acutes is one cluster
        let text = "e\u{301}\u{301}f";
        assert_eq!(grapheme_next_break(text, 0), 5);
        assert_eq!(grapheme_length(text, 0), 2);
    }

    #[test]
    fn test_crlf_is_one_cluster() {
        assert_eq!(grapheme_next_break("\r\nx", 0), 2);
        assert_eq!(grapheme_length("a\r\nb", 0), 3);
    }

    #[test]
    fn test_hangul_syllable_composition() {
        // L + V + T jamo form one cluster
        let text = "\u{1100}\u{1161}\u{11a8}";
        assert_eq!(grapheme_next_break(text, 0), text.len());
        assert_eq!(grapheme_length(text, 0), 1);
    }

    #[test]
    fn test_emoji_zwj_sequence() {
        // family: man ZWJ woman ZWJ girl
        let text = "\u{1f468}\u{200d}\u{1f469}\u{200d}\u{1f467}";
        assert_eq!(grapheme_length(text, 0), 1);

        // skin tone modifier attaches
        let text = "\u{1f44d}\u{1f3fb}x";
        assert_eq!(grapheme_next_break(text, 0), 8);
    }

    #[test]
    fn test_regional_indicator_pairs() {
        // two flags: RI RI | RI RI
        let text = "\u{1f1fa}\u{1f1f8}\u{1f1eb}\u{1f1f7}";
        assert_eq!(grapheme_length(text, 0), 2);
        assert_eq!(grapheme_next_break(text, 0), 8);
    }

    #[test]
    fn test_grapheme_substr() {
        let text = "e\u{301}\u{301}f";
        assert_eq!(grapheme_substr(text, 0, 1), "e\u{301}\u{301}");
        assert_eq!(grapheme_substr(text, 1, 2), "f");
        assert_eq!(grapheme_substr(text, -1, 2), "f");
        assert_eq!(grapheme_substr(text, -2, -1), "e\u{301}\u{301}");
        assert_eq!(grapheme_substr(text, 1, 1), "");
        assert_eq!(grapheme_substr(text, 0, 99), text);
    }

    #[test]
    fn test_startswith_endswith() {
        let text = "e\u{301}f";
        assert!(grapheme_startswith(text, "e\u{301}"));
        assert!(!grapheme_startswith(text, "e"));
        assert!(grapheme_endswith(text, "f"));
        assert!(!grapheme_endswith("ae\u{301}", "\u{301}"));
        assert!(grapheme_startswith("abc", ""));
    }

    #[test]
    fn test_grapheme_find_respects_boundaries() {
        let text = "xe\u{301}y";
        // "e" alone straddles the cluster "e\u{301}"
        assert_eq!(grapheme_find(text, "e", 0, text.len()), None);
        assert_eq!(grapheme_find(text, "e\u{301}", 0, text.len()), Some(1));
        assert_eq!(grapheme_find(text, "y", 0, text.len()), Some(4));
        assert_eq!(grapheme_find("abcabc", "bc", 2, 6), Some(4));
        assert_eq!(grapheme_find("abc", "", 0, 3), Some(0));
        assert_eq!(grapheme_find("abc", "", 1, 3), None);
    }
}
