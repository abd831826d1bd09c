//! Terminal column widths.

use crate::tables::{grapheme_category, GraphemeCat};

#[rustfmt::skip]
static WIDE_RANGES: &[(u32, u32)] = &[
    (0x1100, 0x115f),
    (0x231a, 0x231b),
    (0x2329, 0x232a),
    (0x23e9, 0x23ec),
    (0x23f0, 0x23f0),
    (0x23f3, 0x23f3),
    (0x25fd, 0x25fe),
    (0x2614, 0x2615),
    (0x2648, 0x2653),
    (0x267f, 0x267f),
    (0x2693, 0x2693),
    (0x26a1, 0x26a1),
    (0x26aa, 0x26ab),
    (0x26bd, 0x26be),
    (0x26c4, 0x26c5),
    (0x26ce, 0x26ce),
    (0x26d4, 0x26d4),
    (0x26ea, 0x26ea),
    (0x26f2, 0x26f3),
    (0x26f5, 0x26f5),
    (0x26fa, 0x26fa),
    (0x26fd, 0x26fd),
    (0x2705, 0x2705),
    (0x270a, 0x270b),
    (0x2728, 0x2728),
    (0x274c, 0x274c),
    (0x274e, 0x274e),
    (0x2753, 0x2755),
    (0x2757, 0x2757),
    (0x2795, 0x2797),
    (0x27b0, 0x27b0),
    (0x27bf, 0x27bf),
    (0x2b1b, 0x2b1c),
    (0x2b50, 0x2b50),
    (0x2b55, 0x2b55),
    (0x2e80, 0x303e),
    (0x3041, 0x33ff),
    (0x3400, 0x4dbf),
    (0x4e00, 0x9fff),
    (0xa000, 0xa4cf),
    (0xa960, 0xa97f),
    (0xac00, 0xd7a3),
    (0xf900, 0xfaff),
    (0xfe10, 0xfe19),
    (0xfe30, 0xfe52),
    (0xfe54, 0xfe66),
    (0xfe68, 0xfe6b),
    (0xff00, 0xff60),
    (0xffe0, 0xffe6),
    (0x1f004, 0x1f004),
    (0x1f0cf, 0x1f0cf),
    (0x1f18e, 0x1f18e),
    (0x1f191, 0x1f19a),
    (0x1f200, 0x1f2ff),
    (0x1f300, 0x1f64f),
    (0x1f680, 0x1f6ff),
    (0x1f900, 0x1f9ff),
    (0x1fa00, 0x1faff),
    (0x20000, 0x2fffd),
    (0x30000, 0x3fffd),
];

fn is_wide(cp: u32) -> bool {
    WIDE_RANGES
        .binary_search_by(|&(start, end)| {
            use std::cmp::Ordering;
            if end < cp {
                Ordering::Less
            } else if start > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .is_ok()
}

fn is_invalid(c: char) -> bool {
    let cp = c as u32;
    // controls and noncharacters have no column representation
    (cp < 0x20 && c != '\t')
        || (0x7f..=0x9f).contains(&cp)
        || (0xfdd0..=0xfdef).contains(&cp)
        || (cp & 0xfffe) == 0xfffe
}

/// Width of one code point: 0, 1 or 2 columns, -1 when it has none.
pub fn char_width(c: char) -> i32 {
    if is_invalid(c) {
        return -1;
    }
    let gc = grapheme_category(c);
    if gc & (GraphemeCat::EXTEND.bits() | GraphemeCat::ZWJ.bits() | GraphemeCat::CONTROL.bits())
        != 0
    {
        return 0;
    }
    if is_wide(c as u32) {
        2
    } else {
        1
    }
}

/// Running column width of `text[offset..]`, or -1 when any code point is
/// unrepresentable. A ZWJ gluing an Extended_Pictographic onto the preceding
/// cluster collapses the pair's contribution to zero.
pub fn text_width(text: &str, offset: usize) -> i32 {
    let mut width = 0i32;
    let mut chars = text[offset..].chars().peekable();
    while let Some(c) = chars.next() {
        if c == '\u{200d}' {
            if let Some(&next) = chars.peek() {
                if grapheme_category(next) & GraphemeCat::EXT_PICT.bits() != 0 {
                    chars.next();
                    continue;
                }
            }
            continue;
        }
        let w = char_width(c);
        if w < 0 {
            return -1;
        }
        width += w;
    }
    width
}
