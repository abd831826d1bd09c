//! Case folding for caseless comparison.

use std::borrow::Cow;

/// Simple folds expressed as ranges. `every == 1` folds each code point in
/// the range, `every == 2` only those sharing the start's parity (the
/// Latin Extended upper/lower alternation).
#[rustfmt::skip]
static FOLD_RANGES: &[(u32, u32, i32, u32)] = &[
    (0x0041, 0x005a, 32, 1),
    (0x00c0, 0x00d6, 32, 1),
    (0x00d8, 0x00de, 32, 1),
    (0x0100, 0x012e, 1, 2),
    (0x0132, 0x0136, 1, 2),
    (0x0139, 0x0147, 1, 2),
    (0x014a, 0x0176, 1, 2),
    (0x0178, 0x0178, -121, 1),
    (0x0179, 0x017d, 1, 2),
    (0x017f, 0x017f, -268, 1),
    (0x0182, 0x0184, 1, 2),
    (0x0187, 0x0187, 1, 1),
    (0x018b, 0x018b, 1, 1),
    (0x0191, 0x0191, 1, 1),
    (0x0198, 0x0198, 1, 1),
    (0x01a0, 0x01a4, 1, 2),
    (0x01a7, 0x01a7, 1, 1),
    (0x01ac, 0x01ac, 1, 1),
    (0x01af, 0x01af, 1, 1),
    (0x01b3, 0x01b5, 1, 2),
    (0x01b8, 0x01b8, 1, 1),
    (0x01bc, 0x01bc, 1, 1),
    (0x01c4, 0x01c4, 2, 1),
    (0x01c5, 0x01c5, 1, 1),
    (0x01c7, 0x01c7, 2, 1),
    (0x01c8, 0x01c8, 1, 1),
    (0x01ca, 0x01ca, 2, 1),
    (0x01cb, 0x01cb, 1, 1),
    (0x01cd, 0x01db, 1, 2),
    (0x01de, 0x01ee, 1, 2),
    (0x01f1, 0x01f1, 2, 1),
    (0x01f2, 0x01f2, 1, 1),
    (0x01f4, 0x01f4, 1, 1),
    (0x01f8, 0x021e, 1, 2),
    (0x0222, 0x0232, 1, 2),
    (0x0386, 0x0386, 38, 1),
    (0x0388, 0x038a, 37, 1),
    (0x038c, 0x038c, 64, 1),
    (0x038e, 0x038f, 63, 1),
    (0x0391, 0x03a1, 32, 1),
    (0x03a3, 0x03ab, 32, 1),
    (0x03c2, 0x03c2, 1, 1),
    (0x03d8, 0x03ee, 1, 2),
    (0x0400, 0x040f, 80, 1),
    (0x0410, 0x042f, 32, 1),
    (0x0460, 0x0480, 1, 2),
    (0x048a, 0x04be, 1, 2),
    (0x04c1, 0x04cd, 1, 2),
    (0x04d0, 0x052e, 1, 2),
    (0x0531, 0x0556, 48, 1),
    (0x10a0, 0x10c5, 7264, 1),
    (0x13f8, 0x13fd, -8, 1),
    (0x1e00, 0x1e94, 1, 2),
    (0x1ea0, 0x1efe, 1, 2),
    (0x1f08, 0x1f0f, -8, 1),
    (0x1f18, 0x1f1d, -8, 1),
    (0x1f28, 0x1f2f, -8, 1),
    (0x1f38, 0x1f3f, -8, 1),
    (0x1f48, 0x1f4d, -8, 1),
    (0x1f68, 0x1f6f, -8, 1),
    (0x1fb8, 0x1fb9, -8, 1),
    (0x1fba, 0x1fbb, -74, 1),
    (0x1fc8, 0x1fcb, -86, 1),
    (0x1fd8, 0x1fd9, -8, 1),
    (0x1fda, 0x1fdb, -100, 1),
    (0x1fe8, 0x1fe9, -8, 1),
    (0x1fea, 0x1feb, -112, 1),
    (0x1fec, 0x1fec, -7, 1),
    (0x1ff8, 0x1ff9, -128, 1),
    (0x1ffa, 0x1ffb, -126, 1),
    (0x2126, 0x2126, -7517, 1),
    (0x212a, 0x212a, -8383, 1),
    (0x212b, 0x212b, -8262, 1),
    (0x2160, 0x216f, 16, 1),
    (0x24b6, 0x24cf, 26, 1),
    (0x2c00, 0x2c2f, 48, 1),
    (0x2c60, 0x2c60, 1, 1),
    (0x2c67, 0x2c6b, 1, 2),
    (0x2c80, 0x2ce2, 1, 2),
    (0xa640, 0xa66c, 1, 2),
    (0xa680, 0xa69a, 1, 2),
    (0xa722, 0xa72e, 1, 2),
    (0xa732, 0xa76e, 1, 2),
    (0xa779, 0xa77b, 1, 2),
    (0xa77e, 0xa786, 1, 2),
    (0xff21, 0xff3a, 32, 1),
    (0x10400, 0x10427, 40, 1),
    (0x104b0, 0x104d3, 40, 1),
    (0x10c80, 0x10cb2, 64, 1),
    (0x118a0, 0x118bf, 32, 1),
    (0x16e40, 0x16e5f, 32, 1),
    (0x1e900, 0x1e921, 34, 1),
];

/// Folds expanding to more than one code point.
#[rustfmt::skip]
static FOLD_MULTI: &[(u32, &str)] = &[
    (0x00df, "ss"),
    (0x0130, "i\u{307}"),
    (0x0149, "\u{2bc}n"),
    (0x01f0, "j\u{30c}"),
    (0x0390, "\u{3b9}\u{308}\u{301}"),
    (0x03b0, "\u{3c5}\u{308}\u{301}"),
    (0x0587, "\u{565}\u{582}"),
    (0x1e96, "h\u{331}"),
    (0x1e97, "t\u{308}"),
    (0x1e98, "w\u{30a}"),
    (0x1e99, "y\u{30a}"),
    (0x1e9a, "a\u{2be}"),
    (0x1e9e, "ss"),
    (0x1f50, "\u{3c5}\u{313}"),
    (0xfb00, "ff"),
    (0xfb01, "fi"),
    (0xfb02, "fl"),
    (0xfb03, "ffi"),
    (0xfb04, "ffl"),
    (0xfb05, "st"),
    (0xfb06, "st"),
    (0xfb13, "\u{574}\u{576}"),
    (0xfb14, "\u{574}\u{565}"),
    (0xfb15, "\u{574}\u{56b}"),
    (0xfb16, "\u{57e}\u{576}"),
    (0xfb17, "\u{574}\u{56d}"),
];

enum Folded {
    Same,
    Char(char),
    Str(&'static str),
}

fn fold_char(c: char) -> Folded {
    let cp = c as u32;
    if let Ok(i) = FOLD_MULTI.binary_search_by_key(&cp, |&(k, _)| k) {
        return Folded::Str(FOLD_MULTI[i].1);
    }
    let found = FOLD_RANGES.binary_search_by(|&(start, end, _, _)| {
        use std::cmp::Ordering;
        if end < cp {
            Ordering::Less
        } else if start > cp {
            Ordering::Greater
        } else {
            Ordering::Equal
        }
    });
    if let Ok(i) = found {
        let (start, _, delta, every) = FOLD_RANGES[i];
        if every == 1 || (cp - start) % 2 == 0 {
            let folded = (cp as i32 + delta) as u32;
            return Folded::Char(char::from_u32(folded).unwrap_or(c));
        }
    }
    Folded::Same
}

/// Case fold in two passes: the first detects whether anything changes at
/// all (and sizes the output), the second writes it. Unchanged input is
/// returned borrowed.
pub fn casefold(text: &str) -> Cow<'_, str> {
    if text.is_ascii() {
        if !text.bytes().any(|b| b.is_ascii_uppercase()) {
            return Cow::Borrowed(text);
        }
        // A-Z fold by adding 32
        return Cow::Owned(
            text.bytes()
                .map(|b| (if b.is_ascii_uppercase() { b + 32 } else { b }) as char)
                .collect(),
        );
    }

    let mut changed = false;
    let mut out_len = 0;
    for c in text.chars() {
        match fold_char(c) {
            Folded::Same => out_len += c.len_utf8(),
            Folded::Char(f) => {
                changed = true;
                out_len += f.len_utf8();
            }
            Folded::Str(s) => {
                changed = true;
                out_len += s.len();
            }
        }
    }
    if !changed {
        return Cow::Borrowed(text);
    }

    let mut out = String::with_capacity(out_len);
    for c in text.chars() {
        match fold_char(c) {
            Folded::Same => out.push(c),
            Folded::Char(f) => out.push(f),
            Folded::Str(s) => out.push_str(s),
        }
    }
    Cow::Owned(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fast_path() {
        assert!(matches!(casefold("already lower"), Cow::Borrowed(_)));
        assert_eq!(casefold("Hello World"), "hello world");
        assert_eq!(casefold("ABC123"), "abc123");
    }

    #[test]
    fn test_latin1() {
        assert_eq!(casefold("Àéÿ"), "àéÿ");
        assert_eq!(casefold("Straße"), "strasse");
    }

    #[test]
    fn test_unchanged_non_ascii_borrows() {
        assert!(matches!(casefold("déjà vu"), Cow::Borrowed(_)));
    }

    #[test]
    fn test_expanding_folds() {
        assert_eq!(casefold("ﬁle"), "file");
        assert_eq!(casefold("ŉ"), "\u{2bc}n");
    }

    #[test]
    fn test_greek_and_cyrillic() {
        assert_eq!(casefold("ΑΒΓ"), "αβγ");
        assert_eq!(casefold("ΠΡΟΣ"), "προσ");
        // final sigma folds to sigma
        assert_eq!(casefold("ς"), "σ");
        assert_eq!(casefold("МОСКВА"), "москва");
    }

    #[test]
    fn test_fullwidth() {
        assert_eq!(casefold("ＡＢ"), "ａｂ");
    }

    #[test]
    fn test_multi_tables_sorted() {
        for pair in FOLD_MULTI.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        for pair in FOLD_RANGES.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }
}
