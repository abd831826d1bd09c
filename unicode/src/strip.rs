//! Lossy normalization for loose comparison: accents removed, punctuation
//! and symbols dropped, letters and digits kept.

/// Multi-code-point replacements, packed three 21-bit code points to a
/// 64-bit word with zero as terminator.
#[rustfmt::skip]
static STRIP_MULTI: &[(u32, u64)] = &[
    (0x00c6, pack2('A', 'E')),
    (0x00de, pack2('T', 'H')),
    (0x00df, pack2('s', 's')),
    (0x00e6, pack2('a', 'e')),
    (0x00fe, pack2('t', 'h')),
    (0x0132, pack2('I', 'J')),
    (0x0133, pack2('i', 'j')),
    (0x0152, pack2('O', 'E')),
    (0x0153, pack2('o', 'e')),
    (0x01c4, pack2('D', 'Z')),
    (0x01c6, pack2('d', 'z')),
    (0x01f1, pack2('D', 'Z')),
    (0x01f3, pack2('d', 'z')),
    (0xfb00, pack2('f', 'f')),
    (0xfb01, pack2('f', 'i')),
    (0xfb02, pack2('f', 'l')),
    (0xfb03, pack3('f', 'f', 'i')),
    (0xfb04, pack3('f', 'f', 'l')),
    (0xfb05, pack2('s', 't')),
    (0xfb06, pack2('s', 't')),
];

const fn pack2(a: char, b: char) -> u64 {
    (a as u64) | ((b as u64) << 21)
}

const fn pack3(a: char, b: char, c: char) -> u64 {
    (a as u64) | ((b as u64) << 21) | ((c as u64) << 42)
}

fn unpack(word: u64, out: &mut String) {
    let mut rest = word;
    while rest != 0 {
        let cp = (rest & 0x1f_ffff) as u32;
        if let Some(c) = char::from_u32(cp) {
            out.push(c);
        }
        rest >>= 21;
    }
}

/// Accented Latin letters to their bases. Ranges alternate case with the
/// parity of the start.
#[rustfmt::skip]
static BASE_RANGES: &[(u32, u32, char, char)] = &[
    (0x00c0, 0x00c5, 'A', 'A'),
    (0x00c7, 0x00c7, 'C', 'C'),
    (0x00c8, 0x00cb, 'E', 'E'),
    (0x00cc, 0x00cf, 'I', 'I'),
    (0x00d0, 0x00d0, 'D', 'D'),
    (0x00d1, 0x00d1, 'N', 'N'),
    (0x00d2, 0x00d6, 'O', 'O'),
    (0x00d8, 0x00d8, 'O', 'O'),
    (0x00d9, 0x00dc, 'U', 'U'),
    (0x00dd, 0x00dd, 'Y', 'Y'),
    (0x00e0, 0x00e5, 'a', 'a'),
    (0x00e7, 0x00e7, 'c', 'c'),
    (0x00e8, 0x00eb, 'e', 'e'),
    (0x00ec, 0x00ef, 'i', 'i'),
    (0x00f0, 0x00f0, 'd', 'd'),
    (0x00f1, 0x00f1, 'n', 'n'),
    (0x00f2, 0x00f6, 'o', 'o'),
    (0x00f8, 0x00f8, 'o', 'o'),
    (0x00f9, 0x00fc, 'u', 'u'),
    (0x00fd, 0x00fd, 'y', 'y'),
    (0x00ff, 0x00ff, 'y', 'y'),
    (0x0100, 0x0105, 'A', 'a'),
    (0x0106, 0x010d, 'C', 'c'),
    (0x010e, 0x0111, 'D', 'd'),
    (0x0112, 0x011b, 'E', 'e'),
    (0x011c, 0x0123, 'G', 'g'),
    (0x0124, 0x0127, 'H', 'h'),
    (0x0128, 0x0131, 'I', 'i'),
    (0x0134, 0x0135, 'J', 'j'),
    (0x0136, 0x0137, 'K', 'k'),
    (0x0139, 0x0142, 'L', 'l'),
    (0x0143, 0x0148, 'N', 'n'),
    (0x014c, 0x0151, 'O', 'o'),
    (0x0154, 0x0159, 'R', 'r'),
    (0x015a, 0x0161, 'S', 's'),
    (0x0162, 0x0167, 'T', 't'),
    (0x0168, 0x0173, 'U', 'u'),
    (0x0174, 0x0175, 'W', 'w'),
    (0x0176, 0x0176, 'Y', 'Y'),
    (0x0177, 0x0177, 'y', 'y'),
    (0x0178, 0x0178, 'Y', 'Y'),
    (0x0179, 0x017e, 'Z', 'z'),
    (0x017f, 0x017f, 's', 's'),
    (0x01cd, 0x01d4, 'A', 'a'),
    (0x01e6, 0x01e7, 'G', 'g'),
    (0x01e8, 0x01e9, 'K', 'k'),
    (0x0200, 0x0203, 'A', 'a'),
    (0x0204, 0x0207, 'E', 'e'),
    (0x0208, 0x020b, 'I', 'i'),
    (0x020c, 0x020f, 'O', 'o'),
    (0x0210, 0x0213, 'R', 'r'),
    (0x0214, 0x0217, 'U', 'u'),
    (0x1e00, 0x1e01, 'A', 'a'),
    (0x1e02, 0x1e07, 'B', 'b'),
    (0x1e0a, 0x1e13, 'D', 'd'),
    (0x1e14, 0x1e1d, 'E', 'e'),
    (0x1ea0, 0x1eb7, 'A', 'a'),
    (0x1eb8, 0x1ec7, 'E', 'e'),
    (0x1ec8, 0x1ecb, 'I', 'i'),
    (0x1ecc, 0x1ee3, 'O', 'o'),
    (0x1ee4, 0x1ef1, 'U', 'u'),
    (0x1ef2, 0x1ef9, 'Y', 'y'),
];

enum Strip {
    Keep,
    Drop,
    Base(char),
    Multi(u64),
}

fn classify(c: char) -> Strip {
    let cp = c as u32;

    if let Ok(i) = STRIP_MULTI.binary_search_by_key(&cp, |&(k, _)| k) {
        return Strip::Multi(STRIP_MULTI[i].1);
    }

    let found = BASE_RANGES.binary_search_by(|&(start, end, _, _)| {
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
        let (start, _, even, odd) = BASE_RANGES[i];
        return Strip::Base(if (cp - start) % 2 == 0 { even } else { odd });
    }

    if c.is_whitespace() {
        return Strip::Keep;
    }
    if c.is_alphanumeric() {
        return Strip::Keep;
    }
    // combining marks, punctuation, symbols, controls
    Strip::Drop
}

/// Strip accents, punctuation and selected marks for loose matching.
pub fn strip(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match classify(c) {
            Strip::Keep => out.push(c),
            Strip::Drop => {}
            Strip::Base(b) => out.push(b),
            Strip::Multi(word) => unpack(word, &mut out),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_text_unchanged() {
        assert_eq!(strip("hello world 123"), "hello world 123");
    }

    #[test]
    fn test_accents_removed() {
        assert_eq!(strip("café"), "cafe");
        assert_eq!(strip("naïve"), "naive");
        assert_eq!(strip("Ångström"), "Angstrom");
    }

    #[test]
    fn test_combining_marks_dropped() {
        assert_eq!(strip("e\u{301}"), "e");
    }

    #[test]
    fn test_punctuation_dropped() {
        assert_eq!(strip("it's done."), "its done");
        assert_eq!(strip("a-b_c"), "abc");
    }

    #[test]
    fn test_multi_replacements() {
        assert_eq!(strip("Æon"), "AEon");
        assert_eq!(strip("œuvre"), "oeuvre");
        assert_eq!(strip("straße"), "strasse");
        assert_eq!(strip("diﬃcult"), "difficult");
    }

    #[test]
    fn test_packing_round_trip() {
        let mut out = String::new();
        unpack(pack3('x', 'y', 'z'), &mut out);
        assert_eq!(out, "xyz");
    }

    #[test]
    fn test_tables_sorted() {
        for pair in STRIP_MULTI.windows(2) {
            assert!(pair[0].0 < pair[1].0);
        }
        for pair in BASE_RANGES.windows(2) {
            assert!(pair[0].1 < pair[1].0);
        }
    }
}
