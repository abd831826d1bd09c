//! Word boundaries (UAX #29).

use crate::iterator::TextIterator;
use crate::tables::{word_category, WordCat};

const CR: u64 = WordCat::CR.bits();
const LF: u64 = WordCat::LF.bits();
const NEWLINE: u64 = WordCat::NEWLINE.bits();
const EXTEND: u64 = WordCat::EXTEND.bits();
const ZWJ: u64 = WordCat::ZWJ.bits();
const RI: u64 = WordCat::RI.bits();
const FORMAT: u64 = WordCat::FORMAT.bits();
const KATAKANA: u64 = WordCat::KATAKANA.bits();
const HEBREW: u64 = WordCat::HEBREW_LETTER.bits();
const ALETTER: u64 = WordCat::ALETTER.bits();
const SQ: u64 = WordCat::SINGLE_QUOTE.bits();
const DQ: u64 = WordCat::DOUBLE_QUOTE.bits();
const MID_NUM_LET: u64 = WordCat::MID_NUM_LET.bits();
const MID_LETTER: u64 = WordCat::MID_LETTER.bits();
const MID_NUM: u64 = WordCat::MID_NUM.bits();
const NUMERIC: u64 = WordCat::NUMERIC.bits();
const EXT_NUM_LET: u64 = WordCat::EXTEND_NUM_LET.bits();
const WSEG: u64 = WordCat::WSEG_SPACE.bits();
const PICT: u64 = WordCat::EXT_PICT.bits();

const AHLETTER: u64 = ALETTER | HEBREW;
const SEPARATORS: u64 = NEWLINE | CR | LF;

/// WB4: attach Extend, Format and ZWJ to what precedes them. A ZWJ whose
/// follower is Extended_Pictographic is left in place for WB3c.
fn absorb_extenders(it: &mut TextIterator) {
    loop {
        if it.lookahead & (EXTEND | FORMAT) != 0 {
            it.advance_keep_current();
        } else if it.lookahead & ZWJ != 0 {
            it.begin();
            it.advance_keep_current();
            if it.lookahead & PICT != 0 {
                it.rollback();
                return;
            }
            it.commit();
        } else {
            return;
        }
    }
}

/// Smallest byte index greater than `offset` at which a word break occurs.
pub fn word_next_break(text: &str, offset: usize) -> usize {
    let len = text.len();
    if offset >= len {
        return len;
    }
    let mut it = TextIterator::new(text, offset, word_category);
    it.advance();

    let mut ri_run = usize::from(it.curchar & RI != 0);

    loop {
        if it.curchar & SEPARATORS == 0 {
            absorb_extenders(&mut it);
        }
        if it.lookahead == 0 {
            return len; // WB2
        }
        let cur = it.curchar;
        let la = it.lookahead;

        // WB3
        if cur & CR != 0 && la & LF != 0 {
            it.advance();
            continue;
        }
        // WB3a, WB3b
        if cur & SEPARATORS != 0 || la & SEPARATORS != 0 {
            return it.pos;
        }
        // WB3c
        if cur & ZWJ != 0 && la & PICT != 0 {
            it.advance();
            continue;
        }
        // WB3d
        if cur & WSEG != 0 && la & WSEG != 0 {
            it.advance();
            continue;
        }
        // WB4 leftovers: a break never lands before an extender
        if la & (EXTEND | FORMAT | ZWJ) != 0 {
            it.advance();
            continue;
        }
        // WB5
        if cur & AHLETTER != 0 && la & AHLETTER != 0 {
            it.advance();
            continue;
        }
        // WB6 / WB7: letter (MidLetter|MidNumLet|SQ) letter
        if cur & AHLETTER != 0 && la & (MID_LETTER | MID_NUM_LET | SQ) != 0 {
            it.begin();
            it.advance();
            absorb_extenders(&mut it);
            if it.lookahead & AHLETTER != 0 {
                it.commit();
                it.advance();
                ri_run = 0;
                continue;
            }
            it.rollback();
        }
        // WB7a
        if cur & HEBREW != 0 && la & SQ != 0 {
            it.advance();
            ri_run = 0;
            continue;
        }
        // WB7b / WB7c: hebrew DQ hebrew
        if cur & HEBREW != 0 && la & DQ != 0 {
            it.begin();
            it.advance();
            absorb_extenders(&mut it);
            if it.lookahead & HEBREW != 0 {
                it.commit();
                it.advance();
                ri_run = 0;
                continue;
            }
            it.rollback();
        }
        // WB8, WB9, WB10
        if (cur & NUMERIC != 0 && la & NUMERIC != 0)
            || (cur & AHLETTER != 0 && la & NUMERIC != 0)
            || (cur & NUMERIC != 0 && la & AHLETTER != 0)
        {
            it.advance();
            continue;
        }
        // WB11 / WB12: numeric (MidNum|MidNumLet|SQ) numeric
        if cur & NUMERIC != 0 && la & (MID_NUM | MID_NUM_LET | SQ) != 0 {
            it.begin();
            it.advance();
            absorb_extenders(&mut it);
            if it.lookahead & NUMERIC != 0 {
                it.commit();
                it.advance();
                ri_run = 0;
                continue;
            }
            it.rollback();
        }
        // WB13
        if cur & KATAKANA != 0 && la & KATAKANA != 0 {
            it.advance();
            continue;
        }
        // WB13a, WB13b
        if (cur & (AHLETTER | NUMERIC | KATAKANA | EXT_NUM_LET) != 0 && la & EXT_NUM_LET != 0)
            || (cur & EXT_NUM_LET != 0 && la & (AHLETTER | NUMERIC | KATAKANA) != 0)
        {
            it.advance();
            continue;
        }
        // WB15, WB16
        if cur & RI != 0 && la & RI != 0 && ri_run % 2 == 1 {
            it.advance();
            ri_run += 1;
            continue;
        }

        return it.pos; // WB999
    }
    // unreachable; loop exits by return
}

/// Iterator over the word boundaries of `text[offset..]`, ending with
/// `text.len()`.
pub fn word_offsets(text: &str, offset: usize) -> impl Iterator<Item = usize> + '_ {
    let mut pos = offset;
    std::iter::from_fn(move || {
        if pos >= text.len() {
            return None;
        }
        pos = word_next_break(text, pos);
        Some(pos)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn breaks(text: &str) -> Vec<usize> {
        let mut out = Vec::new();
        let mut pos = 0;
        while pos < text.len() {
            pos = word_next_break(text, pos);
            out.push(pos);
        }
        out
    }

    #[test]
    fn test_simple_words() {
        assert_eq!(breaks("ab cd"), vec![2, 3, 5]);
        assert_eq!(word_next_break("hello", 0), 5);
    }

    #[test]
    fn test_interior_punctuation_joins() {
        // apostrophe between letters does not split
        assert_eq!(word_next_break("can't stop", 0), 5);
        // colon between letters (MidLetter)
        assert_eq!(word_next_break("a:b", 0), 3);
        // but a trailing apostrophe does
        assert_eq!(word_next_break("cant' ", 0), 4);
    }

    #[test]
    fn test_numbers_join_through_separators() {
        assert_eq!(word_next_break("1,234.56", 0), 8);
        assert_eq!(word_next_break("1,x", 0), 1);
        assert_eq!(word_next_break("3.14 x", 0), 4);
    }

    #[test]
    fn test_letters_and_digits_mix() {
        assert_eq!(word_next_break("abc123", 0), 6);
        assert_eq!(word_next_break("a_1", 0), 3);
    }

    #[test]
    fn test_newlines_break() {
        assert_eq!(breaks("a\nb"), vec![1, 2, 3]);
        assert_eq!(breaks("a\r\nb"), vec![1, 3, 4]);
    }

    #[test]
    fn test_extender_absorption() {
        // combining mark does not split the word
        assert_eq!(word_next_break("e\u{301}f", 0), 4);
        // format char inside a word is invisible
        assert_eq!(word_next_break("ab\u{00ad}cd", 0), 6);
    }

    #[test]
    fn test_zwj_pictographic_continues() {
        let text = "\u{1f469}\u{200d}\u{1f469}";
        assert_eq!(word_next_break(text, 0), text.len());
    }

    #[test]
    fn test_katakana_runs_join() {
        let text = "\u{30a2}\u{30a4} a";
        assert_eq!(word_next_break(text, 0), 6);
        // ideographs break one by one
        assert_eq!(breaks("中文"), vec![3, 6]);
    }
}
