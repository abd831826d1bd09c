//! Sentence boundaries (UAX #29).

use crate::iterator::TextIterator;
use crate::tables::{sentence_category, SentenceCat};

const CR: u64 = SentenceCat::CR.bits();
const LF: u64 = SentenceCat::LF.bits();
const SEP: u64 = SentenceCat::SEP.bits();
const SP: u64 = SentenceCat::SP.bits();
const LOWER: u64 = SentenceCat::LOWER.bits();
const UPPER: u64 = SentenceCat::UPPER.bits();
const OLETTER: u64 = SentenceCat::OLETTER.bits();
const NUMERIC: u64 = SentenceCat::NUMERIC.bits();
const ATERM: u64 = SentenceCat::ATERM.bits();
const STERM: u64 = SentenceCat::STERM.bits();
const CLOSE: u64 = SentenceCat::CLOSE.bits();
const SCONTINUE: u64 = SentenceCat::SCONTINUE.bits();
const EXTEND: u64 = SentenceCat::EXTEND.bits();
const FORMAT: u64 = SentenceCat::FORMAT.bits();

const PARA_SEP: u64 = SEP | CR | LF;
const SATERM: u64 = ATERM | STERM;

/// Smallest byte index greater than `offset` at which a sentence break
/// occurs; `text.len()` past the last character.
pub fn sentence_next_break(text: &str, offset: usize) -> usize {
    let len = text.len();
    if offset >= len {
        return len;
    }
    let mut it = TextIterator::new(text, offset, sentence_category);
    it.advance();

    // category of the last non-extender character before the terminator,
    // for the "U.S" abbreviation rule
    let mut before = 0u64;

    loop {
        // SB5: attach Extend and Format to the preceding character
        if it.curchar & PARA_SEP == 0 {
            it.absorb(EXTEND | FORMAT, 0);
        }
        if it.lookahead == 0 {
            return len; // SB2
        }
        let cur = it.curchar;
        let la = it.lookahead;

        // SB3
        if cur & CR != 0 && la & LF != 0 {
            it.advance();
            continue;
        }
        // SB4
        if cur & PARA_SEP != 0 {
            return it.pos;
        }

        if cur & SATERM != 0 {
            // SB6: ATerm directly followed by a digit
            if cur & ATERM != 0 && la & NUMERIC != 0 {
                before = 0;
                it.advance();
                continue;
            }
            // SB7: letter ATerm letter, the abbreviation shape
            if cur & ATERM != 0 && before & (UPPER | LOWER) != 0 && la & UPPER != 0 {
                before = 0;
                it.advance();
                continue;
            }

            // consume the full terminator sequence: Close* Sp*
            it.absorb(CLOSE, EXTEND | FORMAT);
            it.absorb(SP, EXTEND | FORMAT);
            let candidate = it.pos;
            let la = it.lookahead;

            if la == 0 {
                return len;
            }
            // SB8a
            if la & (SCONTINUE | SATERM) != 0 {
                before = 0;
                it.advance();
                continue;
            }
            // SB11: a following paragraph separator belongs to the sentence
            if la & PARA_SEP != 0 {
                it.advance();
                if it.curchar & CR != 0 && it.lookahead & LF != 0 {
                    it.advance();
                }
                return it.pos;
            }
            // SB8: scan for a lowercase letter with nothing sentence-ending
            // in between (only for ATerm)
            if cur & ATERM != 0 {
                let blockers = OLETTER | UPPER | PARA_SEP | SATERM;
                loop {
                    let ahead = it.lookahead;
                    if ahead == 0 || ahead & (blockers | LOWER) != 0 {
                        break;
                    }
                    it.advance();
                }
                if it.lookahead & LOWER != 0 {
                    before = 0;
                    it.advance();
                    continue;
                }
            }
            return candidate;
        }

        if cur & (EXTEND | FORMAT) == 0 {
            before = cur;
        }
        it.advance();
    }
}

/// Iterator over the sentence boundaries of `text[offset..]`, ending with
/// `text.len()`.
pub fn sentence_offsets(text: &str, offset: usize) -> impl Iterator<Item = usize> + '_ {
    let mut pos = offset;
    std::iter::from_fn(move || {
        if pos >= text.len() {
            return None;
        }
        pos = sentence_next_break(text, pos);
        Some(pos)
    })
}
