//! Line break opportunities (UAX #14), rules LB1-LB31.
//!
//! Two places deviate from a naive rule-by-rule rendering. The number shape
//! of LB25 is extracted up front as one span, because evaluating it as
//! interleaved pair rules produces spurious breaks inside figures like
//! "$1,234.56". The quote rules LB15a/LB15b need context beyond the
//! two-character window, realized with the iterator's save/rollback slot.

use crate::iterator::TextIterator;
use crate::tables::{line_category, LineCat};

const BK: u64 = LineCat::BK.bits();
const CR: u64 = LineCat::CR.bits();
const LF: u64 = LineCat::LF.bits();
const NL: u64 = LineCat::NL.bits();
const SP: u64 = LineCat::SP.bits();
const ZW: u64 = LineCat::ZW.bits();
const WJ: u64 = LineCat::WJ.bits();
const GL: u64 = LineCat::GL.bits();
const CM: u64 = LineCat::CM.bits();
const ZWJ: u64 = LineCat::ZWJ.bits();
const BA: u64 = LineCat::BA.bits();
const BB: u64 = LineCat::BB.bits();
const B2: u64 = LineCat::B2.bits();
const HY: u64 = LineCat::HY.bits();
const CB: u64 = LineCat::CB.bits();
const CL: u64 = LineCat::CL.bits();
const CP: u64 = LineCat::CP.bits();
const EX: u64 = LineCat::EX.bits();
const IN: u64 = LineCat::IN.bits();
const NS: u64 = LineCat::NS.bits();
const OP: u64 = LineCat::OP.bits();
const QU: u64 = LineCat::QU.bits();
const QU_PI: u64 = LineCat::QU_PI.bits();
const QU_PF: u64 = LineCat::QU_PF.bits();
const IS: u64 = LineCat::IS.bits();
const NU: u64 = LineCat::NU.bits();
const PO: u64 = LineCat::PO.bits();
const PR: u64 = LineCat::PR.bits();
const SY: u64 = LineCat::SY.bits();
const AL: u64 = LineCat::AL.bits();
const HL: u64 = LineCat::HL.bits();
const ID: u64 = LineCat::ID.bits();
const EB: u64 = LineCat::EB.bits();
const EM: u64 = LineCat::EM.bits();
const H2: u64 = LineCat::H2.bits();
const H3: u64 = LineCat::H3.bits();
const JL: u64 = LineCat::JL.bits();
const JV: u64 = LineCat::JV.bits();
const JT: u64 = LineCat::JT.bits();
const RI: u64 = LineCat::RI.bits();

const HARD: u64 = BK | CR | LF | NL;
const NO_ABSORB_BASE: u64 = HARD | SP | ZW;

/// Smallest byte index greater than `offset` at which a line break is legal;
/// `text.len()` past the last character.
pub fn line_next_break(text: &str, offset: usize) -> usize {
    let len = text.len();
    if offset >= len {
        return len;
    }
    let mut it = TextIterator::new(text, offset, line_category);
    it.advance();

    let mut prev: u64 = 0;
    let mut ri_run = usize::from(it.curchar & RI != 0);
    let mut span_start = 0usize;
    let mut span_end = 0usize;

    macro_rules! step {
        ($it:ident, $prev:ident, $ri_run:ident) => {{
            $prev = $it.curchar;
            $it.advance();
            if $it.curchar & RI != 0 {
                $ri_run += 1;
            } else {
                $ri_run = 0;
            }
            continue;
        }};
    }

    loop {
        // LB10: a combining mark with nothing to attach to acts as AL
        if it.curchar & (CM | ZWJ) != 0 {
            it.curchar = AL;
        }
        // LB9: absorb combining marks and joiners into the base; a trailing
        // ZWJ forbids the break outright (LB8a)
        let mut zwj_tail = false;
        if it.curchar & NO_ABSORB_BASE == 0 && it.curchar != 0 {
            while it.lookahead & (CM | ZWJ) != 0 {
                zwj_tail = it.lookahead & ZWJ != 0;
                it.advance_keep_current();
            }
        }

        if it.lookahead == 0 {
            return len; // LB3
        }
        let cur = it.curchar;
        let la = it.lookahead;

        // LB4, LB5
        if cur & BK != 0 {
            return it.pos;
        }
        if cur & CR != 0 {
            if la & LF != 0 {
                step!(it, prev, ri_run);
            }
            return it.pos;
        }
        if cur & (LF | NL) != 0 {
            return it.pos;
        }
        // LB6
        if la & HARD != 0 {
            step!(it, prev, ri_run);
        }

        if zwj_tail {
            step!(it, prev, ri_run); // LB8a
        }

        // LB25, applied early: no break strictly inside an extracted number.
        // The first character of the window can itself open a number; later
        // ones are caught from the lookahead side.
        if prev == 0 && cur & (PR | PO | OP | HY | NU) != 0 {
            if let Some(end) = match_number(text, offset) {
                span_start = offset;
                span_end = end;
            }
        }
        if it.pos >= span_end && la & (PR | PO | OP | HY | NU) != 0 {
            if let Some(end) = match_number(text, it.pos) {
                span_start = it.pos;
                span_end = end;
            }
        }
        if it.pos > span_start && it.pos < span_end {
            step!(it, prev, ri_run);
        }

        // LB7 + LB8: break after ZW and its trailing spaces
        if cur & ZW != 0 {
            it.absorb(SP, 0);
            if it.lookahead == 0 {
                return len;
            }
            if it.lookahead & (HARD | ZW) != 0 {
                step!(it, prev, ri_run);
            }
            return it.pos;
        }
        // LB14: OP SP* ×
        if cur & OP != 0 {
            it.absorb(SP, 0);
            step!(it, prev, ri_run);
        }
        // LB15a: initial quote in opening context swallows following spaces
        if cur & QU_PI != 0 && (prev == 0 || prev & (HARD | OP | QU | GL | SP | ZW) != 0) {
            it.absorb(SP, 0);
            step!(it, prev, ri_run);
        }
        // LB16: (CL|CP) SP* × NS
        if cur & (CL | CP) != 0 && la & SP != 0 {
            it.absorb(SP, 0);
            if it.lookahead & NS != 0 {
                step!(it, prev, ri_run);
            }
            if it.lookahead == 0 {
                return len;
            }
            if it.lookahead & (HARD | ZW) != 0 {
                step!(it, prev, ri_run);
            }
            return it.pos; // LB18 for the absorbed run
        }
        // LB17: B2 SP* × B2
        if cur & B2 != 0 && la & SP != 0 {
            it.absorb(SP, 0);
            if it.lookahead & B2 != 0 {
                step!(it, prev, ri_run);
            }
            if it.lookahead == 0 {
                return len;
            }
            if it.lookahead & (HARD | ZW) != 0 {
                step!(it, prev, ri_run);
            }
            return it.pos;
        }
        // LB7
        if la & (SP | ZW) != 0 {
            step!(it, prev, ri_run);
        }
        // LB11
        if la & WJ != 0 || cur & WJ != 0 {
            step!(it, prev, ri_run);
        }
        // LB12, LB12a
        if cur & GL != 0 {
            step!(it, prev, ri_run);
        }
        if la & GL != 0 && cur & (SP | BA | HY) == 0 {
            step!(it, prev, ri_run);
        }
        // LB13
        if la & (CL | CP | EX | IS | SY) != 0 {
            step!(it, prev, ri_run);
        }
        // LB15b: final quote kept attached when a closing context follows
        if la & QU_PF != 0 {
            it.begin();
            it.advance();
            let after = it.lookahead;
            it.rollback();
            if after == 0 || after & (SP | GL | WJ | CL | QU | CP | EX | IS | SY | HARD | ZW) != 0 {
                step!(it, prev, ri_run);
            }
        }
        // LB16 without spaces
        if cur & (CL | CP) != 0 && la & NS != 0 {
            step!(it, prev, ri_run);
        }
        // LB17 without spaces
        if cur & B2 != 0 && la & B2 != 0 {
            step!(it, prev, ri_run);
        }
        // LB18
        if cur & SP != 0 {
            return it.pos;
        }
        // LB19
        if la & QU != 0 && la & QU_PI == 0 {
            step!(it, prev, ri_run);
        }
        if cur & QU != 0 && cur & QU_PF == 0 {
            step!(it, prev, ri_run);
        }
        // LB20
        if cur & CB != 0 || la & CB != 0 {
            return it.pos;
        }
        // LB21
        if la & (BA | HY | NS) != 0 {
            step!(it, prev, ri_run);
        }
        if cur & BB != 0 {
            step!(it, prev, ri_run);
        }
        // LB21a
        if prev & HL != 0 && cur & (HY | BA) != 0 && la & HL == 0 {
            step!(it, prev, ri_run);
        }
        // LB21b
        if cur & SY != 0 && la & HL != 0 {
            step!(it, prev, ri_run);
        }
        // LB22
        if la & IN != 0 {
            step!(it, prev, ri_run);
        }
        // LB23
        if cur & (AL | HL) != 0 && la & NU != 0 {
            step!(it, prev, ri_run);
        }
        if cur & NU != 0 && la & (AL | HL) != 0 {
            step!(it, prev, ri_run);
        }
        // LB23a
        if cur & PR != 0 && la & (ID | EB | EM) != 0 {
            step!(it, prev, ri_run);
        }
        if cur & (ID | EB | EM) != 0 && la & PO != 0 {
            step!(it, prev, ri_run);
        }
        // LB24
        if cur & (PR | PO) != 0 && la & (AL | HL) != 0 {
            step!(it, prev, ri_run);
        }
        if cur & (AL | HL) != 0 && la & (PR | PO) != 0 {
            step!(it, prev, ri_run);
        }
        // LB26
        if cur & JL != 0 && la & (JL | JV | H2 | H3) != 0 {
            step!(it, prev, ri_run);
        }
        if cur & (JV | H2) != 0 && la & (JV | JT) != 0 {
            step!(it, prev, ri_run);
        }
        if cur & (JT | H3) != 0 && la & JT != 0 {
            step!(it, prev, ri_run);
        }
        // LB27
        if cur & (JL | JV | JT | H2 | H3) != 0 && la & PO != 0 {
            step!(it, prev, ri_run);
        }
        if cur & PR != 0 && la & (JL | JV | JT | H2 | H3) != 0 {
            step!(it, prev, ri_run);
        }
        // LB28
        if cur & (AL | HL) != 0 && la & (AL | HL) != 0 {
            step!(it, prev, ri_run);
        }
        // LB29
        if cur & IS != 0 && la & (AL | HL) != 0 {
            step!(it, prev, ri_run);
        }
        // LB30
        if cur & (AL | HL | NU) != 0 && la & OP != 0 {
            step!(it, prev, ri_run);
        }
        if cur & CP != 0 && la & (AL | HL | NU) != 0 {
            step!(it, prev, ri_run);
        }
        // LB30a
        if cur & RI != 0 && la & RI != 0 && ri_run % 2 == 1 {
            step!(it, prev, ri_run);
        }
        // LB30b
        if cur & EB != 0 && la & EM != 0 {
            step!(it, prev, ri_run);
        }

        return it.pos; // LB31
    }
}

/// LB25 number shape: (PR|PO)? (OP|HY)? NU (NU|SY|IS)* (CL|CP)? (PR|PO)?.
/// Returns the end offset when the text at `from` matches, `None` otherwise.
fn match_number(text: &str, from: usize) -> Option<usize> {
    let cat_at = |p: usize| {
        text[p..]
            .chars()
            .next()
            .map(|c| (line_category(c), c.len_utf8()))
    };
    let mut pos = from;
    if let Some((cat, w)) = cat_at(pos) {
        if cat & (PR | PO) != 0 {
            pos += w;
        }
    }
    if let Some((cat, w)) = cat_at(pos) {
        if cat & (OP | HY) != 0 {
            pos += w;
        }
    }
    let digits_from = pos;
    while let Some((cat, w)) = cat_at(pos) {
        if cat & NU != 0 {
            pos += w;
        } else {
            break;
        }
    }
    if pos == digits_from {
        return None;
    }
    while let Some((cat, w)) = cat_at(pos) {
        if cat & (NU | SY | IS) != 0 {
            pos += w;
        } else {
            break;
        }
    }
    if let Some((cat, w)) = cat_at(pos) {
        if cat & (CL | CP) != 0 {
            pos += w;
        }
    }
    if let Some((cat, w)) = cat_at(pos) {
        if cat & (PR | PO) != 0 {
            pos += w;
        }
    }
    Some(pos)
}

/// Only the mandatory breaks: BK, CR+LF, CR, LF, NL.
pub fn line_next_hard_break(text: &str, offset: usize) -> usize {
    let mut chars = text[offset..].char_indices().peekable();
    while let Some((i, c)) = chars.next() {
        match c {
            '\n' | '\u{b}' | '\u{c}' | '\u{85}' | '\u{2028}' | '\u{2029}' => {
                return offset + i + c.len_utf8();
            }
            '\r' => {
                if let Some(&(j, '\n')) = chars.peek() {
                    return offset + j + 1;
                }
                return offset + i + 1;
            }
            _ => {}
        }
    }
    text.len()
}
