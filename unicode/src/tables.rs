//! Per-codepoint category bitmaps for the grapheme, word, sentence and line
//! break algorithms. Codepoints are classified through sorted range tables;
//! Hangul syllables are classified arithmetically instead of being expanded
//! into thousands of rows.

use bitflags::bitflags;
use std::cmp::Ordering;

/// Unicode version the tables were built against.
pub const UNICODE_VERSION: &str = "15.1";

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct GraphemeCat: u64 {
        const OTHER        = 1;
        const CR           = 1 << 1;
        const LF           = 1 << 2;
        const CONTROL      = 1 << 3;
        const EXTEND       = 1 << 4;
        const ZWJ          = 1 << 5;
        const RI           = 1 << 6;
        const PREPEND      = 1 << 7;
        const SPACING_MARK = 1 << 8;
        const HANGUL_L     = 1 << 9;
        const HANGUL_V     = 1 << 10;
        const HANGUL_T     = 1 << 11;
        const HANGUL_LV    = 1 << 12;
        const HANGUL_LVT   = 1 << 13;
        const EXT_PICT     = 1 << 14;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct WordCat: u64 {
        const OTHER          = 1;
        const CR             = 1 << 1;
        const LF             = 1 << 2;
        const NEWLINE        = 1 << 3;
        const EXTEND         = 1 << 4;
        const ZWJ            = 1 << 5;
        const RI             = 1 << 6;
        const FORMAT         = 1 << 7;
        const KATAKANA       = 1 << 8;
        const HEBREW_LETTER  = 1 << 9;
        const ALETTER        = 1 << 10;
        const SINGLE_QUOTE   = 1 << 11;
        const DOUBLE_QUOTE   = 1 << 12;
        const MID_NUM_LET    = 1 << 13;
        const MID_LETTER     = 1 << 14;
        const MID_NUM        = 1 << 15;
        const NUMERIC        = 1 << 16;
        const EXTEND_NUM_LET = 1 << 17;
        const WSEG_SPACE     = 1 << 18;
        const EXT_PICT       = 1 << 19;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct SentenceCat: u64 {
        const OTHER     = 1;
        const CR        = 1 << 1;
        const LF        = 1 << 2;
        const SEP       = 1 << 3;
        const SP        = 1 << 4;
        const LOWER     = 1 << 5;
        const UPPER     = 1 << 6;
        const OLETTER   = 1 << 7;
        const NUMERIC   = 1 << 8;
        const ATERM     = 1 << 9;
        const STERM     = 1 << 10;
        const CLOSE     = 1 << 11;
        const SCONTINUE = 1 << 12;
        const EXTEND    = 1 << 13;
        const FORMAT    = 1 << 14;
    }
}

bitflags! {
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LineCat: u64 {
        const BK    = 1;
        const CR    = 1 << 1;
        const LF    = 1 << 2;
        const NL    = 1 << 3;
        const SP    = 1 << 4;
        const ZW    = 1 << 5;
        const WJ    = 1 << 6;
        const GL    = 1 << 7;
        const CM    = 1 << 8;
        const ZWJ   = 1 << 9;
        const BA    = 1 << 10;
        const BB    = 1 << 11;
        const B2    = 1 << 12;
        const HY    = 1 << 13;
        const CB    = 1 << 14;
        const CL    = 1 << 15;
        const CP    = 1 << 16;
        const EX    = 1 << 17;
        const IN    = 1 << 18;
        const NS    = 1 << 19;
        const OP    = 1 << 20;
        const QU    = 1 << 21;
        const QU_PI = 1 << 22;
        const QU_PF = 1 << 23;
        const IS    = 1 << 24;
        const NU    = 1 << 25;
        const PO    = 1 << 26;
        const PR    = 1 << 27;
        const SY    = 1 << 28;
        const AL    = 1 << 29;
        const HL    = 1 << 30;
        const ID    = 1 << 31;
        const EB    = 1 << 32;
        const EM    = 1 << 33;
        const H2    = 1 << 34;
        const H3    = 1 << 35;
        const JL    = 1 << 36;
        const JV    = 1 << 37;
        const JT    = 1 << 38;
        const RI    = 1 << 39;
    }
}

type Range = (u32, u32, u64);

fn bits_for(table: &[Range], cp: u32) -> Option<u64> {
    table
        .binary_search_by(|&(start, end, _)| {
            if end < cp {
                Ordering::Less
            } else if start > cp {
                Ordering::Greater
            } else {
                Ordering::Equal
            }
        })
        .ok()
        .map(|i| table[i].2)
}

pub fn grapheme_category(c: char) -> u64 {
    let cp = c as u32;
    if (0xac00..=0xd7a3).contains(&cp) {
        return if (cp - 0xac00) % 28 == 0 {
            GraphemeCat::HANGUL_LV.bits()
        } else {
            GraphemeCat::HANGUL_LVT.bits()
        };
    }
    bits_for(GRAPHEME_RANGES, cp).unwrap_or(GraphemeCat::OTHER.bits())
}

pub fn word_category(c: char) -> u64 {
    bits_for(WORD_RANGES, c as u32).unwrap_or(WordCat::OTHER.bits())
}

pub fn sentence_category(c: char) -> u64 {
    bits_for(SENTENCE_RANGES, c as u32).unwrap_or(SentenceCat::OTHER.bits())
}

pub fn line_category(c: char) -> u64 {
    let cp = c as u32;
    if (0xac00..=0xd7a3).contains(&cp) {
        return if (cp - 0xac00) % 28 == 0 {
            LineCat::H2.bits()
        } else {
            LineCat::H3.bits()
        };
    }
    bits_for(LINE_RANGES, cp).unwrap_or(LineCat::AL.bits())
}

const GC_EXTEND: u64 = GraphemeCat::EXTEND.bits();
const GC_CONTROL: u64 = GraphemeCat::CONTROL.bits();
const GC_SPACING: u64 = GraphemeCat::SPACING_MARK.bits();
const GC_PREPEND: u64 = GraphemeCat::PREPEND.bits();
const GC_PICT: u64 = GraphemeCat::EXT_PICT.bits();

#[rustfmt::skip]
static GRAPHEME_RANGES: &[Range] = &[
    (0x0000, 0x0009, GC_CONTROL),
    (0x000a, 0x000a, GraphemeCat::LF.bits()),
    (0x000b, 0x000c, GC_CONTROL),
    (0x000d, 0x000d, GraphemeCat::CR.bits()),
    (0x000e, 0x001f, GC_CONTROL),
    (0x007f, 0x009f, GC_CONTROL),
    (0x00a9, 0x00a9, GC_PICT),
    (0x00ad, 0x00ad, GC_CONTROL),
    (0x00ae, 0x00ae, GC_PICT),
    (0x0300, 0x036f, GC_EXTEND),
    (0x0483, 0x0489, GC_EXTEND),
    (0x0591, 0x05bd, GC_EXTEND),
    (0x05bf, 0x05bf, GC_EXTEND),
    (0x05c1, 0x05c2, GC_EXTEND),
    (0x05c4, 0x05c5, GC_EXTEND),
    (0x05c7, 0x05c7, GC_EXTEND),
    (0x0600, 0x0605, GC_PREPEND),
    (0x0610, 0x061a, GC_EXTEND),
    (0x061c, 0x061c, GC_CONTROL),
    (0x064b, 0x065f, GC_EXTEND),
    (0x0670, 0x0670, GC_EXTEND),
    (0x06d6, 0x06dc, GC_EXTEND),
    (0x06dd, 0x06dd, GC_PREPEND),
    (0x06df, 0x06e4, GC_EXTEND),
    (0x06e7, 0x06e8, GC_EXTEND),
    (0x06ea, 0x06ed, GC_EXTEND),
    (0x070f, 0x070f, GC_PREPEND),
    (0x0711, 0x0711, GC_EXTEND),
    (0x0730, 0x074a, GC_EXTEND),
    (0x07a6, 0x07b0, GC_EXTEND),
    (0x07eb, 0x07f3, GC_EXTEND),
    (0x07fd, 0x07fd, GC_EXTEND),
    (0x0816, 0x0819, GC_EXTEND),
    (0x081b, 0x0823, GC_EXTEND),
    (0x0825, 0x0827, GC_EXTEND),
    (0x0829, 0x082d, GC_EXTEND),
    (0x0859, 0x085b, GC_EXTEND),
    (0x0890, 0x0891, GC_PREPEND),
    (0x0898, 0x089f, GC_EXTEND),
    (0x08ca, 0x08e1, GC_EXTEND),
    (0x08e2, 0x08e2, GC_PREPEND),
    (0x08e3, 0x0902, GC_EXTEND),
    (0x0903, 0x0903, GC_SPACING),
    (0x093a, 0x093a, GC_EXTEND),
    (0x093b, 0x093b, GC_SPACING),
    (0x093c, 0x093c, GC_EXTEND),
    (0x093e, 0x0940, GC_SPACING),
    (0x0941, 0x0948, GC_EXTEND),
    (0x0949, 0x094c, GC_SPACING),
    (0x094d, 0x094d, GC_EXTEND),
    (0x094e, 0x094f, GC_SPACING),
    (0x0951, 0x0957, GC_EXTEND),
    (0x0962, 0x0963, GC_EXTEND),
    (0x0981, 0x0981, GC_EXTEND),
    (0x0982, 0x0983, GC_SPACING),
    (0x09bc, 0x09bc, GC_EXTEND),
    (0x09be, 0x09be, GC_EXTEND),
    (0x09bf, 0x09c0, GC_SPACING),
    (0x09c1, 0x09c4, GC_EXTEND),
    (0x09c7, 0x09c8, GC_SPACING),
    (0x09cb, 0x09cc, GC_SPACING),
    (0x09cd, 0x09cd, GC_EXTEND),
    (0x09d7, 0x09d7, GC_EXTEND),
    (0x09e2, 0x09e3, GC_EXTEND),
    (0x09fe, 0x09fe, GC_EXTEND),
    (0x0a01, 0x0a02, GC_EXTEND),
    (0x0a03, 0x0a03, GC_SPACING),
    (0x0a3c, 0x0a3c, GC_EXTEND),
    (0x0a3e, 0x0a40, GC_SPACING),
    (0x0a41, 0x0a42, GC_EXTEND),
    (0x0a47, 0x0a48, GC_EXTEND),
    (0x0a4b, 0x0a4d, GC_EXTEND),
    (0x0a51, 0x0a51, GC_EXTEND),
    (0x0a70, 0x0a71, GC_EXTEND),
    (0x0a75, 0x0a75, GC_EXTEND),
    (0x0a81, 0x0a82, GC_EXTEND),
    (0x0a83, 0x0a83, GC_SPACING),
    (0x0abc, 0x0abc, GC_EXTEND),
    (0x0abe, 0x0ac0, GC_SPACING),
    (0x0ac1, 0x0ac5, GC_EXTEND),
    (0x0ac7, 0x0ac8, GC_EXTEND),
    (0x0ac9, 0x0ac9, GC_SPACING),
    (0x0acb, 0x0acc, GC_SPACING),
    (0x0acd, 0x0acd, GC_EXTEND),
    (0x0ae2, 0x0ae3, GC_EXTEND),
    (0x0afa, 0x0aff, GC_EXTEND),
    (0x0b01, 0x0b01, GC_EXTEND),
    (0x0b02, 0x0b03, GC_SPACING),
    (0x0b3c, 0x0b3c, GC_EXTEND),
    (0x0b3e, 0x0b3e, GC_EXTEND),
    (0x0b3f, 0x0b3f, GC_EXTEND),
    (0x0b40, 0x0b40, GC_SPACING),
    (0x0b41, 0x0b44, GC_EXTEND),
    (0x0b47, 0x0b48, GC_SPACING),
    (0x0b4b, 0x0b4c, GC_SPACING),
    (0x0b4d, 0x0b4d, GC_EXTEND),
    (0x0b55, 0x0b57, GC_EXTEND),
    (0x0b62, 0x0b63, GC_EXTEND),
    (0x0b82, 0x0b82, GC_EXTEND),
    (0x0bbe, 0x0bbe, GC_EXTEND),
    (0x0bbf, 0x0bbf, GC_SPACING),
    (0x0bc0, 0x0bc0, GC_EXTEND),
    (0x0bc1, 0x0bc2, GC_SPACING),
    (0x0bc6, 0x0bc8, GC_SPACING),
    (0x0bca, 0x0bcc, GC_SPACING),
    (0x0bcd, 0x0bcd, GC_EXTEND),
    (0x0bd7, 0x0bd7, GC_EXTEND),
    (0x0c00, 0x0c00, GC_EXTEND),
    (0x0c01, 0x0c03, GC_SPACING),
    (0x0c04, 0x0c04, GC_EXTEND),
    (0x0c3c, 0x0c3c, GC_EXTEND),
    (0x0c3e, 0x0c40, GC_EXTEND),
    (0x0c41, 0x0c44, GC_SPACING),
    (0x0c46, 0x0c48, GC_EXTEND),
    (0x0c4a, 0x0c4d, GC_EXTEND),
    (0x0c55, 0x0c56, GC_EXTEND),
    (0x0c62, 0x0c63, GC_EXTEND),
    (0x0c81, 0x0c81, GC_EXTEND),
    (0x0c82, 0x0c83, GC_SPACING),
    (0x0cbc, 0x0cbc, GC_EXTEND),
    (0x0cbe, 0x0cbe, GC_SPACING),
    (0x0cbf, 0x0cbf, GC_EXTEND),
    (0x0cc0, 0x0cc1, GC_SPACING),
    (0x0cc2, 0x0cc2, GC_EXTEND),
    (0x0cc3, 0x0cc4, GC_SPACING),
    (0x0cc6, 0x0cc6, GC_EXTEND),
    (0x0cc7, 0x0cc8, GC_SPACING),
    (0x0cca, 0x0ccb, GC_SPACING),
    (0x0ccc, 0x0ccd, GC_EXTEND),
    (0x0cd5, 0x0cd6, GC_EXTEND),
    (0x0ce2, 0x0ce3, GC_EXTEND),
    (0x0d00, 0x0d01, GC_EXTEND),
    (0x0d02, 0x0d03, GC_SPACING),
    (0x0d3b, 0x0d3c, GC_EXTEND),
    (0x0d3e, 0x0d3e, GC_EXTEND),
    (0x0d3f, 0x0d40, GC_SPACING),
    (0x0d41, 0x0d44, GC_EXTEND),
    (0x0d46, 0x0d48, GC_SPACING),
    (0x0d4a, 0x0d4c, GC_SPACING),
    (0x0d4d, 0x0d4d, GC_EXTEND),
    (0x0d4e, 0x0d4e, GC_PREPEND),
    (0x0d57, 0x0d57, GC_EXTEND),
    (0x0d62, 0x0d63, GC_EXTEND),
    (0x0d81, 0x0d81, GC_EXTEND),
    (0x0d82, 0x0d83, GC_SPACING),
    (0x0dca, 0x0dca, GC_EXTEND),
    (0x0dcf, 0x0dcf, GC_EXTEND),
    (0x0dd0, 0x0dd1, GC_SPACING),
    (0x0dd2, 0x0dd4, GC_EXTEND),
    (0x0dd6, 0x0dd6, GC_EXTEND),
    (0x0dd8, 0x0dde, GC_SPACING),
    (0x0ddf, 0x0ddf, GC_EXTEND),
    (0x0df2, 0x0df3, GC_SPACING),
    (0x0e31, 0x0e31, GC_EXTEND),
    (0x0e33, 0x0e33, GC_SPACING),
    (0x0e34, 0x0e3a, GC_EXTEND),
    (0x0e47, 0x0e4e, GC_EXTEND),
    (0x0eb1, 0x0eb1, GC_EXTEND),
    (0x0eb3, 0x0eb3, GC_SPACING),
    (0x0eb4, 0x0ebc, GC_EXTEND),
    (0x0ec8, 0x0ece, GC_EXTEND),
    (0x0f18, 0x0f19, GC_EXTEND),
    (0x0f35, 0x0f35, GC_EXTEND),
    (0x0f37, 0x0f37, GC_EXTEND),
    (0x0f39, 0x0f39, GC_EXTEND),
    (0x0f3e, 0x0f3f, GC_SPACING),
    (0x0f71, 0x0f7e, GC_EXTEND),
    (0x0f7f, 0x0f7f, GC_SPACING),
    (0x0f80, 0x0f84, GC_EXTEND),
    (0x0f86, 0x0f87, GC_EXTEND),
    (0x0f8d, 0x0f97, GC_EXTEND),
    (0x0f99, 0x0fbc, GC_EXTEND),
    (0x0fc6, 0x0fc6, GC_EXTEND),
    (0x102d, 0x1030, GC_EXTEND),
    (0x1031, 0x1031, GC_SPACING),
    (0x1032, 0x1037, GC_EXTEND),
    (0x1039, 0x103a, GC_EXTEND),
    (0x103b, 0x103c, GC_SPACING),
    (0x103d, 0x103e, GC_EXTEND),
    (0x1056, 0x1057, GC_SPACING),
    (0x1058, 0x1059, GC_EXTEND),
    (0x105e, 0x1060, GC_EXTEND),
    (0x1071, 0x1074, GC_EXTEND),
    (0x1082, 0x1082, GC_EXTEND),
    (0x1084, 0x1084, GC_SPACING),
    (0x1085, 0x1086, GC_EXTEND),
    (0x108d, 0x108d, GC_EXTEND),
    (0x109d, 0x109d, GC_EXTEND),
    (0x1100, 0x115f, GraphemeCat::HANGUL_L.bits()),
    (0x1160, 0x11a7, GraphemeCat::HANGUL_V.bits()),
    (0x11a8, 0x11ff, GraphemeCat::HANGUL_T.bits()),
    (0x135d, 0x135f, GC_EXTEND),
    (0x1712, 0x1714, GC_EXTEND),
    (0x1715, 0x1715, GC_SPACING),
    (0x1732, 0x1733, GC_EXTEND),
    (0x1734, 0x1734, GC_SPACING),
    (0x1752, 0x1753, GC_EXTEND),
    (0x1772, 0x1773, GC_EXTEND),
    (0x17b4, 0x17b5, GC_EXTEND),
    (0x17b6, 0x17b6, GC_SPACING),
    (0x17b7, 0x17bd, GC_EXTEND),
    (0x17be, 0x17c5, GC_SPACING),
    (0x17c6, 0x17c6, GC_EXTEND),
    (0x17c7, 0x17c8, GC_SPACING),
    (0x17c9, 0x17d3, GC_EXTEND),
    (0x17dd, 0x17dd, GC_EXTEND),
    (0x180b, 0x180d, GC_EXTEND),
    (0x180e, 0x180e, GC_CONTROL),
    (0x180f, 0x180f, GC_EXTEND),
    (0x1885, 0x1886, GC_EXTEND),
    (0x18a9, 0x18a9, GC_EXTEND),
    (0x1920, 0x1922, GC_EXTEND),
    (0x1923, 0x1926, GC_SPACING),
    (0x1927, 0x1928, GC_EXTEND),
    (0x1929, 0x192b, GC_SPACING),
    (0x1930, 0x1931, GC_SPACING),
    (0x1932, 0x1932, GC_EXTEND),
    (0x1933, 0x1938, GC_SPACING),
    (0x1939, 0x193b, GC_EXTEND),
    (0x1a17, 0x1a18, GC_EXTEND),
    (0x1a19, 0x1a1a, GC_SPACING),
    (0x1a1b, 0x1a1b, GC_EXTEND),
    (0x1a55, 0x1a55, GC_SPACING),
    (0x1a56, 0x1a56, GC_EXTEND),
    (0x1a57, 0x1a57, GC_SPACING),
    (0x1a58, 0x1a5e, GC_EXTEND),
    (0x1a60, 0x1a60, GC_EXTEND),
    (0x1a62, 0x1a62, GC_EXTEND),
    (0x1a65, 0x1a6c, GC_EXTEND),
    (0x1a6d, 0x1a72, GC_SPACING),
    (0x1a73, 0x1a7c, GC_EXTEND),
    (0x1a7f, 0x1a7f, GC_EXTEND),
    (0x1ab0, 0x1ace, GC_EXTEND),
    (0x1b00, 0x1b03, GC_EXTEND),
    (0x1b04, 0x1b04, GC_SPACING),
    (0x1b34, 0x1b3a, GC_EXTEND),
    (0x1b3b, 0x1b3b, GC_SPACING),
    (0x1b3c, 0x1b3c, GC_EXTEND),
    (0x1b3d, 0x1b41, GC_SPACING),
    (0x1b42, 0x1b42, GC_EXTEND),
    (0x1b43, 0x1b44, GC_SPACING),
    (0x1b6b, 0x1b73, GC_EXTEND),
    (0x1b80, 0x1b81, GC_EXTEND),
    (0x1b82, 0x1b82, GC_SPACING),
    (0x1ba1, 0x1ba1, GC_SPACING),
    (0x1ba2, 0x1ba5, GC_EXTEND),
    (0x1ba6, 0x1ba7, GC_SPACING),
    (0x1ba8, 0x1ba9, GC_EXTEND),
    (0x1baa, 0x1baa, GC_SPACING),
    (0x1bab, 0x1bad, GC_EXTEND),
    (0x1be6, 0x1be6, GC_EXTEND),
    (0x1be7, 0x1be7, GC_SPACING),
    (0x1be8, 0x1be9, GC_EXTEND),
    (0x1bea, 0x1bec, GC_SPACING),
    (0x1bed, 0x1bed, GC_EXTEND),
    (0x1bee, 0x1bee, GC_SPACING),
    (0x1bef, 0x1bf1, GC_EXTEND),
    (0x1bf2, 0x1bf3, GC_SPACING),
    (0x1c24, 0x1c2b, GC_SPACING),
    (0x1c2c, 0x1c33, GC_EXTEND),
    (0x1c34, 0x1c35, GC_SPACING),
    (0x1c36, 0x1c37, GC_EXTEND),
    (0x1cd0, 0x1cd2, GC_EXTEND),
    (0x1cd4, 0x1ce0, GC_EXTEND),
    (0x1ce1, 0x1ce1, GC_SPACING),
    (0x1ce2, 0x1ce8, GC_EXTEND),
    (0x1ced, 0x1ced, GC_EXTEND),
    (0x1cf4, 0x1cf4, GC_EXTEND),
    (0x1cf7, 0x1cf7, GC_SPACING),
    (0x1cf8, 0x1cf9, GC_EXTEND),
    (0x1dc0, 0x1dff, GC_EXTEND),
    (0x200b, 0x200b, GC_CONTROL),
    (0x200c, 0x200c, GC_EXTEND),
    (0x200d, 0x200d, GraphemeCat::ZWJ.bits()),
    (0x200e, 0x200f, GC_CONTROL),
    (0x2028, 0x202e, GC_CONTROL),
    (0x203c, 0x203c, GC_PICT),
    (0x2049, 0x2049, GC_PICT),
    (0x2060, 0x206f, GC_CONTROL),
    (0x20d0, 0x20f0, GC_EXTEND),
    (0x2122, 0x2122, GC_PICT),
    (0x2139, 0x2139, GC_PICT),
    (0x2194, 0x21aa, GC_PICT),
    (0x231a, 0x231b, GC_PICT),
    (0x2328, 0x2328, GC_PICT),
    (0x23cf, 0x23cf, GC_PICT),
    (0x23e9, 0x23fa, GC_PICT),
    (0x24c2, 0x24c2, GC_PICT),
    (0x25aa, 0x25ab, GC_PICT),
    (0x25b6, 0x25b6, GC_PICT),
    (0x25c0, 0x25c0, GC_PICT),
    (0x25fb, 0x25fe, GC_PICT),
    (0x2600, 0x27bf, GC_PICT),
    (0x2934, 0x2935, GC_PICT),
    (0x2b05, 0x2b07, GC_PICT),
    (0x2b1b, 0x2b1c, GC_PICT),
    (0x2b50, 0x2b50, GC_PICT),
    (0x2b55, 0x2b55, GC_PICT),
    (0x2cef, 0x2cf1, GC_EXTEND),
    (0x2d7f, 0x2d7f, GC_EXTEND),
    (0x2de0, 0x2dff, GC_EXTEND),
    (0x302a, 0x302f, GC_EXTEND),
    (0x3030, 0x3030, GC_PICT),
    (0x303d, 0x303d, GC_PICT),
    (0x3099, 0x309a, GC_EXTEND),
    (0x3297, 0x3297, GC_PICT),
    (0x3299, 0x3299, GC_PICT),
    (0xa66f, 0xa672, GC_EXTEND),
    (0xa674, 0xa67d, GC_EXTEND),
    (0xa69e, 0xa69f, GC_EXTEND),
    (0xa6f0, 0xa6f1, GC_EXTEND),
    (0xa802, 0xa802, GC_EXTEND),
    (0xa806, 0xa806, GC_EXTEND),
    (0xa80b, 0xa80b, GC_EXTEND),
    (0xa823, 0xa824, GC_SPACING),
    (0xa825, 0xa826, GC_EXTEND),
    (0xa827, 0xa827, GC_SPACING),
    (0xa82c, 0xa82c, GC_EXTEND),
    (0xa880, 0xa881, GC_SPACING),
    (0xa8b4, 0xa8c3, GC_SPACING),
    (0xa8c4, 0xa8c5, GC_EXTEND),
    (0xa8e0, 0xa8f1, GC_EXTEND),
    (0xa8ff, 0xa8ff, GC_EXTEND),
    (0xa926, 0xa92d, GC_EXTEND),
    (0xa947, 0xa951, GC_EXTEND),
    (0xa952, 0xa953, GC_SPACING),
    (0xa960, 0xa97c, GraphemeCat::HANGUL_L.bits()),
    (0xa980, 0xa982, GC_EXTEND),
    (0xa983, 0xa983, GC_SPACING),
    (0xa9b3, 0xa9b3, GC_EXTEND),
    (0xa9b4, 0xa9b5, GC_SPACING),
    (0xa9b6, 0xa9b9, GC_EXTEND),
    (0xa9ba, 0xa9bb, GC_SPACING),
    (0xa9bc, 0xa9bd, GC_EXTEND),
    (0xa9be, 0xa9c0, GC_SPACING),
    (0xa9e5, 0xa9e5, GC_EXTEND),
    (0xaa29, 0xaa2e, GC_EXTEND),
    (0xaa2f, 0xaa30, GC_SPACING),
    (0xaa31, 0xaa32, GC_EXTEND),
    (0xaa33, 0xaa34, GC_SPACING),
    (0xaa35, 0xaa36, GC_EXTEND),
    (0xaa43, 0xaa43, GC_EXTEND),
    (0xaa4c, 0xaa4c, GC_EXTEND),
    (0xaa4d, 0xaa4d, GC_SPACING),
    (0xaa7c, 0xaa7c, GC_EXTEND),
    (0xaab0, 0xaab0, GC_EXTEND),
    (0xaab2, 0xaab4, GC_EXTEND),
    (0xaab7, 0xaab8, GC_EXTEND),
    (0xaabe, 0xaabf, GC_EXTEND),
    (0xaac1, 0xaac1, GC_EXTEND),
    (0xaaeb, 0xaaeb, GC_SPACING),
    (0xaaec, 0xaaed, GC_EXTEND),
    (0xaaee, 0xaaef, GC_SPACING),
    (0xaaf5, 0xaaf5, GC_SPACING),
    (0xaaf6, 0xaaf6, GC_EXTEND),
    (0xabe3, 0xabe4, GC_SPACING),
    (0xabe5, 0xabe5, GC_EXTEND),
    (0xabe6, 0xabe7, GC_SPACING),
    (0xabe8, 0xabe8, GC_EXTEND),
    (0xabe9, 0xabea, GC_SPACING),
    (0xabec, 0xabec, GC_SPACING),
    (0xabed, 0xabed, GC_EXTEND),
    (0xd7b0, 0xd7c6, GraphemeCat::HANGUL_V.bits()),
    (0xd7cb, 0xd7fb, GraphemeCat::HANGUL_T.bits()),
    (0xfb1e, 0xfb1e, GC_EXTEND),
    (0xfe00, 0xfe0f, GC_EXTEND),
    (0xfe20, 0xfe2f, GC_EXTEND),
    (0xfeff, 0xfeff, GC_CONTROL),
    (0xff9e, 0xff9f, GC_EXTEND),
    (0xfff0, 0xfffb, GC_CONTROL),
    (0x101fd, 0x101fd, GC_EXTEND),
    (0x102e0, 0x102e0, GC_EXTEND),
    (0x10376, 0x1037a, GC_EXTEND),
    (0x10a01, 0x10a03, GC_EXTEND),
    (0x10a05, 0x10a06, GC_EXTEND),
    (0x10a0c, 0x10a0f, GC_EXTEND),
    (0x10a38, 0x10a3a, GC_EXTEND),
    (0x10a3f, 0x10a3f, GC_EXTEND),
    (0x10ae5, 0x10ae6, GC_EXTEND),
    (0x10d24, 0x10d27, GC_EXTEND),
    (0x10eab, 0x10eac, GC_EXTEND),
    (0x10f46, 0x10f50, GC_EXTEND),
    (0x10f82, 0x10f85, GC_EXTEND),
    (0x11000, 0x11000, GC_SPACING),
    (0x11001, 0x11001, GC_EXTEND),
    (0x11002, 0x11002, GC_SPACING),
    (0x11038, 0x11046, GC_EXTEND),
    (0x11070, 0x11070, GC_EXTEND),
    (0x11073, 0x11074, GC_EXTEND),
    (0x1107f, 0x11081, GC_EXTEND),
    (0x11082, 0x11082, GC_SPACING),
    (0x110b0, 0x110b2, GC_SPACING),
    (0x110b3, 0x110b6, GC_EXTEND),
    (0x110b7, 0x110b8, GC_SPACING),
    (0x110b9, 0x110ba, GC_EXTEND),
    (0x110bd, 0x110bd, GC_PREPEND),
    (0x110c2, 0x110c2, GC_EXTEND),
    (0x110cd, 0x110cd, GC_PREPEND),
    (0x11100, 0x11102, GC_EXTEND),
    (0x11127, 0x1112b, GC_EXTEND),
    (0x1112c, 0x1112c, GC_SPACING),
    (0x1112d, 0x11134, GC_EXTEND),
    (0x11145, 0x11146, GC_SPACING),
    (0x11173, 0x11173, GC_EXTEND),
    (0x11180, 0x11181, GC_EXTEND),
    (0x11182, 0x11182, GC_SPACING),
    (0x111b3, 0x111b5, GC_SPACING),
    (0x111b6, 0x111be, GC_EXTEND),
    (0x111bf, 0x111c0, GC_SPACING),
    (0x111c2, 0x111c3, GC_PREPEND),
    (0x111c9, 0x111cc, GC_EXTEND),
    (0x111ce, 0x111ce, GC_SPACING),
    (0x111cf, 0x111cf, GC_EXTEND),
    (0x1122c, 0x1122e, GC_SPACING),
    (0x1122f, 0x11231, GC_EXTEND),
    (0x11232, 0x11233, GC_SPACING),
    (0x11234, 0x11234, GC_EXTEND),
    (0x11235, 0x11235, GC_SPACING),
    (0x11236, 0x11237, GC_EXTEND),
    (0x1123e, 0x1123e, GC_EXTEND),
    (0x112df, 0x112df, GC_EXTEND),
    (0x112e0, 0x112e2, GC_SPACING),
    (0x112e3, 0x112ea, GC_EXTEND),
    (0x11300, 0x11301, GC_EXTEND),
    (0x11302, 0x11303, GC_SPACING),
    (0x1133b, 0x1133c, GC_EXTEND),
    (0x1133e, 0x1133e, GC_EXTEND),
    (0x1133f, 0x1133f, GC_SPACING),
    (0x11340, 0x11340, GC_EXTEND),
    (0x11341, 0x11344, GC_SPACING),
    (0x11347, 0x11348, GC_SPACING),
    (0x1134b, 0x1134d, GC_SPACING),
    (0x11357, 0x11357, GC_EXTEND),
    (0x11362, 0x11363, GC_SPACING),
    (0x11366, 0x1136c, GC_EXTEND),
    (0x11370, 0x11374, GC_EXTEND),
    (0x1f1e6, 0x1f1ff, GraphemeCat::RI.bits()),
    (0x1f300, 0x1f3fa, GC_PICT),
    (0x1f3fb, 0x1f3ff, GC_EXTEND),
    (0x1f400, 0x1faff, GC_PICT),
    (0x1fc00, 0x1fffd, GC_PICT),
    (0xe0000, 0xe001f, GC_CONTROL),
    (0xe0020, 0xe007f, GC_EXTEND),
    (0xe0080, 0xe00ff, GC_CONTROL),
    (0xe0100, 0xe01ef, GC_EXTEND),
];

const WC_ALETTER: u64 = WordCat::ALETTER.bits();
const WC_NUMERIC: u64 = WordCat::NUMERIC.bits();
const WC_EXTEND: u64 = WordCat::EXTEND.bits();
const WC_FORMAT: u64 = WordCat::FORMAT.bits();
const WC_KATAKANA: u64 = WordCat::KATAKANA.bits();
const WC_PICT: u64 = WordCat::EXT_PICT.bits();

#[rustfmt::skip]
static WORD_RANGES: &[Range] = &[
    (0x000a, 0x000a, WordCat::LF.bits()),
    (0x000b, 0x000c, WordCat::NEWLINE.bits()),
    (0x000d, 0x000d, WordCat::CR.bits()),
    (0x0020, 0x0020, WordCat::WSEG_SPACE.bits()),
    (0x0022, 0x0022, WordCat::DOUBLE_QUOTE.bits()),
    (0x0027, 0x0027, WordCat::SINGLE_QUOTE.bits()),
    (0x002c, 0x002c, WordCat::MID_NUM.bits()),
    (0x002e, 0x002e, WordCat::MID_NUM_LET.bits()),
    (0x0030, 0x0039, WC_NUMERIC),
    (0x003a, 0x003a, WordCat::MID_LETTER.bits()),
    (0x003b, 0x003b, WordCat::MID_NUM.bits()),
    (0x0041, 0x005a, WC_ALETTER),
    (0x005f, 0x005f, WordCat::EXTEND_NUM_LET.bits()),
    (0x0061, 0x007a, WC_ALETTER),
    (0x0085, 0x0085, WordCat::NEWLINE.bits()),
    (0x00a9, 0x00a9, WC_PICT),
    (0x00aa, 0x00aa, WC_ALETTER),
    (0x00ad, 0x00ad, WC_FORMAT),
    (0x00ae, 0x00ae, WC_PICT),
    (0x00b5, 0x00b5, WC_ALETTER),
    (0x00b7, 0x00b7, WordCat::MID_LETTER.bits()),
    (0x00ba, 0x00ba, WC_ALETTER),
    (0x00c0, 0x00d6, WC_ALETTER),
    (0x00d8, 0x00f6, WC_ALETTER),
    (0x00f8, 0x02c1, WC_ALETTER),
    (0x02c6, 0x02d1, WC_ALETTER),
    (0x02e0, 0x02e4, WC_ALETTER),
    (0x02ec, 0x02ec, WC_ALETTER),
    (0x02ee, 0x02ee, WC_ALETTER),
    (0x0300, 0x036f, WC_EXTEND),
    (0x0370, 0x0374, WC_ALETTER),
    (0x0376, 0x0377, WC_ALETTER),
    (0x037a, 0x037d, WC_ALETTER),
    (0x037e, 0x037e, WordCat::MID_NUM.bits()),
    (0x037f, 0x037f, WC_ALETTER),
    (0x0386, 0x0386, WC_ALETTER),
    (0x0387, 0x0387, WordCat::MID_LETTER.bits()),
    (0x0388, 0x038a, WC_ALETTER),
    (0x038c, 0x038c, WC_ALETTER),
    (0x038e, 0x03a1, WC_ALETTER),
    (0x03a3, 0x03f5, WC_ALETTER),
    (0x03f7, 0x0481, WC_ALETTER),
    (0x0483, 0x0489, WC_EXTEND),
    (0x048a, 0x052f, WC_ALETTER),
    (0x0531, 0x0556, WC_ALETTER),
    (0x0559, 0x055c, WC_ALETTER),
    (0x055e, 0x055e, WC_ALETTER),
    (0x055f, 0x055f, WordCat::MID_LETTER.bits()),
    (0x0560, 0x0588, WC_ALETTER),
    (0x0591, 0x05bd, WC_EXTEND),
    (0x05bf, 0x05bf, WC_EXTEND),
    (0x05c1, 0x05c2, WC_EXTEND),
    (0x05c4, 0x05c5, WC_EXTEND),
    (0x05c7, 0x05c7, WC_EXTEND),
    (0x05d0, 0x05ea, WordCat::HEBREW_LETTER.bits()),
    (0x05ef, 0x05f2, WordCat::HEBREW_LETTER.bits()),
    (0x05f4, 0x05f4, WordCat::MID_LETTER.bits()),
    (0x0600, 0x0605, WC_FORMAT),
    (0x060c, 0x060d, WordCat::MID_NUM.bits()),
    (0x0610, 0x061a, WC_EXTEND),
    (0x061c, 0x061c, WC_FORMAT),
    (0x0620, 0x064a, WC_ALETTER),
    (0x064b, 0x065f, WC_EXTEND),
    (0x0660, 0x0669, WC_NUMERIC),
    (0x066b, 0x066c, WordCat::MID_NUM.bits()),
    (0x066e, 0x066f, WC_ALETTER),
    (0x0670, 0x0670, WC_EXTEND),
    (0x0671, 0x06d3, WC_ALETTER),
    (0x06d5, 0x06d5, WC_ALETTER),
    (0x06d6, 0x06dc, WC_EXTEND),
    (0x06dd, 0x06dd, WC_FORMAT),
    (0x06df, 0x06e4, WC_EXTEND),
    (0x06e5, 0x06e6, WC_ALETTER),
    (0x06e7, 0x06e8, WC_EXTEND),
    (0x06ea, 0x06ed, WC_EXTEND),
    (0x06ee, 0x06ef, WC_ALETTER),
    (0x06f0, 0x06f9, WC_NUMERIC),
    (0x06fa, 0x06fc, WC_ALETTER),
    (0x06ff, 0x06ff, WC_ALETTER),
    (0x070f, 0x070f, WC_FORMAT),
    (0x0710, 0x0710, WC_ALETTER),
    (0x0711, 0x0711, WC_EXTEND),
    (0x0712, 0x072f, WC_ALETTER),
    (0x0730, 0x074a, WC_EXTEND),
    (0x074d, 0x07a5, WC_ALETTER),
    (0x07a6, 0x07b0, WC_EXTEND),
    (0x07b1, 0x07b1, WC_ALETTER),
    (0x07c0, 0x07c9, WC_NUMERIC),
    (0x07ca, 0x07ea, WC_ALETTER),
    (0x07eb, 0x07f3, WC_EXTEND),
    (0x07f4, 0x07f5, WC_ALETTER),
    (0x07f8, 0x07f8, WordCat::MID_NUM.bits()),
    (0x07fa, 0x07fa, WC_ALETTER),
    (0x07fd, 0x07fd, WC_EXTEND),
    (0x0800, 0x0815, WC_ALETTER),
    (0x0816, 0x0819, WC_EXTEND),
    (0x081a, 0x081a, WC_ALETTER),
    (0x081b, 0x0823, WC_EXTEND),
    (0x0824, 0x0824, WC_ALETTER),
    (0x0825, 0x0827, WC_EXTEND),
    (0x0828, 0x0828, WC_ALETTER),
    (0x0829, 0x082d, WC_EXTEND),
    (0x0840, 0x0858, WC_ALETTER),
    (0x0859, 0x085b, WC_EXTEND),
    (0x0860, 0x086a, WC_ALETTER),
    (0x0870, 0x0887, WC_ALETTER),
    (0x0889, 0x088e, WC_ALETTER),
    (0x0898, 0x089f, WC_EXTEND),
    (0x08a0, 0x08c9, WC_ALETTER),
    (0x08ca, 0x08e1, WC_EXTEND),
    (0x08e2, 0x08e2, WC_FORMAT),
    (0x08e3, 0x0903, WC_EXTEND),
    (0x0904, 0x0939, WC_ALETTER),
    (0x093a, 0x093c, WC_EXTEND),
    (0x093d, 0x093d, WC_ALETTER),
    (0x093e, 0x094f, WC_EXTEND),
    (0x0950, 0x0950, WC_ALETTER),
    (0x0951, 0x0957, WC_EXTEND),
    (0x0958, 0x0961, WC_ALETTER),
    (0x0962, 0x0963, WC_EXTEND),
    (0x0966, 0x096f, WC_NUMERIC),
    (0x0971, 0x0980, WC_ALETTER),
    (0x0981, 0x0983, WC_EXTEND),
    (0x0985, 0x098c, WC_ALETTER),
    (0x098f, 0x0990, WC_ALETTER),
    (0x0993, 0x09a8, WC_ALETTER),
    (0x09aa, 0x09b0, WC_ALETTER),
    (0x09b2, 0x09b2, WC_ALETTER),
    (0x09b6, 0x09b9, WC_ALETTER),
    (0x09bc, 0x09bc, WC_EXTEND),
    (0x09bd, 0x09bd, WC_ALETTER),
    (0x09be, 0x09c4, WC_EXTEND),
    (0x09c7, 0x09c8, WC_EXTEND),
    (0x09cb, 0x09cd, WC_EXTEND),
    (0x09ce, 0x09ce, WC_ALETTER),
    (0x09d7, 0x09d7, WC_EXTEND),
    (0x09dc, 0x09dd, WC_ALETTER),
    (0x09df, 0x09e1, WC_ALETTER),
    (0x09e2, 0x09e3, WC_EXTEND),
    (0x09e6, 0x09ef, WC_NUMERIC),
    (0x09f0, 0x09f1, WC_ALETTER),
    (0x09fc, 0x09fc, WC_ALETTER),
    (0x09fe, 0x09fe, WC_EXTEND),
    (0x0a66, 0x0a6f, WC_NUMERIC),
    (0x0ae6, 0x0aef, WC_NUMERIC),
    (0x0b66, 0x0b6f, WC_NUMERIC),
    (0x0be6, 0x0bef, WC_NUMERIC),
    (0x0c66, 0x0c6f, WC_NUMERIC),
    (0x0ce6, 0x0cef, WC_NUMERIC),
    (0x0d66, 0x0d6f, WC_NUMERIC),
    (0x0de6, 0x0def, WC_NUMERIC),
    (0x0e50, 0x0e59, WC_NUMERIC),
    (0x0ed0, 0x0ed9, WC_NUMERIC),
    (0x0f20, 0x0f29, WC_NUMERIC),
    (0x1040, 0x1049, WC_NUMERIC),
    (0x1090, 0x1099, WC_NUMERIC),
    (0x10a0, 0x10c5, WC_ALETTER),
    (0x10c7, 0x10c7, WC_ALETTER),
    (0x10cd, 0x10cd, WC_ALETTER),
    (0x10d0, 0x10fa, WC_ALETTER),
    (0x10fc, 0x1248, WC_ALETTER),
    (0x124a, 0x124d, WC_ALETTER),
    (0x1250, 0x1256, WC_ALETTER),
    (0x1258, 0x1258, WC_ALETTER),
    (0x125a, 0x125d, WC_ALETTER),
    (0x1260, 0x1288, WC_ALETTER),
    (0x128a, 0x128d, WC_ALETTER),
    (0x1290, 0x12b0, WC_ALETTER),
    (0x12b2, 0x12b5, WC_ALETTER),
    (0x12b8, 0x12be, WC_ALETTER),
    (0x12c0, 0x12c0, WC_ALETTER),
    (0x12c2, 0x12c5, WC_ALETTER),
    (0x12c8, 0x12d6, WC_ALETTER),
    (0x12d8, 0x1310, WC_ALETTER),
    (0x1312, 0x1315, WC_ALETTER),
    (0x1318, 0x135a, WC_ALETTER),
    (0x135d, 0x135f, WC_EXTEND),
    (0x1380, 0x138f, WC_ALETTER),
    (0x13a0, 0x13f5, WC_ALETTER),
    (0x13f8, 0x13fd, WC_ALETTER),
    (0x1401, 0x166c, WC_ALETTER),
    (0x166f, 0x167f, WC_ALETTER),
    (0x1680, 0x1680, WordCat::WSEG_SPACE.bits()),
    (0x1681, 0x169a, WC_ALETTER),
    (0x16a0, 0x16ea, WC_ALETTER),
    (0x16ee, 0x16f8, WC_ALETTER),
    (0x1700, 0x1711, WC_ALETTER),
    (0x1712, 0x1715, WC_EXTEND),
    (0x171f, 0x1731, WC_ALETTER),
    (0x1732, 0x1734, WC_EXTEND),
    (0x1740, 0x1751, WC_ALETTER),
    (0x1752, 0x1753, WC_EXTEND),
    (0x1760, 0x176c, WC_ALETTER),
    (0x176e, 0x1770, WC_ALETTER),
    (0x1772, 0x1773, WC_EXTEND),
    (0x17b4, 0x17d3, WC_EXTEND),
    (0x17dd, 0x17dd, WC_EXTEND),
    (0x17e0, 0x17e9, WC_NUMERIC),
    (0x180b, 0x180d, WC_EXTEND),
    (0x180e, 0x180e, WC_FORMAT),
    (0x180f, 0x180f, WC_EXTEND),
    (0x1810, 0x1819, WC_NUMERIC),
    (0x1820, 0x1878, WC_ALETTER),
    (0x1880, 0x1884, WC_ALETTER),
    (0x1885, 0x1886, WC_EXTEND),
    (0x1887, 0x18a8, WC_ALETTER),
    (0x18a9, 0x18a9, WC_EXTEND),
    (0x18aa, 0x18aa, WC_ALETTER),
    (0x18b0, 0x18f5, WC_ALETTER),
    (0x1900, 0x191e, WC_ALETTER),
    (0x1920, 0x192b, WC_EXTEND),
    (0x1930, 0x193b, WC_EXTEND),
    (0x1946, 0x194f, WC_NUMERIC),
    (0x19d0, 0x19d9, WC_NUMERIC),
    (0x1a00, 0x1a16, WC_ALETTER),
    (0x1a17, 0x1a1b, WC_EXTEND),
    (0x1a80, 0x1a89, WC_NUMERIC),
    (0x1a90, 0x1a99, WC_NUMERIC),
    (0x1ab0, 0x1ace, WC_EXTEND),
    (0x1b50, 0x1b59, WC_NUMERIC),
    (0x1bb0, 0x1bb9, WC_NUMERIC),
    (0x1c40, 0x1c49, WC_NUMERIC),
    (0x1c50, 0x1c59, WC_NUMERIC),
    (0x1dc0, 0x1dff, WC_EXTEND),
    (0x1e00, 0x1f15, WC_ALETTER),
    (0x1f18, 0x1f1d, WC_ALETTER),
    (0x1f20, 0x1f45, WC_ALETTER),
    (0x1f48, 0x1f4d, WC_ALETTER),
    (0x1f50, 0x1f57, WC_ALETTER),
    (0x1f59, 0x1f59, WC_ALETTER),
    (0x1f5b, 0x1f5b, WC_ALETTER),
    (0x1f5d, 0x1f5d, WC_ALETTER),
    (0x1f5f, 0x1f7d, WC_ALETTER),
    (0x1f80, 0x1fb4, WC_ALETTER),
    (0x1fb6, 0x1fbc, WC_ALETTER),
    (0x1fbe, 0x1fbe, WC_ALETTER),
    (0x1fc2, 0x1fc4, WC_ALETTER),
    (0x1fc6, 0x1fcc, WC_ALETTER),
    (0x1fd0, 0x1fd3, WC_ALETTER),
    (0x1fd6, 0x1fdb, WC_ALETTER),
    (0x1fe0, 0x1fec, WC_ALETTER),
    (0x1ff2, 0x1ff4, WC_ALETTER),
    (0x1ff6, 0x1ffc, WC_ALETTER),
    (0x2000, 0x2006, WordCat::WSEG_SPACE.bits()),
    (0x2008, 0x200a, WordCat::WSEG_SPACE.bits()),
    (0x200c, 0x200c, WC_EXTEND),
    (0x200d, 0x200d, WordCat::ZWJ.bits()),
    (0x200e, 0x200f, WC_FORMAT),
    (0x2018, 0x2019, WordCat::MID_NUM_LET.bits()),
    (0x2024, 0x2024, WordCat::MID_NUM_LET.bits()),
    (0x2027, 0x2027, WordCat::MID_LETTER.bits()),
    (0x202a, 0x202e, WC_FORMAT),
    (0x202f, 0x202f, WordCat::EXTEND_NUM_LET.bits()),
    (0x203f, 0x2040, WordCat::EXTEND_NUM_LET.bits()),
    (0x2044, 0x2044, WordCat::MID_NUM.bits()),
    (0x2054, 0x2054, WordCat::EXTEND_NUM_LET.bits()),
    (0x205f, 0x205f, WordCat::WSEG_SPACE.bits()),
    (0x2060, 0x2064, WC_FORMAT),
    (0x2066, 0x206f, WC_FORMAT),
    (0x2071, 0x2071, WC_ALETTER),
    (0x207f, 0x207f, WC_ALETTER),
    (0x2090, 0x209c, WC_ALETTER),
    (0x20d0, 0x20f0, WC_EXTEND),
    (0x2102, 0x2102, WC_ALETTER),
    (0x2107, 0x2107, WC_ALETTER),
    (0x210a, 0x2113, WC_ALETTER),
    (0x2115, 0x2115, WC_ALETTER),
    (0x2119, 0x211d, WC_ALETTER),
    (0x2124, 0x2124, WC_ALETTER),
    (0x2126, 0x2126, WC_ALETTER),
    (0x2128, 0x2128, WC_ALETTER),
    (0x212a, 0x212d, WC_ALETTER),
    (0x212f, 0x2139, WC_ALETTER),
    (0x213c, 0x213f, WC_ALETTER),
    (0x2145, 0x2149, WC_ALETTER),
    (0x214e, 0x214e, WC_ALETTER),
    (0x2160, 0x2188, WC_ALETTER),
    (0x24b6, 0x24e9, WC_ALETTER),
    (0x2c00, 0x2ce4, WC_ALETTER),
    (0x2ceb, 0x2cee, WC_ALETTER),
    (0x2cef, 0x2cf1, WC_EXTEND),
    (0x2cf2, 0x2cf3, WC_ALETTER),
    (0x2d00, 0x2d25, WC_ALETTER),
    (0x2d27, 0x2d27, WC_ALETTER),
    (0x2d2d, 0x2d2d, WC_ALETTER),
    (0x2d30, 0x2d67, WC_ALETTER),
    (0x2d6f, 0x2d6f, WC_ALETTER),
    (0x2d7f, 0x2d7f, WC_EXTEND),
    (0x2d80, 0x2d96, WC_ALETTER),
    (0x2da0, 0x2da6, WC_ALETTER),
    (0x2da8, 0x2dae, WC_ALETTER),
    (0x2db0, 0x2db6, WC_ALETTER),
    (0x2db8, 0x2dbe, WC_ALETTER),
    (0x2dc0, 0x2dc6, WC_ALETTER),
    (0x2dc8, 0x2dce, WC_ALETTER),
    (0x2dd0, 0x2dd6, WC_ALETTER),
    (0x2dd8, 0x2dde, WC_ALETTER),
    (0x2de0, 0x2dff, WC_EXTEND),
    (0x2e2f, 0x2e2f, WC_ALETTER),
    (0x3000, 0x3000, WordCat::WSEG_SPACE.bits()),
    (0x302a, 0x302f, WC_EXTEND),
    (0x3031, 0x3035, WC_KATAKANA),
    (0x3099, 0x309a, WC_EXTEND),
    (0x309b, 0x309c, WC_KATAKANA),
    (0x30a1, 0x30fa, WC_KATAKANA),
    (0x30fc, 0x30ff, WC_KATAKANA),
    (0x3105, 0x312f, WC_ALETTER),
    (0x3131, 0x318e, WC_ALETTER),
    (0x31a0, 0x31bf, WC_ALETTER),
    (0x31f0, 0x31ff, WC_KATAKANA),
    (0x32d0, 0x32fe, WC_KATAKANA),
    (0x3300, 0x3357, WC_KATAKANA),
    (0xa000, 0xa48c, WC_ALETTER),
    (0xa4d0, 0xa4fd, WC_ALETTER),
    (0xa500, 0xa60c, WC_ALETTER),
    (0xa610, 0xa61f, WC_ALETTER),
    (0xa620, 0xa629, WC_NUMERIC),
    (0xa62a, 0xa62b, WC_ALETTER),
    (0xa640, 0xa66e, WC_ALETTER),
    (0xa66f, 0xa672, WC_EXTEND),
    (0xa674, 0xa67d, WC_EXTEND),
    (0xa67f, 0xa69d, WC_ALETTER),
    (0xa69e, 0xa69f, WC_EXTEND),
    (0xa6a0, 0xa6ef, WC_ALETTER),
    (0xa6f0, 0xa6f1, WC_EXTEND),
    (0xa717, 0xa7ca, WC_ALETTER),
    (0xa7d0, 0xa7d1, WC_ALETTER),
    (0xa7d3, 0xa7d3, WC_ALETTER),
    (0xa7d5, 0xa7d9, WC_ALETTER),
    (0xa7f2, 0xa801, WC_ALETTER),
    (0xa802, 0xa802, WC_EXTEND),
    (0xa803, 0xa805, WC_ALETTER),
    (0xa806, 0xa806, WC_EXTEND),
    (0xa807, 0xa80a, WC_ALETTER),
    (0xa80b, 0xa80b, WC_EXTEND),
    (0xa80c, 0xa822, WC_ALETTER),
    (0xa823, 0xa827, WC_EXTEND),
    (0xa840, 0xa873, WC_ALETTER),
    (0xa882, 0xa8b3, WC_ALETTER),
    (0xa8b4, 0xa8c5, WC_EXTEND),
    (0xa8d0, 0xa8d9, WC_NUMERIC),
    (0xa8e0, 0xa8f1, WC_EXTEND),
    (0xa8f2, 0xa8f7, WC_ALETTER),
    (0xa8fb, 0xa8fb, WC_ALETTER),
    (0xa8fd, 0xa8fe, WC_ALETTER),
    (0xa8ff, 0xa8ff, WC_EXTEND),
    (0xa900, 0xa909, WC_NUMERIC),
    (0xa90a, 0xa925, WC_ALETTER),
    (0xa926, 0xa92d, WC_EXTEND),
    (0xa930, 0xa946, WC_ALETTER),
    (0xa947, 0xa953, WC_EXTEND),
    (0xa960, 0xa97c, WC_ALETTER),
    (0xa980, 0xa983, WC_EXTEND),
    (0xa984, 0xa9b2, WC_ALETTER),
    (0xa9b3, 0xa9c0, WC_EXTEND),
    (0xa9cf, 0xa9cf, WC_ALETTER),
    (0xa9d0, 0xa9d9, WC_NUMERIC),
    (0xa9e5, 0xa9e5, WC_EXTEND),
    (0xa9f0, 0xa9f9, WC_NUMERIC),
    (0xaa00, 0xaa28, WC_ALETTER),
    (0xaa29, 0xaa36, WC_EXTEND),
    (0xaa40, 0xaa42, WC_ALETTER),
    (0xaa43, 0xaa43, WC_EXTEND),
    (0xaa44, 0xaa4b, WC_ALETTER),
    (0xaa4c, 0xaa4d, WC_EXTEND),
    (0xaa50, 0xaa59, WC_NUMERIC),
    (0xaa7b, 0xaa7d, WC_EXTEND),
    (0xaab0, 0xaab0, WC_EXTEND),
    (0xaab2, 0xaab4, WC_EXTEND),
    (0xaab7, 0xaab8, WC_EXTEND),
    (0xaabe, 0xaabf, WC_EXTEND),
    (0xaac1, 0xaac1, WC_EXTEND),
    (0xaae0, 0xaaea, WC_ALETTER),
    (0xaaeb, 0xaaef, WC_EXTEND),
    (0xaaf2, 0xaaf4, WC_ALETTER),
    (0xaaf5, 0xaaf6, WC_EXTEND),
    (0xab01, 0xab06, WC_ALETTER),
    (0xab09, 0xab0e, WC_ALETTER),
    (0xab11, 0xab16, WC_ALETTER),
    (0xab20, 0xab26, WC_ALETTER),
    (0xab28, 0xab2e, WC_ALETTER),
    (0xab30, 0xab69, WC_ALETTER),
    (0xab70, 0xabe2, WC_ALETTER),
    (0xabe3, 0xabea, WC_EXTEND),
    (0xabec, 0xabed, WC_EXTEND),
    (0xabf0, 0xabf9, WC_NUMERIC),
    (0xac00, 0xd7a3, WC_ALETTER),
    (0xd7b0, 0xd7c6, WC_ALETTER),
    (0xd7cb, 0xd7fb, WC_ALETTER),
    (0xfb00, 0xfb06, WC_ALETTER),
    (0xfb13, 0xfb17, WC_ALETTER),
    (0xfb1d, 0xfb1d, WordCat::HEBREW_LETTER.bits()),
    (0xfb1e, 0xfb1e, WC_EXTEND),
    (0xfb1f, 0xfb28, WordCat::HEBREW_LETTER.bits()),
    (0xfb2a, 0xfb36, WordCat::HEBREW_LETTER.bits()),
    (0xfb38, 0xfb3c, WordCat::HEBREW_LETTER.bits()),
    (0xfb3e, 0xfb3e, WordCat::HEBREW_LETTER.bits()),
    (0xfb40, 0xfb41, WordCat::HEBREW_LETTER.bits()),
    (0xfb43, 0xfb44, WordCat::HEBREW_LETTER.bits()),
    (0xfb46, 0xfb4f, WordCat::HEBREW_LETTER.bits()),
    (0xfb50, 0xfbb1, WC_ALETTER),
    (0xfbd3, 0xfd3d, WC_ALETTER),
    (0xfd50, 0xfd8f, WC_ALETTER),
    (0xfd92, 0xfdc7, WC_ALETTER),
    (0xfdf0, 0xfdfb, WC_ALETTER),
    (0xfe00, 0xfe0f, WC_EXTEND),
    (0xfe10, 0xfe10, WordCat::MID_NUM.bits()),
    (0xfe13, 0xfe13, WordCat::MID_LETTER.bits()),
    (0xfe14, 0xfe14, WordCat::MID_NUM.bits()),
    (0xfe20, 0xfe2f, WC_EXTEND),
    (0xfe33, 0xfe34, WordCat::EXTEND_NUM_LET.bits()),
    (0xfe4d, 0xfe4f, WordCat::EXTEND_NUM_LET.bits()),
    (0xfe50, 0xfe50, WordCat::MID_NUM.bits()),
    (0xfe52, 0xfe52, WordCat::MID_NUM_LET.bits()),
    (0xfe54, 0xfe54, WordCat::MID_NUM.bits()),
    (0xfe55, 0xfe55, WordCat::MID_LETTER.bits()),
    (0xfe70, 0xfe74, WC_ALETTER),
    (0xfe76, 0xfefc, WC_ALETTER),
    (0xfeff, 0xfeff, WC_FORMAT),
    (0xff07, 0xff07, WordCat::MID_NUM_LET.bits()),
    (0xff0c, 0xff0c, WordCat::MID_NUM.bits()),
    (0xff0e, 0xff0e, WordCat::MID_NUM_LET.bits()),
    (0xff10, 0xff19, WC_NUMERIC),
    (0xff1a, 0xff1a, WordCat::MID_LETTER.bits()),
    (0xff1b, 0xff1b, WordCat::MID_NUM.bits()),
    (0xff21, 0xff3a, WC_ALETTER),
    (0xff3f, 0xff3f, WordCat::EXTEND_NUM_LET.bits()),
    (0xff41, 0xff5a, WC_ALETTER),
    (0xff66, 0xff9d, WC_KATAKANA),
    (0xff9e, 0xff9f, WC_EXTEND),
    (0xffa0, 0xffbe, WC_ALETTER),
    (0xffc2, 0xffc7, WC_ALETTER),
    (0xffca, 0xffcf, WC_ALETTER),
    (0xffd2, 0xffd7, WC_ALETTER),
    (0xffda, 0xffdc, WC_ALETTER),
    (0xfff9, 0xfffb, WC_FORMAT),
    (0x1f1e6, 0x1f1ff, WordCat::RI.bits()),
    (0x1f300, 0x1f3fa, WC_PICT),
    (0x1f3fb, 0x1f3ff, WC_EXTEND),
    (0x1f400, 0x1faff, WC_PICT),
    (0xe0020, 0xe007f, WC_EXTEND),
    (0xe0100, 0xe01ef, WC_EXTEND),
];

const SC_LOWER: u64 = SentenceCat::LOWER.bits();
const SC_UPPER: u64 = SentenceCat::UPPER.bits();
const SC_OLETTER: u64 = SentenceCat::OLETTER.bits();
const SC_CLOSE: u64 = SentenceCat::CLOSE.bits();
const SC_EXTEND: u64 = SentenceCat::EXTEND.bits();

#[rustfmt::skip]
static SENTENCE_RANGES: &[Range] = &[
    (0x0009, 0x0009, SentenceCat::SP.bits()),
    (0x000a, 0x000a, SentenceCat::LF.bits()),
    (0x000b, 0x000c, SentenceCat::SP.bits()),
    (0x000d, 0x000d, SentenceCat::CR.bits()),
    (0x0020, 0x0020, SentenceCat::SP.bits()),
    (0x0021, 0x0021, SentenceCat::STERM.bits()),
    (0x0022, 0x0022, SC_CLOSE),
    (0x0027, 0x0029, SC_CLOSE),
    (0x002c, 0x002d, SentenceCat::SCONTINUE.bits()),
    (0x002e, 0x002e, SentenceCat::ATERM.bits()),
    (0x0030, 0x0039, SentenceCat::NUMERIC.bits()),
    (0x003a, 0x003a, SentenceCat::SCONTINUE.bits()),
    (0x003f, 0x003f, SentenceCat::STERM.bits()),
    (0x0041, 0x005a, SC_UPPER),
    (0x005b, 0x005b, SC_CLOSE),
    (0x005d, 0x005d, SC_CLOSE),
    (0x0061, 0x007a, SC_LOWER),
    (0x007b, 0x007b, SC_CLOSE),
    (0x007d, 0x007d, SC_CLOSE),
    (0x0085, 0x0085, SentenceCat::SEP.bits()),
    (0x00a0, 0x00a0, SentenceCat::SP.bits()),
    (0x00aa, 0x00aa, SC_LOWER),
    (0x00ab, 0x00ab, SC_CLOSE),
    (0x00ad, 0x00ad, SentenceCat::FORMAT.bits()),
    (0x00b5, 0x00b5, SC_LOWER),
    (0x00ba, 0x00ba, SC_LOWER),
    (0x00bb, 0x00bb, SC_CLOSE),
    (0x00c0, 0x00d6, SC_UPPER),
    (0x00d8, 0x00de, SC_UPPER),
    (0x00df, 0x00f6, SC_LOWER),
    (0x00f8, 0x00ff, SC_LOWER),
    (0x0100, 0x0100, SC_UPPER),
    (0x0101, 0x0101, SC_LOWER),
    (0x0102, 0x0102, SC_UPPER),
    (0x0103, 0x0103, SC_LOWER),
    (0x0104, 0x0104, SC_UPPER),
    (0x0105, 0x0105, SC_LOWER),
    (0x0106, 0x0106, SC_UPPER),
    (0x0107, 0x0107, SC_LOWER),
    (0x0108, 0x0130, SC_UPPER),
    (0x0131, 0x0138, SC_LOWER),
    (0x0139, 0x0139, SC_UPPER),
    (0x013a, 0x013a, SC_LOWER),
    (0x0150, 0x0150, SC_UPPER),
    (0x0151, 0x0151, SC_LOWER),
    (0x0152, 0x0152, SC_UPPER),
    (0x0153, 0x0153, SC_LOWER),
    (0x0160, 0x0160, SC_UPPER),
    (0x0161, 0x0161, SC_LOWER),
    (0x0178, 0x0179, SC_UPPER),
    (0x017a, 0x017a, SC_LOWER),
    (0x017b, 0x017b, SC_UPPER),
    (0x017c, 0x017c, SC_LOWER),
    (0x017d, 0x017d, SC_UPPER),
    (0x017e, 0x0180, SC_LOWER),
    (0x0300, 0x036f, SC_EXTEND),
    (0x0370, 0x0373, SC_OLETTER),
    (0x0386, 0x0386, SC_UPPER),
    (0x0388, 0x038a, SC_UPPER),
    (0x038c, 0x038c, SC_UPPER),
    (0x038e, 0x038f, SC_UPPER),
    (0x0390, 0x0390, SC_LOWER),
    (0x0391, 0x03a1, SC_UPPER),
    (0x03a3, 0x03ab, SC_UPPER),
    (0x03ac, 0x03ce, SC_LOWER),
    (0x0400, 0x042f, SC_UPPER),
    (0x0430, 0x045f, SC_LOWER),
    (0x0483, 0x0489, SC_EXTEND),
    (0x0531, 0x0556, SC_UPPER),
    (0x0561, 0x0588, SC_LOWER),
    (0x0589, 0x0589, SentenceCat::STERM.bits()),
    (0x0591, 0x05bd, SC_EXTEND),
    (0x05bf, 0x05bf, SC_EXTEND),
    (0x05c1, 0x05c2, SC_EXTEND),
    (0x05c4, 0x05c5, SC_EXTEND),
    (0x05c7, 0x05c7, SC_EXTEND),
    (0x05d0, 0x05ea, SC_OLETTER),
    (0x05ef, 0x05f2, SC_OLETTER),
    (0x0600, 0x0605, SentenceCat::FORMAT.bits()),
    (0x060c, 0x060d, SentenceCat::SCONTINUE.bits()),
    (0x0610, 0x061a, SC_EXTEND),
    (0x061c, 0x061c, SentenceCat::FORMAT.bits()),
    (0x061d, 0x061f, SentenceCat::STERM.bits()),
    (0x0620, 0x064a, SC_OLETTER),
    (0x064b, 0x065f, SC_EXTEND),
    (0x0660, 0x0669, SentenceCat::NUMERIC.bits()),
    (0x066e, 0x066f, SC_OLETTER),
    (0x0670, 0x0670, SC_EXTEND),
    (0x0671, 0x06d3, SC_OLETTER),
    (0x06d4, 0x06d4, SentenceCat::STERM.bits()),
    (0x06d5, 0x06d5, SC_OLETTER),
    (0x06d6, 0x06dc, SC_EXTEND),
    (0x06dd, 0x06dd, SentenceCat::FORMAT.bits()),
    (0x06df, 0x06e4, SC_EXTEND),
    (0x06e5, 0x06e6, SC_OLETTER),
    (0x06e7, 0x06e8, SC_EXTEND),
    (0x06ea, 0x06ed, SC_EXTEND),
    (0x06ee, 0x06ef, SC_OLETTER),
    (0x06f0, 0x06f9, SentenceCat::NUMERIC.bits()),
    (0x06fa, 0x06fc, SC_OLETTER),
    (0x0700, 0x0702, SentenceCat::STERM.bits()),
    (0x0710, 0x0710, SC_OLETTER),
    (0x0711, 0x0711, SC_EXTEND),
    (0x0712, 0x072f, SC_OLETTER),
    (0x0730, 0x074a, SC_EXTEND),
    (0x074d, 0x07a5, SC_OLETTER),
    (0x07a6, 0x07b0, SC_EXTEND),
    (0x0900, 0x0903, SC_EXTEND),
    (0x0904, 0x0939, SC_OLETTER),
    (0x093a, 0x093c, SC_EXTEND),
    (0x093d, 0x093d, SC_OLETTER),
    (0x093e, 0x094f, SC_EXTEND),
    (0x0950, 0x0950, SC_OLETTER),
    (0x0951, 0x0957, SC_EXTEND),
    (0x0958, 0x0961, SC_OLETTER),
    (0x0964, 0x0965, SentenceCat::STERM.bits()),
    (0x0966, 0x096f, SentenceCat::NUMERIC.bits()),
    (0x0e01, 0x0e30, SC_OLETTER),
    (0x0e31, 0x0e31, SC_EXTEND),
    (0x0e32, 0x0e33, SC_OLETTER),
    (0x0e34, 0x0e3a, SC_EXTEND),
    (0x0e40, 0x0e46, SC_OLETTER),
    (0x0e47, 0x0e4e, SC_EXTEND),
    (0x0e50, 0x0e59, SentenceCat::NUMERIC.bits()),
    (0x104a, 0x104b, SentenceCat::STERM.bits()),
    (0x10a0, 0x10c5, SC_UPPER),
    (0x10d0, 0x10fa, SC_OLETTER),
    (0x1100, 0x1159, SC_OLETTER),
    (0x115f, 0x11a2, SC_OLETTER),
    (0x11a8, 0x11f9, SC_OLETTER),
    (0x1362, 0x1362, SentenceCat::STERM.bits()),
    (0x1367, 0x1368, SentenceCat::STERM.bits()),
    (0x166e, 0x166e, SentenceCat::STERM.bits()),
    (0x1680, 0x1680, SentenceCat::SP.bits()),
    (0x1735, 0x1736, SentenceCat::STERM.bits()),
    (0x17d4, 0x17d5, SentenceCat::STERM.bits()),
    (0x1803, 0x1803, SentenceCat::STERM.bits()),
    (0x1809, 0x1809, SentenceCat::STERM.bits()),
    (0x1950, 0x196d, SC_OLETTER),
    (0x1970, 0x1974, SC_OLETTER),
    (0x1e00, 0x1e00, SC_UPPER),
    (0x1e01, 0x1e01, SC_LOWER),
    (0x1e02, 0x1e02, SC_UPPER),
    (0x1e03, 0x1e03, SC_LOWER),
    (0x1e04, 0x1e04, SC_UPPER),
    (0x1e05, 0x1e05, SC_LOWER),
    (0x2000, 0x200a, SentenceCat::SP.bits()),
    (0x200c, 0x200d, SC_EXTEND),
    (0x200e, 0x200f, SentenceCat::FORMAT.bits()),
    (0x2013, 0x2014, SentenceCat::SCONTINUE.bits()),
    (0x2018, 0x201f, SC_CLOSE),
    (0x2024, 0x2024, SentenceCat::ATERM.bits()),
    (0x2028, 0x2029, SentenceCat::SEP.bits()),
    (0x202a, 0x202e, SentenceCat::FORMAT.bits()),
    (0x2039, 0x203a, SC_CLOSE),
    (0x203c, 0x203d, SentenceCat::STERM.bits()),
    (0x2045, 0x2046, SC_CLOSE),
    (0x2047, 0x2049, SentenceCat::STERM.bits()),
    (0x205f, 0x205f, SentenceCat::SP.bits()),
    (0x2060, 0x2064, SentenceCat::FORMAT.bits()),
    (0x207d, 0x207e, SC_CLOSE),
    (0x208d, 0x208e, SC_CLOSE),
    (0x20d0, 0x20f0, SC_EXTEND),
    (0x2329, 0x232a, SC_CLOSE),
    (0x275b, 0x2760, SC_CLOSE),
    (0x2768, 0x2775, SC_CLOSE),
    (0x27e6, 0x27ef, SC_CLOSE),
    (0x2983, 0x2998, SC_CLOSE),
    (0x29d8, 0x29db, SC_CLOSE),
    (0x29fc, 0x29fd, SC_CLOSE),
    (0x2e00, 0x2e0d, SC_CLOSE),
    (0x2e1c, 0x2e1d, SC_CLOSE),
    (0x2e20, 0x2e29, SC_CLOSE),
    (0x2e2e, 0x2e2e, SentenceCat::STERM.bits()),
    (0x3000, 0x3000, SentenceCat::SP.bits()),
    (0x3001, 0x3001, SentenceCat::SCONTINUE.bits()),
    (0x3002, 0x3002, SentenceCat::STERM.bits()),
    (0x3008, 0x3011, SC_CLOSE),
    (0x3014, 0x301b, SC_CLOSE),
    (0x301d, 0x301f, SC_CLOSE),
    (0x3041, 0x3096, SC_OLETTER),
    (0x3099, 0x309a, SC_EXTEND),
    (0x309d, 0x309f, SC_OLETTER),
    (0x30a1, 0x30fa, SC_OLETTER),
    (0x30fc, 0x30ff, SC_OLETTER),
    (0x3105, 0x312f, SC_OLETTER),
    (0x3131, 0x318e, SC_OLETTER),
    (0x3400, 0x4dbf, SC_OLETTER),
    (0x4e00, 0x9fff, SC_OLETTER),
    (0xa015, 0xa48c, SC_OLETTER),
    (0xa4ff, 0xa60c, SC_OLETTER),
    (0xa60e, 0xa60f, SentenceCat::STERM.bits()),
    (0xa66f, 0xa672, SC_EXTEND),
    (0xa6f3, 0xa6f3, SentenceCat::STERM.bits()),
    (0xa6f7, 0xa6f7, SentenceCat::STERM.bits()),
    (0xa876, 0xa877, SentenceCat::STERM.bits()),
    (0xa8ce, 0xa8cf, SentenceCat::STERM.bits()),
    (0xa92f, 0xa92f, SentenceCat::STERM.bits()),
    (0xa9c8, 0xa9c9, SentenceCat::STERM.bits()),
    (0xaa5d, 0xaa5f, SentenceCat::STERM.bits()),
    (0xaaf0, 0xaaf1, SentenceCat::STERM.bits()),
    (0xabeb, 0xabeb, SentenceCat::STERM.bits()),
    (0xac00, 0xd7a3, SC_OLETTER),
    (0xfe10, 0xfe11, SentenceCat::SCONTINUE.bits()),
    (0xfe13, 0xfe13, SentenceCat::SCONTINUE.bits()),
    (0xfe17, 0xfe18, SC_CLOSE),
    (0xfe31, 0xfe32, SentenceCat::SCONTINUE.bits()),
    (0xfe35, 0xfe44, SC_CLOSE),
    (0xfe47, 0xfe48, SC_CLOSE),
    (0xfe50, 0xfe51, SentenceCat::SCONTINUE.bits()),
    (0xfe52, 0xfe52, SentenceCat::ATERM.bits()),
    (0xfe55, 0xfe55, SentenceCat::SCONTINUE.bits()),
    (0xfe56, 0xfe57, SentenceCat::STERM.bits()),
    (0xfe58, 0xfe58, SentenceCat::SCONTINUE.bits()),
    (0xfe59, 0xfe5e, SC_CLOSE),
    (0xfe63, 0xfe63, SentenceCat::SCONTINUE.bits()),
    (0xfeff, 0xfeff, SentenceCat::FORMAT.bits()),
    (0xff01, 0xff01, SentenceCat::STERM.bits()),
    (0xff08, 0xff09, SC_CLOSE),
    (0xff0c, 0xff0d, SentenceCat::SCONTINUE.bits()),
    (0xff0e, 0xff0e, SentenceCat::ATERM.bits()),
    (0xff10, 0xff19, SentenceCat::NUMERIC.bits()),
    (0xff1a, 0xff1a, SentenceCat::SCONTINUE.bits()),
    (0xff1f, 0xff1f, SentenceCat::STERM.bits()),
    (0xff21, 0xff3a, SC_UPPER),
    (0xff3b, 0xff3b, SC_CLOSE),
    (0xff3d, 0xff3d, SC_CLOSE),
    (0xff41, 0xff5a, SC_LOWER),
    (0xff5b, 0xff5b, SC_CLOSE),
    (0xff5d, 0xff5d, SC_CLOSE),
    (0xff61, 0xff61, SentenceCat::STERM.bits()),
    (0xff64, 0xff64, SentenceCat::SCONTINUE.bits()),
    (0xff66, 0xff9d, SC_OLETTER),
    (0xff9e, 0xff9f, SC_EXTEND),
    (0xfff9, 0xfffb, SentenceCat::FORMAT.bits()),
];

const LC_CM: u64 = LineCat::CM.bits();
const LC_ID: u64 = LineCat::ID.bits();
const LC_NS: u64 = LineCat::NS.bits();
const LC_PR: u64 = LineCat::PR.bits();
const LC_PO: u64 = LineCat::PO.bits();
const LC_BA: u64 = LineCat::BA.bits();
const LC_QU: u64 = LineCat::QU.bits();

#[rustfmt::skip]
static LINE_RANGES: &[Range] = &[
    (0x0009, 0x0009, LC_BA),
    (0x000a, 0x000a, LineCat::LF.bits()),
    (0x000b, 0x000c, LineCat::BK.bits()),
    (0x000d, 0x000d, LineCat::CR.bits()),
    (0x0020, 0x0020, LineCat::SP.bits()),
    (0x0021, 0x0021, LineCat::EX.bits()),
    (0x0022, 0x0022, LC_QU),
    (0x0024, 0x0024, LC_PR),
    (0x0025, 0x0025, LC_PO),
    (0x0027, 0x0027, LC_QU),
    (0x0028, 0x0028, LineCat::OP.bits()),
    (0x0029, 0x0029, LineCat::CP.bits()),
    (0x002b, 0x002b, LC_PR),
    (0x002c, 0x002c, LineCat::IS.bits()),
    (0x002d, 0x002d, LineCat::HY.bits()),
    (0x002e, 0x002e, LineCat::IS.bits()),
    (0x002f, 0x002f, LineCat::SY.bits()),
    (0x0030, 0x0039, LineCat::NU.bits()),
    (0x003a, 0x003b, LineCat::IS.bits()),
    (0x003f, 0x003f, LineCat::EX.bits()),
    (0x005b, 0x005b, LineCat::OP.bits()),
    (0x005c, 0x005c, LC_PR),
    (0x005d, 0x005d, LineCat::CP.bits()),
    (0x007b, 0x007b, LineCat::OP.bits()),
    (0x007d, 0x007d, LineCat::CL.bits()),
    (0x0085, 0x0085, LineCat::NL.bits()),
    (0x00a0, 0x00a0, LineCat::GL.bits()),
    (0x00a1, 0x00a1, LineCat::OP.bits()),
    (0x00a2, 0x00a5, LC_PR),
    (0x00ab, 0x00ab, LC_QU | LineCat::QU_PI.bits()),
    (0x00ad, 0x00ad, LC_BA),
    (0x00b0, 0x00b0, LC_PO),
    (0x00b1, 0x00b1, LC_PR),
    (0x00b4, 0x00b4, LineCat::BB.bits()),
    (0x00bb, 0x00bb, LC_QU | LineCat::QU_PF.bits()),
    (0x00bf, 0x00bf, LineCat::OP.bits()),
    (0x0300, 0x036f, LC_CM),
    (0x0483, 0x0489, LC_CM),
    (0x0591, 0x05bd, LC_CM),
    (0x05bf, 0x05bf, LC_CM),
    (0x05c1, 0x05c2, LC_CM),
    (0x05c4, 0x05c5, LC_CM),
    (0x05c7, 0x05c7, LC_CM),
    (0x05d0, 0x05ea, LineCat::HL.bits()),
    (0x05ef, 0x05f2, LineCat::HL.bits()),
    (0x0600, 0x0605, LC_CM),
    (0x0610, 0x061a, LC_CM),
    (0x061c, 0x061c, LC_CM),
    (0x064b, 0x065f, LC_CM),
    (0x0670, 0x0670, LC_CM),
    (0x06d6, 0x06dc, LC_CM),
    (0x06df, 0x06e4, LC_CM),
    (0x06e7, 0x06e8, LC_CM),
    (0x06ea, 0x06ed, LC_CM),
    (0x0900, 0x0903, LC_CM),
    (0x093a, 0x093c, LC_CM),
    (0x093e, 0x094f, LC_CM),
    (0x0951, 0x0957, LC_CM),
    (0x0962, 0x0963, LC_CM),
    (0x0964, 0x0965, LC_BA),
    (0x0e31, 0x0e31, LC_CM),
    (0x0e34, 0x0e3a, LC_CM),
    (0x0e47, 0x0e4e, LC_CM),
    (0x0e5a, 0x0e5b, LC_BA),
    (0x0f0b, 0x0f0b, LC_BA),
    (0x0f14, 0x0f14, LineCat::EX.bits()),
    (0x0f34, 0x0f34, LC_BA),
    (0x0f7f, 0x0f7f, LC_BA),
    (0x1100, 0x115f, LineCat::JL.bits()),
    (0x1160, 0x11a7, LineCat::JV.bits()),
    (0x11a8, 0x11ff, LineCat::JT.bits()),
    (0x1680, 0x1680, LC_BA),
    (0x16eb, 0x16ed, LC_BA),
    (0x17d4, 0x17d5, LC_BA),
    (0x17d6, 0x17d6, LC_NS),
    (0x17d8, 0x17d8, LC_BA),
    (0x17da, 0x17da, LC_BA),
    (0x1802, 0x1803, LineCat::EX.bits()),
    (0x1804, 0x1805, LC_BA),
    (0x1806, 0x1806, LineCat::BB.bits()),
    (0x1808, 0x1809, LineCat::EX.bits()),
    (0x180b, 0x180d, LC_CM),
    (0x180e, 0x180e, LineCat::GL.bits()),
    (0x180f, 0x180f, LC_CM),
    (0x1dc0, 0x1dff, LC_CM),
    (0x2000, 0x2006, LC_BA),
    (0x2007, 0x2007, LineCat::GL.bits()),
    (0x2008, 0x200a, LC_BA),
    (0x200b, 0x200b, LineCat::ZW.bits()),
    (0x200c, 0x200c, LC_CM),
    (0x200d, 0x200d, LineCat::ZWJ.bits()),
    (0x200e, 0x200f, LC_CM),
    (0x2010, 0x2010, LC_BA),
    (0x2012, 0x2013, LC_BA),
    (0x2014, 0x2014, LineCat::B2.bits()),
    (0x2018, 0x2018, LC_QU | LineCat::QU_PI.bits()),
    (0x2019, 0x2019, LC_QU | LineCat::QU_PF.bits()),
    (0x201a, 0x201a, LineCat::OP.bits()),
    (0x201b, 0x201c, LC_QU | LineCat::QU_PI.bits()),
    (0x201d, 0x201d, LC_QU | LineCat::QU_PF.bits()),
    (0x201e, 0x201e, LineCat::OP.bits()),
    (0x201f, 0x201f, LC_QU | LineCat::QU_PI.bits()),
    (0x2024, 0x2026, LineCat::IN.bits()),
    (0x2027, 0x2027, LC_BA),
    (0x2028, 0x2029, LineCat::BK.bits()),
    (0x202a, 0x202e, LC_CM),
    (0x202f, 0x202f, LineCat::GL.bits()),
    (0x2030, 0x2037, LC_PO),
    (0x2039, 0x2039, LC_QU | LineCat::QU_PI.bits()),
    (0x203a, 0x203a, LC_QU | LineCat::QU_PF.bits()),
    (0x203c, 0x203d, LC_NS),
    (0x2044, 0x2044, LineCat::IS.bits()),
    (0x2045, 0x2045, LineCat::OP.bits()),
    (0x2046, 0x2046, LineCat::CL.bits()),
    (0x2047, 0x2049, LC_NS),
    (0x2056, 0x2056, LC_BA),
    (0x2058, 0x205b, LC_BA),
    (0x205d, 0x205e, LC_BA),
    (0x205f, 0x205f, LC_BA),
    (0x2060, 0x2060, LineCat::WJ.bits()),
    (0x2061, 0x2064, LC_CM),
    (0x2066, 0x206f, LC_CM),
    (0x207d, 0x207d, LineCat::OP.bits()),
    (0x207e, 0x207e, LineCat::CL.bits()),
    (0x208d, 0x208d, LineCat::OP.bits()),
    (0x208e, 0x208e, LineCat::CL.bits()),
    (0x20a0, 0x20bf, LC_PR),
    (0x20d0, 0x20f0, LC_CM),
    (0x2103, 0x2103, LC_PO),
    (0x2109, 0x2109, LC_PO),
    (0x2116, 0x2116, LC_PR),
    (0x2212, 0x2213, LC_PR),
    (0x2329, 0x2329, LineCat::OP.bits()),
    (0x232a, 0x232a, LineCat::CL.bits()),
    (0x2500, 0x25ff, LineCat::AL.bits()),
    (0x2e80, 0x2fff, LC_ID),
    (0x3000, 0x3000, LC_BA),
    (0x3001, 0x3002, LineCat::CL.bits()),
    (0x3005, 0x3005, LC_NS),
    (0x3008, 0x3008, LineCat::OP.bits()),
    (0x3009, 0x3009, LineCat::CL.bits()),
    (0x300a, 0x300a, LineCat::OP.bits()),
    (0x300b, 0x300b, LineCat::CL.bits()),
    (0x300c, 0x300c, LineCat::OP.bits()),
    (0x300d, 0x300d, LineCat::CL.bits()),
    (0x300e, 0x300e, LineCat::OP.bits()),
    (0x300f, 0x300f, LineCat::CL.bits()),
    (0x3010, 0x3010, LineCat::OP.bits()),
    (0x3011, 0x3011, LineCat::CL.bits()),
    (0x3014, 0x3014, LineCat::OP.bits()),
    (0x3015, 0x3015, LineCat::CL.bits()),
    (0x3016, 0x3016, LineCat::OP.bits()),
    (0x3017, 0x3017, LineCat::CL.bits()),
    (0x3018, 0x3018, LineCat::OP.bits()),
    (0x3019, 0x3019, LineCat::CL.bits()),
    (0x301a, 0x301a, LineCat::OP.bits()),
    (0x301b, 0x301b, LineCat::CL.bits()),
    (0x301c, 0x301c, LC_NS),
    (0x301d, 0x301d, LineCat::OP.bits()),
    (0x301e, 0x301f, LineCat::CL.bits()),
    (0x3021, 0x3029, LC_ID),
    (0x302a, 0x302f, LC_CM),
    (0x3030, 0x303a, LC_ID),
    (0x303b, 0x303c, LC_NS),
    (0x303d, 0x303f, LC_ID),
    (0x3041, 0x3041, LC_NS),
    (0x3042, 0x3042, LC_ID),
    (0x3043, 0x3043, LC_NS),
    (0x3044, 0x3044, LC_ID),
    (0x3045, 0x3045, LC_NS),
    (0x3046, 0x3046, LC_ID),
    (0x3047, 0x3047, LC_NS),
    (0x3048, 0x3048, LC_ID),
    (0x3049, 0x3049, LC_NS),
    (0x304a, 0x3062, LC_ID),
    (0x3063, 0x3063, LC_NS),
    (0x3064, 0x3082, LC_ID),
    (0x3083, 0x3083, LC_NS),
    (0x3084, 0x3084, LC_ID),
    (0x3085, 0x3085, LC_NS),
    (0x3086, 0x3086, LC_ID),
    (0x3087, 0x3087, LC_NS),
    (0x3088, 0x308d, LC_ID),
    (0x308e, 0x308e, LC_NS),
    (0x308f, 0x3094, LC_ID),
    (0x3095, 0x3096, LC_NS),
    (0x3099, 0x309a, LC_CM),
    (0x309b, 0x309e, LC_NS),
    (0x309f, 0x30a0, LC_ID),
    (0x30a1, 0x30a1, LC_NS),
    (0x30a2, 0x30a2, LC_ID),
    (0x30a3, 0x30a3, LC_NS),
    (0x30a4, 0x30a4, LC_ID),
    (0x30a5, 0x30a5, LC_NS),
    (0x30a6, 0x30a6, LC_ID),
    (0x30a7, 0x30a7, LC_NS),
    (0x30a8, 0x30a8, LC_ID),
    (0x30a9, 0x30a9, LC_NS),
    (0x30aa, 0x30c2, LC_ID),
    (0x30c3, 0x30c3, LC_NS),
    (0x30c4, 0x30e2, LC_ID),
    (0x30e3, 0x30e3, LC_NS),
    (0x30e4, 0x30e4, LC_ID),
    (0x30e5, 0x30e5, LC_NS),
    (0x30e6, 0x30e6, LC_ID),
    (0x30e7, 0x30e7, LC_NS),
    (0x30e8, 0x30ed, LC_ID),
    (0x30ee, 0x30ee, LC_NS),
    (0x30ef, 0x30f4, LC_ID),
    (0x30f5, 0x30f6, LC_NS),
    (0x30f7, 0x30fb, LC_ID),
    (0x30fc, 0x30fc, LC_NS),
    (0x30fd, 0x30ff, LC_ID),
    (0x3105, 0x312f, LC_ID),
    (0x3131, 0x318e, LC_ID),
    (0x3190, 0x31bf, LC_ID),
    (0x31c0, 0x31ef, LC_ID),
    (0x31f0, 0x31ff, LC_NS),
    (0x3200, 0x33ff, LC_ID),
    (0x3400, 0x4dbf, LC_ID),
    (0x4e00, 0x9fff, LC_ID),
    (0xa000, 0xa48c, LC_ID),
    (0xa490, 0xa4c6, LC_ID),
    (0xa960, 0xa97c, LineCat::JL.bits()),
    (0xd7b0, 0xd7c6, LineCat::JV.bits()),
    (0xd7cb, 0xd7fb, LineCat::JT.bits()),
    (0xfb1e, 0xfb1e, LC_CM),
    (0xfd3e, 0xfd3e, LineCat::CL.bits()),
    (0xfd3f, 0xfd3f, LineCat::OP.bits()),
    (0xfdfc, 0xfdfc, LC_PO),
    (0xfe00, 0xfe0f, LC_CM),
    (0xfe10, 0xfe10, LineCat::IS.bits()),
    (0xfe11, 0xfe12, LineCat::CL.bits()),
    (0xfe13, 0xfe14, LineCat::IS.bits()),
    (0xfe15, 0xfe16, LineCat::EX.bits()),
    (0xfe17, 0xfe17, LineCat::OP.bits()),
    (0xfe18, 0xfe18, LineCat::CL.bits()),
    (0xfe19, 0xfe19, LineCat::IN.bits()),
    (0xfe20, 0xfe2f, LC_CM),
    (0xfe35, 0xfe35, LineCat::OP.bits()),
    (0xfe36, 0xfe36, LineCat::CL.bits()),
    (0xfe37, 0xfe37, LineCat::OP.bits()),
    (0xfe38, 0xfe38, LineCat::CL.bits()),
    (0xfe39, 0xfe39, LineCat::OP.bits()),
    (0xfe3a, 0xfe3a, LineCat::CL.bits()),
    (0xfe3b, 0xfe3b, LineCat::OP.bits()),
    (0xfe3c, 0xfe3c, LineCat::CL.bits()),
    (0xfe3d, 0xfe3d, LineCat::OP.bits()),
    (0xfe3e, 0xfe3e, LineCat::CL.bits()),
    (0xfe3f, 0xfe3f, LineCat::OP.bits()),
    (0xfe40, 0xfe40, LineCat::CL.bits()),
    (0xfe41, 0xfe41, LineCat::OP.bits()),
    (0xfe42, 0xfe42, LineCat::CL.bits()),
    (0xfe43, 0xfe43, LineCat::OP.bits()),
    (0xfe44, 0xfe44, LineCat::CL.bits()),
    (0xfe47, 0xfe47, LineCat::OP.bits()),
    (0xfe48, 0xfe48, LineCat::CL.bits()),
    (0xfe50, 0xfe50, LineCat::CL.bits()),
    (0xfe52, 0xfe52, LineCat::CL.bits()),
    (0xfe54, 0xfe55, LC_NS),
    (0xfe56, 0xfe57, LineCat::EX.bits()),
    (0xfe58, 0xfe58, LineCat::B2.bits()),
    (0xfe59, 0xfe59, LineCat::OP.bits()),
    (0xfe5a, 0xfe5a, LineCat::CL.bits()),
    (0xfe5b, 0xfe5b, LineCat::OP.bits()),
    (0xfe5c, 0xfe5c, LineCat::CL.bits()),
    (0xfe5d, 0xfe5d, LineCat::OP.bits()),
    (0xfe5e, 0xfe5e, LineCat::CL.bits()),
    (0xfe69, 0xfe69, LC_PR),
    (0xfe6a, 0xfe6a, LC_PO),
    (0xfeff, 0xfeff, LineCat::WJ.bits()),
    (0xff01, 0xff01, LineCat::EX.bits()),
    (0xff04, 0xff04, LC_PR),
    (0xff05, 0xff05, LC_PO),
    (0xff08, 0xff08, LineCat::OP.bits()),
    (0xff09, 0xff09, LineCat::CL.bits()),
    (0xff0c, 0xff0c, LineCat::CL.bits()),
    (0xff0e, 0xff0e, LineCat::CL.bits()),
    (0xff1a, 0xff1b, LC_NS),
    (0xff1f, 0xff1f, LineCat::EX.bits()),
    (0xff3b, 0xff3b, LineCat::OP.bits()),
    (0xff3d, 0xff3d, LineCat::CL.bits()),
    (0xff5b, 0xff5b, LineCat::OP.bits()),
    (0xff5d, 0xff5d, LineCat::CL.bits()),
    (0xff5f, 0xff5f, LineCat::OP.bits()),
    (0xff60, 0xff60, LineCat::CL.bits()),
    (0xff61, 0xff61, LineCat::CL.bits()),
    (0xff62, 0xff62, LineCat::OP.bits()),
    (0xff63, 0xff64, LineCat::CL.bits()),
    (0xff65, 0xff65, LC_NS),
    (0xff66, 0xff70, LC_ID),
    (0xff71, 0xff9d, LC_ID),
    (0xff9e, 0xff9f, LC_NS),
    (0xffa0, 0xffdc, LC_ID),
    (0xffe0, 0xffe0, LC_PO),
    (0xffe1, 0xffe1, LC_PR),
    (0xffe5, 0xffe6, LC_PR),
    (0xfffc, 0xfffc, LineCat::CB.bits()),
    (0x1f000, 0x1f0ff, LC_ID),
    (0x1f100, 0x1f1e5, LC_ID),
    (0x1f1e6, 0x1f1ff, LineCat::RI.bits()),
    (0x1f200, 0x1f2ff, LC_ID),
    (0x1f300, 0x1f384, LC_ID),
    (0x1f385, 0x1f385, LineCat::EB.bits()),
    (0x1f386, 0x1f3c1, LC_ID),
    (0x1f3c2, 0x1f3c4, LineCat::EB.bits()),
    (0x1f3c5, 0x1f3c6, LC_ID),
    (0x1f3c7, 0x1f3c7, LineCat::EB.bits()),
    (0x1f3c8, 0x1f3c9, LC_ID),
    (0x1f3ca, 0x1f3cc, LineCat::EB.bits()),
    (0x1f3cd, 0x1f3fa, LC_ID),
    (0x1f3fb, 0x1f3ff, LineCat::EM.bits()),
    (0x1f400, 0x1f441, LC_ID),
    (0x1f442, 0x1f443, LineCat::EB.bits()),
    (0x1f444, 0x1f445, LC_ID),
    (0x1f446, 0x1f450, LineCat::EB.bits()),
    (0x1f451, 0x1f465, LC_ID),
    (0x1f466, 0x1f478, LineCat::EB.bits()),
    (0x1f479, 0x1f47b, LC_ID),
    (0x1f47c, 0x1f47c, LineCat::EB.bits()),
    (0x1f47d, 0x1f480, LC_ID),
    (0x1f481, 0x1f483, LineCat::EB.bits()),
    (0x1f484, 0x1f484, LC_ID),
    (0x1f485, 0x1f487, LineCat::EB.bits()),
    (0x1f488, 0x1f57f, LC_ID),
    (0x1f580, 0x1f5ff, LC_ID),
    (0x1f600, 0x1f64f, LC_ID),
    (0x1f650, 0x1f91d, LC_ID),
    (0x1f91e, 0x1f91f, LineCat::EB.bits()),
    (0x1f920, 0x1f925, LC_ID),
    (0x1f926, 0x1f926, LineCat::EB.bits()),
    (0x1f927, 0x1f93c, LC_ID),
    (0x1f93d, 0x1f93e, LineCat::EB.bits()),
    (0x1f93f, 0x1f9d0, LC_ID),
    (0x1f9d1, 0x1f9dd, LineCat::EB.bits()),
    (0x1f9de, 0x1faff, LC_ID),
    (0x20000, 0x2fffd, LC_ID),
    (0x30000, 0x3fffd, LC_ID),
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grapheme_classification() {
        assert_eq!(grapheme_category('a'), GraphemeCat::OTHER.bits());
        assert_eq!(grapheme_category('\u{301}'), GraphemeCat::EXTEND.bits());
        assert_eq!(grapheme_category('\r'), GraphemeCat::CR.bits());
        assert_eq!(grapheme_category('\n'), GraphemeCat::LF.bits());
        assert_eq!(grapheme_category('\u{200d}'), GraphemeCat::ZWJ.bits());
        assert_eq!(grapheme_category('\u{1f1e6}'), GraphemeCat::RI.bits());
        assert_eq!(grapheme_category('😀'), GraphemeCat::EXT_PICT.bits());
    }

    #[test]
    fn test_hangul_is_arithmetic() {
        // GA (U+AC00) is LV, GAG (U+AC01) is LVT
        assert_eq!(grapheme_category('\u{ac00}'), GraphemeCat::HANGUL_LV.bits());
        assert_eq!(grapheme_category('\u{ac01}'), GraphemeCat::HANGUL_LVT.bits());
        assert_eq!(grapheme_category('\u{1100}'), GraphemeCat::HANGUL_L.bits());
        assert_eq!(grapheme_category('\u{1160}'), GraphemeCat::HANGUL_V.bits());
        assert_eq!(grapheme_category('\u{11a8}'), GraphemeCat::HANGUL_T.bits());
    }

    #[test]
    fn test_word_classification() {
        assert_eq!(word_category('a'), WordCat::ALETTER.bits());
        assert_eq!(word_category('7'), WordCat::NUMERIC.bits());
        assert_eq!(word_category('_'), WordCat::EXTEND_NUM_LET.bits());
        assert_eq!(word_category('.'), WordCat::MID_NUM_LET.bits());
        assert_eq!(word_category(':'), WordCat::MID_LETTER.bits());
        assert_eq!(word_category(' '), WordCat::WSEG_SPACE.bits());
        assert_eq!(word_category('\u{30a2}'), WordCat::KATAKANA.bits());
        assert_eq!(word_category('\u{05d0}'), WordCat::HEBREW_LETTER.bits());
        // ideographs take no word category
        assert_eq!(word_category('中'), WordCat::OTHER.bits());
    }

    #[test]
    fn test_sentence_classification() {
        assert_eq!(sentence_category('a'), SentenceCat::LOWER.bits());
        assert_eq!(sentence_category('A'), SentenceCat::UPPER.bits());
        assert_eq!(sentence_category('.'), SentenceCat::ATERM.bits());
        assert_eq!(sentence_category('!'), SentenceCat::STERM.bits());
        assert_eq!(sentence_category(')'), SentenceCat::CLOSE.bits());
        assert_eq!(sentence_category(','), SentenceCat::SCONTINUE.bits());
    }

    #[test]
    fn test_line_classification() {
        assert_eq!(line_category(' '), LineCat::SP.bits());
        assert_eq!(line_category('-'), LineCat::HY.bits());
        assert_eq!(line_category('a'), LineCat::AL.bits());
        assert_eq!(line_category('5'), LineCat::NU.bits());
        assert_eq!(line_category('('), LineCat::OP.bits());
        assert_eq!(line_category(')'), LineCat::CP.bits());
        assert_eq!(line_category('中'), LineCat::ID.bits());
        assert_eq!(line_category('\u{00a0}'), LineCat::GL.bits());
        assert!(line_category('\u{2018}') & LineCat::QU_PI.bits() != 0);
        assert!(line_category('\u{2019}') & LineCat::QU_PF.bits() != 0);
    }

    #[test]
    fn test_tables_are_sorted_and_disjoint() {
        for table in [GRAPHEME_RANGES, WORD_RANGES, SENTENCE_RANGES, LINE_RANGES] {
            for pair in table.windows(2) {
                assert!(pair[0].1 < pair[1].0, "overlap at {:#x}..{:#x}", pair[0].1, pair[1].0);
            }
            for &(start, end, _) in table {
                assert!(start <= end);
            }
        }
    }
}
