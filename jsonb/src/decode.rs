use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::tag::{read_header, ElementType};
use crate::value::JsonValue;
use crate::JSONB_MAX;

pub type IntHook = Box<dyn Fn(&str) -> CResult<JsonValue>>;
pub type FloatHook = Box<dyn Fn(&str) -> CResult<JsonValue>>;
pub type ArrayHook = Box<dyn Fn(Vec<JsonValue>) -> CResult<JsonValue>>;
pub type ObjectHook = Box<dyn Fn(JsonValue) -> CResult<JsonValue>>;
pub type ObjectPairsHook = Box<dyn Fn(Vec<(JsonValue, JsonValue)>) -> CResult<JsonValue>>;

/// Materialization hooks. `object_hook` and `object_pairs_hook` are mutually
/// exclusive; setting both fails the decode up front.
#[derive(Default)]
pub struct DecodeOptions {
    pub object_pairs_hook: Option<ObjectPairsHook>,
    pub object_hook: Option<ObjectHook>,
    pub array_hook: Option<ArrayHook>,
    pub int_hook: Option<IntHook>,
    pub float_hook: Option<FloatHook>,
}

pub fn decode(data: &[u8]) -> CResult<JsonValue> {
    decode_with(data, &DecodeOptions::default())
}

pub fn decode_with(data: &[u8], options: &DecodeOptions) -> CResult<JsonValue> {
    if options.object_hook.is_some() && options.object_pairs_hook.is_some() {
        return Err(SqliteError::Type(
            "object_hook and object_pairs_hook are mutually exclusive".to_string(),
        ));
    }
    if data.len() > JSONB_MAX {
        return Err(SqliteError::TooBig("jsonb decode"));
    }
    let (value, end) = decode_element(data, 0, data.len(), options)?;
    if end != data.len() {
        return Err(SqliteError::Value("malformed JSONB: trailing bytes".to_string()));
    }
    Ok(value)
}

/// A byte sequence is valid JSONB iff one tag/length traversal, all children
/// included, ends exactly at the buffer end. Allocates nothing.
pub fn detect(data: &[u8]) -> bool {
    if data.is_empty() || data.len() > JSONB_MAX {
        return false;
    }
    match validate_element(data, 0, data.len()) {
        Some(end) => end == data.len(),
        None => false,
    }
}

fn validate_element(data: &[u8], pos: usize, limit: usize) -> Option<usize> {
    let h = read_header(data, pos, limit)?;
    let payload = &data[h.payload_start..h.payload_end()];
    match h.element {
        ElementType::Null | ElementType::True | ElementType::False => {
            if h.payload_len != 0 {
                return None;
            }
        }
        ElementType::Int => {
            if !validate_int(payload, false) {
                return None;
            }
        }
        ElementType::Int5 => {
            if !validate_int(payload, true) {
                return None;
            }
        }
        ElementType::Float => {
            if !validate_float(payload, false) {
                return None;
            }
        }
        ElementType::Float5 => {
            if !validate_float(payload, true) {
                return None;
            }
        }
        ElementType::Text | ElementType::TextRaw => {
            let text = std::str::from_utf8(payload).ok()?;
            if h.element == ElementType::Text && !plain_text_ok(text) {
                return None;
            }
        }
        ElementType::TextJ => {
            let text = std::str::from_utf8(payload).ok()?;
            if !process_json_escapes(text, None) {
                return None;
            }
        }
        ElementType::Text5 => {
            let text = std::str::from_utf8(payload).ok()?;
            if !process_json5_escapes(text, None) {
                return None;
            }
        }
        ElementType::Array => {
            let mut p = h.payload_start;
            while p < h.payload_end() {
                p = validate_element(data, p, h.payload_end())?;
            }
        }
        ElementType::Object => {
            let mut p = h.payload_start;
            while p < h.payload_end() {
                let key = read_header(data, p, h.payload_end())?;
                if !key.element.is_text() {
                    return None;
                }
                p = validate_element(data, p, h.payload_end())?;
                if p >= h.payload_end() {
                    // key without a value
                    return None;
                }
                p = validate_element(data, p, h.payload_end())?;
            }
        }
    }
    Some(h.payload_end())
}

fn decode_element(
    data: &[u8],
    pos: usize,
    limit: usize,
    options: &DecodeOptions,
) -> CResult<(JsonValue, usize)> {
    let h = read_header(data, pos, limit)
        .ok_or_else(|| SqliteError::Value("malformed JSONB header".to_string()))?;
    let payload = &data[h.payload_start..h.payload_end()];

    let value = match h.element {
        ElementType::Null => {
            expect_empty(&h)?;
            JsonValue::Null
        }
        ElementType::True => {
            expect_empty(&h)?;
            JsonValue::Bool(true)
        }
        ElementType::False => {
            expect_empty(&h)?;
            JsonValue::Bool(false)
        }
        ElementType::Int | ElementType::Int5 => {
            let hex = h.element == ElementType::Int5;
            if !validate_int(payload, hex) {
                return Err(not_valid(if hex { "INT5" } else { "INT" }));
            }
            let text = std::str::from_utf8(payload).expect("validated ascii");
            match &options.int_hook {
                Some(hook) => hook(text)?,
                None => JsonValue::Int(parse_int(text, hex)?),
            }
        }
        ElementType::Float | ElementType::Float5 => {
            let json5 = h.element == ElementType::Float5;
            if !validate_float(payload, json5) {
                return Err(not_valid(if json5 { "FLOAT5" } else { "FLOAT" }));
            }
            let text = std::str::from_utf8(payload).expect("validated ascii");
            match &options.float_hook {
                Some(hook) => hook(text)?,
                None => JsonValue::Float(text.parse::<f64>().map_err(|_| not_valid("FLOAT"))?),
            }
        }
        ElementType::Text | ElementType::TextRaw => {
            let text = std::str::from_utf8(payload)
                .map_err(|_| not_valid("TEXT"))?;
            if h.element == ElementType::Text && !plain_text_ok(text) {
                return Err(not_valid("TEXT"));
            }
            JsonValue::Text(text.to_string())
        }
        ElementType::TextJ => {
            let text = std::str::from_utf8(payload).map_err(|_| not_valid("TEXTJ"))?;
            let mut out = String::with_capacity(text.len());
            if !process_json_escapes(text, Some(&mut out)) {
                return Err(not_valid("TEXTJ"));
            }
            JsonValue::Text(out)
        }
        ElementType::Text5 => {
            let text = std::str::from_utf8(payload).map_err(|_| not_valid("TEXT5"))?;
            let mut out = String::with_capacity(text.len());
            if !process_json5_escapes(text, Some(&mut out)) {
                return Err(not_valid("TEXT5"));
            }
            JsonValue::Text(out)
        }
        ElementType::Array => {
            let mut items = Vec::new();
            let mut p = h.payload_start;
            while p < h.payload_end() {
                let (item, next) = decode_element(data, p, h.payload_end(), options)?;
                items.push(item);
                p = next;
            }
            match &options.array_hook {
                Some(hook) => hook(items)?,
                None => JsonValue::array(items),
            }
        }
        ElementType::Object => {
            let mut pairs = Vec::new();
            let mut p = h.payload_start;
            while p < h.payload_end() {
                let key_header = read_header(data, p, h.payload_end())
                    .ok_or_else(|| SqliteError::Value("malformed JSONB header".to_string()))?;
                if !key_header.element.is_text() {
                    return Err(SqliteError::Value(
                        "malformed JSONB: object key is not a string".to_string(),
                    ));
                }
                let (key, after_key) = decode_element(data, p, h.payload_end(), options)?;
                if after_key >= h.payload_end() {
                    return Err(SqliteError::Value(
                        "malformed JSONB: object key without value".to_string(),
                    ));
                }
                let (item, next) = decode_element(data, after_key, h.payload_end(), options)?;
                pairs.push((key, item));
                p = next;
            }
            match (&options.object_pairs_hook, &options.object_hook) {
                (Some(hook), _) => hook(pairs)?,
                (None, hook) => {
                    // duplicate keys: last write wins
                    let mut entries: Vec<(JsonValue, JsonValue)> = Vec::with_capacity(pairs.len());
                    for (key, item) in pairs {
                        match entries.iter_mut().find(|(k, _)| *k == key) {
                            Some(existing) => existing.1 = item,
                            None => entries.push((key, item)),
                        }
                    }
                    let built = JsonValue::object(entries);
                    match hook {
                        Some(hook) => hook(built)?,
                        None => built,
                    }
                }
            }
        }
    };
    Ok((value, h.payload_end()))
}

fn expect_empty(h: &crate::tag::Header) -> CResult<()> {
    if h.payload_len != 0 {
        return Err(SqliteError::Value(
            "malformed JSONB: literal with payload".to_string(),
        ));
    }
    Ok(())
}

fn not_valid(kind: &str) -> SqliteError {
    SqliteError::Value(format!("not a valid {kind}"))
}

fn parse_int(text: &str, hex: bool) -> CResult<i64> {
    let out_of_range = || SqliteError::Value(format!("integer out of range: {text}"));
    if hex {
        let (neg, rest) = match text.strip_prefix('-') {
            Some(rest) => (true, rest),
            None => (false, text),
        };
        let digits = &rest[2..]; // past 0x / 0X
        let magnitude = i128::from_str_radix(digits, 16).map_err(|_| out_of_range())?;
        let signed = if neg { -magnitude } else { magnitude };
        i64::try_from(signed).map_err(|_| out_of_range())
    } else {
        text.parse::<i64>().map_err(|_| out_of_range())
    }
}

/// All numeric payload bytes must be printable ASCII.
fn ascii_ok(bytes: &[u8]) -> bool {
    bytes.iter().all(|&b| (32..127).contains(&b))
}

/// INT: optional `-`, one or more digits, no leading zero unless the value is
/// exactly 0. INT5: optional `-`, `0x`/`0X`, one or more hex digits.
fn validate_int(bytes: &[u8], hex: bool) -> bool {
    if !ascii_ok(bytes) {
        return false;
    }
    let rest = match bytes.first() {
        Some(b'-') => &bytes[1..],
        _ => bytes,
    };
    if hex {
        if rest.len() < 3 || rest[0] != b'0' || !matches!(rest[1], b'x' | b'X') {
            return false;
        }
        rest[2..].iter().all(|b| b.is_ascii_hexdigit())
    } else {
        if rest.is_empty() || !rest.iter().all(|b| b.is_ascii_digit()) {
            return false;
        }
        rest.len() == 1 || rest[0] != b'0'
    }
}

/// FLOAT: optional `-`, digits (no leading zero unless 0), optional `.`
/// followed by digits, optional exponent. FLOAT5 additionally allows the
/// single `.` before or after the digits.
fn validate_float(bytes: &[u8], json5: bool) -> bool {
    if !ascii_ok(bytes) {
        return false;
    }
    let mut rest = match bytes.first() {
        Some(b'-') => &bytes[1..],
        _ => bytes,
    };

    // split off the exponent first
    let mantissa_end = rest
        .iter()
        .position(|b| matches!(b, b'e' | b'E'))
        .unwrap_or(rest.len());
    let exponent = &rest[mantissa_end..];
    rest = &rest[..mantissa_end];

    if !exponent.is_empty() {
        let mut digits = &exponent[1..];
        if let Some(b'+' | b'-') = digits.first() {
            digits = &digits[1..];
        }
        if digits.is_empty() || !digits.iter().all(|b| b.is_ascii_digit()) {
            return false;
        }
    }

    let dot = rest.iter().position(|&b| b == b'.');
    let (int_part, frac_part) = match dot {
        Some(i) => (&rest[..i], &rest[i + 1..]),
        None => (rest, &[][..]),
    };
    if !int_part.iter().all(|b| b.is_ascii_digit()) || !frac_part.iter().all(|b| b.is_ascii_digit())
    {
        return false;
    }
    if int_part.len() > 1 && int_part[0] == b'0' {
        return false;
    }

    if json5 {
        // at least one digit somewhere; a bare "." or "-." is not a number
        !int_part.is_empty() || !frac_part.is_empty()
    } else {
        // integer digits are mandatory, and a dot demands fraction digits
        !int_part.is_empty() && (dot.is_none() || !frac_part.is_empty())
    }
}

/// TEXT carries no escapes at all: reject control bytes, `"` and `\`.
fn plain_text_ok(text: &str) -> bool {
    !text
        .chars()
        .any(|c| c < '\u{20}' || c == '"' || c == '\\')
}

/// Walk JSON escape sequences, optionally materializing into `out`. Returns
/// false on any malformed escape.
fn process_json_escapes(text: &str, mut out: Option<&mut String>) -> bool {
    let mut chars = text.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            if let Some(buf) = out.as_deref_mut() {
                buf.push(c);
            }
            continue;
        }
        let Some(esc) = chars.next() else {
            return false;
        };
        let produced = match esc {
            '"' => '"',
            '\\' => '\\',
            '/' => '/',
            'b' => '\u{8}',
            'f' => '\u{c}',
            'n' => '\n',
            'r' => '\r',
            't' => '\t',
            'u' => match read_unicode_escape(&mut chars) {
                Some(c) => c,
                None => return false,
            },
            _ => return false,
        };
        if let Some(buf) = out.as_deref_mut() {
            buf.push(produced);
        }
    }
    true
}

/// JSON5 escape set: the JSON escapes plus `'`, `\v`, `\0`, `\xHH`, escaped
/// line terminators (consumed entirely) and identity escapes for everything
/// that is not a digit.
fn process_json5_escapes(text: &str, mut out: Option<&mut String>) -> bool {
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        if c != '\\' {
            if let Some(buf) = out.as_deref_mut() {
                buf.push(c);
            }
            continue;
        }
        let Some(esc) = chars.next() else {
            return false;
        };
        let produced = match esc {
            '"' => Some('"'),
            '\'' => Some('\''),
            '\\' => Some('\\'),
            '/' => Some('/'),
            'b' => Some('\u{8}'),
            'f' => Some('\u{c}'),
            'n' => Some('\n'),
            'r' => Some('\r'),
            't' => Some('\t'),
            'v' => Some('\u{b}'),
            '0' => {
                if matches!(chars.peek(), Some(d) if d.is_ascii_digit()) {
                    return false;
                }
                Some('\0')
            }
            'x' => {
                let hi = chars.next().and_then(|c| c.to_digit(16));
                let lo = chars.next().and_then(|c| c.to_digit(16));
                match (hi, lo) {
                    (Some(hi), Some(lo)) => char::from_u32(hi * 16 + lo),
                    _ => return false,
                }
            }
            'u' => match read_unicode_escape(&mut chars) {
                Some(c) => Some(c),
                None => return false,
            },
            '\n' | '\u{2028}' | '\u{2029}' => None,
            '\r' => {
                // \<CR> and \<CR><LF> are line continuations
                if chars.peek() == Some(&'\n') {
                    chars.next();
                }
                None
            }
            '1'..='9' => return false,
            other => Some(other),
        };
        if let (Some(buf), Some(p)) = (out.as_deref_mut(), produced) {
            buf.push(p);
        }
    }
    true
}

/// `\uXXXX`, including surrogate pairs spelled as two escapes.
fn read_unicode_escape<I: Iterator<Item = char>>(chars: &mut I) -> Option<char> {
    let first = read_hex4(chars)?;
    if (0xd800..0xdc00).contains(&first) {
        // high surrogate: a low surrogate escape must follow
        if chars.next() != Some('\\') || chars.next() != Some('u') {
            return None;
        }
        let low = read_hex4(chars)?;
        if !(0xdc00..0xe000).contains(&low) {
            return None;
        }
        let combined = 0x10000 + ((first - 0xd800) << 10) + (low - 0xdc00);
        char::from_u32(combined)
    } else if (0xdc00..0xe000).contains(&first) {
        None
    } else {
        char::from_u32(first)
    }
}

fn read_hex4<I: Iterator<Item = char>>(chars: &mut I) -> Option<u32> {
    let mut value = 0u32;
    for _ in 0..4 {
        let digit = chars.next()?.to_digit(16)?;
        value = value * 16 + digit;
    }
    Some(value)
}
