use std::collections::HashSet;
use std::rc::Rc;

use common::err::engine_error::SqliteError;
use common::err::CResult;

use crate::buffer::JsonbBuffer;
use crate::decode::detect;
use crate::tag::ElementType;
use crate::value::JsonValue;

/// Output of the `default` fallback hook: either a replacement value that is
/// encoded in place of the original, or verbatim JSONB bytes that are
/// validated and spliced into the output.
pub enum Fallback {
    Value(JsonValue),
    Jsonb(Vec<u8>),
}

pub type DefaultHook = Box<dyn Fn(&JsonValue) -> CResult<Fallback>>;

pub struct EncodeOptions {
    /// Silently drop object entries whose key cannot be stringized instead of
    /// failing with a type error.
    pub skip_keys: bool,

    /// Track container identities on the encoding stack and fail on a cycle.
    /// When disabled, a cyclic graph recurses without bound.
    pub check_circular: bool,

    pub default: Option<DefaultHook>,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            skip_keys: false,
            check_circular: true,
            default: None,
        }
    }
}

pub fn encode(value: &JsonValue) -> CResult<Vec<u8>> {
    encode_with(value, &EncodeOptions::default())
}

pub fn encode_with(value: &JsonValue, options: &EncodeOptions) -> CResult<Vec<u8>> {
    let mut encoder = Encoder {
        buf: JsonbBuffer::new(),
        options,
        active: HashSet::new(),
    };
    encoder.encode_value(value)?;
    Ok(encoder.buf.into_bytes())
}

struct Encoder<'a> {
    buf: JsonbBuffer,
    options: &'a EncodeOptions,
    /// Identities of the containers currently on the encoding stack.
    active: HashSet<usize>,
}

impl Encoder<'_> {
    fn encode_value(&mut self, value: &JsonValue) -> CResult<()> {
        match value {
            JsonValue::Null => {
                self.buf.push_tag(ElementType::Null, 0)?;
            }
            JsonValue::Bool(true) => {
                self.buf.push_tag(ElementType::True, 0)?;
            }
            JsonValue::Bool(false) => {
                self.buf.push_tag(ElementType::False, 0)?;
            }
            JsonValue::Int(i) => {
                let text = i.to_string();
                self.buf.push_tag(ElementType::Int, text.len())?;
                self.buf.push_bytes(text.as_bytes())?;
            }
            JsonValue::Float(f) => self.encode_float(*f)?,
            JsonValue::Text(s) => {
                self.buf.push_tag(ElementType::TextRaw, s.len())?;
                self.buf.push_bytes(s.as_bytes())?;
            }
            JsonValue::Blob(_) => self.encode_fallback(value)?,
            JsonValue::Array(items) => {
                let id = Rc::as_ptr(items) as usize;
                self.enter(id)?;
                let tag = self.buf.begin_container(ElementType::Array)?;
                for item in items.borrow().iter() {
                    self.encode_value(item)?;
                }
                self.buf.end_container(tag)?;
                self.active.remove(&id);
            }
            JsonValue::Object(pairs) => {
                let id = Rc::as_ptr(pairs) as usize;
                self.enter(id)?;
                let tag = self.buf.begin_container(ElementType::Object)?;
                for (key, item) in pairs.borrow().iter() {
                    if self.encode_key(key)? {
                        self.encode_value(item)?;
                    }
                }
                self.buf.end_container(tag)?;
                self.active.remove(&id);
            }
        }
        Ok(())
    }

    fn encode_float(&mut self, f: f64) -> CResult<()> {
        if f.is_nan() {
            self.buf.push_tag(ElementType::Null, 0)?;
        } else if f.is_infinite() {
            // longer exponent than SQLite's own convention so the value
            // round-trips unambiguously
            let text = if f > 0.0 { "9e9999" } else { "-9e9999" };
            self.buf.push_tag(ElementType::Float, text.len())?;
            self.buf.push_bytes(text.as_bytes())?;
        } else {
            let text = f.to_string();
            self.buf.push_tag(ElementType::Float, text.len())?;
            self.buf.push_bytes(text.as_bytes())?;
        }
        Ok(())
    }

    /// Encode an object key. Strings pass through; null, booleans and numbers
    /// are stringized (numbers by rewriting the freshly written tag in place
    /// to TEXTRAW). Returns false when the entry is skipped.
    fn encode_key(&mut self, key: &JsonValue) -> CResult<bool> {
        match key {
            JsonValue::Text(s) => {
                self.buf.push_tag(ElementType::TextRaw, s.len())?;
                self.buf.push_bytes(s.as_bytes())?;
            }
            JsonValue::Null => {
                self.buf.push_tag(ElementType::TextRaw, 4)?;
                self.buf.push_bytes(b"null")?;
            }
            JsonValue::Bool(true) => {
                self.buf.push_tag(ElementType::TextRaw, 4)?;
                self.buf.push_bytes(b"true")?;
            }
            JsonValue::Bool(false) => {
                self.buf.push_tag(ElementType::TextRaw, 5)?;
                self.buf.push_bytes(b"false")?;
            }
            JsonValue::Int(_) | JsonValue::Float(_) => {
                let offset = self.buf.len();
                self.encode_value(key)?;
                self.buf.rewrite_type(offset, ElementType::TextRaw);
            }
            _ => {
                if self.options.skip_keys {
                    return Ok(false);
                }
                return Err(SqliteError::Type(format!(
                    "object key of type {} is not stringizable",
                    key.type_name()
                )));
            }
        }
        Ok(true)
    }

    fn encode_fallback(&mut self, value: &JsonValue) -> CResult<()> {
        let hook = self.options.default.as_ref().ok_or_else(|| {
            SqliteError::Type(format!(
                "value of type {} is not JSONB encodable",
                value.type_name()
            ))
        })?;
        match hook(value)? {
            Fallback::Value(replacement) => self.encode_value(&replacement),
            Fallback::Jsonb(bytes) => {
                if !detect(&bytes) {
                    return Err(SqliteError::Value(
                        "default hook returned invalid JSONB".to_string(),
                    ));
                }
                self.buf.push_bytes(&bytes)
            }
        }
    }

    fn enter(&mut self, id: usize) -> CResult<()> {
        if self.options.check_circular && !self.active.insert(id) {
            return Err(SqliteError::Value("circular reference detected".to_string()));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;

    #[test]
    fn test_scalar_layouts() {
        assert_eq!(encode(&JsonValue::Null).unwrap(), vec![0x00]);
        assert_eq!(encode(&JsonValue::Bool(true)).unwrap(), vec![0x01]);
        assert_eq!(encode(&JsonValue::Bool(false)).unwrap(), vec![0x02]);
        assert_eq!(encode(&JsonValue::Int(42)).unwrap(), vec![0x23, b'4', b'2']);
        assert_eq!(
            encode(&JsonValue::Float(3.5)).unwrap(),
            vec![0x35, b'3', b'.', b'5']
        );
        assert_eq!(
            encode(&JsonValue::text("hi")).unwrap(),
            vec![0x2a, b'h', b'i']
        );
    }

    #[test]
    fn test_nested_document_layout() {
        // {"a": 1, "b": [true, null, 3.5]}
        let value = JsonValue::object(vec![
            (JsonValue::text("a"), JsonValue::Int(1)),
            (
                JsonValue::text("b"),
                JsonValue::array(vec![
                    JsonValue::Bool(true),
                    JsonValue::Null,
                    JsonValue::Float(3.5),
                ]),
            ),
        ]);
        let bytes = encode(&value).unwrap();
        let expected = hex::decode("ec000000111a6113311a62eb0000000601 0035332e35".replace(' ', ""))
            .unwrap();
        assert_eq!(bytes, expected);
    }

    #[test]
    fn test_nonfinite_floats() {
        assert_eq!(encode(&JsonValue::Float(f64::NAN)).unwrap(), vec![0x00]);
        assert_eq!(
            encode(&JsonValue::Float(f64::INFINITY)).unwrap(),
            b"\x659e9999".to_vec()
        );
        assert_eq!(
            encode(&JsonValue::Float(f64::NEG_INFINITY)).unwrap(),
            b"\x75-9e9999".to_vec()
        );
    }

    #[test]
    fn test_numeric_keys_are_stringized() {
        let value = JsonValue::object(vec![(JsonValue::Int(12), JsonValue::Bool(true))]);
        let bytes = encode(&value).unwrap();
        // key "12" carries a TEXTRAW tag with the INT length class
        assert_eq!(bytes, vec![0xec, 0, 0, 0, 4, 0x2a, b'1', b'2', 0x01]);
    }

    #[test]
    fn test_unstringizable_key_fails_or_skips() {
        let value = JsonValue::object(vec![
            (JsonValue::array(vec![]), JsonValue::Int(1)),
            (JsonValue::text("k"), JsonValue::Int(2)),
        ]);
        assert!(matches!(
            encode(&value),
            Err(SqliteError::Type(_))
        ));

        let options = EncodeOptions {
            skip_keys: true,
            ..EncodeOptions::default()
        };
        let bytes = encode_with(&value, &options).unwrap();
        let decoded = decode(&bytes).unwrap();
        assert_eq!(
            decoded,
            JsonValue::object(vec![(JsonValue::text("k"), JsonValue::Int(2))])
        );
    }

    #[test]
    fn test_circular_reference_detected() {
        let list = JsonValue::array(vec![]);
        if let JsonValue::Array(items) = &list {
            items.borrow_mut().push(list.clone());
        }
        let err = encode(&list).unwrap_err();
        assert_eq!(
            err,
            SqliteError::Value("circular reference detected".to_string())
        );
    }

    #[test]
    fn test_shared_but_acyclic_container_is_fine() {
        let shared = JsonValue::array(vec![JsonValue::Int(1)]);
        let value = JsonValue::array(vec![shared.clone(), shared]);
        let bytes = encode(&value).unwrap();
        assert!(detect(&bytes));
    }

    #[test]
    fn test_default_hook_replacement_and_splice() {
        let hook: DefaultHook = Box::new(|v| match v {
            JsonValue::Blob(b) => Ok(Fallback::Value(JsonValue::Int(b.len() as i64))),
            _ => Err(SqliteError::Type("unsupported".to_string())),
        });
        let options = EncodeOptions {
            default: Some(hook),
            ..EncodeOptions::default()
        };
        let bytes = encode_with(&JsonValue::Blob(vec![1, 2, 3]), &options).unwrap();
        assert_eq!(decode(&bytes).unwrap(), JsonValue::Int(3));

        let splice: DefaultHook = Box::new(|_| Ok(Fallback::Jsonb(vec![0x01])));
        let options = EncodeOptions {
            default: Some(splice),
            ..EncodeOptions::default()
        };
        let bytes = encode_with(&JsonValue::Blob(vec![]), &options).unwrap();
        assert_eq!(bytes, vec![0x01]);

        let bad: DefaultHook = Box::new(|_| Ok(Fallback::Jsonb(vec![0xf0])));
        let options = EncodeOptions {
            default: Some(bad),
            ..EncodeOptions::default()
        };
        assert!(matches!(
            encode_with(&JsonValue::Blob(vec![]), &options),
            Err(SqliteError::Value(_))
        ));
    }

    #[test]
    fn test_blob_without_default_is_a_type_error() {
        assert!(matches!(
            encode(&JsonValue::Blob(vec![0u8; 4])),
            Err(SqliteError::Type(_))
        ));
    }

    #[test]
    fn test_empty_containers_inline() {
        assert_eq!(encode(&JsonValue::array(vec![])).unwrap(), vec![0x0b]);
        assert_eq!(encode(&JsonValue::object(vec![])).unwrap(), vec![0x0c]);
    }
}
