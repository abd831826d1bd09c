use std::cell::RefCell;
use std::rc::Rc;

/// Shared container handles. Containers are reference-counted so a host value
/// graph can alias the same array or object from several places, which is
/// what makes circular-reference detection in the encoder meaningful.
pub type JsonArray = Rc<RefCell<Vec<JsonValue>>>;
pub type JsonObject = Rc<RefCell<Vec<(JsonValue, JsonValue)>>>;

/// Host value graph accepted by the encoder and produced by the decoder.
///
/// `Blob` is the one non-JSON kind; encoding it goes through the `default`
/// fallback hook (or fails with a type error when none is set).
#[derive(Debug, Clone)]
pub enum JsonValue {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Blob(Vec<u8>),
    Array(JsonArray),
    Object(JsonObject),
}

impl JsonValue {
    pub fn array(items: Vec<JsonValue>) -> JsonValue {
        JsonValue::Array(Rc::new(RefCell::new(items)))
    }

    pub fn object(pairs: Vec<(JsonValue, JsonValue)>) -> JsonValue {
        JsonValue::Object(Rc::new(RefCell::new(pairs)))
    }

    pub fn text<S: Into<String>>(s: S) -> JsonValue {
        JsonValue::Text(s.into())
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            JsonValue::Null => "null",
            JsonValue::Bool(_) => "bool",
            JsonValue::Int(_) => "int",
            JsonValue::Float(_) => "float",
            JsonValue::Text(_) => "text",
            JsonValue::Blob(_) => "blob",
            JsonValue::Array(_) => "array",
            JsonValue::Object(_) => "object",
        }
    }
}

impl PartialEq for JsonValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (JsonValue::Null, JsonValue::Null) => true,
            (JsonValue::Bool(a), JsonValue::Bool(b)) => a == b,
            (JsonValue::Int(a), JsonValue::Int(b)) => a == b,
            (JsonValue::Float(a), JsonValue::Float(b)) => a == b,
            (JsonValue::Text(a), JsonValue::Text(b)) => a == b,
            (JsonValue::Blob(a), JsonValue::Blob(b)) => a == b,
            (JsonValue::Array(a), JsonValue::Array(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            (JsonValue::Object(a), JsonValue::Object(b)) => {
                Rc::ptr_eq(a, b) || *a.borrow() == *b.borrow()
            }
            _ => false,
        }
    }
}

impl From<&serde_json::Value> for JsonValue {
    fn from(v: &serde_json::Value) -> Self {
        match v {
            serde_json::Value::Null => JsonValue::Null,
            serde_json::Value::Bool(b) => JsonValue::Bool(*b),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    JsonValue::Int(i)
                } else {
                    JsonValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            serde_json::Value::String(s) => JsonValue::Text(s.clone()),
            serde_json::Value::Array(items) => {
                JsonValue::array(items.iter().map(JsonValue::from).collect())
            }
            serde_json::Value::Object(map) => JsonValue::object(
                map.iter()
                    .map(|(k, v)| (JsonValue::text(k.as_str()), JsonValue::from(v)))
                    .collect(),
            ),
        }
    }
}

impl From<serde_json::Value> for JsonValue {
    fn from(v: serde_json::Value) -> Self {
        JsonValue::from(&v)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_equality_follows_structure() {
        let a = JsonValue::array(vec![JsonValue::Int(1), JsonValue::Null]);
        let b = JsonValue::array(vec![JsonValue::Int(1), JsonValue::Null]);
        assert_eq!(a, b);
        assert_ne!(a, JsonValue::array(vec![JsonValue::Int(2)]));
    }

    #[test]
    fn test_from_serde_json() {
        let v: serde_json::Value = serde_json::json!({"a": 1, "b": [true, null, 3.5]});
        let converted = JsonValue::from(&v);
        assert_eq!(
            converted,
            JsonValue::object(vec![
                (
                    JsonValue::text("a"),
                    JsonValue::Int(1)
                ),
                (
                    JsonValue::text("b"),
                    JsonValue::array(vec![
                        JsonValue::Bool(true),
                        JsonValue::Null,
                        JsonValue::Float(3.5)
                    ])
                ),
            ])
        );
    }

    #[test]
    fn test_aliased_containers_compare_by_pointer_first() {
        let shared = JsonValue::array(vec![JsonValue::Int(9)]);
        let again = shared.clone();
        assert_eq!(shared, again);
    }
}
