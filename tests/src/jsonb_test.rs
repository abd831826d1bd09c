use jsonb::{decode, detect, encode, encode_with, EncodeOptions, JsonValue};

#[test]
fn test_documented_layout() {
    // {"a": 1, "b": [true, null, 3.5]}
    let value = JsonValue::from(serde_json_doc());
    let bytes = encode(&value).unwrap();
    let expected = hex::decode("ec000000111a6113311a62eb00000006010035332e35").unwrap();
    assert_eq!(bytes, expected);
    assert!(detect(&bytes));
    assert_eq!(decode(&bytes).unwrap(), value);
}

fn serde_json_doc() -> serde_json::Value {
    serde_json::json!({"a": 1, "b": [true, null, 3.5]})
}

#[test]
fn test_circular_list_raises() {
    let list = JsonValue::array(vec![]);
    if let JsonValue::Array(items) = &list {
        items.borrow_mut().push(list.clone());
    }
    let err = encode(&list).unwrap_err();
    assert_eq!(err.to_string(), "circular reference detected");

    // the caller can opt out of the check, owning the consequences; here we
    // just confirm the opt-in path is what failed
    let options = EncodeOptions::default();
    assert!(options.check_circular);
}

#[test]
fn test_round_trip_against_sqlite() {
    // bytes our encoder produces decode identically through SQLite's json()
    let conn = connection::Connection::open_in_memory().unwrap();
    let value = JsonValue::from(serde_json_doc());
    let bytes = encode(&value).unwrap();

    let row = conn
        .query_row(
            "SELECT json(?1)",
            &[connection::Value::Blob(bytes.clone())],
        )
        .unwrap()
        .unwrap();
    let text = row[0].as_text().unwrap();
    let reparsed: serde_json::Value = serde_json::from_str(text).unwrap();
    assert_eq!(reparsed, serde_json_doc());

    // and SQLite's own jsonb() output passes our detector and decoder
    let row = conn
        .query_row("SELECT jsonb('{\"a\": 1, \"b\": [true, null, 3.5]}')", &[])
        .unwrap()
        .unwrap();
    let theirs = row[0].as_blob().unwrap();
    assert!(detect(theirs));
    assert_eq!(decode(theirs).unwrap(), value);
}

#[test]
fn test_detect_prefixes_fail() {
    let value = JsonValue::from(serde_json_doc());
    let bytes = encode(&value).unwrap();
    for cut in 0..bytes.len() {
        assert!(!detect(&bytes[..cut]));
    }
}

#[test]
fn test_skip_keys_end_to_end() {
    let value = JsonValue::object(vec![
        (JsonValue::array(vec![]), JsonValue::Int(1)),
        (JsonValue::Int(5), JsonValue::Int(2)),
        (JsonValue::text("c"), JsonValue::Int(3)),
    ]);
    let options = EncodeOptions {
        skip_keys: true,
        ..EncodeOptions::default()
    };
    let bytes = encode_with(&value, &options).unwrap();
    let decoded = decode(&bytes).unwrap();
    assert_eq!(
        decoded,
        JsonValue::object(vec![
            (JsonValue::text("5"), JsonValue::Int(2)),
            (JsonValue::text("c"), JsonValue::Int(3)),
        ])
    );
}
