use connection::{Connection, SqliteError, Value};

#[test]
fn test_prepare_twice_reuses_handle() {
    let conn = Connection::open_with_capacity(10).unwrap();

    let stmt = conn.prepare("SELECT 1").unwrap();
    let first = stmt.handle_address();
    stmt.finalize().unwrap();

    let stmt = conn.prepare("SELECT 1").unwrap();
    assert_eq!(stmt.handle_address(), first);
    assert_eq!(conn.cache_highest_used(), 0);
    stmt.finalize().unwrap();
}

#[test]
fn test_multi_statement_flow() {
    let conn = Connection::open_in_memory().unwrap();
    let mut stmt = conn.prepare("SELECT 1; SELECT 2;").unwrap();
    assert!(stmt.has_more());
    assert!(stmt.query_size() < stmt.utf8_size());

    assert!(stmt.step().unwrap());
    assert_eq!(stmt.row().unwrap(), vec![Value::Integer(1)]);

    stmt.next_statement().unwrap();
    assert!(stmt.step().unwrap());
    assert_eq!(stmt.row().unwrap(), vec![Value::Integer(2)]);
    assert!(!stmt.has_more());
    stmt.finalize().unwrap();
}

#[test]
fn test_eviction_respects_capacity() {
    let conn = Connection::open_with_capacity(4).unwrap();
    for i in 0..50 {
        let stmt = conn.prepare(&format!("SELECT {i}")).unwrap();
        stmt.finalize().unwrap();
        assert!(conn.cache_resident_count() <= 4);
    }
    assert_eq!(conn.cache_resident_count(), 4);
}

#[test]
fn test_round_robin_keeps_most_recent() {
    let conn = Connection::open_with_capacity(2).unwrap();
    for sql in ["SELECT 1", "SELECT 2", "SELECT 3"] {
        conn.prepare(sql).unwrap().finalize().unwrap();
    }
    // cyclic insertion: slot 0 was rewritten by SELECT 3, slot 1 holds
    // SELECT 2
    assert_eq!(conn.cache_resident_count(), 2);

    // a hit vacates its slot; reinsertion lands on the cursor, evicting the
    // other resident
    let stmt = conn.prepare("SELECT 3").unwrap();
    stmt.finalize().unwrap();
    assert_eq!(conn.cache_resident_count(), 1);
}

#[test]
fn test_concurrent_checkout_of_same_text() {
    let conn = Connection::open_with_capacity(10).unwrap();
    // the same SQL checked out twice gives distinct handles; the cached one
    // can be resident only once
    let a = conn.prepare("SELECT 1").unwrap();
    let b = conn.prepare("SELECT 1").unwrap();
    assert_ne!(a.handle_address(), b.handle_address());
    a.finalize().unwrap();
    b.finalize().unwrap();
}

#[test]
fn test_null_character_rejected() {
    let conn = Connection::open_in_memory().unwrap();
    let err = conn.prepare("SELECT 1 \0 SELECT 2").unwrap_err();
    assert_eq!(
        err,
        SqliteError::Value("null character in query".to_string())
    );
}

#[test]
fn test_execute_spans_statements() {
    let conn = Connection::open_in_memory().unwrap();
    conn.execute(
        "CREATE TABLE t(x);
         INSERT INTO t VALUES(1);
         INSERT INTO t VALUES(2);",
    )
    .unwrap();
    assert_eq!(
        conn.query_row("SELECT count(*) FROM t", &[]).unwrap(),
        Some(vec![Value::Integer(2)])
    );
}
