use connection::{
    apply, apply_stream, concat, concat_stream, invert, invert_stream, iter, iter_stream,
    ChangeOp, ChangesetBuilder, ConflictAction, Connection, IterFlags, Session, Value,
};

fn schema(conn: &Connection) {
    conn.execute("CREATE TABLE t(k INTEGER PRIMARY KEY, v TEXT)")
        .unwrap();
}

fn capture(conn: &Connection, sql: &str) -> Vec<u8> {
    let session = Session::new(conn, "main").unwrap();
    session.attach(None).unwrap();
    conn.execute(sql).unwrap();
    session.changeset().unwrap()
}

#[test]
fn test_changeset_round_trip() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(&source, "INSERT INTO t VALUES(1, 'a')");

    let sibling = Connection::open_in_memory().unwrap();
    schema(&sibling);
    apply(&changeset, &sibling, None, None, Default::default(), false).unwrap();

    assert_eq!(
        sibling.query_row("SELECT k, v FROM t", &[]).unwrap(),
        Some(vec![Value::Integer(1), Value::Text("a".to_string())])
    );
}

#[test]
fn test_conflict_abort_keeps_database() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(&source, "INSERT INTO t VALUES(1, 'a')");

    let target = Connection::open_in_memory().unwrap();
    schema(&target);
    target.execute("INSERT INTO t VALUES(1, 'x')").unwrap();

    let result = apply(
        &changeset,
        &target,
        None,
        Some(Box::new(|_, _| Ok(ConflictAction::Abort))),
        Default::default(),
        false,
    );
    assert!(result.is_err());
    assert_eq!(
        target.query_row("SELECT v FROM t WHERE k = 1", &[]).unwrap(),
        Some(vec![Value::Text("x".to_string())])
    );
}

#[test]
fn test_invert_is_involutive() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(
        &source,
        "INSERT INTO t VALUES(1, 'a'); INSERT INTO t VALUES(2, 'b'); UPDATE t SET v = 'c' WHERE k = 1;",
    );

    let inverted = invert(&changeset).unwrap();
    let back = invert(&inverted).unwrap();

    // compare the records, not the raw bytes
    let mut original = iter(&changeset, IterFlags::empty()).unwrap();
    let mut round_tripped = iter(&back, IterFlags::empty()).unwrap();
    loop {
        let a = original.next().unwrap();
        let b = round_tripped.next().unwrap();
        match (a, b) {
            (None, None) => break,
            (Some(a), Some(b)) => {
                assert_eq!(a.op().unwrap(), b.op().unwrap());
                assert_eq!(a.table_name().unwrap(), b.table_name().unwrap());
                assert_eq!(a.old().unwrap(), b.old().unwrap());
                assert_eq!(a.new().unwrap(), b.new().unwrap());
            }
            _ => panic!("record counts differ"),
        }
    }
}

#[test]
fn test_inverted_changeset_undoes_apply() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(&source, "INSERT INTO t VALUES(1, 'a')");

    let target = Connection::open_in_memory().unwrap();
    schema(&target);
    apply(&changeset, &target, None, None, Default::default(), false).unwrap();
    let inverted = invert(&changeset).unwrap();
    apply(&inverted, &target, None, None, Default::default(), false).unwrap();

    assert_eq!(
        target.query_row("SELECT count(*) FROM t", &[]).unwrap(),
        Some(vec![Value::Integer(0)])
    );
}

#[test]
fn test_concat_equals_sequential_apply() {
    let site = Connection::open_in_memory().unwrap();
    schema(&site);
    let first = capture(&site, "INSERT INTO t VALUES(1, 'a')");
    let second = capture(&site, "UPDATE t SET v = 'z' WHERE k = 1; INSERT INTO t VALUES(2, 'b');");

    let combined = concat(&first, &second).unwrap();

    let sequential = Connection::open_in_memory().unwrap();
    schema(&sequential);
    apply(&first, &sequential, None, None, Default::default(), false).unwrap();
    apply(&second, &sequential, None, None, Default::default(), false).unwrap();

    let at_once = Connection::open_in_memory().unwrap();
    schema(&at_once);
    apply(&combined, &at_once, None, None, Default::default(), false).unwrap();

    for conn in [&sequential, &at_once] {
        assert_eq!(
            conn.query_row("SELECT v FROM t WHERE k = 1", &[]).unwrap(),
            Some(vec![Value::Text("z".to_string())])
        );
        assert_eq!(
            conn.query_row("SELECT count(*) FROM t", &[]).unwrap(),
            Some(vec![Value::Integer(2)])
        );
    }
}

#[test]
fn test_streamed_variants_match_buffered() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(
        &source,
        "INSERT INTO t VALUES(1, 'a'); INSERT INTO t VALUES(2, 'b');",
    );

    // invert
    let buffered = invert(&changeset).unwrap();
    let mut streamed = Vec::new();
    invert_stream(&mut changeset.as_slice(), &mut streamed).unwrap();
    assert_eq!(buffered, streamed);

    // concat with an empty right-hand side
    let buffered = concat(&changeset, &[]).unwrap();
    let mut empty: &[u8] = &[];
    let mut streamed = Vec::new();
    concat_stream(&mut changeset.as_slice(), &mut empty, &mut streamed).unwrap();
    assert_eq!(buffered, streamed);
}

#[test]
fn test_streamed_iteration() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(
        &source,
        "INSERT INTO t VALUES(1, 'a'); INSERT INTO t VALUES(2, 'b');",
    );

    let mut reader = changeset.as_slice();
    let mut it = iter_stream(&mut reader, IterFlags::empty()).unwrap();
    let mut ops = Vec::new();
    while let Some(change) = it.next().unwrap() {
        ops.push((
            change.op().unwrap(),
            change.new().unwrap().map(|row| row[0].clone()),
        ));
    }
    assert_eq!(ops.len(), 2);
    assert!(ops.iter().all(|(op, _)| *op == ChangeOp::Insert));
}

#[test]
fn test_streamed_apply() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(&source, "INSERT INTO t VALUES(5, 'streamed')");

    let target = Connection::open_in_memory().unwrap();
    schema(&target);
    let mut reader = changeset.as_slice();
    apply_stream(&mut reader, &target, None, None, Default::default(), false).unwrap();
    assert_eq!(
        target.query_row("SELECT v FROM t WHERE k = 5", &[]).unwrap(),
        Some(vec![Value::Text("streamed".to_string())])
    );
}

#[test]
fn test_inverted_iteration_flag() {
    let source = Connection::open_in_memory().unwrap();
    schema(&source);
    let changeset = capture(&source, "INSERT INTO t VALUES(1, 'a')");

    let mut it = iter(&changeset, IterFlags::INVERT).unwrap();
    let change = it.next().unwrap().unwrap();
    assert_eq!(change.op().unwrap(), ChangeOp::Delete);
}

#[test]
fn test_patchset_omits_old_values() {
    let conn = Connection::open_in_memory().unwrap();
    schema(&conn);
    conn.execute("INSERT INTO t VALUES(1, 'a')").unwrap();

    let session = Session::new(&conn, "main").unwrap();
    session.attach(None).unwrap();
    conn.execute("UPDATE t SET v = 'b' WHERE k = 1").unwrap();

    let changeset = session.changeset().unwrap();
    let patchset = session.patchset().unwrap();
    assert!(patchset.len() < changeset.len());

    let mut it = iter(&patchset, IterFlags::empty()).unwrap();
    let change = it.next().unwrap().unwrap();
    assert_eq!(change.op().unwrap(), ChangeOp::Update);
    // the patchset drops the old value of the updated column
    let old = change.old().unwrap().unwrap();
    assert_eq!(old[1], Value::NoChange);
}

#[test]
fn test_builder_groups_changesets() {
    let conn = Connection::open_in_memory().unwrap();
    schema(&conn);
    let first = capture(&conn, "INSERT INTO t VALUES(1, 'a')");
    let second = capture(&conn, "INSERT INTO t VALUES(2, 'b')");

    let builder = ChangesetBuilder::new().unwrap();
    builder.add(&first).unwrap();
    builder.add(&second).unwrap();
    let combined = builder.output().unwrap();

    let target = Connection::open_in_memory().unwrap();
    schema(&target);
    apply(&combined, &target, None, None, Default::default(), false).unwrap();
    assert_eq!(
        target.query_row("SELECT count(*) FROM t", &[]).unwrap(),
        Some(vec![Value::Integer(2)])
    );
}

#[test]
fn test_diff_between_schemas() {
    let conn = Connection::open_in_memory().unwrap();
    schema(&conn);
    conn.execute("ATTACH ':memory:' AS other; CREATE TABLE other.t(k INTEGER PRIMARY KEY, v TEXT);")
        .unwrap();
    conn.execute("INSERT INTO t VALUES(1, 'only-in-main')")
        .unwrap();

    let session = Session::new(&conn, "main").unwrap();
    session.attach(Some("t")).unwrap();
    session.diff("other", "t").unwrap();

    let changeset = session.changeset().unwrap();
    let mut it = iter(&changeset, IterFlags::empty()).unwrap();
    let change = it.next().unwrap().unwrap();
    assert_eq!(change.op().unwrap(), ChangeOp::Insert);
}
