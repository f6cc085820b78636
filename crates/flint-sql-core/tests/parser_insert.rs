//! INSERT statement tests.

mod common;
use common::*;

use flint_sql_core::ast::{Identifier, Literal};

#[test]
fn insert_with_fields_and_rows() {
    let i = parse_insert("insert into t (a,b) values (1,'x'),(2,'y')");
    assert_eq!(i.table, Identifier::new("t"));
    assert_eq!(
        i.fields,
        Some(vec![Identifier::new("a"), Identifier::new("b")])
    );
    assert_eq!(
        i.rows,
        vec![
            vec![Literal::Integer(1), Literal::String("x".into())],
            vec![Literal::Integer(2), Literal::String("y".into())],
        ]
    );
    round_trip("insert into t (a,b) values (1,'x'),(2,'y')");
}

#[test]
fn insert_without_field_list() {
    let i = parse_insert("INSERT INTO users VALUES (7, 'alice')");
    assert_eq!(i.fields, None);
    assert_eq!(i.rows.len(), 1);
    round_trip("INSERT INTO users VALUES (7, 'alice')");
}

#[test]
fn insert_string_escapes() {
    let i = parse_insert("insert into t values ('it''s', '')");
    assert_eq!(
        i.rows[0],
        vec![Literal::String("it's".into()), Literal::String(String::new())]
    );
    round_trip("insert into t values ('it''s', '')");
}

#[test]
fn insert_printer_output() {
    let stmt = parse("insert into t(a) values(1),(2)");
    assert_eq!(stmt.to_string(), "INSERT INTO t (a) VALUES (1), (2)");
}

#[test]
fn insert_values_must_be_literals() {
    let err = parse_err("insert into t values (a)");
    assert_eq!(err.expected.as_deref(), Some("integer or string literal"));
    assert_eq!(err.span.start, 22);

    let _ = parse_err("insert into t values (1 + 2)");
    let _ = parse_err("insert into t values (-1)");
    let _ = parse_err("insert into t values (f())");
}

#[test]
fn insert_rows_are_not_empty() {
    let _ = parse_err("insert into t values ()");
    let _ = parse_err("insert into t values");
    let _ = parse_err("insert into t () values (1)");
}

#[test]
fn insert_requires_into_and_values() {
    let _ = parse_err("insert t values (1)");
    let _ = parse_err("insert into t (a)");
    let _ = parse_err("insert into t (a) values (1),");
}
