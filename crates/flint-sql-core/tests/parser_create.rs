//! CREATE TABLE and CREATE INDEX tests.

mod common;
use common::*;

use flint_sql_core::ast::Identifier;

fn idents(names: &[&str]) -> Vec<Identifier> {
    names.iter().map(|n| Identifier::new(*n)).collect()
}

// ===================================================================
// CREATE TABLE
// ===================================================================

#[test]
fn create_table_fields() {
    let c = parse_create_table("create table t (a, b, c)");
    assert_eq!(c.table, Identifier::new("t"));
    assert_eq!(c.fields, idents(&["a", "b", "c"]));
    assert!(c.indexes.is_empty());
    round_trip("create table t (a, b, c)");
}

#[test]
fn create_table_inline_indexes() {
    let c = parse_create_table("create table t (a, index (a), b, index idx using hash (b, a))");
    assert_eq!(c.fields, idents(&["a", "b"]));
    assert_eq!(c.indexes.len(), 2);

    assert!(c.indexes[0].is_inline());
    assert_eq!(c.indexes[0].name, None);
    assert_eq!(c.indexes[0].method, None);
    assert_eq!(c.indexes[0].fields, idents(&["a"]));

    assert_eq!(c.indexes[1].name, Some(Identifier::new("idx")));
    assert_eq!(c.indexes[1].method, Some(Identifier::new("hash")));
    assert_eq!(c.indexes[1].fields, idents(&["b", "a"]));

    round_trip("create table t (a, index (a), b, index idx using hash (b, a))");
}

#[test]
fn create_table_printer_lists_indexes_last() {
    let stmt = parse("create table t (index i (a), a)");
    assert_eq!(stmt.to_string(), "CREATE TABLE t (a, INDEX i (a))");
}

#[test]
fn create_table_requires_a_field() {
    let _ = parse_err("create table t ()");
    let _ = parse_err("create table t");

    let err = parse_err("create table t (index (a))");
    assert_eq!(err.message, "CREATE TABLE requires at least one field");
    assert_eq!(err.span.start, 15);
}

#[test]
fn create_table_fields_are_plain_identifiers() {
    let _ = parse_err("create table t (a int)");
    let _ = parse_err("create table t (t.a)");
    let _ = parse_err("create table t (a,)");
}

// ===================================================================
// CREATE INDEX
// ===================================================================

#[test]
fn create_index_without_name() {
    let c = parse_create_index("create index on t using btree (a,b)");
    assert_eq!(c.name, None);
    assert_eq!(c.table, Some(Identifier::new("t")));
    assert_eq!(c.method, Some(Identifier::new("btree")));
    assert_eq!(c.fields, idents(&["a", "b"]));
    assert!(!c.is_inline());
    round_trip("create index on t using btree (a,b)");
}

#[test]
fn create_index_with_name() {
    let c = parse_create_index("CREATE INDEX idx_users_email ON users (email)");
    assert_eq!(c.name, Some(Identifier::new("idx_users_email")));
    assert_eq!(c.method, None);
    assert_eq!(c.fields, idents(&["email"]));
    assert_eq!(
        c.to_string(),
        "CREATE INDEX idx_users_email ON users (email)"
    );
}

#[test]
fn create_index_requires_table_and_fields() {
    let _ = parse_err("create index idx (a)");
    let _ = parse_err("create index on t ()");
    let _ = parse_err("create index on t");
    let _ = parse_err("create index on t using (a)");
}
