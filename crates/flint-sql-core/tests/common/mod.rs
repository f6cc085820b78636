#![allow(dead_code)]

use flint_sql_core::ast::{
    CreateIndexSpec, CreateTableStatement, DeleteStatement, InsertStatement, SelectStatement,
    Statement, UpdateStatement,
};
use flint_sql_core::{parse as parse_sql, Expr, ParseError, Parser};

pub fn parse(sql: &str) -> Statement {
    parse_sql(sql).unwrap_or_else(|e| panic!("Failed to parse: {sql}\nError: {e:?}"))
}

pub fn parse_err(sql: &str) -> ParseError {
    parse_sql(sql).expect_err(&format!("Expected parse error for: {sql}"))
}

pub fn parse_condition(sql: &str) -> Expr {
    Parser::new(sql)
        .and_then(|mut p| p.parse_condition())
        .unwrap_or_else(|e| panic!("Failed to parse condition: {sql}\nError: {e:?}"))
}

pub fn parse_select(sql: &str) -> SelectStatement {
    match parse(sql) {
        Statement::Select(s) => s,
        other => panic!("Expected SELECT, got {other:?}"),
    }
}

pub fn parse_insert(sql: &str) -> InsertStatement {
    match parse(sql) {
        Statement::Insert(i) => i,
        other => panic!("Expected INSERT, got {other:?}"),
    }
}

pub fn parse_update(sql: &str) -> UpdateStatement {
    match parse(sql) {
        Statement::Update(u) => u,
        other => panic!("Expected UPDATE, got {other:?}"),
    }
}

pub fn parse_delete(sql: &str) -> DeleteStatement {
    match parse(sql) {
        Statement::Delete(d) => d,
        other => panic!("Expected DELETE, got {other:?}"),
    }
}

pub fn parse_create_table(sql: &str) -> CreateTableStatement {
    match parse(sql) {
        Statement::CreateTable(c) => c,
        other => panic!("Expected CREATE TABLE, got {other:?}"),
    }
}

pub fn parse_create_index(sql: &str) -> CreateIndexSpec {
    match parse(sql) {
        Statement::CreateIndex(c) => c,
        other => panic!("Expected CREATE INDEX, got {other:?}"),
    }
}

/// Verifies that the printed form of a statement re-parses to the same
/// tree, and that printing is a fixed point.
pub fn round_trip(sql: &str) {
    let ast1 = parse(sql);
    let rendered1 = ast1.to_string();
    let ast2 = parse(&rendered1);
    assert_eq!(
        ast1, ast2,
        "Round-trip changed the tree.\n  Input:    {sql}\n  Rendered: {rendered1}"
    );
    assert_eq!(
        rendered1,
        ast2.to_string(),
        "Printing is not a fixed point for: {sql}"
    );
}
