//! UPDATE and DELETE statement tests.

mod common;
use common::*;

use flint_sql_core::ast::{Expr, Identifier, UpdateAssignment};

// ===================================================================
// UPDATE
// ===================================================================

#[test]
fn update_assignments_and_where() {
    let u = parse_update("update t set a = 1, b = b + 1 where id = 3");
    assert_eq!(u.table, Identifier::new("t"));
    assert_eq!(
        u.assignments,
        vec![
            UpdateAssignment {
                field: Identifier::new("a"),
                value: Expr::integer(1),
            },
            UpdateAssignment {
                field: Identifier::new("b"),
                value: Expr::ident("b").add(Expr::integer(1)),
            },
        ]
    );
    assert_eq!(u.where_clause, Some(Expr::ident("id").eq(Expr::integer(3))));
    round_trip("update t set a = 1, b = b + 1 where id = 3");
}

#[test]
fn update_without_where() {
    let u = parse_update("UPDATE t SET name = 'bob'");
    assert_eq!(u.where_clause, None);
    assert_eq!(u.assignments[0].value, Expr::string("bob"));
    round_trip("UPDATE t SET name = 'bob'");
}

#[test]
fn update_value_may_call_functions() {
    let u = parse_update("update t set updated = now(), n = t.n * 2");
    assert_eq!(u.assignments[0].value, Expr::function("now", vec![]));
    assert_eq!(
        u.assignments[1].value,
        Expr::qualified("t", "n").mul(Expr::integer(2))
    );
}

#[test]
fn update_requires_assignments() {
    let _ = parse_err("update t set");
    let _ = parse_err("update t set where a = 1");
    let _ = parse_err("update t a = 1");
    let _ = parse_err("update t set a < 1");
    let _ = parse_err("update t set t.a = 1");
}

// ===================================================================
// DELETE
// ===================================================================

#[test]
fn delete_with_where() {
    let d = parse_delete("delete from t where a = 1");
    assert_eq!(d.table, Identifier::new("t"));
    assert_eq!(d.where_clause, Some(Expr::ident("a").eq(Expr::integer(1))));
    round_trip("delete from t where a = 1");
}

#[test]
fn delete_star_is_optional() {
    assert_eq!(parse("delete * from t"), parse("delete from t"));
    assert_eq!(
        parse("DELETE * FROM t WHERE x between 1 and 2"),
        parse("delete from t where x between 1 and 2")
    );
}

#[test]
fn delete_printer_drops_star() {
    assert_eq!(parse("delete * from t").to_string(), "DELETE FROM t");
}

#[test]
fn delete_requires_from() {
    let _ = parse_err("delete t");
    let _ = parse_err("delete from");
    let _ = parse_err("delete a from t");
}
