//! Abstract Syntax Tree (AST) types for SQL statements.
//!
//! Every node owns its children. Nodes are built once by the parser and
//! implement `Display` as a canonical printer whose output re-parses to an
//! equal tree.

mod expression;
mod statement;

pub use expression::{BinaryOp, Expr, FunctionCall, Identifier, Literal, QualifiedField, TernaryOp};
pub use statement::{
    CreateIndexSpec, CreateTableStatement, DeleteStatement, FromClause, InsertStatement, Join,
    OrderItem, SelectItem, SelectStatement, Statement, UpdateAssignment, UpdateStatement,
};
