//! SQL statement AST types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

use super::expression::{write_list, Expr, Identifier, Literal};

/// An entry of the SELECT list.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum SelectItem {
    /// `*`, only ever the sole entry of the list.
    Wildcard,
    /// A selected expression.
    Expr(Expr),
}

impl fmt::Display for SelectItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Wildcard => f.write_str("*"),
            Self::Expr(expr) => expr.fmt(f),
        }
    }
}

/// A `LEFT JOIN table ON condition` clause.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct Join {
    /// The joined table.
    pub table: Identifier,
    /// The join condition.
    pub condition: Expr,
}

impl fmt::Display for Join {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LEFT JOIN {} ON {}", self.table, self.condition)
    }
}

/// The FROM clause: one table followed by its joins.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FromClause {
    /// The base table.
    pub table: Identifier,
    /// Joins, in source order.
    pub joins: Vec<Join>,
}

impl fmt::Display for FromClause {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FROM {}", self.table)?;
        for join in &self.joins {
            write!(f, " {join}")?;
        }
        Ok(())
    }
}

/// An ORDER BY entry.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct OrderItem {
    /// The expression to order by.
    pub expr: Expr,
    /// `true` unless `DESC` was given.
    pub ascending: bool,
}

impl fmt::Display for OrderItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.ascending {
            write!(f, "{} ASC", self.expr)
        } else {
            write!(f, "{} DESC", self.expr)
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct SelectStatement {
    /// The select list; `[SelectItem::Wildcard]` for `SELECT *`.
    pub items: Vec<SelectItem>,
    /// The FROM clause.
    pub from: FromClause,
    /// The WHERE clause.
    pub where_clause: Option<Expr>,
    /// GROUP BY fields (identifiers or qualified fields).
    pub group_by: Vec<Expr>,
    /// HAVING clause; only present together with GROUP BY.
    pub having: Option<Expr>,
    /// ORDER BY entries.
    pub order_by: Vec<OrderItem>,
}

impl fmt::Display for SelectStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SELECT ")?;
        write_list(f, &self.items)?;
        write!(f, " {}", self.from)?;
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        if !self.group_by.is_empty() {
            f.write_str(" GROUP BY ")?;
            write_list(f, &self.group_by)?;
        }
        if let Some(expr) = &self.having {
            write!(f, " HAVING {expr}")?;
        }
        if !self.order_by.is_empty() {
            f.write_str(" ORDER BY ")?;
            write_list(f, &self.order_by)?;
        }
        Ok(())
    }
}

/// An INSERT statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct InsertStatement {
    /// Target table.
    pub table: Identifier,
    /// Field names, when a field list was given.
    pub fields: Option<Vec<Identifier>>,
    /// Rows of literal values; never empty.
    pub rows: Vec<Vec<Literal>>,
}

impl fmt::Display for InsertStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "INSERT INTO {}", self.table)?;
        if let Some(fields) = &self.fields {
            f.write_str(" (")?;
            write_list(f, fields)?;
            f.write_str(")")?;
        }
        f.write_str(" VALUES ")?;
        for (i, row) in self.rows.iter().enumerate() {
            if i > 0 {
                f.write_str(", ")?;
            }
            f.write_str("(")?;
            write_list(f, row)?;
            f.write_str(")")?;
        }
        Ok(())
    }
}

/// An assignment in UPDATE SET.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UpdateAssignment {
    /// Field name.
    pub field: Identifier,
    /// Value expression.
    pub value: Expr,
}

impl fmt::Display for UpdateAssignment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} = {}", self.field, self.value)
    }
}

/// An UPDATE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct UpdateStatement {
    /// Target table.
    pub table: Identifier,
    /// SET assignments; never empty.
    pub assignments: Vec<UpdateAssignment>,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

impl fmt::Display for UpdateStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "UPDATE {} SET ", self.table)?;
        write_list(f, &self.assignments)?;
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        Ok(())
    }
}

/// A DELETE statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct DeleteStatement {
    /// Target table.
    pub table: Identifier,
    /// WHERE clause.
    pub where_clause: Option<Expr>,
}

impl fmt::Display for DeleteStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "DELETE FROM {}", self.table)?;
        if let Some(expr) = &self.where_clause {
            write!(f, " WHERE {expr}")?;
        }
        Ok(())
    }
}

/// An index definition.
///
/// Produced by `CREATE INDEX` (with `table` set) and by `INDEX ...`
/// entries inside `CREATE TABLE` (with `table` left empty, the table
/// being implicit).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CreateIndexSpec {
    /// Index name.
    pub name: Option<Identifier>,
    /// Indexed table.
    pub table: Option<Identifier>,
    /// Index method from `USING`.
    pub method: Option<Identifier>,
    /// Indexed fields; never empty.
    pub fields: Vec<Identifier>,
}

impl CreateIndexSpec {
    /// Returns true for an index declared inside `CREATE TABLE`.
    #[must_use]
    pub const fn is_inline(&self) -> bool {
        self.table.is_none()
    }
}

impl fmt::Display for CreateIndexSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.table.is_some() {
            f.write_str("CREATE ")?;
        }
        f.write_str("INDEX ")?;
        if let Some(name) = &self.name {
            write!(f, "{name} ")?;
        }
        if let Some(table) = &self.table {
            write!(f, "ON {table} ")?;
        }
        if let Some(method) = &self.method {
            write!(f, "USING {method} ")?;
        }
        f.write_str("(")?;
        write_list(f, &self.fields)?;
        f.write_str(")")
    }
}

/// A CREATE TABLE statement.
///
/// Only field names are captured; the dialect has no column types.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CreateTableStatement {
    /// Table name.
    pub table: Identifier,
    /// Field names; never empty.
    pub fields: Vec<Identifier>,
    /// Inline index definitions.
    pub indexes: Vec<CreateIndexSpec>,
}

impl fmt::Display for CreateTableStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CREATE TABLE {} (", self.table)?;
        write_list(f, &self.fields)?;
        for index in &self.indexes {
            write!(f, ", {index}")?;
        }
        f.write_str(")")
    }
}

/// A SQL statement.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Statement {
    /// SELECT statement.
    Select(SelectStatement),
    /// INSERT statement.
    Insert(InsertStatement),
    /// UPDATE statement.
    Update(UpdateStatement),
    /// DELETE statement.
    Delete(DeleteStatement),
    /// CREATE TABLE statement.
    CreateTable(CreateTableStatement),
    /// CREATE INDEX statement; `table` is always set.
    CreateIndex(CreateIndexSpec),
}

impl fmt::Display for Statement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Select(s) => s.fmt(f),
            Self::Insert(s) => s.fmt(f),
            Self::Update(s) => s.fmt(f),
            Self::Delete(s) => s.fmt(f),
            Self::CreateTable(s) => s.fmt(f),
            Self::CreateIndex(s) => s.fmt(f),
        }
    }
}
