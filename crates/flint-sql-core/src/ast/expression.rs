//! Expression AST types.

use core::fmt;

#[cfg(feature = "serde")]
use serde::Serialize;

/// A bare name: column, table, index, method or function.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize), serde(transparent))]
pub struct Identifier {
    /// The name as written in the source.
    pub name: String,
}

impl Identifier {
    /// Creates a new identifier.
    #[must_use]
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }

    /// Returns the name.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.name
    }
}

impl From<&str> for Identifier {
    fn from(name: &str) -> Self {
        Self::new(name)
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// A literal value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Literal {
    /// Integer literal.
    Integer(i64),
    /// String literal, with `''` already collapsed to `'`.
    String(String),
}

impl Literal {
    /// Builds a string literal from the raw text between the quotes.
    #[must_use]
    pub fn from_quoted(raw: &str) -> Self {
        Self::String(raw.replace("''", "'"))
    }
}

impl fmt::Display for Literal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::String(s) => write!(f, "'{}'", s.replace('\'', "''")),
        }
    }
}

/// A `table.field` reference.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct QualifiedField {
    /// Table name.
    pub table: Identifier,
    /// Field name.
    pub field: Identifier,
}

impl fmt::Display for QualifiedField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}", self.table, self.field)
    }
}

/// A function call expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct FunctionCall {
    /// The function name.
    pub name: Identifier,
    /// The arguments, each a single value (no operators).
    pub args: Vec<Expr>,
}

impl fmt::Display for FunctionCall {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}(", self.name)?;
        write_list(f, &self.args)?;
        f.write_str(")")
    }
}

/// Binary operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum BinaryOp {
    // Arithmetic
    Add,
    Sub,
    Mul,
    Div,

    // Comparison
    Eq,
    Lt,
    Gt,
    LtEq,
    GtEq,

    // Logical
    And,
    Or,
}

impl BinaryOp {
    /// Returns the SQL representation of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
            Self::Eq => "=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::LtEq => "<=",
            Self::GtEq => ">=",
            Self::And => "AND",
            Self::Or => "OR",
        }
    }

    /// Returns the precedence of the operator (higher = binds tighter).
    ///
    /// `AND` and `OR` share one level: `a AND b OR c` groups left to right.
    #[must_use]
    pub const fn precedence(&self) -> u8 {
        match self {
            Self::Mul | Self::Div => 20,
            Self::Add | Self::Sub => 10,
            Self::Eq | Self::Lt | Self::Gt | Self::LtEq | Self::GtEq => 5,
            Self::And | Self::Or => 1,
        }
    }

    /// Returns true for `=`, `<`, `>`, `<=` and `>=`.
    #[must_use]
    pub const fn is_comparison(&self) -> bool {
        matches!(
            self,
            Self::Eq | Self::Lt | Self::Gt | Self::LtEq | Self::GtEq
        )
    }

    /// Returns true for `AND` and `OR`.
    #[must_use]
    pub const fn is_logical(&self) -> bool {
        matches!(self, Self::And | Self::Or)
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Three-operand operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum TernaryOp {
    /// `subject BETWEEN start AND end`
    Between,
}

impl TernaryOp {
    /// Returns the SQL keyword of the operator.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Between => "BETWEEN",
        }
    }
}

/// An SQL expression.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub enum Expr {
    /// A literal value.
    Literal(Literal),

    /// A bare identifier.
    Identifier(Identifier),

    /// A `table.field` reference.
    QualifiedField(QualifiedField),

    /// A function call.
    Function(FunctionCall),

    /// A binary expression.
    Binary {
        /// Left operand.
        left: Box<Expr>,
        /// Operator.
        op: BinaryOp,
        /// Right operand.
        right: Box<Expr>,
    },

    /// A three-operand expression.
    Ternary {
        /// Operator.
        op: TernaryOp,
        /// The value being tested.
        subject: Box<Expr>,
        /// Lower bound.
        start: Box<Expr>,
        /// Upper bound.
        end: Box<Expr>,
    },
}

impl Expr {
    /// Creates a bare identifier.
    #[must_use]
    pub fn ident(name: impl Into<String>) -> Self {
        Self::Identifier(Identifier::new(name))
    }

    /// Creates a `table.field` reference.
    #[must_use]
    pub fn qualified(table: impl Into<String>, field: impl Into<String>) -> Self {
        Self::QualifiedField(QualifiedField {
            table: Identifier::new(table),
            field: Identifier::new(field),
        })
    }

    /// Creates a function call.
    #[must_use]
    pub fn function(name: impl Into<String>, args: Vec<Self>) -> Self {
        Self::Function(FunctionCall {
            name: Identifier::new(name),
            args,
        })
    }

    /// Creates an integer literal.
    #[must_use]
    pub const fn integer(value: i64) -> Self {
        Self::Literal(Literal::Integer(value))
    }

    /// Creates a string literal from an unescaped value.
    #[must_use]
    pub fn string(value: impl Into<String>) -> Self {
        Self::Literal(Literal::String(value.into()))
    }

    /// Creates a binary expression.
    #[must_use]
    pub fn binary(self, op: BinaryOp, right: Self) -> Self {
        Self::Binary {
            left: Box::new(self),
            op,
            right: Box::new(right),
        }
    }

    /// Creates an addition.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, right: Self) -> Self {
        self.binary(BinaryOp::Add, right)
    }

    /// Creates a subtraction.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn sub(self, right: Self) -> Self {
        self.binary(BinaryOp::Sub, right)
    }

    /// Creates a multiplication.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn mul(self, right: Self) -> Self {
        self.binary(BinaryOp::Mul, right)
    }

    /// Creates a division.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn div(self, right: Self) -> Self {
        self.binary(BinaryOp::Div, right)
    }

    /// Creates an equality expression.
    #[must_use]
    pub fn eq(self, right: Self) -> Self {
        self.binary(BinaryOp::Eq, right)
    }

    /// Creates a less-than expression.
    #[must_use]
    pub fn lt(self, right: Self) -> Self {
        self.binary(BinaryOp::Lt, right)
    }

    /// Creates a greater-than expression.
    #[must_use]
    pub fn gt(self, right: Self) -> Self {
        self.binary(BinaryOp::Gt, right)
    }

    /// Creates an AND expression.
    #[must_use]
    pub fn and(self, right: Self) -> Self {
        self.binary(BinaryOp::And, right)
    }

    /// Creates an OR expression.
    #[must_use]
    pub fn or(self, right: Self) -> Self {
        self.binary(BinaryOp::Or, right)
    }

    /// Creates a BETWEEN expression.
    #[must_use]
    pub fn between(self, start: Self, end: Self) -> Self {
        Self::Ternary {
            op: TernaryOp::Between,
            subject: Box::new(self),
            start: Box::new(start),
            end: Box::new(end),
        }
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Literal(lit) => lit.fmt(f),
            Self::Identifier(ident) => ident.fmt(f),
            Self::QualifiedField(qf) => qf.fmt(f),
            Self::Function(call) => call.fmt(f),
            Self::Binary { left, op, right } => write!(f, "{left} {op} {right}"),
            Self::Ternary {
                op,
                subject,
                start,
                end,
            } => write!(f, "{subject} {} {start} AND {end}", op.as_str()),
        }
    }
}

/// Writes `items` separated by `, `.
pub(crate) fn write_list<T: fmt::Display>(f: &mut fmt::Formatter<'_>, items: &[T]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        item.fmt(f)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_binary_op_precedence() {
        assert!(BinaryOp::Mul.precedence() > BinaryOp::Add.precedence());
        assert!(BinaryOp::Add.precedence() > BinaryOp::Eq.precedence());
        assert!(BinaryOp::Eq.precedence() > BinaryOp::And.precedence());
        assert_eq!(BinaryOp::And.precedence(), BinaryOp::Or.precedence());
    }

    #[test]
    fn test_string_literal_escaping() {
        assert_eq!(Literal::from_quoted("it''s"), Literal::String("it's".into()));
        assert_eq!(Literal::String("it's".into()).to_string(), "'it''s'");
    }

    #[test]
    fn test_display_expression() {
        let expr = Expr::qualified("u", "age")
            .gt(Expr::integer(18))
            .and(Expr::function("lower", vec![Expr::ident("name")]).eq(Expr::string("bob")));
        assert_eq!(expr.to_string(), "u.age > 18 AND lower(name) = 'bob'");
    }

    #[test]
    fn test_display_between() {
        let expr = Expr::ident("x").between(Expr::integer(1), Expr::integer(10));
        assert_eq!(expr.to_string(), "x BETWEEN 1 AND 10");
    }

    #[test]
    fn test_display_empty_call() {
        assert_eq!(Expr::function("now", vec![]).to_string(), "now()");
    }
}
