//! Binding powers for precedence climbing.
//!
//! The dialect has two independent operator tiers: arithmetic operators
//! combine values into expressions, and logical operators combine
//! predicates. Each tier is climbed separately.

use crate::ast::BinaryOp;
use crate::lexer::{Keyword, TokenKind};

/// Returns the arithmetic binding power for a token.
///
/// Returns `(left_bp, right_bp)` where:
/// - Higher binding power = binds tighter
/// - Left associative: `left_bp < right_bp`
///
/// Returns `None` if the token is not an arithmetic operator.
#[must_use]
pub const fn arithmetic_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Plus | TokenKind::Minus => Some((10, 11)),
        TokenKind::Star | TokenKind::Slash => Some((20, 21)),
        _ => None,
    }
}

/// Returns the logical binding power for a token.
///
/// `AND` and `OR` share a single level, so mixed chains group strictly
/// left to right.
#[must_use]
pub const fn logical_binding_power(kind: &TokenKind) -> Option<(u8, u8)> {
    match kind {
        TokenKind::Keyword(Keyword::And | Keyword::Or) => Some((1, 2)),
        _ => None,
    }
}

/// Converts a token to a binary operator.
#[must_use]
pub const fn token_to_binary_op(kind: &TokenKind) -> Option<BinaryOp> {
    match kind {
        TokenKind::Plus => Some(BinaryOp::Add),
        TokenKind::Minus => Some(BinaryOp::Sub),
        TokenKind::Star => Some(BinaryOp::Mul),
        TokenKind::Slash => Some(BinaryOp::Div),
        TokenKind::Eq => Some(BinaryOp::Eq),
        TokenKind::Lt => Some(BinaryOp::Lt),
        TokenKind::LtEq => Some(BinaryOp::LtEq),
        TokenKind::Gt => Some(BinaryOp::Gt),
        TokenKind::GtEq => Some(BinaryOp::GtEq),
        TokenKind::Keyword(Keyword::And) => Some(BinaryOp::And),
        TokenKind::Keyword(Keyword::Or) => Some(BinaryOp::Or),
        _ => None,
    }
}

/// Converts a token to a comparison operator.
#[must_use]
pub const fn token_to_comparison_op(kind: &TokenKind) -> Option<BinaryOp> {
    match token_to_binary_op(kind) {
        Some(op) if op.is_comparison() => Some(op),
        _ => None,
    }
}
