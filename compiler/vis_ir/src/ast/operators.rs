//! Operators
//!
//! The operator set is closed. Each operator is spelled as a bare keyword
//! in the head position of an S-expression: `(not x)`, `(gte a b)`.

use std::fmt;

/// Unary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum UnaryOp {
    Not,
}

impl UnaryOp {
    /// Source keyword for this operator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::Not => "not",
        }
    }
}

/// Binary operators.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BinaryOp {
    // Logical
    And,
    Or,

    // Equality
    Eq,
    NotEq,

    // Ordering
    Gt,
    Lt,
    GtEq,
    LtEq,
}

impl BinaryOp {
    /// Source keyword for this operator.
    pub const fn name(self) -> &'static str {
        match self {
            Self::And => "and",
            Self::Or => "or",
            Self::Eq => "eq",
            Self::NotEq => "neq",
            Self::Gt => "gt",
            Self::Lt => "lt",
            Self::GtEq => "gte",
            Self::LtEq => "lte",
        }
    }
}

/// Number of operands an operator takes.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Arity {
    One,
    Two,
}

impl fmt::Display for Arity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::One => f.write_str("one operand"),
            Self::Two => f.write_str("two operands"),
        }
    }
}

/// Any operator that may head an S-expression.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Operator {
    Unary(UnaryOp),
    Binary(BinaryOp),
}

impl Operator {
    /// Every operator, in keyword-table order.
    pub const ALL: [Operator; 9] = [
        Operator::Unary(UnaryOp::Not),
        Operator::Binary(BinaryOp::And),
        Operator::Binary(BinaryOp::Or),
        Operator::Binary(BinaryOp::Eq),
        Operator::Binary(BinaryOp::NotEq),
        Operator::Binary(BinaryOp::Gt),
        Operator::Binary(BinaryOp::Lt),
        Operator::Binary(BinaryOp::GtEq),
        Operator::Binary(BinaryOp::LtEq),
    ];

    /// Look up an operator by its keyword. Matching is case-sensitive.
    pub fn from_name(name: &str) -> Option<Operator> {
        let op = match name {
            "not" => Operator::Unary(UnaryOp::Not),
            "and" => Operator::Binary(BinaryOp::And),
            "or" => Operator::Binary(BinaryOp::Or),
            "eq" => Operator::Binary(BinaryOp::Eq),
            "neq" => Operator::Binary(BinaryOp::NotEq),
            "gt" => Operator::Binary(BinaryOp::Gt),
            "lt" => Operator::Binary(BinaryOp::Lt),
            "gte" => Operator::Binary(BinaryOp::GtEq),
            "lte" => Operator::Binary(BinaryOp::LtEq),
            _ => return None,
        };
        Some(op)
    }

    pub const fn name(self) -> &'static str {
        match self {
            Self::Unary(op) => op.name(),
            Self::Binary(op) => op.name(),
        }
    }

    pub const fn arity(self) -> Arity {
        match self {
            Self::Unary(_) => Arity::One,
            Self::Binary(_) => Arity::Two,
        }
    }
}

impl fmt::Display for UnaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
