//! Syntax tree for visibility conditions.
//!
//! The tree is owned and immutable once built. Every compound node is an
//! S-expression with a fixed operator arity, so there is no precedence to
//! record.

mod operators;


pub use operators::{Arity, BinaryOp, Operator, UnaryOp};

use std::fmt;
use std::hash::{Hash, Hasher};
use std::mem;

use vis_stack::ensure_sufficient_stack;

/// Expression node.
///
/// Parsed conditions can nest arbitrarily deep, so every trait that walks
/// the tree (`Clone`, `PartialEq`, `Hash`, `Debug`, `Display`, `Drop`) is
/// written by hand to either grow the stack per level or work from an
/// explicit queue.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Expr {
    /// Reference to a host-supplied variable.
    Variable(String),
    Int(i64),
    /// String constant, without its quotes.
    Str(String),
    Bool(bool),
    Unary {
        op: UnaryOp,
        #[cfg_attr(
            feature = "serde",
            serde(serialize_with = "serialize_child", deserialize_with = "deserialize_child")
        )]
        operand: Box<Expr>,
    },
    Binary {
        op: BinaryOp,
        #[cfg_attr(
            feature = "serde",
            serde(serialize_with = "serialize_child", deserialize_with = "deserialize_child")
        )]
        left: Box<Expr>,
        #[cfg_attr(
            feature = "serde",
            serde(serialize_with = "serialize_child", deserialize_with = "deserialize_child")
        )]
        right: Box<Expr>,
    },
}

impl Expr {
    pub fn variable(name: impl Into<String>) -> Self {
        Expr::Variable(name.into())
    }

    pub fn string(value: impl Into<String>) -> Self {
        Expr::Str(value.into())
    }

    pub fn unary(op: UnaryOp, operand: Expr) -> Self {
        Expr::Unary {
            op,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: BinaryOp, left: Expr, right: Expr) -> Self {
        Expr::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Number of nodes in the tree.
    pub fn node_count(&self) -> usize {
        let mut count = 0;
        let mut pending = vec![self];
        while let Some(expr) = pending.pop() {
            count += 1;
            match expr {
                Expr::Variable(_) | Expr::Int(_) | Expr::Str(_) | Expr::Bool(_) => {}
                Expr::Unary { operand, .. } => pending.push(operand),
                Expr::Binary { left, right, .. } => {
                    pending.push(left);
                    pending.push(right);
                }
            }
        }
        count
    }

    fn has_children(&self) -> bool {
        matches!(self, Expr::Unary { .. } | Expr::Binary { .. })
    }

    /// Move compound children into `pending`, leaving leaves in their place.
    fn detach_children(&mut self, pending: &mut Vec<Expr>) {
        let mut detach = |child: &mut Expr| {
            if child.has_children() {
                pending.push(mem::replace(child, Expr::Bool(false)));
            }
        };
        match self {
            Expr::Variable(_) | Expr::Int(_) | Expr::Str(_) | Expr::Bool(_) => {}
            Expr::Unary { operand, .. } => detach(&mut **operand),
            Expr::Binary { left, right, .. } => {
                detach(&mut **left);
                detach(&mut **right);
            }
        }
    }
}

impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);
        // Each popped node loses its compound children before it is dropped,
        // so its own `drop` finds only leaves.
        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Clone for Expr {
    fn clone(&self) -> Self {
        ensure_sufficient_stack(|| match self {
            Expr::Variable(name) => Expr::Variable(name.clone()),
            Expr::Int(value) => Expr::Int(*value),
            Expr::Str(value) => Expr::Str(value.clone()),
            Expr::Bool(value) => Expr::Bool(*value),
            Expr::Unary { op, operand } => Expr::Unary {
                op: *op,
                operand: operand.clone(),
            },
            Expr::Binary { op, left, right } => Expr::Binary {
                op: *op,
                left: left.clone(),
                right: right.clone(),
            },
        })
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        ensure_sufficient_stack(|| match (self, other) {
            (Expr::Variable(a), Expr::Variable(b)) | (Expr::Str(a), Expr::Str(b)) => a == b,
            (Expr::Int(a), Expr::Int(b)) => a == b,
            (Expr::Bool(a), Expr::Bool(b)) => a == b,
            (
                Expr::Unary { op, operand },
                Expr::Unary {
                    op: other_op,
                    operand: other_operand,
                },
            ) => op == other_op && operand == other_operand,
            (
                Expr::Binary { op, left, right },
                Expr::Binary {
                    op: other_op,
                    left: other_left,
                    right: other_right,
                },
            ) => op == other_op && left == other_left && right == other_right,
            _ => false,
        })
    }
}

impl Eq for Expr {}

impl Hash for Expr {
    fn hash<H: Hasher>(&self, state: &mut H) {
        ensure_sufficient_stack(|| {
            mem::discriminant(self).hash(state);
            match self {
                Expr::Variable(name) => name.hash(state),
                Expr::Int(value) => value.hash(state),
                Expr::Str(value) => value.hash(state),
                Expr::Bool(value) => value.hash(state),
                Expr::Unary { op, operand } => {
                    op.hash(state);
                    operand.hash(state);
                }
                Expr::Binary { op, left, right } => {
                    op.hash(state);
                    left.hash(state);
                    right.hash(state);
                }
            }
        });
    }
}

impl fmt::Debug for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Variable(name) => f.debug_tuple("Variable").field(name).finish(),
            Expr::Int(value) => f.debug_tuple("Int").field(value).finish(),
            Expr::Str(value) => f.debug_tuple("Str").field(value).finish(),
            Expr::Bool(value) => f.debug_tuple("Bool").field(value).finish(),
            Expr::Unary { op, operand } => f
                .debug_struct("Unary")
                .field("op", op)
                .field("operand", operand)
                .finish(),
            Expr::Binary { op, left, right } => f
                .debug_struct("Binary")
                .field("op", op)
                .field("left", left)
                .field("right", right)
                .finish(),
        })
    }
}

#[cfg(feature = "serde")]
fn serialize_child<S: serde::Serializer>(child: &Expr, serializer: S) -> Result<S::Ok, S::Error> {
    ensure_sufficient_stack(|| serde::Serialize::serialize(child, serializer))
}

#[cfg(feature = "serde")]
fn deserialize_child<'de, D: serde::Deserializer<'de>>(
    deserializer: D,
) -> Result<Box<Expr>, D::Error> {
    ensure_sufficient_stack(|| <Box<Expr> as serde::Deserialize>::deserialize(deserializer))
}

/// Prints the canonical source form: single spaces, fully parenthesised,
/// strings re-quoted. Lexing and parsing the output yields an equal tree.
impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        ensure_sufficient_stack(|| match self {
            Expr::Variable(name) => f.write_str(name),
            Expr::Int(value) => write!(f, "{value}"),
            Expr::Str(value) => write!(f, "\"{value}\""),
            Expr::Bool(value) => write!(f, "{value}"),
            Expr::Unary { op, operand } => write!(f, "({op} {operand})"),
            Expr::Binary { op, left, right } => write!(f, "({op} {left} {right})"),
        })
    }
}
