// SPDX-License-Identifier: MIT

//! Expression tree for parsed rules

use std::fmt;

/// A node in a parsed rule tree
///
/// Operand leaves hold the raw condition text (e.g. `age > 30`); operator
/// nodes join exactly two subtrees with a logical connective. Children are
/// exclusively owned by their parent and trees are never mutated after
/// construction.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// Leaf holding one raw condition string
    Operand { value: String },
    /// Logical connective over two subtrees
    Operator {
        op: LogicalOp,
        left: Box<Node>,
        right: Box<Node>,
    },
}

/// Logical connectives supported in rules
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalOp {
    And,
    Or,
}

impl LogicalOp {
    /// Binding strength; `AND` binds tighter than `OR`
    pub(crate) fn precedence(self) -> u8 {
        match self {
            LogicalOp::And => 2,
            LogicalOp::Or => 1,
        }
    }
}

impl Node {
    /// Create an operand leaf
    pub fn operand(value: impl Into<String>) -> Self {
        Node::Operand {
            value: value.into(),
        }
    }

    /// Create an operator node owning both subtrees
    pub fn operator(op: LogicalOp, left: Node, right: Node) -> Self {
        Node::Operator {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Number of operand leaves in this tree
    pub fn operand_count(&self) -> usize {
        match self {
            Node::Operand { .. } => 1,
            Node::Operator { left, right, .. } => left.operand_count() + right.operand_count(),
        }
    }

    /// Number of operator nodes in this tree
    pub fn operator_count(&self) -> usize {
        match self {
            Node::Operand { .. } => 0,
            Node::Operator { left, right, .. } => {
                1 + left.operator_count() + right.operator_count()
            }
        }
    }
}

impl fmt::Display for LogicalOp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LogicalOp::And => write!(f, "AND"),
            LogicalOp::Or => write!(f, "OR"),
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Node::Operand { value } => write!(f, "{}", value),
            Node::Operator { op, left, right } => write!(f, "({} {} {})", left, op, right),
        }
    }
}
