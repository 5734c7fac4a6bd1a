//! Rule tree evaluator
//!
//! Walks an expression tree and reduces it to a boolean against a record.
//! Evaluation is fail-closed: a malformed condition, a missing attribute, a
//! type mismatch or an unparseable literal all yield `false`, never an error.

use super::ast::{LogicalOp, Node};
use super::record::Record;
use serde_json::Value;

/// Evaluate a rule tree against a record
///
/// Both children of an operator node are always evaluated; condition lookup
/// is side-effect-free, so there is nothing to short-circuit past.
pub fn evaluate(node: &Node, record: &Record) -> bool {
    match node {
        Node::Operator { op, left, right } => {
            let left_result = evaluate(left, record);
            let right_result = evaluate(right, record);
            match op {
                LogicalOp::And => left_result && right_result,
                LogicalOp::Or => left_result || right_result,
            }
        }
        Node::Operand { value } => evaluate_condition(value, record),
    }
}

/// Evaluate one `attribute operator literal` condition
fn evaluate_condition(condition: &str, record: &Record) -> bool {
    let parts: Vec<&str> = condition.split(' ').collect();
    if parts.len() != 3 {
        return false;
    }

    let attribute = parts[0];
    let operator = parts[1];
    let literal = parts[2]
        .trim_end_matches(')')
        .trim_matches(|c| c == '\'' || c == '"');

    match record.get(attribute) {
        Some(Value::Number(n)) => match (n.as_i64(), literal.parse::<i64>()) {
            (Some(actual), Ok(expected)) => match operator {
                ">" => actual > expected,
                "<" => actual < expected,
                "=" => actual == expected,
                _ => false,
            },
            _ => false,
        },
        // String attributes always compare by equality; the stated operator
        // is ignored.
        Some(Value::String(s)) => s == literal,
        _ => false,
    }
}
