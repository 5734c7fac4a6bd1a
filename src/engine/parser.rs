//! Shunting-yard rule parser
//!
//! Builds a binary expression tree from a token stream using two stacks: an
//! operand stack of exclusively-owned subtrees and an operator stack of
//! pending connectives and open parentheses. `AND` binds tighter than `OR`;
//! same-precedence runs associate to the left.

use super::ast::{LogicalOp, Node};
use super::tokenizer::tokenize;
use crate::error::RuleError;

/// Pending entries on the operator stack
#[derive(Debug, Clone, Copy)]
enum OpToken {
    OpenParen,
    Logical(LogicalOp),
}

/// Parse a rule string into an expression tree
pub fn build(rule: &str) -> Result<Node, RuleError> {
    let tokens = tokenize(rule);
    if tokens.is_empty() {
        return Err(RuleError::EmptyExpression);
    }

    let mut operands: Vec<Node> = Vec::new();
    let mut operators: Vec<OpToken> = Vec::new();

    for token in &tokens {
        match token.as_str() {
            "(" => operators.push(OpToken::OpenParen),
            ")" => loop {
                match operators.pop() {
                    Some(OpToken::OpenParen) => break,
                    Some(OpToken::Logical(op)) => apply(&mut operands, op)?,
                    None => return Err(RuleError::UnbalancedParens),
                }
            },
            "AND" | "OR" => {
                let op = if token == "AND" {
                    LogicalOp::And
                } else {
                    LogicalOp::Or
                };
                // Pop anything that binds at least as tightly before pushing;
                // an open paren stops the drain.
                while let Some(OpToken::Logical(top)) = operators.last().copied() {
                    if top.precedence() < op.precedence() {
                        break;
                    }
                    operators.pop();
                    apply(&mut operands, top)?;
                }
                operators.push(OpToken::Logical(op));
            }
            _ => operands.push(Node::operand(token.clone())),
        }
    }

    while let Some(entry) = operators.pop() {
        match entry {
            OpToken::OpenParen => return Err(RuleError::UnbalancedParens),
            OpToken::Logical(op) => apply(&mut operands, op)?,
        }
    }

    let root = operands.pop().ok_or(RuleError::EmptyExpression)?;
    if !operands.is_empty() {
        return Err(RuleError::DanglingOperands);
    }

    log::debug!("Built rule tree: {}", root);
    Ok(root)
}

/// Pop two subtrees (right first, since the left was pushed first) and push
/// the joined operator node back onto the operand stack
fn apply(operands: &mut Vec<Node>, op: LogicalOp) -> Result<(), RuleError> {
    let right = operands
        .pop()
        .ok_or_else(|| RuleError::MissingOperand(op.to_string()))?;
    let left = operands
        .pop()
        .ok_or_else(|| RuleError::MissingOperand(op.to_string()))?;
    operands.push(Node::operator(op, left, right));
    Ok(())
}

/// Fold several rules into one tree, joining pairwise with `OR` left-to-right
///
/// Each rule is built independently; a malformed rule anywhere in the list
/// fails the whole combination.
pub fn combine<S: AsRef<str>>(rules: &[S]) -> Result<Node, RuleError> {
    let mut iter = rules.iter();
    let first = iter.next().ok_or(RuleError::NoRules)?;
    let mut combined = build(first.as_ref())?;
    for rule in iter {
        let next = build(rule.as_ref())?;
        combined = Node::operator(LogicalOp::Or, combined, next);
    }
    Ok(combined)
}
