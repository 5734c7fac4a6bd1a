// SPDX-License-Identifier: MIT

//! Typed error handling for ruleflow
//!
//! Every variant raised while building a tree is a malformed-rule condition;
//! evaluation itself never fails and always produces a boolean (fail-closed).

use thiserror::Error;

/// Errors raised by the rule engine
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleError {
    /// Rule string contained no tokens at all
    #[error("Empty rule expression")]
    EmptyExpression,

    /// Unmatched `(` or `)` in the rule string
    #[error("Unbalanced parentheses in rule")]
    UnbalancedParens,

    /// A logical operator without two operands to join
    #[error("Operator '{0}' is missing an operand")]
    MissingOperand(String),

    /// Tokens left over after parsing; the rule did not reduce to one tree
    #[error("Rule did not reduce to a single expression")]
    DanglingOperands,

    /// `combine` was called with no rules to fold
    #[error("Cannot combine an empty list of rules")]
    NoRules,

    /// A session was asked to evaluate before any rule was submitted
    #[error("No rule has been submitted yet")]
    NoActiveRule,
}
