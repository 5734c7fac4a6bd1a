// SPDX-License-Identifier: MIT

//! ruleflow - a small boolean rule engine
//!
//! Rules are plain strings combining comparisons with `AND`/`OR` and
//! parentheses, e.g. `(age > 30 AND department = 'Sales') OR experience > 5`.
//! A rule is parsed into a binary expression tree and evaluated against a
//! [`Record`](engine::Record) of named attribute values.
//!
//! The engine surface is four operations:
//! - [`engine::build`] - rule string to expression tree
//! - [`engine::evaluate`] - tree plus record to boolean
//! - [`engine::combine`] - fold several rules into one tree via `OR`
//! - [`session::RuleSession`] - caller-scoped storage for submitted rules

pub mod engine;
pub mod error;
pub mod session;

pub use engine::{build, combine, evaluate, LogicalOp, Node, Record};
pub use error::RuleError;
pub use session::{RuleSession, StoredRule};
