// SPDX-License-Identifier: MIT

//! Rule parsing and evaluation
//!
//! This module turns rule strings into expression trees and evaluates them.
//! Rules are built from conditions of the form `attribute op literal`:
//! - `age > 30`
//! - `department = 'Sales'`
//! - `(age > 30 AND salary > 50000) OR experience > 5`

mod ast;
mod evaluator;
mod parser;
mod record;
mod tokenizer;

pub use ast::{LogicalOp, Node};
pub use evaluator::evaluate;
pub use parser::{build, combine};
pub use record::Record;
pub use tokenizer::tokenize;
