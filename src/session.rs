// SPDX-License-Identifier: MIT

//! Caller-scoped rule storage
//!
//! A [`RuleSession`] owns the rules one caller has submitted and the tree of
//! the most recently submitted one. It replaces any notion of a process-wide
//! "current rule": each caller holds its own session, and sharing one across
//! threads is the caller's concern (wrap it in a lock if needed).

use crate::engine::{build, combine, evaluate, Node, Record};
use crate::error::RuleError;
use uuid::Uuid;

/// A rule a session has accepted, identified for later removal
///
/// Only the rule string is kept; trees are rebuilt from text on demand and
/// never persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredRule {
    pub id: Uuid,
    pub text: String,
}

/// Per-caller rule state: submitted rules plus the active tree
#[derive(Debug, Default)]
pub struct RuleSession {
    rules: Vec<StoredRule>,
    active: Option<ActiveRule>,
}

#[derive(Debug)]
struct ActiveRule {
    text: String,
    tree: Node,
}

impl RuleSession {
    /// Create an empty session
    pub fn new() -> Self {
        Self::default()
    }

    /// Submit a rule: build its tree, store the text, make it active
    ///
    /// A malformed rule is rejected without touching session state. The
    /// newest accepted rule always becomes the active one.
    pub fn submit(&mut self, text: &str) -> Result<Uuid, RuleError> {
        let tree = build(text)?;
        log::debug!("Accepted rule {:?} as {}", text, tree);

        let rule = StoredRule {
            id: Uuid::new_v4(),
            text: text.to_string(),
        };
        let id = rule.id;
        self.rules.push(rule);
        self.active = Some(ActiveRule {
            text: text.to_string(),
            tree,
        });
        Ok(id)
    }

    /// Evaluate the active rule against a record
    pub fn evaluate(&self, record: &Record) -> Result<bool, RuleError> {
        let active = self.active.as_ref().ok_or(RuleError::NoActiveRule)?;
        Ok(evaluate(&active.tree, record))
    }

    /// The text of the active rule, if any
    pub fn current_rule(&self) -> Option<&str> {
        self.active.as_ref().map(|a| a.text.as_str())
    }

    /// All rules this session has accepted, in submission order
    pub fn rules(&self) -> &[StoredRule] {
        &self.rules
    }

    /// Remove a stored rule by id; returns whether anything was removed
    ///
    /// The active tree is untouched even when its source rule is removed;
    /// it stays in force until the next submission.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.rules.len();
        self.rules.retain(|rule| rule.id != id);
        self.rules.len() != before
    }

    /// Fold every stored rule into one tree via `OR`
    pub fn combine_all(&self) -> Result<Node, RuleError> {
        let texts: Vec<&str> = self.rules.iter().map(|rule| rule.text.as_str()).collect();
        combine(&texts)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn record_with(pairs: Vec<(&str, serde_json::Value)>) -> Record {
        let mut record = Record::empty();
        for (k, v) in pairs {
            record.set(k, v);
        }
        record
    }

    #[test]
    fn test_evaluate_before_submit() {
        let session = RuleSession::new();
        let record = record_with(vec![("age", json!(35))]);
        assert_eq!(session.evaluate(&record), Err(RuleError::NoActiveRule));
    }

    #[test]
    fn test_submit_and_evaluate() {
        let mut session = RuleSession::new();
        session.submit("age > 30").unwrap();

        assert!(session
            .evaluate(&record_with(vec![("age", json!(35))]))
            .unwrap());
        assert!(!session
            .evaluate(&record_with(vec![("age", json!(25))]))
            .unwrap());
    }

    #[test]
    fn test_newest_rule_wins() {
        let mut session = RuleSession::new();
        session.submit("age > 30").unwrap();
        session.submit("age < 30").unwrap();

        assert_eq!(session.current_rule(), Some("age < 30"));
        assert!(session
            .evaluate(&record_with(vec![("age", json!(25))]))
            .unwrap());
    }

    #[test]
    fn test_malformed_rule_rejected_without_side_effects() {
        let mut session = RuleSession::new();
        session.submit("age > 30").unwrap();

        assert!(session.submit("(broken").is_err());
        assert_eq!(session.rules().len(), 1);
        assert_eq!(session.current_rule(), Some("age > 30"));
    }

    #[test]
    fn test_remove_by_id() {
        let mut session = RuleSession::new();
        let id = session.submit("age > 30").unwrap();
        session.submit("status = 'active'").unwrap();

        assert!(session.remove(id));
        assert!(!session.remove(id));
        assert_eq!(session.rules().len(), 1);
        assert_eq!(session.rules()[0].text, "status = 'active'");
    }

    #[test]
    fn test_combine_all() {
        let mut session = RuleSession::new();
        session.submit("age > 30").unwrap();
        session.submit("status = 'active'").unwrap();

        let tree = session.combine_all().unwrap();
        let record = record_with(vec![("age", json!(10)), ("status", json!("active"))]);
        assert!(crate::engine::evaluate(&tree, &record));

        let record = record_with(vec![("age", json!(10)), ("status", json!("inactive"))]);
        assert!(!crate::engine::evaluate(&tree, &record));
    }

    #[test]
    fn test_combine_all_empty_session() {
        let session = RuleSession::new();
        assert_eq!(session.combine_all(), Err(RuleError::NoRules));
    }
}
