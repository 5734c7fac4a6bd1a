// SPDX-License-Identifier: MIT

//! Attribute records for rule evaluation

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// Named attribute values a rule is evaluated against
///
/// A record is supplied fresh per evaluation call and is never owned or
/// mutated by the engine. Only integer and string attributes participate in
/// comparisons; anything else fails closed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Record {
    fields: HashMap<String, Value>,
}

impl Record {
    /// Create an empty record
    pub fn empty() -> Self {
        Self::default()
    }

    /// Set an attribute value
    pub fn set(&mut self, key: &str, value: Value) {
        self.fields.insert(key.to_string(), value);
    }

    /// Get an attribute value
    pub fn get(&self, key: &str) -> Option<&Value> {
        self.fields.get(key)
    }

    /// Get all attribute names
    pub fn keys(&self) -> impl Iterator<Item = &String> {
        self.fields.keys()
    }
}

impl From<HashMap<String, Value>> for Record {
    fn from(fields: HashMap<String, Value>) -> Self {
        Self { fields }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_record() {
        let record = Record::empty();
        assert!(record.get("anything").is_none());
    }

    #[test]
    fn test_set_and_get() {
        let mut record = Record::empty();
        record.set("age", json!(35));
        record.set("name", json!("Bob"));

        assert_eq!(record.get("age"), Some(&json!(35)));
        assert_eq!(record.get("name"), Some(&json!("Bob")));
    }

    #[test]
    fn test_keys() {
        let mut record = Record::empty();
        record.set("age", json!(35));
        record.set("name", json!("Bob"));

        let mut keys: Vec<&str> = record.keys().map(String::as_str).collect();
        keys.sort_unstable();
        assert_eq!(keys, ["age", "name"]);
    }

    #[test]
    fn test_deserialize_from_json_object() {
        let record: Record = serde_json::from_str(r#"{"age": 35, "name": "Bob"}"#).unwrap();
        assert_eq!(record.get("age"), Some(&json!(35)));
        assert_eq!(record.get("name"), Some(&json!("Bob")));
    }
}
