//! Field-equality selectors for live-state queries
//!
//! A [`Selector`] is a conjunction of `field = value` clauses evaluated
//! against decoded JSON documents. It is the only query shape the ledger
//! seam supports; richer predicates belong to the store behind it.
//!
//! Selectors trust the caller: a clause naming a field no document carries
//! simply matches nothing. Stores must treat that as an empty result, not
//! an error.

use crate::record::DOC_TYPE;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Conjunctive field-equality query over live documents.
///
/// Clauses are kept in field-name order so two selectors built from the
/// same clauses compare and render identically.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Selector {
    clauses: BTreeMap<String, String>,
}

impl Selector {
    /// Empty selector. Matches every live document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Selector scoped to birth-certificate documents
    /// (`docType = "birthCert"`).
    pub fn birth_certs() -> Self {
        Self::new().eq("docType", DOC_TYPE)
    }

    /// Add an equality clause. Re-adding a field replaces its value.
    pub fn eq(mut self, field: impl Into<String>, value: impl Into<String>) -> Self {
        self.clauses.insert(field.into(), value.into());
        self
    }

    /// True when the selector has no clauses.
    pub fn is_empty(&self) -> bool {
        self.clauses.is_empty()
    }

    /// Number of clauses.
    pub fn len(&self) -> usize {
        self.clauses.len()
    }

    /// Iterate clauses in field-name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.clauses.iter().map(|(f, v)| (f.as_str(), v.as_str()))
    }

    /// Evaluate the selector against a decoded document.
    ///
    /// Every clause must find a string-valued field equal to its value.
    /// Non-object documents match only the empty selector; a clause naming
    /// an absent or non-string field fails the match.
    pub fn matches(&self, doc: &serde_json::Value) -> bool {
        if self.clauses.is_empty() {
            return true;
        }
        let Some(obj) = doc.as_object() else {
            return false;
        };
        self.clauses
            .iter()
            .all(|(field, value)| obj.get(field).and_then(|v| v.as_str()) == Some(value))
    }
}

impl fmt::Display for Selector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, (field, value)) in self.clauses.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{field}={value:?}")?;
        }
        write!(f, "}}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_empty_selector_matches_everything() {
        let sel = Selector::new();
        assert!(sel.is_empty());
        assert!(sel.matches(&json!({"a": "b"})));
        assert!(sel.matches(&json!("bare string")));
        assert!(sel.matches(&json!(null)));
    }

    #[test]
    fn test_single_clause_equality() {
        let sel = Selector::new().eq("docType", "birthCert");
        assert!(sel.matches(&json!({"docType": "birthCert", "id": "BC001"})));
        assert!(!sel.matches(&json!({"docType": "marriageCert"})));
    }

    #[test]
    fn test_clauses_are_conjunctive() {
        let sel = Selector::new().eq("country", "USA").eq("city", "Portland");
        assert!(sel.matches(&json!({"country": "USA", "city": "Portland"})));
        assert!(!sel.matches(&json!({"country": "USA", "city": "Salem"})));
    }

    #[test]
    fn test_absent_field_fails_the_match() {
        let sel = Selector::new().eq("noSuchField", "x");
        assert!(!sel.matches(&json!({"docType": "birthCert"})));
    }

    #[test]
    fn test_non_string_field_fails_the_match() {
        let sel = Selector::new().eq("weight", "3");
        assert!(!sel.matches(&json!({"weight": 3})));
    }

    #[test]
    fn test_non_object_documents_fail_non_empty_selectors() {
        let sel = Selector::new().eq("docType", "birthCert");
        assert!(!sel.matches(&json!("legacy raw payload")));
        assert!(!sel.matches(&json!([1, 2, 3])));
    }

    #[test]
    fn test_re_adding_a_field_replaces_its_value() {
        let sel = Selector::new().eq("city", "Salem").eq("city", "Portland");
        assert_eq!(sel.len(), 1);
        assert!(sel.matches(&json!({"city": "Portland"})));
    }

    #[test]
    fn test_birth_certs_shorthand() {
        let sel = Selector::birth_certs();
        assert_eq!(sel, Selector::new().eq("docType", "birthCert"));
    }

    #[test]
    fn test_display_renders_sorted_clauses() {
        let sel = Selector::new().eq("name", "Bob").eq("city", "Portland");
        assert_eq!(sel.to_string(), "{city=\"Portland\", name=\"Bob\"}");
    }
}
