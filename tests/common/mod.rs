//! Shared helpers for the registry integration suites.

#![allow(dead_code)]

use civreg::{BirthRecord, BirthRegistry, Ledger, MemoryLedger, RecordDraft, RecordUpdate};
use std::sync::Arc;

/// A registry wired to its own in-memory ledger.
///
/// The raw ledger handle stays available so tests can seed documents the
/// registry would never write (other doc types, legacy payloads,
/// tombstones) and inspect version logs directly.
pub struct TestRegistry {
    pub registry: BirthRegistry,
    pub ledger: Arc<MemoryLedger>,
}

impl TestRegistry {
    pub fn new() -> Self {
        let ledger = Arc::new(MemoryLedger::new());
        let registry = BirthRegistry::new(Arc::clone(&ledger) as Arc<dyn Ledger>);
        Self { registry, ledger }
    }
}

impl Default for TestRegistry {
    fn default() -> Self {
        Self::new()
    }
}

/// Complete draft with the given identity fields.
pub fn draft(id: &str, user: &str, name: &str) -> RecordDraft {
    RecordDraft {
        id: id.to_string(),
        user_name: user.to_string(),
        name: name.to_string(),
        father_name: "John Smith".to_string(),
        mother_name: "Jane Smith".to_string(),
        dob: "1990-04-12".to_string(),
        gender: "male".to_string(),
        weight: "3.4kg".to_string(),
        country: "USA".to_string(),
        state: "Oregon".to_string(),
        city: "Portland".to_string(),
        hospital_name: "St. Mary".to_string(),
        permanent_address: "12 Elm Street".to_string(),
    }
}

/// Update for `id` that changes only the weight.
pub fn weight_update(id: &str, weight: &str) -> RecordUpdate {
    RecordUpdate {
        id: id.to_string(),
        name: "Bob Smith".to_string(),
        father_name: "John Smith".to_string(),
        mother_name: "Jane Smith".to_string(),
        dob: "1990-04-12".to_string(),
        gender: "male".to_string(),
        weight: weight.to_string(),
        country: "USA".to_string(),
        state: "Oregon".to_string(),
        city: "Portland".to_string(),
        hospital_name: "St. Mary".to_string(),
        permanent_address: "12 Elm Street".to_string(),
    }
}

/// Decode raw record bytes, panicking on malformed fixtures.
pub fn decode(bytes: &[u8]) -> BirthRecord {
    serde_json::from_slice(bytes).expect("stored record should decode")
}
