//! Record lifecycle: create, update, point lookups.

mod common;

use civreg::{Error, Ledger, DOC_TYPE};
use common::*;

#[test]
fn create_then_get_round_trips_every_field() {
    let t = TestRegistry::new();
    t.registry
        .create_record(draft("BC001", "alice", "Bob Smith"))
        .unwrap();

    let record = decode(&t.registry.get_record("BC001").unwrap());
    assert_eq!(record, draft("BC001", "alice", "Bob Smith").into_record());
    assert_eq!(record.doc_type, DOC_TYPE);
}

#[test]
fn create_fails_if_record_exists() {
    let t = TestRegistry::new();
    t.registry
        .create_record(draft("BC001", "alice", "Bob Smith"))
        .unwrap();

    let err = t
        .registry
        .create_record(draft("BC001", "mallory", "Mallory Jones"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::AlreadyExists {
            id: "BC001".to_string()
        }
    );

    // First write wins and stays.
    let record = decode(&t.registry.get_record("BC001").unwrap());
    assert_eq!(record.user_name, "alice");
    assert_eq!(t.ledger.version_count("BC001"), 1);
}

#[test]
fn create_with_empty_user_name_appends_no_version() {
    let t = TestRegistry::new();
    let err = t
        .registry
        .create_record(draft("BC002", "", "Bob Smith"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::MissingField {
            field: "userName".to_string()
        }
    );

    // No version log exists for the key at all.
    assert_eq!(t.ledger.version_count("BC002"), 0);
    assert!(matches!(
        t.registry.get_history("BC002"),
        Err(Error::NotFound { .. })
    ));
}

#[test]
fn update_of_missing_record_appends_no_version() {
    let t = TestRegistry::new();
    let err = t
        .registry
        .update_record(weight_update("BC404", "4.0kg"))
        .unwrap_err();
    assert_eq!(
        err,
        Error::NotFound {
            id: "BC404".to_string()
        }
    );
    assert_eq!(t.ledger.version_count("BC404"), 0);
}

#[test]
fn update_preserves_owner_and_discriminator() {
    let t = TestRegistry::new();
    t.registry
        .create_record(draft("BC001", "alice", "Bob Smith"))
        .unwrap();
    t.registry
        .update_record(weight_update("BC001", "4.1kg"))
        .unwrap();

    let record = decode(&t.registry.get_record("BC001").unwrap());
    assert_eq!(record.user_name, "alice");
    assert_eq!(record.weight, "4.1kg");
    assert_eq!(record.doc_type, DOC_TYPE);
    assert_eq!(record.id, "BC001");
}

#[test]
fn create_and_update_return_distinct_tx_ids() {
    let t = TestRegistry::new();
    let created = t
        .registry
        .create_record(draft("BC001", "alice", "Bob Smith"))
        .unwrap();
    let updated = t
        .registry
        .update_record(weight_update("BC001", "4.1kg"))
        .unwrap();
    assert_ne!(created, updated);
}

#[test]
fn get_record_returns_stored_bytes_verbatim() {
    let t = TestRegistry::new();
    t.ledger
        .put("BC001", b"legacy plain-text certificate".to_vec())
        .unwrap();

    let bytes = t.registry.get_record("BC001").unwrap();
    assert_eq!(bytes, b"legacy plain-text certificate".to_vec());
}

#[test]
fn full_certificate_lifecycle_scenario() {
    let t = TestRegistry::new();

    // Registration: BC001 created by user alice for subject Bob Smith.
    let mut registration = draft("BC001", "alice", "Bob Smith");
    registration.dob = "2020-05-01".to_string();
    let tx_created = t.registry.create_record(registration).unwrap();

    // The subject's name finds it; the owning user's name does not.
    assert_eq!(t.registry.list_by_user("Bob Smith").unwrap().len(), 1);
    assert!(t.registry.list_by_user("alice").unwrap().is_empty());

    // A name correction lands as a second version.
    let mut correction = weight_update("BC001", "3.4kg");
    correction.name = "Bob A. Smith".to_string();
    correction.dob = "2020-05-01".to_string();
    let tx_updated = t.registry.update_record(correction).unwrap();
    assert_ne!(tx_created, tx_updated);

    let history = t.registry.get_history("BC001").unwrap();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].tx_id, tx_created);
    assert_eq!(history[1].tx_id, tx_updated);
    assert_eq!(
        history[1].record.as_ref().unwrap().name,
        "Bob A. Smith"
    );

    // Latest state reflects the correction and still belongs to alice.
    let record = decode(&t.registry.get_record("BC001").unwrap());
    assert_eq!(record.name, "Bob A. Smith");
    assert_eq!(record.user_name, "alice");
}
