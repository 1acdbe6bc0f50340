//! Live-state query surface
//!
//! All three queries follow one path: build a field-equality selector,
//! hand it to the ledger, drain the cursor through the codec and return a
//! materialized `Vec`. Values decode leniently — a payload that is not a
//! structured record rides along as its raw string — and entries whose
//! value bytes are empty are skipped entirely.

use crate::codec::{self, Payload};
use crate::drain::drain_cursor;
use crate::registry::{log_cause, BirthRegistry};
use civreg_core::{Result, Selector};
use serde::Serialize;
use tracing::debug;

/// One query result: the store key and the decoded document under it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryHit {
    /// Key the document is stored under.
    pub key: String,
    /// Decoded payload; raw string for non-structured documents.
    pub record: Payload,
}

impl BirthRegistry {
    /// Every live birth certificate.
    ///
    /// Selector: `docType = "birthCert"`. Documents of other types in the
    /// same store never appear, whatever their fields look like.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](civreg_core::Error::Ledger) on store or
    /// cursor failure.
    pub fn list_all(&self) -> Result<Vec<QueryHit>> {
        self.run_query("list_all", Selector::birth_certs())
    }

    /// Certificates whose subject name equals `user_name`.
    ///
    /// The filter field is `name`, not `userName`. That mismatch with the
    /// parameter's meaning is long-standing and callers depend on it, so
    /// it is kept as-is.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](civreg_core::Error::Ledger) on store or
    /// cursor failure.
    pub fn list_by_user(&self, user_name: &str) -> Result<Vec<QueryHit>> {
        self.run_query("list_by_user", Selector::new().eq("name", user_name))
    }

    /// Certificates matching a single caller-chosen equality clause.
    ///
    /// The field name is passed through verbatim — no check that it is
    /// one of the record attributes. The store treats an unknown field as
    /// matching nothing, so the result is empty rather than an error.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](civreg_core::Error::Ledger) on store or
    /// cursor failure.
    pub fn list_by_field(&self, field: &str, value: &str) -> Result<Vec<QueryHit>> {
        self.run_query("list_by_field", Selector::new().eq(field, value))
    }

    fn run_query(&self, operation: &'static str, selector: Selector) -> Result<Vec<QueryHit>> {
        let cursor = self
            .ledger
            .query(&selector)
            .map_err(|err| log_cause(operation, err))?;

        let hits = drain_cursor(cursor, |entry| {
            if entry.value.is_empty() {
                return Ok(None);
            }
            Ok(Some(QueryHit {
                record: codec::decode_lossy(&entry.value),
                key: entry.key,
            }))
        })
        .map_err(|err| log_cause(operation, err))?;

        debug!(
            target: "civreg::registry",
            operation,
            selector = %selector,
            hits = hits.len(),
            "query drained"
        );
        Ok(hits)
    }
}
