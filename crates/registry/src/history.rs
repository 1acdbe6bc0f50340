//! Per-key history reconstruction
//!
//! A record's version log replays as a chronological list of
//! [`Revision`]s, oldest first. Unlike the query paths, history decoding
//! is strict: a stored version that no longer decodes is a real problem
//! for anyone replaying the record's life, so it surfaces as a decode
//! failure instead of degrading to a raw string.

use crate::codec;
use crate::drain::drain_cursor;
use crate::registry::{log_cause, BirthRegistry};
use civreg_core::{BirthRecord, Error, Result, Timestamp, TxId};
use serde::Serialize;
use tracing::{debug, warn};

/// Point-in-time view of one version of a record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Revision {
    /// Transaction that committed this version.
    pub tx_id: TxId,
    /// Wall-clock time the store assigned to the commit.
    pub timestamp: Timestamp,
    /// True when this entry is a delete marker.
    pub is_delete: bool,
    /// The record as of this version; `None` for delete markers.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub record: Option<BirthRecord>,
}

impl BirthRegistry {
    /// Full version history of a record, oldest first.
    ///
    /// Every entry that carries value bytes decodes strictly into a
    /// record; delete markers come through with `record: None` and
    /// `is_delete` set. After N updates of a created record the list
    /// holds N+1 entries and the last one matches the latest
    /// [`get_record`](BirthRegistry::get_record) bytes.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if the key was never written (empty log)
    /// - [`Error::Decode`] if any stored version fails to decode
    /// - [`Error::Ledger`] on store or cursor failure
    pub fn get_history(&self, id: &str) -> Result<Vec<Revision>> {
        let cursor = self
            .ledger
            .history_of(id)
            .map_err(|err| log_cause("get_history", err))?;

        let revisions = drain_cursor(cursor, |entry| {
            let record = if entry.value.is_empty() {
                None
            } else {
                Some(codec::decode(&entry.value)?)
            };
            Ok(Some(Revision {
                tx_id: entry.tx_id,
                timestamp: entry.timestamp,
                is_delete: entry.is_delete,
                record,
            }))
        })
        .map_err(|err| log_cause("get_history", err))?;

        if revisions.is_empty() {
            warn!(target: "civreg::registry", id, "history requested for a key that was never written");
            return Err(Error::NotFound { id: id.to_string() });
        }

        debug!(
            target: "civreg::registry",
            id,
            revisions = revisions.len(),
            "history reconstructed"
        );
        Ok(revisions)
    }
}
