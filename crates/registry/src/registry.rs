//! Record registry facade
//!
//! [`BirthRegistry`] is the public face of the record core: a stateless
//! handle over an `Arc<dyn Ledger>`. Every public operation runs inside
//! the single transaction the ledger provides for it, performs at most one
//! write, and returns before any cursor it opened survives.
//!
//! Lifecycle operations live here; the query surface and history
//! reconstruction extend the same type from `query` and `history`.

use crate::codec;
use civreg_core::{Error, Ledger, RecordDraft, RecordUpdate, Result, TxId};
use std::sync::Arc;
use tracing::{debug, error, warn};

/// Stateless registry handle over a versioned state ledger.
///
/// Cloning is cheap and clones share the ledger. The registry holds no
/// cache and no cursor between calls; all state lives in the ledger.
#[derive(Clone)]
pub struct BirthRegistry {
    pub(crate) ledger: Arc<dyn Ledger>,
}

impl BirthRegistry {
    /// Wrap a ledger in a registry.
    pub fn new(ledger: Arc<dyn Ledger>) -> Self {
        Self { ledger }
    }

    /// Register a new birth certificate.
    ///
    /// Validates every field, refuses to overwrite a live record, appends
    /// exactly one version and returns the transaction id of the write.
    ///
    /// # Errors
    /// - [`Error::MissingField`] if any field is empty (nothing written)
    /// - [`Error::AlreadyExists`] if the id holds a live record (the
    ///   existing record is left untouched)
    /// - [`Error::Decode`] / [`Error::Ledger`] on codec or store failure
    pub fn create_record(&self, draft: RecordDraft) -> Result<TxId> {
        draft.validate()?;
        let existing = self
            .ledger
            .get(&draft.id)
            .map_err(|err| log_cause("create_record", err))?;
        if existing.is_some() {
            warn!(target: "civreg::registry", id = %draft.id, "create rejected: id already holds a live record");
            return Err(Error::AlreadyExists { id: draft.id });
        }

        let record = draft.into_record();
        let bytes = codec::encode(&record).map_err(|err| log_cause("create_record", err))?;
        self.ledger
            .put(&record.id, bytes)
            .map_err(|err| log_cause("create_record", err))?;

        let tx_id = self.ledger.current_tx_id();
        debug!(target: "civreg::registry", id = %record.id, tx_id = %tx_id, "record created");
        Ok(tx_id)
    }

    /// Amend an existing birth certificate.
    ///
    /// Reads the live version, overlays the update — `userName` is carried
    /// forward from the prior version, never taken from the caller —
    /// appends exactly one version and returns the transaction id of the
    /// write.
    ///
    /// # Errors
    /// - [`Error::MissingField`] if any update field is empty (nothing
    ///   written)
    /// - [`Error::NotFound`] if the id holds no live record (nothing
    ///   written)
    /// - [`Error::Decode`] if the prior version is not a structured
    ///   record; amending requires the prior fields
    /// - [`Error::Ledger`] on store failure
    pub fn update_record(&self, update: RecordUpdate) -> Result<TxId> {
        update.validate()?;
        let prior_bytes = self
            .ledger
            .get(&update.id)
            .map_err(|err| log_cause("update_record", err))?
            .ok_or_else(|| {
                warn!(target: "civreg::registry", id = %update.id, "update rejected: no live record");
                Error::NotFound {
                    id: update.id.clone(),
                }
            })?;

        let prior = codec::decode(&prior_bytes).map_err(|err| log_cause("update_record", err))?;
        let merged = update.apply_to(&prior);
        let bytes = codec::encode(&merged).map_err(|err| log_cause("update_record", err))?;
        self.ledger
            .put(&merged.id, bytes)
            .map_err(|err| log_cause("update_record", err))?;

        let tx_id = self.ledger.current_tx_id();
        debug!(target: "civreg::registry", id = %merged.id, tx_id = %tx_id, "record updated");
        Ok(tx_id)
    }

    /// Raw latest-version bytes of a record.
    ///
    /// Pass-through: the bytes are returned exactly as stored, not
    /// decoded. Callers wanting fields go through the codec.
    ///
    /// # Errors
    /// - [`Error::NotFound`] if the id holds no live record
    /// - [`Error::Ledger`] on store failure
    pub fn get_record(&self, id: &str) -> Result<Vec<u8>> {
        let bytes = self
            .ledger
            .get(id)
            .map_err(|err| log_cause("get_record", err))?;
        match bytes {
            Some(bytes) => Ok(bytes),
            None => {
                warn!(target: "civreg::registry", id, "lookup failed: no live record");
                Err(Error::NotFound { id: id.to_string() })
            }
        }
    }

    /// Whether a live record exists under `id`.
    ///
    /// Same probe `create_record` uses for its conflict check.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`] on store failure.
    pub fn record_exists(&self, id: &str) -> Result<bool> {
        let existing = self
            .ledger
            .get(id)
            .map_err(|err| log_cause("record_exists", err))?;
        Ok(existing.is_some())
    }
}

/// Log the underlying cause of a ledger or codec failure at the operation
/// boundary, then propagate the error with its kind intact.
pub(crate) fn log_cause(operation: &'static str, err: Error) -> Error {
    error!(target: "civreg::registry", operation, cause = %err, "operation failed");
    err
}
