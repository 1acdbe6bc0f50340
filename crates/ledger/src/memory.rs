//! In-memory append-only ledger
//!
//! [`MemoryLedger`] is the workspace's reference implementation of the
//! [`Ledger`] seam: a `BTreeMap` of per-key version logs behind a single
//! `RwLock`. Every write appends a [`KeyModification`] stamped with a
//! fresh v4-uuid transaction id and the current wall clock; nothing is
//! ever rewritten in place.
//!
//! ## Design
//!
//! - One lock over the whole state. Writes are rare and small (one
//!   document per transaction), so a single `RwLock` beats finer locking
//!   for this workload.
//! - Cursors are snapshot copies taken under the read lock. They stay
//!   valid and stable while later writes land, at the cost of cloning the
//!   matched entries.
//! - `current_tx_id` is the id stamped on the most recent write. The
//!   record core performs at most one write per operation and reads the
//!   id immediately afterwards, which makes it the enclosing
//!   transaction's id.

use civreg_core::{
    Cursor, Error, HistoryCursor, KeyModification, Ledger, Result, Selector, StateCursor,
    StateEntry, Timestamp, TxId,
};
use parking_lot::RwLock;
use std::collections::BTreeMap;
use tracing::debug;
use uuid::Uuid;

/// Cursor over entries snapshotted at query time.
///
/// Advancing after release is an error; releasing twice is an error. The
/// strictness is deliberate so adapter bugs surface in tests instead of
/// silently draining a dead cursor.
pub struct SnapshotCursor<T> {
    items: std::vec::IntoIter<T>,
    released: bool,
}

impl<T> SnapshotCursor<T> {
    /// Wrap a snapshot of items in a cursor.
    pub fn new(items: Vec<T>) -> Self {
        Self {
            items: items.into_iter(),
            released: false,
        }
    }
}

impl<T: Send> Cursor for SnapshotCursor<T> {
    type Item = T;

    fn advance(&mut self) -> Result<Option<T>> {
        if self.released {
            return Err(Error::Ledger {
                reason: "cursor already released".to_string(),
            });
        }
        Ok(self.items.next())
    }

    fn release(&mut self) -> Result<()> {
        if self.released {
            return Err(Error::Ledger {
                reason: "cursor released twice".to_string(),
            });
        }
        self.released = true;
        Ok(())
    }
}

struct Inner {
    logs: BTreeMap<String, Vec<KeyModification>>,
    last_tx: TxId,
}

/// Append-only in-memory state store.
///
/// Implements [`Ledger`] for embedding and for the workspace's own test
/// suites. Clone-free sharing goes through `Arc<MemoryLedger>`.
pub struct MemoryLedger {
    inner: RwLock<Inner>,
}

impl MemoryLedger {
    /// Empty ledger with a genesis transaction id.
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                logs: BTreeMap::new(),
                last_tx: fresh_tx_id(),
            }),
        }
    }

    /// Append a delete marker for `key`.
    ///
    /// Not part of the [`Ledger`] seam — the record core never deletes.
    /// The marker exists so history consumers can be exercised against
    /// logs that contain tombstones, which real stores may hold. Deleting
    /// a never-written key still appends a marker; the log records what
    /// happened, not what made sense.
    pub fn delete(&self, key: &str) {
        let mut inner = self.inner.write();
        let tx_id = fresh_tx_id();
        let marker = KeyModification::delete(tx_id.clone(), Timestamp::now());
        inner.logs.entry(key.to_string()).or_default().push(marker);
        inner.last_tx = tx_id.clone();
        debug!(target: "civreg::ledger", key, tx_id = %tx_id, "appended delete marker");
    }

    /// Number of log entries recorded under `key`, tombstones included.
    ///
    /// Zero means the key was never written.
    pub fn version_count(&self, key: &str) -> usize {
        self.inner.read().logs.get(key).map_or(0, Vec::len)
    }
}

impl Default for MemoryLedger {
    fn default() -> Self {
        Self::new()
    }
}

impl Ledger for MemoryLedger {
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let inner = self.inner.read();
        Ok(live_entry(&inner.logs, key).map(|entry| entry.value.clone()))
    }

    fn put(&self, key: &str, value: Vec<u8>) -> Result<()> {
        let mut inner = self.inner.write();
        let tx_id = fresh_tx_id();
        let entry = KeyModification::write(tx_id.clone(), Timestamp::now(), value);
        inner.logs.entry(key.to_string()).or_default().push(entry);
        inner.last_tx = tx_id.clone();
        debug!(target: "civreg::ledger", key, tx_id = %tx_id, "appended version");
        Ok(())
    }

    fn query(&self, selector: &Selector) -> Result<StateCursor> {
        let inner = self.inner.read();
        let hits: Vec<StateEntry> = inner
            .logs
            .iter()
            .filter_map(|(key, log)| {
                let latest = log.last().filter(|entry| !entry.is_delete)?;
                matches_selector(selector, &latest.value)
                    .then(|| StateEntry::new(key.clone(), latest.value.clone()))
            })
            .collect();
        debug!(target: "civreg::ledger", selector = %selector, hits = hits.len(), "query evaluated");
        Ok(Box::new(SnapshotCursor::new(hits)))
    }

    fn history_of(&self, key: &str) -> Result<HistoryCursor> {
        let inner = self.inner.read();
        let log = inner.logs.get(key).cloned().unwrap_or_default();
        Ok(Box::new(SnapshotCursor::new(log)))
    }

    fn current_tx_id(&self) -> TxId {
        self.inner.read().last_tx.clone()
    }
}

fn fresh_tx_id() -> TxId {
    TxId::new(Uuid::new_v4().to_string())
}

fn live_entry<'a>(
    logs: &'a BTreeMap<String, Vec<KeyModification>>,
    key: &str,
) -> Option<&'a KeyModification> {
    logs.get(key)
        .and_then(|log| log.last())
        .filter(|entry| !entry.is_delete)
}

/// Selector match over raw value bytes.
///
/// Non-JSON payloads have no fields to test, so they match only the empty
/// selector.
fn matches_selector(selector: &Selector, value: &[u8]) -> bool {
    match serde_json::from_slice::<serde_json::Value>(value) {
        Ok(doc) => selector.matches(&doc),
        Err(_) => selector.is_empty(),
    }
}
