//! The versioned state store seam
//!
//! The record core does not own storage. It drives an external append-only
//! store (the *ledger*) through the [`Ledger`] trait: point reads and
//! writes over latest live state, field-equality queries, and per-key
//! version-log retrieval. Implementations decide durability, ordering and
//! transaction identity; the core only assumes the contract spelled out on
//! each method.
//!
//! ## Design
//!
//! - **Append-only**: `put` never overwrites. Every write appends a new
//!   entry to the key's version log; the latest non-deleted entry is the
//!   live value.
//! - **One transaction per operation**: the core performs at most one
//!   write per public operation and reads [`Ledger::current_tx_id`]
//!   immediately after it. Stores must make that id identify the write's
//!   transaction.
//! - **Cursors are scoped**: a [`Cursor`] is owned by exactly one
//!   operation, drained within it, and released exactly once before the
//!   operation returns. No cursor survives its operation.

use crate::error::Result;
use crate::selector::Selector;
use crate::types::{Timestamp, TxId};

/// One live-state query result: a store key and its latest value bytes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StateEntry {
    /// Key the document is stored under.
    pub key: String,
    /// Latest live value bytes.
    pub value: Vec<u8>,
}

impl StateEntry {
    /// Pair a key with its value bytes.
    pub fn new(key: impl Into<String>, value: Vec<u8>) -> Self {
        Self {
            key: key.into(),
            value,
        }
    }
}

/// One entry in a key's version log.
///
/// Writes carry the value bytes they appended; delete markers carry no
/// value and set `is_delete`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeyModification {
    /// Transaction the entry was committed under.
    pub tx_id: TxId,
    /// Wall-clock time the store assigned to the commit.
    pub timestamp: Timestamp,
    /// True for delete markers.
    pub is_delete: bool,
    /// Appended value bytes; empty for delete markers.
    pub value: Vec<u8>,
}

impl KeyModification {
    /// Log entry for a write.
    pub fn write(tx_id: TxId, timestamp: Timestamp, value: Vec<u8>) -> Self {
        Self {
            tx_id,
            timestamp,
            is_delete: false,
            value,
        }
    }

    /// Log entry for a delete marker.
    pub fn delete(tx_id: TxId, timestamp: Timestamp) -> Self {
        Self {
            tx_id,
            timestamp,
            is_delete: true,
            value: Vec::new(),
        }
    }
}

/// Streaming handle over query or history results.
///
/// `advance` yields the next item, or `None` once exhausted. `release`
/// returns the cursor's resources to the store and must be called exactly
/// once; implementations should fail `advance` after release rather than
/// silently yielding more items.
pub trait Cursor: Send {
    /// Item type the cursor yields.
    type Item;

    /// Next item, or `None` when the cursor is exhausted.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](crate::Error::Ledger) if the store fails
    /// mid-iteration or the cursor was already released.
    fn advance(&mut self) -> Result<Option<Self::Item>>;

    /// Return the cursor's resources to the store.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](crate::Error::Ledger) if the store fails
    /// to tear the cursor down.
    fn release(&mut self) -> Result<()>;
}

/// Boxed cursor over live-state query results.
pub type StateCursor = Box<dyn Cursor<Item = StateEntry>>;

/// Boxed cursor over a key's version log, oldest first.
pub type HistoryCursor = Box<dyn Cursor<Item = KeyModification>>;

/// Append-only versioned state store.
///
/// Object-safe; the record core holds implementations as
/// `Arc<dyn Ledger>`.
pub trait Ledger: Send + Sync {
    /// Latest live value under `key`.
    ///
    /// Returns `None` when the key was never written or its latest log
    /// entry is a delete marker.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](crate::Error::Ledger) on store failure.
    fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Append a new version of `key` under the enclosing transaction.
    ///
    /// Never overwrites: the prior versions stay in the key's log.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](crate::Error::Ledger) on store failure.
    fn put(&self, key: &str, value: Vec<u8>) -> Result<()>;

    /// Query live state by field equality.
    ///
    /// Matching is the store's job; selectors naming unknown fields yield
    /// an empty cursor, never an error. Result order is store-defined but
    /// stable, and each matching document appears exactly once.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](crate::Error::Ledger) on store failure.
    fn query(&self, selector: &Selector) -> Result<StateCursor>;

    /// Full version log of `key`, oldest entry first.
    ///
    /// A key that was never written yields an empty cursor; whether that
    /// is an error is the caller's policy, not the store's.
    ///
    /// # Errors
    /// Returns [`Error::Ledger`](crate::Error::Ledger) on store failure.
    fn history_of(&self, key: &str) -> Result<HistoryCursor>;

    /// Identifier of the enclosing write transaction.
    fn current_tx_id(&self) -> TxId;
}
