//! civreg - birth-certificate records over an append-only versioned ledger
//!
//! A record-management core for birth certificates stored in a versioned
//! key-value state store. Every write appends a new version to the key's
//! log; the registry offers lifecycle operations, field-equality queries
//! over live state, and full per-key history replay.
//!
//! # Quick Start
//!
//! ```
//! use civreg::{BirthRegistry, MemoryLedger, RecordDraft};
//! use std::sync::Arc;
//!
//! # fn main() -> civreg::Result<()> {
//! let registry = BirthRegistry::new(Arc::new(MemoryLedger::new()));
//!
//! registry.create_record(RecordDraft {
//!     id: "BC001".to_string(),
//!     user_name: "alice".to_string(),
//!     name: "Bob Smith".to_string(),
//!     father_name: "John Smith".to_string(),
//!     mother_name: "Jane Smith".to_string(),
//!     dob: "1990-04-12".to_string(),
//!     gender: "male".to_string(),
//!     weight: "3.4kg".to_string(),
//!     country: "USA".to_string(),
//!     state: "Oregon".to_string(),
//!     city: "Portland".to_string(),
//!     hospital_name: "St. Mary".to_string(),
//!     permanent_address: "12 Elm Street".to_string(),
//! })?;
//!
//! let all = registry.list_all()?;
//! assert_eq!(all.len(), 1);
//!
//! let history = registry.get_history("BC001")?;
//! assert_eq!(history.len(), 1);
//! # Ok(())
//! # }
//! ```
//!
//! # Architecture
//!
//! The workspace splits along the storage seam. `civreg-core` holds the
//! contract: the record shape and validation, the error taxonomy, the
//! selector type and the [`Ledger`] trait with its cursor protocol.
//! `civreg-registry` implements the operations against `Arc<dyn Ledger>`.
//! `civreg-ledger` provides [`MemoryLedger`], an embeddable append-only
//! reference backend; production deployments supply their own `Ledger`.

// Re-export the public surface of the member crates.
pub use civreg_core::{
    BirthRecord, Cursor, Error, HistoryCursor, KeyModification, Ledger, RecordDraft, RecordUpdate,
    Result, Selector, StateCursor, StateEntry, Timestamp, TxId, DOC_TYPE,
};
pub use civreg_ledger::{MemoryLedger, SnapshotCursor};
pub use civreg_registry::{codec, BirthRegistry, Payload, QueryHit, Revision};
