//! In-memory reference implementation of the versioned state store
//!
//! Provides [`MemoryLedger`], an append-only `Ledger` backend suitable for
//! embedding and for exercising the record core without an external store.
//! Per-key version logs live in a `BTreeMap` behind a single `RwLock`;
//! every write is stamped with a fresh v4-uuid transaction id.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod memory;

pub use memory::{MemoryLedger, SnapshotCursor};
