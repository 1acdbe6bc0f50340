//! Core contract types for the civreg workspace
//!
//! This crate defines everything the record registry and the state store
//! agree on, and nothing else — no I/O lives here:
//!
//! - `error`: the workspace error taxonomy and `Result` alias
//! - `types`: transaction ids and store timestamps
//! - `record`: the birth-certificate document shape, input shapes and
//!   presence validation
//! - `selector`: field-equality queries over live state
//! - `ledger`: the append-only versioned store seam and its cursor
//!   protocol

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod error;
pub mod ledger;
pub mod record;
pub mod selector;
pub mod types;

pub use error::{Error, Result};
pub use ledger::{Cursor, HistoryCursor, KeyModification, Ledger, StateCursor, StateEntry};
pub use record::{BirthRecord, RecordDraft, RecordUpdate, DOC_TYPE};
pub use selector::Selector;
pub use types::{Timestamp, TxId};
