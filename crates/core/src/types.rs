//! Foundational types shared across the workspace
//!
//! - [`TxId`]: opaque identifier of the transaction that performed a write
//! - [`Timestamp`]: microsecond-precision wall-clock time assigned by the
//!   store

use serde::{Deserialize, Serialize};
use std::fmt;
use std::time::{SystemTime, UNIX_EPOCH};

/// Identifier of the transaction a write was committed under.
///
/// Transaction ids are supplied by the state store and treated as opaque
/// strings: the core never parses or orders them, it only hands them back
/// to callers and into history entries.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct TxId(String);

impl TxId {
    /// Wrap a store-supplied transaction id.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The id as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Consume the id, yielding the inner string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for TxId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for TxId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl From<&str> for TxId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// Microsecond-precision wall-clock timestamp.
///
/// Stored as microseconds since the Unix epoch. Timestamps are assigned by
/// the state store when a version is appended; the core never generates
/// them on its own behalf.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Timestamp(u64);

impl Timestamp {
    /// The Unix epoch (zero microseconds).
    pub const EPOCH: Timestamp = Timestamp(0);

    /// The maximum representable timestamp.
    pub const MAX: Timestamp = Timestamp(u64::MAX);

    /// Current wall-clock time.
    ///
    /// Clocks before the epoch clamp to [`Timestamp::EPOCH`].
    pub fn now() -> Self {
        let micros = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_micros() as u64)
            .unwrap_or(0);
        Timestamp(micros)
    }

    /// Construct from microseconds since the Unix epoch.
    pub fn from_micros(micros: u64) -> Self {
        Timestamp(micros)
    }

    /// Microseconds since the Unix epoch.
    pub fn as_micros(&self) -> u64 {
        self.0
    }

    /// Milliseconds since the Unix epoch (truncating).
    pub fn as_millis(&self) -> u64 {
        self.0 / 1_000
    }

    /// Whole seconds since the Unix epoch (truncating).
    pub fn as_secs(&self) -> u64 {
        self.0 / 1_000_000
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}us", self.0)
    }
}
