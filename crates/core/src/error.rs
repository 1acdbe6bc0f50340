//! Error types for the record core
//!
//! One error enum covers the whole workspace. Variants are structured so
//! callers can match on the kind and recover the offending field or key
//! without parsing messages:
//!
//! | Variant         | Meaning                                            |
//! |-----------------|----------------------------------------------------|
//! | `MissingField`  | a required record field was empty                  |
//! | `AlreadyExists` | create found a live version under the key          |
//! | `NotFound`      | no live version (or no version log) under the key  |
//! | `Decode`        | payload bytes did not match the expected shape     |
//! | `Ledger`        | state store failure: I/O, query, or cursor         |
//!
//! Errors are serializable so they can cross process boundaries intact.
//! Messages are lowercase fragments suitable for wrapping.

use serde::{Deserialize, Serialize};

/// Errors produced by record operations and the ledger seam.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, thiserror::Error)]
pub enum Error {
    // =========================================================================
    // Domain errors (caller can act on these)
    // =========================================================================
    /// A required record field was empty.
    ///
    /// Validation checks presence only: no trimming, no format checks.
    #[error("missing required field: {field}")]
    MissingField {
        /// Wire name of the first empty field, in declaration order.
        field: String,
    },

    /// Create was asked to write a key that already holds a live version.
    #[error("record already exists: {id}")]
    AlreadyExists {
        /// The record id that collided.
        id: String,
    },

    /// No live version exists under the key.
    #[error("record not found: {id}")]
    NotFound {
        /// The record id that was requested.
        id: String,
    },

    // =========================================================================
    // Infrastructure errors
    // =========================================================================
    /// Stored bytes did not decode into the expected record shape.
    #[error("decode failed: {reason}")]
    Decode {
        /// What the codec rejected.
        reason: String,
    },

    /// The state store reported a failure.
    #[error("ledger failure: {reason}")]
    Ledger {
        /// What the store reported.
        reason: String,
    },
}

/// Result type alias for record operations.
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_messages() {
        let err = Error::MissingField {
            field: "userName".to_string(),
        };
        assert_eq!(err.to_string(), "missing required field: userName");

        let err = Error::AlreadyExists {
            id: "BC001".to_string(),
        };
        assert_eq!(err.to_string(), "record already exists: BC001");

        let err = Error::NotFound {
            id: "BC404".to_string(),
        };
        assert_eq!(err.to_string(), "record not found: BC404");

        let err = Error::Decode {
            reason: "expected value at line 1".to_string(),
        };
        assert_eq!(err.to_string(), "decode failed: expected value at line 1");

        let err = Error::Ledger {
            reason: "cursor already released".to_string(),
        };
        assert_eq!(err.to_string(), "ledger failure: cursor already released");
    }

    #[test]
    fn test_kinds_are_distinguishable() {
        let conflict = Error::AlreadyExists {
            id: "BC001".to_string(),
        };
        let missing = Error::NotFound {
            id: "BC001".to_string(),
        };
        assert_ne!(conflict, missing);
        assert!(matches!(conflict, Error::AlreadyExists { .. }));
        assert!(matches!(missing, Error::NotFound { .. }));
    }

    #[test]
    fn test_serde_round_trip() {
        let err = Error::MissingField {
            field: "dob".to_string(),
        };
        let json = serde_json::to_string(&err).unwrap();
        let back: Error = serde_json::from_str(&json).unwrap();
        assert_eq!(err, back);
    }

    #[test]
    fn test_error_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<Error>();
    }
}
