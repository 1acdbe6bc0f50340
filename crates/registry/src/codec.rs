//! Record codec
//!
//! Records travel as JSON bytes with camelCase field names. Decoding comes
//! in two strengths:
//!
//! - [`decode`] is strict and used wherever the caller needs the fields
//!   (updates, history replay). Failure is [`Error::Decode`].
//! - [`decode_lossy`] never fails and is used by the query paths: a
//!   payload that predates the structured format (or was written by
//!   another producer) is carried as [`Payload::Raw`] instead of being
//!   dropped from the result set.

use civreg_core::{BirthRecord, Error, Result};
use serde::Serialize;

/// A decoded document payload.
///
/// Serializes untagged: a structured record renders as its JSON object, a
/// raw payload as a plain string, matching what callers historically
/// received.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum Payload {
    /// A payload in the structured record shape.
    Record(BirthRecord),
    /// A payload the codec could not shape; carried as lossy UTF-8.
    Raw(String),
}

impl Payload {
    /// The structured record, if this payload has one.
    pub fn as_record(&self) -> Option<&BirthRecord> {
        match self {
            Payload::Record(record) => Some(record),
            Payload::Raw(_) => None,
        }
    }

    /// True when the payload fell back to its raw form.
    pub fn is_raw(&self) -> bool {
        matches!(self, Payload::Raw(_))
    }
}

/// Encode a record to its wire bytes.
///
/// # Errors
/// Returns [`Error::Decode`] if serialization fails; with a record made of
/// plain strings this does not happen in practice, but the codec owns the
/// error either way.
pub fn encode(record: &BirthRecord) -> Result<Vec<u8>> {
    serde_json::to_vec(record).map_err(|err| Error::Decode {
        reason: err.to_string(),
    })
}

/// Strictly decode wire bytes into a record.
///
/// Unknown fields in the payload are ignored; missing fields fail the
/// decode.
///
/// # Errors
/// Returns [`Error::Decode`] carrying the serde reason.
pub fn decode(bytes: &[u8]) -> Result<BirthRecord> {
    serde_json::from_slice(bytes).map_err(|err| Error::Decode {
        reason: err.to_string(),
    })
}

/// Decode wire bytes, falling back to the raw string form.
///
/// Query results must carry every matched document, structured or not, so
/// this never fails: anything [`decode`] rejects comes back as
/// [`Payload::Raw`] (lossy UTF-8).
pub fn decode_lossy(bytes: &[u8]) -> Payload {
    match decode(bytes) {
        Ok(record) => Payload::Record(record),
        Err(_) => Payload::Raw(String::from_utf8_lossy(bytes).into_owned()),
    }
}
