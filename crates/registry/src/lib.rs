//! Birth-certificate record core
//!
//! The registry drives an external append-only state ledger through the
//! seam defined in `civreg-core`: it creates and amends certificate
//! records, queries live state by field equality, and replays per-key
//! version history. It owns no storage and keeps no state between calls.
//!
//! ## Modules
//!
//! - `registry`: the [`BirthRegistry`] facade and record lifecycle
//! - `query`: live-state queries ([`QueryHit`])
//! - `history`: version-log replay ([`Revision`])
//! - `codec`: the record wire codec ([`Payload`])

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod codec;
mod drain;
pub mod history;
pub mod query;
pub mod registry;

pub use codec::Payload;
pub use history::Revision;
pub use query::QueryHit;
pub use registry::BirthRegistry;
