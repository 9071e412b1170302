//! In-memory append-only event journal.
//!
//! The journal records every event an order produces, stamped with a
//! strictly increasing [`Revision`] and a wall-clock timestamp. It is
//! synchronous and owned by a single session; nothing here touches disk
//! or the network.
//!
//! Contents:
//! - [`EventId`], [`Revision`], [`EventRecord`] — stamped event records
//! - [`Journal`] — the append-only log itself

pub mod event;
pub mod journal;

pub use event::{EventId, EventRecord, Revision};
pub use journal::Journal;
