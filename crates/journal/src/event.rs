use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Unique identifier for a recorded event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct EventId(Uuid);

impl EventId {
    /// Creates a new random event ID.
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }

    /// Creates an event ID from an existing UUID.
    pub fn from_uuid(uuid: Uuid) -> Self {
        Self(uuid)
    }

    /// Returns the underlying UUID.
    pub fn as_uuid(&self) -> Uuid {
        self.0
    }
}

impl Default for EventId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for EventId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<Uuid> for EventId {
    fn from(uuid: Uuid) -> Self {
        Self(uuid)
    }
}

impl From<EventId> for Uuid {
    fn from(id: EventId) -> Self {
        id.0
    }
}

/// Position of a record in the journal.
///
/// Revisions start at 1 for the first recorded event and increment by 1
/// for each subsequent record. They are strictly increasing for the
/// lifetime of a journal.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct Revision(i64);

impl Revision {
    /// Creates a revision from a raw value.
    pub fn new(value: i64) -> Self {
        Self(value)
    }

    /// Returns the initial revision (0) of an empty journal.
    pub fn initial() -> Self {
        Self(0)
    }

    /// Returns the first revision (1) assigned to the first record.
    pub fn first() -> Self {
        Self(1)
    }

    /// Returns the next revision.
    pub fn next(&self) -> Self {
        Self(self.0 + 1)
    }

    /// Returns the raw revision value.
    pub fn as_i64(&self) -> i64 {
        self.0
    }
}

impl std::fmt::Display for Revision {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<i64> for Revision {
    fn from(value: i64) -> Self {
        Self(value)
    }
}

impl From<Revision> for i64 {
    fn from(revision: Revision) -> Self {
        revision.0
    }
}

/// A recorded event along with its journal metadata.
///
/// Records keep the event fully typed; the journal never crosses a
/// process boundary, so there is no serialized payload indirection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventRecord<E> {
    /// Unique identifier for this record.
    pub event_id: EventId,

    /// Position of the record in the journal.
    pub revision: Revision,

    /// When the event was recorded.
    pub recorded_at: DateTime<Utc>,

    /// The event itself.
    pub event: E,
}

impl<E> EventRecord<E> {
    /// Stamps an event with a fresh id, the given revision, and the
    /// current time.
    pub fn stamp(revision: Revision, event: E) -> Self {
        Self {
            event_id: EventId::new(),
            revision,
            recorded_at: Utc::now(),
            event,
        }
    }
}
