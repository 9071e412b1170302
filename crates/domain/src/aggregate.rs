//! Core aggregate and domain event traits.

use serde::{Serialize, de::DeserializeOwned};

/// Trait for domain events.
///
/// Domain events represent facts that have happened in the domain.
/// They are immutable and should be named in past tense.
pub trait DomainEvent: Serialize + DeserializeOwned + Send + Sync + Clone {
    /// Returns the event type name.
    ///
    /// Used for log fields and activity labeling.
    fn event_type(&self) -> &'static str;
}

/// Trait for event-sourced aggregates.
///
/// An aggregate validates commands into events and consumes events to
/// update its state:
/// - Commands never mutate; they return the events they would cause
/// - `apply` is the only mutation path
/// - Replaying a journal over a default instance rebuilds the aggregate
pub trait Aggregate: Default + Send + Sync + Sized {
    /// The type of events this aggregate produces and consumes.
    type Event: DomainEvent;

    /// Returns the aggregate type name.
    fn aggregate_type() -> &'static str;

    /// Applies an event to the aggregate, updating its state.
    ///
    /// This method must be pure and deterministic:
    /// - Given the same state and event, it must always produce the same new state
    /// - It must not have side effects
    /// - It must not fail (events represent facts that have happened)
    fn apply(&mut self, event: &Self::Event);

    /// Applies multiple events in sequence.
    fn apply_events(&mut self, events: &[Self::Event]) {
        for event in events {
            self.apply(event);
        }
    }

    /// Rebuilds an aggregate by replaying events over a default instance.
    fn replay(events: &[Self::Event]) -> Self {
        let mut aggregate = Self::default();
        aggregate.apply_events(events);
        aggregate
    }
}
