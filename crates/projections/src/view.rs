//! Core view trait and position tracking.

use domain::OrderEvent;
use journal::EventRecord;

/// Tracks how many journal records a view has folded.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ViewPosition {
    /// Number of records applied to this view.
    pub events_applied: u64,
}

impl ViewPosition {
    /// Creates a new position at zero.
    pub fn zero() -> Self {
        Self { events_applied: 0 }
    }

    /// Advances the position by one record.
    pub fn advance(&self) -> Self {
        Self {
            events_applied: self.events_applied + 1,
        }
    }
}

impl std::fmt::Display for ViewPosition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "position({})", self.events_applied)
    }
}

/// A view that folds order events into a query-side shape.
///
/// Views take `&self` and guard their state internally, so a cloned
/// handle can sit with the UI while the runner keeps folding records
/// into the shared state.
pub trait View: Send + Sync {
    /// Returns the name of this view.
    fn name(&self) -> &'static str;

    /// Folds a single journal record into the view.
    fn apply(&self, record: &EventRecord<OrderEvent>);

    /// Returns the current position of this view.
    fn position(&self) -> ViewPosition;

    /// Resets the view to its initial state.
    fn reset(&self);
}
