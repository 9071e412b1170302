//! View runner for feeding journal records to views.

use domain::{DomainEvent, OrderEvent};
use journal::EventRecord;

use crate::view::{View, ViewPosition};

/// Delivers journal records to registered views.
///
/// The runner supports:
/// - Single record dispatch as each command lands
/// - Catch-up: folds a journal slice into views that are behind
/// - Rebuild: resets all views and refolds the journal from scratch
pub struct ViewRunner {
    views: Vec<Box<dyn View>>,
}

impl ViewRunner {
    /// Creates a runner with no views registered.
    pub fn new() -> Self {
        Self { views: Vec::new() }
    }

    /// Registers a view with this runner.
    pub fn register(&mut self, view: Box<dyn View>) {
        self.views.push(view);
    }

    /// Returns the number of registered views.
    pub fn view_count(&self) -> usize {
        self.views.len()
    }

    /// Delivers a single record to all registered views.
    #[tracing::instrument(skip(self, record), fields(event_type = record.event.event_type()))]
    pub fn dispatch(&self, record: &EventRecord<OrderEvent>) {
        for view in &self.views {
            view.apply(record);
            metrics::counter!("projection_events_applied").increment(1);
        }
    }

    /// Folds a journal slice into each view that hasn't already seen it.
    #[tracing::instrument(skip(self, records))]
    pub fn catch_up(&self, records: &[EventRecord<OrderEvent>]) {
        let mut record_index: u64 = 0;

        for record in records {
            record_index += 1;

            for view in &self.views {
                if view.position().events_applied < record_index {
                    view.apply(record);
                    metrics::counter!("projection_events_applied").increment(1);
                }
            }
        }

        tracing::info!(events_applied = record_index, "catch-up complete");
    }

    /// Resets all views and refolds the journal from scratch.
    #[tracing::instrument(skip(self, records))]
    pub fn rebuild_all(&self, records: &[EventRecord<OrderEvent>]) {
        for view in &self.views {
            view.reset();
        }
        self.catch_up(records);
    }

    /// Lowest position across registered views, or zero with no views.
    pub fn min_position(&self) -> ViewPosition {
        self.views
            .iter()
            .map(|view| view.position())
            .min_by_key(|pos| pos.events_applied)
            .unwrap_or_default()
    }
}

impl Default for ViewRunner {
    fn default() -> Self {
        Self::new()
    }
}
