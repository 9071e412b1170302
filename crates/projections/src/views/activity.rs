//! Activity feed read model — a human-readable trail of order changes.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use chrono::{DateTime, Utc};
use domain::{ItemId, OrderEvent, OrderStatus};
use journal::{EventRecord, Revision};

use crate::read_model::ReadModel;
use crate::view::{View, ViewPosition};

/// A single entry in the activity feed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ActivityEntry {
    /// Journal revision the entry was folded from.
    pub revision: Revision,

    /// When the change was recorded.
    pub recorded_at: DateTime<Utc>,

    /// Human-readable description of the change.
    pub message: String,
}

#[derive(Debug, Default)]
struct FeedState {
    entries: Vec<ActivityEntry>,

    /// Dish names remembered from ItemAdded, for later change messages.
    dish_names: HashMap<ItemId, String>,

    position: ViewPosition,
}

/// Read model view rendering each order change as a feed line.
#[derive(Clone)]
pub struct ActivityFeedView {
    state: Arc<RwLock<FeedState>>,
}

impl ActivityFeedView {
    /// Creates a new empty activity feed.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(FeedState::default())),
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<ActivityEntry> {
        self.read_state().entries.clone()
    }

    /// The most recent `n` entries, oldest of those first.
    pub fn latest(&self, n: usize) -> Vec<ActivityEntry> {
        let state = self.read_state();
        let start = state.entries.len().saturating_sub(n);
        state.entries[start..].to_vec()
    }

    fn push(&self, state: &mut FeedState, record: &EventRecord<OrderEvent>, message: String) {
        state.entries.push(ActivityEntry {
            revision: record.revision,
            recorded_at: record.recorded_at,
            message,
        });
    }

    fn dish_name(state: &FeedState, item_id: &ItemId) -> String {
        state
            .dish_names
            .get(item_id)
            .cloned()
            .unwrap_or_else(|| format!("item {item_id}"))
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, FeedState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, FeedState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for ActivityFeedView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for ActivityFeedView {
    fn name(&self) -> &'static str {
        "ActivityFeedView"
    }

    fn apply(&self, record: &EventRecord<OrderEvent>) {
        let mut state = self.write_state();

        match &record.event {
            OrderEvent::OrderOpened(data) => {
                let message = format!(
                    "{} opened the order at {}",
                    data.roster.local(),
                    data.restaurant_name
                );
                self.push(&mut state, record, message);
            }
            OrderEvent::ItemAdded(data) => {
                state
                    .dish_names
                    .insert(data.item_id.clone(), data.name.clone());
                let message = if data.quantity > 1 {
                    format!(
                        "{} added {}x {} ({} each)",
                        data.ordered_by, data.quantity, data.name, data.unit_price
                    )
                } else {
                    format!("{} added {} ({})", data.ordered_by, data.name, data.unit_price)
                };
                self.push(&mut state, record, message);
            }
            OrderEvent::ItemQuantityChanged(data) => {
                let name = Self::dish_name(&state, &data.item_id);
                let message = format!("{} set {} to {}", data.ordered_by, name, data.new_quantity);
                self.push(&mut state, record, message);
            }
            OrderEvent::ItemRemoved(data) => {
                let name = Self::dish_name(&state, &data.item_id);
                let message = format!("{} removed {}", data.ordered_by, name);
                self.push(&mut state, record, message);
            }
            OrderEvent::StatusAdvanced(data) => {
                let message = match data.to {
                    OrderStatus::Confirmed => "Order confirmed".to_string(),
                    to => format!("Order moved to {to}"),
                };
                self.push(&mut state, record, message);
            }
        }

        state.position = state.position.advance();
    }

    fn position(&self) -> ViewPosition {
        self.read_state().position
    }

    fn reset(&self) {
        let mut state = self.write_state();
        *state = FeedState::default();
    }
}

impl ReadModel for ActivityFeedView {
    fn name(&self) -> &'static str {
        "ActivityFeedView"
    }

    fn count(&self) -> usize {
        self.state
            .try_read()
            .map(|s| s.entries.len())
            .unwrap_or(0)
    }
}
