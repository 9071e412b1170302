//! Intents submitted against an order.

use common::OrderId;
use serde::{Deserialize, Serialize};

use super::{ChargePolicy, ItemId, LineItem, MenuItem, ParticipantName};

/// Everything needed to open an order for an outing.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutingPlan {
    /// Identifier for the new order.
    pub order_id: OrderId,

    /// Name of the outing (e.g., "Friday Night Dinner").
    pub outing_name: String,

    /// Restaurant the order is placed with.
    pub restaurant_name: String,

    /// Everyone on the outing; the first entry is the local participant.
    pub participants: Vec<ParticipantName>,

    /// Free-text preparation estimate shown as-is.
    pub estimated_time: String,

    /// Lines already on the order when it opens.
    pub seed_items: Vec<LineItem>,

    /// Charge rates for the order's lifetime.
    pub policy: ChargePolicy,
}

impl OutingPlan {
    /// Creates a plan with a fresh order ID and default charge policy.
    pub fn new(
        outing_name: impl Into<String>,
        restaurant_name: impl Into<String>,
        participants: Vec<ParticipantName>,
    ) -> Self {
        Self {
            order_id: OrderId::new(),
            outing_name: outing_name.into(),
            restaurant_name: restaurant_name.into(),
            participants,
            estimated_time: String::new(),
            seed_items: Vec::new(),
            policy: ChargePolicy::default(),
        }
    }

    /// Sets the preparation estimate.
    pub fn with_estimated_time(mut self, estimated_time: impl Into<String>) -> Self {
        self.estimated_time = estimated_time.into();
        self
    }

    /// Appends a line present when the order opens.
    pub fn with_seed_item(mut self, item: LineItem) -> Self {
        self.seed_items.push(item);
        self
    }

    /// Overrides the charge policy.
    pub fn with_policy(mut self, policy: ChargePolicy) -> Self {
        self.policy = policy;
        self
    }
}

/// Commands the local participant can submit against an open order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum OrderCommand {
    /// Append a quantity-1 line from the catalog entry.
    AddFromCatalog(MenuItem),

    /// Raise the quantity of one of the local participant's lines.
    IncrementOwn(ItemId),

    /// Lower the quantity of one of the local participant's lines,
    /// removing the line when it reaches zero.
    DecrementOwn(ItemId),

    /// Remove one of the local participant's lines outright.
    RemoveOwn(ItemId),

    /// Move the order from ordering to confirmed.
    Confirm,

    /// Move the order one step along the lifecycle.
    Advance,
}

impl OrderCommand {
    /// Stable command name for log and metric labels.
    pub fn name(&self) -> &'static str {
        match self {
            OrderCommand::AddFromCatalog(_) => "add_from_catalog",
            OrderCommand::IncrementOwn(_) => "increment_own",
            OrderCommand::DecrementOwn(_) => "decrement_own",
            OrderCommand::RemoveOwn(_) => "remove_own",
            OrderCommand::Confirm => "confirm",
            OrderCommand::Advance => "advance",
        }
    }
}
