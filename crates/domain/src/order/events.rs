//! Order domain events.

use chrono::{DateTime, Utc};
use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::aggregate::DomainEvent;

use super::{ChargePolicy, ItemId, LineItem, Money, OrderStatus, ParticipantName, Roster};

/// Events that can occur on an order aggregate.
///
/// Change and removal events carry the line's price and owner so views
/// can fold running figures without consulting the aggregate.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", content = "data")]
pub enum OrderEvent {
    /// Order was opened for an outing.
    OrderOpened(OrderOpenedData),

    /// A line was appended to the ledger.
    ItemAdded(ItemAddedData),

    /// A line's quantity changed.
    ItemQuantityChanged(ItemQuantityChangedData),

    /// A line left the ledger.
    ItemRemoved(ItemRemovedData),

    /// The order moved to the next lifecycle status.
    StatusAdvanced(StatusAdvancedData),
}

impl DomainEvent for OrderEvent {
    fn event_type(&self) -> &'static str {
        match self {
            OrderEvent::OrderOpened(_) => "OrderOpened",
            OrderEvent::ItemAdded(_) => "ItemAdded",
            OrderEvent::ItemQuantityChanged(_) => "ItemQuantityChanged",
            OrderEvent::ItemRemoved(_) => "ItemRemoved",
            OrderEvent::StatusAdvanced(_) => "StatusAdvanced",
        }
    }
}

/// Data for OrderOpened event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderOpenedData {
    /// The unique order ID.
    pub order_id: OrderId,

    /// Name of the outing (e.g., "Friday Night Dinner").
    pub outing_name: String,

    /// Restaurant the order is placed with.
    pub restaurant_name: String,

    /// Everyone on the outing; the first entry is the local participant.
    pub roster: Roster,

    /// Free-text preparation estimate shown as-is.
    pub estimated_time: String,

    /// Charge rates in effect for the order's lifetime.
    pub policy: ChargePolicy,

    /// When the order was opened.
    pub opened_at: DateTime<Utc>,
}

/// Data for ItemAdded event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemAddedData {
    /// Item identifier copied from the catalog.
    pub item_id: ItemId,

    /// Dish name at add time.
    pub name: String,

    /// Unit price at add time.
    pub unit_price: Money,

    /// Quantity added.
    pub quantity: u32,

    /// The participant the line belongs to.
    pub ordered_by: ParticipantName,

    /// Opaque image URI.
    pub image_ref: String,
}

/// Data for ItemQuantityChanged event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemQuantityChangedData {
    /// The line whose quantity changed.
    pub item_id: ItemId,

    /// Owner of the line.
    pub ordered_by: ParticipantName,

    /// Unit price of the line.
    pub unit_price: Money,

    /// Previous quantity.
    pub old_quantity: u32,

    /// New quantity.
    pub new_quantity: u32,
}

/// Data for ItemRemoved event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ItemRemovedData {
    /// The line that was removed.
    pub item_id: ItemId,

    /// Owner of the line.
    pub ordered_by: ParticipantName,

    /// Unit price of the line.
    pub unit_price: Money,

    /// Line quantity at the moment of removal.
    pub quantity: u32,
}

/// Data for StatusAdvanced event.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StatusAdvancedData {
    /// Status before the step.
    pub from: OrderStatus,

    /// Status after the step.
    pub to: OrderStatus,

    /// When the step happened.
    pub advanced_at: DateTime<Utc>,
}

// Convenience constructors for events
impl OrderEvent {
    /// Creates an OrderOpened event.
    pub fn order_opened(
        order_id: OrderId,
        outing_name: impl Into<String>,
        restaurant_name: impl Into<String>,
        roster: Roster,
        estimated_time: impl Into<String>,
        policy: ChargePolicy,
    ) -> Self {
        OrderEvent::OrderOpened(OrderOpenedData {
            order_id,
            outing_name: outing_name.into(),
            restaurant_name: restaurant_name.into(),
            roster,
            estimated_time: estimated_time.into(),
            policy,
            opened_at: Utc::now(),
        })
    }

    /// Creates an ItemAdded event from a ledger line.
    pub fn item_added(line: &LineItem) -> Self {
        OrderEvent::ItemAdded(ItemAddedData {
            item_id: line.id.clone(),
            name: line.name.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
            ordered_by: line.ordered_by.clone(),
            image_ref: line.image_ref.clone(),
        })
    }

    /// Creates an ItemQuantityChanged event for a ledger line.
    pub fn item_quantity_changed(line: &LineItem, new_quantity: u32) -> Self {
        OrderEvent::ItemQuantityChanged(ItemQuantityChangedData {
            item_id: line.id.clone(),
            ordered_by: line.ordered_by.clone(),
            unit_price: line.unit_price,
            old_quantity: line.quantity,
            new_quantity,
        })
    }

    /// Creates an ItemRemoved event for a ledger line.
    pub fn item_removed(line: &LineItem) -> Self {
        OrderEvent::ItemRemoved(ItemRemovedData {
            item_id: line.id.clone(),
            ordered_by: line.ordered_by.clone(),
            unit_price: line.unit_price,
            quantity: line.quantity,
        })
    }

    /// Creates a StatusAdvanced event.
    pub fn status_advanced(from: OrderStatus, to: OrderStatus) -> Self {
        OrderEvent::StatusAdvanced(StatusAdvancedData {
            from,
            to,
            advanced_at: Utc::now(),
        })
    }
}
