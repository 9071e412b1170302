//! Order aggregate and related types.

mod aggregate;
mod catalog;
mod commands;
mod events;
mod snapshot;
mod state;
mod totals;
mod value_objects;

pub use aggregate::Order;
pub use catalog::{Catalog, MenuItem};
pub use commands::{OrderCommand, OutingPlan};
pub use events::{
    ItemAddedData, ItemQuantityChangedData, ItemRemovedData, OrderEvent, OrderOpenedData,
    StatusAdvancedData,
};
pub use snapshot::OrderSnapshot;
pub use state::OrderStatus;
pub use totals::{ChargePolicy, Totals};
pub use value_objects::{ItemId, LineItem, Money, ParticipantName, Roster};

use thiserror::Error;

/// Errors that can occur during order operations.
#[derive(Debug, Error)]
pub enum OrderError {
    /// Item commands are rejected once the order leaves ordering.
    #[error("Order is locked: cannot edit items in '{status}' status")]
    Locked { status: OrderStatus },

    /// The lifecycle has no step from the current status.
    #[error("Invalid status transition: cannot advance from '{status}'")]
    InvalidTransition { status: OrderStatus },

    /// A command arrived before the order was opened.
    #[error("Order has not been opened")]
    NotOpened,

    /// Open was called on an order that already exists.
    #[error("Order already opened")]
    AlreadyOpened,

    /// A roster needs at least one participant.
    #[error("Roster has no participants")]
    EmptyRoster,

    /// Roster names must be unique.
    #[error("Duplicate participant on roster: {name}")]
    DuplicateParticipant { name: ParticipantName },

    /// A seed line names a participant who is not on the roster.
    #[error("Unknown participant '{name}' on line {item_id}")]
    UnknownParticipant {
        item_id: ItemId,
        name: ParticipantName,
    },

    /// Invalid quantity.
    #[error("Invalid quantity on line {item_id} (must be greater than 0)")]
    InvalidQuantity { item_id: ItemId },

    /// Invalid price.
    #[error("Invalid price on line {item_id} (must not be negative)")]
    NegativePrice { item_id: ItemId },
}
