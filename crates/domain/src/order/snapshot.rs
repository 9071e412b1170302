//! Immutable view of an order handed to observers.

use common::OrderId;
use serde::{Deserialize, Serialize};

use super::{LineItem, Money, OrderStatus, ParticipantName, Totals};

/// Frozen copy of everything a screen needs to render an order.
///
/// Snapshots are detached from the aggregate; holding one never blocks
/// or observes later changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSnapshot {
    /// Order identifier, set once the order is opened.
    pub order_id: Option<OrderId>,

    /// Name of the outing.
    pub outing_name: String,

    /// Restaurant the order is placed with.
    pub restaurant_name: String,

    /// Lifecycle status at snapshot time.
    pub status: OrderStatus,

    /// Everyone on the outing, roster order.
    pub participants: Vec<ParticipantName>,

    /// Ledger lines in insertion order.
    pub items: Vec<LineItem>,

    /// Money figures derived from the lines.
    pub totals: Totals,

    /// Free-text preparation estimate.
    pub estimated_time: String,
}

impl OrderSnapshot {
    /// Sum of line totals.
    pub fn subtotal(&self) -> Money {
        self.totals.subtotal
    }

    /// Tax on the subtotal.
    pub fn tax(&self) -> Money {
        self.totals.tax
    }

    /// Flat service fee line.
    pub fn service_fee(&self) -> Money {
        self.totals.service_fee
    }

    /// Subtotal grown by the tax rate.
    pub fn grand_total(&self) -> Money {
        self.totals.grand_total
    }

    /// Number of ledger lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }
}
