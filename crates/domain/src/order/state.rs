//! Order lifecycle state machine.

use serde::{Deserialize, Serialize};

/// The status of a shared order in its lifecycle.
///
/// The lifecycle is strictly linear, with no rollback and no
/// cancellation path:
/// ```text
/// Ordering ──► Confirmed ──► Preparing ──► Ready
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Open for edits; the only status in which the ledger may change.
    #[default]
    Ordering,

    /// Confirmed by the group; ledger and totals are frozen.
    Confirmed,

    /// The restaurant is preparing the order.
    Preparing,

    /// Ready for pickup or serving (terminal state).
    Ready,
}

impl OrderStatus {
    /// Every status, in advance order.
    pub const SEQUENCE: [OrderStatus; 4] = [
        OrderStatus::Ordering,
        OrderStatus::Confirmed,
        OrderStatus::Preparing,
        OrderStatus::Ready,
    ];

    /// Returns true if ledger mutations are permitted in this status.
    pub fn can_edit(&self) -> bool {
        matches!(self, OrderStatus::Ordering)
    }

    /// Returns the next status in the lifecycle, or None from `Ready`.
    pub fn next(&self) -> Option<OrderStatus> {
        match self {
            OrderStatus::Ordering => Some(OrderStatus::Confirmed),
            OrderStatus::Confirmed => Some(OrderStatus::Preparing),
            OrderStatus::Preparing => Some(OrderStatus::Ready),
            OrderStatus::Ready => None,
        }
    }

    /// Position of this status in the lifecycle sequence (0 through 3).
    ///
    /// Non-decreasing over the lifetime of an order.
    pub fn sequence_index(&self) -> usize {
        match self {
            OrderStatus::Ordering => 0,
            OrderStatus::Confirmed => 1,
            OrderStatus::Preparing => 2,
            OrderStatus::Ready => 3,
        }
    }

    /// Returns true if this is a terminal status (no further transitions possible).
    pub fn is_terminal(&self) -> bool {
        matches!(self, OrderStatus::Ready)
    }

    /// Returns the status name as a string.
    pub fn as_str(&self) -> &'static str {
        match self {
            OrderStatus::Ordering => "ordering",
            OrderStatus::Confirmed => "confirmed",
            OrderStatus::Preparing => "preparing",
            OrderStatus::Ready => "ready",
        }
    }
}

impl std::fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
