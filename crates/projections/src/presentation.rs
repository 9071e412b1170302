//! Display helpers shared by UI surfaces.

use domain::OrderStatus;

/// Label and accent color for rendering an order status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StatusBadge {
    /// Capitalized status label, e.g. "Ordering".
    pub label: &'static str,

    /// Accent color as a hex string, e.g. "#F97316".
    pub color_hex: &'static str,
}

impl StatusBadge {
    /// Returns the badge for a status.
    pub fn for_status(status: OrderStatus) -> Self {
        match status {
            OrderStatus::Ordering => Self {
                label: "Ordering",
                color_hex: "#F97316",
            },
            OrderStatus::Confirmed => Self {
                label: "Confirmed",
                color_hex: "#3B82F6",
            },
            OrderStatus::Preparing => Self {
                label: "Preparing",
                color_hex: "#EAB308",
            },
            OrderStatus::Ready => Self {
                label: "Ready",
                color_hex: "#10B981",
            },
        }
    }
}

impl From<OrderStatus> for StatusBadge {
    fn from(status: OrderStatus) -> Self {
        Self::for_status(status)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_status_has_a_badge() {
        for status in OrderStatus::SEQUENCE {
            let badge = StatusBadge::for_status(status);
            assert!(!badge.label.is_empty());
            assert!(badge.color_hex.starts_with('#'));
            assert_eq!(badge.color_hex.len(), 7);
        }
    }

    #[test]
    fn labels_capitalize_the_status() {
        assert_eq!(StatusBadge::for_status(OrderStatus::Ordering).label, "Ordering");
        assert_eq!(StatusBadge::for_status(OrderStatus::Ready).label, "Ready");
    }

    #[test]
    fn badge_from_status() {
        let badge: StatusBadge = OrderStatus::Confirmed.into();
        assert_eq!(badge.color_hex, "#3B82F6");
    }
}
