//! Integration tests for the shared order flow.
//!
//! These tests walk the order through realistic outing scenarios and
//! verify the derived totals, ownership rules, and the edit gate.

use domain::{
    Aggregate, ItemId, LineItem, MenuItem, Money, Order, OrderError, OrderStatus, OutingPlan,
};

/// Opens the canonical Friday-night order: four participants, three
/// seeded lines summing to $73.47.
fn seeded_order() -> Order {
    let mut order = Order::default();
    let plan = OutingPlan::new(
        "Friday Night Dinner",
        "The Italian Corner",
        vec!["You".into(), "Sarah".into(), "Mike".into(), "Emma".into()],
    )
    .with_estimated_time("25-35 min")
    .with_seed_item(LineItem::new(
        "1",
        "Margherita Pizza",
        Money::from_cents(1899),
        2,
        "You",
        "",
    ))
    .with_seed_item(LineItem::new(
        "2",
        "Caesar Salad",
        Money::from_cents(1250),
        1,
        "Sarah",
        "",
    ))
    .with_seed_item(LineItem::new(
        "3",
        "Chicken Alfredo",
        Money::from_cents(2299),
        1,
        "Mike",
        "",
    ));
    let events = order.open(plan).unwrap();
    order.apply_events(&events);
    order
}

fn tiramisu() -> MenuItem {
    MenuItem::new("4", "Tiramisu", Money::from_cents(899), "")
}

fn pizza_id() -> ItemId {
    ItemId::new("1")
}

fn caesar_id() -> ItemId {
    ItemId::new("2")
}

mod canonical_seed {
    use super::*;

    #[test]
    fn seed_totals_derive_from_items() {
        let order = seeded_order();
        let snapshot = order.snapshot();

        assert_eq!(snapshot.subtotal().cents(), 7347);
        assert_eq!(snapshot.tax().cents(), 588);
        assert_eq!(snapshot.service_fee(), Money::zero());
        assert_eq!(snapshot.grand_total().cents(), 7935);
    }

    #[test]
    fn seed_layout_matches_the_outing() {
        let order = seeded_order();
        let snapshot = order.snapshot();

        assert_eq!(snapshot.outing_name, "Friday Night Dinner");
        assert_eq!(snapshot.restaurant_name, "The Italian Corner");
        assert_eq!(snapshot.status, OrderStatus::Ordering);
        assert_eq!(snapshot.estimated_time, "25-35 min");

        let participants: Vec<&str> = snapshot
            .participants
            .iter()
            .map(|p| p.as_str())
            .collect();
        assert_eq!(participants, vec!["You", "Sarah", "Mike", "Emma"]);

        let owners: Vec<&str> = snapshot
            .items
            .iter()
            .map(|line| line.ordered_by.as_str())
            .collect();
        assert_eq!(owners, vec!["You", "Sarah", "Mike"]);
    }

    #[test]
    fn money_formats_for_display() {
        let order = seeded_order();
        let totals = order.totals();

        assert_eq!(totals.subtotal.to_string(), "$73.47");
        assert_eq!(totals.tax.to_string(), "$5.88");
        assert_eq!(totals.grand_total.to_string(), "$79.35");
    }
}

mod item_ledger {
    use super::*;

    #[test]
    fn add_tiramisu_appends_last() {
        let mut order = seeded_order();
        let events = order.add_from_catalog(&tiramisu()).unwrap();
        order.apply_events(&events);

        let snapshot = order.snapshot();
        assert_eq!(snapshot.item_count(), 4);

        let last = snapshot.items.last().unwrap();
        assert_eq!(last.name, "Tiramisu");
        assert_eq!(last.quantity, 1);
        assert_eq!(last.ordered_by.as_str(), "You");

        assert_eq!(snapshot.subtotal().cents(), 8246);
        assert_eq!(snapshot.grand_total().cents(), 8906);
    }

    #[test]
    fn increment_own_pizza() {
        let mut order = seeded_order();
        let events = order.increment_own(&pizza_id()).unwrap();
        order.apply_events(&events);

        assert_eq!(order.line(&pizza_id()).unwrap().quantity, 3);
        assert_eq!(order.totals().subtotal.cents(), 9246);
    }

    #[test]
    fn increment_anothers_item_changes_nothing() {
        let mut order = seeded_order();
        let before = order.snapshot();

        // The caesar salad belongs to Sarah; the command succeeds but
        // produces no events.
        let events = order.increment_own(&caesar_id()).unwrap();
        assert!(events.is_empty());
        order.apply_events(&events);

        assert_eq!(order.snapshot(), before);
    }

    #[test]
    fn decrement_to_removal() {
        let mut order = seeded_order();

        let events = order.decrement_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        assert_eq!(order.line(&pizza_id()).unwrap().quantity, 1);

        let events = order.decrement_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        assert!(order.line(&pizza_id()).is_none());

        let snapshot = order.snapshot();
        assert_eq!(snapshot.item_count(), 2);
        let names: Vec<&str> = snapshot.items.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["Caesar Salad", "Chicken Alfredo"]);
        assert_eq!(snapshot.subtotal().cents(), 3549);
    }

    #[test]
    fn quantities_never_drop_below_one() {
        let mut order = seeded_order();

        // Drive every local line through adds and decrements; any line
        // still present must carry at least one unit.
        let events = order.add_from_catalog(&tiramisu()).unwrap();
        order.apply_events(&events);
        let events = order.increment_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        let events = order.decrement_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        let events = order.decrement_own(&ItemId::new("4")).unwrap();
        order.apply_events(&events);

        assert!(order.items().iter().all(|line| line.quantity >= 1));
    }

    #[test]
    fn insertion_order_follows_add_calls() {
        let mut order = seeded_order();

        for entry in [
            MenuItem::new("4", "Tiramisu", Money::from_cents(899), ""),
            MenuItem::new("5", "Garlic Bread", Money::from_cents(650), ""),
            MenuItem::new("4", "Tiramisu", Money::from_cents(899), ""),
        ] {
            let events = order.add_from_catalog(&entry).unwrap();
            order.apply_events(&events);
        }

        let names: Vec<&str> = order.items().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec![
                "Margherita Pizza",
                "Caesar Salad",
                "Chicken Alfredo",
                "Tiramisu",
                "Garlic Bread",
                "Tiramisu",
            ]
        );
    }

    #[test]
    fn a_decrement_that_keeps_the_line_does_not_reorder() {
        let mut order = seeded_order();
        let events = order.decrement_own(&pizza_id()).unwrap();
        order.apply_events(&events);

        let names: Vec<&str> = order.items().iter().map(|l| l.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Margherita Pizza", "Caesar Salad", "Chicken Alfredo"]
        );
    }

    #[test]
    fn subtotal_always_matches_the_ledger() {
        let mut order = seeded_order();

        let events = order.add_from_catalog(&tiramisu()).unwrap();
        order.apply_events(&events);
        assert_ledger_sum(&order);

        let events = order.increment_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        assert_ledger_sum(&order);

        let events = order.remove_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        assert_ledger_sum(&order);
    }

    fn assert_ledger_sum(order: &Order) {
        let expected: i64 = order
            .items()
            .iter()
            .map(|line| line.line_total().cents())
            .sum();
        assert_eq!(order.totals().subtotal.cents(), expected);
    }
}

mod locking {
    use super::*;

    #[test]
    fn advance_then_edit_raises_locked() {
        let mut order = seeded_order();
        let events = order.advance().unwrap();
        order.apply_events(&events);
        assert_eq!(order.status(), OrderStatus::Confirmed);

        let before = order.snapshot();
        let result = order.increment_own(&pizza_id());

        assert!(matches!(
            result,
            Err(OrderError::Locked {
                status: OrderStatus::Confirmed
            })
        ));
        assert_eq!(order.snapshot(), before);
        assert_eq!(order.status(), OrderStatus::Confirmed);
    }

    #[test]
    fn every_item_command_is_gated() {
        let mut order = seeded_order();
        let events = order.advance().unwrap();
        order.apply_events(&events);

        assert!(matches!(
            order.add_from_catalog(&tiramisu()),
            Err(OrderError::Locked { .. })
        ));
        assert!(matches!(
            order.increment_own(&pizza_id()),
            Err(OrderError::Locked { .. })
        ));
        assert!(matches!(
            order.decrement_own(&pizza_id()),
            Err(OrderError::Locked { .. })
        ));
        assert!(matches!(
            order.remove_own(&pizza_id()),
            Err(OrderError::Locked { .. })
        ));
    }

    #[test]
    fn advance_stops_at_ready() {
        let mut order = seeded_order();
        let mut indices = vec![order.status().sequence_index()];

        for _ in 0..3 {
            let events = order.advance().unwrap();
            order.apply_events(&events);
            indices.push(order.status().sequence_index());
        }

        assert_eq!(order.status(), OrderStatus::Ready);
        assert!(indices.windows(2).all(|pair| pair[0] < pair[1]));

        let result = order.advance();
        assert!(matches!(
            result,
            Err(OrderError::InvalidTransition {
                status: OrderStatus::Ready
            })
        ));
    }
}

mod algebraic_laws {
    use super::*;

    #[test]
    fn add_then_decrement_restores_the_ledger() {
        let mut order = seeded_order();
        let before = order.snapshot();

        let events = order.add_from_catalog(&tiramisu()).unwrap();
        order.apply_events(&events);
        let events = order.decrement_own(&ItemId::new("4")).unwrap();
        order.apply_events(&events);

        let after = order.snapshot();
        assert_eq!(after.items, before.items);
        assert_eq!(after.subtotal(), before.subtotal());
    }

    #[test]
    fn increment_then_decrement_is_a_no_op() {
        let mut order = seeded_order();
        let before = order.snapshot();

        let events = order.increment_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        let events = order.decrement_own(&pizza_id()).unwrap();
        order.apply_events(&events);

        let after = order.snapshot();
        assert_eq!(after.items, before.items);
        assert_eq!(after.subtotal(), before.subtotal());
    }
}

mod replay {
    use super::*;

    #[test]
    fn replaying_the_event_log_rebuilds_the_order() {
        let mut order = Order::default();
        let mut log = Vec::new();

        let plan = OutingPlan::new(
            "Friday Night Dinner",
            "The Italian Corner",
            vec!["You".into(), "Sarah".into(), "Mike".into(), "Emma".into()],
        )
        .with_seed_item(LineItem::new(
            "1",
            "Margherita Pizza",
            Money::from_cents(1899),
            2,
            "You",
            "",
        ));
        let events = order.open(plan).unwrap();
        order.apply_events(&events);
        log.extend(events);

        let events = order.add_from_catalog(&tiramisu()).unwrap();
        order.apply_events(&events);
        log.extend(events);

        let events = order.decrement_own(&pizza_id()).unwrap();
        order.apply_events(&events);
        log.extend(events);

        let events = order.advance().unwrap();
        order.apply_events(&events);
        log.extend(events);

        let replayed = Order::replay(&log);
        assert_eq!(replayed.id(), order.id());
        assert_eq!(replayed.status(), OrderStatus::Confirmed);
        assert_eq!(replayed.snapshot(), order.snapshot());
    }
}
