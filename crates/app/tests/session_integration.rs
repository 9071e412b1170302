//! Integration tests for the session surface.

use std::sync::{Arc, Mutex};

use app::{AppError, OrderSession, PaymentRequest, SessionHandle, sample};
use domain::{Aggregate, Money, Order, OrderCommand, OrderError, OrderStatus};

fn seeded_session() -> OrderSession {
    OrderSession::open(sample::friday_night_dinner()).unwrap()
}

#[test]
fn test_walkthrough_matches_the_bill() {
    let (mut session, split, activity) =
        app::create_session_with_views(sample::friday_night_dinner()).unwrap();
    let catalog = sample::italian_corner_catalog();

    // Seed: $73.47 subtotal, $79.35 total
    assert_eq!(session.snapshot().subtotal(), Money::from_cents(7347));
    assert_eq!(split.order_grand_total(), Money::from_cents(7935));

    // Dessert for the local participant
    let tiramisu = catalog.get(&"4".into()).unwrap();
    session.add_from_catalog(tiramisu).unwrap();
    assert_eq!(session.snapshot().subtotal(), Money::from_cents(8246));
    assert_eq!(session.snapshot().grand_total(), Money::from_cents(8906));

    // One more pizza
    session.increment_own(&"1".into()).unwrap();
    assert_eq!(session.snapshot().subtotal(), Money::from_cents(10145));
    assert_eq!(session.snapshot().grand_total(), Money::from_cents(10957));

    // The registered views kept pace without a manual catch-up
    assert_eq!(split.order_subtotal(), Money::from_cents(10145));
    assert_eq!(activity.entries().len(), 6);
}

#[test]
fn test_replaying_the_journal_rebuilds_the_order() {
    let mut session = seeded_session();
    let catalog = sample::italian_corner_catalog();

    session.add_from_catalog(catalog.get(&"4".into()).unwrap()).unwrap();
    session.increment_own(&"4".into()).unwrap();
    session.decrement_own(&"1".into()).unwrap();
    session.confirm().unwrap();

    let events: Vec<_> = session
        .journal()
        .records()
        .iter()
        .map(|record| record.event.clone())
        .collect();
    let replayed = Order::replay(&events);

    assert_eq!(replayed.snapshot(), session.snapshot());
}

#[test]
fn test_observers_see_every_change_in_order() {
    let mut session = seeded_session();
    let catalog = sample::italian_corner_catalog();
    let seen = Arc::new(Mutex::new(Vec::new()));

    let sink = seen.clone();
    session.on_snapshot(move |snapshot| {
        sink.lock().unwrap().push(snapshot.subtotal().cents());
    });

    session.add_from_catalog(catalog.get(&"4".into()).unwrap()).unwrap();
    session.increment_own(&"4".into()).unwrap();
    session.decrement_own(&"4".into()).unwrap();

    assert_eq!(*seen.lock().unwrap(), vec![8246, 9145, 8246]);
}

#[test]
fn test_locked_order_keeps_views_frozen() {
    let (mut session, split, _) =
        app::create_session_with_views(sample::friday_night_dinner()).unwrap();
    let catalog = sample::italian_corner_catalog();

    session.confirm().unwrap();

    let err = session
        .add_from_catalog(catalog.get(&"4".into()).unwrap())
        .unwrap_err();
    assert!(matches!(err, OrderError::Locked { .. }));

    assert_eq!(session.snapshot().subtotal(), Money::from_cents(7347));
    assert_eq!(split.order_subtotal(), Money::from_cents(7347));
    assert_eq!(session.journal().len(), 5);
}

#[test]
fn test_share_requests_cover_the_final_bill() {
    let mut session = seeded_session();
    let catalog = sample::italian_corner_catalog();

    session.add_from_catalog(catalog.get(&"4".into()).unwrap()).unwrap();
    session.confirm().unwrap();
    let snapshot = session.snapshot();

    let requests = PaymentRequest::even_split(&snapshot);
    assert_eq!(requests.len(), 4);

    let total: i64 = requests.iter().map(|r| r.amount.cents()).sum();
    assert_eq!(total, snapshot.grand_total().cents());

    for request in &requests {
        let shared = request.to_share_string().unwrap();
        let back: PaymentRequest = serde_json::from_str(&shared).unwrap();
        assert_eq!(&back, request);
    }
}

#[tokio::test]
async fn test_handle_drives_the_full_lifecycle() {
    let session = seeded_session();
    let handle = SessionHandle::spawn(session);
    let catalog = sample::italian_corner_catalog();

    let dessert = catalog.get(&"4".into()).unwrap().clone();
    handle
        .dispatch(OrderCommand::AddFromCatalog(dessert))
        .await
        .unwrap();
    handle.dispatch(OrderCommand::Confirm).await.unwrap();
    handle.dispatch(OrderCommand::Advance).await.unwrap();
    let outcome = handle.dispatch(OrderCommand::Advance).await.unwrap();

    assert_eq!(outcome.snapshot.status, OrderStatus::Ready);
    assert_eq!(handle.snapshot().status, OrderStatus::Ready);
    assert_eq!(handle.snapshot().grand_total(), Money::from_cents(8906));

    let err = handle.dispatch(OrderCommand::Advance).await.unwrap_err();
    assert!(matches!(
        err,
        AppError::Order(OrderError::InvalidTransition {
            status: OrderStatus::Ready
        })
    ));
}

#[tokio::test]
async fn test_cloned_handles_share_the_session() {
    let session = seeded_session();
    let handle = SessionHandle::spawn(session);
    let other = handle.clone();

    handle
        .dispatch(OrderCommand::IncrementOwn("1".into()))
        .await
        .unwrap();

    assert_eq!(other.snapshot().subtotal(), Money::from_cents(9246));
}
