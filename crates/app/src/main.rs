//! SplitEase demo entry point.
//!
//! Walks the seeded Friday-night order through its whole life: ledger
//! edits, the split summary, confirmation, the task-confined handle,
//! share payloads, and the activity feed.

use app::{AppConfig, PaymentRequest, SessionHandle, sample};
use domain::{OrderCommand, OrderSnapshot};
use projections::StatusBadge;
use tracing_subscriber::EnvFilter;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

fn render(snapshot: &OrderSnapshot) {
    let badge = StatusBadge::for_status(snapshot.status);
    println!();
    println!(
        "== {} at {} — {} ({})",
        snapshot.outing_name, snapshot.restaurant_name, badge.label, badge.color_hex
    );
    if !snapshot.estimated_time.is_empty() {
        println!("   ETA {}", snapshot.estimated_time);
    }
    for line in &snapshot.items {
        println!(
            "   {} x{}  {}  (ordered by {})",
            line.name,
            line.quantity,
            line.line_total(),
            line.ordered_by
        );
    }
    println!("   Subtotal     {}", snapshot.subtotal());
    println!("   Tax          {}", snapshot.tax());
    println!("   Service Fee  {}", snapshot.service_fee());
    println!("   Total        {}", snapshot.grand_total());
}

#[tokio::main]
async fn main() {
    // 1. Load config and initialize tracing
    let config = AppConfig::from_env();
    tracing_subscriber::registry()
        .with(EnvFilter::try_new(&config.log_level).unwrap_or_else(|_| EnvFilter::new("info")))
        .with(tracing_subscriber::fmt::layer())
        .init();

    // 2. Open the seeded session and wire in the read-side views
    let plan = sample::friday_night_dinner().with_policy(config.charge_policy());
    let (mut session, split, activity) =
        app::create_session_with_views(plan).expect("failed to open seeded order");

    session.on_snapshot(|snapshot| {
        tracing::info!(
            subtotal = %snapshot.subtotal(),
            total = %snapshot.grand_total(),
            "order changed"
        );
    });

    render(&session.snapshot());

    // 3. Edit the ledger as the local participant
    let catalog = sample::italian_corner_catalog();
    let tiramisu = catalog
        .get(&"4".into())
        .expect("tiramisu is on the menu")
        .clone();
    session
        .add_from_catalog(&tiramisu)
        .expect("failed to add tiramisu");
    session
        .increment_own(&"1".into())
        .expect("failed to increment pizza");

    // Sarah's salad is not ours to edit; this changes nothing
    let outcome = session
        .increment_own(&"2".into())
        .expect("no-op edits never error");
    tracing::info!(noop = outcome.is_noop(), "tried to edit another participant's line");

    render(&session.snapshot());

    // 4. Split the bill
    println!();
    for share in split.all_shares() {
        println!(
            "   {} ordered {} ({} with tax)",
            share.participant, share.items_subtotal, share.with_tax
        );
    }
    for (participant, amount) in split.even_split() {
        println!("   even split: {participant} owes {amount}");
    }

    // 5. Confirm, then drive the rest of the lifecycle through a handle
    session.confirm().expect("failed to confirm order");
    if let Err(err) = session.add_from_catalog(&tiramisu) {
        tracing::warn!(%err, "edit after confirm rejected");
    }

    let handle = SessionHandle::spawn(session);
    handle
        .dispatch(OrderCommand::Advance)
        .await
        .expect("failed to advance to preparing");
    handle
        .dispatch(OrderCommand::Advance)
        .await
        .expect("failed to advance to ready");

    let final_snapshot = handle.snapshot();
    render(&final_snapshot);

    // 6. Share a payment request per participant
    println!();
    for request in PaymentRequest::even_split(&final_snapshot) {
        let payload = request
            .to_share_string()
            .expect("failed to serialize share payload");
        println!("   share -> {payload}");
    }

    // 7. Replay the activity feed
    println!();
    for entry in activity.entries() {
        println!("   [{}] {}", entry.revision, entry.message);
    }
}
