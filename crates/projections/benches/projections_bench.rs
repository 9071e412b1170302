use criterion::{Criterion, criterion_group, criterion_main};
use domain::{Aggregate, LineItem, MenuItem, Money, Order, OrderEvent, OutingPlan, ParticipantName};
use journal::Journal;
use projections::{ActivityFeedView, SplitSummaryView, View, ViewRunner};

/// Builds a journal holding the seeded order (4 records) plus `extra`
/// item events, alternating adds and increments.
fn populate_journal(extra: usize) -> Journal<OrderEvent> {
    let mut order = Order::default();
    let mut journal = Journal::new();

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
    journal.append(events);

    let dessert = MenuItem::new("4", "Tiramisu", Money::from_cents(899), "");
    for i in 0..extra {
        let events = if i % 2 == 0 {
            order.add_from_catalog(&dessert).unwrap()
        } else {
            order.increment_own(&"4".into()).unwrap()
        };
        order.apply_events(&events);
        journal.append(events);
    }

    journal
}

fn new_runner() -> ViewRunner {
    let mut runner = ViewRunner::new();
    runner.register(Box::new(SplitSummaryView::new()));
    runner.register(Box::new(ActivityFeedView::new()));
    runner
}

fn bench_catch_up_100_events(c: &mut Criterion) {
    let journal = populate_journal(96);

    c.bench_function("projections/catch_up_100_events", |b| {
        b.iter(|| {
            let runner = new_runner();
            runner.catch_up(journal.records());
            runner.min_position()
        });
    });
}

fn bench_catch_up_1000_events(c: &mut Criterion) {
    let journal = populate_journal(996);

    c.bench_function("projections/catch_up_1000_events", |b| {
        b.iter(|| {
            let runner = new_runner();
            runner.catch_up(journal.records());
            runner.min_position()
        });
    });
}

fn bench_dispatch_single_record(c: &mut Criterion) {
    let journal = populate_journal(1);
    let record = &journal.records()[journal.len() - 1];
    let view = SplitSummaryView::new();

    c.bench_function("projections/dispatch_single_record", |b| {
        b.iter(|| view.apply(record));
    });
}

fn bench_query_shares(c: &mut Criterion) {
    let journal = populate_journal(100);
    let view = SplitSummaryView::new();
    for record in journal.records() {
        view.apply(record);
    }
    let target = ParticipantName::new("You");

    c.bench_function("projections/query_share", |b| {
        b.iter(|| view.share(&target));
    });

    c.bench_function("projections/query_even_split", |b| {
        b.iter(|| view.even_split());
    });
}

fn bench_rebuild_100_events(c: &mut Criterion) {
    let journal = populate_journal(96);
    let runner = new_runner();
    runner.catch_up(journal.records());

    c.bench_function("projections/rebuild_100_events", |b| {
        b.iter(|| {
            runner.rebuild_all(journal.records());
            runner.min_position()
        });
    });
}

criterion_group!(
    benches,
    bench_catch_up_100_events,
    bench_catch_up_1000_events,
    bench_dispatch_single_record,
    bench_query_shares,
    bench_rebuild_100_events,
);
criterion_main!(benches);
