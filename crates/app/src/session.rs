//! The order session: command dispatch, journaling, and snapshot fan-out.

use domain::{
    Aggregate, ItemId, MenuItem, Order, OrderCommand, OrderError, OrderEvent, OrderSnapshot,
    OrderStatus, OutingPlan,
};
use journal::{Journal, Revision};
use projections::{View, ViewRunner};

/// What a dispatched command produced.
#[derive(Debug, Clone)]
pub struct CommandOutcome {
    /// Journal revision after the command (unchanged for no-ops).
    pub revision: Revision,

    /// Events the command emitted, in apply order.
    pub events: Vec<OrderEvent>,

    /// State of the order after the command.
    pub snapshot: OrderSnapshot,
}

impl CommandOutcome {
    /// True if the command changed nothing and nothing was recorded.
    pub fn is_noop(&self) -> bool {
        self.events.is_empty()
    }
}

type SnapshotObserver = Box<dyn FnMut(&OrderSnapshot) + Send>;

/// Owns one shared order end to end: the aggregate, its journal, the
/// registered views, and the snapshot observers.
///
/// Everything here is synchronous. A command validates, applies,
/// records, feeds the views, and notifies observers before it returns.
/// For use across threads, wrap the session in a
/// [`SessionHandle`](crate::handle::SessionHandle).
pub struct OrderSession {
    order: Order,
    journal: Journal<OrderEvent>,
    views: ViewRunner,
    observers: Vec<SnapshotObserver>,
}

impl OrderSession {
    /// Opens a new session from an outing plan, seeding the ledger.
    #[tracing::instrument(skip(plan), fields(outing = %plan.outing_name))]
    pub fn open(plan: OutingPlan) -> Result<Self, OrderError> {
        let mut order = Order::default();
        let events = order.open(plan)?;
        order.apply_events(&events);

        let mut journal = Journal::new();
        journal.append(events);

        tracing::info!(
            items = order.item_count(),
            subtotal = order.totals().subtotal.cents(),
            "order opened"
        );

        Ok(Self {
            order,
            journal,
            views: ViewRunner::new(),
            observers: Vec::new(),
        })
    }

    // Wiring

    /// Registers a view and folds the existing journal into it.
    pub fn register_view(&mut self, view: Box<dyn View>) {
        self.views.register(view);
        self.views.catch_up(self.journal.records());
    }

    /// Registers a snapshot observer.
    ///
    /// Observers run synchronously after every state-changing command,
    /// in registration order. Silent no-ops do not notify.
    pub fn on_snapshot(&mut self, observer: impl FnMut(&OrderSnapshot) + Send + 'static) {
        self.observers.push(Box::new(observer));
    }

    // Command dispatch

    /// Executes one command against the order.
    ///
    /// A successful state change is applied, recorded, fed to the
    /// views, and announced to every observer before this returns. A
    /// command that changes nothing returns a no-op outcome: nothing is
    /// recorded and nobody is notified.
    #[tracing::instrument(skip(self, command), fields(command = command.name()))]
    pub fn dispatch(&mut self, command: OrderCommand) -> Result<CommandOutcome, OrderError> {
        metrics::counter!("orders_commands_processed").increment(1);

        let events = match &command {
            OrderCommand::AddFromCatalog(entry) => self.order.add_from_catalog(entry)?,
            OrderCommand::IncrementOwn(item_id) => self.order.increment_own(item_id)?,
            OrderCommand::DecrementOwn(item_id) => self.order.decrement_own(item_id)?,
            OrderCommand::RemoveOwn(item_id) => self.order.remove_own(item_id)?,
            OrderCommand::Confirm => self.order.confirm()?,
            OrderCommand::Advance => self.order.advance()?,
        };

        if events.is_empty() {
            return Ok(CommandOutcome {
                revision: self.journal.latest_revision(),
                events,
                snapshot: self.order.snapshot(),
            });
        }

        self.order.apply_events(&events);
        let emitted: Vec<OrderEvent> = {
            let records = self.journal.append(events);
            for record in records {
                self.views.dispatch(record);
            }
            records.iter().map(|record| record.event.clone()).collect()
        };

        let snapshot = self.order.snapshot();
        for observer in &mut self.observers {
            observer(&snapshot);
        }

        let revision = self.journal.latest_revision();
        tracing::info!(
            revision = revision.as_i64(),
            events = emitted.len(),
            "command applied"
        );

        Ok(CommandOutcome {
            revision,
            events: emitted,
            snapshot,
        })
    }

    // Convenience commands

    /// Adds a catalog entry as a new quantity-1 line and returns its id.
    pub fn add_from_catalog(&mut self, entry: &MenuItem) -> Result<ItemId, OrderError> {
        let outcome = self.dispatch(OrderCommand::AddFromCatalog(entry.clone()))?;
        let added = outcome.events.iter().find_map(|event| match event {
            OrderEvent::ItemAdded(data) => Some(data.item_id.clone()),
            _ => None,
        });
        Ok(added.unwrap_or_else(|| entry.id.clone()))
    }

    /// Bumps the local participant's line for this id by one.
    pub fn increment_own(&mut self, item_id: &ItemId) -> Result<CommandOutcome, OrderError> {
        self.dispatch(OrderCommand::IncrementOwn(item_id.clone()))
    }

    /// Drops the local participant's line for this id by one; the line
    /// is removed when its quantity reaches zero.
    pub fn decrement_own(&mut self, item_id: &ItemId) -> Result<CommandOutcome, OrderError> {
        self.dispatch(OrderCommand::DecrementOwn(item_id.clone()))
    }

    /// Removes the local participant's line for this id outright.
    pub fn remove_own(&mut self, item_id: &ItemId) -> Result<CommandOutcome, OrderError> {
        self.dispatch(OrderCommand::RemoveOwn(item_id.clone()))
    }

    /// Confirms the order, freezing the ledger.
    pub fn confirm(&mut self) -> Result<OrderStatus, OrderError> {
        self.dispatch(OrderCommand::Confirm)?;
        Ok(self.order.status())
    }

    /// Advances the order one lifecycle step.
    pub fn advance(&mut self) -> Result<OrderStatus, OrderError> {
        self.dispatch(OrderCommand::Advance)?;
        Ok(self.order.status())
    }

    // Query methods

    /// Current state of the order as an immutable snapshot.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.order.snapshot()
    }

    /// The order aggregate, read-only.
    pub fn order(&self) -> &Order {
        &self.order
    }

    /// Every event recorded so far.
    pub fn journal(&self) -> &Journal<OrderEvent> {
        &self.journal
    }

    /// Latest journal revision.
    pub fn revision(&self) -> Revision {
        self.journal.latest_revision()
    }
}
