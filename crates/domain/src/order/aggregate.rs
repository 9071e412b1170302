//! Order aggregate implementation.

use common::OrderId;
use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregate;

use super::{
    ChargePolicy, ItemId, LineItem, MenuItem, OrderError, OrderEvent, OrderSnapshot, OrderStatus,
    OutingPlan, ParticipantName, Roster, Totals,
    events::{
        ItemAddedData, ItemQuantityChangedData, ItemRemovedData, OrderOpenedData,
        StatusAdvancedData,
    },
};

/// Order aggregate root.
///
/// Holds the shared order for one outing: the lifecycle status, the
/// roster of participants, and the ledger of lines in insertion order.
/// Commands validate against current state and return events; `apply`
/// is the only place state changes.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Order {
    /// Unique order identifier, set when the order is opened.
    id: Option<OrderId>,

    /// Name of the outing.
    outing_name: String,

    /// Restaurant the order is placed with.
    restaurant_name: String,

    /// Free-text preparation estimate.
    estimated_time: String,

    /// Current lifecycle status.
    status: OrderStatus,

    /// Participants, set when the order is opened.
    roster: Option<Roster>,

    /// Ledger lines in insertion order.
    items: Vec<LineItem>,

    /// Charge rates for this order.
    policy: ChargePolicy,
}

impl Aggregate for Order {
    type Event = OrderEvent;

    fn aggregate_type() -> &'static str {
        "Order"
    }

    fn apply(&mut self, event: &OrderEvent) {
        match event {
            OrderEvent::OrderOpened(data) => self.apply_order_opened(data),
            OrderEvent::ItemAdded(data) => self.apply_item_added(data),
            OrderEvent::ItemQuantityChanged(data) => self.apply_item_quantity_changed(data),
            OrderEvent::ItemRemoved(data) => self.apply_item_removed(data),
            OrderEvent::StatusAdvanced(data) => self.apply_status_advanced(data),
        }
    }
}

// Query methods
impl Order {
    /// Returns the order ID, if opened.
    pub fn id(&self) -> Option<OrderId> {
        self.id
    }

    /// Returns the current lifecycle status.
    pub fn status(&self) -> OrderStatus {
        self.status
    }

    /// Returns true while item commands are allowed.
    pub fn can_edit(&self) -> bool {
        self.status.can_edit()
    }

    /// Name of the outing.
    pub fn outing_name(&self) -> &str {
        &self.outing_name
    }

    /// Restaurant the order is placed with.
    pub fn restaurant_name(&self) -> &str {
        &self.restaurant_name
    }

    /// Free-text preparation estimate.
    pub fn estimated_time(&self) -> &str {
        &self.estimated_time
    }

    /// The participant roster, if opened.
    pub fn roster(&self) -> Option<&Roster> {
        self.roster.as_ref()
    }

    /// The participant whose lines this process may modify.
    pub fn local_participant(&self) -> Option<&ParticipantName> {
        self.roster.as_ref().map(Roster::local)
    }

    /// Ledger lines in insertion order.
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    /// Returns the first line with the given item ID.
    pub fn line(&self, item_id: &ItemId) -> Option<&LineItem> {
        self.items.iter().find(|line| &line.id == item_id)
    }

    /// Number of ledger lines.
    pub fn item_count(&self) -> usize {
        self.items.len()
    }

    /// Sum of quantities across all lines.
    pub fn total_quantity(&self) -> u32 {
        self.items.iter().map(|line| line.quantity).sum()
    }

    /// Returns true if the order has lines.
    pub fn has_items(&self) -> bool {
        !self.items.is_empty()
    }

    /// Returns true once the order has been opened.
    pub fn is_open(&self) -> bool {
        self.id.is_some()
    }

    /// Returns true if the order reached the end of the lifecycle.
    pub fn is_terminal(&self) -> bool {
        self.status.is_terminal()
    }

    /// Charge rates in effect.
    pub fn policy(&self) -> ChargePolicy {
        self.policy
    }

    /// Money figures derived from the current lines.
    pub fn totals(&self) -> Totals {
        Totals::over(&self.items, &self.policy)
    }

    /// Frozen copy of the order for rendering.
    pub fn snapshot(&self) -> OrderSnapshot {
        OrderSnapshot {
            order_id: self.id,
            outing_name: self.outing_name.clone(),
            restaurant_name: self.restaurant_name.clone(),
            status: self.status,
            participants: self
                .roster
                .as_ref()
                .map(|roster| roster.names().to_vec())
                .unwrap_or_default(),
            items: self.items.clone(),
            totals: self.totals(),
            estimated_time: self.estimated_time.clone(),
        }
    }
}

// Command methods (return events)
impl Order {
    /// Opens the order for an outing.
    ///
    /// Validates the roster and any seed lines; emits OrderOpened
    /// followed by one ItemAdded per seed line.
    pub fn open(&self, plan: OutingPlan) -> Result<Vec<OrderEvent>, OrderError> {
        if self.id.is_some() {
            return Err(OrderError::AlreadyOpened);
        }

        let roster = Roster::new(plan.participants)?;

        for seed in &plan.seed_items {
            if seed.quantity == 0 {
                return Err(OrderError::InvalidQuantity {
                    item_id: seed.id.clone(),
                });
            }
            if seed.unit_price.is_negative() {
                return Err(OrderError::NegativePrice {
                    item_id: seed.id.clone(),
                });
            }
            if !roster.contains(&seed.ordered_by) {
                return Err(OrderError::UnknownParticipant {
                    item_id: seed.id.clone(),
                    name: seed.ordered_by.clone(),
                });
            }
        }

        let mut events = vec![OrderEvent::order_opened(
            plan.order_id,
            plan.outing_name,
            plan.restaurant_name,
            roster,
            plan.estimated_time,
            plan.policy,
        )];
        events.extend(plan.seed_items.iter().map(OrderEvent::item_added));

        Ok(events)
    }

    /// Appends a quantity-1 line for the local participant.
    ///
    /// Always appends a new line, even when the same dish is already
    /// on the order.
    pub fn add_from_catalog(&self, entry: &MenuItem) -> Result<Vec<OrderEvent>, OrderError> {
        let roster = self.require_editable()?;

        if entry.unit_price.is_negative() {
            return Err(OrderError::NegativePrice {
                item_id: entry.id.clone(),
            });
        }

        let line = LineItem::new(
            entry.id.clone(),
            entry.name.clone(),
            entry.unit_price,
            1,
            roster.local().clone(),
            entry.image_ref.clone(),
        );

        Ok(vec![OrderEvent::item_added(&line)])
    }

    /// Raises the quantity of one of the local participant's lines.
    ///
    /// An unknown ID or a line owned by someone else is a silent
    /// no-change.
    pub fn increment_own(&self, item_id: &ItemId) -> Result<Vec<OrderEvent>, OrderError> {
        let roster = self.require_editable()?;

        match self.owned_line(roster, item_id) {
            Some(line) => Ok(vec![OrderEvent::item_quantity_changed(
                line,
                line.quantity + 1,
            )]),
            None => Ok(vec![]),
        }
    }

    /// Lowers the quantity of one of the local participant's lines.
    ///
    /// A decrement at quantity 1 removes the line; quantity zero is
    /// never observable. An unknown ID or a line owned by someone
    /// else is a silent no-change.
    pub fn decrement_own(&self, item_id: &ItemId) -> Result<Vec<OrderEvent>, OrderError> {
        let roster = self.require_editable()?;

        match self.owned_line(roster, item_id) {
            Some(line) if line.quantity == 1 => Ok(vec![OrderEvent::item_removed(line)]),
            Some(line) => Ok(vec![OrderEvent::item_quantity_changed(
                line,
                line.quantity - 1,
            )]),
            None => Ok(vec![]),
        }
    }

    /// Removes one of the local participant's lines outright.
    pub fn remove_own(&self, item_id: &ItemId) -> Result<Vec<OrderEvent>, OrderError> {
        let roster = self.require_editable()?;

        match self.owned_line(roster, item_id) {
            Some(line) => Ok(vec![OrderEvent::item_removed(line)]),
            None => Ok(vec![]),
        }
    }

    /// Moves the order from ordering to confirmed.
    pub fn confirm(&self) -> Result<Vec<OrderEvent>, OrderError> {
        self.require_open()?;

        if self.status != OrderStatus::Ordering {
            return Err(OrderError::InvalidTransition {
                status: self.status,
            });
        }

        Ok(vec![OrderEvent::status_advanced(
            OrderStatus::Ordering,
            OrderStatus::Confirmed,
        )])
    }

    /// Moves the order one step along the lifecycle.
    pub fn advance(&self) -> Result<Vec<OrderEvent>, OrderError> {
        self.require_open()?;

        match self.status.next() {
            Some(next) => Ok(vec![OrderEvent::status_advanced(self.status, next)]),
            None => Err(OrderError::InvalidTransition {
                status: self.status,
            }),
        }
    }

    fn require_open(&self) -> Result<&Roster, OrderError> {
        self.roster.as_ref().ok_or(OrderError::NotOpened)
    }

    fn require_editable(&self) -> Result<&Roster, OrderError> {
        let roster = self.require_open()?;
        if !self.status.can_edit() {
            return Err(OrderError::Locked {
                status: self.status,
            });
        }
        Ok(roster)
    }

    /// First line with the given ID that belongs to the local participant.
    fn owned_line<'a>(&'a self, roster: &Roster, item_id: &ItemId) -> Option<&'a LineItem> {
        self.items
            .iter()
            .find(|line| &line.id == item_id && line.is_owned_by(roster.local()))
    }
}

// Apply event helpers
impl Order {
    fn apply_order_opened(&mut self, data: &OrderOpenedData) {
        self.id = Some(data.order_id);
        self.outing_name = data.outing_name.clone();
        self.restaurant_name = data.restaurant_name.clone();
        self.estimated_time = data.estimated_time.clone();
        self.roster = Some(data.roster.clone());
        self.policy = data.policy;
    }

    fn apply_item_added(&mut self, data: &ItemAddedData) {
        self.items.push(LineItem::new(
            data.item_id.clone(),
            data.name.clone(),
            data.unit_price,
            data.quantity,
            data.ordered_by.clone(),
            data.image_ref.clone(),
        ));
    }

    fn apply_item_quantity_changed(&mut self, data: &ItemQuantityChangedData) {
        if let Some(line) = self
            .items
            .iter_mut()
            .find(|line| line.id == data.item_id && line.ordered_by == data.ordered_by)
        {
            line.quantity = data.new_quantity;
        }
    }

    fn apply_item_removed(&mut self, data: &ItemRemovedData) {
        if let Some(position) = self
            .items
            .iter()
            .position(|line| line.id == data.item_id && line.ordered_by == data.ordered_by)
        {
            // Vec::remove keeps the remaining lines in insertion order
            self.items.remove(position);
        }
    }

    fn apply_status_advanced(&mut self, data: &StatusAdvancedData) {
        self.status = data.to;
    }
}
