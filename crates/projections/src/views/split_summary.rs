//! Split summary read model — who owes what on the shared bill.

use std::collections::HashMap;
use std::sync::{Arc, PoisonError, RwLock};

use domain::{ChargePolicy, Money, OrderEvent, ParticipantName};
use journal::EventRecord;

use crate::read_model::ReadModel;
use crate::view::{View, ViewPosition};

/// One participant's slice of the bill.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParticipantShare {
    pub participant: ParticipantName,

    /// Sum of the participant's line totals.
    pub items_subtotal: Money,

    /// The participant's subtotal grown by the tax rate.
    pub with_tax: Money,
}

#[derive(Debug, Default)]
struct SplitState {
    /// Participants in roster order.
    roster: Vec<ParticipantName>,

    /// Running items subtotal per participant.
    spend: HashMap<ParticipantName, Money>,

    /// Running subtotal across the whole order.
    subtotal: Money,

    /// Charge rates, taken from the OrderOpened event.
    policy: ChargePolicy,

    position: ViewPosition,
}

/// Read model view answering "who owes what".
///
/// Folds the fat item events into a running per-participant spend, so
/// the shares stay current without consulting the aggregate.
#[derive(Clone)]
pub struct SplitSummaryView {
    state: Arc<RwLock<SplitState>>,
}

impl SplitSummaryView {
    /// Creates a new empty split summary view.
    pub fn new() -> Self {
        Self {
            state: Arc::new(RwLock::new(SplitState::default())),
        }
    }

    /// The given participant's share, or None if they are not on the roster.
    pub fn share(&self, participant: &ParticipantName) -> Option<ParticipantShare> {
        let state = self.read_state();
        if !state.roster.contains(participant) {
            return None;
        }
        let items_subtotal = state
            .spend
            .get(participant)
            .copied()
            .unwrap_or_else(Money::zero);
        Some(ParticipantShare {
            participant: participant.clone(),
            items_subtotal,
            with_tax: state.policy.grand_total_on(items_subtotal),
        })
    }

    /// Every participant's share, in roster order.
    ///
    /// Participants with no lines appear with a zero share.
    pub fn all_shares(&self) -> Vec<ParticipantShare> {
        let state = self.read_state();
        state
            .roster
            .iter()
            .map(|participant| {
                let items_subtotal = state
                    .spend
                    .get(participant)
                    .copied()
                    .unwrap_or_else(Money::zero);
                ParticipantShare {
                    participant: participant.clone(),
                    items_subtotal,
                    with_tax: state.policy.grand_total_on(items_subtotal),
                }
            })
            .collect()
    }

    /// Splits the grand total evenly, pairing each participant with a
    /// share. Shares differ by at most one cent and sum exactly.
    pub fn even_split(&self) -> Vec<(ParticipantName, Money)> {
        let state = self.read_state();
        let grand_total = state.policy.grand_total_on(state.subtotal);
        state
            .roster
            .iter()
            .cloned()
            .zip(grand_total.split_even(state.roster.len()))
            .collect()
    }

    /// Running subtotal across the whole order.
    pub fn order_subtotal(&self) -> Money {
        self.read_state().subtotal
    }

    /// Grand total derived from the running subtotal.
    pub fn order_grand_total(&self) -> Money {
        let state = self.read_state();
        state.policy.grand_total_on(state.subtotal)
    }

    fn read_state(&self) -> std::sync::RwLockReadGuard<'_, SplitState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> std::sync::RwLockWriteGuard<'_, SplitState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Default for SplitSummaryView {
    fn default() -> Self {
        Self::new()
    }
}

impl View for SplitSummaryView {
    fn name(&self) -> &'static str {
        "SplitSummaryView"
    }

    fn apply(&self, record: &EventRecord<OrderEvent>) {
        let mut state = self.write_state();

        match &record.event {
            OrderEvent::OrderOpened(data) => {
                state.roster = data.roster.names().to_vec();
                state.policy = data.policy;
            }
            OrderEvent::ItemAdded(data) => {
                let delta = data.unit_price.multiply(data.quantity);
                *state
                    .spend
                    .entry(data.ordered_by.clone())
                    .or_insert_with(Money::zero) += delta;
                state.subtotal += delta;
            }
            OrderEvent::ItemQuantityChanged(data) => {
                let old = data.unit_price.multiply(data.old_quantity);
                let new = data.unit_price.multiply(data.new_quantity);
                let delta = new - old;
                *state
                    .spend
                    .entry(data.ordered_by.clone())
                    .or_insert_with(Money::zero) += delta;
                state.subtotal += delta;
            }
            OrderEvent::ItemRemoved(data) => {
                let delta = data.unit_price.multiply(data.quantity);
                *state
                    .spend
                    .entry(data.ordered_by.clone())
                    .or_insert_with(Money::zero) -= delta;
                state.subtotal -= delta;
            }
            OrderEvent::StatusAdvanced(_) => {}
        }

        state.position = state.position.advance();
    }

    fn position(&self) -> ViewPosition {
        self.read_state().position
    }

    fn reset(&self) {
        let mut state = self.write_state();
        *state = SplitState::default();
    }
}

impl ReadModel for SplitSummaryView {
    fn name(&self) -> &'static str {
        "SplitSummaryView"
    }

    fn count(&self) -> usize {
        // Use try_read to avoid blocking; returns 0 if lock is held
        self.state.try_read().map(|s| s.roster.len()).unwrap_or(0)
    }
}
