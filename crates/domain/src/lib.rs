//! Domain layer for the shared order model.
//!
//! This crate provides the core domain abstractions including:
//! - Aggregate trait for event-sourced entities
//! - DomainEvent trait for domain events
//! - Order aggregate with its lifecycle state machine and item ledger
//! - Derived totals and the snapshot handed to observers

pub mod aggregate;
pub mod order;

pub use aggregate::{Aggregate, DomainEvent};
pub use order::{
    Catalog, ChargePolicy, ItemId, LineItem, MenuItem, Money, Order, OrderCommand, OrderError,
    OrderEvent, OrderSnapshot, OrderStatus, OutingPlan, ParticipantName, Roster, Totals,
};
