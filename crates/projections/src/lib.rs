//! Live views folded from the order journal.
//!
//! This crate derives screen-facing read models from recorded order
//! events:
//! - [`View`] trait for folding journal records into a read model
//! - [`ReadModel`] trait for query access to the folded state
//! - [`ViewRunner`] for feeding records from the journal to views
//! - Two views: the per-participant split summary and the activity feed
//! - [`StatusBadge`] display mapping for order statuses

pub mod presentation;
pub mod processor;
pub mod read_model;
pub mod view;
pub mod views;

pub use presentation::StatusBadge;
pub use processor::ViewRunner;
pub use read_model::ReadModel;
pub use view::{View, ViewPosition};
pub use views::{ActivityEntry, ActivityFeedView, ParticipantShare, SplitSummaryView};
