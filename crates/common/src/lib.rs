//! Shared identifier types used across the SplitEase workspace.

pub mod types;

pub use types::OrderId;
