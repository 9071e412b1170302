//! Read model views folded from the order journal.

pub mod activity;
pub mod split_summary;

pub use activity::{ActivityEntry, ActivityFeedView};
pub use split_summary::{ParticipantShare, SplitSummaryView};
