//! SplitEase application surface.
//!
//! Composes the domain, journal, and projection crates into a usable
//! front: [`OrderSession`] for synchronous command dispatch with
//! observer fan-out, [`SessionHandle`] for driving a session from other
//! tasks, environment [`AppConfig`], the canonical sample data, and
//! [`PaymentRequest`] share payloads.

pub mod config;
pub mod error;
pub mod handle;
pub mod sample;
pub mod session;
pub mod share;

use domain::{OrderError, OutingPlan};
use projections::{ActivityFeedView, SplitSummaryView};

pub use config::AppConfig;
pub use error::{AppError, Result};
pub use handle::SessionHandle;
pub use session::{CommandOutcome, OrderSession};
pub use share::PaymentRequest;

/// Opens a session over the plan and wires both read-side views into it.
///
/// The returned view handles share state with the registered copies, so
/// they keep folding as the session dispatches commands.
pub fn create_session_with_views(
    plan: OutingPlan,
) -> std::result::Result<(OrderSession, SplitSummaryView, ActivityFeedView), OrderError> {
    let mut session = OrderSession::open(plan)?;

    let split = SplitSummaryView::new();
    let activity = ActivityFeedView::new();
    session.register_view(Box::new(split.clone()));
    session.register_view(Box::new(activity.clone()));

    Ok((session, split, activity))
}
