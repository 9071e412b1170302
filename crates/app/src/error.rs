//! Application-level error types.

use domain::OrderError;
use thiserror::Error;

/// Errors surfaced by the session surface.
#[derive(Debug, Error)]
pub enum AppError {
    /// The domain rejected the command.
    #[error(transparent)]
    Order(#[from] OrderError),

    /// The session task is gone and can no longer take commands.
    #[error("session is closed")]
    SessionClosed,
}

/// Convenience alias for app-level results.
pub type Result<T> = std::result::Result<T, AppError>;
