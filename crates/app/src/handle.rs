//! Cloneable async handle over a task-confined session.

use domain::{OrderCommand, OrderError, OrderSnapshot};
use tokio::sync::{mpsc, oneshot, watch};

use crate::error::AppError;
use crate::session::{CommandOutcome, OrderSession};

struct SessionRequest {
    command: OrderCommand,
    reply: oneshot::Sender<Result<CommandOutcome, OrderError>>,
}

/// Proxy to an [`OrderSession`] running on its own Tokio task.
///
/// The aggregate never crosses a thread boundary. Commands travel over
/// an mpsc channel in submission order; outcomes come back over oneshot
/// replies. Every state change is also published on a watch channel so
/// other tasks can observe snapshots without issuing commands.
#[derive(Clone)]
pub struct SessionHandle {
    commands: mpsc::Sender<SessionRequest>,
    snapshots: watch::Receiver<OrderSnapshot>,
}

impl SessionHandle {
    /// Moves the session onto a dedicated task and returns the handle.
    ///
    /// The task exits once every handle clone has been dropped.
    pub fn spawn(mut session: OrderSession) -> Self {
        let (commands, mut requests) = mpsc::channel::<SessionRequest>(64);
        let (publish, snapshots) = watch::channel(session.snapshot());

        tokio::spawn(async move {
            while let Some(request) = requests.recv().await {
                let result = session.dispatch(request.command);
                if let Ok(outcome) = &result {
                    if !outcome.is_noop() {
                        let _ = publish.send(outcome.snapshot.clone());
                    }
                }
                let _ = request.reply.send(result);
            }
            tracing::info!("session task stopped");
        });

        Self {
            commands,
            snapshots,
        }
    }

    /// Sends one command to the session task and waits for the outcome.
    pub async fn dispatch(&self, command: OrderCommand) -> Result<CommandOutcome, AppError> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(SessionRequest { command, reply })
            .await
            .map_err(|_| AppError::SessionClosed)?;
        response
            .await
            .map_err(|_| AppError::SessionClosed)?
            .map_err(AppError::from)
    }

    /// Latest published snapshot.
    pub fn snapshot(&self) -> OrderSnapshot {
        self.snapshots.borrow().clone()
    }

    /// A watch receiver yielding each published snapshot.
    pub fn snapshots(&self) -> watch::Receiver<OrderSnapshot> {
        self.snapshots.clone()
    }
}
