//! Dashboard Session
//!
//! Owns a `ReviewBackend` and the single `DashboardState` slot. Every change
//! goes through `DashboardState::transition`; the session only runs the
//! round trips the transitions ask for and feeds their outcomes back in as
//! events.
//!
//! The state lock is never held across a backend call, so the mount-time
//! load and any number of asks can be in flight together. Ask outcomes are
//! sequenced by the view state itself: only the latest issued ask lands.

use std::sync::Arc;
use tokio::sync::RwLock;

use crate::client::{ClientError, ReviewBackend};
use crate::view::{AskTicket, Command, DashboardState, DashboardView, Event};

pub struct DashboardSession<B: ReviewBackend> {
    backend: Arc<B>,
    state: RwLock<DashboardState>,
}

impl<B: ReviewBackend> DashboardSession<B> {
    pub fn new(backend: B) -> Self {
        Self::with_backend(Arc::new(backend))
    }

    pub fn with_backend(backend: Arc<B>) -> Self {
        Self {
            backend,
            state: RwLock::new(DashboardState::new()),
        }
    }

    pub fn backend(&self) -> &Arc<B> {
        &self.backend
    }

    /// Load the review list once. The outcome lands in the view state either
    /// way; the error is returned as well so callers can log or exit on it.
    pub async fn mount(&self) -> Result<usize, ClientError> {
        tracing::info!("Loading reviews");

        match self.backend.list_reviews().await {
            Ok(reviews) => {
                let count = reviews.len();
                tracing::info!(count, "Reviews loaded");
                self.apply(Event::ReviewsLoaded(reviews)).await;
                Ok(count)
            }
            Err(e) => {
                tracing::warn!(error = %e, "Failed to load reviews");
                self.apply(Event::ReviewsFailed).await;
                Err(e)
            }
        }
    }

    /// Apply a user event and run whatever round trip it triggers to completion
    pub async fn dispatch(&self, event: Event) {
        if let Some(Command::Ask(ticket)) = self.apply(event).await {
            self.run_ask(ticket).await;
        }
    }

    /// Send `ticket` to the backend and apply the outcome
    pub async fn run_ask(&self, ticket: AskTicket) {
        let outcome = match self.backend.ask(&ticket.question).await {
            Ok(reply) => {
                tracing::debug!(seq = ticket.seq, "Answer received");
                Event::AnswerReceived {
                    seq: ticket.seq,
                    answer: reply.answer,
                }
            }
            Err(e) => {
                tracing::warn!(seq = ticket.seq, error = %e, "Ask failed");
                Event::AnswerFailed { seq: ticket.seq }
            }
        };

        // Outcomes never issue further commands
        let _ = self.apply(outcome).await;
    }

    /// Current state (cheap: the review list is shared)
    pub async fn snapshot(&self) -> DashboardState {
        self.state.read().await.clone()
    }

    pub async fn view(&self) -> DashboardView {
        self.state.read().await.view()
    }

    async fn apply(&self, event: Event) -> Option<Command> {
        let mut guard = self.state.write().await;
        let (next, command) = std::mem::take(&mut *guard).transition(event);
        *guard = next;
        command
    }
}
