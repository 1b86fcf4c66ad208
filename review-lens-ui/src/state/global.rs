//! Global Application State
//!
//! One `RwSignal<DashboardState>` holds everything. Components never edit it
//! directly: they `dispatch` events, which run through
//! `DashboardState::transition`, and read the derived `DashboardView` memo.

use leptos::*;
use review_lens::view::{AskTicket, Command, DashboardState, DashboardView, Event};

use crate::api;

/// Global application state provided to all components
#[derive(Clone, Copy)]
pub struct GlobalState {
    /// The dashboard state slot
    pub dashboard: RwSignal<DashboardState>,
    /// Everything the page draws, recomputed when the state changes
    pub view: Memo<DashboardView>,
    /// Set once the review request has gone out
    load_started: StoredValue<bool>,
}

/// Provide global state to the component tree and start loading reviews
pub fn provide_global_state() {
    let dashboard = create_rw_signal(DashboardState::new());
    let view = create_memo(move |_| dashboard.with(DashboardState::view));
    let state = GlobalState {
        dashboard,
        view,
        load_started: store_value(false),
    };

    provide_context(state);
    state.load_reviews();
}

/// Fetch the global state from context
pub fn use_global_state() -> GlobalState {
    use_context::<GlobalState>().expect("GlobalState not found")
}

impl GlobalState {
    /// Apply `event` and start any request it asks for
    pub fn dispatch(&self, event: Event) {
        let mut command = None;
        self.dashboard.update(|state| {
            let (next, issued) = std::mem::take(state).transition(event);
            *state = next;
            command = issued;
        });

        if let Some(Command::Ask(ticket)) = command {
            let state = *self;
            spawn_local(async move { state.run_ask(ticket).await });
        }
    }

    /// Fetch the review list; only the first call per page load does anything
    pub fn load_reviews(&self) {
        if !claim_once(self.load_started) {
            return;
        }

        let state = *self;
        spawn_local(async move {
            match api::fetch_reviews().await {
                Ok(reviews) => state.dispatch(Event::ReviewsLoaded(reviews)),
                Err(e) => {
                    web_sys::console::error_1(&format!("Failed to load reviews: {}", e).into());
                    state.dispatch(Event::ReviewsFailed);
                }
            }
        });
    }

    async fn run_ask(self, ticket: AskTicket) {
        let outcome = match api::ask(&ticket.question).await {
            Ok(answer) => Event::AnswerReceived {
                seq: ticket.seq,
                answer,
            },
            Err(e) => {
                web_sys::console::error_1(&format!("Ask failed: {}", e).into());
                Event::AnswerFailed { seq: ticket.seq }
            }
        };
        self.dispatch(outcome);
    }
}

/// Set `flag`; true only for the call that found it unset
fn claim_once(flag: StoredValue<bool>) -> bool {
    let first = !flag.get_value();
    flag.set_value(true);
    first
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_review_load_is_claimed_once() {
        let runtime = create_runtime();

        let started = store_value(false);
        assert!(claim_once(started));
        assert!(!claim_once(started));
        assert!(!claim_once(started));

        runtime.dispose();
    }
}
