//! Dashboard view state and its transitions
//!
//! `DashboardState` is the single source of truth behind the dashboard. It is
//! only ever replaced, never edited in place: `transition` consumes the old
//! state with one `Event` and returns the new state plus, at most, one
//! `Command` for the caller to execute (the ask round trip).

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

use super::ask::{AskState, AskTicket, QUICK_QUESTIONS};
use super::dashboard::DashboardView;
use crate::filter::{self, FilterCriteria, FilterOutcome, SentimentFilter};
use crate::model::{AspectKey, ReviewRecord};

/// Shown in place of the table when the review list cannot be fetched
pub const LOAD_ERROR_MESSAGE: &str = "Could not load reviews.";

/// Review list lifecycle. Entered once; there is no way back to `Loading`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "status", content = "message", rename_all = "snake_case")]
pub enum LoadState {
    Loading,
    Loaded,
    Errored(String),
}

/// User actions and request outcomes
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    ReviewsLoaded(Vec<ReviewRecord>),
    ReviewsFailed,
    SentimentSelected(SentimentFilter),
    SearchChanged(String),
    DateFromChanged(Option<NaiveDate>),
    DateToChanged(Option<NaiveDate>),
    AspectToggled(AspectKey),
    QuestionEdited(String),
    /// Ask the question currently in the box
    AskSubmitted,
    /// Ask `QUICK_QUESTIONS[index]`
    PresetChosen(usize),
    AnswerReceived { seq: u64, answer: Option<String> },
    AnswerFailed { seq: u64 },
}

/// Side effects requested by a transition
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Ask(AskTicket),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DashboardState {
    /// Shared so that cloning the state per transition stays cheap
    reviews: Arc<Vec<ReviewRecord>>,
    load: LoadState,
    criteria: FilterCriteria,
    ask: AskState,
}

impl Default for DashboardState {
    fn default() -> Self {
        Self::new()
    }
}

impl DashboardState {
    /// State at mount: no reviews, load in flight
    pub fn new() -> Self {
        Self {
            reviews: Arc::new(Vec::new()),
            load: LoadState::Loading,
            criteria: FilterCriteria::default(),
            ask: AskState::default(),
        }
    }

    pub fn reviews(&self) -> &[ReviewRecord] {
        &self.reviews
    }

    pub fn load(&self) -> &LoadState {
        &self.load
    }

    pub fn criteria(&self) -> &FilterCriteria {
        &self.criteria
    }

    pub fn ask(&self) -> &AskState {
        &self.ask
    }

    /// Filtered rows and aggregates for the current criteria
    pub fn filtered(&self) -> FilterOutcome<'_> {
        filter::apply(&self.reviews, &self.criteria)
    }

    /// Everything the dashboard renders, derived from this state
    pub fn view(&self) -> DashboardView {
        DashboardView::from_state(self)
    }

    /// Apply `event`, returning the next state and any command to run
    pub fn transition(mut self, event: Event) -> (Self, Option<Command>) {
        let mut command = None;

        match event {
            Event::ReviewsLoaded(reviews) => {
                if self.load == LoadState::Loading {
                    tracing::debug!(count = reviews.len(), "Reviews loaded into view state");
                    self.reviews = Arc::new(reviews);
                    self.load = LoadState::Loaded;
                } else {
                    tracing::warn!("Ignoring review load outside the loading state");
                }
            }
            Event::ReviewsFailed => {
                if self.load == LoadState::Loading {
                    self.reviews = Arc::new(Vec::new());
                    self.load = LoadState::Errored(LOAD_ERROR_MESSAGE.to_string());
                }
            }
            Event::SentimentSelected(sentiment) => self.criteria.sentiment = sentiment,
            Event::SearchChanged(search) => self.criteria.search = search,
            Event::DateFromChanged(date) => self.criteria.date_from = date,
            Event::DateToChanged(date) => self.criteria.date_to = date,
            Event::AspectToggled(key) => self.criteria.focus = self.criteria.focus.toggled(key),
            Event::QuestionEdited(question) => self.ask.question = question,
            Event::AskSubmitted => {
                command = self.ask.begin(None).map(Command::Ask);
            }
            Event::PresetChosen(index) => match QUICK_QUESTIONS.get(index).copied() {
                Some(preset) => command = self.ask.begin(Some(preset)).map(Command::Ask),
                None => tracing::warn!(index, "Unknown quick question"),
            },
            Event::AnswerReceived { seq, answer } => {
                if !self.ask.settle(seq, Ok(answer)) {
                    tracing::debug!(seq, latest = self.ask.last_issued, "Discarding stale answer");
                }
            }
            Event::AnswerFailed { seq } => {
                if !self.ask.settle(seq, Err(())) {
                    tracing::debug!(seq, latest = self.ask.last_issued, "Discarding stale ask failure");
                }
            }
        }

        if let Some(Command::Ask(ticket)) = &command {
            tracing::debug!(seq = ticket.seq, question_len = ticket.question.len(), "Ask issued");
        }

        (self, command)
    }

    /// Apply a sequence of events, collecting the commands they produce
    pub fn transition_all(self, events: impl IntoIterator<Item = Event>) -> (Self, Vec<Command>) {
        events
            .into_iter()
            .fold((self, Vec::new()), |(state, mut commands), event| {
                let (next, command) = state.transition(event);
                commands.extend(command);
                (next, commands)
            })
    }
}
