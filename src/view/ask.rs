//! Ask-panel state

use serde::{Deserialize, Serialize};

/// Shown when the ask request fails
pub const ASK_ERROR_MESSAGE: &str = "Could not get an answer from the backend.";

/// Shown when the backend answers without an `answer` (or with an empty one)
pub const NO_ANSWER_FALLBACK: &str = "No answer returned.";

/// One-click preset questions, in display order
pub const QUICK_QUESTIONS: [&str; 5] = [
    "Why are customers unhappy with delivery times?",
    "Summarize the main complaints from the last week.",
    "What are customers most satisfied with?",
    "Which aspects have the most negative sentiment?",
    "Are there any recurring issues with drivers?",
];

/// Where the ask flow currently is
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AskPhase {
    Idle,
    Asking,
    Answered,
    Errored,
}

/// A request the view wants sent to `POST /api/ask/`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AskTicket {
    /// Sequence number; only the latest issued ticket may update the view
    pub seq: u64,
    /// Trimmed question text
    pub question: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct AskState {
    /// Question box contents, untrimmed
    pub question: String,
    pub answer: Option<String>,
    pub error: Option<String>,
    pub asking: bool,
    /// Sequence number of the most recently issued ticket (0 = none yet)
    pub last_issued: u64,
}

impl AskState {
    pub fn phase(&self) -> AskPhase {
        if self.asking {
            AskPhase::Asking
        } else if self.error.is_some() {
            AskPhase::Errored
        } else if self.answer.is_some() {
            AskPhase::Answered
        } else {
            AskPhase::Idle
        }
    }

    /// Start a new request for `preset` or, without one, the question box.
    ///
    /// Blank input issues nothing and leaves the state untouched. A preset is
    /// copied into the question box. The previous answer and error are
    /// cleared before the request goes out.
    pub(crate) fn begin(&mut self, preset: Option<&str>) -> Option<AskTicket> {
        let question = preset.unwrap_or(&self.question).trim().to_string();
        if question.is_empty() {
            return None;
        }

        if preset.is_some() {
            self.question = question.clone();
        }
        self.answer = None;
        self.error = None;
        self.asking = true;
        self.last_issued += 1;

        Some(AskTicket {
            seq: self.last_issued,
            question,
        })
    }

    /// Apply the outcome of ticket `seq`. Outcomes of superseded tickets are
    /// dropped; returns whether the outcome was applied.
    pub(crate) fn settle(&mut self, seq: u64, outcome: Result<Option<String>, ()>) -> bool {
        if seq != self.last_issued {
            return false;
        }

        self.asking = false;
        match outcome {
            Ok(answer) => {
                self.answer = Some(answer_or_fallback(answer));
                self.error = None;
            }
            Err(()) => {
                self.answer = None;
                self.error = Some(ASK_ERROR_MESSAGE.to_string());
            }
        }
        true
    }
}

/// `answer`, or the fallback text when it is missing or empty
pub fn answer_or_fallback(answer: Option<String>) -> String {
    answer
        .filter(|a| !a.is_empty())
        .unwrap_or_else(|| NO_ANSWER_FALLBACK.to_string())
}
