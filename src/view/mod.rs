//! Dashboard View State
//!
//! Framework-independent model of the dashboard screen:
//!
//! - **state**: `DashboardState`, the events that drive it and the commands it emits
//! - **ask**: ask-panel state, preset questions and request sequencing
//! - **dashboard**: `DashboardView`, the derived, render-ready screen
//!
//! # Data Flow
//!
//! ```text
//! user action / request outcome
//!   → Event → DashboardState::transition → (new state, Option<Command>)
//!   → DashboardState::view → DashboardView → web or terminal renderer
//! ```

pub mod ask;
pub mod dashboard;
pub mod state;

pub use ask::{
    answer_or_fallback, AskPhase, AskState, AskTicket, ASK_ERROR_MESSAGE, NO_ANSWER_FALLBACK,
    QUICK_QUESTIONS,
};
pub use dashboard::{
    AskPanel, AspectTile, ChartBar, ChartModel, DashboardView, KpiCard, PresetButton, ReviewRow,
    ReviewTable, Tone, ASK_HINT, EMPTY_CHART_MESSAGE, EMPTY_TABLE_MESSAGE, LOADING_TABLE_MESSAGE,
    PLACEHOLDER,
};
pub use state::{Command, DashboardState, Event, LoadState, LOAD_ERROR_MESSAGE};
