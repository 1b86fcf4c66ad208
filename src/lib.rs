//! # Review Lens
//!
//! Customer-review sentiment dashboard: filtering, aggregation and an
//! ask-your-data panel over a remote review API.
//!
//! ## Modules
//!
//! - [`model`]: Review records and their sentiment vocabulary
//! - [`filter`]: Filter criteria and the filter/aggregation engine
//! - [`view`]: Dashboard view state, transitions and the derived view
//! - [`render`]: Plain-text rendering for terminals
//! - `client`, `session`, `config`, `telemetry`: native runtime pieces
//!   (feature `native`, on by default)
//!
//! The `model`, `filter`, `view` and `render` modules are pure and build for
//! WebAssembly; the web frontend uses them with default features off.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use review_lens::{Config, DashboardSession, Event, ReviewsClient, SentimentFilter};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = Config::discover(None)?;
//!     let session = DashboardSession::new(ReviewsClient::new(&config.backend)?);
//!
//!     // One-time load of the review list
//!     session.mount().await?;
//!
//!     // Narrow down and ask
//!     session.dispatch(Event::SentimentSelected(SentimentFilter::Negative)).await;
//!     session.dispatch(Event::PresetChosen(0)).await;
//!
//!     let view = session.view().await;
//!     println!("{}", review_lens::render::render_dashboard(&view));
//!
//!     Ok(())
//! }
//! ```

pub mod filter;
pub mod model;
pub mod render;
pub mod view;

#[cfg(feature = "native")]
pub mod client;
#[cfg(feature = "native")]
pub mod config;
#[cfg(feature = "native")]
pub mod session;
#[cfg(feature = "native")]
pub mod telemetry;

// Re-export top-level types for convenience
pub use model::{AskReply, AspectKey, AspectSentiment, ReviewId, ReviewRecord, Sentiment};

pub use filter::{
    apply, FilterCriteria, FilterOutcome, FocusedAspect, SentimentFilter, SentimentSummary,
};

pub use view::{
    AskPhase, AskTicket, Command, DashboardState, DashboardView, Event, LoadState,
    QUICK_QUESTIONS,
};

#[cfg(feature = "native")]
pub use client::{ClientError, ReviewBackend, ReviewsClient};

#[cfg(feature = "native")]
pub use config::{BackendConfig, Config, ConfigError, LogFormat, LoggingConfig};

#[cfg(feature = "native")]
pub use session::DashboardSession;
