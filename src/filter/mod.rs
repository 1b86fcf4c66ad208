//! Review Filtering and Aggregation
//!
//! Client-side filtering of the in-memory review set and the aggregates the
//! dashboard is drawn from.
//!
//! - **criteria**: filter state (`FilterCriteria`, `SentimentFilter`, `FocusedAspect`)
//! - **dates**: timestamp and date-input parsing
//! - **engine**: the predicate composition and aggregation
//!
//! # Example
//!
//! ```rust
//! use review_lens::filter::{apply, FilterCriteria, SentimentFilter};
//! use review_lens::model::{ReviewRecord, Sentiment};
//!
//! let reviews = vec![
//!     ReviewRecord::new("1", Sentiment::Positive).source("App Store"),
//!     ReviewRecord::new("2", Sentiment::Negative).source("Web"),
//! ];
//!
//! let criteria = FilterCriteria::default().sentiment(SentimentFilter::Negative);
//! let outcome = apply(&reviews, &criteria);
//!
//! assert_eq!(outcome.summary.total, 1);
//! assert_eq!(outcome.summary.negative_share, Some(100));
//! ```

pub mod criteria;
pub mod dates;
pub mod engine;

pub use criteria::{FilterCriteria, FocusedAspect, ParseSentimentFilterError, SentimentFilter};
pub use dates::{end_of_day, format_date_input, parse_date_input, parse_timestamp, start_of_day};
pub use engine::{
    apply, percent, AspectStats, FilterOutcome, SentimentCounts, SentimentSummary,
};
