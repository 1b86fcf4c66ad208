//! Review Data Model
//!
//! Types describing reviews as the backend delivers them:
//!
//! - **review**: `ReviewRecord` and its identifier
//! - **sentiment**: overall and per-aspect sentiment enums, aspect keys
//! - **answer**: the ask endpoint's reply
//!
//! Sentiment values arrive as loosely-typed strings. They are parsed into
//! closed enums with an `Other` variant so that unrecognized values are kept
//! verbatim but never match a specific bucket.

pub mod answer;
pub mod review;
pub mod sentiment;

pub use answer::AskReply;
pub use review::{ReviewId, ReviewRecord};
pub use sentiment::{AspectKey, AspectSentiment, ParseAspectError, Sentiment};
