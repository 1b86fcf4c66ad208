//! Review Backend Client
//!
//! The dashboard talks to exactly two endpoints:
//!
//! | Operation    | Request                  | Success body              |
//! |--------------|--------------------------|---------------------------|
//! | List reviews | `GET {base}/api/reviews/`| JSON array of reviews     |
//! | Ask          | `POST {base}/api/ask/`   | JSON object with `answer` |
//!
//! Both are single round trips: no retries, no caching, no streaming.
//! `ReviewBackend` is the seam the session is written against, so tests and
//! alternative transports can stand in for `ReviewsClient`.

mod error;
mod http;

use async_trait::async_trait;

use crate::model::ReviewRecord;

pub use crate::model::AskReply;
pub use error::ClientError;
pub use http::ReviewsClient;

/// Source of reviews and answers
#[async_trait]
pub trait ReviewBackend: Send + Sync {
    /// Fetch the full review list
    async fn list_reviews(&self) -> Result<Vec<ReviewRecord>, ClientError>;

    /// Ask a free-text question about the reviews
    async fn ask(&self, question: &str) -> Result<AskReply, ClientError>;
}
