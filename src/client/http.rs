//! reqwest implementation of `ReviewBackend`

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::Serialize;
use std::time::Duration;

use super::{AskReply, ClientError, ReviewBackend};
use crate::config::BackendConfig;
use crate::model::ReviewRecord;

/// HTTP client for the review backend
#[derive(Debug, Clone)]
pub struct ReviewsClient {
    http: Client,
    base_url: String,
}

#[derive(Debug, Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

impl ReviewsClient {
    /// Build a client from configuration. No timeout is applied unless one is configured.
    pub fn new(config: &BackendConfig) -> Result<Self, ClientError> {
        let mut builder = Client::builder();
        if let Some(secs) = config.request_timeout_secs {
            builder = builder.timeout(Duration::from_secs(secs));
        }

        Ok(Self {
            http: builder.build()?,
            base_url: normalize_base_url(&config.base_url),
        })
    }

    /// Client with default settings against `base_url`
    pub fn with_base_url(base_url: impl Into<String>) -> Result<Self, ClientError> {
        Self::new(&BackendConfig {
            base_url: base_url.into(),
            ..BackendConfig::default()
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> String {
        format!("{}/api/{}/", self.base_url, path)
    }

    /// Turn a response into its JSON body, or a status error for non-2xx
    async fn read_json(response: Response) -> Result<serde_json::Value, ClientError> {
        let status = response.status();
        let body = response.text().await.map_err(ClientError::from_transport)?;

        if !status.is_success() {
            return Err(ClientError::Status {
                status: status.as_u16(),
                body,
            });
        }

        serde_json::from_str(&body).map_err(|e| ClientError::Decode(e.to_string()))
    }
}

#[async_trait]
impl ReviewBackend for ReviewsClient {
    async fn list_reviews(&self) -> Result<Vec<ReviewRecord>, ClientError> {
        let url = self.endpoint("reviews");
        tracing::debug!(%url, "Fetching reviews");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let body = Self::read_json(response).await?;
        serde_json::from_value(body).map_err(|e| ClientError::Decode(e.to_string()))
    }

    async fn ask(&self, question: &str) -> Result<AskReply, ClientError> {
        let question = question.trim();
        if question.is_empty() {
            return Err(ClientError::EmptyQuestion);
        }

        let url = self.endpoint("ask");
        tracing::debug!(%url, question_len = question.len(), "Sending question");

        let response = self
            .http
            .post(&url)
            .json(&AskRequest { question })
            .send()
            .await
            .map_err(ClientError::from_transport)?;

        let body = Self::read_json(response).await?;
        Ok(AskReply::from_value(&body))
    }
}

fn normalize_base_url(base_url: &str) -> String {
    base_url.trim().trim_end_matches('/').to_string()
}
