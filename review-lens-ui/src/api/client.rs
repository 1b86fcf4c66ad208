//! HTTP API Client
//!
//! Functions for communicating with the review REST API.

use gloo_net::http::{Request, Response};
use review_lens::model::{AskReply, ReviewRecord};

/// Default API base URL
pub const DEFAULT_API_BASE: &str = "http://localhost:8000";

/// Local storage key that overrides the API base URL
const API_URL_KEY: &str = "review_lens_api_url";

/// Get the API base URL from local storage, the build environment, or the default
pub fn get_api_base() -> String {
    let stored = web_sys::window()
        .and_then(|window| window.local_storage().ok().flatten())
        .and_then(|storage| storage.get_item(API_URL_KEY).ok().flatten())
        .filter(|url| !url.trim().is_empty());

    let url = stored
        .or_else(|| option_env!("REVIEW_LENS_API_BASE_URL").map(str::to_string))
        .unwrap_or_else(|| DEFAULT_API_BASE.to_string());

    // Normalize: remove trailing slash
    url.trim().trim_end_matches('/').to_string()
}

#[derive(serde::Serialize)]
struct AskRequest<'a> {
    question: &'a str,
}

/// Fetch every review
pub async fn fetch_reviews() -> Result<Vec<ReviewRecord>, String> {
    let response = Request::get(&format!("{}/api/reviews/", get_api_base()))
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let body = read_json(response).await?;
    serde_json::from_value(body).map_err(|e| format!("Parse error: {}", e))
}

/// Ask a question; `Ok(None)` when the backend sent no usable answer
pub async fn ask(question: &str) -> Result<Option<String>, String> {
    let response = Request::post(&format!("{}/api/ask/", get_api_base()))
        .json(&AskRequest { question })
        .map_err(|e| format!("Request build error: {}", e))?
        .send()
        .await
        .map_err(|e| format!("Network error: {}", e))?;

    let body = read_json(response).await?;
    Ok(AskReply::from_value(&body).answer)
}

async fn read_json(response: Response) -> Result<serde_json::Value, String> {
    if !response.ok() {
        let text = response.text().await.unwrap_or_default();
        return Err(format!("HTTP {}: {}", response.status(), text));
    }

    response
        .json()
        .await
        .map_err(|e| format!("Parse error: {}", e))
}
