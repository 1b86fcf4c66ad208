//! Stub review backend for integration tests

#![allow(dead_code)]

use axum::extract::State;
use axum::http::StatusCode;
use axum::routing::{get, post};
use axum::{Json, Router};
use serde_json::{json, Value};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::net::TcpListener;

/// What the stub serves, and what it has seen
#[derive(Default)]
pub struct Stub {
    pub reviews: Mutex<Option<Value>>,
    pub reviews_status: Mutex<Option<StatusCode>>,
    pub ask_status: Mutex<Option<StatusCode>>,
    /// Fixed ask body; unset means `{"answer": "answer to <question>"}`
    pub ask_body: Mutex<Option<Value>>,
    /// Questions containing the key are answered after the delay
    pub slow_questions: Mutex<Vec<(String, Duration)>>,
    pub ask_calls: AtomicUsize,
    pub questions: Mutex<Vec<String>>,
}

impl Stub {
    pub fn ask_calls(&self) -> usize {
        self.ask_calls.load(Ordering::SeqCst)
    }
}

pub fn sample_reviews() -> Value {
    json!([
        {
            "id": 1,
            "source": "App",
            "original_complaint": "The driver was late and rude",
            "overall_sentiment": "Negative",
            "detected_language": "en",
            "created_ts": "2024-03-05T10:00:00Z",
            "timeliness": "Negative",
            "order_completeness": "NotMentioned",
            "driver_behavior": "Negative",
            "cleaning_quality": "NotMentioned"
        },
        {
            "id": "2",
            "source": "Web",
            "original_complaint": "Spotless flat, thank you",
            "overall_sentiment": "Positive",
            "detected_language": "en",
            "created_ts": "2024-03-06 08:30:00",
            "timeliness": "Positive",
            "order_completeness": null,
            "driver_behavior": "",
            "cleaning_quality": "Positive"
        },
        {
            "id": 3,
            "source": null,
            "original_complaint": "ok",
            "overall_sentiment": "Neutral",
            "detected_language": "ar"
        }
    ])
}

async fn list_reviews(State(stub): State<Arc<Stub>>) -> (StatusCode, Json<Value>) {
    let status = stub.reviews_status.lock().unwrap().unwrap_or(StatusCode::OK);
    let body = stub
        .reviews
        .lock()
        .unwrap()
        .clone()
        .unwrap_or_else(sample_reviews);
    (status, Json(body))
}

async fn ask(State(stub): State<Arc<Stub>>, Json(body): Json<Value>) -> (StatusCode, Json<Value>) {
    stub.ask_calls.fetch_add(1, Ordering::SeqCst);
    let question = body["question"].as_str().unwrap_or_default().to_string();
    stub.questions.lock().unwrap().push(question.clone());

    let delay = stub
        .slow_questions
        .lock()
        .unwrap()
        .iter()
        .find(|(key, _)| question.contains(key.as_str()))
        .map(|(_, delay)| *delay);
    if let Some(delay) = delay {
        tokio::time::sleep(delay).await;
    }

    let status = stub.ask_status.lock().unwrap().unwrap_or(StatusCode::OK);
    let reply = stub
        .ask_body
        .lock()
        .unwrap()
        .clone()
        .unwrap_or_else(|| json!({ "answer": format!("answer to {}", question) }));
    (status, Json(reply))
}

/// Serve `stub` on an ephemeral port and return its base URL
pub async fn spawn_backend(stub: Arc<Stub>) -> String {
    let app = Router::new()
        .route("/api/reviews/", get(list_reviews))
        .route("/api/ask/", post(ask))
        .with_state(stub);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });

    format!("http://{}", addr)
}

/// A base URL where nothing is listening
pub async fn dead_backend() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    format!("http://{}", addr)
}
