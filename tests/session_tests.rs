//! `DashboardSession` end to end against a stub backend

mod common;

use axum::http::StatusCode;
use common::{spawn_backend, Stub};
use review_lens::client::ReviewsClient;
use review_lens::filter::SentimentFilter;
use review_lens::session::DashboardSession;
use review_lens::view::{
    AskPhase, Event, LoadState, ReviewTable, ASK_ERROR_MESSAGE, LOAD_ERROR_MESSAGE,
    NO_ANSWER_FALLBACK, QUICK_QUESTIONS,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;

async fn session_for(stub: Arc<Stub>) -> DashboardSession<ReviewsClient> {
    let url = spawn_backend(stub).await;
    DashboardSession::new(ReviewsClient::with_base_url(url).unwrap())
}

#[tokio::test]
async fn test_mount_and_filter() {
    let session = session_for(Arc::new(Stub::default())).await;
    assert_eq!(session.mount().await.unwrap(), 3);

    session.dispatch(Event::SentimentSelected(SentimentFilter::Negative)).await;
    let view = session.view().await;

    assert_eq!(view.kpi("total").unwrap().value, "1");
    assert_eq!(view.kpi("negative_share").unwrap().value, "100%");
    assert_eq!(view.kpi("top_pain_point").unwrap().value, "Timeliness");
    let ReviewTable::Rows { rows } = view.table else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].source, "App");
}

#[tokio::test]
async fn test_search_matches_source_only_token() {
    let session = session_for(Arc::new(Stub::default())).await;
    session.mount().await.unwrap();

    session.dispatch(Event::SearchChanged("WEB".into())).await;
    let state = session.snapshot().await;
    let outcome = state.filtered();
    assert_eq!(outcome.reviews.len(), 1);
    assert_eq!(outcome.reviews[0].id.to_string(), "2");
}

#[tokio::test]
async fn test_load_failure() {
    let stub = Arc::new(Stub::default());
    *stub.reviews_status.lock().unwrap() = Some(StatusCode::SERVICE_UNAVAILABLE);
    let session = session_for(stub).await;

    assert!(session.mount().await.is_err());
    let state = session.snapshot().await;
    assert_eq!(state.load(), &LoadState::Errored(LOAD_ERROR_MESSAGE.to_string()));
    assert!(state.reviews().is_empty());
    assert_eq!(
        session.view().await.table,
        ReviewTable::Failed { message: LOAD_ERROR_MESSAGE.to_string() }
    );
}

#[tokio::test]
async fn test_empty_answer_shows_fallback() {
    let stub = Arc::new(Stub::default());
    *stub.ask_body.lock().unwrap() = Some(json!({"answer": ""}));
    let session = session_for(stub).await;

    session.dispatch(Event::PresetChosen(0)).await;
    let ask = session.snapshot().await.ask().clone();
    assert_eq!(ask.answer.as_deref(), Some(NO_ANSWER_FALLBACK));
    assert_eq!(ask.question, QUICK_QUESTIONS[0]);
}

#[tokio::test]
async fn test_ask_failure_clears_previous_answer() {
    let stub = Arc::new(Stub::default());
    let session = session_for(stub.clone()).await;

    session.dispatch(Event::PresetChosen(1)).await;
    assert!(session.snapshot().await.ask().answer.is_some());

    *stub.ask_status.lock().unwrap() = Some(StatusCode::INTERNAL_SERVER_ERROR);
    session.dispatch(Event::PresetChosen(2)).await;

    let ask = session.snapshot().await.ask().clone();
    assert_eq!(ask.answer, None);
    assert_eq!(ask.error.as_deref(), Some(ASK_ERROR_MESSAGE));
}

#[tokio::test]
async fn test_blank_ask_makes_no_request() {
    let stub = Arc::new(Stub::default());
    let session = session_for(stub.clone()).await;

    session.dispatch(Event::QuestionEdited("   ".into())).await;
    let before = session.snapshot().await;
    session.dispatch(Event::AskSubmitted).await;

    assert_eq!(stub.ask_calls(), 0);
    assert_eq!(session.snapshot().await, before);
}

#[tokio::test]
async fn test_latest_ask_wins_over_slow_earlier_one() {
    let stub = Arc::new(Stub::default());
    stub.slow_questions
        .lock()
        .unwrap()
        .push(("delivery times".into(), Duration::from_millis(400)));
    let session = Arc::new(session_for(stub.clone()).await);

    // QUICK_QUESTIONS[0] mentions delivery times and is answered slowly
    let slow = tokio::spawn({
        let session = session.clone();
        async move { session.dispatch(Event::PresetChosen(0)).await }
    });
    tokio::time::sleep(Duration::from_millis(100)).await;

    session.dispatch(Event::PresetChosen(4)).await;
    let ask = session.snapshot().await.ask().clone();
    assert_eq!(ask.phase(), AskPhase::Answered);
    assert_eq!(ask.answer, Some(format!("answer to {}", QUICK_QUESTIONS[4])));

    slow.await.unwrap();
    let ask = session.snapshot().await.ask().clone();
    assert_eq!(ask.answer, Some(format!("answer to {}", QUICK_QUESTIONS[4])));
    assert!(!ask.asking);
    assert_eq!(stub.ask_calls(), 2);
}
