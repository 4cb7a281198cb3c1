//! Router creation and configuration
//!
//! Creates the Axum router for the REST API endpoints.

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use qna_store::QnaStore;

use super::handlers::*;
use super::types::AppState;

/// Create the REST API router over an injected store
pub fn create_router(store: Arc<dyn QnaStore>) -> Router {
    let state = AppState { store };

    Router::new()
        .route("/health", get(health))
        .route("/questions", post(create_question).get(list_questions))
        // Static segment registered alongside the capture; axum gives
        // "/questions/search" priority over "/questions/:question_id".
        .route("/questions/search", get(search_questions))
        .route(
            "/questions/:question_id",
            get(get_question).put(update_question).delete(delete_question),
        )
        .route(
            "/questions/:question_id/answers",
            post(create_answer).get(list_answers).delete(delete_answers),
        )
        .route("/questions/:question_id/vote", post(vote_question))
        .route("/questions/:question_id/score", get(question_score))
        .route("/answers/:answer_id/vote", post(vote_answer))
        .route("/answers/:answer_id/score", get(answer_score))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TraceLayer::new_for_http())
}
