//! API endpoint handlers
//!
//! Each handler composes the applicable validators, then any
//! existence guard, then one or more store operations. Validation
//! failures never reach the store. Mutations read the affected-row
//! count to decide between success and not-found.

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    Json,
};
use tracing::info;

use crate::error::ApiError;
use crate::guard;
use crate::validate;

use super::extractors::JsonExtractor;
use super::types::*;

/// Health check endpoint
pub(super) async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// POST /questions
pub(super) async fn create_question(
    State(state): State<AppState>,
    JsonExtractor(payload): JsonExtractor<QuestionCreatePayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let question = validate::question_create(&payload)?;

    let id = state.store.insert_question(question).await?;
    info!(id, "question created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Question created successfully.".to_string(),
            id,
        }),
    ))
}

/// GET /questions
pub(super) async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<DataResponse<Vec<qna_store::Question>>>, ApiError> {
    let questions = state.store.list_questions().await?;
    Ok(Json(DataResponse { data: questions }))
}

/// GET /questions/search
pub(super) async fn search_questions(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<Json<DataResponse<Vec<qna_store::Question>>>, ApiError> {
    let filter = validate::question_search(&params)?;

    let questions = state.store.search_questions(&filter).await?;
    Ok(Json(DataResponse { data: questions }))
}

/// GET /questions/:question_id
pub(super) async fn get_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<DataResponse<qna_store::Question>>, ApiError> {
    let id = guard::parse_id(&question_id, "question")?;

    match state.store.get_question(id).await? {
        Some(question) => Ok(Json(DataResponse { data: question })),
        None => Err(ApiError::NotFound("Question not found.".to_string())),
    }
}

/// PUT /questions/:question_id
pub(super) async fn update_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    JsonExtractor(payload): JsonExtractor<QuestionUpdatePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = guard::parse_id(&question_id, "question")?;
    let patch = validate::question_update(&payload)?;

    // Zero affected rows is the existence signal here; there is no
    // guard in front of the write.
    let affected = state.store.update_question(id, patch).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Question not found.".to_string()));
    }

    Ok(Json(MessageResponse::new("Question updated successfully.")))
}

/// DELETE /questions/:question_id
pub(super) async fn delete_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = guard::parse_id(&question_id, "question")?;

    let affected = state.store.delete_question(id).await?;
    if affected == 0 {
        return Err(ApiError::NotFound("Question not found.".to_string()));
    }

    info!(id, "question deleted");
    Ok(Json(MessageResponse::new(
        "Question post has been deleted successfully.",
    )))
}

/// POST /questions/:question_id/answers
///
/// No existence guard on the parent question: a dangling id is left
/// to the store's foreign key, which surfaces as a store failure.
pub(super) async fn create_answer(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    JsonExtractor(payload): JsonExtractor<AnswerCreatePayload>,
) -> Result<(StatusCode, Json<CreatedResponse>), ApiError> {
    let id = guard::parse_id(&question_id, "question")?;
    let content = validate::answer_create(&payload)?;

    let answer_id = state.store.insert_answer(id, content).await?;
    info!(question_id = id, answer_id, "answer created");

    Ok((
        StatusCode::CREATED,
        Json(CreatedResponse {
            message: "Answer created successfully.".to_string(),
            id: answer_id,
        }),
    ))
}

/// GET /questions/:question_id/answers
pub(super) async fn list_answers(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<DataResponse<Vec<AnswerItem>>>, ApiError> {
    let id = guard::parse_id(&question_id, "question")?;

    if !state.store.question_exists(id).await? {
        return Err(ApiError::NotFound("Question not found.".to_string()));
    }

    let answers = state.store.list_answers(id).await?;
    Ok(Json(DataResponse {
        data: answers.into_iter().map(AnswerItem::from).collect(),
    }))
}

/// DELETE /questions/:question_id/answers
pub(super) async fn delete_answers(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = guard::parse_id(&question_id, "question")?;

    if !state.store.question_exists(id).await? {
        return Err(ApiError::NotFound("Question not found.".to_string()));
    }

    // Success regardless of how many rows went away.
    let removed = state.store.delete_answers(id).await?;
    info!(question_id = id, removed, "answers deleted");

    Ok(Json(MessageResponse::new(
        "All answers for the question have been deleted successfully.",
    )))
}

/// POST /questions/:question_id/vote
pub(super) async fn vote_question(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
    JsonExtractor(payload): JsonExtractor<VotePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = guard::parse_id(&question_id, "question")?;
    let vote = validate::vote(&payload)?;

    guard::ensure_question(state.store.as_ref(), id).await?;

    state.store.insert_question_vote(id, vote).await?;
    Ok(Json(MessageResponse::new(
        "Vote on the question has been recorded successfully.",
    )))
}

/// POST /answers/:answer_id/vote
pub(super) async fn vote_answer(
    State(state): State<AppState>,
    Path(answer_id): Path<String>,
    JsonExtractor(payload): JsonExtractor<VotePayload>,
) -> Result<Json<MessageResponse>, ApiError> {
    let id = guard::parse_id(&answer_id, "answer")?;
    let vote = validate::vote(&payload)?;

    guard::ensure_answer(state.store.as_ref(), id).await?;

    state.store.insert_answer_vote(id, vote).await?;
    Ok(Json(MessageResponse::new(
        "Vote on the answer has been recorded successfully.",
    )))
}

/// GET /questions/:question_id/score
pub(super) async fn question_score(
    State(state): State<AppState>,
    Path(question_id): Path<String>,
) -> Result<Json<qna_store::ScoreSummary>, ApiError> {
    let id = guard::parse_id(&question_id, "question")?;

    guard::ensure_question(state.store.as_ref(), id).await?;

    let summary = state.store.question_score(id).await?;
    Ok(Json(summary))
}

/// GET /answers/:answer_id/score
pub(super) async fn answer_score(
    State(state): State<AppState>,
    Path(answer_id): Path<String>,
) -> Result<Json<qna_store::ScoreSummary>, ApiError> {
    let id = guard::parse_id(&answer_id, "answer")?;

    guard::ensure_answer(state.store.as_ref(), id).await?;

    let summary = state.store.answer_score(id).await?;
    Ok(Json(summary))
}
