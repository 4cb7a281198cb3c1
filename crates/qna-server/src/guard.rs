//! Existence guards
//!
//! Guards run on the vote and score paths before any write or
//! aggregation: parse the path id, confirm the target exists,
//! short-circuit with not-found otherwise. Mutation paths do not use
//! these; there the affected-row count of the write doubles as the
//! existence signal.

use qna_store::QnaStore;

use crate::error::ApiError;

/// Parse a path-supplied id as an integer.
///
/// A non-integer id is a client error, reported before any lookup.
pub fn parse_id(raw: &str, resource: &str) -> Result<i64, ApiError> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| ApiError::InvalidInput(format!("Invalid {} id.", resource)))
}

/// Short-circuit with not-found unless the question exists
pub async fn ensure_question(store: &dyn QnaStore, id: i64) -> Result<(), ApiError> {
    if store.question_exists(id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Question not found.".to_string()))
    }
}

/// Short-circuit with not-found unless the answer exists
pub async fn ensure_answer(store: &dyn QnaStore, id: i64) -> Result<(), ApiError> {
    if store.answer_exists(id).await? {
        Ok(())
    } else {
        Err(ApiError::NotFound("Answer not found.".to_string()))
    }
}
