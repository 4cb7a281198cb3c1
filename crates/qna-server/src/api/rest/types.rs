//! REST API type definitions
//!
//! Request and response types for the REST API endpoints. Request
//! body fields deliberately stay `serde_json::Value`: type checking
//! is a validator decision, so a numeric title is an InvalidInput
//! response rather than a deserialization rejection.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::sync::Arc;

use qna_store::QnaStore;

/// Application state
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn QnaStore>,
}

/// Health check response
#[derive(Debug, Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

/// Body for POST /questions
#[derive(Debug, Default, Deserialize)]
pub struct QuestionCreatePayload {
    #[serde(default)]
    pub title: Option<Value>,

    #[serde(default)]
    pub description: Option<Value>,

    #[serde(default)]
    pub category: Option<Value>,
}

/// Body for PUT /questions/:id
///
/// Every field keeps an explicit JSON `null` distinguishable from an
/// absent field: a null title is a present-but-invalid title (400),
/// not "leave unchanged", and the category is decoded only so the
/// validator can reject its presence; it is never forwarded to the
/// store.
#[derive(Debug, Default, Deserialize)]
pub struct QuestionUpdatePayload {
    #[serde(default, deserialize_with = "some_even_if_null")]
    pub title: Option<Value>,

    #[serde(default, deserialize_with = "some_even_if_null")]
    pub description: Option<Value>,

    #[serde(default, deserialize_with = "some_even_if_null")]
    pub category: Option<Value>,
}

/// Query parameters for GET /questions/search
#[derive(Debug, Default, Deserialize)]
pub struct SearchParams {
    #[serde(default)]
    pub title: Option<String>,

    #[serde(default)]
    pub category: Option<String>,
}

/// Body for POST /questions/:id/answers
#[derive(Debug, Default, Deserialize)]
pub struct AnswerCreatePayload {
    #[serde(default)]
    pub content: Option<Value>,
}

/// Body for vote endpoints
#[derive(Debug, Default, Deserialize)]
pub struct VotePayload {
    #[serde(default)]
    pub vote: Option<Value>,
}

/// Answer row as listed under a question
///
/// The parent id is implied by the path, so the listing carries only
/// `{id, content}`.
#[derive(Debug, Serialize)]
pub struct AnswerItem {
    pub id: i64,
    pub content: String,
}

impl From<qna_store::Answer> for AnswerItem {
    fn from(answer: qna_store::Answer) -> Self {
        Self {
            id: answer.id,
            content: answer.content,
        }
    }
}

/// `{message}` response for mutations
#[derive(Debug, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

/// `{message, id}` response for creations
#[derive(Debug, Serialize)]
pub struct CreatedResponse {
    pub message: String,
    pub id: i64,
}

/// `{data}` envelope for reads
#[derive(Debug, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

/// Keep an explicit JSON `null` distinguishable from an absent field.
///
/// `{"category": null}` on an update is still an attempt to touch the
/// category and must be rejected, so the field deserializes to
/// `Some(Value::Null)` instead of `None`.
fn some_even_if_null<'de, D>(deserializer: D) -> Result<Option<Value>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Value::deserialize(deserializer).map(Some)
}
