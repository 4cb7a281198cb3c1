//! Custom extractors
//!
//! Provides a JSON extractor that rejects through the API error
//! taxonomy: a body that cannot be decoded is an `InvalidInput`, so
//! malformed JSON produces the same error envelope as a failed
//! validator.

use axum::{
    extract::{FromRequest, Request},
    Json,
};

use crate::error::ApiError;

/// JSON extractor rejecting with [`ApiError`]
pub struct JsonExtractor<T>(pub T);

#[axum::async_trait]
impl<S, T> FromRequest<S> for JsonExtractor<T>
where
    T: serde::de::DeserializeOwned,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(payload) = Json::<T>::from_request(req, state)
            .await
            .map_err(ApiError::from)?;

        Ok(Self(payload))
    }
}
