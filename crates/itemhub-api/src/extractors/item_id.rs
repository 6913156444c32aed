//! Typed `{id}` path parameter.

use axum::extract::{FromRequestParts, Path};
use axum::http::request::Parts;

use itemhub_core::error::AppError;

use crate::error::ApiError;

/// Message returned when the `{id}` segment is not an integer.
pub const INVALID_ID_MESSAGE: &str = "Invalid item id";

/// The item id taken from the `{id}` path segment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ItemId(pub i32);

impl<S> FromRequestParts<S> for ItemId
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Path(raw) = Path::<String>::from_request_parts(parts, state)
            .await
            .map_err(|_| AppError::validation(INVALID_ID_MESSAGE))?;

        raw.parse::<i32>()
            .map(Self)
            .map_err(|_| AppError::validation(INVALID_ID_MESSAGE).into())
    }
}
