//! `{name, description}` request body.

use axum::body::Bytes;
use axum::extract::{FromRequest, Request};
use axum::http::header::CONTENT_TYPE;
use axum::http::HeaderMap;
use tracing::debug;

use itemhub_core::error::AppError;
use itemhub_entity::ItemInput;
use itemhub_entity::item::REQUIRED_FIELDS_MESSAGE;

use crate::error::ApiError;

/// Message returned when the body is not valid JSON.
pub const MALFORMED_BODY_MESSAGE: &str = "Malformed JSON body";

/// Item fields from the request body.
///
/// A request without a JSON content type, or with an empty body, yields an
/// input with no fields so that it fails the presence check like any other
/// incomplete body. JSON of the wrong shape is treated the same way.
#[derive(Debug, Clone)]
pub struct ItemBody(pub ItemInput);

fn has_json_content_type(headers: &HeaderMap) -> bool {
    headers
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .and_then(|value| value.split(';').next())
        .map(|mime| {
            let mime = mime.trim().to_ascii_lowercase();
            mime == "application/json" || (mime.starts_with("application/") && mime.ends_with("+json"))
        })
        .unwrap_or(false)
}

impl<S> FromRequest<S> for ItemBody
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let is_json = has_json_content_type(req.headers());
        let bytes = Bytes::from_request(req, state).await.map_err(|e| {
            AppError::validation(format!("Failed to read request body: {}", e.body_text()))
        })?;

        if !is_json || bytes.is_empty() {
            return Ok(Self(ItemInput::default()));
        }

        match serde_json::from_slice::<ItemInput>(&bytes) {
            Ok(input) => Ok(Self(input)),
            Err(e) if e.is_data() => {
                debug!(error = %e, "Item body has unexpected shape");
                Err(AppError::validation(REQUIRED_FIELDS_MESSAGE).into())
            }
            Err(e) => {
                debug!(error = %e, "Item body is not valid JSON");
                Err(AppError::validation(MALFORMED_BODY_MESSAGE).into())
            }
        }
    }
}
