pub mod file_handlers;
pub mod item_handlers;

pub use file_handlers::*;
pub use item_handlers::*;

use axum::{extract::rejection::JsonRejection, http::StatusCode, Json};
use tracing::error;

use crate::{adapters::inbound::http::dto::ErrorResponseDto, domain::errors::StoreError};

/// Error half of every handler result
pub type ErrorResponse = (StatusCode, Json<ErrorResponseDto>);

/// Map a store error to its HTTP response.
///
/// Validation and not-found messages describe the caller's mistake and are
/// safe to surface. Backend detail is logged here and replaced with the
/// generic `fallback` so internals never leak to the caller.
pub(crate) fn store_error_response(err: StoreError, fallback: &str) -> ErrorResponse {
    let status = StatusCode::from(&err);

    let message = match &err {
        StoreError::Backend { .. } => {
            error!(error = %err, "request failed");
            fallback.to_string()
        }
        other => other.to_string(),
    };

    (status, Json(ErrorResponseDto::new(&message)))
}

/// Map a malformed JSON body to a 400 response
pub(crate) fn bad_request(rejection: JsonRejection) -> ErrorResponse {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponseDto::new(&rejection.body_text())),
    )
}
