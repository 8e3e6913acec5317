use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::error;

use guestbook_store::StoreError;
use guestbook_types::api::ErrorBody;
use guestbook_types::validate::ValidationError;

/// Gateway failure modes. Every variant renders as a status code plus
/// an `{error}` body; nothing escapes the boundary without a payload.
#[derive(Debug)]
pub enum ApiError {
    /// Rejected before any store call was made.
    Validation(ValidationError),
    /// The store call failed; its message is surfaced verbatim.
    Store(StoreError),
}

impl From<ValidationError> for ApiError {
    fn from(err: ValidationError) -> Self {
        ApiError::Validation(err)
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        ApiError::Store(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::Validation(err) => (StatusCode::BAD_REQUEST, err.to_string()),
            ApiError::Store(err) => {
                error!("store call failed: {err}");
                (StatusCode::BAD_GATEWAY, err.to_string())
            }
        };
        (status, Json(ErrorBody::new(message))).into_response()
    }
}
