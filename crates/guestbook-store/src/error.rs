use reqwest::{Response, StatusCode};
use serde::Deserialize;
use thiserror::Error;
use tracing::warn;

#[derive(Debug, Error)]
pub enum StoreError {
    /// Network-layer failure before any store reply arrived.
    #[error("store unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The store replied with a non-success status. `message` is the
    /// human-readable text from its structured error body, surfaced
    /// verbatim to callers.
    #[error("store rejected request ({status}): {message}")]
    Rejected { status: StatusCode, message: String },

    /// A success reply whose body did not parse.
    #[error("store returned an unreadable body: {0}")]
    Decode(&'static str),

    #[error("store configuration error: {0}")]
    Config(&'static str),
}

impl StoreError {
    pub(crate) fn decode(err: reqwest::Error) -> Self {
        warn!("failed to decode store response: {err}");
        StoreError::Decode("response body did not match the expected shape")
    }
}

/// Error body shape used by the store's REST layer.
#[derive(Debug, Deserialize)]
struct StoreErrorBody {
    message: String,
}

/// Turn a non-2xx reply into [`StoreError::Rejected`], preferring the
/// store's own message over the bare status line.
pub(crate) async fn check(resp: Response) -> Result<Response, StoreError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<StoreErrorBody>().await {
        Ok(body) => body.message,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown store error")
            .to_string(),
    };
    Err(StoreError::Rejected { status, message })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_body_parses_message() {
        let body: StoreErrorBody = serde_json::from_str(
            r#"{"code": "23502", "message": "null value in column \"name\"", "details": null}"#,
        )
        .unwrap();
        assert_eq!(body.message, "null value in column \"name\"");
    }

    #[test]
    fn rejected_renders_status_and_message() {
        let err = StoreError::Rejected {
            status: StatusCode::UNAUTHORIZED,
            message: "invalid api key".into(),
        };
        assert_eq!(
            err.to_string(),
            "store rejected request (401 Unauthorized): invalid api key"
        );
    }
}
