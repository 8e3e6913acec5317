use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tracing::info;
use uuid::Uuid;

use guestbook_types::api::CreateEntryRequest;
use guestbook_types::models::GuestbookEntry;

use crate::AppState;
use crate::error::ApiError;

pub async fn home() -> &'static str {
    "API is running. Use /guestbook"
}

/// All entries, newest first. On store failure the whole request fails
/// with an `{error}` body and no partial results.
pub async fn list_entries(
    State(state): State<AppState>,
) -> Result<Json<Vec<GuestbookEntry>>, ApiError> {
    let entries = state.store.select_all().await?;
    Ok(Json(entries))
}

/// Validates the body before touching the store, then inserts and
/// replies with a one-element array holding the created entry. The
/// array shape keeps the response congruent with `GET /guestbook`.
pub async fn create_entry(
    State(state): State<AppState>,
    Json(req): Json<CreateEntryRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let draft = req.validate()?;
    let created = state.store.insert(&draft).await?;
    info!(id = %created.id, "created guestbook entry");
    Ok((StatusCode::CREATED, Json(vec![created])))
}

/// Delete by id. A vanished id is a no-op success at the store, so the
/// reply is 204 either way.
pub async fn delete_entry(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, ApiError> {
    state.store.delete(id).await?;
    info!(%id, "deleted guestbook entry");
    Ok(StatusCode::NO_CONTENT)
}
