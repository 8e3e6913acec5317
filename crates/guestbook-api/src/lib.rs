pub mod entries;
pub mod error;

use std::sync::Arc;

use axum::{
    Router,
    routing::{delete, get, post},
};

use guestbook_store::StoreClient;

pub type AppState = Arc<AppStateInner>;

/// Shared state for the gateway. Handlers are stateless beyond this:
/// the injected store client is the only thing they touch.
pub struct AppStateInner {
    pub store: StoreClient,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(entries::home))
        .route("/guestbook", get(entries::list_entries))
        .route("/guestbook", post(entries::create_entry))
        .route("/guestbook/{id}", delete(entries::delete_entry))
        .with_state(state)
}
