//! Client for the hosted data store's REST surface. The store is an
//! external collaborator: it assigns ids and timestamps, orders result
//! sets, and enforces uniqueness. This crate is the only place that
//! knows its wire format; everything above it sees `GuestbookEntry`
//! values and `StoreError`s.

pub mod error;

use reqwest::header::{AUTHORIZATION, HeaderMap, HeaderValue};
use tracing::debug;
use uuid::Uuid;

use guestbook_types::models::GuestbookEntry;
use guestbook_types::validate::NewEntry;

pub use error::StoreError;

/// Connection settings for the store, read from the environment at
/// process start and injected into whichever component needs a client.
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Project base URL, e.g. `https://xyz.supabase.co`.
    pub url: String,
    /// Service key, sent as both `apikey` and bearer token.
    pub key: String,
    /// Table holding the entries.
    pub table: String,
}

impl StoreConfig {
    pub fn from_env() -> Result<Self, StoreError> {
        let url = std::env::var("GUESTBOOK_STORE_URL")
            .map_err(|_| StoreError::Config("GUESTBOOK_STORE_URL is not set"))?;
        let key = std::env::var("GUESTBOOK_STORE_KEY")
            .map_err(|_| StoreError::Config("GUESTBOOK_STORE_KEY is not set"))?;
        let table =
            std::env::var("GUESTBOOK_STORE_TABLE").unwrap_or_else(|_| "guestbook".into());
        Ok(Self { url, key, table })
    }

    /// REST endpoint for the entries table.
    fn rest_url(&self) -> String {
        format!("{}/rest/v1/{}", self.url.trim_end_matches('/'), self.table)
    }
}

/// Handle to the store. Cheap to clone; built once at startup and
/// handed to whichever component needs it.
#[derive(Clone)]
pub struct StoreClient {
    http: reqwest::Client,
    config: StoreConfig,
}

impl StoreClient {
    pub fn new(config: StoreConfig) -> Result<Self, StoreError> {
        let mut headers = HeaderMap::new();
        let mut key = HeaderValue::from_str(&config.key)
            .map_err(|_| StoreError::Config("store key contains invalid header bytes"))?;
        key.set_sensitive(true);
        headers.insert("apikey", key);
        let mut bearer = HeaderValue::from_str(&format!("Bearer {}", config.key))
            .map_err(|_| StoreError::Config("store key contains invalid header bytes"))?;
        bearer.set_sensitive(true);
        headers.insert(AUTHORIZATION, bearer);

        let http = reqwest::Client::builder()
            .default_headers(headers)
            .build()?;
        Ok(Self { http, config })
    }

    /// All entries, newest first. The ordering comes from the store,
    /// not from a local sort.
    pub async fn select_all(&self) -> Result<Vec<GuestbookEntry>, StoreError> {
        let resp = self
            .http
            .get(self.config.rest_url())
            .query(&[("select", "*"), ("order", "created_at.desc")])
            .send()
            .await?;
        let resp = error::check(resp).await?;
        let entries: Vec<GuestbookEntry> = resp.json().await.map_err(StoreError::decode)?;
        debug!(count = entries.len(), "fetched entries from store");
        Ok(entries)
    }

    /// Insert-with-returning: the created row comes back with the
    /// store-assigned `id` and `created_at`.
    pub async fn insert(&self, entry: &NewEntry) -> Result<GuestbookEntry, StoreError> {
        let resp = self
            .http
            .post(self.config.rest_url())
            .header("Prefer", "return=representation")
            .json(&[entry])
            .send()
            .await?;
        let resp = error::check(resp).await?;
        let mut rows: Vec<GuestbookEntry> = resp.json().await.map_err(StoreError::decode)?;
        rows.pop()
            .ok_or(StoreError::Decode("insert returned no row"))
    }

    /// Delete by id. The store treats a vanished id as a no-op, so this
    /// succeeds whether or not the row still exists.
    pub async fn delete(&self, id: Uuid) -> Result<(), StoreError> {
        let resp = self
            .http
            .delete(self.config.rest_url())
            .query(&[("id", format!("eq.{id}"))])
            .send()
            .await?;
        error::check(resp).await?;
        debug!(%id, "deleted entry");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(url: &str) -> StoreConfig {
        StoreConfig {
            url: url.into(),
            key: "key".into(),
            table: "guestbook".into(),
        }
    }

    #[test]
    fn rest_url_joins_table() {
        assert_eq!(
            config("https://xyz.example.co").rest_url(),
            "https://xyz.example.co/rest/v1/guestbook"
        );
    }

    #[test]
    fn rest_url_tolerates_trailing_slash() {
        assert_eq!(
            config("https://xyz.example.co/").rest_url(),
            "https://xyz.example.co/rest/v1/guestbook"
        );
    }

    #[test]
    fn entry_row_deserializes() {
        let row = r#"{
            "id": "5f2c1f9e-9f3a-4a82-b6d1-0b6f53a3f0aa",
            "name": "Ann",
            "mood": null,
            "message": "Hi",
            "created_at": "2026-08-30T12:00:00Z"
        }"#;
        let entry: GuestbookEntry = serde_json::from_str(row).unwrap();
        assert_eq!(entry.name, "Ann");
        assert_eq!(entry.mood, None);
    }
}
