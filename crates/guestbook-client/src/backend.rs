use reqwest::StatusCode;
use thiserror::Error;
use uuid::Uuid;

use guestbook_store::{StoreClient, StoreError};
use guestbook_types::api::ErrorBody;
use guestbook_types::models::GuestbookEntry;
use guestbook_types::validate::NewEntry;

#[derive(Debug, Error)]
pub enum ClientError {
    #[error("gateway unreachable: {0}")]
    Transport(#[from] reqwest::Error),

    /// The gateway replied with an `{error}` payload.
    #[error("{message}")]
    Gateway { status: StatusCode, message: String },

    /// Direct-store mode failure, surfaced as-is.
    #[error("{0}")]
    Store(#[from] StoreError),

    #[error("gateway returned an unexpected body")]
    UnexpectedBody,
}

/// HTTP client for the gateway variant. Mirrors the gateway's surface:
/// GET/POST `/guestbook`, DELETE `/guestbook/{id}`.
pub struct GatewayClient {
    http: reqwest::Client,
    base_url: String,
}

impl GatewayClient {
    pub fn new(base_url: String) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    async fn fetch(&self) -> Result<Vec<GuestbookEntry>, ClientError> {
        let resp = self.http.get(self.url("/guestbook")).send().await?;
        let resp = check(resp).await?;
        Ok(resp.json().await.map_err(|_| ClientError::UnexpectedBody)?)
    }

    async fn submit(
        &self,
        entry: &NewEntry,
    ) -> Result<GuestbookEntry, ClientError> {
        let resp = self
            .http
            .post(self.url("/guestbook"))
            .json(entry)
            .send()
            .await?;
        let resp = check(resp).await?;
        // The gateway replies with a one-element array, same shape as GET.
        let mut rows: Vec<GuestbookEntry> =
            resp.json().await.map_err(|_| ClientError::UnexpectedBody)?;
        rows.pop().ok_or(ClientError::UnexpectedBody)
    }

    async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        let resp = self
            .http
            .delete(self.url(&format!("/guestbook/{id}")))
            .send()
            .await?;
        check(resp).await?;
        Ok(())
    }
}

/// Turn a non-2xx gateway reply into [`ClientError::Gateway`], carrying
/// the gateway's own error message when the body has one.
async fn check(resp: reqwest::Response) -> Result<reqwest::Response, ClientError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }
    let message = match resp.json::<ErrorBody>().await {
        Ok(body) => body.error,
        Err(_) => status
            .canonical_reason()
            .unwrap_or("unknown gateway error")
            .to_string(),
    };
    Err(ClientError::Gateway { status, message })
}

/// The two frontend variants share one session and UI; only the wire
/// differs. `Gateway` goes through the HTTP gateway, `Direct` drives
/// the store client itself.
pub enum Backend {
    Gateway(GatewayClient),
    Direct(StoreClient),
}

impl Backend {
    pub fn label(&self) -> &'static str {
        match self {
            Backend::Gateway(_) => "gateway",
            Backend::Direct(_) => "direct store",
        }
    }

    pub async fn fetch(&self) -> Result<Vec<GuestbookEntry>, ClientError> {
        match self {
            Backend::Gateway(c) => c.fetch().await,
            Backend::Direct(c) => Ok(c.select_all().await?),
        }
    }

    pub async fn submit(
        &self,
        entry: &NewEntry,
    ) -> Result<GuestbookEntry, ClientError> {
        match self {
            Backend::Gateway(c) => c.submit(entry).await,
            Backend::Direct(c) => Ok(c.insert(entry).await?),
        }
    }

    pub async fn delete(&self, id: Uuid) -> Result<(), ClientError> {
        match self {
            Backend::Gateway(c) => c.delete(id).await,
            Backend::Direct(c) => Ok(c.delete(id).await?),
        }
    }
}
