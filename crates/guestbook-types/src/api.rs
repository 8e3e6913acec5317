use serde::{Deserialize, Serialize};

use crate::validate::{NewEntry, ValidationError};

// -- Entries --

/// Body of `POST /guestbook`. `mood` is optional; the minimal
/// `{name, message}` form remains valid.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEntryRequest {
    pub name: String,
    #[serde(default)]
    pub mood: Option<String>,
    pub message: String,
}

impl CreateEntryRequest {
    pub fn validate(&self) -> Result<NewEntry, ValidationError> {
        NewEntry::new(&self.name, self.mood.as_deref(), &self.message)
    }
}

/// Error payload returned by the gateway instead of a bare status. The
/// gateway never lets an error escape without a body.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}
