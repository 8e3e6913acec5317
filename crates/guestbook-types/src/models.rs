use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A single guestbook submission. Entries are immutable once created;
/// the only lifecycle transitions are insert and delete, both performed
/// by the store. `id` and `created_at` are store-assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuestbookEntry {
    pub id: Uuid,
    pub name: String,
    /// Optional tag ("friend", "classmate", ...). Serialized as `null`
    /// when absent, matching the store's column shape.
    pub mood: Option<String>,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

impl GuestbookEntry {
    /// Case-insensitive substring match across name, mood, and message.
    /// An empty query matches everything.
    pub fn matches(&self, query: &str) -> bool {
        let q = query.trim().to_lowercase();
        if q.is_empty() {
            return true;
        }
        let blob = format!(
            "{} {} {}",
            self.name,
            self.mood.as_deref().unwrap_or(""),
            self.message
        )
        .to_lowercase();
        blob.contains(&q)
    }
}
