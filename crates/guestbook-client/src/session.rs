use std::time::{Duration, Instant};

use uuid::Uuid;

use guestbook_types::models::GuestbookEntry;

/// How long a confirmation toast stays visible.
const TOAST_TTL: Duration = Duration::from_secs(1);

struct Toast {
    text: String,
    expires_at: Instant,
}

/// In-memory presentation state for one client run: the fetched entry
/// list (kept in store order, newest first), the active search query,
/// and the transient toast. All network effects happen elsewhere; the
/// session only records their confirmed outcomes, so a failed call
/// leaves it untouched.
pub struct Session {
    entries: Vec<GuestbookEntry>,
    query: String,
    toast: Option<Toast>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
            query: String::new(),
            toast: None,
        }
    }

    /// Install a fresh fetch result, replacing whatever was held.
    pub fn replace(&mut self, entries: Vec<GuestbookEntry>) {
        self.entries = entries;
    }

    /// Optimistic prepend after a confirmed submit: the server-returned
    /// entry goes straight to the front, no re-fetch.
    pub fn prepend(&mut self, entry: GuestbookEntry) {
        self.entries.insert(0, entry);
    }

    /// Drop an entry after the store confirms deletion. Returns false
    /// if the id was not held locally.
    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.id != id);
        self.entries.len() < before
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.query = query.into();
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    /// The filtered view: case-insensitive substring match across name,
    /// mood, and message. Never mutates the underlying list; an empty
    /// query yields everything.
    pub fn visible(&self) -> Vec<&GuestbookEntry> {
        self.entries
            .iter()
            .filter(|e| e.matches(&self.query))
            .collect()
    }

    pub fn total(&self) -> usize {
        self.entries.len()
    }

    /// Resolve a full or prefix id string against the held entries.
    /// Prefixes must be unambiguous.
    pub fn resolve(&self, id: &str) -> Option<Uuid> {
        if let Ok(full) = id.parse::<Uuid>() {
            return self.entries.iter().find(|e| e.id == full).map(|e| e.id);
        }
        let mut matches = self
            .entries
            .iter()
            .filter(|e| e.id.to_string().starts_with(id));
        let first = matches.next()?;
        if matches.next().is_some() {
            return None;
        }
        Some(first.id)
    }

    /// Show a confirmation toast. A new toast replaces any pending one,
    /// restarting the auto-clear deadline.
    pub fn show_toast(&mut self, text: impl Into<String>, now: Instant) {
        self.toast = Some(Toast {
            text: text.into(),
            expires_at: now + TOAST_TTL,
        });
    }

    /// The toast text, if one is still within its display window.
    pub fn toast(&self, now: Instant) -> Option<&str> {
        self.toast
            .as_ref()
            .filter(|t| now < t.expires_at)
            .map(|t| t.text.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Duration as ChronoDuration, TimeZone, Utc};

    fn entry(name: &str, mood: Option<&str>, message: &str, minute: u32) -> GuestbookEntry {
        GuestbookEntry {
            id: Uuid::new_v4(),
            name: name.into(),
            mood: mood.map(String::from),
            message: message.into(),
            created_at: Utc.with_ymd_and_hms(2026, 8, 30, 12, minute, 0).unwrap(),
        }
    }

    /// Three entries, newest first, as the store would return them.
    fn seeded() -> Session {
        let mut s = Session::new();
        s.replace(vec![
            entry("Cara", Some("classmate"), "Long time no see", 3),
            entry("Ben", None, "Great site", 2),
            entry("Ann", Some("friend"), "Hello there", 1),
        ]);
        s
    }

    #[test]
    fn replace_keeps_store_order() {
        let s = seeded();
        let names: Vec<_> = s.visible().iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, ["Cara", "Ben", "Ann"]);
    }

    #[test]
    fn ordering_is_created_at_descending() {
        let s = seeded();
        let stamps: Vec<_> = s.visible().iter().map(|e| e.created_at).collect();
        assert!(stamps.windows(2).all(|w| w[0] > w[1]));
    }

    #[test]
    fn prepend_puts_new_entry_first() {
        let mut s = seeded();
        let newest = s.visible()[0].created_at;
        let mut e = entry("Dee", None, "Just signed", 4);
        e.created_at = newest + ChronoDuration::minutes(1);
        let id = e.id;
        s.prepend(e);

        let visible = s.visible();
        assert_eq!(visible[0].id, id);
        assert_eq!(s.total(), 4);
        assert!(visible[0].created_at >= visible[1].created_at);
    }

    #[test]
    fn remove_drops_only_that_entry() {
        let mut s = seeded();
        let victim = s.visible()[1].id;
        assert!(s.remove(victim));
        assert_eq!(s.total(), 2);
        assert!(s.visible().iter().all(|e| e.id != victim));
    }

    #[test]
    fn remove_unknown_id_is_a_noop() {
        let mut s = seeded();
        assert!(!s.remove(Uuid::new_v4()));
        assert_eq!(s.total(), 3);
    }

    #[test]
    fn empty_query_shows_everything() {
        let mut s = seeded();
        s.set_query("");
        assert_eq!(s.visible().len(), 3);
    }

    #[test]
    fn search_is_case_insensitive_across_fields() {
        let mut s = seeded();

        s.set_query("ANN");
        assert_eq!(s.visible().len(), 1);

        // mood field
        s.set_query("classmate");
        assert_eq!(s.visible()[0].name, "Cara");

        // message field
        s.set_query("great");
        assert_eq!(s.visible()[0].name, "Ben");
    }

    #[test]
    fn no_match_filters_without_mutating() {
        let mut s = seeded();
        s.set_query("zebra");
        assert!(s.visible().is_empty());
        assert_eq!(s.total(), 3);

        s.set_query("");
        assert_eq!(s.visible().len(), 3);
    }

    #[test]
    fn toast_clears_after_ttl() {
        let mut s = Session::new();
        let t0 = Instant::now();
        s.show_toast("Saved", t0);
        assert_eq!(s.toast(t0), Some("Saved"));
        assert_eq!(s.toast(t0 + Duration::from_millis(900)), Some("Saved"));
        assert_eq!(s.toast(t0 + Duration::from_millis(1100)), None);
    }

    #[test]
    fn new_toast_replaces_pending_deadline() {
        let mut s = Session::new();
        let t0 = Instant::now();
        s.show_toast("Saved", t0);
        // Just before the first toast would clear, a delete lands.
        let t1 = t0 + Duration::from_millis(900);
        s.show_toast("Deleted", t1);
        // Past the first deadline the second toast is still up.
        assert_eq!(s.toast(t0 + Duration::from_millis(1500)), Some("Deleted"));
        assert_eq!(s.toast(t1 + Duration::from_millis(1100)), None);
    }

    #[test]
    fn resolve_accepts_unambiguous_prefix() {
        let s = seeded();
        let id = s.visible()[0].id;
        let prefix = &id.to_string()[..8];
        assert_eq!(s.resolve(prefix), Some(id));
        assert_eq!(s.resolve(&id.to_string()), Some(id));
        assert_eq!(s.resolve("zzzz"), None);
    }
}
