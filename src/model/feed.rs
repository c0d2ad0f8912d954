//! Transient list of captured keys.
//!
//! Each captured key becomes a `KeyPress` that expires a fixed time after it
//! was pushed. The overlay draws the newest `max_visible_keys` entries.

use std::time::{Duration, Instant};

use uuid::Uuid;

use super::constants::MAX_VISIBLE_KEYS_LIMIT;

/// One captured keystroke.
#[derive(Debug, Clone, PartialEq)]
pub struct KeyPress {
    pub id: Uuid,
    /// Normalized display label (e.g. "⌘+c", "↵").
    pub label: String,
    pub pressed_at: Instant,
    /// Deadline fixed at push time; later duration changes don't retime it.
    pub expires_at: Instant,
}

impl KeyPress {
    pub fn new(label: impl Into<String>, now: Instant, duration: Duration) -> Self {
        Self {
            id: Uuid::new_v4(),
            label: label.into(),
            pressed_at: now,
            expires_at: now + duration,
        }
    }

    pub fn is_expired(&self, now: Instant) -> bool {
        self.expires_at <= now
    }
}

/// Ordered (oldest first) list of live key presses.
///
/// Holds at most `MAX_VISIBLE_KEYS_LIMIT` entries. An entry evicted by that
/// limit is gone for good, even if it would have outlived newer ones.
#[derive(Debug, Clone, Default)]
pub struct KeyFeed {
    entries: Vec<KeyPress>,
}

impl KeyFeed {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a key press and return its id.
    ///
    /// Expired entries go first, then the oldest beyond the limit.
    pub fn push(&mut self, label: impl Into<String>, now: Instant, duration: Duration) -> Uuid {
        let press = KeyPress::new(label, now, duration);
        let id = press.id;
        self.prune(now);
        self.entries.push(press);

        let cap = MAX_VISIBLE_KEYS_LIMIT as usize;
        if self.entries.len() > cap {
            let excess = self.entries.len() - cap;
            self.entries.drain(..excess);
        }
        id
    }

    /// Push only while capture is enabled.
    pub fn capture(
        &mut self,
        enabled: bool,
        label: impl Into<String>,
        now: Instant,
        duration: Duration,
    ) -> Option<Uuid> {
        enabled.then(|| self.push(label, now, duration))
    }

    /// Drop expired entries. Returns how many were removed.
    pub fn prune(&mut self, now: Instant) -> usize {
        let before = self.entries.len();
        self.entries.retain(|p| !p.is_expired(now));
        before - self.entries.len()
    }

    /// The newest `max` entries, oldest first.
    pub fn visible(&self, max: usize) -> &[KeyPress] {
        let start = self.entries.len().saturating_sub(max);
        &self.entries[start..]
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const TWO_SECS: Duration = Duration::from_secs(2);

    #[test]
    fn test_push_assigns_unique_ids() {
        let mut feed = KeyFeed::new();
        let now = Instant::now();
        let a = feed.push("a", now, TWO_SECS);
        let b = feed.push("a", now, TWO_SECS);
        assert_ne!(a, b);
        assert_eq!(feed.len(), 2);
    }

    #[test]
    fn test_capture_while_enabled_pushes() {
        let mut feed = KeyFeed::new();
        let id = feed.capture(true, "⌘+c", Instant::now(), TWO_SECS);
        assert!(id.is_some());
        assert_eq!(feed.visible(1)[0].id, id.unwrap());
    }

    #[test]
    fn test_capture_while_paused_is_noop() {
        let mut feed = KeyFeed::new();
        let now = Instant::now();
        feed.push("a", now, TWO_SECS);

        assert!(feed.capture(false, "b", now, TWO_SECS).is_none());
        assert_eq!(feed.len(), 1);
        assert_eq!(feed.visible(5)[0].label, "a");
    }

    #[test]
    fn test_push_prunes_expired_before_capping() {
        let mut feed = KeyFeed::new();
        let start = Instant::now();
        feed.push("stale", start, Duration::from_millis(100));
        feed.push("live", start, TWO_SECS);

        feed.push("next", start + Duration::from_secs(1), TWO_SECS);
        let labels: Vec<_> = feed.visible(5).iter().map(|p| p.label.as_str()).collect();
        assert_eq!(labels, vec!["live", "next"]);
    }
}
