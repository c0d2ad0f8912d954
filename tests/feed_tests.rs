//! Tests for the key feed (capture order, capacity, expiry).

use std::time::{Duration, Instant};

use keyshow::model::constants::MAX_VISIBLE_KEYS_LIMIT;
use keyshow::KeyFeed;

const TWO_SECS: Duration = Duration::from_secs(2);

fn labels(feed: &KeyFeed, max: usize) -> Vec<&str> {
    feed.visible(max).iter().map(|p| p.label.as_str()).collect()
}

#[test]
fn new_feed_is_empty() {
    let feed = KeyFeed::new();
    assert!(feed.is_empty());
    assert!(feed.visible(5).is_empty());
}

#[test]
fn visible_keeps_capture_order_oldest_first() {
    let mut feed = KeyFeed::new();
    let now = Instant::now();
    for l in ["a", "b", "c"] {
        feed.push(l, now, TWO_SECS);
    }
    assert_eq!(labels(&feed, 5), vec!["a", "b", "c"]);
}

#[test]
fn visible_returns_newest_entries() {
    let mut feed = KeyFeed::new();
    let now = Instant::now();
    for l in ["a", "b", "c", "d"] {
        feed.push(l, now, TWO_SECS);
    }
    assert_eq!(labels(&feed, 2), vec!["c", "d"]);
    assert!(labels(&feed, 0).is_empty());
}

#[test]
fn push_drops_oldest_beyond_capacity() {
    let mut feed = KeyFeed::new();
    let now = Instant::now();
    for i in 0..15 {
        feed.push(i.to_string(), now, TWO_SECS);
    }
    assert_eq!(feed.len(), MAX_VISIBLE_KEYS_LIMIT as usize);
    assert_eq!(feed.visible(1)[0].label, "14");
    assert_eq!(feed.visible(10)[0].label, "5");
}

#[test]
fn prune_removes_only_expired_entries() {
    let mut feed = KeyFeed::new();
    let start = Instant::now();
    feed.push("old", start, Duration::from_millis(500));
    feed.push("new", start, TWO_SECS);

    assert_eq!(feed.prune(start + Duration::from_millis(100)), 0);
    assert_eq!(feed.prune(start + Duration::from_secs(1)), 1);
    assert_eq!(labels(&feed, 5), vec!["new"]);
}

#[test]
fn entry_expires_exactly_at_deadline() {
    let mut feed = KeyFeed::new();
    let start = Instant::now();
    feed.push("a", start, TWO_SECS);
    assert_eq!(feed.prune(start + TWO_SECS), 1);
    assert!(feed.is_empty());
}

#[test]
fn duration_is_fixed_when_pushed() {
    let mut feed = KeyFeed::new();
    let start = Instant::now();
    feed.push("short", start, Duration::from_secs(1));
    feed.push("long", start, Duration::from_secs(4));

    let later = start + Duration::from_secs(2);
    feed.prune(later);
    assert_eq!(labels(&feed, 5), vec!["long"]);
}

#[test]
fn entry_records_press_and_expiry_times() {
    let mut feed = KeyFeed::new();
    let start = Instant::now();
    feed.push("a", start, TWO_SECS);
    let p = &feed.visible(1)[0];
    assert_eq!(p.pressed_at, start);
    assert_eq!(p.expires_at, start + TWO_SECS);
    assert!(!p.is_expired(start));
}

#[test]
fn clear_empties_the_feed() {
    let mut feed = KeyFeed::new();
    feed.push("a", Instant::now(), TWO_SECS);
    feed.clear();
    assert!(feed.is_empty());
    assert_eq!(feed.prune(Instant::now() + TWO_SECS), 0);
}

#[test]
fn long_lived_key_evicted_by_capacity_stays_gone() {
    let mut feed = KeyFeed::new();
    let start = Instant::now();
    feed.push("long", start, Duration::from_secs(5));
    for i in 0..MAX_VISIBLE_KEYS_LIMIT {
        feed.push(i.to_string(), start, Duration::from_secs(1));
    }
    assert!(labels(&feed, 10).iter().all(|l| *l != "long"));

    // The short keys expire first; the evicted one does not reappear.
    feed.prune(start + TWO_SECS);
    assert!(feed.is_empty());
}

#[test]
fn push_makes_room_from_expired_entries_first() {
    let mut feed = KeyFeed::new();
    let start = Instant::now();
    feed.push("keep", start, Duration::from_secs(5));
    for i in 0..9 {
        feed.push(i.to_string(), start, Duration::from_millis(500));
    }
    assert_eq!(feed.len(), 10);

    feed.push("late", start + Duration::from_secs(1), TWO_SECS);
    assert_eq!(labels(&feed, 10), vec!["keep", "late"]);
}
