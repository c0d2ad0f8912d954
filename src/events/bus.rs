//! Thread-safe event bus using mpsc channels.
//!
//! The bus provides a simple publish/subscribe mechanism where:
//! - Any thread can publish events via `EventPublisher::publish()`
//! - The main thread polls for events via `EventBus::drain()`

use std::sync::mpsc::{self, Receiver, Sender, TryRecvError};

use super::types::AppEvent;

/// Thread-safe event bus for application-wide event distribution.
///
/// Uses a multi-producer, single-consumer (mpsc) channel internally.
/// Multiple publishers can send events concurrently, and a single
/// consumer (the main thread) receives and processes them.
///
/// # Example
///
/// ```
/// use keyshow::events::{EventBus, AppEvent};
///
/// let bus = EventBus::new();
/// let publisher = bus.publisher();
///
/// publisher.publish(AppEvent::KeyPressed("⌘+c".into()));
///
/// let events = bus.drain();
/// assert_eq!(events.len(), 1);
/// ```
pub struct EventBus {
    sender: Sender<AppEvent>,
    receiver: Receiver<AppEvent>,
}

impl EventBus {
    /// Create a new event bus.
    pub fn new() -> Self {
        let (sender, receiver) = mpsc::channel();
        Self { sender, receiver }
    }

    /// Get a publisher handle that can be cloned and sent to other threads.
    pub fn publisher(&self) -> EventPublisher {
        EventPublisher {
            sender: self.sender.clone(),
        }
    }

    /// Try to receive the next event without blocking.
    pub fn try_recv(&self) -> Option<AppEvent> {
        match self.receiver.try_recv() {
            Ok(event) => Some(event),
            Err(TryRecvError::Empty) | Err(TryRecvError::Disconnected) => None,
        }
    }

    /// Drain all pending events into a Vec.
    pub fn drain(&self) -> Vec<AppEvent> {
        let mut events = Vec::new();
        while let Some(event) = self.try_recv() {
            events.push(event);
        }
        events
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new()
    }
}

/// A cloneable, thread-safe event publisher.
#[derive(Clone)]
pub struct EventPublisher {
    sender: Sender<AppEvent>,
}

impl EventPublisher {
    /// Create a publisher from an existing sender.
    pub fn from_sender(sender: Sender<AppEvent>) -> Self {
        Self { sender }
    }

    /// Publish an event to the bus.
    ///
    /// Non-blocking. A dropped receiver means the app is shutting down,
    /// so send errors are ignored.
    pub fn publish(&self, event: AppEvent) {
        let _ = self.sender.send(event);
    }
}

/// Result of discarding events that went stale during a modal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StaleEvents {
    /// Events thrown away.
    pub discarded: usize,
    /// At least one hotkey reinstall was queued; it is honoured once.
    pub reinstall: bool,
}

/// Pull every event from `next` until it runs dry, keeping only whether a
/// hotkey reinstall was requested.
pub fn discard_stale(mut next: impl FnMut() -> Option<AppEvent>) -> StaleEvents {
    let mut stale = StaleEvents::default();
    while let Some(event) = next() {
        if event.requires_hotkey_reinstall() {
            stale.reinstall = true;
        } else {
            stale.discarded += 1;
        }
    }
    stale
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_create_bus() {
        let bus = EventBus::new();
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publish_and_receive_in_order() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::KeyPressed("a".into()));
        publisher.publish(AppEvent::OpenSettings);
        publisher.publish(AppEvent::KeyPressed("b".into()));

        let events = bus.drain();
        assert_eq!(
            events,
            vec![
                AppEvent::KeyPressed("a".into()),
                AppEvent::OpenSettings,
                AppEvent::KeyPressed("b".into()),
            ]
        );
    }

    #[test]
    fn test_drain_empties_queue() {
        let bus = EventBus::new();
        let publisher = bus.publisher();

        publisher.publish(AppEvent::ToggleCapture);
        publisher.publish(AppEvent::OpenSettings);

        assert_eq!(bus.drain().len(), 2);
        assert!(bus.drain().is_empty());
    }

    #[test]
    fn test_publishers_from_other_threads() {
        let bus = EventBus::new();
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let publisher = bus.publisher();
                std::thread::spawn(move || {
                    publisher.publish(AppEvent::KeyPressed(format!("{}", i)));
                })
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }

        assert_eq!(bus.drain().len(), 4);
    }

    #[test]
    fn test_try_recv_returns_none_when_empty() {
        let bus = EventBus::default();
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn test_publish_after_bus_dropped_is_silent() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        drop(bus);
        publisher.publish(AppEvent::RequestQuit);
    }

    #[test]
    fn test_discard_stale_drops_keys_and_modals() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        publisher.publish(AppEvent::KeyPressed("x".into()));
        publisher.publish(AppEvent::OpenSettings);
        publisher.publish(AppEvent::ToggleCapture);

        let stale = discard_stale(|| bus.try_recv());
        assert_eq!(
            stale,
            StaleEvents {
                discarded: 3,
                reinstall: false
            }
        );
        assert!(bus.try_recv().is_none());
    }

    #[test]
    fn test_discard_stale_collapses_reinstalls() {
        let bus = EventBus::new();
        let publisher = bus.publisher();
        publisher.publish(AppEvent::SettingsClosed);
        publisher.publish(AppEvent::KeyPressed("y".into()));
        publisher.publish(AppEvent::ReinstallHotkeys);
        publisher.publish(AppEvent::SettingsClosed);

        let stale = discard_stale(|| bus.try_recv());
        assert!(stale.reinstall);
        assert_eq!(stale.discarded, 1);
    }

    #[test]
    fn test_discard_stale_on_empty_queue() {
        let bus = EventBus::new();
        assert_eq!(discard_stale(|| bus.try_recv()), StaleEvents::default());
    }
}
