//! Global access to the application event bus.
//!
//! The bus is initialized once at startup via `init_event_bus()`; after that
//! any module (including Objective-C callbacks) can publish with `publish()`.
//!
//! - `Sender` is stored in `OnceLock` - it's `Send + Sync`, fine for a static
//! - `Receiver` is stored in `Mutex` - only the main thread drains it

use std::sync::mpsc::{self, Receiver, Sender};
use std::sync::{Mutex, OnceLock};

use super::bus::EventPublisher;
use super::types::AppEvent;
use crate::error::{AppError, Result};

static SENDER: OnceLock<Sender<AppEvent>> = OnceLock::new();

static RECEIVER: OnceLock<Mutex<Receiver<AppEvent>>> = OnceLock::new();

/// Initialize the global event bus.
///
/// Returns `AppError::EventBusInitialized` on a second call.
pub fn init_event_bus() -> Result<()> {
    let (sender, receiver) = mpsc::channel();

    SENDER
        .set(sender)
        .map_err(|_| AppError::EventBusInitialized)?;
    RECEIVER
        .set(Mutex::new(receiver))
        .map_err(|_| AppError::EventBusInitialized)?;
    Ok(())
}

/// Get a publisher handle for the global event bus.
///
/// Returns `None` before `init_event_bus()` has run.
pub fn publisher() -> Option<EventPublisher> {
    SENDER
        .get()
        .map(|sender| EventPublisher::from_sender(sender.clone()))
}

/// Publish an event to the global event bus.
///
/// Events published before initialization are dropped with a warning; this is
/// called from Objective-C callbacks, which must not panic.
pub fn publish(event: AppEvent) {
    match SENDER.get() {
        Some(sender) => {
            let _ = sender.send(event);
        }
        None => tracing::warn!(?event, "event published before bus initialization"),
    }
}

/// Take the next pending event, if any.
pub fn take_event() -> Option<AppEvent> {
    let receiver = RECEIVER.get()?;
    let receiver = receiver.lock().ok()?;
    receiver.try_recv().ok()
}

/// Drain all pending events from the global event bus.
pub fn drain_events() -> Vec<AppEvent> {
    let mut events = Vec::new();
    while let Some(event) = take_event() {
        events.push(event);
    }
    events
}

#[cfg(test)]
mod tests {
    // OnceLock can only be set once per process, so the whole global
    // lifecycle lives in a single test.
    use super::*;

    #[test]
    fn test_global_bus_lifecycle() {
        assert!(take_event().is_none());

        init_event_bus().unwrap();
        assert_eq!(init_event_bus(), Err(AppError::EventBusInitialized));

        publish(AppEvent::KeyPressed("⎋".into()));
        publisher().unwrap().publish(AppEvent::ShowAbout);

        assert_eq!(take_event(), Some(AppEvent::KeyPressed("⎋".into())));
        assert_eq!(drain_events(), vec![AppEvent::ShowAbout]);
        assert!(drain_events().is_empty());
    }
}
