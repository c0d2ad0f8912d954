//! Event system for decoupled inter-module communication.
//!
//! Key monitors, Carbon hotkeys, menus and observers publish events; the
//! dispatcher drains them on the main thread from the overlay tick.
//!
//! ```text
//! ┌─────────────┐     ┌─────────────┐     ┌─────────────┐
//! │ Key monitors│     │   Hotkeys   │     │ Status menu │
//! │  (NSEvent)  │     │  (Carbon)   │     │             │
//! └──────┬──────┘     └──────┬──────┘     └──────┬──────┘
//!        │ publish()         │ publish()         │ publish()
//!        ▼                   ▼                   ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                     EventBus                        │
//! │                   (mpsc channel)                    │
//! └─────────────────────────┬───────────────────────────┘
//!                           │ take_event()
//!                           ▼
//! ┌─────────────────────────────────────────────────────┐
//! │                    Dispatcher                       │
//! │                (overlay tick timer)                 │
//! └─────────────────────────────────────────────────────┘
//! ```

pub mod bus;
pub mod global;
pub mod types;

// Re-export main types for convenient access
pub use bus::{discard_stale, EventBus, EventPublisher, StaleEvents};
pub use global::{drain_events, init_event_bus, publish, publisher, take_event};
pub use types::AppEvent;
