//! Event handlers.
//!
//! The dispatcher drains the event bus on the main thread.

pub mod dispatcher;

pub use dispatcher::{dispatch_events, ModalCallback, ReinstallHotkeysCallback};
