//! macOS runtime state management.
//!
//! Contains the application state struct and thread-local storage.

use std::cell::RefCell;

use crate::model::{DisplaySettings, KeyFeed};
use crate::platform::macos::ffi::bridge::{id, nil};

/// macOS runtime state.
///
/// Holds the persisted settings together with transient state (the key
/// feed, the overlay window) that is never written to NSUserDefaults.
/// Only touched from the main thread.
pub struct RuntimeState {
    pub settings: DisplaySettings,
    pub feed: KeyFeed,

    /// False while capture is paused from the status menu or Ctrl+Shift+K.
    pub capture_enabled: bool,
    /// Settings panel is open; the overlay shows preview chips.
    pub settings_open: bool,
    /// Set while the overlay window is moved programmatically, so the
    /// window-did-move observer doesn't persist intermediate positions.
    pub repositioning: bool,
    /// Screen the settings panel's presets and nudges apply to.
    pub selected_screen: usize,

    pub window: id,
    pub view: id,
}

impl Default for RuntimeState {
    fn default() -> Self {
        Self {
            settings: DisplaySettings::default(),
            feed: KeyFeed::new(),
            capture_enabled: true,
            settings_open: false,
            repositioning: false,
            selected_screen: 0,
            window: nil,
            view: nil,
        }
    }
}

thread_local! {
    /// Global application state for the overlay.
    pub static STATE: RefCell<RuntimeState> = RefCell::new(RuntimeState::default());
}

/// Run `f` with shared access to the state.
///
/// Never send Objective-C messages that may call back into Rust from inside
/// `f`; copy what is needed out first.
pub fn with_state<R>(f: impl FnOnce(&RuntimeState) -> R) -> R {
    STATE.with(|s| f(&s.borrow()))
}

/// Run `f` with exclusive access to the state.
pub fn with_state_mut<R>(f: impl FnOnce(&mut RuntimeState) -> R) -> R {
    STATE.with(|s| f(&mut s.borrow_mut()))
}

/// Snapshot of the current settings.
pub fn current_settings() -> DisplaySettings {
    with_state(|s| s.settings.clone())
}

/// The overlay content view (action target for menus and controls).
pub fn host_view() -> id {
    with_state(|s| s.view)
}
