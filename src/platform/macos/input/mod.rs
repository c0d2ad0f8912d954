//! Input handling module.
//!
//! This module contains input handlers for:
//! - keyboard_monitors.rs: NSEvent key monitors feeding the key feed
//! - hotkeys.rs: Carbon hotkey registration and handling
//! - observers.rs: System observers (termination, wake, space change, window move)

pub mod hotkeys;
pub mod keyboard_monitors;
pub mod observers;

pub use hotkeys::{hotkey_event_handler, install_hotkeys, reinstall_hotkeys, uninstall_hotkeys};
pub use keyboard_monitors::{install_key_monitors, remove_key_monitors};
pub use observers::{
    install_termination_observer, install_wakeup_space_observers, install_window_move_observer,
};
