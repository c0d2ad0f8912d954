//! Application events for inter-module communication.
//!
//! These events represent high-level application actions that can be
//! published by any module and handled by the event dispatcher.
//! This module is pure Rust with no FFI dependencies, making it fully testable.

/// Application-level events for decoupled communication between modules.
///
/// Events flow from producers (key monitors, hotkeys, UI, observers) through
/// the EventBus to the dispatcher, which executes the appropriate actions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    // === Input Events ===
    /// A key was captured and normalized into its display label
    KeyPressed(String),

    /// Open settings panel (Ctrl+, globally, ⌘, while focused)
    OpenSettings,

    /// Pause or resume key capture (Ctrl+Shift+K)
    ToggleCapture,

    /// Show About panel
    ShowAbout,

    /// Terminate the application
    RequestQuit,

    // === UI Lifecycle Events ===
    /// Settings panel was closed by user
    SettingsClosed,

    // === System Events ===
    /// Hotkeys need to be reinstalled (after sleep/wake, space change, etc.)
    ReinstallHotkeys,
}

impl AppEvent {
    /// Returns true if handling this event runs a modal session.
    pub fn is_modal(&self) -> bool {
        matches!(self, AppEvent::OpenSettings)
    }

    /// Returns true if this event should trigger hotkey reinstallation.
    ///
    /// After the settings panel closes Carbon hotkeys are reinstalled
    /// so they keep working once the modal session ends.
    pub fn requires_hotkey_reinstall(&self) -> bool {
        matches!(self, AppEvent::SettingsClosed | AppEvent::ReinstallHotkeys)
    }

    /// Returns a human-readable description of the event for debugging.
    pub fn description(&self) -> &'static str {
        match self {
            AppEvent::KeyPressed(_) => "Key captured",
            AppEvent::OpenSettings => "Open settings panel",
            AppEvent::ToggleCapture => "Toggle key capture",
            AppEvent::ShowAbout => "Show about panel",
            AppEvent::RequestQuit => "Quit application",
            AppEvent::SettingsClosed => "Settings panel closed",
            AppEvent::ReinstallHotkeys => "Reinstall hotkeys",
        }
    }
}
