//! Platform-specific implementations.
//!
//! Only macOS is supported. The submodule contains:
//! - FFI bindings
//! - UI components (overlay window, settings panel, status bar)
//! - Input handling (key monitors, hotkeys, observers)
//! - Storage (NSUserDefaults persistence)

#[cfg(target_os = "macos")]
pub mod macos;

#[cfg(target_os = "macos")]
pub use macos::*;
