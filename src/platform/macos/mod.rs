//! macOS-specific implementation using Cocoa/AppKit via objc2.
//!
//! This module contains all macOS-specific code:
//! - FFI bindings to Cocoa, Carbon and Accessibility
//! - UI components (floating overlay panel, settings, status bar item)
//! - Input handling (NSEvent key monitors, Carbon hotkeys, observers)
//! - Storage (NSUserDefaults persistence)

pub mod app;
pub mod ffi;
pub mod handlers;
pub mod input;
pub mod storage;
pub mod ui;

pub use app::*;
pub use ffi::bridge;
pub use handlers::*;
pub use storage::*;
pub use ui::*;
