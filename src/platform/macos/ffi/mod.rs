//! FFI bindings for macOS frameworks.
//!
//! `extern "C"` declarations for Carbon, ApplicationServices and
//! CoreFoundation, the objc2 bridge, and small Cocoa helpers.

pub mod accessibility;
pub mod bridge;
pub mod carbon;
pub mod cocoa_utils;
pub mod corefoundation;

pub use accessibility::*;
pub use carbon::*;
pub use cocoa_utils::*;
