//! Storage for macOS using NSUserDefaults.
//!
//! Persists display settings to the macOS preferences system.

pub mod preferences;

pub use preferences::*;
