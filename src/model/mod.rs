//! Application domain model.
//!
//! This module contains pure business logic (no FFI dependencies):
//! display settings, the transient key feed and configuration constants.
//!
//! Persistence is in `platform::macos::storage`.

pub mod constants;
pub mod feed;
pub mod settings;

pub use constants::*;
pub use feed::{KeyFeed, KeyPress};
pub use settings::{preview_labels, CaseStyle, DisplaySettings, Orientation, Rgba};
