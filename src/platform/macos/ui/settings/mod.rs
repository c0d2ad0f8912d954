//! Settings panel.

pub mod window;

pub use window::*;
