//! Runtime state and the helpers that keep the overlay in sync with it.

pub mod helpers;
pub mod state;

pub use helpers::*;
pub use state::*;
