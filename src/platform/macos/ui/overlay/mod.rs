//! The overlay: floating panel, chip-drawing view and drawing helpers.

pub mod drawing;
pub mod view;
pub mod window;

pub use drawing::{draw_overlay, measure_chip};
pub use view::register_and_create_view;
pub use window::create_overlay_window;
