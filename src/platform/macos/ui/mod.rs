//! UI components: the overlay panel, the settings panel and the status bar item.

pub mod overlay;
pub mod settings;
pub mod status_bar;

pub use overlay::{create_overlay_window, register_and_create_view};
pub use settings::{close_settings_window, open_settings_window};
pub use status_bar::{install_status_bar, update_status_bar};
