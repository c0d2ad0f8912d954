//! Configuration constants and default values.
//!
//! This module contains all application constants including display defaults,
//! NSUserDefaults keys, and validation limits.

// === Display Defaults ===

/// Default number of chips shown at once.
pub const DEFAULT_MAX_VISIBLE_KEYS: i32 = 5;

/// Default time a chip stays on screen, in seconds.
pub const DEFAULT_KEY_DISPLAY_DURATION: f64 = 2.0;

/// Default chip font size in points.
pub const DEFAULT_FONT_SIZE: f64 = 16.0;

/// Default overlay opacity [0.0, 1.0].
pub const DEFAULT_OPACITY: f64 = 0.8;

/// Default gap between chips in points.
pub const DEFAULT_SPACING: f64 = 4.0;

/// Default overlay position (centre, screen coordinates).
pub const DEFAULT_POSITION: (f64, f64) = (100.0, 100.0);

/// Default chip background - black at 50%.
pub const DEFAULT_KEY_BACKGROUND_HEX: &str = "#80000000";

/// Default chip text colour - white.
pub const DEFAULT_KEY_TEXT_HEX: &str = "#FFFFFFFF";

// === NSUserDefaults Keys ===

pub const PREF_MAX_VISIBLE_KEYS: &str = "maxVisibleKeys";
pub const PREF_KEY_DISPLAY_DURATION: &str = "keyDisplayDuration";
pub const PREF_FONT_SIZE: &str = "fontSize";
pub const PREF_OPACITY: &str = "opacity";
pub const PREF_SHOW_BACKGROUND: &str = "showBackground";
pub const PREF_ORIENTATION: &str = "orientation";
pub const PREF_SPACING: &str = "spacing";
pub const PREF_CASE_STYLE: &str = "caseStyle";
pub const PREF_POSITION_X: &str = "positionX";
pub const PREF_POSITION_Y: &str = "positionY";
pub const PREF_KEY_BACKGROUND_HEX: &str = "keyBackgroundColorHex";
pub const PREF_KEY_TEXT_HEX: &str = "keyTextColorHex";

/// Key for language preference (0 = EN, 1 = ES).
pub const PREF_LANG: &str = "lang";

// === Validation Limits ===

pub const MIN_VISIBLE_KEYS: i32 = 1;

/// Upper bound for visible chips; also the feed's capacity.
pub const MAX_VISIBLE_KEYS_LIMIT: i32 = 10;

pub const MIN_DURATION: f64 = 0.5;
pub const MAX_DURATION: f64 = 5.0;
pub const DURATION_STEP: f64 = 0.5;

pub const MIN_FONT_SIZE: f64 = 12.0;
pub const MAX_FONT_SIZE: f64 = 32.0;
pub const FONT_SIZE_STEP: f64 = 1.0;

pub const MIN_OPACITY: f64 = 0.2;
pub const MAX_OPACITY: f64 = 1.0;

pub const MIN_SPACING: f64 = 0.0;
pub const MAX_SPACING: f64 = 20.0;

// === Chip geometry ===

/// Corner radius of a single chip.
pub const CHIP_CORNER_RADIUS: f64 = 6.0;

/// Corner radius of the container background.
pub const CONTAINER_CORNER_RADIUS: f64 = 12.0;

/// Horizontal padding between chip text and chip edge.
pub const CHIP_PADDING_H: f64 = 6.0;

/// Vertical padding between chip text and chip edge.
pub const CHIP_PADDING_V: f64 = 4.0;

/// Padding between the container edge and the chips.
pub const CONTAINER_PADDING: f64 = 16.0;

/// Alpha applied to the text colour for the chip outline.
pub const CHIP_STROKE_ALPHA: f64 = 0.2;

/// Number of sample chips shown while the settings panel is open.
pub const PREVIEW_KEYS: usize = 3;

// === Positioning ===

/// Margin kept between the overlay and the edge of the visible frame.
pub const SCREEN_PADDING: f64 = 20.0;

/// Distance moved by one nudge button press.
pub const NUDGE_STEP: f64 = 20.0;

// === Languages ===

/// Language code for English.
pub const LANG_EN: i32 = 0;

/// Language code for Spanish.
pub const LANG_ES: i32 = 1;
