//! Display settings (pure Rust, no FFI).
//!
//! This module defines the flat settings record that is persisted to
//! NSUserDefaults, together with its enums and colour type.

use std::time::Duration;

use super::constants::*;
use crate::layout::Point;
use crate::{clamp, color_to_hex, parse_hex_color, snap, tr_key};

/// Stacking direction of the chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Orientation {
    #[default]
    Vertical,
    Horizontal,
}

impl Orientation {
    pub const ALL: [Orientation; 2] = [Orientation::Vertical, Orientation::Horizontal];

    /// Value written to NSUserDefaults.
    pub fn as_pref(self) -> &'static str {
        match self {
            Orientation::Vertical => "vertical",
            Orientation::Horizontal => "horizontal",
        }
    }

    /// Parse a stored value; case-insensitive.
    pub fn from_pref(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "vertical" => Some(Orientation::Vertical),
            "horizontal" => Some(Orientation::Horizontal),
            _ => None,
        }
    }

    pub fn label(self, es: bool) -> String {
        match self {
            Orientation::Vertical => tr_key("Vertical", es).into_owned(),
            Orientation::Horizontal => tr_key("Horizontal", es).into_owned(),
        }
    }

    pub fn index(self) -> isize {
        match self {
            Orientation::Vertical => 0,
            Orientation::Horizontal => 1,
        }
    }

    pub fn from_index(i: isize) -> Self {
        if i == 1 {
            Orientation::Horizontal
        } else {
            Orientation::Vertical
        }
    }
}

/// How letter keys are cased on the chips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaseStyle {
    /// Keep the case the key was typed with.
    #[default]
    Auto,
    Uppercase,
    Lowercase,
}

impl CaseStyle {
    pub const ALL: [CaseStyle; 3] = [CaseStyle::Auto, CaseStyle::Uppercase, CaseStyle::Lowercase];

    pub fn as_pref(self) -> &'static str {
        match self {
            CaseStyle::Auto => "auto",
            CaseStyle::Uppercase => "uppercase",
            CaseStyle::Lowercase => "lowercase",
        }
    }

    /// Parse a stored value. The Spanish labels written by earlier
    /// releases are accepted too.
    pub fn from_pref(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "auto" | "detectar" => Some(CaseStyle::Auto),
            "uppercase" | "mayúsculas" => Some(CaseStyle::Uppercase),
            "lowercase" | "minúsculas" => Some(CaseStyle::Lowercase),
            _ => None,
        }
    }

    pub fn label(self, es: bool) -> String {
        let key = match self {
            CaseStyle::Auto => "Auto",
            CaseStyle::Uppercase => "Uppercase",
            CaseStyle::Lowercase => "Lowercase",
        };
        tr_key(key, es).into_owned()
    }

    pub fn index(self) -> isize {
        match self {
            CaseStyle::Auto => 0,
            CaseStyle::Uppercase => 1,
            CaseStyle::Lowercase => 2,
        }
    }

    pub fn from_index(i: isize) -> Self {
        match i {
            1 => CaseStyle::Uppercase,
            2 => CaseStyle::Lowercase,
            _ => CaseStyle::Auto,
        }
    }
}

/// RGBA colour with components in [0.0, 1.0].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rgba {
    pub r: f64,
    pub g: f64,
    pub b: f64,
    pub a: f64,
}

impl Rgba {
    pub const fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_hex(s: &str) -> Option<Self> {
        parse_hex_color(s).map(|(r, g, b, a)| Self::new(r, g, b, a))
    }

    pub fn to_hex(&self) -> String {
        color_to_hex(self.r, self.g, self.b, self.a)
    }

    /// Same colour with alpha scaled by `factor`.
    pub fn faded(&self, factor: f64) -> Self {
        Self::new(self.r, self.g, self.b, self.a * clamp(factor, 0.0, 1.0))
    }

    fn clamped(&self) -> Self {
        let c = |v: f64| if v.is_finite() { clamp(v, 0.0, 1.0) } else { 0.0 };
        Self::new(c(self.r), c(self.g), c(self.b), c(self.a))
    }
}

/// Complete display settings, serializable to/from NSUserDefaults.
#[derive(Debug, Clone, PartialEq)]
pub struct DisplaySettings {
    /// Number of chips shown at once.
    pub max_visible_keys: i32,
    /// Seconds each chip stays on screen.
    pub key_display_duration: f64,
    /// Chip font size in points.
    pub font_size: f64,
    /// Whole-overlay opacity [0.2, 1.0].
    pub opacity: f64,
    /// Draw the rounded container behind the chips.
    pub show_background: bool,
    pub orientation: Orientation,
    /// Gap between chips in points.
    pub spacing: f64,
    pub case_style: CaseStyle,
    /// Overlay centre in screen coordinates.
    pub position: Point,
    pub key_background: Rgba,
    pub key_text: Rgba,
    /// Language: 0 = EN, 1 = ES.
    pub lang: i32,
}

impl Default for DisplaySettings {
    fn default() -> Self {
        Self {
            max_visible_keys: DEFAULT_MAX_VISIBLE_KEYS,
            key_display_duration: DEFAULT_KEY_DISPLAY_DURATION,
            font_size: DEFAULT_FONT_SIZE,
            opacity: DEFAULT_OPACITY,
            show_background: true,
            orientation: Orientation::default(),
            spacing: DEFAULT_SPACING,
            case_style: CaseStyle::default(),
            position: Point::new(DEFAULT_POSITION.0, DEFAULT_POSITION.1),
            key_background: default_key_background(),
            key_text: default_key_text(),
            lang: LANG_EN,
        }
    }
}

pub fn default_key_background() -> Rgba {
    Rgba::new(0.0, 0.0, 0.0, 128.0 / 255.0)
}

pub fn default_key_text() -> Rgba {
    Rgba::new(1.0, 1.0, 1.0, 1.0)
}

fn finite_or(v: f64, default: f64) -> f64 {
    if v.is_finite() {
        v
    } else {
        default
    }
}

impl DisplaySettings {
    /// Validates and clamps all values to valid ranges.
    pub fn validate(&mut self) {
        self.max_visible_keys = self
            .max_visible_keys
            .clamp(MIN_VISIBLE_KEYS, MAX_VISIBLE_KEYS_LIMIT);

        let duration = finite_or(self.key_display_duration, DEFAULT_KEY_DISPLAY_DURATION);
        self.key_display_duration = clamp(snap(duration, DURATION_STEP), MIN_DURATION, MAX_DURATION);

        let font = finite_or(self.font_size, DEFAULT_FONT_SIZE);
        self.font_size = clamp(snap(font, FONT_SIZE_STEP), MIN_FONT_SIZE, MAX_FONT_SIZE);

        self.opacity = clamp(
            finite_or(self.opacity, DEFAULT_OPACITY),
            MIN_OPACITY,
            MAX_OPACITY,
        );
        self.spacing = clamp(
            finite_or(self.spacing, DEFAULT_SPACING),
            MIN_SPACING,
            MAX_SPACING,
        );

        self.position = Point::new(
            finite_or(self.position.x, DEFAULT_POSITION.0),
            finite_or(self.position.y, DEFAULT_POSITION.1),
        );

        self.key_background = self.key_background.clamped();
        self.key_text = self.key_text.clamped();

        if self.lang != LANG_ES {
            self.lang = LANG_EN;
        }
    }

    /// How long a newly captured chip stays visible.
    pub fn display_duration(&self) -> Duration {
        Duration::from_secs_f64(clamp(
            finite_or(self.key_display_duration, DEFAULT_KEY_DISPLAY_DURATION),
            MIN_DURATION,
            MAX_DURATION,
        ))
    }

    /// Number of chips to draw, as a slice length.
    pub fn visible_count(&self) -> usize {
        self.max_visible_keys
            .clamp(MIN_VISIBLE_KEYS, MAX_VISIBLE_KEYS_LIMIT) as usize
    }

    /// Outline colour of a chip: the text colour at low alpha.
    pub fn chip_stroke(&self) -> Rgba {
        self.key_text.faded(CHIP_STROKE_ALPHA)
    }

    /// Value shown next to the duration slider, e.g. "2.0s".
    pub fn duration_text(&self) -> String {
        format!("{:.1}s", self.key_display_duration)
    }

    pub fn font_size_text(&self) -> String {
        format!("{:.0}", self.font_size)
    }

    /// Opacity as a whole percentage, truncated: 0.999 shows "99%".
    pub fn opacity_text(&self) -> String {
        format!("{}%", (self.opacity * 100.0) as i64)
    }

    /// Spacing is stored unrounded; the label drops the fraction.
    pub fn spacing_text(&self) -> String {
        format!("{}", self.spacing as i64)
    }

    /// Returns true if current language is Spanish.
    pub fn is_spanish(&self) -> bool {
        self.lang == LANG_ES
    }
}

/// Sample labels shown in the overlay while the settings panel is open.
pub fn preview_labels(max_visible: usize, es: bool) -> Vec<String> {
    let word = tr_key("Key", es);
    (1..=max_visible.min(PREVIEW_KEYS))
        .map(|i| format!("{} {}", word, i))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_orientation_pref_round_trip() {
        for o in Orientation::ALL {
            assert_eq!(Orientation::from_pref(o.as_pref()), Some(o));
            assert_eq!(Orientation::from_index(o.index()), o);
        }
        assert_eq!(
            Orientation::from_pref("Horizontal"),
            Some(Orientation::Horizontal)
        );
        assert_eq!(Orientation::from_pref("diagonal"), None);
    }

    #[test]
    fn test_case_style_accepts_legacy_spanish_values() {
        assert_eq!(CaseStyle::from_pref("Detectar"), Some(CaseStyle::Auto));
        assert_eq!(
            CaseStyle::from_pref("Mayúsculas"),
            Some(CaseStyle::Uppercase)
        );
        assert_eq!(
            CaseStyle::from_pref("Minúsculas"),
            Some(CaseStyle::Lowercase)
        );
        for c in CaseStyle::ALL {
            assert_eq!(CaseStyle::from_index(c.index()), c);
        }
    }

    #[test]
    fn test_default_background_hex() {
        assert_eq!(default_key_background().to_hex(), DEFAULT_KEY_BACKGROUND_HEX);
        assert_eq!(default_key_text().to_hex(), DEFAULT_KEY_TEXT_HEX);
    }

    #[test]
    fn test_non_finite_values_fall_back_to_defaults() {
        let mut s = DisplaySettings {
            key_display_duration: f64::NAN,
            opacity: f64::INFINITY,
            ..Default::default()
        };
        s.validate();
        assert_eq!(s.key_display_duration, DEFAULT_KEY_DISPLAY_DURATION);
        assert_eq!(s.opacity, DEFAULT_OPACITY);
    }

    #[test]
    fn test_preview_labels_capped_at_three() {
        assert_eq!(preview_labels(10, false), vec!["Key 1", "Key 2", "Key 3"]);
        assert_eq!(preview_labels(2, true), vec!["Tecla 1", "Tecla 2"]);
    }
}
