//! Tests for the model layer (DisplaySettings).
//!
//! Note: We intentionally use `Default::default()` then field reassignment
//! to test individual field validation. This is clearer than struct update syntax.
#![allow(clippy::field_reassign_with_default)]

use std::time::Duration;

use keyshow::layout::Point;
use keyshow::model::constants::*;
use keyshow::model::{preview_labels, CaseStyle, DisplaySettings, Orientation, Rgba};

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

// === Default Values Tests ===

#[test]
fn settings_default_display_values() {
    let s = DisplaySettings::default();
    assert_eq!(s.max_visible_keys, 5);
    assert!(approx_eq(s.key_display_duration, 2.0));
    assert!(approx_eq(s.font_size, 16.0));
    assert!(approx_eq(s.opacity, 0.8));
    assert!(approx_eq(s.spacing, 4.0));
    assert!(s.show_background);
}

#[test]
fn settings_default_enums() {
    let s = DisplaySettings::default();
    assert_eq!(s.orientation, Orientation::Vertical);
    assert_eq!(s.case_style, CaseStyle::Auto);
}

#[test]
fn settings_default_colors() {
    let s = DisplaySettings::default();
    assert_eq!(s.key_background.to_hex(), "#80000000");
    assert_eq!(s.key_text.to_hex(), "#FFFFFFFF");
}

#[test]
fn settings_default_language_english() {
    let s = DisplaySettings::default();
    assert_eq!(s.lang, LANG_EN);
    assert!(!s.is_spanish());
}

#[test]
fn settings_default_is_already_valid() {
    let mut s = DisplaySettings::default();
    let before = s.clone();
    s.validate();
    assert_eq!(s, before);
}

// === Validation Tests ===

#[test]
fn validate_clamps_visible_keys() {
    let mut s = DisplaySettings::default();
    s.max_visible_keys = 0;
    s.validate();
    assert_eq!(s.max_visible_keys, MIN_VISIBLE_KEYS);

    s.max_visible_keys = 42;
    s.validate();
    assert_eq!(s.max_visible_keys, MAX_VISIBLE_KEYS_LIMIT);
}

#[test]
fn validate_snaps_and_clamps_duration() {
    let mut s = DisplaySettings::default();
    s.key_display_duration = 1.3;
    s.validate();
    assert!(approx_eq(s.key_display_duration, 1.5));

    s.key_display_duration = 0.1;
    s.validate();
    assert!(approx_eq(s.key_display_duration, MIN_DURATION));

    s.key_display_duration = 9.0;
    s.validate();
    assert!(approx_eq(s.key_display_duration, MAX_DURATION));
}

#[test]
fn validate_snaps_font_size_to_whole_points() {
    let mut s = DisplaySettings::default();
    s.font_size = 17.4;
    s.validate();
    assert!(approx_eq(s.font_size, 17.0));

    s.font_size = 4.0;
    s.validate();
    assert!(approx_eq(s.font_size, MIN_FONT_SIZE));

    s.font_size = 100.0;
    s.validate();
    assert!(approx_eq(s.font_size, MAX_FONT_SIZE));
}

#[test]
fn validate_clamps_opacity() {
    let mut s = DisplaySettings::default();
    s.opacity = 0.0;
    s.validate();
    assert!(approx_eq(s.opacity, MIN_OPACITY));

    s.opacity = 1.5;
    s.validate();
    assert!(approx_eq(s.opacity, MAX_OPACITY));
}

#[test]
fn validate_clamps_spacing() {
    let mut s = DisplaySettings::default();
    s.spacing = -3.0;
    s.validate();
    assert!(approx_eq(s.spacing, MIN_SPACING));

    s.spacing = 50.0;
    s.validate();
    assert!(approx_eq(s.spacing, MAX_SPACING));
}

#[test]
fn validate_clamps_color_components() {
    let mut s = DisplaySettings::default();
    s.key_text = Rgba::new(1.5, -0.2, f64::NAN, 2.0);
    s.validate();
    assert_eq!(s.key_text, Rgba::new(1.0, 0.0, 0.0, 1.0));
}

#[test]
fn validate_replaces_non_finite_position() {
    let mut s = DisplaySettings::default();
    s.position = Point::new(f64::NAN, 300.0);
    s.validate();
    assert!(approx_eq(s.position.x, DEFAULT_POSITION.0));
    assert!(approx_eq(s.position.y, 300.0));
}

#[test]
fn validate_unknown_language_falls_back_to_english() {
    let mut s = DisplaySettings::default();
    s.lang = 7;
    s.validate();
    assert_eq!(s.lang, LANG_EN);

    s.lang = LANG_ES;
    s.validate();
    assert!(s.is_spanish());
}

// === Derived Values Tests ===

#[test]
fn display_duration_matches_setting() {
    let mut s = DisplaySettings::default();
    s.key_display_duration = 3.5;
    assert_eq!(s.display_duration(), Duration::from_millis(3500));
}

#[test]
fn visible_count_is_clamped_even_without_validate() {
    let mut s = DisplaySettings::default();
    s.max_visible_keys = -4;
    assert_eq!(s.visible_count(), 1);
    s.max_visible_keys = 99;
    assert_eq!(s.visible_count(), 10);
}

#[test]
fn chip_stroke_is_faded_text_color() {
    let s = DisplaySettings::default();
    let stroke = s.chip_stroke();
    assert!(approx_eq(stroke.r, 1.0));
    assert!(approx_eq(stroke.a, CHIP_STROKE_ALPHA));
}

#[test]
fn value_labels_format_like_the_settings_panel() {
    let s = DisplaySettings::default();
    assert_eq!(s.duration_text(), "2.0s");
    assert_eq!(s.font_size_text(), "16");
    assert_eq!(s.opacity_text(), "80%");
    assert_eq!(s.spacing_text(), "4");
}

#[test]
fn value_labels_truncate_instead_of_rounding() {
    let mut s = DisplaySettings::default();
    s.opacity = 0.999;
    s.spacing = 4.7;
    assert_eq!(s.opacity_text(), "99%");
    assert_eq!(s.spacing_text(), "4");

    s.opacity = 0.29;
    s.spacing = 19.99;
    assert_eq!(s.opacity_text(), "28%");
    assert_eq!(s.spacing_text(), "19");
}

#[test]
fn validate_keeps_fractional_spacing() {
    let mut s = DisplaySettings::default();
    s.spacing = 7.25;
    s.validate();
    assert!(approx_eq(s.spacing, 7.25));
}

// === Preview Tests ===

#[test]
fn preview_labels_follow_visible_keys() {
    assert_eq!(preview_labels(1, false), vec!["Key 1"]);
    assert_eq!(preview_labels(5, false).len(), PREVIEW_KEYS);
    assert!(preview_labels(0, false).is_empty());
}

#[test]
fn preview_labels_are_localised() {
    assert_eq!(preview_labels(3, true), vec!["Tecla 1", "Tecla 2", "Tecla 3"]);
}

// === Enum Label Tests ===

#[test]
fn orientation_and_case_labels_are_localised() {
    assert_eq!(Orientation::Horizontal.label(false), "Horizontal");
    assert_eq!(CaseStyle::Uppercase.label(true), "Mayúsculas");
    assert_eq!(CaseStyle::Auto.label(false), "Auto");
}

#[test]
fn case_style_prefs_are_english_keywords() {
    assert_eq!(CaseStyle::Lowercase.as_pref(), "lowercase");
    assert_eq!(CaseStyle::from_pref(" UPPERCASE "), Some(CaseStyle::Uppercase));
    assert_eq!(CaseStyle::from_pref("shouty"), None);
}
