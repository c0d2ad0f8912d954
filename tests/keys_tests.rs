//! Tests for key normalization (raw key events to chip labels).

use keyshow::keys::*;
use keyshow::model::CaseStyle;

fn label(e: RawKeyEvent) -> Option<String> {
    normalize(&e)
}

// === Plain Keys ===

#[test]
fn letter_without_modifiers_is_lowercase() {
    assert_eq!(label(RawKeyEvent::key_down(0, "a", 0)).as_deref(), Some("a"));
}

#[test]
fn caps_lock_uppercases_without_prefix() {
    assert_eq!(
        label(RawKeyEvent::key_down(0, "a", FLAG_CAPS_LOCK)).as_deref(),
        Some("A")
    );
}

#[test]
fn shift_and_caps_lock_cancel_out() {
    assert_eq!(
        label(RawKeyEvent::key_down(0, "a", FLAG_SHIFT | FLAG_CAPS_LOCK)).as_deref(),
        Some("⇧+a")
    );
}

#[test]
fn digits_and_punctuation_pass_through() {
    assert_eq!(label(RawKeyEvent::key_down(18, "1", 0)).as_deref(), Some("1"));
    assert_eq!(label(RawKeyEvent::key_down(44, "/", 0)).as_deref(), Some("/"));
}

#[test]
fn unknown_key_without_characters_is_ignored() {
    assert_eq!(label(RawKeyEvent::key_down(200, "", 0)), None);
}

// === Special Keys ===

#[test]
fn special_keys_use_glyphs() {
    assert_eq!(label(RawKeyEvent::key_down(KC_RETURN, "\r", 0)).as_deref(), Some("↵"));
    assert_eq!(label(RawKeyEvent::key_down(KC_SPACE, " ", 0)).as_deref(), Some("␣"));
    assert_eq!(label(RawKeyEvent::key_down(KC_DELETE, "\u{7f}", 0)).as_deref(), Some("⌫"));
    assert_eq!(label(RawKeyEvent::key_down(KC_ESCAPE, "\u{1b}", 0)).as_deref(), Some("⎋"));
    assert_eq!(label(RawKeyEvent::key_down(KC_TAB, "\t", 0)).as_deref(), Some("⇥"));
}

#[test]
fn arrow_keys_use_arrows() {
    assert_eq!(special_key_symbol(KC_LEFT), Some("←"));
    assert_eq!(special_key_symbol(KC_RIGHT), Some("→"));
    assert_eq!(special_key_symbol(KC_UP), Some("↑"));
    assert_eq!(special_key_symbol(KC_DOWN), Some("↓"));
}

// === Combinations ===

#[test]
fn command_combination_has_prefix() {
    assert_eq!(
        label(RawKeyEvent::key_down(8, "c", FLAG_COMMAND)).as_deref(),
        Some("⌘+c")
    );
}

#[test]
fn shift_combination_uppercases_letter() {
    assert_eq!(
        label(RawKeyEvent::key_down(0, "a", FLAG_SHIFT)).as_deref(),
        Some("⇧+A")
    );
}

#[test]
fn combination_with_special_key() {
    assert_eq!(
        label(RawKeyEvent::key_down(KC_SPACE, " ", FLAG_COMMAND)).as_deref(),
        Some("⌘+␣")
    );
}

#[test]
fn prefix_order_is_command_option_control_shift() {
    let flags = FLAG_SHIFT | FLAG_CONTROL | FLAG_OPTION | FLAG_COMMAND;
    assert_eq!(
        label(RawKeyEvent::key_down(1, "s", flags)).as_deref(),
        Some("⌘+⌥+⌃+⇧+S")
    );
}

// === Modifier Presses ===

#[test]
fn lone_modifier_press_shows_glyph() {
    assert_eq!(label(RawKeyEvent::flags_changed(56, FLAG_SHIFT)).as_deref(), Some("⇧"));
    assert_eq!(label(RawKeyEvent::flags_changed(55, FLAG_COMMAND)).as_deref(), Some("⌘"));
    assert_eq!(label(RawKeyEvent::flags_changed(58, FLAG_OPTION)).as_deref(), Some("⌥"));
    assert_eq!(label(RawKeyEvent::flags_changed(59, FLAG_CONTROL)).as_deref(), Some("⌃"));
}

#[test]
fn modifier_release_is_ignored() {
    assert_eq!(label(RawKeyEvent::flags_changed(56, 0)), None);
}

#[test]
fn shift_wins_over_other_held_modifiers() {
    assert_eq!(
        label(RawKeyEvent::flags_changed(56, FLAG_SHIFT | FLAG_CONTROL)).as_deref(),
        Some("⇧")
    );
    assert_eq!(
        label(RawKeyEvent::flags_changed(59, FLAG_CONTROL | FLAG_COMMAND)).as_deref(),
        Some("⌃")
    );
}

// === Case Style ===

#[test]
fn case_style_applies_to_letters() {
    assert_eq!(apply_case_style("a", CaseStyle::Uppercase), "A");
    assert_eq!(apply_case_style("A", CaseStyle::Lowercase), "a");
    assert_eq!(apply_case_style("a", CaseStyle::Auto), "a");
}

#[test]
fn case_style_leaves_glyphs_and_combinations() {
    assert_eq!(apply_case_style("⌘+c", CaseStyle::Uppercase), "⌘+c");
    assert_eq!(apply_case_style("↵", CaseStyle::Lowercase), "↵");
}

// === Chip Width ===

#[test]
fn chip_min_width_by_label_kind() {
    assert_eq!(chip_min_width("a"), 30.0);
    assert_eq!(chip_min_width("F5"), 45.0);
    assert_eq!(chip_min_width("⌘+c"), 60.0);
    assert_eq!(chip_min_width("⇧"), 60.0);
}

#[test]
fn is_combination_detects_prefix_and_glyphs() {
    assert!(is_combination("⌥+x"));
    assert!(is_combination("⌘"));
    assert!(!is_combination("x"));
    assert!(!is_combination("↵"));
}

// === Settings Shortcut ===

#[test]
fn command_comma_is_settings_shortcut() {
    assert!(is_settings_shortcut(&RawKeyEvent::key_down(KC_COMMA, ",", FLAG_COMMAND)));
    assert!(!is_settings_shortcut(&RawKeyEvent::key_down(KC_COMMA, ",", 0)));
    assert!(!is_settings_shortcut(&RawKeyEvent::flags_changed(55, FLAG_COMMAND)));
}
