//! Persistence of settings to NSUserDefaults.
//!
//! This module provides functions to load and save display settings
//! to macOS NSUserDefaults.

use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, string_from_nsstring, Bool,
};

use crate::layout::Point;
use crate::model::constants::*;
use crate::model::settings::{default_key_background, default_key_text};
use crate::model::{CaseStyle, DisplaySettings, Orientation, Rgba};

unsafe fn user_defaults() -> id {
    msg_send![get_class("NSUserDefaults"), standardUserDefaults]
}

unsafe fn has_key(ud: id, k: id) -> bool {
    let obj: id = msg_send![ud, objectForKey: k];
    obj != nil
}

/// True when a value is stored under `key`.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_contains(key: &str) -> bool {
    has_key(user_defaults(), nsstring_id(key))
}

/// Reads a double from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_double(key: &str, default: f64) -> f64 {
    let ud = user_defaults();
    let k = nsstring_id(key);
    if has_key(ud, k) {
        msg_send![ud, doubleForKey: k]
    } else {
        default
    }
}

/// Saves a double to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_double(key: &str, val: f64) {
    let ud = user_defaults();
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setDouble: val, forKey: k];
}

/// Reads an integer from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_int(key: &str, default: i32) -> i32 {
    let ud = user_defaults();
    let k = nsstring_id(key);
    if has_key(ud, k) {
        // NSInteger is i64 on 64-bit macOS
        let val: i64 = msg_send![ud, integerForKey: k];
        val.clamp(i32::MIN as i64, i32::MAX as i64) as i32
    } else {
        default
    }
}

/// Saves an integer to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_int(key: &str, val: i32) {
    let ud = user_defaults();
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setInteger: val as i64, forKey: k];
}

/// Reads a boolean from NSUserDefaults, returns default if not set.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_bool(key: &str, default: bool) -> bool {
    let ud = user_defaults();
    let k = nsstring_id(key);
    if has_key(ud, k) {
        let val: Bool = msg_send![ud, boolForKey: k];
        val.as_bool()
    } else {
        default
    }
}

/// Saves a boolean to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_bool(key: &str, val: bool) {
    let ud = user_defaults();
    let k = nsstring_id(key);
    let _: () = msg_send![ud, setBool: Bool::new(val), forKey: k];
}

/// Reads a string from NSUserDefaults. Returns `None` if unset or not a string.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_get_string(key: &str) -> Option<String> {
    let ud = user_defaults();
    let k = nsstring_id(key);
    let s: id = msg_send![ud, stringForKey: k];
    string_from_nsstring(s)
}

/// Saves a string to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prefs_set_string(key: &str, val: &str) {
    let ud = user_defaults();
    let k = nsstring_id(key);
    let v = nsstring_id(val);
    let _: () = msg_send![ud, setObject: v, forKey: k];
}

unsafe fn prefs_get_color(key: &str, default: Rgba) -> Rgba {
    match prefs_get_string(key) {
        Some(hex) => Rgba::from_hex(&hex).unwrap_or_else(|| {
            tracing::warn!(key, value = %hex, "ignoring malformed colour preference");
            default
        }),
        None => default,
    }
}

/// Loads complete settings from NSUserDefaults.
///
/// Missing keys take their default; unparseable enum and colour values too.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn load_settings() -> DisplaySettings {
    let orientation = prefs_get_string(PREF_ORIENTATION)
        .and_then(|s| Orientation::from_pref(&s))
        .unwrap_or_default();
    let case_style = prefs_get_string(PREF_CASE_STYLE)
        .and_then(|s| CaseStyle::from_pref(&s))
        .unwrap_or_default();

    let mut settings = DisplaySettings {
        max_visible_keys: prefs_get_int(PREF_MAX_VISIBLE_KEYS, DEFAULT_MAX_VISIBLE_KEYS),
        key_display_duration: prefs_get_double(
            PREF_KEY_DISPLAY_DURATION,
            DEFAULT_KEY_DISPLAY_DURATION,
        ),
        font_size: prefs_get_double(PREF_FONT_SIZE, DEFAULT_FONT_SIZE),
        opacity: prefs_get_double(PREF_OPACITY, DEFAULT_OPACITY),
        show_background: prefs_get_bool(PREF_SHOW_BACKGROUND, true),
        orientation,
        spacing: prefs_get_double(PREF_SPACING, DEFAULT_SPACING),
        case_style,
        position: Point::new(
            prefs_get_double(PREF_POSITION_X, DEFAULT_POSITION.0),
            prefs_get_double(PREF_POSITION_Y, DEFAULT_POSITION.1),
        ),
        key_background: prefs_get_color(PREF_KEY_BACKGROUND_HEX, default_key_background()),
        key_text: prefs_get_color(PREF_KEY_TEXT_HEX, default_key_text()),
        lang: prefs_get_int(PREF_LANG, LANG_EN),
    };
    settings.validate();
    settings
}

/// Saves complete settings to NSUserDefaults.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn save_settings(settings: &DisplaySettings) {
    prefs_set_int(PREF_MAX_VISIBLE_KEYS, settings.max_visible_keys);
    prefs_set_double(PREF_KEY_DISPLAY_DURATION, settings.key_display_duration);
    prefs_set_double(PREF_FONT_SIZE, settings.font_size);
    prefs_set_double(PREF_OPACITY, settings.opacity);
    prefs_set_bool(PREF_SHOW_BACKGROUND, settings.show_background);
    prefs_set_string(PREF_ORIENTATION, settings.orientation.as_pref());
    prefs_set_double(PREF_SPACING, settings.spacing);
    prefs_set_string(PREF_CASE_STYLE, settings.case_style.as_pref());
    save_position(settings.position);
    prefs_set_string(PREF_KEY_BACKGROUND_HEX, &settings.key_background.to_hex());
    prefs_set_string(PREF_KEY_TEXT_HEX, &settings.key_text.to_hex());
    prefs_set_int(PREF_LANG, settings.lang);
}

/// Saves only the overlay centre (used after a drag).
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn save_position(position: Point) {
    prefs_set_double(PREF_POSITION_X, position.x);
    prefs_set_double(PREF_POSITION_Y, position.y);
}
