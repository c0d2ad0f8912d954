//! Keyboard event normalization.
//!
//! Turns raw NSEvent data (key code, modifier flags, characters) into the
//! short labels drawn on the chips. Pure Rust so it can be tested anywhere;
//! the macOS monitors only extract a `RawKeyEvent` and call `normalize`.

use crate::model::CaseStyle;

// NSEventModifierFlags bits
pub const FLAG_CAPS_LOCK: u64 = 1 << 16;
pub const FLAG_SHIFT: u64 = 1 << 17;
pub const FLAG_CONTROL: u64 = 1 << 18;
pub const FLAG_OPTION: u64 = 1 << 19;
pub const FLAG_COMMAND: u64 = 1 << 20;

pub const SYM_COMMAND: &str = "⌘";
pub const SYM_OPTION: &str = "⌥";
pub const SYM_CONTROL: &str = "⌃";
pub const SYM_SHIFT: &str = "⇧";

/// Modifier glyphs, used to spot combination labels.
const MODIFIER_GLYPHS: [char; 4] = ['⌘', '⌥', '⌃', '⇧'];

// ANSI key codes with a dedicated glyph
pub const KC_RETURN: u16 = 36;
pub const KC_TAB: u16 = 48;
pub const KC_SPACE: u16 = 49;
pub const KC_DELETE: u16 = 51;
pub const KC_ESCAPE: u16 = 53;
pub const KC_KEYPAD_ENTER: u16 = 76;
pub const KC_HOME: u16 = 115;
pub const KC_PAGE_UP: u16 = 116;
pub const KC_FORWARD_DELETE: u16 = 117;
pub const KC_END: u16 = 119;
pub const KC_PAGE_DOWN: u16 = 121;
pub const KC_LEFT: u16 = 123;
pub const KC_RIGHT: u16 = 124;
pub const KC_DOWN: u16 = 125;
pub const KC_UP: u16 = 126;
pub const KC_COMMA: u16 = 43;

/// Decoded modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Modifiers {
    pub command: bool,
    pub option: bool,
    pub control: bool,
    pub shift: bool,
    pub caps_lock: bool,
}

impl Modifiers {
    pub fn from_raw(flags: u64) -> Self {
        Self {
            command: flags & FLAG_COMMAND != 0,
            option: flags & FLAG_OPTION != 0,
            control: flags & FLAG_CONTROL != 0,
            shift: flags & FLAG_SHIFT != 0,
            caps_lock: flags & FLAG_CAPS_LOCK != 0,
        }
    }

    /// Combination prefix, e.g. "⌘+⇧+".
    fn prefix(&self) -> String {
        let mut s = String::new();
        if self.command {
            s.push_str("⌘+");
        }
        if self.option {
            s.push_str("⌥+");
        }
        if self.control {
            s.push_str("⌃+");
        }
        if self.shift {
            s.push_str("⇧+");
        }
        s
    }

    /// Glyph for a lone modifier press; shift wins over control, control
    /// over option, option over command.
    fn dominant_glyph(&self) -> Option<&'static str> {
        if self.shift {
            Some(SYM_SHIFT)
        } else if self.control {
            Some(SYM_CONTROL)
        } else if self.option {
            Some(SYM_OPTION)
        } else if self.command {
            Some(SYM_COMMAND)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyEventKind {
    KeyDown,
    FlagsChanged,
}

/// The fields of an NSEvent the normalizer needs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawKeyEvent {
    pub kind: KeyEventKind,
    pub key_code: u16,
    /// `charactersIgnoringModifiers`, absent for flag changes.
    pub characters: Option<String>,
    pub modifiers: Modifiers,
}

impl RawKeyEvent {
    pub fn key_down(key_code: u16, characters: &str, flags: u64) -> Self {
        Self {
            kind: KeyEventKind::KeyDown,
            key_code,
            characters: Some(characters.to_string()),
            modifiers: Modifiers::from_raw(flags),
        }
    }

    pub fn flags_changed(key_code: u16, flags: u64) -> Self {
        Self {
            kind: KeyEventKind::FlagsChanged,
            key_code,
            characters: None,
            modifiers: Modifiers::from_raw(flags),
        }
    }
}

/// Glyph for keys whose characters are invisible or unhelpful.
pub fn special_key_symbol(key_code: u16) -> Option<&'static str> {
    let sym = match key_code {
        KC_RETURN => "↵",
        KC_SPACE => "␣",
        KC_DELETE => "⌫",
        KC_ESCAPE => "⎋",
        KC_TAB => "⇥",
        KC_LEFT => "←",
        KC_RIGHT => "→",
        KC_DOWN => "↓",
        KC_UP => "↑",
        KC_FORWARD_DELETE => "⌦",
        KC_HOME => "↖",
        KC_END => "↘",
        KC_PAGE_UP => "⇞",
        KC_PAGE_DOWN => "⇟",
        KC_KEYPAD_ENTER => "⌤",
        122 => "F1",
        120 => "F2",
        99 => "F3",
        118 => "F4",
        96 => "F5",
        97 => "F6",
        98 => "F7",
        100 => "F8",
        101 => "F9",
        109 => "F10",
        103 => "F11",
        111 => "F12",
        _ => return None,
    };
    Some(sym)
}

/// Map a raw key event to its chip label.
///
/// Returns `None` for events that should not produce a chip: modifier
/// releases and key downs without characters or a known glyph.
pub fn normalize(event: &RawKeyEvent) -> Option<String> {
    let mods = event.modifiers;
    match event.kind {
        KeyEventKind::FlagsChanged => mods.dominant_glyph().map(str::to_string),
        KeyEventKind::KeyDown => {
            let key = match special_key_symbol(event.key_code) {
                Some(sym) => sym.to_string(),
                None => {
                    let chars = event.characters.as_deref().filter(|c| !c.is_empty())?;
                    // shift and caps lock cancel each other out
                    if mods.shift != mods.caps_lock {
                        chars.to_uppercase()
                    } else {
                        chars.to_lowercase()
                    }
                }
            };
            Some(format!("{}{}", mods.prefix(), key))
        }
    }
}

/// Apply the configured case style to a label.
///
/// Labels that don't start with a letter (glyphs, combinations) are left as is.
pub fn apply_case_style(label: &str, style: CaseStyle) -> String {
    match label.chars().next() {
        Some(c) if c.is_alphabetic() => match style {
            CaseStyle::Uppercase => label.to_uppercase(),
            CaseStyle::Lowercase => label.to_lowercase(),
            CaseStyle::Auto => label.to_string(),
        },
        _ => label.to_string(),
    }
}

/// True when the label shows a modifier combination.
pub fn is_combination(label: &str) -> bool {
    label.contains('+') || label.chars().any(|c| MODIFIER_GLYPHS.contains(&c))
}

/// Minimum chip width for a label: wider for combinations and named keys.
pub fn chip_min_width(label: &str) -> f64 {
    if is_combination(label) {
        60.0
    } else if label.chars().count() > 1 {
        45.0
    } else {
        30.0
    }
}

/// ⌘, opens the settings panel when the app has focus.
pub fn is_settings_shortcut(event: &RawKeyEvent) -> bool {
    event.kind == KeyEventKind::KeyDown
        && event.modifiers.command
        && event.characters.as_deref() == Some(",")
}
