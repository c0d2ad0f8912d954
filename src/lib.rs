#![allow(unexpected_cfgs)] // Silence cfg warnings from objc macros

//! Keyshow: a floating on-screen display of recently pressed keys.
//!
//! Everything outside `platform` is pure Rust with no macOS FFI, so the
//! normalization, layout, feed and settings logic run as normal tests on
//! any host.

pub mod error;
pub mod events;
pub mod keys;
pub mod layout;
pub mod model;

#[cfg(target_os = "macos")]
pub mod platform;

use std::borrow::Cow;

// Re-export model types for convenience
pub use error::{AppError, Result};
pub use model::{DisplaySettings, KeyFeed, KeyPress};

// Re-export event types for convenience
pub use events::{AppEvent, EventBus, EventPublisher};

/// Clamp a value to [lo, hi]
pub fn clamp(v: f64, lo: f64, hi: f64) -> f64 {
    if v < lo {
        lo
    } else if v > hi {
        hi
    } else {
        v
    }
}

/// Snap `v` to the nearest multiple of `step` (no-op for a non-positive step).
pub fn snap(v: f64, step: f64) -> f64 {
    if step <= 0.0 {
        v
    } else {
        (v / step).round() * step
    }
}

/// Convert RGBA floats [0..1] to `#AARRGGBB`, alpha first.
pub fn color_to_hex(r: f64, g: f64, b: f64, a: f64) -> String {
    let byte = |v: f64| (clamp(v, 0.0, 1.0) * 255.0).round() as u8;
    format!("#{:02X}{:02X}{:02X}{:02X}", byte(a), byte(r), byte(g), byte(b))
}

/// Parse `#AARRGGBB` (alpha first) or opaque `#RRGGBB` into floats [0..1].
pub fn parse_hex_color(s: &str) -> Option<(f64, f64, f64, f64)> {
    let t = s.trim();
    let t = t.strip_prefix('#').unwrap_or(t);
    let hex = t.chars().filter(|c| !c.is_whitespace()).collect::<String>();
    if !hex.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    let (a, r, g, b) = match hex.len() {
        6 => (255u8, channel(0)?, channel(2)?, channel(4)?),
        8 => (channel(0)?, channel(2)?, channel(4)?, channel(6)?),
        _ => return None,
    };
    Some((
        r as f64 / 255.0,
        g as f64 / 255.0,
        b as f64 / 255.0,
        a as f64 / 255.0,
    ))
}

/// Very small localisation helper used by the settings panel and menus.
pub fn tr_key(key: &str, es: bool) -> Cow<'static, str> {
    match (key, es) {
        ("Settings", true) => Cow::Borrowed("Preferencias"),
        ("Settings", false) => Cow::Borrowed("Settings"),

        ("Language", true) => Cow::Borrowed("Idioma"),
        ("Language", false) => Cow::Borrowed("Language"),

        ("English", true) => Cow::Borrowed("Inglés"),
        ("English", false) => Cow::Borrowed("English"),

        ("Spanish", true) => Cow::Borrowed("Español"),
        ("Spanish", false) => Cow::Borrowed("Spanish"),

        // Display section
        ("Keys shown", true) => Cow::Borrowed("Número de teclas"),
        ("Keys shown", false) => Cow::Borrowed("Keys shown"),

        ("Duration (s)", true) => Cow::Borrowed("Duración (s)"),
        ("Duration (s)", false) => Cow::Borrowed("Duration (s)"),

        ("Size", true) => Cow::Borrowed("Tamaño"),
        ("Size", false) => Cow::Borrowed("Size"),

        ("Opacity (%)", true) => Cow::Borrowed("Opacidad (%)"),
        ("Opacity (%)", false) => Cow::Borrowed("Opacity (%)"),

        ("Spacing", true) => Cow::Borrowed("Espaciado"),
        ("Spacing", false) => Cow::Borrowed("Spacing"),

        ("Orientation", true) => Cow::Borrowed("Orientación"),
        ("Orientation", false) => Cow::Borrowed("Orientation"),

        ("Vertical", _) => Cow::Borrowed("Vertical"),
        ("Horizontal", _) => Cow::Borrowed("Horizontal"),

        ("Background", true) => Cow::Borrowed("Color de fondo"),
        ("Background", false) => Cow::Borrowed("Background"),

        ("Text color", true) => Cow::Borrowed("Color de texto"),
        ("Text color", false) => Cow::Borrowed("Text color"),

        ("Show background", true) => Cow::Borrowed("Mostrar fondo"),
        ("Show background", false) => Cow::Borrowed("Show background"),

        ("Text style", true) => Cow::Borrowed("Estilo de texto"),
        ("Text style", false) => Cow::Borrowed("Text style"),

        ("Auto", true) => Cow::Borrowed("Detectar"),
        ("Auto", false) => Cow::Borrowed("Auto"),

        ("Uppercase", true) => Cow::Borrowed("Mayúsculas"),
        ("Uppercase", false) => Cow::Borrowed("Uppercase"),

        ("Lowercase", true) => Cow::Borrowed("Minúsculas"),
        ("Lowercase", false) => Cow::Borrowed("Lowercase"),

        // Position section
        ("Screen", true) => Cow::Borrowed("Pantalla"),
        ("Screen", false) => Cow::Borrowed("Screen"),

        ("Position", true) => Cow::Borrowed("Posición"),
        ("Position", false) => Cow::Borrowed("Position"),

        ("Top Left", true) => Cow::Borrowed("Sup. Izq."),
        ("Top Left", false) => Cow::Borrowed("Top Left"),

        ("Top Right", true) => Cow::Borrowed("Sup. Der."),
        ("Top Right", false) => Cow::Borrowed("Top Right"),

        ("Center", true) => Cow::Borrowed("Centro"),
        ("Center", false) => Cow::Borrowed("Center"),

        ("Bottom Left", true) => Cow::Borrowed("Inf. Izq."),
        ("Bottom Left", false) => Cow::Borrowed("Bottom Left"),

        ("Bottom Right", true) => Cow::Borrowed("Inf. Der."),
        ("Bottom Right", false) => Cow::Borrowed("Bottom Right"),

        ("Fine tune", true) => Cow::Borrowed("Ajuste fino"),
        ("Fine tune", false) => Cow::Borrowed("Fine tune"),

        ("Key", true) => Cow::Borrowed("Tecla"),
        ("Key", false) => Cow::Borrowed("Key"),

        // Menus and buttons
        ("Close", true) => Cow::Borrowed("Cerrar"),
        ("Close", false) => Cow::Borrowed("Close"),

        ("Pause", true) => Cow::Borrowed("Pausar"),
        ("Pause", false) => Cow::Borrowed("Pause"),

        ("Resume", true) => Cow::Borrowed("Reanudar"),
        ("Resume", false) => Cow::Borrowed("Resume"),

        ("About", true) => Cow::Borrowed("Acerca de..."),
        ("About", false) => Cow::Borrowed("About..."),

        ("Quit", true) => Cow::Borrowed("Salir"),
        ("Quit", false) => Cow::Borrowed("Quit"),

        _ => Cow::Owned(key.to_string()),
    }
}
