//! Cocoa utility functions.
//!
//! Window levels, screen enumeration and conversions between AppKit
//! geometry and the pure `layout` types.

use super::bridge::{get_class, id, msg_send, nil, NSPoint, NSRect, NSSize};
use crate::layout::{Point, Rect};
use crate::model::Rgba;

/// NSFloatingWindowLevel: above normal windows, below menus.
pub const FLOATING_WINDOW_LEVEL: isize = 3;

/// NSModalPanelWindowLevel, used for the settings panel.
pub const MODAL_PANEL_WINDOW_LEVEL: isize = 8;

pub fn rect_from_ns(r: NSRect) -> Rect {
    Rect::new(r.origin.x, r.origin.y, r.size.width, r.size.height)
}

pub fn ns_from_rect(r: &Rect) -> NSRect {
    NSRect::new(
        NSPoint::new(r.origin.x, r.origin.y),
        NSSize::new(r.size.width, r.size.height),
    )
}

/// NSColor (calibrated RGB) for an `Rgba`.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn ns_color(c: &Rgba) -> id {
    msg_send![
        get_class("NSColor"),
        colorWithCalibratedRed: c.r,
        green: c.g,
        blue: c.b,
        alpha: c.a
    ]
}

/// Global mouse position in Cocoa coordinates (origin bottom-left).
pub fn mouse_location() -> Point {
    let p: NSPoint = unsafe { msg_send![get_class("NSEvent"), mouseLocation] };
    Point::new(p.x, p.y)
}

/// All attached screens, in NSScreen order.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn all_screens() -> Vec<id> {
    let screens: id = msg_send![get_class("NSScreen"), screens];
    let count: usize = msg_send![screens, count];
    (0..count)
        .map(|i| msg_send![screens, objectAtIndex: i])
        .collect()
}

/// The main screen, falling back to the first one.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn main_screen() -> id {
    let main: id = msg_send![get_class("NSScreen"), mainScreen];
    if main != nil {
        return main;
    }
    all_screens().first().copied().unwrap_or(nil)
}

/// Visible frame (without menu bar and Dock) of a screen.
///
/// # Safety
/// `screen` must be a valid NSScreen.
pub unsafe fn visible_frame(screen: id) -> Rect {
    let f: NSRect = msg_send![screen, visibleFrame];
    rect_from_ns(f)
}

/// Index of the screen whose full frame contains `p`.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn screen_index_for_point(p: Point) -> Option<usize> {
    all_screens().iter().position(|&s| {
        let f: NSRect = msg_send![s, frame];
        rect_from_ns(f).contains(p)
    })
}

/// Screen that contains `p`, else the main screen.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn screen_for_point(p: Point) -> id {
    let screens = all_screens();
    screen_index_for_point(p)
        .and_then(|i| screens.get(i).copied())
        .unwrap_or_else(|| main_screen())
}
