//! Drawing functions for the overlay view.
//!
//! Chip measurement and painting, kept apart from the view class so the
//! `drawRect:` method only gathers state and calls in here.

use crate::keys::chip_min_width;
use crate::layout::{Rect, Size, StackLayout};
use crate::model::constants::*;
use crate::model::{DisplaySettings, Rgba};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NSPoint, NSSize, NSString};
use crate::platform::macos::ffi::{ns_color, ns_from_rect};

#[link(name = "AppKit", kind = "framework")]
extern "C" {
    static NSFontAttributeName: id;
    static NSForegroundColorAttributeName: id;
}

/// Attributes dictionary for chip text.
unsafe fn text_attributes(font_size: f64, color: Option<&Rgba>) -> id {
    let font: id = msg_send![get_class("NSFont"), systemFontOfSize: font_size];
    let dict: id = msg_send![get_class("NSMutableDictionary"), dictionary];
    let _: () = msg_send![dict, setObject: font, forKey: NSFontAttributeName];
    if let Some(c) = color {
        let _: () = msg_send![dict, setObject: ns_color(c), forKey: NSForegroundColorAttributeName];
    }
    dict
}

unsafe fn text_size(label: &str, attrs: id) -> Size {
    let s = NSString::from_str(label);
    let size: NSSize = msg_send![&*s, sizeWithAttributes: attrs];
    Size::new(size.width.ceil(), size.height.ceil())
}

/// Size of the chip for `label`, padding and minimum width included.
///
/// # Safety
/// Must be called from the main thread.
pub unsafe fn measure_chip(label: &str, font_size: f64) -> Size {
    let text = text_size(label, text_attributes(font_size, None));
    Size::new(
        (text.width + 2.0 * CHIP_PADDING_H).max(chip_min_width(label)),
        text.height + 2.0 * CHIP_PADDING_V,
    )
}

unsafe fn rounded_path(rect: &Rect, radius: f64) -> id {
    msg_send![
        get_class("NSBezierPath"),
        bezierPathWithRoundedRect: ns_from_rect(rect),
        xRadius: radius,
        yRadius: radius
    ]
}

/// Draw one chip: filled rounded rect, faint outline, centred text.
unsafe fn draw_chip(rect: &Rect, label: &str, settings: &DisplaySettings, attrs: id) {
    let path = rounded_path(rect, CHIP_CORNER_RADIUS);

    let _: () = msg_send![ns_color(&settings.key_background), set];
    let _: () = msg_send![path, fill];

    // 1pt stroke straddles the edge; inset half a point so it stays crisp
    let inset = Rect::new(
        rect.origin.x + 0.5,
        rect.origin.y + 0.5,
        rect.size.width - 1.0,
        rect.size.height - 1.0,
    );
    let outline = rounded_path(&inset, CHIP_CORNER_RADIUS);
    let _: () = msg_send![outline, setLineWidth: 1.0f64];
    let _: () = msg_send![ns_color(&settings.chip_stroke()), set];
    let _: () = msg_send![outline, stroke];

    let text = text_size(label, attrs);
    let at = NSPoint::new(
        rect.mid_x() - text.width / 2.0,
        rect.mid_y() - text.height / 2.0,
    );
    let s = NSString::from_str(label);
    let _: () = msg_send![&*s, drawAtPoint: at, withAttributes: attrs];
}

/// Paint the overlay content into a flipped view of size `layout.content`.
///
/// Draws nothing for an empty layout.
///
/// # Safety
/// Must be called from the main thread within a valid drawing context.
pub unsafe fn draw_overlay(layout: &StackLayout, labels: &[String], settings: &DisplaySettings) {
    if layout.chips.is_empty() {
        return;
    }

    if settings.show_background {
        let bounds = Rect::new(0.0, 0.0, layout.content.width, layout.content.height);
        let container = rounded_path(&bounds, CONTAINER_CORNER_RADIUS);
        let _: () = msg_send![ns_color(&settings.key_background), set];
        let _: () = msg_send![container, fill];
    }

    let attrs = text_attributes(settings.font_size, Some(&settings.key_text));
    for (rect, label) in layout.chips.iter().zip(labels) {
        draw_chip(rect, label, settings, attrs);
    }
}
