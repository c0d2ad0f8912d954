//! The floating overlay panel.

use crate::layout::Rect;
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, NO, YES};
use crate::platform::macos::ffi::{ns_from_rect, FLOATING_WINDOW_LEVEL};

// NSWindowStyleMaskBorderless = 0, NSWindowStyleMaskNonactivatingPanel = 1 << 7
const STYLE_MASK: u64 = 1 << 7;
// NSBackingStoreBuffered
const BACKING_BUFFERED: u64 = 2;

// NSWindowCollectionBehaviorCanJoinAllSpaces (1 << 0)
// | NSWindowCollectionBehaviorStationary (1 << 4)
// | NSWindowCollectionBehaviorFullScreenAuxiliary (1 << 8)
const COLLECTION_BEHAVIOR: u64 = 1 | 16 | 256;

/// Create the borderless, non-activating, always-on-top overlay panel.
///
/// The panel is transparent and shadowless; the content view paints the
/// chips. It can be dragged by its background.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn create_overlay_window(frame: &Rect) -> id {
    let window: id = msg_send![get_class("NSPanel"), alloc];
    let window: id = msg_send![
        window,
        initWithContentRect: ns_from_rect(frame),
        styleMask: STYLE_MASK,
        backing: BACKING_BUFFERED,
        defer: NO
    ];

    let _: () = msg_send![window, setReleasedWhenClosed: NO];
    let _: () = msg_send![window, setFloatingPanel: YES];
    // accessory apps are never active; the panel must not hide with them
    let _: () = msg_send![window, setHidesOnDeactivate: NO];
    let _: () = msg_send![window, setBecomesKeyOnlyIfNeeded: YES];

    let _: () = msg_send![window, setOpaque: NO];
    let clear_color: id = msg_send![get_class("NSColor"), clearColor];
    let _: () = msg_send![window, setBackgroundColor: clear_color];
    let _: () = msg_send![window, setHasShadow: NO];

    let _: () = msg_send![window, setLevel: FLOATING_WINDOW_LEVEL];
    let _: () = msg_send![window, setCollectionBehavior: COLLECTION_BEHAVIOR];
    let _: () = msg_send![window, setMovableByWindowBackground: YES];
    let _: () = msg_send![window, setIgnoresMouseEvents: NO];

    window
}
