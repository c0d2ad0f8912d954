//! Status bar (menu bar) item with dropdown menu.
//!
//! The app runs as an accessory (no Dock icon), so this menu is the
//! only permanent UI:
//! - Settings…
//! - Pause / Resume capture
//! - About
//! - Quit

use std::cell::Cell;

use crate::platform::macos::app::{host_view, with_state};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, nsstring_id, sel, Sel};
use crate::tr_key;

thread_local! {
    /// The status item; retained for the life of the app.
    static STATUS_ITEM: Cell<id> = const { Cell::new(std::ptr::null_mut()) };
}

/// Install the status bar item with menu.
///
/// # Safety
/// Must be called from main thread, after the overlay view exists.
pub unsafe fn install_status_bar() {
    let status_bar: id = msg_send![get_class("NSStatusBar"), systemStatusBar];

    // NSVariableStatusItemLength = -1.0
    let status_item: id = msg_send![status_bar, statusItemWithLength: -1.0f64];
    let _: id = msg_send![status_item, retain];
    STATUS_ITEM.with(|c| c.set(status_item));

    let button: id = msg_send![status_item, button];
    if button != nil {
        let _: () = msg_send![button, setTitle: nsstring_id("⌨")];
    }

    update_status_bar();
}

unsafe fn menu_item(menu: id, target: id, title: &str, action: Sel, key: &str) {
    let item: id = msg_send![get_class("NSMenuItem"), alloc];
    let item: id = msg_send![
        item,
        initWithTitle: nsstring_id(title),
        action: action,
        keyEquivalent: nsstring_id(key)
    ];
    let _: () = msg_send![item, setTarget: target];
    let _: () = msg_send![menu, addItem: item];
}

unsafe fn separator(menu: id) {
    let sep: id = msg_send![get_class("NSMenuItem"), separatorItem];
    let _: () = msg_send![menu, addItem: sep];
}

/// Create the dropdown menu for the current language and capture state.
unsafe fn create_status_menu(view: id) -> id {
    let (es, capturing) = with_state(|s| (s.settings.is_spanish(), s.capture_enabled));

    let menu: id = msg_send![get_class("NSMenu"), alloc];
    let menu: id = msg_send![menu, init];

    let settings_title = format!("{}…", tr_key("Settings", es));
    menu_item(menu, view, &settings_title, sel!(statusBarSettings:), ",");

    let toggle_title = if capturing {
        tr_key("Pause", es)
    } else {
        tr_key("Resume", es)
    };
    menu_item(menu, view, &toggle_title, sel!(statusBarToggleCapture:), "");

    separator(menu);
    menu_item(menu, view, &tr_key("About", es), sel!(statusBarAbout:), "");
    separator(menu);
    menu_item(menu, view, &tr_key("Quit", es), sel!(statusBarQuit:), "q");

    menu
}

/// Rebuild the menu after a language or capture state change.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn update_status_bar() {
    let item = STATUS_ITEM.with(|c| c.get());
    if item == nil {
        return;
    }
    let menu = create_status_menu(host_view());
    let _: () = msg_send![item, setMenu: menu];
}
