//! Notification observers.
//!
//! Cleans up Carbon and NSEvent resources at termination, asks for a hotkey
//! reinstall after system events that can drop them, and persists the
//! overlay centre when the user drags the window.

use std::ffi::CStr;

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::layout::Point;
use crate::platform::macos::app::{with_state, with_state_mut};
use crate::platform::macos::ffi::bridge::{get_class, id, msg_send, nil, NSRect};
use crate::platform::macos::ffi::rect_from_ns;
use crate::platform::macos::input::hotkeys::uninstall_hotkeys;
use crate::platform::macos::input::keyboard_monitors::remove_key_monitors;
use crate::platform::macos::storage::save_position;

unsafe fn notification_name(name: &CStr) -> id {
    msg_send![get_class("NSString"), stringWithUTF8String: name.as_ptr()]
}

/// Install an observer that cleans up Carbon resources and monitors when the
/// app terminates.
///
/// # Safety
/// - `view` must be a valid, non-null pointer to the overlay view.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_termination_observer(view: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        tracing::info!("terminating");
        uninstall_hotkeys(view);
        remove_key_monitors(view);
    });

    let name = notification_name(c"NSApplicationWillTerminateNotification");
    let _: id =
        msg_send![center, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
}

/// Observe system events that may disrupt Carbon hotkeys.
///
/// Watches for:
/// - Wake from sleep
/// - Session became active (unlock/login)
/// - Active Space changed (Mission Control / Spaces)
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn install_wakeup_space_observers() {
    let ws: id = msg_send![get_class("NSWorkspace"), sharedWorkspace];
    let nc: id = msg_send![ws, notificationCenter];

    let add_obs = |name_cstr: &'static CStr| {
        let name = notification_name(name_cstr);
        let block = RcBlock::new(move |_note: id| {
            tracing::debug!(notification = ?name_cstr, "requesting hotkey reinstall");
            publish(AppEvent::ReinstallHotkeys);
        });
        let _: id =
            msg_send![nc, addObserverForName: name, object: nil, queue: nil, usingBlock: &*block];
    };

    add_obs(c"NSWorkspaceDidWakeNotification");
    add_obs(c"NSWorkspaceSessionDidBecomeActiveNotification");
    add_obs(c"NSWorkspaceActiveSpaceDidChangeNotification");
}

/// Persist the overlay centre after the user drags the window.
///
/// Moves made by `refresh_overlay` are ignored.
///
/// # Safety
/// - `window` must be the overlay window.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_window_move_observer(window: id) {
    let center: id = msg_send![get_class("NSNotificationCenter"), defaultCenter];

    let block = RcBlock::new(move |_note: id| unsafe {
        if with_state(|s| s.repositioning) {
            return;
        }
        let frame: NSRect = msg_send![window, frame];
        let frame = rect_from_ns(frame);
        let position = Point::new(frame.mid_x(), frame.mid_y());
        with_state_mut(|s| s.settings.position = position);
        save_position(position);
        tracing::debug!(x = position.x, y = position.y, "overlay moved");
    });

    let name = notification_name(c"NSWindowDidMoveNotification");
    let _: id = msg_send![
        center,
        addObserverForName: name,
        object: window,
        queue: nil,
        usingBlock: &*block
    ];
}
