//! NSEvent keyboard monitors.
//!
//! A global monitor sees key events sent to other applications (requires
//! Accessibility access); a local monitor sees the ones sent to us. Both
//! turn the event into a `RawKeyEvent`, normalize it and publish the label.

use block2::RcBlock;

use crate::error::{AppError, Result};
use crate::events::{publish, AppEvent};
use crate::keys::{is_settings_shortcut, normalize, RawKeyEvent};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, string_from_nsstring, ObjectExt,
};

// NSEventType values
const EVENT_TYPE_KEY_DOWN: u64 = 10;
const EVENT_TYPE_FLAGS_CHANGED: u64 = 12;

const KEY_DOWN_MASK: u64 = 1 << EVENT_TYPE_KEY_DOWN;
const FLAGS_CHANGED_MASK: u64 = 1 << EVENT_TYPE_FLAGS_CHANGED;

/// Extract the fields the normalizer needs.
///
/// # Safety
/// `event` must be a valid NSEvent.
unsafe fn raw_key_event(event: id) -> Option<RawKeyEvent> {
    let ty: u64 = msg_send![event, type];
    let key_code: u16 = msg_send![event, keyCode];
    let flags: u64 = msg_send![event, modifierFlags];
    match ty {
        EVENT_TYPE_KEY_DOWN => {
            let chars: id = msg_send![event, charactersIgnoringModifiers];
            let chars = string_from_nsstring(chars).unwrap_or_default();
            Some(RawKeyEvent::key_down(key_code, &chars, flags))
        }
        EVENT_TYPE_FLAGS_CHANGED => Some(RawKeyEvent::flags_changed(key_code, flags)),
        _ => None,
    }
}

fn publish_label(raw: &RawKeyEvent) {
    if let Some(label) = normalize(raw) {
        tracing::debug!(key_code = raw.key_code, %label, "key captured");
        publish(AppEvent::KeyPressed(label));
    }
}

/// Install the global and local key monitors.
///
/// The local monitor swallows ⌘, and opens the settings panel instead.
///
/// # Safety
/// - `view` must be a valid, non-null pointer to the overlay view.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn install_key_monitors(view: id) -> Result<()> {
    let existing: id = *(*view).load_ivar::<id>("_monGlobalKeys");
    if existing != nil {
        return Ok(());
    }
    let mask = KEY_DOWN_MASK | FLAGS_CHANGED_MASK;

    let global_block = RcBlock::new(move |event: id| unsafe {
        if let Some(raw) = raw_key_event(event) {
            publish_label(&raw);
        }
    });
    let global: id = msg_send![
        get_class("NSEvent"),
        addGlobalMonitorForEventsMatchingMask: mask,
        handler: &*global_block
    ];
    if global == nil {
        return Err(AppError::Monitor("global key"));
    }
    (*view).store_ivar::<id>("_monGlobalKeys", global);

    let local_block = RcBlock::new(move |event: id| -> id {
        unsafe {
            if let Some(raw) = raw_key_event(event) {
                if is_settings_shortcut(&raw) {
                    publish(AppEvent::OpenSettings);
                    return nil;
                }
                publish_label(&raw);
            }
        }
        event
    });
    let local: id = msg_send![
        get_class("NSEvent"),
        addLocalMonitorForEventsMatchingMask: mask,
        handler: &*local_block
    ];
    if local == nil {
        return Err(AppError::Monitor("local key"));
    }
    (*view).store_ivar::<id>("_monLocalKeys", local);
    Ok(())
}

/// Remove both key monitors.
///
/// # Safety
/// - `view` must be a valid, non-null pointer to the overlay view.
/// - Must be called from main thread.
pub unsafe fn remove_key_monitors(view: id) {
    for slot in ["_monGlobalKeys", "_monLocalKeys"] {
        let mon: id = *(*view).load_ivar::<id>(slot);
        if mon != nil {
            let _: () = msg_send![get_class("NSEvent"), removeMonitor: mon];
            (*view).store_ivar::<id>(slot, nil);
        }
    }
}
