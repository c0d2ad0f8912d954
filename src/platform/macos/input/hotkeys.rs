//! Carbon hotkey management.
//!
//! This module handles registration, unregistration, and reinstallation
//! of global hotkeys using the Carbon Event Manager API.

use std::ffi::c_void;

use crate::error::{AppError, Result};
use crate::events::{publish, AppEvent};
use crate::platform::macos::ffi::bridge::{id, ObjectExt};
use crate::platform::macos::ffi::{
    EventHandlerCallRef, EventHandlerRef, EventHotKeyID, EventHotKeyRef, EventRef, EventTypeSpec,
    GetApplicationEventTarget, GetEventClass, GetEventKind, GetEventParameter, InstallEventHandler,
    RegisterEventHotKey, RemoveEventHandler, UnregisterEventHotKey, CONTROL_KEY,
    HKID_SETTINGS, HKID_TOGGLE_CAPTURE, KC_COMMA, KC_K, K_EVENT_CLASS_KEYBOARD,
    K_EVENT_HOTKEY_PRESSED, K_EVENT_PARAM_DIRECT_OBJECT, NO_ERR, SHIFT_KEY, SIG_KSHW,
    TYPE_EVENT_HOTKEY_ID,
};

/// Type alias for the hotkey event handler function signature.
pub type HotkeyHandler = extern "C" fn(EventHandlerCallRef, EventRef, *mut c_void) -> i32;

/// View ivars holding the Carbon refs, in uninstall order.
const HOTKEY_SLOTS: [&str; 2] = ["_hkSettings", "_hkToggleCapture"];
const HANDLER_SLOT: &str = "_hkHandler";

unsafe fn register_hotkey(view: id, key_code: u32, mods: u32, hk: u32, slot: &str) -> Result<()> {
    let hk_id = EventHotKeyID {
        signature: SIG_KSHW,
        id: hk,
    };
    let mut out_ref: EventHotKeyRef = std::ptr::null_mut();
    let status = RegisterEventHotKey(
        key_code,
        mods,
        hk_id,
        GetApplicationEventTarget(),
        0,
        &mut out_ref,
    );
    if status != NO_ERR || out_ref.is_null() {
        return Err(AppError::Carbon {
            call: "RegisterEventHotKey",
            status,
        });
    }
    (*view).store_ivar::<*mut c_void>(slot, out_ref);
    Ok(())
}

/// Install Carbon hotkeys for the application.
///
/// Registers:
/// - Ctrl+,: Open settings
/// - Ctrl+Shift+K: Pause/resume capture
///
/// # Safety
/// Must be called from main thread. The handler function pointer must remain valid.
pub unsafe fn install_hotkeys(view: id, handler: HotkeyHandler) -> Result<()> {
    let types = [EventTypeSpec {
        event_class: K_EVENT_CLASS_KEYBOARD,
        event_kind: K_EVENT_HOTKEY_PRESSED,
    }];
    let mut handler_ref: EventHandlerRef = std::ptr::null_mut();
    let status = InstallEventHandler(
        GetApplicationEventTarget(),
        handler,
        types.len() as u32,
        types.as_ptr(),
        view as *mut c_void,
        &mut handler_ref,
    );
    if status != NO_ERR {
        return Err(AppError::Carbon {
            call: "InstallEventHandler",
            status,
        });
    }
    (*view).store_ivar::<*mut c_void>(HANDLER_SLOT, handler_ref);

    // Cmd+, is taken by the frontmost app, so the global shortcut uses Ctrl
    register_hotkey(view, KC_COMMA, CONTROL_KEY, HKID_SETTINGS, HOTKEY_SLOTS[0])?;
    register_hotkey(
        view,
        KC_K,
        CONTROL_KEY | SHIFT_KEY,
        HKID_TOGGLE_CAPTURE,
        HOTKEY_SLOTS[1],
    )?;
    tracing::debug!("hotkeys installed");
    Ok(())
}

/// Uninstall all registered Carbon hotkeys.
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn uninstall_hotkeys(view: id) {
    for slot in HOTKEY_SLOTS {
        let hk: EventHotKeyRef = *(*view).load_ivar::<*mut c_void>(slot);
        if !hk.is_null() {
            let _ = UnregisterEventHotKey(hk);
            (*view).store_ivar::<*mut c_void>(slot, std::ptr::null_mut());
        }
    }
    let handler: EventHandlerRef = *(*view).load_ivar::<*mut c_void>(HANDLER_SLOT);
    if !handler.is_null() {
        let _ = RemoveEventHandler(handler);
        (*view).store_ivar::<*mut c_void>(HANDLER_SLOT, std::ptr::null_mut());
    }
}

/// Re-install hotkeys safely (unregister first to avoid leaks).
///
/// # Safety
/// Must be called from main thread.
pub unsafe fn reinstall_hotkeys(view: id, handler: HotkeyHandler) -> Result<()> {
    uninstall_hotkeys(view);
    install_hotkeys(view, handler)
}

/// Carbon event handler for hotkey events.
///
/// Publishes the matching event to the bus; the dispatcher acts on it
/// from the main loop timer.
///
/// # Safety
/// Called by Carbon runtime. Must not panic.
pub extern "C" fn hotkey_event_handler(
    _call_ref: EventHandlerCallRef,
    event: EventRef,
    _user_data: *mut c_void,
) -> i32 {
    unsafe {
        if GetEventClass(event) != K_EVENT_CLASS_KEYBOARD
            || GetEventKind(event) != K_EVENT_HOTKEY_PRESSED
        {
            return NO_ERR;
        }
        let mut hot_id = EventHotKeyID {
            signature: 0,
            id: 0,
        };
        let status = GetEventParameter(
            event,
            K_EVENT_PARAM_DIRECT_OBJECT,
            TYPE_EVENT_HOTKEY_ID,
            std::ptr::null_mut(),
            std::mem::size_of::<EventHotKeyID>() as u32,
            std::ptr::null_mut(),
            &mut hot_id as *mut _ as *mut c_void,
        );
        if status != NO_ERR || hot_id.signature != SIG_KSHW {
            return NO_ERR;
        }
        match hot_id.id {
            HKID_SETTINGS => publish(AppEvent::OpenSettings),
            HKID_TOGGLE_CAPTURE => publish(AppEvent::ToggleCapture),
            other => tracing::debug!(id = other, "unknown hotkey id"),
        }
        NO_ERR
    }
}
