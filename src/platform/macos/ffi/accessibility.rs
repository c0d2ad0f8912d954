//! FFI bindings for ApplicationServices (Accessibility).
//!
//! Global key monitors only receive events once the user has granted the
//! app Accessibility access, so startup checks (and prompts) for it.

use super::corefoundation::{
    kCFBooleanTrue, kCFTypeDictionaryKeyCallBacks, kCFTypeDictionaryValueCallBacks,
    CFDictionaryCreate, CFRelease,
};

#[link(name = "ApplicationServices", kind = "framework")]
extern "C" {
    pub fn AXIsProcessTrustedWithOptions(options: *const std::ffi::c_void) -> bool;

    pub static kAXTrustedCheckOptionPrompt: *const std::ffi::c_void;
}

/// Check Accessibility trust, showing the system prompt if it is missing.
///
/// Returns whether the process is currently trusted.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn ensure_accessibility_prompt() -> bool {
    let keys = [kAXTrustedCheckOptionPrompt];
    let values = [kCFBooleanTrue];

    let dict = CFDictionaryCreate(
        std::ptr::null(), // default allocator
        keys.as_ptr(),
        values.as_ptr(),
        1,
        &kCFTypeDictionaryKeyCallBacks as *const _,
        &kCFTypeDictionaryValueCallBacks as *const _,
    );

    let trusted = AXIsProcessTrustedWithOptions(dict);

    if !dict.is_null() {
        CFRelease(dict);
    }
    trusted
}
