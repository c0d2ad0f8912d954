//! FFI bindings for CoreFoundation.
//!
//! Only the pieces needed to build the Accessibility options dictionary.

#[link(name = "CoreFoundation", kind = "framework")]
extern "C" {
    pub fn CFRelease(obj: *const std::ffi::c_void);

    pub fn CFDictionaryCreate(
        allocator: *const std::ffi::c_void,
        keys: *const *const std::ffi::c_void,
        values: *const *const std::ffi::c_void,
        numValues: isize,
        keyCallBacks: *const std::ffi::c_void,
        valueCallBacks: *const std::ffi::c_void,
    ) -> *const std::ffi::c_void;

    pub static kCFBooleanTrue: *const std::ffi::c_void;
    pub static kCFTypeDictionaryKeyCallBacks: std::ffi::c_void;
    pub static kCFTypeDictionaryValueCallBacks: std::ffi::c_void;
}
