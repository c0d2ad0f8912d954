//! Thin bridge over the objc2 runtime.
//!
//! Short aliases and helpers (`id`, `nil`, `YES`, ivar access, NSString
//! conversion) used by the message-sending code in `platform::macos`.

#![allow(non_upper_case_globals)]
#![allow(non_camel_case_types)]

use std::ffi::{c_char, CStr, CString};

pub use objc2::runtime::{AnyClass, AnyObject, Bool, Sel};
pub use objc2::{msg_send, sel};

pub use objc2_foundation::{NSPoint, NSRect, NSSize, NSString};

pub use objc2::rc::Retained;

use objc2::encode::Encode;
use objc2_app_kit::NSApplication;
use objc2::ClassType;

/// Objective-C object pointer.
///
/// Prefer typed pointers like `&NSView` or `Retained<NSString>` when the type
/// is known; `id` is used for the dynamic message sends.
pub type id = *mut AnyObject;

/// Null object pointer.
pub const nil: id = std::ptr::null_mut();

/// Objective-C BOOL YES.
pub const YES: Bool = Bool::YES;

/// Objective-C BOOL NO.
pub const NO: Bool = Bool::NO;

/// Get the shared NSApplication instance.
#[inline]
#[allow(non_snake_case)]
pub fn NSApp() -> id {
    unsafe { msg_send![NSApplication::class(), sharedApplication] }
}

/// Create an NSString and return it as a raw id pointer.
///
/// The returned pointer is retained - caller must manage memory.
#[inline]
pub fn nsstring_id(s: &str) -> id {
    let ns = NSString::from_str(s);
    Retained::into_raw(ns) as id
}

/// Copy an NSString into a Rust `String`. Returns `None` for nil.
///
/// # Safety
/// `s` must be nil or a valid NSString.
pub unsafe fn string_from_nsstring(s: id) -> Option<String> {
    if s == nil {
        return None;
    }
    let p: *const c_char = msg_send![s, UTF8String];
    if p.is_null() {
        return None;
    }
    Some(CStr::from_ptr(p).to_string_lossy().into_owned())
}

/// Get a class by name, panicking if not found.
///
/// Only used for AppKit/Foundation classes that always exist.
#[inline]
pub fn get_class(name: &str) -> &'static AnyClass {
    let c_name = CString::new(name).expect("Invalid class name");
    AnyClass::get(&c_name).unwrap_or_else(|| panic!("Class '{}' not found", name))
}

/// Extension trait for accessing instance variables on AnyObject.
///
/// Uses `Ivar::load`/`Ivar::load_mut` internally. Method names differ from
/// the deprecated AnyObject methods to avoid ambiguity.
pub trait ObjectExt {
    /// Load a reference to an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T. Main thread only.
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T;

    /// Store a value in an instance variable.
    ///
    /// # Safety
    /// The ivar must exist and be of type T. Main thread only.
    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T);
}

impl ObjectExt for AnyObject {
    unsafe fn load_ivar<T: Encode>(&self, name: &str) -> &T {
        let cls = self.class();
        let c_name = CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        ivar.load::<T>(self)
    }

    unsafe fn store_ivar<T: Encode>(&mut self, name: &str, value: T) {
        let cls = self.class();
        let c_name = CString::new(name).unwrap();
        let ivar = cls
            .instance_variable(&c_name)
            .unwrap_or_else(|| panic!("ivar '{}' not found", name));
        *ivar.load_mut::<T>(self) = value;
    }
}

/// Run a closure within an autorelease pool.
#[inline]
pub fn autoreleasepool<R, F: FnOnce() -> R>(f: F) -> R {
    unsafe {
        let pool: id = msg_send![get_class("NSAutoreleasePool"), new];
        let result = f();
        let _: () = msg_send![pool, drain];
        result
    }
}
