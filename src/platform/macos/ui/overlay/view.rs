//! KeyshowView class for the overlay.
//!
//! This module contains the NSView subclass that handles:
//! - Drawing the key chips
//! - Processing input events from the event bus on a timer
//! - Settings UI actions (sliders, colour wells, position buttons)
//! - Status bar menu actions

use std::ffi::{c_void, CStr};
use std::time::Instant;

use crate::error::{AppError, Result};
use crate::events::{publish, AppEvent};
use crate::layout::{move_to_screen, nudge, preset_position, Nudge, Rect, ScreenPreset};
use crate::model::{CaseStyle, Orientation, Rgba};
use crate::platform::macos::app::{
    apply_settings_change, current_settings, overlay_labels, overlay_layout, overlay_screen_frame,
    prune_expired, with_state, with_state_mut,
};
use crate::platform::macos::ffi::bridge::{
    id, msg_send, nil, nsstring_id, sel, string_from_nsstring, Bool, NSPoint, NSRect, NSSize,
    ObjectExt,
};
use crate::platform::macos::ffi::{all_screens, main_screen, ns_color, visible_frame};
use crate::platform::macos::handlers::dispatch_events;
use crate::platform::macos::input::{hotkey_event_handler, reinstall_hotkeys};
use crate::platform::macos::ui::overlay::draw_overlay;
use crate::platform::macos::ui::settings::{
    build_settings_content, close_settings_window, open_settings_window, set_text, well_color,
    SETTINGS_IVARS,
};
use crate::platform::macos::ui::status_bar::update_status_bar;

use objc2::runtime::{AnyClass, AnyObject, ClassBuilder, Sel};

const CLASS_NAME: &CStr = c"KeyshowView";

/// Object ivars, all initialised to nil.
const OBJECT_IVARS: [&CStr; 3] = [c"_monGlobalKeys", c"_monLocalKeys", c"_updateTimer"];

/// Carbon ref ivars, all initialised to null.
const CARBON_IVARS: [&CStr; 3] = [c"_hkHandler", c"_hkSettings", c"_hkToggleCapture"];

// ============================================================================
// KeyshowView registration and creation
// ============================================================================

/// Register the KeyshowView class and create an instance as the content view
/// of `window`.
///
/// # Safety
/// Must be called from the main thread. The window must be a valid NSWindow.
pub unsafe fn register_and_create_view(window: id, width: f64, height: f64) -> Result<id> {
    let cls = match AnyClass::get(CLASS_NAME) {
        Some(cls) => cls,
        None => {
            let superclass =
                AnyClass::get(c"NSView").ok_or(AppError::ClassRegistration("NSView"))?;
            let mut builder = ClassBuilder::new(CLASS_NAME, superclass)
                .ok_or(AppError::ClassRegistration("KeyshowView"))?;
            register_ivars(&mut builder);
            register_methods(&mut builder);
            builder.register()
        }
    };

    let view: id = msg_send![cls, alloc];
    let frame = NSRect::new(NSPoint::new(0.0, 0.0), NSSize::new(width, height));
    let view: id = msg_send![view, initWithFrame: frame];
    initialize_view_ivars(view);

    let _: () = msg_send![window, setContentView: view];
    Ok(view)
}

/// Register all instance variables for the KeyshowView.
fn register_ivars(builder: &mut ClassBuilder) {
    for name in OBJECT_IVARS {
        builder.add_ivar::<id>(name);
    }
    for name in CARBON_IVARS {
        builder.add_ivar::<*mut c_void>(name);
    }
    // Settings UI refs
    builder.add_ivar::<id>(c"_settingsWindow");
    builder.add_ivar::<id>(c"_valueKeys");
    builder.add_ivar::<id>(c"_valueDuration");
    builder.add_ivar::<id>(c"_valueSize");
    builder.add_ivar::<id>(c"_valueOpacity");
    builder.add_ivar::<id>(c"_valueSpacing");
    builder.add_ivar::<id>(c"_wellBackground");
    builder.add_ivar::<id>(c"_fieldBackgroundHex");
    builder.add_ivar::<id>(c"_wellText");
    builder.add_ivar::<id>(c"_fieldTextHex");
}

/// Register all methods for the KeyshowView.
///
/// # Safety
/// Must be called during class registration.
unsafe fn register_methods(builder: &mut ClassBuilder) {
    // Core methods
    builder.add_method(sel!(tick), tick as unsafe extern "C-unwind" fn(_, _));
    builder.add_method(
        sel!(drawRect:),
        draw_rect as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(isFlipped),
        is_flipped as unsafe extern "C-unwind" fn(_, _) -> _,
    );
    builder.add_method(
        sel!(acceptsFirstMouse:),
        accepts_first_mouse as unsafe extern "C-unwind" fn(_, _, _) -> _,
    );

    // Settings actions
    builder.add_method(
        sel!(langChanged:),
        lang_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(keysChanged:),
        keys_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(durationChanged:),
        duration_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(sizeChanged:),
        size_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(opacityChanged:),
        opacity_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(spacingChanged:),
        spacing_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(orientationChanged:),
        orientation_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(caseStyleChanged:),
        case_style_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(showBackgroundChanged:),
        show_background_changed as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Colour actions
    builder.add_method(
        sel!(backgroundColorChanged:),
        background_color_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(backgroundHexChanged:),
        background_hex_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(textColorChanged:),
        text_color_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(textHexChanged:),
        text_hex_changed as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Position actions
    builder.add_method(
        sel!(screenChanged:),
        screen_changed as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(presetPosition:),
        preset_position_action as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(nudgePosition:),
        nudge_position_action as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Closing the settings window
    builder.add_method(
        sel!(closeSettings:),
        close_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(windowWillClose:),
        window_will_close as unsafe extern "C-unwind" fn(_, _, _),
    );

    // Status bar menu actions
    builder.add_method(
        sel!(statusBarSettings:),
        status_bar_settings as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(statusBarToggleCapture:),
        status_bar_toggle_capture as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(statusBarAbout:),
        status_bar_about as unsafe extern "C-unwind" fn(_, _, _),
    );
    builder.add_method(
        sel!(statusBarQuit:),
        status_bar_quit as unsafe extern "C-unwind" fn(_, _, _),
    );
}

/// Initialize all instance variables to default values.
///
/// # Safety
/// The view must be a valid KeyshowView instance.
unsafe fn initialize_view_ivars(view: id) {
    for name in OBJECT_IVARS {
        (*view).store_ivar::<id>(&name.to_string_lossy(), nil);
    }
    for name in CARBON_IVARS {
        (*view).store_ivar::<*mut c_void>(&name.to_string_lossy(), std::ptr::null_mut());
    }
    for slot in SETTINGS_IVARS {
        (*view).store_ivar::<id>(slot, nil);
    }
}

// ============================================================================
// KeyshowView methods (extern "C-unwind" for Objective-C runtime)
// ============================================================================

/// Wrapper callback for reinstalling hotkeys after the settings panel closes.
unsafe fn reinstall_hotkeys_callback(view: id) {
    if let Err(e) = reinstall_hotkeys(view, hotkey_event_handler) {
        tracing::warn!(error = %e, "hotkey reinstall failed");
    }
}

/// Main loop tick: drain the event bus, then expire old chips.
unsafe extern "C-unwind" fn tick(this: &mut AnyObject, _cmd: Sel) {
    dispatch_events(
        this as *mut _ as id,
        open_settings_window,
        reinstall_hotkeys_callback,
    );
    prune_expired(Instant::now());
}

unsafe extern "C-unwind" fn draw_rect(_this: &AnyObject, _cmd: Sel, _rect: NSRect) {
    let (labels, settings) = with_state(|s| (overlay_labels(s), s.settings.clone()));
    if labels.is_empty() {
        return;
    }
    let layout = overlay_layout(&labels, &settings);
    draw_overlay(&layout, &labels, &settings);
}

// Top-left origin so the oldest chip sits at the top of a vertical stack
unsafe extern "C-unwind" fn is_flipped(_this: &AnyObject, _cmd: Sel) -> Bool {
    Bool::YES
}

// Drag the non-activating panel without a first activating click
unsafe extern "C-unwind" fn accepts_first_mouse(_this: &AnyObject, _cmd: Sel, _event: id) -> Bool {
    Bool::YES
}

// ===== Settings actions =====

unsafe fn ivar(this: &AnyObject, name: &str) -> id {
    *this.load_ivar::<id>(name)
}

unsafe extern "C-unwind" fn lang_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let idx: isize = msg_send![sender, indexOfSelectedItem];
    let lang = if idx == 1 { 1 } else { 0 };
    apply_settings_change(|s| s.lang = lang);

    // Rebuild every title in the new language
    build_settings_content(this as *mut _ as id);
    update_status_bar();
}

unsafe extern "C-unwind" fn keys_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let v: isize = msg_send![sender, integerValue];
    apply_settings_change(|s| s.max_visible_keys = v.clamp(0, i32::MAX as isize) as i32);
    let s = current_settings();
    set_text(ivar(this, "_valueKeys"), &s.max_visible_keys.to_string());
}

unsafe extern "C-unwind" fn duration_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let v: f64 = msg_send![sender, doubleValue];
    apply_settings_change(|s| s.key_display_duration = v);
    set_text(ivar(this, "_valueDuration"), &current_settings().duration_text());
}

unsafe extern "C-unwind" fn size_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let v: f64 = msg_send![sender, doubleValue];
    apply_settings_change(|s| s.font_size = v);
    set_text(ivar(this, "_valueSize"), &current_settings().font_size_text());
}

unsafe extern "C-unwind" fn opacity_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let v: f64 = msg_send![sender, doubleValue];
    apply_settings_change(|s| s.opacity = v);
    set_text(ivar(this, "_valueOpacity"), &current_settings().opacity_text());
}

unsafe extern "C-unwind" fn spacing_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    let v: f64 = msg_send![sender, doubleValue];
    apply_settings_change(|s| s.spacing = v);
    set_text(ivar(this, "_valueSpacing"), &current_settings().spacing_text());
}

unsafe extern "C-unwind" fn orientation_changed(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let idx: isize = msg_send![sender, indexOfSelectedItem];
    apply_settings_change(|s| s.orientation = Orientation::from_index(idx));
}

unsafe extern "C-unwind" fn case_style_changed(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let idx: isize = msg_send![sender, indexOfSelectedItem];
    apply_settings_change(|s| s.case_style = CaseStyle::from_index(idx));
}

unsafe extern "C-unwind" fn show_background_changed(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let state: isize = msg_send![sender, state];
    apply_settings_change(|s| s.show_background = state != 0);
}

// ===== Colour actions =====

/// Which colour a well/hex pair edits.
#[derive(Clone, Copy)]
enum ColorTarget {
    Background,
    Text,
}

impl ColorTarget {
    fn well_ivar(self) -> &'static str {
        match self {
            ColorTarget::Background => "_wellBackground",
            ColorTarget::Text => "_wellText",
        }
    }

    fn field_ivar(self) -> &'static str {
        match self {
            ColorTarget::Background => "_fieldBackgroundHex",
            ColorTarget::Text => "_fieldTextHex",
        }
    }

    fn current(self) -> Rgba {
        let s = current_settings();
        match self {
            ColorTarget::Background => s.key_background,
            ColorTarget::Text => s.key_text,
        }
    }

    unsafe fn apply(self, c: Rgba) {
        apply_settings_change(|s| match self {
            ColorTarget::Background => s.key_background = c,
            ColorTarget::Text => s.key_text = c,
        });
    }
}

unsafe fn color_well_changed(this: &AnyObject, sender: id, target: ColorTarget) {
    if let Some(c) = well_color(sender) {
        target.apply(c);
        set_text(ivar(this, target.field_ivar()), &target.current().to_hex());
    }
}

unsafe fn color_hex_changed(this: &AnyObject, sender: id, target: ColorTarget) {
    let s: id = msg_send![sender, stringValue];
    let parsed = string_from_nsstring(s).as_deref().and_then(Rgba::from_hex);
    match parsed {
        Some(c) => {
            target.apply(c);
            let well = ivar(this, target.well_ivar());
            if well != nil {
                let _: () = msg_send![well, setColor: ns_color(&c)];
            }
        }
        None => tracing::debug!("rejected malformed hex colour"),
    }
    // normalize the text, or restore it when invalid
    let _: () = msg_send![sender, setStringValue: nsstring_id(&target.current().to_hex())];
}

unsafe extern "C-unwind" fn background_color_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    color_well_changed(this, sender, ColorTarget::Background);
}

unsafe extern "C-unwind" fn background_hex_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    color_hex_changed(this, sender, ColorTarget::Background);
}

unsafe extern "C-unwind" fn text_color_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    color_well_changed(this, sender, ColorTarget::Text);
}

unsafe extern "C-unwind" fn text_hex_changed(this: &mut AnyObject, _cmd: Sel, sender: id) {
    color_hex_changed(this, sender, ColorTarget::Text);
}

// ===== Position actions =====

/// Visible frame of the screen chosen in the settings panel.
unsafe fn selected_screen_frame() -> Rect {
    let idx = with_state(|s| s.selected_screen);
    let screen = match all_screens().get(idx) {
        Some(&screen) => screen,
        None => main_screen(),
    };
    visible_frame(screen)
}

unsafe extern "C-unwind" fn screen_changed(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let idx: isize = msg_send![sender, indexOfSelectedItem];
    let Ok(idx) = usize::try_from(idx) else {
        return;
    };
    let Some(&screen) = all_screens().get(idx) else {
        return;
    };
    let to = visible_frame(screen);
    let position = current_settings().position;
    let from = overlay_screen_frame(position);
    with_state_mut(|s| s.selected_screen = idx);
    apply_settings_change(|s| s.position = move_to_screen(position, &from, &to));
}

unsafe extern "C-unwind" fn preset_position_action(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let tag: isize = msg_send![sender, tag];
    if let Some(preset) = ScreenPreset::from_tag(tag) {
        let frame = selected_screen_frame();
        apply_settings_change(|s| s.position = preset_position(preset, &frame));
    }
}

unsafe extern "C-unwind" fn nudge_position_action(_this: &mut AnyObject, _cmd: Sel, sender: id) {
    let tag: isize = msg_send![sender, tag];
    if let Some(n) = Nudge::from_tag(tag) {
        let frame = selected_screen_frame();
        let (dx, dy) = n.delta();
        apply_settings_change(|s| s.position = nudge(s.position, dx, dy, &frame));
    }
}

unsafe extern "C-unwind" fn close_settings(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    close_settings_window();
}

// Red close button of the settings window (the view is its delegate)
unsafe extern "C-unwind" fn window_will_close(_this: &mut AnyObject, _cmd: Sel, _note: id) {
    close_settings_window();
}

// ===== Status bar menu actions =====

unsafe extern "C-unwind" fn status_bar_settings(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::OpenSettings);
}

unsafe extern "C-unwind" fn status_bar_toggle_capture(
    _this: &mut AnyObject,
    _cmd: Sel,
    _sender: id,
) {
    publish(AppEvent::ToggleCapture);
}

unsafe extern "C-unwind" fn status_bar_about(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::ShowAbout);
}

unsafe extern "C-unwind" fn status_bar_quit(_this: &mut AnyObject, _cmd: Sel, _sender: id) {
    publish(AppEvent::RequestQuit);
}
