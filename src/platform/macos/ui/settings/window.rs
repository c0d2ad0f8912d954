//! Settings panel.
//!
//! A modal window with one control per display setting. Every control
//! targets the overlay view, whose action methods persist the change and
//! redraw the overlay immediately.

use std::sync::atomic::{AtomicBool, Ordering};

use block2::RcBlock;

use crate::events::{publish, AppEvent};
use crate::keys::{KC_ESCAPE, KC_KEYPAD_ENTER, KC_RETURN};
use crate::layout::{Nudge, ScreenPreset};
use crate::model::constants::*;
use crate::model::{CaseStyle, DisplaySettings, Orientation, Rgba};
use crate::platform::macos::app::{
    apply_settings_change, current_settings, refresh_overlay, with_state, with_state_mut,
};
use crate::platform::macos::ffi::bridge::{
    get_class, id, msg_send, nil, nsstring_id, sel, string_from_nsstring, NSApp, NSPoint, NSRect,
    NSSize, NSString, ObjectExt, Sel, NO, YES,
};
use crate::platform::macos::ffi::{
    all_screens, mouse_location, ns_color, screen_for_point, screen_index_for_point,
    MODAL_PANEL_WINDOW_LEVEL,
};
use crate::tr_key;

/// Guard to prevent multiple settings windows
static SETTINGS_OPENING: AtomicBool = AtomicBool::new(false);

const WIDTH: f64 = 580.0;
const HEIGHT: f64 = 620.0;
const ROW: f64 = 34.0;
const LABEL_X: f64 = 20.0;
const LABEL_W: f64 = 150.0;
const CONTROL_X: f64 = 180.0;
const VALUE_W: f64 = 60.0;
const SLIDER_X: f64 = CONTROL_X + VALUE_W + 10.0;
const SLIDER_W: f64 = 300.0;

/// View ivars holding the controls that are updated after creation.
pub const SETTINGS_IVARS: [&str; 10] = [
    "_settingsWindow",
    "_valueKeys",
    "_valueDuration",
    "_valueSize",
    "_valueOpacity",
    "_valueSpacing",
    "_wellBackground",
    "_fieldBackgroundHex",
    "_wellText",
    "_fieldTextHex",
];

/// Top of row `n`, counted from the top of the content view.
fn row_y(n: usize) -> f64 {
    HEIGHT - 40.0 - ROW * n as f64
}

fn frame(x: f64, y: f64, w: f64, h: f64) -> NSRect {
    NSRect::new(NSPoint::new(x, y), NSSize::new(w, h))
}

unsafe fn add(content: id, control: id) -> id {
    let _: () = msg_send![content, addSubview: control];
    control
}

unsafe fn label(content: id, x: f64, y: f64, w: f64, text: &str) -> id {
    let lbl: id = msg_send![get_class("NSTextField"), alloc];
    let lbl: id = msg_send![lbl, initWithFrame: frame(x, y, w, 20.0)];
    let _: () = msg_send![lbl, setBezeled: NO];
    let _: () = msg_send![lbl, setDrawsBackground: NO];
    let _: () = msg_send![lbl, setEditable: NO];
    let _: () = msg_send![lbl, setSelectable: NO];
    let _: () = msg_send![lbl, setStringValue: nsstring_id(text)];
    add(content, lbl)
}

unsafe fn row_label(content: id, row: usize, key: &str, es: bool) -> id {
    label(content, LABEL_X, row_y(row), LABEL_W, &tr_key(key, es))
}

unsafe fn popup(content: id, view: id, row: usize, items: &[String], selected: isize, action: Sel) -> id {
    let p: id = msg_send![get_class("NSPopUpButton"), alloc];
    let p: id = msg_send![p, initWithFrame: frame(CONTROL_X, row_y(row) - 4.0, 200.0, 26.0)];
    for item in items {
        let _: () = msg_send![p, addItemWithTitle: nsstring_id(item)];
    }
    let _: () = msg_send![p, selectItemAtIndex: selected];
    let _: () = msg_send![p, setTarget: view];
    let _: () = msg_send![p, setAction: action];
    add(content, p)
}

unsafe fn slider(content: id, view: id, row: usize, range: (f64, f64), value: f64, action: Sel) -> id {
    let s: id = msg_send![get_class("NSSlider"), alloc];
    let s: id = msg_send![s, initWithFrame: frame(SLIDER_X, row_y(row) - 4.0, SLIDER_W, 24.0)];
    let _: () = msg_send![s, setMinValue: range.0];
    let _: () = msg_send![s, setMaxValue: range.1];
    let _: () = msg_send![s, setDoubleValue: value];
    let _: () = msg_send![s, setTarget: view];
    let _: () = msg_send![s, setAction: action];
    let _: () = msg_send![s, setContinuous: YES];
    add(content, s)
}

unsafe fn button(content: id, view: id, rect: NSRect, title: &str, action: Sel, tag: isize) -> id {
    let b: id = msg_send![get_class("NSButton"), alloc];
    let b: id = msg_send![b, initWithFrame: rect];
    let _: () = msg_send![b, setTitle: nsstring_id(title)];
    // NSBezelStyleRounded
    let _: () = msg_send![b, setBezelStyle: 1u64];
    let _: () = msg_send![b, setTag: tag];
    let _: () = msg_send![b, setTarget: view];
    let _: () = msg_send![b, setAction: action];
    add(content, b)
}

/// Colour well plus hex field on one row; returns (well, field).
unsafe fn color_row(content: id, view: id, row: usize, color: &Rgba, actions: (Sel, Sel)) -> (id, id) {
    let well: id = msg_send![get_class("NSColorWell"), alloc];
    let well: id = msg_send![well, initWithFrame: frame(CONTROL_X, row_y(row) - 4.0, 50.0, 25.0)];
    let _: () = msg_send![well, setColor: ns_color(color)];
    let _: () = msg_send![well, setTarget: view];
    let _: () = msg_send![well, setAction: actions.0];

    let field: id = msg_send![get_class("NSTextField"), alloc];
    let field: id = msg_send![field, initWithFrame: frame(CONTROL_X + 60.0, row_y(row) - 2.0, 110.0, 22.0)];
    let _: () = msg_send![field, setBezeled: YES];
    let _: () = msg_send![field, setDrawsBackground: YES];
    let _: () = msg_send![field, setEditable: YES];
    let _: () = msg_send![field, setSelectable: YES];
    let _: () = msg_send![field, setStringValue: nsstring_id(&color.to_hex())];
    let _: () = msg_send![field, setTarget: view];
    let _: () = msg_send![field, setAction: actions.1];

    (add(content, well), add(content, field))
}

/// Read an NSColorWell's colour as sRGB components.
///
/// # Safety
/// `well` must be a valid NSColorWell.
pub unsafe fn well_color(well: id) -> Option<Rgba> {
    let color: id = msg_send![well, color];
    if color == nil {
        return None;
    }
    let srgb_space: id = msg_send![get_class("NSColorSpace"), sRGBColorSpace];
    let rgb: id = msg_send![color, colorUsingColorSpace: srgb_space];
    if rgb == nil {
        return None;
    }
    let r: f64 = msg_send![rgb, redComponent];
    let g: f64 = msg_send![rgb, greenComponent];
    let b: f64 = msg_send![rgb, blueComponent];
    let a: f64 = msg_send![rgb, alphaComponent];
    Some(Rgba::new(r, g, b, a))
}

/// Set the text of a label if it exists.
///
/// # Safety
/// `field` must be nil or a valid NSTextField.
pub unsafe fn set_text(field: id, text: &str) {
    if field != nil {
        let s = NSString::from_str(text);
        let _: () = msg_send![field, setStringValue: &*s];
    }
}

/// Create (or recreate) every control in the settings window.
///
/// Called on open and again after a language change, so all titles are
/// rebuilt from the current language.
///
/// # Safety
/// - `view` must be a valid, non-null pointer to the overlay view.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn build_settings_content(view: id) {
    let settings_window: id = *(*view).load_ivar::<id>("_settingsWindow");
    if settings_window == nil {
        return;
    }
    let settings: DisplaySettings = current_settings();
    let es = settings.is_spanish();

    let _: () = msg_send![settings_window, setTitle: nsstring_id(&tr_key("Settings", es))];

    let content: id = msg_send![settings_window, contentView];
    let empty: id = msg_send![get_class("NSArray"), array];
    let _: () = msg_send![content, setSubviews: empty];

    // Language
    row_label(content, 0, "Language", es);
    let langs = [tr_key("English", es).into_owned(), tr_key("Spanish", es).into_owned()];
    popup(content, view, 0, &langs, settings.lang as isize, sel!(langChanged:));

    // Keys shown (stepper)
    row_label(content, 1, "Keys shown", es);
    let value_keys = label(
        content,
        CONTROL_X,
        row_y(1),
        VALUE_W,
        &settings.max_visible_keys.to_string(),
    );
    let stepper: id = msg_send![get_class("NSStepper"), alloc];
    let stepper: id = msg_send![stepper, initWithFrame: frame(SLIDER_X, row_y(1) - 2.0, 20.0, 24.0)];
    let _: () = msg_send![stepper, setMinValue: MIN_VISIBLE_KEYS as f64];
    let _: () = msg_send![stepper, setMaxValue: MAX_VISIBLE_KEYS_LIMIT as f64];
    let _: () = msg_send![stepper, setIncrement: 1.0f64];
    let _: () = msg_send![stepper, setValueWraps: NO];
    let _: () = msg_send![stepper, setIntegerValue: settings.max_visible_keys as isize];
    let _: () = msg_send![stepper, setTarget: view];
    let _: () = msg_send![stepper, setAction: sel!(keysChanged:)];
    add(content, stepper);

    // Sliders with their value labels
    let sliders: [(usize, &str, (f64, f64), f64, String, Sel); 4] = [
        (
            2,
            "Duration (s)",
            (MIN_DURATION, MAX_DURATION),
            settings.key_display_duration,
            settings.duration_text(),
            sel!(durationChanged:),
        ),
        (
            3,
            "Size",
            (MIN_FONT_SIZE, MAX_FONT_SIZE),
            settings.font_size,
            settings.font_size_text(),
            sel!(sizeChanged:),
        ),
        (
            4,
            "Opacity (%)",
            (MIN_OPACITY, MAX_OPACITY),
            settings.opacity,
            settings.opacity_text(),
            sel!(opacityChanged:),
        ),
        (
            5,
            "Spacing",
            (MIN_SPACING, MAX_SPACING),
            settings.spacing,
            settings.spacing_text(),
            sel!(spacingChanged:),
        ),
    ];
    let mut value_labels = Vec::with_capacity(sliders.len());
    for (row, key, range, value, text, action) in sliders {
        row_label(content, row, key, es);
        value_labels.push(label(content, CONTROL_X, row_y(row), VALUE_W, &text));
        slider(content, view, row, range, value, action);
    }

    // Orientation
    row_label(content, 6, "Orientation", es);
    let orientations: Vec<String> = Orientation::ALL.iter().map(|o| o.label(es)).collect();
    popup(
        content,
        view,
        6,
        &orientations,
        settings.orientation.index(),
        sel!(orientationChanged:),
    );

    // Colours
    row_label(content, 7, "Background", es);
    let (well_bg, field_bg) = color_row(
        content,
        view,
        7,
        &settings.key_background,
        (sel!(backgroundColorChanged:), sel!(backgroundHexChanged:)),
    );
    row_label(content, 8, "Text color", es);
    let (well_text, field_text) = color_row(
        content,
        view,
        8,
        &settings.key_text,
        (sel!(textColorChanged:), sel!(textHexChanged:)),
    );

    // Show background checkbox
    let check: id = msg_send![get_class("NSButton"), alloc];
    let check: id = msg_send![check, initWithFrame: frame(CONTROL_X, row_y(9) - 2.0, 250.0, 22.0)];
    // NSButtonTypeSwitch
    let _: () = msg_send![check, setButtonType: 3u64];
    let _: () = msg_send![check, setTitle: nsstring_id(&tr_key("Show background", es))];
    let _: () = msg_send![check, setState: if settings.show_background { 1isize } else { 0isize }];
    let _: () = msg_send![check, setTarget: view];
    let _: () = msg_send![check, setAction: sel!(showBackgroundChanged:)];
    add(content, check);

    // Case style
    row_label(content, 10, "Text style", es);
    let styles: Vec<String> = CaseStyle::ALL.iter().map(|c| c.label(es)).collect();
    popup(
        content,
        view,
        10,
        &styles,
        settings.case_style.index(),
        sel!(caseStyleChanged:),
    );

    // Screen selector, only with more than one screen
    let screens = all_screens();
    if screens.len() > 1 {
        row_label(content, 11, "Screen", es);
        let names: Vec<String> = (1..=screens.len())
            .map(|i| format!("{} {}", tr_key("Screen", es), i))
            .collect();
        let selected = with_state(|s| s.selected_screen);
        popup(content, view, 11, &names, selected as isize, sel!(screenChanged:));
    }

    // Preset positions: three on the first row, two on the second
    row_label(content, 12, "Position", es);
    for (i, preset) in ScreenPreset::ALL.iter().enumerate() {
        let (row, col) = if i < 3 { (12, i) } else { (13, i - 3) };
        let rect = frame(
            CONTROL_X + col as f64 * 128.0,
            row_y(row) - 6.0,
            124.0,
            28.0,
        );
        button(
            content,
            view,
            rect,
            &tr_key(preset.label_key(), es),
            sel!(presetPosition:),
            preset.tag(),
        );
    }

    // Fine tune
    row_label(content, 14, "Fine tune", es);
    for (i, n) in Nudge::ALL.iter().enumerate() {
        let rect = frame(CONTROL_X + i as f64 * 48.0, row_y(14) - 6.0, 44.0, 28.0);
        button(content, view, rect, n.arrow(), sel!(nudgePosition:), n.tag());
    }

    // Close button; Return activates it
    let btn_close = button(
        content,
        view,
        frame(WIDTH - 110.0, 15.0, 90.0, 28.0),
        &tr_key("Close", es),
        sel!(closeSettings:),
        0,
    );
    let _: () = msg_send![btn_close, setKeyEquivalent: nsstring_id("\r")];

    (*view).store_ivar::<id>("_valueKeys", value_keys);
    (*view).store_ivar::<id>("_valueDuration", value_labels[0]);
    (*view).store_ivar::<id>("_valueSize", value_labels[1]);
    (*view).store_ivar::<id>("_valueOpacity", value_labels[2]);
    (*view).store_ivar::<id>("_valueSpacing", value_labels[3]);
    (*view).store_ivar::<id>("_wellBackground", well_bg);
    (*view).store_ivar::<id>("_fieldBackgroundHex", field_bg);
    (*view).store_ivar::<id>("_wellText", well_text);
    (*view).store_ivar::<id>("_fieldTextHex", field_text);
}

/// Apply hex text that was typed but never confirmed with Return.
unsafe fn commit_hex_fields(view: id) {
    let read = |slot: &str| -> Option<Rgba> {
        let field: id = *(*view).load_ivar::<id>(slot);
        if field == nil {
            return None;
        }
        let s: id = msg_send![field, stringValue];
        string_from_nsstring(s).as_deref().and_then(Rgba::from_hex)
    };
    let bg = read("_fieldBackgroundHex");
    let text = read("_fieldTextHex");
    let current = current_settings();
    if bg.is_some_and(|c| c != current.key_background)
        || text.is_some_and(|c| c != current.key_text)
    {
        apply_settings_change(|s| {
            if let Some(c) = bg {
                s.key_background = c;
            }
            if let Some(c) = text {
                s.key_text = c;
            }
        });
    }
}

/// Open the settings window and run it modally.
///
/// While the panel is open the overlay shows preview chips. When it closes,
/// publishes `AppEvent::SettingsClosed`; the dispatcher handles hotkey
/// reinstallation.
///
/// # Safety
/// - `view` must be a valid, non-null pointer to the overlay view.
/// - Must be called from main thread with valid autorelease pool.
pub unsafe fn open_settings_window(view: id) {
    if SETTINGS_OPENING
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }
    tracing::info!("opening settings");

    let position = current_settings().position;
    let selected = screen_index_for_point(position).unwrap_or(0);
    with_state_mut(|s| {
        s.settings_open = true;
        s.selected_screen = selected;
    });
    refresh_overlay();

    // NSTitledWindowMask (1) | NSClosableWindowMask (2)
    let style: u64 = 1 | 2;
    let settings: id = msg_send![get_class("NSWindow"), alloc];
    let settings: id = msg_send![
        settings,
        initWithContentRect: frame(0.0, 0.0, WIDTH, HEIGHT),
        styleMask: style,
        backing: 2u64,  // NSBackingStoreBuffered
        defer: NO
    ];
    let _: () = msg_send![settings, setReleasedWhenClosed: NO];
    let _: () = msg_send![settings, setLevel: MODAL_PANEL_WINDOW_LEVEL];
    // CanJoinAllSpaces (1) + FullScreenAuxiliary (256)
    let _: () = msg_send![settings, setCollectionBehavior: 257u64];
    // the view stops the modal from windowWillClose:
    let _: () = msg_send![settings, setDelegate: view];

    // Centre on the screen under the cursor
    let screen = screen_for_point(mouse_location());
    let screen_frame: NSRect = msg_send![screen, frame];
    let origin = NSPoint::new(
        screen_frame.origin.x + (screen_frame.size.width - WIDTH) / 2.0,
        screen_frame.origin.y + (screen_frame.size.height - HEIGHT) / 2.0,
    );
    let _: () = msg_send![settings, setFrameOrigin: origin];

    (*view).store_ivar::<id>("_settingsWindow", settings);
    build_settings_content(view);

    // Alpha in the colour panel, for the chip background
    let panel: id = msg_send![get_class("NSColorPanel"), sharedColorPanel];
    let _: () = msg_send![panel, setShowsAlpha: YES];

    // Local monitor for ESC/Enter to close modal
    const KEY_DOWN_MASK: u64 = 1 << 10;
    let key_block = RcBlock::new(move |event: id| -> id {
        unsafe {
            let keycode: u16 = msg_send![event, keyCode];
            if matches!(keycode, KC_ESCAPE | KC_RETURN | KC_KEYPAD_ENTER) {
                let _: () = msg_send![NSApp(), stopModal];
                return nil;
            }
        }
        event
    });
    let key_mon: id = msg_send![
        get_class("NSEvent"),
        addLocalMonitorForEventsMatchingMask: KEY_DOWN_MASK,
        handler: &*key_block
    ];

    let app: id = NSApp();
    let _: () = msg_send![app, activateIgnoringOtherApps: YES];
    let _: () = msg_send![settings, makeKeyAndOrderFront: nil];

    let _modal_result: isize = msg_send![app, runModalForWindow: settings];

    // Modal ended - clean up
    if key_mon != nil {
        let _: () = msg_send![get_class("NSEvent"), removeMonitor: key_mon];
    }
    commit_hex_fields(view);
    let _: () = msg_send![settings, setDelegate: nil];
    let _: () = msg_send![settings, orderOut: nil];

    for slot in SETTINGS_IVARS {
        (*view).store_ivar::<id>(slot, nil);
    }
    let _: () = msg_send![settings, release];

    with_state_mut(|s| s.settings_open = false);
    refresh_overlay();

    SETTINGS_OPENING.store(false, Ordering::SeqCst);
    tracing::info!("settings closed");

    publish(AppEvent::SettingsClosed);
}

/// Close the settings window by stopping the modal.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn close_settings_window() {
    // cleanup happens in open_settings_window after runModalForWindow returns
    let _: () = msg_send![NSApp(), stopModal];
}
