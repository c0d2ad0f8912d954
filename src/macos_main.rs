//! macOS-specific entry point and application logic.
//!
//! Builds the overlay panel, wires up key monitors, hotkeys and observers,
//! and runs the AppKit event loop. The view class lives in
//! platform/macos/ui/overlay/view.rs.

use keyshow::error::{AppError, Result};
use keyshow::layout::{default_overlay_center, Rect};
use keyshow::model::constants::PREF_POSITION_X;
use keyshow::platform::macos::app::{refresh_overlay, with_state_mut};
use keyshow::platform::macos::ffi::bridge::{
    autoreleasepool, get_class, id, msg_send, nil, nsstring_id, NSApp, ObjectExt, YES,
};
use keyshow::platform::macos::ffi::{
    all_screens, ensure_accessibility_prompt, main_screen, visible_frame,
};
use keyshow::platform::macos::input::{
    hotkey_event_handler, install_hotkeys, install_key_monitors, install_termination_observer,
    install_wakeup_space_observers, install_window_move_observer,
};
use keyshow::platform::macos::storage::{load_settings, prefs_contains};
use keyshow::platform::macos::ui::{
    create_overlay_window, install_status_bar, register_and_create_view,
};

use objc2::sel;

/// Interval of the main tick: drains the event bus and expires chips.
const TICK_INTERVAL: f64 = 0.05;

/// Main entry point for macOS.
pub fn run() -> Result<()> {
    // Event bus is already initialized by main()
    autoreleasepool(|| unsafe { run_app() })
}

unsafe fn run_app() -> Result<()> {
    // Global key monitors stay silent until Accessibility is granted
    if !ensure_accessibility_prompt() {
        tracing::warn!("accessibility access not granted; keys from other apps will not show");
    }

    let app = NSApp();
    // NSApplicationActivationPolicyAccessory = 1
    let _: bool = msg_send![app, setActivationPolicy: 1i64];

    if all_screens().is_empty() {
        return Err(AppError::NoScreens);
    }

    let mut settings = load_settings();
    if !prefs_contains(PREF_POSITION_X) {
        settings.position = default_overlay_center(&visible_frame(main_screen()));
    }
    tracing::info!(
        x = settings.position.x,
        y = settings.position.y,
        max_visible_keys = settings.max_visible_keys,
        "settings loaded"
    );

    // Real size is set by refresh_overlay once there is something to show
    let initial = Rect::new(settings.position.x, settings.position.y, 1.0, 1.0);
    let window = create_overlay_window(&initial);
    let view = register_and_create_view(window, 1.0, 1.0)?;

    with_state_mut(|s| {
        s.settings = settings;
        s.window = window;
        s.view = view;
    });

    create_timer(view, sel!(tick), TICK_INTERVAL);

    if let Err(e) = install_key_monitors(view) {
        tracing::warn!(error = %e, "key monitors unavailable");
    }
    if let Err(e) = install_hotkeys(view, hotkey_event_handler) {
        tracing::warn!(error = %e, "global hotkeys unavailable");
    }
    install_termination_observer(view);
    install_wakeup_space_observers();
    install_window_move_observer(window);

    // Status bar item in menu bar
    install_status_bar();

    refresh_overlay();
    tracing::info!("keyshow running");

    let _: () = msg_send![app, run];
    Ok(())
}

/// Create an AppKit timer that fires even during modal loops and menus.
///
/// # Safety
/// The target must be a valid KeyshowView that responds to the selector.
unsafe fn create_timer(target: id, selector: objc2::runtime::Sel, interval: f64) -> id {
    let prev: id = *(*target).load_ivar::<id>("_updateTimer");
    if prev != nil {
        let _: () = msg_send![prev, invalidate];
        (*target).store_ivar::<id>("_updateTimer", nil);
    }
    let timer: id = msg_send![
        get_class("NSTimer"),
        timerWithTimeInterval: interval,
        target: target,
        selector: selector,
        userInfo: nil,
        repeats: YES
    ];
    // CommonModes keeps the tick alive while the settings panel is modal
    let run_loop: id = msg_send![get_class("NSRunLoop"), currentRunLoop];
    let common_modes = nsstring_id("kCFRunLoopCommonModes");
    let _: () = msg_send![run_loop, addTimer: timer, forMode: common_modes];

    (*target).store_ivar::<id>("_updateTimer", timer);
    timer
}
