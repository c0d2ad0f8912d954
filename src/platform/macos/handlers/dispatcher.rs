//! Event dispatcher for handling application events.
//!
//! The dispatcher receives events from the event bus and executes
//! the corresponding actions. It's called from the main loop timer
//! and processes all pending events in batch.
//!
//! # Architecture
//!
//! ```text
//! EventBus::drain() → dispatch_events() → action handlers
//! ```

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Instant;

use crate::events::{discard_stale, take_event, AppEvent};
use crate::platform::macos::app::{refresh_overlay, with_state_mut};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, NSApp, YES};
use crate::platform::macos::ui::update_status_bar;

/// Guard to prevent re-entrant dispatch_events calls.
///
/// The run loop keeps firing the timer while `runModalForWindow:` runs the
/// settings panel. Without this guard a second tick could take another
/// OpenSettings and stack a second panel on the first.
static DISPATCH_GUARD: AtomicBool = AtomicBool::new(false);

/// Callback type for reinstalling hotkeys.
pub type ReinstallHotkeysCallback = unsafe fn(id);

/// Callback type for running a modal window.
pub type ModalCallback = unsafe fn(id);

/// What a single event asks of the batch loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
struct Outcome {
    /// The overlay must be redrawn.
    redraw: bool,
    /// A modal session ran and has ended.
    modal: bool,
}

/// Dispatch all pending events from the global event bus.
///
/// # Arguments
///
/// * `view` - The overlay view for UI operations
/// * `open_settings_fn` - Function to run the settings panel
/// * `reinstall_hotkeys_fn` - Function to reinstall Carbon hotkeys
///
/// # Safety
///
/// Must be called from the main thread. The view pointer must be valid.
pub unsafe fn dispatch_events(
    view: id,
    open_settings_fn: ModalCallback,
    reinstall_hotkeys_fn: ReinstallHotkeysCallback,
) {
    if DISPATCH_GUARD
        .compare_exchange(false, true, Ordering::SeqCst, Ordering::SeqCst)
        .is_err()
    {
        return;
    }

    let mut redraw = false;
    while let Some(event) = take_event() {
        let outcome = dispatch_single_event(view, &event, open_settings_fn, reinstall_hotkeys_fn);
        redraw |= outcome.redraw;

        if outcome.modal {
            // Keys typed into the panel and repeated hotkey presses are
            // stale now; only a pending hotkey reinstall survives.
            let stale = discard_stale(take_event);
            if stale.discarded > 0 {
                tracing::debug!(discarded = stale.discarded, "dropped events queued during modal");
            }
            if stale.reinstall {
                reinstall_hotkeys_fn(view);
            }
            redraw = true;
            break;
        }
    }

    if redraw {
        refresh_overlay();
    }

    DISPATCH_GUARD.store(false, Ordering::SeqCst);
}

/// Dispatch a single event.
///
/// # Safety
///
/// Must be called from the main thread. The view pointer must be valid.
unsafe fn dispatch_single_event(
    view: id,
    event: &AppEvent,
    open_settings_fn: ModalCallback,
    reinstall_hotkeys_fn: ReinstallHotkeysCallback,
) -> Outcome {
    match event {
        AppEvent::KeyPressed(label) => {
            let pushed = with_state_mut(|s| {
                let duration = s.settings.display_duration();
                s.feed
                    .capture(s.capture_enabled, label.as_str(), Instant::now(), duration)
                    .is_some()
            });
            Outcome {
                redraw: pushed,
                modal: false,
            }
        }

        AppEvent::ToggleCapture => {
            let enabled = with_state_mut(|s| {
                s.capture_enabled = !s.capture_enabled;
                s.capture_enabled
            });
            tracing::info!(enabled, "key capture toggled");
            update_status_bar();
            Outcome::default()
        }

        AppEvent::OpenSettings => {
            tracing::debug!("{}", event.description());
            open_settings_fn(view);
            Outcome {
                redraw: true,
                modal: event.is_modal(),
            }
        }

        AppEvent::ShowAbout => {
            let app: id = NSApp();
            let _: () = msg_send![app, activateIgnoringOtherApps: YES];
            let _: () = msg_send![app, orderFrontStandardAboutPanel: nil];
            Outcome::default()
        }

        AppEvent::RequestQuit => {
            tracing::info!("quit requested");
            let app: id = NSApp();
            let _: () = msg_send![app, terminate: nil];
            Outcome::default()
        }

        AppEvent::SettingsClosed | AppEvent::ReinstallHotkeys => {
            reinstall_hotkeys_fn(view);
            Outcome::default()
        }
    }
}
