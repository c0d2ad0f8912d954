//! Global application helpers.
//!
//! Functions used across input, handlers and ui to keep the overlay
//! window in sync with the runtime state.

use std::time::Instant;

use crate::keys::apply_case_style;
use crate::layout::{stack_chips, window_origin, Point, Rect, Size, StackLayout};
use crate::model::constants::CONTAINER_PADDING;
use crate::model::{preview_labels, DisplaySettings};
use crate::platform::macos::ffi::bridge::{id, msg_send, nil, YES};
use crate::platform::macos::ffi::{ns_from_rect, screen_for_point, visible_frame};
use crate::platform::macos::storage::save_settings;
use crate::platform::macos::ui::overlay::measure_chip;

use super::state::{with_state, with_state_mut, RuntimeState};

/// Labels the overlay should show right now, oldest first.
///
/// Preview chips while the settings panel is open, otherwise the visible
/// suffix of the feed with the case style applied.
pub fn overlay_labels(state: &RuntimeState) -> Vec<String> {
    let settings = &state.settings;
    if state.settings_open {
        return preview_labels(settings.visible_count(), settings.is_spanish());
    }
    state
        .feed
        .visible(settings.visible_count())
        .iter()
        .map(|p| apply_case_style(&p.label, settings.case_style))
        .collect()
}

/// Chip layout for `labels` under `settings`, in flipped view coordinates.
///
/// # Safety
/// Must be called from main thread (measures text with AppKit).
pub unsafe fn overlay_layout(labels: &[String], settings: &DisplaySettings) -> StackLayout {
    let sizes: Vec<Size> = labels
        .iter()
        .map(|l| measure_chip(l, settings.font_size))
        .collect();
    stack_chips(&sizes, settings.orientation, settings.spacing, CONTAINER_PADDING)
}

/// Visible frame of the screen the overlay centre is on.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn overlay_screen_frame(center: Point) -> Rect {
    visible_frame(screen_for_point(center))
}

/// Resize, place and redraw the overlay window from the current state.
///
/// The window is hidden when there is nothing to show.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn refresh_overlay() {
    let (window, view, labels, settings) = with_state(|s| {
        (s.window, s.view, overlay_labels(s), s.settings.clone())
    });
    if window == nil {
        return;
    }

    let _: () = msg_send![window, setAlphaValue: settings.opacity];

    if labels.is_empty() {
        let _: () = msg_send![window, orderOut: nil];
        return;
    }

    let layout = overlay_layout(&labels, &settings);
    let frame = overlay_screen_frame(settings.position);
    let origin = window_origin(settings.position, layout.content, &frame);
    let rect = Rect {
        origin,
        size: layout.content,
    };

    set_window_frame(window, &rect);
    let _: () = msg_send![view, setNeedsDisplay: YES];
    let _: () = msg_send![window, orderFrontRegardless];
}

unsafe fn set_window_frame(window: id, rect: &Rect) {
    with_state_mut(|s| s.repositioning = true);
    let _: () = msg_send![window, setFrame: ns_from_rect(rect), display: YES];
    with_state_mut(|s| s.repositioning = false);
}

/// Mutate the settings, validate, persist and redraw.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn apply_settings_change(f: impl FnOnce(&mut DisplaySettings)) {
    let settings = with_state_mut(|s| {
        f(&mut s.settings);
        s.settings.validate();
        s.settings.clone()
    });
    save_settings(&settings);
    refresh_overlay();
}

/// Drop expired chips and redraw if anything changed.
///
/// # Safety
/// Must be called from main thread with valid autorelease pool.
pub unsafe fn prune_expired(now: Instant) {
    let removed = with_state_mut(|s| s.feed.prune(now));
    if removed > 0 {
        tracing::trace!(removed, "expired key chips");
        refresh_overlay();
    }
}
