//! Tests for overlay geometry: positions, clamping and chip stacking.

use keyshow::layout::*;
use keyshow::model::constants::{NUDGE_STEP, SCREEN_PADDING};
use keyshow::model::Orientation;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < 1e-6
}

fn main_frame() -> Rect {
    Rect::new(0.0, 0.0, 1440.0, 875.0)
}

fn side_frame() -> Rect {
    Rect::new(1440.0, 0.0, 1920.0, 1080.0)
}

// === Clamping ===

#[test]
fn clamp_to_frame_keeps_inner_point() {
    let p = Point::new(500.0, 400.0);
    assert_eq!(clamp_to_frame(p, &main_frame()), p);
}

#[test]
fn clamp_to_frame_respects_padding() {
    let p = clamp_to_frame(Point::new(-50.0, 2000.0), &main_frame());
    assert_eq!(p, Point::new(SCREEN_PADDING, 875.0 - SCREEN_PADDING));
}

// === Presets ===

#[test]
fn presets_on_secondary_screen_use_its_frame() {
    let f = side_frame();
    assert_eq!(
        preset_position(ScreenPreset::TopLeft, &f),
        Point::new(1460.0, 1060.0)
    );
    assert_eq!(
        preset_position(ScreenPreset::BottomLeft, &f),
        Point::new(1460.0, 20.0)
    );
    assert_eq!(
        preset_position(ScreenPreset::Center, &f),
        Point::new(2400.0, 540.0)
    );
}

#[test]
fn preset_labels_are_translation_keys() {
    assert_eq!(ScreenPreset::TopRight.label_key(), "Top Right");
    assert_eq!(ScreenPreset::BottomRight.label_key(), "Bottom Right");
}

// === Nudge ===

#[test]
fn nudge_moves_by_step() {
    let start = Point::new(500.0, 400.0);
    let (dx, dy) = Nudge::Up.delta();
    assert_eq!(
        nudge(start, dx, dy, &main_frame()),
        Point::new(500.0, 400.0 + NUDGE_STEP)
    );
    let (dx, dy) = Nudge::Left.delta();
    assert_eq!(
        nudge(start, dx, dy, &main_frame()),
        Point::new(500.0 - NUDGE_STEP, 400.0)
    );
}

#[test]
fn nudge_stops_at_screen_edge() {
    let start = Point::new(SCREEN_PADDING + 5.0, 400.0);
    let (dx, dy) = Nudge::Left.delta();
    assert_eq!(
        nudge(start, dx, dy, &main_frame()),
        Point::new(SCREEN_PADDING, 400.0)
    );
}

#[test]
fn nudge_arrows() {
    let arrows: Vec<&str> = Nudge::ALL.iter().map(|n| n.arrow()).collect();
    assert_eq!(arrows, vec!["←", "↑", "↓", "→"]);
}

// === Moving Between Screens ===

#[test]
fn move_to_screen_keeps_relative_location() {
    let p = move_to_screen(Point::new(720.0, 437.5), &main_frame(), &side_frame());
    assert!(approx_eq(p.x, 2400.0));
    assert!(approx_eq(p.y, 540.0));
}

#[test]
fn move_to_screen_from_empty_frame_centres() {
    let empty = Rect::new(0.0, 0.0, 0.0, 0.0);
    let p = move_to_screen(Point::new(10.0, 10.0), &empty, &side_frame());
    assert_eq!(p, Point::new(2400.0, 540.0));
}

// === Window Origin ===

#[test]
fn window_origin_centres_window() {
    let o = window_origin(Point::new(700.0, 400.0), Size::new(100.0, 60.0), &main_frame());
    assert_eq!(o, Point::new(650.0, 370.0));
}

#[test]
fn window_origin_stays_on_screen() {
    let f = main_frame();
    let size = Size::new(200.0, 100.0);
    let o = window_origin(Point::new(1430.0, 5.0), size, &f);
    assert_eq!(o, Point::new(1240.0, 0.0));
}

#[test]
fn default_center_is_bottom_right() {
    let c = default_overlay_center(&main_frame());
    assert_eq!(c, Point::new(1290.0, 100.0));
}

// === Stacking ===

#[test]
fn stack_empty_is_empty() {
    let l = stack_chips(&[], Orientation::Vertical, 4.0, 16.0);
    assert!(l.chips.is_empty());
    assert_eq!(l.content, Size::new(0.0, 0.0));
}

#[test]
fn stack_vertical_centres_narrow_chips() {
    let sizes = [Size::new(30.0, 20.0), Size::new(60.0, 20.0)];
    let l = stack_chips(&sizes, Orientation::Vertical, 4.0, 16.0);
    assert_eq!(l.chips[0], Rect::new(31.0, 16.0, 30.0, 20.0));
    assert_eq!(l.chips[1], Rect::new(16.0, 40.0, 60.0, 20.0));
    assert_eq!(l.content, Size::new(92.0, 76.0));
}

#[test]
fn stack_horizontal_runs_left_to_right() {
    let sizes = [Size::new(30.0, 20.0), Size::new(45.0, 24.0), Size::new(60.0, 24.0)];
    let l = stack_chips(&sizes, Orientation::Horizontal, 4.0, 16.0);
    assert_eq!(l.chips[0], Rect::new(16.0, 18.0, 30.0, 20.0));
    assert_eq!(l.chips[1], Rect::new(50.0, 16.0, 45.0, 24.0));
    assert_eq!(l.chips[2], Rect::new(99.0, 16.0, 60.0, 24.0));
    assert_eq!(l.content, Size::new(175.0, 56.0));
}

#[test]
fn stack_zero_spacing_chips_touch() {
    let sizes = [Size::new(30.0, 20.0), Size::new(30.0, 20.0)];
    let l = stack_chips(&sizes, Orientation::Vertical, 0.0, 0.0);
    assert!(approx_eq(l.chips[0].max_y(), l.chips[1].min_y()));
}
