//! Positioning and chip layout math.
//!
//! Screen frames use Cocoa coordinates (origin bottom-left, y up). Chip
//! layout is computed in the overlay view's flipped coordinates (origin
//! top-left, y down) so the oldest chip lands at the top of a vertical stack.

use crate::model::constants::{NUDGE_STEP, SCREEN_PADDING};
use crate::model::Orientation;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    pub fn min_x(&self) -> f64 {
        self.origin.x
    }

    pub fn max_x(&self) -> f64 {
        self.origin.x + self.size.width
    }

    pub fn min_y(&self) -> f64 {
        self.origin.y
    }

    pub fn max_y(&self) -> f64 {
        self.origin.y + self.size.height
    }

    pub fn mid_x(&self) -> f64 {
        self.origin.x + self.size.width / 2.0
    }

    pub fn mid_y(&self) -> f64 {
        self.origin.y + self.size.height / 2.0
    }

    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.min_x() && p.x < self.max_x() && p.y >= self.min_y() && p.y < self.max_y()
    }
}

/// Clamp into [lo, hi], collapsing to `lo` when the range is inverted.
fn clamp_range(v: f64, lo: f64, hi: f64) -> f64 {
    v.min(hi.max(lo)).max(lo)
}

/// Clamp a point into `frame` inset by the screen padding.
pub fn clamp_to_frame(p: Point, frame: &Rect) -> Point {
    Point::new(
        clamp_range(
            p.x,
            frame.min_x() + SCREEN_PADDING,
            frame.max_x() - SCREEN_PADDING,
        ),
        clamp_range(
            p.y,
            frame.min_y() + SCREEN_PADDING,
            frame.max_y() - SCREEN_PADDING,
        ),
    )
}

/// Predefined overlay positions offered by the settings panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScreenPreset {
    TopLeft,
    TopRight,
    Center,
    BottomLeft,
    BottomRight,
}

impl ScreenPreset {
    pub const ALL: [ScreenPreset; 5] = [
        ScreenPreset::TopLeft,
        ScreenPreset::TopRight,
        ScreenPreset::Center,
        ScreenPreset::BottomLeft,
        ScreenPreset::BottomRight,
    ];

    /// Translation key for the button title.
    pub fn label_key(self) -> &'static str {
        match self {
            ScreenPreset::TopLeft => "Top Left",
            ScreenPreset::TopRight => "Top Right",
            ScreenPreset::Center => "Center",
            ScreenPreset::BottomLeft => "Bottom Left",
            ScreenPreset::BottomRight => "Bottom Right",
        }
    }

    /// Stable tag used on the settings buttons.
    pub fn tag(self) -> isize {
        match self {
            ScreenPreset::TopLeft => 0,
            ScreenPreset::TopRight => 1,
            ScreenPreset::Center => 2,
            ScreenPreset::BottomLeft => 3,
            ScreenPreset::BottomRight => 4,
        }
    }

    pub fn from_tag(tag: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|p| p.tag() == tag)
    }
}

/// Position for a preset inside the visible frame of a screen.
pub fn preset_position(preset: ScreenPreset, frame: &Rect) -> Point {
    let pad = SCREEN_PADDING;
    match preset {
        ScreenPreset::TopLeft => Point::new(frame.min_x() + pad, frame.max_y() - pad),
        ScreenPreset::TopRight => Point::new(frame.max_x() - pad, frame.max_y() - pad),
        ScreenPreset::Center => Point::new(frame.mid_x(), frame.mid_y()),
        ScreenPreset::BottomLeft => Point::new(frame.min_x() + pad, frame.min_y() + pad),
        ScreenPreset::BottomRight => Point::new(frame.max_x() - pad, frame.min_y() + pad),
    }
}

/// Nudge directions for the fine-tune buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Nudge {
    Left,
    Up,
    Down,
    Right,
}

impl Nudge {
    pub const ALL: [Nudge; 4] = [Nudge::Left, Nudge::Up, Nudge::Down, Nudge::Right];

    pub fn delta(self) -> (f64, f64) {
        match self {
            Nudge::Left => (-NUDGE_STEP, 0.0),
            Nudge::Up => (0.0, NUDGE_STEP),
            Nudge::Down => (0.0, -NUDGE_STEP),
            Nudge::Right => (NUDGE_STEP, 0.0),
        }
    }

    pub fn arrow(self) -> &'static str {
        match self {
            Nudge::Left => "←",
            Nudge::Up => "↑",
            Nudge::Down => "↓",
            Nudge::Right => "→",
        }
    }

    pub fn tag(self) -> isize {
        match self {
            Nudge::Left => 0,
            Nudge::Up => 1,
            Nudge::Down => 2,
            Nudge::Right => 3,
        }
    }

    pub fn from_tag(tag: isize) -> Option<Self> {
        Self::ALL.into_iter().find(|n| n.tag() == tag)
    }
}

/// Move `position` by (dx, dy), staying inside the padded frame.
pub fn nudge(position: Point, dx: f64, dy: f64, frame: &Rect) -> Point {
    clamp_to_frame(Point::new(position.x + dx, position.y + dy), frame)
}

/// Carry a position to another screen, keeping its relative location.
pub fn move_to_screen(position: Point, from: &Rect, to: &Rect) -> Point {
    let rel = |v: f64, min: f64, len: f64| if len > 0.0 { (v - min) / len } else { 0.5 };
    let rx = rel(position.x, from.min_x(), from.size.width);
    let ry = rel(position.y, from.min_y(), from.size.height);
    clamp_to_frame(
        Point::new(
            to.min_x() + to.size.width * rx,
            to.min_y() + to.size.height * ry,
        ),
        to,
    )
}

/// Window origin for an overlay centred on `center`, kept inside `frame`.
pub fn window_origin(center: Point, size: Size, frame: &Rect) -> Point {
    Point::new(
        clamp_range(
            center.x - size.width / 2.0,
            frame.min_x(),
            frame.max_x() - size.width,
        ),
        clamp_range(
            center.y - size.height / 2.0,
            frame.min_y(),
            frame.max_y() - size.height,
        ),
    )
}

/// First-run overlay centre: bottom-right corner of the visible frame.
pub fn default_overlay_center(frame: &Rect) -> Point {
    // 200x100 window at (maxX - 250, minY + 50)
    Point::new(frame.max_x() - 150.0, frame.min_y() + 100.0)
}

/// Result of stacking chips.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct StackLayout {
    /// Chip rectangles in flipped view coordinates, oldest first.
    pub chips: Vec<Rect>,
    /// Size of the whole content, padding included.
    pub content: Size,
}

/// Stack chips along the orientation's main axis, centred on the cross axis.
///
/// An empty input produces an empty layout with zero content size.
pub fn stack_chips(
    sizes: &[Size],
    orientation: Orientation,
    spacing: f64,
    padding: f64,
) -> StackLayout {
    if sizes.is_empty() {
        return StackLayout::default();
    }

    let gaps = spacing * (sizes.len() - 1) as f64;
    let mut chips = Vec::with_capacity(sizes.len());

    match orientation {
        Orientation::Vertical => {
            let cross = sizes.iter().map(|s| s.width).fold(0.0, f64::max);
            let mut y = padding;
            for s in sizes {
                let x = padding + (cross - s.width) / 2.0;
                chips.push(Rect::new(x, y, s.width, s.height));
                y += s.height + spacing;
            }
            let main: f64 = sizes.iter().map(|s| s.height).sum::<f64>() + gaps;
            StackLayout {
                chips,
                content: Size::new(cross + 2.0 * padding, main + 2.0 * padding),
            }
        }
        Orientation::Horizontal => {
            let cross = sizes.iter().map(|s| s.height).fold(0.0, f64::max);
            let mut x = padding;
            for s in sizes {
                let y = padding + (cross - s.height) / 2.0;
                chips.push(Rect::new(x, y, s.width, s.height));
                x += s.width + spacing;
            }
            let main: f64 = sizes.iter().map(|s| s.width).sum::<f64>() + gaps;
            StackLayout {
                chips,
                content: Size::new(main + 2.0 * padding, cross + 2.0 * padding),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen() -> Rect {
        Rect::new(0.0, 25.0, 1440.0, 850.0)
    }

    #[test]
    fn test_presets_respect_padding() {
        let f = screen();
        assert_eq!(
            preset_position(ScreenPreset::TopLeft, &f),
            Point::new(20.0, 855.0)
        );
        assert_eq!(
            preset_position(ScreenPreset::BottomRight, &f),
            Point::new(1420.0, 45.0)
        );
        assert_eq!(
            preset_position(ScreenPreset::Center, &f),
            Point::new(720.0, 450.0)
        );
    }

    #[test]
    fn test_tags_round_trip() {
        for p in ScreenPreset::ALL {
            assert_eq!(ScreenPreset::from_tag(p.tag()), Some(p));
        }
        for n in Nudge::ALL {
            assert_eq!(Nudge::from_tag(n.tag()), Some(n));
        }
        assert_eq!(ScreenPreset::from_tag(9), None);
    }

    #[test]
    fn test_clamp_range_with_inverted_bounds() {
        assert_eq!(clamp_range(5.0, 10.0, 0.0), 10.0);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(0.0, 0.0, 10.0, 10.0);
        assert!(r.contains(Point::new(0.0, 0.0)));
        assert!(!r.contains(Point::new(10.0, 5.0)));
    }
}
