//! Coordinate conversion between layout bounds and wry rects.

use tabhost_common::Bounds;

/// Convert integer layout `Bounds` (logical pixels) to a wry `Rect`.
pub fn bounds_to_wry(bounds: &Bounds) -> wry::Rect {
    wry::Rect {
        position: wry::dpi::Position::Logical(wry::dpi::LogicalPosition::new(
            bounds.x as f64,
            bounds.y as f64,
        )),
        size: wry::dpi::Size::Logical(wry::dpi::LogicalSize::new(
            bounds.width as f64,
            bounds.height as f64,
        )),
    }
}
