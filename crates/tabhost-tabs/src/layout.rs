//! Visible rectangle for the active content surface.

use tabhost_common::{Bounds, Size};

/// Convert a reported pixel value to a non-negative integer.
/// Negative, NaN and infinite inputs clamp to 0; fractions truncate.
pub fn clamp_px(value: f64) -> u32 {
    if !value.is_finite() || value <= 0.0 {
        0
    } else if value >= u32::MAX as f64 {
        u32::MAX
    } else {
        value.trunc() as u32
    }
}

/// Place the content surface below the chrome and right of the side panel.
/// Never produces negative dimensions.
pub fn compute_bounds(window: Size, chrome_height: u32, side_panel_width: u32) -> Bounds {
    let window_width = clamp_px(window.width);
    let window_height = clamp_px(window.height);
    Bounds {
        x: side_panel_width,
        y: chrome_height,
        width: window_width.saturating_sub(side_panel_width),
        height: window_height.saturating_sub(chrome_height),
    }
}

/// Chrome sizes reported by the UI. One per window, never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ChromeGeometry {
    top_chrome_height: u32,
    side_panel_width: u32,
}

impl ChromeGeometry {
    pub fn new(top_chrome_height: u32, side_panel_width: u32) -> Self {
        Self {
            top_chrome_height,
            side_panel_width,
        }
    }

    pub fn top_chrome_height(&self) -> u32 {
        self.top_chrome_height
    }

    pub fn side_panel_width(&self) -> u32 {
        self.side_panel_width
    }

    /// Returns the clamped value actually stored.
    pub fn report_chrome_height(&mut self, height: f64) -> u32 {
        self.top_chrome_height = clamp_px(height);
        self.top_chrome_height
    }

    pub fn report_side_panel_width(&mut self, width: f64) -> u32 {
        self.side_panel_width = clamp_px(width);
        self.side_panel_width
    }

    pub fn bounds_for(&self, window: Size) -> Bounds {
        compute_bounds(window, self.top_chrome_height, self.side_panel_width)
    }
}
