//! Geometry snapshot - one element's screen rectangle at one instant
//!
//! Captured from `getBoundingClientRect` after layout commit. Never
//! updated in place: a new engage captures a new snapshot.

/// Screen-space rectangle in CSS pixels
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeometrySnapshot {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl GeometrySnapshot {
    /// What an unmounted or not-yet-laid-out element measures as.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    pub fn from_dom_rect(rect: &web_sys::DomRect) -> Self {
        Self::new(rect.x(), rect.y(), rect.width(), rect.height())
    }

    /// Nothing visible to line up.
    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}
