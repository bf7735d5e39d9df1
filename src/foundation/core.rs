use kurbo::{Point, Size};

/// Resolved canvas size in pixels.
///
/// Only produced by the resolution catalog (see [`crate::get_dimensions`]), so every value
/// in circulation has non-zero sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, serde::Serialize)]
pub struct CanvasDimensions {
    width: u32,
    height: u32,
}

impl CanvasDimensions {
    pub(crate) const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Width in pixels.
    pub fn width(self) -> u32 {
        self.width
    }

    /// Height in pixels.
    pub fn height(self) -> u32 {
        self.height
    }

    /// The same canvas with width and height exchanged.
    pub fn swapped(self) -> Self {
        Self::new(self.height, self.width)
    }

    /// `true` when the canvas is strictly taller than wide.
    pub fn is_portrait(self) -> bool {
        self.height > self.width
    }

    pub(crate) fn size(self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Per-axis mapping from an old canvas size to a new one.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ScaleFactors {
    old: Size,
    new: Size,
}

impl ScaleFactors {
    /// Build the mapping between two canvas sizes given as raw pixel extents.
    ///
    /// # Panics
    ///
    /// Panics when either old side is zero, negative or not finite. Old dimensions always
    /// come from the resolution catalog, so this is a caller bug.
    pub fn between(old_w: f64, old_h: f64, new_w: f64, new_h: f64) -> Self {
        assert!(
            old_w.is_finite() && old_h.is_finite() && old_w > 0.0 && old_h > 0.0,
            "old canvas dimensions must be positive, got {old_w}x{old_h}"
        );
        assert!(
            new_w.is_finite() && new_h.is_finite(),
            "new canvas dimensions must be finite, got {new_w}x{new_h}"
        );
        Self {
            old: Size::new(old_w, old_h),
            new: Size::new(new_w, new_h),
        }
    }

    /// Mapping between two catalog-resolved canvases.
    pub fn from_canvases(old: CanvasDimensions, new: CanvasDimensions) -> Self {
        let (old, new) = (old.size(), new.size());
        Self::between(old.width, old.height, new.width, new.height)
    }

    /// `true` when old and new sizes are identical.
    pub fn is_identity(self) -> bool {
        self.old == self.new
    }

    /// Horizontal factor `new_w / old_w`.
    pub fn x(self) -> f64 {
        self.new.width / self.old.width
    }

    /// Vertical factor `new_h / old_h`.
    pub fn y(self) -> f64 {
        self.new.height / self.old.height
    }

    /// Map a canvas-relative point onto the new canvas.
    ///
    /// Multiplies before dividing so that exact ratios (960 * 1280 / 1920) stay exact. An
    /// axis whose extent did not change is returned bit-for-bit.
    pub fn apply(self, p: Point) -> Point {
        Point::new(
            rescale(p.x, self.old.width, self.new.width),
            rescale(p.y, self.old.height, self.new.height),
        )
    }
}

fn rescale(v: f64, old: f64, new: f64) -> f64 {
    if old == new { v } else { v * new / old }
}

#[cfg(test)]
#[path = "../../tests/unit/foundation/core.rs"]
mod tests;
