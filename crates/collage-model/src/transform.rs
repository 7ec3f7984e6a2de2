//! Crop/rotate/scale parameters for re-applying a saved edit.

use serde::{Deserialize, Serialize};

/// The committed geometry of a crop session.
///
/// The crop rectangle is in source-image pixel space, measured after
/// rotation has been applied. Rotation is stored in degrees; the UI
/// only produces multiples of 90, but any value is representable.
/// Applying a saved descriptor to the same source reproduces the same
/// crop region and rotation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TransformDescriptor {
    /// Crop left edge (pixels, rotated source space).
    pub x: f64,
    /// Crop top edge (pixels, rotated source space).
    pub y: f64,
    /// Crop width (pixels).
    pub width: f64,
    /// Crop height (pixels).
    pub height: f64,
    /// Accumulated rotation in degrees.
    pub rotate_degrees: f64,
    /// Horizontal scale factor.
    pub scale_x: f64,
    /// Vertical scale factor.
    pub scale_y: f64,
}

impl Default for TransformDescriptor {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            width: 0.0,
            height: 0.0,
            rotate_degrees: 0.0,
            scale_x: 1.0,
            scale_y: 1.0,
        }
    }
}

impl TransformDescriptor {
    /// Rotation quantized to quarter turns in `0..4`.
    pub fn quarter_turns(&self) -> u8 {
        let turns = (self.rotate_degrees / 90.0).round() as i64;
        turns.rem_euclid(4) as u8
    }

    /// Source dimensions after applying this descriptor's rotation.
    pub fn rotated_bounds(&self, source_w: u32, source_h: u32) -> (u32, u32) {
        if self.quarter_turns() % 2 == 1 {
            (source_h, source_w)
        } else {
            (source_w, source_h)
        }
    }

    /// Structural compatibility check against a source image.
    ///
    /// A descriptor saved against a different image (or corrupted in
    /// transit) fails here; callers fall back to the default transform
    /// instead of erroring.
    pub fn is_valid_for(&self, source_w: u32, source_h: u32) -> bool {
        let finite = [
            self.x,
            self.y,
            self.width,
            self.height,
            self.rotate_degrees,
            self.scale_x,
            self.scale_y,
        ]
        .iter()
        .all(|v| v.is_finite());
        if !finite {
            return false;
        }
        if self.width <= 0.0 || self.height <= 0.0 {
            return false;
        }
        if self.scale_x <= 0.0 || self.scale_y <= 0.0 {
            return false;
        }

        let (bounds_w, bounds_h) = self.rotated_bounds(source_w, source_h);
        const EPS: f64 = 0.5;
        self.x >= -EPS
            && self.y >= -EPS
            && self.x + self.width <= bounds_w as f64 + EPS
            && self.y + self.height <= bounds_h as f64 + EPS
    }
}
