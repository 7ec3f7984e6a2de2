//! The crop session state machine.
//!
//! States: closed -> open(loaded) -> { open(dirty) } -> closed.
//! A session holds at most one surface; opening with an undecodable
//! source yields an empty surface on which every editing operation is
//! a no-op. All interactive operations mutate session state only —
//! nothing reaches the slot store until the caller commits a save.

use framewall_common::error::FramewallResult;
use framewall_model::TransformDescriptor;

use crate::backend::{CropBackend, ImageBackend, PixelRect};

/// Fixed artifact aspect ratio: 4:3, non-negotiable.
pub const ARTIFACT_WIDTH: u32 = 1200;
pub const ARTIFACT_HEIGHT: u32 = 900;

/// JPEG quality for saved artifacts.
pub const ARTIFACT_QUALITY: u8 = 92;

/// Session zoom bounds. 1.0 shows the full default crop.
pub const MIN_ZOOM: f64 = 1.0;
pub const MAX_ZOOM: f64 = 8.0;

/// Result of committing a session: the rendered 4:3 artifact and the
/// descriptor that reproduces it.
#[derive(Debug, Clone, PartialEq)]
pub struct SavedEdit {
    pub artifact: Vec<u8>,
    pub descriptor: TransformDescriptor,
}

#[derive(Debug, Clone, Copy)]
struct CropRect {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
}

#[derive(Debug)]
struct Surface {
    bytes: Vec<u8>,
    source_w: u32,
    source_h: u32,
    rotation_degrees: f64,
    zoom: f64,
    crop: CropRect,
}

/// A single-slot crop/rotate/zoom editing session.
pub struct CropSession {
    backend: Box<dyn CropBackend>,
    surface: Option<Surface>,
}

impl CropSession {
    /// Open a session on source image bytes with the default backend.
    pub fn open(source: &[u8], prior: Option<&TransformDescriptor>) -> Self {
        Self::open_with_backend(Box::new(ImageBackend::new()), source, prior)
    }

    /// Open with a specific raster backend.
    ///
    /// An unreadable source does not fail: the session opens with an
    /// empty surface and every operation becomes a no-op until it is
    /// dropped. A prior descriptor that does not fit the source is
    /// ignored and the session starts from the default transform.
    pub fn open_with_backend(
        backend: Box<dyn CropBackend>,
        source: &[u8],
        prior: Option<&TransformDescriptor>,
    ) -> Self {
        let (source_w, source_h) = match backend.probe(source) {
            Ok(dims) => dims,
            Err(e) => {
                tracing::warn!(error = %e, "Crop session opened on unreadable source");
                return Self {
                    backend,
                    surface: None,
                };
            }
        };

        let mut surface = Surface {
            bytes: source.to_vec(),
            source_w,
            source_h,
            rotation_degrees: 0.0,
            zoom: MIN_ZOOM,
            crop: default_crop(source_w as f64, source_h as f64),
        };

        if let Some(descriptor) = prior {
            if descriptor.is_valid_for(source_w, source_h) {
                surface.rotation_degrees = descriptor.rotate_degrees;
                surface.crop = CropRect {
                    x: descriptor.x,
                    y: descriptor.y,
                    w: descriptor.width,
                    h: descriptor.height,
                };
                let (bw, bh) = surface.rotated_bounds();
                let base = default_crop(bw, bh);
                surface.zoom = (base.w / descriptor.width).clamp(MIN_ZOOM, MAX_ZOOM);
                tracing::debug!("Restored prior transform");
            } else {
                tracing::warn!("Prior transform does not fit source; starting from default");
            }
        }

        Self {
            backend,
            surface: Some(surface),
        }
    }

    /// Whether the session has no editable surface.
    pub fn is_empty(&self) -> bool {
        self.surface.is_none()
    }

    pub fn zoom(&self) -> f64 {
        self.surface.as_ref().map(|s| s.zoom).unwrap_or(MIN_ZOOM)
    }

    pub fn rotation_degrees(&self) -> f64 {
        self.surface
            .as_ref()
            .map(|s| s.rotation_degrees)
            .unwrap_or(0.0)
    }

    /// Current crop rectangle as (x, y, width, height) in rotated
    /// source pixel space.
    pub fn crop_rect(&self) -> Option<(f64, f64, f64, f64)> {
        self.surface
            .as_ref()
            .map(|s| (s.crop.x, s.crop.y, s.crop.w, s.crop.h))
    }

    /// Adjust zoom by `delta`, clamped to the session bounds. The crop
    /// shrinks or grows around its current center.
    pub fn zoom_by(&mut self, delta: f64) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        let zoom = (surface.zoom + delta).clamp(MIN_ZOOM, MAX_ZOOM);
        surface.zoom = zoom;
        surface.recenter_crop();
    }

    /// Accumulate rotation. The UI only emits ±90; the crop resets to
    /// the default framing of the new orientation, preserving zoom.
    pub fn rotate_by(&mut self, degrees: f64) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.rotation_degrees += degrees;
        let (bw, bh) = surface.rotated_bounds();
        surface.crop = zoomed_crop(default_crop(bw, bh), surface.zoom, bw, bh);
    }

    /// Return to the default transform, discarding in-session changes.
    pub fn reset(&mut self) {
        let Some(surface) = self.surface.as_mut() else {
            return;
        };
        surface.rotation_degrees = 0.0;
        surface.zoom = MIN_ZOOM;
        let (bw, bh) = surface.rotated_bounds();
        surface.crop = default_crop(bw, bh);
    }

    /// Commit: render the current transform into a 4:3 artifact and
    /// derive the descriptor from the committed geometry.
    ///
    /// Returns `Ok(None)` for an empty session (nothing to save); the
    /// caller leaves the slot untouched.
    pub fn save(&self) -> FramewallResult<Option<SavedEdit>> {
        let Some(surface) = self.surface.as_ref() else {
            return Ok(None);
        };

        let descriptor = TransformDescriptor {
            x: surface.crop.x,
            y: surface.crop.y,
            width: surface.crop.w,
            height: surface.crop.h,
            rotate_degrees: surface.rotation_degrees,
            scale_x: 1.0,
            scale_y: 1.0,
        };

        let pixel_crop = surface.pixel_crop();
        let artifact = self.backend.render(
            &surface.bytes,
            descriptor.quarter_turns(),
            pixel_crop,
            ARTIFACT_WIDTH,
            ARTIFACT_HEIGHT,
            ARTIFACT_QUALITY,
        )?;

        tracing::debug!(
            backend = self.backend.name(),
            artifact_len = artifact.len(),
            "Crop session saved"
        );

        Ok(Some(SavedEdit {
            artifact,
            descriptor,
        }))
    }
}

impl Surface {
    fn rotated_bounds(&self) -> (f64, f64) {
        let quarter = (self.rotation_degrees / 90.0).round() as i64;
        if quarter.rem_euclid(2) == 1 {
            (self.source_h as f64, self.source_w as f64)
        } else {
            (self.source_w as f64, self.source_h as f64)
        }
    }

    /// Recompute the crop for the current zoom, keeping the center.
    fn recenter_crop(&mut self) {
        let (bw, bh) = self.rotated_bounds();
        let base = default_crop(bw, bh);
        let w = base.w / self.zoom;
        let h = base.h / self.zoom;
        let cx = self.crop.x + self.crop.w / 2.0;
        let cy = self.crop.y + self.crop.h / 2.0;
        self.crop = CropRect {
            x: (cx - w / 2.0).clamp(0.0, bw - w),
            y: (cy - h / 2.0).clamp(0.0, bh - h),
            w,
            h,
        };
    }

    fn pixel_crop(&self) -> PixelRect {
        let (bw, bh) = self.rotated_bounds();
        let x = self.crop.x.round().clamp(0.0, bw - 1.0) as u32;
        let y = self.crop.y.round().clamp(0.0, bh - 1.0) as u32;
        let width = (self.crop.w.round() as u32).clamp(1, bw as u32 - x);
        let height = (self.crop.h.round() as u32).clamp(1, bh as u32 - y);
        PixelRect {
            x,
            y,
            width,
            height,
        }
    }
}

/// Largest centered 4:3 crop fitting `bounds_w` x `bounds_h`.
fn default_crop(bounds_w: f64, bounds_h: f64) -> CropRect {
    let target = 4.0 / 3.0;
    let (w, h) = if bounds_w / bounds_h > target {
        (bounds_h * target, bounds_h)
    } else {
        (bounds_w, bounds_w / target)
    };
    CropRect {
        x: (bounds_w - w) / 2.0,
        y: (bounds_h - h) / 2.0,
        w,
        h,
    }
}

/// The default crop scaled down by `zoom`, centered in bounds.
fn zoomed_crop(base: CropRect, zoom: f64, bounds_w: f64, bounds_h: f64) -> CropRect {
    let w = base.w / zoom;
    let h = base.h / zoom;
    CropRect {
        x: (bounds_w - w) / 2.0,
        y: (bounds_h - h) / 2.0,
        w,
        h,
    }
}
