//! Raster backends for the crop session.
//!
//! The session only needs a narrow surface: probe dimensions, then
//! rotate/crop/resize/encode in one pass. Keeping it behind a trait
//! leaves the underlying codec swappable.

use std::io::Cursor;

use framewall_common::error::{FramewallError, FramewallResult};
use image::imageops::FilterType;

/// An integral crop rectangle in rotated-source pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PixelRect {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

/// Raster operations the crop session depends on.
pub trait CropBackend: Send {
    /// Decode enough of `bytes` to learn the source dimensions.
    fn probe(&self, bytes: &[u8]) -> FramewallResult<(u32, u32)>;

    /// Rotate by `quarter_turns`, crop to `crop`, resize to
    /// `out_w` x `out_h`, and encode as JPEG at `quality`.
    fn render(
        &self,
        bytes: &[u8],
        quarter_turns: u8,
        crop: PixelRect,
        out_w: u32,
        out_h: u32,
        quality: u8,
    ) -> FramewallResult<Vec<u8>>;

    /// Backend name for logging.
    fn name(&self) -> &str;
}

/// Default backend built on the `image` crate.
#[derive(Debug, Default)]
pub struct ImageBackend;

impl ImageBackend {
    pub fn new() -> Self {
        Self
    }
}

impl CropBackend for ImageBackend {
    fn probe(&self, bytes: &[u8]) -> FramewallResult<(u32, u32)> {
        let reader = image::ImageReader::new(Cursor::new(bytes))
            .with_guessed_format()
            .map_err(|e| FramewallError::session(format!("unreadable image source: {e}")))?;
        reader
            .into_dimensions()
            .map_err(|e| FramewallError::session(format!("failed to decode image header: {e}")))
    }

    fn render(
        &self,
        bytes: &[u8],
        quarter_turns: u8,
        crop: PixelRect,
        out_w: u32,
        out_h: u32,
        quality: u8,
    ) -> FramewallResult<Vec<u8>> {
        let decoded = image::load_from_memory(bytes)
            .map_err(|e| FramewallError::session(format!("failed to decode image: {e}")))?;

        let rotated = match quarter_turns % 4 {
            0 => decoded,
            1 => decoded.rotate90(),
            2 => decoded.rotate180(),
            _ => decoded.rotate270(),
        };

        if crop.width == 0 || crop.height == 0 {
            return Err(FramewallError::session("empty crop rectangle"));
        }
        if crop.x + crop.width > rotated.width() || crop.y + crop.height > rotated.height() {
            return Err(FramewallError::session(format!(
                "crop {crop:?} exceeds rotated bounds {}x{}",
                rotated.width(),
                rotated.height()
            )));
        }

        let cropped = rotated.crop_imm(crop.x, crop.y, crop.width, crop.height);
        let resized = cropped.resize_exact(out_w, out_h, FilterType::Lanczos3);

        let mut encoded = Vec::new();
        let encoder =
            image::codecs::jpeg::JpegEncoder::new_with_quality(Cursor::new(&mut encoded), quality);
        resized
            .to_rgb8()
            .write_with_encoder(encoder)
            .map_err(|e| FramewallError::session(format!("failed to encode artifact: {e}")))?;

        Ok(encoded)
    }

    fn name(&self) -> &str {
        "image"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::RgbaImage;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let img = RgbaImage::from_pixel(width, height, image::Rgba([200, 40, 40, 255]));
        let mut bytes = Vec::new();
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_probe_reports_dimensions() {
        let backend = ImageBackend::new();
        assert_eq!(backend.probe(&png_bytes(320, 200)).unwrap(), (320, 200));
    }

    #[test]
    fn test_probe_rejects_garbage() {
        let backend = ImageBackend::new();
        assert!(backend.probe(&[0, 1, 2, 3]).is_err());
    }

    #[test]
    fn test_render_produces_requested_dimensions() {
        let backend = ImageBackend::new();
        let crop = PixelRect {
            x: 10,
            y: 10,
            width: 200,
            height: 150,
        };
        let jpeg = backend
            .render(&png_bytes(320, 200), 0, crop, 400, 300, 92)
            .unwrap();
        let decoded = image::load_from_memory(&jpeg).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (400, 300));
    }

    #[test]
    fn test_render_rejects_out_of_bounds_crop() {
        let backend = ImageBackend::new();
        let crop = PixelRect {
            x: 0,
            y: 0,
            width: 500,
            height: 500,
        };
        assert!(backend.render(&png_bytes(320, 200), 0, crop, 400, 300, 92).is_err());
    }

    #[test]
    fn test_quarter_turn_swaps_axes_before_crop() {
        let backend = ImageBackend::new();
        // 320x200 source rotated once becomes 200x320; a 200x300 crop fits.
        let crop = PixelRect {
            x: 0,
            y: 0,
            width: 200,
            height: 300,
        };
        assert!(backend.render(&png_bytes(320, 200), 1, crop, 400, 300, 92).is_ok());
    }
}
