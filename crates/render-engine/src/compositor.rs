//! Wall composition: slot images cover-fit into the template's frame
//! rectangles, with frame and mat chrome in the selected color.
//!
//! Rendering is a pure function of (slots, template, style, canvas
//! width). Rectangle `i` always receives the slot currently at order
//! position `i`, so a reorder changes which image appears where
//! without moving the rectangles.

use framewall_common::error::{FramewallError, FramewallResult};
use framewall_model::{template, FrameRect, SlotStore};
use image::imageops::{self, FilterType};
use image::{Rgba, RgbaImage};

use crate::style::{Color, FrameStyle};

/// Preview canvas width in pixels; height follows the 41:29 wall.
pub const BASE_CANVAS_WIDTH: u32 = 1640;

/// Canvas height for a given width, on the fixed wall aspect.
pub fn canvas_height(width: u32) -> u32 {
    let (aw, ah) = template::WALL_ASPECT;
    (width as u64 * ah as u64 / aw as u64) as u32
}

/// An integral rectangle in canvas pixel space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PxRect {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

impl PxRect {
    /// Center point, for gesture target resolution and tests.
    pub fn center(&self) -> (u32, u32) {
        (self.x + self.w / 2, self.y + self.h / 2)
    }
}

/// Map a template frame rectangle (percentages) onto the canvas.
pub fn frame_pixel_rect(rect: &FrameRect, canvas_w: u32, canvas_h: u32) -> PxRect {
    PxRect {
        x: (rect.x / 100.0 * canvas_w as f64).round() as u32,
        y: (rect.y / 100.0 * canvas_h as f64).round() as u32,
        w: ((rect.w / 100.0 * canvas_w as f64).round() as u32).max(1),
        h: ((rect.h / 100.0 * canvas_h as f64).round() as u32).max(1),
    }
}

/// The photo rectangle inside a frame: the frame rect inset by the
/// border and mat thickness.
pub fn photo_area(frame: PxRect, style: &FrameStyle, canvas_w: u32) -> PxRect {
    let inset = border_px(style, canvas_w) + mat_px(style, canvas_w);
    PxRect {
        x: frame.x + inset,
        y: frame.y + inset,
        w: frame.w.saturating_sub(2 * inset).max(1),
        h: frame.h.saturating_sub(2 * inset).max(1),
    }
}

fn border_px(style: &FrameStyle, canvas_w: u32) -> u32 {
    ((canvas_w as f64 * style.border_ratio).round() as u32).max(1)
}

fn mat_px(style: &FrameStyle, canvas_w: u32) -> u32 {
    ((canvas_w as f64 * style.mat_ratio).round() as u32).max(1)
}

/// Render the composite for the store's current slot order.
pub fn render_composite(
    store: &SlotStore,
    style: &FrameStyle,
    canvas_w: u32,
) -> FramewallResult<RgbaImage> {
    if canvas_w == 0 {
        return Err(FramewallError::render("render target unavailable: zero-sized canvas"));
    }

    let positions = template::positions_for(store.size());
    if positions.len() != store.slots().len() {
        return Err(FramewallError::render(format!(
            "render target unavailable: {} slots for a {}-frame template",
            store.slots().len(),
            positions.len()
        )));
    }

    let canvas_h = canvas_height(canvas_w);
    let mut canvas = RgbaImage::from_pixel(canvas_w, canvas_h, rgba(style.backdrop));

    for (slot, rect) in store.slots().iter().zip(positions) {
        let frame = frame_pixel_rect(rect, canvas_w, canvas_h);
        fill_rect(&mut canvas, frame, style.frame_color);

        let border = border_px(style, canvas_w);
        let mat = PxRect {
            x: frame.x + border,
            y: frame.y + border,
            w: frame.w.saturating_sub(2 * border).max(1),
            h: frame.h.saturating_sub(2 * border).max(1),
        };
        fill_rect(&mut canvas, mat, style.mat_color);

        let photo = photo_area(frame, style, canvas_w);
        let source = slot.display_handle().and_then(|handle| store.bytes(handle));
        match source {
            Some(bytes) => match image::load_from_memory(&bytes) {
                Ok(decoded) => draw_cover_fit(&mut canvas, &decoded, photo),
                Err(e) => {
                    tracing::warn!(id = %slot.id, error = %e, "Undecodable slot image, drawing placeholder");
                    fill_rect(&mut canvas, photo, style.placeholder_color);
                }
            },
            None => fill_rect(&mut canvas, photo, style.placeholder_color),
        }
    }

    Ok(canvas)
}

/// Center-crop the source to the destination aspect, then scale it to
/// fill the rectangle exactly. No letterboxing.
fn draw_cover_fit(canvas: &mut RgbaImage, source: &image::DynamicImage, dst: PxRect) {
    let (sw, sh) = (source.width(), source.height());
    if sw == 0 || sh == 0 {
        return;
    }

    let scale = f64::max(dst.w as f64 / sw as f64, dst.h as f64 / sh as f64);
    let crop_w = ((dst.w as f64 / scale).round() as u32).clamp(1, sw);
    let crop_h = ((dst.h as f64 / scale).round() as u32).clamp(1, sh);
    let crop_x = (sw - crop_w) / 2;
    let crop_y = (sh - crop_h) / 2;

    let fitted = source
        .crop_imm(crop_x, crop_y, crop_w, crop_h)
        .resize_exact(dst.w, dst.h, FilterType::Lanczos3)
        .to_rgba8();

    imageops::replace(canvas, &fitted, dst.x as i64, dst.y as i64);
}

fn fill_rect(canvas: &mut RgbaImage, rect: PxRect, color: Color) {
    let pixel = rgba(color);
    let x_end = (rect.x + rect.w).min(canvas.width());
    let y_end = (rect.y + rect.h).min(canvas.height());
    for y in rect.y..y_end {
        for x in rect.x..x_end {
            canvas.put_pixel(x, y, pixel);
        }
    }
}

fn rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, 255])
}

#[cfg(test)]
mod tests {
    use super::*;
    use framewall_model::{TemplateSize, FRAME_POSITIONS_5};

    #[test]
    fn test_canvas_height_follows_wall_aspect() {
        assert_eq!(canvas_height(1640), 1160);
        assert_eq!(canvas_height(3280), 2320);
    }

    #[test]
    fn test_frame_pixel_rect_scales_percentages() {
        let rect = FrameRect {
            x: 50.0,
            y: 25.0,
            w: 10.0,
            h: 20.0,
        };
        let px = frame_pixel_rect(&rect, 1000, 800);
        assert_eq!(
            px,
            PxRect {
                x: 500,
                y: 200,
                w: 100,
                h: 160
            }
        );
    }

    #[test]
    fn test_photo_area_is_strictly_inside_the_frame() {
        let style = FrameStyle::default();
        let frame = frame_pixel_rect(&FRAME_POSITIONS_5[1], 1640, 1160);
        let photo = photo_area(frame, &style, 1640);
        assert!(photo.x > frame.x && photo.y > frame.y);
        assert!(photo.x + photo.w < frame.x + frame.w);
        assert!(photo.y + photo.h < frame.y + frame.h);
    }

    #[test]
    fn test_empty_store_renders_all_placeholders() {
        let store = SlotStore::new(TemplateSize::Five);
        let style = FrameStyle::default();
        let canvas = render_composite(&store, &style, 820).unwrap();

        for rect in framewall_model::template::positions_for(TemplateSize::Five) {
            let photo = photo_area(frame_pixel_rect(rect, 820, canvas_height(820)), &style, 820);
            let (cx, cy) = photo.center();
            let px = canvas.get_pixel(cx, cy);
            assert_eq!(
                (px[0], px[1], px[2]),
                (
                    style.placeholder_color.r,
                    style.placeholder_color.g,
                    style.placeholder_color.b
                )
            );
        }
    }

    #[test]
    fn test_zero_canvas_is_an_explicit_error() {
        let store = SlotStore::new(TemplateSize::Five);
        let err = render_composite(&store, &FrameStyle::default(), 0).unwrap_err();
        assert!(err.to_string().contains("render target unavailable"));
    }
}
