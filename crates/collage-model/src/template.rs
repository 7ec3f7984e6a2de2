//! Wall templates: fixed frame layouts for 5- and 6-frame collages.
//!
//! Positions are hand-tuned constants, expressed as percentages of a
//! 41:29 landscape wall canvas. They are looked up, never computed.

use serde::{Deserialize, Serialize};

/// Wall canvas aspect ratio (width : height).
pub const WALL_ASPECT: (u32, u32) = (41, 29);

/// Supported template sizes. Closed set: no other frame counts exist.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemplateSize {
    Five,
    Six,
}

impl TemplateSize {
    /// Number of frames (and slots) in this template.
    pub fn frame_count(self) -> usize {
        match self {
            TemplateSize::Five => 5,
            TemplateSize::Six => 6,
        }
    }

    /// Parse an externally supplied frame count. Anything but 5 or 6
    /// is rejected here, upstream of the core.
    pub fn from_frame_count(count: usize) -> Option<Self> {
        match count {
            5 => Some(TemplateSize::Five),
            6 => Some(TemplateSize::Six),
            _ => None,
        }
    }

    pub fn all() -> [TemplateSize; 2] {
        [TemplateSize::Five, TemplateSize::Six]
    }
}

/// A frame rectangle on the wall canvas.
///
/// All fields are percentages in `[0, 100]` of the canvas dimensions:
/// `(0, 0)` is the top-left corner of the wall.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FrameRect {
    /// Left edge (% of canvas width).
    pub x: f64,
    /// Top edge (% of canvas height).
    pub y: f64,
    /// Width (% of canvas width).
    pub w: f64,
    /// Height (% of canvas height).
    pub h: f64,
}

const fn rect(x: f64, y: f64, w: f64, h: f64) -> FrameRect {
    FrameRect { x, y, w, h }
}

/// Frame positions for the 6-frame "graceful six" layout.
pub const FRAME_POSITIONS_6: [FrameRect; 6] = [
    rect(14.0, 13.0, 19.0, 19.0), // top-left small
    rect(36.0, 9.0, 28.0, 24.0),  // top-center large
    rect(67.0, 13.0, 19.0, 19.0), // top-right small
    rect(14.0, 40.0, 19.0, 19.0), // bottom-left small
    rect(36.0, 37.0, 28.0, 22.0), // bottom-center wide
    rect(67.0, 40.0, 19.0, 19.0), // bottom-right small
];

/// Frame positions for the 5-frame layout (two equal medium frames
/// centered on the bottom row).
pub const FRAME_POSITIONS_5: [FrameRect; 5] = [
    rect(16.0, 13.0, 19.0, 19.0), // top-left small
    rect(38.0, 9.0, 28.0, 24.0),  // top-center large
    rect(69.0, 13.0, 19.0, 19.0), // top-right small
    rect(32.0, 40.0, 20.0, 18.0), // bottom-left medium
    rect(54.0, 40.0, 20.0, 18.0), // bottom-right medium
];

/// Frame rectangles for a template, ordered by slot index.
pub fn positions_for(size: TemplateSize) -> &'static [FrameRect] {
    match size {
        TemplateSize::Five => &FRAME_POSITIONS_5,
        TemplateSize::Six => &FRAME_POSITIONS_6,
    }
}
