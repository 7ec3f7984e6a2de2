//! Frame styling: colors, palette, and chrome proportions.

use framewall_common::error::{FramewallError, FramewallResult};
use serde::{Deserialize, Serialize};

/// An opaque RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Parse a `#rrggbb` hex string.
    pub fn from_hex(hex: &str) -> FramewallResult<Self> {
        let digits = hex.strip_prefix('#').unwrap_or(hex);
        if digits.len() != 6 {
            return Err(FramewallError::config(format!("invalid color '{hex}'")));
        }
        let value = u32::from_str_radix(digits, 16)
            .map_err(|_| FramewallError::config(format!("invalid color '{hex}'")))?;
        Ok(Self {
            r: (value >> 16) as u8,
            g: (value >> 8) as u8,
            b: value as u8,
        })
    }

    pub fn to_hex(self) -> String {
        format!("#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
    }
}

/// A named entry in the frame color palette.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameColor {
    pub name: &'static str,
    pub hex: &'static str,
}

/// The frame colors offered to customers.
pub const FRAME_COLORS: [FrameColor; 4] = [
    FrameColor {
        name: "Black",
        hex: "#111827",
    },
    FrameColor {
        name: "White",
        hex: "#F9FAFB",
    },
    FrameColor {
        name: "Walnut",
        hex: "#5B3A29",
    },
    FrameColor {
        name: "Natural",
        hex: "#C9A57A",
    },
];

/// Look up a palette entry by (case-insensitive) name.
pub fn color_by_name(name: &str) -> Option<&'static FrameColor> {
    FRAME_COLORS
        .iter()
        .find(|c| c.name.eq_ignore_ascii_case(name))
}

/// The palette name for a hex value, defaulting to the first entry for
/// unknown colors (mirrors how the order message labels custom values).
pub fn color_name_for_hex(hex: &str) -> &'static str {
    FRAME_COLORS
        .iter()
        .find(|c| c.hex.eq_ignore_ascii_case(hex))
        .map(|c| c.name)
        .unwrap_or(FRAME_COLORS[0].name)
}

/// Everything the compositor needs to draw frame chrome.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FrameStyle {
    /// Frame border color (the user-selected palette entry).
    pub frame_color: Color,

    /// Mat board color between border and photo.
    pub mat_color: Color,

    /// Fill for slots with no photo.
    pub placeholder_color: Color,

    /// Wall color behind the frames.
    pub backdrop: Color,

    /// Frame border thickness as a fraction of canvas width.
    pub border_ratio: f64,

    /// Mat thickness as a fraction of canvas width.
    pub mat_ratio: f64,
}

impl FrameStyle {
    /// Style with the default chrome and the given frame color.
    pub fn with_frame_color(frame_color: Color) -> Self {
        Self {
            frame_color,
            ..Self::default()
        }
    }
}

impl Default for FrameStyle {
    fn default() -> Self {
        Self {
            frame_color: Color::new(0x11, 0x18, 0x27),
            mat_color: Color::new(0xF3, 0xF4, 0xF6),
            placeholder_color: Color::new(0xE5, 0xE7, 0xEB),
            backdrop: Color::new(0xE8, 0xE2, 0xD8),
            border_ratio: 0.006,
            mat_ratio: 0.010,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_parsing_roundtrip() {
        let color = Color::from_hex("#5B3A29").unwrap();
        assert_eq!(color, Color::new(0x5B, 0x3A, 0x29));
        assert_eq!(color.to_hex(), "#5B3A29");
    }

    #[test]
    fn test_hex_parsing_rejects_malformed_input() {
        assert!(Color::from_hex("#12345").is_err());
        assert!(Color::from_hex("red").is_err());
        assert!(Color::from_hex("#GGGGGG").is_err());
    }

    #[test]
    fn test_palette_lookup_is_case_insensitive() {
        assert_eq!(color_by_name("walnut").unwrap().hex, "#5B3A29");
        assert_eq!(color_by_name("WALNUT").unwrap().name, "Walnut");
        assert!(color_by_name("mahogany").is_none());
    }

    #[test]
    fn test_unknown_hex_falls_back_to_first_palette_name() {
        assert_eq!(color_name_for_hex("#5b3a29"), "Walnut");
        assert_eq!(color_name_for_hex("#123456"), "Black");
    }
}
