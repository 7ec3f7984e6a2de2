//! Order hand-off: the message and deep link sent to the print shop.
//!
//! The link is gated on a completed export so customers never open a
//! conversation without the raster they are expected to attach.

use framewall_common::error::{FramewallError, FramewallResult};
use framewall_model::TemplateSize;

use crate::export::ExportTracker;

/// Default WhatsApp number of the print shop, in international format
/// without the leading `+`.
pub const ORDER_CONTACT: &str = "905387730177";

/// The prefilled order message for a template size and frame color.
pub fn order_message(size: TemplateSize, color_name: &str) -> String {
    format!(
        "Hello, I would like to order a {}-frame gallery wall ({} frames). \
         I am attaching the wall layout image.",
        size.frame_count(),
        color_name
    )
}

/// Build the `wa.me` deep link for the order.
///
/// Fails if no export has completed: the hand-off only makes sense
/// once the layout raster exists.
pub fn handoff_link(
    tracker: &ExportTracker,
    contact: &str,
    size: TemplateSize,
    color_name: &str,
) -> FramewallResult<String> {
    if !tracker.completed() {
        return Err(FramewallError::export(
            "order hand-off requires a completed export",
        ));
    }

    let message = order_message(size, color_name);
    Ok(format!(
        "https://wa.me/{contact}?text={}",
        percent_encode(&message)
    ))
}

/// Percent-encode for a URL query value. Unreserved characters per
/// RFC 3986 pass through; everything else is escaped byte-wise.
fn percent_encode(input: &str) -> String {
    let mut out = String::with_capacity(input.len() * 3);
    for byte in input.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'.' | b'_' | b'~' => {
                out.push(byte as char)
            }
            _ => {
                out.push('%');
                out.push_str(&format!("{byte:02X}"));
            }
        }
    }
    out
}
