//! Framewall Render Engine
//!
//! Composes ordered slot images onto the fixed wall template and
//! exports the result as a print-adequate raster.
//!
//! # Pipeline
//!
//! ```text
//! slot store ──┐
//!              ├── Composition (cover-fit into frame rects)
//! template ────┘         │
//!                        ├── Frame/mat chrome (selected color)
//! frame style ───────────┘         │
//!                                  ▼
//!                        Export (pixel ratio 2, PNG)
//!                                  │
//!                                  ▼
//!                        gallery-order.png ──► order hand-off
//! ```

pub mod compositor;
pub mod export;
pub mod handoff;
pub mod style;

pub use compositor::{frame_pixel_rect, photo_area, render_composite, PxRect, BASE_CANVAS_WIDTH};
pub use export::{export_composite, ExportJob, ExportTracker, EXPORT_PIXEL_RATIO};
pub use handoff::{handoff_link, order_message, ORDER_CONTACT};
pub use style::{color_by_name, color_name_for_hex, Color, FrameColor, FrameStyle, FRAME_COLORS};
