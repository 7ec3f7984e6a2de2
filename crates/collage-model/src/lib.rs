//! Framewall Collage Model
//!
//! The slot state core: an ordered collection of photo slots for a
//! chosen wall template, backed by an explicit ownership registry for
//! user-supplied image bytes.
//!
//! # Data flow
//!
//! ```text
//! upload bytes ──► ResourceRegistry ──► Slot.original
//!                                          │
//!                              crop session commits
//!                                          ▼
//!                                     Slot.edited + Slot.transform
//!                                          │
//!                                       reorder
//!                                          ▼
//!                                  composition renderer
//! ```
//!
//! Every mutation is synchronous and atomic: it either fully applies
//! or is a no-op. Handles are revoked on exactly three paths — upload
//! replacement, removal, and store (re)initialization.

pub mod handle;
pub mod slot;
pub mod template;
pub mod transform;

pub use handle::{ImageHandle, ResourceRegistry};
pub use slot::{Slot, SlotId, SlotStore};
pub use template::{FrameRect, TemplateSize, FRAME_POSITIONS_5, FRAME_POSITIONS_6};
pub use transform::TransformDescriptor;
