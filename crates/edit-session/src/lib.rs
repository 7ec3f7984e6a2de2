//! Framewall Edit Session
//!
//! A modal, single-slot crop/rotate/zoom session. The session reads a
//! source image plus an optional prior transform descriptor, lets the
//! user adjust the framing in memory, and on save renders a fixed-4:3
//! artifact together with the descriptor needed to restore the session
//! exactly.
//!
//! Nothing here touches the slot store: the caller commits the saved
//! result via `SlotStore::apply_edit`, or discards the session and the
//! stored state stays as it was.

pub mod backend;
pub mod session;

pub use backend::{CropBackend, ImageBackend, PixelRect};
pub use session::{CropSession, SavedEdit};
