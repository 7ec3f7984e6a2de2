//! Revocable references to user-supplied image bytes.
//!
//! The registry is deliberately dumb: it maps opaque ids to byte
//! buffers and forgets them on revoke. Ownership always belongs to the
//! slot that currently references a handle; the registry never frees
//! anything on its own.

use std::collections::HashMap;
use std::sync::Arc;

/// An owned, revocable reference to image bytes held by the registry.
///
/// Handles are never reused within one registry's lifetime.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImageHandle(u64);

/// Allocates and revokes local references to binary image data.
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    next_id: u64,
    live: HashMap<u64, Arc<[u8]>>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store `bytes` and return a fresh handle referencing them.
    pub fn allocate(&mut self, bytes: Vec<u8>) -> ImageHandle {
        let id = self.next_id;
        self.next_id += 1;
        tracing::debug!(handle = id, len = bytes.len(), "Allocated image handle");
        self.live.insert(id, Arc::from(bytes));
        ImageHandle(id)
    }

    /// Release the bytes behind `handle`.
    ///
    /// Revoking an unknown or already-revoked handle is a silent no-op,
    /// not an error.
    pub fn revoke(&mut self, handle: ImageHandle) {
        if self.live.remove(&handle.0).is_some() {
            tracing::debug!(handle = handle.0, "Revoked image handle");
        }
    }

    /// The bytes behind `handle`, if it is still live.
    pub fn get(&self, handle: ImageHandle) -> Option<Arc<[u8]>> {
        self.live.get(&handle.0).cloned()
    }

    pub fn is_live(&self, handle: ImageHandle) -> bool {
        self.live.contains_key(&handle.0)
    }

    /// Number of live (non-revoked) handles.
    pub fn live_count(&self) -> usize {
        self.live.len()
    }
}
