//! Photo slots and the slot store.
//!
//! The store is the single source of truth for uploaded/edited state.
//! It owns the resource registry, which gives handle release a single
//! authoritative path: upload replacement, removal, and bulk
//! (re)initialization. Nothing else ever revokes.

use std::fmt;
use std::sync::Arc;

use framewall_common::error::{FramewallError, FramewallResult};

use crate::handle::{ImageHandle, ResourceRegistry};
use crate::template::TemplateSize;
use crate::transform::TransformDescriptor;

/// Stable, opaque slot identifier.
///
/// Assigned once at store initialization; reorder and edit operations
/// never regenerate it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SlotId(u32);

impl fmt::Display for SlotId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "slot-{}", self.0)
    }
}

/// One numbered position in the template.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    /// Stable identity.
    pub id: SlotId,

    /// Uploaded source image, if any. At most one live handle.
    pub original: Option<ImageHandle>,

    /// Derived 4:3 raster from the crop session. Present only when
    /// `original` is present.
    pub edited: Option<ImageHandle>,

    /// Parameters last used to produce `edited`; restores the crop
    /// session exactly.
    pub transform: Option<TransformDescriptor>,
}

impl Slot {
    fn empty(id: SlotId) -> Self {
        Self {
            id,
            original: None,
            edited: None,
            transform: None,
        }
    }

    /// Whether a photo has been uploaded into this slot.
    pub fn is_filled(&self) -> bool {
        self.original.is_some()
    }

    /// The handle the renderer should draw: the edit if present,
    /// otherwise the upload.
    pub fn display_handle(&self) -> Option<ImageHandle> {
        self.edited.or(self.original)
    }
}

/// Ordered collection of photo slots for one template size.
#[derive(Debug)]
pub struct SlotStore {
    size: TemplateSize,
    slots: Vec<Slot>,
    registry: ResourceRegistry,
    next_id: u32,
}

impl SlotStore {
    /// Create a store initialized for `size`.
    pub fn new(size: TemplateSize) -> Self {
        let mut store = Self {
            size,
            slots: Vec::new(),
            registry: ResourceRegistry::new(),
            next_id: 0,
        };
        store.initialize(size);
        store
    }

    /// Discard every slot and its owned resources, then create fresh
    /// empty slots for `size`.
    ///
    /// Called once when the template size is first chosen, and again
    /// only when it changes.
    pub fn initialize(&mut self, size: TemplateSize) {
        self.size = size;
        for slot in std::mem::take(&mut self.slots) {
            if let Some(handle) = slot.original {
                self.registry.revoke(handle);
            }
            if let Some(handle) = slot.edited {
                self.registry.revoke(handle);
            }
        }

        self.slots = (0..size.frame_count())
            .map(|_| {
                self.next_id += 1;
                Slot::empty(SlotId(self.next_id))
            })
            .collect();

        tracing::info!(frames = size.frame_count(), "Slot store initialized");
    }

    /// Place uploaded image bytes into the slot.
    ///
    /// A prior upload (and any derived edit) is revoked first; the
    /// transform descriptor is cleared. Unknown `id` is a silent no-op.
    pub fn upload(&mut self, id: SlotId, bytes: Vec<u8>) {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(%id, "Upload into unknown slot ignored");
            return;
        };

        let prior_original = self.slots[index].original.take();
        let prior_edited = self.slots[index].edited.take();
        if let Some(handle) = prior_original {
            self.registry.revoke(handle);
        }
        if let Some(handle) = prior_edited {
            self.registry.revoke(handle);
        }

        let handle = self.registry.allocate(bytes);
        let slot = &mut self.slots[index];
        slot.original = Some(handle);
        slot.transform = None;
        tracing::debug!(%id, "Photo uploaded");
    }

    /// Clear the slot, revoking everything it owned. Already-empty
    /// slots are a no-op.
    pub fn remove(&mut self, id: SlotId) {
        let Some(index) = self.index_of(id) else {
            tracing::debug!(%id, "Remove on unknown slot ignored");
            return;
        };

        let slot = &mut self.slots[index];
        let original = slot.original.take();
        let edited = slot.edited.take();
        slot.transform = None;

        if let Some(handle) = original {
            self.registry.revoke(handle);
        }
        if let Some(handle) = edited {
            self.registry.revoke(handle);
        }
    }

    /// Commit a crop session result: the derived artifact bytes and
    /// the descriptor that produced them.
    ///
    /// The slot must hold an upload — the session guarantees this by
    /// construction (it cannot be opened on an empty slot), and the
    /// store refuses to hold an edit without a source.
    pub fn apply_edit(
        &mut self,
        id: SlotId,
        edited_bytes: Vec<u8>,
        transform: TransformDescriptor,
    ) -> FramewallResult<()> {
        let Some(index) = self.index_of(id) else {
            return Err(FramewallError::model(format!("unknown slot {id}")));
        };
        if self.slots[index].original.is_none() {
            return Err(FramewallError::model(format!(
                "cannot apply edit to {id}: no source image"
            )));
        }

        let prior_edited = self.slots[index].edited.take();
        if let Some(handle) = prior_edited {
            self.registry.revoke(handle);
        }

        let handle = self.registry.allocate(edited_bytes);
        let slot = &mut self.slots[index];
        slot.edited = Some(handle);
        slot.transform = Some(transform);
        tracing::debug!(%id, "Edit applied");
        Ok(())
    }

    /// Move the slot at `from` to position `to`, shifting the slots in
    /// between. Identity-preserving: ids and all field values travel
    /// with the slot, and no handle is allocated or revoked.
    ///
    /// Out-of-range indices or `from == to` are a no-op.
    pub fn reorder(&mut self, from: usize, to: usize) {
        if from == to || from >= self.slots.len() || to >= self.slots.len() {
            tracing::debug!(from, to, "Reorder ignored");
            return;
        }
        let slot = self.slots.remove(from);
        self.slots.insert(to, slot);
        tracing::debug!(from, to, "Slots reordered");
    }

    /// The template size this store was last initialized for.
    pub fn size(&self) -> TemplateSize {
        self.size
    }

    /// Slots in display order.
    pub fn slots(&self) -> &[Slot] {
        &self.slots
    }

    pub fn slot(&self, id: SlotId) -> Option<&Slot> {
        self.slots.iter().find(|s| s.id == id)
    }

    /// The bytes behind a handle owned by one of this store's slots.
    pub fn bytes(&self, handle: ImageHandle) -> Option<Arc<[u8]>> {
        self.registry.get(handle)
    }

    /// Number of slots holding an upload.
    pub fn filled_count(&self) -> usize {
        self.slots.iter().filter(|s| s.is_filled()).count()
    }

    /// Total live handles across all slots (for invariant checks).
    pub fn live_handles(&self) -> usize {
        self.registry.live_count()
    }

    fn index_of(&self, id: SlotId) -> Option<usize> {
        self.slots.iter().position(|s| s.id == id)
    }
}
