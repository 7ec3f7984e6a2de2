use framewall_model::{Slot, SlotStore, TemplateSize, TransformDescriptor};
use proptest::prelude::*;

fn snapshot(store: &SlotStore) -> Vec<Slot> {
    store.slots().to_vec()
}

#[test]
fn reorder_there_and_back_restores_everything() {
    let mut store = SlotStore::new(TemplateSize::Six);
    let ids: Vec<_> = store.slots().iter().map(|s| s.id).collect();

    store.upload(ids[0], vec![0xAA]);
    store.upload(ids[3], vec![0xBB]);
    store
        .apply_edit(
            ids[0],
            vec![0xCC],
            TransformDescriptor {
                width: 4.0,
                height: 3.0,
                ..Default::default()
            },
        )
        .unwrap();

    let before = snapshot(&store);
    let live_before = store.live_handles();

    store.reorder(1, 4);
    store.reorder(4, 1);

    assert_eq!(snapshot(&store), before);
    assert_eq!(store.live_handles(), live_before);
}

#[test]
fn reinitializing_drops_the_previous_generation() {
    let mut store = SlotStore::new(TemplateSize::Five);
    let ids: Vec<_> = store.slots().iter().map(|s| s.id).collect();
    for id in &ids {
        store.upload(*id, vec![1, 2, 3]);
    }
    store
        .apply_edit(ids[0], vec![4], TransformDescriptor::default())
        .unwrap();
    assert_eq!(store.live_handles(), 6);

    store.initialize(TemplateSize::Six);

    assert_eq!(store.live_handles(), 0);
    assert_eq!(store.slots().len(), 6);
    assert!(store.slots().iter().all(|s| !s.is_filled()));
}

#[derive(Debug, Clone)]
enum SlotOp {
    Upload(usize),
    Remove(usize),
}

fn slot_op() -> impl Strategy<Value = SlotOp> {
    prop_oneof![
        (0usize..6).prop_map(SlotOp::Upload),
        (0usize..6).prop_map(SlotOp::Remove),
    ]
}

proptest! {
    /// For any upload/remove sequence, each slot owns at most one live
    /// handle, so the store-wide live count equals the filled count.
    #[test]
    fn upload_remove_sequences_never_leak(ops in proptest::collection::vec(slot_op(), 0..64)) {
        let mut store = SlotStore::new(TemplateSize::Six);
        let ids: Vec<_> = store.slots().iter().map(|s| s.id).collect();

        for op in ops {
            match op {
                SlotOp::Upload(i) => store.upload(ids[i], vec![i as u8; 8]),
                SlotOp::Remove(i) => store.remove(ids[i]),
            }
        }

        prop_assert_eq!(store.live_handles(), store.filled_count());
        for slot in store.slots() {
            if let Some(handle) = slot.original {
                prop_assert!(store.bytes(handle).is_some());
            }
        }
    }

    /// reorder(i, j) then reorder(j, i) is the identity on the whole
    /// store, whatever the indices.
    #[test]
    fn reorder_roundtrip_is_identity(from in 0usize..6, to in 0usize..6) {
        let mut store = SlotStore::new(TemplateSize::Six);
        let ids: Vec<_> = store.slots().iter().map(|s| s.id).collect();
        store.upload(ids[2], vec![7]);

        let before = snapshot(&store);
        store.reorder(from, to);
        store.reorder(to, from);
        prop_assert_eq!(snapshot(&store), before);
    }
}
