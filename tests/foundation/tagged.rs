//! Integration tests for liveness tags
//!
//! Probes taken from tagged objects must keep answering after the object
//! has been destroyed by a container.

use tether::array::{OwningPointerArray, SortedOwningArray};
use tether::foundation::tagged::{DEAD_MARKER, LIVE_MARKER};
use tether::foundation::Tagged;
use tether::list::ListArena;

#[test]
fn probe_survives_owning_array_delete() {
    let mut array = OwningPointerArray::new();
    array.add(Tagged::new("payload")).unwrap();
    let probe = array.get(0).unwrap().probe();

    assert!(probe.is_live());
    assert_eq!(probe.marker(), LIVE_MARKER);

    array.delete_at(0).unwrap();
    assert_eq!(probe.marker(), DEAD_MARKER);
    #[cfg(debug_assertions)]
    assert!(!probe.is_live());
}

#[test]
fn probe_tracks_sorted_replacement() {
    let mut table = SortedOwningArray::new(|key: &u32, item: &Tagged<u32>| key.cmp(&**item));
    table.add_sort_key(Tagged::new(7), &7).unwrap();
    let original = table.get_key(&7).unwrap().probe();

    table.add_sort_key(Tagged::new(7), &7).unwrap();
    let replacement = table.get_key(&7).unwrap().probe();

    assert_eq!(original.marker(), DEAD_MARKER);
    assert_eq!(replacement.marker(), LIVE_MARKER);
}

#[test]
fn probe_tracks_list_node_payload() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let node = arena.create_node(Tagged::new(1u8)).unwrap();
    arena.insert_at_tail(list, node).unwrap();
    let probe = arena.get(node).unwrap().probe();

    // Unlinking keeps the payload alive.
    arena.remove_self(node).unwrap();
    assert_eq!(probe.marker(), LIVE_MARKER);

    drop(arena.destroy_node(node).unwrap());
    assert_eq!(probe.marker(), DEAD_MARKER);
}

#[test]
fn probes_clone_independently() {
    let tagged = Tagged::new(vec![1, 2, 3]);
    let first = tagged.probe();
    let second = first.clone();
    assert_eq!(tagged.len(), 3);

    let inner = tagged.into_inner();
    assert_eq!(inner, vec![1, 2, 3]);
    assert_eq!(first.marker(), DEAD_MARKER);
    assert_eq!(second.marker(), DEAD_MARKER);
}
