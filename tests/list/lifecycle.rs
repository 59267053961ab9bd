//! Integration tests for node and list lifecycle
//!
//! Tests destruction ordering and stale-handle detection.

use tether::foundation::{CollectionsConfig, ErrorKind};
use tether::list::ListArena;

#[test]
fn destroying_linked_node_unlinks_it() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let mut nodes = Vec::new();
    for i in 0..3 {
        let node = arena.create_node(i).unwrap();
        arena.insert_at_tail(list, node).unwrap();
        nodes.push(node);
    }

    // No remove_self beforehand.
    assert_eq!(arena.destroy_node(nodes[1]).unwrap(), 1);

    let remaining: Vec<_> = arena.iter(list).map(|(_, v)| *v).collect();
    assert_eq!(remaining, vec![0, 2]);
    assert_eq!(arena.next(nodes[0]), Some(nodes[2]));
    arena.check_list(list).unwrap();
}

#[test]
fn destroyed_node_handle_goes_stale() {
    let mut arena = ListArena::new();
    let node = arena.create_node("gone").unwrap();
    arena.destroy_node(node).unwrap();

    assert!(!arena.contains_node(node));
    assert!(arena.get(node).is_none());
    let err = arena.destroy_node(node).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StaleNode(_)));
    let err = arena.remove_self(node).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::StaleNode(_)));
}

#[test]
fn reused_slot_does_not_revive_old_handle() {
    let mut arena = ListArena::new();
    let old = arena.create_node(1).unwrap();
    arena.destroy_node(old).unwrap();
    let new = arena.create_node(2).unwrap();

    assert_eq!(old.index, new.index);
    assert_ne!(old, new);
    assert!(arena.get(old).is_none());
    assert_eq!(arena.get(new), Some(&2));
}

#[test]
fn destroy_list_detaches_members() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let mut nodes = Vec::new();
    for i in 0..4 {
        let node = arena.create_node(i).unwrap();
        arena.insert_at_tail(list, node).unwrap();
        nodes.push(node);
    }

    assert_eq!(arena.destroy_list(list).unwrap(), 4);
    assert!(!arena.contains_list(list));
    for node in &nodes {
        assert!(arena.contains_node(*node));
        assert_eq!(arena.owner(*node), None);
    }

    // Detached nodes can join another list.
    let other = arena.create_list().unwrap();
    arena.insert_at_tail(other, nodes[2]).unwrap();
    assert_eq!(arena.len(other), 1);
}

#[test]
fn stale_list_is_rejected() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    arena.destroy_list(list).unwrap();
    let node = arena.create_node(()).unwrap();

    let err = arena.insert_at_tail(list, node).unwrap_err();
    assert_eq!(err.kind, ErrorKind::StaleList(list));
    assert_eq!(arena.len(list), 0);
    assert!(arena.iter(list).next().is_none());
    assert!(arena.check_list(list).is_err());
}

#[test]
fn delete_all_destroys_members() {
    let mut arena = ListArena::new();
    let keep = arena.create_list().unwrap();
    let purge = arena.create_list().unwrap();
    let survivor = arena.create_node("keep").unwrap();
    arena.insert_at_tail(keep, survivor).unwrap();
    let mut doomed = Vec::new();
    for name in ["x", "y", "z"] {
        let node = arena.create_node(name).unwrap();
        arena.insert_at_tail(purge, node).unwrap();
        doomed.push(node);
    }

    assert_eq!(arena.delete_all(purge).unwrap(), 3);
    assert!(arena.is_empty(purge));
    assert!(arena.contains_list(purge));
    assert!(doomed.iter().all(|node| !arena.contains_node(*node)));
    assert_eq!(arena.node_count(), 1);
    assert_eq!(arena.len(keep), 1);
}

#[test]
fn delete_all_on_empty_list() {
    let mut arena: ListArena<u8> = ListArena::new();
    let list = arena.create_list().unwrap();
    assert_eq!(arena.delete_all(list).unwrap(), 0);
}

#[test]
fn payload_mutation_through_handle() {
    let mut arena = ListArena::with_config(&CollectionsConfig::default().with_node_capacity(16));
    let list = arena.create_list().unwrap();
    let node = arena.create_node(String::from("draft")).unwrap();
    arena.insert_at_tail(list, node).unwrap();

    arena.get_mut(node).unwrap().push_str(" final");
    let (_, value) = arena.iter(list).next().unwrap();
    assert_eq!(value, "draft final");
}

#[test]
fn node_ids_lists_live_nodes() {
    let mut arena = ListArena::new();
    let a = arena.create_node('a').unwrap();
    let b = arena.create_node('b').unwrap();
    let c = arena.create_node('c').unwrap();
    arena.destroy_node(b).unwrap();

    let ids: Vec<_> = arena.node_ids().collect();
    assert_eq!(ids, vec![a, c]);
}
