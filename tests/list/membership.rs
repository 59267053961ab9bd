//! Integration tests for list membership
//!
//! Tests linking, ordering, and moving nodes between lists.

use tether::foundation::{ErrorKind, ListId, NodeId};
use tether::list::ListArena;

fn values(arena: &ListArena<&'static str>, list: ListId) -> Vec<&'static str> {
    arena.iter(list).map(|(_, v)| *v).collect()
}

fn spawn(arena: &mut ListArena<&'static str>, list: ListId, names: &[&'static str]) -> Vec<NodeId> {
    names
        .iter()
        .map(|name| {
            let node = arena.create_node(*name).unwrap();
            arena.insert_at_tail(list, node).unwrap();
            node
        })
        .collect()
}

// =============================================================================
// Ordering
// =============================================================================

#[test]
fn tail_inserts_preserve_order() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let nodes = spawn(&mut arena, list, &["a", "b", "c"]);

    assert_eq!(values(&arena, list), vec!["a", "b", "c"]);
    assert_eq!(arena.head(list), Some(nodes[0]));
    assert_eq!(arena.tail(list), Some(nodes[2]));
    assert_eq!(arena.len(list), 3);
    arena.check_list(list).unwrap();
}

#[test]
fn insert_after_none_links_at_head() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    spawn(&mut arena, list, &["b", "c"]);

    let a = arena.create_node("a").unwrap();
    arena.insert_after(list, a, None).unwrap();
    assert_eq!(values(&arena, list), vec!["a", "b", "c"]);
    assert_eq!(arena.previous(a), None);
    arena.check_list(list).unwrap();
}

#[test]
fn insert_before_and_after_anchor() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let nodes = spawn(&mut arena, list, &["a", "d"]);

    let c = arena.create_node("c").unwrap();
    arena.insert_before(list, c, nodes[1]).unwrap();
    let b = arena.create_node("b").unwrap();
    arena.insert_after(list, b, Some(nodes[0])).unwrap();

    assert_eq!(values(&arena, list), vec!["a", "b", "c", "d"]);
    let reversed: Vec<_> = arena.iter_rev(list).map(|(_, v)| *v).collect();
    assert_eq!(reversed, vec!["d", "c", "b", "a"]);
    arena.check_list(list).unwrap();
}

#[test]
fn neighbours_follow_links() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let nodes = spawn(&mut arena, list, &["x", "y", "z"]);

    assert_eq!(arena.next(nodes[0]), Some(nodes[1]));
    assert_eq!(arena.next(nodes[2]), None);
    assert_eq!(arena.previous(nodes[1]), Some(nodes[0]));
    assert_eq!(arena.owner(nodes[1]), Some(list));
}

// =============================================================================
// Self-removal
// =============================================================================

#[test]
fn remove_self_from_middle() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let nodes = spawn(&mut arena, list, &["a", "b", "c"]);

    assert!(arena.remove_self(nodes[1]).unwrap());
    assert_eq!(values(&arena, list), vec!["a", "c"]);
    assert_eq!(arena.next(nodes[0]), Some(nodes[2]));
    assert_eq!(arena.previous(nodes[2]), Some(nodes[0]));
    assert!(!arena.is_linked(nodes[1]));
    assert_eq!(arena.next(nodes[1]), None);
    arena.check_list(list).unwrap();
}

#[test]
fn remove_self_from_ends() {
    let mut arena = ListArena::new();
    let list = arena.create_list().unwrap();
    let nodes = spawn(&mut arena, list, &["a", "b", "c"]);

    arena.remove_self(nodes[0]).unwrap();
    arena.remove_self(nodes[2]).unwrap();
    assert_eq!(arena.head(list), Some(nodes[1]));
    assert_eq!(arena.tail(list), Some(nodes[1]));

    arena.remove_self(nodes[1]).unwrap();
    assert!(arena.is_empty(list));
    assert_eq!(arena.head(list), None);
    assert_eq!(arena.tail(list), None);
}

#[test]
fn remove_self_on_detached_is_noop() {
    let mut arena: ListArena<&str> = ListArena::new();
    let node = arena.create_node("loose").unwrap();
    assert!(!arena.remove_self(node).unwrap());
    assert!(arena.contains_node(node));
}

// =============================================================================
// Ownership contracts
// =============================================================================

#[test]
fn node_belongs_to_one_list() {
    let mut arena = ListArena::new();
    let first = arena.create_list().unwrap();
    let second = arena.create_list().unwrap();
    let node = arena.create_node("n").unwrap();
    arena.insert_at_tail(first, node).unwrap();

    let err = arena.insert_at_tail(second, node).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NodeAlreadyLinked { node, owner: first });
    assert!(arena.is_empty(second));
    assert_eq!(arena.owner(node), Some(first));
}

#[test]
fn anchor_must_be_in_target_list() {
    let mut arena = ListArena::new();
    let first = arena.create_list().unwrap();
    let second = arena.create_list().unwrap();
    let anchor = spawn(&mut arena, first, &["anchor"])[0];
    let node = arena.create_node("n").unwrap();

    let err = arena.insert_after(second, node, Some(anchor)).unwrap_err();
    assert_eq!(err.kind, ErrorKind::NodeNotInList { node: anchor, list: second });
    assert!(!arena.is_linked(node));

    let err = arena.insert_before(second, node, anchor).unwrap_err();
    assert!(matches!(err.kind, ErrorKind::NodeNotInList { .. }));
}

#[test]
fn move_between_lists() {
    let mut arena = ListArena::new();
    let from = arena.create_list().unwrap();
    let to = arena.create_list().unwrap();
    let nodes = spawn(&mut arena, from, &["a", "b"]);

    arena.remove_self(nodes[0]).unwrap();
    arena.insert_at_tail(to, nodes[0]).unwrap();

    assert_eq!(values(&arena, from), vec!["b"]);
    assert_eq!(values(&arena, to), vec!["a"]);
    assert_eq!(arena.owner(nodes[0]), Some(to));
    arena.check_list(from).unwrap();
    arena.check_list(to).unwrap();
}

#[test]
fn lists_are_independent() {
    let mut arena = ListArena::new();
    let lists: Vec<_> = (0..3).map(|_| arena.create_list().unwrap()).collect();
    for (i, list) in lists.iter().enumerate() {
        for _ in 0..=i {
            let node = arena.create_node("x").unwrap();
            arena.insert_at_tail(*list, node).unwrap();
        }
    }

    let lens: Vec<_> = lists.iter().map(|l| arena.len(*l)).collect();
    assert_eq!(lens, vec![1, 2, 3]);
    assert_eq!(arena.node_count(), 6);
    assert_eq!(arena.list_count(), 3);
}
