//! Intrusive doubly-linked lists over a shared node arena.
//!
//! Every node lives in a [`ListArena`] slot and carries its own link state:
//! the owning list, its previous neighbour, and its next neighbour. Because
//! the owner is stored on the node, a node can detach itself
//! ([`ListArena::remove_self`]) without the caller naming its list.
//!
//! # Invariants
//!
//! - A node is linked into at most one list at a time.
//! - A detached node has no owner and no neighbours.
//! - For every list, walking head→tail and tail→head both visit exactly
//!   `len` nodes; head has no previous and tail has no next.
//! - A node is never freed while linked: destruction unlinks it first.
//!
//! # Example
//!
//! ```
//! use tether_list::ListArena;
//!
//! let mut arena: ListArena<&str> = ListArena::new();
//! let members = arena.create_list().unwrap();
//!
//! let a = arena.create_node("a").unwrap();
//! let b = arena.create_node("b").unwrap();
//! arena.insert_at_tail(members, a).unwrap();
//! arena.insert_at_tail(members, b).unwrap();
//! assert_eq!(arena.len(members), 2);
//!
//! // The node knows its owner; no list handle is needed to detach it.
//! assert!(arena.remove_self(a).unwrap());
//! assert_eq!(arena.head(members), Some(b));
//! ```

use tether_foundation::{CollectionsConfig, Error, ListId, NodeId, Result};
use tracing::{debug, trace, warn};

use crate::observer::{NoopObserver, RemovalObserver};
use crate::slots::SlotStore;

/// Payload plus link state for one node.
#[derive(Debug)]
struct NodeEntry<T> {
    value: T,
    owner: Option<ListId>,
    prev: Option<NodeId>,
    next: Option<NodeId>,
}

#[derive(Debug, Default, Clone, Copy)]
struct ListHeader {
    head: Option<NodeId>,
    tail: Option<NodeId>,
    len: usize,
}

/// Storage for nodes and the lists that link them.
///
/// Lists do not own their nodes' payloads; they only own link state. Nodes
/// outlive the list they were in: destroying a list detaches its members.
#[derive(Debug)]
pub struct ListArena<T, O = NoopObserver> {
    nodes: SlotStore<NodeEntry<T>>,
    lists: SlotStore<ListHeader>,
    observer: O,
}

impl<T> ListArena<T> {
    /// Creates an empty arena with no removal observer.
    #[must_use]
    pub fn new() -> Self {
        Self::with_observer(NoopObserver)
    }

    /// Creates an empty arena pre-sized by `config`.
    #[must_use]
    pub fn with_config(config: &CollectionsConfig) -> Self {
        Self::with_config_and_observer(config, NoopObserver)
    }
}

impl<T, O: RemovalObserver<T> + Default> Default for ListArena<T, O> {
    fn default() -> Self {
        Self::with_observer(O::default())
    }
}

impl<T, O: RemovalObserver<T>> ListArena<T, O> {
    /// Creates an empty arena that reports removals to `observer`.
    #[must_use]
    pub fn with_observer(observer: O) -> Self {
        Self::with_config_and_observer(&CollectionsConfig::default(), observer)
    }

    /// Creates an empty arena pre-sized by `config` reporting to `observer`.
    #[must_use]
    pub fn with_config_and_observer(config: &CollectionsConfig, observer: O) -> Self {
        Self {
            nodes: SlotStore::with_capacity(config.node_capacity),
            lists: SlotStore::with_capacity(config.list_capacity),
            observer,
        }
    }

    // =========================================================================
    // Creation and destruction
    // =========================================================================

    /// Creates a new empty list.
    pub fn create_list(&mut self) -> Result<ListId> {
        let (index, generation) = self.lists.insert(ListHeader::default())?;
        Ok(ListId::new(index, generation))
    }

    /// Creates a new detached node holding `value`.
    pub fn create_node(&mut self, value: T) -> Result<NodeId> {
        let (index, generation) = self.nodes.insert(NodeEntry {
            value,
            owner: None,
            prev: None,
            next: None,
        })?;
        Ok(NodeId::new(index, generation))
    }

    /// Destroys a node and returns its payload.
    ///
    /// A node that is still linked is unlinked first, so its list never
    /// keeps a link to a freed slot.
    pub fn destroy_node(&mut self, node: NodeId) -> Result<T> {
        self.remove_self(node)?;
        self.nodes
            .remove(node.index, node.generation)
            .map(|entry| entry.value)
            .ok_or_else(|| Error::stale_node(node))
    }

    /// Destroys a list, detaching every member.
    ///
    /// Member nodes survive in the arena, detached. Returns how many were
    /// detached.
    pub fn destroy_list(&mut self, list: ListId) -> Result<usize> {
        let mut detached = 0;
        while let Some(head) = self.header(list)?.head {
            self.remove_self(head)?;
            detached += 1;
        }
        self.lists.remove(list.index, list.generation);
        debug!(%list, detached, "destroyed list");
        Ok(detached)
    }

    /// Detaches and destroys every node in `list`, head first.
    ///
    /// The observer sees each node exactly once, before its payload is
    /// dropped. Returns how many nodes were destroyed.
    pub fn delete_all(&mut self, list: ListId) -> Result<usize> {
        let mut deleted = 0;
        while let Some(head) = self.header(list)?.head {
            drop(self.destroy_node(head)?);
            deleted += 1;
        }
        debug!(%list, deleted, "deleted all list members");
        Ok(deleted)
    }

    // =========================================================================
    // Linking
    // =========================================================================

    /// Links `node` immediately after `after`, or at the head when `after`
    /// is `None`.
    ///
    /// # Errors
    ///
    /// - `InvalidArgument` if `after` is `node` itself.
    /// - `NodeAlreadyLinked` if `node` already belongs to a list.
    /// - `NodeNotInList` if `after` is not a member of `list`.
    /// - `StaleNode` / `StaleList` for handles that are no longer live.
    pub fn insert_after(&mut self, list: ListId, node: NodeId, after: Option<NodeId>) -> Result<()> {
        if after == Some(node) {
            return Err(Error::invalid_argument(format!("{node:?} cannot be linked after itself"))
                .in_operation("insert_after"));
        }
        let header = *self.header(list)?;
        if let Some(owner) = self.node(node)?.owner {
            return Err(Error::node_already_linked(node, owner).in_operation("insert_after"));
        }
        let next = match after {
            Some(anchor) => {
                let entry = self.node(anchor)?;
                if entry.owner != Some(list) {
                    return Err(Error::node_not_in_list(anchor, list).in_operation("insert_after"));
                }
                entry.next
            }
            None => header.head,
        };

        let entry = self.node_mut(node)?;
        entry.owner = Some(list);
        entry.prev = after;
        entry.next = next;

        match after {
            Some(prev) => self.node_mut(prev)?.next = Some(node),
            None => self.header_mut(list)?.head = Some(node),
        }
        match next {
            Some(next) => self.node_mut(next)?.prev = Some(node),
            None => self.header_mut(list)?.tail = Some(node),
        }
        self.header_mut(list)?.len += 1;

        trace!(%list, %node, "linked node");
        Ok(())
    }

    /// Links `node` immediately before `before`.
    pub fn insert_before(&mut self, list: ListId, node: NodeId, before: NodeId) -> Result<()> {
        let entry = self.node(before)?;
        if entry.owner != Some(list) {
            return Err(Error::node_not_in_list(before, list).in_operation("insert_before"));
        }
        let prev = entry.prev;
        self.insert_after(list, node, prev)
    }

    /// Links `node` at the tail of `list`.
    pub fn insert_at_tail(&mut self, list: ListId, node: NodeId) -> Result<()> {
        let tail = self.header(list)?.tail;
        self.insert_after(list, node, tail)
    }

    /// Unlinks `node` from whichever list owns it.
    ///
    /// Returns `Ok(false)` without side effects when the node is detached.
    /// Otherwise splices it out, clears its links, notifies the observer,
    /// and returns `Ok(true)`.
    pub fn remove_self(&mut self, node: NodeId) -> Result<bool> {
        let Some(list) = self.unlink(node)? else {
            return Ok(false);
        };
        if let Some(entry) = self.nodes.get(node.index, node.generation) {
            self.observer.on_element_removed(list, node, &entry.value);
        }
        trace!(%list, %node, "unlinked node");
        Ok(true)
    }

    fn unlink(&mut self, node: NodeId) -> Result<Option<ListId>> {
        let entry = self.node_mut(node)?;
        let Some(list) = entry.owner.take() else {
            return Ok(None);
        };
        let prev = entry.prev.take();
        let next = entry.next.take();

        match prev {
            Some(prev) => self.node_mut(prev)?.next = next,
            None => self.header_mut(list)?.head = next,
        }
        match next {
            Some(next) => self.node_mut(next)?.prev = prev,
            None => self.header_mut(list)?.tail = prev,
        }
        self.header_mut(list)?.len -= 1;
        Ok(Some(list))
    }

    // =========================================================================
    // Accessors
    // =========================================================================

    /// Returns the payload of a live node.
    #[must_use]
    pub fn get(&self, node: NodeId) -> Option<&T> {
        self.nodes
            .get(node.index, node.generation)
            .map(|entry| &entry.value)
    }

    /// Returns the payload of a live node mutably.
    pub fn get_mut(&mut self, node: NodeId) -> Option<&mut T> {
        self.nodes
            .get_mut(node.index, node.generation)
            .map(|entry| &mut entry.value)
    }

    /// Returns the list that currently owns `node`.
    #[must_use]
    pub fn owner(&self, node: NodeId) -> Option<ListId> {
        self.nodes.get(node.index, node.generation)?.owner
    }

    /// Returns true if `node` is live and linked into a list.
    #[must_use]
    pub fn is_linked(&self, node: NodeId) -> bool {
        self.owner(node).is_some()
    }

    /// Returns the node after `node` in its list.
    #[must_use]
    pub fn next(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.index, node.generation)?.next
    }

    /// Returns the node before `node` in its list.
    #[must_use]
    pub fn previous(&self, node: NodeId) -> Option<NodeId> {
        self.nodes.get(node.index, node.generation)?.prev
    }

    /// Returns the first node of `list`.
    #[must_use]
    pub fn head(&self, list: ListId) -> Option<NodeId> {
        self.lists.get(list.index, list.generation)?.head
    }

    /// Returns the last node of `list`.
    #[must_use]
    pub fn tail(&self, list: ListId) -> Option<NodeId> {
        self.lists.get(list.index, list.generation)?.tail
    }

    /// Returns the number of nodes linked into `list` (0 for a stale handle).
    #[must_use]
    pub fn len(&self, list: ListId) -> usize {
        self.lists
            .get(list.index, list.generation)
            .map_or(0, |header| header.len)
    }

    /// Returns true if `list` has no nodes.
    #[must_use]
    pub fn is_empty(&self, list: ListId) -> bool {
        self.len(list) == 0
    }

    /// Returns true if `node` refers to a live node.
    #[must_use]
    pub fn contains_node(&self, node: NodeId) -> bool {
        self.nodes.get(node.index, node.generation).is_some()
    }

    /// Returns true if `list` refers to a live list.
    #[must_use]
    pub fn contains_list(&self, list: ListId) -> bool {
        self.lists.get(list.index, list.generation).is_some()
    }

    /// Returns the number of live nodes, linked or not.
    #[must_use]
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    /// Returns the number of live lists.
    #[must_use]
    pub fn list_count(&self) -> usize {
        self.lists.len()
    }

    /// Iterates over every live node handle in slot order.
    pub fn node_ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.nodes
            .iter()
            .map(|(index, generation, _)| NodeId::new(index, generation))
    }

    /// Iterates `list` from head to tail.
    #[must_use]
    pub fn iter(&self, list: ListId) -> Iter<'_, T, O> {
        Iter {
            arena: self,
            cursor: self.head(list),
            remaining: self.len(list),
            forward: true,
        }
    }

    /// Iterates `list` from tail to head.
    #[must_use]
    pub fn iter_rev(&self, list: ListId) -> Iter<'_, T, O> {
        Iter {
            arena: self,
            cursor: self.tail(list),
            remaining: self.len(list),
            forward: false,
        }
    }

    /// Returns the removal observer.
    #[must_use]
    pub fn observer(&self) -> &O {
        &self.observer
    }

    /// Returns the removal observer mutably.
    pub fn observer_mut(&mut self) -> &mut O {
        &mut self.observer
    }

    /// Walks `list` in both directions and verifies its link invariants.
    ///
    /// # Errors
    ///
    /// Returns `CorruptList` describing the first inconsistency found.
    pub fn check_list(&self, list: ListId) -> Result<()> {
        let header = *self.header(list)?;
        let corrupt = |reason: String| {
            warn!(%list, %reason, "list failed consistency check");
            Error::corrupt_list(list, reason)
        };

        let mut count = 0;
        let mut prev = None;
        let mut cursor = header.head;
        while let Some(id) = cursor {
            if count == header.len {
                return Err(corrupt(format!("more than {} nodes reachable from head", header.len)));
            }
            let entry = self
                .nodes
                .get(id.index, id.generation)
                .ok_or_else(|| corrupt(format!("dangling link to {id:?}")))?;
            if entry.owner != Some(list) {
                return Err(corrupt(format!("{id:?} is owned by {:?}", entry.owner)));
            }
            if entry.prev != prev {
                return Err(corrupt(format!("{id:?} has previous {:?}, expected {prev:?}", entry.prev)));
            }
            prev = Some(id);
            cursor = entry.next;
            count += 1;
        }
        if count != header.len {
            return Err(corrupt(format!("{count} nodes reachable from head, len is {}", header.len)));
        }
        if prev != header.tail {
            return Err(corrupt(format!("forward walk ends at {prev:?}, tail is {:?}", header.tail)));
        }

        let backward = self.iter_rev(list).count();
        if backward != header.len {
            return Err(corrupt(format!("{backward} nodes reachable from tail, len is {}", header.len)));
        }
        Ok(())
    }

    fn node(&self, node: NodeId) -> Result<&NodeEntry<T>> {
        self.nodes
            .get(node.index, node.generation)
            .ok_or_else(|| Error::stale_node(node))
    }

    fn node_mut(&mut self, node: NodeId) -> Result<&mut NodeEntry<T>> {
        self.nodes
            .get_mut(node.index, node.generation)
            .ok_or_else(|| Error::stale_node(node))
    }

    fn header(&self, list: ListId) -> Result<&ListHeader> {
        self.lists
            .get(list.index, list.generation)
            .ok_or_else(|| Error::stale_list(list))
    }

    fn header_mut(&mut self, list: ListId) -> Result<&mut ListHeader> {
        self.lists
            .get_mut(list.index, list.generation)
            .ok_or_else(|| Error::stale_list(list))
    }
}

/// Iterator over the members of one list, yielding `(NodeId, &T)`.
pub struct Iter<'a, T, O> {
    arena: &'a ListArena<T, O>,
    cursor: Option<NodeId>,
    remaining: usize,
    forward: bool,
}

impl<'a, T, O> Iterator for Iter<'a, T, O> {
    type Item = (NodeId, &'a T);

    fn next(&mut self) -> Option<Self::Item> {
        if self.remaining == 0 {
            return None;
        }
        let id = self.cursor?;
        let entry = self.arena.nodes.get(id.index, id.generation)?;
        self.cursor = if self.forward { entry.next } else { entry.prev };
        self.remaining -= 1;
        Some((id, &entry.value))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (0, Some(self.remaining))
    }
}
