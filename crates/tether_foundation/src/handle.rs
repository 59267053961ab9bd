//! Generational handles for arena-resident nodes and lists.
//!
//! A handle pairs a slot index with the generation the slot had when the
//! handle was issued. Generations are odd while the slot is live and even
//! while it is free, so a handle that outlives its slot is detected in O(1).

use std::fmt;

/// Handle to a list node stored in a `ListArena`.
///
/// # Layout
/// - `index`: 32-bit slot index into node storage
/// - `generation`: 32-bit generation counter
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct NodeId {
    /// Index into node storage.
    pub index: u32,
    /// Generation counter for stale handle detection.
    pub generation: u32,
}

impl NodeId {
    /// Creates a new node handle with the given index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }

    /// Returns a sentinel value representing "no node".
    ///
    /// This uses `u32::MAX` as the index, which is never allocated.
    #[must_use]
    pub const fn null() -> Self {
        Self {
            index: u32::MAX,
            generation: 0,
        }
    }

    /// Returns true if this is the null sentinel value.
    #[must_use]
    pub const fn is_null(self) -> bool {
        self.index == u32::MAX
    }
}

impl fmt::Debug for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "NodeId(null)")
        } else {
            write!(f, "NodeId({}v{})", self.index, self.generation)
        }
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_null() {
            write!(f, "Node(null)")
        } else {
            write!(f, "Node({})", self.index)
        }
    }
}

/// Handle to a list header stored in a `ListArena`.
///
/// Nodes keep a `ListId` as their back-reference to the owning list. It is a
/// non-owning association: the arena validates it on every use.
#[derive(Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ListId {
    /// Index into list storage.
    pub index: u32,
    /// Generation counter for stale handle detection.
    pub generation: u32,
}

impl ListId {
    /// Creates a new list handle with the given index and generation.
    #[must_use]
    pub const fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

impl fmt::Debug for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ListId({}v{})", self.index, self.generation)
    }
}

impl fmt::Display for ListId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "List({})", self.index)
    }
}

/// Returns true if `generation` marks a live slot.
#[must_use]
pub const fn is_live_generation(generation: u32) -> bool {
    generation % 2 == 1
}
