//! Removal notifications for list owners.

use tether_foundation::{ListId, NodeId};

/// Receives a callback whenever a node leaves a list.
///
/// Fires once per removal, whether the node detached itself, was destroyed
/// while linked, or was cleared by `delete_all` / `destroy_list`. The
/// payload is still alive when the callback runs.
pub trait RemovalObserver<T> {
    /// Called after `node` has been unlinked from `list`.
    fn on_element_removed(&mut self, list: ListId, node: NodeId, value: &T) {
        let _ = (list, node, value);
    }
}

/// Observer that ignores every removal.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoopObserver;

impl<T> RemovalObserver<T> for NoopObserver {}

/// Observer that records every removal in order.
///
/// Useful for indexes that mirror list membership.
#[derive(Clone, Debug, Default)]
pub struct RemovalLog {
    /// `(list, node)` pairs in removal order.
    pub removed: Vec<(ListId, NodeId)>,
}

impl RemovalLog {
    /// Creates an empty log.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns how many removals have been seen for `list`.
    #[must_use]
    pub fn count_for(&self, list: ListId) -> usize {
        self.removed.iter().filter(|(l, _)| *l == list).count()
    }
}

impl<T> RemovalObserver<T> for RemovalLog {
    fn on_element_removed(&mut self, list: ListId, node: NodeId, _value: &T) {
        self.removed.push((list, node));
    }
}
