//! Sizing and growth configuration for Tether containers.

/// How a `DynamicArray` reserves backing storage when it grows.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum GrowthPolicy {
    /// Reserve exactly the requested element count.
    #[default]
    Exact,
    /// Reserve geometrically (amortized O(1) appends).
    Doubling,
}

impl GrowthPolicy {
    /// Returns the capacity to reserve for `required` elements when
    /// `current` capacity is already allocated.
    #[must_use]
    pub fn target_capacity(self, current: usize, required: usize) -> usize {
        if required <= current {
            return current;
        }
        match self {
            Self::Exact => required,
            Self::Doubling => required.max(current.saturating_mul(2)).max(4),
        }
    }
}

/// Configuration for the array family.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ArrayConfig {
    /// Growth strategy for the backing buffer.
    pub growth: GrowthPolicy,
    /// Capacity reserved on the first growth from empty (0 = none).
    pub initial_capacity: usize,
}

impl ArrayConfig {
    /// Exact growth with no up-front reservation.
    #[must_use]
    pub fn exact() -> Self {
        Self::default()
    }

    /// Doubling growth for append-heavy workloads.
    #[must_use]
    pub fn amortized() -> Self {
        Self {
            growth: GrowthPolicy::Doubling,
            initial_capacity: 8,
        }
    }

    /// Builder method to set the growth policy.
    #[must_use]
    pub fn with_growth(mut self, growth: GrowthPolicy) -> Self {
        self.growth = growth;
        self
    }

    /// Builder method to set the initial capacity.
    #[must_use]
    pub fn with_initial_capacity(mut self, capacity: usize) -> Self {
        self.initial_capacity = capacity;
        self
    }
}

/// Configuration for a `ListArena`.
///
/// Controls how many node and list slots are reserved up front.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CollectionsConfig {
    /// Node slots to reserve at construction.
    pub node_capacity: usize,
    /// List slots to reserve at construction.
    pub list_capacity: usize,
}

impl CollectionsConfig {
    /// Builder method to set the node capacity.
    #[must_use]
    pub fn with_node_capacity(mut self, capacity: usize) -> Self {
        self.node_capacity = capacity;
        self
    }

    /// Builder method to set the list capacity.
    #[must_use]
    pub fn with_list_capacity(mut self, capacity: usize) -> Self {
        self.list_capacity = capacity;
        self
    }
}
