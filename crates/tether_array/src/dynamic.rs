//! Growable contiguous array with construct/destruct hooks.
//!
//! [`DynamicArray`] keeps an exclusively owned buffer and a logical count.
//! Resizing runs hooks only over the delta: growth constructs the new tail
//! slots, shrinking destructs the discarded ones. Shifts caused by
//! `insert_at` / `remove_at` move elements without touching the hooks.
//!
//! An empty array never holds a backing allocation.

use std::cmp::Ordering;
use std::fmt;
use std::mem;
use std::ops::{Index, IndexMut};

use tether_foundation::{ArrayConfig, Error, Result};
use tracing::trace;

use crate::hooks::{DefaultHooks, ElementHooks};

/// Contiguous, resizable sequence with pluggable element lifecycle.
///
/// # Example
///
/// ```
/// use tether_array::DynamicArray;
///
/// let mut array: DynamicArray<i32> = DynamicArray::new();
/// array.add(10).unwrap();
/// array.add(20).unwrap();
/// array.insert_at(1, 15).unwrap();
/// assert_eq!(array.as_slice(), &[10, 15, 20]);
///
/// array.remove_at(0).unwrap();
/// assert_eq!(*array.get(0).unwrap(), 15);
/// ```
pub struct DynamicArray<T, H: ElementHooks<T> = DefaultHooks> {
    items: Vec<T>,
    hooks: H,
    config: ArrayConfig,
}

impl<T: Default> DynamicArray<T> {
    /// Creates an empty array using `Default` for new slots.
    #[must_use]
    pub fn new() -> Self {
        Self::with_hooks(DefaultHooks)
    }

    /// Creates an empty array with the given growth configuration.
    #[must_use]
    pub fn with_config(config: ArrayConfig) -> Self {
        Self::with_hooks_and_config(DefaultHooks, config)
    }
}

impl<T: Default> Default for DynamicArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, H: ElementHooks<T>> DynamicArray<T, H> {
    /// Creates an empty array driven by `hooks`.
    #[must_use]
    pub fn with_hooks(hooks: H) -> Self {
        Self::with_hooks_and_config(hooks, ArrayConfig::default())
    }

    /// Creates an empty array driven by `hooks` with the given configuration.
    #[must_use]
    pub fn with_hooks_and_config(hooks: H, config: ArrayConfig) -> Self {
        Self {
            items: Vec::new(),
            hooks,
            config,
        }
    }

    /// Returns the number of elements.
    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns true if the array is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Returns the capacity of the backing buffer (0 when empty).
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.items.capacity()
    }

    /// Returns the hooks.
    #[must_use]
    pub fn hooks(&self) -> &H {
        &self.hooks
    }

    /// Returns the hooks mutably.
    pub fn hooks_mut(&mut self) -> &mut H {
        &mut self.hooks
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &ArrayConfig {
        &self.config
    }

    /// Resizes to exactly `count` elements.
    ///
    /// Growing constructs slots `[len, count)`; shrinking destructs slots
    /// `[count, len)` from the highest index down. Shrinking to zero also
    /// releases the buffer.
    ///
    /// # Errors
    ///
    /// Returns `AllocationFailed` if the buffer cannot grow; the array is
    /// left unchanged.
    pub fn set_count(&mut self, count: usize) -> Result<()> {
        let old = self.items.len();
        match count.cmp(&old) {
            Ordering::Greater => {
                self.reserve_for(count)?;
                for index in old..count {
                    let value = self.hooks.construct(index);
                    self.items.push(value);
                }
            }
            Ordering::Less => {
                self.truncate_with_hooks(count);
                self.release_if_empty();
            }
            Ordering::Equal => {}
        }
        Ok(())
    }

    /// Destructs every element and releases the buffer.
    pub fn clear(&mut self) {
        self.truncate_with_hooks(0);
        self.release_if_empty();
    }

    /// Appends `value`, returning its index.
    pub fn add(&mut self, value: T) -> Result<usize> {
        let index = self.items.len();
        self.set_at_grow(index, value)?;
        Ok(index)
    }

    /// Writes `value` at `index`, growing first if `index >= len`.
    ///
    /// Slots between the old length and `index` are constructed; the slot
    /// at `index` receives `value` directly. An existing occupant is
    /// destructed.
    pub fn set_at_grow(&mut self, index: usize, value: T) -> Result<()> {
        if index < self.items.len() {
            return self.set_at(index, value);
        }
        let required = index
            .checked_add(1)
            .ok_or_else(|| Error::allocation_failed(index))?;
        self.reserve_for(required)?;
        self.set_count(index)?;
        self.items.push(value);
        Ok(())
    }

    /// Overwrites the element at `index`, destructing the old occupant.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len`.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        let slot = self
            .items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len).in_operation("set_at"))?;
        let old = mem::replace(slot, value);
        self.hooks.destruct(index, old);
        Ok(())
    }

    /// Inserts `value` at `index`, shifting `[index, len)` up by one.
    ///
    /// An `index` at or past the end behaves like [`set_at_grow`](Self::set_at_grow).
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        let len = self.items.len();
        if index >= len {
            return self.set_at_grow(index, value);
        }
        self.reserve_for(len + 1)?;
        self.items.insert(index, value);
        Ok(())
    }

    /// Removes the element at `index`, destructing it and shifting the tail
    /// down by one.
    ///
    /// # Errors
    ///
    /// Returns `IndexOutOfRange` if `index >= len`.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        let value = self.extract(index, "remove_at")?;
        self.hooks.destruct(index, value);
        Ok(())
    }

    /// Removes the element at `index` and hands it to the caller without
    /// running the destruct hook.
    pub fn take_at(&mut self, index: usize) -> Result<T> {
        self.extract(index, "take_at")
    }

    /// Returns the element at `index`.
    pub fn get(&self, index: usize) -> Result<&T> {
        self.items
            .get(index)
            .ok_or_else(|| Error::index_out_of_range(index, self.items.len()).in_operation("get"))
    }

    /// Returns the element at `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Result<&mut T> {
        let len = self.items.len();
        self.items
            .get_mut(index)
            .ok_or_else(|| Error::index_out_of_range(index, len).in_operation("get_mut"))
    }

    /// Returns the elements as a slice.
    #[must_use]
    pub fn as_slice(&self) -> &[T] {
        &self.items
    }

    /// Returns an iterator over the elements.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.items.iter()
    }

    /// Returns an iterator over the elements, mutably.
    pub fn iter_mut(&mut self) -> std::slice::IterMut<'_, T> {
        self.items.iter_mut()
    }

    /// Returns the index of the first element matching `predicate`.
    pub fn position(&self, predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.items.iter().position(predicate)
    }

    fn extract(&mut self, index: usize, operation: &'static str) -> Result<T> {
        let len = self.items.len();
        if index >= len {
            return Err(Error::index_out_of_range(index, len).in_operation(operation));
        }
        let value = self.items.remove(index);
        self.release_if_empty();
        Ok(value)
    }

    fn truncate_with_hooks(&mut self, count: usize) {
        while self.items.len() > count {
            let index = self.items.len() - 1;
            if let Some(value) = self.items.pop() {
                self.hooks.destruct(index, value);
            }
        }
    }

    fn release_if_empty(&mut self) {
        if self.items.is_empty() && self.items.capacity() > 0 {
            trace!(capacity = self.items.capacity(), "released array buffer");
            self.items = Vec::new();
        }
    }

    fn reserve_for(&mut self, required: usize) -> Result<()> {
        let capacity = self.items.capacity();
        let required = if capacity == 0 {
            required.max(self.config.initial_capacity)
        } else {
            required
        };
        let target = self.config.growth.target_capacity(capacity, required);
        if target > capacity {
            self.items
                .try_reserve_exact(target - self.items.len())
                .map_err(|_| Error::allocation_failed(target))?;
            trace!(
                old_capacity = capacity,
                new_capacity = self.items.capacity(),
                "grew array buffer"
            );
        }
        Ok(())
    }
}

impl<T, H: ElementHooks<T>> Drop for DynamicArray<T, H> {
    fn drop(&mut self) {
        self.truncate_with_hooks(0);
    }
}

impl<T, H: ElementHooks<T>> Index<usize> for DynamicArray<T, H> {
    type Output = T;

    fn index(&self, index: usize) -> &T {
        &self.items[index]
    }
}

impl<T, H: ElementHooks<T>> IndexMut<usize> for DynamicArray<T, H> {
    fn index_mut(&mut self, index: usize) -> &mut T {
        &mut self.items[index]
    }
}

impl<T: fmt::Debug, H: ElementHooks<T>> fmt::Debug for DynamicArray<T, H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.items.iter()).finish()
    }
}

impl<T: Clone, H: ElementHooks<T> + Clone> Clone for DynamicArray<T, H> {
    fn clone(&self) -> Self {
        Self {
            items: self.items.clone(),
            hooks: self.hooks.clone(),
            config: self.config.clone(),
        }
    }
}

impl<T: PartialEq, H: ElementHooks<T>> PartialEq for DynamicArray<T, H> {
    fn eq(&self, other: &Self) -> bool {
        self.items == other.items
    }
}

impl<T: Eq, H: ElementHooks<T>> Eq for DynamicArray<T, H> {}

impl<T, H: ElementHooks<T> + Default> FromIterator<T> for DynamicArray<T, H> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self {
            items: iter.into_iter().collect(),
            hooks: H::default(),
            config: ArrayConfig::default(),
        }
    }
}

impl<'a, T, H: ElementHooks<T>> IntoIterator for &'a DynamicArray<T, H> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}
