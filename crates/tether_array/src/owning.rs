//! Pointer arrays that own their pointees.
//!
//! Every non-null slot of an [`OwningPointerArray`] is the sole owner of a
//! boxed value. Removing, overwriting, or shrinking away a slot destroys its
//! pointee exactly once; dropping the array destroys whatever is left.

use std::mem;
use std::ptr;

use tether_foundation::{ArrayConfig, Result};

use crate::pointer::PointerArray;

/// Dynamic array of exclusively owned, heap-allocated elements.
///
/// Element addresses are stable: shifting the array moves the boxes, not
/// the values they point to.
#[derive(Debug)]
pub struct OwningPointerArray<T> {
    slots: PointerArray<Box<T>>,
}

impl<T> Default for OwningPointerArray<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> OwningPointerArray<T> {
    /// Creates an empty array.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: PointerArray::new(),
        }
    }

    /// Creates an empty array with the given configuration.
    #[must_use]
    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            slots: PointerArray::with_config(config),
        }
    }

    /// Returns the growth configuration.
    #[must_use]
    pub fn config(&self) -> &ArrayConfig {
        self.slots.config()
    }

    /// Returns the number of slots, null or not.
    #[must_use]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Returns true if there are no slots.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Resizes to `count` slots. Growth adds null slots; shrinking destroys
    /// the pointees of the discarded slots.
    pub fn set_count(&mut self, count: usize) -> Result<()> {
        self.slots.set_count(count)
    }

    /// Destroys every pointee and releases the buffer.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Boxes `value` and appends it, returning its index.
    pub fn add(&mut self, value: T) -> Result<usize> {
        self.slots.add(Box::new(value))
    }

    /// Appends an already boxed value, taking ownership.
    pub fn add_boxed(&mut self, value: Box<T>) -> Result<usize> {
        self.slots.add(value)
    }

    /// Boxes `value` and inserts it at `index`.
    pub fn insert_at(&mut self, index: usize, value: T) -> Result<()> {
        self.slots.insert_at(index, Box::new(value))
    }

    /// Replaces slot `index` with `value`, destroying the old pointee.
    pub fn set_at(&mut self, index: usize, value: T) -> Result<()> {
        self.slots.set_at(index, Some(Box::new(value)))
    }

    /// Destroys the pointee in slot `index` and removes the slot.
    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        self.slots.remove_at(index)
    }

    /// Removes slot `index` and transfers its pointee to the caller.
    pub fn take_at(&mut self, index: usize) -> Result<Option<Box<T>>> {
        self.slots.take_at(index)
    }

    /// Destroys the element at address `object` if this array owns it.
    /// Returns whether it was found.
    ///
    /// The address is only compared, never dereferenced.
    pub fn delete_object(&mut self, object: *const T) -> bool {
        match self.find_object(object) {
            Some(index) => self.slots.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Returns the index of the slot owning the element at address `object`.
    ///
    /// Always `None` for zero-sized `T`, whose elements share one address.
    #[must_use]
    pub fn find_object(&self, object: *const T) -> Option<usize> {
        if mem::size_of::<T>() == 0 {
            return None;
        }
        self.slots.position(|owned| ptr::eq(&**owned, object))
    }

    /// Returns the element in slot `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.slots.get(index).map(|owned| &**owned)
    }

    /// Returns the element in slot `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut T> {
        self.slots.get_mut(index).map(|owned| &mut **owned)
    }

    /// Returns true if `index` is in range and holds an element.
    #[must_use]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.slots.is_occupied(index)
    }

    /// Returns the index of the first element matching `predicate`.
    pub fn position(&self, mut predicate: impl FnMut(&T) -> bool) -> Option<usize> {
        self.slots.position(|owned| predicate(owned))
    }

    /// Iterates over the elements of non-null slots in index order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.slots.iter_occupied().map(|(_, owned)| &**owned)
    }

    /// Iterates mutably over the elements of non-null slots.
    pub fn iter_mut(&mut self) -> impl Iterator<Item = &mut T> + '_ {
        self.slots.iter_occupied_mut().map(|owned| &mut **owned)
    }
}
