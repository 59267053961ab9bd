//! Arrays of nullable pointer slots.
//!
//! A [`PointerArray`] stores `Option<P>` slots. Searches compare pointer
//! identity through [`SlotPointer`], never the pointees' values, and a null
//! slot is never reported as occupied even though it occupies an index.

use std::mem;
use std::ptr::{self, NonNull};
use std::rc::Rc;
use std::sync::Arc;

use tether_foundation::{ArrayConfig, Result};

use crate::dynamic::DynamicArray;
use crate::hooks::ElementHooks;

/// A pointer-like value compared by address.
///
/// Zero-sized pointees have no distinct address, so a borrowed or boxed
/// pointer to a zero-sized value never matches anything, itself included.
pub trait SlotPointer {
    /// Returns true if both pointers refer to the same object.
    fn same_target(&self, other: &Self) -> bool;
}

impl<T: ?Sized> SlotPointer for &T {
    fn same_target(&self, other: &Self) -> bool {
        mem::size_of_val(*self) != 0 && ptr::eq(*self, *other)
    }
}

impl<T: ?Sized> SlotPointer for Box<T> {
    fn same_target(&self, other: &Self) -> bool {
        mem::size_of_val(&**self) != 0 && ptr::eq(&**self, &**other)
    }
}

impl<T: ?Sized> SlotPointer for Rc<T> {
    fn same_target(&self, other: &Self) -> bool {
        Rc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SlotPointer for Arc<T> {
    fn same_target(&self, other: &Self) -> bool {
        Arc::ptr_eq(self, other)
    }
}

impl<T: ?Sized> SlotPointer for NonNull<T> {
    fn same_target(&self, other: &Self) -> bool {
        ptr::addr_eq(self.as_ptr(), other.as_ptr())
    }
}

/// Hooks for pointer slots: new slots are null, discarded slots are
/// cleared before the pointer is released.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct PointerHooks;

impl<P> ElementHooks<Option<P>> for PointerHooks {
    fn construct(&mut self, _index: usize) -> Option<P> {
        None
    }

    fn destruct(&mut self, _index: usize, mut slot: Option<P>) {
        drop(slot.take());
    }
}

/// Dynamic array of nullable, identity-compared pointers.
///
/// Whether the array owns its pointees depends on `P`: `&T` and `NonNull<T>`
/// borrow, `Rc<T>` shares, `Box<T>` owns.
#[derive(Debug)]
pub struct PointerArray<P> {
    slots: DynamicArray<Option<P>, PointerHooks>,
}

impl<P: SlotPointer> Default for PointerArray<P> {
    fn default() -> Self {
        Self::new()
    }
}

impl<P: SlotPointer> PointerArray<P> {
    /// Creates an empty pointer array.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slots: DynamicArray::with_hooks(PointerHooks),
        }
    }

    /// Creates an empty pointer array with the given configuration.
    #[must_use]
    pub fn with_config(config: ArrayConfig) -> Self {
        Self {
            slots: DynamicArray::with_hooks_and_config(PointerHooks, config),
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

    /// Returns the number of non-null slots.
    #[must_use]
    pub fn occupied_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    /// Resizes to `count` slots; new slots are null.
    pub fn set_count(&mut self, count: usize) -> Result<()> {
        self.slots.set_count(count)
    }

    /// Releases every pointer and the buffer.
    pub fn clear(&mut self) {
        self.slots.clear();
    }

    /// Appends `pointer`, returning its index.
    pub fn add(&mut self, pointer: P) -> Result<usize> {
        self.slots.add(Some(pointer))
    }

    /// Appends a null slot, returning its index.
    pub fn add_null(&mut self) -> Result<usize> {
        self.slots.add(None)
    }

    /// Overwrites slot `index`, releasing the previous pointer.
    pub fn set_at(&mut self, index: usize, pointer: Option<P>) -> Result<()> {
        self.slots.set_at(index, pointer)
    }

    /// Writes slot `index`, growing with null slots if needed.
    pub fn set_at_grow(&mut self, index: usize, pointer: Option<P>) -> Result<()> {
        self.slots.set_at_grow(index, pointer)
    }

    /// Inserts `pointer` at `index`, shifting later slots up.
    pub fn insert_at(&mut self, index: usize, pointer: P) -> Result<()> {
        self.slots.insert_at(index, Some(pointer))
    }

    /// Removes slot `index`, releasing its pointer.
    pub fn remove_at(&mut self, index: usize) -> Result<()> {
        self.slots.remove_at(index)
    }

    /// Removes slot `index` and returns its pointer to the caller.
    pub fn take_at(&mut self, index: usize) -> Result<Option<P>> {
        self.slots.take_at(index)
    }

    /// Returns the pointer in slot `index`, or `None` for a null or
    /// out-of-range slot.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&P> {
        self.slots.get(index).ok()?.as_ref()
    }

    /// Returns the pointer in slot `index` mutably.
    pub fn get_mut(&mut self, index: usize) -> Option<&mut P> {
        self.slots.get_mut(index).ok()?.as_mut()
    }

    /// Returns true if `index` is in range and holds a non-null pointer.
    #[must_use]
    pub fn is_occupied(&self, index: usize) -> bool {
        self.get(index).is_some()
    }

    /// Returns the index of the first slot pointing at `pointer`'s target.
    #[must_use]
    pub fn find_pointer(&self, pointer: &P) -> Option<usize> {
        self.position(|candidate| candidate.same_target(pointer))
    }

    /// Returns the index of the first non-null slot matching `predicate`.
    pub fn position(&self, mut predicate: impl FnMut(&P) -> bool) -> Option<usize> {
        self.slots
            .position(|slot| slot.as_ref().is_some_and(&mut predicate))
    }

    /// Removes the first slot pointing at `pointer`'s target.
    ///
    /// Returns whether a slot was found.
    pub fn remove_pointer(&mut self, pointer: &P) -> bool {
        match self.find_pointer(pointer) {
            Some(index) => self.slots.remove_at(index).is_ok(),
            None => false,
        }
    }

    /// Iterates over every slot, including null ones.
    pub fn slots(&self) -> impl Iterator<Item = Option<&P>> + '_ {
        self.slots.iter().map(Option::as_ref)
    }

    /// Iterates over `(index, pointer)` for non-null slots.
    pub fn iter_occupied(&self) -> impl Iterator<Item = (usize, &P)> + '_ {
        self.slots
            .iter()
            .enumerate()
            .filter_map(|(index, slot)| slot.as_ref().map(|p| (index, p)))
    }

    /// Iterates mutably over non-null slots.
    pub fn iter_occupied_mut(&mut self) -> impl Iterator<Item = &mut P> + '_ {
        self.slots.iter_mut().filter_map(Option::as_mut)
    }
}
