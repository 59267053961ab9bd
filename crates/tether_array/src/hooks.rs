//! Element lifecycle hooks for [`DynamicArray`](crate::DynamicArray).
//!
//! Hooks are a strategy value owned by the array. The array calls
//! [`ElementHooks::construct`] for every slot a resize adds and
//! [`ElementHooks::destruct`] for every value it discards, and never for
//! values that merely move during a shift.

/// Construct/destruct strategy for array elements.
pub trait ElementHooks<T> {
    /// Produces the value for a slot created by growth at `index`.
    fn construct(&mut self, index: usize) -> T;

    /// Disposes of a value leaving the array from `index`.
    ///
    /// The default drops it.
    fn destruct(&mut self, index: usize, value: T) {
        let _ = index;
        drop(value);
    }
}

/// Hooks using the element type's `Default` and `Drop`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct DefaultHooks;

impl<T: Default> ElementHooks<T> for DefaultHooks {
    fn construct(&mut self, _index: usize) -> T {
        T::default()
    }
}

/// Hooks that build new slots with a closure.
///
/// ```
/// use tether_array::{ConstructWith, DynamicArray};
///
/// let mut squares = DynamicArray::with_hooks(ConstructWith(|i: usize| i * i));
/// squares.set_count(4).unwrap();
/// assert_eq!(squares.as_slice(), &[0, 1, 4, 9]);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ConstructWith<F>(pub F);

impl<T, F: FnMut(usize) -> T> ElementHooks<T> for ConstructWith<F> {
    fn construct(&mut self, index: usize) -> T {
        (self.0)(index)
    }
}
