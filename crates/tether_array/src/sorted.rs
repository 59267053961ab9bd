//! Owning arrays kept in key order.
//!
//! A [`SortedOwningArray`] never holds two elements with the same key:
//! inserting under an existing key destroys the previous occupant and puts
//! the new value in its slot.

use std::cmp::Ordering;
use std::fmt;
use std::marker::PhantomData;

use tether_foundation::{ArrayConfig, Result};
use tracing::debug;

use crate::owning::OwningPointerArray;

/// Three-way comparison between a search key and a stored element.
///
/// Must be a total order that stays the same for the array's lifetime.
/// Any `Fn(&K, &T) -> Ordering` closure qualifies.
pub trait KeyCompare<K: ?Sized, T: ?Sized> {
    /// Orders `key` relative to `element`'s key.
    fn compare_key(&self, key: &K, element: &T) -> Ordering;
}

impl<K: ?Sized, T: ?Sized, F> KeyCompare<K, T> for F
where
    F: Fn(&K, &T) -> Ordering,
{
    fn compare_key(&self, key: &K, element: &T) -> Ordering {
        self(key, element)
    }
}

/// Compares by an `Ord` key derived from each element.
///
/// ```
/// use tether_array::{ByKey, SortedOwningArray};
///
/// let mut by_id = SortedOwningArray::new(ByKey(|pair: &(u32, &str)| pair.0));
/// by_id.add((3, "c")).unwrap();
/// by_id.add((1, "a")).unwrap();
/// assert_eq!(by_id.get_key(&1), Some(&(1, "a")));
/// ```
#[derive(Clone, Copy, Debug)]
pub struct ByKey<F>(pub F);

impl<K: Ord, T, F: Fn(&T) -> K> KeyCompare<K, T> for ByKey<F> {
    fn compare_key(&self, key: &K, element: &T) -> Ordering {
        key.cmp(&(self.0)(element))
    }
}

/// Owning array sorted by a caller-supplied key comparison.
///
/// # Example
///
/// ```
/// use tether_array::SortedOwningArray;
///
/// let mut table = SortedOwningArray::new(|key: &i32, value: &i32| key.cmp(value));
/// for key in [5, 1, 3] {
///     table.add_sort_key(key, &key).unwrap();
/// }
/// assert_eq!(table.iter().copied().collect::<Vec<_>>(), vec![1, 3, 5]);
/// assert_eq!(table.find_key(&3), Some(1));
/// assert_eq!(table.find_key(&9), None);
/// ```
pub struct SortedOwningArray<T, K: ?Sized, C> {
    items: OwningPointerArray<T>,
    compare: C,
    _key: PhantomData<fn(&K)>,
}

impl<T, K: ?Sized, C: KeyCompare<K, T>> SortedOwningArray<T, K, C> {
    /// Creates an empty array ordered by `compare`.
    #[must_use]
    pub fn new(compare: C) -> Self {
        Self {
            items: OwningPointerArray::new(),
            compare,
            _key: PhantomData,
        }
    }

    /// Creates an empty array ordered by `compare` with the given growth
    /// configuration.
    #[must_use]
    pub fn with_config(compare: C, config: ArrayConfig) -> Self {
        Self {
            items: OwningPointerArray::with_config(config),
            compare,
            _key: PhantomData,
        }
    }

    /// Returns the growth configuration.
    #[must_use]
    pub fn config(&self) -> &ArrayConfig {
        self.items.config()
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

    /// Binary-searches for `key`.
    ///
    /// Returns `(index, Equal)` on an exact match. Otherwise returns the
    /// last probed index and whether `key` sorts before (`Less`) or after
    /// (`Greater`) it. An empty array yields `(0, Less)`.
    #[must_use]
    pub fn find_key_near(&self, key: &K) -> (usize, Ordering) {
        let len = self.items.len();
        if len == 0 {
            return (0, Ordering::Less);
        }

        let mut low = 0;
        let mut high = len - 1;
        loop {
            let mid = low + (high - low) / 2;
            let Some(element) = self.items.get(mid) else {
                return (mid, Ordering::Less);
            };
            match self.compare.compare_key(key, element) {
                Ordering::Equal => return (mid, Ordering::Equal),
                Ordering::Less => {
                    if mid == low {
                        return (mid, Ordering::Less);
                    }
                    high = mid - 1;
                }
                Ordering::Greater => {
                    if mid == high {
                        return (mid, Ordering::Greater);
                    }
                    low = mid + 1;
                }
            }
        }
    }

    /// Returns the index of the element with exactly `key`.
    #[must_use]
    pub fn find_key(&self, key: &K) -> Option<usize> {
        match self.find_key_near(key) {
            (index, Ordering::Equal) => Some(index),
            _ => None,
        }
    }

    /// Returns the element with exactly `key`.
    #[must_use]
    pub fn get_key(&self, key: &K) -> Option<&T> {
        self.items.get(self.find_key(key)?)
    }

    /// Returns the element with exactly `key`, mutably.
    ///
    /// Mutating the element's key breaks the sort order.
    pub fn get_key_mut(&mut self, key: &K) -> Option<&mut T> {
        let index = self.find_key(key)?;
        self.items.get_mut(index)
    }

    /// Inserts `value` under `key`, keeping the array sorted.
    ///
    /// An element already stored under `key` is destroyed and replaced in
    /// place. Returns the index of `value`. `key` must be the key `value`
    /// itself sorts by.
    pub fn add_sort_key(&mut self, value: T, key: &K) -> Result<usize> {
        match self.find_key_near(key) {
            (index, Ordering::Equal) => {
                self.items.set_at(index, value)?;
                debug!(index, "replaced element on key collision");
                Ok(index)
            }
            (index, Ordering::Less) => {
                self.items.insert_at(index, value)?;
                Ok(index)
            }
            (index, Ordering::Greater) => {
                self.items.insert_at(index + 1, value)?;
                Ok(index + 1)
            }
        }
    }

    /// Destroys the element stored under `key`.
    ///
    /// A missing key is a no-op. Returns whether an element was removed.
    pub fn delete_key(&mut self, key: &K) -> bool {
        match self.find_key(key) {
            Some(index) => self.items.delete_at(index).is_ok(),
            None => false,
        }
    }

    /// Removes the element stored under `key` and returns it.
    pub fn take_key(&mut self, key: &K) -> Option<Box<T>> {
        let index = self.find_key(key)?;
        self.items.take_at(index).ok().flatten()
    }

    /// Destroys the element at `index`.
    pub fn delete_at(&mut self, index: usize) -> Result<()> {
        self.items.delete_at(index)
    }

    /// Returns the element at `index`.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&T> {
        self.items.get(index)
    }

    /// Destroys every element.
    pub fn clear(&mut self) {
        self.items.clear();
    }

    /// Iterates over the elements in ascending key order.
    pub fn iter(&self) -> impl Iterator<Item = &T> + '_ {
        self.items.iter()
    }

    /// Returns the comparison strategy.
    #[must_use]
    pub fn comparator(&self) -> &C {
        &self.compare
    }
}

impl<T, K: Ord, F: Fn(&T) -> K> SortedOwningArray<T, K, ByKey<F>> {
    /// Inserts `value` under the key derived from it.
    pub fn add(&mut self, value: T) -> Result<usize> {
        let key = (self.compare.0)(&value);
        self.add_sort_key(value, &key)
    }
}

impl<T: fmt::Debug, K: ?Sized, C> fmt::Debug for SortedOwningArray<T, K, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SortedOwningArray")
            .field("items", &self.items)
            .finish_non_exhaustive()
    }
}
