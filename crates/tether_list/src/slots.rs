//! Generational slot storage backing the list arena.
//!
//! Slots are allocated from a free list when available, otherwise new
//! indices are pushed. Freeing a slot bumps its generation so that handles
//! issued before the free are rejected.

use tether_foundation::handle::is_live_generation;
use tether_foundation::{Error, Result};

#[derive(Debug)]
struct Slot<E> {
    /// Even generations are free, odd generations are alive.
    generation: u32,
    entry: Option<E>,
}

/// A free-list slab with per-slot generation counters.
#[derive(Debug)]
pub(crate) struct SlotStore<E> {
    slots: Vec<Slot<E>>,
    /// Free list of indices available for reuse.
    free_list: Vec<u32>,
    /// Count of live entries.
    live_count: usize,
}

impl<E> SlotStore<E> {
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            slots: Vec::with_capacity(capacity),
            free_list: Vec::new(),
            live_count: 0,
        }
    }

    /// Stores `entry`, returning its `(index, generation)`.
    pub(crate) fn insert(&mut self, entry: E) -> Result<(u32, u32)> {
        if let Some(index) = self.free_list.pop() {
            let slot = &mut self.slots[index as usize];
            // Was even/free, now odd/alive
            slot.generation = slot.generation.wrapping_add(1);
            slot.entry = Some(entry);
            self.live_count += 1;
            return Ok((index, slot.generation));
        }

        // u32::MAX is reserved for the null handle.
        let index = u32::try_from(self.slots.len())
            .ok()
            .filter(|&index| index < u32::MAX)
            .ok_or_else(|| Error::allocation_failed(self.slots.len() + 1))?;
        self.slots
            .try_reserve(1)
            .map_err(|_| Error::allocation_failed(self.slots.len() + 1))?;
        // New slots start at generation 1 (odd = alive)
        self.slots.push(Slot {
            generation: 1,
            entry: Some(entry),
        });
        self.live_count += 1;
        Ok((index, 1))
    }

    /// Frees the slot if `(index, generation)` is live, returning its entry.
    pub(crate) fn remove(&mut self, index: u32, generation: u32) -> Option<E> {
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation || !is_live_generation(generation) {
            return None;
        }
        let entry = slot.entry.take()?;
        // A slot whose generation would wrap back to live is retired.
        slot.generation = slot.generation.wrapping_add(1);
        if slot.generation != u32::MAX - 1 {
            self.free_list.push(index);
        }
        self.live_count -= 1;
        Some(entry)
    }

    pub(crate) fn get(&self, index: u32, generation: u32) -> Option<&E> {
        let slot = self.slots.get(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.entry.as_ref()
    }

    pub(crate) fn get_mut(&mut self, index: u32, generation: u32) -> Option<&mut E> {
        let slot = self.slots.get_mut(index as usize)?;
        if slot.generation != generation {
            return None;
        }
        slot.entry.as_mut()
    }

    pub(crate) fn len(&self) -> usize {
        self.live_count
    }

    /// Iterates over all live `(index, generation, entry)` triples.
    // Slot count never exceeds u32::MAX, checked in insert.
    #[allow(clippy::cast_possible_truncation)]
    pub(crate) fn iter(&self) -> impl Iterator<Item = (u32, u32, &E)> + '_ {
        self.slots.iter().enumerate().filter_map(|(index, slot)| {
            let entry = slot.entry.as_ref()?;
            Some((index as u32, slot.generation, entry))
        })
    }
}
