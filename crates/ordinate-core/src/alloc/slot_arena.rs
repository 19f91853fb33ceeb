//! Generational slot arena.
//!
//! Handles into the arena are plain `Copy` values. A handle whose value has
//! been removed never resolves again, even after its slot is reused, so
//! handles can be held as non-owning back-references.

use crate::profiling::profile_function;
use std::num::NonZeroU32;

/// A generational index into a [`SlotArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Slot {
    index: u32,
    generation: NonZeroU32,
}

impl Slot {
    /// Build a slot from raw parts. Mostly useful in tests.
    pub fn new(index: u32, generation: NonZeroU32) -> Self {
        Self { index, generation }
    }

    /// Position of the slot in the arena.
    pub fn index(&self) -> u32 {
        self.index
    }

    /// Generation the slot was issued with.
    pub fn generation(&self) -> NonZeroU32 {
        self.generation
    }
}

static_assertions::assert_eq_size!(Slot, Option<Slot>);

#[derive(Debug)]
struct Entry<T> {
    generation: NonZeroU32,
    value: Option<T>,
}

/// Arena storing values behind generational [`Slot`]s.
#[derive(Debug)]
pub struct SlotArena<T> {
    entries: Vec<Entry<T>>,
    free: Vec<u32>,
    len: usize,
}

impl<T> Default for SlotArena<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> SlotArena<T> {
    /// Create an empty arena.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
            free: Vec::new(),
            len: 0,
        }
    }

    /// Store `value` and return its slot.
    pub fn insert(&mut self, value: T) -> Slot {
        profile_function!();
        self.len += 1;
        if let Some(index) = self.free.pop()
            && let Some(entry) = self.entries.get_mut(index as usize)
        {
            entry.value = Some(value);
            return Slot::new(index, entry.generation);
        }

        let index = self.entries.len() as u32;
        self.entries.push(Entry {
            generation: NonZeroU32::MIN,
            value: Some(value),
        });
        Slot::new(index, NonZeroU32::MIN)
    }

    fn entry(&self, slot: Slot) -> Option<&Entry<T>> {
        self.entries
            .get(slot.index as usize)
            .filter(|entry| entry.generation == slot.generation)
    }

    /// Resolve `slot`, or `None` if its value was removed.
    pub fn get(&self, slot: Slot) -> Option<&T> {
        self.entry(slot).and_then(|entry| entry.value.as_ref())
    }

    /// Resolve `slot` mutably, or `None` if its value was removed.
    pub fn get_mut(&mut self, slot: Slot) -> Option<&mut T> {
        self.entries
            .get_mut(slot.index as usize)
            .filter(|entry| entry.generation == slot.generation)
            .and_then(|entry| entry.value.as_mut())
    }

    /// Whether `slot` still resolves.
    pub fn contains(&self, slot: Slot) -> bool {
        self.get(slot).is_some()
    }

    /// Remove the value behind `slot`.
    ///
    /// Stale slots are ignored and return `None`.
    pub fn remove(&mut self, slot: Slot) -> Option<T> {
        profile_function!();
        let entry = self
            .entries
            .get_mut(slot.index as usize)
            .filter(|entry| entry.generation == slot.generation)?;
        let value = entry.value.take()?;
        self.len -= 1;

        // A slot whose generation would wrap is retired instead of reused.
        if let Some(next) = entry.generation.checked_add(1) {
            entry.generation = next;
            self.free.push(slot.index);
        }
        Some(value)
    }

    /// Number of live values.
    pub fn len(&self) -> usize {
        self.len
    }

    /// Whether the arena has no live values.
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Iterate over live values with their slots, in slot order.
    pub fn iter(&self) -> impl Iterator<Item = (Slot, &T)> {
        self.entries.iter().enumerate().filter_map(|(index, entry)| {
            entry
                .value
                .as_ref()
                .map(|value| (Slot::new(index as u32, entry.generation), value))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_insert_first_slot() {
        let mut arena = SlotArena::<u8>::new();
        let slot = arena.insert(15);
        assert_eq!(slot.generation(), NonZeroU32::MIN);
        assert_eq!(slot.index(), 0);
        assert_eq!(arena.get(slot), Some(&15));
    }

    #[test]
    fn test_wrong_generation_does_not_resolve() {
        let mut arena = SlotArena::<u8>::new();
        let _ = arena.insert(15);
        let forged = Slot::new(0, NonZeroU32::new(7).unwrap());
        assert_eq!(arena.get(forged), None);
        assert_eq!(arena.remove(forged), None);
        assert_eq!(arena.len(), 1);
    }

    #[test]
    fn test_remove_bumps_generation() {
        let mut arena = SlotArena::<u8>::new();
        let slot = arena.insert(15);
        assert_eq!(arena.remove(slot), Some(15));
        let reused = arena.insert(45);
        assert_eq!(slot.index(), reused.index());
        assert_ne!(slot.generation(), reused.generation());
        assert_eq!(arena.get(slot), None);
        assert_eq!(arena.get(reused), Some(&45));
    }
}
