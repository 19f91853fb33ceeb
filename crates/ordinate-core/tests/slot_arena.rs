//! SlotArena generational handle tests.
//!
//! These tests verify that stale handles never resolve, that slots are reused
//! with a fresh generation, and that iteration skips removed values.

use ordinate_core::alloc::slot_arena::SlotArena;

#[test]
fn test_insert_and_get() {
    let mut arena = SlotArena::new();

    let a = arena.insert("legend");
    let b = arena.insert("plane");

    assert_eq!(arena.get(a), Some(&"legend"));
    assert_eq!(arena.get(b), Some(&"plane"));
    assert_eq!(arena.len(), 2);
}

#[test]
fn test_get_mut() {
    let mut arena = SlotArena::new();

    let slot = arena.insert(42);
    if let Some(value) = arena.get_mut(slot) {
        *value = 100;
    }

    assert_eq!(arena.get(slot), Some(&100));
}

#[test]
fn test_get_after_remove_returns_none() {
    let mut arena = SlotArena::new();

    let slot = arena.insert(42);
    assert_eq!(arena.remove(slot), Some(42));

    assert_eq!(arena.get(slot), None);
    assert!(!arena.contains(slot));
    assert_eq!(arena.remove(slot), None);
    assert!(arena.is_empty());
}

#[test]
fn test_slot_reuse_gets_new_generation() {
    let mut arena = SlotArena::new();

    let first = arena.insert(1);
    let second = arena.insert(2);
    let third = arena.insert(3);
    assert_eq!(
        (first.index(), second.index(), third.index()),
        (0, 1, 2)
    );

    arena.remove(second);
    let fourth = arena.insert(4);

    assert_eq!(fourth.index(), 1);
    assert!(fourth.generation() > second.generation());
    assert_eq!(arena.get(second), None);
    assert_eq!(arena.get(fourth), Some(&4));
}

#[test]
fn test_iter_skips_removed() {
    let mut arena = SlotArena::new();
    let slots: Vec<_> = (0..10).map(|i| arena.insert(i)).collect();

    arena.remove(slots[0]);
    arena.remove(slots[5]);

    let values: Vec<i32> = arena.iter().map(|(_, v)| *v).collect();
    assert_eq!(values, vec![1, 2, 3, 4, 6, 7, 8, 9]);

    for (slot, value) in arena.iter() {
        assert_eq!(arena.get(slot), Some(value));
    }
}
