//! Collection types for Ordinate.
//!
//! This module provides:
//! - Re-exports of hash collections using AHash
//! - `SlotArena`, a generational arena for weak, validity-checked handles

pub mod slot_arena;

// Re-export optimized hash collections
pub use ahash::{AHashMap as HashMap, AHashSet as HashSet, RandomState};
