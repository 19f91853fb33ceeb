//! Ordinate Core
//!
//! This crate contains the utilities shared by the Ordinate charting crates:
//! logging setup, profiling scopes, math re-exports, hash collections, a
//! generational slot arena and plane geometry.

pub mod alloc;
pub mod geometry;
pub mod logging;
pub mod math;
pub mod profiling;
