//! Profiling utilities based on the `puffin` crate.
//!
//! With the `profiling` feature disabled the scope macros expand to nothing, so
//! call sites never need their own `cfg` gates.

#[cfg(feature = "profiling")]
pub use puffin::{profile_function, profile_scope};

/// No-op stand-in for `puffin::profile_function!`.
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_function {
    () => {};
    ($data:expr) => {};
}

/// No-op stand-in for `puffin::profile_scope!`.
#[cfg(not(feature = "profiling"))]
#[macro_export]
macro_rules! profile_scope {
    ($name:expr) => {};
    ($name:expr, $data:expr) => {};
}

#[cfg(not(feature = "profiling"))]
pub use crate::{profile_function, profile_scope};

/// Turn scope collection on or off.
///
/// Scopes are off by default; enable them from the host before connecting a
/// viewer.
#[inline]
pub fn set_enabled(enabled: bool) {
    #[cfg(feature = "profiling")]
    puffin::set_scopes_on(enabled);
    #[cfg(not(feature = "profiling"))]
    let _ = enabled;
}

/// Whether scope collection is currently on.
#[inline]
pub fn is_enabled() -> bool {
    #[cfg(feature = "profiling")]
    {
        puffin::are_scopes_on()
    }
    #[cfg(not(feature = "profiling"))]
    {
        false
    }
}

/// Mark the start of a new frame for profiling.
///
/// Call this once per host frame, typically right before the plane's queued
/// notifications are dispatched.
#[inline]
pub fn new_frame() {
    #[cfg(feature = "profiling")]
    puffin::GlobalProfiler::lock().new_frame();
}
