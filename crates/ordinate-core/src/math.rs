//! Math types used across Ordinate.
//!
//! Plane geometry, zoom factors and data coordinates are all double precision,
//! so the `glam` `D*` types are re-exported under their usual short names.
//!
//! ```
//! use ordinate_core::math::DVec2;
//!
//! let plane = DVec2::new(400.0, 300.0);
//! let selection = DVec2::new(200.0, 150.0);
//! assert_eq!(plane / selection, DVec2::splat(2.0));
//! ```

pub use glam::{BVec2, DAffine2, DMat2, DVec2, dvec2};

/// Interop vector types for hosts that speak `mint`.
pub mod interop {
    pub use mint::{Point2, Vector2};
}

/// Returns `true` when `value` is finite and strictly positive.
#[inline]
pub fn is_positive_finite(value: f64) -> bool {
    value.is_finite() && value > 0.0
}
