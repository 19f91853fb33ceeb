//! Measure scaling factors for nested rendering contexts.
//!
//! Printing or exporting at a different resolution pushes a factor pair for
//! the duration of that render; relative measures resolved inside it are
//! scaled accordingly. The stack always keeps the identity pair at the bottom.
//!
//! ```
//! use ordinate::scaling::MeasureScaling;
//!
//! let mut scaling = MeasureScaling::new();
//! {
//!     let print = scaling.scoped(2.0, 2.0);
//!     assert_eq!(print.current_factors(), (2.0, 2.0));
//! }
//! assert_eq!(scaling.current_factors(), (1.0, 1.0));
//! ```

use crate::error::{OrdinateError, Result};
use ordinate_core::math::is_positive_finite;
use std::ops::{Deref, DerefMut};

const IDENTITY: (f64, f64) = (1.0, 1.0);

/// Stack of `(scale_x, scale_y)` pairs with an identity floor.
#[derive(Debug, Clone, PartialEq)]
pub struct MeasureScaling {
    factors: Vec<(f64, f64)>,
}

impl Default for MeasureScaling {
    fn default() -> Self {
        Self::new()
    }
}

impl MeasureScaling {
    /// A stack holding only the identity pair.
    pub fn new() -> Self {
        Self {
            factors: vec![IDENTITY],
        }
    }

    /// Factors currently in effect.
    pub fn current_factors(&self) -> (f64, f64) {
        self.factors.last().copied().unwrap_or(IDENTITY)
    }

    /// Stack height, including the identity floor.
    pub fn depth(&self) -> usize {
        self.factors.len()
    }

    /// Push a factor pair without validation.
    pub fn push(&mut self, x: f64, y: f64) {
        tracing::trace!(x, y, depth = self.factors.len() + 1, "push measure scaling");
        self.factors.push((x, y));
    }

    /// Push a factor pair, rejecting zero, negative or non-finite factors.
    pub fn try_push(&mut self, x: f64, y: f64) -> Result<()> {
        if !is_positive_finite(x) || !is_positive_finite(y) {
            return Err(OrdinateError::InvalidScalingFactor { x, y });
        }
        self.push(x, y);
        Ok(())
    }

    /// Pop the top pair. The identity floor is never removed; popping at the
    /// floor returns `false` and leaves the stack unchanged.
    pub fn pop(&mut self) -> bool {
        if self.factors.len() > 1 {
            self.factors.pop();
            true
        } else {
            tracing::debug!("refusing to pop the identity measure scaling");
            false
        }
    }

    /// Push `(x, y)` for the lifetime of the returned guard.
    pub fn scoped(&mut self, x: f64, y: f64) -> ScalingGuard<'_> {
        self.push(x, y);
        ScalingGuard { scaling: self }
    }
}

/// Pops its factor pair when dropped, on every exit path.
///
/// Dereferences to the scaling stack so measures can be resolved, and further
/// guards nested, while it is alive.
#[derive(Debug)]
pub struct ScalingGuard<'a> {
    scaling: &'a mut MeasureScaling,
}

impl Deref for ScalingGuard<'_> {
    type Target = MeasureScaling;

    fn deref(&self) -> &MeasureScaling {
        self.scaling
    }
}

impl DerefMut for ScalingGuard<'_> {
    fn deref_mut(&mut self) -> &mut MeasureScaling {
        self.scaling
    }
}

impl Drop for ScalingGuard<'_> {
    fn drop(&mut self) {
        self.scaling.pop();
    }
}
