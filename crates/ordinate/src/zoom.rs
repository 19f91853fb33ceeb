//! Zoom state and zoom history.

use crate::error::{OrdinateError, Result, ZoomAxis};
use ordinate_core::math::{DVec2, is_positive_finite};

/// A complete zoom setting: independent X/Y factors and the zoom center.
///
/// The center is in normalized plane space: `(0.5, 0.5)` is the middle of the
/// unzoomed plane, `(0, 0)` its top-left corner.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ZoomParameters {
    pub factor_x: f64,
    pub factor_y: f64,
    pub center: DVec2,
}

impl Default for ZoomParameters {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl ZoomParameters {
    /// No zoom, centered.
    pub const IDENTITY: ZoomParameters = ZoomParameters {
        factor_x: 1.0,
        factor_y: 1.0,
        center: DVec2::new(0.5, 0.5),
    };

    pub fn new(factor_x: f64, factor_y: f64, center: DVec2) -> Self {
        Self {
            factor_x,
            factor_y,
            center,
        }
    }

    /// Like [`new`](Self::new), rejecting zero, negative or non-finite
    /// factors.
    pub fn try_new(factor_x: f64, factor_y: f64, center: DVec2) -> Result<Self> {
        if !is_positive_finite(factor_x) {
            return Err(OrdinateError::InvalidZoomFactor {
                axis: ZoomAxis::X,
                value: factor_x,
            });
        }
        if !is_positive_finite(factor_y) {
            return Err(OrdinateError::InvalidZoomFactor {
                axis: ZoomAxis::Y,
                value: factor_y,
            });
        }
        Ok(Self::new(factor_x, factor_y, center))
    }

    /// Factors as a vector.
    pub fn factors(&self) -> DVec2 {
        DVec2::new(self.factor_x, self.factor_y)
    }
}

/// Current zoom plus a stack of earlier zooms for one-step restore.
#[derive(Debug, Clone, Default)]
pub struct ZoomState {
    current: ZoomParameters,
    history: Vec<ZoomParameters>,
}

impl ZoomState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn current(&self) -> ZoomParameters {
        self.current
    }

    pub fn factor_x(&self) -> f64 {
        self.current.factor_x
    }

    pub fn factor_y(&self) -> f64 {
        self.current.factor_y
    }

    pub fn center(&self) -> DVec2 {
        self.current.center
    }

    /// Replace the current parameters. Returns `true` if anything changed.
    pub fn apply(&mut self, params: ZoomParameters) -> bool {
        let changed = self.current != params;
        self.current = params;
        changed
    }

    /// Save the current parameters so a later [`restore`](Self::restore)
    /// returns to them.
    pub fn push_current(&mut self) {
        self.history.push(self.current);
    }

    /// Pop and apply the most recent saved parameters.
    ///
    /// Returns the restored parameters, or `None` when there is no history.
    pub fn restore(&mut self) -> Option<ZoomParameters> {
        let previous = self.history.pop()?;
        self.current = previous;
        Some(previous)
    }

    pub fn history_len(&self) -> usize {
        self.history.len()
    }

    /// Back to identity with an empty history.
    pub fn reset(&mut self) {
        self.current = ZoomParameters::IDENTITY;
        self.history.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_then_restore_round_trips() {
        let mut zoom = ZoomState::new();
        let before = ZoomParameters::new(1.5, 3.0, DVec2::new(0.25, 0.75));
        zoom.apply(before);

        zoom.push_current();
        zoom.apply(ZoomParameters::new(4.0, 4.0, DVec2::new(0.1, 0.1)));
        assert_eq!(zoom.history_len(), 1);

        assert_eq!(zoom.restore(), Some(before));
        assert_eq!(zoom.current(), before);
        assert_eq!(zoom.history_len(), 0);
    }

    #[test]
    fn test_restore_on_empty_history_is_noop() {
        let mut zoom = ZoomState::new();
        zoom.apply(ZoomParameters::new(2.0, 2.0, DVec2::splat(0.5)));
        assert_eq!(zoom.restore(), None);
        assert_eq!(zoom.factor_x(), 2.0);
    }

    #[test]
    fn test_history_is_unbounded_and_lifo() {
        let mut zoom = ZoomState::new();
        for i in 1..=50 {
            zoom.push_current();
            zoom.apply(ZoomParameters::new(i as f64, 1.0, DVec2::splat(0.5)));
        }
        assert_eq!(zoom.history_len(), 50);
        assert_eq!(zoom.restore().map(|p| p.factor_x), Some(49.0));
        assert_eq!(zoom.restore().map(|p| p.factor_x), Some(48.0));
    }

    #[test]
    fn test_try_new_rejects_bad_factors() {
        assert_eq!(
            ZoomParameters::try_new(0.0, 1.0, DVec2::ZERO),
            Err(OrdinateError::InvalidZoomFactor {
                axis: ZoomAxis::X,
                value: 0.0
            })
        );
        assert!(ZoomParameters::try_new(1.0, f64::INFINITY, DVec2::ZERO).is_err());
        assert!(ZoomParameters::try_new(2.0, 0.5, DVec2::ZERO).is_ok());
    }

    #[test]
    fn test_reset() {
        let mut zoom = ZoomState::new();
        zoom.push_current();
        zoom.apply(ZoomParameters::new(3.0, 3.0, DVec2::ZERO));
        zoom.reset();
        assert_eq!(zoom.current(), ZoomParameters::IDENTITY);
        assert_eq!(zoom.history_len(), 0);
    }
}
