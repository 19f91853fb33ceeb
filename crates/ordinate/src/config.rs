//! Plane configuration.

use crate::error::{OrdinateError, Result};
use crate::grid::GridAttributes;
use ordinate_core::math::DVec2;

/// Construction-time settings for a [`CoordinatePlane`](crate::plane::CoordinatePlane).
///
/// Every field can also be changed later through the plane's setters.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PlaneConfig {
    /// Drag to zoom, secondary click to step back.
    pub rubber_band_zooming: bool,
    /// Keep a margin free around the diagram region for axis corners.
    pub corner_spacers: bool,
    /// Margin width in pixels when corner spacers are enabled.
    pub corner_spacer_width: f64,
    pub minimum_size: DVec2,
    pub grid: GridAttributes,
}

impl Default for PlaneConfig {
    fn default() -> Self {
        Self {
            rubber_band_zooming: false,
            corner_spacers: false,
            corner_spacer_width: 8.0,
            minimum_size: DVec2::splat(60.0),
            grid: GridAttributes::default(),
        }
    }
}

impl PlaneConfig {
    pub fn with_rubber_band_zooming(mut self, enabled: bool) -> Self {
        self.rubber_band_zooming = enabled;
        self
    }

    pub fn with_corner_spacers(mut self, enabled: bool) -> Self {
        self.corner_spacers = enabled;
        self
    }

    pub fn with_corner_spacer_width(mut self, width: f64) -> Self {
        self.corner_spacer_width = width;
        self
    }

    pub fn with_minimum_size(mut self, size: DVec2) -> Self {
        self.minimum_size = size;
        self
    }

    pub fn with_grid(mut self, grid: GridAttributes) -> Self {
        self.grid = grid;
        self
    }

    /// Reject negative or non-finite sizes and step widths.
    pub fn validate(&self) -> Result<()> {
        if !self.corner_spacer_width.is_finite() || self.corner_spacer_width < 0.0 {
            return Err(OrdinateError::InvalidConfig(format!(
                "corner_spacer_width must be finite and non-negative, got {}",
                self.corner_spacer_width
            )));
        }
        if !self.minimum_size.is_finite() || self.minimum_size.cmplt(DVec2::ZERO).any() {
            return Err(OrdinateError::InvalidConfig(format!(
                "minimum_size must be finite and non-negative, got {:?}",
                self.minimum_size
            )));
        }
        for (name, value) in [
            ("grid.step_width", self.grid.step_width),
            ("grid.sub_step_width", self.grid.sub_step_width),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(OrdinateError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        Ok(())
    }
}
