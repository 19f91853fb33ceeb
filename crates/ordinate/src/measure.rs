//! Abstract lengths resolved against areas at paint time.
//!
//! A [`Measure`] is either an absolute pixel value or a per-mille fraction of
//! some area's width, height, or smaller/larger side. Font sizes, legend
//! spacing and marker sizes are all measures so they follow the chart when it
//! is resized or printed.
//!
//! # Examples
//! ```
//! use ordinate::area::AreaRegistry;
//! use ordinate::measure::{AutoReference, Measure, MeasureOrientation};
//! use ordinate::scaling::MeasureScaling;
//! use ordinate_core::math::DVec2;
//!
//! let areas = AreaRegistry::new();
//! let scaling = MeasureScaling::new();
//!
//! // A quarter of the reference width.
//! let gap = Measure::relative(250.0, MeasureOrientation::Horizontal);
//! let px = gap.resolve(
//!     AutoReference::Size(DVec2::new(200.0, 100.0)),
//!     MeasureOrientation::Minimum,
//!     &areas,
//!     &scaling,
//! );
//! assert_eq!(px, 50.0);
//! ```

use crate::area::{AreaId, AreaLookup};
use crate::scaling::MeasureScaling;
use ordinate_core::math::DVec2;
use std::fmt;

/// How a measure's value is interpreted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CalculationMode {
    /// Pixels, independent of any area and of measure scaling.
    Absolute,
    /// Per-mille of the measure's own reference area and orientation.
    Relative,
    /// Per-mille of the caller's area, along the caller's orientation.
    #[default]
    Auto,
    /// Per-mille of the caller's area, along the measure's own orientation.
    AutoArea,
    /// Per-mille of the measure's own area, along the caller's orientation.
    AutoOrientation,
}

/// Which side of the reference area a relative measure follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureOrientation {
    /// Same as [`Minimum`](Self::Minimum).
    #[default]
    Auto,
    /// The smaller of width and height.
    Minimum,
    /// The larger of width and height.
    Maximum,
    /// The width.
    Horizontal,
    /// The height.
    Vertical,
}

impl MeasureOrientation {
    /// Pick the component of `size` this orientation refers to.
    pub fn pick(self, size: DVec2) -> f64 {
        match self {
            MeasureOrientation::Auto | MeasureOrientation::Minimum => size.x.min(size.y),
            MeasureOrientation::Maximum => size.x.max(size.y),
            MeasureOrientation::Horizontal => size.x,
            MeasureOrientation::Vertical => size.y,
        }
    }
}

/// The area a caller offers for `Auto*` modes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum AutoReference {
    /// A concrete size, typically the geometry of the item being laid out.
    Size(DVec2),
    /// A registered area, looked up at resolve time.
    Area(AreaId),
}

/// Abstract length specification.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    value: f64,
    mode: CalculationMode,
    area: Option<AreaId>,
    orientation: MeasureOrientation,
}

impl Default for Measure {
    fn default() -> Self {
        Self::new(0.0, CalculationMode::Auto, MeasureOrientation::Auto)
    }
}

impl Measure {
    pub fn new(value: f64, mode: CalculationMode, orientation: MeasureOrientation) -> Self {
        Self {
            value,
            mode,
            area: None,
            orientation,
        }
    }

    /// An absolute pixel measure.
    pub fn absolute(value: f64) -> Self {
        Self::new(value, CalculationMode::Absolute, MeasureOrientation::Auto)
    }

    /// A per-mille measure along `orientation` of whatever area it is resolved
    /// against.
    pub fn relative(per_mille: f64, orientation: MeasureOrientation) -> Self {
        Self::new(per_mille, CalculationMode::Relative, orientation)
    }

    /// Set the reference area.
    pub fn with_reference_area(mut self, area: AreaId) -> Self {
        self.area = Some(area);
        self
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn set_value(&mut self, value: f64) {
        self.value = value;
    }

    pub fn calculation_mode(&self) -> CalculationMode {
        self.mode
    }

    pub fn set_calculation_mode(&mut self, mode: CalculationMode) {
        self.mode = mode;
    }

    pub fn reference_area(&self) -> Option<AreaId> {
        self.area
    }

    pub fn set_reference_area(&mut self, area: Option<AreaId>) {
        self.area = area;
    }

    pub fn reference_orientation(&self) -> MeasureOrientation {
        self.orientation
    }

    pub fn set_reference_orientation(&mut self, orientation: MeasureOrientation) {
        self.orientation = orientation;
    }

    /// Whether this measure is an absolute pixel value.
    pub fn is_absolute(&self) -> bool {
        self.mode == CalculationMode::Absolute
    }

    /// Resolve to pixels.
    ///
    /// `auto_reference` and `auto_orientation` stand in for the reference area
    /// and orientation in the `Auto*` modes, and for a missing reference area
    /// in `Relative`/`AutoOrientation`. The reference size is multiplied by the
    /// current scaling factors before the orientation is applied. An area that
    /// no longer exists counts as size (1, 1).
    pub fn resolve(
        &self,
        auto_reference: AutoReference,
        auto_orientation: MeasureOrientation,
        areas: &dyn AreaLookup,
        scaling: &MeasureScaling,
    ) -> f64 {
        if self.is_absolute() {
            return self.value;
        }

        let own = self.area.map(AutoReference::Area);
        let (reference, orientation) = match self.mode {
            CalculationMode::Auto => (auto_reference, auto_orientation),
            CalculationMode::AutoArea => (auto_reference, self.orientation),
            CalculationMode::AutoOrientation => (own.unwrap_or(auto_reference), auto_orientation),
            CalculationMode::Relative | CalculationMode::Absolute => {
                (own.unwrap_or(auto_reference), self.orientation)
            }
        };

        let size = match reference {
            AutoReference::Size(size) => size,
            AutoReference::Area(id) => areas.area_size(id).unwrap_or_else(|| {
                tracing::debug!(?id, "measure reference area is gone, using unit size");
                DVec2::ONE
            }),
        };

        let (sx, sy) = scaling.current_factors();
        let scaled = size * DVec2::new(sx, sy);
        self.value / 1000.0 * orientation.pick(scaled)
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.mode {
            CalculationMode::Absolute => write!(f, "{}px", self.value),
            mode => write!(f, "{}‰ ({:?}, {:?})", self.value, mode, self.orientation),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::area::AreaRegistry;
    use ordinate_core::geometry::Rect;

    fn item_size() -> AutoReference {
        AutoReference::Size(DVec2::new(200.0, 100.0))
    }

    #[test]
    fn test_absolute_ignores_scaling_and_area() {
        let mut areas = AreaRegistry::new();
        let gone = areas.insert("gone", Rect::ZERO);
        areas.remove(gone);

        let mut scaling = MeasureScaling::new();
        let guard = scaling.scoped(2.0, 2.0);
        let m = Measure::absolute(50.0).with_reference_area(gone);
        assert_eq!(
            m.resolve(item_size(), MeasureOrientation::Maximum, &areas, &guard),
            50.0
        );
    }

    #[test]
    fn test_orientation_components() {
        let areas = AreaRegistry::new();
        let scaling = MeasureScaling::new();
        let cases = [
            (MeasureOrientation::Auto, 10.0),
            (MeasureOrientation::Minimum, 10.0),
            (MeasureOrientation::Maximum, 20.0),
            (MeasureOrientation::Horizontal, 20.0),
            (MeasureOrientation::Vertical, 10.0),
        ];
        for (orientation, expected) in cases {
            let m = Measure::relative(100.0, orientation);
            assert_eq!(
                m.resolve(item_size(), MeasureOrientation::Auto, &areas, &scaling),
                expected,
                "{orientation:?}"
            );
        }
    }

    #[test]
    fn test_modes_pick_area_and_orientation() {
        let mut areas = AreaRegistry::new();
        let legend = areas.insert("legend", Rect::new(0.0, 0.0, 1000.0, 400.0));
        let scaling = MeasureScaling::new();

        let base = Measure::new(100.0, CalculationMode::Relative, MeasureOrientation::Vertical)
            .with_reference_area(legend);
        let resolve = |mode| {
            let mut m = base;
            m.set_calculation_mode(mode);
            m.resolve(item_size(), MeasureOrientation::Horizontal, &areas, &scaling)
        };

        // own area, own orientation: 400 * 0.1
        assert_eq!(resolve(CalculationMode::Relative), 40.0);
        // auto area, auto orientation: 200 * 0.1
        assert_eq!(resolve(CalculationMode::Auto), 20.0);
        // auto area, own orientation: 100 * 0.1
        assert_eq!(resolve(CalculationMode::AutoArea), 10.0);
        // own area, auto orientation: 1000 * 0.1
        assert_eq!(resolve(CalculationMode::AutoOrientation), 100.0);
    }

    #[test]
    fn test_relative_without_area_uses_auto_reference() {
        let areas = AreaRegistry::new();
        let scaling = MeasureScaling::new();
        let m = Measure::relative(250.0, MeasureOrientation::Horizontal);
        assert_eq!(
            m.resolve(item_size(), MeasureOrientation::Vertical, &areas, &scaling),
            50.0
        );
    }

    #[test]
    fn test_removed_area_resolves_as_unit() {
        let mut areas = AreaRegistry::new();
        let legend = areas.insert("legend", Rect::new(0.0, 0.0, 500.0, 500.0));
        let m = Measure::relative(500.0, MeasureOrientation::Horizontal).with_reference_area(legend);
        areas.remove(legend);

        let scaling = MeasureScaling::new();
        assert_eq!(
            m.resolve(item_size(), MeasureOrientation::Auto, &areas, &scaling),
            0.5
        );
    }

    #[test]
    fn test_scaling_applies_per_axis() {
        let areas = AreaRegistry::new();
        let mut scaling = MeasureScaling::new();
        scaling.push(2.0, 3.0);

        let h = Measure::relative(100.0, MeasureOrientation::Horizontal);
        let v = Measure::relative(100.0, MeasureOrientation::Vertical);
        assert_eq!(h.resolve(item_size(), MeasureOrientation::Auto, &areas, &scaling), 40.0);
        assert_eq!(v.resolve(item_size(), MeasureOrientation::Auto, &areas, &scaling), 30.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Measure::absolute(12.0).to_string(), "12px");
    }
}
