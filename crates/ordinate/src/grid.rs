//! Grid attributes and per-axis grid computation.
//!
//! A [`GridStrategy`] turns the plane's visible data range into one
//! [`DataDimension`] per axis: the range snapped to grid steps plus the step
//! and sub-step widths. Strategies cache their result and only recompute
//! after the plane marks them with [`GridStrategy::set_need_recalculate`].

use crate::paint::{Color, PaintSurface, Pen};
use crate::transform::CoordinateTransform;
use ordinate_core::math::DVec2;
use ordinate_core::profiling::profile_function;

/// Mantissas a grid step may use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GranularitySequence {
    /// 1, 2, 10, 20, ...
    OneTwo,
    /// 1, 5, 10, 50, ...
    OneFive,
    /// 2.5, 5, 25, 50, ...
    TwoFiveFive,
    /// 1.25, 2.5, 12.5, 25, ...
    OneQuarterTwoFive,
    /// 1, 2, 5, 10, 20, 50, ...
    #[default]
    OneTwoFive,
}

impl GranularitySequence {
    pub fn mantissas(self) -> &'static [f64] {
        match self {
            GranularitySequence::OneTwo => &[1.0, 2.0],
            GranularitySequence::OneFive => &[1.0, 5.0],
            GranularitySequence::TwoFiveFive => &[2.5, 5.0],
            GranularitySequence::OneQuarterTwoFive => &[1.25, 2.5],
            GranularitySequence::OneTwoFive => &[1.0, 2.0, 5.0],
        }
    }

    /// Smallest step from this sequence that is at least `rough`.
    pub fn step_for(self, rough: f64) -> f64 {
        if !rough.is_finite() || rough <= 0.0 {
            return 1.0;
        }
        let magnitude = 10f64.powf(rough.log10().floor());
        for decade in [magnitude / 10.0, magnitude, magnitude * 10.0] {
            for &m in self.mantissas() {
                let step = m * decade;
                if step >= rough * (1.0 - 1e-9) {
                    return step;
                }
            }
        }
        magnitude * 10.0
    }

    /// Sub-steps per step for a step with mantissa `step / 10^n`.
    fn subdivisions(step: f64) -> f64 {
        let mantissa = step / 10f64.powf(step.log10().floor());
        if (mantissa - 2.0).abs() < 1e-9 { 2.0 } else { 5.0 }
    }
}

/// How values are distributed along an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GridCalcMode {
    #[default]
    Linear,
    Logarithmic,
}

/// Grid settings shared by every axis of a plane.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GridAttributes {
    pub grid_visible: bool,
    pub sub_grid_visible: bool,
    pub zero_line_visible: bool,
    pub granularity_sequence: GranularitySequence,
    /// Explicit step width in data units; `0.0` picks one automatically.
    pub step_width: f64,
    /// Explicit sub-step width; `0.0` derives one from the step.
    pub sub_step_width: f64,
    pub grid_pen: Pen,
    pub sub_grid_pen: Pen,
    pub zero_line_pen: Pen,
}

impl Default for GridAttributes {
    fn default() -> Self {
        Self {
            grid_visible: true,
            sub_grid_visible: true,
            zero_line_visible: true,
            granularity_sequence: GranularitySequence::default(),
            step_width: 0.0,
            sub_step_width: 0.0,
            grid_pen: Pen::new(Color::LIGHT_GRAY, 1.0),
            sub_grid_pen: Pen::new(Color::LIGHT_GRAY.with_alpha(0.5), 0.5),
            zero_line_pen: Pen::new(Color::GRAY, 1.0),
        }
    }
}

impl GridAttributes {
    pub fn with_grid_visible(mut self, visible: bool) -> Self {
        self.grid_visible = visible;
        self
    }

    pub fn with_sub_grid_visible(mut self, visible: bool) -> Self {
        self.sub_grid_visible = visible;
        self
    }

    pub fn with_zero_line_visible(mut self, visible: bool) -> Self {
        self.zero_line_visible = visible;
        self
    }

    pub fn with_granularity_sequence(mut self, sequence: GranularitySequence) -> Self {
        self.granularity_sequence = sequence;
        self
    }

    pub fn with_step_width(mut self, step: f64) -> Self {
        self.step_width = step;
        self
    }

    pub fn with_sub_step_width(mut self, sub_step: f64) -> Self {
        self.sub_step_width = sub_step;
        self
    }
}

/// One axis worth of grid: the snapped range and its step widths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataDimension {
    pub start: f64,
    pub end: f64,
    /// Whether the steps were computed rather than taken from the attributes.
    pub is_calculated: bool,
    pub calc_mode: GridCalcMode,
    pub sequence: GranularitySequence,
    pub step_width: f64,
    pub sub_step_width: f64,
}

impl DataDimension {
    pub fn distance(&self) -> f64 {
        self.end - self.start
    }

    /// Major grid positions in `start..=end`.
    pub fn major_ticks(&self) -> Vec<f64> {
        match self.calc_mode {
            GridCalcMode::Linear => linear_ticks(self.start, self.end, self.step_width),
            GridCalcMode::Logarithmic => decade_ticks(self.start, self.end),
        }
    }

    /// Sub-grid positions in `start..=end`, excluding major positions.
    pub fn minor_ticks(&self) -> Vec<f64> {
        match self.calc_mode {
            GridCalcMode::Linear => {
                let major = self.step_width;
                linear_ticks(self.start, self.end, self.sub_step_width)
                    .into_iter()
                    .filter(|v| major <= 0.0 || !on_step(*v, major))
                    .collect()
            }
            GridCalcMode::Logarithmic => {
                let mut ticks = Vec::new();
                for decade in decade_ticks(self.start / 10.0, self.end) {
                    for m in 2..10 {
                        let v = decade * m as f64;
                        if v >= self.start && v <= self.end {
                            ticks.push(v);
                        }
                    }
                }
                ticks
            }
        }
    }
}

fn on_step(value: f64, step: f64) -> bool {
    let r = (value / step).round();
    (value - r * step).abs() < step * 1e-6
}

fn linear_ticks(start: f64, end: f64, step: f64) -> Vec<f64> {
    if step.is_nan() || step <= 0.0 || !start.is_finite() || !end.is_finite() {
        return Vec::new();
    }
    let first = (start / step).ceil() as i64;
    let last = (end / step + 1e-9).floor() as i64;
    if last.saturating_sub(first) > MAX_TICKS {
        tracing::debug!(start, end, step, "too many grid ticks, skipping axis");
        return Vec::new();
    }
    (first..=last).map(|i| i as f64 * step).collect()
}

fn decade_ticks(start: f64, end: f64) -> Vec<f64> {
    if start <= 0.0 || end <= 0.0 {
        return Vec::new();
    }
    let first = (start.log10() - 1e-9).ceil() as i32;
    let last = (end.log10() + 1e-9).floor() as i32;
    (first..=last).map(|e| 10f64.powi(e)).collect()
}

/// Closest pixel gap allowed between lines of an explicit step width.
const MIN_EXPLICIT_SPACING: f64 = 2.0;
/// Closest pixel gap allowed between sub-grid lines.
const MIN_SUB_SPACING: f64 = 1.0;
/// Upper bound on the positions a single tick query produces.
const MAX_TICKS: i64 = 10_000;

/// X then Y.
pub type DataDimensionsList = Vec<DataDimension>;

/// What a grid strategy sees of the plane.
#[derive(Debug, Clone, Copy)]
pub struct PlaneView<'a> {
    pub transform: &'a CoordinateTransform,
    pub attributes: &'a GridAttributes,
}

/// Computes a plane's grid.
pub trait GridStrategy {
    /// Current dimensions, recomputed only when flagged.
    fn update_data(&mut self, view: &PlaneView<'_>) -> DataDimensionsList;
    fn set_need_recalculate(&mut self);
    fn need_recalculate(&self) -> bool;
}

/// Linear or logarithmic X/Y grid for cartesian planes.
#[derive(Debug, Clone)]
pub struct CartesianGrid {
    calc_modes: [GridCalcMode; 2],
    /// Minimum pixel gap between automatic major lines.
    min_line_spacing: f64,
    cached: DataDimensionsList,
    need_recalculate: bool,
}

impl Default for CartesianGrid {
    fn default() -> Self {
        Self::new()
    }
}

impl CartesianGrid {
    pub fn new() -> Self {
        Self {
            calc_modes: [GridCalcMode::Linear; 2],
            min_line_spacing: 50.0,
            cached: Vec::new(),
            need_recalculate: true,
        }
    }

    pub fn with_calc_modes(mut self, x: GridCalcMode, y: GridCalcMode) -> Self {
        self.calc_modes = [x, y];
        self.need_recalculate = true;
        self
    }

    pub fn with_min_line_spacing(mut self, pixels: f64) -> Self {
        self.min_line_spacing = pixels.max(1.0);
        self.need_recalculate = true;
        self
    }

    fn dimension(
        &self,
        mode: GridCalcMode,
        start: f64,
        end: f64,
        pixels: f64,
        attributes: &GridAttributes,
    ) -> DataDimension {
        let sequence = attributes.granularity_sequence;
        if mode == GridCalcMode::Logarithmic {
            return DataDimension {
                start,
                end,
                is_calculated: true,
                calc_mode: mode,
                sequence,
                step_width: 1.0,
                sub_step_width: 0.0,
            };
        }

        let range = end - start;
        // Explicit widths are honoured only while their lines stay
        // distinguishable on screen.
        let max_lines = (pixels / MIN_EXPLICIT_SPACING).floor().max(2.0);
        let explicit =
            attributes.step_width > 0.0 && range / attributes.step_width <= max_lines;
        if attributes.step_width > 0.0 && !explicit {
            tracing::debug!(
                step_width = attributes.step_width,
                range,
                pixels,
                "explicit grid step too dense, calculating one"
            );
        }
        let step = if explicit {
            attributes.step_width
        } else {
            let lines = (pixels / self.min_line_spacing).floor().max(2.0);
            sequence.step_for(range / lines)
        };
        let max_sub_lines = (pixels / MIN_SUB_SPACING).floor().max(2.0);
        let sub_step = if attributes.sub_step_width > 0.0
            && range / attributes.sub_step_width <= max_sub_lines
        {
            attributes.sub_step_width
        } else {
            step / GranularitySequence::subdivisions(step)
        };

        DataDimension {
            start: (start / step).floor() * step,
            end: (end / step).ceil() * step,
            is_calculated: !explicit,
            calc_mode: mode,
            sequence,
            step_width: step,
            sub_step_width: sub_step,
        }
    }
}

impl GridStrategy for CartesianGrid {
    fn update_data(&mut self, view: &PlaneView<'_>) -> DataDimensionsList {
        if !self.need_recalculate {
            return self.cached.clone();
        }
        profile_function!();

        let visible = view.transform.visible_data_range();
        let pixels = view.transform.region().size();
        self.cached = vec![
            self.dimension(
                self.calc_modes[0],
                visible.min.x,
                visible.max.x,
                pixels.x,
                view.attributes,
            ),
            self.dimension(
                self.calc_modes[1],
                visible.min.y,
                visible.max.y,
                pixels.y,
                view.attributes,
            ),
        ];
        self.need_recalculate = false;
        tracing::trace!(dimensions = ?self.cached, "grid recalculated");
        self.cached.clone()
    }

    fn set_need_recalculate(&mut self) {
        self.need_recalculate = true;
    }

    fn need_recalculate(&self) -> bool {
        self.need_recalculate
    }
}

/// Draw grid lines for `dimensions` (X then Y) over the transform's region.
pub fn paint_grid(
    surface: &mut dyn PaintSurface,
    transform: &CoordinateTransform,
    dimensions: &[DataDimension],
    attributes: &GridAttributes,
) {
    profile_function!();
    if !attributes.grid_visible {
        return;
    }

    if let Some(x) = dimensions.first() {
        if attributes.sub_grid_visible {
            for v in x.minor_ticks() {
                vertical_line(surface, transform, v, attributes.sub_grid_pen);
            }
        }
        for v in x.major_ticks() {
            vertical_line(surface, transform, v, attributes.grid_pen);
        }
        if attributes.zero_line_visible && x.start <= 0.0 && x.end >= 0.0 {
            vertical_line(surface, transform, 0.0, attributes.zero_line_pen);
        }
    }

    if let Some(y) = dimensions.get(1) {
        if attributes.sub_grid_visible {
            for v in y.minor_ticks() {
                horizontal_line(surface, transform, v, attributes.sub_grid_pen);
            }
        }
        for v in y.major_ticks() {
            horizontal_line(surface, transform, v, attributes.grid_pen);
        }
        if attributes.zero_line_visible && y.start <= 0.0 && y.end >= 0.0 {
            horizontal_line(surface, transform, 0.0, attributes.zero_line_pen);
        }
    }
}

fn vertical_line(surface: &mut dyn PaintSurface, transform: &CoordinateTransform, x: f64, pen: Pen) {
    let region = transform.region();
    let px = transform.to_pixel(DVec2::new(x, 0.0)).x;
    if px >= region.x && px <= region.right() {
        surface.draw_line(DVec2::new(px, region.y), DVec2::new(px, region.bottom()), pen);
    }
}

fn horizontal_line(
    surface: &mut dyn PaintSurface,
    transform: &CoordinateTransform,
    y: f64,
    pen: Pen,
) {
    let region = transform.region();
    let py = transform.to_pixel(DVec2::new(0.0, y)).y;
    if py >= region.y && py <= region.bottom() {
        surface.draw_line(DVec2::new(region.x, py), DVec2::new(region.right(), py), pen);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagram::DataBounds;
    use crate::zoom::ZoomParameters;
    use ordinate_core::geometry::Rect;

    #[test]
    fn test_step_for_sequences() {
        let s = GranularitySequence::OneTwoFive;
        assert_eq!(s.step_for(0.7), 1.0);
        assert_eq!(s.step_for(1.3), 2.0);
        assert_eq!(s.step_for(3.0), 5.0);
        assert_eq!(s.step_for(6.0), 10.0);
        assert_eq!(s.step_for(20.0), 20.0);
        assert_eq!(GranularitySequence::OneFive.step_for(1.3), 5.0);
        assert_eq!(GranularitySequence::TwoFiveFive.step_for(0.8), 2.5);
        assert_eq!(s.step_for(0.0), 1.0);
    }

    #[test]
    fn test_linear_ticks_inclusive() {
        assert_eq!(linear_ticks(0.0, 10.0, 2.5), vec![0.0, 2.5, 5.0, 7.5, 10.0]);
        assert_eq!(linear_ticks(-3.0, 3.0, 2.0), vec![-2.0, 0.0, 2.0]);
        assert!(linear_ticks(0.0, 1.0, 0.0).is_empty());
    }

    #[test]
    fn test_minor_ticks_skip_major() {
        let dim = DataDimension {
            start: 0.0,
            end: 2.0,
            is_calculated: true,
            calc_mode: GridCalcMode::Linear,
            sequence: GranularitySequence::OneTwoFive,
            step_width: 1.0,
            sub_step_width: 0.5,
        };
        assert_eq!(dim.major_ticks(), vec![0.0, 1.0, 2.0]);
        assert_eq!(dim.minor_ticks(), vec![0.5, 1.5]);
    }

    #[test]
    fn test_log_ticks() {
        let dim = DataDimension {
            start: 1.0,
            end: 1000.0,
            is_calculated: true,
            calc_mode: GridCalcMode::Logarithmic,
            sequence: GranularitySequence::OneTwoFive,
            step_width: 1.0,
            sub_step_width: 0.0,
        };
        assert_eq!(dim.major_ticks(), vec![1.0, 10.0, 100.0, 1000.0]);
        let minor = dim.minor_ticks();
        assert_eq!(minor.first(), Some(&2.0));
        assert_eq!(minor.len(), 8 * 3);
    }

    fn transform() -> CoordinateTransform {
        CoordinateTransform::new(
            DataBounds::new(DVec2::new(0.0, 0.0), DVec2::new(100.0, 10.0)),
            Rect::new(0.0, 0.0, 500.0, 250.0),
            ZoomParameters::IDENTITY,
        )
    }

    #[test]
    fn test_cartesian_grid_caches_until_flagged() {
        let t = transform();
        let attributes = GridAttributes::default();
        let view = PlaneView {
            transform: &t,
            attributes: &attributes,
        };

        let mut grid = CartesianGrid::new();
        assert!(grid.need_recalculate());
        let dims = grid.update_data(&view);
        assert!(!grid.need_recalculate());

        // 500px / 50px = 10 lines over 100 units, step 10.
        assert_eq!(dims[0].step_width, 10.0);
        assert_eq!(dims[0].sub_step_width, 2.0);
        // 250px / 50px = 5 lines over 10 units, step 2.
        assert_eq!(dims[1].step_width, 2.0);
        assert_eq!(dims[1].sub_step_width, 1.0);
        assert!(dims[1].is_calculated);

        // A different view is ignored while the cache is valid.
        let zoomed = CoordinateTransform::new(
            t.bounds(),
            t.region(),
            ZoomParameters::new(10.0, 10.0, DVec2::splat(0.5)),
        );
        let view = PlaneView {
            transform: &zoomed,
            attributes: &attributes,
        };
        assert_eq!(grid.update_data(&view), dims);

        grid.set_need_recalculate();
        assert_eq!(grid.update_data(&view)[0].step_width, 1.0);
    }

    #[test]
    fn test_explicit_step_width() {
        let t = transform();
        let attributes = GridAttributes::default().with_step_width(25.0);
        let mut grid = CartesianGrid::new();
        let dims = grid.update_data(&PlaneView {
            transform: &t,
            attributes: &attributes,
        });
        assert_eq!(dims[0].step_width, 25.0);
        assert_eq!(dims[0].sub_step_width, 5.0);
        assert!(!dims[0].is_calculated);
        assert_eq!(dims[0].major_ticks(), vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    }

    #[test]
    fn test_dense_explicit_step_falls_back_to_calculated() {
        let t = CoordinateTransform::new(
            DataBounds::new(DVec2::new(0.0, 0.0), DVec2::new(1e4, 1.0)),
            Rect::new(0.0, 0.0, 400.0, 100.0),
            ZoomParameters::IDENTITY,
        );
        let attributes = GridAttributes::default()
            .with_step_width(0.001)
            .with_sub_step_width(0.0001);
        let mut grid = CartesianGrid::new();
        let dims = grid.update_data(&PlaneView {
            transform: &t,
            attributes: &attributes,
        });

        let automatic = CartesianGrid::new().update_data(&PlaneView {
            transform: &t,
            attributes: &GridAttributes::default(),
        });

        let x = dims[0];
        assert!(x.is_calculated);
        assert_eq!(x.step_width, automatic[0].step_width);
        assert_eq!(x.sub_step_width, automatic[0].sub_step_width);
        assert!(x.major_ticks().len() <= 201);
        assert!(x.minor_ticks().len() <= 401);
    }

    #[test]
    fn test_linear_ticks_refuse_huge_counts() {
        assert!(linear_ticks(0.0, 1e4, 1e-6).is_empty());
    }
}
