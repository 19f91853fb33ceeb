use super::{DataBounds, Diagram, DiagramBase, PaintContext, SharedModel, series_color};
use crate::event::{HandleStatus, PointerButton, PointerEvent, PointerEventKind};
use crate::measure::{AutoReference, Measure, MeasureOrientation};
use crate::paint::{Brush, Color, Pen};
use crate::transform::CoordinateTransform;
use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;
use ordinate_core::profiling::profile_function;

/// A bar in data space.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bar {
    row: usize,
    column: usize,
    bounds: DataBounds,
}

/// Grouped bars: one group per row, one bar per column, rising from zero.
#[derive(Debug)]
pub struct BarDiagram {
    base: DiagramBase,
    /// Share of each unit-wide row slot the group occupies.
    group_fraction: f64,
    outline: Measure,
    selected: Option<(usize, usize)>,
}

impl Default for BarDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl BarDiagram {
    pub fn new() -> Self {
        Self {
            base: DiagramBase::new("BarDiagram"),
            group_fraction: 0.8,
            outline: Measure::absolute(1.0),
            selected: None,
        }
    }

    pub fn with_model(mut self, model: SharedModel) -> Self {
        self.base.set_model(Some(model));
        self
    }

    pub fn set_model(&mut self, model: Option<SharedModel>) {
        self.base.set_model(model);
        self.selected = None;
    }

    pub fn group_fraction(&self) -> f64 {
        self.group_fraction
    }

    /// Clamped to `0.05..=1.0`.
    pub fn set_group_fraction(&mut self, fraction: f64) {
        self.group_fraction = fraction.clamp(0.05, 1.0);
    }

    pub fn set_outline_width(&mut self, width: Measure) {
        self.outline = width;
    }

    /// `(row, column)` of the bar picked by the last primary press.
    pub fn selected(&self) -> Option<(usize, usize)> {
        self.selected
    }

    fn bars(&self) -> Vec<Bar> {
        let fraction = self.group_fraction;
        self.base
            .with_model(|model| {
                let columns = model.column_count();
                if columns == 0 {
                    return Vec::new();
                }
                let width = fraction / columns as f64;
                let mut bars = Vec::new();
                for row in 0..model.row_count() {
                    let left = row as f64 - fraction / 2.0;
                    for column in 0..columns {
                        let Some(value) = model.value(row, column).filter(|v| v.is_finite())
                        else {
                            continue;
                        };
                        let x0 = left + column as f64 * width;
                        bars.push(Bar {
                            row,
                            column,
                            bounds: DataBounds::new(
                                DVec2::new(x0, 0.0),
                                DVec2::new(x0 + width, value),
                            ),
                        });
                    }
                }
                bars
            })
            .unwrap_or_default()
    }

    fn pixel_rect(transform: &CoordinateTransform, bounds: &DataBounds) -> Rect {
        Rect::from_points(
            transform.to_pixel(bounds.min),
            transform.to_pixel(bounds.max),
        )
    }
}

impl Diagram for BarDiagram {
    fn base(&self) -> &DiagramBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DiagramBase {
        &mut self.base
    }

    fn data_boundaries(&self) -> Option<DataBounds> {
        let rows = self.base.with_model(|m| m.row_count()).unwrap_or(0);
        if rows == 0 {
            return None;
        }
        let mut bounds = DataBounds::new(
            DVec2::new(-0.5, 0.0),
            DVec2::new(rows as f64 - 0.5, 0.0),
        );
        for bar in self.bars() {
            bounds = bounds.union(&bar.bounds);
        }
        Some(bounds)
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        profile_function!();

        let outline = self.outline.resolve(
            AutoReference::Size(ctx.region().size()),
            MeasureOrientation::Minimum,
            ctx.areas,
            ctx.scaling,
        );

        for bar in self.bars() {
            let rect = Self::pixel_rect(ctx.transform, &bar.bounds);
            if rect.is_empty() {
                continue;
            }
            let color = series_color(bar.column);
            ctx.surface.fill_rect(
                rect,
                &Brush::vertical_gradient(rect, color, color.lerp(Color::BLACK, 0.3)),
            );
            if self.selected == Some((bar.row, bar.column)) {
                ctx.surface.stroke_rect(rect, Pen::new(Color::BLACK, outline * 2.0));
            } else if outline > 0.0 {
                ctx.surface
                    .stroke_rect(rect, Pen::new(color.lerp(Color::BLACK, 0.5), outline));
            }
        }
    }

    fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        transform: &CoordinateTransform,
    ) -> HandleStatus {
        if event.kind != PointerEventKind::Press || !event.is_button(PointerButton::Primary) {
            return HandleStatus::ignored();
        }
        let hit = self
            .bars()
            .into_iter()
            .find(|bar| Self::pixel_rect(transform, &bar.bounds).contains(event.position));
        self.selected = hit.map(|bar| (bar.row, bar.column));
        tracing::trace!(selected = ?self.selected, "bar selection");
        // Selection never consumes; the plane's zoom interaction still runs.
        HandleStatus::handled()
    }
}
