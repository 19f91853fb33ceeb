use super::{DataBounds, Diagram, DiagramBase, PaintContext, SharedModel, series_color};
use crate::measure::{AutoReference, Measure, MeasureOrientation};
use crate::paint::Pen;
use ordinate_core::math::DVec2;
use ordinate_core::profiling::profile_function;

/// One polyline per model column, x = row index.
#[derive(Debug)]
pub struct LineDiagram {
    base: DiagramBase,
    line_width: Measure,
}

impl Default for LineDiagram {
    fn default() -> Self {
        Self::new()
    }
}

impl LineDiagram {
    pub fn new() -> Self {
        Self {
            base: DiagramBase::new("LineDiagram"),
            // 5‰ of the smaller side of the diagram region.
            line_width: Measure::relative(5.0, MeasureOrientation::Minimum),
        }
    }

    pub fn with_model(mut self, model: SharedModel) -> Self {
        self.base.set_model(Some(model));
        self
    }

    pub fn set_model(&mut self, model: Option<SharedModel>) {
        self.base.set_model(model);
    }

    pub fn line_width(&self) -> Measure {
        self.line_width
    }

    pub fn set_line_width(&mut self, width: Measure) {
        self.line_width = width;
    }

    /// Data points per column, skipping missing cells.
    fn series(&self) -> Vec<Vec<DVec2>> {
        self.base
            .with_model(|model| {
                (0..model.column_count())
                    .map(|column| {
                        (0..model.row_count())
                            .filter_map(|row| {
                                model
                                    .value(row, column)
                                    .map(|v| DVec2::new(row as f64, v))
                            })
                            .collect()
                    })
                    .collect()
            })
            .unwrap_or_default()
    }
}

impl Diagram for LineDiagram {
    fn base(&self) -> &DiagramBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DiagramBase {
        &mut self.base
    }

    fn data_boundaries(&self) -> Option<DataBounds> {
        DataBounds::from_points(self.series().into_iter().flatten())
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        profile_function!();

        let width = self.line_width.resolve(
            AutoReference::Size(ctx.region().size()),
            MeasureOrientation::Minimum,
            ctx.areas,
            ctx.scaling,
        );

        for (column, points) in self.series().into_iter().enumerate() {
            let pixels: Vec<DVec2> = points
                .into_iter()
                .map(|p| ctx.transform.to_pixel(p))
                .collect();
            ctx.surface
                .draw_polyline(&pixels, Pen::new(series_color(column), width));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::TableModel;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[test]
    fn test_boundaries_span_all_columns() {
        let model = Rc::new(RefCell::new(TableModel::from_columns(&[
            vec![1.0, 5.0, 2.0],
            vec![-3.0, 0.0],
        ])));
        let diagram = LineDiagram::new().with_model(model);
        assert_eq!(
            diagram.data_boundaries(),
            Some(DataBounds::new(DVec2::new(0.0, -3.0), DVec2::new(2.0, 5.0)))
        );
    }

    #[test]
    fn test_no_model_has_no_boundaries() {
        assert_eq!(LineDiagram::new().data_boundaries(), None);
    }
}
