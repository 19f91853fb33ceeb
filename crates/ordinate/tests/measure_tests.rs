//! Measure resolution against areas and the scaling stack.

use ordinate::area::{AreaLookup, AreaRegistry};
use ordinate::measure::{AutoReference, CalculationMode, Measure, MeasureOrientation};
use ordinate::plane::CoordinatePlane;
use ordinate::scaling::MeasureScaling;
use ordinate_core::geometry::Rect;
use ordinate_core::math::dvec2;

fn legend_areas() -> (AreaRegistry, ordinate::area::AreaId) {
    let mut areas = AreaRegistry::new();
    let legend = areas.insert("legend", Rect::new(10.0, 10.0, 200.0, 100.0));
    (areas, legend)
}

fn resolve(measure: &Measure, areas: &dyn AreaLookup, scaling: &MeasureScaling) -> f64 {
    measure.resolve(
        AutoReference::Size(dvec2(1000.0, 500.0)),
        MeasureOrientation::Vertical,
        areas,
        scaling,
    )
}

#[test]
fn test_absolute_ignores_areas_and_scaling() {
    let (areas, legend) = legend_areas();
    let measure = Measure::absolute(12.0).with_reference_area(legend);
    let mut scaling = MeasureScaling::new();

    assert_eq!(resolve(&measure, &areas, &scaling), 12.0);
    let scaled = scaling.scoped(3.0, 0.5);
    assert_eq!(resolve(&measure, &areas, &scaled), 12.0);
}

#[test]
fn test_relative_follows_orientation() {
    let (areas, legend) = legend_areas();
    let scaling = MeasureScaling::new();
    let along = |orientation| {
        let measure = Measure::relative(250.0, orientation).with_reference_area(legend);
        resolve(&measure, &areas, &scaling)
    };

    assert_eq!(along(MeasureOrientation::Horizontal), 50.0);
    assert_eq!(along(MeasureOrientation::Vertical), 25.0);
    assert_eq!(along(MeasureOrientation::Minimum), 25.0);
    assert_eq!(along(MeasureOrientation::Maximum), 50.0);
    assert_eq!(along(MeasureOrientation::Auto), 25.0);
}

#[test]
fn test_relative_scales_with_stack() {
    let (areas, legend) = legend_areas();
    let measure =
        Measure::relative(250.0, MeasureOrientation::Horizontal).with_reference_area(legend);
    let mut scaling = MeasureScaling::new();

    {
        let mut outer = scaling.scoped(2.0, 1.0);
        assert_eq!(resolve(&measure, &areas, &outer), 100.0);
        {
            let inner = outer.scoped(0.5, 1.0);
            assert_eq!(resolve(&measure, &areas, &inner), 25.0);
        }
        assert_eq!(resolve(&measure, &areas, &outer), 100.0);
    }

    assert_eq!(scaling.depth(), 1);
    assert_eq!(resolve(&measure, &areas, &scaling), 50.0);
}

#[test]
fn test_removed_area_resolves_as_unit() {
    let (mut areas, legend) = legend_areas();
    let measure =
        Measure::relative(250.0, MeasureOrientation::Horizontal).with_reference_area(legend);
    areas.remove(legend);
    assert_eq!(resolve(&measure, &areas, &MeasureScaling::new()), 0.25);
}

#[test]
fn test_auto_modes_take_caller_reference() {
    let (areas, legend) = legend_areas();
    let scaling = MeasureScaling::new();

    // Caller offers 1000x500 along Vertical.
    let auto = Measure::new(100.0, CalculationMode::Auto, MeasureOrientation::Horizontal)
        .with_reference_area(legend);
    assert_eq!(resolve(&auto, &areas, &scaling), 50.0);

    let auto_area = Measure::new(
        100.0,
        CalculationMode::AutoArea,
        MeasureOrientation::Horizontal,
    )
    .with_reference_area(legend);
    assert_eq!(resolve(&auto_area, &areas, &scaling), 100.0);

    let auto_orientation = Measure::new(
        100.0,
        CalculationMode::AutoOrientation,
        MeasureOrientation::Horizontal,
    )
    .with_reference_area(legend);
    assert_eq!(resolve(&auto_orientation, &areas, &scaling), 10.0);
}

#[test]
fn test_relative_without_area_uses_caller_reference() {
    let areas = AreaRegistry::new();
    let measure = Measure::relative(10.0, MeasureOrientation::Horizontal);
    assert_eq!(resolve(&measure, &areas, &MeasureScaling::new()), 10.0);
}

#[test]
fn test_measure_against_plane_area() {
    let mut plane = CoordinatePlane::new();
    let measure = Measure::relative(100.0, MeasureOrientation::Minimum)
        .with_reference_area(plane.area_id());

    plane.set_geometry(Rect::new(0.0, 0.0, 400.0, 300.0));
    assert_eq!(resolve(&measure, plane.areas(), &MeasureScaling::new()), 30.0);

    plane.set_geometry(Rect::new(0.0, 0.0, 400.0, 600.0));
    assert_eq!(resolve(&measure, plane.areas(), &MeasureScaling::new()), 40.0);
}

#[test]
fn test_scaling_floor_cannot_be_popped() {
    let mut scaling = MeasureScaling::new();
    assert!(!scaling.pop());
    assert!(scaling.try_push(0.0, 1.0).is_err());
    assert!(scaling.try_push(2.0, 2.0).is_ok());
    assert_eq!(scaling.current_factors(), (2.0, 2.0));
    assert!(scaling.pop());
    assert_eq!(scaling.current_factors(), (1.0, 1.0));
}
