//! Rubber-band zoom and zoom history through the plane.

use ordinate::diagram::DataBounds;
use ordinate::event::{HandleStatus, PointerButton, PointerEvent};
use ordinate::plane::CoordinatePlane;
use ordinate::zoom::ZoomParameters;
use ordinate_core::geometry::Rect;
use ordinate_core::logging;
use ordinate_core::math::{DVec2, dvec2};
use ordinate_test_utils::{MockDiagram, SignalProbe};

const EPSILON: f64 = 1e-9;

fn assert_near(actual: DVec2, expected: DVec2) {
    assert!(
        (actual - expected).abs().max_element() < EPSILON,
        "{actual:?} != {expected:?}"
    );
}

fn zoomable_plane(geometry: Rect) -> CoordinatePlane {
    logging::init_for_tests();
    let mut plane = CoordinatePlane::new();
    plane.set_rubber_band_zooming_enabled(true);
    plane.set_geometry(geometry);
    plane.add_diagram(Box::new(MockDiagram::new(DataBounds::new(
        dvec2(0.0, 0.0),
        dvec2(10.0, 10.0),
    ))));
    plane
}

fn drag(plane: &mut CoordinatePlane, from: DVec2, to: DVec2) -> HandleStatus {
    plane.handle_pointer_event(&PointerEvent::press(PointerButton::Primary, from));
    plane.handle_pointer_event(&PointerEvent::moved(to));
    plane.handle_pointer_event(&PointerEvent::release(PointerButton::Primary, to))
}

fn secondary_click(plane: &mut CoordinatePlane) -> HandleStatus {
    plane.handle_pointer_event(&PointerEvent::press(PointerButton::Secondary, DVec2::ZERO))
}

#[test]
fn test_drag_zooms_into_selection_and_click_steps_back() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));
    let updates = SignalProbe::attach(&plane.signals().need_update);

    let status = drag(&mut plane, dvec2(100.0, 75.0), dvec2(300.0, 225.0));
    assert!(status.is_consumed());
    assert_eq!(
        plane.zoom_parameters(),
        ZoomParameters::new(2.0, 2.0, dvec2(0.5, 0.5))
    );
    assert_eq!(plane.zoom_history_len(), 1);
    assert!(plane.rubber_band_selection().is_none());
    assert!(updates.count() >= 1);

    assert!(secondary_click(&mut plane).is_consumed());
    assert_eq!(plane.zoom_parameters(), ZoomParameters::IDENTITY);
    assert_eq!(plane.zoom_history_len(), 0);

    // Nothing left to step back to.
    assert_eq!(secondary_click(&mut plane), HandleStatus::ignored());
}

#[test]
fn test_selection_fills_offset_plane() {
    let geometry = Rect::new(50.0, 20.0, 400.0, 300.0);
    let mut plane = zoomable_plane(geometry);

    drag(&mut plane, dvec2(50.0, 20.0), dvec2(250.0, 170.0));
    assert_eq!(plane.zoom_factor_x(), 2.0);
    assert_eq!(plane.zoom_factor_y(), 2.0);
    assert_near(plane.zoom_center(), dvec2(0.25, 0.25));

    // The selected corners now sit on the plane's corners.
    let transform = plane.transform();
    assert_near(transform.to_pixel(dvec2(0.0, 10.0)), geometry.position());
    assert_near(
        transform.to_pixel(dvec2(5.0, 5.0)),
        geometry.position() + geometry.size(),
    );
}

#[test]
fn test_nested_zoom_restores_in_reverse_order() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));

    drag(&mut plane, dvec2(100.0, 75.0), dvec2(300.0, 225.0));
    let first = plane.zoom_parameters();
    drag(&mut plane, dvec2(0.0, 0.0), dvec2(200.0, 150.0));

    assert_eq!(plane.zoom_factor_x(), 4.0);
    assert_near(plane.zoom_center(), dvec2(0.375, 0.375));
    assert_eq!(plane.zoom_history_len(), 2);

    let double_click = PointerEvent::double_click(PointerButton::Secondary, DVec2::ZERO);
    assert!(plane.handle_pointer_event(&double_click).is_consumed());
    assert_eq!(plane.zoom_parameters(), first);

    assert!(plane.restore_zoom());
    assert_eq!(plane.zoom_parameters(), ZoomParameters::IDENTITY);
    assert!(!plane.restore_zoom());
}

#[test]
fn test_degenerate_selection_does_not_zoom() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));

    // Click without dragging.
    let point = dvec2(120.0, 80.0);
    plane.handle_pointer_event(&PointerEvent::press(PointerButton::Primary, point));
    let status =
        plane.handle_pointer_event(&PointerEvent::release(PointerButton::Primary, point));
    assert!(status.is_consumed());

    // Horizontal drag with no height.
    drag(&mut plane, dvec2(100.0, 100.0), dvec2(200.0, 100.0));

    assert_eq!(plane.zoom_parameters(), ZoomParameters::IDENTITY);
    assert_eq!(plane.zoom_history_len(), 0);
}

#[test]
fn test_selection_is_clipped_to_plane() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));
    plane.handle_pointer_event(&PointerEvent::press(
        PointerButton::Primary,
        dvec2(200.0, 150.0),
    ));
    plane.handle_pointer_event(&PointerEvent::moved(dvec2(900.0, 900.0)));
    assert_eq!(
        plane.rubber_band_selection(),
        Some(Rect::new(200.0, 150.0, 200.0, 150.0))
    );
}

#[test]
fn test_disabled_rubber_band_ignores_pointer() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));
    plane.set_rubber_band_zooming_enabled(false);

    let status = drag(&mut plane, dvec2(100.0, 75.0), dvec2(300.0, 225.0));
    assert_eq!(status, HandleStatus::ignored());
    assert_eq!(plane.zoom_parameters(), ZoomParameters::IDENTITY);
}

#[test]
fn test_disabling_mid_drag_drops_selection() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));
    plane.handle_pointer_event(&PointerEvent::press(
        PointerButton::Primary,
        dvec2(10.0, 10.0),
    ));
    plane.handle_pointer_event(&PointerEvent::moved(dvec2(50.0, 50.0)));
    assert!(plane.rubber_band_selection().is_some());

    let updates = SignalProbe::attach(&plane.signals().need_update);
    plane.set_rubber_band_zooming_enabled(false);
    assert!(plane.rubber_band_selection().is_none());
    assert_eq!(updates.count(), 1);
}

#[test]
fn test_invalid_factors_are_ignored() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));
    let updates = SignalProbe::attach(&plane.signals().need_update);

    plane.set_zoom_factor_x(0.0);
    plane.set_zoom_factor_y(-2.0);
    plane.set_zoom_factors(f64::NAN, 2.0);
    plane.set_zoom_factor_x(f64::INFINITY);

    assert_eq!(plane.zoom_parameters(), ZoomParameters::IDENTITY);
    assert_eq!(updates.count(), 0);
}

#[test]
fn test_programmatic_zoom_with_history() {
    let mut plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));

    plane.push_zoom();
    plane.set_zoom_factors(3.0, 1.5);
    plane.set_zoom_center(dvec2(0.2, 0.7));
    assert_eq!(
        plane.zoom_parameters(),
        ZoomParameters::new(3.0, 1.5, dvec2(0.2, 0.7))
    );

    plane.push_zoom();
    plane.reset_zoom();
    assert_eq!(plane.zoom_parameters(), ZoomParameters::IDENTITY);
    assert_eq!(plane.zoom_history_len(), 0);
}

#[test]
fn test_transform_round_trip_under_zoom() {
    let mut plane = zoomable_plane(Rect::new(30.0, 40.0, 400.0, 300.0));
    plane.set_zoom_parameters(ZoomParameters::new(2.5, 0.75, dvec2(0.3, 0.6)));

    let transform = plane.transform();
    for point in [dvec2(0.0, 0.0), dvec2(3.5, 8.25), dvec2(10.0, -4.0)] {
        assert_near(transform.to_data(transform.to_pixel(point)), point);
    }
}

#[test]
fn test_unzoomed_transform_maps_bounds_to_plane() {
    let plane = zoomable_plane(Rect::new(0.0, 0.0, 400.0, 300.0));
    let transform = plane.transform();

    // Y grows upwards in data space.
    assert_near(transform.to_pixel(dvec2(0.0, 0.0)), dvec2(0.0, 300.0));
    assert_near(transform.to_pixel(dvec2(10.0, 10.0)), dvec2(400.0, 0.0));
    assert_near(transform.to_pixel(dvec2(5.0, 5.0)), dvec2(200.0, 150.0));
    assert!(plane.is_visible_point(dvec2(200.0, 150.0)));
    assert!(!plane.is_visible_point(dvec2(401.0, 150.0)));
}
