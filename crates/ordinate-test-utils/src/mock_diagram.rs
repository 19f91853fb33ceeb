//! A diagram that records what the plane does to it.

use ordinate::diagram::{DataBounds, Diagram, DiagramBase, PaintContext};
use ordinate::event::{HandleStatus, PointerEvent};
use ordinate::paint::{Brush, Color};
use ordinate::transform::CoordinateTransform;
use ordinate_core::geometry::Rect;
use parking_lot::Mutex;
use std::sync::Arc;

#[derive(Debug, Default)]
struct Recorded {
    events: Vec<PointerEvent>,
    painted: Vec<Rect>,
}

/// Shared view of what a [`MockDiagram`] received.
///
/// Stays readable after the diagram has been moved into a plane.
#[derive(Debug, Clone, Default)]
pub struct MockLog {
    inner: Arc<Mutex<Recorded>>,
}

impl MockLog {
    /// Pointer events delivered to the diagram, in order.
    pub fn events(&self) -> Vec<PointerEvent> {
        self.inner.lock().events.clone()
    }

    pub fn event_count(&self) -> usize {
        self.inner.lock().events.len()
    }

    /// Local regions the diagram was asked to paint into.
    pub fn painted_regions(&self) -> Vec<Rect> {
        self.inner.lock().painted.clone()
    }

    pub fn paint_count(&self) -> usize {
        self.inner.lock().painted.len()
    }

    pub fn clear(&self) {
        let mut inner = self.inner.lock();
        inner.events.clear();
        inner.painted.clear();
    }
}

/// Diagram with fixed boundaries.
///
/// Paints one filled rectangle covering its region and answers every
/// pointer event with a configurable status.
#[derive(Debug)]
pub struct MockDiagram {
    base: DiagramBase,
    bounds: Option<DataBounds>,
    response: HandleStatus,
    fill: Color,
    log: MockLog,
}

impl MockDiagram {
    pub fn new(bounds: DataBounds) -> Self {
        Self {
            base: DiagramBase::new("mock"),
            bounds: Some(bounds),
            response: HandleStatus::ignored(),
            fill: Color::BLUE,
            log: MockLog::default(),
        }
    }

    /// A diagram with nothing to draw.
    pub fn empty() -> Self {
        Self {
            bounds: None,
            ..Self::new(DataBounds::UNIT)
        }
    }

    pub fn with_response(mut self, response: HandleStatus) -> Self {
        self.response = response;
        self
    }

    pub fn with_fill(mut self, fill: Color) -> Self {
        self.fill = fill;
        self
    }

    pub fn set_bounds(&mut self, bounds: Option<DataBounds>) {
        self.bounds = bounds;
    }

    pub fn log(&self) -> MockLog {
        self.log.clone()
    }
}

impl Diagram for MockDiagram {
    fn base(&self) -> &DiagramBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut DiagramBase {
        &mut self.base
    }

    fn data_boundaries(&self) -> Option<DataBounds> {
        self.bounds
    }

    fn paint(&mut self, ctx: &mut PaintContext<'_>) {
        let region = ctx.region();
        ctx.surface.fill_rect(region, &Brush::solid(self.fill));
        self.log.inner.lock().painted.push(region);
    }

    fn handle_pointer(
        &mut self,
        event: &PointerEvent,
        _transform: &CoordinateTransform,
    ) -> HandleStatus {
        tracing::trace!(diagram = %self.base.id(), ?event, "mock diagram received event");
        self.log.inner.lock().events.push(*event);
        self.response
    }
}
