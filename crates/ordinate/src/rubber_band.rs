//! Rubber-band zoom interaction.
//!
//! Dragging with the primary button selects a region of the plane; releasing
//! zooms so that region fills the plane. The secondary button steps back
//! through the zoom history one level at a time.
//!
//! ```text
//! Idle --primary press--> Selecting --move--> Selecting
//! Selecting --primary release--> Idle (zoomed if the selection has area)
//! Idle --secondary press, history non-empty--> Idle (previous zoom)
//! ```

use crate::event::{HandleStatus, PointerButton, PointerEvent, PointerEventKind};
use crate::zoom::{ZoomParameters, ZoomState};
use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;

/// An in-progress selection.
#[derive(Debug, Clone, Copy, PartialEq)]
struct RubberBand {
    origin: DVec2,
    geometry: Rect,
}

impl RubberBand {
    fn new(origin: DVec2) -> Self {
        Self {
            origin,
            geometry: Rect::from_pos_size(origin, DVec2::ZERO),
        }
    }

    /// Where the drag started.
    pub fn origin(&self) -> DVec2 {
        self.origin
    }

    /// Current selection, already clipped to the plane.
    pub fn geometry(&self) -> Rect {
        self.geometry
    }
}

/// Pointer state machine for rubber-band zooming.
#[derive(Debug, Default)]
pub struct RubberBandController {
    enabled: bool,
    band: Option<RubberBand>,
}

impl RubberBandController {
    pub fn new(enabled: bool) -> Self {
        Self {
            enabled,
            band: None,
        }
    }

    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Enable or disable zooming. Disabling drops any selection in progress.
    pub fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
        if !enabled && self.is_selecting() {
            self.cancel();
            tracing::debug!("rubber band dropped because zooming was disabled");
        }
    }

    pub fn is_selecting(&self) -> bool {
        self.band.is_some()
    }

    /// Current selection rectangle, if selecting.
    pub fn selection(&self) -> Option<Rect> {
        self.band.map(|band| band.geometry)
    }

    /// Abandon the current selection without zooming.
    pub fn cancel(&mut self) {
        self.band = None;
    }

    /// Feed a pointer event.
    ///
    /// `plane` is the plane geometry in the same coordinates as the event.
    /// Returns [`HandleStatus::consumed`] when the controller acted on the
    /// event; the caller should then request a redraw.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        plane: Rect,
        zoom: &mut ZoomState,
    ) -> HandleStatus {
        match (event.kind, event.button) {
            (PointerEventKind::Press, Some(PointerButton::Primary)) => self.begin(event.position),
            (
                PointerEventKind::Press | PointerEventKind::DoubleClick,
                Some(PointerButton::Secondary),
            ) => self.step_back(zoom),
            (PointerEventKind::Move, _) => self.drag(event.position, plane),
            (PointerEventKind::Release, Some(PointerButton::Primary)) => self.finish(plane, zoom),
            _ => HandleStatus::ignored(),
        }
    }

    fn begin(&mut self, position: DVec2) -> HandleStatus {
        if !self.enabled {
            return HandleStatus::ignored();
        }
        if self.band.is_some() {
            tracing::debug!("replacing orphaned rubber band");
        }
        self.band = Some(RubberBand::new(position));
        tracing::trace!(?position, "rubber band started");
        HandleStatus::consumed()
    }

    fn drag(&mut self, position: DVec2, plane: Rect) -> HandleStatus {
        let Some(band) = self.band.as_mut() else {
            return HandleStatus::ignored();
        };
        band.geometry = Rect::from_points(band.origin, position).intersect(&plane);
        HandleStatus::consumed()
    }

    fn finish(&mut self, plane: Rect, zoom: &mut ZoomState) -> HandleStatus {
        let Some(band) = self.band.take() else {
            return HandleStatus::ignored();
        };

        match zoom_to_selection(zoom.current(), plane, band.geometry) {
            Some(next) => {
                zoom.push_current();
                zoom.apply(next);
                tracing::debug!(
                    factor_x = next.factor_x,
                    factor_y = next.factor_y,
                    center = ?next.center,
                    depth = zoom.history_len(),
                    "rubber band zoom applied"
                );
            }
            None => tracing::trace!(selection = ?band.geometry, "rubber band discarded without zooming"),
        }
        HandleStatus::consumed()
    }

    fn step_back(&mut self, zoom: &mut ZoomState) -> HandleStatus {
        if !self.enabled {
            return HandleStatus::ignored();
        }
        match zoom.restore() {
            Some(restored) => {
                tracing::debug!(?restored, depth = zoom.history_len(), "zoom restored");
                HandleStatus::consumed()
            }
            None => HandleStatus::ignored(),
        }
    }
}

/// Zoom parameters that make `selection` fill `plane`, starting from
/// `current`.
///
/// Returns `None` when the selection or the plane has no area, or when the
/// resulting zoom is not finite.
pub fn zoom_to_selection(
    current: ZoomParameters,
    plane: Rect,
    selection: Rect,
) -> Option<ZoomParameters> {
    if selection.is_empty() || plane.is_empty() {
        return None;
    }

    let factors = current.factors();
    let plane_size = plane.size();
    let local_center = selection.center() - plane.position();

    let center = local_center / plane_size / factors + current.center - 0.5 / factors;
    let next = factors * plane_size / selection.size();
    if !center.is_finite() {
        tracing::debug!(?center, "rubber band zoom center out of range");
        return None;
    }

    match ZoomParameters::try_new(next.x, next.y, center) {
        Ok(params) => Some(params),
        Err(err) => {
            tracing::debug!(%err, "rubber band zoom out of range");
            None
        }
    }
}
