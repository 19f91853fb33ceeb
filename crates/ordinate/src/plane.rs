//! The coordinate plane: diagram registry, layout, zoom and interaction.
//!
//! A plane owns its diagrams and maps their data onto its geometry. It never
//! calls back into the host directly. Instead it raises requests through
//! [`PlaneSignals`]:
//!
//! - `need_update`: repaint.
//! - `need_relayout`: the plane's own layout inputs changed.
//! - `need_layout_planes`: sibling planes sharing axes must be laid out again.
//! - `boundaries_changed`: combined data boundaries may have moved.
//!
//! Geometry changes are queued and only delivered by
//! [`CoordinatePlane::dispatch_queued`], so observers never run inside
//! `set_geometry` itself. Requests made while a [`BatchGuard`] is alive are
//! coalesced and fire once when the last guard drops.

use crate::area::{AreaId, AreaRegistry};
use crate::config::PlaneConfig;
use crate::diagram::{DataBounds, Diagram, DiagramId, PaintContext};
use crate::error::Result;
use crate::event::{EventQueue, GeometryChange, HandleStatus, PointerEvent};
use crate::grid::{
    self, CartesianGrid, DataDimensionsList, GridAttributes, GridStrategy, PlaneView,
};
use crate::paint::{Brush, Color, PaintSurface, Pen, SurfaceState};
use crate::rubber_band::RubberBandController;
use crate::scaling::MeasureScaling;
use crate::signal::{Connection, Signal};
use crate::transform::CoordinateTransform;
use crate::zoom::{ZoomParameters, ZoomState};
use bitflags::bitflags;
use ordinate_core::alloc::HashMap;
use ordinate_core::geometry::Rect;
use ordinate_core::math::{DVec2, is_positive_finite};
use ordinate_core::profiling::profile_function;
use std::cell::Cell;
use std::fmt;
use std::rc::{Rc, Weak};
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_PLANE: AtomicU64 = AtomicU64::new(1);

const RUBBER_BAND_FILL: Color = Color::rgba(0.2, 0.4, 0.9, 0.2);
const RUBBER_BAND_EDGE: Color = Color::rgba(0.2, 0.4, 0.9, 0.8);

/// Unique plane identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlaneId(u64);

impl PlaneId {
    fn next() -> Self {
        Self(NEXT_PLANE.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for PlaneId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "plane#{}", self.0)
    }
}

/// Notifications a plane emits.
#[derive(Debug, Clone, Default)]
pub struct PlaneSignals {
    pub need_update: Signal<()>,
    pub need_relayout: Signal<()>,
    pub need_layout_planes: Signal<()>,
    pub boundaries_changed: Signal<()>,
    /// Emitted from the plane's destructor.
    pub destroyed: Signal<PlaneId>,
    /// Delivered by [`CoordinatePlane::dispatch_queued`].
    pub geometry_changed: Signal<GeometryChange>,
}

bitflags! {
    /// Requests held back while a batch is open.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    struct Pending: u8 {
        const LAYOUT_PLANES = 0b0001;
        const RELAYOUT = 0b0010;
        const UPDATE = 0b0100;
        const BOUNDARIES = 0b1000;
    }
}

bitflags! {
    /// Directions a layout item is willing to grow in.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct Orientations: u8 {
        const HORIZONTAL = 0b01;
        const VERTICAL = 0b10;
    }
}

/// Emits plane requests, or holds them while a batch is open.
#[derive(Debug, Default)]
struct PlaneNotifier {
    signals: PlaneSignals,
    depth: Cell<u32>,
    pending: Cell<Pending>,
    /// Set when a diagram's model changed; boundaries are stale until the
    /// next layout.
    needs_layout: Cell<bool>,
}

impl PlaneNotifier {
    fn request(&self, requests: Pending) {
        if self.depth.get() > 0 {
            self.pending.set(self.pending.get() | requests);
        } else {
            self.fire(requests);
        }
    }

    fn fire(&self, requests: Pending) {
        if requests.contains(Pending::LAYOUT_PLANES) {
            self.signals.need_layout_planes.notify();
        }
        if requests.contains(Pending::RELAYOUT) {
            self.signals.need_relayout.notify();
        }
        if requests.contains(Pending::UPDATE) {
            self.signals.need_update.notify();
        }
        if requests.contains(Pending::BOUNDARIES) {
            self.signals.boundaries_changed.notify();
        }
    }
}

/// Coalesces plane requests until dropped.
///
/// Guards nest; requests fire when the outermost one drops, each distinct
/// signal once. The guard does not borrow the plane, so the plane stays
/// usable while it is alive.
#[must_use = "requests are only coalesced while the guard is alive"]
pub struct BatchGuard {
    notifier: Rc<PlaneNotifier>,
}

impl BatchGuard {
    fn open(notifier: &Rc<PlaneNotifier>) -> Self {
        notifier.depth.set(notifier.depth.get() + 1);
        Self {
            notifier: notifier.clone(),
        }
    }
}

impl Drop for BatchGuard {
    fn drop(&mut self) {
        let depth = self.notifier.depth.get().saturating_sub(1);
        self.notifier.depth.set(depth);
        if depth == 0 {
            let pending = self.notifier.pending.replace(Pending::empty());
            if !pending.is_empty() {
                tracing::trace!(?pending, "flushing batched plane requests");
                self.notifier.fire(pending);
            }
        }
    }
}

/// Connections made when a diagram was added, undone when it is taken.
#[derive(Debug, Clone, Copy)]
struct Wiring {
    models_changed: Connection,
    model_data_changed: Connection,
    boundaries_changed: Connection,
}

/// Coordinate system and layout surface for a set of diagrams.
pub struct CoordinatePlane {
    id: PlaneId,
    geometry: Rect,
    zoom: ZoomState,
    rubber_band: RubberBandController,
    diagrams: Vec<Box<dyn Diagram>>,
    wiring: HashMap<DiagramId, Wiring>,
    regions: HashMap<DiagramId, Rect>,
    reference_plane: Option<PlaneId>,
    corner_spacers: bool,
    corner_spacer_width: f64,
    minimum_size: DVec2,
    grid: Box<dyn GridStrategy>,
    grid_attributes: GridAttributes,
    data_bounds: Cell<DataBounds>,
    transform: Cell<CoordinateTransform>,
    grid_stale: Cell<bool>,
    notifier: Rc<PlaneNotifier>,
    queue: EventQueue<GeometryChange>,
    areas: AreaRegistry,
    area: AreaId,
}

impl Default for CoordinatePlane {
    fn default() -> Self {
        Self::new()
    }
}

impl CoordinatePlane {
    /// A plane with default configuration and a cartesian grid.
    pub fn new() -> Self {
        Self::build(PlaneConfig::default())
    }

    /// A plane with `config`, after validating it.
    pub fn with_config(config: PlaneConfig) -> Result<Self> {
        config.validate()?;
        Ok(Self::build(config))
    }

    fn build(config: PlaneConfig) -> Self {
        let id = PlaneId::next();
        let mut areas = AreaRegistry::new();
        let area = areas.insert(id.to_string(), Rect::ZERO);
        tracing::debug!(plane = %id, "created coordinate plane");

        Self {
            id,
            geometry: Rect::ZERO,
            zoom: ZoomState::new(),
            rubber_band: RubberBandController::new(config.rubber_band_zooming),
            diagrams: Vec::new(),
            wiring: HashMap::default(),
            regions: HashMap::default(),
            reference_plane: None,
            corner_spacers: config.corner_spacers,
            corner_spacer_width: config.corner_spacer_width,
            minimum_size: config.minimum_size,
            grid: Box::new(CartesianGrid::new()),
            grid_attributes: config.grid,
            data_bounds: Cell::new(DataBounds::UNIT),
            transform: Cell::new(CoordinateTransform::default()),
            grid_stale: Cell::new(false),
            notifier: Rc::new(PlaneNotifier::default()),
            queue: EventQueue::new(),
            areas,
            area,
        }
    }

    pub fn id(&self) -> PlaneId {
        self.id
    }

    pub fn signals(&self) -> &PlaneSignals {
        &self.notifier.signals
    }

    /// Coalesce requests until the returned guard drops.
    pub fn batch(&self) -> BatchGuard {
        BatchGuard::open(&self.notifier)
    }

    /// Areas measures painted on this plane may refer to.
    pub fn areas(&self) -> &AreaRegistry {
        &self.areas
    }

    pub fn areas_mut(&mut self) -> &mut AreaRegistry {
        &mut self.areas
    }

    /// The area tracking this plane's own geometry.
    pub fn area_id(&self) -> AreaId {
        self.area
    }

    // Diagram registry

    /// Attach `diagram`, taking ownership.
    pub fn add_diagram(&mut self, mut diagram: Box<dyn Diagram>) {
        profile_function!();
        let id = diagram.id();

        // The plane paints its diagrams itself.
        diagram.set_visible(false);
        diagram.set_coordinate_plane(Some(self.id));

        let wiring = self.wire(diagram.as_ref());
        self.wiring.insert(id, wiring);
        tracing::debug!(plane = %self.id, diagram = %id, name = diagram.debug_name(), "diagram added");
        self.diagrams.push(diagram);

        self.layout_diagrams();
        self.layout_planes();
        self.update();
        self.notifier.request(Pending::BOUNDARIES);
    }

    fn wire(&self, diagram: &dyn Diagram) -> Wiring {
        let signals = diagram.signals();

        let notifier: Weak<PlaneNotifier> = Rc::downgrade(&self.notifier);
        let models_changed = signals.models_changed.connect(move |_| {
            if let Some(notifier) = notifier.upgrade() {
                notifier.needs_layout.set(true);
                notifier.request(Pending::LAYOUT_PLANES);
            }
        });

        let notifier: Weak<PlaneNotifier> = Rc::downgrade(&self.notifier);
        let model_data_changed = signals.model_data_changed.connect(move |_| {
            if let Some(notifier) = notifier.upgrade() {
                notifier.needs_layout.set(true);
                notifier.request(Pending::UPDATE | Pending::RELAYOUT);
            }
        });

        let forward = signals.boundaries_changed.downgrade();
        let boundaries_changed = self
            .notifier
            .signals
            .boundaries_changed
            .connect(move |_| {
                forward.emit(&());
            });

        Wiring {
            models_changed,
            model_data_changed,
            boundaries_changed,
        }
    }

    fn unwire(&self, diagram: &dyn Diagram, wiring: Wiring) {
        let signals = diagram.signals();
        signals.models_changed.disconnect(wiring.models_changed);
        signals.model_data_changed.disconnect(wiring.model_data_changed);
        self.notifier
            .signals
            .boundaries_changed
            .disconnect(wiring.boundaries_changed);
    }

    /// Swap `old` (the first diagram when `None`) for `new`.
    ///
    /// Hands `new` back untouched when `old` names a diagram that is not
    /// attached, or when `new` is the diagram being replaced. With no
    /// diagrams attached and no `old` given, `new` is simply added.
    pub fn replace_diagram(
        &mut self,
        new: Box<dyn Diagram>,
        old: Option<DiagramId>,
    ) -> Option<Box<dyn Diagram>> {
        let _batch = self.batch();

        let resolved = match old {
            Some(id) if self.position(id).is_none() => {
                tracing::debug!(plane = %self.id, diagram = %id, "replace target not attached");
                return Some(new);
            }
            Some(id) => id,
            None => match self.diagrams.first() {
                Some(first) => first.id(),
                None => {
                    self.add_diagram(new);
                    return None;
                }
            },
        };

        if new.id() == resolved {
            return Some(new);
        }

        drop(self.take_diagram(resolved));
        self.add_diagram(new);
        self.layout_diagrams();
        self.layout_planes();
        self.update();
        None
    }

    /// Detach a diagram without dropping it.
    pub fn take_diagram(&mut self, id: DiagramId) -> Option<Box<dyn Diagram>> {
        let index = self.position(id)?;
        let mut diagram = self.diagrams.remove(index);

        if let Some(wiring) = self.wiring.remove(&id) {
            self.unwire(diagram.as_ref(), wiring);
        }
        self.regions.remove(&id);
        diagram.set_coordinate_plane(None);
        tracing::debug!(plane = %self.id, diagram = %id, "diagram taken");

        self.layout_diagrams();
        self.update();
        Some(diagram)
    }

    fn position(&self, id: DiagramId) -> Option<usize> {
        self.diagrams.iter().position(|d| d.id() == id)
    }

    /// The first diagram.
    pub fn diagram(&self) -> Option<&dyn Diagram> {
        self.diagrams.first().map(|d| d.as_ref())
    }

    /// Attached diagrams in paint order.
    pub fn diagrams(&self) -> &[Box<dyn Diagram>] {
        &self.diagrams
    }

    pub fn diagram_by_id(&self, id: DiagramId) -> Option<&dyn Diagram> {
        self.diagrams
            .iter()
            .find(|d| d.id() == id)
            .map(|d| d.as_ref())
    }

    pub fn diagram_mut(&mut self, id: DiagramId) -> Option<&mut (dyn Diagram + 'static)> {
        self.diagrams
            .iter_mut()
            .find(|d| d.id() == id)
            .map(|d| d.as_mut())
    }

    pub fn diagram_count(&self) -> usize {
        self.diagrams.len()
    }

    /// Region a diagram was last laid out into.
    pub fn diagram_region(&self, id: DiagramId) -> Option<Rect> {
        self.regions.get(&id).copied()
    }

    // Geometry and layout

    pub fn geometry(&self) -> Rect {
        self.geometry
    }

    /// Move or resize the plane.
    ///
    /// Observers learn about the change from the next
    /// [`dispatch_queued`](Self::dispatch_queued); no update is requested.
    pub fn set_geometry(&mut self, geometry: Rect) {
        if geometry == self.geometry {
            return;
        }
        let old = std::mem::replace(&mut self.geometry, geometry);
        if let Err(err) = self.areas.set_geometry(self.area, geometry) {
            tracing::warn!(plane = %self.id, %err, "plane area was removed");
        }
        self.queue.push(GeometryChange { old, new: geometry });
        self.layout_diagrams();
    }

    /// Deliver queued notifications. Returns how many were delivered.
    pub fn dispatch_queued(&mut self) -> usize {
        let events = self.queue.drain();
        let count = events.len();
        for change in events {
            self.notifier.signals.geometry_changed.emit(&change);
        }
        count
    }

    /// Notifications waiting for [`dispatch_queued`](Self::dispatch_queued).
    pub fn queued_len(&self) -> usize {
        self.queue.len()
    }

    /// Region diagrams are drawn into.
    pub fn draw_region(&self) -> Rect {
        if self.corner_spacers {
            self.geometry.inset(self.corner_spacer_width)
        } else {
            self.geometry
        }
    }

    /// Recompute diagram regions, data boundaries and the transform.
    pub fn layout_diagrams(&mut self) {
        profile_function!();
        let region = self.draw_region();

        self.regions.clear();
        for diagram in &self.diagrams {
            self.regions.insert(diagram.id(), region);
        }

        self.notifier.needs_layout.set(false);
        self.refresh_boundaries();
        tracing::trace!(plane = %self.id, ?region, bounds = ?self.data_bounds.get(), "diagrams laid out");
    }

    /// Re-read diagram boundaries if a model changed since the last layout.
    fn ensure_layout(&self) {
        if self.notifier.needs_layout.replace(false) {
            self.refresh_boundaries();
            tracing::trace!(plane = %self.id, bounds = ?self.data_bounds.get(), "boundaries refreshed after model change");
        }
    }

    fn refresh_boundaries(&self) {
        let bounds = self
            .diagrams
            .iter()
            .filter_map(|d| d.data_boundaries())
            .reduce(|a, b| a.union(&b))
            .unwrap_or_default();
        self.data_bounds.set(bounds);
        self.refresh_transform();
    }

    fn refresh_transform(&self) {
        self.transform.set(CoordinateTransform::new(
            self.data_bounds.get(),
            self.draw_region(),
            self.zoom.current(),
        ));
        self.grid_stale.set(true);
    }

    /// Ask the host to lay out every plane sharing this one's axes.
    pub fn layout_planes(&self) {
        self.notifier.request(Pending::LAYOUT_PLANES);
    }

    /// Ask the host to repaint.
    pub fn update(&self) {
        self.notifier.request(Pending::UPDATE);
    }

    /// Ask the host to redo this plane's layout.
    pub fn relayout(&self) {
        self.notifier.request(Pending::RELAYOUT);
    }

    /// Combined data boundaries of all diagrams.
    pub fn data_boundaries(&self) -> DataBounds {
        self.ensure_layout();
        self.data_bounds.get()
    }

    /// Current data-to-pixel mapping.
    pub fn transform(&self) -> CoordinateTransform {
        self.ensure_layout();
        self.transform.get()
    }

    /// Whether `pixel` lies inside the diagram region.
    pub fn is_visible_point(&self, pixel: DVec2) -> bool {
        self.transform().is_visible(pixel)
    }

    pub fn is_corner_spacers_enabled(&self) -> bool {
        self.corner_spacers
    }

    pub fn set_corner_spacers_enabled(&mut self, enabled: bool) {
        if self.corner_spacers == enabled {
            return;
        }
        self.corner_spacers = enabled;
        self.layout_diagrams();
        self.relayout();
    }

    pub fn reference_plane(&self) -> Option<PlaneId> {
        self.reference_plane
    }

    /// Share axes with `plane`. Only the id is kept.
    pub fn set_reference_plane(&mut self, plane: Option<PlaneId>) {
        if self.reference_plane == plane {
            return;
        }
        self.reference_plane = plane;
        self.layout_planes();
    }

    // Layout item

    pub fn minimum_size(&self) -> DVec2 {
        self.minimum_size
    }

    pub fn set_minimum_size(&mut self, size: DVec2) {
        if self.minimum_size != size {
            self.minimum_size = size;
            self.relayout();
        }
    }

    /// Planes take whatever space they are given.
    pub fn maximum_size(&self) -> DVec2 {
        DVec2::splat(f64::INFINITY)
    }

    pub fn size_hint(&self) -> DVec2 {
        self.maximum_size()
    }

    /// Planes always occupy space, even with no diagrams.
    pub fn is_empty(&self) -> bool {
        false
    }

    pub fn expanding_directions(&self) -> Orientations {
        Orientations::HORIZONTAL | Orientations::VERTICAL
    }

    // Zoom

    pub fn zoom_parameters(&self) -> ZoomParameters {
        self.zoom.current()
    }

    pub fn zoom_factor_x(&self) -> f64 {
        self.zoom.factor_x()
    }

    pub fn zoom_factor_y(&self) -> f64 {
        self.zoom.factor_y()
    }

    pub fn zoom_center(&self) -> DVec2 {
        self.zoom.center()
    }

    pub fn zoom_history_len(&self) -> usize {
        self.zoom.history_len()
    }

    /// Apply `params`, requesting an update if anything changed.
    ///
    /// Zero, negative or non-finite factors are ignored.
    pub fn set_zoom_parameters(&mut self, params: ZoomParameters) {
        if !is_positive_finite(params.factor_x) || !is_positive_finite(params.factor_y) {
            tracing::debug!(?params, "ignoring invalid zoom factors");
            return;
        }
        if self.zoom.apply(params) {
            self.zoom_changed();
        }
    }

    pub fn set_zoom_factor_x(&mut self, factor: f64) {
        let mut params = self.zoom.current();
        params.factor_x = factor;
        self.set_zoom_parameters(params);
    }

    pub fn set_zoom_factor_y(&mut self, factor: f64) {
        let mut params = self.zoom.current();
        params.factor_y = factor;
        self.set_zoom_parameters(params);
    }

    pub fn set_zoom_factors(&mut self, factor_x: f64, factor_y: f64) {
        let mut params = self.zoom.current();
        params.factor_x = factor_x;
        params.factor_y = factor_y;
        self.set_zoom_parameters(params);
    }

    pub fn set_zoom_center(&mut self, center: DVec2) {
        let mut params = self.zoom.current();
        params.center = center;
        self.set_zoom_parameters(params);
    }

    /// Save the current zoom so [`restore_zoom`](Self::restore_zoom) can
    /// return to it.
    pub fn push_zoom(&mut self) {
        self.zoom.push_current();
    }

    /// Step back one zoom level. Returns `false` when there is no history.
    pub fn restore_zoom(&mut self) -> bool {
        match self.zoom.restore() {
            Some(_) => {
                self.zoom_changed();
                true
            }
            None => false,
        }
    }

    /// Back to no zoom with an empty history.
    pub fn reset_zoom(&mut self) {
        let was_identity = self.zoom.current() == ZoomParameters::IDENTITY;
        self.zoom.reset();
        if !was_identity {
            self.zoom_changed();
        }
    }

    fn zoom_changed(&mut self) {
        self.refresh_transform();
        self.update();
    }

    // Interaction

    pub fn is_rubber_band_zooming_enabled(&self) -> bool {
        self.rubber_band.is_enabled()
    }

    /// Disabling drops any selection in progress.
    pub fn set_rubber_band_zooming_enabled(&mut self, enabled: bool) {
        let was_selecting = self.rubber_band.is_selecting();
        self.rubber_band.set_enabled(enabled);
        if was_selecting && !self.rubber_band.is_selecting() {
            self.update();
        }
    }

    /// Current rubber-band selection in host pixels.
    pub fn rubber_band_selection(&self) -> Option<Rect> {
        self.rubber_band.selection()
    }

    /// Handle a pointer event from the host.
    ///
    /// The rubber band sees the event first; every diagram then receives it
    /// regardless of whether it was consumed.
    pub fn handle_pointer_event(&mut self, event: &PointerEvent) -> HandleStatus {
        let before = self.zoom.current();
        let mut status = self
            .rubber_band
            .handle_event(event, self.geometry, &mut self.zoom);

        if status.is_consumed() {
            if self.zoom.current() != before {
                self.zoom_changed();
            } else {
                self.update();
            }
        }

        let transform = self.transform();
        for diagram in &mut self.diagrams {
            status |= diagram.handle_pointer(event, &transform);
        }
        status
    }

    // Grid

    /// Per-axis grid dimensions, X then Y.
    pub fn grid_dimensions_list(&mut self) -> DataDimensionsList {
        let transform = self.transform();
        if self.grid_stale.replace(false) {
            self.grid.set_need_recalculate();
        }
        let view = PlaneView {
            transform: &transform,
            attributes: &self.grid_attributes,
        };
        self.grid.update_data(&view)
    }

    pub fn set_grid_needs_recalculate(&mut self) {
        self.grid.set_need_recalculate();
    }

    pub fn global_grid_attributes(&self) -> &GridAttributes {
        &self.grid_attributes
    }

    pub fn set_global_grid_attributes(&mut self, attributes: GridAttributes) {
        self.grid_attributes = attributes;
        self.grid.set_need_recalculate();
        self.update();
    }

    /// Replace the grid strategy.
    pub fn set_grid_strategy(&mut self, mut strategy: Box<dyn GridStrategy>) {
        strategy.set_need_recalculate();
        self.grid = strategy;
        self.update();
    }

    // Painting

    /// Paint grid, diagrams and the rubber-band overlay onto `surface`.
    ///
    /// Each diagram paints inside its own saved and translated surface state,
    /// with a transform into its region's local frame.
    pub fn paint(&mut self, surface: &mut dyn PaintSurface, scaling: &MeasureScaling) {
        profile_function!();
        if self.geometry.is_empty() {
            tracing::trace!(plane = %self.id, "skipping paint of empty plane");
            return;
        }

        let dimensions = self.grid_dimensions_list();
        let transform = self.transform();
        grid::paint_grid(surface, &transform, &dimensions, &self.grid_attributes);

        for diagram in &mut self.diagrams {
            let Some(region) = self.regions.get(&diagram.id()).copied() else {
                continue;
            };
            if region.is_empty() {
                continue;
            }
            let local = transform.with_region(Rect::from_pos_size(DVec2::ZERO, region.size()));

            let mut state = SurfaceState::new(surface);
            state.surface().translate(region.position());
            let mut ctx = PaintContext {
                surface: state.surface(),
                transform: &local,
                scaling,
                areas: &self.areas,
            };
            diagram.paint(&mut ctx);
        }

        if let Some(selection) = self.rubber_band.selection() {
            surface.fill_rect(selection, &Brush::Solid(RUBBER_BAND_FILL));
            surface.stroke_rect(selection, Pen::new(RUBBER_BAND_EDGE, 1.0));
        }
    }
}

impl Drop for CoordinatePlane {
    fn drop(&mut self) {
        tracing::debug!(plane = %self.id, diagrams = self.diagrams.len(), "coordinate plane dropped");
        self.notifier.signals.destroyed.emit(&self.id);
    }
}

impl fmt::Debug for CoordinatePlane {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CoordinatePlane")
            .field("id", &self.id)
            .field("geometry", &self.geometry)
            .field("zoom", &self.zoom.current())
            .field("zoom_history", &self.zoom.history_len())
            .field("diagrams", &self.diagrams.len())
            .field("reference_plane", &self.reference_plane)
            .finish()
    }
}
