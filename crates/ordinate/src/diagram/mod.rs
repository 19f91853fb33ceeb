//! Diagrams: chart types that turn model data into shapes on a plane.
//!
//! A plane owns its diagrams as `Box<dyn Diagram>`. Each diagram embeds a
//! [`DiagramBase`] carrying the state the plane manipulates (identity, plane
//! back-reference, visibility, notification signals and the attached model);
//! concrete types only supply boundaries, painting and pointer handling.

mod bar;
mod line;

pub use bar::BarDiagram;
pub use line::LineDiagram;

use crate::area::AreaLookup;
use crate::event::{HandleStatus, PointerEvent};
use crate::model::DataModel;
use crate::paint::{Color, PaintSurface};
use crate::plane::PlaneId;
use crate::scaling::MeasureScaling;
use crate::signal::{Connection, Signal};
use crate::transform::CoordinateTransform;
use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;
use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_DIAGRAM: AtomicU64 = AtomicU64::new(1);

/// A model shared between the host, which edits it, and diagrams, which
/// read it.
///
/// Change notifications are emitted while the host holds the mutable borrow,
/// so subscribers must not borrow the model themselves.
pub type SharedModel = Rc<RefCell<dyn DataModel>>;

/// Unique diagram identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DiagramId(u64);

impl DiagramId {
    fn next() -> Self {
        Self(NEXT_DIAGRAM.fetch_add(1, Ordering::Relaxed))
    }

    pub fn raw(&self) -> u64 {
        self.0
    }
}

impl fmt::Display for DiagramId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "diagram#{}", self.0)
    }
}

/// Notifications a diagram emits, and the plane forwards.
#[derive(Debug, Clone, Default)]
pub struct DiagramSignals {
    /// The attached model was replaced.
    pub models_changed: Signal<()>,
    /// The attached model's data changed.
    pub model_data_changed: Signal<()>,
    /// The plane's data boundaries changed.
    pub boundaries_changed: Signal<()>,
}

/// Axis-aligned data-space rectangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DataBounds {
    pub min: DVec2,
    pub max: DVec2,
}

impl Default for DataBounds {
    fn default() -> Self {
        Self::UNIT
    }
}

impl DataBounds {
    /// `[0, 1] x [0, 1]`, used when no diagram reports boundaries.
    pub const UNIT: DataBounds = DataBounds {
        min: DVec2::ZERO,
        max: DVec2::ONE,
    };

    /// Bounds spanning both points, in any order.
    pub fn new(a: DVec2, b: DVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn size(&self) -> DVec2 {
        self.max - self.min
    }

    pub fn union(&self, other: &DataBounds) -> DataBounds {
        DataBounds {
            min: self.min.min(other.min),
            max: self.max.max(other.max),
        }
    }

    /// Grow to include `point`.
    pub fn include(&mut self, point: DVec2) {
        self.min = self.min.min(point);
        self.max = self.max.max(point);
    }

    pub fn contains(&self, point: DVec2) -> bool {
        point.cmpge(self.min).all() && point.cmple(self.max).all()
    }

    /// Zero-extent axes widened to unit width around their value.
    pub fn widened(&self) -> DataBounds {
        let mut out = *self;
        if out.width() <= 0.0 {
            out.min.x -= 0.5;
            out.max.x += 0.5;
        }
        if out.height() <= 0.0 {
            out.min.y -= 0.5;
            out.max.y += 0.5;
        }
        out
    }

    /// Bounds over a set of points; `None` when there are none.
    pub fn from_points(points: impl IntoIterator<Item = DVec2>) -> Option<DataBounds> {
        let mut iter = points.into_iter().filter(|p| p.is_finite());
        let first = iter.next()?;
        let mut bounds = DataBounds::new(first, first);
        for p in iter {
            bounds.include(p);
        }
        Some(bounds)
    }
}

/// Everything a diagram needs to paint itself.
///
/// The surface is translated so the diagram's region starts at the origin,
/// and `transform` maps data into that local frame.
pub struct PaintContext<'a> {
    pub surface: &'a mut dyn PaintSurface,
    pub transform: &'a CoordinateTransform,
    pub scaling: &'a MeasureScaling,
    pub areas: &'a dyn AreaLookup,
}

impl PaintContext<'_> {
    /// The diagram's region in local coordinates.
    pub fn region(&self) -> Rect {
        self.transform.region()
    }
}

/// State shared by every diagram type.
pub struct DiagramBase {
    id: DiagramId,
    name: String,
    plane: Option<PlaneId>,
    visible: bool,
    signals: DiagramSignals,
    model: Option<SharedModel>,
    model_connection: Option<Connection>,
}

impl DiagramBase {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: DiagramId::next(),
            name: name.into(),
            plane: None,
            visible: true,
            signals: DiagramSignals::default(),
            model: None,
            model_connection: None,
        }
    }

    pub fn id(&self) -> DiagramId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn plane(&self) -> Option<PlaneId> {
        self.plane
    }

    pub fn set_plane(&mut self, plane: Option<PlaneId>) {
        self.plane = plane;
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }

    pub fn signals(&self) -> &DiagramSignals {
        &self.signals
    }

    pub fn model(&self) -> Option<&SharedModel> {
        self.model.as_ref()
    }

    /// Attach `model`, replacing any previous one.
    ///
    /// Data changes in the model are re-emitted as `model_data_changed`;
    /// `models_changed` fires once for the replacement itself.
    pub fn set_model(&mut self, model: Option<SharedModel>) {
        self.detach_model();
        if let Some(model) = &model {
            let data_changed = self.signals.model_data_changed.downgrade();
            let connection = model.borrow().changed().connect(move |_| {
                data_changed.emit(&());
            });
            self.model_connection = Some(connection);
        }
        self.model = model;
        self.signals.models_changed.notify();
    }

    fn detach_model(&mut self) {
        if let (Some(model), Some(connection)) = (self.model.take(), self.model_connection.take())
        {
            model.borrow().changed().disconnect(connection);
        }
    }

    /// Read the model, if one is attached.
    pub fn with_model<R>(&self, f: impl FnOnce(&dyn DataModel) -> R) -> Option<R> {
        self.model.as_ref().map(|model| f(&*model.borrow()))
    }
}

impl Drop for DiagramBase {
    fn drop(&mut self) {
        self.detach_model();
    }
}

impl fmt::Debug for DiagramBase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DiagramBase")
            .field("id", &self.id)
            .field("name", &self.name)
            .field("plane", &self.plane)
            .field("visible", &self.visible)
            .field("has_model", &self.model.is_some())
            .finish()
    }
}

/// A chart type attached to a coordinate plane.
pub trait Diagram {
    fn base(&self) -> &DiagramBase;
    fn base_mut(&mut self) -> &mut DiagramBase;

    /// Data-space extent of everything this diagram draws, or `None` when it
    /// has nothing to draw.
    fn data_boundaries(&self) -> Option<DataBounds>;

    fn paint(&mut self, ctx: &mut PaintContext<'_>);

    /// Called for every pointer event the plane receives, whether or not the
    /// plane consumed it. `transform` maps data to host pixels.
    fn handle_pointer(
        &mut self,
        _event: &PointerEvent,
        _transform: &CoordinateTransform,
    ) -> HandleStatus {
        HandleStatus::ignored()
    }

    fn id(&self) -> DiagramId {
        self.base().id()
    }

    fn debug_name(&self) -> &str {
        self.base().name()
    }

    fn signals(&self) -> &DiagramSignals {
        self.base().signals()
    }

    /// Plane this diagram is attached to.
    fn coordinate_plane(&self) -> Option<PlaneId> {
        self.base().plane()
    }

    fn set_coordinate_plane(&mut self, plane: Option<PlaneId>) {
        self.base_mut().set_plane(plane);
    }

    fn is_visible(&self) -> bool {
        self.base().is_visible()
    }

    fn set_visible(&mut self, visible: bool) {
        self.base_mut().set_visible(visible);
    }
}

impl fmt::Debug for dyn Diagram {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Diagram")
            .field("id", &self.id())
            .field("name", &self.debug_name())
            .finish()
    }
}

/// Series colors, cycled by column.
pub(crate) const PALETTE: [Color; 6] = [
    Color::rgb(0.12, 0.47, 0.71),
    Color::rgb(1.0, 0.50, 0.05),
    Color::rgb(0.17, 0.63, 0.17),
    Color::rgb(0.84, 0.15, 0.16),
    Color::rgb(0.58, 0.40, 0.74),
    Color::rgb(0.55, 0.34, 0.29),
];

pub(crate) fn series_color(column: usize) -> Color {
    PALETTE[column % PALETTE.len()]
}
