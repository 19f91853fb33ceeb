//! Ordinate - coordinate planes, measures and zoom for charts
//!
//! Ordinate is the layout core of a charting library. It provides:
//!
//! - **Coordinate planes**: own diagrams, map data ranges onto pixel
//!   geometry, and recompute axis grids when data or geometry change
//! - **Measures**: abstract lengths resolved against layout areas and a
//!   measure-scaling stack at paint time
//! - **Zoom**: independent X/Y factors, rubber-band selection and a
//!   step-back zoom history
//! - **Signals**: single-threaded notifications with batching
//!
//! # Quick Start
//!
//! ```
//! use ordinate::prelude::*;
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! let model = Rc::new(RefCell::new(TableModel::from_columns(&[vec![1.0, 4.0, 2.0]])));
//! let mut plane = CoordinatePlane::with_config(
//!     PlaneConfig::default().with_rubber_band_zooming(true),
//! )
//! .unwrap();
//! plane.set_geometry(Rect::new(0.0, 0.0, 400.0, 300.0));
//! plane.add_diagram(Box::new(LineDiagram::new().with_model(model)));
//!
//! // Drag out the middle of the plane.
//! plane.handle_pointer_event(&PointerEvent::press(PointerButton::Primary, dvec2(100.0, 75.0)));
//! plane.handle_pointer_event(&PointerEvent::moved(dvec2(300.0, 225.0)));
//! plane.handle_pointer_event(&PointerEvent::release(PointerButton::Primary, dvec2(300.0, 225.0)));
//! assert_eq!(plane.zoom_factor_x(), 2.0);
//!
//! // Secondary click steps back.
//! plane.handle_pointer_event(&PointerEvent::press(PointerButton::Secondary, dvec2(0.0, 0.0)));
//! assert_eq!(plane.zoom_factor_x(), 1.0);
//! ```

pub mod area;
pub mod config;
pub mod diagram;
pub mod error;
pub mod event;
pub mod grid;
pub mod measure;
pub mod model;
pub mod paint;
pub mod plane;
pub mod rubber_band;
pub mod scaling;
pub mod signal;
pub mod transform;
pub mod zoom;

pub use error::{OrdinateError, Result};

/// Commonly used types.
pub mod prelude {
    pub use crate::area::{AreaId, AreaLookup, AreaRegistry};
    pub use crate::config::PlaneConfig;
    pub use crate::diagram::{
        BarDiagram, DataBounds, Diagram, DiagramBase, DiagramId, LineDiagram, PaintContext,
        SharedModel,
    };
    pub use crate::error::{OrdinateError, Result};
    pub use crate::event::{HandleStatus, PointerButton, PointerEvent, PointerEventKind};
    pub use crate::grid::{CartesianGrid, DataDimension, GridAttributes, GridStrategy};
    pub use crate::measure::{AutoReference, CalculationMode, Measure, MeasureOrientation};
    pub use crate::model::{DataModel, ModelChange, TableModel};
    pub use crate::paint::{Brush, Color, PaintSurface, Pen};
    pub use crate::plane::{CoordinatePlane, PlaneId, PlaneSignals};
    pub use crate::scaling::MeasureScaling;
    pub use crate::signal::{Connection, Signal};
    pub use crate::transform::CoordinateTransform;
    pub use crate::zoom::ZoomParameters;

    pub use ordinate_core::geometry::Rect;
    pub use ordinate_core::math::{DVec2, dvec2};
}
