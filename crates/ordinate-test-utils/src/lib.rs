//! Test utilities for Ordinate.
//!
//! This crate provides stand-ins for the pieces a host normally supplies, so
//! planes and diagrams can be exercised without a real drawing backend.
//!
//! # Overview
//!
//! - [`RecordingSurface`] - a [`PaintSurface`](ordinate::paint::PaintSurface)
//!   that records every command in device coordinates
//! - [`MockDiagram`] - a diagram with fixed boundaries that records the
//!   pointer events and paints it receives
//! - [`SignalProbe`] - counts and keeps the values a signal emits
//!
//! # Example
//!
//! ```rust
//! use ordinate::prelude::*;
//! use ordinate_test_utils::{MockDiagram, RecordingSurface, SignalProbe};
//!
//! let mut plane = CoordinatePlane::new();
//! let updates = SignalProbe::attach(&plane.signals().need_update);
//!
//! let diagram = MockDiagram::new(DataBounds::new(dvec2(0.0, 0.0), dvec2(10.0, 10.0)));
//! let log = diagram.log();
//! plane.set_geometry(Rect::new(0.0, 0.0, 100.0, 100.0));
//! plane.add_diagram(Box::new(diagram));
//! assert_eq!(updates.count(), 1);
//!
//! let mut surface = RecordingSurface::new();
//! plane.paint(&mut surface, &MeasureScaling::new());
//! assert_eq!(log.paint_count(), 1);
//! assert_eq!(surface.depth(), 0);
//! ```

pub mod mock_diagram;
pub mod probe;
pub mod recording_surface;

pub use mock_diagram::*;
pub use probe::*;
pub use recording_surface::*;
