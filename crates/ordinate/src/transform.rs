//! Data-to-pixel mapping under zoom.

use crate::diagram::DataBounds;
use crate::zoom::ZoomParameters;
use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;

/// Maps data coordinates onto a plane region and back.
///
/// Data is normalized to `[0, 1]` on each axis, with Y measured from the top
/// so larger values sit higher. The zoom then scales normalized space around
/// its center, which lands in the middle of the region:
///
/// `pixel = region.pos + ((n - center) * factor + 0.5) * region.size`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CoordinateTransform {
    bounds: DataBounds,
    region: Rect,
    zoom: ZoomParameters,
}

impl Default for CoordinateTransform {
    fn default() -> Self {
        Self::new(DataBounds::UNIT, Rect::ZERO, ZoomParameters::IDENTITY)
    }
}

impl CoordinateTransform {
    /// `bounds` with a zero-width axis is widened to unit width around its
    /// value.
    pub fn new(bounds: DataBounds, region: Rect, zoom: ZoomParameters) -> Self {
        Self {
            bounds: bounds.widened(),
            region,
            zoom,
        }
    }

    /// Same mapping onto a different region.
    pub fn with_region(&self, region: Rect) -> Self {
        Self { region, ..*self }
    }

    pub fn bounds(&self) -> DataBounds {
        self.bounds
    }

    pub fn region(&self) -> Rect {
        self.region
    }

    pub fn zoom(&self) -> ZoomParameters {
        self.zoom
    }

    fn normalize(&self, data: DVec2) -> DVec2 {
        DVec2::new(
            (data.x - self.bounds.min.x) / self.bounds.width(),
            (self.bounds.max.y - data.y) / self.bounds.height(),
        )
    }

    fn denormalize(&self, n: DVec2) -> DVec2 {
        DVec2::new(
            self.bounds.min.x + n.x * self.bounds.width(),
            self.bounds.max.y - n.y * self.bounds.height(),
        )
    }

    pub fn to_pixel(&self, data: DVec2) -> DVec2 {
        let n = self.normalize(data);
        let factors = self.zoom.factors();
        self.region.position() + ((n - self.zoom.center) * factors + 0.5) * self.region.size()
    }

    /// Inverse of [`to_pixel`](Self::to_pixel). On an axis where the region
    /// has no extent every pixel maps to the zoom center.
    pub fn to_data(&self, pixel: DVec2) -> DVec2 {
        let size = self.region.size();
        let local = pixel - self.region.position();
        let factors = self.zoom.factors();
        let axis = |local: f64, size: f64, factor: f64, center: f64| {
            if size > 0.0 {
                (local / size - 0.5) / factor + center
            } else {
                center
            }
        };
        let n = DVec2::new(
            axis(local.x, size.x, factors.x, self.zoom.center.x),
            axis(local.y, size.y, factors.y, self.zoom.center.y),
        );
        self.denormalize(n)
    }

    /// Data rectangle currently visible in the region.
    pub fn visible_data_range(&self) -> DataBounds {
        let top_left = self.to_data(self.region.position());
        let bottom_right = self.to_data(self.region.position() + self.region.size());
        DataBounds::new(top_left, bottom_right)
    }

    /// Whether `pixel` falls inside the region.
    pub fn is_visible(&self, pixel: DVec2) -> bool {
        self.region.contains(pixel)
    }
}
