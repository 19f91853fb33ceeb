//! Painting abstraction.
//!
//! The engine never rasterizes anything itself. Diagrams and the plane issue
//! commands against a [`PaintSurface`] provided by the host; the host maps
//! them onto its 2D backend.

use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;

/// RGBA color with linear components in `0.0..=1.0`.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::rgb(0.5, 0.5, 0.5);
    pub const LIGHT_GRAY: Color = Color::rgb(0.83, 0.83, 0.83);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);
    pub const TRANSPARENT: Color = Color::rgba(0.0, 0.0, 0.0, 0.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// From `0xRRGGBB`.
    pub fn from_hex(hex: u32) -> Self {
        let r = ((hex >> 16) & 0xFF) as f32 / 255.0;
        let g = ((hex >> 8) & 0xFF) as f32 / 255.0;
        let b = (hex & 0xFF) as f32 / 255.0;
        Self::rgb(r, g, b)
    }

    /// Same color with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Linear interpolation, `t` clamped to `0.0..=1.0`.
    pub fn lerp(self, other: Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        Color {
            r: self.r + (other.r - self.r) * t,
            g: self.g + (other.g - self.g) * t,
            b: self.b + (other.b - self.b) * t,
            a: self.a + (other.a - self.a) * t,
        }
    }
}

/// A color stop in a gradient.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GradientStop {
    /// Position along the gradient, `0.0..=1.0`.
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// How a filled shape is colored.
#[derive(Debug, Clone, PartialEq)]
pub enum Brush {
    Solid(Color),
    LinearGradient {
        start: DVec2,
        end: DVec2,
        stops: Vec<GradientStop>,
    },
}

impl Brush {
    pub fn solid(color: Color) -> Self {
        Self::Solid(color)
    }

    /// Gradient running from the top to the bottom of `rect`.
    pub fn vertical_gradient(rect: Rect, top: Color, bottom: Color) -> Self {
        Self::LinearGradient {
            start: DVec2::new(rect.x, rect.y),
            end: DVec2::new(rect.x, rect.bottom()),
            stops: vec![GradientStop::new(0.0, top), GradientStop::new(1.0, bottom)],
        }
    }

    /// Color at `position`.
    pub fn sample(&self, position: DVec2) -> Color {
        match self {
            Brush::Solid(color) => *color,
            Brush::LinearGradient { start, end, stops } => {
                let Some(first) = stops.first() else {
                    return Color::TRANSPARENT;
                };
                let dir = *end - *start;
                let len_sq = dir.length_squared();
                if len_sq < f64::EPSILON {
                    return first.color;
                }
                let t = ((position - *start).dot(dir) / len_sq).clamp(0.0, 1.0) as f32;
                interpolate(stops, t)
            }
        }
    }
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Self::Solid(color)
    }
}

fn interpolate(stops: &[GradientStop], t: f32) -> Color {
    let mut prev = match stops.first() {
        Some(stop) => stop,
        None => return Color::TRANSPARENT,
    };
    if t <= prev.offset {
        return prev.color;
    }
    for stop in &stops[1..] {
        if t <= stop.offset {
            let range = stop.offset - prev.offset;
            if range < f32::EPSILON {
                return stop.color;
            }
            return prev.color.lerp(stop.color, (t - prev.offset) / range);
        }
        prev = stop;
    }
    prev.color
}

/// Stroke color and width.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Pen {
    pub color: Color,
    pub width: f64,
}

impl Pen {
    pub fn new(color: Color, width: f64) -> Self {
        Self { color, width }
    }
}

/// Host-provided 2D drawing target.
///
/// Coordinates are pixels in the surface's current translated frame.
pub trait PaintSurface {
    /// Push the current translation.
    fn save(&mut self);
    /// Pop the translation pushed by the matching [`save`](Self::save).
    fn restore(&mut self);
    fn translate(&mut self, offset: DVec2);

    fn fill_rect(&mut self, rect: Rect, brush: &Brush);
    fn stroke_rect(&mut self, rect: Rect, pen: Pen);
    fn draw_line(&mut self, from: DVec2, to: DVec2, pen: Pen);
    fn draw_text(&mut self, position: DVec2, text: &str, color: Color, size: f64);

    /// Size `text` would occupy at font `size`.
    fn text_size(&self, text: &str, size: f64) -> DVec2;

    /// Polyline through `points`.
    fn draw_polyline(&mut self, points: &[DVec2], pen: Pen) {
        for pair in points.windows(2) {
            self.draw_line(pair[0], pair[1], pen);
        }
    }
}

/// Saves the surface on creation and restores it on drop.
pub struct SurfaceState<'a> {
    surface: &'a mut dyn PaintSurface,
}

impl<'a> SurfaceState<'a> {
    pub fn new(surface: &'a mut dyn PaintSurface) -> Self {
        surface.save();
        Self { surface }
    }

    pub fn surface(&mut self) -> &mut dyn PaintSurface {
        &mut *self.surface
    }
}

impl Drop for SurfaceState<'_> {
    fn drop(&mut self) {
        self.surface.restore();
    }
}
