//! A paint surface that records instead of drawing.

use ordinate::paint::{Brush, Color, PaintSurface, Pen};
use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;

/// Width of one glyph relative to the font size, for [`RecordingSurface::text_size`].
const GLYPH_ASPECT: f64 = 0.6;

/// A drawing command as it reached the surface.
///
/// Positions are in device coordinates: the translation active when the
/// command was issued has already been applied.
#[derive(Debug, Clone, PartialEq)]
pub enum PaintCommand {
    Save,
    Restore,
    Translate(DVec2),
    FillRect {
        rect: Rect,
        brush: Brush,
    },
    StrokeRect {
        rect: Rect,
        pen: Pen,
    },
    Line {
        from: DVec2,
        to: DVec2,
        pen: Pen,
    },
    Text {
        position: DVec2,
        text: String,
        color: Color,
        size: f64,
    },
}

impl PaintCommand {
    /// Whether this command puts pixels on the surface.
    pub fn is_drawing(&self) -> bool {
        !matches!(
            self,
            PaintCommand::Save | PaintCommand::Restore | PaintCommand::Translate(_)
        )
    }
}

/// Records every [`PaintSurface`] call.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    commands: Vec<PaintCommand>,
    offset: DVec2,
    saved: Vec<DVec2>,
    unbalanced_restores: usize,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn commands(&self) -> &[PaintCommand] {
        &self.commands
    }

    /// Commands that draw something, in order.
    pub fn drawing_commands(&self) -> impl Iterator<Item = &PaintCommand> {
        self.commands.iter().filter(|c| c.is_drawing())
    }

    pub fn fills(&self) -> Vec<(Rect, &Brush)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::FillRect { rect, brush } => Some((*rect, brush)),
                _ => None,
            })
            .collect()
    }

    pub fn lines(&self) -> Vec<(DVec2, DVec2, Pen)> {
        self.commands
            .iter()
            .filter_map(|c| match c {
                PaintCommand::Line { from, to, pen } => Some((*from, *to, *pen)),
                _ => None,
            })
            .collect()
    }

    /// Current translation.
    pub fn offset(&self) -> DVec2 {
        self.offset
    }

    /// Number of saves not yet restored.
    pub fn depth(&self) -> usize {
        self.saved.len()
    }

    /// Restores issued with nothing saved.
    pub fn unbalanced_restores(&self) -> usize {
        self.unbalanced_restores
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

impl PaintSurface for RecordingSurface {
    fn save(&mut self) {
        self.saved.push(self.offset);
        self.commands.push(PaintCommand::Save);
    }

    fn restore(&mut self) {
        match self.saved.pop() {
            Some(offset) => self.offset = offset,
            None => {
                tracing::warn!("restore without matching save");
                self.unbalanced_restores += 1;
            }
        }
        self.commands.push(PaintCommand::Restore);
    }

    fn translate(&mut self, offset: DVec2) {
        self.offset += offset;
        self.commands.push(PaintCommand::Translate(offset));
    }

    fn fill_rect(&mut self, rect: Rect, brush: &Brush) {
        self.commands.push(PaintCommand::FillRect {
            rect: rect.translate(self.offset),
            brush: brush.clone(),
        });
    }

    fn stroke_rect(&mut self, rect: Rect, pen: Pen) {
        self.commands.push(PaintCommand::StrokeRect {
            rect: rect.translate(self.offset),
            pen,
        });
    }

    fn draw_line(&mut self, from: DVec2, to: DVec2, pen: Pen) {
        self.commands.push(PaintCommand::Line {
            from: from + self.offset,
            to: to + self.offset,
            pen,
        });
    }

    fn draw_text(&mut self, position: DVec2, text: &str, color: Color, size: f64) {
        self.commands.push(PaintCommand::Text {
            position: position + self.offset,
            text: text.to_owned(),
            color,
            size,
        });
    }

    fn text_size(&self, text: &str, size: f64) -> DVec2 {
        DVec2::new(text.chars().count() as f64 * size * GLYPH_ASPECT, size)
    }
}
