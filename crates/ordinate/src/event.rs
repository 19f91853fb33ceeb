//! Pointer events delivered by the host, and the deferred event queue.

use bitflags::bitflags;
use ordinate_core::geometry::Rect;
use ordinate_core::math::DVec2;
use std::collections::VecDeque;

/// Pointer button identity.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerButton {
    /// Usually the left mouse button.
    Primary,
    /// Usually the right mouse button.
    Secondary,
    /// Usually the wheel button.
    Middle,
}

/// Phase of a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointerEventKind {
    Press,
    Move,
    Release,
    DoubleClick,
}

/// A pointer event in host pixel coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerEvent {
    pub kind: PointerEventKind,
    /// Button that changed state; `None` for moves.
    pub button: Option<PointerButton>,
    pub position: DVec2,
}

impl PointerEvent {
    pub fn press(button: PointerButton, position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Press,
            button: Some(button),
            position,
        }
    }

    pub fn release(button: PointerButton, position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Release,
            button: Some(button),
            position,
        }
    }

    pub fn moved(position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::Move,
            button: None,
            position,
        }
    }

    pub fn double_click(button: PointerButton, position: DVec2) -> Self {
        Self {
            kind: PointerEventKind::DoubleClick,
            button: Some(button),
            position,
        }
    }

    /// Whether this event is for `button`.
    pub fn is_button(&self, button: PointerButton) -> bool {
        self.button == Some(button)
    }
}

bitflags! {
    /// Outcome of handing an event to a handler.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
    pub struct HandleStatus: u8 {
        const HANDLED = 0b00000001;
        const CONSUMED = 0b00000010;
    }
}

impl HandleStatus {
    pub const fn is_consumed(&self) -> bool {
        self.contains(Self::CONSUMED)
    }

    pub const fn is_handled(&self) -> bool {
        self.contains(Self::HANDLED)
    }

    pub const fn consumed() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits() | Self::CONSUMED.bits())
    }

    pub const fn handled() -> Self {
        Self::from_bits_truncate(Self::HANDLED.bits())
    }

    pub const fn ignored() -> Self {
        Self::empty()
    }
}

/// Old and new plane geometry, delivered through the queued
/// `geometry_changed` signal.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GeometryChange {
    pub old: Rect,
    pub new: Rect,
}

/// FIFO of events whose delivery is deferred to the next drain.
///
/// Producers push from inside setters; the owner drains once per frame, so
/// observers never run re-entrantly inside the call that caused the event.
#[derive(Debug)]
pub struct EventQueue<E> {
    pending: VecDeque<E>,
}

impl<E> EventQueue<E> {
    pub fn new() -> Self {
        Self {
            pending: VecDeque::with_capacity(4),
        }
    }

    /// Queue an event for the next drain.
    pub fn push(&mut self, event: E) {
        self.pending.push_back(event);
    }

    /// Take every queued event, oldest first.
    pub fn drain(&mut self) -> Vec<E> {
        self.pending.drain(..).collect()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }
}

impl<E> Default for EventQueue<E> {
    fn default() -> Self {
        Self::new()
    }
}
