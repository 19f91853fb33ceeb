//! Error types for validation paths.
//!
//! Interactive and layout paths never fail: degenerate input is skipped as a
//! no-op. Errors only come out of constructors and validators.

use crate::area::AreaId;
use thiserror::Error;

/// Result type alias for Ordinate operations.
pub type Result<T> = std::result::Result<T, OrdinateError>;

/// Which zoom axis a value belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ZoomAxis {
    /// Horizontal factor
    X,
    /// Vertical factor
    Y,
}

impl std::fmt::Display for ZoomAxis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ZoomAxis::X => f.write_str("x"),
            ZoomAxis::Y => f.write_str("y"),
        }
    }
}

/// Main error type for Ordinate operations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OrdinateError {
    /// A zoom factor was zero, negative or not finite.
    #[error("invalid {axis} zoom factor: {value}")]
    InvalidZoomFactor { axis: ZoomAxis, value: f64 },

    /// A measure scaling pair was zero, negative or not finite.
    #[error("invalid measure scaling factors ({x}, {y})")]
    InvalidScalingFactor { x: f64, y: f64 },

    /// The area handle refers to an area that was removed.
    #[error("area {0:?} no longer exists")]
    StaleArea(AreaId),

    /// Plane configuration failed validation.
    #[error("invalid plane configuration: {0}")]
    InvalidConfig(String),
}
