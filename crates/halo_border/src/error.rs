//! Glow border error types

use thiserror::Error;

/// Errors raised when a glow border configuration is rejected
///
/// Only configuration can fail. Resizing, animation control and painting
/// absorb degenerate input and never return an error.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GlowBorderError {
    #[error("invalid {field}: {value}")]
    InvalidGeometry { field: &'static str, value: f32 },

    #[error("gradient palette has no colors")]
    EmptyPalette,

    #[error("invalid rotation period: {0}s (must be finite and positive)")]
    InvalidPeriod(f32),

    #[error("invalid opacity: {0} (must be within 0.0..=1.0)")]
    InvalidOpacity(f32),
}

/// Result type for glow border configuration
pub type Result<T> = std::result::Result<T, GlowBorderError>;
