//! Halo Core
//!
//! Foundational drawing primitives for the Halo workspace:
//!
//! - **Geometry**: points, sizes, rects and 2D transforms
//! - **Color & Brushes**: RGBA colors and conic gradients
//! - **Paths & Strokes**: exact rounded-rect outlines
//! - **Draw Context**: the painting trait every component renders through,
//!   plus a recording implementation for deferred execution and tests
//!
//! # Example
//!
//! ```rust
//! use halo_core::{Path, Rect};
//!
//! let outline = Path::rounded_rect(Rect::new(17.0, 17.0, 286.0, 446.0), 50.0);
//! assert_eq!(outline.bounds(), Rect::new(17.0, 17.0, 286.0, 446.0));
//! ```

pub mod color;
pub mod draw;
pub mod geometry;

pub use color::{Brush, Color, ConicGradient, GradientStop};
pub use draw::{
    ClipShape, DrawCommand, DrawContext, LayerConfig, LineCap, LineJoin, Path, PathCommand,
    RecordingContext, Shadow, Stroke,
};
pub use geometry::{Point, Rect, Size, Transform};
