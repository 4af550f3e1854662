//! Halo Paint
//!
//! Painting helpers layered over the core draw context.
//!
//! - [`PaintContext`]: a scratch recording that tracks push/pop nesting
//! - [`conic_sweep`]: evenly spaced conic gradients that wrap seamlessly
//!
//! # Example
//!
//! ```rust
//! use halo_paint::{conic_sweep, Color, DrawContext, PaintContext, Point, Rect, Size};
//!
//! let mut ctx = PaintContext::new(Size::new(200.0, 200.0));
//! let sweep = conic_sweep(Point::new(100.0, 100.0), 0.0, &[Color::RED, Color::BLUE]).unwrap();
//!
//! ctx.push_opacity(0.8);
//! ctx.fill_rect(Rect::new(0.0, 0.0, 200.0, 200.0), sweep.into());
//! ctx.pop_opacity();
//!
//! assert!(ctx.is_balanced());
//! assert_eq!(ctx.commands().len(), 3);
//! ```

pub mod context;
pub mod gradient;

pub use halo_core::{
    Brush, Color, ConicGradient, DrawCommand, DrawContext, GradientStop, Point, Rect, Size,
};

pub use context::PaintContext;
pub use gradient::conic_sweep;
