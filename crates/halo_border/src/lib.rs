//! Halo Glow Border
//!
//! An animated rounded-rectangle outline painted with a rotating conic
//! gradient, over a blurred single-color halo.
//!
//! - [`GlowBorderSpec`]: stroke geometry, palette, period and halo style
//! - [`stroke_path`]: the one outline both layers draw
//! - [`GlowBorder`]: owns the [`GlowBorderSpec`], the derived [`RenderState`] and the
//!   rotation registered with a host-ticked scheduler
//!
//! The border never drives frames itself. The host ticks the
//! [`halo_animation::AnimationScheduler`] and calls [`GlowBorder::paint`].

pub mod border;
pub mod error;
pub mod geometry;
pub mod layers;
pub mod spec;

pub use border::GlowBorder;
pub use error::{GlowBorderError, Result};
pub use geometry::{stroke_path, RenderState};
pub use spec::{palette, GlowBorderSpec, HaloStyle};
