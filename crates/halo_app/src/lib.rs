//! Halo Application Screens
//!
//! Host-agnostic view models for the haptics playground:
//!
//! - [`HapticsScreen`] - feedback categories, the haptics toggle, a picker,
//!   and a faint glow border over everything
//! - [`ComposerScreen`] - a text buffer framed by a bold glow border that
//!   hands its text back to the presenter on send
//!
//! Screens receive [`halo_platform::ScreenEvent`]s from the host, play
//! feedback through a [`halo_platform::HapticEngine`], and paint into any
//! [`halo_core::DrawContext`]. Animation runs on a host-ticked
//! [`halo_animation::AnimationScheduler`].
//!
//! # Example
//!
//! ```rust
//! use halo_animation::AnimationScheduler;
//! use halo_app::{AppConfig, HapticsScreen, Screen};
//! use halo_core::{RecordingContext, Size};
//! use halo_platform::{LoggingHaptics, ScreenEvent};
//! use std::sync::Arc;
//!
//! let scheduler = AnimationScheduler::new();
//! let mut screen = HapticsScreen::new(
//!     &AppConfig::default(),
//!     Arc::new(LoggingHaptics),
//!     scheduler.handle(),
//! )
//! .unwrap();
//!
//! screen.handle_event(ScreenEvent::resized(390.0, 844.0));
//! screen.handle_event(ScreenEvent::DidAppear);
//! scheduler.tick_by(16.0);
//!
//! let mut frame = RecordingContext::new(Size::new(390.0, 844.0));
//! screen.paint(&mut frame);
//! assert!(!frame.commands().is_empty());
//! ```

pub mod composer;
pub mod config;
pub mod error;
pub mod haptics;
pub mod screen;

pub use composer::{ComposerScreen, SendCallback};
pub use config::{AppConfig, CONFIG_FILE_NAME};
pub use error::{AppError, Result};
pub use haptics::{controls_for, Action, Category, Control, HapticsScreen};
pub use screen::Screen;
