//! Halo Platform Boundary
//!
//! Platform-agnostic types for what the host feeds into screens and what
//! screens ask of the host:
//!
//! - [`ScreenEvent`] - appearance, disappearance and resize signals
//! - [`HapticEngine`] - plays [`Feedback`] patterns on the device
//!
//! Device backends live with the host application; this crate ships a
//! [`LoggingHaptics`] engine for headless runs and [`RecordingHaptics`]
//! for tests.

mod error;
mod event;
mod haptics;

// Re-export all public types
pub use error::{PlatformError, Result};
pub use event::ScreenEvent;
pub use haptics::{
    Feedback, HapticEngine, ImpactStyle, LoggingHaptics, NotificationKind, RecordingHaptics,
};
