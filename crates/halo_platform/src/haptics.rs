//! Haptic feedback
//!
//! Feedback is expressed as a [`Feedback`] value and handed to a
//! [`HapticEngine`]. Device backends implement the trait against the native
//! feedback generators; [`LoggingHaptics`] and [`RecordingHaptics`] cover
//! headless hosts and tests.

use crate::error::{PlatformError, Result};
use std::fmt;
use std::sync::{Mutex, MutexGuard, PoisonError};

/// Strength and character of an impact
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ImpactStyle {
    Light,
    Medium,
    Heavy,
    Rigid,
    Soft,
}

impl ImpactStyle {
    pub const ALL: [ImpactStyle; 5] = [
        ImpactStyle::Light,
        ImpactStyle::Medium,
        ImpactStyle::Heavy,
        ImpactStyle::Rigid,
        ImpactStyle::Soft,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            ImpactStyle::Light => "light",
            ImpactStyle::Medium => "medium",
            ImpactStyle::Heavy => "heavy",
            ImpactStyle::Rigid => "rigid",
            ImpactStyle::Soft => "soft",
        }
    }
}

/// Outcome conveyed by a notification pattern
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum NotificationKind {
    Success,
    Warning,
    Error,
}

impl NotificationKind {
    pub const ALL: [NotificationKind; 3] = [
        NotificationKind::Success,
        NotificationKind::Warning,
        NotificationKind::Error,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            NotificationKind::Success => "success",
            NotificationKind::Warning => "warning",
            NotificationKind::Error => "error",
        }
    }
}

/// A single haptic feedback request
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Feedback {
    Impact(ImpactStyle),
    Notification(NotificationKind),
    /// Tick for a changed selection
    Selection,
}

impl fmt::Display for Feedback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Feedback::Impact(style) => write!(f, "impact({})", style.name()),
            Feedback::Notification(kind) => write!(f, "notification({})", kind.name()),
            Feedback::Selection => write!(f, "selection"),
        }
    }
}

/// Plays haptic feedback on the host
///
/// Engines are shared between screens and scheduled callbacks, so they must
/// be thread-safe.
pub trait HapticEngine: Send + Sync {
    /// Warm up the actuator ahead of an expected trigger
    fn prepare(&self) {}

    /// Play one feedback pattern
    fn trigger(&self, feedback: Feedback) -> Result<()>;
}

/// Engine that only logs each request
#[derive(Clone, Copy, Debug, Default)]
pub struct LoggingHaptics;

impl HapticEngine for LoggingHaptics {
    fn prepare(&self) {
        tracing::trace!("haptics: prepare");
    }

    fn trigger(&self, feedback: Feedback) -> Result<()> {
        tracing::info!("haptics: {}", feedback);
        Ok(())
    }
}

#[derive(Debug, Default)]
struct Recorded {
    triggered: Vec<Feedback>,
    prepared: usize,
    unavailable: bool,
}

/// Engine that records every request, for tests and scripted sessions
#[derive(Debug, Default)]
pub struct RecordingHaptics {
    inner: Mutex<Recorded>,
}

impl RecordingHaptics {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> MutexGuard<'_, Recorded> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Every successful trigger, oldest first
    pub fn triggered(&self) -> Vec<Feedback> {
        self.lock().triggered.clone()
    }

    pub fn count(&self) -> usize {
        self.lock().triggered.len()
    }

    pub fn prepared(&self) -> usize {
        self.lock().prepared
    }

    pub fn clear(&self) {
        let mut recorded = self.lock();
        recorded.triggered.clear();
        recorded.prepared = 0;
    }

    /// Simulate a host without an actuator; triggers fail while set
    pub fn set_unavailable(&self, unavailable: bool) {
        self.lock().unavailable = unavailable;
    }
}

impl HapticEngine for RecordingHaptics {
    fn prepare(&self) {
        self.lock().prepared += 1;
    }

    fn trigger(&self, feedback: Feedback) -> Result<()> {
        let mut recorded = self.lock();
        if recorded.unavailable {
            return Err(PlatformError::Unavailable(format!("no actuator for {feedback}")));
        }
        recorded.triggered.push(feedback);
        Ok(())
    }
}
