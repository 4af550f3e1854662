//! Screen events delivered by the host

use std::fmt;

/// Lifecycle and layout signals for one screen
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum ScreenEvent {
    /// The screen became visible
    DidAppear,
    /// The screen is about to leave the visible state
    WillDisappear,
    /// The screen's view was laid out at a new size
    Resized {
        /// New width in layout units
        width: f32,
        /// New height in layout units
        height: f32,
    },
}

impl ScreenEvent {
    pub fn resized(width: f32, height: f32) -> Self {
        ScreenEvent::Resized { width, height }
    }
}

impl fmt::Display for ScreenEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ScreenEvent::DidAppear => write!(f, "did-appear"),
            ScreenEvent::WillDisappear => write!(f, "will-disappear"),
            ScreenEvent::Resized { width, height } => write!(f, "resized({width}x{height})"),
        }
    }
}
