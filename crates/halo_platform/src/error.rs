//! Platform error types

use thiserror::Error;

/// Platform-related errors
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PlatformError {
    /// Capability not available on this host (no haptic actuator, simulator)
    #[error("Platform not available: {0}")]
    Unavailable(String),

    /// The haptic engine rejected or failed a request
    #[error("Haptic feedback failed: {0}")]
    Haptics(String),
}

/// Result type for platform operations
pub type Result<T> = std::result::Result<T, PlatformError>;
