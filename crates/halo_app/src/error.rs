//! Error types for halo_app

use halo_border::GlowBorderError;
use halo_platform::PlatformError;
use thiserror::Error;

/// Errors that can occur in the Halo application
#[derive(Error, Debug)]
pub enum AppError {
    /// A glow border spec was rejected
    #[error("Glow border configuration rejected: {0}")]
    Border(#[from] GlowBorderError),

    /// Platform error (haptics, host capabilities)
    #[error("Platform error: {0}")]
    Platform(#[from] PlatformError),

    /// Failed to parse a configuration file
    #[error("Config parsing failed: {0}")]
    ConfigParse(#[from] toml::de::Error),

    /// Failed to serialize a configuration
    #[error("Config serialization failed: {0}")]
    ConfigWrite(#[from] toml::ser::Error),

    /// Failed to read or write a file
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Result type for halo_app operations
pub type Result<T> = std::result::Result<T, AppError>;
