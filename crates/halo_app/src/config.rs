//! Application configuration
//!
//! Stored as TOML:
//!
//! ```toml
//! haptics_enabled = true
//!
//! [main_glow]
//! stroke_width = 12.0
//! corner_radius = 40.0
//! content_inset = 0.0
//! opacity = 0.6
//!
//! [composer_glow]
//! stroke_width = 14.0
//! corner_radius = 50.0
//! content_inset = 10.0
//! colors = ["#FF3B30", "#34C759", "#007AFF"]
//! ```
//!
//! A missing section takes the screen's default. Missing fields inside a
//! present section take the glow border defaults.

use crate::error::Result;
use halo_border::GlowBorderSpec;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Default file name looked up by the CLI
pub const CONFIG_FILE_NAME: &str = "halo.toml";

/// Top-level application configuration
#[derive(Debug, Clone, PartialEq, Deserialize, Serialize)]
pub struct AppConfig {
    /// Initial state of the haptics toggle
    #[serde(default = "default_haptics_enabled")]
    pub haptics_enabled: bool,
    /// Decoration drawn over the haptics screen
    #[serde(default = "main_glow")]
    pub main_glow: GlowBorderSpec,
    /// Decoration framing the composer
    #[serde(default = "composer_glow")]
    pub composer_glow: GlowBorderSpec,
}

fn default_haptics_enabled() -> bool {
    true
}

/// Faint full-bleed border over the haptics screen
pub fn main_glow() -> GlowBorderSpec {
    GlowBorderSpec::new()
        .with_stroke_width(12.0)
        .with_corner_radius(40.0)
        .with_content_inset(0.0)
        .with_opacity(0.6)
}

/// Bold inset border around the composer
pub fn composer_glow() -> GlowBorderSpec {
    GlowBorderSpec::new()
        .with_stroke_width(14.0)
        .with_corner_radius(50.0)
        .with_content_inset(10.0)
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            haptics_enabled: default_haptics_enabled(),
            main_glow: main_glow(),
            composer_glow: composer_glow(),
        }
    }
}

impl AppConfig {
    /// Parse and validate a TOML document
    pub fn from_toml_str(text: &str) -> Result<Self> {
        let config: Self = toml::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a config file
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)?;
        let config = Self::from_toml_str(&text)?;
        tracing::debug!("Loaded config from {}", path.display());
        Ok(config)
    }

    /// Load `path` if it exists, otherwise fall back to defaults
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {}, using defaults", path.display());
            Ok(Self::default())
        }
    }

    pub fn to_toml_string(&self) -> Result<String> {
        Ok(toml::to_string_pretty(self)?)
    }

    /// Write the config, creating parent directories as needed
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        fs::write(path, self.to_toml_string()?)?;
        Ok(())
    }

    /// Validate both glow specs
    pub fn validate(&self) -> Result<()> {
        self.main_glow.validate()?;
        self.composer_glow.validate()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use halo_border::GlowBorderError;
    use halo_core::Color;

    #[test]
    fn test_empty_document_is_default() {
        let config = AppConfig::from_toml_str("").unwrap();
        assert_eq!(config, AppConfig::default());
        assert!(config.haptics_enabled);
        assert_eq!(config.main_glow.opacity, 0.6);
        assert_eq!(config.composer_glow.content_inset, 10.0);
    }

    #[test]
    fn test_partial_section() {
        let config = AppConfig::from_toml_str(
            r##"
            haptics_enabled = false

            [composer_glow]
            stroke_width = 20.0
            colors = ["#FF0000", "#0000FF"]
            "##,
        )
        .unwrap();

        assert!(!config.haptics_enabled);
        assert_eq!(config.main_glow, main_glow());
        assert_eq!(config.composer_glow.stroke_width, 20.0);
        assert_eq!(config.composer_glow.colors, vec![Color::RED, Color::BLUE]);
    }

    #[test]
    fn test_invalid_spec_is_rejected() {
        let err = AppConfig::from_toml_str(
            r#"
            [main_glow]
            rotation_period = 0.0
            "#,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            AppError::Border(GlowBorderError::InvalidPeriod(_))
        ));
    }

    #[test]
    fn test_malformed_toml_is_parse_error() {
        let err = AppConfig::from_toml_str("haptics_enabled = maybe").unwrap_err();
        assert!(matches!(err, AppError::ConfigParse(_)));
    }

    #[test]
    fn test_save_and_load() {
        let dir = std::env::temp_dir().join(format!("halo-config-test-{}", std::process::id()));
        let path = dir.join("nested").join(CONFIG_FILE_NAME);

        let mut config = AppConfig::default();
        config.haptics_enabled = false;
        config.save(&path).unwrap();

        let loaded = AppConfig::load(&path).unwrap();
        assert!(!loaded.haptics_enabled);
        assert_eq!(loaded.composer_glow.stroke_width, 14.0);
        assert_eq!(loaded.main_glow.colors.len(), 9);

        fs::remove_dir_all(&dir).unwrap();
    }

    #[test]
    fn test_load_or_default_missing_file() {
        let path = std::env::temp_dir().join("halo-definitely-missing.toml");
        let config = AppConfig::load_or_default(&path).unwrap();
        assert_eq!(config, AppConfig::default());
    }
}
