//! Glow border configuration
//!
//! [`GlowBorderSpec`] describes one border instance: stroke geometry, the
//! gradient palette and its rotation speed, and the [`HaloStyle`] of the
//! blurred outline underneath. Both types (de)serialize with colors written
//! as `#RRGGBB` / `#RRGGBBAA` strings, and every field has a default so a
//! partial config section is valid.

use crate::error::{GlowBorderError, Result};
use halo_core::Color;
use serde::{Deserialize, Serialize};

/// System palette colors used by the default sweep
pub mod palette {
    use halo_core::Color;

    pub fn system_red() -> Color {
        Color::from_hex(0xFF3B30)
    }

    pub fn system_orange() -> Color {
        Color::from_hex(0xFF9500)
    }

    pub fn system_yellow() -> Color {
        Color::from_hex(0xFFCC00)
    }

    pub fn system_green() -> Color {
        Color::from_hex(0x34C759)
    }

    pub fn system_teal() -> Color {
        Color::from_hex(0x30B0C7)
    }

    pub fn system_blue() -> Color {
        Color::from_hex(0x007AFF)
    }

    pub fn system_indigo() -> Color {
        Color::from_hex(0x5856D6)
    }

    pub fn system_purple() -> Color {
        Color::from_hex(0xAF52DE)
    }

    pub fn system_pink() -> Color {
        Color::from_hex(0xFF2D55)
    }

    /// Red through pink, in hue order
    pub fn rainbow() -> Vec<Color> {
        vec![
            system_red(),
            system_orange(),
            system_yellow(),
            system_green(),
            system_teal(),
            system_blue(),
            system_indigo(),
            system_purple(),
            system_pink(),
        ]
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Halo Style
// ─────────────────────────────────────────────────────────────────────────────

/// Treatment of the blurred outline drawn beneath the gradient stroke
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct HaloStyle {
    /// Stroke and shadow color
    #[serde(with = "hex::color")]
    pub color: Color,
    /// Alpha applied to the halo stroke itself
    pub stroke_alpha: f32,
    /// Shadow blur radius in layout units
    pub blur_radius: f32,
    /// Shadow opacity
    pub opacity: f32,
}

impl Default for HaloStyle {
    fn default() -> Self {
        Self {
            color: palette::system_pink(),
            stroke_alpha: 0.7,
            blur_radius: 18.0,
            opacity: 0.9,
        }
    }
}

impl HaloStyle {
    /// Color of the halo stroke
    pub fn stroke_color(&self) -> Color {
        self.color.with_alpha(self.color.a * self.stroke_alpha)
    }

    /// Color of the halo shadow
    pub fn shadow_color(&self) -> Color {
        self.color.with_alpha(self.color.a * self.opacity)
    }

    pub fn validate(&self) -> Result<()> {
        check_unit(self.stroke_alpha)?;
        check_unit(self.opacity)?;
        check_non_negative("halo.blur_radius", self.blur_radius)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Glow Border Spec
// ─────────────────────────────────────────────────────────────────────────────

/// Configuration for one glow border
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GlowBorderSpec {
    /// Stroke thickness in layout units
    pub stroke_width: f32,
    /// Corner radius of the outline
    pub corner_radius: f32,
    /// Distance from the viewport edge to the outer edge of the stroke
    pub content_inset: f32,
    /// Sweep palette, spaced evenly around the conic gradient
    #[serde(with = "hex::palette")]
    pub colors: Vec<Color>,
    /// Seconds per full turn of the sweep
    pub rotation_period: f32,
    /// Opacity of the whole decoration
    pub opacity: f32,
    pub halo: HaloStyle,
}

impl Default for GlowBorderSpec {
    fn default() -> Self {
        Self {
            stroke_width: 10.0,
            corner_radius: 44.0,
            content_inset: 6.0,
            colors: palette::rainbow(),
            rotation_period: 10.0,
            opacity: 1.0,
            halo: HaloStyle::default(),
        }
    }
}

impl GlowBorderSpec {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_stroke_width(mut self, width: f32) -> Self {
        self.stroke_width = width;
        self
    }

    pub fn with_corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    pub fn with_content_inset(mut self, inset: f32) -> Self {
        self.content_inset = inset;
        self
    }

    pub fn with_colors(mut self, colors: impl Into<Vec<Color>>) -> Self {
        self.colors = colors.into();
        self
    }

    pub fn with_rotation_period(mut self, seconds: f32) -> Self {
        self.rotation_period = seconds;
        self
    }

    pub fn with_opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }

    pub fn with_halo(mut self, halo: HaloStyle) -> Self {
        self.halo = halo;
        self
    }

    /// Distance from the viewport edge to the stroke centerline
    pub fn path_inset(&self) -> f32 {
        self.content_inset + self.stroke_width / 2.0
    }

    pub fn rotation_period_ms(&self) -> f32 {
        self.rotation_period * 1000.0
    }

    /// Check every field, reporting the first violation
    pub fn validate(&self) -> Result<()> {
        if !(self.stroke_width.is_finite() && self.stroke_width > 0.0) {
            return Err(GlowBorderError::InvalidGeometry {
                field: "stroke_width",
                value: self.stroke_width,
            });
        }
        check_non_negative("corner_radius", self.corner_radius)?;
        check_non_negative("content_inset", self.content_inset)?;
        if self.colors.is_empty() {
            return Err(GlowBorderError::EmptyPalette);
        }
        if !(self.rotation_period.is_finite() && self.rotation_period > 0.0) {
            return Err(GlowBorderError::InvalidPeriod(self.rotation_period));
        }
        check_unit(self.opacity)?;
        self.halo.validate()
    }
}

fn check_non_negative(field: &'static str, value: f32) -> Result<()> {
    if value.is_finite() && value >= 0.0 {
        Ok(())
    } else {
        Err(GlowBorderError::InvalidGeometry { field, value })
    }
}

fn check_unit(value: f32) -> Result<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(GlowBorderError::InvalidOpacity(value))
    }
}

/// Hex string (de)serialization for colors
mod hex {
    use halo_core::Color;
    use serde::de::Error;

    fn parse<E: Error>(text: &str) -> Result<Color, E> {
        Color::parse_hex(text).ok_or_else(|| {
            E::custom(format!(
                "invalid color `{text}`, expected #RRGGBB or #RRGGBBAA"
            ))
        })
    }

    pub mod color {
        use halo_core::Color;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(color: &Color, serializer: S) -> Result<S::Ok, S::Error> {
            serializer.serialize_str(&color.to_hex_string())
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Color, D::Error> {
            let text = String::deserialize(deserializer)?;
            super::parse(&text)
        }
    }

    pub mod palette {
        use halo_core::Color;
        use serde::{Deserialize, Deserializer, Serializer};

        pub fn serialize<S: Serializer>(
            colors: &[Color],
            serializer: S,
        ) -> Result<S::Ok, S::Error> {
            serializer.collect_seq(colors.iter().map(Color::to_hex_string))
        }

        pub fn deserialize<'de, D: Deserializer<'de>>(
            deserializer: D,
        ) -> Result<Vec<Color>, D::Error> {
            Vec::<String>::deserialize(deserializer)?
                .iter()
                .map(|text| super::parse(text))
                .collect()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_are_valid() {
        let spec = GlowBorderSpec::default();
        assert!(spec.validate().is_ok());
        assert_eq!(spec.colors.len(), 9);
        assert_eq!(spec.path_inset(), 11.0);
        assert_eq!(spec.rotation_period_ms(), 10_000.0);
    }

    #[test]
    fn test_rejects_bad_geometry() {
        let err = GlowBorderSpec::new().with_stroke_width(0.0).validate();
        assert_eq!(
            err,
            Err(GlowBorderError::InvalidGeometry {
                field: "stroke_width",
                value: 0.0
            })
        );

        let err = GlowBorderSpec::new().with_corner_radius(-1.0).validate();
        assert!(matches!(
            err,
            Err(GlowBorderError::InvalidGeometry {
                field: "corner_radius",
                ..
            })
        ));

        let err = GlowBorderSpec::new()
            .with_content_inset(f32::NAN)
            .validate();
        assert!(matches!(
            err,
            Err(GlowBorderError::InvalidGeometry {
                field: "content_inset",
                ..
            })
        ));
    }

    #[test]
    fn test_rejects_empty_palette_and_bad_period() {
        assert_eq!(
            GlowBorderSpec::new().with_colors(Vec::new()).validate(),
            Err(GlowBorderError::EmptyPalette)
        );
        assert_eq!(
            GlowBorderSpec::new().with_rotation_period(0.0).validate(),
            Err(GlowBorderError::InvalidPeriod(0.0))
        );
        assert_eq!(
            GlowBorderSpec::new().with_opacity(1.5).validate(),
            Err(GlowBorderError::InvalidOpacity(1.5))
        );
    }

    #[test]
    fn test_single_color_palette_is_valid() {
        let spec = GlowBorderSpec::new().with_colors(vec![Color::BLUE]);
        assert!(spec.validate().is_ok());
    }

    #[test]
    fn test_halo_colors() {
        let halo = HaloStyle::default();
        assert!((halo.stroke_color().a - 0.7).abs() < 1e-6);
        assert!((halo.shadow_color().a - 0.9).abs() < 1e-6);
        assert_eq!(halo.stroke_color().r, halo.color.r);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let spec: GlowBorderSpec = toml::from_str(
            r##"
            stroke_width = 14.0
            colors = ["#FF0000", "#00FF0080"]

            [halo]
            blur_radius = 24.0
            "##,
        )
        .unwrap();

        assert_eq!(spec.stroke_width, 14.0);
        assert_eq!(spec.corner_radius, 44.0);
        assert_eq!(spec.colors[0], Color::RED);
        assert!((spec.colors[1].a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(spec.halo.blur_radius, 24.0);
        assert_eq!(spec.halo.opacity, 0.9);
    }

    #[test]
    fn test_invalid_hex_color_is_reported() {
        let err = toml::from_str::<GlowBorderSpec>(r#"colors = ["crimson"]"#).unwrap_err();
        assert!(err.to_string().contains("invalid color `crimson`"));
    }

    #[test]
    fn test_serializes_colors_as_hex() {
        let text = toml::to_string(&GlowBorderSpec::default()).unwrap();
        assert!(text.contains("\"#FF3B30\""));
        assert!(text.contains("[halo]"));
    }
}
