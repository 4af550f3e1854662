//! Colors, conic gradients and brushes

use crate::geometry::Point;

/// RGBA color with channels in `0.0..=1.0`
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Color {
    pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);
    pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);
    pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

    pub const fn rgb(r: f32, g: f32, b: f32) -> Self {
        Self::rgba(r, g, b, 1.0)
    }

    pub const fn rgba(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque color from a `0xRRGGBB` literal
    pub fn from_hex(hex: u32) -> Self {
        let channel = |shift: u32| ((hex >> shift) & 0xFF) as f32 / 255.0;
        Self::rgb(channel(16), channel(8), channel(0))
    }

    /// Parse `#RRGGBB` or `#RRGGBBAA`; the `#` is optional
    pub fn parse_hex(text: &str) -> Option<Self> {
        let digits = text.trim().trim_start_matches('#');
        if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
            return None;
        }
        let value = u32::from_str_radix(digits, 16).ok()?;
        match digits.len() {
            6 => Some(Self::from_hex(value)),
            8 => Some(Self::from_hex(value >> 8).with_alpha((value & 0xFF) as f32 / 255.0)),
            _ => None,
        }
    }

    /// `#RRGGBB`, with an `AA` suffix only when translucent
    pub fn to_hex_string(&self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        let (r, g, b, a) = (byte(self.r), byte(self.g), byte(self.b), byte(self.a));
        if a == u8::MAX {
            format!("#{r:02X}{g:02X}{b:02X}")
        } else {
            format!("#{r:02X}{g:02X}{b:02X}{a:02X}")
        }
    }

    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }

    /// Component-wise blend, `t` clamped to `0.0..=1.0`
    pub fn lerp(from: &Color, to: &Color, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: f32, b: f32| a + (b - a) * t;
        Color::rgba(
            mix(from.r, to.r),
            mix(from.g, to.g),
            mix(from.b, to.b),
            mix(from.a, to.a),
        )
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::BLACK
    }
}

/// Color at a normalized offset along a gradient
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct GradientStop {
    pub offset: f32,
    pub color: Color,
}

impl GradientStop {
    /// `offset` is clamped to `0.0..=1.0`
    pub fn new(offset: f32, color: Color) -> Self {
        Self {
            offset: offset.clamp(0.0, 1.0),
            color,
        }
    }
}

/// Angular gradient sweeping once around `center`
///
/// Offset 0.0 lies at `start_angle` (radians, clockwise from +x in a y-down
/// space) and offset 1.0 a full turn later.
#[derive(Clone, Debug, PartialEq)]
pub struct ConicGradient {
    pub center: Point,
    pub start_angle: f32,
    pub stops: Vec<GradientStop>,
}

impl ConicGradient {
    pub fn new(center: Point, start_angle: f32, stops: Vec<GradientStop>) -> Self {
        Self {
            center,
            start_angle,
            stops,
        }
    }

    pub fn stops(&self) -> &[GradientStop] {
        &self.stops
    }

    /// Color at fraction `t` of the sweep
    pub fn sample(&self, t: f32) -> Color {
        let t = t.clamp(0.0, 1.0);
        let Some(first) = self.stops.first() else {
            return Color::default();
        };
        if t <= first.offset {
            return first.color;
        }
        for pair in self.stops.windows(2) {
            let (lo, hi) = (pair[0], pair[1]);
            if t <= hi.offset {
                let span = hi.offset - lo.offset;
                if span <= f32::EPSILON {
                    return hi.color;
                }
                return Color::lerp(&lo.color, &hi.color, (t - lo.offset) / span);
            }
        }
        self.stops.last().map_or(first.color, |stop| stop.color)
    }
}

/// Paint source for fills and strokes
#[derive(Clone, Debug, PartialEq)]
pub enum Brush {
    Solid(Color),
    Conic(ConicGradient),
}

impl From<Color> for Brush {
    fn from(color: Color) -> Self {
        Brush::Solid(color)
    }
}

impl From<ConicGradient> for Brush {
    fn from(gradient: ConicGradient) -> Self {
        Brush::Conic(gradient)
    }
}
