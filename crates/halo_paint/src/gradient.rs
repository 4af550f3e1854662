//! Gradient construction

use halo_core::{Color, ConicGradient, GradientStop, Point};

/// Create a conic gradient that sweeps once around `center` through `colors`
///
/// Colors are spaced evenly and a final stop repeats the first color at 1.0,
/// so the sweep joins itself without a hard seam. A single color yields a
/// uniform gradient. Returns `None` for an empty palette.
pub fn conic_sweep(center: Point, start_angle: f32, colors: &[Color]) -> Option<ConicGradient> {
    let first = *colors.first()?;
    let count = colors.len() as f32;

    let mut stops: Vec<GradientStop> = colors
        .iter()
        .enumerate()
        .map(|(i, color)| GradientStop::new(i as f32 / count, *color))
        .collect();
    stops.push(GradientStop::new(1.0, first));

    Some(ConicGradient::new(center, start_angle, stops))
}
