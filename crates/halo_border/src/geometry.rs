//! Stroke geometry shared by the gradient mask and the halo

use crate::spec::GlowBorderSpec;
use halo_core::{Path, Point, Rect, Size};

/// Outline of the border for `spec` inside `bounds`
///
/// The rounded rectangle sits `content_inset + stroke_width / 2` inside the
/// bounds so the full stroke width stays within them. When that inset reaches
/// half the smaller side there is nothing left to outline and the path is
/// empty.
pub fn stroke_path(spec: &GlowBorderSpec, bounds: Rect) -> Path {
    let inset = spec.path_inset();
    let min_side = bounds.width().min(bounds.height());
    // Negated so NaN insets also fall through to the empty path
    if !(inset < min_side / 2.0) {
        return Path::new();
    }
    Path::rounded_rect(bounds.inset(inset, inset), spec.corner_radius)
}

/// Geometry derived from a spec and the current viewport
///
/// Recomputed on every resize and reconfigure, otherwise immutable.
#[derive(Clone, Debug, PartialEq)]
pub struct RenderState {
    viewport_bounds: Rect,
    stroke_path: Path,
    corner_radius: f32,
}

impl RenderState {
    pub fn compute(spec: &GlowBorderSpec, viewport_bounds: Rect) -> Self {
        let stroke_path = stroke_path(spec, viewport_bounds);
        let corner_radius = if stroke_path.is_empty() {
            0.0
        } else {
            let outline = stroke_path.bounds();
            let limit = outline.width().min(outline.height()) / 2.0;
            spec.corner_radius.min(limit)
        };
        Self {
            viewport_bounds,
            stroke_path,
            corner_radius,
        }
    }

    /// State before the first resize: a zero viewport with nothing to draw
    pub fn empty() -> Self {
        Self {
            viewport_bounds: Rect::ZERO,
            stroke_path: Path::new(),
            corner_radius: 0.0,
        }
    }

    pub fn viewport_bounds(&self) -> Rect {
        self.viewport_bounds
    }

    pub fn stroke_path(&self) -> &Path {
        &self.stroke_path
    }

    /// Corner radius after clamping to the outline
    pub fn corner_radius(&self) -> f32 {
        self.corner_radius
    }

    pub fn is_empty(&self) -> bool {
        self.stroke_path.is_empty()
    }

    /// Pivot of the gradient rotation
    pub fn center(&self) -> Point {
        self.viewport_bounds.center()
    }

    /// Square centered on the viewport that still covers it at any rotation
    pub fn sweep_cover(&self) -> Rect {
        let side = self.viewport_bounds.diagonal();
        Rect::from_center(self.center(), Size::new(side, side))
    }
}

impl Default for RenderState {
    fn default() -> Self {
        Self::empty()
    }
}
