//! The two layers of a glow border, painted back to front
//!
//! Both layers draw the same outline from [`RenderState::stroke_path`]; they
//! differ only in treatment. The halo is a solid stroke inside a drop-shadow
//! layer. The gradient layer fills the viewport with a rotated conic sweep
//! and clips it to the stroked outline.

use crate::geometry::RenderState;
use crate::spec::GlowBorderSpec;
use halo_core::{ClipShape, DrawContext, LayerConfig, Stroke, Transform};
use halo_paint::conic_sweep;

/// Blurred single-color outline beneath the gradient
pub fn paint_halo(ctx: &mut dyn DrawContext, spec: &GlowBorderSpec, state: &RenderState) {
    if state.is_empty() {
        return;
    }
    let halo = &spec.halo;
    ctx.push_layer(LayerConfig::new().drop_shadow(
        0.0,
        0.0,
        halo.blur_radius,
        halo.shadow_color(),
    ));
    ctx.stroke_path(
        state.stroke_path(),
        &Stroke::rounded(spec.stroke_width),
        halo.stroke_color().into(),
    );
    ctx.pop_layer();
}

/// Conic sweep rotated by `angle` radians and masked to the outline
pub fn paint_gradient(
    ctx: &mut dyn DrawContext,
    spec: &GlowBorderSpec,
    state: &RenderState,
    angle: f32,
) {
    if state.is_empty() {
        return;
    }
    let stroke = Stroke::rounded(spec.stroke_width);

    // Rotating a single color changes nothing
    if let [only] = spec.colors.as_slice() {
        ctx.stroke_path(state.stroke_path(), &stroke, (*only).into());
        return;
    }

    let center = state.center();
    let Some(gradient) = conic_sweep(center, 0.0, &spec.colors) else {
        return;
    };

    ctx.push_clip(ClipShape::stroked(state.stroke_path().clone(), stroke));
    ctx.push_transform(Transform::rotation_about(angle, center));
    ctx.fill_rect(state.sweep_cover(), gradient.into());
    ctx.pop_transform();
    ctx.pop_clip();
}
