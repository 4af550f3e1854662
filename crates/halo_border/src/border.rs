//! The glow border component
//!
//! Owns a validated [`GlowBorderSpec`], the [`RenderState`] for the current
//! viewport, and the sweep rotation registered with the host scheduler.

use crate::error::Result;
use crate::geometry::RenderState;
use crate::layers::{paint_gradient, paint_halo};
use crate::spec::GlowBorderSpec;
use halo_animation::{AnimatedLoop, SchedulerHandle};
use halo_core::{DrawContext, Rect};
use halo_paint::PaintContext;
use std::f32::consts::TAU;
use std::panic::{self, AssertUnwindSafe};

/// Animated conic-gradient outline with a blurred halo
///
/// # Example
///
/// ```
/// use halo_animation::AnimationScheduler;
/// use halo_border::{GlowBorder, GlowBorderSpec};
/// use halo_core::{Rect, RecordingContext, Size};
///
/// let scheduler = AnimationScheduler::new();
/// let mut border = GlowBorder::new(GlowBorderSpec::default(), scheduler.handle()).unwrap();
///
/// border.resize(Rect::new(0.0, 0.0, 390.0, 844.0));
/// border.start_animating();
/// scheduler.tick_by(16.0);
///
/// let mut ctx = RecordingContext::new(Size::new(390.0, 844.0));
/// border.paint(&mut ctx);
/// assert!(!ctx.commands().is_empty());
///
/// border.stop_animating();
/// assert_eq!(scheduler.loop_count(), 0);
/// ```
pub struct GlowBorder {
    spec: GlowBorderSpec,
    state: RenderState,
    rotation: AnimatedLoop,
}

impl GlowBorder {
    pub fn new(spec: GlowBorderSpec, scheduler: SchedulerHandle) -> Result<Self> {
        spec.validate()?;
        let rotation = AnimatedLoop::new(scheduler, 0.0, TAU, spec.rotation_period_ms());
        Ok(Self {
            spec,
            state: RenderState::empty(),
            rotation,
        })
    }

    /// Replace the configuration
    ///
    /// An invalid spec is rejected and the current one kept. The outline is
    /// recomputed against the last known bounds. A running rotation keeps
    /// going and keeps its phase when the period changes.
    pub fn configure(&mut self, spec: GlowBorderSpec) -> Result<()> {
        spec.validate()?;
        if spec.rotation_period != self.spec.rotation_period {
            self.rotation.set_duration(spec.rotation_period_ms());
        }
        self.state = RenderState::compute(&spec, self.state.viewport_bounds());
        self.spec = spec;
        tracing::debug!("GlowBorder: reconfigured");
        Ok(())
    }

    /// Recompute the outline for new viewport bounds
    ///
    /// Leaves the rotation untouched.
    pub fn resize(&mut self, bounds: Rect) {
        if bounds == self.state.viewport_bounds() {
            return;
        }
        self.state = RenderState::compute(&self.spec, bounds);
        if self.state.is_empty() {
            tracing::debug!(
                "GlowBorder: {}x{} leaves no room for the outline",
                bounds.width(),
                bounds.height()
            );
        }
    }

    /// Register the infinite sweep rotation; no-op when already running
    pub fn start_animating(&mut self) {
        if self.rotation.is_running() {
            return;
        }
        if self.rotation.start() {
            tracing::debug!(
                "GlowBorder: rotation started ({}s per turn)",
                self.spec.rotation_period
            );
        } else {
            tracing::warn!("GlowBorder: scheduler gone, rotation not started");
        }
    }

    /// Unregister the rotation; the sweep rests at angle 0
    pub fn stop_animating(&mut self) {
        if self.rotation.stop() {
            tracing::debug!("GlowBorder: rotation stopped");
        }
    }

    /// Composite the halo, then the gradient, into `ctx`
    ///
    /// Commands are recorded into a scratch context first and only replayed
    /// once recording completed cleanly. A fault while recording drops the
    /// decoration for this frame and leaves `ctx` untouched.
    pub fn paint(&self, ctx: &mut dyn DrawContext) {
        if self.state.is_empty() {
            return;
        }
        let angle = self.angle();
        paint_isolated(ctx, |scratch| {
            scratch.push_opacity(self.spec.opacity);
            paint_halo(scratch, &self.spec, &self.state);
            paint_gradient(scratch, &self.spec, &self.state, angle);
            scratch.pop_opacity();
        });
    }

    /// Current sweep rotation in radians
    pub fn angle(&self) -> f32 {
        self.rotation.value()
    }

    pub fn is_animating(&self) -> bool {
        self.rotation.is_running()
    }

    pub fn render_state(&self) -> &RenderState {
        &self.state
    }

    pub fn spec(&self) -> &GlowBorderSpec {
        &self.spec
    }
}

impl std::fmt::Debug for GlowBorder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("GlowBorder")
            .field("spec", &self.spec)
            .field("state", &self.state)
            .field("animating", &self.is_animating())
            .finish()
    }
}

/// Record with `record` into a scratch context and replay into `ctx`
///
/// Returns false, with nothing replayed, if recording panicked or left the
/// state stacks unbalanced.
pub(crate) fn paint_isolated<F>(ctx: &mut dyn DrawContext, record: F) -> bool
where
    F: FnOnce(&mut PaintContext),
{
    let mut scratch = PaintContext::new(ctx.viewport_size());
    let outcome = panic::catch_unwind(AssertUnwindSafe(|| record(&mut scratch)));

    match outcome {
        Ok(()) if scratch.is_balanced() => {
            scratch.replay_into(ctx);
            true
        }
        Ok(()) => {
            tracing::warn!("GlowBorder: unbalanced paint discarded");
            false
        }
        Err(_) => {
            tracing::warn!("GlowBorder: paint panicked, skipping decoration this frame");
            false
        }
    }
}
