//! The screen abstraction shared by every view model

use halo_border::GlowBorder;
use halo_core::{DrawContext, Rect};
use halo_platform::{Feedback, HapticEngine, ScreenEvent};

/// A full-screen view model driven by host events
pub trait Screen {
    fn title(&self) -> &str;

    /// React to a lifecycle or layout signal
    fn handle_event(&mut self, event: ScreenEvent);

    /// Paint the screen's decoration
    fn paint(&self, ctx: &mut dyn DrawContext);

    /// The screen's glow border
    fn glow(&self) -> &GlowBorder;
}

/// Start, stop or resize `glow` in step with its screen
pub(crate) fn drive_glow(glow: &mut GlowBorder, event: ScreenEvent) {
    match event {
        ScreenEvent::DidAppear => glow.start_animating(),
        ScreenEvent::WillDisappear => glow.stop_animating(),
        ScreenEvent::Resized { width, height } => {
            glow.resize(Rect::new(0.0, 0.0, width.max(0.0), height.max(0.0)))
        }
    }
}

/// Play `feedback`, logging and absorbing failures
pub(crate) fn play(engine: &dyn HapticEngine, feedback: Feedback) {
    if let Err(err) = engine.trigger(feedback) {
        tracing::warn!("haptics: {} failed: {}", feedback, err);
    }
}
