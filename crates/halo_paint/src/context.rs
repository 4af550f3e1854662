//! Paint context - a recording DrawContext that checks its own nesting
//!
//! Every push must be closed by its pop before a recording is replayed.
//! [`PaintContext`] counts open pushes so the caller can tell whether a
//! painter left the stacks balanced, and drops pops that have nothing to
//! close instead of recording them.

use halo_core::{
    Brush, ClipShape, DrawCommand, DrawContext, LayerConfig, Path, Rect, RecordingContext, Size,
    Stroke, Transform,
};

/// Scratch context for painting in isolation
pub struct PaintContext {
    recording: RecordingContext,
    /// Open pushes across all stacks
    depth: usize,
}

impl PaintContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            recording: RecordingContext::new(viewport),
            depth: 0,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        self.recording.commands()
    }

    /// True when every push has a matching pop
    pub fn is_balanced(&self) -> bool {
        self.depth == 0
    }

    /// Replay the recorded commands into another context
    pub fn replay_into(&self, ctx: &mut dyn DrawContext) {
        self.recording.replay_into(ctx);
    }

    fn opened(&mut self) {
        self.depth += 1;
    }

    /// False for a pop with nothing open
    fn closed(&mut self, stack: &str) -> bool {
        if self.depth == 0 {
            tracing::warn!("PaintContext: unbalanced pop_{} ignored", stack);
            return false;
        }
        self.depth -= 1;
        true
    }
}

impl DrawContext for PaintContext {
    fn push_transform(&mut self, transform: Transform) {
        self.opened();
        self.recording.push_transform(transform);
    }

    fn pop_transform(&mut self) {
        if self.closed("transform") {
            self.recording.pop_transform();
        }
    }

    fn push_clip(&mut self, shape: ClipShape) {
        self.opened();
        self.recording.push_clip(shape);
    }

    fn pop_clip(&mut self) {
        if self.closed("clip") {
            self.recording.pop_clip();
        }
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.opened();
        self.recording.push_opacity(opacity);
    }

    fn pop_opacity(&mut self) {
        if self.closed("opacity") {
            self.recording.pop_opacity();
        }
    }

    fn push_layer(&mut self, config: LayerConfig) {
        self.opened();
        self.recording.push_layer(config);
    }

    fn pop_layer(&mut self) {
        if self.closed("layer") {
            self.recording.pop_layer();
        }
    }

    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.recording.fill_rect(rect, brush);
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.recording.stroke_path(path, stroke, brush);
    }

    fn viewport_size(&self) -> Size {
        self.recording.viewport_size()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::Color;

    #[test]
    fn test_balanced_after_matching_pops() {
        let mut ctx = PaintContext::new(Size::new(320.0, 480.0));
        assert!(ctx.is_balanced());

        ctx.push_opacity(0.5);
        ctx.push_transform(Transform::translate(10.0, 20.0));
        assert!(!ctx.is_balanced());
        ctx.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::RED.into());
        ctx.pop_transform();
        ctx.pop_opacity();

        assert!(ctx.is_balanced());
        assert_eq!(ctx.commands().len(), 5);
    }

    #[test]
    fn test_unbalanced_pop_is_dropped() {
        let mut ctx = PaintContext::new(Size::new(100.0, 100.0));
        ctx.pop_clip();
        ctx.pop_layer();
        assert!(ctx.commands().is_empty());
        assert!(ctx.is_balanced());
    }

    #[test]
    fn test_replay_into_recording() {
        let mut ctx = PaintContext::new(Size::new(100.0, 100.0));
        ctx.push_layer(LayerConfig::new().drop_shadow(0.0, 0.0, 8.0, Color::BLUE));
        ctx.stroke_path(
            &Path::rounded_rect(Rect::new(5.0, 5.0, 90.0, 90.0), 12.0),
            &Stroke::rounded(4.0),
            Color::BLUE.into(),
        );
        ctx.pop_layer();

        let mut target = RecordingContext::new(ctx.viewport_size());
        ctx.replay_into(&mut target);
        assert_eq!(target.commands(), ctx.commands());
    }
}
