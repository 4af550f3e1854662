//! Draw Context
//!
//! Components paint through [`DrawContext`]: they push state (transforms,
//! clips, opacity, offscreen layers), issue fills and strokes, then pop the
//! state again. How that becomes pixels is up to the host.
//!
//! [`RecordingContext`] keeps the calls as [`DrawCommand`]s so they can be
//! inspected or replayed into another context.
//!
//! # Example
//!
//! ```
//! use halo_core::{Color, DrawContext, Rect, RecordingContext, Size, Transform};
//!
//! let mut ctx = RecordingContext::new(Size::new(320.0, 480.0));
//! ctx.push_transform(Transform::translate(10.0, 20.0));
//! ctx.fill_rect(Rect::new(0.0, 0.0, 100.0, 50.0), Color::BLUE.into());
//! ctx.pop_transform();
//!
//! assert_eq!(ctx.commands().len(), 3);
//! ```

use crate::color::{Brush, Color};
use crate::geometry::{Point, Rect, Size, Transform};

// ─────────────────────────────────────────────────────────────────────────────
// Strokes
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineCap {
    #[default]
    Butt,
    Round,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum LineJoin {
    #[default]
    Miter,
    Round,
}

/// Stroke style
#[derive(Clone, Debug, PartialEq)]
pub struct Stroke {
    pub width: f32,
    pub cap: LineCap,
    pub join: LineJoin,
}

impl Stroke {
    pub fn new(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::default(),
            join: LineJoin::default(),
        }
    }

    /// Round caps and joins
    pub fn rounded(width: f32) -> Self {
        Self {
            width,
            cap: LineCap::Round,
            join: LineJoin::Round,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Paths
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathCommand {
    MoveTo(Point),
    LineTo(Point),
    CubicTo {
        control1: Point,
        control2: Point,
        end: Point,
    },
    Close,
}

/// A closed vector outline
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Path {
    commands: Vec<PathCommand>,
}

/// Control-point distance for a cubic quarter circle of unit radius
const KAPPA: f32 = 0.552_284_8;

impl Path {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rounded rectangle traced clockwise from the end of the top-left corner
    ///
    /// The radius is clamped into `0..=min(width, height) / 2`. Every point,
    /// control points included, lies on or inside `rect`. An empty rect gives
    /// an empty path.
    pub fn rounded_rect(rect: Rect, radius: f32) -> Self {
        if rect.is_empty() {
            return Self::new();
        }

        let (x0, y0, x1, y1) = (rect.x(), rect.y(), rect.max_x(), rect.max_y());
        let r = radius.clamp(0.0, rect.width().min(rect.height()) / 2.0);
        // Distance from each corner to its control points
        let k = r * (1.0 - KAPPA);

        let mut path = Self::new();
        path.move_to(x0 + r, y0);
        path.line_to(x1 - r, y0);
        path.corner((x1 - k, y0), (x1, y0 + k), (x1, y0 + r), r);
        path.line_to(x1, y1 - r);
        path.corner((x1, y1 - k), (x1 - k, y1), (x1 - r, y1), r);
        path.line_to(x0 + r, y1);
        path.corner((x0 + k, y1), (x0, y1 - k), (x0, y1 - r), r);
        path.line_to(x0, y0 + r);
        path.corner((x0, y0 + k), (x0 + k, y0), (x0 + r, y0), r);
        path.commands.push(PathCommand::Close);
        path
    }

    fn move_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::MoveTo(Point::new(x, y)));
    }

    fn line_to(&mut self, x: f32, y: f32) {
        self.commands.push(PathCommand::LineTo(Point::new(x, y)));
    }

    /// Quarter-circle cubic; skipped for square corners
    fn corner(&mut self, c1: (f32, f32), c2: (f32, f32), end: (f32, f32), r: f32) {
        if r > 0.0 {
            self.commands.push(PathCommand::CubicTo {
                control1: Point::new(c1.0, c1.1),
                control2: Point::new(c2.0, c2.1),
                end: Point::new(end.0, end.1),
            });
        }
    }

    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Bounding box of every point and control point; zero for an empty path
    pub fn bounds(&self) -> Rect {
        let points = self.commands.iter().flat_map(|cmd| match *cmd {
            PathCommand::MoveTo(p) | PathCommand::LineTo(p) => vec![p],
            PathCommand::CubicTo {
                control1,
                control2,
                end,
            } => vec![control1, control2, end],
            PathCommand::Close => Vec::new(),
        });

        let mut extent: Option<(Point, Point)> = None;
        for p in points {
            extent = Some(match extent {
                None => (p, p),
                Some((lo, hi)) => (
                    Point::new(lo.x.min(p.x), lo.y.min(p.y)),
                    Point::new(hi.x.max(p.x), hi.y.max(p.y)),
                ),
            });
        }

        match extent {
            Some((lo, hi)) => Rect::new(lo.x, lo.y, hi.x - lo.x, hi.y - lo.y),
            None => Rect::ZERO,
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Clips and Layers
// ─────────────────────────────────────────────────────────────────────────────

/// Mask covering the area swept by stroking `path`
#[derive(Clone, Debug, PartialEq)]
pub struct ClipShape {
    pub path: Path,
    pub stroke: Stroke,
}

impl ClipShape {
    pub fn stroked(path: Path, stroke: Stroke) -> Self {
        Self { path, stroke }
    }

    /// Path bounds grown by half the stroke width
    pub fn bounds(&self) -> Rect {
        if self.path.is_empty() {
            return Rect::ZERO;
        }
        let half = self.stroke.width / 2.0;
        let b = self.path.bounds();
        Rect::new(
            b.x() - half,
            b.y() - half,
            b.width() + self.stroke.width,
            b.height() + self.stroke.width,
        )
    }
}

/// Shadow cast behind a layer's content
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Shadow {
    pub offset_x: f32,
    pub offset_y: f32,
    pub blur: f32,
    pub color: Color,
}

/// Offscreen layer composited back when popped
#[derive(Clone, Debug, Default, PartialEq)]
pub struct LayerConfig {
    pub shadow: Option<Shadow>,
}

impl LayerConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn drop_shadow(mut self, offset_x: f32, offset_y: f32, blur: f32, color: Color) -> Self {
        self.shadow = Some(Shadow {
            offset_x,
            offset_y,
            blur,
            color,
        });
        self
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Draw Context
// ─────────────────────────────────────────────────────────────────────────────

/// Drawing interface shared by recorders and renderers
///
/// Every `push_*` must be matched by the corresponding `pop_*`.
pub trait DrawContext {
    fn push_transform(&mut self, transform: Transform);

    fn pop_transform(&mut self);

    fn push_clip(&mut self, shape: ClipShape);

    fn pop_clip(&mut self);

    /// Multiplied with the enclosing opacity
    fn push_opacity(&mut self, opacity: f32);

    fn pop_opacity(&mut self);

    fn push_layer(&mut self, config: LayerConfig);

    fn pop_layer(&mut self);

    fn fill_rect(&mut self, rect: Rect, brush: Brush);

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush);

    fn viewport_size(&self) -> Size;
}

/// A recorded [`DrawContext`] call
#[derive(Clone, Debug, PartialEq)]
pub enum DrawCommand {
    PushTransform(Transform),
    PopTransform,
    PushClip(ClipShape),
    PopClip,
    PushOpacity(f32),
    PopOpacity,
    PushLayer(LayerConfig),
    PopLayer,
    FillRect {
        rect: Rect,
        brush: Brush,
    },
    StrokePath {
        path: Path,
        stroke: Stroke,
        brush: Brush,
    },
}

impl DrawCommand {
    /// Issue this command against `ctx`
    pub fn replay(&self, ctx: &mut dyn DrawContext) {
        match self {
            DrawCommand::PushTransform(t) => ctx.push_transform(*t),
            DrawCommand::PopTransform => ctx.pop_transform(),
            DrawCommand::PushClip(shape) => ctx.push_clip(shape.clone()),
            DrawCommand::PopClip => ctx.pop_clip(),
            DrawCommand::PushOpacity(o) => ctx.push_opacity(*o),
            DrawCommand::PopOpacity => ctx.pop_opacity(),
            DrawCommand::PushLayer(config) => ctx.push_layer(config.clone()),
            DrawCommand::PopLayer => ctx.pop_layer(),
            DrawCommand::FillRect { rect, brush } => ctx.fill_rect(*rect, brush.clone()),
            DrawCommand::StrokePath {
                path,
                stroke,
                brush,
            } => ctx.stroke_path(path, stroke, brush.clone()),
        }
    }
}

/// A draw context that records commands for later execution
#[derive(Debug, Default)]
pub struct RecordingContext {
    commands: Vec<DrawCommand>,
    viewport: Size,
}

impl RecordingContext {
    pub fn new(viewport: Size) -> Self {
        Self {
            commands: Vec::new(),
            viewport,
        }
    }

    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    pub fn replay_into(&self, ctx: &mut dyn DrawContext) {
        for command in &self.commands {
            command.replay(ctx);
        }
    }
}

impl DrawContext for RecordingContext {
    fn push_transform(&mut self, transform: Transform) {
        self.commands.push(DrawCommand::PushTransform(transform));
    }

    fn pop_transform(&mut self) {
        self.commands.push(DrawCommand::PopTransform);
    }

    fn push_clip(&mut self, shape: ClipShape) {
        self.commands.push(DrawCommand::PushClip(shape));
    }

    fn pop_clip(&mut self) {
        self.commands.push(DrawCommand::PopClip);
    }

    fn push_opacity(&mut self, opacity: f32) {
        self.commands.push(DrawCommand::PushOpacity(opacity));
    }

    fn pop_opacity(&mut self) {
        self.commands.push(DrawCommand::PopOpacity);
    }

    fn push_layer(&mut self, config: LayerConfig) {
        self.commands.push(DrawCommand::PushLayer(config));
    }

    fn pop_layer(&mut self) {
        self.commands.push(DrawCommand::PopLayer);
    }

    fn fill_rect(&mut self, rect: Rect, brush: Brush) {
        self.commands.push(DrawCommand::FillRect { rect, brush });
    }

    fn stroke_path(&mut self, path: &Path, stroke: &Stroke, brush: Brush) {
        self.commands.push(DrawCommand::StrokePath {
            path: path.clone(),
            stroke: stroke.clone(),
            brush,
        });
    }

    fn viewport_size(&self) -> Size {
        self.viewport
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rounded_rect_bounds_are_exact() {
        let rect = Rect::new(17.0, 17.0, 286.0, 446.0);
        let path = Path::rounded_rect(rect, 50.0);
        assert_eq!(path.bounds(), rect);
        // move, four edges, four corners, close
        assert_eq!(path.commands().len(), 10);
    }

    #[test]
    fn test_rounded_rect_clamps_radius() {
        let rect = Rect::new(0.0, 0.0, 40.0, 20.0);
        let path = Path::rounded_rect(rect, 100.0);
        assert_eq!(
            path.commands()[0],
            PathCommand::MoveTo(Point::new(10.0, 0.0))
        );
        assert_eq!(path.bounds(), rect);
    }

    #[test]
    fn test_square_corners_have_no_curves() {
        let path = Path::rounded_rect(Rect::new(0.0, 0.0, 10.0, 10.0), 0.0);
        assert!(!path
            .commands()
            .iter()
            .any(|c| matches!(c, PathCommand::CubicTo { .. })));
        assert_eq!(path.commands().len(), 6);
    }

    #[test]
    fn test_empty_rect_gives_empty_path() {
        assert!(Path::rounded_rect(Rect::new(5.0, 5.0, 0.0, 10.0), 4.0).is_empty());
        assert_eq!(Path::new().bounds(), Rect::ZERO);
    }

    #[test]
    fn test_stroked_clip_bounds() {
        let path = Path::rounded_rect(Rect::new(10.0, 10.0, 80.0, 60.0), 8.0);
        let clip = ClipShape::stroked(path, Stroke::new(4.0));
        assert_eq!(clip.bounds(), Rect::new(8.0, 8.0, 84.0, 64.0));
        assert_eq!(
            ClipShape::stroked(Path::new(), Stroke::new(4.0)).bounds(),
            Rect::ZERO
        );
    }

    #[test]
    fn test_replay_reproduces_recording() {
        let mut source = RecordingContext::new(Size::new(100.0, 100.0));
        source.push_layer(LayerConfig::new().drop_shadow(0.0, 0.0, 18.0, Color::RED));
        source.stroke_path(
            &Path::rounded_rect(Rect::new(5.0, 5.0, 90.0, 90.0), 10.0),
            &Stroke::rounded(4.0),
            Color::RED.into(),
        );
        source.pop_layer();

        let mut target = RecordingContext::new(Size::new(100.0, 100.0));
        source.replay_into(&mut target);
        assert_eq!(source.commands(), target.commands());
        assert_eq!(target.viewport_size(), Size::new(100.0, 100.0));
    }
}
