//! One-line summaries of recorded draw commands

use halo_core::{Brush, DrawCommand, Rect};

fn rect(r: &Rect) -> String {
    format!("[{:.1}, {:.1}, {:.1}x{:.1}]", r.x(), r.y(), r.width(), r.height())
}

fn brush(b: &Brush) -> String {
    match b {
        Brush::Solid(color) => color.to_hex_string(),
        Brush::Conic(gradient) => {
            let stops: Vec<String> = gradient
                .stops()
                .iter()
                .map(|s| format!("{}@{:.3}", s.color.to_hex_string(), s.offset))
                .collect();
            format!("conic({})", stops.join(" "))
        }
    }
}

pub fn command(command: &DrawCommand) -> String {
    match command {
        DrawCommand::PushTransform(t) => {
            let (tx, ty) = t.translation_part();
            format!(
                "push_transform rotate {:.4} rad, translate ({tx:.2}, {ty:.2})",
                t.rotation_angle()
            )
        }
        DrawCommand::PopTransform => "pop_transform".to_string(),
        DrawCommand::PushClip(shape) => format!(
            "push_clip stroked-path {} width {:.1}",
            rect(&shape.bounds()),
            shape.stroke.width
        ),
        DrawCommand::PopClip => "pop_clip".to_string(),
        DrawCommand::PushOpacity(o) => format!("push_opacity {o:.2}"),
        DrawCommand::PopOpacity => "pop_opacity".to_string(),
        DrawCommand::PushLayer(config) => match &config.shadow {
            Some(shadow) => format!(
                "push_layer drop_shadow ({:.1}, {:.1}) blur {:.1} {}",
                shadow.offset_x,
                shadow.offset_y,
                shadow.blur,
                shadow.color.to_hex_string()
            ),
            None => "push_layer".to_string(),
        },
        DrawCommand::PopLayer => "pop_layer".to_string(),
        DrawCommand::FillRect { rect: r, brush: b } => {
            format!("fill_rect {} {}", rect(r), brush(b))
        }
        DrawCommand::StrokePath {
            path,
            stroke,
            brush: b,
        } => format!(
            "stroke_path {} width {:.1} {}",
            rect(&path.bounds()),
            stroke.width,
            brush(b)
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use halo_core::{ClipShape, Color, LayerConfig, Path, Point, Stroke, Transform};
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_describe_rotation() {
        let t = Transform::rotation_about(FRAC_PI_2, Point::new(100.0, 100.0));
        let text = command(&DrawCommand::PushTransform(t));
        assert_eq!(
            text,
            "push_transform rotate 1.5708 rad, translate (200.00, 0.00)"
        );
    }

    #[test]
    fn test_describe_layer() {
        let config = LayerConfig::new().drop_shadow(0.0, 0.0, 18.0, Color::RED);
        assert_eq!(
            command(&DrawCommand::PushLayer(config)),
            "push_layer drop_shadow (0.0, 0.0) blur 18.0 #FF0000"
        );
        assert_eq!(
            command(&DrawCommand::PushLayer(LayerConfig::new())),
            "push_layer"
        );
    }

    #[test]
    fn test_describe_clip_reports_mask_bounds() {
        let path = Path::rounded_rect(Rect::new(10.0, 10.0, 80.0, 60.0), 8.0);
        let clip = ClipShape::stroked(path, Stroke::rounded(4.0));
        assert_eq!(
            command(&DrawCommand::PushClip(clip)),
            "push_clip stroked-path [8.0, 8.0, 84.0x64.0] width 4.0"
        );
    }
}
