//! Points, sizes, rectangles and 2D transforms

/// 2D point
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const ZERO: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// 2D size
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Size {
    pub width: f32,
    pub height: f32,
}

impl Size {
    pub const ZERO: Size = Size::new(0.0, 0.0);

    pub const fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// True unless both dimensions are positive
    pub fn is_empty(&self) -> bool {
        !(self.width > 0.0 && self.height > 0.0)
    }
}

/// Axis-aligned rectangle in layout units
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(x: f32, y: f32, width: f32, height: f32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Rect of `size` whose center is `center`
    pub fn from_center(center: Point, size: Size) -> Self {
        Self::new(
            center.x - size.width / 2.0,
            center.y - size.height / 2.0,
            size.width,
            size.height,
        )
    }

    pub fn x(&self) -> f32 {
        self.origin.x
    }

    pub fn y(&self) -> f32 {
        self.origin.y
    }

    pub fn width(&self) -> f32 {
        self.size.width
    }

    pub fn height(&self) -> f32 {
        self.size.height
    }

    pub fn max_x(&self) -> f32 {
        self.origin.x + self.size.width
    }

    pub fn max_y(&self) -> f32 {
        self.origin.y + self.size.height
    }

    pub fn center(&self) -> Point {
        Point::new(
            self.origin.x + self.size.width / 2.0,
            self.origin.y + self.size.height / 2.0,
        )
    }

    pub fn diagonal(&self) -> f32 {
        self.size.width.hypot(self.size.height)
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Edges inclusive
    pub fn contains_rect(&self, other: &Rect) -> bool {
        other.x() >= self.x()
            && other.y() >= self.y()
            && other.max_x() <= self.max_x()
            && other.max_y() <= self.max_y()
    }

    /// Shrink every side, `dx` horizontally and `dy` vertically
    ///
    /// A dimension the inset swallows collapses to zero on its center line,
    /// so the result always lies inside `self`.
    pub fn inset(&self, dx: f32, dy: f32) -> Self {
        let dx = dx.min(self.size.width / 2.0);
        let dy = dy.min(self.size.height / 2.0);
        Self::new(
            self.origin.x + dx,
            self.origin.y + dy,
            (self.size.width - 2.0 * dx).max(0.0),
            (self.size.height - 2.0 * dy).max(0.0),
        )
    }
}

/// 2D affine transform stored as `[a, b, c, d, tx, ty]`
///
/// Maps `(x, y)` to `(a*x + c*y + tx, b*x + d*y + ty)`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub elements: [f32; 6],
}

impl Default for Transform {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Transform {
    pub const IDENTITY: Transform = Transform {
        elements: [1.0, 0.0, 0.0, 1.0, 0.0, 0.0],
    };

    pub fn translate(x: f32, y: f32) -> Self {
        Self {
            elements: [1.0, 0.0, 0.0, 1.0, x, y],
        }
    }

    /// Rotation by `angle` radians about `pivot`
    pub fn rotation_about(angle: f32, pivot: Point) -> Self {
        let (s, c) = angle.sin_cos();
        Self {
            elements: [
                c,
                s,
                -s,
                c,
                pivot.x - pivot.x * c + pivot.y * s,
                pivot.y - pivot.x * s - pivot.y * c,
            ],
        }
    }

    pub fn transform_point(&self, point: Point) -> Point {
        let [a, b, c, d, tx, ty] = self.elements;
        Point::new(
            a * point.x + c * point.y + tx,
            b * point.x + d * point.y + ty,
        )
    }

    /// Rotation component in radians
    pub fn rotation_angle(&self) -> f32 {
        self.elements[1].atan2(self.elements[0])
    }

    pub fn translation_part(&self) -> (f32, f32) {
        (self.elements[4], self.elements[5])
    }
}
