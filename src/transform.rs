use crate::point::Point;

/// A scale-then-translate mapping of points.
///
/// This is the narrow slice of a full 2D transform that `Rectangle::scale`
/// needs: no rotation or skew, just per-axis scale factors applied before a
/// translation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    scale_x: f64,
    scale_y: f64,
    x: f64,
    y: f64,
}

impl Transform {
    /// Creates the identity transform.
    pub fn new() -> Self {
        Self {
            scale_x: 1.0,
            scale_y: 1.0,
            x: 0.0,
            y: 0.0,
        }
    }

    pub fn set_scale(&mut self, scale_x: f64, scale_y: f64) -> &mut Self {
        self.scale_x = scale_x;
        self.scale_y = scale_y;
        self
    }

    pub fn set_x(&mut self, value: f64) -> &mut Self {
        self.x = value;
        self
    }

    pub fn set_y(&mut self, value: f64) -> &mut Self {
        self.y = value;
        self
    }

    /// Maps a point through the transform: scale first, then translate.
    pub fn transform_point(&self, point: Point) -> Point {
        Point::new(point.x * self.scale_x + self.x, point.y * self.scale_y + self.y)
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::new()
    }
}
