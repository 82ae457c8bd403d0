use std::fmt;

use serde::{Deserialize, Serialize};

/// A 2D position.
///
/// `Rectangle` hands out corners and sizes as `Point` values and accepts them
/// back through its corner setters.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[inline]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Sets both coordinates in place, returning the point for chaining.
    #[inline]
    pub fn set_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.x = x;
        self.y = y;
        self
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{{Point (x={} y={})}}]", self.x, self.y)
    }
}
