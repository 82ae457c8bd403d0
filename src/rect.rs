use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{error::Error, point::Point, transform::Transform};

/// A mutable axis-aligned rectangle anchored at its top-left corner.
///
/// The fields are private so that the sizing rules hold no matter how a
/// rectangle is mutated: `set_to` and the edge setters never store a negative
/// width or height. Mutating methods return `&mut Self` so calls can be
/// chained.
///
/// Invalid numeric input never causes an error from the permissive methods.
/// A `set_to` with a non-finite component, or an `inflate`/`offset` with a
/// NaN delta, leaves the rectangle untouched and logs at trace level. Callers
/// that want the failure reported should use [`try_new`] / [`try_set_to`].
///
/// [`try_new`]: #method.try_new
/// [`try_set_to`]: #method.try_set_to
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    x: f64,
    y: f64,
    width: f64,
    height: f64,
}

/// How two rectangles relate edge-by-edge, as produced by
/// [`Rectangle::overlap`](struct.Rectangle.html#method.overlap).
///
/// All comparisons use the edge accessors of both rectangles: `top` means the
/// receiver's top edge is above the other's, `right` means its right edge
/// extends past the other's, and so on.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Overlap {
    pub top: bool,
    pub bottom: bool,
    pub left: bool,
    pub right: bool,
    pub contains: bool,
    pub contained: bool,
}

impl Rectangle {
    /// Creates a rectangle from a top-left corner and a size.
    ///
    /// Input is filtered the same way `set_to` filters it, so a non-finite
    /// component yields an all-zero rectangle and a negative size is dropped.
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        let mut rect = Self::default();
        rect.set_to(x, y, width, height);
        rect
    }

    /// Creates a rectangle, reporting invalid input instead of dropping it.
    pub fn try_new(x: f64, y: f64, width: f64, height: f64) -> Result<Self, Error> {
        let mut rect = Self::default();
        rect.try_set_to(x, y, width, height)?;
        Ok(rect)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn left(&self) -> f64 {
        self.x
    }

    #[inline]
    pub fn top(&self) -> f64 {
        self.y
    }

    #[inline]
    pub fn right(&self) -> f64 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> f64 {
        self.y + self.height
    }

    /// The area covered by the rectangle.
    #[inline]
    pub fn volume(&self) -> f64 {
        self.width * self.height
    }

    /// The summed length of all four sides.
    #[inline]
    pub fn perimeter(&self) -> f64 {
        2.0 * (self.width + self.height)
    }

    /// Whether the rectangle is too small to cover a full pixel on either
    /// axis. Note the threshold is `< 1`, not `<= 0`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.width < 1.0 || self.height < 1.0
    }

    /// The center of the rectangle, rounded, *relative to its own top-left
    /// corner* rather than in absolute coordinates. Callers depend on this
    /// quirk, so it stays.
    pub fn center(&self) -> Point {
        Point::new((self.width / 2.0).round(), (self.height / 2.0).round())
    }

    /// The size of the rectangle as a point of `(width, height)`.
    #[inline]
    pub fn size(&self) -> Point {
        Point::new(self.width, self.height)
    }

    #[inline]
    pub fn top_left(&self) -> Point {
        Point::new(self.x, self.y)
    }

    #[inline]
    pub fn bottom_right(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Sets all four components at once.
    ///
    /// If any component is non-finite the whole call is a no-op. A negative
    /// width or height is dropped individually while the rest of the call
    /// still applies; it is not clamped to zero.
    pub fn set_to(&mut self, x: f64, y: f64, width: f64, height: f64) -> &mut Self {
        if !(x.is_finite() && y.is_finite() && width.is_finite() && height.is_finite()) {
            log::trace!(
                "Ignoring Rectangle::set_to({}, {}, {}, {}): non-finite component",
                x,
                y,
                width,
                height
            );
            return self;
        }

        self.x = x;
        self.y = y;

        if width >= 0.0 {
            self.width = width;
        } else {
            log::trace!("Ignoring negative width {} in Rectangle::set_to", width);
        }

        if height >= 0.0 {
            self.height = height;
        } else {
            log::trace!("Ignoring negative height {} in Rectangle::set_to", height);
        }

        self
    }

    /// Like `set_to`, but invalid input produces an error and the rectangle
    /// stays untouched.
    pub fn try_set_to(
        &mut self,
        x: f64,
        y: f64,
        width: f64,
        height: f64,
    ) -> Result<&mut Self, Error> {
        check_finite("x", x)?;
        check_finite("y", y)?;
        check_finite("width", width)?;
        check_finite("height", height)?;

        if width < 0.0 {
            return Err(Error::NegativeSize {
                component: "width",
                value: width,
            });
        }

        if height < 0.0 {
            return Err(Error::NegativeSize {
                component: "height",
                value: height,
            });
        }

        self.x = x;
        self.y = y;
        self.width = width;
        self.height = height;

        Ok(self)
    }

    /// Sets every component to zero.
    pub fn set_empty(&mut self) -> &mut Self {
        self.set_to(0.0, 0.0, 0.0, 0.0)
    }

    /// Moves the left edge, keeping the right edge fixed by adjusting the
    /// width. If the move squeezes past the right edge, the width becomes 0
    /// and the left edge still lands on `value`.
    pub fn set_left(&mut self, value: f64) {
        let diff = self.x - value;

        if self.width + diff < 0.0 {
            self.width = 0.0;
        } else {
            self.width += diff;
        }

        self.x = value;
    }

    /// Moves the top edge, keeping the bottom edge fixed by adjusting the
    /// height, with the same squeeze behavior as `set_left`.
    pub fn set_top(&mut self, value: f64) {
        let diff = self.y - value;

        if self.height + diff < 0.0 {
            self.height = 0.0;
        } else {
            self.height += diff;
        }

        self.y = value;
    }

    /// Moves the right edge, keeping the left edge fixed by adjusting the
    /// width. A request left of `x` zeroes the width but does NOT move `x`.
    /// Deliberately asymmetric with `set_left`; callers rely on it.
    pub fn set_right(&mut self, value: f64) {
        if value < self.x {
            self.width = 0.0;
        } else {
            self.width = value - self.x;
        }
    }

    /// Moves the bottom edge, keeping the top edge fixed, with the same
    /// clamp-without-moving behavior as `set_right`.
    pub fn set_bottom(&mut self, value: f64) {
        if value < self.y {
            self.height = 0.0;
        } else {
            self.height = value - self.y;
        }
    }

    /// Moves the top-left corner, leaving the size alone.
    pub fn set_top_left(&mut self, value: Point) {
        self.x = value.x;
        self.y = value.y;
    }

    /// Moves the bottom-right corner by routing through `set_right` and
    /// `set_bottom`, inheriting their edge clamping.
    pub fn set_bottom_right(&mut self, value: Point) {
        self.set_right(value.x);
        self.set_bottom(value.y);
    }

    /// Whether the given coordinates fall inside the rectangle. All four
    /// edges count as inside, including the right and bottom ones; contrast
    /// with the pixel-grid rule `intersects` uses.
    pub fn contains(&self, x: f64, y: f64) -> bool {
        x >= self.x && x <= self.right() && y >= self.y && y <= self.bottom()
    }

    pub fn contains_point(&self, point: &Point) -> bool {
        self.contains(point.x, point.y)
    }

    /// Whether `other` falls entirely inside this rectangle, edges inclusive.
    pub fn contains_rect(&self, other: &Rectangle) -> bool {
        // A rectangle with more area can never fit inside this one.
        if other.volume() > self.volume() {
            return false;
        }

        other.x >= self.x
            && other.y >= self.y
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    /// Whether the two rectangles overlap under pixel-grid semantics, where a
    /// rectangle covers the columns `[x, right - 1]` and rows
    /// `[y, bottom - 1]`. Two rectangles that merely share an edge do NOT
    /// intersect, even though `contains` reports points on that edge as
    /// inside. Collision callers depend on this exact boundary rule.
    pub fn intersects(&self, other: &Rectangle) -> bool {
        if other.x > self.right() - 1.0 {
            return false;
        }

        if other.right() - 1.0 < self.x {
            return false;
        }

        if other.bottom() - 1.0 < self.y {
            return false;
        }

        if other.y > self.bottom() - 1.0 {
            return false;
        }

        true
    }

    /// The overlapping region of the two rectangles, or an all-zero
    /// rectangle when `intersects` is false.
    pub fn intersection(&self, other: &Rectangle) -> Rectangle {
        let mut output = Rectangle::default();

        if self.intersects(other) {
            output.x = self.x.max(other.x);
            output.y = self.y.max(other.y);
            output.width = self.right().min(other.right()) - output.x;
            output.height = self.bottom().min(other.bottom()) - output.y;
        }

        output
    }

    /// The smallest rectangle spanning both inputs, whether or not they
    /// overlap. The result always `contains_rect` both of them.
    pub fn union(&self, other: &Rectangle) -> Rectangle {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);

        Rectangle::new(
            x,
            y,
            self.right().max(other.right()) - x,
            self.bottom().max(other.bottom()) - y,
        )
    }

    /// Describes how this rectangle overlaps `other`, edge by edge. Every
    /// flag is false when the pixel-grid intersection of the two is empty.
    pub fn overlap(&self, other: &Rectangle) -> Overlap {
        let mut result = Overlap::default();

        if self.intersection(other).is_empty() {
            return result;
        }

        result.contains = self.contains_rect(other);
        result.contained = other.contains_rect(self);
        result.top = self.top() < other.top();
        result.bottom = self.bottom() > other.bottom();
        result.left = self.left() < other.left();
        result.right = self.right() > other.right();

        result
    }

    /// Grows the rectangle symmetrically around its center: each side moves
    /// outward by the respective delta. No-op when either delta is NaN.
    pub fn inflate(&mut self, dx: f64, dy: f64) -> &mut Self {
        if dx.is_nan() || dy.is_nan() {
            log::trace!("Ignoring Rectangle::inflate({}, {}): NaN delta", dx, dy);
            return self;
        }

        self.x -= dx;
        self.width += 2.0 * dx;

        self.y -= dy;
        self.height += 2.0 * dy;

        self
    }

    pub fn inflate_point(&mut self, point: &Point) -> &mut Self {
        self.inflate(point.x, point.y)
    }

    /// Translates the rectangle. No-op when either delta is NaN.
    pub fn offset(&mut self, dx: f64, dy: f64) -> &mut Self {
        if dx.is_nan() || dy.is_nan() {
            log::trace!("Ignoring Rectangle::offset({}, {}): NaN delta", dx, dy);
            return self;
        }

        self.x += dx;
        self.y += dy;

        self
    }

    pub fn offset_point(&mut self, point: &Point) -> &mut Self {
        self.offset(point.x, point.y)
    }

    /// Copies every component from `source` into this rectangle.
    pub fn copy_from(&mut self, source: &Rectangle) -> &mut Self {
        self.set_to(source.x, source.y, source.width, source.height)
    }

    /// Scales the rectangle around the origin and shifts it by
    /// `translation`: the top-left corner is run through a scale-then-
    /// translate transform and the size is multiplied by the scale factors.
    pub fn scale(&mut self, scale_x: f64, scale_y: f64, translation: &Point) -> &mut Self {
        let mut transform = Transform::new();
        transform.set_scale(scale_x, scale_y);
        transform.set_x(translation.x);
        transform.set_y(translation.y);

        let top_left = transform.transform_point(self.top_left());
        self.set_top_left(top_left);

        self.width *= scale_x;
        self.height *= scale_y;

        self
    }
}

fn check_finite(component: &'static str, value: f64) -> Result<(), Error> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(Error::NonFinite { component, value })
    }
}

impl fmt::Display for Rectangle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{{Rectangle (x={} y={} width={} height={} isEmpty={})}}]",
            self.x,
            self.y,
            self.width,
            self.height,
            self.is_empty()
        )
    }
}
