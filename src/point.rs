//! Wrapper module around the `Point` type

use crate::Float;
use std::ops::*;

/// A point (or vector) in the plane of the snowflake
///
/// Before scaling, the values are in "unit geometry": each ray reaches from the origin out to a
/// distance of 1. After scaling, they're in pixels.
///
/// We treat positive X as to the right and positive Y as up. The exporters are responsible for
/// whatever flipping their output format needs.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Point {
    pub x: Float,
    pub y: Float,
}

impl Point {
    /// The origin, `(0, 0)`
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub const fn new(x: Float, y: Float) -> Self {
        Point { x, y }
    }

    /// Returns the reflection of the point across the X axis
    pub fn mirrored(self) -> Self {
        Point {
            x: self.x,
            y: -self.y,
        }
    }

    /// Returns the distance from the origin
    pub fn norm(self) -> Float {
        self.x.hypot(self.y)
    }
}

impl Add<Point> for Point {
    type Output = Self;

    fn add(self, other: Point) -> Self {
        Point {
            x: self.x + other.x,
            y: self.y + other.y,
        }
    }
}

impl Sub<Point> for Point {
    type Output = Self;

    fn sub(self, other: Point) -> Self {
        self + -1.0 * other
    }
}

impl Neg for Point {
    type Output = Self;

    fn neg(self) -> Self {
        self * -1.0
    }
}

impl Mul<Point> for Float {
    type Output = Point;

    fn mul(self, point: Point) -> Point {
        point * self
    }
}

impl Mul<Float> for Point {
    type Output = Self;

    fn mul(self, scale: Float) -> Self {
        Point {
            x: scale * self.x,
            y: scale * self.y,
        }
    }
}

impl MulAssign<Float> for Point {
    fn mul_assign(&mut self, scale: Float) {
        *self = *self * scale;
    }
}
