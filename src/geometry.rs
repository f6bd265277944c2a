//! The angles and rotation shared by every step of generating a snowflake

use crate::{float, Float, Point};

/// A 2x2 rotation matrix, stored row-major
///
/// Applying the rotation to a point `p` gives `R * p` with `p` as a column vector, so a rotation
/// built from a positive angle turns points anti-clockwise.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Rotation {
    m: [[Float; 2]; 2],
}

impl Rotation {
    /// The rotation that leaves every point where it is
    pub fn identity() -> Self {
        Rotation {
            m: [[1.0, 0.0], [0.0, 1.0]],
        }
    }

    /// Creates the rotation by `angle` radians: `[[cos θ, -sin θ], [sin θ, cos θ]]`
    pub fn from_angle(angle: Float) -> Self {
        let (sin, cos) = angle.sin_cos();
        Rotation {
            m: [[cos, -sin], [sin, cos]],
        }
    }

    /// Rotates the point about the origin
    pub fn apply(&self, p: Point) -> Point {
        Point {
            x: self.m[0][0] * p.x + self.m[0][1] * p.y,
            y: self.m[1][0] * p.x + self.m[1][1] * p.y,
        }
    }

    /// Returns the rotation equivalent to applying `self` and then `next`
    pub fn then(&self, next: &Rotation) -> Rotation {
        let (a, b) = (&next.m, &self.m);
        let mut m = [[0.0; 2]; 2];
        for (i, row) in m.iter_mut().enumerate() {
            for (j, v) in row.iter_mut().enumerate() {
                *v = a[i][0] * b[0][j] + a[i][1] * b[1][j];
            }
        }

        Rotation { m }
    }

    /// Returns the raw matrix entries
    pub fn matrix(&self) -> [[Float; 2]; 2] {
        self.m
    }
}

/// Constants derived from the symmetry order, computed once at the start of each generation
#[derive(Copy, Clone, Debug)]
pub struct GeometryConstants {
    /// The number of rays
    pub symmetry: usize,
    /// Angle between adjacent rays: `2π / symmetry`
    pub theta: Float,
    /// `theta / 2`
    pub half_theta: Float,
    /// Rotation by `theta`. Every rotated copy in the snowflake is produced by repeatedly
    /// applying this exact matrix, never by computing `k * theta` directly, so that the rays and
    /// their combs always line up.
    pub rot: Rotation,
}

impl GeometryConstants {
    pub fn new(symmetry: usize) -> Self {
        let theta = 2.0 * float::PI / symmetry as Float;

        GeometryConstants {
            symmetry,
            theta,
            half_theta: theta / 2.0,
            rot: Rotation::from_angle(theta),
        }
    }

    /// Unit vector in the direction of one wedge step from the positive X axis
    pub fn step_direction(&self) -> Point {
        let (sin, cos) = self.theta.sin_cos();
        Point { x: cos, y: sin }
    }
}
