//! Wrapper module for [`Polygon`]

use crate::geometry::Rotation;
use crate::{Float, Point};

/// A closed contour, given by its vertices in order
///
/// The order of the vertices matters -- by convention they run clockwise. The last vertex is
/// implicitly joined back to the first.
#[derive(Clone, Debug, PartialEq)]
pub struct Polygon {
    vertices: Vec<Point>,
}

impl Polygon {
    pub fn new(vertices: Vec<Point>) -> Self {
        Polygon { vertices }
    }

    pub fn vertices(&self) -> &[Point] {
        &self.vertices
    }

    pub fn len(&self) -> usize {
        self.vertices.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Returns a copy of the polygon, rotated about the origin
    pub fn rotated(&self, rot: &Rotation) -> Self {
        Polygon {
            vertices: self.vertices.iter().map(|&v| rot.apply(v)).collect(),
        }
    }

    /// Returns a copy of the polygon, reflected across the X axis
    ///
    /// Vertex order is preserved, which means that the mirrored contour runs the opposite way
    /// around.
    pub fn mirrored(&self) -> Self {
        Polygon {
            vertices: self.vertices.iter().map(|v| v.mirrored()).collect(),
        }
    }

    /// Scales every vertex by `factor`, in place
    pub fn scale(&mut self, factor: Float) {
        self.vertices.iter_mut().for_each(|v| *v *= factor);
    }
}
