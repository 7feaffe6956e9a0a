//! Shape descriptor and regular polygon generation.

use std::f64::consts::PI;

use polyturn_math::{rotate_vec_z, Point3, Vec3};
use serde::{Deserialize, Serialize};

use crate::error::{PolygonError, Result};

/// Parameters for a regular polygon centered at an origin.
///
/// A plain runtime value: the size extents, the vertex count, and the
/// center point the vertices are placed around.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ShapeDescriptor {
    /// Extent along X.
    pub width: f64,
    /// Extent along Y.
    pub height: f64,
    /// Extent along Z.
    pub depth: f64,
    /// Number of polygon vertices (must be at least 3).
    pub vertex_count: usize,
    /// Center of the polygon.
    #[serde(default = "Point3::origin")]
    pub origin: Point3,
}

impl ShapeDescriptor {
    /// Descriptor with the given extents, vertex count, and a zero origin.
    pub fn new(width: f64, height: f64, depth: f64, vertex_count: usize) -> Self {
        Self {
            width,
            height,
            depth,
            vertex_count,
            origin: Point3::origin(),
        }
    }

    /// The size extents as a vector.
    pub fn size(&self) -> Vec3 {
        Vec3::new(self.width, self.height, self.depth)
    }
}

impl Default for ShapeDescriptor {
    /// The 20 x 10 x 0 four-vertex shape.
    fn default() -> Self {
        Self::new(20.0, 10.0, 0.0, 4)
    }
}

/// Generate the vertices of a regular polygon from a descriptor.
///
/// The first vertex is placed by an even/odd convention: an even vertex
/// count offsets the origin by half the size along every axis, an odd
/// count offsets it by half the size along Y only. Both conventions are
/// axis-aligned placement heuristics and are kept as-is; changing them
/// would change the documented outputs. The remaining vertices are the
/// first vertex rotated about the Z axis through `origin` in steps of
/// `2π / vertex_count`, giving counter-clockwise winding.
///
/// # Errors
///
/// [`PolygonError::TooFewVertices`] if `vertex_count < 3`, and
/// [`PolygonError::DegenerateSize`] if the first vertex lands on the
/// origin (zero polygon radius).
pub fn generate_polygon(descriptor: &ShapeDescriptor) -> Result<Vec<Point3>> {
    let n = descriptor.vertex_count;
    if n < 3 {
        return Err(PolygonError::TooFewVertices(n));
    }

    let size = descriptor.size();
    let offset = if n % 2 == 0 {
        size * 0.5
    } else {
        Vec3::new(0.0, size.y * 0.5, 0.0)
    };
    if offset.norm() == 0.0 {
        return Err(PolygonError::DegenerateSize);
    }

    let first = descriptor.origin - offset;
    let step = 2.0 * PI / n as f64;

    let mut vertices = Vec::with_capacity(n);
    vertices.push(first);
    let radial = first - descriptor.origin;
    for i in 1..n {
        let turned = rotate_vec_z(&radial, step * i as f64);
        vertices.push(descriptor.origin + turned);
    }

    Ok(vertices)
}
