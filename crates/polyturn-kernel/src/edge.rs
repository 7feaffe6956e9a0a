//! Directed edge derivation from an ordered vertex sequence.

use polyturn_math::{Point3, Vec3};

use crate::error::{PolygonError, Result};

/// Derive the closed loop of directed edges from an ordered vertex
/// sequence.
///
/// Edge `i` runs from vertex `i` to vertex `(i + 1) mod m`; the last
/// entry is the closing edge back to the start, so the result always
/// represents a closed loop. Output length equals input length.
///
/// # Errors
///
/// [`PolygonError::TooFewPoints`] if fewer than 2 vertices are given.
pub fn calculate_edges(vertices: &[Point3]) -> Result<Vec<Vec3>> {
    let m = vertices.len();
    if m < 2 {
        return Err(PolygonError::TooFewPoints(m));
    }

    let mut edges = Vec::with_capacity(m);
    for i in 0..m - 1 {
        edges.push(vertices[i + 1] - vertices[i]);
    }
    edges.push(vertices[0] - vertices[m - 1]);

    Ok(edges)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edge_alignment() {
        let vertices = vec![
            Point3::new(0.0, 0.0, 0.0),
            Point3::new(4.0, 0.0, 0.0),
            Point3::new(4.0, 3.0, 0.0),
            Point3::new(0.0, 3.0, 0.0),
        ];
        let edges = calculate_edges(&vertices).unwrap();
        assert_eq!(edges.len(), 4);
        for i in 0..4 {
            let j = (i + 1) % 4;
            let expected = vertices[j] - vertices[i];
            assert!((edges[i] - expected).norm() < 1e-12);
        }
    }

    #[test]
    fn test_closure() {
        let vertices = vec![
            Point3::new(1.0, 2.0, 3.0),
            Point3::new(-4.0, 0.5, 1.0),
            Point3::new(2.5, -7.0, 0.0),
            Point3::new(0.0, 0.0, -2.0),
            Point3::new(9.0, 1.0, 1.0),
        ];
        let edges = calculate_edges(&vertices).unwrap();
        let sum = edges.iter().fold(Vec3::zeros(), |acc, e| acc + e);
        assert!(sum.norm() < 1e-12);
    }

    #[test]
    fn test_two_points() {
        let vertices = vec![Point3::new(0.0, 0.0, 0.0), Point3::new(1.0, 1.0, 0.0)];
        let edges = calculate_edges(&vertices).unwrap();
        assert_eq!(edges.len(), 2);
        // The closing edge is the reverse of the only forward edge.
        assert!((edges[0] + edges[1]).norm() < 1e-12);
    }

    #[test]
    fn test_too_few_points() {
        let one = vec![Point3::origin()];
        assert_eq!(
            calculate_edges(&one).unwrap_err(),
            PolygonError::TooFewPoints(1)
        );
        assert_eq!(
            calculate_edges(&[]).unwrap_err(),
            PolygonError::TooFewPoints(0)
        );
    }
}
