#![warn(missing_docs)]

//! Regular polygon turning-angle pipeline.
//!
//! This crate generates the vertices of a regular planar polygon from a
//! shape descriptor, derives the directed edges between consecutive
//! vertices, and computes the signed turning angle at each vertex. The
//! stages are pure functions chained one way — descriptor to vertices to
//! edges to angles — with display handled by an injected [`ReportSink`].
//!
//! # Example
//!
//! ```
//! use polyturn_kernel::{analyze, NullSink, ShapeDescriptor};
//! use std::f64::consts::PI;
//!
//! let descriptor = ShapeDescriptor::new(20.0, 10.0, 0.0, 4);
//! let report = analyze(&descriptor, &mut NullSink).unwrap();
//!
//! assert_eq!(report.vertices.len(), 4);
//! let total: f64 = report.angles.iter().sum();
//! assert!((total - 2.0 * PI).abs() < 1e-9);
//! ```

pub mod angle;
pub mod edge;
pub mod error;
pub mod report;
pub mod shape;

pub use angle::{calculate_angles, normalize_edges, signed_angle};
pub use edge::calculate_edges;
pub use error::{PolygonError, Result};
pub use report::{NullSink, ReportSink};
pub use shape::{generate_polygon, ShapeDescriptor};

use polyturn_math::{Point3, Vec3};

/// Output of one pipeline run.
#[derive(Debug, Clone)]
pub struct PolygonReport {
    /// Polygon vertices in traversal order.
    pub vertices: Vec<Point3>,
    /// Directed edges; edge `i` runs from vertex `i` to the next.
    pub edges: Vec<Vec3>,
    /// Turning angle at each vertex, radians in `[0, 2π)`.
    pub angles: Vec<f64>,
}

/// Run the full pipeline for one descriptor.
///
/// Each stage's output is handed to `sink` as soon as it is computed:
/// vertices, then edges, then angles converted to degrees for display.
/// The returned report keeps the angles in radians.
pub fn analyze(descriptor: &ShapeDescriptor, sink: &mut dyn ReportSink) -> Result<PolygonReport> {
    let vertices = generate_polygon(descriptor)?;
    sink.points("vertices", &vertices);

    let edges = calculate_edges(&vertices)?;
    sink.vectors("edges", &edges);

    let angles = calculate_angles(&edges)?;
    let degrees: Vec<f64> = angles.iter().map(|a| a.to_degrees()).collect();
    sink.scalars("angles (degrees)", &degrees);

    Ok(PolygonReport {
        vertices,
        edges,
        angles,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Sink that records the labels it was handed, in order.
    #[derive(Default)]
    struct RecordingSink {
        labels: Vec<String>,
        scalar_values: Vec<f64>,
    }

    impl ReportSink for RecordingSink {
        fn points(&mut self, label: &str, _points: &[Point3]) {
            self.labels.push(label.to_string());
        }

        fn vectors(&mut self, label: &str, _vectors: &[Vec3]) {
            self.labels.push(label.to_string());
        }

        fn scalars(&mut self, label: &str, values: &[f64]) {
            self.labels.push(label.to_string());
            self.scalar_values.extend_from_slice(values);
        }
    }

    #[test]
    fn test_analyze_square() {
        let report = analyze(&ShapeDescriptor::default(), &mut NullSink).unwrap();
        assert_eq!(report.vertices.len(), 4);
        assert_eq!(report.edges.len(), 4);
        assert_eq!(report.angles.len(), 4);
        let closing = report.edges.iter().fold(Vec3::zeros(), |acc, e| acc + e);
        assert!(closing.norm() < 1e-9);
    }

    #[test]
    fn test_analyze_reports_in_program_order() {
        let mut sink = RecordingSink::default();
        analyze(&ShapeDescriptor::default(), &mut sink).unwrap();
        assert_eq!(sink.labels, ["vertices", "edges", "angles (degrees)"]);
        // Degrees at the display boundary: four right-angle turns.
        for v in &sink.scalar_values {
            assert!((v - 90.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_analyze_rejects_bad_descriptor() {
        let err = analyze(&ShapeDescriptor::new(1.0, 1.0, 0.0, 1), &mut NullSink).unwrap_err();
        assert_eq!(err, PolygonError::TooFewVertices(1));
    }
}
