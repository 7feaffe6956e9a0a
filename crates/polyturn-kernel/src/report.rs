//! Reporting sink for pipeline output.
//!
//! The computational stages are pure; anything that wants to display
//! their output is handed the sequences through a sink injected by the
//! caller. The sink performs no validation and feeds nothing back into
//! the computation.

use polyturn_math::{Point3, Vec3};

/// Receiver for labeled output sequences.
pub trait ReportSink {
    /// Display an ordered point sequence, indexed from zero.
    fn points(&mut self, label: &str, points: &[Point3]);

    /// Display an ordered vector sequence, indexed from zero.
    fn vectors(&mut self, label: &str, vectors: &[Vec3]);

    /// Display an ordered scalar sequence.
    fn scalars(&mut self, label: &str, values: &[f64]);
}

/// Sink that discards everything. Useful in tests.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl ReportSink for NullSink {
    fn points(&mut self, _label: &str, _points: &[Point3]) {}

    fn vectors(&mut self, _label: &str, _vectors: &[Vec3]) {}

    fn scalars(&mut self, _label: &str, _values: &[f64]) {}
}
