//! Error types for the polygon pipeline.

use thiserror::Error;

/// Errors from polygon generation and derived computations.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum PolygonError {
    /// Fewer than 3 vertices requested from the generator.
    #[error("polygon needs at least 3 vertices, got {0}")]
    TooFewVertices(usize),

    /// The descriptor places the first vertex on the origin, so the
    /// polygon has zero radius.
    #[error("degenerate shape: size places the first vertex on the origin")]
    DegenerateSize,

    /// Too few points to derive a closed edge loop.
    #[error("edge derivation needs at least 2 points, got {0}")]
    TooFewPoints(usize),

    /// A zero-length edge cannot be normalized for angle computation.
    #[error("degenerate zero-length edge at index {0}")]
    DegenerateEdge(usize),
}

/// Result type for pipeline operations.
pub type Result<T> = std::result::Result<T, PolygonError>;
