//! Signed turning angles between consecutive edges.

use std::f64::consts::PI;

use polyturn_math::{Tolerance, Vec3};

use crate::error::{PolygonError, Result};

/// Signed rotation from `v0` to `v1` about the +Z axis, in `[0, 2π)`.
///
/// Both inputs are expected to lie in a plane with +Z normal and to be
/// unit length. Uses the two-argument arctangent of the cross and dot
/// products, which avoids the quadrant ambiguity of `asin`/`acos`;
/// negative results are folded up by a full turn.
pub fn signed_angle(v0: &Vec3, v1: &Vec3) -> f64 {
    let vsin = v0.cross(v1).dot(&Vec3::z());
    let vcos = v0.dot(v1);
    let angle = vsin.atan2(vcos);
    log::debug!("signed_angle: vsin {vsin:.6} vcos {vcos:.6} raw {angle:.6}");
    if angle < 0.0 {
        angle + 2.0 * PI
    } else {
        angle
    }
}

/// Unit-length copy of an edge sequence. The input is left untouched.
///
/// # Errors
///
/// [`PolygonError::DegenerateEdge`] with the offending index if any edge
/// has zero length.
pub fn normalize_edges(edges: &[Vec3]) -> Result<Vec<Vec3>> {
    let tol = Tolerance::DEFAULT;
    let mut unit = Vec::with_capacity(edges.len());
    for (i, e) in edges.iter().enumerate() {
        let norm = e.norm();
        if tol.is_zero(norm) {
            return Err(PolygonError::DegenerateEdge(i));
        }
        unit.push(e / norm);
    }
    Ok(unit)
}

/// Per-vertex turning angles of a closed edge loop, in `[0, 2π)` radians.
///
/// The angle at vertex `i` is the signed rotation carrying the incoming
/// heading (`edge[i - 1]`, wrapping to the last edge at vertex 0) onto
/// the outgoing heading (`edge[i]`). For a convex polygon wound
/// counter-clockwise every turn equals `2π / n` and the full traversal
/// sums to one revolution.
///
/// Operates on a normalized private copy; the caller's edges are never
/// mutated.
///
/// # Errors
///
/// [`PolygonError::TooFewPoints`] for an empty input and
/// [`PolygonError::DegenerateEdge`] for a zero-length edge.
pub fn calculate_angles(edges: &[Vec3]) -> Result<Vec<f64>> {
    if edges.is_empty() {
        return Err(PolygonError::TooFewPoints(0));
    }

    let unit = normalize_edges(edges)?;
    for (i, e) in unit.iter().enumerate() {
        log::debug!("unit edge [{i}] - x: {} y: {} z: {}", e.x, e.y, e.z);
    }

    let m = unit.len();
    let mut angles = Vec::with_capacity(m);
    angles.push(signed_angle(&unit[m - 1], &unit[0]));
    for i in 1..m {
        angles.push(signed_angle(&unit[i - 1], &unit[i]));
    }

    Ok(angles)
}
