use crate::error::{GeometryError, Result};
use crate::math::{Point2, Vector2, TOLERANCE};

/// Computes the perpendicular unit normal of the segment from `p0` to `p1`.
///
/// The segment direction is rotated by 90°: for a segment running along +X the
/// normal points along +Y. The raw (unnormalized) perpendicular is
/// `(p0.y − p1.y, p1.x − p0.x)`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` if `p0` and `p1` coincide (zero-length
/// segment), instead of silently dividing by zero.
pub fn segment_normal(p0: &Point2, p1: &Point2) -> Result<Vector2> {
    let normal = Vector2::new(p0.y - p1.y, p1.x - p0.x);
    let len = normal.norm();
    if len < TOLERANCE {
        return Err(GeometryError::ZeroVector.into());
    }
    Ok(normal / len)
}

/// Computes the perpendicular normal of a segment, scaled to length `width`.
///
/// # Errors
///
/// Returns `GeometryError::ZeroVector` for a zero-length segment.
pub fn scaled_segment_normal(p0: &Point2, p1: &Point2, width: f64) -> Result<Vector2> {
    Ok(segment_normal(p0, p1)? * width)
}
