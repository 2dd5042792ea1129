use crate::error::{OperationError, Result};
use crate::geometry::{Outline, Shape};
use crate::math::normal_2d::scaled_segment_normal;
use crate::math::Point2;

/// Strokes a polyline into per-segment ribbon quadrilaterals.
///
/// Each consecutive point pair is offset to both sides by the segment's
/// perpendicular normal scaled to `width`, giving a quad with corners
/// `p0+n, p1+n, p1−n, p0−n`. Open strokes pair consecutive points; closed
/// strokes also wrap the last point back to the first.
#[derive(Debug, Clone)]
pub struct StrokePolyline {
    points: Vec<Point2>,
    width: f64,
    closed: bool,
}

impl StrokePolyline {
    /// Creates an open stroke (no segment from the last point to the first).
    #[must_use]
    pub fn open(points: Vec<Point2>, width: f64) -> Self {
        Self {
            points,
            width,
            closed: false,
        }
    }

    /// Creates a closed stroke (the point list is treated as a loop).
    #[must_use]
    pub fn closed_loop(points: Vec<Point2>, width: f64) -> Self {
        Self {
            points,
            width,
            closed: true,
        }
    }

    /// Executes the stroke, producing one ribbon shape per segment.
    ///
    /// An open stroke over fewer than 2 points has no segments and yields an
    /// empty list.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive, or if any segment has
    /// coincident endpoints (zero-length segment).
    pub fn execute(&self) -> Result<Vec<Shape>> {
        if self.width <= 0.0 {
            return Err(OperationError::InvalidInput(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }

        let n = self.points.len();
        let segment_count = if self.closed {
            n
        } else {
            n.saturating_sub(1)
        };

        let mut shapes = Vec::with_capacity(segment_count);
        for i in 0..segment_count {
            let p0 = self.points[i];
            let p1 = self.points[(i + 1) % n];
            shapes.push(ribbon(&p0, &p1, self.width)?);
        }
        Ok(shapes)
    }
}

/// Builds the ribbon quad for one segment.
fn ribbon(p0: &Point2, p1: &Point2, width: f64) -> Result<Shape> {
    let normal = scaled_segment_normal(p0, p1, width)?;
    let a = p0 + normal;
    let b = p1 + normal;
    let c = p1 - normal;
    let d = p0 - normal;

    let mut outline = Outline::new();
    outline
        .move_to(a.x, a.y)
        .line_to(b.x, b.y)
        .line_to(c.x, c.y)
        .line_to(d.x, d.y);
    Ok(Shape::from_outline(outline))
}
