use crate::error::{OperationError, Result};
use crate::geometry::{Outline, Shape};

/// Where the nominal rectangle sits relative to the stroked ring.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrokePlacement {
    /// Stroke straddles the nominal edges: outer boundary expanded outward by
    /// `width`, hole inset inward by `width`.
    Inset,
    /// Stroke lies entirely outside: outer boundary expanded outward by
    /// `width`, hole exactly the nominal rectangle.
    Outset,
}

/// Builds a rectangular ring — an outer boundary with an interior hole — used
/// to render a rectangle with visible stroke thickness.
///
/// For [`StrokePlacement::Inset`], `width >= min(w, h) / 2` collapses the hole
/// and yields self-intersecting geometry; staying below that bound is the
/// caller's contract.
#[derive(Debug, Clone)]
pub struct LinedRectangle {
    x: f64,
    y: f64,
    w: f64,
    h: f64,
    width: f64,
    placement: StrokePlacement,
}

impl LinedRectangle {
    /// Creates a new lined-rectangle operation.
    #[must_use]
    pub fn new(x: f64, y: f64, w: f64, h: f64, width: f64, placement: StrokePlacement) -> Self {
        Self {
            x,
            y,
            w,
            h,
            width,
            placement,
        }
    }

    /// Executes the operation, producing the ring shape.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive.
    pub fn execute(&self) -> Result<Shape> {
        if self.width <= 0.0 {
            return Err(OperationError::InvalidInput(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }

        let (x, y, w, h, t) = (self.x, self.y, self.w, self.h, self.width);

        let mut outer = Outline::new();
        outer
            .move_to(x - t, y - t)
            .line_to(x + w + t, y - t)
            .line_to(x + w + t, y + h + t)
            .line_to(x - t, y + h + t);

        let mut hole = Outline::new();
        match self.placement {
            StrokePlacement::Inset => {
                hole.move_to(x + t, y + t)
                    .line_to(x + w - t, y + t)
                    .line_to(x + w - t, y + h - t)
                    .line_to(x + t, y + h - t);
            }
            StrokePlacement::Outset => {
                hole.move_to(x, y)
                    .line_to(x + w, y)
                    .line_to(x + w, y + h)
                    .line_to(x, y + h);
            }
        }

        let mut shape = Shape::from_outline(outer);
        shape.add_hole(hole);
        Ok(shape)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::polygon_2d::Aabb2;
    use crate::math::TOLERANCE;

    fn outline_bounds(outline: &crate::geometry::Outline) -> Aabb2 {
        Aabb2::from_points(&outline.flatten(0.01)).unwrap()
    }

    #[test]
    fn inset_hole_is_strictly_contained() {
        let shape = LinedRectangle::new(0.0, 0.0, 10.0, 6.0, 1.0, StrokePlacement::Inset)
            .execute()
            .unwrap();
        let outer = outline_bounds(shape.outer());
        let hole = outline_bounds(&shape.holes()[0]);
        assert!(outer.strictly_contains(&hole));

        // Every hole vertex lies inside the outer polygon.
        let outer_loop = shape.outer().flatten(0.01);
        for corner in shape.holes()[0].flatten(0.01) {
            assert!(crate::math::polygon_2d::contains_point(&outer_loop, &corner));
        }
    }

    #[test]
    fn inset_hole_contained_across_width_range() {
        // Any positive width below min(w, h) / 2 keeps the hole inside.
        for width in [0.01, 0.5, 1.0, 2.0, 2.9] {
            let shape = LinedRectangle::new(-3.0, 2.0, 8.0, 6.0, width, StrokePlacement::Inset)
                .execute()
                .unwrap();
            let outer = outline_bounds(shape.outer());
            let hole = outline_bounds(&shape.holes()[0]);
            assert!(outer.strictly_contains(&hole), "width {width}");
        }
    }

    #[test]
    fn outset_hole_matches_nominal_rectangle() {
        let shape = LinedRectangle::new(1.0, 2.0, 4.0, 3.0, 0.5, StrokePlacement::Outset)
            .execute()
            .unwrap();
        let hole = outline_bounds(&shape.holes()[0]);
        assert!((hole.min.x - 1.0).abs() < TOLERANCE);
        assert!((hole.min.y - 2.0).abs() < TOLERANCE);
        assert!((hole.max.x - 5.0).abs() < TOLERANCE);
        assert!((hole.max.y - 5.0).abs() < TOLERANCE);
    }

    #[test]
    fn outer_boundary_expanded_by_width() {
        let shape = LinedRectangle::new(0.0, 0.0, 4.0, 3.0, 0.25, StrokePlacement::Outset)
            .execute()
            .unwrap();
        let outer = outline_bounds(shape.outer());
        assert!((outer.min.x + 0.25).abs() < TOLERANCE);
        assert!((outer.max.x - 4.25).abs() < TOLERANCE);
        assert!((outer.max.y - 3.25).abs() < TOLERANCE);
    }

    #[test]
    fn non_positive_width_fails() {
        assert!(LinedRectangle::new(0.0, 0.0, 4.0, 3.0, 0.0, StrokePlacement::Inset)
            .execute()
            .is_err());
        assert!(LinedRectangle::new(0.0, 0.0, 4.0, 3.0, -1.0, StrokePlacement::Outset)
            .execute()
            .is_err());
    }
}
