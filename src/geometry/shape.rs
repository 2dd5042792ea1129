use crate::math::Point2;

use super::Outline;

/// A planar shape: one outer boundary plus optional interior holes.
///
/// Shapes are transient values handed to the tessellation layer; they carry no
/// identity and no lifecycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Shape {
    outer: Outline,
    holes: Vec<Outline>,
}

impl Shape {
    /// Creates a shape from an outer boundary with no holes.
    #[must_use]
    pub fn from_outline(outer: Outline) -> Self {
        Self {
            outer,
            holes: Vec::new(),
        }
    }

    /// Returns the outer boundary.
    #[must_use]
    pub fn outer(&self) -> &Outline {
        &self.outer
    }

    /// Returns the interior hole boundaries.
    #[must_use]
    pub fn holes(&self) -> &[Outline] {
        &self.holes
    }

    /// Adds an interior hole boundary.
    ///
    /// The hole must lie strictly inside the outer boundary; this is the
    /// caller's contract and is not validated here.
    pub fn add_hole(&mut self, hole: Outline) -> &mut Self {
        self.holes.push(hole);
        self
    }

    /// Returns `true` if the outer boundary has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outer.is_empty()
    }

    /// Builds a square centered at `(x, y)` with half-width `half_size`.
    #[must_use]
    pub fn square_centered(x: f64, y: f64, half_size: f64) -> Self {
        let s = half_size;
        let mut outline = Outline::new();
        outline
            .move_to(x - s, y - s)
            .line_to(x - s, y + s)
            .line_to(x + s, y + s)
            .line_to(x + s, y - s);
        Self::from_outline(outline)
    }

    /// Builds an axis-aligned rectangle with corner `(x, y)` and size `(w, h)`.
    #[must_use]
    pub fn rectangle(x: f64, y: f64, w: f64, h: f64) -> Self {
        let mut outline = Outline::new();
        outline
            .move_to(x, y)
            .line_to(x + w, y)
            .line_to(x + w, y + h)
            .line_to(x, y + h);
        Self::from_outline(outline)
    }

    /// Builds a filled outline following a polyline, implicitly closed back to
    /// the first point.
    ///
    /// An empty point list yields an empty, degenerate shape rather than an
    /// error, so callers feeding viewer state straight through cannot crash on
    /// a not-yet-populated wall.
    #[must_use]
    pub fn filled_loop(points: &[Point2]) -> Self {
        let mut outline = Outline::new();
        if let Some(first) = points.first() {
            outline.move_to(first.x, first.y);
            for p in &points[1..] {
                outline.line_to(p.x, p.y);
            }
        }
        Self::from_outline(outline)
    }
}
