use crate::math::bezier_2d::CubicBezier;
use crate::math::{Point2, TOLERANCE};

/// A single drawing command in a planar boundary.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PathCommand {
    /// Starts the boundary at a point.
    MoveTo(Point2),
    /// Straight segment from the current point.
    LineTo(Point2),
    /// Cubic bezier from the current point through two handles.
    BezierCurveTo {
        handle1: Point2,
        handle2: Point2,
        end: Point2,
    },
}

/// An ordered sequence of drawing commands describing a planar boundary.
///
/// Boundaries close implicitly: the last point connects back to the first.
/// An outline with no commands is a valid, degenerate (empty) boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Outline {
    commands: Vec<PathCommand>,
}

impl Outline {
    /// Creates an empty outline.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts the boundary at `(x, y)`.
    pub fn move_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::MoveTo(Point2::new(x, y)));
        self
    }

    /// Adds a straight segment to `(x, y)`.
    pub fn line_to(&mut self, x: f64, y: f64) -> &mut Self {
        self.commands.push(PathCommand::LineTo(Point2::new(x, y)));
        self
    }

    /// Adds a cubic bezier segment through two handles to an end point.
    pub fn bezier_curve_to(
        &mut self,
        handle1: Point2,
        handle2: Point2,
        end: Point2,
    ) -> &mut Self {
        self.commands.push(PathCommand::BezierCurveTo {
            handle1,
            handle2,
            end,
        });
        self
    }

    /// Returns the recorded drawing commands.
    #[must_use]
    pub fn commands(&self) -> &[PathCommand] {
        &self.commands
    }

    /// Returns `true` if the outline has no commands.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Flattens the boundary into loop vertices.
    ///
    /// Bezier segments are subdivided so the chord approximation deviates from
    /// the curve by at most `tolerance`. Consecutive coincident points are
    /// dropped, as is a trailing point that coincides with the first (the loop
    /// closure is implicit).
    #[must_use]
    pub fn flatten(&self, tolerance: f64) -> Vec<Point2> {
        let mut points: Vec<Point2> = Vec::new();
        let mut current: Option<Point2> = None;

        for command in &self.commands {
            match *command {
                PathCommand::MoveTo(p) | PathCommand::LineTo(p) => {
                    push_point(&mut points, p);
                    current = Some(p);
                }
                PathCommand::BezierCurveTo {
                    handle1,
                    handle2,
                    end,
                } => {
                    let start = current.unwrap_or(handle1);
                    let curve = CubicBezier::new(start, handle1, handle2, end);
                    let mut samples = Vec::new();
                    curve.flatten_into(&mut samples, tolerance);
                    for p in samples {
                        push_point(&mut points, p);
                    }
                    current = Some(end);
                }
            }
        }

        // Drop an explicit closing point; the loop closes implicitly.
        if points.len() > 1 {
            let first = points[0];
            let last = points[points.len() - 1];
            if (last - first).norm() < TOLERANCE {
                points.pop();
            }
        }

        points
    }
}

/// Appends `p` unless it coincides with the previous point.
fn push_point(points: &mut Vec<Point2>, p: Point2) {
    if let Some(last) = points.last() {
        if (p - last).norm() < TOLERANCE {
            return;
        }
    }
    points.push(p);
}
