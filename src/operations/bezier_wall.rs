use crate::error::{GeometryError, OperationError, Result};
use crate::geometry::{Outline, Shape};
use crate::math::normal_2d::scaled_segment_normal;
use crate::math::{Isometry3, Point2, Point3, Vector3, TOLERANCE};

/// Style parameters for rounded wall curves.
#[derive(Debug, Clone, Copy)]
pub struct BezierWallStyle {
    /// Fraction of the neighbour chord used for the cubic handles.
    ///
    /// `0` degenerates every curve to its straight chord; `1/6` is the
    /// Catmull-Rom conversion factor and the default.
    pub tension: f64,
}

impl BezierWallStyle {
    /// Creates a style with the given handle tension.
    #[must_use]
    pub fn new(tension: f64) -> Self {
        Self { tension }
    }
}

impl Default for BezierWallStyle {
    fn default() -> Self {
        Self { tension: 1.0 / 6.0 }
    }
}

/// Computes the four cubic control points for the wall segment from `b` to `c`.
///
/// Each wall anchor is the transform's translation dropped onto the
/// `z = bottom_z` plane along `world_z`; the interior handles are derived
/// Catmull-Rom-style from the neighbouring anchors `a` and `d`, scaled by the
/// style's tension.
///
/// # Errors
///
/// Returns an error if `world_z` has no component out of the bottom plane
/// (the anchors cannot be projected onto it).
pub fn wall_bezier_controls(
    style: &BezierWallStyle,
    a: &Isometry3,
    b: &Isometry3,
    c: &Isometry3,
    d: &Isometry3,
    world_z: &Vector3,
    bottom_z: f64,
) -> Result<[Point3; 4]> {
    let a0 = drop_to_plane(a, world_z, bottom_z)?;
    let b0 = drop_to_plane(b, world_z, bottom_z)?;
    let c0 = drop_to_plane(c, world_z, bottom_z)?;
    let d0 = drop_to_plane(d, world_z, bottom_z)?;

    let h1 = b0 + (c0 - a0) * style.tension;
    let h2 = c0 - (d0 - b0) * style.tension;
    Ok([b0, h1, h2, c0])
}

/// Projects a transform's anchor point onto the bottom plane along `world_z`.
fn drop_to_plane(transform: &Isometry3, world_z: &Vector3, bottom_z: f64) -> Result<Point3> {
    let p: Point3 = transform.translation.vector.into();
    if world_z.z.abs() < TOLERANCE {
        return Err(GeometryError::Degenerate(
            "world axis is parallel to the bottom plane".to_owned(),
        )
        .into());
    }
    let t = (bottom_z - p.z) / world_z.z;
    Ok(p + world_z * t)
}

/// Strokes the rounded boundary of a wall loop.
///
/// For each cyclic window of four wall transforms `(a, b, c, d)` the curve
/// from `b` to `c` is computed via [`wall_bezier_controls`], projected onto
/// the XY plane, and stroked at constant `width`.
#[derive(Debug, Clone)]
pub struct StrokeBezierWall {
    style: BezierWallStyle,
    walls: Vec<Isometry3>,
    world_z: Vector3,
    bottom_z: f64,
    width: f64,
}

impl StrokeBezierWall {
    /// Creates a new bezier-wall stroke operation.
    #[must_use]
    pub fn new(
        style: BezierWallStyle,
        walls: Vec<Isometry3>,
        world_z: Vector3,
        bottom_z: f64,
        width: f64,
    ) -> Self {
        Self {
            style,
            walls,
            world_z,
            bottom_z,
            width,
        }
    }

    /// Executes the stroke, producing one ribbon shape per wall segment.
    ///
    /// # Errors
    ///
    /// Returns an error if `width` is not positive, fewer than 4 wall
    /// transforms are supplied, or a curve chord degenerates to a point.
    pub fn execute(&self) -> Result<Vec<Shape>> {
        if self.width <= 0.0 {
            return Err(OperationError::InvalidInput(
                "stroke width must be positive".to_owned(),
            )
            .into());
        }
        let n = self.walls.len();
        if n < 4 {
            return Err(OperationError::InvalidInput(
                "at least 4 wall transforms are required".to_owned(),
            )
            .into());
        }

        let mut shapes = Vec::with_capacity(n);
        for i in 0..n {
            let controls = wall_bezier_controls(
                &self.style,
                &self.walls[i],
                &self.walls[(i + 1) % n],
                &self.walls[(i + 2) % n],
                &self.walls[(i + 3) % n],
                &self.world_z,
                self.bottom_z,
            )?;
            let [p0, p1, p2, p3] = controls.map(|p| Point2::new(p.x, p.y));
            shapes.push(bezier_ribbon(&p0, &p1, &p2, &p3, self.width)?);
        }
        Ok(shapes)
    }
}

/// Builds a ribbon shape stroking a cubic bezier at constant width.
///
/// The offset direction is a single normal computed from the p0–p3 chord and
/// held fixed along the whole curve; it is not a true parallel-curve offset.
fn bezier_ribbon(
    p0: &Point2,
    p1: &Point2,
    p2: &Point2,
    p3: &Point2,
    width: f64,
) -> Result<Shape> {
    let normal = scaled_segment_normal(p0, p3, width)?;

    let mut outline = Outline::new();
    let start = p0 + normal;
    outline.move_to(start.x, start.y);
    outline.bezier_curve_to(p1 + normal, p2 + normal, p3 + normal);
    let far = p3 - normal;
    outline.line_to(far.x, far.y);
    outline.bezier_curve_to(p2 - normal, p1 - normal, p0 - normal);
    Ok(Shape::from_outline(outline))
}
