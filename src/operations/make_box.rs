use crate::error::{OperationError, Result};
use crate::math::{Point2, Point3, Vector3};
use crate::tessellation::TriangleMesh;

/// Builds an axis-aligned rectangular prism mesh centered at a point.
///
/// Unlike the planar builders this emits a [`TriangleMesh`] directly: the box
/// is already volumetric and needs no outline/tessellation round trip.
#[derive(Debug, Clone)]
pub struct MakeBox {
    center: Point3,
    width: f64,
    height: f64,
    depth: f64,
}

impl MakeBox {
    /// Creates a new box operation with dimensions `(width, height, depth)`
    /// along the X, Y and Z axes.
    #[must_use]
    pub fn new(center: Point3, width: f64, height: f64, depth: f64) -> Self {
        Self {
            center,
            width,
            height,
            depth,
        }
    }

    /// Executes the operation, producing a 12-triangle prism mesh with
    /// per-face normals.
    ///
    /// # Errors
    ///
    /// Returns an error if any dimension is not positive.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        if self.width <= 0.0 || self.height <= 0.0 || self.depth <= 0.0 {
            return Err(OperationError::InvalidInput(
                "box dimensions must be positive".to_owned(),
            )
            .into());
        }

        let hx = self.width * 0.5;
        let hy = self.height * 0.5;
        let hz = self.depth * 0.5;

        // Each face: outward normal and 4 corners in CCW order seen from outside.
        let faces: [(Vector3, [Point3; 4]); 6] = [
            (
                Vector3::x(),
                [
                    Point3::new(hx, -hy, -hz),
                    Point3::new(hx, hy, -hz),
                    Point3::new(hx, hy, hz),
                    Point3::new(hx, -hy, hz),
                ],
            ),
            (
                -Vector3::x(),
                [
                    Point3::new(-hx, -hy, -hz),
                    Point3::new(-hx, -hy, hz),
                    Point3::new(-hx, hy, hz),
                    Point3::new(-hx, hy, -hz),
                ],
            ),
            (
                Vector3::y(),
                [
                    Point3::new(-hx, hy, -hz),
                    Point3::new(-hx, hy, hz),
                    Point3::new(hx, hy, hz),
                    Point3::new(hx, hy, -hz),
                ],
            ),
            (
                -Vector3::y(),
                [
                    Point3::new(-hx, -hy, -hz),
                    Point3::new(hx, -hy, -hz),
                    Point3::new(hx, -hy, hz),
                    Point3::new(-hx, -hy, hz),
                ],
            ),
            (
                Vector3::z(),
                [
                    Point3::new(-hx, -hy, hz),
                    Point3::new(hx, -hy, hz),
                    Point3::new(hx, hy, hz),
                    Point3::new(-hx, hy, hz),
                ],
            ),
            (
                -Vector3::z(),
                [
                    Point3::new(-hx, -hy, -hz),
                    Point3::new(-hx, hy, -hz),
                    Point3::new(hx, hy, -hz),
                    Point3::new(hx, -hy, -hz),
                ],
            ),
        ];

        let offset = self.center.coords;
        let mut mesh = TriangleMesh::default();
        mesh.vertices.reserve(24);
        mesh.normals.reserve(24);
        mesh.uvs.reserve(24);
        mesh.indices.reserve(12);

        for (normal, corners) in faces {
            let base = mesh.vertices.len() as u32;
            for (i, corner) in corners.iter().enumerate() {
                mesh.vertices.push(corner + offset);
                mesh.normals.push(normal);
                let u = f64::from(u8::from(i == 1 || i == 2));
                let v = f64::from(u8::from(i >= 2));
                mesh.uvs.push(Point2::new(u, v));
            }
            mesh.indices.push([base, base + 1, base + 2]);
            mesh.indices.push([base, base + 2, base + 3]);
        }

        Ok(mesh)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::math::TOLERANCE;

    fn mesh_bounds(mesh: &TriangleMesh) -> (Point3, Point3) {
        let mut min = mesh.vertices[0];
        let mut max = mesh.vertices[0];
        for v in &mesh.vertices {
            for i in 0..3 {
                min[i] = min[i].min(v[i]);
                max[i] = max[i].max(v[i]);
            }
        }
        (min, max)
    }

    #[test]
    fn unit_cube_occupies_unit_extents() {
        let mesh = MakeBox::new(Point3::origin(), 2.0, 2.0, 2.0)
            .execute()
            .unwrap();
        let (min, max) = mesh_bounds(&mesh);
        for i in 0..3 {
            assert!((min[i] + 1.0).abs() < TOLERANCE);
            assert!((max[i] - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn box_is_translated_to_center() {
        let mesh = MakeBox::new(Point3::new(3.0, -2.0, 1.0), 4.0, 2.0, 6.0)
            .execute()
            .unwrap();
        let (min, max) = mesh_bounds(&mesh);
        assert!((min.x - 1.0).abs() < TOLERANCE);
        assert!((max.x - 5.0).abs() < TOLERANCE);
        assert!((min.y + 3.0).abs() < TOLERANCE);
        assert!((max.y + 1.0).abs() < TOLERANCE);
        assert!((min.z + 2.0).abs() < TOLERANCE);
        assert!((max.z - 4.0).abs() < TOLERANCE);
    }

    #[test]
    fn mesh_has_12_triangles_and_per_face_normals() {
        let mesh = MakeBox::new(Point3::origin(), 1.0, 1.0, 1.0)
            .execute()
            .unwrap();
        assert_eq!(mesh.indices.len(), 12);
        assert_eq!(mesh.vertices.len(), 24);
        assert_eq!(mesh.normals.len(), 24);
        for n in &mesh.normals {
            assert!((n.norm() - 1.0).abs() < TOLERANCE);
        }
    }

    #[test]
    fn triangles_wind_outward() {
        let mesh = MakeBox::new(Point3::origin(), 2.0, 2.0, 2.0)
            .execute()
            .unwrap();
        for tri in &mesh.indices {
            let [a, b, c] = tri.map(|i| mesh.vertices[i as usize]);
            let face_normal = (b - a).cross(&(c - a));
            let stored = mesh.normals[tri[0] as usize];
            assert!(face_normal.dot(&stored) > 0.0);
        }
    }

    #[test]
    fn non_positive_dimension_fails() {
        assert!(MakeBox::new(Point3::origin(), 0.0, 1.0, 1.0).execute().is_err());
        assert!(MakeBox::new(Point3::origin(), 1.0, -1.0, 1.0).execute().is_err());
        assert!(MakeBox::new(Point3::origin(), 1.0, 1.0, 0.0).execute().is_err());
    }
}
