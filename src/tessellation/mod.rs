mod tessellate_shape;

pub use tessellate_shape::TessellateShape;

use crate::math::{Point2, Point3, Vector3};

/// Parameters controlling tessellation quality.
#[derive(Debug, Clone, Copy)]
pub struct TessellationParams {
    /// Maximum allowed deviation between a curve and its chord approximation.
    pub tolerance: f64,
}

impl Default for TessellationParams {
    fn default() -> Self {
        Self { tolerance: 0.01 }
    }
}

/// A triangle mesh ready for rendering.
#[derive(Debug, Clone, Default)]
pub struct TriangleMesh {
    /// Vertex positions.
    pub vertices: Vec<Point3>,
    /// Vertex normals.
    pub normals: Vec<Vector3>,
    /// UV coordinates.
    pub uvs: Vec<Point2>,
    /// Triangle indices (each triple defines a triangle).
    pub indices: Vec<[u32; 3]>,
}

impl TriangleMesh {
    /// Returns `true` if the mesh has no triangles.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.indices.is_empty()
    }

    /// Appends another mesh, rebasing its triangle indices.
    ///
    /// Used to merge the per-segment shapes of stroke operations into a
    /// single renderable mesh.
    #[allow(clippy::cast_possible_truncation)]
    pub fn append(&mut self, other: TriangleMesh) {
        let base = self.vertices.len() as u32;
        self.vertices.extend(other.vertices);
        self.normals.extend(other.normals);
        self.uvs.extend(other.uvs);
        self.indices
            .extend(other.indices.into_iter().map(|t| t.map(|i| i + base)));
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn append_rebases_indices() {
        let mut a = TriangleMesh {
            vertices: vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(1.0, 0.0, 0.0),
                Point3::new(0.0, 1.0, 0.0),
            ],
            normals: vec![Vector3::z(); 3],
            uvs: vec![Point2::new(0.0, 0.0); 3],
            indices: vec![[0, 1, 2]],
        };
        let b = a.clone();
        a.append(b);
        assert_eq!(a.vertices.len(), 6);
        assert_eq!(a.indices.len(), 2);
        assert_eq!(a.indices[1], [3, 4, 5]);
    }

    #[test]
    fn default_mesh_is_empty() {
        assert!(TriangleMesh::default().is_empty());
    }
}
