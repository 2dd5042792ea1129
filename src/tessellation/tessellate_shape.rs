use std::collections::{HashMap, HashSet, VecDeque};

use spade::handles::FixedFaceHandle;
use spade::{
    ConstrainedDelaunayTriangulation, InsertionError, Point2 as SpadePoint2, Triangulation,
};

use crate::error::{Result, TessellationError};
use crate::geometry::Shape;
use crate::math::{Point2, Point3, Vector3};

use super::{TessellationParams, TriangleMesh};

/// Tessellates a planar shape (outer boundary plus holes) into a triangle mesh.
///
/// The mesh lies in the XY plane at Z = 0 with +Z normals; UVs are the XY
/// coordinates, matching what a viewer expects for flat decals.
pub struct TessellateShape {
    shape: Shape,
    params: TessellationParams,
}

impl TessellateShape {
    /// Creates a new shape tessellation operation.
    #[must_use]
    pub fn new(shape: Shape, params: TessellationParams) -> Self {
        Self { shape, params }
    }

    /// Executes the tessellation, returning a triangle mesh.
    ///
    /// A shape whose outer boundary flattens to fewer than 3 distinct points
    /// is degenerate and produces an empty mesh, not an error, so empty viewer
    /// state passes through the pipeline harmlessly.
    ///
    /// # Errors
    ///
    /// Returns an error if a hole boundary has fewer than 3 points or a
    /// constraint edge cannot be inserted.
    #[allow(clippy::cast_possible_truncation)]
    pub fn execute(&self) -> Result<TriangleMesh> {
        let outer = self.shape.outer().flatten(self.params.tolerance);
        if outer.len() < 3 {
            return Ok(TriangleMesh::default());
        }

        let mut hole_loops: Vec<Vec<Point2>> = Vec::with_capacity(self.shape.holes().len());
        for hole in self.shape.holes() {
            let pts = hole.flatten(self.params.tolerance);
            if pts.is_empty() {
                continue;
            }
            if pts.len() < 3 {
                return Err(TessellationError::Failed(
                    "hole boundary needs at least 3 points".to_owned(),
                )
                .into());
            }
            hole_loops.push(pts);
        }

        let mut cdt = ConstrainedDelaunayTriangulation::<SpadePoint2<f64>>::new();
        insert_constraint_loop(&mut cdt, &outer)?;
        for hole in &hole_loops {
            insert_constraint_loop(&mut cdt, hole)?;
        }

        let interior = classify_interior_faces(&cdt);

        let mut mesh = TriangleMesh::default();
        let mut vertex_map: HashMap<usize, u32> = HashMap::new();

        for face_handle in cdt.inner_faces() {
            if !interior.contains(&face_handle.fix().index()) {
                continue;
            }

            let mut tri_indices = [0u32; 3];
            for (i, vh) in face_handle.vertices().iter().enumerate() {
                let idx = vh.fix().index();
                let mesh_idx = if let Some(&existing) = vertex_map.get(&idx) {
                    existing
                } else {
                    let pos = vh.position();
                    let new_idx = mesh.vertices.len() as u32;
                    mesh.vertices.push(Point3::new(pos.x, pos.y, 0.0));
                    mesh.normals.push(Vector3::z());
                    mesh.uvs.push(Point2::new(pos.x, pos.y));
                    vertex_map.insert(idx, new_idx);
                    new_idx
                };
                tri_indices[i] = mesh_idx;
            }
            mesh.indices.push(tri_indices);
        }

        Ok(mesh)
    }
}

/// Inserts a closed polygon as constraint edges into the CDT.
fn insert_constraint_loop(
    cdt: &mut ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
    points: &[Point2],
) -> Result<()> {
    let mut handles = Vec::with_capacity(points.len());
    for pt in points {
        let h = cdt
            .insert(SpadePoint2::new(pt.x, pt.y))
            .map_err(|e: InsertionError| TessellationError::Failed(format!("CDT insert: {e}")))?;
        handles.push(h);
    }

    for i in 0..handles.len() {
        let from = handles[i];
        let to = handles[(i + 1) % handles.len()];
        if from != to {
            cdt.add_constraint(from, to);
        }
    }

    Ok(())
}

/// Classifies which inner faces of the CDT lie inside the shape.
///
/// Flood-fill from faces adjacent to the outer (infinite) face at depth 0;
/// crossing a constraint edge increments the depth. Odd depth = inside the
/// outer boundary; crossing into a hole raises the depth to even again.
fn classify_interior_faces(
    cdt: &ConstrainedDelaunayTriangulation<SpadePoint2<f64>>,
) -> HashSet<usize> {
    let mut interior = HashSet::new();
    let mut depth_map: HashMap<usize, u32> = HashMap::new();
    let mut queue: VecDeque<(FixedFaceHandle<spade::handles::InnerTag>, u32)> = VecDeque::new();

    let outer_fix = cdt.outer_face().fix();

    for edge in cdt.directed_edges() {
        if edge.face().fix() == outer_fix {
            if let Some(inner) = edge.rev().face().as_inner() {
                let idx = inner.fix().index();
                if depth_map.contains_key(&idx) {
                    continue;
                }
                let depth = u32::from(cdt.is_constraint_edge(edge.as_undirected().fix()));
                depth_map.insert(idx, depth);
                if depth % 2 == 1 {
                    interior.insert(idx);
                }
                queue.push_back((inner.fix(), depth));
            }
        }
    }

    while let Some((face_fix, depth)) = queue.pop_front() {
        for edge in cdt.face(face_fix).adjacent_edges() {
            if let Some(neighbor) = edge.rev().face().as_inner() {
                let n_idx = neighbor.fix().index();
                if depth_map.contains_key(&n_idx) {
                    continue;
                }
                let new_depth = if cdt.is_constraint_edge(edge.as_undirected().fix()) {
                    depth + 1
                } else {
                    depth
                };
                depth_map.insert(n_idx, new_depth);
                if new_depth % 2 == 1 {
                    interior.insert(n_idx);
                }
                queue.push_back((neighbor.fix(), new_depth));
            }
        }
    }

    interior
}
