//! Triangle mesh geometry

use serde::{Deserialize, Serialize};

use crate::spatial::{Point3, Vector3};

/// Axis-aligned bounding box over mesh vertices
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Aabb {
    pub min: Point3,
    pub max: Point3,
}

impl Aabb {
    /// Compute the bounding box of a vertex set. Empty input yields a
    /// degenerate box at the origin.
    pub fn from_vertices(vertices: &[Point3]) -> Self {
        let mut min = Point3::new(f32::INFINITY, f32::INFINITY, f32::INFINITY);
        let mut max = Point3::new(f32::NEG_INFINITY, f32::NEG_INFINITY, f32::NEG_INFINITY);
        for v in vertices {
            min.x = min.x.min(v.x);
            min.y = min.y.min(v.y);
            min.z = min.z.min(v.z);
            max.x = max.x.max(v.x);
            max.y = max.y.max(v.y);
            max.z = max.z.max(v.z);
        }
        if vertices.is_empty() {
            return Self {
                min: Point3::ORIGIN,
                max: Point3::ORIGIN,
            };
        }
        Self { min, max }
    }

    /// Center of the box
    pub fn center(&self) -> Point3 {
        self.min.midpoint(self.max)
    }

    /// Extent along each axis
    pub fn size(&self) -> Vector3 {
        self.max - self.min
    }

    /// Largest extent across the three axes
    pub fn max_dimension(&self) -> f32 {
        let size = self.size();
        size.x.max(size.y).max(size.z)
    }
}

/// Indexed triangle mesh with per-vertex normals
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeshGeometry {
    pub vertices: Vec<Point3>,
    pub indices: Vec<u32>,
    pub normals: Vec<Vector3>,
}

impl MeshGeometry {
    pub fn new(vertices: Vec<Point3>, indices: Vec<u32>) -> Self {
        let mut mesh = Self {
            vertices,
            indices,
            normals: Vec::new(),
        };
        mesh.recompute_normals();
        mesh
    }

    /// Bounding box in the mesh's local frame
    pub fn bounds(&self) -> Aabb {
        Aabb::from_vertices(&self.vertices)
    }

    /// Uniformly scale every vertex about the local origin
    pub fn scale(&mut self, factor: f32) {
        for v in &mut self.vertices {
            v.x *= factor;
            v.y *= factor;
            v.z *= factor;
        }
    }

    /// Translate every vertex so `center` lands on the origin
    pub fn recenter(&mut self, center: Point3) {
        for v in &mut self.vertices {
            v.x -= center.x;
            v.y -= center.y;
            v.z -= center.z;
        }
    }

    /// Rebuild smooth per-vertex normals by area-weighted accumulation
    /// of face normals. Degenerate faces contribute nothing.
    pub fn recompute_normals(&mut self) {
        let mut accumulated = vec![Vector3::ZERO; self.vertices.len()];
        for tri in self.indices.chunks_exact(3) {
            let (a, b, c) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
            if a >= self.vertices.len() || b >= self.vertices.len() || c >= self.vertices.len() {
                continue;
            }
            let edge1 = self.vertices[b] - self.vertices[a];
            let edge2 = self.vertices[c] - self.vertices[a];
            let face = edge1.cross(edge2);
            accumulated[a] = accumulated[a] + face;
            accumulated[b] = accumulated[b] + face;
            accumulated[c] = accumulated[c] + face;
        }
        self.normals = accumulated
            .into_iter()
            .map(|n| n.try_normalize(1e-12).unwrap_or(Vector3::UP))
            .collect();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn quad() -> MeshGeometry {
        MeshGeometry::new(
            vec![
                Point3::new(0.0, 0.0, 0.0),
                Point3::new(2.0, 0.0, 0.0),
                Point3::new(2.0, 2.0, 0.0),
                Point3::new(0.0, 2.0, 0.0),
            ],
            vec![0, 1, 2, 0, 2, 3],
        )
    }

    #[test]
    fn test_bounds() {
        let mesh = quad();
        let bounds = mesh.bounds();
        assert_eq!(bounds.min, Point3::new(0.0, 0.0, 0.0));
        assert_eq!(bounds.max, Point3::new(2.0, 2.0, 0.0));
        assert_eq!(bounds.center(), Point3::new(1.0, 1.0, 0.0));
        assert!((bounds.max_dimension() - 2.0).abs() < 1e-6);
    }

    #[test]
    fn test_empty_bounds_degenerate_at_origin() {
        let bounds = Aabb::from_vertices(&[]);
        assert_eq!(bounds.center(), Point3::ORIGIN);
        assert_eq!(bounds.max_dimension(), 0.0);
    }

    #[test]
    fn test_normals_face_out_of_plane() {
        let mesh = quad();
        for n in &mesh.normals {
            assert!((n.z.abs() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_recenter_moves_centroid_to_origin() {
        let mut mesh = quad();
        let center = mesh.bounds().center();
        mesh.recenter(center);
        let bounds = mesh.bounds();
        assert!(bounds.center().distance(Point3::ORIGIN) < 1e-6);
    }
}
