//! Face occlusion mask
//!
//! A depth-only mesh stretched over the face so jewelry disappears
//! behind the head instead of drawing through it. The mask writes depth
//! but never color, so it is invisible in the final image while still
//! occluding whatever renders after it.

use crate::config::OcclusionConfig;
use crate::landmark::LandmarkFrame;
use crate::spatial::Point3;

/// Landmark indices outlining the face: the face oval followed by the
/// nose bridge line, which pulls the mask surface forward over the
/// middle of the face.
pub const FACE_CONTOUR: [usize; 42] = [
    // Face oval, clockwise from the forehead
    10, 338, 297, 332, 284, 251, 389, 356, 454, 323, 361, 288, 397, 365, 379, 378, 400, 377, 152,
    148, 176, 149, 150, 136, 172, 58, 132, 93, 234, 127, 162, 21, 54, 103, 67, 109,
    // Nose bridge, top to tip
    168, 6, 197, 195, 5, 4,
];

/// Depth-only render state for the mask mesh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OcclusionRenderState {
    pub color_write: bool,
    pub depth_write: bool,
    pub depth_test: bool,
    pub double_sided: bool,
}

impl Default for OcclusionRenderState {
    fn default() -> Self {
        Self {
            color_write: false,
            depth_write: true,
            depth_test: true,
            double_sided: true,
        }
    }
}

/// Persistent occlusion mask geometry.
///
/// The index buffer is fixed for the mask's lifetime; only vertex
/// positions change per frame. An update that cannot be made in full is
/// skipped entirely, leaving the previous (stale but plausible) surface
/// in place rather than collapsing triangles to the origin.
#[derive(Debug, Clone)]
pub struct OcclusionMask {
    vertices: [Point3; FACE_CONTOUR.len()],
    indices: Vec<u32>,
    depth_scale: f32,
    primed: bool,
}

impl OcclusionMask {
    pub fn new(config: &OcclusionConfig) -> Self {
        Self {
            vertices: [Point3::ORIGIN; FACE_CONTOUR.len()],
            indices: Self::fan_indices(),
            depth_scale: config.depth_scale,
            primed: false,
        }
    }

    /// Fan triangulation with the hub at the middle of the contour
    /// list, which lands inside the face outline.
    fn fan_indices() -> Vec<u32> {
        let hub = (FACE_CONTOUR.len() / 2) as u32;
        let mut indices = Vec::with_capacity((FACE_CONTOUR.len() - 2) * 3);
        for i in 0..(FACE_CONTOUR.len() as u32 - 1) {
            if i != hub {
                indices.extend_from_slice(&[hub, i, i + 1]);
            }
        }
        indices
    }

    /// Refresh vertex positions from a landmark frame.
    ///
    /// Returns `true` when the buffer was updated. A frame missing any
    /// contour landmark leaves the buffer untouched.
    pub fn update(&mut self, frame: &LandmarkFrame) -> bool {
        if !frame.is_complete() {
            return false;
        }
        let mut next = [Point3::ORIGIN; FACE_CONTOUR.len()];
        for (slot, &idx) in next.iter_mut().zip(FACE_CONTOUR.iter()) {
            match frame.view_point(idx) {
                Some(p) => *slot = Point3::new(p.x, p.y, p.z * self.depth_scale),
                None => return false,
            }
        }
        self.vertices = next;
        self.primed = true;
        true
    }

    /// Whether the mask has received at least one full update and is
    /// safe to render
    pub fn is_primed(&self) -> bool {
        self.primed
    }

    pub fn vertices(&self) -> &[Point3] {
        &self.vertices
    }

    pub fn indices(&self) -> &[u32] {
        &self.indices
    }

    pub fn render_state(&self) -> OcclusionRenderState {
        OcclusionRenderState::default()
    }
}
