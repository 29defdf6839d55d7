//! Necklace anchoring
//!
//! A necklace hangs below the chin and tilts with the whole head, so its
//! pose is built from a full orthonormal basis spanning the jawline and
//! the chin direction rather than from a single landmark.

use crate::config::PlacementConfig;
use crate::landmark::{indices, LandmarkFrame};
use crate::spatial::{AnchorPose, Quaternion};

#[derive(Debug, Clone, Copy, Default)]
pub struct NecklaceRule;

impl NecklaceRule {
    /// Solve the necklace pose for one frame. Returns `None` when any
    /// required landmark is absent or the jaw landmarks are too close to
    /// span a basis.
    pub fn solve(
        &self,
        frame: &LandmarkFrame,
        placement: &PlacementConfig,
        scale: f32,
    ) -> Option<AnchorPose> {
        let chin = frame.view_point(indices::CHIN)?;
        let jaw_left = frame.view_point(indices::JAW_LEFT)?;
        let jaw_right = frame.view_point(indices::JAW_RIGHT)?;

        let mid_jaw = jaw_left.midpoint(jaw_right);
        let face_down = (chin - mid_jaw).try_normalize(placement.direction_epsilon)?;

        let mut position = chin + face_down * placement.necklace_drop;
        position.z -= placement.necklace_depth_push;

        // Basis: X along the jawline, Y up the face, Z out of the face.
        let x_axis = (jaw_right - jaw_left).try_normalize(placement.direction_epsilon)?;
        let y_axis = (mid_jaw - chin).try_normalize(placement.direction_epsilon)?;
        let z_axis = x_axis.cross(y_axis).try_normalize(placement.direction_epsilon)?;
        let rotation = Quaternion::from_basis(x_axis, y_axis, z_axis);

        let pose = AnchorPose {
            position,
            rotation,
            scale,
        };
        pose.is_finite().then_some(pose)
    }
}
