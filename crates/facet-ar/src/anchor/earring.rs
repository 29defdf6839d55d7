//! Earring anchoring
//!
//! Earrings are a paired placement: two independent poses at the jaw
//! hinge landmarks, each dropped toward the lobe. Either side can fail
//! alone when the head turns far enough to lose one side of the face.

use crate::config::PlacementConfig;
use crate::landmark::{indices, LandmarkFrame};
use crate::spatial::{AnchorPose, Point3, Quaternion};

#[derive(Debug, Clone, Copy, Default)]
pub struct EarringRule;

impl EarringRule {
    /// Solve both earring poses. Each slot is independent so a side
    /// hidden by head turn holds while the other keeps tracking.
    pub fn solve(
        &self,
        frame: &LandmarkFrame,
        placement: &PlacementConfig,
        scale: f32,
    ) -> (Option<AnchorPose>, Option<AnchorPose>) {
        let left = frame
            .view_point(indices::JAW_LEFT)
            .map(|p| Self::lobe_pose(p, placement, scale));
        let right = frame
            .view_point(indices::JAW_RIGHT)
            .map(|p| Self::lobe_pose(p, placement, scale));
        (left, right)
    }

    fn lobe_pose(jaw: Point3, placement: &PlacementConfig, scale: f32) -> AnchorPose {
        // The jaw hinge landmark sits above the lobe; drop straight down
        // in view space. Earrings hang under gravity, so no rotation.
        AnchorPose {
            position: Point3::new(jaw.x, jaw.y - placement.earring_lobe_drop, jaw.z),
            rotation: Quaternion::IDENTITY,
            scale,
        }
    }
}
