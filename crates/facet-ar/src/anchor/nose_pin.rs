//! Nose-pin anchoring
//!
//! A nose-pin sits on the nose tip, lifted slightly along the
//! tip-from-bridge direction so it rides on the surface of the nose
//! instead of intersecting it.

use crate::config::PlacementConfig;
use crate::landmark::{indices, LandmarkFrame};
use crate::spatial::{AnchorPose, Quaternion};

#[derive(Debug, Clone, Copy, Default)]
pub struct NosePinRule;

impl NosePinRule {
    pub fn solve(
        &self,
        frame: &LandmarkFrame,
        placement: &PlacementConfig,
        scale: f32,
    ) -> Option<AnchorPose> {
        let tip = frame.view_point(indices::NOSE_TIP)?;
        let bridge = frame.view_point(indices::NOSE_BRIDGE)?;

        let outward = (tip - bridge).try_normalize(placement.direction_epsilon)?;
        let position = tip + outward * placement.nose_pin_forward;

        let pose = AnchorPose {
            position,
            rotation: Quaternion::IDENTITY,
            scale,
        };
        pose.is_finite().then_some(pose)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{to_view_space, LANDMARK_COUNT};
    use crate::spatial::Point3;

    fn frame_with(points: &[(usize, Point3)]) -> LandmarkFrame {
        let mut slots = vec![None; LANDMARK_COUNT];
        for &(idx, p) in points {
            slots[idx] = Some(p);
        }
        LandmarkFrame::from_slots(slots)
    }

    #[test]
    fn test_pose_sits_past_the_tip() {
        let placement = PlacementConfig::default();
        let frame = frame_with(&[
            (indices::NOSE_TIP, Point3::new(0.5, 0.55, 0.05)),
            (indices::NOSE_BRIDGE, Point3::new(0.5, 0.45, 0.12)),
        ]);
        let pose = NosePinRule.solve(&frame, &placement, 1.0).unwrap();

        let tip = to_view_space(Point3::new(0.5, 0.55, 0.05));
        let bridge = to_view_space(Point3::new(0.5, 0.45, 0.12));
        let before = tip.distance(bridge);
        let after = pose.position.distance(bridge);
        assert!(after > before);
    }

    #[test]
    fn test_missing_bridge_skips_solve() {
        let placement = PlacementConfig::default();
        let frame = frame_with(&[(indices::NOSE_TIP, Point3::new(0.5, 0.55, 0.05))]);
        assert!(NosePinRule.solve(&frame, &placement, 1.0).is_none());
    }
}
