//! Anchor pose: the per-node output of one solve+filter cycle

use super::{Point3, Quaternion};

/// Position, orientation, and uniform scale for one jewelry node.
///
/// This is plain data; a thin adapter pushes it onto whatever scene-graph
/// abstraction the host rendering engine provides.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnchorPose {
    pub position: Point3,
    pub rotation: Quaternion,
    pub scale: f32,
}

impl AnchorPose {
    /// Pose at the origin with identity rotation and unit scale
    pub fn identity() -> Self {
        Self {
            position: Point3::ORIGIN,
            rotation: Quaternion::IDENTITY,
            scale: 1.0,
        }
    }

    /// True when position, rotation, and scale are all finite
    pub fn is_finite(&self) -> bool {
        self.position.is_finite() && self.rotation.is_finite() && self.scale.is_finite()
    }

    /// Copy of this pose with a different scale
    pub fn with_scale(mut self, scale: f32) -> Self {
        self.scale = scale;
        self
    }
}

impl Default for AnchorPose {
    fn default() -> Self {
        Self::identity()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identity_is_finite() {
        assert!(AnchorPose::identity().is_finite());
    }

    #[test]
    fn test_nan_position_detected() {
        let mut pose = AnchorPose::identity();
        pose.position.x = f32::NAN;
        assert!(!pose.is_finite());
    }
}
