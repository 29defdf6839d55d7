//! Scene graph seam
//!
//! The engine does not render; it drives whatever scene graph the host
//! application uses through the [`SceneNode`] trait. [`PoseNode`] is the
//! plain-data implementation used by tests and the demo.

use crate::spatial::AnchorPose;

/// A renderable node the engine can position
pub trait SceneNode {
    fn set_pose(&mut self, pose: AnchorPose);
    fn set_visible(&mut self, visible: bool);
}

/// The node set a session drives: a main node plus an optional pair for
/// mirrored categories. Nodes for unused slots simply never receive a
/// pose.
#[derive(Debug, Default)]
pub struct Rig<N: SceneNode> {
    pub main: N,
    pub left: N,
    pub right: N,
}

impl<N: SceneNode> Rig<N> {
    pub fn new(main: N, left: N, right: N) -> Self {
        Self { main, left, right }
    }

    pub fn set_all_visible(&mut self, visible: bool) {
        self.main.set_visible(visible);
        self.left.set_visible(visible);
        self.right.set_visible(visible);
    }
}

/// Record-keeping node: remembers the last pose and visibility it was
/// handed
#[derive(Debug, Clone, Copy, Default)]
pub struct PoseNode {
    pub pose: AnchorPose,
    pub visible: bool,
}

impl SceneNode for PoseNode {
    fn set_pose(&mut self, pose: AnchorPose) {
        self.pose = pose;
    }

    fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
