//! Spatial primitives for landmark-driven jewelry anchoring
//!
//! View space is right-handed and roughly `[-1, 1]` on each axis:
//! - X: right (+) / left (-) as seen by the user in the mirrored feed
//! - Y: up (+) / down (-)
//! - Z: toward the camera (+) / away (-)

mod point3;
mod pose;
mod quaternion;
mod vector3;

pub use point3::Point3;
pub use pose::AnchorPose;
pub use quaternion::Quaternion;
pub use vector3::Vector3;
