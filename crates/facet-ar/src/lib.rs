//! facet-ar: facial-landmark jewelry try-on engine
//!
//! This crate turns a stream of face-mesh landmark frames into smooth,
//! render-ready poses for virtual jewelry:
//! - Spatial primitives (points, vectors, quaternions, poses)
//! - Exponential pose smoothing tuned per jewelry category
//! - Asset normalization to a canonical scale and pivot
//! - Per-category anchor rules (necklace, earrings, nose-pin)
//! - A depth-only face occlusion mask
//! - A session orchestrator sequencing tracking, asset swaps, and
//!   visibility
//!
//! The engine is renderer-agnostic: it drives any scene graph that can
//! implement [`scene::SceneNode`].

pub mod anchor;
pub mod asset;
pub mod config;
pub mod error;
pub mod filter;
pub mod landmark;
pub mod occlusion;
pub mod scene;
pub mod session;
pub mod spatial;

pub use anchor::{AnchorSolution, Category, CategoryRule};
pub use asset::{JewelryAsset, Material, MeshGeometry};
pub use config::EngineConfig;
pub use error::EngineError;
pub use filter::{PoseFilter, QuaternionFilter, VectorFilter};
pub use landmark::{frame_feed, FramePublisher, FrameReceiver, LandmarkFrame, TrackerUpdate};
pub use occlusion::OcclusionMask;
pub use scene::{PoseNode, Rig, SceneNode};
pub use session::{AssetTicket, ManualAdjust, TrackingStatus, TryOnSession, Visibility};
pub use spatial::{AnchorPose, Point3, Quaternion, Vector3};
