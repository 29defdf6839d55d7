//! Landmark frames from the external face tracker
//!
//! The tracker delivers 468 index-addressed 3D points per detected face,
//! in normalized image coordinates. This module owns the frame type, the
//! handful of semantically meaningful indices the engine anchors to, the
//! conversion into mirrored view space, and the single-slot handoff cell
//! between the tracker's cadence and the render tick.

use std::sync::Arc;

use tokio::sync::watch;

use crate::spatial::Point3;

/// Number of points in a complete landmark frame
pub const LANDMARK_COUNT: usize = 468;

/// Landmark indices the anchoring rules depend on
pub mod indices {
    /// Tip of the chin
    pub const CHIN: usize = 152;
    /// Jaw point next to the left ear
    pub const JAW_LEFT: usize = 234;
    /// Jaw point next to the right ear
    pub const JAW_RIGHT: usize = 454;
    /// Tip of the nose
    pub const NOSE_TIP: usize = 4;
    /// Upper nose bridge
    pub const NOSE_BRIDGE: usize = 197;
    /// Top of the forehead
    pub const FOREHEAD: usize = 10;
}

/// Convert a landmark from normalized image space into view space.
///
/// The camera feed is shown mirrored (selfie view) while object space is
/// not, so X is flipped before centering. The result is roughly `[-1, 1]`
/// on each axis, centered on the view plane, with Y up and depth toward
/// the camera positive.
pub fn to_view_space(landmark: Point3) -> Point3 {
    let mirrored_x = 1.0 - landmark.x;
    Point3::new(
        (mirrored_x - 0.5) * 2.0,
        -(landmark.y - 0.5) * 2.0,
        -landmark.z,
    )
}

/// One frame of tracked facial landmarks.
///
/// Indices are semantically meaningful (see [`indices`]). A slot may be
/// explicitly absent when the tracker could not resolve that point; a
/// frame shorter than [`LANDMARK_COUNT`] is treated as incomplete by
/// every consumer. Frames are immutable once published and shared by
/// `Arc`.
#[derive(Debug, Clone, Default)]
pub struct LandmarkFrame {
    points: Vec<Option<Point3>>,
}

impl LandmarkFrame {
    /// Build a frame from a full point list
    pub fn from_points(points: Vec<Point3>) -> Self {
        Self {
            points: points.into_iter().map(Some).collect(),
        }
    }

    /// Build a frame where individual slots may be absent
    pub fn from_slots(points: Vec<Option<Point3>>) -> Self {
        Self { points }
    }

    /// Number of slots in the frame (absent slots included)
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// True when the frame holds no slots at all
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    /// True when the frame carries all 468 slots
    pub fn is_complete(&self) -> bool {
        self.points.len() >= LANDMARK_COUNT
    }

    /// Landmark at `index` in normalized image space, if present
    pub fn get(&self, index: usize) -> Option<Point3> {
        self.points.get(index).copied().flatten()
    }

    /// Landmark at `index` converted to view space, if present
    pub fn view_point(&self, index: usize) -> Option<Point3> {
        self.get(index).map(to_view_space)
    }
}

/// Latest word from the tracker: a face with landmarks, or no face
#[derive(Debug, Clone, Default)]
pub enum TrackerUpdate {
    /// No face detected (or nothing published yet)
    #[default]
    NoFace,
    /// Most recent landmark frame
    Face(Arc<LandmarkFrame>),
}

/// Create the single-slot frame handoff between tracker and orchestrator.
///
/// The tracker publishes at its own cadence, possibly from another
/// thread; the orchestrator reads whatever is newest each render tick.
/// There is no queue and no backpressure: a publish overwrites the slot
/// atomically, skipped frames are never observed.
pub fn frame_feed() -> (FramePublisher, FrameReceiver) {
    let (tx, rx) = watch::channel(TrackerUpdate::NoFace);
    (FramePublisher { tx }, FrameReceiver { rx })
}

/// Tracker-side handle: overwrites the shared latest-frame slot
#[derive(Debug, Clone)]
pub struct FramePublisher {
    tx: watch::Sender<TrackerUpdate>,
}

impl FramePublisher {
    /// Publish a new landmark frame, replacing whatever was there
    pub fn publish(&self, frame: LandmarkFrame) {
        let _ = self.tx.send(TrackerUpdate::Face(Arc::new(frame)));
    }

    /// Publish an explicit "no face" signal
    pub fn publish_no_face(&self) {
        let _ = self.tx.send(TrackerUpdate::NoFace);
    }
}

/// Orchestrator-side handle: reads the newest tracker update
#[derive(Debug, Clone)]
pub struct FrameReceiver {
    rx: watch::Receiver<TrackerUpdate>,
}

impl FrameReceiver {
    /// Snapshot of the latest update; never blocks
    pub fn latest(&self) -> TrackerUpdate {
        self.rx.borrow().clone()
    }
}
