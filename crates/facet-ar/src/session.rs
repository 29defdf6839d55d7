//! Try-on session orchestration
//!
//! One session owns the per-frame pipeline: read the newest tracker
//! update, solve the active category's anchor rule, smooth the result,
//! and push poses onto the host's scene nodes. It also sequences asset
//! swaps so a slow download can never install over a newer selection.

use std::sync::Arc;

use crate::anchor::CategoryRule;
use crate::asset::JewelryAsset;
use crate::config::EngineConfig;
use crate::filter::PoseFilter;
use crate::landmark::{FrameReceiver, LandmarkFrame, TrackerUpdate};
use crate::occlusion::OcclusionMask;
use crate::scene::{Rig, SceneNode};
use crate::spatial::{AnchorPose, Quaternion, Vector3};

/// What the session saw this tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrackingStatus {
    /// No face in the latest tracker update; poses are holding
    NoFace,
    /// Face tracked, poses updated
    Tracking,
}

/// Jewelry visibility lifecycle.
///
/// An installed asset spends one tracked tick in `Priming` at zero
/// scale, letting the host upload geometry and warm its pipeline before
/// anything is visibly drawn. That removes the one-frame pop at the
/// wrong position that a direct Hidden-to-Visible jump shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Hidden,
    Priming,
    Visible,
}

/// User-driven adjustments layered onto solved poses before filtering
#[derive(Debug, Clone, Copy)]
pub struct ManualAdjust {
    /// Multiplies the asset's base scale
    pub scale_multiplier: f32,
    /// Offset in view space
    pub position_offset: Vector3,
    /// Extra yaw, radians
    pub yaw_offset: f32,
    /// Extra roll, radians
    pub roll_offset: f32,
}

impl Default for ManualAdjust {
    fn default() -> Self {
        Self {
            scale_multiplier: 1.0,
            position_offset: Vector3::ZERO,
            yaw_offset: 0.0,
            roll_offset: 0.0,
        }
    }
}

impl ManualAdjust {
    fn apply(&self, pose: AnchorPose) -> AnchorPose {
        AnchorPose {
            position: pose.position + self.position_offset,
            rotation: pose.rotation * Quaternion::from_euler(self.yaw_offset, 0.0, self.roll_offset),
            scale: pose.scale,
        }
    }
}

/// Token tying an in-flight asset load to the selection that started
/// it. Installing with a stale ticket is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AssetTicket {
    version: u64,
}

struct SlotFilters {
    main: PoseFilter,
    left: PoseFilter,
    right: PoseFilter,
}

impl SlotFilters {
    fn new(alpha: f32) -> Self {
        Self {
            main: PoseFilter::new(alpha),
            left: PoseFilter::new(alpha),
            right: PoseFilter::new(alpha),
        }
    }
}

/// A live try-on session
pub struct TryOnSession {
    config: EngineConfig,
    frames: FrameReceiver,
    asset: Option<JewelryAsset>,
    rule: Option<CategoryRule>,
    filters: SlotFilters,
    adjust: ManualAdjust,
    visibility: Visibility,
    version: u64,
    occlusion: OcclusionMask,
}

impl TryOnSession {
    pub fn new(config: EngineConfig, frames: FrameReceiver) -> Self {
        let occlusion = OcclusionMask::new(&config.occlusion);
        Self {
            config,
            frames,
            asset: None,
            rule: None,
            filters: SlotFilters::new(1.0),
            adjust: ManualAdjust::default(),
            visibility: Visibility::Hidden,
            version: 0,
            occlusion,
        }
    }

    /// Begin an asset swap. The current jewelry hides immediately and a
    /// ticket is issued for the load; any ticket from an earlier call
    /// becomes stale.
    pub fn request_asset(&mut self, source: &str) -> AssetTicket {
        self.version += 1;
        self.asset = None;
        self.rule = None;
        self.set_visibility(Visibility::Hidden);
        tracing::info!(%source, version = self.version, "asset load requested");
        AssetTicket {
            version: self.version,
        }
    }

    /// Install a loaded asset. Returns `false` (and changes nothing)
    /// when the ticket no longer matches the latest request.
    pub fn install_asset(&mut self, ticket: AssetTicket, asset: JewelryAsset) -> bool {
        if ticket.version != self.version {
            tracing::debug!(
                stale = ticket.version,
                current = self.version,
                source = %asset.source,
                "discarding stale asset load"
            );
            return false;
        }
        tracing::info!(source = %asset.source, category = %asset.category, "asset installed");
        self.rule = Some(CategoryRule::for_category(asset.category));
        self.filters = SlotFilters::new(self.config.alpha_for(asset.category));
        self.asset = Some(asset);
        self.set_visibility(Visibility::Hidden);
        true
    }

    /// Record a failed load. The session stays hidden; a stale failure
    /// is ignored.
    pub fn asset_failed(&mut self, ticket: AssetTicket, source: &str, reason: &str) {
        if ticket.version != self.version {
            return;
        }
        tracing::warn!(%source, %reason, "asset load failed, staying hidden");
        self.asset = None;
        self.rule = None;
        self.set_visibility(Visibility::Hidden);
    }

    /// Remove the current jewelry without starting a new load
    pub fn clear_asset(&mut self) {
        self.version += 1;
        self.asset = None;
        self.rule = None;
        self.set_visibility(Visibility::Hidden);
    }

    pub fn asset(&self) -> Option<&JewelryAsset> {
        self.asset.as_ref()
    }

    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    pub fn adjust(&self) -> ManualAdjust {
        self.adjust
    }

    /// Replace the manual adjustments. Takes effect on the next tick;
    /// filters are left alone so the change glides in smoothly.
    pub fn set_adjust(&mut self, adjust: ManualAdjust) {
        self.adjust = adjust;
    }

    /// The face occlusion mask maintained alongside the jewelry
    pub fn occlusion(&self) -> &OcclusionMask {
        &self.occlusion
    }

    /// Run one frame of the pipeline against the host's scene nodes.
    pub fn tick<N: SceneNode>(&mut self, rig: &mut Rig<N>) -> TrackingStatus {
        let frame = match self.frames.latest() {
            // Holding the last written pose avoids a flicker when the
            // tracker drops a frame or two. A removed asset must still
            // disappear even while the face is out of frame.
            TrackerUpdate::NoFace => {
                if self.asset.is_none() {
                    rig.set_all_visible(false);
                }
                return TrackingStatus::NoFace;
            }
            TrackerUpdate::Face(frame) => frame,
        };

        self.occlusion.update(&frame);
        self.drive_nodes(&frame, rig);
        TrackingStatus::Tracking
    }

    fn drive_nodes<N: SceneNode>(&mut self, frame: &Arc<LandmarkFrame>, rig: &mut Rig<N>) {
        let (base_scale, paired, rule) = match (self.asset.as_ref(), self.rule) {
            (Some(asset), Some(rule)) => (asset.base_scale, asset.category.is_paired(), rule),
            _ => {
                self.set_visibility(Visibility::Hidden);
                rig.set_all_visible(false);
                return;
            }
        };

        let scale = base_scale * self.adjust.scale_multiplier;
        let solution = rule.solve(frame, &self.config.placement, scale);

        let solved = solution.main.is_some() || solution.left.is_some() || solution.right.is_some();
        if self.visibility == Visibility::Hidden && solved {
            self.set_visibility(Visibility::Priming);
        }
        let priming = self.visibility == Visibility::Priming;

        let adjust = self.adjust;
        let mut write = |raw: Option<AnchorPose>, filter: &mut PoseFilter, node: &mut N| {
            let Some(raw) = raw else { return };
            let adjusted = adjust.apply(raw);
            let pose = AnchorPose {
                position: filter.position.update(adjusted.position),
                rotation: filter.rotation.update(adjusted.rotation),
                scale: if priming { 0.0 } else { adjusted.scale },
            };
            node.set_pose(pose);
        };

        write(solution.main, &mut self.filters.main, &mut rig.main);
        write(solution.left, &mut self.filters.left, &mut rig.left);
        write(solution.right, &mut self.filters.right, &mut rig.right);

        rig.main.set_visible(!paired && self.visibility != Visibility::Hidden);
        rig.left.set_visible(paired && self.visibility != Visibility::Hidden);
        rig.right.set_visible(paired && self.visibility != Visibility::Hidden);

        if priming && solved {
            self.set_visibility(Visibility::Visible);
        }
    }

    fn set_visibility(&mut self, next: Visibility) {
        if self.visibility != next {
            tracing::info!(from = ?self.visibility, to = ?next, "visibility transition");
            self.visibility = next;
        }
    }
}
