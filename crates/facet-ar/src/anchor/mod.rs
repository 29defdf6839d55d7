//! Category anchor rules
//!
//! Each jewelry category maps face landmarks to anchor poses with its
//! own geometric rule. The rule is selected once when an asset is
//! installed and then run every frame; a rule that cannot produce a
//! trustworthy pose returns `None` for that slot and the previous pose
//! holds.

mod earring;
mod necklace;
mod nose_pin;

pub use earring::EarringRule;
pub use necklace::NecklaceRule;
pub use nose_pin::NosePinRule;

use serde::{Deserialize, Serialize};

use crate::config::PlacementConfig;
use crate::landmark::LandmarkFrame;
use crate::spatial::AnchorPose;

/// Jewelry category, fixed at asset load time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Necklace,
    Earring,
    NosePin,
}

impl Category {
    /// Whether this category renders as a mirrored pair
    pub fn is_paired(self) -> bool {
        matches!(self, Category::Earring)
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            Category::Necklace => "necklace",
            Category::Earring => "earring",
            Category::NosePin => "nose_pin",
        };
        f.write_str(name)
    }
}

/// Solved poses for one frame. `main` is used by single-instance
/// categories; `left`/`right` by paired ones. A `None` slot means the
/// rule declined to update and the previous pose should hold.
#[derive(Debug, Clone, Copy, Default)]
pub struct AnchorSolution {
    pub main: Option<AnchorPose>,
    pub left: Option<AnchorPose>,
    pub right: Option<AnchorPose>,
}

/// Per-category rule dispatch
#[derive(Debug, Clone, Copy)]
pub enum CategoryRule {
    Necklace(NecklaceRule),
    Earring(EarringRule),
    NosePin(NosePinRule),
}

impl CategoryRule {
    pub fn for_category(category: Category) -> Self {
        match category {
            Category::Necklace => CategoryRule::Necklace(NecklaceRule),
            Category::Earring => CategoryRule::Earring(EarringRule),
            Category::NosePin => CategoryRule::NosePin(NosePinRule),
        }
    }

    /// Run the rule against one landmark frame. `scale` is the final
    /// node scale (base scale times manual multiplier), written into
    /// every produced pose.
    pub fn solve(
        &self,
        frame: &LandmarkFrame,
        placement: &PlacementConfig,
        scale: f32,
    ) -> AnchorSolution {
        match self {
            CategoryRule::Necklace(rule) => AnchorSolution {
                main: rule.solve(frame, placement, scale),
                ..Default::default()
            },
            CategoryRule::Earring(rule) => {
                let (left, right) = rule.solve(frame, placement, scale);
                AnchorSolution {
                    main: None,
                    left,
                    right,
                }
            }
            CategoryRule::NosePin(rule) => AnchorSolution {
                main: rule.solve(frame, placement, scale),
                ..Default::default()
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmark::{indices, LANDMARK_COUNT};
    use crate::spatial::Point3;

    fn full_face() -> LandmarkFrame {
        let mut slots = vec![None; LANDMARK_COUNT];
        slots[indices::CHIN] = Some(Point3::new(0.5, 0.8, 0.1));
        slots[indices::JAW_LEFT] = Some(Point3::new(0.3, 0.6, 0.15));
        slots[indices::JAW_RIGHT] = Some(Point3::new(0.7, 0.6, 0.15));
        slots[indices::NOSE_TIP] = Some(Point3::new(0.5, 0.55, 0.05));
        slots[indices::NOSE_BRIDGE] = Some(Point3::new(0.5, 0.45, 0.12));
        LandmarkFrame::from_slots(slots)
    }

    #[test]
    fn test_single_categories_fill_main_only() {
        let placement = PlacementConfig::default();
        for category in [Category::Necklace, Category::NosePin] {
            let solution =
                CategoryRule::for_category(category).solve(&full_face(), &placement, 1.0);
            assert!(solution.main.is_some(), "{category}");
            assert!(solution.left.is_none());
            assert!(solution.right.is_none());
        }
    }

    #[test]
    fn test_earring_fills_pair_only() {
        let placement = PlacementConfig::default();
        let solution =
            CategoryRule::for_category(Category::Earring).solve(&full_face(), &placement, 1.0);
        assert!(solution.main.is_none());
        assert!(solution.left.is_some());
        assert!(solution.right.is_some());
    }

    #[test]
    fn test_solution_carries_scale() {
        let placement = PlacementConfig::default();
        let solution =
            CategoryRule::for_category(Category::Necklace).solve(&full_face(), &placement, 0.37);
        assert!((solution.main.unwrap().scale - 0.37).abs() < 1e-6);
    }
}
