//! Engine tuning configuration
//!
//! Every geometric constant that controls how jewelry sits on the face
//! lives here, grouped by concern and loadable from a TOML file. Missing
//! fields fall back to defaults so an old config file keeps working after
//! new knobs are added.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::anchor::Category;
use crate::error::EngineError;

/// Top-level engine configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct EngineConfig {
    pub filtering: FilterConfig,
    pub sizing: SizingConfig,
    pub placement: PlacementConfig,
    pub occlusion: OcclusionConfig,
}

/// Smoothing factors per category.
///
/// Lower alpha means heavier smoothing. Necklaces run heavier than
/// earrings and nose-pins so they appear to hang with some inertia.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterConfig {
    pub necklace_alpha: f32,
    pub earring_alpha: f32,
    pub nose_pin_alpha: f32,
}

/// Canonical sizes and normalization guards
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SizingConfig {
    /// Target extent of a necklace in view units (neck-scale)
    pub necklace_target: f32,
    /// Target extent of an earring in view units
    pub earring_target: f32,
    /// Target extent of a nose-pin in view units (nearly imperceptible)
    pub nose_pin_target: f32,
    /// Upper bound on the computed base scale, guarding against assets
    /// exported at near-zero size
    pub max_scale_multiplier: f32,
    /// Floor for a bounding-box dimension, guarding degenerate geometry
    pub min_dimension: f32,
}

/// Category-specific placement offsets, in view units
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlacementConfig {
    /// How far below the chin a necklace rests, along the face-down axis
    pub necklace_drop: f32,
    /// Depth push-back so the necklace wraps the neck instead of
    /// floating in front of it
    pub necklace_depth_push: f32,
    /// Downward offset from the jaw landmark to the ear lobe
    pub earring_lobe_drop: f32,
    /// Forward offset lifting a nose-pin off the nose surface
    pub nose_pin_forward: f32,
    /// Minimum length for a direction vector before it is trusted;
    /// shorter vectors mean coincident landmarks and the pose update is
    /// skipped
    pub direction_epsilon: f32,
}

/// Occlusion mask tuning
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OcclusionConfig {
    /// Multiplier applied to landmark depth so the mask follows facial
    /// relief
    pub depth_scale: f32,
}

impl Default for FilterConfig {
    fn default() -> Self {
        Self {
            necklace_alpha: 0.2,
            earring_alpha: 0.4,
            nose_pin_alpha: 0.4,
        }
    }
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            necklace_target: 0.5,
            earring_target: 0.08,
            nose_pin_target: 0.04,
            max_scale_multiplier: 10.0,
            min_dimension: 0.001,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            necklace_drop: 0.15,
            necklace_depth_push: 0.05,
            earring_lobe_drop: 0.06,
            nose_pin_forward: 0.04,
            direction_epsilon: 1e-5,
        }
    }
}

impl Default for OcclusionConfig {
    fn default() -> Self {
        Self { depth_scale: 2.0 }
    }
}

impl EngineConfig {
    /// Load configuration from a TOML file.
    ///
    /// A missing file yields defaults; a file that fails to parse is
    /// logged and replaced by defaults rather than aborting a live
    /// camera session.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EngineError> {
        let path = path.as_ref();
        if !path.exists() {
            return Ok(Self::default());
        }
        let content = fs::read_to_string(path)?;
        match toml::from_str::<EngineConfig>(&content) {
            Ok(config) => Ok(config),
            Err(err) => {
                tracing::warn!(path = %path.display(), %err, "invalid engine config, using defaults");
                Ok(Self::default())
            }
        }
    }

    /// Write the configuration as pretty TOML
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), EngineError> {
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Smoothing factor for a category
    pub fn alpha_for(&self, category: Category) -> f32 {
        match category {
            Category::Necklace => self.filtering.necklace_alpha,
            Category::Earring => self.filtering.earring_alpha,
            Category::NosePin => self.filtering.nose_pin_alpha,
        }
    }

    /// Canonical target size for a category
    pub fn target_size_for(&self, category: Category) -> f32 {
        match category {
            Category::Necklace => self.sizing.necklace_target,
            Category::Earring => self.sizing.earring_target,
            Category::NosePin => self.sizing.nose_pin_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_order_categories_by_size() {
        let config = EngineConfig::default();
        assert!(config.sizing.necklace_target > config.sizing.earring_target);
        assert!(config.sizing.earring_target > config.sizing.nose_pin_target);
    }

    #[test]
    fn test_necklace_smooths_heavier() {
        let config = EngineConfig::default();
        assert!(config.filtering.necklace_alpha < config.filtering.earring_alpha);
        assert!(config.filtering.necklace_alpha < config.filtering.nose_pin_alpha);
    }

    #[test]
    fn test_toml_round_trip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");

        let mut config = EngineConfig::default();
        config.placement.necklace_drop = 0.21;
        config.save(&path).unwrap();

        let loaded = EngineConfig::load(&path).unwrap();
        assert!((loaded.placement.necklace_drop - 0.21).abs() < 1e-6);
        assert!((loaded.sizing.necklace_target - 0.5).abs() < 1e-6);
    }

    #[test]
    fn test_missing_file_yields_defaults() {
        let config = EngineConfig::load("/nonexistent/engine.toml").unwrap();
        assert!((config.filtering.necklace_alpha - 0.2).abs() < 1e-6);
    }

    #[test]
    fn test_partial_file_fills_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "[filtering]\nnecklace_alpha = 0.1\n").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert!((config.filtering.necklace_alpha - 0.1).abs() < 1e-6);
        assert!((config.sizing.max_scale_multiplier - 10.0).abs() < 1e-6);
    }

    #[test]
    fn test_garbage_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("engine.toml");
        std::fs::write(&path, "not valid toml [[[").unwrap();

        let config = EngineConfig::load(&path).unwrap();
        assert!((config.occlusion.depth_scale - 2.0).abs() < 1e-6);
    }
}
