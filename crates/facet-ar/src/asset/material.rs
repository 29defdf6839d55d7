//! Jewelry material standardization
//!
//! Imported assets arrive with wildly inconsistent material setups, so
//! every asset is pushed toward a common metallic look. Textured
//! surfaces keep their texture but get their metalness boosted; bare
//! surfaces fall back to polished gold.

use serde::{Deserialize, Serialize};

/// Linear RGB color
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Color {
    pub r: f32,
    pub g: f32,
    pub b: f32,
}

impl Color {
    pub const GOLD: Color = Color {
        r: 1.0,
        g: 0.76,
        b: 0.33,
    };
    pub const WHITE: Color = Color {
        r: 1.0,
        g: 1.0,
        b: 1.0,
    };
}

/// PBR material parameters after standardization
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Material {
    pub color: Color,
    pub metalness: f32,
    pub roughness: f32,
    pub env_map_intensity: f32,
    pub texture: Option<String>,
}

impl Material {
    /// Standardize an imported material.
    ///
    /// Textured materials keep their map and color, with metalness
    /// raised and roughness lowered so the metal still reads as metal.
    /// Untextured materials become polished gold outright.
    pub fn standardized(texture: Option<String>, color: Option<Color>) -> Self {
        match texture {
            Some(map) => Self {
                color: color.unwrap_or(Color::WHITE),
                metalness: 0.9,
                roughness: 0.2,
                env_map_intensity: 1.5,
                texture: Some(map),
            },
            None => Self {
                color: Color::GOLD,
                metalness: 1.0,
                roughness: 0.15,
                env_map_intensity: 1.5,
                texture: None,
            },
        }
    }
}

impl Default for Material {
    fn default() -> Self {
        Self::standardized(None, None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_untextured_becomes_gold() {
        let mat = Material::standardized(None, Some(Color::WHITE));
        assert_eq!(mat.color, Color::GOLD);
        assert!((mat.metalness - 1.0).abs() < 1e-6);
        assert!(mat.texture.is_none());
    }

    #[test]
    fn test_textured_keeps_map() {
        let mat = Material::standardized(Some("pendant_albedo.png".into()), None);
        assert_eq!(mat.texture.as_deref(), Some("pendant_albedo.png"));
        assert!(mat.metalness >= 0.9);
        assert!(mat.roughness <= 0.2);
    }
}
