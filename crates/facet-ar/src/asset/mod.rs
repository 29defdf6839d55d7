//! Jewelry asset normalization
//!
//! Catalog assets arrive at arbitrary scale and with arbitrary pivots.
//! Normalization rewrites each mesh into a canonical local frame: unit
//! pivot at the bounding-box center, a base scale that maps the mesh
//! onto its category's real-world size, and a standardized material.

mod material;
mod mesh;

pub use material::{Color, Material};
pub use mesh::{Aabb, MeshGeometry};

use serde::{Deserialize, Serialize};

use crate::anchor::Category;
use crate::config::SizingConfig;
use crate::spatial::Point3;

/// Fixed render state every jewelry node carries.
///
/// Frustum culling stays off: anchored nodes move every frame and a
/// stale culling bound can blink the jewelry out at screen edges.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RenderFlags {
    pub frustum_culled: bool,
    pub cast_shadow: bool,
    pub receive_shadow: bool,
}

impl Default for RenderFlags {
    fn default() -> Self {
        Self {
            frustum_culled: false,
            cast_shadow: true,
            receive_shadow: true,
        }
    }
}

/// A normalized, render-ready jewelry asset
#[derive(Debug, Clone)]
pub struct JewelryAsset {
    pub category: Category,
    pub mesh: MeshGeometry,
    pub material: Material,
    pub render_flags: RenderFlags,
    /// Uniform scale mapping the normalized mesh to its category's
    /// canonical size. Applied at the scene node, never baked into
    /// vertices, so manual size adjustment stays a cheap multiply.
    pub base_scale: f32,
    /// Where the exporter's pivot sat before recentering, in the raw
    /// mesh's local frame
    pub local_origin: Point3,
    pub source: String,
}

impl JewelryAsset {
    /// Normalize a raw mesh into a canonical asset.
    ///
    /// The mesh is recentered on its bounding-box center and the base
    /// scale is derived from the largest extent. Degenerate geometry is
    /// floored rather than rejected; a broken asset renders tiny, it
    /// never takes the session down.
    pub fn normalized(
        raw: MeshGeometry,
        category: Category,
        texture: Option<String>,
        color: Option<Color>,
        sizing: &SizingConfig,
        source: impl Into<String>,
    ) -> Self {
        let source = source.into();
        let mut mesh = raw;
        let bounds = mesh.bounds();
        let mut max_dim = bounds.max_dimension();
        if !max_dim.is_finite() || max_dim < sizing.min_dimension {
            tracing::warn!(%source, max_dim, "degenerate asset geometry, flooring dimension");
            max_dim = sizing.min_dimension;
        }

        let target = match category {
            Category::Necklace => sizing.necklace_target,
            Category::Earring => sizing.earring_target,
            Category::NosePin => sizing.nose_pin_target,
        };
        // The cap bounds the scale itself, not a per-target ratio.
        let base_scale = (target / max_dim).min(sizing.max_scale_multiplier);

        let local_origin = bounds.center();
        mesh.recenter(local_origin);
        mesh.recompute_normals();

        Self {
            category,
            mesh,
            material: Material::standardized(texture, color),
            render_flags: RenderFlags::default(),
            base_scale,
            local_origin,
            source,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::spatial::Point3;

    fn cube(extent: f32) -> MeshGeometry {
        let h = extent / 2.0;
        MeshGeometry::new(
            vec![
                Point3::new(-h, -h, -h),
                Point3::new(h, -h, -h),
                Point3::new(h, h, -h),
                Point3::new(-h, h, -h),
                Point3::new(-h, -h, h),
                Point3::new(h, -h, h),
                Point3::new(h, h, h),
                Point3::new(-h, h, h),
            ],
            vec![
                0, 1, 2, 0, 2, 3, 4, 6, 5, 4, 7, 6, 0, 4, 5, 0, 5, 1, 2, 6, 7, 2, 7, 3, 1, 5, 6,
                1, 6, 2, 0, 3, 7, 0, 7, 4,
            ],
        )
    }

    #[test]
    fn test_unit_cube_gets_target_scale() {
        let sizing = SizingConfig::default();
        let asset = JewelryAsset::normalized(
            cube(1.0),
            Category::Necklace,
            None,
            None,
            &sizing,
            "cube.glb",
        );
        assert!((asset.base_scale - sizing.necklace_target).abs() < 1e-6);
    }

    #[test]
    fn test_oversized_mesh_scales_down() {
        let sizing = SizingConfig::default();
        let asset = JewelryAsset::normalized(
            cube(100.0),
            Category::Earring,
            None,
            None,
            &sizing,
            "big.glb",
        );
        let extent = asset.mesh.bounds().max_dimension() * asset.base_scale;
        assert!((extent - sizing.earring_target).abs() < 1e-4);
    }

    #[test]
    fn test_tiny_mesh_scale_is_clamped() {
        let sizing = SizingConfig::default();
        let asset = JewelryAsset::normalized(
            cube(1e-9),
            Category::NosePin,
            None,
            None,
            &sizing,
            "dust.glb",
        );
        assert!((asset.base_scale - sizing.max_scale_multiplier).abs() < 1e-6);
        assert!(asset.base_scale.is_finite());
    }

    #[test]
    fn test_mesh_recentered() {
        let sizing = SizingConfig::default();
        let mut raw = cube(1.0);
        raw.recenter(Point3::new(-5.0, 3.0, 0.0));
        let asset =
            JewelryAsset::normalized(raw, Category::Necklace, None, None, &sizing, "off.glb");
        assert!(asset.mesh.bounds().center().distance(Point3::ORIGIN) < 1e-5);
        assert!(asset.local_origin.distance(Point3::new(5.0, -3.0, 0.0)) < 1e-5);
    }

    #[test]
    fn test_render_flags_disable_culling() {
        assert!(!RenderFlags::default().frustum_culled);
    }
}
