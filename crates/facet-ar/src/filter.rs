//! Exponential smoothing filters for pose channels
//!
//! Tracking output jitters at the millimeter level frame to frame. Each
//! pose channel runs through a low-pass filter: the first sample after a
//! reset snaps straight to the target, every later sample blends toward
//! it by a fixed `alpha`. Lower alpha means heavier smoothing and more
//! lag; necklaces use a heavier setting than earrings and nose-pins so
//! they read as having hang inertia.

use crate::spatial::{Point3, Quaternion};

fn clamp_alpha(alpha: f32) -> f32 {
    alpha.clamp(f32::EPSILON, 1.0)
}

/// Low-pass filter over a 3D position channel
#[derive(Debug, Clone)]
pub struct VectorFilter {
    previous: Point3,
    alpha: f32,
    initialized: bool,
}

impl VectorFilter {
    /// Create a filter with the given smoothing factor (`alpha` is
    /// clamped into `(0, 1]`)
    pub fn new(alpha: f32) -> Self {
        Self {
            previous: Point3::ORIGIN,
            alpha: clamp_alpha(alpha),
            initialized: false,
        }
    }

    /// Blend toward `target` and return the smoothed value.
    ///
    /// The first call after construction or [`reset`](Self::reset)
    /// returns `target` unchanged.
    pub fn update(&mut self, target: Point3) -> Point3 {
        if !self.initialized {
            self.previous = target;
            self.initialized = true;
            return target;
        }
        self.previous = self.previous.lerp(target, self.alpha);
        self.previous
    }

    /// Forget the smoothed history; the next update snaps to its target
    pub fn reset(&mut self) {
        self.initialized = false;
    }
}

/// Low-pass filter over a rotation channel, interpolating on the sphere
#[derive(Debug, Clone)]
pub struct QuaternionFilter {
    previous: Quaternion,
    alpha: f32,
    initialized: bool,
}

impl QuaternionFilter {
    /// Create a filter with the given smoothing factor (`alpha` is
    /// clamped into `(0, 1]`)
    pub fn new(alpha: f32) -> Self {
        Self {
            previous: Quaternion::IDENTITY,
            alpha: clamp_alpha(alpha),
            initialized: false,
        }
    }

    /// Slerp toward `target` and return the smoothed rotation.
    ///
    /// The first call after construction or [`reset`](Self::reset)
    /// returns `target` unchanged. The result is always unit-length.
    pub fn update(&mut self, target: Quaternion) -> Quaternion {
        if !self.initialized {
            self.previous = target.normalize();
            self.initialized = true;
            return self.previous;
        }
        self.previous = self.previous.slerp(target, self.alpha);
        self.previous
    }

    /// Forget the smoothed history; the next update snaps to its target
    pub fn reset(&mut self) {
        self.initialized = false;
    }
}

/// Paired position + rotation filters for one scene node
#[derive(Debug, Clone)]
pub struct PoseFilter {
    pub position: VectorFilter,
    pub rotation: QuaternionFilter,
}

impl PoseFilter {
    /// Create both channels with the same smoothing factor
    pub fn new(alpha: f32) -> Self {
        Self {
            position: VectorFilter::new(alpha),
            rotation: QuaternionFilter::new(alpha),
        }
    }

    /// Reset both channels
    pub fn reset(&mut self) {
        self.position.reset();
        self.rotation.reset();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_update_snaps() {
        let mut f = VectorFilter::new(0.3);
        let target = Point3::new(0.7, -0.2, 0.1);
        assert_eq!(f.update(target), target);
    }

    #[test]
    fn test_alpha_one_is_passthrough() {
        let mut f = VectorFilter::new(1.0);
        f.update(Point3::new(0.0, 0.0, 0.0));
        let target = Point3::new(5.0, -3.0, 2.0);
        assert_eq!(f.update(target), target);
        let target2 = Point3::new(-1.0, 4.0, 0.5);
        assert_eq!(f.update(target2), target2);
    }

    #[test]
    fn test_tiny_alpha_holds_previous() {
        let mut f = VectorFilter::new(1e-6);
        let first = Point3::new(1.0, 1.0, 1.0);
        f.update(first);
        let out = f.update(Point3::new(100.0, 100.0, 100.0));
        assert!(out.distance(first) < 1e-3);
    }

    #[test]
    fn test_smoothing_lags_behind_target() {
        let mut f = VectorFilter::new(0.3);
        f.update(Point3::ORIGIN);
        let out = f.update(Point3::new(1.0, 0.0, 0.0));
        assert!((out.x - 0.3).abs() < 1e-6);
    }

    #[test]
    fn test_reset_snaps_again() {
        let mut f = VectorFilter::new(0.3);
        f.update(Point3::ORIGIN);
        f.update(Point3::new(1.0, 0.0, 0.0));
        f.reset();
        let target = Point3::new(9.0, 9.0, 9.0);
        assert_eq!(f.update(target), target);
    }

    #[test]
    fn test_quaternion_first_update_snaps() {
        let mut f = QuaternionFilter::new(0.2);
        let target = Quaternion::from_euler(0.4, 0.1, -0.3);
        let out = f.update(target);
        assert!((out.x - target.x).abs() < 1e-6);
        assert!((out.w - target.w).abs() < 1e-6);
    }

    #[test]
    fn test_quaternion_output_unit_norm() {
        let mut f = QuaternionFilter::new(0.4);
        f.update(Quaternion::from_euler(0.0, 0.0, 0.0));
        for i in 0..20 {
            let t = i as f32 * 0.3;
            let out = f.update(Quaternion::from_euler(t, -t, t * 0.5));
            assert!((out.magnitude() - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_alpha_clamped_to_valid_range() {
        // Out-of-range factors must not disable smoothing entirely or
        // freeze the filter.
        let mut f = VectorFilter::new(0.0);
        f.update(Point3::ORIGIN);
        let out = f.update(Point3::new(1.0, 0.0, 0.0));
        assert!(out.is_finite());

        let mut g = VectorFilter::new(2.0);
        g.update(Point3::ORIGIN);
        let target = Point3::new(1.0, 0.0, 0.0);
        assert_eq!(g.update(target), target);
    }
}
