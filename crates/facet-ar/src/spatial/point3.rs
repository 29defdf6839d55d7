//! 3D point type shared by landmarks, mesh vertices, and poses

use std::ops::{Add, Sub};

use serde::{Deserialize, Serialize};

use super::Vector3;

/// A point in 3D space.
///
/// Landmark points use normalized image coordinates at capture time
/// (`x`, `y` in `[0, 1]`, `z` a relative depth where more negative means
/// closer to the camera). View-space points use a `[-1, 1]` range centered
/// on the view plane.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Point3 {
    /// The origin point
    pub const ORIGIN: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    /// Create a new point
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Distance to another point
    pub fn distance(&self, other: Point3) -> f32 {
        (other - *self).magnitude()
    }

    /// Linear interpolation toward another point
    pub fn lerp(&self, other: Point3, t: f32) -> Self {
        Self {
            x: self.x + (other.x - self.x) * t,
            y: self.y + (other.y - self.y) * t,
            z: self.z + (other.z - self.z) * t,
        }
    }

    /// Midpoint between two points
    pub fn midpoint(&self, other: Point3) -> Self {
        Self {
            x: (self.x + other.x) / 2.0,
            y: (self.y + other.y) / 2.0,
            z: (self.z + other.z) / 2.0,
        }
    }

    /// True when every component is finite (no NaN or infinity)
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite()
    }

    /// Interpret this point as a displacement from the origin
    pub fn to_vector(&self) -> Vector3 {
        Vector3::new(self.x, self.y, self.z)
    }
}

impl Add<Vector3> for Point3 {
    type Output = Point3;

    fn add(self, rhs: Vector3) -> Self::Output {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

impl Sub for Point3 {
    type Output = Vector3;

    fn sub(self, rhs: Self) -> Self::Output {
        Vector3::new(self.x - rhs.x, self.y - rhs.y, self.z - rhs.z)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let a = Point3::new(0.0, 0.0, 0.0);
        let b = Point3::new(3.0, 4.0, 0.0);
        assert!((a.distance(b) - 5.0).abs() < 1e-6);
    }

    #[test]
    fn test_midpoint() {
        let a = Point3::new(0.0, 2.0, -1.0);
        let b = Point3::new(4.0, 0.0, 1.0);
        let m = a.midpoint(b);
        assert_eq!(m, Point3::new(2.0, 1.0, 0.0));
    }

    #[test]
    fn test_point_minus_point_is_vector() {
        let v = Point3::new(2.0, 3.0, 4.0) - Point3::new(1.0, 1.0, 1.0);
        assert_eq!(v, Vector3::new(1.0, 2.0, 3.0));
    }

    #[test]
    fn test_is_finite() {
        assert!(Point3::new(1.0, 2.0, 3.0).is_finite());
        assert!(!Point3::new(f32::NAN, 0.0, 0.0).is_finite());
        assert!(!Point3::new(0.0, f32::INFINITY, 0.0).is_finite());
    }
}
