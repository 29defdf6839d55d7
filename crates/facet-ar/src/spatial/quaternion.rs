//! Quaternion rotations for anchor poses

use std::ops::Mul;

use super::Vector3;

/// A rotation in 3D space.
///
/// Anchor poses keep their quaternions unit-length at all times; every
/// operation that can drift the norm (interpolation, basis conversion)
/// renormalizes before returning.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// Identity rotation
    pub const IDENTITY: Self = Self {
        x: 0.0,
        y: 0.0,
        z: 0.0,
        w: 1.0,
    };

    /// Create a quaternion from raw components
    pub fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// Create a rotation from an orthonormal basis.
    ///
    /// `x_axis`, `y_axis`, `z_axis` are the columns of the rotation
    /// matrix: the world-space directions the local X/Y/Z axes map to.
    /// The necklace solver builds its jaw/chin basis this way so the
    /// pendant follows head roll, pitch, and yaw jointly.
    pub fn from_basis(x_axis: Vector3, y_axis: Vector3, z_axis: Vector3) -> Self {
        let (m00, m01, m02) = (x_axis.x, y_axis.x, z_axis.x);
        let (m10, m11, m12) = (x_axis.y, y_axis.y, z_axis.y);
        let (m20, m21, m22) = (x_axis.z, y_axis.z, z_axis.z);

        let trace = m00 + m11 + m22;
        let q = if trace > 0.0 {
            let s = (trace + 1.0).sqrt() * 2.0;
            Self {
                w: 0.25 * s,
                x: (m21 - m12) / s,
                y: (m02 - m20) / s,
                z: (m10 - m01) / s,
            }
        } else if m00 > m11 && m00 > m22 {
            let s = (1.0 + m00 - m11 - m22).sqrt() * 2.0;
            Self {
                w: (m21 - m12) / s,
                x: 0.25 * s,
                y: (m01 + m10) / s,
                z: (m02 + m20) / s,
            }
        } else if m11 > m22 {
            let s = (1.0 + m11 - m00 - m22).sqrt() * 2.0;
            Self {
                w: (m02 - m20) / s,
                x: (m01 + m10) / s,
                y: 0.25 * s,
                z: (m12 + m21) / s,
            }
        } else {
            let s = (1.0 + m22 - m00 - m11).sqrt() * 2.0;
            Self {
                w: (m10 - m01) / s,
                x: (m02 + m20) / s,
                y: (m12 + m21) / s,
                z: 0.25 * s,
            }
        };
        q.normalize()
    }

    /// Create a rotation from Euler angles in radians (yaw around Y,
    /// pitch around X, roll around Z)
    pub fn from_euler(yaw: f32, pitch: f32, roll: f32) -> Self {
        let cy = (yaw * 0.5).cos();
        let sy = (yaw * 0.5).sin();
        let cp = (pitch * 0.5).cos();
        let sp = (pitch * 0.5).sin();
        let cr = (roll * 0.5).cos();
        let sr = (roll * 0.5).sin();

        Self {
            w: cr * cp * cy + sr * sp * sy,
            x: sr * cp * cy - cr * sp * sy,
            y: cr * sp * cy + sr * cp * sy,
            z: cr * cp * sy - sr * sp * cy,
        }
    }

    /// Quaternion norm
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt()
    }

    /// Scale to unit length; a degenerate quaternion collapses to identity
    pub fn normalize(&self) -> Self {
        let mag = self.magnitude();
        if mag > 0.0 {
            Self {
                x: self.x / mag,
                y: self.y / mag,
                z: self.z / mag,
                w: self.w / mag,
            }
        } else {
            Self::IDENTITY
        }
    }

    /// Rotate a vector by this quaternion
    pub fn rotate_vector(&self, v: Vector3) -> Vector3 {
        let q_vec = Vector3::new(self.x, self.y, self.z);
        let uv = q_vec.cross(v);
        let uuv = q_vec.cross(uv);
        v + (uv * self.w + uuv) * 2.0
    }

    /// World-space direction of the local X axis
    pub fn x_axis(&self) -> Vector3 {
        self.rotate_vector(Vector3::RIGHT)
    }

    /// World-space direction of the local Y axis
    pub fn y_axis(&self) -> Vector3 {
        self.rotate_vector(Vector3::UP)
    }

    /// World-space direction of the local Z axis
    pub fn z_axis(&self) -> Vector3 {
        self.rotate_vector(Vector3::FORWARD)
    }

    /// Spherical linear interpolation toward another rotation.
    ///
    /// Takes the shorter arc and always returns a unit quaternion.
    pub fn slerp(&self, other: Quaternion, t: f32) -> Self {
        let mut dot =
            self.x * other.x + self.y * other.y + self.z * other.z + self.w * other.w;

        // Negate one side so interpolation takes the shorter path
        let other = if dot < 0.0 {
            dot = -dot;
            Quaternion::new(-other.x, -other.y, -other.z, -other.w)
        } else {
            other
        };

        // Nearly parallel: fall back to lerp to avoid division by sin(0)
        if dot > 0.9995 {
            return Quaternion::new(
                self.x + t * (other.x - self.x),
                self.y + t * (other.y - self.y),
                self.z + t * (other.z - self.z),
                self.w + t * (other.w - self.w),
            )
            .normalize();
        }

        let theta_0 = dot.acos();
        let theta = theta_0 * t;
        let sin_theta_0 = theta_0.sin();

        let s0 = (theta_0 - theta).sin() / sin_theta_0;
        let s1 = theta.sin() / sin_theta_0;

        Quaternion::new(
            s0 * self.x + s1 * other.x,
            s0 * self.y + s1 * other.y,
            s0 * self.z + s1 * other.z,
            s0 * self.w + s1 * other.w,
        )
        .normalize()
    }

    /// True when every component is finite
    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite() && self.z.is_finite() && self.w.is_finite()
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    fn mul(self, rhs: Self) -> Self::Output {
        Quaternion::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}
