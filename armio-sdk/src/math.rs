//! Small vector and quaternion value types.
//!
//! These carry sensor samples across the API. They provide just enough
//! functionality to inspect the data or hand it off to a full-featured math
//! library, plus a few common operations on the way.

use std::ops::{Index, Mul, MulAssign};

use serde::{Deserialize, Serialize};

/// A vector of three `f32` components.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Vector3 {
    /// Construct a vector with the three provided components.
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// The magnitude of this vector.
    pub fn magnitude(&self) -> f32 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// A normalized copy of this vector.
    pub fn normalized(&self) -> Self {
        let norm = self.magnitude();
        Self::new(self.x / norm, self.y / norm, self.z / norm)
    }

    /// The dot product of this vector and `rhs`.
    pub fn dot(&self, rhs: &Vector3) -> f32 {
        self.x * rhs.x + self.y * rhs.y + self.z * rhs.z
    }

    /// The cross product of this vector and `rhs`.
    pub fn cross(&self, rhs: &Vector3) -> Vector3 {
        Vector3::new(
            self.y * rhs.z - self.z * rhs.y,
            self.z * rhs.x - self.x * rhs.z,
            self.x * rhs.y - self.y * rhs.x,
        )
    }

    /// The angle between this vector and `rhs`, in radians.
    pub fn angle_to(&self, rhs: &Vector3) -> f32 {
        (self.dot(rhs) / (self.magnitude() * rhs.magnitude())).acos()
    }
}

impl Index<usize> for Vector3 {
    type Output = f32;

    fn index(&self, index: usize) -> &f32 {
        match index {
            0 => &self.x,
            1 => &self.y,
            2 => &self.z,
            _ => panic!("Vector3 index out of range: {index}"),
        }
    }
}

/// A quaternion used to represent a rotation, `w + x*i + y*j + z*k`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

impl Quaternion {
    /// The multiplicative identity, i.e. zero rotation.
    pub const IDENTITY: Quaternion = Quaternion::new(0.0, 0.0, 0.0, 1.0);

    /// Construct a quaternion with the provided components.
    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Self {
        Self { x, y, z, w }
    }

    /// The unit quaternion corresponding to the same rotation as this one.
    pub fn normalized(&self) -> Self {
        let magnitude = (self.x * self.x + self.y * self.y + self.z * self.z + self.w * self.w).sqrt();
        Self::new(
            self.x / magnitude,
            self.y / magnitude,
            self.z / magnitude,
            self.w / magnitude,
        )
    }

    /// This quaternion's conjugate.
    pub fn conjugate(&self) -> Self {
        Self::new(-self.x, -self.y, -self.z, self.w)
    }

    /// A quaternion representing a right-handed rotation of `angle` radians
    /// about the unit vector `axis`.
    pub fn from_axis_angle(axis: &Vector3, angle: f32) -> Self {
        let half = angle / 2.0;
        Self::new(
            axis.x * half.sin(),
            axis.y * half.sin(),
            axis.z * half.sin(),
            half.cos(),
        )
    }

    /// A copy of `vec` rotated by this quaternion.
    pub fn rotate(&self, vec: &Vector3) -> Vector3 {
        let qvec = Quaternion::new(vec.x, vec.y, vec.z, 0.0);
        let result = *self * qvec * self.conjugate();
        Vector3::new(result.x, result.y, result.z)
    }

    /// A quaternion representing the rotation from vector `from` to `to`.
    pub fn rotation_between(from: &Vector3, to: &Vector3) -> Self {
        let mut cross = from.cross(to);

        // The product of the magnitudes and the cosine of the angle between
        // from and to.
        let mut cos_theta = from.dot(to);

        // Identity if the vectors point the same direction.
        if cos_theta >= 1.0 {
            return Quaternion::IDENTITY;
        }

        let mut k = (from.dot(from) * to.dot(to)).sqrt();

        // Identity in the degenerate case.
        if k <= 0.0 {
            return Quaternion::IDENTITY;
        }

        // Vectors facing opposite directions need an arbitrary orthogonal
        // rotation axis.
        if cos_theta / k <= -1.0 {
            let x_axis = Vector3::new(1.0, 0.0, 0.0);
            let y_axis = Vector3::new(0.0, 1.0, 0.0);

            cross = from.cross(if from.dot(&x_axis).abs() < 1.0 { &x_axis } else { &y_axis });
            k = 0.0;
            cos_theta = 0.0;
        }

        Quaternion::new(cross.x, cross.y, cross.z, k + cos_theta)
    }
}

impl Default for Quaternion {
    fn default() -> Self {
        Quaternion::IDENTITY
    }
}

impl Mul for Quaternion {
    type Output = Quaternion;

    /// The Hamilton product. Note that quaternion multiplication is not
    /// commutative.
    fn mul(self, rhs: Quaternion) -> Quaternion {
        Quaternion::new(
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
        )
    }
}

impl MulAssign for Quaternion {
    fn mul_assign(&mut self, rhs: Quaternion) {
        *self = *self * rhs;
    }
}
