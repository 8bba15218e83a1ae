//! Double-precision 3D vector used for body positions and camera space.

use std::ops::{Add, Div, Mul, Sub};

use glam::DVec3;
use serde::{Deserialize, Serialize};

/// Three-component vector with value semantics.
///
/// Every operation returns a fresh vector except
/// [`set_magnitude`](Self::set_magnitude), which rescales in place.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vector3D {
    /// X component.
    pub x: f64,
    /// Y component.
    pub y: f64,
    /// Z component (depth once in camera space).
    pub z: f64,
}

impl Vector3D {
    /// The zero vector.
    pub const ZERO: Self = Self::new(0.0, 0.0, 0.0);

    /// Create a vector from its components.
    #[must_use]
    pub const fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    /// Scale every component by `num`.
    #[must_use]
    pub fn multiply(self, num: f64) -> Self {
        Self::new(self.x * num, self.y * num, self.z * num)
    }

    /// Divide every component by `num`.
    ///
    /// Dividing by zero yields infinite or NaN components; callers must
    /// not pass `0.0`.
    #[must_use]
    pub fn divide(self, num: f64) -> Self {
        Self::new(self.x / num, self.y / num, self.z / num)
    }

    /// Component-wise sum.
    #[must_use]
    #[allow(clippy::should_implement_trait)]
    pub fn add(self, other: Self) -> Self {
        Self::new(self.x + other.x, self.y + other.y, self.z + other.z)
    }

    /// Component-wise difference.
    #[must_use]
    pub fn subtract(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }

    /// Euclidean norm.
    #[must_use]
    pub fn length(self) -> f64 {
        (self.x * self.x + self.y * self.y + self.z * self.z).sqrt()
    }

    /// Rescale this vector in place so its length equals `magnitude`,
    /// keeping its direction, and return the updated value.
    ///
    /// A zero-length vector has no direction and is left unchanged.
    pub fn set_magnitude(&mut self, magnitude: f64) -> Self {
        let length = self.length();
        if length > 0.0 {
            self.x = (self.x / length) * magnitude;
            self.y = (self.y / length) * magnitude;
            self.z = (self.z / length) * magnitude;
        }
        *self
    }
}

impl Add for Vector3D {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::add(self, rhs)
    }
}

impl Sub for Vector3D {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        self.subtract(rhs)
    }
}

impl Mul<f64> for Vector3D {
    type Output = Self;

    fn mul(self, rhs: f64) -> Self {
        self.multiply(rhs)
    }
}

impl Div<f64> for Vector3D {
    type Output = Self;

    fn div(self, rhs: f64) -> Self {
        self.divide(rhs)
    }
}

impl From<DVec3> for Vector3D {
    fn from(v: DVec3) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}

impl From<Vector3D> for DVec3 {
    fn from(v: Vector3D) -> Self {
        Self::new(v.x, v.y, v.z)
    }
}
