use serde::{Deserialize, Serialize};

/// 2D vector in world units (meters)
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vec2 {
    pub x: f32,
    pub y: f32,
}

impl Vec2 {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub const fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    pub fn set(&mut self, x: f32, y: f32) {
        self.x = x;
        self.y = y;
    }

    pub fn set_zero(&mut self) {
        self.x = 0.0;
        self.y = 0.0;
    }

    pub fn length(&self) -> f32 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    pub fn length_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn dot(&self, other: Vec2) -> f32 {
        self.x * other.x + self.y * other.y
    }

    /// 2D cross product (z component of the 3D cross product)
    pub fn cross(&self, other: Vec2) -> f32 {
        self.x * other.y - self.y * other.x
    }

    /// Cross product of a scalar (angular velocity) with this vector
    pub fn cross_scalar(s: f32, v: Vec2) -> Vec2 {
        Vec2::new(-s * v.y, s * v.x)
    }

    /// Normalize in place and return the previous length.
    ///
    /// Vectors shorter than `f32::EPSILON` are left untouched and report 0.
    pub fn normalize(&mut self) -> f32 {
        let len = self.length();
        if len < f32::EPSILON {
            return 0.0;
        }
        let inv = 1.0 / len;
        self.x *= inv;
        self.y *= inv;
        len
    }

    pub fn is_valid(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

impl std::ops::Add for Vec2 {
    type Output = Self;
    fn add(self, rhs: Self) -> Self {
        Self { x: self.x + rhs.x, y: self.y + rhs.y }
    }
}

impl std::ops::AddAssign for Vec2 {
    fn add_assign(&mut self, rhs: Self) {
        self.x += rhs.x;
        self.y += rhs.y;
    }
}

impl std::ops::Sub for Vec2 {
    type Output = Self;
    fn sub(self, rhs: Self) -> Self {
        Self { x: self.x - rhs.x, y: self.y - rhs.y }
    }
}

impl std::ops::Mul<f32> for Vec2 {
    type Output = Self;
    fn mul(self, rhs: f32) -> Self {
        Self { x: self.x * rhs, y: self.y * rhs }
    }
}

impl std::ops::Neg for Vec2 {
    type Output = Self;
    fn neg(self) -> Self {
        Self { x: -self.x, y: -self.y }
    }
}

/// Rotation stored as sine/cosine pair
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rot {
    pub s: f32,
    pub c: f32,
}

impl Rot {
    pub fn new(angle: f32) -> Self {
        let (s, c) = angle.sin_cos();
        Self { s, c }
    }

    pub fn identity() -> Self {
        Self { s: 0.0, c: 1.0 }
    }

    pub fn apply(&self, v: Vec2) -> Vec2 {
        Vec2::new(self.c * v.x - self.s * v.y, self.s * v.x + self.c * v.y)
    }
}

/// Rigid transform: translation plus rotation
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    pub p: Vec2,
    pub q: Rot,
}

impl Transform {
    pub fn new(position: Vec2, angle: f32) -> Self {
        Self { p: position, q: Rot::new(angle) }
    }

    pub fn identity() -> Self {
        Self { p: Vec2::zero(), q: Rot::identity() }
    }

    #[inline]
    pub fn apply(&self, v: Vec2) -> Vec2 {
        self.q.apply(v) + self.p
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_returns_previous_length() {
        let mut v = Vec2::new(3.0, 4.0);
        assert_eq!(v.normalize(), 5.0);
        assert!((v.length() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn normalize_leaves_zero_vector_alone() {
        let mut v = Vec2::zero();
        assert_eq!(v.normalize(), 0.0);
        assert_eq!(v, Vec2::zero());
    }

    #[test]
    fn transform_rotates_then_translates() {
        let xf = Transform::new(Vec2::new(1.0, 2.0), std::f32::consts::FRAC_PI_2);
        let p = xf.apply(Vec2::new(1.0, 0.0));
        assert!((p.x - 1.0).abs() < 1e-6);
        assert!((p.y - 3.0).abs() < 1e-6);
    }
}
