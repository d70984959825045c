//! 2D vector type for model-space arithmetic

use std::fmt;
use std::ops::{Add, AddAssign, Div, Mul, Neg, Sub, SubAssign};

/// 2D vector in model coordinates
///
/// Used both for positions (tails, tips, origins) and for the xy-components
/// of simulation vectors.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    /// Create a new 2D vector
    pub const fn new(x: f64, y: f64) -> Self {
        Vector2 { x, y }
    }

    /// Zero vector
    pub const ZERO: Vector2 = Vector2::new(0.0, 0.0);

    /// Create a vector from polar coordinates (angle in radians)
    pub fn from_polar(magnitude: f64, angle: f64) -> Self {
        let (sin, cos) = angle.sin_cos();
        Vector2::new(magnitude * cos, magnitude * sin)
    }

    /// Create a vector from polar coordinates (angle in degrees)
    pub fn from_polar_degrees(magnitude: f64, degrees: f64) -> Self {
        Self::from_polar(magnitude, degrees.to_radians())
    }

    /// Calculate the magnitude (length) of the vector
    pub fn magnitude(&self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// Angle from the positive x axis, in radians, range (-π, π]
    ///
    /// Returns 0 for the zero vector.
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }

    /// True when both components are exactly zero
    pub fn is_zero(&self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    /// Normalize the vector (make it unit length)
    pub fn normalize(&self) -> Self {
        let len = self.magnitude();
        if len > 0.0 {
            Vector2::new(self.x / len, self.y / len)
        } else {
            *self
        }
    }

    /// Same direction, new magnitude
    pub fn with_magnitude(&self, magnitude: f64) -> Self {
        self.normalize() * magnitude
    }

    /// Distance to another point
    pub fn distance(&self, other: &Vector2) -> f64 {
        (*self - *other).magnitude()
    }

    /// Round both components to the nearest integer, halves away from zero
    pub fn rounded(&self) -> Self {
        Vector2::new(self.x.round(), self.y.round())
    }

    /// Approximate equality within `epsilon` on each component
    pub fn approx_eq(&self, other: &Vector2, epsilon: f64) -> bool {
        (self.x - other.x).abs() <= epsilon && (self.y - other.y).abs() <= epsilon
    }
}

impl Default for Vector2 {
    fn default() -> Self {
        Vector2::ZERO
    }
}

impl Add for Vector2 {
    type Output = Vector2;
    fn add(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x + other.x, self.y + other.y)
    }
}

impl AddAssign for Vector2 {
    fn add_assign(&mut self, other: Vector2) {
        self.x += other.x;
        self.y += other.y;
    }
}

impl Sub for Vector2 {
    type Output = Vector2;
    fn sub(self, other: Vector2) -> Vector2 {
        Vector2::new(self.x - other.x, self.y - other.y)
    }
}

impl SubAssign for Vector2 {
    fn sub_assign(&mut self, other: Vector2) {
        self.x -= other.x;
        self.y -= other.y;
    }
}

impl Mul<f64> for Vector2 {
    type Output = Vector2;
    fn mul(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x * scalar, self.y * scalar)
    }
}

impl Div<f64> for Vector2 {
    type Output = Vector2;
    fn div(self, scalar: f64) -> Vector2 {
        Vector2::new(self.x / scalar, self.y / scalar)
    }
}

impl Neg for Vector2 {
    type Output = Vector2;
    fn neg(self) -> Vector2 {
        Vector2::new(-self.x, -self.y)
    }
}

impl std::iter::Sum for Vector2 {
    fn sum<I: Iterator<Item = Vector2>>(iter: I) -> Vector2 {
        iter.fold(Vector2::ZERO, |acc, v| acc + v)
    }
}

impl fmt::Display for Vector2 {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f64::consts::FRAC_PI_2;

    #[test]
    fn test_vector2_creation() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_vector2_magnitude() {
        let v = Vector2::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
    }

    #[test]
    fn test_vector2_angle() {
        assert_eq!(Vector2::new(2.0, 0.0).angle(), 0.0);
        assert!((Vector2::new(0.0, 3.0).angle() - FRAC_PI_2).abs() < 1e-12);
        assert_eq!(Vector2::ZERO.angle(), 0.0);
    }

    #[test]
    fn test_vector2_polar() {
        let v = Vector2::from_polar_degrees(2.0, 90.0);
        assert!(v.approx_eq(&Vector2::new(0.0, 2.0), 1e-12));
    }

    #[test]
    fn test_vector2_operations() {
        let v1 = Vector2::new(1.0, 2.0);
        let v2 = Vector2::new(3.0, 4.0);

        assert_eq!(v1 + v2, Vector2::new(4.0, 6.0));
        assert_eq!(v2 - v1, Vector2::new(2.0, 2.0));
        assert_eq!(v1 * 2.0, Vector2::new(2.0, 4.0));
        assert_eq!(-v1, Vector2::new(-1.0, -2.0));

        let total: Vector2 = vec![v1, v2, v1].into_iter().sum();
        assert_eq!(total, Vector2::new(5.0, 8.0));
    }

    #[test]
    fn test_vector2_with_magnitude() {
        let v = Vector2::new(3.0, 4.0).with_magnitude(10.0);
        assert!(v.approx_eq(&Vector2::new(6.0, 8.0), 1e-12));
    }

    #[test]
    fn test_vector2_rounded() {
        assert_eq!(Vector2::new(1.4, -2.6).rounded(), Vector2::new(1.0, -3.0));
    }
}
