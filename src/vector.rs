//! 2D vector helpers on top of `glam::DVec2`
//!
//! Component-wise arithmetic with vectors or scalars comes straight from glam
//! operators (`a + b`, `a * 2.0`, `a / b`). This module adds the remaining
//! sketch-style operations. All of them take `self` by value and return a new
//! vector; nothing mutates in place.
//!
//! Interpolation is written out as `a + (b - a) * t` rather than using
//! `DVec2::lerp`, which rounds differently. Flecks must be bit-stable.

use glam::DVec2;

/// A point or offset on the paint surface
pub type Point2D = DVec2;

/// Extra vector operations used by the fleck generator
pub trait VectorExt: Sized {
    /// Magnitude, or 0 for the zero vector
    fn magnitude(self) -> f64;
    /// Squared magnitude
    fn magnitude_squared(self) -> f64;
    /// Unit vector in the same direction; the zero vector stays zero
    fn normalized(self) -> Self;
    /// Clamp the magnitude to `max`, keeping direction
    fn limit(self, max: f64) -> Self;
    /// Same direction, magnitude `n`
    fn with_magnitude(self, n: f64) -> Self;
    /// Angle from the +x axis (`atan2(y, x)`)
    fn heading(self) -> f64;
    /// Rotate by `angle` radians, keeping magnitude
    fn rotated(self, angle: f64) -> Self;
    /// Move `amount` of the way toward `(x, y)`
    fn lerp_toward(self, x: f64, y: f64, amount: f64) -> Self;
    /// Component-wise remainder
    fn rem_by(self, divisor: Self) -> Self;
    /// Euclidean distance to `other`
    fn distance_to(self, other: Self) -> f64;
}

impl VectorExt for DVec2 {
    #[inline]
    fn magnitude(self) -> f64 {
        self.magnitude_squared().sqrt()
    }

    #[inline]
    fn magnitude_squared(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    fn normalized(self) -> Self {
        let len = self.magnitude();
        if len != 0.0 { self * (1.0 / len) } else { self }
    }

    fn limit(self, max: f64) -> Self {
        let m_sq = self.magnitude_squared();
        if m_sq > max * max {
            self / m_sq.sqrt() * max
        } else {
            self
        }
    }

    fn with_magnitude(self, n: f64) -> Self {
        self.normalized() * n
    }

    #[inline]
    fn heading(self) -> f64 {
        self.y.atan2(self.x)
    }

    fn rotated(self, angle: f64) -> Self {
        let heading = self.heading() + angle;
        let mag = self.magnitude();
        DVec2::new(heading.cos() * mag, heading.sin() * mag)
    }

    #[inline]
    fn lerp_toward(self, x: f64, y: f64, amount: f64) -> Self {
        DVec2::new(self.x + (x - self.x) * amount, self.y + (y - self.y) * amount)
    }

    fn rem_by(self, divisor: Self) -> Self {
        DVec2::new(self.x % divisor.x, self.y % divisor.y)
    }

    #[inline]
    fn distance_to(self, other: Self) -> f64 {
        (other - self).magnitude()
    }
}

/// Interpolate from `a` toward `b`, leaving both untouched
#[inline]
pub fn lerp(a: Point2D, b: Point2D, amount: f64) -> Point2D {
    a.lerp_toward(b.x, b.y, amount)
}

/// Distance between two points
#[inline]
pub fn distance(a: Point2D, b: Point2D) -> f64 {
    a.distance_to(b)
}

/// `a` rotated by `angle` radians
#[inline]
pub fn rotate(a: Point2D, angle: f64) -> Point2D {
    a.rotated(angle)
}
