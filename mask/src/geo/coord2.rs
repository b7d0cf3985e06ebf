/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;

use std::ops::{Add, AddAssign, Mul, Sub, SubAssign};

///
/// Represents a 2D point or vector
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Coord2(pub f64, pub f64);

impl Coord2 {
    ///
    /// The point at (0, 0)
    ///
    #[inline]
    pub fn origin() -> Coord2 {
        Coord2(0.0, 0.0)
    }

    #[inline]
    pub fn x(&self) -> f64 {
        self.0
    }

    #[inline]
    pub fn y(&self) -> f64 {
        self.1
    }

    ///
    /// Dot product of this vector and another
    ///
    #[inline]
    pub fn dot(&self, target: &Coord2) -> f64 {
        self.0 * target.0 + self.1 * target.1
    }

    ///
    /// The 'cross product' of two 2D vectors (the z component of the 3D cross product)
    ///
    #[inline]
    pub fn cross(&self, target: &Coord2) -> f64 {
        self.0 * target.1 - self.1 * target.0
    }

    ///
    /// Length of this vector
    ///
    #[inline]
    pub fn magnitude(&self) -> f64 {
        f64::sqrt(self.dot(self))
    }

    #[inline]
    pub fn distance_to(&self, target: &Coord2) -> f64 {
        (*self - *target).magnitude()
    }

    ///
    /// Returns this vector scaled to a length of 1, or the zero vector if it has no length
    ///
    /// (Zero-length vectors have no direction, and returning NaNs from here tends to poison
    /// everything that is calculated afterwards)
    ///
    pub fn to_unit_vector(&self) -> Coord2 {
        let magnitude = self.magnitude();

        if magnitude <= SMALL_DISTANCE {
            Coord2::origin()
        } else {
            Coord2(self.0 / magnitude, self.1 / magnitude)
        }
    }

    ///
    /// Rotates this vector 90 degrees anticlockwise
    ///
    #[inline]
    pub fn perpendicular(&self) -> Coord2 {
        Coord2(-self.1, self.0)
    }

    ///
    /// Linear interpolation from this point to another (`t = 0` is this point, `t = 1` is the target)
    ///
    #[inline]
    pub fn lerp(&self, target: &Coord2, t: f64) -> Coord2 {
        Coord2(self.0 + (target.0 - self.0) * t, self.1 + (target.1 - self.1) * t)
    }

    ///
    /// Moves this point along the line from `origin` so that it ends up `distance` away from it
    ///
    /// Nothing happens if the point is already at the origin (there's no direction to move in)
    ///
    pub fn with_distance_from(&self, origin: &Coord2, distance: f64) -> Coord2 {
        if self == origin {
            *self
        } else {
            let direction = (*self - *origin).to_unit_vector();
            *origin + direction * distance
        }
    }

    ///
    /// The smallest component of each of two points
    ///
    #[inline]
    pub fn from_smallest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::min(p1.0, p2.0), f64::min(p1.1, p2.1))
    }

    ///
    /// The biggest component of each of two points
    ///
    #[inline]
    pub fn from_biggest_components(p1: Coord2, p2: Coord2) -> Coord2 {
        Coord2(f64::max(p1.0, p2.0), f64::max(p1.1, p2.1))
    }

    ///
    /// True if neither component is NaN or infinite
    ///
    #[inline]
    pub fn is_finite(&self) -> bool {
        self.0.is_finite() && self.1.is_finite()
    }
}

impl From<(f64, f64)> for Coord2 {
    #[inline]
    fn from((x, y): (f64, f64)) -> Coord2 {
        Coord2(x, y)
    }
}

impl Add<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn add(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 + rhs.0, self.1 + rhs.1)
    }
}

impl AddAssign<Coord2> for Coord2 {
    #[inline]
    fn add_assign(&mut self, rhs: Coord2) {
        self.0 += rhs.0;
        self.1 += rhs.1;
    }
}

impl Sub<Coord2> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn sub(self, rhs: Coord2) -> Coord2 {
        Coord2(self.0 - rhs.0, self.1 - rhs.1)
    }
}

impl SubAssign<Coord2> for Coord2 {
    #[inline]
    fn sub_assign(&mut self, rhs: Coord2) {
        self.0 -= rhs.0;
        self.1 -= rhs.1;
    }
}

impl Mul<f64> for Coord2 {
    type Output = Coord2;

    #[inline]
    fn mul(self, rhs: f64) -> Coord2 {
        Coord2(self.0 * rhs, self.1 * rhs)
    }
}
