/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;

use std::ops::Mul;

///
/// A 2D affine transformation, stored as the top two rows of a 3x3 matrix (the bottom row is always `[0, 0, 1]`)
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Transform2D(pub [[f64; 3]; 3]);

impl Default for Transform2D {
    fn default() -> Transform2D {
        Transform2D::identity()
    }
}

impl Transform2D {
    ///
    /// The transform that leaves every point where it is
    ///
    pub fn identity() -> Transform2D {
        Transform2D([[1.0, 0.0, 0.0], [0.0, 1.0, 0.0], [0.0, 0.0, 1.0]])
    }

    pub fn translate(dx: f64, dy: f64) -> Transform2D {
        Transform2D([[1.0, 0.0, dx], [0.0, 1.0, dy], [0.0, 0.0, 1.0]])
    }

    pub fn scale(sx: f64, sy: f64) -> Transform2D {
        Transform2D([[sx, 0.0, 0.0], [0.0, sy, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Rotation anticlockwise about the origin
    ///
    pub fn rotate_radians(angle: f64) -> Transform2D {
        let (sin, cos) = angle.sin_cos();

        Transform2D([[cos, -sin, 0.0], [sin, cos, 0.0], [0.0, 0.0, 1.0]])
    }

    ///
    /// Applies this transform to a point
    ///
    #[inline]
    pub fn transform_point(&self, point: &Coord2) -> Coord2 {
        let Transform2D(m) = self;

        Coord2(
            m[0][0] * point.0 + m[0][1] * point.1 + m[0][2],
            m[1][0] * point.0 + m[1][1] * point.1 + m[1][2],
        )
    }

    ///
    /// True if applying this transform would change nothing
    ///
    pub fn is_identity(&self) -> bool {
        *self == Transform2D::identity()
    }
}

impl Mul<Transform2D> for Transform2D {
    type Output = Transform2D;

    ///
    /// Combines two transforms: the right-hand transform is applied first
    ///
    fn mul(self, rhs: Transform2D) -> Transform2D {
        let Transform2D(a) = self;
        let Transform2D(b) = rhs;
        let mut result = [[0.0; 3]; 3];

        for row in 0..3 {
            for col in 0..3 {
                result[row][col] = a[row][0] * b[0][col] + a[row][1] * b[1][col] + a[row][2] * b[2][col];
            }
        }

        Transform2D(result)
    }
}
