/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::coord2::*;

///
/// An axis-aligned bounding box
///
/// An empty bounding box has its minimum at positive infinity and its maximum at negative infinity, so
/// adding the first point will set both corners to that point.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Bounds {
    min: Coord2,
    max: Coord2,
}

impl Bounds {
    ///
    /// Creates a bounding box that contains no points
    ///
    pub fn empty() -> Bounds {
        Bounds {
            min: Coord2(f64::INFINITY, f64::INFINITY),
            max: Coord2(f64::NEG_INFINITY, f64::NEG_INFINITY),
        }
    }

    ///
    /// Creates a bounding box from its two corners (in any order)
    ///
    pub fn from_min_max(p1: Coord2, p2: Coord2) -> Bounds {
        Bounds {
            min: Coord2::from_smallest_components(p1, p2),
            max: Coord2::from_biggest_components(p1, p2),
        }
    }

    ///
    /// Creates the smallest bounding box enclosing a set of points
    ///
    pub fn bounds_for_points<PointIter: IntoIterator<Item = Coord2>>(points: PointIter) -> Bounds {
        let mut bounds = Bounds::empty();
        for point in points {
            bounds.add_point(point);
        }

        bounds
    }

    ///
    /// Expands this bounding box so that it includes the specified point
    ///
    #[inline]
    pub fn add_point(&mut self, point: Coord2) {
        self.min = Coord2::from_smallest_components(self.min, point);
        self.max = Coord2::from_biggest_components(self.max, point);
    }

    #[inline]
    pub fn min(&self) -> Coord2 {
        self.min
    }

    #[inline]
    pub fn max(&self) -> Coord2 {
        self.max
    }

    ///
    /// True if no points have been added to this bounding box
    ///
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.min.0 > self.max.0 || self.min.1 > self.max.1
    }

    ///
    /// Width of this bounding box (0 if it's empty)
    ///
    #[inline]
    pub fn width(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.0 - self.min.0
        }
    }

    ///
    /// Height of this bounding box (0 if it's empty)
    ///
    #[inline]
    pub fn height(&self) -> f64 {
        if self.is_empty() {
            0.0
        } else {
            self.max.1 - self.min.1
        }
    }

    ///
    /// True if this bounding box touches or overlaps another one
    ///
    pub fn overlaps(&self, other: &Bounds) -> bool {
        !self.is_empty()
            && !other.is_empty()
            && self.min.0 <= other.max.0
            && self.max.0 >= other.min.0
            && self.min.1 <= other.max.1
            && self.max.1 >= other.min.1
    }

    ///
    /// Grows the bounding box along any axis where it has (almost) no extent, so it's safe to divide by
    /// its width and height
    ///
    pub fn padded_if_collapsed(&self, min_extent: f64, padding: f64) -> Bounds {
        let mut min = self.min;
        let mut max = self.max;

        if max.0 - min.0 < min_extent {
            min.0 -= padding;
            max.0 += padding;
        }

        if max.1 - min.1 < min_extent {
            min.1 -= padding;
            max.1 += padding;
        }

        Bounds { min, max }
    }
}
