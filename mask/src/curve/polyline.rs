/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use std::ops::{Deref, DerefMut};

///
/// A series of points joined by straight lines, generated by tessellating a mask outline or its feather
///
/// Closed polylines don't repeat their first point at the end: instead, `cyclic` is set and the last point
/// is implicitly joined to the first one.
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct Polyline {
    pub points: Vec<Coord2>,
    pub cyclic: bool,
}

impl Polyline {
    pub fn new(points: Vec<Coord2>, cyclic: bool) -> Polyline {
        Polyline { points, cyclic }
    }

    ///
    /// A polyline with no points
    ///
    pub fn empty(cyclic: bool) -> Polyline {
        Polyline {
            points: vec![],
            cyclic,
        }
    }

    ///
    /// The number of edges in this polyline (including the edge joining the end to the start, for closed polylines)
    ///
    pub fn edge_count(&self) -> usize {
        edge_count(self.points.len(), self.cyclic)
    }

    ///
    /// Iterates over the edges of this polyline, as pairs of indexes into the points list
    ///
    pub fn edge_indexes(&self) -> impl Iterator<Item = (usize, usize)> {
        edge_indexes(self.points.len(), self.cyclic)
    }

    ///
    /// Iterates over the edges of this polyline as line segments
    ///
    pub fn edges(&self) -> impl Iterator<Item = (Coord2, Coord2)> + '_ {
        self.edge_indexes().map(move |(start, end)| (self.points[start], self.points[end]))
    }

    ///
    /// Consumes this polyline, returning its points
    ///
    pub fn into_points(self) -> Vec<Coord2> {
        self.points
    }
}

///
/// The number of edges in a polyline with the specified number of points
///
pub(crate) fn edge_count(num_points: usize, cyclic: bool) -> usize {
    match num_points {
        0 | 1 => 0,
        _ => {
            if cyclic {
                num_points
            } else {
                num_points - 1
            }
        }
    }
}

///
/// The edges of a polyline with the specified number of points
///
pub(crate) fn edge_indexes(num_points: usize, cyclic: bool) -> impl Iterator<Item = (usize, usize)> {
    (0..edge_count(num_points, cyclic)).map(move |start| (start, (start + 1) % num_points))
}

impl Deref for Polyline {
    type Target = [Coord2];

    #[inline]
    fn deref(&self) -> &[Coord2] {
        &self.points
    }
}

impl DerefMut for Polyline {
    #[inline]
    fn deref_mut(&mut self) -> &mut [Coord2] {
        &mut self.points
    }
}

impl HasBoundingBox for Polyline {
    fn get_bounding_box(&self) -> Bounds {
        self.points.get_bounding_box()
    }
}
