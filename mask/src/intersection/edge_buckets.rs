/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::curve::edge_indexes;
use crate::geo::*;

use smallvec::*;

///
/// Uniform grid of buckets covering the bounding box of a polyline, each listing the edges that might pass through it
///
/// Edges are stored as pairs of indexes into the polyline. The grid is sized so that no edge is longer than a
/// bucket, which means that an edge can only pass through the buckets containing its endpoints and the two
/// buckets on the other diagonal of the rectangle they form.
///
pub(crate) struct EdgeBuckets {
    min: Coord2,
    bucket_scale: Coord2,
    buckets_per_side: usize,
    buckets: Vec<Vec<(usize, usize)>>,
}

///
/// Measurements of a polyline used to decide how big the bucket grid should be
///
struct GridSize {
    bounds: Bounds,
    buckets_per_side: usize,
}

impl GridSize {
    fn measure(points: &[Coord2], cyclic: bool) -> GridSize {
        // Find the bounds and the largest change in each axis along an edge
        let bounds = points.get_bounding_box();
        let mut max_delta = Coord2(0.0, 0.0);

        for (start, end) in edge_indexes(points.len(), cyclic) {
            let (start, end) = (points[start], points[end]);

            max_delta.0 = f64::max(max_delta.0, (start.0 - end.0).abs());
            max_delta.1 = f64::max(max_delta.1, (start.1 - end.1).abs());
        }

        // Avoid dividing by zero if the polyline is flat along either axis
        let bounds = bounds.padded_if_collapsed(f32::EPSILON as f64, COLLAPSED_BOUNDS_PADDING);

        let max_delta = f64::max(max_delta.0 / bounds.width(), max_delta.1 / bounds.height());

        // As many buckets as will fit while keeping every edge shorter than a bucket. An edge that crosses the
        // whole of the bounding box makes this 0, in which case there's a single bucket
        let buckets_per_side = usize::min(MAX_BUCKETS_PER_SIDE, (BUCKET_FILL_FACTOR / max_delta) as usize);
        let buckets_per_side = usize::max(buckets_per_side, 1);

        GridSize {
            bounds,
            buckets_per_side,
        }
    }
}

///
/// The number of buckets along each side of the grid used to find self-intersections in a polyline
///
pub fn feather_buckets_per_side(points: &[Coord2], cyclic: bool) -> usize {
    GridSize::measure(points, cyclic).buckets_per_side
}

impl EdgeBuckets {
    ///
    /// Sorts the edges of a polyline into buckets
    ///
    pub(crate) fn new(points: &[Coord2], cyclic: bool) -> EdgeBuckets {
        let GridSize {
            bounds,
            buckets_per_side,
        } = GridSize::measure(points, cyclic);

        let bucket_size = 1.0 / (buckets_per_side as f64);
        let bucket_scale = Coord2(
            1.0 / (bounds.width() * bucket_size),
            1.0 / (bounds.height() * bucket_size),
        );

        let mut edge_buckets = EdgeBuckets {
            min: bounds.min(),
            bucket_scale,
            buckets_per_side,
            buckets: vec![vec![]; buckets_per_side * buckets_per_side],
        };

        for (start, end) in edge_indexes(points.len(), cyclic) {
            for bucket_index in edge_buckets.buckets_for_edge(&points[start], &points[end]) {
                edge_buckets.buckets[bucket_index].push((start, end));
            }
        }

        log::trace!(
            "Sorted {} feather points into {}x{} buckets",
            points.len(),
            buckets_per_side,
            buckets_per_side
        );

        edge_buckets
    }

    #[inline]
    pub(crate) fn buckets_per_side(&self) -> usize {
        self.buckets_per_side
    }

    ///
    /// The edges that were added to a bucket
    ///
    #[inline]
    pub(crate) fn edges_in_bucket(&self, bucket_index: usize) -> &[(usize, usize)] {
        &self.buckets[bucket_index]
    }

    ///
    /// The index of the bucket containing a point
    ///
    pub(crate) fn bucket_index(&self, point: &Coord2) -> usize {
        let max_cell = self.buckets_per_side - 1;

        // Float to integer casts saturate, so points below the minimum end up in the first bucket
        let x = (((point.0 - self.min.0) * self.bucket_scale.0) as usize).min(max_cell);
        let y = (((point.1 - self.min.1) * self.bucket_scale.1) as usize).min(max_cell);

        y * self.buckets_per_side + x
    }

    ///
    /// The buckets that an edge between two points can pass through
    ///
    /// This is the bucket containing the start point, and if the end point is in a different bucket, the bucket
    /// containing the end point and the two buckets on the opposite diagonal (same row as the start and column as
    /// the end, and vice versa). Each bucket is only returned once.
    ///
    pub(crate) fn buckets_for_edge(&self, start: &Coord2, end: &Coord2) -> SmallVec<[usize; 4]> {
        let start_bucket = self.bucket_index(start);
        let end_bucket = self.bucket_index(end);

        let mut buckets = smallvec![start_bucket];

        if start_bucket != end_bucket {
            let (start_x, start_y) = (start_bucket % self.buckets_per_side, start_bucket / self.buckets_per_side);
            let (end_x, end_y) = (end_bucket % self.buckets_per_side, end_bucket / self.buckets_per_side);

            let diagonal_a = start_y * self.buckets_per_side + end_x;
            let diagonal_b = end_y * self.buckets_per_side + start_x;

            for bucket in [end_bucket, diagonal_a, diagonal_b].iter() {
                if !buckets.contains(bucket) {
                    buckets.push(*bucket);
                }
            }
        }

        buckets
    }
}
