/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::edge_buckets::*;
use crate::curve::*;
use crate::geo::*;
use crate::line::*;

///
/// Removes loops from a polyline by collapsing them onto the point where the polyline crosses itself
///
/// A wide feather on a tightly curved part of an outline will usually form a small loop where the feather crosses
/// over itself. For each crossing, the polyline is divided into the part between the two crossing edges and the
/// rest, and whichever of these has the smaller bounding box (narrower or shorter) has all of its points moved to
/// the crossing point.
///
/// Crossings are found by sorting the edges into a grid of buckets, so only edges that are near each other are
/// compared. Each crossing is resolved as it's found, and crossings created by collapsing a loop are not searched
/// for again. Polylines with fewer than 4 points can't cross themselves and are left alone.
///
pub fn collapse_inner_loops(polyline: &mut Polyline) {
    let cyclic = polyline.cyclic;
    let points = &mut polyline.points;

    if points.len() < 4 {
        return;
    }

    let buckets = EdgeBuckets::new(points, cyclic);
    let mut num_collapsed = 0;

    for (cur_a, cur_b) in edge_indexes(points.len(), cyclic) {
        let nearby_buckets = buckets.buckets_for_edge(&points[cur_a], &points[cur_b]);

        for bucket_index in nearby_buckets {
            for &(check_a, check_b) in buckets.edges_in_bucket(bucket_index) {
                if collapse_crossing(points, (cur_a, cur_b), (check_a, check_b)) {
                    num_collapsed += 1;
                }
            }
        }
    }

    if num_collapsed > 0 {
        log::trace!(
            "Collapsed {} loops in a feather of {} points ({} buckets per side)",
            num_collapsed,
            points.len(),
            buckets.buckets_per_side()
        );
    }
}

///
/// If two edges of a polyline cross, collapses the smaller of the two loops they form and returns true
///
/// Only edges where `check` comes before `cur` in the polyline and the two edges are not neighbours are checked
/// (so each pair of edges is only considered once, and edges that share a point don't count as crossing).
///
fn collapse_crossing(points: &mut [Coord2], (cur_a, cur_b): (usize, usize), (check_a, check_b): (usize, usize)) -> bool {
    if check_a + 1 >= cur_a || cur_b == check_a {
        return false;
    }

    let cur_edge = (points[cur_a], points[cur_b]);
    let check_edge = (points[check_a], points[check_b]);

    if !segments_cross(&cur_edge, &check_edge) {
        return false;
    }

    let crossing_point = match segment_intersection_point(&cur_edge, &check_edge) {
        Some(point) => point,
        None => return false,
    };

    // The 'inner' loop runs from the end of the check edge to the start of the current edge, the 'outer' loop is everything else
    let mut inner_bounds = Bounds::empty();
    let mut outer_bounds = Bounds::empty();

    for (idx, point) in points.iter().enumerate() {
        if idx >= check_b && idx <= cur_a {
            inner_bounds.add_point(*point);
        } else {
            outer_bounds.add_point(*point);
        }
    }

    if inner_bounds.width() < outer_bounds.width() || inner_bounds.height() < outer_bounds.height() {
        points[check_b..=cur_a]
            .iter_mut()
            .for_each(|point| *point = crossing_point);
    } else {
        points[..=check_a]
            .iter_mut()
            .for_each(|point| *point = crossing_point);

        if cur_b != 0 {
            points[cur_b..]
                .iter_mut()
                .for_each(|point| *point = crossing_point);
        }
    }

    true
}
