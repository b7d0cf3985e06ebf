/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::geo::*;

///
/// True if the points `a`, `b`, `c` are in anticlockwise order (false for collinear points)
///
#[inline]
fn is_anticlockwise(a: &Coord2, b: &Coord2, c: &Coord2) -> bool {
    (c.1 - a.1) * (b.0 - a.0) > (b.1 - a.1) * (c.0 - a.0)
}

///
/// Quick test for whether or not two line segments cross each other
///
/// This uses the orientation of the endpoints only, so it never produces NaNs. Segments that merely share an
/// endpoint may or may not be reported as crossing depending on their orientation, and collinear segments
/// are never reported as crossing.
///
pub fn segments_cross(line1: &(Coord2, Coord2), line2: &(Coord2, Coord2)) -> bool {
    let (v1, v2) = line1;
    let (v3, v4) = line2;

    is_anticlockwise(v1, v3, v4) != is_anticlockwise(v2, v3, v4)
        && is_anticlockwise(v1, v2, v3) != is_anticlockwise(v1, v2, v4)
}

///
/// Finds the point where two line segments meet, if they do
///
/// Parallel segments only meet if they are collinear and overlap: in that case the first endpoint of the
/// second segment that lies on the first segment is returned (or the start of the first segment if the
/// second segment encloses the first one).
///
pub fn segment_intersection_point(line1: &(Coord2, Coord2), line2: &(Coord2, Coord2)) -> Option<Coord2> {
    let (v1, v2) = *line1;
    let (v3, v4) = *line2;

    let s10 = v2 - v1;
    let s32 = v4 - v3;
    let s30 = v3 - v1;

    let denominator = s10.cross(&s32);

    if denominator != 0.0 {
        let t1 = s30.cross(&s32) / denominator;
        let t2 = s30.cross(&s10) / denominator;

        let min_t = -SEGMENT_ENDPOINT_BIAS;
        let max_t = 1.0 + SEGMENT_ENDPOINT_BIAS;

        if t1 >= min_t && t1 <= max_t && t2 >= min_t && t2 <= max_t {
            Some(v1 + s10 * t1)
        } else {
            None
        }
    } else if s30.cross(&s10) == 0.0 {
        // Collinear: look for a point shared by both segments
        if point_on_collinear_segment(&v3, &v1, &v2) {
            Some(v3)
        } else if point_on_collinear_segment(&v4, &v1, &v2) {
            Some(v4)
        } else if point_on_collinear_segment(&v1, &v3, &v4) {
            Some(v1)
        } else {
            None
        }
    } else {
        // Parallel lines never meet
        None
    }
}

///
/// Given a point known to be on the same line as a segment, returns true if it's between the segment's endpoints
///
fn point_on_collinear_segment(point: &Coord2, start: &Coord2, end: &Coord2) -> bool {
    let direction = *end - *start;
    let length_squared = direction.dot(&direction);

    if length_squared <= 0.0 {
        point == start
    } else {
        let t = (*point - *start).dot(&direction) / length_squared;
        t >= 0.0 && t <= 1.0
    }
}
