/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::resolution::*;
use crate::curve::*;
use crate::geo::*;

///
/// The number of points generated when tessellating a curve at a particular resolution
///
/// This is `resolution` points per segment, plus the final point for open outlines (closed outlines don't repeat
/// their first point). Outlines with fewer than 2 points produce nothing.
///
pub fn tessellated_len(curve: &MaskCurve, resolution: usize) -> usize {
    let segment_count = curve.segment_count();

    if segment_count == 0 {
        0
    } else if curve.cyclic {
        resolution * segment_count
    } else {
        resolution * segment_count + 1
    }
}

///
/// Converts a mask outline into a polyline with `resolution` evenly spaced (in 't') samples per bezier segment
///
/// A resolution of 0 is treated as 1.
///
pub fn tessellate(curve: &MaskCurve, resolution: usize) -> Polyline {
    if curve.point_count() <= 1 {
        return Polyline::empty(curve.cyclic);
    }

    let resolution = resolution.max(1);
    let mut points = Vec::with_capacity(tessellated_len(curve, resolution));

    for segment in curve.segments() {
        // The end point of each segment is the start point of the next, so it's left out here
        points.extend(segment.forward_differences(resolution).take(resolution));
    }

    if !curve.cyclic {
        if let Some(last_point) = curve.points.last() {
            points.push(last_point.anchor);
        }
    }

    test_assert!(points.len() == tessellated_len(curve, resolution));

    Polyline::new(points, curve.cyclic)
}

///
/// Tessellates a mask outline at the resolution needed to draw it on a raster of the specified size
///
pub fn tessellate_for_raster(curve: &MaskCurve, raster_width: u32, raster_height: u32) -> Polyline {
    tessellate(curve, resolution(curve, raster_width, raster_height))
}

///
/// Returns the points along the segment following a control point, including both of its endpoints
///
/// This is empty if the point is the last point of an open outline (or doesn't exist)
///
pub fn segment_points(curve: &MaskCurve, point_index: usize, resolution: usize) -> Vec<Coord2> {
    match curve.segment(point_index) {
        Some(segment) => {
            let mut points = segment.forward_differences(resolution.max(1)).collect::<Vec<_>>();

            // Finish exactly on the end point rather than where the differences ended up
            if let Some(last_point) = points.last_mut() {
                *last_point = segment.end_point;
            }

            points
        }

        None => vec![],
    }
}
