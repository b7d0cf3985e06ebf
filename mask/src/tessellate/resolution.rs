/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::curve::*;

///
/// Estimates the number of samples per segment needed to draw a mask outline smoothly at a particular raster size
///
/// The length of the control polygon of each segment is used as an upper bound on its length, and the segment is
/// divided so that each edge is around a pixel long. A raster size of 0x0 means 'unknown' and uses a fixed edge
/// length instead. The result is always in the range `1..=RESOL_MAX`.
///
pub fn resolution(curve: &MaskCurve, raster_width: u32, raster_height: u32) -> usize {
    let max_segment = if raster_width == 0 && raster_height == 0 {
        DEFAULT_SEGMENT_LENGTH
    } else {
        1.0 / (u32::max(raster_width, raster_height) as f64)
    };

    let mut resolution = 1;

    for segment in curve.segments() {
        let segment_resolution = (segment.control_polygon_length() / max_segment) as usize;
        resolution = usize::max(resolution, segment_resolution);

        if resolution >= RESOL_MAX {
            break;
        }
    }

    resolution.clamp(1, RESOL_MAX)
}

///
/// Estimates the number of samples per segment needed to draw the feather of a mask outline
///
/// This is the outline resolution, increased where the weight curves change the feather width abruptly.
///
pub fn feather_resolution(curve: &MaskCurve, raster_width: u32, raster_height: u32) -> usize {
    let resolution = resolution(curve, raster_width, raster_height);

    // Can't go any higher than the maximum, so no need to look at the weights
    if resolution >= RESOL_MAX {
        return RESOL_MAX;
    }

    let max_slope = max_weight_slope(curve);
    let extra_resolution = (max_slope / FEATHER_SLOPE_SEGMENT) as usize;

    resolution.saturating_add(extra_resolution).clamp(1, RESOL_MAX)
}

///
/// Finds the largest rate of change of the feather width between consecutive weight points in a curve
///
/// Each weight curve is taken to start at the weight of its control point. Pairs of weight points that are too
/// close together to give a meaningful slope are ignored.
///
pub fn max_weight_slope(curve: &MaskCurve) -> f64 {
    let mut max_slope: f64 = 0.0;

    for point in curve.points.iter() {
        let mut prev_u = 0.0;
        let mut prev_w = point.weight;

        for weight_point in point.weight_points() {
            let w_diff = weight_point.w - prev_w;
            let u_diff = weight_point.u - prev_u;

            if u_diff > WEIGHT_SLOPE_EPSILON {
                max_slope = f64::max(max_slope, (w_diff / u_diff).abs());
            }

            prev_u = weight_point.u;
            prev_w = weight_point.w;
        }
    }

    max_slope
}
