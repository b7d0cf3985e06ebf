/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::feather_even::*;
use super::feather_smooth::*;
use super::resolution::*;
use crate::curve::*;
use crate::geo::*;
use crate::intersection::*;

///
/// Generates the feather for a mask outline as a polyline
///
/// The feather has the same number of points as `tessellate()` generates for the outline at the same resolution.
/// How it's built depends on the `offset_mode` of the curve. If `collapse_self_intersections` is set and the curve
/// has `self_intersection_check` switched on, loops where the feather crosses itself are collapsed before it is
/// returned.
///
pub fn feather(curve: &MaskCurve, resolution: usize, collapse_self_intersections: bool) -> Polyline {
    if curve.point_count() <= 1 {
        return Polyline::empty(curve.cyclic);
    }

    let resolution = resolution.max(1);
    let points = match curve.offset_mode {
        OffsetMode::Even => feather_even(curve, resolution),
        OffsetMode::Smooth => feather_smooth(curve, resolution),
    };

    test_assert!(points.len() == super::tessellated_len(curve, resolution));

    let mut feather = Polyline::new(points, curve.cyclic);

    if collapse_self_intersections && curve.self_intersection_check {
        collapse_inner_loops(&mut feather);
    }

    feather
}

///
/// Generates the feather for a mask outline at the resolution needed to draw it on a raster of the specified size
///
pub fn feather_for_raster(
    curve: &MaskCurve,
    raster_width: u32,
    raster_height: u32,
    collapse_self_intersections: bool,
) -> Polyline {
    feather(
        curve,
        feather_resolution(curve, raster_width, raster_height),
        collapse_self_intersections,
    )
}

///
/// Returns the points on the feather that correspond to each control point and each weight point
///
/// For each control point in order, this is the feather point at the control point itself followed by the feather
/// points for each of its weight curve points. These are the positions where a user can grab the feather to edit it.
///
pub fn feather_points(curve: &MaskCurve) -> Vec<Coord2> {
    let num_weight_points = curve.points.iter().map(|point| point.weight_points().len()).sum::<usize>();
    let mut feather_points = Vec::with_capacity(curve.point_count() + num_weight_points);

    for (point_index, point) in curve.points.iter().enumerate() {
        let normal = match curve.offset_mode {
            OffsetMode::Even => curve.normal_at(point_index, 0.0),
            OffsetMode::Smooth => curve.anchor_normal(point_index),
        };
        let weight = curve.weight_at(point_index, 0.0);

        feather_points.push(point.anchor + normal * weight);

        for weight_point in point.weight_points() {
            let sample = sample(curve, point_index, weight_point.u);

            if let Some(sample) = sample {
                feather_points.push(sample.feather_point());
            }
        }
    }

    feather_points
}
