/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::curve::*;
use crate::geo::*;

///
/// Generates feather points by moving each tessellated point of an outline along its normal by the feather width
///
/// The positions are generated in exactly the same way as `tessellate()` does, so the feather lines up point for
/// point with the tessellated outline (and a feather width of 0 reproduces the outline exactly).
///
pub(crate) fn feather_even(curve: &MaskCurve, resolution: usize) -> Vec<Coord2> {
    let mut feather = Vec::with_capacity(super::tessellated_len(curve, resolution));
    let segment_count = curve.segment_count();

    for (point_index, segment) in curve.segments().enumerate() {
        let positions = segment.forward_differences(resolution).take(resolution);

        for (step, position) in positions.enumerate() {
            let u = (step as f64) / (resolution as f64);
            let normal = curve.normal_at(point_index, u);
            let weight = curve.weight_at(point_index, u);

            feather.push(position + normal * weight);
        }

        if !curve.cyclic && point_index + 1 == segment_count {
            // Open outlines finish with the last anchor point
            let normal = curve.normal_at(point_index, 1.0);
            let weight = curve.weight_at(point_index, 1.0);

            feather.push(segment.end_point + normal * weight);
        }
    }

    feather
}
