/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::consts::*;
use crate::curve::*;
use crate::geo::*;

///
/// Generates feather points by offsetting the control points of each segment and tessellating the result
///
/// The anchors and handles at either end of each segment are moved along the normal of that end (scaled by the
/// control point weight). The handles are then stretched by the same ratio as the distance between the anchors,
/// so the offset segment keeps the shape of the original. Weight curves are applied afterwards by moving each
/// sample towards or away from the matching point on the outline.
///
pub(crate) fn feather_smooth(curve: &MaskCurve, resolution: usize) -> Vec<Coord2> {
    let mut feather = Vec::with_capacity(super::tessellated_len(curve, resolution));
    let segment_count = curve.segment_count();

    for (point_index, (prev_point, next_point)) in curve.point_pairs().enumerate() {
        let next_index = (point_index + 1) % curve.point_count();
        let segment = offset_segment(curve, (point_index, prev_point), (next_index, next_point));
        let first_sample = feather.len();

        feather.extend(segment.forward_differences(resolution).take(resolution));

        if prev_point.has_weight_points() {
            // The weight curve scales how far each sample is from the outline, but not the direction
            for step in 0..resolution {
                let u = (step as f64) / (resolution as f64);
                let center = curve.position_at(point_index, u);
                let weight = curve.weight_at(point_index, u);
                let base_weight = curve.base_weight_at(point_index, u);

                if base_weight.abs() > SMALL_DISTANCE {
                    let sample = &mut feather[first_sample + step];
                    let distance = sample.distance_to(&center) * (weight / base_weight);

                    *sample = sample.with_distance_from(&center, distance);
                }
            }
        }

        if !curve.cyclic && point_index + 1 == segment_count {
            feather.push(segment.end_point);
        }
    }

    feather
}

///
/// Offsets the segment between two control points by their weights
///
fn offset_segment(
    curve: &MaskCurve,
    (prev_index, prev_point): (usize, &ControlPoint),
    (next_index, next_point): (usize, &ControlPoint),
) -> CurveSegment {
    let prev_normal = curve.anchor_normal(prev_index) * prev_point.weight;
    let next_normal = curve.anchor_normal(next_index) * next_point.weight;

    let base_length = prev_point.anchor.distance_to(&next_point.anchor);

    let start_point = prev_point.anchor + prev_normal;
    let end_point = next_point.anchor + next_normal;
    let cp1 = prev_point.outgoing + prev_normal;
    let cp2 = next_point.incoming + next_normal;

    // Stretch the handles by the change in distance between the two ends
    let feather_length = start_point.distance_to(&end_point);
    let length_ratio = if base_length > SMALL_DISTANCE {
        feather_length / base_length
    } else {
        1.0
    };

    let cp1 = cp1.with_distance_from(&start_point, length_ratio * cp1.distance_to(&start_point));
    let cp2 = cp2.with_distance_from(&end_point, length_ratio * cp2.distance_to(&end_point));

    CurveSegment::from_points(start_point, (cp1, cp2), end_point)
}
