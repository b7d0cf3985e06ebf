/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::control_point::*;
use super::mask_curve::*;
use crate::consts::*;
use crate::geo::*;

///
/// The position, normal and feather width at a single point along a mask outline
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CurveSample {
    /// The point on the outline
    pub position: Coord2,

    /// Unit vector at right angles to the outline (anticlockwise from the direction of travel), or zero if the
    /// outline has no direction at this point
    pub normal: Coord2,

    /// The width of the feather at this point
    pub weight: f64,
}

impl CurveSample {
    ///
    /// The point on the feather corresponding to this sample
    ///
    #[inline]
    pub fn feather_point(&self) -> Coord2 {
        self.position + self.normal * self.weight
    }
}

///
/// Samples the outline at position `u` along the segment following the specified control point
///
/// For the last point of an open outline there is no following segment: the sample is at the anchor point
/// and the normal is derived from the point's own handles. Returns `None` if the point doesn't exist.
///
pub fn sample(curve: &MaskCurve, point_index: usize, u: f64) -> Option<CurveSample> {
    if point_index >= curve.points.len() {
        return None;
    }

    Some(CurveSample {
        position: curve.position_at(point_index, u),
        normal: curve.normal_at(point_index, u),
        weight: curve.weight_at(point_index, u),
    })
}

impl MaskCurve {
    ///
    /// The normal implied by the handles of a single control point
    ///
    /// The direction of travel is taken from the incoming handle to the anchor, or from the anchor to the outgoing
    /// handle if the incoming handle is on top of the anchor. When both handles are on the anchor (a corner), the
    /// direction runs from the previous anchor to the next one.
    ///
    pub(crate) fn anchor_normal(&self, point_index: usize) -> Coord2 {
        let point = &self.points[point_index];
        let mut tangent = point.anchor - point.incoming;

        if tangent.magnitude() <= SMALL_DISTANCE {
            tangent = point.outgoing - point.anchor;
        }

        if tangent.magnitude() <= SMALL_DISTANCE {
            let num_points = self.points.len();
            let previous = if point_index > 0 {
                Some(&self.points[point_index - 1])
            } else if self.cyclic && num_points > 1 {
                Some(&self.points[num_points - 1])
            } else {
                None
            };
            let next = self.next_index(point_index).map(|next_index| &self.points[next_index]);

            let before = previous.map(|previous| previous.anchor).unwrap_or(point.anchor);
            let after = next.map(|next| next.anchor).unwrap_or(point.anchor);

            tangent = after - before;
        }

        tangent.to_unit_vector().perpendicular()
    }

    ///
    /// The position at `u` along the segment following the specified control point
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is not the index of a point on this curve. `sample()` returns `None` instead.
    ///
    pub fn position_at(&self, point_index: usize, u: f64) -> Coord2 {
        match self.segment(point_index) {
            Some(segment) => segment.point_at_pos(u),
            None => self.points[point_index].anchor,
        }
    }

    ///
    /// The unit normal at `u` along the segment following the specified control point
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is out of range.
    ///
    pub fn normal_at(&self, point_index: usize, u: f64) -> Coord2 {
        let segment = match self.segment(point_index) {
            Some(segment) => segment,
            None => return self.anchor_normal(point_index),
        };

        let mut tangent = segment.tangent_at_pos(u);

        if tangent.magnitude() <= SMALL_DISTANCE {
            // The derivative vanishes here (usually because a handle is on top of its anchor): estimate the
            // direction from the points on either side instead
            let before = segment.point_at_pos(f64::max(u - NORMAL_FALLBACK_STEP, 0.0));
            let after = segment.point_at_pos(f64::min(u + NORMAL_FALLBACK_STEP, 1.0));

            tangent = after - before;
        }

        if tangent.magnitude() <= SMALL_DISTANCE {
            tangent = segment.end_point - segment.start_point;
        }

        tangent.to_unit_vector().perpendicular()
    }

    ///
    /// The feather width at `u` along the segment following the specified control point, including the effect
    /// of any weight curve points
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is out of range.
    ///
    pub fn weight_at(&self, point_index: usize, u: f64) -> f64 {
        let point = &self.points[point_index];
        let next = match self.next_index(point_index) {
            Some(next_index) => &self.points[next_index],
            None => return point.weight,
        };

        if u <= 0.0 {
            return point.weight;
        } else if u >= 1.0 {
            return next.weight;
        }

        // Find the span of the weight curve containing 'u' (the curve implicitly starts and ends with a multiplier of 1)
        let weight_points = point.weight_points();
        let mut span_start = WeightPoint::new(0.0, 1.0);
        let mut span_end = WeightPoint::new(1.0, 1.0);

        for idx in 0..=weight_points.len() {
            span_start = if idx == 0 {
                WeightPoint::new(0.0, 1.0)
            } else {
                weight_points[idx - 1]
            };
            span_end = if idx == weight_points.len() {
                WeightPoint::new(1.0, 1.0)
            } else {
                weight_points[idx]
            };

            if u >= span_start.u && u <= span_end.u {
                break;
            }
        }

        let span_length = span_end.u - span_start.u;
        let factor = if span_length > WEIGHT_SLOPE_EPSILON {
            (u - span_start.u) / span_length
        } else {
            0.0
        };

        let start_weight = span_start.w * base_weight(point, next, span_start.u);
        let end_weight = span_end.w * base_weight(point, next, span_end.u);

        match self.weight_interpolation {
            WeightInterpolation::Linear => (1.0 - factor) * start_weight + factor * end_weight,
            WeightInterpolation::Ease => {
                let eased = 3.0 * factor * factor - 2.0 * factor * factor * factor;
                start_weight + (end_weight - start_weight) * eased
            }
        }
    }

    ///
    /// The feather width at `u` along the segment following the specified control point, ignoring the weight
    /// curve (ie, interpolating linearly between the weights of the two control points)
    ///
    /// # Panics
    ///
    /// Panics if `point_index` is out of range.
    ///
    pub fn base_weight_at(&self, point_index: usize, u: f64) -> f64 {
        let point = &self.points[point_index];
        let next = match self.next_index(point_index) {
            Some(next_index) => &self.points[next_index],
            None => return point.weight,
        };

        if u <= 0.0 {
            point.weight
        } else if u >= 1.0 {
            next.weight
        } else {
            base_weight(point, next, u)
        }
    }
}

///
/// Linear interpolation between the weights of two control points
///
#[inline]
fn base_weight(point: &ControlPoint, next: &ControlPoint, u: f64) -> f64 {
    point.weight * (1.0 - u) + next.weight * u
}
