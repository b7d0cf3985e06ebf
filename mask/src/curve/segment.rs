/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::control_point::*;
use crate::geo::*;

///
/// A single cubic bezier section of a mask outline
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct CurveSegment {
    pub start_point: Coord2,
    pub control_points: (Coord2, Coord2),
    pub end_point: Coord2,
}

impl CurveSegment {
    ///
    /// Creates a segment from its start point, control points and end point
    ///
    #[inline]
    pub fn from_points(start_point: Coord2, control_points: (Coord2, Coord2), end_point: Coord2) -> CurveSegment {
        CurveSegment {
            start_point,
            control_points,
            end_point,
        }
    }

    ///
    /// The segment that runs from one control point to the next
    ///
    #[inline]
    pub fn between(start: &ControlPoint, end: &ControlPoint) -> CurveSegment {
        CurveSegment::from_points(start.anchor, (start.outgoing, end.incoming), end.anchor)
    }

    ///
    /// Finds the point at the specified position along this segment (using de Casteljau's algorithm)
    ///
    pub fn point_at_pos(&self, t: f64) -> Coord2 {
        let (cp1, cp2) = self.control_points;

        let q0 = self.start_point.lerp(&cp1, t);
        let q1 = cp1.lerp(&cp2, t);
        let q2 = cp2.lerp(&self.end_point, t);

        let r0 = q0.lerp(&q1, t);
        let r1 = q1.lerp(&q2, t);

        r0.lerp(&r1, t)
    }

    ///
    /// Returns a vector pointing along the direction of the segment at the specified position
    ///
    /// This is proportional to the derivative (the length is not meaningful), and will be zero where the
    /// derivative vanishes (for instance, at an endpoint whose handle lies on top of it)
    ///
    pub fn tangent_at_pos(&self, t: f64) -> Coord2 {
        let (cp1, cp2) = self.control_points;

        let q0 = self.start_point.lerp(&cp1, t);
        let q1 = cp1.lerp(&cp2, t);
        let q2 = cp2.lerp(&self.end_point, t);

        let r0 = q0.lerp(&q1, t);
        let r1 = q1.lerp(&q2, t);

        r1 - r0
    }

    ///
    /// Length of the control polygon of this segment (an upper bound on the length of the curve)
    ///
    pub fn control_polygon_length(&self) -> f64 {
        let (cp1, cp2) = self.control_points;

        self.start_point.distance_to(&cp1) + cp1.distance_to(&cp2) + cp2.distance_to(&self.end_point)
    }

    ///
    /// Evaluates `steps + 1` evenly spaced points along this segment (including both endpoints) by forward differencing
    ///
    #[inline]
    pub fn forward_differences(&self, steps: usize) -> ForwardDifferences {
        ForwardDifferences::new(self, steps)
    }
}

///
/// Iterator that generates evenly-spaced points along a cubic bezier segment using forward differences
///
/// The cubic is rewritten as a polynomial in the sample index, after which each point only takes three additions
/// per axis to generate. The first point is exactly the start point of the segment, the last is the end point
/// (subject to the error accumulated by the additions).
///
#[derive(Clone, Debug)]
pub struct ForwardDifferences {
    point: Coord2,
    first_difference: Coord2,
    second_difference: Coord2,
    third_difference: Coord2,
    remaining: usize,
}

impl ForwardDifferences {
    ///
    /// Creates an iterator that returns `steps + 1` points (there are `steps` equal divisions in 't')
    ///
    pub fn new(segment: &CurveSegment, steps: usize) -> ForwardDifferences {
        let steps = steps.max(1);
        let (cp1, cp2) = segment.control_points;

        let q0 = segment.start_point;
        let q1 = cp1;
        let q2 = cp2;
        let q3 = segment.end_point;

        // Polynomial coefficients, pre-divided by the step size raised to the matching power
        let f = steps as f64;
        let rt1 = (q1 - q0) * (3.0 / f);
        let f = f * f;
        let rt2 = (q0 - q1 * 2.0 + q2) * (3.0 / f);
        let f = f * steps as f64;
        let rt3 = (q3 - q0 + (q1 - q2) * 3.0) * (1.0 / f);

        ForwardDifferences {
            point: q0,
            first_difference: rt1 + rt2 + rt3,
            second_difference: rt2 * 2.0 + rt3 * 6.0,
            third_difference: rt3 * 6.0,
            remaining: steps + 1,
        }
    }
}

impl Iterator for ForwardDifferences {
    type Item = Coord2;

    fn next(&mut self) -> Option<Coord2> {
        if self.remaining == 0 {
            return None;
        }

        let point = self.point;

        self.point += self.first_difference;
        self.first_difference += self.second_difference;
        self.second_difference += self.third_difference;
        self.remaining -= 1;

        Some(point)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for ForwardDifferences {}
