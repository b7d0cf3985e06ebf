/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

use smallvec::*;

///
/// How the handles of a control point are recalculated when the point is edited
///
/// This is carried along with the point but has no effect on how a mask is tessellated
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum HandleType {
    /// Handles are recalculated from the neighbouring points
    Auto,

    /// Handles point directly at the neighbouring points, producing a corner
    Vector,

    /// Handles can have different lengths but always stay on a line through the anchor
    Aligned,

    /// Handles can be moved independently
    Free,
}

///
/// A point on the weight curve that varies the feather width along the segment following a control point
///
/// `u` is the position along the segment (in the range `0..1`) and `w` is a multiplier applied to the weight
/// interpolated between the control points at either end of the segment.
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct WeightPoint {
    pub u: f64,
    pub w: f64,
}

impl WeightPoint {
    #[inline]
    pub fn new(u: f64, w: f64) -> WeightPoint {
        WeightPoint { u, w }
    }
}

///
/// A control point for a mask outline: an anchor with an incoming and outgoing bezier handle, and the width
/// of the feather at that point
///
#[derive(Clone, PartialEq, Debug)]
pub struct ControlPoint {
    /// The handle controlling the curve arriving at this point
    pub incoming: Coord2,

    /// The point the outline passes through
    pub anchor: Coord2,

    /// The handle controlling the curve leaving this point
    pub outgoing: Coord2,

    /// The width of the feather at this point
    pub weight: f64,

    /// How the handles of this point are edited
    pub handle_type: HandleType,

    /// Overrides for the feather width along the following segment, ordered by 'u'
    weight_points: SmallVec<[WeightPoint; 4]>,
}

impl ControlPoint {
    ///
    /// Creates a control point with the specified handles and a weight of 0
    ///
    pub fn new(incoming: Coord2, anchor: Coord2, outgoing: Coord2) -> ControlPoint {
        ControlPoint {
            incoming,
            anchor,
            outgoing,
            weight: 0.0,
            handle_type: HandleType::Free,
            weight_points: smallvec![],
        }
    }

    ///
    /// Creates a control point where both handles are on the anchor point
    ///
    pub fn corner(anchor: Coord2) -> ControlPoint {
        let mut point = ControlPoint::new(anchor, anchor, anchor);
        point.handle_type = HandleType::Vector;

        point
    }

    ///
    /// Returns this point with a different feather width
    ///
    pub fn with_weight(mut self, weight: f64) -> ControlPoint {
        self.weight = weight;
        self
    }

    ///
    /// Returns this point with a different handle type
    ///
    pub fn with_handle_type(mut self, handle_type: HandleType) -> ControlPoint {
        self.handle_type = handle_type;
        self
    }

    ///
    /// Returns this point with a new set of weight curve points
    ///
    pub fn with_weight_points<WeightIter: IntoIterator<Item = WeightPoint>>(mut self, weight_points: WeightIter) -> ControlPoint {
        self.set_weight_points(weight_points);
        self
    }

    ///
    /// The points that vary the feather width along the segment following this point
    ///
    #[inline]
    pub fn weight_points(&self) -> &[WeightPoint] {
        &self.weight_points
    }

    ///
    /// True if the feather width varies along the following segment
    ///
    #[inline]
    pub fn has_weight_points(&self) -> bool {
        !self.weight_points.is_empty()
    }

    ///
    /// Replaces the weight curve points for this control point
    ///
    /// Points are sorted by their 'u' value. Points outside of the range `0..1` and points that have the same 'u'
    /// value as an earlier point are discarded.
    ///
    pub fn set_weight_points<WeightIter: IntoIterator<Item = WeightPoint>>(&mut self, weight_points: WeightIter) {
        let supplied = weight_points.into_iter().collect::<SmallVec<[WeightPoint; 4]>>();
        let mut sorted = supplied
            .iter()
            .copied()
            .filter(|point| point.u >= 0.0 && point.u < 1.0)
            .collect::<SmallVec<[WeightPoint; 4]>>();

        sorted.sort_by(|a, b| a.u.total_cmp(&b.u));
        sorted.dedup_by(|later, earlier| later.u == earlier.u);

        if sorted[..] != supplied[..] {
            log::warn!(
                "Weight points were not strictly increasing in the range 0..1: kept {} of {}",
                sorted.len(),
                supplied.len()
            );
        }

        self.weight_points = sorted;
    }

    ///
    /// Adds a single weight curve point (replacing any existing point with the same 'u' value)
    ///
    pub fn add_weight_point(&mut self, weight_point: WeightPoint) {
        let mut weight_points = self
            .weight_points
            .iter()
            .copied()
            .filter(|existing| existing.u != weight_point.u)
            .collect::<SmallVec<[WeightPoint; 4]>>();

        weight_points.push(weight_point);
        weight_points.sort_by(|a, b| a.u.total_cmp(&b.u));

        self.set_weight_points(weight_points);
    }

    ///
    /// Removes all of the weight curve points from this control point
    ///
    pub fn clear_weight_points(&mut self) {
        self.weight_points.clear();
    }

    ///
    /// Returns a copy of this point with its anchor and handles moved by a transform
    ///
    pub fn transformed(&self, transform: &Transform2D) -> ControlPoint {
        ControlPoint {
            incoming: transform.transform_point(&self.incoming),
            anchor: transform.transform_point(&self.anchor),
            outgoing: transform.transform_point(&self.outgoing),
            weight: self.weight,
            handle_type: self.handle_type,
            weight_points: self.weight_points.clone(),
        }
    }
}
