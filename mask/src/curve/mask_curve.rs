/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::control_point::*;
use super::segment::*;
use crate::geo::*;
use crate::line::*;

use itertools::*;

///
/// How the feather of a mask is generated from its outline
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum OffsetMode {
    /// Every sample of the outline is moved along its normal by the feather width. Robust, but doesn't preserve
    /// the shape of the outline well when it's been scaled unevenly.
    Even,

    /// The control points are moved along the normals at either end of each segment, and the moved curve is
    /// tessellated again. Keeps the feather smooth, but is less stable when the feather is very wide.
    Smooth,
}

///
/// How the feather width is interpolated between the points of a weight curve
///
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum WeightInterpolation {
    /// Straight lines between the weight points
    Linear,

    /// Eases in and out of each weight point
    Ease,
}

///
/// The outline of a mask: a series of control points joined by cubic bezier segments
///
#[derive(Clone, PartialEq, Debug)]
pub struct MaskCurve {
    /// The control points for this outline, in order
    pub points: Vec<ControlPoint>,

    /// True if the last point joins back up to the first point
    pub cyclic: bool,

    /// How the feather is generated
    pub offset_mode: OffsetMode,

    /// How the feather width varies between weight points
    pub weight_interpolation: WeightInterpolation,

    /// True if loops in the feather should be removed
    pub self_intersection_check: bool,
}

impl MaskCurve {
    ///
    /// Creates a new mask outline from a list of control points
    ///
    pub fn new(points: Vec<ControlPoint>, cyclic: bool) -> MaskCurve {
        MaskCurve {
            points,
            cyclic,
            offset_mode: OffsetMode::Even,
            weight_interpolation: WeightInterpolation::Linear,
            self_intersection_check: false,
        }
    }

    ///
    /// Creates an outline made up of straight lines between the specified points
    ///
    pub fn from_polygon<PointIter: IntoIterator<Item = Coord2>>(points: PointIter, cyclic: bool) -> MaskCurve {
        let anchors = points.into_iter().collect::<Vec<_>>();
        let num_anchors = anchors.len();

        let control_points = (0..num_anchors)
            .map(|idx| {
                let anchor = anchors[idx];
                let prev = if idx > 0 {
                    Some(anchors[idx - 1])
                } else if cyclic && num_anchors > 1 {
                    Some(anchors[num_anchors - 1])
                } else {
                    None
                };
                let next = if idx + 1 < num_anchors {
                    Some(anchors[idx + 1])
                } else if cyclic && num_anchors > 1 {
                    Some(anchors[0])
                } else {
                    None
                };

                let incoming = prev.map(|prev| straight_handles(&anchor, &prev).0).unwrap_or(anchor);
                let outgoing = next.map(|next| straight_handles(&anchor, &next).0).unwrap_or(anchor);

                ControlPoint::new(incoming, anchor, outgoing).with_handle_type(HandleType::Vector)
            })
            .collect();

        MaskCurve::new(control_points, cyclic)
    }

    ///
    /// Returns this outline with a different feather offset mode
    ///
    pub fn with_offset_mode(mut self, offset_mode: OffsetMode) -> MaskCurve {
        self.offset_mode = offset_mode;
        self
    }

    ///
    /// Returns this outline with a different interpolation between weight points
    ///
    pub fn with_weight_interpolation(mut self, weight_interpolation: WeightInterpolation) -> MaskCurve {
        self.weight_interpolation = weight_interpolation;
        self
    }

    ///
    /// Returns this outline with self-intersection removal for the feather switched on or off
    ///
    pub fn with_self_intersection_check(mut self, self_intersection_check: bool) -> MaskCurve {
        self.self_intersection_check = self_intersection_check;
        self
    }

    ///
    /// Returns this outline with the same feather width at every control point
    ///
    pub fn with_weight(mut self, weight: f64) -> MaskCurve {
        self.points.iter_mut().for_each(|point| point.weight = weight);
        self
    }

    #[inline]
    pub fn point_count(&self) -> usize {
        self.points.len()
    }

    ///
    /// The number of bezier segments in this outline (0 if there are too few points to form a curve)
    ///
    pub fn segment_count(&self) -> usize {
        match self.points.len() {
            0 | 1 => 0,
            num_points => {
                if self.cyclic {
                    num_points
                } else {
                    num_points - 1
                }
            }
        }
    }

    ///
    /// The index of the point following the specified one, if there is one
    ///
    pub fn next_index(&self, point_index: usize) -> Option<usize> {
        let num_points = self.points.len();

        if num_points <= 1 || point_index >= num_points {
            None
        } else if point_index + 1 < num_points {
            Some(point_index + 1)
        } else if self.cyclic {
            Some(0)
        } else {
            None
        }
    }

    ///
    /// The bezier segment that starts at the specified control point
    ///
    pub fn segment(&self, point_index: usize) -> Option<CurveSegment> {
        let next_index = self.next_index(point_index)?;

        Some(CurveSegment::between(&self.points[point_index], &self.points[next_index]))
    }

    ///
    /// Iterates over the pairs of control points at the start and end of each segment
    ///
    pub fn point_pairs(&self) -> impl Iterator<Item = (&ControlPoint, &ControlPoint)> {
        let wrap_around = if self.cyclic && self.points.len() > 1 {
            self.points.first()
        } else {
            None
        };

        self.points.iter().chain(wrap_around).tuple_windows()
    }

    ///
    /// Iterates over the bezier segments making up this outline
    ///
    pub fn segments(&self) -> impl Iterator<Item = CurveSegment> + '_ {
        self.point_pairs().map(|(start, end)| CurveSegment::between(start, end))
    }

    ///
    /// Returns a copy of this outline with every control point transformed
    ///
    /// The function is passed the index of each control point, and returns the transform for that point (or `None`
    /// to leave it where it is)
    ///
    pub fn transformed(&self, transform_for_point: impl Fn(usize) -> Option<Transform2D>) -> MaskCurve {
        let points = self
            .points
            .iter()
            .enumerate()
            .map(|(idx, point)| match transform_for_point(idx) {
                Some(transform) => point.transformed(&transform),
                None => point.clone(),
            })
            .collect();

        MaskCurve {
            points,
            cyclic: self.cyclic,
            offset_mode: self.offset_mode,
            weight_interpolation: self.weight_interpolation,
            self_intersection_check: self.self_intersection_check,
        }
    }
}

impl HasBoundingBox for MaskCurve {
    ///
    /// The bounding box of the control polygon (which always encloses the curve itself)
    ///
    fn get_bounding_box(&self) -> Bounds {
        Bounds::bounds_for_points(
            self.points
                .iter()
                .flat_map(|point| vec![point.incoming, point.anchor, point.outgoing]),
        )
    }
}
