/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::curve::*;
use crate::geo::*;

///
/// Token identifying a particular version of the data for a mask
///
/// The evaluator doesn't interpret this: it only checks whether or not it has changed since the last time a curve
/// was evaluated. Whatever owns the mask should supply a new version whenever it is edited.
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct CurveVersion(pub u64);

///
/// Produces the shape of a mask between two of its keyframes
///
pub trait SnapshotInterpolator {
    ///
    /// Blends two versions of a curve. `factor` is 0 for the `from` curve and 1 for the `to` curve.
    ///
    fn interpolate(&self, from: &MaskCurve, to: &MaskCurve, factor: f64) -> MaskCurve;
}

///
/// Supplies the transforms that move the control points of a mask into the space of whatever they're attached to
///
pub trait ParentTransform {
    ///
    /// Returns the transform for a control point at a particular frame, or `None` if the point is not attached to anything
    ///
    fn point_transform(&self, curve_index: usize, point_index: usize, frame: f64) -> Option<Transform2D>;
}

///
/// Interpolates mask shapes by blending the position of each control point in a straight line
///
/// Both shapes need the same number of control points: if they differ, the nearer of the two shapes is used
/// as-is. Weight curves are blended if they have the same number of points, and taken from the nearer shape
/// otherwise.
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct LinearInterpolator;

impl SnapshotInterpolator for LinearInterpolator {
    fn interpolate(&self, from: &MaskCurve, to: &MaskCurve, factor: f64) -> MaskCurve {
        let nearest = if factor < 0.5 { from } else { to };

        if from.point_count() != to.point_count() {
            log::warn!(
                "Can't blend mask shapes with {} and {} points",
                from.point_count(),
                to.point_count()
            );

            return nearest.clone();
        }

        let points = from
            .points
            .iter()
            .zip(to.points.iter())
            .zip(nearest.points.iter())
            .map(|((from_point, to_point), nearest_point)| {
                let weight_points = if from_point.weight_points().len() == to_point.weight_points().len() {
                    from_point
                        .weight_points()
                        .iter()
                        .zip(to_point.weight_points().iter())
                        .map(|(from_weight, to_weight)| {
                            WeightPoint::new(
                                lerp(from_weight.u, to_weight.u, factor),
                                lerp(from_weight.w, to_weight.w, factor),
                            )
                        })
                        .collect::<Vec<_>>()
                } else {
                    nearest_point.weight_points().to_vec()
                };

                ControlPoint::new(
                    from_point.incoming.lerp(&to_point.incoming, factor),
                    from_point.anchor.lerp(&to_point.anchor, factor),
                    from_point.outgoing.lerp(&to_point.outgoing, factor),
                )
                .with_weight(lerp(from_point.weight, to_point.weight, factor))
                .with_handle_type(nearest_point.handle_type)
                .with_weight_points(weight_points)
            })
            .collect();

        MaskCurve {
            points,
            cyclic: nearest.cyclic,
            offset_mode: nearest.offset_mode,
            weight_interpolation: nearest.weight_interpolation,
            self_intersection_check: nearest.self_intersection_check,
        }
    }
}

#[inline]
fn lerp(from: f64, to: f64, factor: f64) -> f64 {
    from + (to - from) * factor
}

///
/// Parent transform for masks that aren't attached to anything
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct NoParent;

impl ParentTransform for NoParent {
    fn point_transform(&self, _curve_index: usize, _point_index: usize, _frame: f64) -> Option<Transform2D> {
        None
    }
}

///
/// Parent transform that applies the same transform to every control point of every curve
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct FixedParent(pub Transform2D);

impl ParentTransform for FixedParent {
    fn point_transform(&self, _curve_index: usize, _point_index: usize, _frame: f64) -> Option<Transform2D> {
        Some(self.0)
    }
}
