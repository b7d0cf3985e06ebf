/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

mod feather_smooth;
mod resolution;

/// Distance of the handles from the anchor for a bezier approximation of a quarter circle
const KAPPA: f64 = 0.5522847498307936;

///
/// A circle of the specified radius about the origin, running clockwise (so the normals point outwards)
///
pub fn circle(radius: f64, weight: f64) -> MaskCurve {
    let k = KAPPA * radius;
    let r = radius;

    MaskCurve::new(
        vec![
            ControlPoint::new(Coord2(r, k), Coord2(r, 0.0), Coord2(r, -k)),
            ControlPoint::new(Coord2(k, -r), Coord2(0.0, -r), Coord2(-k, -r)),
            ControlPoint::new(Coord2(-r, -k), Coord2(-r, 0.0), Coord2(-r, k)),
            ControlPoint::new(Coord2(-k, r), Coord2(0.0, r), Coord2(k, r)),
        ],
        true,
    )
    .with_weight(weight)
}

///
/// A straight line along the x axis, with a feather width of 1 that doubles halfway along
///
pub fn line_with_weight_point() -> MaskCurve {
    let mut line = MaskCurve::from_polygon(vec![Coord2(0.0, 0.0), Coord2(3.0, 0.0)], false).with_weight(1.0);
    line.points[0].set_weight_points(vec![WeightPoint::new(0.5, 2.0)]);

    line
}
