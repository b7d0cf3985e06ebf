/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use crate::geo::*;

///
/// Returns the control points that turn a straight line into a bezier curve
///
/// The handles are placed a third of the way along the line from either end, so the curve is also
/// parametrised evenly along the line.
///
pub fn straight_handles(from: &Coord2, to: &Coord2) -> (Coord2, Coord2) {
    let point_distance = *to - *from;
    let (cp1, cp2) = (
        *from + point_distance * (1.0 / 3.0),
        *from + point_distance * (2.0 / 3.0),
    );

    (cp1, cp2)
}
