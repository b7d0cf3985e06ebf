/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

use std::f64::consts::PI;

#[test]
fn identity_leaves_points_alone() {
    let point = Coord2(3.0, -2.0);

    assert!(Transform2D::identity().transform_point(&point) == point);
    assert!(Transform2D::default().is_identity());
}

#[test]
fn translate_point() {
    let moved = Transform2D::translate(2.0, 3.0).transform_point(&Coord2(1.0, 1.0));

    assert!(moved == Coord2(3.0, 4.0));
}

#[test]
fn scale_point() {
    let moved = Transform2D::scale(2.0, 0.5).transform_point(&Coord2(3.0, 4.0));

    assert!(moved == Coord2(6.0, 2.0));
}

#[test]
fn rotate_is_anticlockwise() {
    let moved = Transform2D::rotate_radians(PI / 2.0).transform_point(&Coord2(1.0, 0.0));

    assert!(moved.distance_to(&Coord2(0.0, 1.0)) < 1e-12);
}

#[test]
fn multiply_applies_right_hand_side_first() {
    let combined = Transform2D::translate(10.0, 0.0) * Transform2D::scale(2.0, 2.0);
    let moved = combined.transform_point(&Coord2(1.0, 1.0));

    assert!(moved == Coord2(12.0, 2.0));
    assert!(!combined.is_identity());
}
