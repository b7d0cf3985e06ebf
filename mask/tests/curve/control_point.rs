/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::*;

#[test]
fn new_point_has_no_weight() {
    let point = ControlPoint::new(Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0));

    assert!(point.weight == 0.0);
    assert!(point.handle_type == HandleType::Free);
    assert!(!point.has_weight_points());
}

#[test]
fn corner_has_handles_on_anchor() {
    let point = ControlPoint::corner(Coord2(3.0, 4.0));

    assert!(point.incoming == Coord2(3.0, 4.0));
    assert!(point.outgoing == Coord2(3.0, 4.0));
    assert!(point.handle_type == HandleType::Vector);
}

#[test]
fn weight_points_are_sorted() {
    let point = ControlPoint::corner(Coord2(0.0, 0.0)).with_weight_points(vec![
        WeightPoint::new(0.75, 2.0),
        WeightPoint::new(0.25, 3.0),
        WeightPoint::new(0.5, 1.0),
    ]);

    let u_values = point.weight_points().iter().map(|point| point.u).collect::<Vec<_>>();

    assert!(u_values == vec![0.25, 0.5, 0.75]);
}

#[test]
fn weight_points_outside_segment_are_discarded() {
    let point = ControlPoint::corner(Coord2(0.0, 0.0)).with_weight_points(vec![
        WeightPoint::new(-0.25, 2.0),
        WeightPoint::new(0.5, 1.5),
        WeightPoint::new(1.0, 3.0),
        WeightPoint::new(1.5, 3.0),
    ]);

    assert!(point.weight_points() == &[WeightPoint::new(0.5, 1.5)]);
}

#[test]
fn duplicate_weight_points_keep_the_first() {
    let point = ControlPoint::corner(Coord2(0.0, 0.0)).with_weight_points(vec![
        WeightPoint::new(0.5, 1.5),
        WeightPoint::new(0.5, 3.0),
    ]);

    assert!(point.weight_points() == &[WeightPoint::new(0.5, 1.5)]);
}

#[test]
fn add_weight_point_keeps_order() {
    let mut point = ControlPoint::corner(Coord2(0.0, 0.0));

    point.add_weight_point(WeightPoint::new(0.6, 1.0));
    point.add_weight_point(WeightPoint::new(0.2, 2.0));
    point.add_weight_point(WeightPoint::new(0.4, 3.0));

    let u_values = point.weight_points().iter().map(|point| point.u).collect::<Vec<_>>();
    assert!(u_values == vec![0.2, 0.4, 0.6]);
}

#[test]
fn add_weight_point_replaces_existing() {
    let mut point = ControlPoint::corner(Coord2(0.0, 0.0));

    point.add_weight_point(WeightPoint::new(0.5, 1.0));
    point.add_weight_point(WeightPoint::new(0.5, 4.0));

    assert!(point.weight_points() == &[WeightPoint::new(0.5, 4.0)]);
}

#[test]
fn clear_weight_points() {
    let mut point = ControlPoint::corner(Coord2(0.0, 0.0)).with_weight_points(vec![WeightPoint::new(0.5, 1.5)]);

    assert!(point.has_weight_points());
    point.clear_weight_points();
    assert!(!point.has_weight_points());
}

#[test]
fn transform_moves_anchor_and_handles() {
    let point = ControlPoint::new(Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(2.0, 1.0))
        .with_weight(0.5)
        .with_weight_points(vec![WeightPoint::new(0.5, 2.0)]);
    let moved = point.transformed(&Transform2D::translate(10.0, 20.0));

    assert!(moved.incoming == Coord2(10.0, 21.0));
    assert!(moved.anchor == Coord2(11.0, 21.0));
    assert!(moved.outgoing == Coord2(12.0, 21.0));
    assert!(moved.weight == 0.5);
    assert!(moved.weight_points() == point.weight_points());
}
