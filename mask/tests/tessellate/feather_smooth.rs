/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_mask::*;

#[test]
fn zero_weight_is_close_to_outline() {
    let curve = circle(4.0, 0.0).with_offset_mode(OffsetMode::Smooth);
    let outline = tessellate(&curve, 24);
    let feather = feather(&curve, 24, true);

    assert!(feather.len() == outline.len());

    for (outline_point, feather_point) in outline.iter().zip(feather.iter()) {
        assert!(outline_point.distance_to(feather_point) < 1e-9);
    }
}

#[test]
fn circle_feather_is_offset_by_weight() {
    let curve = circle(1.0, 0.25).with_offset_mode(OffsetMode::Smooth);
    let feather = feather(&curve, 32, true);

    for point in feather.iter() {
        assert!((point.magnitude() - 1.25).abs() < 1e-3);
    }
}

#[test]
fn feather_starts_on_offset_anchors() {
    let curve = circle(2.0, 0.5).with_offset_mode(OffsetMode::Smooth);
    let feather = feather(&curve, 10, true);

    assert!(feather[0].distance_to(&Coord2(2.5, 0.0)) < 1e-9);
    assert!(feather[10].distance_to(&Coord2(0.0, -2.5)) < 1e-9);
    assert!(feather[20].distance_to(&Coord2(-2.5, 0.0)) < 1e-9);
    assert!(feather[30].distance_to(&Coord2(0.0, 2.5)) < 1e-9);
}

#[test]
fn weight_point_moves_feather() {
    let curve = line_with_weight_point().with_offset_mode(OffsetMode::Smooth);
    let feather = feather(&curve, 2, true);

    assert!(feather.len() == 3);
    assert!(feather[0].distance_to(&Coord2(0.0, 1.0)) < 1e-9);
    assert!(feather[1].distance_to(&Coord2(1.5, 2.0)) < 1e-9);
    assert!(feather[2].distance_to(&Coord2(3.0, 1.0)) < 1e-9);
}

#[test]
fn weight_point_does_not_change_direction() {
    let mut curve = circle(2.0, 0.5).with_offset_mode(OffsetMode::Smooth);
    curve.points[0].set_weight_points(vec![WeightPoint::new(0.5, 2.0)]);

    let outline = tessellate(&curve, 8);
    let without_weight_points = {
        let mut plain = curve.clone();
        plain.points[0].clear_weight_points();
        feather(&plain, 8, true)
    };
    let feather = feather(&curve, 8, true);

    // The feather for the first segment is twice as far from the outline halfway along, in the same direction
    let halfway = 4;
    let plain_offset = without_weight_points[halfway] - outline[halfway];
    let offset = feather[halfway] - outline[halfway];

    assert!((offset.magnitude() - plain_offset.magnitude() * 2.0).abs() < 1e-9);
    assert!(offset.to_unit_vector().distance_to(&plain_offset.to_unit_vector()) < 1e-9);

    // The other segments are unchanged
    for idx in 8..32 {
        assert!(feather[idx] == without_weight_points[idx]);
    }
}

#[test]
fn coincident_anchors_do_not_produce_nans() {
    let curve = MaskCurve::new(
        vec![
            ControlPoint::new(Coord2(0.0, -1.0), Coord2(0.0, 0.0), Coord2(1.0, 0.0)).with_weight(0.5),
            ControlPoint::new(Coord2(-1.0, 0.0), Coord2(0.0, 0.0), Coord2(0.0, 1.0)).with_weight(0.5),
        ],
        true,
    )
    .with_offset_mode(OffsetMode::Smooth);

    let feather = feather(&curve, 8, true);

    assert!(feather.len() == 16);
    assert!(feather.iter().all(|point| point.is_finite()));
}

#[test]
fn corner_points_are_offset() {
    let anchors = vec![Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, 0.0)];
    let curve = MaskCurve::new(
        anchors.iter().map(|anchor| ControlPoint::corner(*anchor).with_weight(0.2)).collect(),
        true,
    )
    .with_offset_mode(OffsetMode::Smooth);
    let feather = feather(&curve, 4, false);

    assert!(feather.len() == 16);

    // Corners are offset along the line bisecting the corner
    let diagonal = 0.2 / f64::sqrt(2.0);
    assert!(feather[0].distance_to(&Coord2(-diagonal, -diagonal)) < 1e-9);

    for (point_index, anchor) in anchors.iter().enumerate() {
        assert!((feather[point_index * 4].distance_to(anchor) - 0.2).abs() < 1e-9);
    }

    for point in feather.iter() {
        assert!(point.x() < -0.1 || point.x() > 1.1 || point.y() < -0.1 || point.y() > 1.1);
    }
}

#[test]
fn open_corner_curve_is_offset() {
    let curve = MaskCurve::new(
        vec![
            ControlPoint::corner(Coord2(0.0, 0.0)).with_weight(0.5),
            ControlPoint::corner(Coord2(2.0, 0.0)).with_weight(0.5),
        ],
        false,
    )
    .with_offset_mode(OffsetMode::Smooth);
    let feather = feather(&curve, 2, false);

    assert!(feather.len() == 3);
    assert!(feather[0].distance_to(&Coord2(0.0, 0.5)) < 1e-9);
    assert!(feather[1].distance_to(&Coord2(1.0, 0.5)) < 1e-9);
    assert!(feather[2].distance_to(&Coord2(2.0, 0.5)) < 1e-9);
}
