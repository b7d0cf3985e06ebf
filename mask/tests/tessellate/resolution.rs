/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::*;

use flo_mask::*;

#[test]
fn unknown_raster_size_uses_default_segment_length() {
    let curve = circle(0.1, 0.0);

    assert!(resolution(&curve, 0, 0) == resolution(&curve, 100, 100));
}

#[test]
fn resolution_increases_with_raster_size() {
    let curve = circle(0.05, 0.0);
    let mut last_resolution = 0;

    for size in [1, 2, 10, 50, 100, 200, 500, 1000, 2000, 4000].iter() {
        let resolution = resolution(&curve, *size, *size);

        assert!(resolution >= last_resolution);
        assert!(resolution >= 1 && resolution <= RESOL_MAX);

        last_resolution = resolution;
    }

    assert!(last_resolution == RESOL_MAX);
}

#[test]
fn larger_side_decides_resolution() {
    let curve = circle(0.05, 0.0);

    assert!(resolution(&curve, 200, 50) == resolution(&curve, 200, 200));
    assert!(resolution(&curve, 50, 200) == resolution(&curve, 200, 200));
}

#[test]
fn unit_square_resolution() {
    let square = MaskCurve::from_polygon(vec![Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, 0.0)], true);
    let resolution = resolution(&square, 0, 0);

    // Each side is 1 unit long, and the default segment length is 0.01
    assert!(resolution >= 99 && resolution <= 100);
}

#[test]
fn tiny_curve_has_resolution_of_one() {
    let curve = circle(0.0001, 0.0);

    assert!(resolution(&curve, 100, 100) == 1);
}

#[test]
fn huge_curve_is_limited() {
    let curve = circle(1000.0, 0.0);

    assert!(resolution(&curve, 1920, 1080) == RESOL_MAX);
    assert!(feather_resolution(&curve, 1920, 1080) == RESOL_MAX);
}

#[test]
fn empty_curve_has_resolution_of_one() {
    let curve = MaskCurve::new(vec![], true);

    assert!(resolution(&curve, 1920, 1080) == 1);
    assert!(feather_resolution(&curve, 1920, 1080) == 1);
}

#[test]
fn feather_resolution_matches_outline_without_weight_points() {
    let curve = circle(0.05, 0.02);

    assert!(feather_resolution(&curve, 512, 512) == resolution(&curve, 512, 512));
    assert!(max_weight_slope(&curve) == 0.0);
}

#[test]
fn weight_slope_increases_feather_resolution() {
    let mut curve = circle(0.0001, 0.0);
    curve.points[0].set_weight_points(vec![WeightPoint::new(0.5, 0.025)]);

    let base = resolution(&curve, 100, 100);
    let feather = feather_resolution(&curve, 100, 100);

    // The slope from the start of the segment to the weight point is 0.05, which adds 0.05/0.005 samples
    assert!((max_weight_slope(&curve) - 0.05).abs() < 1e-12);
    assert!(feather >= base + 9 && feather <= base + 10);
}

#[test]
fn slope_is_measured_between_weight_points() {
    let mut curve = circle(0.0001, 0.0);
    curve.points[2].weight = 0.5;
    curve.points[2].set_weight_points(vec![WeightPoint::new(0.25, 0.5), WeightPoint::new(0.5, 0.25)]);

    // Flat from the control point to the first weight point, then a slope of 1.0
    assert!((max_weight_slope(&curve) - 1.0).abs() < 1e-12);
}

#[test]
fn steep_weight_slope_hits_maximum() {
    let mut curve = circle(0.0001, 0.0);
    curve.points[1].set_weight_points(vec![WeightPoint::new(0.1, 5.0)]);

    assert!(feather_resolution(&curve, 100, 100) == RESOL_MAX);
}
