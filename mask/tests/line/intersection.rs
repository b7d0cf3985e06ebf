/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use flo_mask::line::*;
use flo_mask::*;

use rand::prelude::*;

#[test]
fn crossing_diagonals() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 10.0));
    let line2 = (Coord2(10.0, 0.0), Coord2(0.0, 10.0));

    assert!(segments_cross(&line1, &line2));

    let crossing = segment_intersection_point(&line1, &line2).unwrap();
    assert!(crossing.distance_to(&Coord2(5.0, 5.0)) < 1e-12);
}

#[test]
fn crossing_is_symmetric() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 4.0));
    let line2 = (Coord2(3.0, -2.0), Coord2(5.0, 7.0));

    assert!(segments_cross(&line1, &line2));
    assert!(segments_cross(&line2, &line1));

    let crossing1 = segment_intersection_point(&line1, &line2).unwrap();
    let crossing2 = segment_intersection_point(&line2, &line1).unwrap();

    assert!(crossing1.distance_to(&crossing2) < 1e-9);
}

#[test]
fn separate_segments_do_not_cross() {
    let line1 = (Coord2(0.0, 0.0), Coord2(1.0, 1.0));
    let line2 = (Coord2(5.0, 0.0), Coord2(3.0, 2.0));

    assert!(!segments_cross(&line1, &line2));
    assert!(segment_intersection_point(&line1, &line2).is_none());
}

#[test]
fn segments_that_would_cross_if_extended() {
    let line1 = (Coord2(0.0, 0.0), Coord2(1.0, 1.0));
    let line2 = (Coord2(4.0, 0.0), Coord2(3.0, 1.0));

    assert!(!segments_cross(&line1, &line2));
    assert!(segment_intersection_point(&line1, &line2).is_none());
}

#[test]
fn parallel_segments_do_not_meet() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let line2 = (Coord2(0.0, 1.0), Coord2(10.0, 1.0));

    assert!(!segments_cross(&line1, &line2));
    assert!(segment_intersection_point(&line1, &line2).is_none());
}

#[test]
fn collinear_segments_are_never_reported_as_crossing() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let line2 = (Coord2(5.0, 0.0), Coord2(15.0, 0.0));

    assert!(!segments_cross(&line1, &line2));
}

#[test]
fn overlapping_collinear_segments_meet_at_an_endpoint() {
    let line1 = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));
    let line2 = (Coord2(5.0, 0.0), Coord2(15.0, 0.0));

    assert!(segment_intersection_point(&line1, &line2) == Some(Coord2(5.0, 0.0)));
}

#[test]
fn enclosing_collinear_segment_meets_at_start_of_first() {
    let line1 = (Coord2(4.0, 0.0), Coord2(6.0, 0.0));
    let line2 = (Coord2(0.0, 0.0), Coord2(10.0, 0.0));

    assert!(segment_intersection_point(&line1, &line2) == Some(Coord2(4.0, 0.0)));
}

#[test]
fn separated_collinear_segments_do_not_meet() {
    let line1 = (Coord2(0.0, 0.0), Coord2(1.0, 0.0));
    let line2 = (Coord2(5.0, 0.0), Coord2(6.0, 0.0));

    assert!(segment_intersection_point(&line1, &line2).is_none());
}

#[test]
fn segments_touching_at_endpoint_meet() {
    let line1 = (Coord2(0.0, 0.0), Coord2(2.0, 2.0));
    let line2 = (Coord2(2.0, 2.0), Coord2(4.0, 0.0));

    let meeting = segment_intersection_point(&line1, &line2).unwrap();
    assert!(meeting.distance_to(&Coord2(2.0, 2.0)) < 1e-9);
}

#[test]
fn random_crossings_are_on_both_segments() {
    let mut rng = StdRng::seed_from_u64(0x5eed);

    for _ in 0..1000 {
        let line1 = (
            Coord2(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
            Coord2(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
        );
        let line2 = (
            Coord2(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
            Coord2(rng.gen_range(-100.0..100.0), rng.gen_range(-100.0..100.0)),
        );

        if segments_cross(&line1, &line2) {
            let crossing = segment_intersection_point(&line1, &line2).unwrap();

            // The crossing point is on both lines, so the distances to each end add up to the segment length
            let on_line1 = crossing.distance_to(&line1.0) + crossing.distance_to(&line1.1) - line1.0.distance_to(&line1.1);
            let on_line2 = crossing.distance_to(&line2.0) + crossing.distance_to(&line2.1) - line2.0.distance_to(&line2.1);

            assert!(on_line1.abs() < 1e-6);
            assert!(on_line2.abs() < 1e-6);
        }
    }
}
