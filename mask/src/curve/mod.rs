/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Mask outlines
//!
//! ```
//! # use flo_mask::*;
//! #
//! let square  = MaskCurve::from_polygon(vec![Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, 0.0)], true)
//!     .with_weight(0.1);
//! let sample  = sample(&square, 0, 0.5).unwrap();
//!
//! assert!((sample.feather_point().x() - -0.1).abs() < 1e-9);
//! ```
//!
//! A `MaskCurve` is a list of `ControlPoint`s joined by cubic bezier segments, which can be open or closed. Each
//! control point has a weight, which is the width of the feather at that point. The weight can be varied along a
//! segment by adding `WeightPoint`s to the control point at its start.
//!
//! The `sample()` function finds the position, normal and feather width at any point along a mask outline.
//!

mod control_point;
mod mask_curve;
mod polyline;
mod sample;
mod segment;

pub use self::control_point::*;
pub use self::mask_curve::*;
pub use self::polyline::*;
pub use self::sample::*;
pub use self::segment::*;
