/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Evaluating animated masks
//!
//! ```
//! # use flo_mask::*;
//! # use flo_mask::evaluate::*;
//! #
//! let mut square  = AnimatedCurve::new();
//! square.add_keyframe(0.0, MaskCurve::from_polygon(vec![Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, 0.0)], true));
//! square.add_keyframe(10.0, MaskCurve::from_polygon(vec![Coord2(0.0, 0.0), Coord2(0.0, 2.0), Coord2(2.0, 2.0), Coord2(2.0, 0.0)], true));
//!
//! let mut evaluator   = MaskEvaluator::unparented(EvaluateOptions::for_raster(512, 512));
//! let evaluated       = evaluator.evaluate_layer(&vec![square], 5.0, CurveVersion(1)).unwrap();
//!
//! assert!(evaluated.len() == 1);
//! ```
//!
//! The tessellation functions work on a single snapshot of a mask outline. `MaskEvaluator` ties these to the
//! things around them: an `AnimatedCurve` supplies the shape of each outline at a particular frame (blended by a
//! `SnapshotInterpolator`), a `ParentTransform` moves the control points into the space the mask is drawn in,
//! and a `CurveVersion` supplied by the owner of the mask decides when a cached tessellation can be reused.
//!

mod animated_curve;
mod collaborators;
mod evaluate_error;
mod evaluator;

pub use self::animated_curve::*;
pub use self::collaborators::*;
pub use self::evaluate_error::*;
pub use self::evaluator::*;
