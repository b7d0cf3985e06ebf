/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # flo_mask
//!
//! ```toml
//! flo_mask = "0.1"
//! ```
//!
//! flo_mask turns the outline of a mask, described as a series of bezier control points, into polylines that can be
//! rasterized: one following the outline itself, and one following the outer edge of its feather (a soft border
//! whose width can vary along the outline).
//!
//! ```
//! # use flo_mask::*;
//! #
//! let square = MaskCurve::from_polygon(vec![Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 1.0), Coord2(1.0, 0.0)], true)
//!     .with_weight(0.1)
//!     .with_offset_mode(OffsetMode::Smooth)
//!     .with_self_intersection_check(true);
//!
//! let outline = tessellate(&square, resolution(&square, 1920, 1080));
//! let feather = feather(&square, feather_resolution(&square, 1920, 1080), true);
//! ```
//!
//! Feathers are generated by offsetting the outline along its normal: where the feather is wider than the outline is
//! curved, this will produce loops that can be removed with `collapse_inner_loops()`.
//!
//! The `evaluate` module deals with masks that change over time, are attached to other objects or are made up of
//! several outlines.
//!

#[macro_use]
mod test_assert;

mod consts;
pub mod curve;
pub mod evaluate;
pub mod geo;
pub mod intersection;
pub mod line;
pub mod tessellate;

pub use self::consts::*;
pub use self::curve::*;
pub use self::geo::*;
pub use self::intersection::*;
pub use self::tessellate::*;
