/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Basic geometric definitions
//!
//! `Coord2` is the point (and vector) type used throughout this crate. `Bounds` describes axis-aligned
//! bounding boxes, which can be retrieved from anything implementing `HasBoundingBox`. `Transform2D` is
//! the affine transform used to move the control points of a mask into the space of their parent.
//!

mod bounds;
mod coord2;
mod has_bounds;
mod transform;

pub use self::bounds::*;
pub use self::coord2::*;
pub use self::has_bounds::*;
pub use self::transform::*;
