/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Straight line segments
//!
//! Line segments are represented as a tuple of two points. Tessellated masks are made up of these, so
//! testing them for intersections is the basis of removing loops from a feather.
//!

mod intersection;
mod to_curve;

pub use self::intersection::*;
pub use self::to_curve::*;
