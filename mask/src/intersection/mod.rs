/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Removing self-intersections from feathers
//!
//! Offsetting an outline by more than its radius of curvature makes the offset cross over itself. `collapse_inner_loops()`
//! finds these crossings and removes the loops that they form.
//!

mod edge_buckets;
mod self_intersection;

pub use self::edge_buckets::feather_buckets_per_side;
pub use self::self_intersection::*;
