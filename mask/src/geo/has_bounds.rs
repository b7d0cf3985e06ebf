/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::bounds::*;
use super::coord2::*;

///
/// Trait implemented by types that have a bounding box associated with them
///
pub trait HasBoundingBox {
    ///
    /// Returns the bounding box that encloses this item
    ///
    fn get_bounding_box(&self) -> Bounds;
}

impl HasBoundingBox for [Coord2] {
    fn get_bounding_box(&self) -> Bounds {
        Bounds::bounds_for_points(self.iter().copied())
    }
}

impl HasBoundingBox for Vec<Coord2> {
    fn get_bounding_box(&self) -> Bounds {
        self.as_slice().get_bounding_box()
    }
}
