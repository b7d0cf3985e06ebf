/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

//!
//! # Converting mask outlines into polylines
//!
//! ```
//! # use flo_mask::*;
//! #
//! let triangle    = MaskCurve::from_polygon(vec![Coord2(0.0, 0.0), Coord2(0.0, 1.0), Coord2(1.0, 0.0)], true)
//!     .with_weight(0.05);
//!
//! let resolution  = resolution(&triangle, 256, 256);
//! let outline     = tessellate(&triangle, resolution);
//! let feather     = feather(&triangle, feather_resolution(&triangle, 256, 256), true);
//!
//! assert!(outline.len() == resolution * 3);
//! ```
//!
//! `resolution()` picks the number of samples per bezier segment that's needed to make an outline look smooth
//! on a raster of a particular size, and `tessellate()` uses forward differencing to generate those samples.
//! `feather()` generates a second polyline offset from the outline by the weights of its control points, and
//! `feather_resolution()` picks a resolution for it that also takes into account how quickly the weights change.
//!

mod feather;
mod feather_even;
mod feather_smooth;
mod resolution;
mod tessellate;

pub use self::feather::*;
pub use self::resolution::*;
pub use self::tessellate::*;
