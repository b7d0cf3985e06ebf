/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

/// Maximum number of samples generated for a single bezier segment (shared by the outline and the feather)
pub const RESOL_MAX: usize = 128;

/// Target length of a tessellated edge when no raster size is known
pub const DEFAULT_SEGMENT_LENGTH: f64 = 0.01;

/// Change in feather weight per unit of 'u' that demands one extra sample per segment
pub const FEATHER_SLOPE_SEGMENT: f64 = 0.005;

/// Differences in 'u' smaller than this are ignored when measuring how quickly a feather changes
pub const WEIGHT_SLOPE_EPSILON: f64 = f32::EPSILON as f64;

/// Lengths smaller than this are treated as zero (used to avoid divisions that would produce NaN or infinity)
pub const SMALL_DISTANCE: f64 = 1e-12;

/// Step in 'u' used to estimate a direction when the derivative of a curve vanishes
pub const NORMAL_FALLBACK_STEP: f64 = 0.05;

/// Largest number of buckets along each side of the grid used to find feather self-intersections
pub const MAX_BUCKETS_PER_SIDE: usize = 512;

/// Fraction of a bucket that the longest feather edge is allowed to cover
pub const BUCKET_FILL_FACTOR: f64 = 0.9;

/// Amount a collapsed bounding box is padded by on either side before the bucket grid is built
pub const COLLAPSED_BOUNDS_PADDING: f64 = 0.01;

/// Tolerance on the 't' parameter when calculating where two line segments meet
pub const SEGMENT_ENDPOINT_BIAS: f64 = 1e-6;
