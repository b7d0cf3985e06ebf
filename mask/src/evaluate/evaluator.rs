/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::animated_curve::*;
use super::collaborators::*;
use super::evaluate_error::*;
use crate::curve::*;
use crate::tessellate::*;

use std::collections::HashMap;

#[cfg(feature = "multithreading")]
use rayon::prelude::*;

///
/// Settings that control how masks are evaluated
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct EvaluateOptions {
    /// Width of the raster the mask will be drawn on (0 if unknown)
    pub raster_width: u32,

    /// Height of the raster the mask will be drawn on (0 if unknown)
    pub raster_height: u32,

    /// Whether or not to remove loops from the feathers of curves that request it
    pub collapse_self_intersections: bool,
}

impl Default for EvaluateOptions {
    fn default() -> EvaluateOptions {
        EvaluateOptions {
            raster_width: 0,
            raster_height: 0,
            collapse_self_intersections: true,
        }
    }
}

impl EvaluateOptions {
    ///
    /// Options for drawing on a raster of a particular size
    ///
    pub fn for_raster(raster_width: u32, raster_height: u32) -> EvaluateOptions {
        EvaluateOptions {
            raster_width,
            raster_height,
            ..EvaluateOptions::default()
        }
    }
}

///
/// A mask outline and its feather, tessellated into polylines
///
#[derive(Clone, PartialEq, Debug)]
pub struct EvaluatedCurve {
    /// The curve that was tessellated (after animation and parent transforms were applied)
    pub curve: MaskCurve,

    /// The number of samples per segment used for the outline
    pub resolution: usize,

    /// The number of samples per segment used for the feather
    pub feather_resolution: usize,

    /// The tessellated outline
    pub outline: Polyline,

    /// The tessellated feather
    pub feather: Polyline,
}

///
/// Tessellates the outline and feather of a single curve
///
pub fn evaluate_curve(curve: &MaskCurve, options: &EvaluateOptions) -> EvaluatedCurve {
    let resolution = resolution(curve, options.raster_width, options.raster_height);
    let feather_resolution = feather_resolution(curve, options.raster_width, options.raster_height);

    let outline = tessellate(curve, resolution);
    let feather = feather(curve, feather_resolution, options.collapse_self_intersections);

    log::debug!(
        "Evaluated mask curve with {} points: resolution {}, feather resolution {}",
        curve.point_count(),
        resolution,
        feather_resolution
    );

    EvaluatedCurve {
        curve: curve.clone(),
        resolution,
        feather_resolution,
        outline,
        feather,
    }
}

///
/// Tessellates a set of curves one after the other
///
pub fn evaluate_curves(curves: &[MaskCurve], options: &EvaluateOptions) -> Vec<EvaluatedCurve> {
    curves.iter().map(|curve| evaluate_curve(curve, options)).collect()
}

///
/// Tessellates a set of curves in parallel
///
/// Every curve is independent, so this produces exactly the same result as `evaluate_curves()`
///
#[cfg(feature = "multithreading")]
pub fn evaluate_curves_parallel(curves: &[MaskCurve], options: &EvaluateOptions) -> Vec<EvaluatedCurve> {
    curves.par_iter().map(|curve| evaluate_curve(curve, options)).collect()
}

///
/// Identifies the inputs that produced a cached curve
///
#[derive(Copy, Clone, PartialEq, Debug)]
struct CacheKey {
    version: CurveVersion,
    frame: u64,
    options: EvaluateOptions,
}

///
/// Evaluates the curves of an animated mask at particular frames, caching the results until the mask changes
///
/// The interpolator works out the shape of each curve between its keyframes, and the parent transform moves its
/// control points into the space the mask is drawn in.
///
pub struct MaskEvaluator<Interpolator, Parent> {
    interpolator: Interpolator,
    parent: Parent,
    options: EvaluateOptions,

    /// The last result for each curve, indexed by its position in the layer
    cache: HashMap<usize, (CacheKey, EvaluatedCurve)>,
}

impl MaskEvaluator<LinearInterpolator, NoParent> {
    ///
    /// Creates an evaluator for masks that aren't attached to anything, using linear interpolation between keyframes
    ///
    pub fn unparented(options: EvaluateOptions) -> MaskEvaluator<LinearInterpolator, NoParent> {
        MaskEvaluator::new(LinearInterpolator, NoParent, options)
    }
}

impl<Interpolator, Parent> MaskEvaluator<Interpolator, Parent>
where
    Interpolator: SnapshotInterpolator,
    Parent: ParentTransform,
{
    ///
    /// Creates a new evaluator
    ///
    pub fn new(interpolator: Interpolator, parent: Parent, options: EvaluateOptions) -> MaskEvaluator<Interpolator, Parent> {
        MaskEvaluator {
            interpolator,
            parent,
            options,
            cache: HashMap::new(),
        }
    }

    #[inline]
    pub fn options(&self) -> &EvaluateOptions {
        &self.options
    }

    ///
    /// Changes the options used for future evaluations
    ///
    pub fn set_options(&mut self, options: EvaluateOptions) {
        self.options = options;
    }

    ///
    /// Discards all of the cached curves
    ///
    pub fn invalidate(&mut self) {
        self.cache.clear();
    }

    ///
    /// The number of curves with a cached result
    ///
    pub fn cached_curve_count(&self) -> usize {
        self.cache.len()
    }

    ///
    /// Works out the shape of one curve of a layer at a particular frame, with the parent transforms applied
    ///
    pub fn curve_at(&self, curve_index: usize, animated: &AnimatedCurve, frame: f64) -> Result<MaskCurve, EvaluateError> {
        let curve = animated.curve_at(frame, &self.interpolator)?;
        let parent = &self.parent;

        Ok(curve.transformed(|point_index| parent.point_transform(curve_index, point_index, frame)))
    }

    ///
    /// Evaluates a single curve of a layer, reusing the cached result if the version, frame and options are unchanged
    ///
    pub fn evaluate(
        &mut self,
        curve_index: usize,
        animated: &AnimatedCurve,
        frame: f64,
        version: CurveVersion,
    ) -> Result<EvaluatedCurve, EvaluateError> {
        let key = self.cache_key(frame, version);

        if let Some((cached_key, cached)) = self.cache.get(&curve_index) {
            if *cached_key == key {
                log::debug!("Using cached tessellation for mask curve {}", curve_index);
                return Ok(cached.clone());
            }
        }

        let curve = self.curve_at(curve_index, animated, frame)?;
        let evaluated = evaluate_curve(&curve, &self.options);

        self.cache.insert(curve_index, (key, evaluated.clone()));

        Ok(evaluated)
    }

    ///
    /// Evaluates every curve in a layer at a particular frame
    ///
    /// Curves that have to be tessellated again are processed in parallel when the `multithreading` feature is on.
    ///
    pub fn evaluate_layer(
        &mut self,
        layer: &[AnimatedCurve],
        frame: f64,
        version: CurveVersion,
    ) -> Result<Vec<EvaluatedCurve>, EvaluateError> {
        let key = self.cache_key(frame, version);

        // Curves that no longer exist can't be reused
        self.cache.retain(|curve_index, _| *curve_index < layer.len());

        // Work out which curves need to be tessellated again
        let mut stale_indexes = vec![];
        let mut stale_curves = vec![];

        for (curve_index, animated) in layer.iter().enumerate() {
            let is_cached = match self.cache.get(&curve_index) {
                Some((cached_key, _)) => *cached_key == key,
                None => false,
            };

            if !is_cached {
                stale_indexes.push(curve_index);
                stale_curves.push(self.curve_at(curve_index, animated, frame)?);
            }
        }

        log::debug!(
            "Evaluating mask layer at frame {}: {} of {} curves changed",
            frame,
            stale_curves.len(),
            layer.len()
        );

        #[cfg(feature = "multithreading")]
        let evaluated = evaluate_curves_parallel(&stale_curves, &self.options);

        #[cfg(not(feature = "multithreading"))]
        let evaluated = evaluate_curves(&stale_curves, &self.options);

        for (curve_index, evaluated) in stale_indexes.into_iter().zip(evaluated.into_iter()) {
            self.cache.insert(curve_index, (key, evaluated));
        }

        Ok((0..layer.len())
            .filter_map(|curve_index| self.cache.get(&curve_index).map(|(_, evaluated)| evaluated.clone()))
            .collect())
    }

    fn cache_key(&self, frame: f64, version: CurveVersion) -> CacheKey {
        CacheKey {
            version,
            frame: frame.to_bits(),
            options: self.options,
        }
    }
}
