/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

use super::collaborators::*;
use super::evaluate_error::*;
use crate::curve::*;

///
/// The shape of a mask at a particular frame
///
#[derive(Clone, PartialEq, Debug)]
pub struct CurveKeyframe {
    pub frame: f64,
    pub curve: MaskCurve,
}

///
/// A mask outline whose shape changes over time, described by a series of keyframes
///
#[derive(Clone, PartialEq, Debug, Default)]
pub struct AnimatedCurve {
    /// The keyframes, ordered by frame
    keyframes: Vec<CurveKeyframe>,
}

impl AnimatedCurve {
    ///
    /// Creates an animated curve with no keyframes
    ///
    pub fn new() -> AnimatedCurve {
        AnimatedCurve { keyframes: vec![] }
    }

    ///
    /// Creates an animated curve that has the same shape at every frame
    ///
    pub fn from_curve(curve: MaskCurve) -> AnimatedCurve {
        AnimatedCurve {
            keyframes: vec![CurveKeyframe { frame: 0.0, curve }],
        }
    }

    ///
    /// Sets the shape of the curve at a particular frame (replacing any existing keyframe at that frame)
    ///
    /// A NaN frame has no place in the ordering, so the keyframe is ignored.
    ///
    pub fn add_keyframe(&mut self, frame: f64, curve: MaskCurve) {
        if frame.is_nan() {
            log::warn!("Ignoring mask keyframe with a NaN frame");
            return;
        }

        let index = self.keyframes.partition_point(|keyframe| keyframe.frame < frame);

        if index < self.keyframes.len() && self.keyframes[index].frame == frame {
            self.keyframes[index].curve = curve;
        } else {
            self.keyframes.insert(index, CurveKeyframe { frame, curve });
        }
    }

    #[inline]
    pub fn keyframes(&self) -> &[CurveKeyframe] {
        &self.keyframes
    }

    ///
    /// Works out the shape of this curve at a particular frame
    ///
    /// Frames before the first keyframe or after the last keyframe use the shape of that keyframe. Frames in
    /// between two keyframes are blended by the interpolator.
    ///
    pub fn curve_at(&self, frame: f64, interpolator: &impl SnapshotInterpolator) -> Result<MaskCurve, EvaluateError> {
        if frame.is_nan() {
            return Err(EvaluateError::InvalidFrame);
        }

        let next_index = self.keyframes.partition_point(|keyframe| keyframe.frame <= frame);

        if self.keyframes.is_empty() {
            Err(EvaluateError::NoKeyframes)
        } else if next_index == 0 {
            Ok(self.keyframes[0].curve.clone())
        } else if next_index == self.keyframes.len() {
            Ok(self.keyframes[next_index - 1].curve.clone())
        } else {
            let previous = &self.keyframes[next_index - 1];
            let next = &self.keyframes[next_index];

            if previous.frame == frame {
                Ok(previous.curve.clone())
            } else {
                let factor = (frame - previous.frame) / (next.frame - previous.frame);
                Ok(interpolator.interpolate(&previous.curve, &next.curve, factor))
            }
        }
    }
}
