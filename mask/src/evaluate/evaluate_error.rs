/*
 * This Source Code Form is subject to the terms of the Mozilla Public
 * License, v. 2.0. If a copy of the MPL was not distributed with this
 * file, You can obtain one at https://mozilla.org/MPL/2.0/.
 */

///
/// Errors that can occur while evaluating an animated mask
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum EvaluateError {
    /// The animated curve has no keyframes, so there's no shape to evaluate
    NoKeyframes,

    /// The requested frame was not a number
    InvalidFrame,
}
