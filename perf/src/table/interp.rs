// SPDX-License-Identifier: Apache-2.0
// Copyright 2024, 2026 Joe Pearson
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Piecewise linear interpolation over tabulated breakpoints.

/// Linear interpolation between `a` and `b` at the fraction `t`.
pub fn lerp(a: f32, b: f32, t: f32) -> f32 {
    a + (b - a) * t
}

/// Interpolates `ys` over the ascending breakpoints `xs` at `x`.
///
/// Queries outside of the breakpoints are clamped to the first or last value
/// instead of being extrapolated. A single breakpoint yields its value for
/// any query. Returns `None` if there are no breakpoints or the slices
/// differ in length.
pub fn piecewise(x: f32, xs: &[f32], ys: &[f32]) -> Option<f32> {
    if xs.is_empty() || xs.len() != ys.len() {
        return None;
    }

    let last = xs.len() - 1;

    if x <= xs[0] {
        return Some(ys[0]);
    }

    if x >= xs[last] {
        return Some(ys[last]);
    }

    // the first breakpoint above x exists since x < xs[last]
    let upper = xs.partition_point(|&bp| bp <= x);
    let lower = upper - 1;
    let span = xs[upper] - xs[lower];

    if span <= 0.0 {
        Some(ys[upper])
    } else {
        Some(lerp(ys[lower], ys[upper], (x - xs[lower]) / span))
    }
}
