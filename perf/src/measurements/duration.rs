// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

use std::fmt;
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A time span in seconds.
///
/// Durations are displayed as hours and minutes, e.g. `1:05`.
#[derive(Copy, Clone, PartialEq, PartialOrd, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Duration {
    s: f32,
}

impl Duration {
    pub const ZERO: Duration = Duration { s: 0.0 };

    pub fn s(value: f32) -> Self {
        Self { s: value }
    }

    pub fn min(value: f32) -> Self {
        Self { s: value * 60.0 }
    }

    pub fn h(value: f32) -> Self {
        Self { s: value * 3600.0 }
    }

    pub fn as_secs(&self) -> f32 {
        self.s
    }

    pub fn as_minutes(&self) -> f32 {
        self.s / 60.0
    }

    pub fn as_hours(&self) -> f32 {
        self.s / 3600.0
    }

    /// Returns the whole hours and the remaining minutes rounded to the
    /// nearest minute.
    pub fn hours_minutes(&self) -> (u32, u32) {
        let minutes = self.as_minutes().max(0.0).round() as u32;
        (minutes / 60, minutes % 60)
    }
}

impl fmt::Display for Duration {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (h, m) = self.hours_minutes();
        let tmp = format!("{h}:{m:02}");
        f.pad(&tmp)
    }
}

impl Add for Duration {
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self { s: self.s + rhs.s }
    }
}

impl Sub for Duration {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self { s: self.s - rhs.s }
    }
}

impl Mul<f32> for Duration {
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self { s: self.s * rhs }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_hours_and_minutes() {
        assert_eq!(Duration::h(1.5).to_string(), "1:30");
        assert_eq!(Duration::min(5.0).to_string(), "0:05");
    }

    #[test]
    fn minutes_never_round_to_sixty() {
        // 1 h 59 min 50 s rounds up to the next full hour
        assert_eq!(Duration::s(7190.0).to_string(), "2:00");
    }
}
