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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Measurement, UnitOfMeasure};

/// Angle unit with _rad_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum AngleUnit {
    /// Degrees referenced to true north.
    TrueNorth,
    Radians,
}

impl UnitOfMeasure<f32> for AngleUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::TrueNorth => "°",
            Self::Radians => "rad",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Radians => value,
            Self::TrueNorth => value.to_degrees(),
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Radians => *value,
            Self::TrueNorth => value.to_radians(),
        }
    }
}

/// A direction like a track, a heading or where the wind is coming from.
pub type Angle = Measurement<f32, AngleUnit>;

impl Angle {
    /// Creates a true angle in degrees.
    pub fn t(value: f32) -> Self {
        Self {
            value,
            unit: AngleUnit::TrueNorth,
        }
    }

    pub fn rad(value: f32) -> Self {
        Self {
            value,
            unit: AngleUnit::Radians,
        }
    }

    /// Returns the angle wrapped into one full turn, e.g. -30° becomes 330°.
    pub fn wrapped(self) -> Self {
        let si = self.to_si().rem_euclid(constants::PI2);
        Self::from_si(si, self.unit)
    }
}
