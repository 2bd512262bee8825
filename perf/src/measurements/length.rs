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

use std::ops::Div;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Duration, Measurement, Speed, UnitOfMeasure};

/// Length unit with _m_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum LengthUnit {
    Meters,
    Kilometers,
    NauticalMiles,
}

impl UnitOfMeasure<f32> for LengthUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::Meters => "m",
            Self::Kilometers => "km",
            Self::NauticalMiles => "NM",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::Meters => value,
            Self::Kilometers => value / constants::KILOMETER_IN_METER,
            Self::NauticalMiles => value / constants::NAUTICAL_MILE_IN_METER,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::Meters => *value,
            Self::Kilometers => value * constants::KILOMETER_IN_METER,
            Self::NauticalMiles => value * constants::NAUTICAL_MILE_IN_METER,
        }
    }
}

/// A horizontal distance.
pub type Length = Measurement<f32, LengthUnit>;

impl Length {
    pub fn m(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Meters,
        }
    }

    pub fn km(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::Kilometers,
        }
    }

    pub fn nm(value: f32) -> Self {
        Self {
            value,
            unit: LengthUnit::NauticalMiles,
        }
    }

    /// Returns the length in nautical miles.
    pub fn to_nm(&self) -> f32 {
        *self.convert_to(LengthUnit::NauticalMiles).value()
    }
}

/// The time it takes to cover the distance at a speed.
impl Div<Speed> for Length {
    type Output = Duration;

    fn div(self, rhs: Speed) -> Self::Output {
        Duration::s(self.to_si() / rhs.to_si())
    }
}
