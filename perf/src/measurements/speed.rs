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

use std::ops::Mul;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{constants, Duration, Length, Measurement, UnitOfMeasure};

/// Speed unit with _m/s_ as SI unit.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum SpeedUnit {
    MetersPerSecond,
    KilometersPerHour,
    Knots,
}

impl UnitOfMeasure<f32> for SpeedUnit {
    fn symbol(&self) -> &'static str {
        match self {
            Self::MetersPerSecond => "m/s",
            Self::KilometersPerHour => "km/h",
            Self::Knots => "kt",
        }
    }

    fn from_si(value: f32, to: &Self) -> f32 {
        match to {
            Self::MetersPerSecond => value,
            Self::KilometersPerHour => {
                value * constants::KILOMETERS_PER_HOUR_IN_METER_PER_SECONDS
            }
            Self::Knots => value * constants::METER_PER_SECONDS_IN_KNOTS,
        }
    }

    fn to_si(&self, value: &f32) -> f32 {
        match self {
            Self::MetersPerSecond => *value,
            Self::KilometersPerHour => {
                value / constants::KILOMETERS_PER_HOUR_IN_METER_PER_SECONDS
            }
            Self::Knots => value / constants::METER_PER_SECONDS_IN_KNOTS,
        }
    }
}

pub type Speed = Measurement<f32, SpeedUnit>;

impl Speed {
    pub fn kt(value: f32) -> Self {
        Self {
            value,
            unit: SpeedUnit::Knots,
        }
    }

    pub fn m_s(value: f32) -> Self {
        Self {
            value,
            unit: SpeedUnit::MetersPerSecond,
        }
    }

    pub fn km_h(value: f32) -> Self {
        Self {
            value,
            unit: SpeedUnit::KilometersPerHour,
        }
    }

    /// Returns the speed in knots.
    pub fn to_kt(&self) -> f32 {
        *self.convert_to(SpeedUnit::Knots).value()
    }
}

/// The distance covered at the speed within a duration.
impl Mul<Duration> for Speed {
    type Output = Length;

    fn mul(self, rhs: Duration) -> Self::Output {
        Length::from_si(self.to_si() * rhs.as_secs(), super::LengthUnit::NauticalMiles)
    }
}
