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

use std::fmt;
use std::str::FromStr;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::Error;
use crate::measurements::{Angle, AngleUnit, Speed, SpeedUnit};

/// Wind with the direction it's coming from and its speed.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Wind {
    /// The true direction from which the wind is blowing.
    pub direction: Angle,
    pub speed: Speed,
}

impl Wind {
    pub fn new(direction: Angle, speed: Speed) -> Self {
        Self { direction, speed }
    }

    pub fn calm() -> Self {
        Self::new(Angle::t(0.0), Speed::kt(0.0))
    }

    /// Splits the wind into its components along and across the track.
    ///
    /// The headwind is positive if the wind opposes the aircraft and negative
    /// for a tailwind. The crosswind is positive if the wind comes from the
    /// right of the track.
    pub fn components(&self, track: &Angle) -> WindComponents {
        let angle = (self.direction - *track).to_si();
        let unit = *self.speed.unit();

        WindComponents {
            headwind: Speed::from_si(self.speed.to_si() * angle.cos(), unit),
            crosswind: Speed::from_si(self.speed.to_si() * angle.sin(), unit),
        }
    }

    /// Returns the wind correction angle to hold the track at the true
    /// airspeed, or `None` if the wind is too strong to hold the track.
    pub fn wind_correction_angle(&self, tas: &Speed, track: &Angle) -> Option<Angle> {
        let wind_azimuth = self.direction + Angle::t(180.0);
        // the angle between the direction the wind is blowing to and the track
        let wind_angle = *track - wind_azimuth;

        // The law of sines gives us
        //
        //   sin(wca) / ws = sin(wind_angle) / tas
        //
        // from which we get the wca as following:
        let sin_wca = self.speed / *tas * wind_angle.to_si().sin();

        if sin_wca.abs() > 1.0 || !sin_wca.is_finite() {
            None
        } else {
            Some(Angle::from_si(sin_wca.asin(), AngleUnit::TrueNorth).wrapped())
        }
    }
}

impl Default for Wind {
    fn default() -> Self {
        Self::calm()
    }
}

impl FromStr for Wind {
    type Err = Error;

    /// Parses a wind like it's reported in a METAR, e.g. `18020KT` for 20 kt
    /// from 180° or `27005MPS` for 5 m/s from 270°.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let err = || Error::UnexpectedString(s.to_string());

        let direction: f32 = s.get(0..3).and_then(|d| d.parse().ok()).ok_or_else(err)?;
        let rest = s.get(3..).ok_or_else(err)?;
        let digits = rest.find(|c: char| !c.is_ascii_digit()).ok_or_else(err)?;
        let value: f32 = rest[..digits].parse().map_err(|_| err())?;

        let speed = match &rest[digits..] {
            "KT" => Speed::kt(value),
            "MPS" => Speed::m_s(value),
            "KMH" => Speed::km_h(value),
            _ => return Err(err()),
        };

        if direction >= 360.0 {
            return Err(err());
        }

        Ok(Self::new(Angle::t(direction), speed))
    }
}

impl fmt::Display for Wind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:03.0}{:02.0}KT",
            self.direction.value(),
            self.speed.convert_to(SpeedUnit::Knots).value()
        )
    }
}

/// The wind split along and across a track.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct WindComponents {
    /// Component against the direction of flight; negative for a tailwind.
    pub headwind: Speed,
    /// Component across the track; positive from the right.
    pub crosswind: Speed,
}

impl WindComponents {
    /// Returns the ground speed flown at the true airspeed.
    pub fn ground_speed(&self, tas: Speed) -> Speed {
        tas - self.headwind
    }

    pub fn is_tailwind(&self) -> bool {
        self.headwind.is_sign_negative()
    }
}
