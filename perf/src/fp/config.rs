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

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::atmosphere::Atmosphere;
use crate::measurements::{Altitude, Duration, Mass, Speed, Volume};
use crate::FuelType;

/// The fixed condition at which the alternate is flown.
///
/// A diversion is planned at best economy settings regardless of the planned
/// cruise, thus the alternate is computed at a fixed altitude, RPM and weight
/// in ISA conditions without wind.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct AlternateCondition {
    pub altitude: Altitude,
    pub rpm: u16,
    pub mass: Mass,
}

impl Default for AlternateCondition {
    fn default() -> Self {
        Self {
            altitude: Altitude::ft(4000.0),
            rpm: 2000,
            mass: Mass::kg(600.0),
        }
    }
}

/// Corrections of the cruise performance for non-standard temperature and
/// weight.
///
/// The coefficients are fractions per step, e.g. a `tas_per_15c` of 0.01
/// increases the true airspeed by 1 % for every 15 °C above the reference
/// temperature.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Corrections {
    pub tas_per_15c: f32,
    pub fuel_flow_per_15c: f32,
    /// Increase of true airspeed per 100 kg below the reference weight.
    pub tas_per_100kg: f32,
}

impl Corrections {
    /// Factor to apply to the true airspeed at a temperature deviation in °C.
    pub fn tas_temperature_factor(&self, deviation: f32) -> f32 {
        1.0 + self.tas_per_15c * deviation / 15.0
    }

    /// Factor to apply to the fuel flow at a temperature deviation in °C.
    pub fn fuel_flow_temperature_factor(&self, deviation: f32) -> f32 {
        1.0 + self.fuel_flow_per_15c * deviation / 15.0
    }

    /// Factor to apply to the true airspeed if the aircraft is `below` kg
    /// lighter than the reference weight.
    pub fn tas_weight_factor(&self, below: f32) -> f32 {
        1.0 + self.tas_per_100kg * below / 100.0
    }
}

impl Default for Corrections {
    fn default() -> Self {
        Self {
            tas_per_15c: 0.01,
            fuel_flow_per_15c: 0.025,
            tas_per_100kg: 0.033,
        }
    }
}

/// Constants of the airframe and the fuel policy.
///
/// The defaults are those of the P2008 JC. Nominal climb speed and fuel flow
/// are not tabulated and apply to every climb.
///
/// # Examples
///
/// ```
/// # use p2008_perf::prelude::*;
/// # use p2008_perf::measurements::{Duration, Speed};
/// let config = Config::default()
///     .with_climb_speed(Speed::kt(90.0))
///     .with_reserve(Duration::min(30.0));
///
/// assert_eq!(config.climb_fuel_flow, 20.0);
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// Ground speed during the climb.
    pub climb_speed: Speed,
    /// Fuel flow in l/h during the climb.
    pub climb_fuel_flow: f32,
    /// Time to fly on reserve fuel at the cruise fuel flow.
    pub reserve: Duration,
    /// Fuel for taxi, run-up and takeoff.
    pub departure_fuel: Volume,
    /// Fuel for approach and landing.
    pub landing_fuel: Volume,
    pub alternate: AlternateCondition,
    pub atmosphere: Atmosphere,
    pub corrections: Corrections,
    pub fuel_type: FuelType,
}

impl Config {
    pub fn with_climb_speed(mut self, speed: Speed) -> Self {
        self.climb_speed = speed;
        self
    }

    pub fn with_climb_fuel_flow(mut self, l_h: f32) -> Self {
        self.climb_fuel_flow = l_h;
        self
    }

    pub fn with_reserve(mut self, reserve: Duration) -> Self {
        self.reserve = reserve;
        self
    }

    pub fn with_alternate(mut self, alternate: AlternateCondition) -> Self {
        self.alternate = alternate;
        self
    }

    pub fn with_fuel_type(mut self, fuel_type: FuelType) -> Self {
        self.fuel_type = fuel_type;
        self
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            climb_speed: Speed::kt(80.0),
            climb_fuel_flow: 20.0,
            reserve: Duration::min(45.0),
            departure_fuel: Volume::l(2.0),
            landing_fuel: Volume::l(1.0),
            alternate: AlternateCondition::default(),
            atmosphere: Atmosphere::isa(),
            corrections: Corrections::default(),
            fuel_type: FuelType::AvGas,
        }
    }
}
