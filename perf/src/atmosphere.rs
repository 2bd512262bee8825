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

//! Temperature model of the lower atmosphere.
//!
//! Both the temperature at cruise altitude and the ISA reference temperature
//! are derived with a constant lapse rate per 1000 ft. The P2008 JC flight
//! manual rounds the ISA lapse rate of 1.98 °C to 2 °C per 1000 ft.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Altitude, Temperature};

/// Linear temperature model with a sea level temperature and lapse rate.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Atmosphere {
    /// The ISA temperature at sea level.
    pub sea_level: Temperature,
    /// Decrease of temperature in °C per 1000 ft.
    pub lapse_rate: f32,
}

impl Atmosphere {
    /// The standard atmosphere with 15 °C at sea level and 2 °C per 1000 ft.
    pub fn isa() -> Self {
        Self {
            sea_level: Temperature::c(15.0),
            lapse_rate: 2.0,
        }
    }

    /// Returns the ISA temperature at the pressure altitude.
    pub fn isa_temperature(&self, altitude: Altitude) -> Temperature {
        Temperature::c(self.sea_level.to_celsius() - altitude.to_ft() / 1000.0 * self.lapse_rate)
    }

    /// Returns the temperature at the `target` altitude extrapolated from the
    /// temperature measured at the airfield.
    pub fn temperature_at(
        &self,
        surface: Temperature,
        airfield: Altitude,
        target: Altitude,
    ) -> Temperature {
        let climb_ft = target.to_ft() - airfield.to_ft();
        Temperature::c(surface.to_celsius() - climb_ft / 1000.0 * self.lapse_rate)
    }

    /// Returns the deviation of the temperature from ISA at the altitude.
    ///
    /// A positive deviation means the air is warmer than standard.
    pub fn isa_deviation(&self, temperature: Temperature, altitude: Altitude) -> Temperature {
        Temperature::c(temperature.to_celsius() - self.isa_temperature(altitude).to_celsius())
    }
}

impl Default for Atmosphere {
    fn default() -> Self {
        Self::isa()
    }
}
