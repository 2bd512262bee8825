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

use super::{Climb, CruisePerformance, Segment};
use crate::core::WindComponents;
use crate::measurements::{Angle, Duration, Speed, Temperature};
use crate::Fuel;

/// The cruise from the top of climb to the destination.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CruiseLeg {
    pub performance: CruisePerformance,
    pub ground_speed: Speed,
    pub segment: Segment,
}

/// The diversion to the alternate.
///
/// The performance is `None` if no alternate is planned.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Alternate {
    pub performance: Option<CruisePerformance>,
    pub segment: Segment,
}

/// Fuel on top of the trip fuel.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Allowances {
    pub departure: Fuel,
    pub landing: Fuel,
    pub reserve: Fuel,
    pub extra: Fuel,
}

impl Allowances {
    pub fn total(&self) -> Fuel {
        self.departure + self.landing + self.reserve + self.extra
    }
}

#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Totals {
    /// Time in the air from takeoff to landing at the alternate.
    pub time: Duration,
    /// The fuel required on ramp.
    pub fuel: Fuel,
}

/// The performance of a flight computed by the [`Engine`].
///
/// [`Engine`]: super::Engine
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightPerformance {
    pub(super) isa_temperature: Temperature,
    pub(super) temperature: Temperature,
    pub(super) temperature_deviation: Temperature,
    pub(super) wind: WindComponents,
    pub(super) wca: Option<Angle>,
    pub(super) heading: Option<Angle>,
    pub(super) climb: Climb,
    pub(super) cruise: CruiseLeg,
    pub(super) alternate: Alternate,
    pub(super) allowances: Allowances,
    pub(super) totals: Totals,
}

impl FlightPerformance {
    /// The ISA temperature at the cruise altitude.
    pub fn isa_temperature(&self) -> &Temperature {
        &self.isa_temperature
    }

    /// The temperature at the cruise altitude.
    pub fn temperature(&self) -> &Temperature {
        &self.temperature
    }

    /// The deviation of the temperature at cruise altitude from ISA.
    pub fn temperature_deviation(&self) -> &Temperature {
        &self.temperature_deviation
    }

    /// The wind along and across the track.
    pub fn wind(&self) -> &WindComponents {
        &self.wind
    }

    /// The wind correction angle (WCA) at cruise or `None` if the track
    /// can't be held.
    pub fn wca(&self) -> Option<&Angle> {
        self.wca.as_ref()
    }

    /// The true heading considering the wind correction angle.
    pub fn heading(&self) -> Option<&Angle> {
        self.heading.as_ref()
    }

    pub fn climb(&self) -> &Climb {
        &self.climb
    }

    pub fn cruise(&self) -> &CruiseLeg {
        &self.cruise
    }

    pub fn alternate(&self) -> &Alternate {
        &self.alternate
    }

    pub fn allowances(&self) -> &Allowances {
        &self.allowances
    }

    pub fn totals(&self) -> &Totals {
        &self.totals
    }

    /// The fuel burned from takeoff to landing at the destination.
    pub fn trip_fuel(&self) -> Fuel {
        self.climb.segment.fuel + self.cruise.segment.fuel
    }
}
