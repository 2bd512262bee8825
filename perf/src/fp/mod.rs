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

//! Flight performance from climb and cruise tables.
//!
//! The [`Engine`] combines the climb and cruise tables of an aircraft with a
//! [`Config`] and computes the [`FlightPerformance`] for a set of
//! [`FlightParameters`].

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Duration, Length};
use crate::{Fuel, FuelType};

mod climb;
mod config;
mod cruise;
mod engine;
mod params;
mod performance;

pub use climb::{climb, Climb};
pub use config::{AlternateCondition, Config, Corrections};
pub use cruise::{cruise, CruisePerformance};
pub use engine::Engine;
pub use params::{limits, FlightParameters, FlightParametersBuilder};
pub use performance::{Allowances, Alternate, CruiseLeg, FlightPerformance, Totals};

/// A part of the flight with the time it takes, the distance covered and the
/// fuel burned.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Segment {
    pub time: Duration,
    pub distance: Length,
    pub fuel: Fuel,
}

impl Segment {
    pub fn zero(fuel_type: FuelType) -> Self {
        Self {
            time: Duration::ZERO,
            distance: Length::nm(0.0),
            fuel: Fuel::zero(fuel_type),
        }
    }
}
