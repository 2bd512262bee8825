// SPDX-License-Identifier: Apache-2.0
// Copyright 2024 Joe Pearson
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

use std::fmt::{Display, Formatter, Result};
use std::ops::{Add, Mul, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::measurements::{Density, Duration, Mass, Volume};

mod constants {
    use super::Density;

    pub const AVGAS_AT_ISA: Density = Density::kg_per_l(0.72);
    pub const MOGAS_AT_ISA: Density = Density::kg_per_l(0.74);
}

/// Type of fuel burned by the engine.
///
/// The Rotax 912 of the P2008 JC is approved for unleaded automotive fuel
/// and AvGas. Each fuel type has a density at ISA conditions which is used to
/// weigh the planned fuel.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuelType {
    /// Aviation gasoline (100LL) with density of 0.72 kg/L at ISA.
    #[default]
    AvGas,
    /// Unleaded automotive gasoline with density of 0.74 kg/L at ISA.
    Mogas,
}

impl FuelType {
    /// Returns the density of the fuel type at ISA conditions.
    pub fn density(&self) -> Density {
        match self {
            Self::AvGas => constants::AVGAS_AT_ISA,
            Self::Mogas => constants::MOGAS_AT_ISA,
        }
    }
}

/// Fuel quantity of a specific type.
///
/// The performance tables publish fuel in liters, so the quantity is kept as
/// volume and weighed on demand.
///
/// # Examples
///
/// ```
/// # use p2008_perf::prelude::*;
/// # use p2008_perf::measurements::Volume;
/// let total = Fuel::new(Volume::l(50.0), FuelType::AvGas)
///     + Fuel::new(Volume::l(25.0), FuelType::AvGas);
/// assert_eq!(total.volume(), Volume::l(75.0));
/// ```
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Fuel {
    pub fuel_type: FuelType,
    pub volume: Volume,
}

impl Fuel {
    /// Creates new fuel from volume.
    pub fn new(volume: Volume, fuel_type: FuelType) -> Self {
        Self { fuel_type, volume }
    }

    /// Creates no fuel of the type.
    pub fn zero(fuel_type: FuelType) -> Self {
        Self::new(Volume::l(0.0), fuel_type)
    }

    /// Creates new fuel from mass using the fuel type's density at ISA
    /// conditions.
    pub fn from_mass(mass: Mass, fuel_type: FuelType) -> Self {
        Self {
            fuel_type,
            volume: mass / fuel_type.density(),
        }
    }

    pub fn volume(self) -> Volume {
        self.volume
    }

    /// Returns the mass of fuel at ISA conditions.
    pub fn mass(self) -> Mass {
        self.volume * self.fuel_type.density()
    }
}

impl Display for Fuel {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let tmp = if let Some(precision) = f.precision() {
            format!("{:.precision$}", self.volume)
        } else {
            format!("{}", self.volume)
        };

        f.pad_integral(true, "", &tmp)
    }
}

impl Add for Fuel {
    type Output = Fuel;

    fn add(self, rhs: Self) -> Self::Output {
        if self.fuel_type == rhs.fuel_type {
            Fuel {
                fuel_type: self.fuel_type,
                volume: self.volume + rhs.volume,
            }
        } else {
            self
        }
    }
}

impl Sub for Fuel {
    type Output = Fuel;

    fn sub(self, rhs: Self) -> Self::Output {
        if self.fuel_type == rhs.fuel_type {
            Self {
                fuel_type: self.fuel_type,
                volume: self.volume - rhs.volume,
            }
        } else {
            self
        }
    }
}

impl Mul<f32> for Fuel {
    type Output = Fuel;

    fn mul(self, rhs: f32) -> Self {
        Self {
            fuel_type: self.fuel_type,
            volume: self.volume * rhs,
        }
    }
}

/// Fuel burned per time.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum FuelFlow {
    PerHour(Fuel),
}

impl FuelFlow {
    /// Creates a fuel flow in liter per hour.
    pub fn l_h(value: f32, fuel_type: FuelType) -> Self {
        Self::PerHour(Fuel::new(Volume::l(value), fuel_type))
    }

    /// Returns the fuel flow in liter per hour.
    pub fn to_l_h(&self) -> f32 {
        match self {
            Self::PerHour(fuel) => fuel.volume.to_l(),
        }
    }
}

impl Display for FuelFlow {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let tmp = if let Some(precision) = f.precision() {
            format!("{:.precision$} l/h", self.to_l_h())
        } else {
            format!("{} l/h", self.to_l_h())
        };

        f.pad_integral(true, "", &tmp)
    }
}

impl Mul<f32> for FuelFlow {
    type Output = FuelFlow;

    fn mul(self, rhs: f32) -> Self::Output {
        match self {
            Self::PerHour(fuel) => Self::PerHour(fuel * rhs),
        }
    }
}

impl Mul<Duration> for FuelFlow {
    type Output = Fuel;

    fn mul(self, rhs: Duration) -> Self::Output {
        match self {
            Self::PerHour(fuel) => fuel * rhs.as_hours(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fuel_from_mass() {
        let lhs = Fuel::from_mass(Mass::kg(7.2), FuelType::AvGas);
        assert!((lhs.volume().to_l() - 10.0).abs() < 0.001);
    }

    #[test]
    fn add_fuel() {
        let lhs = avgas!(Volume::l(10.0));
        let rhs = avgas!(Volume::l(10.0));
        assert_eq!(lhs + rhs, avgas!(Volume::l(20.0)));
    }

    #[test]
    fn sub_fuel() {
        let lhs = mogas!(Volume::l(10.0));
        let rhs = mogas!(Volume::l(10.0));
        assert_eq!(lhs - rhs, mogas!(Volume::l(0.0)));
    }

    #[test]
    fn mixed_fuel_types_are_not_added() {
        let lhs = avgas!(Volume::l(10.0));
        let rhs = mogas!(Volume::l(5.0));
        assert_eq!(lhs + rhs, lhs);
    }

    #[test]
    fn mul_fuel_flow() {
        let lhs = FuelFlow::l_h(10.0, FuelType::AvGas);
        let rhs = Duration::s(7200.0); // 2h
        assert_eq!(lhs * rhs, avgas!(Volume::l(20.0)));
    }

    #[test]
    fn display_fuel_flow() {
        assert_eq!(format!("{:.2}", FuelFlow::l_h(12.6, FuelType::AvGas)), "12.60 l/h");
    }
}
