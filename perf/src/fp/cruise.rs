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

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::Config;
use crate::error::Result;
use crate::measurements::{Altitude, Mass, Speed, Temperature};
use crate::table::CruiseTable;
use crate::FuelFlow;

/// Cruise performance corrected for temperature and weight.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CruisePerformance {
    /// The corrected true airspeed.
    pub tas: Speed,
    /// The corrected fuel flow.
    pub fuel_flow: FuelFlow,
    /// True airspeed of the reference row.
    pub base_tas: Speed,
    /// Fuel flow of the reference row.
    pub base_fuel_flow: FuelFlow,
    /// Weight of the reference row.
    pub reference_mass: Mass,
    /// Deviation of the actual from the row's reference temperature.
    pub temperature_deviation: f32,
}

impl fmt::Display for CruisePerformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} KTAS, {:.2} l/h", self.tas.to_kt(), self.fuel_flow.to_l_h())
    }
}

/// Looks up the cruise performance at the altitude and RPM and corrects it
/// for the temperature at altitude and the aircraft's weight.
///
/// # Errors
///
/// Returns [`NoCruiseData`] if the table has no row for the altitude and RPM.
///
/// [`NoCruiseData`]: crate::Error::NoCruiseData
pub fn cruise(
    table: &CruiseTable,
    altitude: Altitude,
    rpm: u16,
    mass: Mass,
    temperature: Temperature,
    config: &Config,
) -> Result<CruisePerformance> {
    let row = table.reference(altitude.to_ft(), rpm)?;

    let isa = config.atmosphere.isa_temperature(altitude).to_celsius();
    let deviation = temperature.to_celsius() - (isa + row.isa_deviation);

    let corrections = &config.corrections;
    let tas = row.ktas
        * corrections.tas_temperature_factor(deviation)
        * corrections.tas_weight_factor(row.weight - mass.to_kg());
    let fuel_flow = row.fuel_flow * corrections.fuel_flow_temperature_factor(deviation);

    let performance = CruisePerformance {
        tas: Speed::kt(tas),
        fuel_flow: FuelFlow::l_h(fuel_flow, config.fuel_type),
        base_tas: Speed::kt(row.ktas),
        base_fuel_flow: FuelFlow::l_h(row.fuel_flow, config.fuel_type),
        reference_mass: Mass::kg(row.weight),
        temperature_deviation: deviation,
    };

    debug!(
        "cruise at {altitude:.0}, {rpm} RPM and {mass:.0} with ΔT {deviation:.1} °C: {performance}"
    );

    Ok(performance)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Error;

    const CRUISE: &str = "\
Pressure Altitude [ft],Propeller RPM,Weight [kg],KTAS,Fuel Consumption [lt/hr]
4000,2000,650,84,12.6
4000,2000,550,88,12.6
6000,2100,650,90,14.4
";

    fn table() -> CruiseTable {
        CRUISE.parse().unwrap()
    }

    #[test]
    fn reference_weight_at_isa_is_uncorrected() {
        // ISA at 4000 ft is 7 °C
        let perf = cruise(
            &table(),
            Altitude::ft(4000.0),
            2000,
            Mass::kg(650.0),
            Temperature::c(7.0),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(perf.tas, Speed::kt(84.0));
        assert_eq!(perf.fuel_flow.to_l_h(), 12.6);
        assert_eq!(perf.reference_mass, Mass::kg(650.0));
        assert_eq!(perf.temperature_deviation, 0.0);
    }

    #[test]
    fn warmer_is_faster_and_thirstier() {
        let perf = cruise(
            &table(),
            Altitude::ft(6000.0),
            2100,
            Mass::kg(650.0),
            Temperature::c(18.0),
            &Config::default(),
        )
        .unwrap();

        // ISA at 6000 ft is 3 °C
        assert_eq!(perf.temperature_deviation, 15.0);
        assert!((perf.tas.to_kt() - 90.9).abs() < 1e-3);
        assert!((perf.fuel_flow.to_l_h() - 14.76).abs() < 1e-3);
    }

    #[test]
    fn lighter_is_faster() {
        let perf = cruise(
            &table(),
            Altitude::ft(4000.0),
            2000,
            Mass::kg(600.0),
            Temperature::c(7.0),
            &Config::default(),
        )
        .unwrap();

        assert!((perf.tas.to_kt() - 84.0 * 1.0165).abs() < 1e-3);
        assert_eq!(perf.base_tas, Speed::kt(84.0));
    }

    #[test]
    fn isa_deviation_column_shifts_reference() {
        let csv = "\
Pressure Altitude [ft],Propeller RPM,Weight [kg],KTAS,Fuel Consumption [lt/hr],ISA Deviation [°C]
4000,2000,650,84,12.6,10
";
        let table: CruiseTable = csv.parse().unwrap();
        let perf = cruise(
            &table,
            Altitude::ft(4000.0),
            2000,
            Mass::kg(650.0),
            Temperature::c(17.0),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(perf.temperature_deviation, 0.0);
        assert_eq!(perf.tas, Speed::kt(84.0));
    }

    #[test]
    fn no_row_for_rpm() {
        let result = cruise(
            &table(),
            Altitude::ft(4000.0),
            2300,
            Mass::kg(600.0),
            Temperature::c(7.0),
            &Config::default(),
        );

        assert_eq!(
            result,
            Err(Error::NoCruiseData {
                altitude: 4000.0,
                rpm: 2300
            })
        );
    }

    #[test]
    fn display_rounds() {
        let perf = cruise(
            &table(),
            Altitude::ft(4000.0),
            2000,
            Mass::kg(600.0),
            Temperature::c(7.0),
            &Config::default(),
        )
        .unwrap();

        assert_eq!(perf.to_string(), "85.4 KTAS, 12.60 l/h");
    }
}
