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

use log::debug;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Config, Segment};
use crate::error::{Error, Result};
use crate::measurements::{Altitude, Duration, Length, Mass, Temperature, Volume};
use crate::table::{ClimbEncoding, ClimbQuantity, ClimbTable};
use crate::{Fuel, FuelFlow};

/// The climb from the airfield to the cruise altitude.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Climb {
    pub segment: Segment,
    /// The (mean) rate of climb in ft/min, if there is a climb at all.
    pub rate_of_climb: Option<f32>,
}

impl Climb {
    fn none(config: &Config) -> Self {
        Self {
            segment: Segment::zero(config.fuel_type),
            rate_of_climb: None,
        }
    }
}

/// Computes the climb from the airfield to the cruise altitude.
///
/// With a rate of climb table, the rate is interpolated at the altitude gain
/// and the time is the gain over that rate. Distance and fuel are derived
/// from the nominal climb speed and fuel flow of the [`Config`]. A
/// cumulative table holds time, distance and fuel to climb from sea level,
/// thus the climb is the difference between the cruise and the airfield
/// altitude.
///
/// # Errors
///
/// Fails with [`ClimbOutOfRange`] or [`InsufficientClimbData`] if the
/// table can't be interpolated and with [`InvalidClimbRate`] or
/// [`InvalidClimbTime`] if the climb can't be flown.
///
/// [`ClimbOutOfRange`]: Error::ClimbOutOfRange
/// [`InsufficientClimbData`]: Error::InsufficientClimbData
/// [`InvalidClimbRate`]: Error::InvalidClimbRate
/// [`InvalidClimbTime`]: Error::InvalidClimbTime
pub fn climb(
    table: &ClimbTable,
    airfield: Altitude,
    cruise: Altitude,
    mass: Mass,
    temperature: Temperature,
    config: &Config,
) -> Result<Climb> {
    let gain_ft = cruise.to_ft() - airfield.to_ft();
    let weight = mass.to_kg();
    let oat = temperature.to_celsius();

    // the highest gain the table covers from this airfield
    let max = match table.encoding() {
        ClimbEncoding::RateOfClimb => table.max_altitude(),
        ClimbEncoding::Cumulative => table.max_altitude() - airfield.to_ft(),
    };
    if gain_ft < 0.0 || gain_ft > max {
        return Err(Error::ClimbOutOfRange { gain: gain_ft, max });
    }

    if gain_ft == 0.0 {
        return Ok(Climb::none(config));
    }

    let climb = match table.encoding() {
        ClimbEncoding::RateOfClimb => {
            let roc = table.interpolate(ClimbQuantity::RateOfClimb, gain_ft, weight, oat)?;

            if roc <= 0.0 {
                return Err(Error::InvalidClimbRate { rate: roc });
            }

            let time = Duration::h(gain_ft / roc / 60.0);
            let fuel_flow = FuelFlow::l_h(config.climb_fuel_flow, config.fuel_type);

            Climb {
                segment: Segment {
                    time,
                    distance: config.climb_speed * time,
                    fuel: fuel_flow * time,
                },
                rate_of_climb: Some(roc),
            }
        }
        ClimbEncoding::Cumulative => {
            let band = |quantity| -> Result<f32> {
                let top = table.interpolate(quantity, cruise.to_ft(), weight, oat)?;
                let bottom = table.interpolate(quantity, airfield.to_ft(), weight, oat)?;
                Ok(top - bottom)
            };

            let minutes = band(ClimbQuantity::Time)?;

            if minutes <= 0.0 {
                return Err(Error::InvalidClimbTime { minutes });
            }

            let distance = band(ClimbQuantity::Distance)?;
            let fuel = band(ClimbQuantity::Fuel)?;

            Climb {
                segment: Segment {
                    time: Duration::min(minutes),
                    distance: Length::nm(distance.max(0.0)),
                    fuel: Fuel::new(Volume::l(fuel.max(0.0)), config.fuel_type),
                },
                rate_of_climb: Some(gain_ft / minutes),
            }
        }
    };

    debug!(
        "climb from {airfield:.0} to {cruise:.0} at {weight} kg and {oat} °C: {:.0} ft/min, {}, {:.1}, {:.1}",
        climb.rate_of_climb.unwrap_or_default(),
        climb.segment.time,
        climb.segment.distance,
        climb.segment.fuel
    );

    Ok(climb)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::Speed;

    const ROC: &str = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C,ROC @30°C
S.L.,600,900,600
4000,600,600,300
8000,600,300,-60
";

    fn table() -> ClimbTable {
        ROC.parse().unwrap()
    }

    #[test]
    fn no_gain_no_climb() {
        let config = Config::default();
        for temperature in [-20.0, 0.0, 15.0, 50.0] {
            let climb = climb(
                &table(),
                Altitude::ft(0.0),
                Altitude::ft(0.0),
                Mass::kg(600.0),
                Temperature::c(temperature),
                &config,
            )
            .unwrap();

            assert_eq!(climb.segment, Segment::zero(config.fuel_type));
            assert_eq!(climb.rate_of_climb, None);
        }
    }

    #[test]
    fn time_distance_and_fuel_from_rate() {
        let config = Config::default();
        // 600 ft/min at 4000 ft and 0 °C
        let climb = climb(
            &table(),
            Altitude::ft(0.0),
            Altitude::ft(4000.0),
            Mass::kg(600.0),
            Temperature::c(0.0),
            &config,
        )
        .unwrap();

        let hours = 4000.0 / 600.0 / 60.0;
        assert_eq!(climb.rate_of_climb, Some(600.0));
        assert!((climb.segment.time.as_hours() - hours).abs() < 1e-5);
        assert!((climb.segment.distance.to_nm() - 80.0 * hours).abs() < 1e-3);
        assert!((climb.segment.fuel.volume().to_l() - 20.0 * hours).abs() < 1e-3);
    }

    #[test]
    fn non_positive_rate_cannot_be_flown() {
        let result = climb(
            &table(),
            Altitude::ft(0.0),
            Altitude::ft(8000.0),
            Mass::kg(600.0),
            Temperature::c(30.0),
            &Config::default(),
        );

        assert_eq!(result, Err(Error::InvalidClimbRate { rate: -60.0 }));
    }

    #[test]
    fn above_the_table() {
        let result = climb(
            &table(),
            Altitude::ft(0.0),
            Altitude::ft(9000.0),
            Mass::kg(600.0),
            Temperature::c(0.0),
            &Config::default(),
        );

        assert_eq!(
            result,
            Err(Error::ClimbOutOfRange {
                gain: 9000.0,
                max: 8000.0
            })
        );
    }

    #[test]
    fn nominal_values_from_config() {
        let config = Config::default()
            .with_climb_speed(Speed::kt(90.0))
            .with_climb_fuel_flow(27.0);

        let climb = climb(
            &table(),
            Altitude::ft(0.0),
            Altitude::ft(4000.0),
            Mass::kg(600.0),
            Temperature::c(0.0),
            &config,
        )
        .unwrap();

        let hours = climb.segment.time.as_hours();
        assert!((climb.segment.distance.to_nm() - 90.0 * hours).abs() < 1e-3);
        assert!((climb.segment.fuel.volume().to_l() - 27.0 * hours).abs() < 1e-3);
    }

    #[test]
    fn cumulative_table() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],Time @15°C [min],Distance @15°C [NM],Fuel @15°C [l]
S.L.,650,0,0,0
6000,650,10,14,4
";
        let table: ClimbTable = csv.parse().unwrap();
        let climb = climb(
            &table,
            Altitude::ft(0.0),
            Altitude::ft(3000.0),
            Mass::kg(650.0),
            Temperature::c(15.0),
            &Config::default(),
        )
        .unwrap();

        assert!((climb.segment.time.as_minutes() - 5.0).abs() < 1e-4);
        assert!((climb.segment.distance.to_nm() - 7.0).abs() < 1e-4);
        assert!((climb.segment.fuel.volume().to_l() - 2.0).abs() < 1e-4);
        assert_eq!(climb.rate_of_climb, Some(600.0));
    }

    const CUMULATIVE: &str = "\
Pressure Altitude [ft],Weight [kg],Time @15°C [min],Distance @15°C [NM],Fuel @15°C [l]
S.L.,650,0,0,0
3000,650,5,7,2
6000,650,12,17,5
";

    #[test]
    fn cumulative_climb_from_raised_airfield() {
        let table: ClimbTable = CUMULATIVE.parse().unwrap();
        let climb = climb(
            &table,
            Altitude::ft(3000.0),
            Altitude::ft(6000.0),
            Mass::kg(650.0),
            Temperature::c(15.0),
            &Config::default(),
        )
        .unwrap();

        assert!((climb.segment.time.as_minutes() - 7.0).abs() < 1e-4);
        assert!((climb.segment.distance.to_nm() - 10.0).abs() < 1e-4);
        assert!((climb.segment.fuel.volume().to_l() - 3.0).abs() < 1e-4);
    }

    #[test]
    fn cumulative_climb_above_the_table() {
        let table: ClimbTable = CUMULATIVE.parse().unwrap();
        let result = climb(
            &table,
            Altitude::ft(2000.0),
            Altitude::ft(7000.0),
            Mass::kg(650.0),
            Temperature::c(15.0),
            &Config::default(),
        );

        assert_eq!(
            result,
            Err(Error::ClimbOutOfRange {
                gain: 5000.0,
                max: 4000.0
            })
        );
    }

    #[test]
    fn cumulative_climb_without_time() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],Time @15°C [min],Distance @15°C [NM],Fuel @15°C [l]
S.L.,650,4,0,0
4000,650,4,6,2
";
        let table: ClimbTable = csv.parse().unwrap();
        let result = climb(
            &table,
            Altitude::ft(0.0),
            Altitude::ft(4000.0),
            Mass::kg(650.0),
            Temperature::c(15.0),
            &Config::default(),
        );

        assert_eq!(result, Err(Error::InvalidClimbTime { minutes: 0.0 }));
    }
}
