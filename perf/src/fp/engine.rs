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

use log::{debug, info, warn};

use super::*;
use crate::error::{Error, Result};
use crate::measurements::{Length, Speed};
use crate::table::{ClimbTable, CruiseTable};
use crate::Fuel;

/// Computes the flight performance from an aircraft's climb and cruise
/// tables.
///
/// The tables are immutable once loaded; an engine can be shared between
/// threads to compute any number of flights.
///
/// # Examples
///
/// ```
/// # use p2008_perf::prelude::*;
/// # use p2008_perf::measurements::*;
/// # fn main() -> p2008_perf::Result<()> {
/// let engine = Engine::p2008jc()?;
///
/// let params = FlightParameters::builder()
///     .mass(Mass::kg(600.0))
///     .airfield_altitude(Altitude::ft(0.0))
///     .cruise_altitude(Altitude::ft(4000.0))
///     .surface_temperature(Temperature::c(15.0))
///     .rpm(2000)
///     .distance(Length::nm(100.0))
///     .build()?;
///
/// let perf = engine.compute(&params)?;
/// assert!(perf.totals().fuel.volume() > Volume::l(28.0));
/// # Ok(())
/// # }
/// ```
#[derive(Clone, PartialEq, Debug)]
pub struct Engine {
    climb: ClimbTable,
    cruise: CruiseTable,
    config: Config,
}

impl Engine {
    pub fn new(climb: ClimbTable, cruise: CruiseTable, config: Config) -> Self {
        Self {
            climb,
            cruise,
            config,
        }
    }

    /// Returns an engine with the bundled P2008 JC tables and the default
    /// configuration.
    pub fn p2008jc() -> Result<Self> {
        Ok(Self::new(
            ClimbTable::p2008jc()?,
            CruiseTable::p2008jc()?,
            Config::default(),
        ))
    }

    pub fn climb_table(&self) -> &ClimbTable {
        &self.climb
    }

    pub fn cruise_table(&self) -> &CruiseTable {
        &self.cruise
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn with_config(mut self, config: Config) -> Self {
        self.config = config;
        self
    }

    /// Computes the performance of the flight.
    ///
    /// # Errors
    ///
    /// Returns an error if the cruise altitude is below the airfield, if the
    /// climb or cruise can't be looked up in the tables or if the wind
    /// doesn't leave a positive ground speed for the cruise.
    pub fn compute(&self, params: &FlightParameters) -> Result<FlightPerformance> {
        info!("computing flight performance");

        let airfield = *params.airfield_altitude();
        let cruise_altitude = *params.cruise_altitude();
        if cruise_altitude < airfield {
            return Err(Error::InvalidAltitudeProfile {
                airfield: airfield.to_ft(),
                cruise: cruise_altitude.to_ft(),
            });
        }

        let config = &self.config;
        let fuel_type = config.fuel_type;
        let atmosphere = &config.atmosphere;

        let isa_temperature = atmosphere.isa_temperature(cruise_altitude);
        let temperature =
            atmosphere.temperature_at(*params.surface_temperature(), airfield, cruise_altitude);
        let temperature_deviation = temperature - isa_temperature;
        debug!("temperature at {cruise_altitude:.0}: {temperature:.1} (ISA {isa_temperature:.1})");

        let climb = climb(
            &self.climb,
            airfield,
            cruise_altitude,
            *params.mass(),
            *params.surface_temperature(),
            config,
        )?;

        let performance = cruise(
            &self.cruise,
            cruise_altitude,
            params.rpm(),
            *params.mass(),
            temperature,
            config,
        )?;

        let wind = params.wind().components(params.track());
        let ground_speed = wind.ground_speed(performance.tas);
        let wca = params
            .wind()
            .wind_correction_angle(&performance.tas, params.track());
        let heading = wca.map(|wca| (*params.track() + wca).wrapped());
        debug!(
            "headwind {:.1}, crosswind {:.1}, ground speed {ground_speed:.1}",
            wind.headwind, wind.crosswind
        );

        let mut cruise_distance = *params.distance() - climb.segment.distance;
        if cruise_distance.is_sign_negative() {
            warn!(
                "climb distance {:.1} exceeds the distance {:.1}, no cruise remains",
                climb.segment.distance,
                params.distance()
            );
            cruise_distance = Length::nm(0.0);
        }

        let cruise_leg = CruiseLeg {
            performance,
            ground_speed,
            segment: self.cruise_segment(cruise_distance, ground_speed, &performance)?,
        };

        let alternate = self.alternate(params.alternate_distance())?;

        let allowances = Allowances {
            departure: Fuel::new(config.departure_fuel, fuel_type),
            landing: Fuel::new(config.landing_fuel, fuel_type),
            reserve: performance.fuel_flow * config.reserve,
            extra: Fuel::new(*params.extra_fuel(), fuel_type),
        };

        let totals = Totals {
            time: climb.segment.time + cruise_leg.segment.time + alternate.segment.time,
            fuel: climb.segment.fuel
                + cruise_leg.segment.fuel
                + alternate.segment.fuel
                + allowances.total(),
        };

        info!(
            "flight performance computed: {} and {:.1} total",
            totals.time, totals.fuel
        );

        Ok(FlightPerformance {
            isa_temperature,
            temperature,
            temperature_deviation,
            wind,
            wca,
            heading,
            climb,
            cruise: cruise_leg,
            alternate,
            allowances,
            totals,
        })
    }

    fn cruise_segment(
        &self,
        distance: Length,
        ground_speed: Speed,
        performance: &CruisePerformance,
    ) -> Result<Segment> {
        if distance.to_nm() == 0.0 {
            return Ok(Segment::zero(self.config.fuel_type));
        }

        if ground_speed.to_kt() <= 0.0 {
            return Err(Error::InsufficientGroundSpeed {
                gs: ground_speed.to_kt(),
            });
        }

        let time = distance / ground_speed;

        Ok(Segment {
            time,
            distance,
            fuel: performance.fuel_flow * time,
        })
    }

    // The alternate is flown at a fixed condition in ISA without wind.
    fn alternate(&self, distance: &Length) -> Result<Alternate> {
        let fuel_type = self.config.fuel_type;

        if distance.to_nm() <= 0.0 {
            return Ok(Alternate {
                performance: None,
                segment: Segment::zero(fuel_type),
            });
        }

        let condition = &self.config.alternate;
        let performance = cruise(
            &self.cruise,
            condition.altitude,
            condition.rpm,
            condition.mass,
            self.config.atmosphere.isa_temperature(condition.altitude),
            &self.config,
        )?;

        let time = *distance / performance.tas;
        debug!("alternate over {distance:.1}: {performance} for {time}");

        Ok(Alternate {
            performance: Some(performance),
            segment: Segment {
                time,
                distance: *distance,
                fuel: performance.fuel_flow * time,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::measurements::{Altitude, Angle, Mass, Temperature, Volume};
    use crate::{FuelType, Wind};

    const CLIMB: &str = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C,ROC @30°C
S.L.,600,900,600
6000,600,600,300
";

    const CRUISE: &str = "\
Pressure Altitude [ft],Propeller RPM,Weight [kg],KTAS,Fuel Consumption [lt/hr]
4000,2000,600,90,15
";

    fn engine() -> Engine {
        Engine::new(
            CLIMB.parse().unwrap(),
            CRUISE.parse().unwrap(),
            Config::default(),
        )
    }

    fn params() -> FlightParametersBuilder {
        let mut builder = FlightParameters::builder();
        builder
            .mass(Mass::kg(600.0))
            .airfield_altitude(Altitude::ft(1000.0))
            .cruise_altitude(Altitude::ft(4000.0))
            .surface_temperature(Temperature::c(15.0))
            .rpm(2000)
            .distance(Length::nm(100.0));
        builder
    }

    #[test]
    fn cruise_below_airfield() {
        let params = params()
            .airfield_altitude(Altitude::ft(5000.0))
            .build()
            .unwrap();

        assert_eq!(
            engine().compute(&params),
            Err(Error::InvalidAltitudeProfile {
                airfield: 5000.0,
                cruise: 4000.0
            })
        );
    }

    #[test]
    fn temperatures_at_cruise_altitude() {
        let perf = engine().compute(&params().build().unwrap()).unwrap();

        // 15 °C at 1000 ft cools to 9 °C at 4000 ft where ISA is 7 °C
        assert_eq!(perf.temperature(), &Temperature::c(9.0));
        assert_eq!(perf.isa_temperature(), &Temperature::c(7.0));
        assert_eq!(perf.temperature_deviation(), &Temperature::c(2.0));
    }

    #[test]
    fn climb_longer_than_flight() {
        let params = params().distance(Length::nm(1.0)).build().unwrap();
        let perf = engine().compute(&params).unwrap();

        assert_eq!(perf.cruise().segment, Segment::zero(FuelType::AvGas));
        assert!(perf.totals().time > perf.climb().segment.time * 0.999);
    }

    #[test]
    fn headwind_stronger_than_tas() {
        let params = params()
            .track(Angle::t(180.0))
            .wind(Wind::new(Angle::t(180.0), Speed::kt(100.0)))
            .build()
            .unwrap();

        assert!(matches!(
            engine().compute(&params),
            Err(Error::InsufficientGroundSpeed { .. })
        ));
    }

    #[test]
    fn alternate_adds_time_and_fuel() {
        let without = engine().compute(&params().build().unwrap()).unwrap();
        let with = engine()
            .compute(&params().alternate_distance(Length::nm(45.0)).build().unwrap())
            .unwrap();

        // 45 NM at 90 kt in ISA and 15 l/h
        let alternate = with.alternate();
        assert!((alternate.segment.time.as_hours() - 0.5).abs() < 1e-4);
        assert!((alternate.segment.fuel.volume().to_l() - 7.5).abs() < 1e-3);
        assert!(without.alternate().performance.is_none());

        let extra_time = with.totals().time - without.totals().time;
        assert!((extra_time.as_hours() - 0.5).abs() < 1e-4);
    }

    #[test]
    fn alternate_without_data() {
        let config = Config::default().with_alternate(AlternateCondition {
            rpm: 2300,
            ..Default::default()
        });
        let engine = engine().with_config(config);
        let params = params().alternate_distance(Length::nm(20.0)).build().unwrap();

        assert_eq!(
            engine.compute(&params),
            Err(Error::NoCruiseData {
                altitude: 4000.0,
                rpm: 2300
            })
        );
    }

    #[test]
    fn totals_sum_up() {
        let params = params().extra_fuel(Volume::l(10.0)).build().unwrap();
        let perf = engine().compute(&params).unwrap();

        let sum = perf.trip_fuel().volume().to_l() + perf.allowances().total().volume().to_l();
        assert!((perf.totals().fuel.volume().to_l() - sum).abs() < 1e-3);
        assert_eq!(perf.allowances().extra, Fuel::new(Volume::l(10.0), FuelType::AvGas));
    }

    #[test]
    fn reserve_at_cruise_fuel_flow() {
        let perf = engine().compute(&params().build().unwrap()).unwrap();
        let fuel_flow = perf.cruise().performance.fuel_flow.to_l_h();

        assert!((perf.allowances().reserve.volume().to_l() - 0.75 * fuel_flow).abs() < 1e-3);
    }

    #[test]
    fn heading_into_the_wind() {
        let params = params()
            .track(Angle::t(0.0))
            .wind(Wind::new(Angle::t(90.0), Speed::kt(20.0)))
            .build()
            .unwrap();
        let perf = engine().compute(&params).unwrap();

        let heading = perf.heading().unwrap().value();
        assert!(*heading > 0.0 && *heading < 90.0);
    }

    #[test]
    fn cumulative_climb_between_airfield_and_cruise() {
        let climb = "\
Pressure Altitude [ft],Weight [kg],Time @15°C [min],Distance @15°C [NM],Fuel @15°C [l]
S.L.,600,0,0,0
3000,600,5,7,2
6000,600,12,17,5
";
        let cruise = "\
Pressure Altitude [ft],Propeller RPM,Weight [kg],KTAS,Fuel Consumption [lt/hr]
6000,2000,600,90,15
";
        let engine = Engine::new(
            climb.parse().unwrap(),
            cruise.parse().unwrap(),
            Config::default(),
        );
        let params = params()
            .airfield_altitude(Altitude::ft(3000.0))
            .cruise_altitude(Altitude::ft(6000.0))
            .build()
            .unwrap();
        let perf = engine.compute(&params).unwrap();

        let segment = perf.climb().segment;
        assert!((segment.time.as_minutes() - 7.0).abs() < 1e-4);
        assert!((segment.distance.to_nm() - 10.0).abs() < 1e-4);
        assert!((segment.fuel.volume().to_l() - 3.0).abs() < 1e-4);
        assert!((perf.cruise().segment.distance.to_nm() - 90.0).abs() < 1e-3);
    }
}
