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

use log::trace;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::measurements::{Altitude, Angle, AngleUnit, Length, Mass, Temperature, Volume};
use crate::Wind;

/// Valid ranges of the flight parameters.
pub mod limits {
    /// Operating weights of the aircraft in kg.
    pub const MASS: (f32, f32) = (550.0, 650.0);
    /// Pressure altitudes in ft.
    pub const ALTITUDE: (f32, f32) = (0.0, 14000.0);
    /// Surface temperatures in °C.
    pub const TEMPERATURE: (f32, f32) = (-30.0, 50.0);
    /// Wind speeds in kt.
    pub const WIND_SPEED: (f32, f32) = (0.0, 100.0);
    /// Route distances in NM.
    pub const DISTANCE: (f32, f32) = (0.0, 1000.0);
    /// Additional fuel in l.
    pub const EXTRA_FUEL: (f32, f32) = (0.0, 100.0);
}

/// The inputs of one performance computation.
///
/// The parameters are immutable and range checked. Use the
/// [`FlightParametersBuilder`] to create them.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct FlightParameters {
    mass: Mass,
    airfield_altitude: Altitude,
    cruise_altitude: Altitude,
    surface_temperature: Temperature,
    track: Angle,
    wind: Wind,
    rpm: u16,
    distance: Length,
    alternate_distance: Length,
    extra_fuel: Volume,
}

impl FlightParameters {
    pub fn builder() -> FlightParametersBuilder {
        FlightParametersBuilder::new()
    }

    /// The aircraft's weight.
    pub fn mass(&self) -> &Mass {
        &self.mass
    }

    /// The pressure altitude of the departure airfield.
    pub fn airfield_altitude(&self) -> &Altitude {
        &self.airfield_altitude
    }

    /// The pressure altitude of the cruise.
    pub fn cruise_altitude(&self) -> &Altitude {
        &self.cruise_altitude
    }

    /// The outside air temperature at the departure airfield.
    pub fn surface_temperature(&self) -> &Temperature {
        &self.surface_temperature
    }

    /// The true track of the route.
    pub fn track(&self) -> &Angle {
        &self.track
    }

    pub fn wind(&self) -> &Wind {
        &self.wind
    }

    /// The propeller RPM set in cruise.
    pub fn rpm(&self) -> u16 {
        self.rpm
    }

    /// The total distance of the route including the climb.
    pub fn distance(&self) -> &Length {
        &self.distance
    }

    /// The distance from the destination to the alternate.
    pub fn alternate_distance(&self) -> &Length {
        &self.alternate_distance
    }

    /// Fuel taken on top of the planned fuel.
    pub fn extra_fuel(&self) -> &Volume {
        &self.extra_fuel
    }
}

/// Factory of [`FlightParameters`].
///
/// Wind, track, alternate distance and extra fuel are optional and default
/// to calm wind, a northbound track, no alternate and no extra fuel.
///
/// # Examples
///
/// ```
/// # use p2008_perf::prelude::*;
/// # use p2008_perf::measurements::*;
/// # fn build() -> Result<FlightParameters, Error> {
/// let params = FlightParameters::builder()
///     .mass(Mass::kg(600.0))
///     .airfield_altitude(Altitude::ft(0.0))
///     .cruise_altitude(Altitude::ft(4000.0))
///     .surface_temperature(Temperature::c(15.0))
///     .rpm(2000)
///     .distance(Length::nm(100.0))
///     .build()?;
/// # Ok(params)
/// # }
/// # build().unwrap();
/// ```
#[derive(Clone, PartialEq, Debug, Default)]
pub struct FlightParametersBuilder {
    mass: Option<Mass>,
    airfield_altitude: Option<Altitude>,
    cruise_altitude: Option<Altitude>,
    surface_temperature: Option<Temperature>,
    track: Option<Angle>,
    wind: Option<Wind>,
    rpm: Option<u16>,
    distance: Option<Length>,
    alternate_distance: Option<Length>,
    extra_fuel: Option<Volume>,
}

impl FlightParametersBuilder {
    /// Creates a new builder.
    pub fn new() -> FlightParametersBuilder {
        Self::default()
    }

    /// Builds the parameters.
    ///
    /// # Errors
    ///
    /// Returns [`MissingParameter`] if a required parameter is not set and
    /// [`ParameterOutOfRange`] if a parameter is outside of its valid
    /// range.
    ///
    /// [`MissingParameter`]: Error::MissingParameter
    /// [`ParameterOutOfRange`]: Error::ParameterOutOfRange
    pub fn build(&self) -> Result<FlightParameters> {
        let mass = self.mass.ok_or(Error::MissingParameter("weight"))?;
        let airfield_altitude = self
            .airfield_altitude
            .ok_or(Error::MissingParameter("airfield altitude"))?;
        let cruise_altitude = self
            .cruise_altitude
            .ok_or(Error::MissingParameter("cruise altitude"))?;
        let surface_temperature = self
            .surface_temperature
            .ok_or(Error::MissingParameter("surface temperature"))?;
        let rpm = self.rpm.ok_or(Error::MissingParameter("RPM"))?;
        let distance = self.distance.ok_or(Error::MissingParameter("distance"))?;

        let track = self.track.unwrap_or(Angle::t(0.0));
        let wind = self.wind.unwrap_or_default();
        let alternate_distance = self.alternate_distance.unwrap_or(Length::nm(0.0));
        let extra_fuel = self.extra_fuel.unwrap_or(Volume::l(0.0));

        check("weight", mass.to_kg(), limits::MASS)?;
        check("airfield altitude", airfield_altitude.to_ft(), limits::ALTITUDE)?;
        check("cruise altitude", cruise_altitude.to_ft(), limits::ALTITUDE)?;
        check(
            "surface temperature",
            surface_temperature.to_celsius(),
            limits::TEMPERATURE,
        )?;
        check_direction("track", &track)?;
        check_direction("wind direction", &wind.direction)?;
        check("wind speed", wind.speed.to_kt(), limits::WIND_SPEED)?;
        check("distance", distance.to_nm(), limits::DISTANCE)?;
        check("alternate distance", alternate_distance.to_nm(), limits::DISTANCE)?;
        check("additional fuel", extra_fuel.to_l(), limits::EXTRA_FUEL)?;

        trace!("flight parameters are within limits");

        Ok(FlightParameters {
            mass,
            airfield_altitude,
            cruise_altitude,
            surface_temperature,
            track,
            wind,
            rpm,
            distance,
            alternate_distance,
            extra_fuel,
        })
    }

    pub fn mass(&mut self, mass: Mass) -> &mut Self {
        self.mass = Some(mass);
        self
    }

    pub fn airfield_altitude(&mut self, altitude: Altitude) -> &mut Self {
        self.airfield_altitude = Some(altitude);
        self
    }

    pub fn cruise_altitude(&mut self, altitude: Altitude) -> &mut Self {
        self.cruise_altitude = Some(altitude);
        self
    }

    pub fn surface_temperature(&mut self, temperature: Temperature) -> &mut Self {
        self.surface_temperature = Some(temperature);
        self
    }

    pub fn track(&mut self, track: Angle) -> &mut Self {
        self.track = Some(track);
        self
    }

    pub fn wind(&mut self, wind: Wind) -> &mut Self {
        self.wind = Some(wind);
        self
    }

    pub fn rpm(&mut self, rpm: u16) -> &mut Self {
        self.rpm = Some(rpm);
        self
    }

    pub fn distance(&mut self, distance: Length) -> &mut Self {
        self.distance = Some(distance);
        self
    }

    pub fn alternate_distance(&mut self, distance: Length) -> &mut Self {
        self.alternate_distance = Some(distance);
        self
    }

    pub fn extra_fuel(&mut self, fuel: Volume) -> &mut Self {
        self.extra_fuel = Some(fuel);
        self
    }
}

fn check(parameter: &'static str, value: f32, (min, max): (f32, f32)) -> Result<()> {
    if value.is_finite() && (min..=max).contains(&value) {
        Ok(())
    } else {
        Err(Error::ParameterOutOfRange {
            parameter,
            value,
            min,
            max,
        })
    }
}

fn check_direction(parameter: &'static str, direction: &Angle) -> Result<()> {
    let value = *direction.convert_to(AngleUnit::TrueNorth).value();

    if value.is_finite() && (0.0..360.0).contains(&value) {
        Ok(())
    } else {
        Err(Error::ParameterOutOfRange {
            parameter,
            value,
            min: 0.0,
            max: 360.0,
        })
    }
}
