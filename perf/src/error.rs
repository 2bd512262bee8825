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

use std::error;
use std::fmt;

/// The table in which a data format error was found.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum Table {
    Climb,
    Cruise,
}

impl fmt::Display for Table {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Climb => write!(f, "climb table"),
            Self::Cruise => write!(f, "cruise table"),
        }
    }
}

/// Errors of loading performance tables or computing the flight performance.
///
/// Except for [`DataFormat`] and [`Io`], all errors are caused by the
/// flight parameters and change only if the parameters change.
///
/// [`DataFormat`]: Error::DataFormat
/// [`Io`]: Error::Io
#[derive(Clone, PartialEq, Debug)]
pub enum Error {
    /// A performance table is malformed.
    DataFormat { table: Table, reason: String },

    /// A performance table could not be read.
    Io(String),

    /// The cruise table has no row for the altitude and RPM.
    NoCruiseData { altitude: f32, rpm: u16 },

    /// Less than two weights of the climb table cover the altitude.
    InsufficientClimbData { weight: f32, altitude: f32 },

    /// The altitude gain is negative or above the highest tabulated altitude.
    ClimbOutOfRange { gain: f32, max: f32 },

    /// The interpolated rate of climb is not positive.
    InvalidClimbRate { rate: f32 },

    /// The climb time of a cumulative climb table is not positive.
    InvalidClimbTime { minutes: f32 },

    /// The cruise altitude is below the airfield.
    InvalidAltitudeProfile { airfield: f32, cruise: f32 },

    /// The wind leaves no positive ground speed to fly the cruise.
    InsufficientGroundSpeed { gs: f32 },

    /// A flight parameter is outside of its valid range.
    ParameterOutOfRange {
        parameter: &'static str,
        value: f32,
        min: f32,
        max: f32,
    },

    /// A flight parameter was not provided.
    MissingParameter(&'static str),

    /// A string could not be parsed.
    UnexpectedString(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DataFormat { table, reason } => write!(f, "malformed {table}: {reason}"),
            Self::Io(e) => write!(f, "unable to read table: {e}"),
            Self::NoCruiseData { altitude, rpm } => write!(
                f,
                "no cruise data for pressure altitude {altitude} ft at {rpm} RPM"
            ),
            Self::InsufficientClimbData { weight, altitude } => write!(
                f,
                "not enough climb data to interpolate a weight of {weight} kg at {altitude} ft"
            ),
            Self::ClimbOutOfRange { gain, max } => write!(
                f,
                "altitude gain of {gain} ft is outside of the climb table (0 to {max} ft)"
            ),
            Self::InvalidClimbRate { rate } => write!(
                f,
                "rate of climb of {rate:.0} ft/min is too low to reach the cruise altitude"
            ),
            Self::InvalidClimbTime { minutes } => write!(
                f,
                "climb time of {minutes:.1} min from the climb table is not positive"
            ),
            Self::InvalidAltitudeProfile { airfield, cruise } => write!(
                f,
                "cruise altitude {cruise} ft is below the airfield altitude {airfield} ft"
            ),
            Self::InsufficientGroundSpeed { gs } => {
                write!(f, "ground speed of {gs:.1} kt is too low to fly the cruise")
            }
            Self::ParameterOutOfRange {
                parameter,
                value,
                min,
                max,
            } => write!(f, "{parameter} of {value} is outside of {min} to {max}"),
            Self::MissingParameter(parameter) => write!(f, "{parameter} is missing"),
            Self::UnexpectedString(s) => write!(f, "unexpected string \"{s}\""),
        }
    }
}

impl error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
