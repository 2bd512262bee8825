// SPDX-License-Identifier: Apache-2.0
// Copyright 2026 Joe Pearson
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

//! Physical quantities with a unit of measure.
//!
//! Every quantity is a [`Measurement`] of a value and a unit. Values can be
//! converted between units of the same quantity through their SI
//! representation. Arithmetic keeps the unit of the left hand side.

use std::cmp::Ordering;
use std::fmt;
use std::ops::{Add, Div, Mul, Neg, Sub};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

mod altitude;
mod angle;
pub(crate) mod constants;
mod density;
mod duration;
mod length;
mod mass;
mod speed;
mod temperature;
mod volume;

pub use altitude::{Altitude, AltitudeUnit};
pub use angle::{Angle, AngleUnit};
pub use density::{Density, DensityUnit};
pub use duration::Duration;
pub use length::{Length, LengthUnit};
pub use mass::{Mass, MassUnit};
pub use speed::{Speed, SpeedUnit};
pub use temperature::{Temperature, TemperatureUnit};
pub use volume::{Volume, VolumeUnit};

/// A unit in which a physical quantity is measured.
pub trait UnitOfMeasure<T>: Copy + PartialEq {
    fn symbol(&self) -> &'static str;

    /// Converts a value in SI unit into the unit `to`.
    fn from_si(value: T, to: &Self) -> T;

    /// Converts a value in this unit into the SI unit.
    fn to_si(&self, value: &T) -> T;
}

/// A value measured in a unit.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Measurement<T, U> {
    value: T,
    unit: U,
}

impl<U> Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    pub fn new(value: f32, unit: U) -> Self {
        Self { value, unit }
    }

    /// Creates a measurement in `unit` from a value in SI unit.
    pub fn from_si(value: f32, unit: U) -> Self {
        Self {
            value: U::from_si(value, &unit),
            unit,
        }
    }

    pub fn value(&self) -> &f32 {
        &self.value
    }

    pub fn unit(&self) -> &U {
        &self.unit
    }

    /// Returns the value in SI unit.
    pub fn to_si(&self) -> f32 {
        self.unit.to_si(&self.value)
    }

    /// Converts the measurement into another unit.
    pub fn convert_to(self, unit: U) -> Self {
        if self.unit == unit {
            self
        } else {
            Self::from_si(self.to_si(), unit)
        }
    }

    pub fn is_sign_negative(&self) -> bool {
        self.value.is_sign_negative() && self.value != 0.0
    }

    pub fn is_finite(&self) -> bool {
        self.value.is_finite()
    }
}

impl<U> fmt::Display for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = if let Some(precision) = f.precision() {
            format!("{:.precision$}", self.value)
        } else {
            format!("{}", self.value)
        };

        let tmp = format!("{value} {}", self.unit.symbol());
        f.pad_integral(true, "", &tmp)
    }
}

impl<U> PartialOrd for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        self.to_si().partial_cmp(&other.to_si())
    }
}

// Sums and differences are computed in the unit of the left hand side. This
// keeps offset scales like Celsius meaningful when subtracting two readings.
impl<U> Add for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn add(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value + rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<U> Sub for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn sub(self, rhs: Self) -> Self::Output {
        Self {
            value: self.value - rhs.convert_to(self.unit).value,
            unit: self.unit,
        }
    }
}

impl<U> Neg for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self {
            value: -self.value,
            unit: self.unit,
        }
    }
}

impl<U> Mul<f32> for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn mul(self, rhs: f32) -> Self::Output {
        Self {
            value: self.value * rhs,
            unit: self.unit,
        }
    }
}

impl<U> Div<f32> for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = Self;

    fn div(self, rhs: f32) -> Self::Output {
        Self {
            value: self.value / rhs,
            unit: self.unit,
        }
    }
}

/// The ratio of two measurements of the same quantity.
impl<U> Div for Measurement<f32, U>
where
    U: UnitOfMeasure<f32>,
{
    type Output = f32;

    fn div(self, rhs: Self) -> Self::Output {
        self.to_si() / rhs.to_si()
    }
}
