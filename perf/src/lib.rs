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

//! Climb and cruise performance of the Tecnam P2008 JC.
//!
//! This crate computes the climb, cruise, alternate and fuel figures of a
//! flight from the aircraft's performance tables. The climb is interpolated
//! over altitude, temperature and weight. The cruise is looked up by altitude
//! and RPM and corrected for the temperature deviation and weight. Wind is
//! applied along the track to get the ground speed.
//!
//! # Examples
//!
//! Compute a flight of 100 NM at 4000 ft with the bundled tables:
//!
//! ```
//! use p2008_perf::prelude::*;
//! use p2008_perf::measurements::*;
//!
//! # fn main() -> Result<(), Error> {
//! let engine = Engine::p2008jc()?;
//!
//! let params = FlightParameters::builder()
//!     .mass(Mass::kg(600.0))
//!     .airfield_altitude(Altitude::ft(0.0))
//!     .cruise_altitude(Altitude::ft(4000.0))
//!     .surface_temperature(Temperature::c(15.0))
//!     .wind("27015KT".parse()?)
//!     .track(Angle::t(270.0))
//!     .rpm(2000)
//!     .distance(Length::nm(100.0))
//!     .build()?;
//!
//! let perf = engine.compute(&params)?;
//!
//! println!("cruise at {}", perf.cruise().performance);
//! println!("{} and {:.1} required", perf.totals().time, perf.totals().fuel);
//! #     Ok(())
//! # }
//! ```
//!
//! Tables of another aircraft variant can be loaded with
//! [`ClimbTable::from_path`] and [`CruiseTable::from_path`].
//!
//! [`ClimbTable::from_path`]: crate::table::ClimbTable::from_path
//! [`CruiseTable::from_path`]: crate::table::CruiseTable::from_path

#[macro_use]
mod macros;

mod atmosphere;
mod core;
mod error;
pub mod fp;
pub mod measurements;
pub mod table;

pub use atmosphere::Atmosphere;
pub use crate::core::{Fuel, FuelFlow, FuelType, Wind, WindComponents};
pub use error::{Error, Result, Table};

pub mod prelude {
    pub use crate::fp::{Config, Engine, FlightParameters, FlightPerformance};
    pub use crate::table::{ClimbTable, CruiseTable};
    pub use crate::{Error, Fuel, FuelFlow, FuelType, Wind};
}
