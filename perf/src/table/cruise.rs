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

use std::fs::File;
use std::io::Read;
use std::path::Path;
use std::str::FromStr;

use log::{debug, trace, warn};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::header;
use crate::error::{Error, Result, Table};

const P2008JC_CRUISE: &str = include_str!("../../data/cruise.csv");

/// Altitudes closer than this are the same table altitude.
const ALTITUDE_EPSILON: f32 = 0.5;

/// Weights closer than this are the same tabulated weight.
const WEIGHT_EPSILON: f32 = 0.01;

/// A row of the cruise table.
#[derive(Copy, Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct CruiseRow {
    /// Pressure altitude in ft.
    pub altitude: f32,
    pub rpm: u16,
    /// Weight in kg.
    pub weight: f32,
    /// True airspeed in kt.
    pub ktas: f32,
    /// Fuel flow in l/h.
    pub fuel_flow: f32,
    /// Deviation from ISA in °C at which the row was measured.
    pub isa_deviation: f32,
}

/// Cruise performance keyed by pressure altitude, RPM and weight.
///
/// Altitude and RPM are discrete keys, there is no interpolation between
/// them.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct CruiseTable {
    rows: Vec<CruiseRow>,
    discarded_rows: usize,
}

impl CruiseTable {
    /// Returns the sample cruise table of the Tecnam P2008 JC.
    pub fn p2008jc() -> Result<Self> {
        P2008JC_CRUISE.parse()
    }

    /// Loads the table from a CSV file.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let file = File::open(path)?;
        Self::from_reader(file)
    }

    /// Loads the table from CSV data.
    ///
    /// # Errors
    ///
    /// Returns [`DataFormat`] if a required column is missing or the true
    /// airspeed, fuel flow or ISA deviation of a row is not a number. Rows with
    /// an unreadable altitude, RPM or weight are skipped and counted as
    /// [`discarded_rows`].
    ///
    /// [`DataFormat`]: Error::DataFormat
    /// [`discarded_rows`]: CruiseTable::discarded_rows
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(format_err)?.clone();
        let layout = Layout::new(&headers)?;

        let mut rows: Vec<CruiseRow> = Vec::new();
        let mut discarded_rows = 0;

        for (line, record) in rdr.records().enumerate() {
            let record = record.map_err(format_err)?;
            let cell = |i: usize| record.get(i).unwrap_or_default();

            let altitude = header::altitude(cell(layout.altitude));
            let rpm = header::number(cell(layout.rpm))
                .filter(|rpm| *rpm > 0.0 && *rpm <= u16::MAX as f32)
                .map(|rpm| rpm.round() as u16);
            let weight = header::number(cell(layout.weight));

            let (Some(altitude), Some(rpm), Some(weight)) = (altitude, rpm, weight) else {
                warn!("discarding cruise table row {}: {:?}", line + 1, record);
                discarded_rows += 1;
                continue;
            };

            let value = |column: usize| {
                header::number(cell(column)).ok_or_else(|| Error::DataFormat {
                    table: Table::Cruise,
                    reason: format!(
                        "\"{}\" in row {} column \"{}\" is not a number",
                        cell(column),
                        line + 1,
                        &headers[column]
                    ),
                })
            };

            let isa_deviation = match layout.isa_deviation {
                Some(column) => value(column)?,
                None => 0.0,
            };

            if rows.iter().any(|r| {
                r.rpm == rpm
                    && (r.altitude - altitude).abs() < ALTITUDE_EPSILON
                    && (r.weight - weight).abs() < WEIGHT_EPSILON
            }) {
                return Err(Error::DataFormat {
                    table: Table::Cruise,
                    reason: format!("duplicate row for {altitude} ft, {rpm} RPM and {weight} kg"),
                });
            }

            rows.push(CruiseRow {
                altitude,
                rpm,
                weight,
                ktas: value(layout.ktas)?,
                fuel_flow: value(layout.fuel_flow)?,
                isa_deviation,
            });
        }

        if rows.is_empty() {
            return Err(Error::DataFormat {
                table: Table::Cruise,
                reason: "no rows".to_string(),
            });
        }

        debug!("loaded cruise table with {} rows", rows.len());

        Ok(Self {
            rows,
            discarded_rows,
        })
    }

    pub fn rows(&self) -> &[CruiseRow] {
        &self.rows
    }

    /// Number of rows skipped while loading since their altitude, RPM or
    /// weight could not be read.
    pub fn discarded_rows(&self) -> usize {
        self.discarded_rows
    }

    /// The available RPM settings, highest first.
    pub fn rpms(&self) -> Vec<u16> {
        let mut rpms: Vec<u16> = self.rows.iter().map(|r| r.rpm).collect();
        rpms.sort_unstable_by(|a, b| b.cmp(a));
        rpms.dedup();
        rpms
    }

    /// The tabulated pressure altitudes in ft, lowest first.
    pub fn altitudes(&self) -> Vec<f32> {
        let mut altitudes: Vec<f32> = self.rows.iter().map(|r| r.altitude).collect();
        altitudes.sort_by(f32::total_cmp);
        altitudes.dedup();
        altitudes
    }

    /// Returns the rows at the altitude and RPM.
    pub fn matching(&self, altitude: f32, rpm: u16) -> impl Iterator<Item = &CruiseRow> {
        self.rows
            .iter()
            .filter(move |r| r.rpm == rpm && (r.altitude - altitude).abs() < ALTITUDE_EPSILON)
    }

    /// Returns the row at the altitude and RPM with the highest weight, which
    /// is the reference for the weight correction.
    ///
    /// # Errors
    ///
    /// Returns [`NoCruiseData`] if the table has no row for the altitude
    /// and RPM.
    ///
    /// [`NoCruiseData`]: Error::NoCruiseData
    pub fn reference(&self, altitude: f32, rpm: u16) -> Result<&CruiseRow> {
        let row = self
            .matching(altitude, rpm)
            .max_by(|a, b| a.weight.total_cmp(&b.weight))
            .ok_or(Error::NoCruiseData { altitude, rpm })?;

        trace!("cruise reference at {altitude} ft, {rpm} RPM: {row:?}");
        Ok(row)
    }
}

impl FromStr for CruiseTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

/// Positions of the columns in the source.
struct Layout {
    altitude: usize,
    rpm: usize,
    weight: usize,
    ktas: usize,
    fuel_flow: usize,
    isa_deviation: Option<usize>,
}

impl Layout {
    fn new(headers: &csv::StringRecord) -> Result<Self> {
        let mut altitude = None;
        let mut rpm = None;
        let mut weight = None;
        let mut ktas = None;
        let mut fuel_flow = None;
        let mut isa_deviation = None;

        for (i, name) in headers.iter().enumerate() {
            let name = header::normalize(name);

            let column = if name.contains("altitude") {
                &mut altitude
            } else if name.contains("rpm") {
                &mut rpm
            } else if name.contains("weight") || name.contains("mass") {
                &mut weight
            } else if name.contains("tas") || name.contains("airspeed") {
                &mut ktas
            } else if name.contains("fuel") {
                &mut fuel_flow
            } else if name.contains("isa") || name.contains("deviation") {
                &mut isa_deviation
            } else {
                trace!("ignoring cruise table column \"{name}\"");
                continue;
            };

            column.get_or_insert(i);
        }

        let missing = |column: &str| Error::DataFormat {
            table: Table::Cruise,
            reason: format!("missing {column} column"),
        };

        Ok(Self {
            altitude: altitude.ok_or_else(|| missing("pressure altitude"))?,
            rpm: rpm.ok_or_else(|| missing("propeller RPM"))?,
            weight: weight.ok_or_else(|| missing("weight"))?,
            ktas: ktas.ok_or_else(|| missing("KTAS"))?,
            fuel_flow: fuel_flow.ok_or_else(|| missing("fuel consumption"))?,
            isa_deviation,
        })
    }
}

fn format_err(e: csv::Error) -> Error {
    Error::DataFormat {
        table: Table::Cruise,
        reason: e.to_string(),
    }
}
