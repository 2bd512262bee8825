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

use super::{header, interp};
use crate::error::{Error, Result, Table};

const P2008JC_CLIMB: &str = include_str!("../../data/climb.csv");

/// Weights closer than this are the same tabulated weight.
const WEIGHT_EPSILON: f32 = 0.01;

/// How the climb table publishes the performance per temperature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClimbEncoding {
    /// A rate of climb in ft/min, e.g. in columns `ROC @15°C`.
    RateOfClimb,
    /// Time in minutes, distance in NM and fuel in liter to climb from sea
    /// level, e.g. in columns `Time @15°C`, `Distance @15°C` and
    /// `Fuel @15°C`.
    Cumulative,
}

/// A value published by the climb table per temperature.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum ClimbQuantity {
    RateOfClimb,
    Time,
    Distance,
    Fuel,
}

impl ClimbQuantity {
    fn from_column(name: &str) -> Option<Self> {
        match name {
            "roc" | "rate of climb" => Some(Self::RateOfClimb),
            "time" => Some(Self::Time),
            "distance" | "dist" => Some(Self::Distance),
            "fuel" => Some(Self::Fuel),
            _ => None,
        }
    }
}

/// A row of the climb table.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClimbRow {
    /// Pressure altitude in ft.
    pub altitude: f32,
    /// Weight in kg.
    pub weight: f32,
    /// Per quantity of the encoding, the values at the table's temperatures.
    values: Vec<Vec<f32>>,
}

impl ClimbRow {
    fn series(&self, index: usize) -> &[f32] {
        &self.values[index]
    }
}

/// Climb performance keyed by pressure altitude, weight and temperature.
///
/// The table is read-only once loaded. Rows are sorted by weight and
/// altitude and the temperature breakpoints are sorted ascending,
/// independent of the column order in the source.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize))]
pub struct ClimbTable {
    encoding: ClimbEncoding,
    quantities: Vec<ClimbQuantity>,
    temperatures: Vec<f32>,
    rows: Vec<ClimbRow>,
    discarded_rows: usize,
}

impl ClimbTable {
    /// Returns the sample climb table of the Tecnam P2008 JC.
    pub fn p2008jc() -> Result<Self> {
        P2008JC_CLIMB.parse()
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
    /// Returns [`DataFormat`] if the altitude or weight column is missing,
    /// no temperature encoded columns are found or a performance cell is not
    /// a number. Rows with an unreadable altitude or weight are skipped and
    /// counted as [`discarded_rows`].
    ///
    /// [`DataFormat`]: Error::DataFormat
    /// [`discarded_rows`]: ClimbTable::discarded_rows
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let headers = rdr.headers().map_err(format_err)?.clone();
        let layout = Layout::new(&headers)?;

        let mut rows: Vec<ClimbRow> = Vec::new();
        let mut discarded_rows = 0;

        for (line, record) in rdr.records().enumerate() {
            let record = record.map_err(format_err)?;

            let key = record
                .get(layout.altitude)
                .and_then(header::altitude)
                .zip(record.get(layout.weight).and_then(header::number));

            let Some((altitude, weight)) = key else {
                warn!("discarding climb table row {}: {:?}", line + 1, record);
                discarded_rows += 1;
                continue;
            };

            let mut values = Vec::with_capacity(layout.columns.len());
            for columns in &layout.columns {
                let mut series = Vec::with_capacity(columns.len());
                for &column in columns {
                    let cell = record.get(column).unwrap_or_default();
                    let value = header::number(cell).ok_or_else(|| Error::DataFormat {
                        table: Table::Climb,
                        reason: format!(
                            "\"{cell}\" in row {} column \"{}\" is not a number",
                            line + 1,
                            &headers[column]
                        ),
                    })?;
                    series.push(value);
                }
                values.push(series);
            }

            if rows
                .iter()
                .any(|r| r.altitude == altitude && same_weight(r.weight, weight))
            {
                return Err(Error::DataFormat {
                    table: Table::Climb,
                    reason: format!("duplicate row for {altitude} ft and {weight} kg"),
                });
            }

            rows.push(ClimbRow {
                altitude,
                weight,
                values,
            });
        }

        if rows.is_empty() {
            return Err(Error::DataFormat {
                table: Table::Climb,
                reason: "no rows".to_string(),
            });
        }

        rows.sort_by(|a, b| {
            a.weight
                .total_cmp(&b.weight)
                .then(a.altitude.total_cmp(&b.altitude))
        });

        debug!(
            "loaded climb table with {} rows, {} temperatures ({:?})",
            rows.len(),
            layout.temperatures.len(),
            layout.encoding
        );

        Ok(Self {
            encoding: layout.encoding,
            quantities: layout.quantities,
            temperatures: layout.temperatures,
            rows,
            discarded_rows,
        })
    }

    pub fn encoding(&self) -> ClimbEncoding {
        self.encoding
    }

    /// The temperature breakpoints in °C in ascending order.
    pub fn temperatures(&self) -> &[f32] {
        &self.temperatures
    }

    pub fn rows(&self) -> &[ClimbRow] {
        &self.rows
    }

    /// Number of rows skipped while loading since their altitude or weight
    /// could not be read.
    pub fn discarded_rows(&self) -> usize {
        self.discarded_rows
    }

    /// The highest tabulated pressure altitude in ft.
    pub fn max_altitude(&self) -> f32 {
        self.rows
            .iter()
            .map(|r| r.altitude)
            .fold(f32::NEG_INFINITY, f32::max)
    }

    /// The tabulated weights in kg in ascending order.
    pub fn weights(&self) -> Vec<f32> {
        let mut weights: Vec<f32> = Vec::new();
        for row in &self.rows {
            if !weights.iter().any(|w| same_weight(*w, row.weight)) {
                weights.push(row.weight);
            }
        }
        weights
    }

    /// Returns the tabulated value if the table has a row for the altitude
    /// and weight and a column for the quantity at the temperature.
    pub fn value(
        &self,
        quantity: ClimbQuantity,
        altitude: f32,
        weight: f32,
        temperature: f32,
    ) -> Option<f32> {
        let index = self.quantities.iter().position(|q| *q == quantity)?;
        let column = self.temperatures.iter().position(|t| *t == temperature)?;
        self.rows
            .iter()
            .find(|r| r.altitude == altitude && same_weight(r.weight, weight))
            .map(|r| r.series(index)[column])
    }

    /// Interpolates the quantity at the altitude, weight and temperature.
    ///
    /// The next lighter and heavier tabulated weights are used as brackets,
    /// or a single weight if it matches exactly or the query is outside of
    /// the tabulated weights. Per
    /// bracket, each temperature column is interpolated over altitude and the
    /// results are interpolated over temperature. Finally, the brackets are
    /// interpolated over weight. Queries outside of the breakpoints are
    /// clamped to the table edges.
    ///
    /// # Errors
    ///
    /// Returns [`ClimbOutOfRange`] if the altitude is negative or above the
    /// table and [`InsufficientClimbData`] if the brackets don't cover the
    /// altitude.
    ///
    /// [`ClimbOutOfRange`]: Error::ClimbOutOfRange
    /// [`InsufficientClimbData`]: Error::InsufficientClimbData
    pub fn interpolate(
        &self,
        quantity: ClimbQuantity,
        altitude: f32,
        weight: f32,
        temperature: f32,
    ) -> Result<f32> {
        let max = self.max_altitude();
        if altitude < 0.0 || altitude > max {
            return Err(Error::ClimbOutOfRange {
                gain: altitude,
                max,
            });
        }

        let insufficient = || Error::InsufficientClimbData { weight, altitude };
        let index = self
            .quantities
            .iter()
            .position(|q| *q == quantity)
            .ok_or_else(insufficient)?;

        let brackets = bracketing_weights(&self.weights(), weight);
        let mut points: Vec<(f32, f32)> = Vec::with_capacity(brackets.len());

        for bracket in &brackets {
            let rows: Vec<&ClimbRow> = self
                .rows
                .iter()
                .filter(|r| same_weight(r.weight, *bracket))
                .collect();

            // a bracket is only usable if it reaches up to the altitude
            if rows.last().map_or(true, |r| r.altitude < altitude) {
                trace!("climb table at {bracket} kg doesn't reach {altitude} ft");
                continue;
            }

            let altitudes: Vec<f32> = rows.iter().map(|r| r.altitude).collect();
            let mut by_temperature = Vec::with_capacity(self.temperatures.len());

            for column in 0..self.temperatures.len() {
                let values: Vec<f32> = rows.iter().map(|r| r.series(index)[column]).collect();
                by_temperature.push(
                    interp::piecewise(altitude, &altitudes, &values).ok_or_else(insufficient)?,
                );
            }

            let value = interp::piecewise(temperature, &self.temperatures, &by_temperature)
                .ok_or_else(insufficient)?;
            trace!("{quantity:?} at {bracket} kg, {altitude} ft, {temperature} °C: {value}");
            points.push((*bracket, value));
        }

        // every bracket must survive, a lone bracket is an exact or clamped weight
        if points.is_empty() || points.len() != brackets.len() {
            return Err(insufficient());
        }

        match points.as_slice() {
            [(_, value)] => Ok(*value),
            [lo, hi] => {
                interp::piecewise(weight, &[lo.0, hi.0], &[lo.1, hi.1]).ok_or_else(insufficient)
            }
            _ => Err(insufficient()),
        }
    }
}

impl FromStr for ClimbTable {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_reader(s.as_bytes())
    }
}

/// Positions of the columns in the source.
struct Layout {
    altitude: usize,
    weight: usize,
    encoding: ClimbEncoding,
    quantities: Vec<ClimbQuantity>,
    temperatures: Vec<f32>,
    /// Per quantity, the column positions ordered by temperature.
    columns: Vec<Vec<usize>>,
}

impl Layout {
    fn new(headers: &csv::StringRecord) -> Result<Self> {
        let mut altitude = None;
        let mut weight = None;
        let mut encoded: Vec<(ClimbQuantity, f32, usize)> = Vec::new();

        for (i, name) in headers.iter().enumerate() {
            if let Some((quantity, temperature)) = header::temperature_breakpoint(name) {
                match ClimbQuantity::from_column(&quantity) {
                    Some(q) => encoded.push((q, temperature, i)),
                    None => trace!("ignoring climb table column \"{name}\""),
                }
                continue;
            }

            let name = header::normalize(name);
            if name.contains("altitude") {
                altitude.get_or_insert(i);
            } else if name.contains("weight") || name.contains("mass") {
                weight.get_or_insert(i);
            }
        }

        let missing = |column: &str| Error::DataFormat {
            table: Table::Climb,
            reason: format!("missing {column} column"),
        };

        let altitude = altitude.ok_or_else(|| missing("pressure altitude"))?;
        let weight = weight.ok_or_else(|| missing("weight"))?;

        let has = |q: ClimbQuantity| encoded.iter().any(|(e, _, _)| *e == q);
        let (encoding, quantities) = if has(ClimbQuantity::RateOfClimb) {
            (ClimbEncoding::RateOfClimb, vec![ClimbQuantity::RateOfClimb])
        } else if has(ClimbQuantity::Time) && has(ClimbQuantity::Distance) && has(ClimbQuantity::Fuel)
        {
            (
                ClimbEncoding::Cumulative,
                vec![ClimbQuantity::Time, ClimbQuantity::Distance, ClimbQuantity::Fuel],
            )
        } else {
            return Err(missing("rate of climb or time, distance and fuel"));
        };

        let mut temperatures: Vec<f32> = encoded
            .iter()
            .filter(|(q, _, _)| *q == quantities[0])
            .map(|(_, t, _)| *t)
            .collect();
        temperatures.sort_by(f32::total_cmp);
        temperatures.dedup();

        let mut columns = Vec::with_capacity(quantities.len());
        for quantity in &quantities {
            let mut positions = Vec::with_capacity(temperatures.len());
            for temperature in &temperatures {
                let position = encoded
                    .iter()
                    .find(|(q, t, _)| q == quantity && t == temperature)
                    .map(|(_, _, i)| *i)
                    .ok_or_else(|| Error::DataFormat {
                        table: Table::Climb,
                        reason: format!("missing {quantity:?} column at {temperature} °C"),
                    })?;
                positions.push(position);
            }
            columns.push(positions);
        }

        Ok(Self {
            altitude,
            weight,
            encoding,
            quantities,
            temperatures,
            columns,
        })
    }
}

fn format_err(e: csv::Error) -> Error {
    Error::DataFormat {
        table: Table::Climb,
        reason: e.to_string(),
    }
}

fn same_weight(a: f32, b: f32) -> bool {
    (a - b).abs() < WEIGHT_EPSILON
}

/// Returns the tabulated weights enclosing the weight: the weight itself if
/// it's tabulated, else the next lighter and heavier ones. A weight outside
/// of the table is clamped to the nearest tabulated weight.
fn bracketing_weights(weights: &[f32], weight: f32) -> Vec<f32> {
    if let Some(exact) = weights.iter().find(|w| same_weight(**w, weight)) {
        return vec![*exact];
    }

    let lighter = weights.iter().copied().filter(|w| *w < weight).reduce(f32::max);
    let heavier = weights.iter().copied().filter(|w| *w > weight).reduce(f32::min);

    match (lighter, heavier) {
        (Some(lo), Some(hi)) => vec![lo, hi],
        (Some(w), None) | (None, Some(w)) => vec![w],
        (None, None) => Vec::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ROC: &str = "\
Pressure Altitude [ft],Weight [kg],ROC @25°C,ROC @-25°C,ROC @0°C
S.L.,550,900,1000,950
2000,550,800,900,850
4000,550,700,800,750
S.L.,650,700,800,750
2000,650,600,700,650
4000,650,500,600,550
";

    fn table() -> ClimbTable {
        ROC.parse().unwrap()
    }

    #[test]
    fn temperatures_are_sorted() {
        let table = table();
        assert_eq!(table.encoding(), ClimbEncoding::RateOfClimb);
        assert_eq!(table.temperatures(), &[-25.0, 0.0, 25.0]);
        assert_eq!(
            table.value(ClimbQuantity::RateOfClimb, 0.0, 550.0, -25.0),
            Some(1000.0)
        );
    }

    #[test]
    fn sea_level_is_zero() {
        let table = table();
        assert_eq!(table.rows()[0].altitude, 0.0);
        assert_eq!(table.max_altitude(), 4000.0);
        assert_eq!(table.weights(), vec![550.0, 650.0]);
    }

    #[test]
    fn exact_at_breakpoints() {
        let table = table();
        for row in table.rows() {
            for (i, t) in table.temperatures().iter().enumerate() {
                let roc = table
                    .interpolate(ClimbQuantity::RateOfClimb, row.altitude, row.weight, *t)
                    .unwrap();
                assert!((roc - row.series(0)[i]).abs() < 1e-3);
            }
        }
    }

    #[test]
    fn interpolates_altitude_temperature_and_weight() {
        let table = table();
        // 550 kg: 900 at 1000 ft and 0 °C, 650 kg: 700
        let roc = table
            .interpolate(ClimbQuantity::RateOfClimb, 1000.0, 600.0, 0.0)
            .unwrap();
        assert!((roc - 800.0).abs() < 1e-3);

        // halfway between 0 °C and 25 °C at 550 kg and sea level
        let roc = table
            .interpolate(ClimbQuantity::RateOfClimb, 0.0, 550.0, 12.5)
            .unwrap();
        assert!((roc - 925.0).abs() < 1e-3);
    }

    #[test]
    fn clamps_temperature_and_weight() {
        let table = table();
        let hot = table
            .interpolate(ClimbQuantity::RateOfClimb, 0.0, 550.0, 45.0)
            .unwrap();
        assert_eq!(hot, 900.0);

        let light = table
            .interpolate(ClimbQuantity::RateOfClimb, 0.0, 500.0, 25.0)
            .unwrap();
        assert_eq!(light, 900.0);
    }

    #[test]
    fn out_of_range_altitudes() {
        let table = table();
        assert_eq!(
            table.interpolate(ClimbQuantity::RateOfClimb, 4500.0, 600.0, 15.0),
            Err(Error::ClimbOutOfRange {
                gain: 4500.0,
                max: 4000.0
            })
        );
        assert!(matches!(
            table.interpolate(ClimbQuantity::RateOfClimb, -1.0, 600.0, 15.0),
            Err(Error::ClimbOutOfRange { .. })
        ));
    }

    #[test]
    fn bracket_not_reaching_altitude_is_insufficient() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C,ROC @20°C
0,550,900,800
4000,550,700,600
0,650,700,600
2000,650,600,500
";
        let table: ClimbTable = csv.parse().unwrap();
        assert!(matches!(
            table.interpolate(ClimbQuantity::RateOfClimb, 3000.0, 600.0, 10.0),
            Err(Error::InsufficientClimbData { .. })
        ));
        // the exact weight needs a single bracket only
        assert!(table
            .interpolate(ClimbQuantity::RateOfClimb, 3000.0, 550.0, 10.0)
            .is_ok());
    }

    #[test]
    fn weight_outside_of_table_is_clamped() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C
0,650,700
2000,650,600
";
        let table: ClimbTable = csv.parse().unwrap();
        assert_eq!(
            table.interpolate(ClimbQuantity::RateOfClimb, 1000.0, 650.0, 0.0),
            Ok(650.0)
        );
        assert_eq!(
            table.interpolate(ClimbQuantity::RateOfClimb, 1000.0, 600.0, 0.0),
            Ok(650.0)
        );
    }

    #[test]
    fn brackets_enclose_weight_on_uneven_grid() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C
0,550,1000
4000,550,1000
0,650,600
4000,650,600
0,700,500
4000,700,500
";
        let table: ClimbTable = csv.parse().unwrap();
        // 550 and 650 kg enclose 640 kg although 700 kg is closer
        let roc = table
            .interpolate(ClimbQuantity::RateOfClimb, 2000.0, 640.0, 0.0)
            .unwrap();
        assert!((roc - 640.0).abs() < 1e-3);

        let roc = table
            .interpolate(ClimbQuantity::RateOfClimb, 2000.0, 675.0, 0.0)
            .unwrap();
        assert!((roc - 550.0).abs() < 1e-3);
    }

    #[test]
    fn discards_rows_without_altitude() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C
0,650,700
n/a,650,650
2000,,600
2000,650,600
";
        let table: ClimbTable = csv.parse().unwrap();
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.discarded_rows(), 2);
    }

    #[test]
    fn cumulative_encoding() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],Time @0°C [min],Distance @0°C [NM],Fuel @0°C [l],Time @30°C [min],Distance @30°C [NM],Fuel @30°C [l]
S.L.,650,0,0,0,0,0,0
4000,650,6,8,2,8,11,3
";
        let table: ClimbTable = csv.parse().unwrap();
        assert_eq!(table.encoding(), ClimbEncoding::Cumulative);

        let time = table
            .interpolate(ClimbQuantity::Time, 2000.0, 650.0, 15.0)
            .unwrap();
        assert!((time - 3.5).abs() < 1e-3);
        assert!(table
            .interpolate(ClimbQuantity::RateOfClimb, 2000.0, 650.0, 15.0)
            .is_err());
    }

    #[test]
    fn malformed_tables() {
        let missing_weight = "Pressure Altitude [ft],ROC @0°C\n0,700\n";
        assert!(matches!(
            missing_weight.parse::<ClimbTable>(),
            Err(Error::DataFormat { table: Table::Climb, .. })
        ));

        let no_performance = "Pressure Altitude [ft],Weight [kg]\n0,650\n";
        assert!(matches!(
            no_performance.parse::<ClimbTable>(),
            Err(Error::DataFormat { .. })
        ));

        let bad_cell = "Pressure Altitude [ft],Weight [kg],ROC @0°C\n0,650,fast\n";
        assert!(matches!(
            bad_cell.parse::<ClimbTable>(),
            Err(Error::DataFormat { .. })
        ));

        let incomplete = "Pressure Altitude [ft],Weight [kg],Time @0°C,Distance @0°C\n0,650,0,0\n";
        assert!(matches!(
            incomplete.parse::<ClimbTable>(),
            Err(Error::DataFormat { .. })
        ));
    }

    #[test]
    fn duplicate_rows() {
        let csv = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C
S.L.,650,700
0,650,690
";
        assert!(matches!(
            csv.parse::<ClimbTable>(),
            Err(Error::DataFormat { table: Table::Climb, .. })
        ));
    }

    #[test]
    fn bundled_table_loads() {
        let table = ClimbTable::p2008jc().unwrap();
        assert_eq!(table.discarded_rows(), 0);
        assert_eq!(table.max_altitude(), 14000.0);
        assert_eq!(table.weights(), vec![550.0, 600.0, 650.0]);
    }
}
