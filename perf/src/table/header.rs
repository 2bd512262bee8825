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

//! Normalization of table headers and cells.
//!
//! The tables are exported from the flight manual by hand, thus headers carry
//! units and degree markers and cells may carry units or sea level markers.
//! Everything is normalized once while loading a table.

/// Sea level markers found in the altitude column.
const SEA_LEVEL: [&str; 5] = ["s.l.", "sl", "msl", "sea level", "s/l"];

/// Returns the lower case column name without unit suffix.
///
/// `Pressure Altitude [ft]` becomes `pressure altitude`.
pub fn normalize(name: &str) -> String {
    let name = name.trim_start_matches('\u{feff}');
    let name = match name.find(['[', '(']) {
        Some(i) => &name[..i],
        None => name,
    };

    name.split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
        .to_lowercase()
}

/// Splits a column name which encodes a temperature breakpoint into the
/// normalized quantity and the temperature in °C.
///
/// `ROC @-25°C` becomes `("roc", -25.0)` and `Time @ +15 °C [min]`
/// becomes `("time", 15.0)`.
pub fn temperature_breakpoint(name: &str) -> Option<(String, f32)> {
    let (quantity, temperature) = name.split_once('@')?;

    let temperature = match temperature.find('[') {
        Some(i) => &temperature[..i],
        None => temperature,
    };

    let temperature: String = temperature
        .trim()
        .trim_end_matches(['C', 'c'])
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '°' && *c != '+')
        .collect();

    let temperature = temperature.parse::<f32>().ok()?;
    Some((normalize(quantity), temperature))
}

/// Parses a numeric cell after stripping whitespace and unit suffixes like
/// `ft`, `kg` or `l/h`.
pub fn number(cell: &str) -> Option<f32> {
    let cell = cell.trim();
    let end = cell
        .find(|c: char| !(c.is_ascii_digit() || matches!(c, '-' | '+' | '.' | 'e' | 'E')))
        .unwrap_or(cell.len());

    let (value, unit) = cell.split_at(end);

    if !unit.trim().chars().all(|c| c.is_alphabetic() || matches!(c, '/' | '°' | '%' | ' ')) {
        return None;
    }

    value.trim().parse::<f32>().ok().filter(|v| v.is_finite())
}

/// Parses an altitude cell where sea level may be given as marker.
pub fn altitude(cell: &str) -> Option<f32> {
    let normalized = normalize(cell);

    if SEA_LEVEL.contains(&normalized.as_str()) {
        Some(0.0)
    } else {
        number(cell)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_strips_units() {
        assert_eq!(normalize("Pressure Altitude [ft]"), "pressure altitude");
        assert_eq!(normalize(" Fuel  Consumption (lt/hr) "), "fuel consumption");
        assert_eq!(normalize("\u{feff}KTAS"), "ktas");
    }

    #[test]
    fn temperature_breakpoints() {
        assert_eq!(temperature_breakpoint("ROC @-25°C"), Some(("roc".to_string(), -25.0)));
        assert_eq!(temperature_breakpoint("ROC @0°C"), Some(("roc".to_string(), 0.0)));
        assert_eq!(
            temperature_breakpoint("Time @ +15 °C [min]"),
            Some(("time".to_string(), 15.0))
        );
        assert_eq!(
            temperature_breakpoint("Distance @50C [NM]"),
            Some(("distance".to_string(), 50.0))
        );
        assert_eq!(temperature_breakpoint("Weight [kg]"), None);
        assert_eq!(temperature_breakpoint("ROC @ISA"), None);
    }

    #[test]
    fn numbers_with_units() {
        assert_eq!(number(" 650 "), Some(650.0));
        assert_eq!(number("650 kg"), Some(650.0));
        assert_eq!(number("-20"), Some(-20.0));
        assert_eq!(number("26.5 l/h"), Some(26.5));
        assert_eq!(number(""), None);
        assert_eq!(number("n/a"), None);
        assert_eq!(number("12x4"), None);
    }

    #[test]
    fn sea_level_altitude() {
        assert_eq!(altitude("S.L."), Some(0.0));
        assert_eq!(altitude("SL"), Some(0.0));
        assert_eq!(altitude("Sea Level"), Some(0.0));
        assert_eq!(altitude("2000"), Some(2000.0));
        assert_eq!(altitude("2000 ft"), Some(2000.0));
        assert_eq!(altitude("high"), None);
    }
}
