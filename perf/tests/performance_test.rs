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

use p2008_perf::fp::{FlightParametersBuilder, Segment};
use p2008_perf::measurements::*;
use p2008_perf::prelude::*;

const CLIMB_DATA: &str = "\
Pressure Altitude [ft],Weight [kg],ROC @0°C,ROC @30°C
S.L.,550,1000,800
S.L.,650,800,600
6000,550,700,500
6000,650,500,300
";

const CRUISE_DATA: &str = "\
Pressure Altitude [ft],Propeller RPM,Weight [kg],KTAS,Fuel Consumption [lt/hr]
6000,2100,650,94,15.3
8000,2100,650,96,14.6
";

/// 600 kg from sea level to 4000 ft at 15 °C without wind at 2000 RPM over
/// 100 NM.
fn example() -> FlightParametersBuilder {
    let mut builder = FlightParameters::builder();
    builder
        .mass(Mass::kg(600.0))
        .airfield_altitude(Altitude::ft(0.0))
        .cruise_altitude(Altitude::ft(4000.0))
        .surface_temperature(Temperature::c(15.0))
        .rpm(2000)
        .distance(Length::nm(100.0));
    builder
}

fn assert_close(actual: f32, expected: f32, tolerance: f32) {
    assert!(
        (actual - expected).abs() < tolerance,
        "{actual} is not within {tolerance} of {expected}"
    );
}

#[test]
fn example_flight() {
    let engine = Engine::p2008jc().expect("bundled tables should load");
    let perf = engine.compute(&example().build().unwrap()).unwrap();

    let climb = perf.climb();
    assert_close(climb.rate_of_climb.unwrap(), 634.0, 1e-3);
    assert_close(climb.segment.time.as_hours(), 0.10515, 1e-4);
    assert_close(climb.segment.distance.to_nm(), 8.412, 1e-2);
    assert_close(climb.segment.fuel.volume().to_l(), 2.103, 1e-2);

    assert_eq!(perf.temperature(), &Temperature::c(7.0));
    assert_eq!(perf.temperature_deviation(), &Temperature::c(0.0));

    let cruise = perf.cruise();
    assert_eq!(cruise.performance.base_tas, Speed::kt(84.0));
    assert_close(cruise.performance.tas.to_kt(), 85.386, 1e-3);
    assert_close(cruise.performance.fuel_flow.to_l_h(), 12.6, 1e-4);
    assert_eq!(cruise.ground_speed, cruise.performance.tas);
    assert_close(cruise.segment.distance.to_nm(), 91.588, 1e-2);
    assert_close(cruise.segment.time.as_hours(), 1.07264, 1e-3);
    assert_close(cruise.segment.fuel.volume().to_l(), 13.515, 1e-2);

    assert_close(perf.allowances().reserve.volume().to_l(), 9.45, 1e-3);
    assert_close(perf.totals().fuel.volume().to_l(), 28.07, 2e-2);
    assert_eq!(perf.totals().time.to_string(), "1:11");
}

#[test]
fn no_climb_at_cruise_altitude() {
    let engine = Engine::p2008jc().unwrap();
    let params = example()
        .airfield_altitude(Altitude::ft(4000.0))
        .build()
        .unwrap();
    let perf = engine.compute(&params).unwrap();

    assert_eq!(perf.climb().segment, Segment::zero(FuelType::AvGas));
    assert_eq!(perf.cruise().segment.distance, Length::nm(100.0));
}

#[test]
fn cruise_at_reference_weight_and_isa_is_tabulated() {
    let engine = Engine::p2008jc().unwrap();
    for (altitude, rpm, ktas) in [(2000.0, 2388, 115.0), (8000.0, 2200, 104.0)] {
        // airfield at sea level with ISA temperature
        let params = example()
            .mass(Mass::kg(650.0))
            .cruise_altitude(Altitude::ft(altitude))
            .rpm(rpm)
            .build()
            .unwrap();
        let perf = engine.compute(&params).unwrap();

        assert_eq!(perf.cruise().performance.tas, Speed::kt(ktas));
    }
}

#[test]
fn headwind_slows_and_tailwind_speeds_up() {
    let engine = Engine::p2008jc().unwrap();
    let calm = engine.compute(&example().build().unwrap()).unwrap();

    let mut components = Vec::new();
    for direction in [0.0, 90.0, 180.0] {
        let params = example()
            .track(Angle::t(0.0))
            .wind(Wind::new(Angle::t(direction), Speed::kt(20.0)))
            .build()
            .unwrap();
        components.push(engine.compute(&params).unwrap());
    }

    let [head, cross, tail] = components.as_slice() else {
        unreachable!()
    };

    let tas = calm.cruise().performance.tas.to_kt();
    assert_close(head.cruise().ground_speed.to_kt(), tas - 20.0, 1e-3);
    assert_close(tail.cruise().ground_speed.to_kt(), tas + 20.0, 1e-3);
    assert_close(cross.cruise().ground_speed.to_kt(), tas, 1e-3);
    assert_close(cross.wind().crosswind.to_kt(), 20.0, 1e-3);

    assert!(head.totals().fuel.volume() > calm.totals().fuel.volume());
    assert!(tail.totals().fuel.volume() < calm.totals().fuel.volume());
    assert!(head.totals().time > calm.totals().time);
}

#[test]
fn totals_cover_trip_fuel() {
    let engine = Engine::p2008jc().unwrap();

    for rpm in engine.cruise_table().rpms() {
        for cruise in engine.cruise_table().altitudes() {
            let params = example()
                .airfield_altitude(Altitude::ft(1000.0))
                .cruise_altitude(Altitude::ft(cruise))
                .rpm(rpm)
                .alternate_distance(Length::nm(30.0))
                .build()
                .unwrap();
            let perf = engine.compute(&params).unwrap();

            assert!(perf.totals().fuel.volume() >= perf.trip_fuel().volume());
            assert!(perf.totals().time >= perf.climb().segment.time);
            assert!(perf.climb().segment.fuel.volume() >= Volume::l(0.0));
        }
    }
}

#[test]
fn negative_rate_of_climb_at_heavy_weight_and_high_temperature() {
    let engine = Engine::p2008jc().unwrap();
    let params = example()
        .mass(Mass::kg(650.0))
        .cruise_altitude(Altitude::ft(14000.0))
        .surface_temperature(Temperature::c(50.0))
        .build()
        .unwrap();

    assert!(matches!(
        engine.compute(&params),
        Err(Error::InvalidClimbRate { rate }) if rate < 0.0
    ));
}

#[test]
fn no_cruise_data_for_altitude() {
    let engine = Engine::p2008jc().unwrap();
    let params = example()
        .cruise_altitude(Altitude::ft(5000.0))
        .build()
        .unwrap();

    assert_eq!(
        engine.compute(&params),
        Err(Error::NoCruiseData {
            altitude: 5000.0,
            rpm: 2000
        })
    );
}

#[test]
fn custom_tables() {
    let engine = Engine::new(
        CLIMB_DATA.parse().unwrap(),
        CRUISE_DATA.parse().unwrap(),
        Config::default(),
    );

    // between all brackets: 3000 ft, 15 °C and 600 kg
    let params = example()
        .cruise_altitude(Altitude::ft(6000.0))
        .airfield_altitude(Altitude::ft(3000.0))
        .rpm(2100)
        .build()
        .unwrap();
    let perf = engine.compute(&params).unwrap();

    assert_close(perf.climb().rate_of_climb.unwrap(), 650.0, 1e-3);

    // the climb table ends at 6000 ft
    let params = example()
        .cruise_altitude(Altitude::ft(8000.0))
        .rpm(2100)
        .build()
        .unwrap();

    assert_eq!(
        engine.compute(&params),
        Err(Error::ClimbOutOfRange {
            gain: 8000.0,
            max: 6000.0
        })
    );
}

#[test]
fn parameters_out_of_range() {
    let result = example().mass(Mass::kg(700.0)).build();

    assert_eq!(
        result,
        Err(Error::ParameterOutOfRange {
            parameter: "weight",
            value: 700.0,
            min: 550.0,
            max: 650.0
        })
    );
}
