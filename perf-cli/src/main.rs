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

use std::fmt::Write as _;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::{ArgAction, Parser, ValueEnum, ValueHint};
use p2008_perf::fp::{Config, Engine, FlightParameters, FlightPerformance};
use p2008_perf::measurements::{Altitude, Angle, Length, Mass, Speed, Temperature, Volume};
use p2008_perf::table::{ClimbTable, CruiseTable};
use p2008_perf::{FuelType, Wind};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(author, version, about = "Climb and cruise performance of the P2008 JC", long_about = None)]
struct Cli {
    /// Take-off weight in kg
    #[arg(long, default_value_t = 600.0)]
    weight: f32,

    /// Pressure altitude of the departure airfield in ft
    #[arg(long, default_value_t = 1000.0)]
    airfield_altitude: f32,

    /// Cruise pressure altitude in ft
    #[arg(long, default_value_t = 4000.0)]
    cruise_altitude: f32,

    /// Temperature at the airfield in °C
    #[arg(long, default_value_t = 15.0, allow_negative_numbers = true)]
    temperature: f32,

    /// True track in degrees
    #[arg(long, default_value_t = 180.0)]
    track: f32,

    /// True direction the wind blows from in degrees
    #[arg(long, default_value_t = 180.0)]
    wind_direction: f32,

    /// Wind speed in kt
    #[arg(long, default_value_t = 0.0)]
    wind_speed: f32,

    /// Wind as in a METAR, e.g. 24015KT; overrides direction and speed
    #[arg(long)]
    wind: Option<String>,

    /// Propeller RPM (defaults to the highest RPM in the cruise table)
    #[arg(long)]
    rpm: Option<u16>,

    /// Distance to the destination in NM
    #[arg(long, default_value_t = 100.0)]
    distance: f32,

    /// Distance from the destination to the alternate in NM
    #[arg(long, default_value_t = 0.0)]
    alternate_distance: f32,

    /// Additional fuel in liter
    #[arg(long, default_value_t = 0.0)]
    extra_fuel: f32,

    /// Climb table CSV replacing the bundled one
    #[arg(long, value_hint = ValueHint::FilePath)]
    climb_table: Option<PathBuf>,

    /// Cruise table CSV replacing the bundled one
    #[arg(long, value_hint = ValueHint::FilePath)]
    cruise_table: Option<PathBuf>,

    /// Fuel type, overriding the configuration
    #[arg(long, value_enum)]
    fuel_type: Option<FuelOpt>,

    /// JSON file with the configuration
    #[arg(long, value_hint = ValueHint::FilePath)]
    config: Option<PathBuf>,

    /// Print the result as JSON
    #[arg(long, action = ArgAction::SetTrue)]
    json: bool,

    /// Enable verbose logging
    #[arg(short, long, action = ArgAction::SetTrue)]
    verbose: bool,
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum FuelOpt {
    Avgas,
    Mogas,
}

impl From<FuelOpt> for FuelType {
    fn from(opt: FuelOpt) -> Self {
        match opt {
            FuelOpt::Avgas => FuelType::AvGas,
            FuelOpt::Mogas => FuelType::Mogas,
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_level = if cli.verbose { "debug" } else { "warn" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let engine = load_engine(&cli)?;
    let params = flight_parameters(&cli, engine.cruise_table())?;

    let perf = engine
        .compute(&params)
        .context("failed to compute the flight performance")?;

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&perf)?);
    } else {
        print!("{}", report(&params, &perf)?);
    }

    Ok(())
}

fn load_engine(cli: &Cli) -> Result<Engine> {
    let climb = match &cli.climb_table {
        Some(path) => ClimbTable::from_path(path)
            .with_context(|| format!("failed to load climb table {}", path.display()))?,
        None => ClimbTable::p2008jc()?,
    };

    let cruise = match &cli.cruise_table {
        Some(path) => CruiseTable::from_path(path)
            .with_context(|| format!("failed to load cruise table {}", path.display()))?,
        None => CruiseTable::p2008jc()?,
    };

    let discarded = climb.discarded_rows() + cruise.discarded_rows();
    if discarded > 0 {
        info!("{discarded} table rows were discarded while loading");
    }

    let mut config = match &cli.config {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };
    if let Some(fuel_type) = cli.fuel_type {
        config = config.with_fuel_type(fuel_type.into());
    }

    Ok(Engine::new(climb, cruise, config))
}

fn load_config(path: &Path) -> Result<Config> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("failed to read config {}", path.display()))?;
    let config: Config = serde_json::from_str(&text)
        .with_context(|| format!("{} is not a valid config", path.display()))?;

    debug!("loaded config {config:?}");
    Ok(config)
}

fn flight_parameters(cli: &Cli, cruise: &CruiseTable) -> Result<FlightParameters> {
    let wind = match &cli.wind {
        Some(metar) => metar
            .parse::<Wind>()
            .with_context(|| format!("invalid wind {metar}"))?,
        None => Wind::new(Angle::t(cli.wind_direction), Speed::kt(cli.wind_speed)),
    };

    let rpm = match cli.rpm {
        Some(rpm) => rpm,
        None => cruise
            .rpms()
            .first()
            .copied()
            .ok_or_else(|| anyhow!("the cruise table has no RPM settings"))?,
    };

    let params = FlightParameters::builder()
        .mass(Mass::kg(cli.weight))
        .airfield_altitude(Altitude::ft(cli.airfield_altitude))
        .cruise_altitude(Altitude::ft(cli.cruise_altitude))
        .surface_temperature(Temperature::c(cli.temperature))
        .track(Angle::t(cli.track))
        .wind(wind)
        .rpm(rpm)
        .distance(Length::nm(cli.distance))
        .alternate_distance(Length::nm(cli.alternate_distance))
        .extra_fuel(Volume::l(cli.extra_fuel))
        .build()?;

    Ok(params)
}

fn report(params: &FlightParameters, perf: &FlightPerformance) -> Result<String> {
    let mut out = String::new();

    writeln!(
        out,
        "Cruise at {:.0} ft, {} RPM, {:.0}",
        params.cruise_altitude().to_ft(),
        params.rpm(),
        params.mass()
    )?;
    writeln!(
        out,
        "  Temperature   {:.1} (ISA {:.1}, deviation {:+.1} °C)",
        perf.temperature(),
        perf.isa_temperature(),
        perf.temperature_deviation().to_celsius()
    )?;
    writeln!(
        out,
        "  Wind          {:.1} headwind, {:.1} crosswind",
        perf.wind().headwind,
        perf.wind().crosswind
    )?;
    if let (Some(wca), Some(heading)) = (perf.wca(), perf.heading()) {
        writeln!(out, "  Heading       {:03.0}° (WCA {:+.0}°)", heading.value(), wca.value())?;
    }
    writeln!(out)?;

    let climb = perf.climb();
    write!(
        out,
        "Climb         {}  {:.1}  {:.1}",
        climb.segment.time, climb.segment.distance, climb.segment.fuel
    )?;
    match climb.rate_of_climb {
        Some(roc) => writeln!(out, "  ({roc:.0} ft/min)")?,
        None => writeln!(out)?,
    }

    let cruise = perf.cruise();
    writeln!(
        out,
        "Cruise        {}  {:.1}  {:.1}  ({}, GS {:.1})",
        cruise.segment.time,
        cruise.segment.distance,
        cruise.segment.fuel,
        cruise.performance,
        cruise.ground_speed
    )?;

    let alternate = perf.alternate();
    if let Some(performance) = &alternate.performance {
        writeln!(
            out,
            "Alternate     {}  {:.1}  {:.1}  ({performance})",
            alternate.segment.time, alternate.segment.distance, alternate.segment.fuel
        )?;
    }
    writeln!(out)?;

    let allowances = perf.allowances();
    writeln!(out, "Reserve       {:.1}", allowances.reserve)?;
    writeln!(out, "Departure     {:.1}", allowances.departure)?;
    writeln!(out, "Landing       {:.1}", allowances.landing)?;
    writeln!(out, "Additional    {:.1}", allowances.extra)?;
    writeln!(out)?;

    let totals = perf.totals();
    writeln!(out, "Total time    {}", totals.time)?;
    writeln!(
        out,
        "Total fuel    {:.1} ({:.1})",
        totals.fuel,
        totals.fuel.mass()
    )?;

    Ok(out)
}
