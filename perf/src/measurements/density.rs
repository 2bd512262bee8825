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

use std::ops::Div;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use super::{Mass, Measurement, UnitOfMeasure, Volume};

/// Density unit with _kg/l_ as the only unit.
///
/// Fuel densities are published in kilogram per liter, so there is no need
/// for another unit yet.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum DensityUnit {
    KilogramPerLiter,
}

impl UnitOfMeasure<f32> for DensityUnit {
    fn symbol(&self) -> &'static str {
        "kg/l"
    }

    fn from_si(value: f32, _to: &Self) -> f32 {
        value
    }

    fn to_si(&self, value: &f32) -> f32 {
        *value
    }
}

pub type Density = Measurement<f32, DensityUnit>;

impl Density {
    pub const fn kg_per_l(value: f32) -> Self {
        Self {
            value,
            unit: DensityUnit::KilogramPerLiter,
        }
    }

    pub(super) fn kg_per_l_value(&self) -> f32 {
        self.value
    }
}

impl Div<Density> for Mass {
    type Output = Volume;

    fn div(self, rhs: Density) -> Self::Output {
        Volume::l(self.to_kg() / rhs.kg_per_l_value())
    }
}
