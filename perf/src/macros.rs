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

/// Creates AvGas [`Fuel`] from the [`Volume`].
///
/// [`Fuel`]: crate::Fuel
/// [`Volume`]: crate::measurements::Volume
#[macro_export]
macro_rules! avgas {
    ($volume:expr) => {
        Fuel::new($volume, FuelType::AvGas)
    };
}

/// Creates Mogas [`Fuel`] from the [`Volume`].
///
/// [`Fuel`]: crate::Fuel
/// [`Volume`]: crate::measurements::Volume
#[macro_export]
macro_rules! mogas {
    ($volume:expr) => {
        Fuel::new($volume, FuelType::Mogas)
    };
}
