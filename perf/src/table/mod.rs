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

//! Climb and cruise performance tables.
//!
//! Tables are loaded from CSV as published in the aircraft's handbook. Header
//! names are matched case insensitive and without their unit, thus
//! `Pressure Altitude [ft]` and `pressure altitude` are the same column.
//! Rows that can't be parsed are discarded and counted.

mod climb;
mod cruise;
mod header;
pub(crate) mod interp;

pub use climb::{ClimbEncoding, ClimbQuantity, ClimbRow, ClimbTable};
pub use cruise::{CruiseRow, CruiseTable};
