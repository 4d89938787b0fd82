// SPDX-License-Identifier: AGPL-3.0-only
// Copyright (C) 2024 Jonathan Lee
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU Affero General Public License version 3
// as published by the Free Software Foundation.
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.
// See the GNU Affero General Public License for more details.
// You should have received a copy of the GNU Affero General Public License
// along with this program. If not, see https://www.gnu.org/licenses/.

//! Column names of the tourism dataset, as they appear after header trimming.

pub const TOWN: &str = "Town";
pub const HOTELS: &str = "Total number of hotels";
pub const RESTAURANTS: &str = "Total number of restaurants";
pub const CAFES: &str = "Total number of cafes";
pub const TOURISM_INDEX: &str = "Tourism Index";
pub const INITIATIVES: &str =
    "Existence of initiatives and projects in the past five years to improve the tourism sector - exists";
/// Derived column produced by the town aggregation.
pub const TOTAL_ESTABLISHMENTS: &str = "Total Establishments";

pub const REQUIRED_COLUMNS: [&str; 6] = [TOWN, HOTELS, RESTAURANTS, CAFES, TOURISM_INDEX, INITIATIVES];

/// Columns summed per town.
pub const ESTABLISHMENT_COLUMNS: [&str; 3] = [HOTELS, RESTAURANTS, CAFES];
