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

use crate::error::Result;
use crate::loader::TourismTable;
use crate::schema::{CAFES, HOTELS, RESTAURANTS, TOTAL_ESTABLISHMENTS, TOWN};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

pub const DEFAULT_TOP_TOWNS: usize = 20;

/// Establishment counts for one town, summed over every row of that town.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TownSummary {
    pub town: String,
    pub hotels: f64,
    pub restaurants: f64,
    pub cafes: f64,
    pub total: f64,
}

impl TownSummary {
    pub fn new(town: impl Into<String>, hotels: f64, restaurants: f64, cafes: f64) -> Self {
        Self {
            town: town.into(),
            hotels,
            restaurants,
            cafes,
            total: hotels + restaurants + cafes,
        }
    }
}

/// Every town, ordered by total establishments descending and then by name.
pub fn summarise_towns(table: &TourismTable) -> Result<Vec<TownSummary>> {
    collect_summaries(grouped_establishments(table)?.collect()?)
}

/// The `limit` towns with the most establishments.
pub fn top_towns(table: &TourismTable, limit: usize) -> Result<Vec<TownSummary>> {
    let limit = IdxSize::try_from(limit).unwrap_or(IdxSize::MAX);
    let frame = grouped_establishments(table)?.limit(limit).collect()?;
    let summaries = collect_summaries(frame)?;
    debug!(towns = summaries.len(), "Selected top towns");
    Ok(summaries)
}

fn grouped_establishments(table: &TourismTable) -> Result<LazyFrame> {
    let frame = table.frame();
    let unnamed = frame.column(TOWN)?.null_count();
    if unnamed > 0 {
        warn!(rows = unnamed, "Skipping rows without a town name");
    }
    let numeric = |name: &str| col(name).strict_cast(DataType::Float64);
    Ok(frame
        .clone()
        .lazy()
        .select([
            col(TOWN).cast(DataType::String),
            numeric(HOTELS),
            numeric(RESTAURANTS),
            numeric(CAFES),
        ])
        .filter(col(TOWN).is_not_null())
        .group_by([col(TOWN)])
        .agg([col(HOTELS).sum(), col(RESTAURANTS).sum(), col(CAFES).sum()])
        .with_column((col(HOTELS) + col(RESTAURANTS) + col(CAFES)).alias(TOTAL_ESTABLISHMENTS))
        .sort(
            [TOTAL_ESTABLISHMENTS, TOWN],
            SortMultipleOptions::default()
                .with_order_descending_multi([true, false])
                .with_maintain_order(true),
        ))
}

fn collect_summaries(frame: DataFrame) -> Result<Vec<TownSummary>> {
    let towns = frame.column(TOWN)?.as_materialized_series().str()?;
    let values = |name: &str| -> Result<Vec<f64>> {
        let series = frame
            .column(name)?
            .as_materialized_series()
            .cast(&DataType::Float64)?;
        Ok(series.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect())
    };
    let hotels = values(HOTELS)?;
    let restaurants = values(RESTAURANTS)?;
    let cafes = values(CAFES)?;
    Ok(towns
        .into_iter()
        .zip(hotels)
        .zip(restaurants)
        .zip(cafes)
        .map(|(((town, h), r), c)| TownSummary::new(town.unwrap_or_default(), h, r, c))
        .collect())
}
