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

//! Tourism index options and the per-index initiative filter.

use crate::error::Result;
use crate::loader::TourismTable;
use crate::schema::{INITIATIVES, TOURISM_INDEX, TOWN};
use polars::prelude::*;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use tracing::debug;

/// One selectable `Tourism Index` value.
///
/// Numeric index columns compare numerically, anything else compares as text.
/// A single column never mixes the two.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum IndexValue {
    Numeric(f64),
    Label(String),
}

impl IndexValue {
    fn to_filter(&self) -> Expr {
        match self {
            IndexValue::Numeric(v) => col(TOURISM_INDEX).cast(DataType::Float64).eq(lit(*v)),
            IndexValue::Label(s) => col(TOURISM_INDEX)
                .cast(DataType::String)
                .eq(lit(s.clone())),
        }
    }
}

impl PartialEq for IndexValue {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for IndexValue {}

impl PartialOrd for IndexValue {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for IndexValue {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (IndexValue::Numeric(a), IndexValue::Numeric(b)) => a.total_cmp(b),
            (IndexValue::Label(a), IndexValue::Label(b)) => a.cmp(b),
            (IndexValue::Numeric(_), IndexValue::Label(_)) => Ordering::Less,
            (IndexValue::Label(_), IndexValue::Numeric(_)) => Ordering::Greater,
        }
    }
}

impl fmt::Display for IndexValue {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            IndexValue::Numeric(v) if v.fract() == 0.0 && v.abs() < 1e15 => {
                write!(f, "{}", *v as i64)
            }
            IndexValue::Numeric(v) => write!(f, "{v}"),
            IndexValue::Label(s) => write!(f, "{s}"),
        }
    }
}

impl From<f64> for IndexValue {
    fn from(value: f64) -> Self {
        IndexValue::Numeric(value)
    }
}

impl From<i64> for IndexValue {
    fn from(value: i64) -> Self {
        IndexValue::Numeric(value as f64)
    }
}

impl From<&str> for IndexValue {
    fn from(value: &str) -> Self {
        IndexValue::Label(value.to_string())
    }
}

/// A single bar of the filtered chart: one table row, never merged with
/// other rows of the same town.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InitiativeBar {
    pub town: String,
    pub initiatives: f64,
}

/// Distinct non-missing index values, ascending.
pub fn index_options(table: &TourismTable) -> Result<Vec<IndexValue>> {
    let series = table
        .frame()
        .column(TOURISM_INDEX)?
        .as_materialized_series()
        .clone();
    let mut options: Vec<IndexValue> = if is_numeric(series.dtype()) {
        let values = series.cast(&DataType::Float64)?;
        values
            .f64()?
            .into_iter()
            .flatten()
            .filter(|v| !v.is_nan())
            .map(IndexValue::Numeric)
            .collect()
    } else {
        let values = series.cast(&DataType::String)?;
        values
            .str()?
            .into_iter()
            .flatten()
            .map(|s| IndexValue::Label(s.to_owned()))
            .collect()
    };
    options.sort();
    options.dedup();
    debug!(options = options.len(), "Collected tourism index options");
    Ok(options)
}

/// Rows whose index equals `value`, in table order.
pub fn filter_by_index(table: &TourismTable, value: &IndexValue) -> Result<Vec<InitiativeBar>> {
    let frame = table
        .frame()
        .clone()
        .lazy()
        .filter(value.to_filter())
        .select([col(TOWN).cast(DataType::String), col(INITIATIVES)])
        .collect()?;
    let towns = frame.column(TOWN)?.as_materialized_series().str()?;
    let initiatives = frame.column(INITIATIVES)?.as_materialized_series().f64()?;
    let bars: Vec<InitiativeBar> = towns
        .into_iter()
        .zip(initiatives.into_iter())
        .map(|(town, initiatives)| InitiativeBar {
            town: town.unwrap_or_default().to_owned(),
            initiatives: initiatives.unwrap_or(0.0),
        })
        .collect();
    debug!(index = %value, rows = bars.len(), "Filtered by tourism index");
    Ok(bars)
}

/// Which index the dropdown currently shows. Passed explicitly into the
/// filter so the aggregation code never reads widget state.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct IndexSelection {
    options: Vec<IndexValue>,
    selected: Option<usize>,
}

impl IndexSelection {
    /// Starts on the lowest option, or on nothing when `options` is empty.
    pub fn new(mut options: Vec<IndexValue>) -> Self {
        options.sort();
        options.dedup();
        let selected = if options.is_empty() { None } else { Some(0) };
        Self { options, selected }
    }

    pub fn options(&self) -> &[IndexValue] {
        &self.options
    }

    pub fn selected(&self) -> Option<&IndexValue> {
        self.selected.and_then(|i| self.options.get(i))
    }

    pub fn selected_position(&self) -> Option<usize> {
        self.selected
    }

    /// Returns `true` when the selection changed. Values outside the option
    /// list are ignored.
    pub fn select(&mut self, value: &IndexValue) -> bool {
        match self.options.binary_search(value) {
            Ok(position) => self.select_position(position),
            Err(_) => false,
        }
    }

    pub fn select_position(&mut self, position: usize) -> bool {
        if position >= self.options.len() || self.selected == Some(position) {
            return false;
        }
        self.selected = Some(position);
        true
    }
}

fn is_numeric(dtype: &DataType) -> bool {
    matches!(
        dtype,
        DataType::Int8
            | DataType::Int16
            | DataType::Int32
            | DataType::Int64
            | DataType::UInt8
            | DataType::UInt16
            | DataType::UInt32
            | DataType::UInt64
            | DataType::Float32
            | DataType::Float64
    )
}
