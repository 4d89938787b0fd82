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

//! Reads the tourism CSV into a normalised, immutable table.
//!
//! Normalisation trims every header and replaces missing initiative values
//! with zero. Missing counts (empty cells, the usual `NA`/`null`/`NaN`
//! spellings, and NaN floats) reach the aggregations as nulls, and blank
//! town or index labels are treated as missing. Other columns are kept as
//! polars inferred them.

use crate::error::{DashboardError, Result};
use crate::schema::{ESTABLISHMENT_COLUMNS, INITIATIVES, REQUIRED_COLUMNS, TOURISM_INDEX, TOWN};
use polars::prelude::*;
use std::fs::File;
use std::io::Cursor;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

#[derive(Debug, Clone)]
pub struct TourismTable {
    frame: DataFrame,
    source: Option<PathBuf>,
}

impl TourismTable {
    /// Reads and normalises the CSV at `path`. Nothing is cached, so every
    /// call goes back to disk.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        info!(path = %path.display(), "Loading tourism dataset");
        let file = File::open(path)?;
        let frame = csv_options()
            .into_reader_with_file_handle(file)
            .finish()
            .map_err(|source| DashboardError::DataFile {
                path: path.display().to_string(),
                source,
            })?;
        let mut table = Self::from_frame(frame)?;
        table.source = Some(path.to_path_buf());
        Ok(table)
    }

    pub fn from_csv_bytes(bytes: impl Into<Vec<u8>>) -> Result<Self> {
        let frame = csv_options()
            .into_reader_with_file_handle(Cursor::new(bytes.into()))
            .finish()
            .map_err(|source| DashboardError::DataFile {
                path: "<memory>".to_string(),
                source,
            })?;
        Self::from_frame(frame)
    }

    pub fn from_frame(mut frame: DataFrame) -> Result<Self> {
        trim_headers(&mut frame)?;
        check_schema(&frame)?;
        let mut normalise: Vec<Expr> = ESTABLISHMENT_COLUMNS
            .into_iter()
            .map(|name| col(name).strict_cast(DataType::Float64).fill_nan(lit(NULL)))
            .collect();
        normalise.push(
            col(INITIATIVES)
                .strict_cast(DataType::Float64)
                .fill_nan(lit(0.0))
                .fill_null(lit(0.0)),
        );
        for name in [TOWN, TOURISM_INDEX] {
            if frame.column(name)?.dtype() == &DataType::String {
                normalise.push(
                    when(col(name).eq(lit("")))
                        .then(lit(NULL).cast(DataType::String))
                        .otherwise(col(name))
                        .alias(name),
                );
            }
        }
        let frame = frame.lazy().with_columns(normalise).collect()?;
        debug!(rows = frame.height(), columns = frame.width(), "Normalised tourism table");
        Ok(Self {
            frame,
            source: None,
        })
    }

    pub fn frame(&self) -> &DataFrame {
        &self.frame
    }

    pub fn height(&self) -> usize {
        self.frame.height()
    }

    pub fn is_empty(&self) -> bool {
        self.frame.height() == 0
    }

    pub fn source(&self) -> Option<&Path> {
        self.source.as_deref()
    }

    pub fn column_names(&self) -> Vec<String> {
        self.frame
            .get_column_names()
            .iter()
            .map(|name| name.as_str().to_owned())
            .collect()
    }

    /// Initiative indicator for every row, in table order.
    pub fn initiatives(&self) -> Result<Vec<f64>> {
        let series = self.frame.column(INITIATIVES)?.as_materialized_series();
        Ok(series.f64()?.into_iter().map(|v| v.unwrap_or(0.0)).collect())
    }

    /// Raw values of one column rendered as text, `None` where missing.
    pub fn text_column(&self, name: &str) -> Result<Vec<Option<String>>> {
        let column = self
            .frame
            .column(name)
            .map_err(|_| DashboardError::missing_column(name))?;
        let series = column.as_materialized_series().cast(&DataType::String)?;
        Ok(series
            .str()?
            .into_iter()
            .map(|v| v.map(str::to_owned))
            .collect())
    }
}

pub fn load_tourism_csv<P: AsRef<Path>>(path: P) -> Result<TourismTable> {
    TourismTable::load(path)
}

/// Cell spellings read as missing in addition to an empty field.
const MISSING_TOKENS: [&str; 18] = [
    "#N/A", "#N/A N/A", "#NA", "-1.#IND", "-1.#QNAN", "-NaN", "-nan", "1.#IND", "1.#QNAN", "<NA>",
    "N/A", "NA", "NULL", "NaN", "None", "n/a", "nan", "null",
];

fn csv_options() -> CsvReadOptions {
    let null_values =
        NullValues::AllColumns(MISSING_TOKENS.into_iter().map(PlSmallStr::from).collect());
    CsvReadOptions::default()
        .with_has_header(true)
        .with_infer_schema_length(None)
        .map_parse_options(move |parse| parse.with_null_values(Some(null_values.clone())))
}

fn trim_headers(frame: &mut DataFrame) -> Result<()> {
    let names: Vec<String> = frame
        .get_column_names()
        .iter()
        .map(|name| name.as_str().to_owned())
        .collect();
    for name in names {
        let trimmed = name.trim();
        if trimmed != name {
            frame.rename(&name, trimmed.into())?;
        }
    }
    Ok(())
}

fn check_schema(frame: &DataFrame) -> Result<()> {
    for column in REQUIRED_COLUMNS {
        if frame.get_column_index(column).is_none() {
            return Err(DashboardError::missing_column(column));
        }
    }
    for column in ESTABLISHMENT_COLUMNS.into_iter().chain([INITIATIVES]) {
        let series = frame.column(column)?.as_materialized_series();
        if let Err(source) = series.strict_cast(&DataType::Float64) {
            return Err(DashboardError::ColumnType {
                column: column.to_string(),
                source,
            });
        }
    }
    Ok(())
}
