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

use crate::aggregate::DEFAULT_TOP_TOWNS;
use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

pub const DEFAULT_DATA_PATH: &str = "Tourism Lebanon 2023.csv";
pub const DEFAULT_CONFIG_FILE: &str = "cedar.toml";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DashboardConfig {
    pub data_path: PathBuf,
    pub top_towns: usize,
    pub window_width: f32,
    pub window_height: f32,
    pub style: ChartStyle,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChartStyle {
    /// Fill of the initiative bars. The HTML export passes any CSS colour
    /// through to Plotly; the native window understands `teal`, `navy`,
    /// `steelblue`, `orange`, `red`, `green`, `blue` and `#rrggbb`, and draws
    /// teal for anything else.
    pub bar_colour: String,
    /// Height in pixels of the initiative chart.
    pub chart_height: u32,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            top_towns: DEFAULT_TOP_TOWNS,
            window_width: 1200.0,
            window_height: 900.0,
            style: ChartStyle::default(),
        }
    }
}

impl Default for ChartStyle {
    fn default() -> Self {
        Self {
            bar_colour: "teal".to_string(),
            chart_height: 600,
        }
    }
}

impl DashboardConfig {
    pub fn from_toml_str(content: &str) -> ConfigResult<Self> {
        let config: Self = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content =
            std::fs::read_to_string(path).map_err(|source| ConfigError::ConfigFileError {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_toml_str(&content)
    }

    /// Loads `path` when given, otherwise `cedar.toml` in the working
    /// directory if it exists, otherwise the defaults.
    pub fn load_or_default(path: Option<&Path>) -> ConfigResult<Self> {
        match path {
            Some(path) => Self::load(path),
            None if Path::new(DEFAULT_CONFIG_FILE).is_file() => Self::load(DEFAULT_CONFIG_FILE),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> ConfigResult<()> {
        if self.top_towns == 0 {
            return Err(invalid("top_towns", self.top_towns));
        }
        if !(self.window_width > 0.0) {
            return Err(invalid("window_width", self.window_width));
        }
        if !(self.window_height > 0.0) {
            return Err(invalid("window_height", self.window_height));
        }
        if self.style.chart_height == 0 {
            return Err(invalid("style.chart_height", self.style.chart_height));
        }
        if self.style.bar_colour.trim().is_empty() {
            return Err(invalid("style.bar_colour", "\"\""));
        }
        Ok(())
    }
}

fn invalid(field: &str, value: impl ToString) -> ConfigError {
    ConfigError::InvalidValue {
        field: field.to_string(),
        value: value.to_string(),
    }
}
