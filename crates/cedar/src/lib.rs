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

pub mod aggregate;
pub mod charts;
pub mod config;
pub mod dashboard;
pub mod error;
pub mod export;
pub mod index;
pub mod loader;
pub mod schema;

pub use aggregate::{summarise_towns, top_towns, TownSummary, DEFAULT_TOP_TOWNS};
pub use charts::{BarSeries, HorizontalBarChart, StackedBarChart};
pub use config::{ChartStyle, DashboardConfig};
pub use dashboard::Dashboard;
pub use error::{ConfigError, DashboardError, ErrorReporter, Result};
pub use export::{render_html, write_html};
pub use index::{filter_by_index, index_options, IndexSelection, IndexValue, InitiativeBar};
pub use loader::{load_tourism_csv, TourismTable};
