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

//! Load once, aggregate once, filter per interaction.

use crate::aggregate::{top_towns, TownSummary};
use crate::charts::{HorizontalBarChart, StackedBarChart};
use crate::config::{ChartStyle, DashboardConfig};
use crate::error::Result;
use crate::index::{filter_by_index, index_options, IndexSelection, IndexValue};
use crate::loader::TourismTable;
use std::sync::Arc;
use tracing::info;

pub const PAGE_TITLE: &str = "Lebanon Tourism Dashboard";
pub const HEADLINE: &str = "Exploring Lebanon's Exquisite Cities";
pub const ESTABLISHMENTS_HEADING: &str = "Top 20 Towns with the Most Hotels, Restaurants, and Cafes";
pub const INITIATIVES_HEADING: &str = "Towns by Tourism Index and Initiatives";
pub const SELECT_LABEL: &str = "Select a Tourism Index";

pub const INTRO: &str = "Need guidance for your next trip to Lebanon? \
Use these charts to discover the country's finest cities and what they have to offer.";
pub const ESTABLISHMENTS_NOTE: &str = "Gathering around food with friends and family is a staple \
in Lebanon, which is why so many towns are full of cafes and restaurants with hotels close by.";
pub const INITIATIVES_NOTE: &str = "Which towns have invested time and money into raising their \
tourism index? Pick an index below to find out.";
pub const FOOTER: &str = "Thank you for looking through these visuals.";

#[derive(Debug, Clone)]
pub struct Dashboard {
    table: Arc<TourismTable>,
    top_towns: Vec<TownSummary>,
    establishments: StackedBarChart,
    options: Vec<IndexValue>,
    style: ChartStyle,
}

impl Dashboard {
    pub fn load(config: &DashboardConfig) -> Result<Self> {
        let table = TourismTable::load(&config.data_path)?;
        Self::from_table(table, config.top_towns, config.style.clone())
    }

    pub fn from_table(table: TourismTable, limit: usize, style: ChartStyle) -> Result<Self> {
        let top = top_towns(&table, limit)?;
        let establishments = StackedBarChart::establishments(&top, limit);
        let options = index_options(&table)?;
        info!(
            rows = table.height(),
            towns = top.len(),
            index_options = options.len(),
            "Dashboard ready"
        );
        Ok(Self {
            table: Arc::new(table),
            top_towns: top,
            establishments,
            options,
            style,
        })
    }

    pub fn table(&self) -> &TourismTable {
        &self.table
    }

    pub fn top_towns(&self) -> &[TownSummary] {
        &self.top_towns
    }

    pub fn establishments_chart(&self) -> &StackedBarChart {
        &self.establishments
    }

    pub fn index_options(&self) -> &[IndexValue] {
        &self.options
    }

    pub fn style(&self) -> &ChartStyle {
        &self.style
    }

    /// Fresh widget state positioned on the default (lowest) option.
    pub fn selection(&self) -> IndexSelection {
        IndexSelection::new(self.options.clone())
    }

    /// The initiative chart for the selected index, or `None` when there is
    /// nothing to select.
    pub fn initiatives_chart(&self, selection: &IndexSelection) -> Result<Option<HorizontalBarChart>> {
        selection
            .selected()
            .map(|value| self.initiatives_chart_for(value))
            .transpose()
    }

    pub fn initiatives_chart_for(&self, value: &IndexValue) -> Result<HorizontalBarChart> {
        let bars = filter_by_index(&self.table, value)?;
        Ok(HorizontalBarChart::initiatives(value, &bars, &self.style))
    }
}
