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

//! Toolkit-independent chart descriptions.
//!
//! The egui app draws these directly and the HTML export turns them into
//! Plotly figures with [`StackedBarChart::to_plotly`] and
//! [`HorizontalBarChart::to_plotly`].

use crate::aggregate::TownSummary;
use crate::config::ChartStyle;
use crate::index::{IndexValue, InitiativeBar};
use crate::schema::{CAFES, HOTELS, RESTAURANTS};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarSeries {
    pub name: String,
    pub values: Vec<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StackedBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub categories: Vec<String>,
    pub series: Vec<BarSeries>,
}

impl StackedBarChart {
    /// Hotels, restaurants and cafes stacked per town. The derived total is
    /// not a segment.
    pub fn establishments(towns: &[TownSummary], limit: usize) -> Self {
        let segment = |name: &str, pick: fn(&TownSummary) -> f64| BarSeries {
            name: name.to_string(),
            values: towns.iter().map(pick).collect(),
        };
        Self {
            title: format!("Top {limit} Towns with the Most Hotels, Restaurants, and Cafes"),
            x_label: "Town".to_string(),
            y_label: "Count".to_string(),
            categories: towns.iter().map(|t| t.town.clone()).collect(),
            series: vec![
                segment(HOTELS, |t| t.hotels),
                segment(RESTAURANTS, |t| t.restaurants),
                segment(CAFES, |t| t.cafes),
            ],
        }
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Height of the tallest stack.
    pub fn max_stack(&self) -> f64 {
        (0..self.categories.len())
            .map(|i| self.series.iter().map(|s| s.values[i]).sum::<f64>())
            .fold(0.0, f64::max)
    }

    pub fn to_plotly(&self) -> Value {
        let data: Vec<Value> = self
            .series
            .iter()
            .map(|series| {
                json!({
                    "type": "bar",
                    "name": series.name,
                    "x": self.categories,
                    "y": series.values,
                })
            })
            .collect();
        json!({
            "data": data,
            "layout": {
                "title": { "text": self.title },
                "barmode": "stack",
                "xaxis": { "title": { "text": self.x_label } },
                "yaxis": { "title": { "text": self.y_label } },
                "legend": { "title": { "text": "variable" } },
            },
        })
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HorizontalBarChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    /// One entry per bar; repeated towns stay separate bars.
    pub categories: Vec<String>,
    pub values: Vec<f64>,
    pub colour: String,
    pub height: u32,
    pub show_legend: bool,
}

impl HorizontalBarChart {
    pub fn initiatives(index: &IndexValue, bars: &[InitiativeBar], style: &ChartStyle) -> Self {
        Self {
            title: format!("Towns with Tourism Index = {index}"),
            x_label: "Existence of initiatives in the past 5 years".to_string(),
            y_label: "Town".to_string(),
            categories: bars.iter().map(|b| b.town.clone()).collect(),
            values: bars.iter().map(|b| b.initiatives).collect(),
            colour: style.bar_colour.clone(),
            height: style.chart_height,
            show_legend: false,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn to_plotly(&self) -> Value {
        json!({
            "data": [{
                "type": "bar",
                "orientation": "h",
                "x": self.values,
                "y": self.categories,
                "marker": { "color": self.colour },
            }],
            "layout": {
                "title": { "text": self.title },
                "xaxis": { "title": { "text": self.x_label } },
                "yaxis": { "title": { "text": self.y_label } },
                "showlegend": self.show_legend,
                "height": self.height,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stacked_chart_keeps_components_not_total() {
        let towns = vec![
            TownSummary::new("Jounieh", 4.0, 10.0, 6.0),
            TownSummary::new("Zahle", 1.0, 2.0, 0.0),
        ];
        let chart = StackedBarChart::establishments(&towns, 20);
        assert_eq!(chart.series.len(), 3);
        assert_eq!(chart.series[1].values, vec![10.0, 2.0]);
        assert_eq!(chart.max_stack(), 20.0);
        let figure = chart.to_plotly();
        assert_eq!(figure["layout"]["barmode"], "stack");
        assert_eq!(figure["data"][0]["x"][1], "Zahle");
    }

    #[test]
    fn test_initiative_chart_title_names_selected_index() {
        let bars = vec![InitiativeBar {
            town: "Batroun".to_string(),
            initiatives: 1.0,
        }];
        let chart =
            HorizontalBarChart::initiatives(&IndexValue::Numeric(2.0), &bars, &ChartStyle::default());
        assert_eq!(chart.title, "Towns with Tourism Index = 2");
        let figure = chart.to_plotly();
        assert_eq!(figure["data"][0]["orientation"], "h");
        assert_eq!(figure["data"][0]["marker"]["color"], "teal");
        assert_eq!(figure["layout"]["showlegend"], false);
        assert_eq!(figure["layout"]["height"], 600);
    }

    #[test]
    fn test_empty_charts_render_without_bars() {
        let chart = StackedBarChart::establishments(&[], 20);
        assert!(chart.is_empty());
        assert_eq!(chart.max_stack(), 0.0);
        let empty = HorizontalBarChart::initiatives(
            &IndexValue::from("none"),
            &[],
            &ChartStyle::default(),
        );
        assert!(empty.is_empty());
        assert_eq!(empty.to_plotly()["data"][0]["x"].as_array().map(Vec::len), Some(0));
    }
}
