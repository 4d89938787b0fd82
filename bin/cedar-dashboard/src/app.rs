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

use cedar::dashboard::{
    ESTABLISHMENTS_HEADING, ESTABLISHMENTS_NOTE, FOOTER, HEADLINE, INITIATIVES_HEADING,
    INITIATIVES_NOTE, INTRO, SELECT_LABEL,
};
use cedar::{Dashboard, HorizontalBarChart, IndexSelection, StackedBarChart};
use eframe::egui;
use egui_plot::{Bar, BarChart, GridMark, Legend, Plot};
use std::ops::RangeInclusive;
use tracing::{debug, error, warn};

/// Plotly's default qualitative palette, so the window matches the HTML export.
const SEGMENT_COLOURS: [egui::Color32; 3] = [
    egui::Color32::from_rgb(0x63, 0x6e, 0xfa),
    egui::Color32::from_rgb(0xef, 0x55, 0x3b),
    egui::Color32::from_rgb(0x00, 0xcc, 0x96),
];
const ESTABLISHMENTS_HEIGHT: f32 = 450.0;

pub struct DashboardApp {
    dashboard: Dashboard,
    selection: IndexSelection,
    initiatives: Option<HorizontalBarChart>,
    bar_fill: egui::Color32,
    error_message: Option<String>,
}

impl DashboardApp {
    pub fn new(dashboard: Dashboard) -> Self {
        let selection = dashboard.selection();
        let bar_fill = css_colour(&dashboard.style().bar_colour);
        let mut app = Self {
            dashboard,
            selection,
            initiatives: None,
            bar_fill,
            error_message: None,
        };
        app.refresh_initiatives();
        app
    }

    fn refresh_initiatives(&mut self) {
        match self.dashboard.initiatives_chart(&self.selection) {
            Ok(chart) => {
                debug!(
                    index = ?self.selection.selected(),
                    bars = chart.as_ref().map_or(0, |c| c.values.len()),
                    "Re-rendered initiatives chart"
                );
                self.initiatives = chart;
            }
            Err(e) => {
                error!(error = %e, "Filtering by tourism index failed");
                self.error_message = Some(e.to_string());
            }
        }
    }

    fn render_selector(&mut self, ui: &mut egui::Ui) {
        let current = self.selection.selected_position();
        let mut picked = None;
        egui::ComboBox::from_label(SELECT_LABEL)
            .selected_text(
                self.selection
                    .selected()
                    .map(ToString::to_string)
                    .unwrap_or_default(),
            )
            .show_ui(ui, |ui| {
                for (i, option) in self.selection.options().iter().enumerate() {
                    if ui
                        .selectable_label(current == Some(i), option.to_string())
                        .clicked()
                    {
                        picked = Some(i);
                    }
                }
            });
        if let Some(position) = picked {
            if self.selection.select_position(position) {
                self.refresh_initiatives();
            }
        }
    }
}

impl eframe::App for DashboardApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::CentralPanel::default().show(ctx, |ui| {
            if let Some(ref error) = self.error_message {
                ui.colored_label(egui::Color32::RED, "Error:");
                ui.separator();
                ui.monospace(error);
                return;
            }

            egui::ScrollArea::vertical().show(ui, |ui| {
                ui.heading(HEADLINE);
                ui.label(INTRO);
                ui.separator();

                ui.heading(ESTABLISHMENTS_HEADING);
                ui.label(ESTABLISHMENTS_NOTE);
                establishments_plot(ui, self.dashboard.establishments_chart());
                ui.add_space(16.0);

                ui.heading(INITIATIVES_HEADING);
                ui.label(INITIATIVES_NOTE);
                self.render_selector(ui);
                match self.initiatives {
                    Some(ref chart) => initiatives_plot(ui, chart, self.bar_fill),
                    None => {
                        ui.label("No tourism index values to select.");
                    }
                }

                ui.separator();
                ui.label(FOOTER);
            });
        });
    }
}

fn establishments_plot(ui: &mut egui::Ui, chart: &StackedBarChart) {
    ui.label(&chart.title);
    let mut stacked: Vec<BarChart> = Vec::with_capacity(chart.series.len());
    for (series, colour) in chart.series.iter().zip(SEGMENT_COLOURS.iter().cycle()) {
        let bars = series
            .values
            .iter()
            .enumerate()
            .map(|(i, value)| {
                Bar::new(i as f64, *value)
                    .name(&chart.categories[i])
                    .width(0.7)
            })
            .collect();
        let below: Vec<&BarChart> = stacked.iter().collect();
        let segment = BarChart::new(series.name.clone(), bars)
            .color(*colour)
            .stack_on(&below);
        stacked.push(segment);
    }

    let labels = chart.categories.clone();
    Plot::new("establishments_plot")
        .legend(Legend::default())
        .height(ESTABLISHMENTS_HEIGHT)
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .x_axis_formatter(move |mark, range| category_label(&labels, mark, range))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| {
            for segment in stacked {
                plot_ui.bar_chart(segment);
            }
        });
}

fn initiatives_plot(ui: &mut egui::Ui, chart: &HorizontalBarChart, fill: egui::Color32) {
    ui.label(&chart.title);
    let bars = chart
        .values
        .iter()
        .enumerate()
        .map(|(i, value)| {
            Bar::new(i as f64, *value)
                .name(&chart.categories[i])
                .fill(fill)
                .width(0.7)
        })
        .collect();
    let bars = BarChart::new("initiatives", bars).color(fill).horizontal();

    let labels = chart.categories.clone();
    Plot::new("initiatives_plot")
        .height(chart.height as f32)
        .x_axis_label(chart.x_label.clone())
        .y_axis_label(chart.y_label.clone())
        .y_axis_formatter(move |mark, range| category_label(&labels, mark, range))
        .allow_drag(false)
        .allow_scroll(false)
        .allow_zoom(false)
        .show(ui, |plot_ui| plot_ui.bar_chart(bars));
}

/// Axis text for bar positions: the category at whole-number marks, blank
/// everywhere else.
fn category_label(labels: &[String], mark: GridMark, _range: &RangeInclusive<f64>) -> String {
    let position = mark.value;
    if position < 0.0 || position.fract() != 0.0 {
        return String::new();
    }
    labels.get(position as usize).cloned().unwrap_or_default()
}

const FALLBACK_COLOUR: egui::Color32 = egui::Color32::from_rgb(0x00, 0x80, 0x80);

/// Resolves a configured bar colour. The window knows a handful of CSS names
/// and `#rrggbb` hex; anything else falls back to teal with a warning.
fn css_colour(name: &str) -> egui::Color32 {
    let colour = match name.trim().to_ascii_lowercase().as_str() {
        "teal" => Some(FALLBACK_COLOUR),
        "navy" => Some(egui::Color32::from_rgb(0x00, 0x00, 0x80)),
        "steelblue" => Some(egui::Color32::from_rgb(0x46, 0x82, 0xb4)),
        "orange" => Some(egui::Color32::from_rgb(0xff, 0xa5, 0x00)),
        "red" => Some(egui::Color32::RED),
        "green" => Some(egui::Color32::from_rgb(0x00, 0x80, 0x00)),
        "blue" => Some(egui::Color32::BLUE),
        hex if hex.starts_with('#') => egui::Color32::from_hex(hex).ok(),
        _ => None,
    };
    colour.unwrap_or_else(|| {
        warn!(colour = name, "Unsupported bar colour in the window, drawing teal");
        FALLBACK_COLOUR
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_css_colour_names_and_hex() {
        assert_eq!(css_colour("Teal"), egui::Color32::from_rgb(0, 128, 128));
        assert_eq!(css_colour("#ff0000"), egui::Color32::from_rgb(255, 0, 0));
        assert_eq!(css_colour("not-a-colour"), css_colour("teal"));
    }
}
