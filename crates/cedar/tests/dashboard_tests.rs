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

use cedar::{
    render_html, write_html, ChartStyle, Dashboard, DashboardConfig, IndexValue, TourismTable,
};
use std::io::Write;
use tempfile::NamedTempFile;

const HEADER: &str = "Town,Total number of hotels,Total number of restaurants,Total number of cafes,Tourism Index,Existence of initiatives and projects in the past five years to improve the tourism sector - exists";

fn dashboard(body: &str) -> Dashboard {
    let table = TourismTable::from_csv_bytes(format!("{HEADER}\n{body}")).unwrap();
    Dashboard::from_table(table, 20, ChartStyle::default()).unwrap()
}

#[test]
fn test_scenario_duplicate_town_with_missing_initiative() {
    let dashboard = dashboard("A,3,2,1,1,\nA,1,0,0,1,5\n");
    let top = dashboard.top_towns();
    assert_eq!(top.len(), 1);
    assert_eq!(
        (top[0].hotels, top[0].restaurants, top[0].cafes, top[0].total),
        (4.0, 2.0, 1.0, 7.0)
    );
    assert_eq!(dashboard.index_options(), &[IndexValue::Numeric(1.0)]);

    let selection = dashboard.selection();
    let chart = dashboard.initiatives_chart(&selection).unwrap().unwrap();
    assert_eq!(chart.values, vec![0.0, 5.0]);
    assert_eq!(chart.categories, vec!["A", "A"]);
    assert_eq!(chart.title, "Towns with Tourism Index = 1");
}

#[test]
fn test_scenario_header_only_input() {
    let dashboard = dashboard("");
    assert!(dashboard.top_towns().is_empty());
    assert!(dashboard.establishments_chart().is_empty());
    assert!(dashboard.index_options().is_empty());
    assert!(dashboard.initiatives_chart(&dashboard.selection()).unwrap().is_none());
    let html = render_html(&dashboard).unwrap();
    assert!(html.contains("<select id=\"tourism-index\"></select>"));
}

#[test]
fn test_selection_change_refilters() {
    let dashboard = dashboard("A,1,1,1,1,1\nB,1,1,1,2,0\nC,1,1,1,2,1\n");
    let mut selection = dashboard.selection();
    assert_eq!(
        dashboard.initiatives_chart(&selection).unwrap().unwrap().categories,
        vec!["A"]
    );
    assert!(selection.select(&IndexValue::Numeric(2.0)));
    let chart = dashboard.initiatives_chart(&selection).unwrap().unwrap();
    assert_eq!(chart.categories, vec!["B", "C"]);
    assert_eq!(chart.title, "Towns with Tourism Index = 2");
}

#[test]
fn test_load_from_config() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(file, "{HEADER}\nSidon,2,7,4,1,1\nTyre,3,1,0,2,").unwrap();
    file.flush().unwrap();
    let config = DashboardConfig {
        data_path: file.path().to_path_buf(),
        top_towns: 1,
        ..DashboardConfig::default()
    };
    let dashboard = Dashboard::load(&config).unwrap();
    assert_eq!(dashboard.top_towns().len(), 1);
    assert_eq!(dashboard.top_towns()[0].town, "Sidon");
    assert_eq!(
        dashboard.establishments_chart().title,
        "Top 1 Towns with the Most Hotels, Restaurants, and Cafes"
    );
    assert_eq!(dashboard.table().height(), 2);
}

#[test]
fn test_html_export_contains_every_option() {
    let dashboard = dashboard("Baalbek,4,3,2,1,1\nJounieh,8,9,7,2,0\n");
    let out = tempfile::tempdir().unwrap();
    let path = out.path().join("dashboard.html");
    write_html(&dashboard, &path).unwrap();
    let html = std::fs::read_to_string(&path).unwrap();
    assert!(html.contains("<title>Lebanon Tourism Dashboard</title>"));
    assert!(html.contains("Exploring Lebanon&#39;s Exquisite Cities"));
    assert!(html.contains("<option value=\"1\" selected>1</option>"));
    assert!(html.contains("<option value=\"2\">2</option>"));
    assert!(html.contains("Towns with Tourism Index = 2"));
    assert!(html.contains("\"barmode\":\"stack\""));
}

#[test]
fn test_html_export_carries_page_text() {
    let dashboard = dashboard("Baalbek,4,3,2,1,1\n");
    let html = render_html(&dashboard).unwrap();
    assert!(html.contains("Need guidance for your next trip to Lebanon?"));
    assert!(html.contains("Pick an index below to find out."));
    assert!(html.contains("<p>Thank you for looking through these visuals.</p>"));
    let footer = html.find("Thank you").unwrap();
    assert!(footer > html.find("id=\"initiatives\"").unwrap());
}
