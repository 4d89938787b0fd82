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

use cedar::{filter_by_index, index_options, IndexSelection, IndexValue, TourismTable};

const HEADER: &str = "Town,Total number of hotels,Total number of restaurants,Total number of cafes,Tourism Index,Existence of initiatives and projects in the past five years to improve the tourism sector - exists";

fn table(body: &str) -> TourismTable {
    TourismTable::from_csv_bytes(format!("{HEADER}\n{body}")).unwrap()
}

#[test]
fn test_options_are_distinct_sorted_and_skip_missing() {
    let table = table("A,1,1,1,3,0\nB,1,1,1,1,0\nC,1,1,1,,0\nD,1,1,1,3,1\nE,1,1,1,2,0\n");
    let options = index_options(&table).unwrap();
    assert_eq!(
        options,
        vec![
            IndexValue::Numeric(1.0),
            IndexValue::Numeric(2.0),
            IndexValue::Numeric(3.0)
        ]
    );
    // rows with a missing index stay in the table
    assert_eq!(table.height(), 5);
}

#[test]
fn test_text_index_sorts_lexicographically() {
    let table = table("A,1,1,1,medium,0\nB,1,1,1,high,0\nC,1,1,1,low,0\nD,1,1,1,high,1\n");
    let labels: Vec<String> = index_options(&table)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["high", "low", "medium"]);
}

#[test]
fn test_filter_keeps_each_matching_row() {
    let table = table("A,3,2,1,1,\nA,1,0,0,1,5\nB,0,0,0,2,1\n");
    let bars = filter_by_index(&table, &IndexValue::Numeric(1.0)).unwrap();
    assert_eq!(bars.len(), 2);
    assert!(bars.iter().all(|bar| bar.town == "A"));
    let values: Vec<f64> = bars.iter().map(|bar| bar.initiatives).collect();
    assert_eq!(values, vec![0.0, 5.0]);
}

#[test]
fn test_filter_count_matches_rows_with_value() {
    let table = table("A,1,1,1,2,1\nB,1,1,1,1,0\nC,1,1,1,2,0\nD,1,1,1,,1\nE,1,1,1,2,1\n");
    for option in index_options(&table).unwrap() {
        let bars = filter_by_index(&table, &option).unwrap();
        let expected = table
            .text_column("Tourism Index")
            .unwrap()
            .into_iter()
            .filter(|v| v.as_deref() == Some(option.to_string().as_str()))
            .count();
        assert_eq!(bars.len(), expected);
    }
}

#[test]
fn test_filter_by_label() {
    let table = table("Batroun,1,1,1,high,1\nJezzine,1,1,1,low,0\n");
    let bars = filter_by_index(&table, &IndexValue::from("high")).unwrap();
    assert_eq!(bars.len(), 1);
    assert_eq!(bars[0].town, "Batroun");
}

#[test]
fn test_filter_without_matches_is_empty() {
    let table = table("A,1,1,1,1,1\n");
    assert!(filter_by_index(&table, &IndexValue::Numeric(9.0))
        .unwrap()
        .is_empty());
}

#[test]
fn test_header_only_table_has_no_options() {
    let table = table("");
    let options = index_options(&table).unwrap();
    assert!(options.is_empty());
    let selection = IndexSelection::new(options);
    assert!(selection.selected().is_none());
    assert!(filter_by_index(&table, &IndexValue::from("1"))
        .unwrap()
        .is_empty());
}

#[test]
fn test_missing_value_tokens_are_not_options() {
    for token in ["NA", "N/A", "null", "nan", "NaN", "None"] {
        let table = table(&format!(
            "A,1,1,1,10,0\nB,1,1,1,{token},0\nC,1,1,1,2,1\n"
        ));
        assert_eq!(
            index_options(&table).unwrap(),
            vec![IndexValue::Numeric(2.0), IndexValue::Numeric(10.0)],
            "token {token}"
        );
    }
}

#[test]
fn test_blank_label_is_not_an_option() {
    let table = table("A,1,1,1,low,0\nB,1,1,1,\"\",0\nC,1,1,1,high,1\n");
    let labels: Vec<String> = index_options(&table)
        .unwrap()
        .iter()
        .map(ToString::to_string)
        .collect();
    assert_eq!(labels, vec!["high", "low"]);
}
