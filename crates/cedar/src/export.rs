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

//! Static HTML rendering of the dashboard.
//!
//! Every index option gets its filtered figure computed up front, and the
//! page's `<select>` only swaps which one Plotly draws.

use crate::dashboard::{
    Dashboard, ESTABLISHMENTS_HEADING, ESTABLISHMENTS_NOTE, FOOTER, HEADLINE, INITIATIVES_HEADING,
    INITIATIVES_NOTE, INTRO, PAGE_TITLE, SELECT_LABEL,
};
use crate::error::Result;
use serde_json::{Map, Value};
use std::path::Path;
use tracing::info;

const PLOTLY_CDN: &str = "https://cdn.plot.ly/plotly-2.35.2.min.js";

pub fn render_html(dashboard: &Dashboard) -> Result<String> {
    let establishments = script_json(&dashboard.establishments_chart().to_plotly())?;

    let mut figures = Map::new();
    let mut options = String::new();
    for (i, value) in dashboard.index_options().iter().enumerate() {
        let label = value.to_string();
        let chart = dashboard.initiatives_chart_for(value)?;
        options.push_str(&format!(
            "<option value=\"{label}\"{selected}>{label}</option>",
            label = html_escape(&label),
            selected = if i == 0 { " selected" } else { "" },
        ));
        figures.insert(label, chart.to_plotly());
    }
    let figures = script_json(&Value::Object(figures))?;

    Ok(format!(
        r#"<!DOCTYPE html>
<html lang="en">
<head>
    <meta charset="UTF-8">
    <meta name="viewport" content="width=device-width, initial-scale=1.0">
    <title>{title}</title>
    <script src="{cdn}"></script>
</head>
<body>
    <h1>{headline}</h1>
    <p>{intro}</p>
    <hr>
    <h2>{establishments_heading}</h2>
    <p>{establishments_note}</p>
    <div id="establishments"></div>
    <h2>{initiatives_heading}</h2>
    <p>{initiatives_note}</p>
    <label for="tourism-index">{select_label}</label>
    <select id="tourism-index">{options}</select>
    <div id="initiatives"></div>
    <hr>
    <p>{footer}</p>
    <script>
        const establishments = {establishments};
        const initiatives = {figures};
        Plotly.newPlot("establishments", establishments.data, establishments.layout);
        const select = document.getElementById("tourism-index");
        function drawInitiatives() {{
            const figure = initiatives[select.value];
            if (figure) {{
                Plotly.react("initiatives", figure.data, figure.layout);
            }} else {{
                Plotly.purge("initiatives");
            }}
        }}
        select.addEventListener("change", drawInitiatives);
        drawInitiatives();
    </script>
</body>
</html>
"#,
        title = html_escape(PAGE_TITLE),
        cdn = PLOTLY_CDN,
        headline = html_escape(HEADLINE),
        intro = html_escape(INTRO),
        establishments_note = html_escape(ESTABLISHMENTS_NOTE),
        initiatives_note = html_escape(INITIATIVES_NOTE),
        footer = html_escape(FOOTER),
        establishments_heading = html_escape(ESTABLISHMENTS_HEADING),
        initiatives_heading = html_escape(INITIATIVES_HEADING),
        select_label = html_escape(SELECT_LABEL),
    ))
}

pub fn write_html<P: AsRef<Path>>(dashboard: &Dashboard, path: P) -> Result<()> {
    let path = path.as_ref();
    std::fs::write(path, render_html(dashboard)?)?;
    info!(path = %path.display(), "Wrote dashboard HTML");
    Ok(())
}

/// JSON that is safe to inline inside a `<script>` element.
fn script_json(value: &Value) -> Result<String> {
    Ok(serde_json::to_string(value)?.replace("</", "<\\/"))
}

fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#39;")
}
