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

mod app;
mod args;

use anyhow::Context;
use cedar::dashboard::PAGE_TITLE;
use cedar::{write_html, Dashboard, ErrorReporter};
use clap::Parser;
use eframe::egui;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let args = args::Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(args.log_level.as_str()));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let config = args.resolve_config().context("invalid configuration")?;
    info!(data = %config.data_path.display(), top = config.top_towns, "Starting cedar dashboard");

    let dashboard = Dashboard::load(&config).map_err(|e| {
        eprintln!("{}", ErrorReporter::new().report(&e));
        anyhow::Error::new(e).context(format!(
            "failed to build dashboard from '{}'",
            config.data_path.display()
        ))
    })?;

    if let Some(ref path) = args.export {
        write_html(&dashboard, path)
            .with_context(|| format!("failed to write '{}'", path.display()))?;
        info!(path = %path.display(), "Export complete");
        return Ok(());
    }

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([config.window_width, config.window_height])
            .with_title(PAGE_TITLE),
        ..Default::default()
    };
    eframe::run_native(
        PAGE_TITLE,
        options,
        Box::new(move |_cc| Ok(Box::new(app::DashboardApp::new(dashboard)))),
    )
    .map_err(|e| anyhow::anyhow!("dashboard window failed: {e}"))
}
