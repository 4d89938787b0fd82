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

use cedar::DashboardConfig;
use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(
    name = "cedar-dashboard",
    version,
    about = "Lebanon tourism dashboard: top towns by establishments and initiatives by tourism index"
)]
pub struct Args {
    #[arg(
        long = "data",
        env = "CEDAR_DATA",
        help = "Path to the tourism CSV (overrides the configuration file)"
    )]
    pub data: Option<PathBuf>,
    #[arg(
        long = "config",
        help = "TOML configuration file; cedar.toml is used when present"
    )]
    pub config: Option<PathBuf>,
    #[arg(long = "top", help = "Number of towns in the establishments chart")]
    pub top: Option<usize>,
    #[arg(
        long = "export",
        help = "Write a static HTML dashboard to this path instead of opening a window"
    )]
    pub export: Option<PathBuf>,
    #[arg(
        long = "log-level",
        default_value = "info",
        help = "Log filter used when RUST_LOG is not set"
    )]
    pub log_level: String,
}

impl Args {
    /// Defaults, then the configuration file, then flags and environment.
    pub fn resolve_config(&self) -> anyhow::Result<DashboardConfig> {
        let mut config = DashboardConfig::load_or_default(self.config.as_deref())?;
        if let Some(ref data) = self.data {
            config.data_path = data.clone();
        }
        if let Some(top) = self.top {
            config.top_towns = top;
        }
        config.validate()?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_flags_override_config_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "data_path = \"from-file.csv\"\ntop_towns = 7").unwrap();
        let config_path = file.path().to_str().unwrap().to_string();
        let args = Args::try_parse_from([
            "cedar-dashboard",
            "--config",
            config_path.as_str(),
            "--data",
            "cli.csv",
        ])
        .unwrap();
        let config = args.resolve_config().unwrap();
        assert_eq!(config.data_path, PathBuf::from("cli.csv"));
        assert_eq!(config.top_towns, 7);
    }

    #[test]
    fn test_zero_top_is_rejected() {
        let args = Args::try_parse_from(["cedar-dashboard", "--top", "0", "--data", "x.csv"]).unwrap();
        assert!(args.resolve_config().is_err());
    }
}
