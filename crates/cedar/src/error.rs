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

use thiserror::Error;
#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Failed to read data file '{path}': {source}")]
    DataFile {
        path: String,
        #[source]
        source: polars::error::PolarsError,
    },
    #[error("Column '{column}' not found in dataset")]
    MissingColumn { column: String },
    #[error("Column '{column}' must be numeric: {source}")]
    ColumnType {
        column: String,
        #[source]
        source: polars::error::PolarsError,
    },
    #[error("Data processing error: {0}")]
    Polars(#[from] polars::error::PolarsError),
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("Serialisation error: {0}")]
    Serialisation(#[from] serde_json::Error),
}
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read configuration file '{path}': {source}")]
    ConfigFileError {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Failed to parse TOML configuration: {source}")]
    TomlParseError {
        #[from]
        source: toml::de::Error,
    },
    #[error("Invalid configuration: {field} = {value}")]
    InvalidValue { field: String, value: String },
}
pub type Result<T> = std::result::Result<T, DashboardError>;
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;
impl DashboardError {
    pub fn missing_column(column: &str) -> Self {
        DashboardError::MissingColumn {
            column: column.to_string(),
        }
    }
    /// Nothing in the load/aggregate pipeline retries; every failure halts rendering.
    pub fn is_recoverable(&self) -> bool {
        false
    }
    pub fn category(&self) -> &'static str {
        match self {
            DashboardError::Io(_) | DashboardError::DataFile { .. } => "I/O",
            DashboardError::MissingColumn { .. } => "Schema",
            DashboardError::ColumnType { .. } | DashboardError::Polars(_) => "Data",
            DashboardError::Config(_) => "Configuration",
            DashboardError::Serialisation(_) => "Serialisation",
        }
    }
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            DashboardError::Io(_) | DashboardError::DataFile { .. } => vec![
                "Check that the dataset path exists and is readable".to_string(),
                "Pass the file explicitly with --data or CEDAR_DATA".to_string(),
            ],
            DashboardError::MissingColumn { column } => vec![
                format!("Add a '{column}' column to the header row"),
                "Column names are matched after trimming surrounding whitespace".to_string(),
            ],
            DashboardError::ColumnType { column, .. } => vec![
                format!("Remove non-numeric values from '{column}'"),
            ],
            DashboardError::Config(_) => vec![
                "Compare the configuration file against cedar.toml.example".to_string(),
            ],
            _ => vec!["Check the error message for specific guidance".to_string()],
        }
    }
}
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Error,
    Critical,
}
impl ErrorSeverity {
    pub fn of(error: &DashboardError) -> Self {
        match error {
            DashboardError::Config(_) | DashboardError::Serialisation(_) => ErrorSeverity::Error,
            _ => ErrorSeverity::Critical,
        }
    }
    pub fn as_str(&self) -> &'static str {
        match self {
            ErrorSeverity::Error => "ERROR",
            ErrorSeverity::Critical => "CRITICAL",
        }
    }
    pub fn color_code(&self) -> &'static str {
        match self {
            ErrorSeverity::Error => "\x1b[31m",
            ErrorSeverity::Critical => "\x1b[35m",
        }
    }
}
pub struct ErrorReporter {
    pub show_suggestions: bool,
    pub colored_output: bool,
}
impl ErrorReporter {
    pub fn new() -> Self {
        Self {
            show_suggestions: true,
            colored_output: true,
        }
    }
    pub fn plain() -> Self {
        Self {
            show_suggestions: true,
            colored_output: false,
        }
    }
    pub fn report(&self, error: &DashboardError) -> String {
        let severity = ErrorSeverity::of(error);
        let mut output = String::new();
        if self.colored_output {
            output.push_str(severity.color_code());
        }
        output.push_str(&format!(
            "[{}] {} error: {}\n",
            severity.as_str(),
            error.category(),
            error
        ));
        if self.colored_output {
            output.push_str("\x1b[0m");
        }
        if self.show_suggestions {
            let suggestions = error.suggestions();
            if !suggestions.is_empty() {
                output.push_str("\nSuggestions:\n");
                for suggestion in suggestions {
                    output.push_str(&format!("  • {suggestion}\n"));
                }
            }
        }
        output
    }
}
impl Default for ErrorReporter {
    fn default() -> Self {
        Self::new()
    }
}
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_report_names_category_and_column() {
        let error = DashboardError::missing_column("Town");
        let report = ErrorReporter::plain().report(&error);
        assert!(report.starts_with("[CRITICAL] Schema error"));
        assert!(report.contains("'Town'"));
        assert!(!report.contains("\x1b["));
    }

    #[test]
    fn test_no_error_is_recoverable() {
        let io = DashboardError::from(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "missing",
        ));
        assert!(!io.is_recoverable());
        assert_eq!(io.category(), "I/O");
    }
}
