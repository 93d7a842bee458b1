//! Config - Application Configuration

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::constants::{DEFAULT_EXPORT_STEM, DEFAULT_PAGE_SIZE, DEFAULT_SOURCE_URL};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Remote member list
    pub source: SourceConfig,
    /// Table behaviour
    pub table: TableConfig,
    /// Spreadsheet export
    pub export: ExportConfig,
    /// Logging
    pub log: LogConfig,
}

/// Remote data source configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    /// Endpoint returning a JSON array of members
    pub url: String,
    /// Request timeout in seconds; no timeout when unset
    pub timeout_secs: Option<u64>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_SOURCE_URL.to_string(),
            timeout_secs: None,
        }
    }
}

/// Table configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TableConfig {
    /// Rows per page (at least 1)
    pub page_size: usize,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
        }
    }
}

impl TableConfig {
    /// Page size with the lower bound applied
    pub fn effective_page_size(&self) -> usize {
        self.page_size.max(1)
    }
}

/// Export configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ExportConfig {
    /// File name without extension
    pub file_stem: String,
    /// Target directory; the user's download directory when unset
    pub directory: Option<PathBuf>,
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            file_stem: DEFAULT_EXPORT_STEM.to_string(),
            directory: None,
        }
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Default filter directive when `RUST_LOG` is not set
    pub level: String,
    /// Also write a daily log file into the data directory
    pub file: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config: AppConfig = toml::from_str(
            r#"
            [table]
            page_size = 25

            [export]
            directory = "/tmp/exports"
            "#,
        )
        .expect("valid toml");

        assert_eq!(config.table.page_size, 25);
        assert_eq!(config.source.url, DEFAULT_SOURCE_URL);
        assert_eq!(config.source.timeout_secs, None);
        assert_eq!(config.export.file_stem, DEFAULT_EXPORT_STEM);
        assert_eq!(config.export.directory, Some(PathBuf::from("/tmp/exports")));
        assert!(config.log.file);
    }

    #[test]
    fn test_zero_page_size_is_bounded() {
        let table = TableConfig { page_size: 0 };
        assert_eq!(table.effective_page_size(), 1);
    }
}
