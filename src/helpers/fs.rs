//! File System Utilities
//!
//! Where configuration, logs and exports live on disk.

use std::fs;
use std::path::PathBuf;

use directories::{ProjectDirs, UserDirs};

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::domain::config::ExportConfig;
use crate::error::{Error, Result};

fn project_dirs() -> Result<ProjectDirs> {
    ProjectDirs::from("com", APP_NAME, APP_NAME).ok_or_else(|| Error::Invalid {
        message: "Could not determine project directories".to_string(),
    })
}

/// Get or create the application's configuration directory
///
/// - **Linux**: `~/.config/admin-dashboard/`
/// - **macOS**: `~/Library/Application Support/com.admin-dashboard.admin-dashboard/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\admin-dashboard\admin-dashboard\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let config_dir = project_dirs.config_dir();

    if !config_dir.exists() {
        fs::create_dir_all(config_dir)?;
    }

    Ok(config_dir.to_path_buf())
}

/// Path of the TOML configuration file
pub fn config_file_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Get or create the data directory (log files)
pub fn get_or_create_data_dir() -> Result<PathBuf> {
    let project_dirs = project_dirs()?;
    let data_dir = project_dirs.data_dir();

    if !data_dir.exists() {
        fs::create_dir_all(data_dir)?;
    }

    Ok(data_dir.to_path_buf())
}

/// Directory exports are written to
///
/// The configured directory wins, then the user's download folder, then the
/// data directory.
pub fn export_dir(config: &ExportConfig) -> Result<PathBuf> {
    if let Some(dir) = &config.directory {
        return Ok(dir.clone());
    }
    if let Some(downloads) = UserDirs::new().and_then(|u| u.download_dir().map(PathBuf::from)) {
        return Ok(downloads);
    }
    get_or_create_data_dir()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_configured_export_dir_wins() {
        let config = ExportConfig {
            directory: Some(PathBuf::from("/tmp/exports")),
            ..ExportConfig::default()
        };
        assert_eq!(export_dir(&config).expect("dir"), PathBuf::from("/tmp/exports"));
    }
}
