//! ConfigStore - TOML configuration on disk

use std::fs;
use std::path::Path;

use tracing::warn;

use crate::domain::config::AppConfig;
use crate::error::Result;

/// Load the configuration, falling back to defaults
///
/// A missing or empty file yields the defaults silently; a malformed one is
/// logged and also yields the defaults.
pub fn load_app_config(path: &Path) -> AppConfig {
    match try_load_app_config(path) {
        Ok(config) => config,
        Err(e) => {
            warn!(path = ?path, error = %e, "Ignoring unreadable config");
            AppConfig::default()
        }
    }
}

/// Load the configuration, reporting read and parse errors
pub fn try_load_app_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }

    Ok(toml::from_str(&content)?)
}

/// Save the configuration, creating parent directories
pub fn save_app_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let config = load_app_config(&dir.path().join("absent.toml"));
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_malformed_file_gives_defaults() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("bad.toml");
        fs::write(&path, "[table\npage_size = ").expect("write");

        assert!(try_load_app_config(&path).is_err());
        assert_eq!(load_app_config(&path), AppConfig::default());
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("nested").join("admin-dashboard.toml");
        let mut config = AppConfig::default();
        config.table.page_size = 7;
        config.source.timeout_secs = Some(15);

        save_app_config(&path, &config).expect("save");
        assert_eq!(load_app_config(&path), config);
    }
}
