//! Admin Dashboard - Main Entry Point

use admin_dashboard::app::application::run_app;
use admin_dashboard::helpers::{config_file_path, init_logging};
use admin_dashboard::utils::load_app_config;

fn main() {
    let config = match config_file_path() {
        Ok(path) => load_app_config(&path),
        Err(e) => {
            eprintln!("Using default configuration: {e}");
            Default::default()
        }
    };

    let _log_guard = match init_logging(&config.log) {
        Ok(guard) => guard,
        Err(e) => {
            eprintln!("Failed to initialize logging: {e}");
            None
        }
    };

    tracing::info!(url = %config.source.url, "Starting Admin Dashboard...");

    run_app(config);
}
