//! FILENAME: app/src/lib.rs
// PURPOSE: Main library entry point for the table session controller.
// CONTEXT: Wires the engine, the export collaborator, logging and config
//          together behind one `Session` per view.

pub mod api_types;
pub mod config;
pub mod fixtures;
pub mod logging;
pub mod session;

pub use api_types::{
    AggregationData, BatchResult, CommandResult, DistinctValuesResult, ExportResult, RecordResult,
    RowData, SummaryData, ViewData,
};
pub use config::{AppConfig, ConfigError};
pub use logging::{format_line, get_log_path, init_log_file, install_logger, next_seq, write_log};
pub use session::Session;

/// Sets up logging from `config`: the unified log file (when configured) and
/// the `log` bridge for the core crates.
pub fn init_logging(config: &AppConfig) -> Result<(), String> {
    let level = config.level_filter().map_err(|e| e.to_string())?;
    if let Some(path) = &config.log_path {
        init_log_file(path)?;
    }
    install_logger(level)?;
    log_info!("INIT", "logging ready at level {}", level);
    Ok(())
}
