//! CLI command implementations.

pub mod batch;
pub mod scan;

use std::path::Path;

use chrono::{Local, NaiveDate};

use bilscan_core::ScanConfig;

/// Load config from an optional path, falling back to defaults.
pub fn load_config(config_path: Option<&str>) -> anyhow::Result<ScanConfig> {
    match config_path {
        Some(path) => Ok(ScanConfig::from_file(Path::new(path))?),
        None => Ok(ScanConfig::default()),
    }
}

/// Reference date for due-date plausibility, overridable for reproducible
/// runs.
pub fn reference_date(today: Option<NaiveDate>) -> NaiveDate {
    today.unwrap_or_else(|| Local::now().date_naive())
}
