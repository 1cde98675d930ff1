pub mod calendar;
pub mod config;
pub mod init;
pub mod items;
pub mod limits;
pub mod overview;
pub mod report_limits;

use crate::config::Config;
use crate::core::LeaveEngine;
use crate::core::logic::EngineOptions;
use crate::models::dataset::Dataset;

/// Engine over a loaded dataset, configured from the config file.
pub(crate) fn engine_for<'a>(ds: &'a Dataset, cfg: &Config) -> LeaveEngine<'a> {
    LeaveEngine::new(
        &ds.categories,
        &ds.calendars,
        cfg.calendar_polarity,
        EngineOptions::from_config(cfg),
    )
}

pub(crate) fn separator(cfg: &Config) -> char {
    cfg.separator_char.chars().next().unwrap_or('-')
}
