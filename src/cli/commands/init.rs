use crate::cli::parser::Cli;
use crate::config::Config;
use crate::errors::AppResult;
use crate::ui::messages::{info, success};
use std::path::PathBuf;

/// Handle the `init` command: write the default configuration file.
/// With `--test` nothing is written.
pub fn handle(cli: &Cli, cfg: &Config) -> AppResult<()> {
    let path = cli
        .config
        .as_ref()
        .map(PathBuf::from)
        .unwrap_or_else(Config::config_file);

    info(format!("Config file : {}", path.display()));
    info(format!("Dataset     : {}", cfg.dataset_path().display()));
    info(format!("Polarity    : {}", cfg.calendar_polarity.as_str()));

    if cli.test {
        info("Test mode: configuration not written.");
        return Ok(());
    }

    cfg.save_to(&path)?;
    success("rLeaveCalc initialization completed!");
    Ok(())
}
