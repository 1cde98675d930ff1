use crate::cli::parser::Commands;
use crate::errors::AppResult;
use crate::export::{ExportLogic, OutputFormat};
use crate::models::production_calendar::read_calendar_csv;
use crate::ui::messages::info;

/// Import a production-calendar CSV and emit `calendars` JSON.
pub fn handle(cmd: &Commands) -> AppResult<()> {
    if let Commands::Calendar { file, out, force } = cmd {
        let calendars = read_calendar_csv(file)?;

        if out.is_some() {
            let years: Vec<String> = calendars.iter().map(|c| c.year.to_string()).collect();
            info(format!("Imported years: {}", years.join(", ")));
        }

        ExportLogic::write(&calendars, OutputFormat::Json, out.as_deref(), *force)?;
    }
    Ok(())
}
