use super::engine_for;
use super::limits::limits_table;
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::model::flatten_employee_limits;
use crate::export::{ExportLogic, OutputFormat};
use crate::models::dataset::Dataset;
use crate::ui::messages::header;
use crate::utils::date;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::ReportLimits { year, output } = cmd {
        let ds = Dataset::load(cfg.dataset_path())?;
        let engine = engine_for(&ds, cfg);
        let year = year.unwrap_or_else(date::current_year);

        let rows = engine.users_limits_report(&ds.employees, &ds.event_logs, year, date::today());

        match output.format {
            OutputFormat::Table => {
                if rows.is_empty() {
                    println!("No employees.");
                }
                for row in &rows {
                    header(format!(
                        "{} | since {} | {}",
                        row.full_name,
                        date::format_date(row.employed_date, &cfg.date_format),
                        row.experience.label()
                    ));
                    print!("{}", limits_table(&row.limits, cfg).render());
                    println!();
                }
            }
            fmt => {
                let flat = flatten_employee_limits(&rows);
                ExportLogic::write(&flat, fmt, output.out.as_deref(), output.force)?;
            }
        }
    }
    Ok(())
}
