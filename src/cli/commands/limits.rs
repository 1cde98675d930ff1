use super::{engine_for, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, LimitsExport, OutputFormat};
use crate::models::dataset::Dataset;
use crate::models::rows::UserLimitsItem;
use crate::ui::messages::header;
use crate::utils::colors::color_for_rest;
use crate::utils::date;
use crate::utils::table::{Cell, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Limits {
        employee,
        year,
        output,
    } = cmd
    {
        let ds = Dataset::load(cfg.dataset_path())?;
        let emp = ds.employee(employee)?;
        let engine = engine_for(&ds, cfg);
        let year = year.unwrap_or_else(date::current_year);

        let logs = ds.logs_for(&emp.id);
        let items = engine.limits_summary(&logs, emp.employed_date, &emp.full_name, year);

        match output.format {
            OutputFormat::Table => {
                header(format!("{} ({})", emp.full_name, year));
                print!("{}", limits_table(&items, cfg).render());
            }
            fmt => {
                let rows: Vec<LimitsExport> = items.iter().map(LimitsExport::from).collect();
                ExportLogic::write(&rows, fmt, output.out.as_deref(), output.force)?;
            }
        }
    }
    Ok(())
}

/// Category / used / rest table, shared with `report-limits`.
pub(crate) fn limits_table(items: &[UserLimitsItem], cfg: &Config) -> Table {
    let mut table = Table::new(&["Category", "Used", "Rest"], separator(cfg));

    for it in items {
        table.add_row(vec![
            Cell::plain(&it.category_title),
            Cell::plain(it.used_in_current_year.to_string()),
            Cell::colored(it.rest.to_string(), color_for_rest(&it.rest)),
        ]);
    }
    table
}
