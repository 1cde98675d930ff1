use super::{engine_for, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::{ExportLogic, OutputFormat};
use crate::models::dataset::Dataset;
use crate::models::rows::UserEventLogItem;
use crate::utils::colors::{color_for_days, fg_from_hex};
use crate::utils::date::{format_date, format_opt_date};
use crate::utils::table::{Cell, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Items {
        employee,
        name,
        output,
    } = cmd
    {
        let ds = Dataset::load(cfg.dataset_path())?;
        let engine = engine_for(&ds, cfg);

        let logs = match employee {
            Some(id) => ds.logs_for(id),
            None => ds.named_logs(),
        };

        let items = engine.event_log_items(&logs, name.as_deref());

        match output.format {
            OutputFormat::Table => print_table(&items, cfg),
            fmt => ExportLogic::write(&items, fmt, output.out.as_deref(), output.force)?,
        }
    }
    Ok(())
}

fn print_table(items: &[UserEventLogItem], cfg: &Config) {
    if items.is_empty() {
        println!("No event logs.");
        return;
    }

    let mut table = Table::new(
        &["Employee", "Category", "Days", "From", "To", "Status"],
        separator(cfg),
    );

    for it in items {
        let category = match fg_from_hex(&it.category_color) {
            Some(color) => Cell::colored(&it.category_title, &color),
            None => Cell::plain(&it.category_title),
        };
        table.add_row(vec![
            Cell::plain(&it.employee_full_name),
            category,
            Cell::colored(it.days_count.to_string(), color_for_days(it.days_count)),
            Cell::plain(format_date(it.start_date, &cfg.date_format)),
            Cell::plain(format_opt_date(it.end_date, &cfg.date_format)),
            Cell::plain(&it.status),
        ]);
    }

    print!("{}", table.render());
}
