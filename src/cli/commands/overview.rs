use super::{engine_for, separator};
use crate::cli::parser::Commands;
use crate::config::Config;
use crate::errors::AppResult;
use crate::export::model::flatten_overview;
use crate::export::{ExportLogic, OutputFormat};
use crate::models::dataset::Dataset;
use crate::models::rows::OverviewRow;
use crate::utils::colors::color_for_days;
use crate::utils::period::parse_period;
use crate::utils::table::{Cell, Table};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Overview { period, output } = cmd {
        let bounds = match period {
            Some(p) => parse_period(p)?,
            None => None,
        };

        let ds = Dataset::load(cfg.dataset_path())?;
        let engine = engine_for(&ds, cfg);
        let rows = engine.overview(&ds.named_logs(), bounds);

        match output.format {
            OutputFormat::Table => print_table(&rows, cfg),
            fmt => {
                let flat = flatten_overview(&rows);
                ExportLogic::write(&flat, fmt, output.out.as_deref(), output.force)?;
            }
        }
    }
    Ok(())
}

fn print_table(rows: &[OverviewRow], cfg: &Config) {
    if rows.is_empty() {
        println!("No event logs.");
        return;
    }

    // Every row carries the same categories in the same order.
    let mut headers = vec!["Employee".to_string()];
    headers.extend(rows[0].totals.iter().map(|t| t.category_title.clone()));

    let mut table = Table::new(headers.as_slice(), separator(cfg));
    for row in rows {
        let mut cells = vec![Cell::plain(&row.full_name)];
        cells.extend(
            row.totals
                .iter()
                .map(|t| Cell::colored(t.days.to_string(), color_for_days(t.days))),
        );
        table.add_row(cells);
    }

    print!("{}", table.render());
}
