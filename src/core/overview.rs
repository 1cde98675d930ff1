use crate::core::calculator::business_days::CalendarSet;
use crate::core::logic::EngineOptions;
use crate::models::category::EventLogCategory;
use crate::models::event_log::EventLog;
use crate::models::rows::{CategoryTotal, OverviewRow};
use chrono::NaiveDate;

/// Day totals per employee and category. With a period, every log is clipped
/// to it and logs outside it count zero.
pub fn overview_report(
    logs: &[EventLog],
    categories: &[EventLogCategory],
    calendars: &CalendarSet,
    period: Option<(NaiveDate, NaiveDate)>,
    options: &EngineOptions,
) -> Vec<OverviewRow> {
    employees_of(logs)
        .into_iter()
        .map(|(employee_id, full_name)| {
            let totals = categories
                .iter()
                .map(|category| {
                    let days: u32 = logs
                        .iter()
                        .filter(|l| l.employee_id == employee_id && l.category_id == category.id)
                        .filter_map(|l| match period {
                            Some((from, to)) => l.clipped(from, to),
                            None => Some((l.start_date, l.last_day())),
                        })
                        .map(|(from, to)| options.days_for(category, from, to, calendars))
                        .sum();

                    CategoryTotal {
                        category_title: options.title_for(category),
                        days,
                    }
                })
                .collect();

            OverviewRow {
                employee_id,
                full_name,
                totals,
            }
        })
        .collect()
}

/// Unique (id, name) pairs from the logs, ordered by name then id.
fn employees_of(logs: &[EventLog]) -> Vec<(String, String)> {
    let mut out: Vec<(String, String)> = Vec::new();

    for log in logs {
        if out.iter().any(|(id, _)| *id == log.employee_id) {
            continue;
        }
        let name = log.employee_name.clone().unwrap_or_default();
        out.push((log.employee_id.clone(), name));
    }

    out.sort_by(|a, b| {
        a.1.to_lowercase()
            .cmp(&b.1.to_lowercase())
            .then_with(|| a.0.cmp(&b.0))
    });
    out
}
