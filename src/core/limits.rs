//! Annual limit usage per category.

use crate::core::calculator::business_days::CalendarSet;
use crate::core::calculator::experience::work_experience;
use crate::core::logic::EngineOptions;
use crate::models::category::EventLogCategory;
use crate::models::employee::Employee;
use crate::models::event_log::EventLog;
use crate::models::rows::{EmployeeLimitsRow, Rest, UserLimitsItem};
use chrono::NaiveDate;

/// One row per category, in category order.
///
/// Logs starting before `employed_date` are left out entirely. The remaining
/// logs are clipped to the calendar year `current_year` before counting.
pub fn compute_limits_summary(
    logs: &[EventLog],
    categories: &[EventLogCategory],
    employed_date: NaiveDate,
    employee_full_name: &str,
    calendars: &CalendarSet,
    current_year: i32,
    options: &EngineOptions,
) -> Vec<UserLimitsItem> {
    let year_bounds = NaiveDate::from_ymd_opt(current_year, 1, 1)
        .zip(NaiveDate::from_ymd_opt(current_year, 12, 31));

    categories
        .iter()
        .map(|category| {
            let used_in_current_year: u32 = match year_bounds {
                Some((first, last)) => logs
                    .iter()
                    .filter(|l| l.category_id == category.id)
                    .filter(|l| l.start_date >= employed_date)
                    .filter_map(|l| l.clipped(first, last))
                    .map(|(from, to)| options.days_for(category, from, to, calendars))
                    .sum(),
                None => 0,
            };

            UserLimitsItem {
                key: format!("{}_{}", category.id, employee_full_name),
                full_name: employee_full_name.to_string(),
                category_title: options.title_for(category),
                used_in_current_year,
                rest: rest_for(category, used_in_current_year),
            }
        })
        .collect()
}

fn rest_for(category: &EventLogCategory, used: u32) -> Rest {
    if category.is_unlimited() {
        Rest::NotApplicable
    } else {
        Rest::Days(category.limit.saturating_sub(used))
    }
}

/// Limits summary for every employee, sorted by name.
pub fn users_limits_report(
    employees: &[Employee],
    logs: &[EventLog],
    categories: &[EventLogCategory],
    calendars: &CalendarSet,
    current_year: i32,
    today: NaiveDate,
    options: &EngineOptions,
) -> Vec<EmployeeLimitsRow> {
    let mut sorted: Vec<&Employee> = employees.iter().collect();
    sorted.sort_by(|a, b| {
        a.full_name
            .to_lowercase()
            .cmp(&b.full_name.to_lowercase())
            .then_with(|| a.id.cmp(&b.id))
    });

    sorted
        .into_iter()
        .map(|emp| {
            let own: Vec<EventLog> = logs
                .iter()
                .filter(|l| l.employee_id == emp.id)
                .cloned()
                .collect();

            EmployeeLimitsRow {
                employee_id: emp.id.clone(),
                full_name: emp.full_name.clone(),
                employed_date: emp.employed_date,
                experience: work_experience(emp.employed_date, today),
                limits: compute_limits_summary(
                    &own,
                    categories,
                    emp.employed_date,
                    &emp.full_name,
                    calendars,
                    current_year,
                    options,
                ),
            }
        })
        .collect()
}
