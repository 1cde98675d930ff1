use crate::core::calculator::business_days::CalendarSet;
use crate::core::logic::EngineOptions;
use crate::models::category::{CategoryIndex, EventLogCategory};
use crate::models::event_log::EventLog;
use crate::models::rows::UserEventLogItem;

/// One display row per event log, in input order.
///
/// Unknown categories resolve to the unconfirmed sentinel and a range ending
/// before it starts yields zero days; no input is ever dropped.
pub fn compute_event_log_items(
    logs: &[EventLog],
    categories: &[EventLogCategory],
    calendars: &CalendarSet,
    employee_full_name: Option<&str>,
    options: &EngineOptions,
) -> Vec<UserEventLogItem> {
    let index = CategoryIndex::new(categories, &options.unconfirmed_title);

    logs.iter()
        .map(|log| {
            let category = index.resolve(&log.category_id);
            let days_count = options.days_for(category, log.start_date, log.last_day(), calendars);

            let employee_full_name = employee_full_name
                .map(str::to_string)
                .or_else(|| log.employee_name.clone())
                .unwrap_or_default();

            UserEventLogItem {
                key: log.id.clone(),
                employee_full_name,
                category_title: category.title.clone(),
                category_color: category.color.clone(),
                days_count,
                start_date: log.start_date,
                end_date: log.end_date,
                status: log.status.clone(),
            }
        })
        .collect()
}
