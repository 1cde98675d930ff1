use crate::config::Config;
use crate::core::calculator::business_days::{
    CalendarSet, count_business_days_in, count_calendar_days,
};
use crate::core::{event_logs, limits, overview};
use crate::models::category::{EventLogCategory, UNCONFIRMED_TITLE};
use crate::models::employee::Employee;
use crate::models::event_log::EventLog;
use crate::models::production_calendar::{CalendarPolarity, ProductionCalendar, UPSTREAM_POLARITY};
use crate::models::rows::{EmployeeLimitsRow, OverviewRow, UserEventLogItem, UserLimitsItem};
use chrono::NaiveDate;

/// Knobs shared by every engine operation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EngineOptions {
    /// Title reported for event logs whose category can't be resolved.
    pub unconfirmed_title: String,
    /// Count plain calendar days (not business days) for `limit == 0` categories.
    pub unlimited_counts_calendar_days: bool,
}

impl Default for EngineOptions {
    fn default() -> Self {
        Self {
            unconfirmed_title: UNCONFIRMED_TITLE.to_string(),
            unlimited_counts_calendar_days: false,
        }
    }
}

impl EngineOptions {
    pub fn from_config(cfg: &Config) -> Self {
        Self {
            unconfirmed_title: cfg.unconfirmed_title.clone(),
            unlimited_counts_calendar_days: cfg.unlimited_counts_calendar_days,
        }
    }

    /// Title shown for `category`; untitled categories read as unconfirmed.
    pub fn title_for(&self, category: &EventLogCategory) -> String {
        if category.title.trim().is_empty() {
            self.unconfirmed_title.clone()
        } else {
            category.title.clone()
        }
    }

    /// Duration of `[start, end]` for an event log in `category`.
    pub fn days_for(
        &self,
        category: &EventLogCategory,
        start: NaiveDate,
        end: NaiveDate,
        calendars: &CalendarSet,
    ) -> u32 {
        if self.unlimited_counts_calendar_days && category.is_unlimited() {
            count_calendar_days(start, end)
        } else {
            count_business_days_in(start, end, calendars)
        }
    }
}

/// Inputs of one engine run bundled together: reference tables plus options.
pub struct LeaveEngine<'a> {
    categories: &'a [EventLogCategory],
    calendars: CalendarSet,
    options: EngineOptions,
}

impl<'a> LeaveEngine<'a> {
    pub fn new(
        categories: &'a [EventLogCategory],
        calendars: &[ProductionCalendar],
        polarity: CalendarPolarity,
        options: EngineOptions,
    ) -> Self {
        log::debug!(
            "engine: {} categories, {} calendar years, polarity {}",
            categories.len(),
            calendars.len(),
            polarity.as_str()
        );
        Self {
            categories,
            calendars: CalendarSet::new(calendars, polarity),
            options,
        }
    }

    /// Engine over calendars in the upstream producer's polarity, default options.
    pub fn upstream(categories: &'a [EventLogCategory], calendars: &[ProductionCalendar]) -> Self {
        Self::new(
            categories,
            calendars,
            UPSTREAM_POLARITY,
            EngineOptions::default(),
        )
    }

    pub fn event_log_items(
        &self,
        logs: &[EventLog],
        employee_full_name: Option<&str>,
    ) -> Vec<UserEventLogItem> {
        event_logs::compute_event_log_items(
            logs,
            self.categories,
            &self.calendars,
            employee_full_name,
            &self.options,
        )
    }

    pub fn limits_summary(
        &self,
        logs: &[EventLog],
        employed_date: NaiveDate,
        employee_full_name: &str,
        current_year: i32,
    ) -> Vec<UserLimitsItem> {
        limits::compute_limits_summary(
            logs,
            self.categories,
            employed_date,
            employee_full_name,
            &self.calendars,
            current_year,
            &self.options,
        )
    }

    pub fn users_limits_report(
        &self,
        employees: &[Employee],
        logs: &[EventLog],
        current_year: i32,
        today: NaiveDate,
    ) -> Vec<EmployeeLimitsRow> {
        limits::users_limits_report(
            employees,
            logs,
            self.categories,
            &self.calendars,
            current_year,
            today,
            &self.options,
        )
    }

    pub fn overview(
        &self,
        logs: &[EventLog],
        period: Option<(NaiveDate, NaiveDate)>,
    ) -> Vec<OverviewRow> {
        overview::overview_report(logs, self.categories, &self.calendars, period, &self.options)
    }
}
