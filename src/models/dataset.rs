use super::{
    category::EventLogCategory, employee::Employee, event_log::EventLog,
    production_calendar::ProductionCalendar,
};
use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Already-fetched records, as dumped by the data-access layer.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(default)]
    pub employees: Vec<Employee>,
    #[serde(default)]
    pub event_logs: Vec<EventLog>,
    #[serde(default)]
    pub categories: Vec<EventLogCategory>,
    #[serde(default)]
    pub calendars: Vec<ProductionCalendar>,
}

impl Dataset {
    pub fn load<P: AsRef<Path>>(path: P) -> AppResult<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let ds: Dataset = serde_json::from_str(&content)?;
        for cal in &ds.calendars {
            cal.validate()?;
        }
        log::debug!(
            "dataset {}: {} employees, {} event logs, {} categories, {} calendars",
            path.as_ref().display(),
            ds.employees.len(),
            ds.event_logs.len(),
            ds.categories.len(),
            ds.calendars.len()
        );
        Ok(ds)
    }

    pub fn employee(&self, id: &str) -> AppResult<&Employee> {
        self.employees
            .iter()
            .find(|e| e.id == id)
            .ok_or_else(|| AppError::UnknownEmployee(id.to_string()))
    }

    /// Event logs belonging to one employee, in input order.
    pub fn logs_for(&self, employee_id: &str) -> Vec<EventLog> {
        self.event_logs
            .iter()
            .filter(|l| l.employee_id == employee_id)
            .cloned()
            .map(|l| self.with_name(l))
            .collect()
    }

    /// All event logs, in input order, with missing employee names taken from
    /// the employee records.
    pub fn named_logs(&self) -> Vec<EventLog> {
        self.event_logs
            .iter()
            .cloned()
            .map(|l| self.with_name(l))
            .collect()
    }

    fn with_name(&self, mut log: EventLog) -> EventLog {
        let missing = log
            .employee_name
            .as_deref()
            .is_none_or(|n| n.trim().is_empty());
        if missing && let Ok(emp) = self.employee(&log.employee_id) {
            log.employee_name = Some(emp.full_name.clone());
        }
        log
    }
}
