// src/export/model.rs

use crate::models::rows::{EmployeeLimitsRow, OverviewRow, UserLimitsItem};
use serde::Serialize;

/// Flat limits row; `rest` is empty for unlimited categories.
#[derive(Serialize, Clone, Debug)]
pub struct LimitsExport {
    pub key: String,
    pub full_name: String,
    pub category_title: String,
    pub used_in_current_year: u32,
    pub rest: Option<u32>,
}

impl From<&UserLimitsItem> for LimitsExport {
    fn from(item: &UserLimitsItem) -> Self {
        Self {
            key: item.key.clone(),
            full_name: item.full_name.clone(),
            category_title: item.category_title.clone(),
            used_in_current_year: item.used_in_current_year,
            rest: item.rest.days(),
        }
    }
}

/// One line per (employee, category) of the users-limits report.
#[derive(Serialize, Clone, Debug)]
pub struct EmployeeLimitsExport {
    pub employee_id: String,
    pub full_name: String,
    pub employed_date: String,
    pub experience: String,
    pub category_title: String,
    pub used_in_current_year: u32,
    pub rest: Option<u32>,
}

pub fn flatten_employee_limits(rows: &[EmployeeLimitsRow]) -> Vec<EmployeeLimitsExport> {
    rows.iter()
        .flat_map(|row| {
            row.limits.iter().map(move |l| EmployeeLimitsExport {
                employee_id: row.employee_id.clone(),
                full_name: row.full_name.clone(),
                employed_date: row.employed_date.format("%Y-%m-%d").to_string(),
                experience: row.experience.label(),
                category_title: l.category_title.clone(),
                used_in_current_year: l.used_in_current_year,
                rest: l.rest.days(),
            })
        })
        .collect()
}

/// One line per (employee, category) of the overview.
#[derive(Serialize, Clone, Debug)]
pub struct OverviewExport {
    pub employee_id: String,
    pub full_name: String,
    pub category_title: String,
    pub days: u32,
}

pub fn flatten_overview(rows: &[OverviewRow]) -> Vec<OverviewExport> {
    rows.iter()
        .flat_map(|row| {
            row.totals.iter().map(move |t| OverviewExport {
                employee_id: row.employee_id.clone(),
                full_name: row.full_name.clone(),
                category_title: t.category_title.clone(),
                days: t.days,
            })
        })
        .collect()
}
