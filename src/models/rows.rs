//! Display-ready rows derived by the engine.

use crate::core::calculator::experience::Experience;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use std::fmt;

/// One event log, category-enriched and with its duration computed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserEventLogItem {
    pub key: String,
    pub employee_full_name: String,
    pub category_title: String,
    pub category_color: String,
    pub days_count: u32,
    pub start_date: NaiveDate,
    pub end_date: Option<NaiveDate>,
    pub status: String,
}

/// Days left under a category's annual limit.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(untagged)]
pub enum Rest {
    Days(u32),
    /// The category has no limit (`limit == 0`), so nothing is "left".
    NotApplicable,
}

impl Rest {
    pub fn days(&self) -> Option<u32> {
        match self {
            Rest::Days(d) => Some(*d),
            Rest::NotApplicable => None,
        }
    }
}

impl fmt::Display for Rest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Rest::Days(d) => write!(f, "{}", d),
            Rest::NotApplicable => write!(f, "n/a"),
        }
    }
}

/// Usage of one category by one employee in the current year.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct UserLimitsItem {
    pub key: String,
    pub full_name: String,
    pub category_title: String,
    pub used_in_current_year: u32,
    pub rest: Rest,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EmployeeLimitsRow {
    pub employee_id: String,
    pub full_name: String,
    pub employed_date: NaiveDate,
    pub experience: Experience,
    pub limits: Vec<UserLimitsItem>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CategoryTotal {
    pub category_title: String,
    pub days: u32,
}

/// Per-employee day totals by category over a period.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct OverviewRow {
    pub employee_id: String,
    pub full_name: String,
    pub totals: Vec<CategoryTotal>,
}
