use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One leave/absence record as delivered by the data-access layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct EventLog {
    pub id: String,
    pub employee_id: String,
    #[serde(default)]
    pub employee_name: Option<String>,
    pub category_id: String,
    pub start_date: NaiveDate,
    #[serde(default)]
    pub end_date: Option<NaiveDate>,
    #[serde(default)]
    pub status: String,
}

impl EventLog {
    /// Last day of the record. Open records cover their start day only.
    pub fn last_day(&self) -> NaiveDate {
        self.end_date.unwrap_or(self.start_date)
    }

    /// True when the record shares at least one day with `[from, to]`.
    pub fn overlaps(&self, from: NaiveDate, to: NaiveDate) -> bool {
        self.start_date <= to && self.last_day() >= from
    }

    /// Range of the record clipped to `[from, to]`, or `None` when they don't meet.
    pub fn clipped(&self, from: NaiveDate, to: NaiveDate) -> Option<(NaiveDate, NaiveDate)> {
        if !self.overlaps(from, to) {
            return None;
        }
        Some((self.start_date.max(from), self.last_day().min(to)))
    }
}
