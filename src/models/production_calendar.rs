//! Production (working-day) calendar as produced upstream, plus the importer
//! for the open-data CSV layout (`Год/Месяц`, `Январь`, ... `Декабрь`).

use crate::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// What the day numbers listed in a calendar month mean.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CalendarPolarity {
    /// Listed days are weekends and public holidays.
    #[default]
    DaysOff,
    /// Listed days are the working days.
    WorkingDays,
}

/// The upstream calendar producer lists days off for every month.
pub const UPSTREAM_POLARITY: CalendarPolarity = CalendarPolarity::DaysOff;

impl CalendarPolarity {
    pub fn as_str(&self) -> &'static str {
        match self {
            CalendarPolarity::DaysOff => "days_off",
            CalendarPolarity::WorkingDays => "working_days",
        }
    }

    /// Whether a day counts as a business day, given whether it is listed.
    pub fn counts(&self, listed: bool) -> bool {
        match self {
            CalendarPolarity::DaysOff => !listed,
            CalendarPolarity::WorkingDays => listed,
        }
    }
}

/// One calendar year: twelve lists of day-of-month numbers.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductionCalendar {
    pub year: i32,
    pub months: Vec<Vec<u32>>,
}

impl ProductionCalendar {
    pub fn validate(&self) -> AppResult<()> {
        if self.months.len() != 12 {
            return Err(AppError::InvalidCalendar(format!(
                "year {} has {} months, expected 12",
                self.year,
                self.months.len()
            )));
        }
        for (idx, days) in self.months.iter().enumerate() {
            if let Some(bad) = days.iter().find(|d| !(1..=31).contains(*d)) {
                return Err(AppError::InvalidCalendar(format!(
                    "year {} month {}: day {} out of range",
                    self.year,
                    idx + 1,
                    bad
                )));
            }
        }
        Ok(())
    }

    pub fn from_record(record: &CalendarRecord) -> AppResult<Self> {
        let year: i32 = record
            .year
            .trim()
            .parse()
            .map_err(|_| AppError::InvalidCalendar(format!("invalid year '{}'", record.year)))?;

        let months = record
            .months()
            .iter()
            .map(|m| parse_month(m))
            .collect::<AppResult<Vec<_>>>()?;

        let calendar = Self { year, months };
        calendar.validate()?;
        Ok(calendar)
    }
}

/// Row of the production-calendar CSV. Extra columns (totals, hours) are ignored.
#[derive(Debug, Clone, Deserialize)]
pub struct CalendarRecord {
    #[serde(rename = "Год/Месяц")]
    pub year: String,
    #[serde(rename = "Январь")]
    pub january: String,
    #[serde(rename = "Февраль")]
    pub february: String,
    #[serde(rename = "Март")]
    pub march: String,
    #[serde(rename = "Апрель")]
    pub april: String,
    #[serde(rename = "Май")]
    pub may: String,
    #[serde(rename = "Июнь")]
    pub june: String,
    #[serde(rename = "Июль")]
    pub july: String,
    #[serde(rename = "Август")]
    pub august: String,
    #[serde(rename = "Сентябрь")]
    pub september: String,
    #[serde(rename = "Октябрь")]
    pub october: String,
    #[serde(rename = "Ноябрь")]
    pub november: String,
    #[serde(rename = "Декабрь")]
    pub december: String,
}

impl CalendarRecord {
    fn months(&self) -> [&str; 12] {
        [
            self.january.as_str(),
            self.february.as_str(),
            self.march.as_str(),
            self.april.as_str(),
            self.may.as_str(),
            self.june.as_str(),
            self.july.as_str(),
            self.august.as_str(),
            self.september.as_str(),
            self.october.as_str(),
            self.november.as_str(),
            self.december.as_str(),
        ]
    }
}

/// Parse one month cell: "1,2,3,4,5,6,7,8,13,14,20,21,27*,28".
/// `*` marks a shortened working day and is not a day off, so it is dropped.
/// `+` marks a transferred holiday and is kept as a plain day off.
fn parse_month(cell: &str) -> AppResult<Vec<u32>> {
    cell.split(',')
        .map(str::trim)
        .filter(|d| !d.is_empty() && !d.contains('*'))
        .map(|d| {
            d.trim_end_matches('+')
                .parse::<u32>()
                .map_err(|_| AppError::InvalidCalendar(format!("invalid day '{}'", d)))
        })
        .collect()
}

/// Read every year from a production-calendar CSV file.
pub fn read_calendar_csv<P: AsRef<Path>>(path: P) -> AppResult<Vec<ProductionCalendar>> {
    let mut rdr = csv::Reader::from_path(path)?;
    let mut out = Vec::new();

    for record in rdr.deserialize::<CalendarRecord>() {
        out.push(ProductionCalendar::from_record(&record?)?);
    }

    out.sort_by_key(|c| c.year);
    Ok(out)
}
