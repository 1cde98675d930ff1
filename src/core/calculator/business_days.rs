//! Business-day arithmetic over a production calendar.
//!
//! Every calendar year is reduced to twelve `u32` bitmasks (bit `d` set when
//! day `d` is listed for that month), so a single day lookup is O(1) and a
//! range count is linear in its length. Iteration always derives a fresh
//! `NaiveDate` per step; nothing is mutated in place.

use crate::models::production_calendar::{CalendarPolarity, ProductionCalendar};
use chrono::{Datelike, NaiveDate};
use std::collections::HashMap;

/// One year of a production calendar, ready for lookups.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CalendarYear {
    year: i32,
    polarity: CalendarPolarity,
    masks: [u32; 12],
}

impl CalendarYear {
    pub fn new(calendar: &ProductionCalendar, polarity: CalendarPolarity) -> Self {
        let mut masks = [0u32; 12];

        for (mask, days) in masks.iter_mut().zip(calendar.months.iter()) {
            for &day in days {
                if (1..=31).contains(&day) {
                    *mask |= 1 << day;
                } else {
                    log::debug!("calendar {}: ignoring day number {}", calendar.year, day);
                }
            }
        }

        Self {
            year: calendar.year,
            polarity,
            masks,
        }
    }

    /// Days outside this calendar's year never count.
    pub fn is_business_day(&self, date: NaiveDate) -> bool {
        if date.year() != self.year {
            return false;
        }
        let mask = self.masks[date.month0() as usize];
        let listed = mask & (1 << date.day()) != 0;
        self.polarity.counts(listed)
    }
}

/// All known calendar years, looked up by year.
#[derive(Debug, Clone, Default)]
pub struct CalendarSet {
    years: HashMap<i32, CalendarYear>,
}

impl CalendarSet {
    /// Build the lookup. When a year appears twice the first entry wins.
    pub fn new(calendars: &[ProductionCalendar], polarity: CalendarPolarity) -> Self {
        let mut years = HashMap::with_capacity(calendars.len());

        for cal in calendars {
            if years.contains_key(&cal.year) {
                log::debug!("duplicate calendar for {}, keeping the first one", cal.year);
                continue;
            }
            years.insert(cal.year, CalendarYear::new(cal, polarity));
        }

        Self { years }
    }

    pub fn year(&self, year: i32) -> Option<&CalendarYear> {
        self.years.get(&year)
    }
}

/// Count business days in the inclusive range `[start, end]` against a single
/// calendar year. Returns 0 when `end < start`.
pub fn count_business_days(start: NaiveDate, end: NaiveDate, calendar: &CalendarYear) -> u32 {
    if end < start {
        return 0;
    }

    start
        .iter_days()
        .take_while(|d| *d <= end)
        .filter(|d| calendar.is_business_day(*d))
        .count() as u32
}

/// Count business days in `[start, end]`, splitting the range per calendar
/// year. A year with no calendar contributes zero.
pub fn count_business_days_in(start: NaiveDate, end: NaiveDate, calendars: &CalendarSet) -> u32 {
    if end < start {
        return 0;
    }

    (start.year()..=end.year())
        .map(|year| match calendars.year(year) {
            Some(cal) => {
                let (from, to) = year_slice(year, start, end);
                count_business_days(from, to, cal)
            }
            None => {
                log::debug!("no production calendar for {}, counting zero", year);
                0
            }
        })
        .sum()
}

/// Inclusive calendar days in `[start, end]`, 0 when `end < start`.
pub fn count_calendar_days(start: NaiveDate, end: NaiveDate) -> u32 {
    if end < start {
        return 0;
    }
    ((end - start).num_days() + 1) as u32
}

/// Part of `[start, end]` that lies inside `year`.
fn year_slice(year: i32, start: NaiveDate, end: NaiveDate) -> (NaiveDate, NaiveDate) {
    let first = NaiveDate::from_ymd_opt(year, 1, 1).unwrap_or(start);
    let last = NaiveDate::from_ymd_opt(year, 12, 31).unwrap_or(end);
    (start.max(first), end.min(last))
}
