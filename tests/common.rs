#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use chrono::{Datelike, NaiveDate, Weekday};
use rleavecalc::models::category::EventLogCategory;
use rleavecalc::models::employee::Employee;
use rleavecalc::models::event_log::EventLog;
use rleavecalc::models::production_calendar::ProductionCalendar;
use serde_json::json;
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn rlc() -> Command {
    cargo_bin_cmd!("rleavecalc")
}

pub fn d(y: i32, m: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, day).expect("valid date")
}

/// Unique path inside the system temp dir, removed if it already exists
pub fn temp_path(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_rleavecalc.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Calendar listing every Saturday and Sunday of `year` as a day off.
pub fn weekends_calendar(year: i32) -> ProductionCalendar {
    let months = (1..=12)
        .map(|m| {
            d(year, m, 1)
                .iter_days()
                .take_while(|day| day.month() == m)
                .filter(|day| matches!(day.weekday(), Weekday::Sat | Weekday::Sun))
                .map(|day| day.day())
                .collect()
        })
        .collect();
    ProductionCalendar { year, months }
}

pub fn category(id: &str, title: &str, limit: u32) -> EventLogCategory {
    EventLogCategory {
        id: id.to_string(),
        title: title.to_string(),
        color: "#0078d4".to_string(),
        limit,
    }
}

pub fn log(
    id: &str,
    employee: &str,
    category: &str,
    start: NaiveDate,
    end: Option<NaiveDate>,
) -> EventLog {
    EventLog {
        id: id.to_string(),
        employee_id: employee.to_string(),
        employee_name: Some(format!("Name of {}", employee)),
        category_id: category.to_string(),
        start_date: start,
        end_date: end,
        status: "Approved".to_string(),
    }
}

pub fn employee(id: &str, name: &str, employed: NaiveDate) -> Employee {
    Employee {
        id: id.to_string(),
        full_name: name.to_string(),
        employed_date: employed,
    }
}

/// Write a small dataset used by the CLI tests and return its path.
///
/// - E1 "Ivanov Ivan": vacation Mon 2024-01-08..Fri 2024-01-12 (5 business days)
/// - E2 "Petrova Anna": sick leave Thu 2023-12-28..Wed 2024-01-03 (2 + 3 business days)
/// - calendars: weekends only, 2023 and 2024
pub fn write_dataset(name: &str) -> String {
    let path = temp_path(name, "json");
    let ds = json!({
        "employees": [
            { "id": "E2", "full_name": "Petrova Anna", "employed_date": "2022-03-01" },
            { "id": "E1", "full_name": "Ivanov Ivan", "employed_date": "2023-01-01" }
        ],
        "categories": [
            { "id": "vac", "title": "Vacation", "color": "#00a000", "limit": 20 },
            { "id": "sick", "title": "Sick leave", "color": "#a00000", "limit": 0 }
        ],
        "event_logs": [
            {
                "id": "L1", "employee_id": "E1", "employee_name": "Ivanov Ivan",
                "category_id": "vac", "start_date": "2024-01-08", "end_date": "2024-01-12",
                "status": "Approved"
            },
            {
                "id": "L2", "employee_id": "E2", "employee_name": "Petrova Anna",
                "category_id": "sick", "start_date": "2023-12-28", "end_date": "2024-01-03",
                "status": "Pending"
            }
        ],
        "calendars": [weekends_calendar(2023), weekends_calendar(2024)]
    });
    fs::write(&path, serde_json::to_string_pretty(&ds).expect("serialize")).expect("write dataset");
    path
}
