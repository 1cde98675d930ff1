use predicates::prelude::PredicateBooleanExt;
use predicates::str::contains;
use std::fs;

mod common;
use common::{rlc, temp_path, write_dataset};

/// Config path that never exists, so every run uses defaults.
fn no_config(name: &str) -> String {
    temp_path(&format!("{}_noconf", name), "conf")
}

#[test]
fn test_items_json() {
    let data = write_dataset("cli_items_json");
    let conf = no_config("cli_items_json");

    rlc()
        .args(["--config", &conf, "--data", &data, "items", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"key\": \"L1\""))
        .stdout(contains("\"days_count\": 5"))
        .stdout(contains("\"category_title\": \"Sick leave\""));
}

#[test]
fn test_items_table_for_one_employee() {
    let data = write_dataset("cli_items_table");
    let conf = no_config("cli_items_table");

    rlc()
        .args([
            "--config", &conf, "--data", &data, "items", "--employee", "E1", "--name", "I. Ivanov",
        ])
        .assert()
        .success()
        .stdout(contains("I. Ivanov"))
        .stdout(contains("Vacation"))
        .stdout(contains("Petrova").not());
}

#[test]
fn test_limits_table() {
    let data = write_dataset("cli_limits_table");
    let conf = no_config("cli_limits_table");

    rlc()
        .args([
            "--config", &conf, "--data", &data, "limits", "--employee", "E1", "--year", "2024",
        ])
        .assert()
        .success()
        .stdout(contains("Ivanov Ivan (2024)"))
        .stdout(contains("15"))
        .stdout(contains("n/a"));
}

#[test]
fn test_limits_csv_file() {
    let data = write_dataset("cli_limits_csv");
    let conf = no_config("cli_limits_csv");
    let out = temp_path("cli_limits_csv_out", "csv");

    rlc()
        .args([
            "--config", &conf, "--data", &data, "limits", "--employee", "E2", "--year", "2024",
            "--format", "csv", "--out", &out,
        ])
        .assert()
        .success()
        .stdout(contains("CSV export completed"));

    let content = fs::read_to_string(&out).expect("read exported csv");
    assert!(content.starts_with("key,full_name,category_title,used_in_current_year,rest"));
    assert!(content.contains("sick_Petrova Anna,Petrova Anna,Sick leave,3,"));
    assert!(content.contains("vac_Petrova Anna,Petrova Anna,Vacation,0,20"));
}

#[test]
fn test_existing_output_needs_force() {
    let data = write_dataset("cli_force");
    let conf = no_config("cli_force");
    let out = temp_path("cli_force_out", "json");
    fs::write(&out, "keep me").expect("seed file");

    rlc()
        .args([
            "--config", &conf, "--data", &data, "items", "--format", "json", "--out", &out,
        ])
        .assert()
        .failure()
        .stderr(contains("--force"));
    assert_eq!(fs::read_to_string(&out).unwrap(), "keep me");

    rlc()
        .args([
            "--config", &conf, "--data", &data, "items", "--format", "json", "--out", &out, "-f",
        ])
        .assert()
        .success();
    assert!(fs::read_to_string(&out).unwrap().contains("\"L1\""));
}

#[test]
fn test_unknown_employee_fails() {
    let data = write_dataset("cli_unknown_employee");
    let conf = no_config("cli_unknown_employee");

    rlc()
        .args(["--config", &conf, "--data", &data, "limits", "--employee", "NOPE"])
        .assert()
        .failure()
        .stderr(contains("Employee not found: NOPE"));
}

#[test]
fn test_report_limits_csv() {
    let data = write_dataset("cli_report_limits");
    let conf = no_config("cli_report_limits");

    rlc()
        .args([
            "--config", &conf, "--data", &data, "report-limits", "--year", "2024", "--format",
            "csv",
        ])
        .assert()
        .success()
        .stdout(contains("employee_id,full_name,employed_date,experience"))
        .stdout(contains("E1,Ivanov Ivan,2023-01-01"))
        .stdout(contains("E2,Petrova Anna,2022-03-01"));
}

#[test]
fn test_overview_period() {
    let data = write_dataset("cli_overview");
    let conf = no_config("cli_overview");

    rlc()
        .args([
            "--config", &conf, "--data", &data, "overview", "--period", "2023-12", "--format",
            "json",
        ])
        .assert()
        .success()
        .stdout(contains("\"days\": 2"))
        .stdout(contains("\"days\": 5").not());
}

#[test]
fn test_overview_invalid_period() {
    let data = write_dataset("cli_overview_bad");
    let conf = no_config("cli_overview_bad");

    rlc()
        .args(["--config", &conf, "--data", &data, "overview", "--period", "2024-13"])
        .assert()
        .failure()
        .stderr(contains("Invalid period"));
}

#[test]
fn test_calendar_import_to_stdout() {
    let csv_path = temp_path("cli_calendar", "csv");
    let conf = no_config("cli_calendar");
    let mut content = String::from("Год/Месяц,Январь,Февраль,Март,Апрель,Май,Июнь,Июль,Август,Сентябрь,Октябрь,Ноябрь,Декабрь\n");
    content.push_str("2025,\"1,2,3,4,5,6,7,8,11,12,18,19,25,26\",\"1,2,8,9,15,16,22,23\",\"1,2,7*,8,9,15,16,22,23,29,30\",\"5,6,12,13,19,20,26,27,29*\",\"1,2,3,4,8,9,10,11,17,18,24,25,31\",\"1,7,8,11*,12,13,14,15,21,22,28,29\",\"5,6,12,13,19,20,26,27\",\"2,3,9,10,16,17,23,24,30,31\",\"6,7,13,14,20,21,27,28\",\"4,5,11,12,18,19,25,26\",\"1*,2,3,4,8,9,15,16,22,23,29,30\",\"6,7,13,14,20,21,27,28,31\"\n");
    fs::write(&csv_path, content).expect("write csv");

    rlc()
        .args(["--config", &conf, "calendar", "--file", &csv_path])
        .assert()
        .success()
        .stdout(contains("\"year\": 2025"));
}

#[test]
fn test_init_test_mode_and_config_print() {
    let conf = no_config("cli_init");

    rlc()
        .args(["--config", &conf, "--test", "init"])
        .assert()
        .success()
        .stdout(contains("Test mode"));
    assert!(!std::path::Path::new(&conf).exists());

    rlc()
        .args(["--config", &conf, "config", "--print"])
        .assert()
        .success()
        .stdout(contains("calendar_polarity: days_off"))
        .stdout(contains("unconfirmed_title: Unconfirmed"));
}

#[test]
fn test_init_writes_config_and_polarity_is_honoured() {
    let conf = temp_path("cli_init_write", "conf");
    let data = write_dataset("cli_init_write");

    rlc()
        .args(["--config", &conf, "init"])
        .assert()
        .success();
    let written = fs::read_to_string(&conf).expect("config written");
    assert!(written.contains("calendar_polarity: days_off"));

    // same weekend lists read as working days: Mon-Fri 2024-01-08..12 counts zero
    fs::write(&conf, written.replace("days_off", "working_days")).expect("rewrite config");

    rlc()
        .args(["--config", &conf, "--data", &data, "items", "--employee", "E1", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"days_count\": 0"));
}

#[test]
fn test_overview_names_from_employee_records_and_bad_calendar() {
    let conf = no_config("cli_overview_names");
    let data = temp_path("cli_overview_names", "json");
    let ds = serde_json::json!({
        "employees": [
            { "id": "E1", "full_name": "Ivanov Ivan", "employed_date": "2023-01-01" }
        ],
        "categories": [{ "id": "vac", "title": "", "limit": 20 }],
        "event_logs": [
            { "id": "L1", "employee_id": "E1", "category_id": "vac", "start_date": "2024-01-08" }
        ],
        "calendars": [common::weekends_calendar(2024)]
    });
    fs::write(&data, ds.to_string()).expect("write dataset");

    rlc()
        .args(["--config", &conf, "--data", &data, "overview", "--format", "json"])
        .assert()
        .success()
        .stdout(contains("\"full_name\": \"Ivanov Ivan\""))
        .stdout(contains("\"category_title\": \"Unconfirmed\""));

    let broken = temp_path("cli_bad_calendar", "json");
    let ds = serde_json::json!({ "calendars": [{ "year": 2024, "months": [[6, 7]] }] });
    fs::write(&broken, ds.to_string()).expect("write dataset");

    rlc()
        .args(["--config", &conf, "--data", &broken, "overview"])
        .assert()
        .failure()
        .stderr(contains("Invalid production calendar"));
}
