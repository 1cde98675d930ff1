use chrono::{Datelike, NaiveDate};

/// Today's local date. Only the CLI layer reads the clock; the engine takes
/// dates and years as parameters.
pub fn today() -> NaiveDate {
    chrono::Local::now().date_naive()
}

pub fn current_year() -> i32 {
    today().year()
}

pub fn format_date(d: NaiveDate, fmt: &str) -> String {
    d.format(fmt).to_string()
}

/// Open end dates render as "--".
pub fn format_opt_date(d: Option<NaiveDate>, fmt: &str) -> String {
    d.map(|d| format_date(d, fmt))
        .unwrap_or_else(|| "--".to_string())
}
