//! Period parsing for `--period`.

use crate::errors::{AppError, AppResult};
use chrono::{Months, NaiveDate};

/// Parse a period into an inclusive date range. `all` means no bounds.
///
/// Supports:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub fn parse_period(p: &str) -> AppResult<Option<(NaiveDate, NaiveDate)>> {
    let p = p.trim();
    if p.eq_ignore_ascii_case("all") {
        return Ok(None);
    }

    let (start, end) = match p.split_once(':') {
        Some((s, e)) => {
            let (s, e) = (s.trim(), e.trim());
            if s.len() != e.len() {
                return Err(invalid(p, "start and end must have same format"));
            }
            (bounds(s, p)?.0, bounds(e, p)?.1)
        }
        None => bounds(p, p)?,
    };

    if end < start {
        return Err(invalid(p, "end is before start"));
    }
    Ok(Some((start, end)))
}

/// First and last day covered by a single YYYY / YYYY-MM / YYYY-MM-DD token.
fn bounds(token: &str, whole: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    match token.len() {
        // YYYY
        4 => {
            let y: i32 = token.parse().map_err(|_| invalid(whole, "invalid year"))?;
            let first =
                NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| invalid(whole, "invalid year"))?;
            let last =
                NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| invalid(whole, "invalid year"))?;
            Ok((first, last))
        }
        // YYYY-MM
        7 => {
            let first = NaiveDate::parse_from_str(&format!("{}-01", token), "%Y-%m-%d")
                .map_err(|_| invalid(whole, "invalid month"))?;
            let last = first
                .checked_add_months(Months::new(1))
                .and_then(|d| d.pred_opt())
                .ok_or_else(|| invalid(whole, "invalid month"))?;
            Ok((first, last))
        }
        // YYYY-MM-DD
        10 => {
            let d = NaiveDate::parse_from_str(token, "%Y-%m-%d")
                .map_err(|_| invalid(whole, "invalid date"))?;
            Ok((d, d))
        }
        _ => Err(invalid(whole, "unsupported format")),
    }
}

fn invalid(p: &str, why: &str) -> AppError {
    AppError::InvalidPeriod(format!("{} ({})", p, why))
}
