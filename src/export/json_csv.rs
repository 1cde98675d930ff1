// src/export/json_csv.rs

use crate::errors::AppResult;
use crate::export::notify_export_success;
use serde::Serialize;
use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

/// JSON pretty-printed, to a file or stdout.
pub(crate) fn export_json<T: Serialize>(rows: &[T], path: Option<&Path>) -> AppResult<()> {
    let json_data = serde_json::to_string_pretty(rows)?;

    match path {
        Some(p) => {
            let mut file = File::create(p)?;
            file.write_all(json_data.as_bytes())?;
            notify_export_success("JSON", p);
        }
        None => println!("{}", json_data),
    }
    Ok(())
}

/// CSV with the header derived from the row type, to a file or stdout.
pub(crate) fn export_csv<T: Serialize>(rows: &[T], path: Option<&Path>) -> AppResult<()> {
    match path {
        Some(p) => {
            let mut wtr = csv::Writer::from_path(p)?;
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
            notify_export_success("CSV", p);
        }
        None => {
            let mut wtr = csv::Writer::from_writer(io::stdout());
            for row in rows {
                wtr.serialize(row)?;
            }
            wtr.flush()?;
        }
    }
    Ok(())
}
