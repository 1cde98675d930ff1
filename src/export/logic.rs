// src/export/logic.rs

use crate::errors::{AppError, AppResult};
use crate::export::OutputFormat;
use crate::export::fs_utils::ensure_writable;
use crate::export::json_csv::{export_csv, export_json};
use crate::ui::messages::warning;
use serde::Serialize;
use std::path::Path;

/// High-level writer for CSV / JSON output of engine rows.
pub struct ExportLogic;

impl ExportLogic {
    /// Write `rows` as CSV or JSON, to `out` when given, else to stdout.
    /// Table output is rendered by the command itself and rejected here.
    pub fn write<T: Serialize>(
        rows: &[T],
        format: OutputFormat,
        out: Option<&str>,
        force: bool,
    ) -> AppResult<()> {
        let path = out.map(Path::new);

        if let Some(p) = path {
            ensure_writable(p, force)?;
        }

        if rows.is_empty() {
            warning("No rows to export.");
        }

        match format {
            OutputFormat::Csv => export_csv(rows, path),
            OutputFormat::Json => export_json(rows, path),
            OutputFormat::Table => Err(AppError::Export(format!(
                "{} output cannot be written by the exporter",
                format.as_str()
            ))),
        }
    }
}
