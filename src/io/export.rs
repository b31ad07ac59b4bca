//! Render and export distance records.
//!
//! The export is meant to be easy to consume in spreadsheets or downstream scripts.
//! The file extension picks the format: `.json` writes JSON, anything else CSV.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use serde::Serialize;
use tracing::info;

use crate::domain::{CheckReport, DistanceRecord};
use crate::error::AppError;

/// Render records as CSV (with header row).
pub fn render_csv(records: &[DistanceRecord]) -> Result<String, AppError> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    for r in records {
        writer
            .serialize(r)
            .map_err(|e| AppError::io(format!("Failed to write CSV row: {e}")))?;
    }
    let bytes = writer
        .into_inner()
        .map_err(|e| AppError::io(format!("Failed to flush CSV: {e}")))?;
    String::from_utf8(bytes).map_err(|e| AppError::io(format!("CSV output is not UTF-8: {e}")))
}

/// Render any serializable value as pretty JSON.
pub fn render_json<T: Serialize + ?Sized>(value: &T) -> Result<String, AppError> {
    serde_json::to_string_pretty(value)
        .map_err(|e| AppError::io(format!("Failed to write JSON: {e}")))
}

/// Write records to `path` as CSV or JSON.
pub fn write_records(path: &Path, records: &[DistanceRecord]) -> Result<(), AppError> {
    let body = if is_json_path(path) {
        render_json(records)?
    } else {
        render_csv(records)?
    };
    write_file(path, &body)?;
    info!(path = %path.display(), records = records.len(), "exported results");
    Ok(())
}

/// Write a check report to `path` as JSON.
pub fn write_check_report(path: &Path, report: &CheckReport) -> Result<(), AppError> {
    write_file(path, &render_json(report)?)?;
    info!(path = %path.display(), "exported check report");
    Ok(())
}

fn write_file(path: &Path, body: &str) -> Result<(), AppError> {
    let mut file = File::create(path).map_err(|e| {
        AppError::io(format!("Failed to create export file '{}': {e}", path.display()))
    })?;
    file.write_all(body.as_bytes()).map_err(|e| {
        AppError::io(format!("Failed to write export file '{}': {e}", path.display()))
    })?;
    if !body.ends_with('\n') {
        writeln!(file).map_err(|e| AppError::io(format!("Failed to write export file: {e}")))?;
    }
    Ok(())
}

fn is_json_path(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .is_some_and(|e| e.eq_ignore_ascii_case("json"))
}
