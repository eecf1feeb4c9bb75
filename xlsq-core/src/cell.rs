// xlsq-core/src/cell.rs
//! Text rendering of individual cells.

use calamine::{Data, ExcelDateTime};
use chrono::Timelike;

/// Renders a cell the way it is shown and searched.
///
/// Whole floats drop their fractional part (`42.0` becomes `42`), date-times
/// are printed as `YYYY-MM-DD` when they fall on midnight and with the time
/// of day otherwise.
pub fn format_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        Data::String(s) => s.clone(),
        Data::Float(f) => format_float(*f),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        Data::Error(e) => format!("ERROR: {e:?}"),
        Data::DateTime(dt) => format_datetime(dt),
        Data::DateTimeIso(s) | Data::DurationIso(s) => s.clone(),
    }
}

fn format_float(f: f64) -> String {
    if f.is_finite() && f.fract() == 0.0 && f.abs() < i64::MAX as f64 {
        format!("{}", f as i64)
    } else {
        format!("{f}")
    }
}

fn format_datetime(dt: &ExcelDateTime) -> String {
    // Durations have no calendar date, show the serial value.
    if dt.is_duration() {
        return format_float(dt.as_f64());
    }
    match dt.as_datetime() {
        Some(ndt) if ndt.time().num_seconds_from_midnight() == 0 => {
            ndt.format("%Y-%m-%d").to_string()
        }
        Some(ndt) => ndt.format("%Y-%m-%d %H:%M:%S").to_string(),
        None => format_float(dt.as_f64()),
    }
}
