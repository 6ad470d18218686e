// src/export/excel_date.rs

use crate::core::aggregate::split_hms;
use chrono::NaiveDate;

/// Interpret a report cell as an Excel date or duration.
///
/// Returns the Excel number format plus the serial value:
/// - `YYYY-MM-DD` → days since the Excel epoch
/// - `H:M:S` → fraction of a day, formatted `[h]:mm:ss` so totals over
///   24 hours are not wrapped
pub(crate) fn parse_to_excel_value(s: &str) -> Option<(&'static str, f64)> {
    if let Ok(d) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
        return Some(("yyyy-mm-dd", date_to_excel_serial(&d)));
    }

    if let Ok((h, m, sec)) = split_hms(s) {
        let seconds = (h * 3600 + m * 60 + sec) as f64;
        return Some(("[h]:mm:ss", seconds / 86400.0));
    }

    None
}

fn date_to_excel_serial(d: &NaiveDate) -> f64 {
    let excel_epoch = NaiveDate::from_ymd_opt(1899, 12, 30).unwrap_or(NaiveDate::MIN);
    (*d - excel_epoch).num_days() as f64
}
