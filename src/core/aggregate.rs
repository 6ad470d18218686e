//! Pure aggregation over a slice of daily records: totals, averages, salary,
//! and the `HH:MM:SS` duration codec the views share.

use crate::errors::{AppError, AppResult};
use crate::models::record::DailyRecord;
use crate::models::salary::{SalaryBreakdown, SalaryRules};
use regex::Regex;
use std::sync::LazyLock;

static HMS_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\s*(\d+):(\d+):(\d+)\s*$").expect("static regex is valid")
});

pub fn total_login_time(records: &[DailyRecord]) -> u64 {
    records.iter().map(|r| r.login_time_seconds).sum()
}

pub fn total_calls(records: &[DailyRecord]) -> u64 {
    records.iter().map(|r| u64::from(r.call_count)).sum()
}

/// Floor of the mean login time; 0 for an empty slice.
pub fn average_login_time(records: &[DailyRecord]) -> u64 {
    if records.is_empty() {
        return 0;
    }
    total_login_time(records) / records.len() as u64
}

/// Mean calls per day rounded to one decimal; 0.0 for an empty slice.
pub fn average_calls(records: &[DailyRecord]) -> f64 {
    if records.is_empty() {
        return 0.0;
    }
    let avg = total_calls(records) as f64 / records.len() as f64;
    (avg * 10.0).round() / 10.0
}

/// Render a duration as `HH:MM:SS`. Hours are not wrapped at 24.
pub fn format_seconds_to_time(total_seconds: u64) -> String {
    let hours = total_seconds / 3600;
    let minutes = (total_seconds % 3600) / 60;
    let seconds = total_seconds % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}

/// Parse `H:M:S` into seconds as `H*3600 + M*60 + S`.
///
/// Components need not be two digits and minutes/seconds above 59 are
/// accepted as-is (`"01:90:00"` is 9000). See `utils::time::parse_login_time`
/// for the strict form.
pub fn parse_time_to_seconds(text: &str) -> AppResult<u64> {
    let (h, m, s) = split_hms(text)?;

    h.checked_mul(3600)
        .and_then(|v| v.checked_add(m.checked_mul(60)?))
        .and_then(|v| v.checked_add(s))
        .ok_or_else(|| AppError::InvalidTime(text.to_string()))
}

/// Split `H:M:S` into its three numeric components.
pub(crate) fn split_hms(text: &str) -> AppResult<(u64, u64, u64)> {
    let invalid = || AppError::InvalidTime(text.to_string());
    let caps = HMS_RE.captures(text).ok_or_else(invalid)?;

    let part = |i: usize| -> AppResult<u64> { caps[i].parse::<u64>().map_err(|_| invalid()) };

    Ok((part(1)?, part(2)?, part(3)?))
}

/// Salary under the default pay rules.
pub fn calculate_salary(records: &[DailyRecord]) -> SalaryBreakdown {
    calculate_salary_with(records, &SalaryRules::default())
}

/// `base = calls * rate`; the bonus applies once both the call and the
/// login-hour thresholds are reached.
pub fn calculate_salary_with(records: &[DailyRecord], rules: &SalaryRules) -> SalaryBreakdown {
    let calls = total_calls(records);
    let hours = total_login_time(records) as f64 / 3600.0;

    let base_salary = calls as f64 * rules.rate_per_call;
    let bonus = if calls >= rules.bonus_min_calls && hours >= rules.bonus_min_hours {
        rules.bonus_amount
    } else {
        0.0
    };

    SalaryBreakdown {
        base_salary,
        bonus,
        total_salary: base_salary + bonus,
    }
}
