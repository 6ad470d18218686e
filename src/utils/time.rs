//! CLI-facing parsing of login durations and call counts.

use crate::core::aggregate::split_hms;
use crate::errors::AppResult;
use crate::models::record::{SECONDS_PER_DAY, ValidationError};

/// Strict `H:M:S` parsing for user input: minutes and seconds must be below 60
/// and the total must fit in one day.
pub fn parse_login_time(s: &str) -> AppResult<u64> {
    let (h, m, sec) = split_hms(s)?;

    if m >= 60 {
        return Err(ValidationError::ComponentOutOfRange {
            field: "minutes",
            value: m,
        }
        .into());
    }
    if sec >= 60 {
        return Err(ValidationError::ComponentOutOfRange {
            field: "seconds",
            value: sec,
        }
        .into());
    }

    let total = h.saturating_mul(3600).saturating_add(m * 60 + sec);
    if total > SECONDS_PER_DAY {
        return Err(ValidationError::LoginTimeOutOfRange {
            date: "input".to_string(),
            seconds: total,
        }
        .into());
    }

    Ok(total)
}

pub fn parse_optional_login_time(input: Option<&String>) -> AppResult<Option<u64>> {
    input.map(|s| parse_login_time(s)).transpose()
}

pub fn parse_call_count(s: &str) -> AppResult<u32> {
    s.trim()
        .parse::<u32>()
        .map_err(|_| ValidationError::InvalidCallCount(s.to_string()).into())
}
