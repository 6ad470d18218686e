//! The daily record entity and the write actions the store understands.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Seconds in a calendar day: the upper bound for a single day's login time.
pub const SECONDS_PER_DAY: u64 = 86_400;

/// One day of work: how long the user was logged in and how many calls they handled.
///
/// Persisted as `{ "date": "YYYY-MM-DD", "loginTimeSeconds": n, "callCount": n }`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DailyRecord {
    pub date: NaiveDate,
    pub login_time_seconds: u64,
    pub call_count: u32,
}

impl DailyRecord {
    pub fn new(date: NaiveDate, login_time_seconds: u64, call_count: u32) -> Self {
        Self {
            date,
            login_time_seconds,
            call_count,
        }
    }

    /// Canonical `YYYY-MM-DD` form of the record date.
    pub fn date_str(&self) -> String {
        self.date.format("%Y-%m-%d").to_string()
    }

    /// `YYYY-MM` prefix of the record date.
    pub fn month_key(&self) -> String {
        self.date.format("%Y-%m").to_string()
    }

    /// Boundary checks applied before a record reaches storage.
    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.login_time_seconds > SECONDS_PER_DAY {
            return Err(ValidationError::LoginTimeOutOfRange {
                date: self.date_str(),
                seconds: self.login_time_seconds,
            });
        }
        Ok(())
    }
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("login time for {date} is {seconds}s, more than a full day (86400s)")]
    LoginTimeOutOfRange { date: String, seconds: u64 },

    #[error("{field} component {value} must be below 60")]
    ComponentOutOfRange { field: &'static str, value: u64 },

    #[error("call count '{0}' is not a non-negative integer")]
    InvalidCallCount(String),
}

/// A write against the record store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordAction {
    /// Create the record for its date, or replace the existing one wholesale.
    Upsert(DailyRecord),
    /// Drop the record for a date. Removing a missing date is a no-op.
    Remove(NaiveDate),
}

impl RecordAction {
    /// Maps a legacy "record + deleted flag" write onto an explicit action.
    pub fn from_flagged(record: DailyRecord, deleted: bool) -> Self {
        if deleted {
            RecordAction::Remove(record.date)
        } else {
            RecordAction::Upsert(record)
        }
    }
}

/// What a call to `RecordStore::save` actually did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SaveOutcome {
    Created,
    Updated,
    Removed,
    Unchanged,
}

impl SaveOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            SaveOutcome::Created => "created",
            SaveOutcome::Updated => "updated",
            SaveOutcome::Removed => "removed",
            SaveOutcome::Unchanged => "unchanged",
        }
    }
}
