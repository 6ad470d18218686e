use crate::core::aggregate::format_seconds_to_time;
use crate::errors::{AppError, AppResult};
use crate::models::record::{DailyRecord, SaveOutcome};
use crate::store::{KvBackend, RecordStore};
use crate::ui::messages::{info, success};
use chrono::NaiveDate;

/// High-level business logic for the `add` command.
pub struct AddLogic;

impl AddLogic {
    /// Create or update the record for `date`.
    ///
    /// Fields not given on the command line keep the value already stored for
    /// that day (or zero for a new day); the merged record then replaces the
    /// stored one wholesale.
    pub fn apply<B: KvBackend>(
        store: &mut RecordStore<B>,
        date: NaiveDate,
        login_seconds: Option<u64>,
        calls: Option<u32>,
    ) -> AppResult<SaveOutcome> {
        if login_seconds.is_none() && calls.is_none() {
            return Err(AppError::Other(
                "Nothing to save: pass --login and/or --calls.".into(),
            ));
        }

        let base = store
            .record_by_date(date)
            .unwrap_or_else(|| DailyRecord::new(date, 0, 0));

        let record = DailyRecord {
            date,
            login_time_seconds: login_seconds.unwrap_or(base.login_time_seconds),
            call_count: calls.unwrap_or(base.call_count),
        };

        let outcome = store.upsert(record.clone())?;

        match outcome {
            SaveOutcome::Created => success(format!(
                "Record added for {}: login {} | calls {}",
                record.date_str(),
                format_seconds_to_time(record.login_time_seconds),
                record.call_count
            )),
            SaveOutcome::Updated => success(format!(
                "Record updated for {}: login {} | calls {}",
                record.date_str(),
                format_seconds_to_time(record.login_time_seconds),
                record.call_count
            )),
            other => info(format!("Record for {} {}", record.date_str(), other.as_str())),
        }

        Ok(outcome)
    }
}
