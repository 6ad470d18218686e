//! Record store: the canonical, date-keyed collection of daily records.
//!
//! The whole collection lives in one serialized JSON array under a single
//! storage key. `load` reads it into an ordered in-memory index and every
//! effective write rewrites the full blob through `flush`, newest date first.

pub mod backend;

pub use backend::{FileBackend, KvBackend, MemoryBackend};

use crate::errors::{AppError, AppResult};
use crate::models::month::YearMonth;
use crate::models::record::{DailyRecord, RecordAction, SaveOutcome};
use crate::ui::messages::warning;
use chrono::NaiveDate;
use std::collections::BTreeMap;

/// Storage key used when the configuration does not name one.
pub const DEFAULT_STORAGE_KEY: &str = "dailyRecords";

pub struct RecordStore<B: KvBackend> {
    backend: B,
    key: String,
    records: BTreeMap<NaiveDate, DailyRecord>,
    corrupt: bool,
}

impl<B: KvBackend> RecordStore<B> {
    /// Open the store and load whatever is persisted under `key`.
    pub fn open(backend: B, key: &str) -> AppResult<Self> {
        let mut store = Self {
            backend,
            key: key.to_string(),
            records: BTreeMap::new(),
            corrupt: false,
        };
        store.load()?;
        Ok(store)
    }

    /// Re-read the persisted blob, replacing the in-memory state.
    ///
    /// A missing key is an empty store. A blob that does not parse, or holds a
    /// record that fails validation, leaves the store empty and marked corrupt:
    /// reads keep working, writes are refused.
    pub fn load(&mut self) -> AppResult<()> {
        self.records.clear();
        self.corrupt = false;

        let Some(raw) = self.backend.get(&self.key)? else {
            return Ok(());
        };

        if raw.trim().is_empty() {
            return Ok(());
        }

        let parsed = serde_json::from_str::<Vec<DailyRecord>>(&raw)
            .map_err(|e| e.to_string())
            .and_then(|list| {
                for r in &list {
                    r.validate().map_err(|e| e.to_string())?;
                }
                Ok(list)
            });

        match parsed {
            Ok(list) => {
                for r in list {
                    self.records.insert(r.date, r);
                }
            }
            Err(reason) => {
                warning(format!(
                    "Stored records under '{}' ({}) cannot be read: {}. Treating the store as empty.",
                    self.key,
                    self.backend.describe(),
                    reason
                ));
                self.corrupt = true;
            }
        }

        Ok(())
    }

    /// Persist the full collection, sorted by date descending.
    pub fn flush(&mut self) -> AppResult<()> {
        if self.corrupt {
            return Err(AppError::CorruptStore(self.key.clone()));
        }

        let json = serde_json::to_string(&self.records())?;
        self.backend.set(&self.key, &json)
    }

    /// Apply one write and persist the result before returning.
    pub fn save(&mut self, action: RecordAction) -> AppResult<SaveOutcome> {
        if self.corrupt {
            return Err(AppError::CorruptStore(self.key.clone()));
        }

        let outcome = match action {
            RecordAction::Upsert(record) => {
                record.validate()?;
                match self.records.insert(record.date, record) {
                    Some(_) => SaveOutcome::Updated,
                    None => SaveOutcome::Created,
                }
            }
            RecordAction::Remove(date) => match self.records.remove(&date) {
                Some(_) => SaveOutcome::Removed,
                None => return Ok(SaveOutcome::Unchanged),
            },
        };

        self.flush()?;
        Ok(outcome)
    }

    /// Write with the legacy "deleted" instruction flag.
    pub fn save_record(&mut self, record: DailyRecord, deleted: bool) -> AppResult<SaveOutcome> {
        self.save(RecordAction::from_flagged(record, deleted))
    }

    pub fn upsert(&mut self, record: DailyRecord) -> AppResult<SaveOutcome> {
        self.save(RecordAction::Upsert(record))
    }

    pub fn remove(&mut self, date: NaiveDate) -> AppResult<SaveOutcome> {
        self.save(RecordAction::Remove(date))
    }

    /// All records, newest first.
    pub fn records(&self) -> Vec<DailyRecord> {
        self.records.values().rev().cloned().collect()
    }

    /// Records of one calendar month, newest first. `month0` is zero-based.
    pub fn records_by_month(&self, year: i32, month0: u32) -> Vec<DailyRecord> {
        if month0 > 11 {
            return Vec::new();
        }
        let Some(start) = NaiveDate::from_ymd_opt(year, month0 + 1, 1) else {
            return Vec::new();
        };
        let end = if month0 == 11 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)
        } else {
            NaiveDate::from_ymd_opt(year, month0 + 2, 1)
        };

        match end {
            Some(end) => self
                .records
                .range(start..end)
                .rev()
                .map(|(_, r)| r.clone())
                .collect(),
            None => self
                .records
                .range(start..)
                .rev()
                .map(|(_, r)| r.clone())
                .collect(),
        }
    }

    pub fn records_in(&self, month: YearMonth) -> Vec<DailyRecord> {
        self.records_by_month(month.year, month.month0())
    }

    pub fn record_by_date(&self, date: NaiveDate) -> Option<DailyRecord> {
        self.records.get(&date).cloned()
    }

    /// Distinct `YYYY-MM` prefixes present in the store, newest first.
    pub fn months_with_data(&self) -> Vec<String> {
        let mut months: Vec<String> = Vec::new();
        for r in self.records.values().rev() {
            let key = r.month_key();
            if months.last() != Some(&key) {
                months.push(key);
            }
        }
        months
    }

    /// Default month selection: the most recent month holding a record.
    pub fn latest_month(&self) -> Option<YearMonth> {
        self.records.keys().next_back().map(|d| YearMonth::of(*d))
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn is_corrupt(&self) -> bool {
        self.corrupt
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }
}
