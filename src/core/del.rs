use crate::errors::{AppError, AppResult};
use crate::models::record::SaveOutcome;
use crate::store::{KvBackend, RecordStore};
use chrono::NaiveDate;

pub struct DeleteLogic;

impl DeleteLogic {
    pub fn apply<B: KvBackend>(store: &mut RecordStore<B>, date: NaiveDate) -> AppResult<()> {
        let date_str = date.format("%Y-%m-%d").to_string();

        match store.remove(date)? {
            SaveOutcome::Removed => Ok(()),
            _ => Err(AppError::RecordNotFound(date_str)),
        }
    }
}
